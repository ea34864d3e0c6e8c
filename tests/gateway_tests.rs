//! tests/gateway_tests.rs
//!
//! Exercises the abstract gateway surface through an in-file mock gateway:
//! - parameter initialization (defaults, enum collapse, override passthrough)
//! - accessor chaining for test mode and currency
//! - capability flags on an unextended gateway
//! - short-name resolution through a trait object
//! - request construction with a shared transport context
//! - registry lookup

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use paygate::core::params::ParameterBag;
use paygate::gateway::{Gateway, GatewayBase, GatewayRegistry};
use paygate::http::{HttpClient, HttpResponse, ServerRequest, TransportContext};
use paygate::request::{GatewayRequest, RequestBase};
use paygate::GatewayError;

#[derive(Debug)]
struct MockGateway {
    base: GatewayBase,
    defaults: ParameterBag,
}

impl MockGateway {
    fn new(context: TransportContext) -> Self {
        Self::with_defaults(context, ParameterBag::new())
    }

    fn with_defaults(context: TransportContext, defaults: ParameterBag) -> Self {
        Self { base: GatewayBase::new(context), defaults }
    }
}

impl Gateway for MockGateway {
    fn name(&self) -> &str {
        "Mock Gateway Implementation"
    }

    fn base(&self) -> &GatewayBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut GatewayBase {
        &mut self.base
    }

    fn default_parameters(&self) -> ParameterBag {
        self.defaults.clone()
    }
}

struct MockRequest {
    base: RequestBase,
}

#[async_trait]
impl GatewayRequest for MockRequest {
    fn create(context: TransportContext, parameters: ParameterBag) -> Result<Self, GatewayError> {
        Ok(Self { base: RequestBase::new(context, parameters) })
    }

    fn parameters(&self) -> &ParameterBag {
        self.base.parameters()
    }

    fn http_client(&self) -> &HttpClient {
        self.base.http_client()
    }

    fn server_request(&self) -> &ServerRequest {
        self.base.server_request()
    }

    fn data(&self) -> Result<Value, GatewayError> {
        Ok(json!({}))
    }

    async fn send_data(&self, _data: Value) -> Result<HttpResponse, GatewayError> {
        Err(GatewayError::InvalidRequest("mock request does not transmit".to_string()))
    }
}

fn make_context() -> TransportContext {
    TransportContext::new(
        HttpClient::with_client(reqwest::Client::new()),
        ServerRequest::new("GET", "/checkout").with_query_param("session", "abc123"),
    )
}

#[test]
fn construct_stores_transport_and_starts_empty() {
    let gateway = MockGateway::new(make_context());

    assert!(gateway.parameters().is_empty());
    assert_eq!(gateway.base().server_request().uri(), "/checkout");
    assert_eq!(gateway.base().server_request().query_param("session"), Some("abc123"));
}

#[test]
fn short_name_reflects_concrete_type_through_trait_object() {
    let gateway = MockGateway::new(make_context());
    let handle: &dyn Gateway = &gateway;

    let short_name = handle.short_name();
    assert!(short_name.starts_with("::"), "missing leading separator: {}", short_name);
    assert!(short_name.ends_with("MockGateway"), "unexpected type name: {}", short_name);
}

#[test]
fn initialize_collapses_enum_defaults_to_first_element() {
    let mut defaults = ParameterBag::new();
    defaults.set("currency", "AUD"); // fixed default
    defaults.set("username", json!(["joe", "fred"])); // enum default

    let mut gateway = MockGateway::with_defaults(make_context(), defaults);
    gateway.initialize(ParameterBag::new());

    let mut expected = ParameterBag::new();
    expected.set("currency", "AUD").set("username", "joe");
    assert_eq!(gateway.parameters(), &expected);
}

#[test]
fn initialize_applies_overrides_and_passes_unknown_keys_through() {
    let mut defaults = ParameterBag::new();
    defaults.set("currency", "AUD");

    let mut overrides = ParameterBag::new();
    overrides.set("currency", "USD").set("unknown", "42");

    let mut gateway = MockGateway::with_defaults(make_context(), defaults);
    gateway.initialize(overrides);

    let mut expected = ParameterBag::new();
    expected.set("currency", "USD").set("unknown", "42");
    assert_eq!(gateway.parameters(), &expected);
}

#[test]
fn initialize_replaces_rather_than_merges() {
    let mut gateway = MockGateway::new(make_context());

    let mut first = ParameterBag::new();
    first.set("apiKey", "k_123");
    gateway.initialize(first);

    gateway.initialize(ParameterBag::new());
    assert!(gateway.parameters().is_empty());
}

#[test]
fn base_declares_no_default_parameters() {
    let gateway = MockGateway::new(make_context());
    assert!(gateway.default_parameters().is_empty());
}

#[test]
fn set_test_mode_writes_an_ordinary_bag_entry() {
    let mut gateway = MockGateway::new(make_context());
    gateway.set_test_mode(true);

    let mut expected = ParameterBag::new();
    expected.set("testMode", true);
    assert_eq!(gateway.parameters(), &expected);
}

#[test]
fn test_mode_and_currency_setters_chain() {
    let mut gateway = MockGateway::new(make_context());
    gateway.set_test_mode(true).set_currency("USD");

    assert!(gateway.test_mode());
    assert_eq!(gateway.currency(), Some("USD"));
}

#[test]
fn unextended_gateway_supports_nothing() {
    let gateway = MockGateway::new(make_context());

    assert!(!gateway.supports_authorize());
    assert!(!gateway.supports_complete_authorize());
    assert!(!gateway.supports_capture());
    assert!(!gateway.supports_purchase());
    assert!(!gateway.supports_complete_purchase());
    assert!(!gateway.supports_refund());
    assert!(!gateway.supports_void());
    assert!(!gateway.supports_create_card());
    assert!(!gateway.supports_delete_card());
    assert!(!gateway.supports_update_card());
    assert!(!gateway.supports_accept_notification());
}

#[test]
fn overridden_capability_queries_are_honored() {
    #[derive(Debug)]
    struct PurchasingGateway {
        base: GatewayBase,
    }

    impl Gateway for PurchasingGateway {
        fn name(&self) -> &str {
            "Purchasing"
        }

        fn base(&self) -> &GatewayBase {
            &self.base
        }

        fn base_mut(&mut self) -> &mut GatewayBase {
            &mut self.base
        }

        fn supports_purchase(&self) -> bool {
            true
        }

        fn supports_refund(&self) -> bool {
            true
        }
    }

    let gateway = PurchasingGateway { base: GatewayBase::new(make_context()) };
    assert!(gateway.supports_purchase());
    assert!(gateway.supports_refund());
    assert!(!gateway.supports_capture());
}

#[test]
fn create_request_passes_parameters_through_unmodified() {
    let gateway = MockGateway::new(make_context());

    let mut parameters = ParameterBag::new();
    parameters.set("currency", "THB");

    let request: MockRequest = gateway.create_request(parameters.clone()).unwrap();
    assert_eq!(request.parameters(), &parameters);
}

#[test]
fn create_request_shares_the_gateway_transport_context() {
    let gateway = MockGateway::new(make_context());
    let request: MockRequest = gateway.create_request(ParameterBag::new()).unwrap();

    // Same client handle, same inbound request allocation.
    assert_eq!(request.http_client(), gateway.base().http_client());
    assert!(std::ptr::eq(request.server_request(), gateway.base().server_request()));
}

#[test]
fn registry_creates_initialized_gateways_by_name() {
    let registry = GatewayRegistry::new();
    registry.register("mock", |context| Box::new(MockGateway::new(context)));

    let gateway = registry.create("mock", make_context()).unwrap();
    assert_eq!(gateway.name(), "Mock Gateway Implementation");
    assert!(gateway.parameters().is_empty());

    match registry.create("missing", make_context()).unwrap_err() {
        GatewayError::UnknownGateway(name) => assert_eq!(name, "missing"),
        other => panic!("Expected UnknownGateway, got {:?}", other),
    }
}
