//! Named gateway construction.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::info;

use crate::core::errors::GatewayError;
use crate::core::params::ParameterBag;
use crate::gateway::traits::Gateway;
use crate::http::TransportContext;

type GatewayConstructor = Box<dyn Fn(TransportContext) -> Box<dyn Gateway> + Send + Sync>;

/// Registry mapping gateway names to constructors.
///
/// Adapter crates register one constructor per gateway; applications then
/// create gateways by name at runtime without referencing concrete types.
#[derive(Default)]
pub struct GatewayRegistry {
    constructors: RwLock<HashMap<String, GatewayConstructor>>,
}

impl GatewayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&self, name: impl Into<String>, constructor: F)
    where
        F: Fn(TransportContext) -> Box<dyn Gateway> + Send + Sync + 'static,
    {
        let name = name.into();
        info!("Registering gateway: {}", name);
        self.constructors.write().insert(name, Box::new(constructor));
    }

    /// Constructs the named gateway and initializes it with empty
    /// overrides, seeding whatever defaults the gateway declares.
    ///
    /// # Errors
    /// * `GatewayError::UnknownGateway` - no constructor registered under `name`
    pub fn create(
        &self,
        name: &str,
        context: TransportContext,
    ) -> Result<Box<dyn Gateway>, GatewayError> {
        let constructors = self.constructors.read();
        let constructor = constructors
            .get(name)
            .ok_or_else(|| GatewayError::UnknownGateway(name.to_string()))?;
        let mut gateway = constructor(context);
        gateway.initialize(ParameterBag::new());
        Ok(gateway)
    }

    pub fn names(&self) -> Vec<String> {
        self.constructors.read().keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::base::GatewayBase;
    use crate::http::{HttpClient, ServerRequest};

    #[derive(Debug)]
    struct StubGateway {
        base: GatewayBase,
    }

    impl Gateway for StubGateway {
        fn name(&self) -> &str {
            "Stub"
        }

        fn base(&self) -> &GatewayBase {
            &self.base
        }

        fn base_mut(&mut self) -> &mut GatewayBase {
            &mut self.base
        }

        fn default_parameters(&self) -> ParameterBag {
            let mut defaults = ParameterBag::new();
            defaults.set("currency", "EUR");
            defaults
        }
    }

    fn make_context() -> TransportContext {
        TransportContext::new(
            HttpClient::with_client(reqwest::Client::new()),
            ServerRequest::new("GET", "/"),
        )
    }

    #[test]
    fn create_seeds_declared_defaults() {
        let registry = GatewayRegistry::new();
        registry.register("stub", |context| Box::new(StubGateway { base: GatewayBase::new(context) }));

        let gateway = registry.create("stub", make_context()).unwrap();
        assert_eq!(gateway.name(), "Stub");
        assert_eq!(gateway.currency(), Some("EUR"));
    }

    #[test]
    fn unknown_names_error() {
        let registry = GatewayRegistry::new();
        let err = registry.create("nope", make_context()).unwrap_err();
        match err {
            GatewayError::UnknownGateway(name) => assert_eq!(name, "nope"),
            other => panic!("Expected UnknownGateway, got {:?}", other),
        }
    }

    #[test]
    fn names_lists_registrations() {
        let registry = GatewayRegistry::new();
        registry.register("stub", |context| Box::new(StubGateway { base: GatewayBase::new(context) }));
        assert_eq!(registry.names(), vec!["stub".to_string()]);
    }
}
