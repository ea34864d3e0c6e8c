use crate::core::errors::GatewayError;
use crate::core::params::ParameterBag;
use crate::gateway::base::GatewayBase;
use crate::request::GatewayRequest;

/// Defines the contract every concrete payment gateway implements.
///
/// Implementations embed a [`GatewayBase`] and surface it through
/// [`base`](Gateway::base) / [`base_mut`](Gateway::base_mut); everything
/// else has a working default. Capability queries advertise `false` until a
/// gateway overrides the ones it actually supports; support is computed per
/// call, never stored.
pub trait Gateway: Send + Sync + std::fmt::Debug {
    /// Human-readable gateway name (e.g. "Sage Pay Direct").
    fn name(&self) -> &str;

    /// Shared gateway state (parameter bag + transport context).
    fn base(&self) -> &GatewayBase;

    fn base_mut(&mut self) -> &mut GatewayBase;

    /// Display identifier: the concrete type's fully-qualified name behind
    /// a leading path separator. Stays correct through `&dyn Gateway`
    /// because the default body is instantiated per implementing type.
    fn short_name(&self) -> String {
        format!("::{}", std::any::type_name::<Self>())
    }

    /// Defaults seeded into the bag by [`initialize`](Gateway::initialize).
    /// The base declares none. A sequence value declares candidates, of
    /// which the first is stored.
    fn default_parameters(&self) -> ParameterBag {
        ParameterBag::new()
    }

    /// Resets the parameter bag from [`default_parameters`](Gateway::default_parameters),
    /// then overlays `overrides` verbatim (unknown keys included). Each
    /// call fully replaces the bag; nothing from prior calls survives.
    fn initialize(&mut self, overrides: ParameterBag) {
        let defaults = self.default_parameters();
        self.base_mut().replace_parameters(&defaults, overrides);
    }

    fn parameters(&self) -> &ParameterBag {
        self.base().parameters()
    }

    fn test_mode(&self) -> bool {
        self.base().test_mode()
    }

    fn set_test_mode(&mut self, test_mode: bool) -> &mut Self
    where
        Self: Sized,
    {
        self.base_mut().set_test_mode(test_mode);
        self
    }

    fn currency(&self) -> Option<&str> {
        self.base().currency()
    }

    fn set_currency(&mut self, currency: &str) -> &mut Self
    where
        Self: Sized,
    {
        self.base_mut().set_currency(currency);
        self
    }

    // Capability queries. Computed per call, never stored.

    fn supports_authorize(&self) -> bool {
        false
    }

    fn supports_complete_authorize(&self) -> bool {
        false
    }

    fn supports_capture(&self) -> bool {
        false
    }

    fn supports_purchase(&self) -> bool {
        false
    }

    fn supports_complete_purchase(&self) -> bool {
        false
    }

    fn supports_refund(&self) -> bool {
        false
    }

    fn supports_void(&self) -> bool {
        false
    }

    fn supports_create_card(&self) -> bool {
        false
    }

    fn supports_delete_card(&self) -> bool {
        false
    }

    fn supports_update_card(&self) -> bool {
        false
    }

    fn supports_accept_notification(&self) -> bool {
        false
    }

    /// Constructs a request sharing this gateway's transport context; the
    /// parameters reach the request exactly as supplied. Intended for
    /// gateway implementations.
    fn create_request<R: GatewayRequest>(
        &self,
        parameters: ParameterBag,
    ) -> Result<R, GatewayError>
    where
        Self: Sized,
    {
        self.base().create_request(parameters)
    }
}
