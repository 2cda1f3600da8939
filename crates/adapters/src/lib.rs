//! Remit Adapters
//!
//! Provider-specific adapters for the remittance rate aggregator. Each
//! adapter speaks one provider's wire protocol behind the uniform
//! [`ProviderAdapter`] capability; the registry fixes the process-wide
//! registration order that batch ordering is derived from.

pub mod extractor;
pub mod paysend;
pub mod profee;
pub mod remitly;
pub mod ria;
pub mod sendwave;
pub mod taptap;
pub mod transfergo;
pub mod transport;
pub mod wise;
pub mod worldremit;
pub mod xe;

pub use extractor::{ExtractorAdapter, ExtractorClient};
pub use paysend::PaysendAdapter;
pub use profee::ProfeeAdapter;
pub use remitly::RemitlyAdapter;
pub use remit_types::{AdapterError, AdapterResult, ProviderAdapter};
pub use ria::RiaAdapter;
pub use sendwave::SendWaveAdapter;
pub use taptap::TapTapAdapter;
pub use transfergo::TransferGoAdapter;
pub use transport::ProxyClient;
pub use wise::WiseAdapter;
pub use worldremit::WorldRemitAdapter;
pub use xe::XeAdapter;

/// Ordered collection of registered provider adapters.
///
/// Registration order is the batch order: every aggregation cycle produces
/// one slot per registered adapter, indexed by its position here, regardless
/// of completion order. Read-only after startup.
#[derive(Debug, Default)]
pub struct AdapterRegistry {
	adapters: Vec<Box<dyn ProviderAdapter>>,
}

impl AdapterRegistry {
	pub fn new() -> Self {
		Self {
			adapters: Vec::new(),
		}
	}

	/// Append an adapter; its registration index is its batch slot
	pub fn register(&mut self, adapter: Box<dyn ProviderAdapter>) {
		self.adapters.push(adapter);
	}

	/// Adapters in registration order
	pub fn adapters(&self) -> &[Box<dyn ProviderAdapter>] {
		&self.adapters
	}

	/// Provider display names in registration order
	pub fn provider_names(&self) -> Vec<String> {
		self.adapters.iter().map(|a| a.name().to_string()).collect()
	}

	pub fn len(&self) -> usize {
		self.adapters.len()
	}

	pub fn is_empty(&self) -> bool {
		self.adapters.is_empty()
	}
}

/// Build the production registry: all fourteen providers in their fixed
/// registration order. `proxied` carries calls for providers that reject
/// direct client-origin requests; `extractor` serves the four providers that
/// need browser automation behind the extraction microservice.
pub fn default_registry(proxied: ProxyClient, extractor: ExtractorClient) -> AdapterRegistry {
	let mut registry = AdapterRegistry::new();
	registry.register(Box::new(RemitlyAdapter::new(proxied.clone())));
	registry.register(Box::new(SendWaveAdapter::new(proxied.clone())));
	registry.register(Box::new(TapTapAdapter::new(proxied.clone())));
	registry.register(Box::new(XeAdapter::new(proxied.clone())));
	registry.register(Box::new(RiaAdapter::new(proxied.clone())));
	registry.register(Box::new(PaysendAdapter::new(proxied.clone())));
	registry.register(Box::new(ExtractorAdapter::moneygram(extractor.clone())));
	registry.register(Box::new(ExtractorAdapter::western_union(extractor.clone())));
	registry.register(Box::new(WiseAdapter::new(proxied.clone())));
	registry.register(Box::new(WorldRemitAdapter::new(proxied.clone())));
	registry.register(Box::new(ExtractorAdapter::lemfi(extractor.clone())));
	registry.register(Box::new(TransferGoAdapter::new(proxied.clone())));
	registry.register(Box::new(ProfeeAdapter::new(proxied)));
	registry.register(Box::new(ExtractorAdapter::myeasytransfer(extractor)));
	registry
}
