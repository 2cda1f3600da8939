//! Remit Aggregator Library
//!
//! Compares live remittance exchange rates across money-transfer providers:
//! one request fans out to every registered provider adapter concurrently and
//! comes back as a single, display-ranked batch.

use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

// Core domain types
pub use remit_types::{
	chrono,
	// External dependencies for convenience
	serde_json,
	AdapterError,
	AdapterResult,
	AggregationMetadata,
	AppStoreUrls,
	CurrencyError,
	ProviderAdapter,
	ProviderInfo,
	ProviderQuote,
	QuoteBatch,
	QuoteRequest,
	RateEntry,
	RatesResponse,
	ReceiveCurrency,
	SendCurrency,
};

// Service layer
pub use remit_service::{rank, AggregatorError, AggregatorService, RefreshTracker};

// API layer
pub use remit_api::{create_router, AppState};

// Adapters
pub use remit_adapters::{default_registry, AdapterRegistry, ExtractorClient, ProxyClient};

// Config
pub use remit_config::{init_logging, load_config, Settings};

pub mod mocks;

// Re-export external dependencies for downstream tests and demos
pub use async_trait;
pub use reqwest;

/// Builder assembling the aggregator: settings, adapter registry, router.
#[derive(Default)]
pub struct AggregatorBuilder {
	settings: Option<Settings>,
	registry: Option<AdapterRegistry>,
}

impl AggregatorBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Use explicit settings instead of loading from file and environment
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Replace the default provider set with a custom registry
	pub fn with_registry(mut self, registry: AdapterRegistry) -> Self {
		self.registry = Some(registry);
		self
	}

	/// Register an extra adapter on top of whatever registry is in use.
	/// Builds the default registry first when none was provided.
	pub fn with_adapter(mut self, adapter: Box<dyn ProviderAdapter>) -> Result<Self, AdapterError> {
		let mut registry = match self.registry.take() {
			Some(registry) => registry,
			None => {
				let settings = self.settings.clone().unwrap_or_default();
				Self::build_default_registry(&settings)?
			},
		};
		registry.register(adapter);
		self.registry = Some(registry);
		Ok(self)
	}

	fn build_default_registry(settings: &Settings) -> Result<AdapterRegistry, AdapterError> {
		let proxied = ProxyClient::new(
			settings.timeouts.per_provider_ms,
			settings.transport.proxy_base.clone(),
		)?;
		let extractor = ExtractorClient::new(
			settings.transport.extractor_base.clone(),
			settings.timeouts.per_provider_ms,
		)?;
		Ok(default_registry(proxied, extractor))
	}

	/// Assemble the service stack and return the configured router with its
	/// shared state, without binding a listener.
	pub fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let settings = self.settings.clone().unwrap_or_default();

		let registry = match self.registry {
			Some(registry) => registry,
			None => Self::build_default_registry(&settings)?,
		};
		info!(providers = registry.len(), "adapter registry initialized");

		let aggregator = Arc::new(AggregatorService::new(
			Arc::new(registry),
			settings.timeouts.per_provider_ms,
		));
		let app_state = AppState {
			aggregator,
			refresh_tracker: Arc::new(RefreshTracker::new()),
		};

		let router = create_router().with_state(app_state.clone());
		Ok((router, app_state))
	}

	/// Load configuration, initialize logging, bind the listener and serve
	/// until shutdown.
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		let settings = match self.settings.take() {
			Some(settings) => settings,
			None => load_config().unwrap_or_default(),
		};

		init_logging(&settings.logging);
		info!(
			proxy = settings.transport.proxy_base.as_deref().unwrap_or("direct"),
			extractor = %settings.transport.extractor_base,
			per_provider_timeout_ms = settings.timeouts.per_provider_ms,
			"starting remit aggregator"
		);

		let bind_addr = settings.server.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("invalid bind address '{}': {}", bind_addr, e))?;

		self.settings = Some(settings);
		let (app, _) = self.start()?;

		let listener = tokio::net::TcpListener::bind(addr).await?;
		info!("listening on {}", addr);
		axum::serve(listener, app).await?;

		Ok(())
	}
}
