//! In-process test server for integration tests

use axum::Router;
use remit_aggregator::mocks::{MockFailingAdapter, MockRateAdapter};
use remit_aggregator::{AdapterRegistry, AggregatorBuilder};
use tokio::task::JoinHandle;

/// Test server instance bound to an ephemeral port
pub struct TestServer {
	pub base_url: String,
	pub handle: JoinHandle<()>,
}

impl TestServer {
	/// Spawn a server over a small mixed registry: two resolving providers
	/// and one that always fails.
	pub async fn spawn() -> Result<Self, Box<dyn std::error::Error>> {
		let mut registry = AdapterRegistry::new();
		registry.register(Box::new(MockRateAdapter::new("Alpha Remit", 3.1)));
		registry.register(Box::new(MockFailingAdapter::new("Broken Remit")));
		registry.register(Box::new(MockRateAdapter::new("Beta Remit", 3.3)));

		Self::spawn_with_registry(registry).await
	}

	/// Spawn a server over the given registry
	pub async fn spawn_with_registry(
		registry: AdapterRegistry,
	) -> Result<Self, Box<dyn std::error::Error>> {
		let (app, _state) = AggregatorBuilder::new().with_registry(registry).start()?;
		Self::spawn_server_with_app(app).await
	}

	async fn spawn_server_with_app(app: Router) -> Result<Self, Box<dyn std::error::Error>> {
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;
		let base_url = format!("http://{}:{}", addr.ip(), addr.port());

		let handle = tokio::spawn(async move {
			let _ = axum::serve(listener, app).await;
		});

		// Give the listener a moment to start accepting
		tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

		Ok(Self { base_url, handle })
	}

	#[allow(dead_code)]
	pub fn abort(self) {
		self.handle.abort();
	}
}
