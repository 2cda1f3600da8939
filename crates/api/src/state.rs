use std::sync::Arc;

use remit_service::{AggregatorService, RefreshTracker};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub aggregator: Arc<AggregatorService>,
	pub refresh_tracker: Arc<RefreshTracker>,
}
