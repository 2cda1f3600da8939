//! Remit Config
//!
//! Settings structures and file loading for the aggregator.

pub mod loader;
pub mod settings;

pub use loader::load_config;
pub use settings::{
	LoggingSettings, ServerSettings, Settings, TimeoutSettings, TransportSettings,
};

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber from logging settings.
///
/// `RUST_LOG` wins over the configured level when set. Safe to call once per
/// process; tests use their own subscribers.
pub fn init_logging(settings: &LoggingSettings) {
	let env_filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(settings.level.clone()));

	tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_target(false)
		.init();
}
