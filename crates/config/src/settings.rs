//! Configuration settings structures

use serde::{Deserialize, Serialize};

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	pub transport: TransportSettings,
	pub timeouts: TimeoutSettings,
	pub logging: LoggingSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

impl ServerSettings {
	/// The `host:port` string to bind the listener to
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.host, self.port)
	}
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 8080,
		}
	}
}

/// Outbound transport configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TransportSettings {
	/// Pass-through relay base for providers that reject direct client-origin
	/// calls. The absolute target URL is percent-encoded and appended. Unset
	/// means adapters call providers directly.
	pub proxy_base: Option<String>,
	/// Base URL of the scrape-extraction microservice that serves the
	/// providers requiring full browser automation.
	pub extractor_base: String,
}

impl TransportSettings {
	/// Default relay endpoint
	pub const DEFAULT_PROXY_BASE: &'static str = "https://corsproxy.io/?";
	/// Default extraction microservice endpoint
	pub const DEFAULT_EXTRACTOR_BASE: &'static str = "https://fx-fetcher.onrender.com";
}

impl Default for TransportSettings {
	fn default() -> Self {
		Self {
			proxy_base: Some(Self::DEFAULT_PROXY_BASE.to_string()),
			extractor_base: Self::DEFAULT_EXTRACTOR_BASE.to_string(),
		}
	}
}

/// Timeout configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TimeoutSettings {
	/// Per-provider timeout in milliseconds. An adapter still in flight when
	/// this elapses resolves to an empty slot; it never stalls the batch join.
	pub per_provider_ms: u64,
}

impl Default for TimeoutSettings {
	fn default() -> Self {
		Self {
			per_provider_ms: 8_000,
		}
	}
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
		}
	}
}
