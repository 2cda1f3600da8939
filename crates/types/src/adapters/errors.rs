//! Error types for adapter operations
//!
//! Every variant collapses to the same observable outcome at the aggregation
//! boundary: the provider's slot resolves to no rate. The taxonomy exists for
//! diagnostics and logging, not for control flow above the adapter.

use crate::currency::{ReceiveCurrency, SendCurrency};
use thiserror::Error;

/// Adapter operation errors
#[derive(Error, Debug)]
pub enum AdapterError {
	/// Network unreachable, connection refused, TLS failure and friends
	#[error("transport failure: {0}")]
	Transport(#[from] reqwest::Error),

	/// Provider answered with a non-success status
	#[error("HTTP {status}")]
	HttpStatus { status: u16 },

	/// Response body did not carry the expected shape or field
	#[error("response missing expected field: {path}")]
	Parse { path: String },

	/// Extracted value failed rate validation (zero, negative, non-numeric)
	#[error("extracted value failed rate validation: {raw}")]
	Validation { raw: String },

	/// Provider is known not to serve this corridor; no call was issued.
	/// The field is named `send` rather than `source` because thiserror
	/// treats a field named `source` as the error's cause.
	#[error("corridor {send}->{target} not served by this provider")]
	CorridorUnsupported {
		send: SendCurrency,
		target: ReceiveCurrency,
	},

	/// Bounded per-provider timeout elapsed
	#[error("timed out after {timeout_ms}ms")]
	Timeout { timeout_ms: u64 },

	/// Request body could not be serialized
	#[error("serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

/// Result alias for adapter operations
pub type AdapterResult<T> = Result<T, AdapterError>;

impl AdapterError {
	/// Create a parse failure naming the missing field path
	pub fn parse(path: impl Into<String>) -> Self {
		Self::Parse { path: path.into() }
	}

	/// Create a validation failure recording the offending raw value
	pub fn validation(raw: &serde_json::Value) -> Self {
		Self::Validation {
			raw: raw.to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_error_messages_name_the_failure() {
		let err = AdapterError::parse("estimate.exchange_rate.base_rate");
		assert!(err.to_string().contains("estimate.exchange_rate.base_rate"));

		let err = AdapterError::validation(&json!("0"));
		assert!(err.to_string().contains("\"0\""));

		let err = AdapterError::HttpStatus { status: 503 };
		assert_eq!(err.to_string(), "HTTP 503");
	}

	#[test]
	fn test_corridor_error_names_the_pair() {
		let err = AdapterError::CorridorUnsupported {
			send: SendCurrency::USD,
			target: ReceiveCurrency::TND,
		};
		assert!(err.to_string().contains("USD->TND"));
		// A corridor rejection is a plain leaf error, not a wrapper.
		assert!(std::error::Error::source(&err).is_none());
	}
}
