//! Shared handler response types

use serde::{Deserialize, Serialize};

/// Uniform error body for non-success responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
	pub timestamp: i64,
}

impl ErrorResponse {
	pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			error: error.into(),
			message: message.into(),
			timestamp: chrono::Utc::now().timestamp(),
		}
	}
}
