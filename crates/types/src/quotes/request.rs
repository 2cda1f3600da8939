//! Quote request model and validation

use crate::currency::{ReceiveCurrency, SendCurrency};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for quote requests
#[derive(Error, Debug)]
pub enum QuoteValidationError {
	#[error("amount must be a positive finite number, got {amount}")]
	InvalidAmount { amount: f64 },
}

/// Result alias for quote request validation
pub type QuoteValidationResult<T> = Result<T, QuoteValidationError>;

/// One corridor request: send `amount` of `source_currency`, pay out in
/// `target_currency`. The product fixes the amount at 1, but adapters accept
/// any positive value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QuoteRequest {
	pub source_currency: SendCurrency,
	pub target_currency: ReceiveCurrency,
	pub amount: f64,
}

impl QuoteRequest {
	/// Create a request for the given corridor and amount
	pub fn new(source: SendCurrency, target: ReceiveCurrency, amount: f64) -> Self {
		Self {
			source_currency: source,
			target_currency: target,
			amount,
		}
	}

	/// Create a unit-amount request, the product's standard shape
	pub fn unit(source: SendCurrency, target: ReceiveCurrency) -> Self {
		Self::new(source, target, 1.0)
	}

	/// Validate the request before it reaches the provider network.
	///
	/// Currencies are closed enums so only the amount can be malformed:
	/// it must be strictly positive and finite.
	pub fn validate(&self) -> QuoteValidationResult<()> {
		if !self.amount.is_finite() || self.amount <= 0.0 {
			return Err(QuoteValidationError::InvalidAmount {
				amount: self.amount,
			});
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_unit_request_is_valid() {
		let request = QuoteRequest::unit(SendCurrency::CAD, ReceiveCurrency::TND);
		assert_eq!(request.amount, 1.0);
		assert!(request.validate().is_ok());
	}

	#[test]
	fn test_non_positive_amounts_rejected() {
		assert!(QuoteRequest::new(SendCurrency::USD, ReceiveCurrency::INR, 0.0)
			.validate()
			.is_err());
		assert!(QuoteRequest::new(SendCurrency::USD, ReceiveCurrency::INR, -5.0)
			.validate()
			.is_err());
		assert!(
			QuoteRequest::new(SendCurrency::USD, ReceiveCurrency::INR, f64::NAN)
				.validate()
				.is_err()
		);
		assert!(
			QuoteRequest::new(SendCurrency::USD, ReceiveCurrency::INR, f64::INFINITY)
				.validate()
				.is_err()
		);
	}

	#[test]
	fn test_request_wire_shape() {
		let request: QuoteRequest = serde_json::from_str(
			r#"{"sourceCurrency":"EUR","targetCurrency":"MAD","amount":1}"#,
		)
		.unwrap();
		assert_eq!(request.source_currency, SendCurrency::EUR);
		assert_eq!(request.target_currency, ReceiveCurrency::MAD);

		// Unknown fields are a client bug, not something to silently accept.
		assert!(serde_json::from_str::<QuoteRequest>(
			r#"{"sourceCurrency":"EUR","targetCurrency":"MAD","amount":1,"extra":true}"#,
		)
		.is_err());
	}
}
