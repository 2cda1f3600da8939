//! Remit Types
//!
//! Shared models and traits for the remittance rate aggregator: currency
//! corridors, provider identity, quote models, the adapter contract and its
//! error taxonomy, rate normalization and logo resolution.

pub mod adapters;
pub mod currency;
pub mod logo;
pub mod providers;
pub mod quotes;
pub mod rate;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

// Re-export commonly used types for convenience
pub use adapters::{AdapterError, AdapterResult, ProviderAdapter};

pub use currency::{CurrencyError, ReceiveCurrency, SendCurrency};

pub use providers::{AppStoreUrls, ProviderInfo};

pub use quotes::{
	AggregationMetadata, ProviderQuote, QuoteBatch, QuoteRequest, QuoteValidationError,
	QuoteValidationResult, RateEntry, RatesResponse,
};

pub use logo::logo_url;
pub use rate::{normalize, normalize_str};
