//! Quote request and batch models

pub mod request;
pub mod response;

pub use request::{QuoteRequest, QuoteValidationError, QuoteValidationResult};
pub use response::{AggregationMetadata, ProviderQuote, QuoteBatch, RateEntry, RatesResponse};
