//! Adapter contract and error taxonomy

pub mod errors;
pub mod traits;

pub use errors::{AdapterError, AdapterResult};
pub use traits::ProviderAdapter;
