//! HTTP request handlers

pub mod common;
pub mod health;
pub mod rates;

pub use health::health;
pub use rates::{get_latest_rates, post_rates};
