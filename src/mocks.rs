//! Mock adapters for demos and testing
//!
//! Simple in-memory adapters that stand in for real providers: a fixed-rate
//! adapter, a failing one, a configurably slow one and a panicking one. They
//! exercise every fault-isolation path the aggregator has without any
//! network dependency.

use std::time::Duration;

use async_trait::async_trait;

use remit_types::{
	AdapterError, AdapterResult, ProviderAdapter, ProviderInfo, QuoteRequest,
};

/// Adapter that always resolves the same rate
#[derive(Debug)]
pub struct MockRateAdapter {
	info: ProviderInfo,
	rate: f64,
}

impl MockRateAdapter {
	pub fn new(name: impl Into<String>, rate: f64) -> Self {
		Self {
			info: ProviderInfo::unbranded(name),
			rate,
		}
	}

	pub fn with_info(info: ProviderInfo, rate: f64) -> Self {
		Self { info, rate }
	}
}

#[async_trait]
impl ProviderAdapter for MockRateAdapter {
	fn info(&self) -> &ProviderInfo {
		&self.info
	}

	async fn quote(&self, _request: &QuoteRequest) -> AdapterResult<f64> {
		Ok(self.rate)
	}
}

/// Adapter that always fails with a validation error
#[derive(Debug)]
pub struct MockFailingAdapter {
	info: ProviderInfo,
}

impl MockFailingAdapter {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			info: ProviderInfo::unbranded(name),
		}
	}
}

#[async_trait]
impl ProviderAdapter for MockFailingAdapter {
	fn info(&self) -> &ProviderInfo {
		&self.info
	}

	async fn quote(&self, _request: &QuoteRequest) -> AdapterResult<f64> {
		Err(AdapterError::HttpStatus { status: 503 })
	}
}

/// Adapter that sleeps before resolving, for timeout and latency tests
#[derive(Debug)]
pub struct MockSlowAdapter {
	info: ProviderInfo,
	delay: Duration,
	rate: f64,
}

impl MockSlowAdapter {
	pub fn new(name: impl Into<String>, delay: Duration, rate: f64) -> Self {
		Self {
			info: ProviderInfo::unbranded(name),
			delay,
			rate,
		}
	}
}

#[async_trait]
impl ProviderAdapter for MockSlowAdapter {
	fn info(&self) -> &ProviderInfo {
		&self.info
	}

	async fn quote(&self, _request: &QuoteRequest) -> AdapterResult<f64> {
		tokio::time::sleep(self.delay).await;
		Ok(self.rate)
	}
}

/// Adapter whose task panics mid-quote
#[derive(Debug)]
pub struct MockPanickingAdapter {
	info: ProviderInfo,
}

impl MockPanickingAdapter {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			info: ProviderInfo::unbranded(name),
		}
	}
}

#[async_trait]
impl ProviderAdapter for MockPanickingAdapter {
	fn info(&self) -> &ProviderInfo {
		&self.info
	}

	async fn quote(&self, _request: &QuoteRequest) -> AdapterResult<f64> {
		panic!("mock adapter panic");
	}
}
