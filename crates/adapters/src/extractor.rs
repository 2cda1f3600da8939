//! Extraction-microservice adapters
//!
//! Four providers cannot be queried with a simple request/response call; a
//! separately hosted helper service drives a full browser against them and
//! exposes the result behind a uniform contract:
//!
//! `GET /<provider-slug>?from_currency=<code>&to_currency=<code>` returning
//! `{"<ProviderLabel>": <rate-or-null>}`.
//!
//! The label keys are provider-specific and must match exactly. From the
//! orchestrator's point of view these adapters are indistinguishable from the
//! direct ones.

use async_trait::async_trait;
use remit_types::{
	rate, AdapterError, AdapterResult, ProviderAdapter, ProviderInfo, QuoteRequest,
	ReceiveCurrency, SendCurrency,
};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Client for the scrape-extraction microservice.
#[derive(Debug, Clone)]
pub struct ExtractorClient {
	client: Client,
	base_url: String,
}

impl ExtractorClient {
	/// Build a client against the given service base URL
	pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> AdapterResult<Self> {
		let client = Client::builder()
			.timeout(Duration::from_millis(timeout_ms))
			.build()?;
		Ok(Self {
			client,
			base_url: base_url.into(),
		})
	}

	/// Fetch one provider's rate through the fixed GET contract and extract
	/// the exact-match label key.
	pub async fn fetch_rate(
		&self,
		slug: &str,
		label: &str,
		source: SendCurrency,
		target: ReceiveCurrency,
	) -> AdapterResult<f64> {
		let url = format!(
			"{}/{}?from_currency={}&to_currency={}",
			self.base_url, slug, source, target
		);
		debug!(%url, "querying extraction service");

		let response = self.client.get(&url).send().await?;
		let status = response.status();
		if !status.is_success() {
			return Err(AdapterError::HttpStatus {
				status: status.as_u16(),
			});
		}

		let body: Value = response.json().await?;
		let raw = body.get(label).ok_or_else(|| AdapterError::parse(label))?;
		rate::normalize(raw).ok_or_else(|| AdapterError::validation(raw))
	}
}

/// Adapter for a provider served through the extraction microservice.
#[derive(Debug)]
pub struct ExtractorAdapter {
	info: ProviderInfo,
	client: ExtractorClient,
	slug: &'static str,
	label: &'static str,
}

impl ExtractorAdapter {
	fn new(
		info: ProviderInfo,
		client: ExtractorClient,
		slug: &'static str,
		label: &'static str,
	) -> Self {
		Self {
			info,
			client,
			slug,
			label,
		}
	}

	/// MoneyGram, extracted by browser automation
	pub fn moneygram(client: ExtractorClient) -> Self {
		Self::new(
			ProviderInfo::new("MoneyGram", "moneygram.com")
				.with_store_ids("com.mgi.moneygram", "id1085720801"),
			client,
			"moneygram",
			"MoneyGram",
		)
	}

	/// Western Union; note the underscored label key
	pub fn western_union(client: ExtractorClient) -> Self {
		Self::new(
			ProviderInfo::new("Western Union", "westernunion.com").with_store_ids(
				"com.westernunion.moneytransferr3app.ca",
				"id1110191056",
			),
			client,
			"wu",
			"Western_Union",
		)
	}

	/// Lemfi's public API sits behind aggressive bot protection, so it is
	/// served by the extraction service as well.
	pub fn lemfi(client: ExtractorClient) -> Self {
		Self::new(
			ProviderInfo::new("Lemfi", "lemfi.com")
				.with_store_ids("com.lemonadeFinance.android", "id1533066809"),
			client,
			"lemfi",
			"Lemfi",
		)
	}

	/// MyEasyTransfer, extracted by browser automation
	pub fn myeasytransfer(client: ExtractorClient) -> Self {
		Self::new(
			ProviderInfo::new("MyEasyTransfer", "myeasytransfer.com")
				.with_logo_override("https://www.myeasytransfer.com/favicon.ico")
				.with_store_ids("com.myeasytransfert", "id1572782943"),
			client,
			"myeasytransfer",
			"MyEasyTransfer",
		)
	}
}

#[async_trait]
impl ProviderAdapter for ExtractorAdapter {
	fn info(&self) -> &ProviderInfo {
		&self.info
	}

	async fn quote(&self, request: &QuoteRequest) -> AdapterResult<f64> {
		self.client
			.fetch_rate(
				self.slug,
				self.label,
				request.source_currency,
				request.target_currency,
			)
			.await
	}
}
