//! Indirection transport
//!
//! Several providers reject requests that do not originate from their own
//! web properties. For those, an optional pass-through relay forwards the
//! call: the absolute target URL is percent-encoded and appended to the relay
//! base, and the relay returns the target's response unmodified. No business
//! logic lives here; adapters build requests exactly as if calling direct.

use remit_types::{AdapterError, AdapterResult};
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;

/// HTTP client with an optional pass-through relay in front of it.
#[derive(Debug, Clone)]
pub struct ProxyClient {
	client: Client,
	proxy_base: Option<String>,
}

impl ProxyClient {
	/// Build a client with a bounded request timeout and an optional relay
	/// base. Every adapter call inherits the timeout, so a stalled provider
	/// can never hold a batch open indefinitely.
	pub fn new(timeout_ms: u64, proxy_base: Option<String>) -> AdapterResult<Self> {
		let client = Client::builder()
			.timeout(Duration::from_millis(timeout_ms))
			.build()?;
		Ok(Self { client, proxy_base })
	}

	/// Client that calls providers directly, without the relay
	pub fn direct(timeout_ms: u64) -> AdapterResult<Self> {
		Self::new(timeout_ms, None)
	}

	/// GET the target URL, routed through the relay when configured
	pub fn get(&self, target_url: &str) -> RequestBuilder {
		self.client.get(self.route(target_url))
	}

	/// POST to the target URL, routed through the relay when configured
	pub fn post(&self, target_url: &str) -> RequestBuilder {
		self.client.post(self.route(target_url))
	}

	/// Rewrite a target URL for the relay. The full URL, query string
	/// included, must be encoded so the relay sees a single parameter.
	fn route(&self, target_url: &str) -> String {
		match &self.proxy_base {
			Some(base) => {
				let encoded: String =
					url::form_urlencoded::byte_serialize(target_url.as_bytes()).collect();
				format!("{}{}", base, encoded)
			},
			None => target_url.to_string(),
		}
	}
}

/// Map a non-success status to an adapter error, passing the response through
/// otherwise.
pub fn ensure_success(response: Response) -> AdapterResult<Response> {
	let status = response.status();
	if status.is_success() {
		Ok(response)
	} else {
		Err(AdapterError::HttpStatus {
			status: status.as_u16(),
		})
	}
}
