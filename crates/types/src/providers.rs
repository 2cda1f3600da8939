//! Provider identity and registration metadata
//!
//! Each adapter owns one [`ProviderInfo`] describing the provider it speaks
//! for: display name, web domain (used for logo resolution) and the app-store
//! identifiers used to deep-link into the provider's own app. The table is
//! read-only after startup; rate computation never depends on it.

use serde::{Deserialize, Serialize};

/// Static identity of a registered provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderInfo {
	/// Display name, unique within a registry
	pub name: String,
	/// Web domain used to derive a logo URL, when known
	pub domain: Option<String>,
	/// Explicit logo URL override, takes precedence over the domain
	pub logo_override: Option<String>,
	/// Google Play package id for deep-linking
	pub android_app_id: Option<String>,
	/// Apple App Store id for deep-linking
	pub ios_app_id: Option<String>,
}

impl ProviderInfo {
	/// Create provider metadata with a known web domain
	pub fn new(name: impl Into<String>, domain: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			domain: Some(domain.into()),
			logo_override: None,
			android_app_id: None,
			ios_app_id: None,
		}
	}

	/// Create provider metadata without a known domain; the logo resolver
	/// falls back to a generated initials avatar.
	pub fn unbranded(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			domain: None,
			logo_override: None,
			android_app_id: None,
			ios_app_id: None,
		}
	}

	/// Set an explicit logo URL that wins over domain derivation
	pub fn with_logo_override(mut self, url: impl Into<String>) -> Self {
		self.logo_override = Some(url.into());
		self
	}

	/// Attach app-store identifiers for deep-linking
	pub fn with_store_ids(
		mut self,
		android_app_id: impl Into<String>,
		ios_app_id: impl Into<String>,
	) -> Self {
		self.android_app_id = Some(android_app_id.into());
		self.ios_app_id = Some(ios_app_id.into());
		self
	}

	/// Build the platform store URLs for this provider, if identifiers are
	/// registered. Presentation-adjacent; not used in rate computation.
	pub fn app_store_urls(&self) -> Option<AppStoreUrls> {
		match (&self.android_app_id, &self.ios_app_id) {
			(Some(android), Some(ios)) => Some(AppStoreUrls {
				android: format!("https://play.google.com/store/apps/details?id={}", android),
				ios: format!("https://apps.apple.com/app/{}", ios),
			}),
			_ => None,
		}
	}
}

/// Platform-specific app store links for a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppStoreUrls {
	pub android: String,
	pub ios: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_app_store_urls_built_from_ids() {
		let info = ProviderInfo::new("Remitly", "remitly.com")
			.with_store_ids("com.remitly.androidapp", "id674258465");

		let urls = info.app_store_urls().unwrap();
		assert_eq!(
			urls.android,
			"https://play.google.com/store/apps/details?id=com.remitly.androidapp"
		);
		assert_eq!(urls.ios, "https://apps.apple.com/app/id674258465");
	}

	#[test]
	fn test_app_store_urls_absent_without_ids() {
		let info = ProviderInfo::unbranded("Some Provider");
		assert!(info.app_store_urls().is_none());
	}
}
