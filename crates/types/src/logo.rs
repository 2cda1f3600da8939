//! Provider logo resolution
//!
//! Pure mapping from provider identity to an icon URL; no network I/O.
//! Precedence: explicit override, then domain via the unavatar.io icon
//! aggregation service, then a generated initials avatar. Broken images are
//! the presentation layer's problem.

use crate::providers::ProviderInfo;

const ICON_AGGREGATOR_BASE: &str = "https://unavatar.io";
const INITIALS_FALLBACK_BASE: &str = "https://ui-avatars.com/api/";

/// Resolve the icon URL for a provider. Deterministic and never empty.
pub fn logo_url(info: &ProviderInfo) -> String {
	if let Some(override_url) = &info.logo_override {
		return override_url.clone();
	}

	if let Some(domain) = &info.domain {
		return format!("{}/{}", ICON_AGGREGATOR_BASE, domain);
	}

	let encoded: String = url::form_urlencoded::byte_serialize(info.name.as_bytes()).collect();
	format!(
		"{}?name={}&background=random",
		INITIALS_FALLBACK_BASE, encoded
	)
}
