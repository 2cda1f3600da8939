//! Configuration loading utilities

use crate::Settings;
use config::{Config, ConfigError, Environment, File};

/// Load configuration from the optional config file, with `REMIT_`-prefixed
/// environment variables layered on top (e.g. `REMIT_SERVER__PORT=9000`).
pub fn load_config() -> Result<Settings, ConfigError> {
	let s = Config::builder()
		.add_source(File::with_name("config/config").required(false))
		.add_source(Environment::with_prefix("REMIT").separator("__"))
		.build()?;

	s.try_deserialize()
}
