use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_RESERVED_IDENTIFIER: &str = "system_host";

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	#[serde(default)]
	pub paging: Paging,
	#[serde(default)]
	pub sites: Sites,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	/// JSON document holding the site catalog, read grants, and app configuration state.
	pub fixture_path: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Paging {
	pub default_limit: usize,
	pub max_limit: usize,
}
impl Default for Paging {
	fn default() -> Self {
		Self { default_limit: 20, max_limit: 500 }
	}
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Sites {
	/// Site that always leads the listing when it survives filtering. Lowercased on load.
	pub reserved_identifier: String,
}
impl Default for Sites {
	fn default() -> Self {
		Self { reserved_identifier: DEFAULT_RESERVED_IDENTIFIER.to_string() }
	}
}

fn default_log_level() -> String {
	"info".to_string()
}
