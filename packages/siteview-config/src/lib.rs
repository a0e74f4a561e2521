mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, DEFAULT_RESERVED_IDENTIFIER, Paging, Service, Sites, Storage};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);
	resolve_relative_paths(&mut cfg, path);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.storage.fixture_path.as_os_str().is_empty() {
		return Err(Error::Validation {
			message: "storage.fixture_path must be non-empty.".to_string(),
		});
	}
	if cfg.paging.default_limit == 0 {
		return Err(Error::Validation {
			message: "paging.default_limit must be greater than zero.".to_string(),
		});
	}
	if cfg.paging.max_limit < cfg.paging.default_limit {
		return Err(Error::Validation {
			message: "paging.max_limit must be greater than or equal to paging.default_limit."
				.to_string(),
		});
	}
	if cfg.sites.reserved_identifier.trim().is_empty() {
		return Err(Error::Validation {
			message: "sites.reserved_identifier must be non-empty.".to_string(),
		});
	}
	if cfg.sites.reserved_identifier.chars().any(char::is_uppercase) {
		return Err(Error::Validation {
			message: "sites.reserved_identifier must be lowercase.".to_string(),
		});
	}

	Ok(())
}

pub fn normalize(cfg: &mut Config) {
	cfg.sites.reserved_identifier = cfg.sites.reserved_identifier.trim().to_lowercase();

	if cfg.service.log_level.trim().is_empty() {
		cfg.service.log_level = "info".to_string();
	}
}

// Relative fixture paths are anchored at the directory holding the config file.
fn resolve_relative_paths(cfg: &mut Config, config_path: &Path) {
	let fixture_path = &cfg.storage.fixture_path;

	if fixture_path.as_os_str().is_empty() || fixture_path.is_absolute() {
		return;
	}
	if let Some(parent) = config_path.parent() {
		cfg.storage.fixture_path = parent.join(fixture_path);
	}
}
