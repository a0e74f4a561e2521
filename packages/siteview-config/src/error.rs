use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read siteview config at {path:?}.")]
	ReadConfig { path: PathBuf, source: std::io::Error },
	#[error("Siteview config at {path:?} is not valid TOML.")]
	ParseConfig { path: PathBuf, source: toml::de::Error },
	#[error("Invalid siteview config: {message}")]
	Validation { message: String },
}
