#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read site fixture at {path:?}.")]
	ReadFixture { path: std::path::PathBuf, source: std::io::Error },
	#[error("Failed to parse site fixture at {path:?}.")]
	ParseFixture { path: std::path::PathBuf, source: serde_json::Error },
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),
	#[error("Not found: {0}")]
	NotFound(String),
}
