pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The only failure `SiteService::paginate` reports. The collaborator fault that aborted the
/// pipeline is kept as the source.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Site pagination failed.")]
	Pagination { source: Fault },
}

/// Failure raised by a collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Fault {
	#[error("Catalog error: {message}")]
	Catalog { message: String },
	#[error("Permission error: {message}")]
	Permission { message: String },
	#[error("Fetch error: {message}")]
	Fetch { message: String },
	#[error("Apps registry error: {message}")]
	Registry { message: String },
}
