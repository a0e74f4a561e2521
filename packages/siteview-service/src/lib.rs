pub mod collect;
pub mod paginate;

mod error;

pub use error::{Error, Fault, Result};
pub use paginate::{OrderDirection, Page, PageRequest, SiteView};

use std::{collections::HashSet, sync::Arc};

use siteview_config::Config;
use siteview_domain::site::{Caller, Site, WarningsBySite};
use siteview_storage::store::SiteStore;

pub type FaultResult<T> = std::result::Result<T, Fault>;

/// Cache-backed site catalog.
pub trait SiteCatalog
where
	Self: Send + Sync,
{
	/// Every cached site, in catalog order. Access control is applied by the caller.
	fn find_all(&self, caller: &Caller) -> FaultResult<Vec<Site>>;

	fn is_archived(&self, site: &Site) -> FaultResult<bool>;

	/// Looks a site up by identifier, ignoring case.
	fn find(&self, identifier: &str, caller: &Caller) -> FaultResult<Option<Site>>;
}

pub trait PermissionChecker
where
	Self: Send + Sync,
{
	fn can_read(&self, caller: &Caller, site: &Site) -> FaultResult<bool>;
}

/// Source of per-site app configuration state. Both lookups are made fresh on every page.
pub trait AppsRegistry
where
	Self: Send + Sync,
{
	fn configured_sites(&self) -> FaultResult<HashSet<String>>;

	fn warnings_by_site(&self) -> FaultResult<WarningsBySite>;
}

#[derive(Clone)]
pub struct Collaborators {
	pub catalog: Arc<dyn SiteCatalog>,
	pub permissions: Arc<dyn PermissionChecker>,
	pub apps: Arc<dyn AppsRegistry>,
}
impl Collaborators {
	pub fn new(
		catalog: Arc<dyn SiteCatalog>,
		permissions: Arc<dyn PermissionChecker>,
		apps: Arc<dyn AppsRegistry>,
	) -> Self {
		Self { catalog, permissions, apps }
	}

	pub fn from_store(store: SiteStore) -> Self {
		let store = Arc::new(StoreCollaborators { store });

		Self { catalog: store.clone(), permissions: store.clone(), apps: store }
	}
}

pub struct SiteService {
	pub cfg: Config,
	pub collaborators: Collaborators,
}
impl SiteService {
	pub fn new(cfg: Config, store: SiteStore) -> Self {
		Self { cfg, collaborators: Collaborators::from_store(store) }
	}

	pub fn with_collaborators(cfg: Config, collaborators: Collaborators) -> Self {
		Self { cfg, collaborators }
	}
}

struct StoreCollaborators {
	store: SiteStore,
}

impl SiteCatalog for StoreCollaborators {
	fn find_all(&self, _caller: &Caller) -> FaultResult<Vec<Site>> {
		Ok(self.store.sites().to_vec())
	}

	fn is_archived(&self, site: &Site) -> FaultResult<bool> {
		Ok(site.archived)
	}

	fn find(&self, identifier: &str, _caller: &Caller) -> FaultResult<Option<Site>> {
		Ok(self.store.find(identifier).cloned())
	}
}

impl PermissionChecker for StoreCollaborators {
	fn can_read(&self, caller: &Caller, site: &Site) -> FaultResult<bool> {
		self.store
			.can_read(&caller.user_id, &site.identifier)
			.map_err(|err| Fault::Permission { message: err.to_string() })
	}
}

impl AppsRegistry for StoreCollaborators {
	fn configured_sites(&self) -> FaultResult<HashSet<String>> {
		Ok(self.store.configured_sites().clone())
	}

	fn warnings_by_site(&self) -> FaultResult<WarningsBySite> {
		Ok(self.store.warnings_by_site().clone())
	}
}
