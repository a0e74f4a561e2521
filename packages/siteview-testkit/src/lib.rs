use std::{
	collections::HashSet,
	path::PathBuf,
	sync::{
		Arc, Mutex,
		atomic::{AtomicUsize, Ordering},
	},
};

use siteview_config::{Config, Paging, Service, Sites, Storage};
use siteview_domain::{
	identifier::normalize_identifier,
	site::{Caller, Site, WarningsBySite},
};
use siteview_service::{
	AppsRegistry, Collaborators, Fault, FaultResult, PermissionChecker, SiteCatalog, SiteService,
};

pub const RESERVED_IDENTIFIER: &str = "system_host";

pub fn test_config() -> Config {
	Config {
		service: Service { http_bind: "127.0.0.1:0".to_string(), log_level: "info".to_string() },
		storage: Storage { fixture_path: PathBuf::from("sites.json") },
		paging: Paging { default_limit: 20, max_limit: 100 },
		sites: Sites { reserved_identifier: RESERVED_IDENTIFIER.to_string() },
	}
}

pub fn caller() -> Caller {
	Caller::new("tester")
}

/// Scriptable stand-in for every site collaborator.
///
/// Sites are listed in the order they were added. Identifier lookups ignore case, and every
/// failure switch is keyed by identifier.
#[derive(Default)]
pub struct FakeSites {
	sites: Vec<Site>,
	configured: HashSet<String>,
	warnings: WarningsBySite,
	denied: HashSet<String>,
	permission_faults: HashSet<String>,
	archived_faults: HashSet<String>,
	fetch_faults: HashSet<String>,
	fetch_misses: HashSet<String>,
	catalog_fault: Option<String>,
	registry_fault: Option<String>,
	permission_calls: AtomicUsize,
	archived_calls: AtomicUsize,
	fetched: Mutex<Vec<String>>,
}
impl FakeSites {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn site(mut self, identifier: &str, name: &str) -> Self {
		self.sites.push(Site::new(identifier, name));

		self
	}

	pub fn unnamed_site(mut self, identifier: &str) -> Self {
		self.sites.push(Site { identifier: identifier.to_string(), name: None, archived: false });

		self
	}

	pub fn archived_site(mut self, identifier: &str, name: &str) -> Self {
		self.sites.push(Site { archived: true, ..Site::new(identifier, name) });

		self
	}

	/// Marks `identifier` as configured exactly as given, without normalizing it.
	pub fn configured(mut self, identifier: &str) -> Self {
		self.configured.insert(identifier.to_string());

		self
	}

	pub fn warnings(mut self, identifier: &str, secret: &str, messages: &[&str]) -> Self {
		self.warnings.entry(identifier.to_string()).or_default().insert(
			secret.to_string(),
			messages.iter().map(|message| message.to_string()).collect(),
		);

		self
	}

	pub fn deny_read(mut self, identifier: &str) -> Self {
		self.denied.insert(normalize_identifier(identifier));

		self
	}

	pub fn fail_permission(mut self, identifier: &str) -> Self {
		self.permission_faults.insert(normalize_identifier(identifier));

		self
	}

	pub fn fail_archived(mut self, identifier: &str) -> Self {
		self.archived_faults.insert(normalize_identifier(identifier));

		self
	}

	pub fn fail_fetch(mut self, identifier: &str) -> Self {
		self.fetch_faults.insert(normalize_identifier(identifier));

		self
	}

	/// Lists `identifier` but reports it as missing when fetched.
	pub fn miss_on_fetch(mut self, identifier: &str) -> Self {
		self.fetch_misses.insert(normalize_identifier(identifier));

		self
	}

	pub fn fail_catalog(mut self, message: &str) -> Self {
		self.catalog_fault = Some(message.to_string());

		self
	}

	pub fn fail_registry(mut self, message: &str) -> Self {
		self.registry_fault = Some(message.to_string());

		self
	}

	pub fn build(self) -> Arc<Self> {
		Arc::new(self)
	}

	pub fn collaborators(self: &Arc<Self>) -> Collaborators {
		Collaborators::new(self.clone(), self.clone(), self.clone())
	}

	pub fn service(self: &Arc<Self>) -> SiteService {
		SiteService::with_collaborators(test_config(), self.collaborators())
	}

	pub fn permission_calls(&self) -> usize {
		self.permission_calls.load(Ordering::SeqCst)
	}

	pub fn archived_calls(&self) -> usize {
		self.archived_calls.load(Ordering::SeqCst)
	}

	/// Identifiers passed to `find`, in call order.
	pub fn fetched(&self) -> Vec<String> {
		self.fetched.lock().unwrap_or_else(|err| err.into_inner()).clone()
	}
}

impl SiteCatalog for FakeSites {
	fn find_all(&self, _caller: &Caller) -> FaultResult<Vec<Site>> {
		if let Some(message) = &self.catalog_fault {
			return Err(Fault::Catalog { message: message.clone() });
		}

		Ok(self.sites.clone())
	}

	fn is_archived(&self, site: &Site) -> FaultResult<bool> {
		self.archived_calls.fetch_add(1, Ordering::SeqCst);

		if self.archived_faults.contains(&normalize_identifier(&site.identifier)) {
			return Err(Fault::Catalog { message: "Archived flag is unavailable.".to_string() });
		}

		Ok(site.archived)
	}

	fn find(&self, identifier: &str, _caller: &Caller) -> FaultResult<Option<Site>> {
		let key = normalize_identifier(identifier);

		self.fetched.lock().unwrap_or_else(|err| err.into_inner()).push(key.clone());

		if self.fetch_faults.contains(&key) {
			return Err(Fault::Fetch { message: format!("Fetching {identifier:?} failed.") });
		}
		if self.fetch_misses.contains(&key) {
			return Ok(None);
		}

		Ok(self.sites.iter().find(|site| normalize_identifier(&site.identifier) == key).cloned())
	}
}

impl PermissionChecker for FakeSites {
	fn can_read(&self, _caller: &Caller, site: &Site) -> FaultResult<bool> {
		self.permission_calls.fetch_add(1, Ordering::SeqCst);

		let key = normalize_identifier(&site.identifier);

		if self.permission_faults.contains(&key) {
			return Err(Fault::Permission {
				message: "Permission service is unavailable.".to_string(),
			});
		}

		Ok(!self.denied.contains(&key))
	}
}

impl AppsRegistry for FakeSites {
	fn configured_sites(&self) -> FaultResult<HashSet<String>> {
		if let Some(message) = &self.registry_fault {
			return Err(Fault::Registry { message: message.clone() });
		}

		Ok(self.configured.clone())
	}

	fn warnings_by_site(&self) -> FaultResult<WarningsBySite> {
		if let Some(message) = &self.registry_fault {
			return Err(Fault::Registry { message: message.clone() });
		}

		Ok(self.warnings.clone())
	}
}
