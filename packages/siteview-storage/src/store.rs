use std::{
	collections::{HashMap, HashSet},
	fs,
	path::Path,
};

use crate::{
	Error, Result,
	models::{ANY_READER, SiteFixture},
};
use siteview_domain::{
	identifier::normalize_identifier,
	site::{Site, WarningsBySite},
};

/// In-memory site catalog with per-site read grants and app configuration state.
///
/// Sites keep the order they were declared in. Lookups by identifier ignore case.
#[derive(Debug)]
pub struct SiteStore {
	sites: Vec<Site>,
	index: HashMap<String, usize>,
	readers: Vec<HashSet<String>>,
	configured_sites: HashSet<String>,
	warnings: WarningsBySite,
}
impl SiteStore {
	pub fn load(path: &Path) -> Result<Self> {
		let raw = fs::read_to_string(path)
			.map_err(|err| Error::ReadFixture { path: path.to_path_buf(), source: err })?;
		let fixture: SiteFixture = serde_json::from_str(&raw)
			.map_err(|err| Error::ParseFixture { path: path.to_path_buf(), source: err })?;

		Self::from_fixture(fixture)
	}

	pub fn from_fixture(fixture: SiteFixture) -> Result<Self> {
		let mut sites = Vec::with_capacity(fixture.sites.len());
		let mut index = HashMap::with_capacity(fixture.sites.len());
		let mut readers = Vec::with_capacity(fixture.sites.len());

		for record in fixture.sites {
			if record.identifier.trim().is_empty() {
				return Err(Error::InvalidArgument(
					"Site identifier must be non-empty.".to_string(),
				));
			}

			let key = normalize_identifier(&record.identifier);

			if index.insert(key, sites.len()).is_some() {
				return Err(Error::InvalidArgument(format!(
					"Site identifier {:?} is declared more than once.",
					record.identifier
				)));
			}

			readers.push(record.readers.into_iter().collect());
			sites.push(Site {
				identifier: record.identifier,
				name: record.name,
				archived: record.archived,
			});
		}

		let configured_sites = fixture
			.configured_sites
			.iter()
			.map(|identifier| normalize_identifier(identifier))
			.collect();
		let mut warnings = WarningsBySite::with_capacity(fixture.warnings.len());

		// Keys that differ only by case name the same site.
		for (identifier, secrets) in fixture.warnings {
			warnings.entry(normalize_identifier(&identifier)).or_default().extend(secrets);
		}

		Ok(Self { sites, index, readers, configured_sites, warnings })
	}

	pub fn sites(&self) -> &[Site] {
		&self.sites
	}

	pub fn find(&self, identifier: &str) -> Option<&Site> {
		self.position(identifier).map(|idx| &self.sites[idx])
	}

	pub fn can_read(&self, user_id: &str, identifier: &str) -> Result<bool> {
		let idx = self
			.position(identifier)
			.ok_or_else(|| Error::NotFound(format!("Site {identifier:?} is not in the catalog.")))?;
		let readers = &self.readers[idx];

		Ok(readers.contains(ANY_READER) || readers.contains(user_id))
	}

	/// Lowercased identifiers of sites that carry app configuration.
	pub fn configured_sites(&self) -> &HashSet<String> {
		&self.configured_sites
	}

	/// Warnings keyed by lowercased site identifier.
	pub fn warnings_by_site(&self) -> &WarningsBySite {
		&self.warnings
	}

	fn position(&self, identifier: &str) -> Option<usize> {
		self.index.get(&normalize_identifier(identifier)).copied()
	}
}
