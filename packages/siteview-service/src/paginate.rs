use std::collections::{HashMap, HashSet};

use serde_json::{Map, Value};

use crate::{Error, FaultResult, Result, SiteService};
use siteview_domain::{
	identifier::{normalize_identifier, normalize_identifiers},
	reconcile::reconcile,
	site::{Caller, Site, WarningsBySite},
	window::window,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderDirection {
	Asc,
	Desc,
}

/// Page selection. `order_by`, `direction`, and `extra_params` are accepted for compatibility
/// with generic paginated listings and have no effect: site order is fixed.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct PageRequest {
	pub filter: Option<String>,
	pub limit: usize,
	pub offset: usize,
	pub order_by: Option<String>,
	pub direction: Option<OrderDirection>,
	#[serde(default)]
	pub extra_params: Map<String, Value>,
}
impl PageRequest {
	pub fn new(filter: Option<&str>, limit: usize, offset: usize) -> Self {
		Self { filter: filter.map(str::to_string), limit, offset, ..Default::default() }
	}
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SiteView {
	pub id: String,
	pub name: String,
	pub configured: bool,
	pub secrets_with_warnings: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Page<T> {
	pub items: Vec<T>,
	/// Size of the filtered listing before windowing. Items dropped by a failed fetch are still
	/// counted, so `items` may come up short of the window.
	pub total_count: usize,
}

impl SiteService {
	/// Lists the sites `caller` may read: the reserved site first, then configured sites, then the
	/// rest, each group in display-name order, windowed by `req.offset` and `req.limit`.
	pub fn paginate(&self, caller: &Caller, req: &PageRequest) -> Result<Page<SiteView>> {
		if req.order_by.is_some() || req.direction.is_some() || !req.extra_params.is_empty() {
			tracing::debug!(
				order_by = ?req.order_by,
				direction = ?req.direction,
				"Ignoring ordering parameters for site listing."
			);
		}

		self.assemble_page(caller, req).map_err(|source| {
			tracing::error!(
				error = %source,
				user_id = %caller.user_id,
				filter = ?req.filter,
				limit = req.limit,
				offset = req.offset,
				"Site pagination failed."
			);

			Error::Pagination { source }
		})
	}

	fn assemble_page(&self, caller: &Caller, req: &PageRequest) -> FaultResult<Page<SiteView>> {
		let candidates = self.collect_site_identifiers(caller, req.filter.as_deref())?;
		let candidate_set: HashSet<&str> = candidates.iter().map(String::as_str).collect();
		// Configured sites that did not survive collection are not shown.
		let configured: HashSet<String> =
			normalize_identifiers(&self.collaborators.apps.configured_sites()?)
				.into_iter()
				.filter(|identifier| candidate_set.contains(identifier.as_str()))
				.collect();
		let merged = reconcile(&candidates, &configured, &self.cfg.sites.reserved_identifier);
		let total_count = merged.iter().collect::<HashSet<_>>().len();
		let warning_counts = count_warnings(self.collaborators.apps.warnings_by_site()?);
		let items = window(&merged, req.offset, req.limit)
			.iter()
			.filter_map(|identifier| self.fetch_site(caller, identifier))
			.map(|site| {
				let site_id = normalize_identifier(&site.identifier);

				SiteView {
					configured: configured.contains(&site_id),
					secrets_with_warnings: warning_counts.get(&site_id).copied().unwrap_or(0),
					id: site.identifier,
					name: site.name.unwrap_or_default(),
				}
			})
			.collect();

		tracing::debug!(
			user_id = %caller.user_id,
			total_count,
			configured = configured.len(),
			"Assembled site page."
		);

		Ok(Page { items, total_count })
	}

	fn fetch_site(&self, caller: &Caller, identifier: &str) -> Option<Site> {
		match self.collaborators.catalog.find(identifier, caller) {
			Ok(Some(site)) => Some(site),
			Ok(None) => {
				tracing::warn!(
					site_id = identifier,
					"Listed site was not found on fetch. Skipping it."
				);

				None
			},
			Err(err) => {
				tracing::error!(
					error = %err,
					site_id = identifier,
					"Site fetch failed. Skipping it."
				);

				None
			},
		}
	}
}

// Number of secrets with warnings, keyed by lowercased site identifier.
fn count_warnings(warnings: WarningsBySite) -> HashMap<String, usize> {
	let mut counts = HashMap::with_capacity(warnings.len());

	for (identifier, secrets) in warnings {
		*counts.entry(normalize_identifier(&identifier)).or_insert(0) += secrets.len();
	}

	counts
}
