use std::collections::HashSet;

use crate::{FaultResult, SiteService};
use siteview_domain::{
	filter::{name_matches, normalize_filter},
	identifier::normalize_identifier,
	site::{Caller, Site},
};

impl SiteService {
	/// Lowercased identifiers of every live site the caller may read whose display name contains
	/// `filter`, ascending by display name.
	///
	/// Ties keep catalog order and a repeated identifier keeps its first position. Per-site check
	/// failures never abort the listing: a failed permission check hides the site, a failed
	/// archived check keeps it.
	pub fn collect_site_identifiers(
		&self,
		caller: &Caller,
		filter: Option<&str>,
	) -> FaultResult<Vec<String>> {
		let filter = normalize_filter(filter);
		let sites = self.collaborators.catalog.find_all(caller)?;
		let mut visible: Vec<(&str, &Site)> = sites
			.iter()
			.filter(|site| !site.identifier.trim().is_empty())
			.filter_map(|site| site.display_name().map(|name| (name, site)))
			.filter(|(_, site)| !self.archived(site))
			.filter(|(name, _)| name_matches(name, filter.as_deref()))
			.filter(|(_, site)| self.read_allowed(caller, site))
			.collect();

		visible.sort_by(|(lhs, _), (rhs, _)| lhs.cmp(rhs));

		let mut seen = HashSet::with_capacity(visible.len());
		let identifiers = visible
			.into_iter()
			.map(|(_, site)| normalize_identifier(&site.identifier))
			.filter(|identifier| seen.insert(identifier.clone()))
			.collect();

		Ok(identifiers)
	}

	fn archived(&self, site: &Site) -> bool {
		archived_or_live(self.collaborators.catalog.is_archived(site), &site.identifier)
	}

	fn read_allowed(&self, caller: &Caller, site: &Site) -> bool {
		readable_or_denied(self.collaborators.permissions.can_read(caller, site), &site.identifier)
	}
}

pub(crate) fn readable_or_denied(result: FaultResult<bool>, site_id: &str) -> bool {
	match result {
		Ok(allowed) => allowed,
		Err(err) => {
			tracing::warn!(error = %err, site_id, "Read permission check failed. Hiding the site.");

			false
		},
	}
}

// Fails open: an unanswered archived check keeps the site listed.
pub(crate) fn archived_or_live(result: FaultResult<bool>, site_id: &str) -> bool {
	match result {
		Ok(archived) => archived,
		Err(err) => {
			tracing::warn!(error = %err, site_id, "Archived check failed. Keeping the site.");

			false
		},
	}
}
