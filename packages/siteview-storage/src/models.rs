use serde::Deserialize;

use siteview_domain::site::WarningsBySite;

/// Grants read access to every caller.
pub const ANY_READER: &str = "*";

#[derive(Debug, Deserialize)]
pub struct SiteFixture {
	pub sites: Vec<SiteRecord>,
	#[serde(default)]
	pub configured_sites: Vec<String>,
	#[serde(default)]
	pub warnings: WarningsBySite,
}

#[derive(Debug, Deserialize)]
pub struct SiteRecord {
	pub identifier: String,
	pub name: Option<String>,
	#[serde(default)]
	pub archived: bool,
	#[serde(default)]
	pub readers: Vec<String>,
}
