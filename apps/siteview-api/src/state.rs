use std::sync::Arc;

use siteview_service::SiteService;
use siteview_storage::store::SiteStore;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<SiteService>,
}
impl AppState {
	pub fn new(config: siteview_config::Config) -> color_eyre::Result<Self> {
		let store = SiteStore::load(&config.storage.fixture_path)?;

		tracing::info!(
			sites = store.sites().len(),
			configured = store.configured_sites().len(),
			"Site fixture loaded."
		);

		Ok(Self::from_service(SiteService::new(config, store)))
	}

	pub fn from_service(service: SiteService) -> Self {
		Self { service: Arc::new(service) }
	}
}
