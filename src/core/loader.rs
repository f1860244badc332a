use crate::adapters::http::HttpCatalogSource;
use crate::config::cli::LocalStorage;
use crate::core::estimator::Estimator;
use crate::domain::model::{AddonEntry, BreedPriceEntry, Catalog};
use crate::domain::ports::{CatalogSource, ConfigProvider};
use crate::utils::error::Result;
use crate::utils::validation::is_remote;
use std::time::Duration;

/// Fetches both catalog resources from one source. Either both load or
/// nothing does.
pub struct CatalogLoader<S: CatalogSource> {
    source: S,
    breeds_resource: String,
    addons_resource: String,
}

impl<S: CatalogSource> CatalogLoader<S> {
    pub fn new(source: S, breeds_resource: &str, addons_resource: &str) -> Self {
        Self {
            source,
            breeds_resource: breeds_resource.to_string(),
            addons_resource: addons_resource.to_string(),
        }
    }

    pub async fn load(&self) -> Result<Catalog> {
        tracing::debug!(
            "Loading breeds from {}",
            self.source.describe(&self.breeds_resource)
        );
        let raw = self.source.fetch(&self.breeds_resource).await?;
        let breeds = parse_breeds(&raw)?;

        tracing::debug!(
            "Loading add-ons from {}",
            self.source.describe(&self.addons_resource)
        );
        let raw = self.source.fetch(&self.addons_resource).await?;
        let addons = parse_addons(&raw)?;

        tracing::info!(
            "Loaded {} breeds and {} add-ons",
            breeds.len(),
            addons.len()
        );
        Ok(Catalog::new(breeds, addons))
    }

    pub async fn load_estimator(&self) -> Result<Estimator> {
        Ok(Estimator::new(self.load().await?))
    }
}

pub fn parse_breeds(raw: &[u8]) -> Result<Vec<BreedPriceEntry>> {
    Ok(serde_json::from_slice(raw)?)
}

pub fn parse_addons(raw: &[u8]) -> Result<Vec<AddonEntry>> {
    Ok(serde_json::from_slice(raw)?)
}

/// Picks a file or HTTP source from the configured location and loads it.
pub async fn load_catalog<C: ConfigProvider>(config: &C) -> Result<Catalog> {
    let location = config.catalog_location();

    if is_remote(location) {
        let source = HttpCatalogSource::new(
            location,
            Duration::from_secs(config.timeout_seconds()),
        )?;
        CatalogLoader::new(source, config.breeds_resource(), config.addons_resource())
            .load()
            .await
    } else {
        let source = LocalStorage::new(location.to_string());
        CatalogLoader::new(source, config.breeds_resource(), config.addons_resource())
            .load()
            .await
    }
}
