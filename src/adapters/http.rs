use crate::core::CatalogSource;
use crate::utils::error::{EstimatorError, Result};
use reqwest::Client;
use std::time::Duration;

/// Fetches catalog resources relative to an http(s) base URL.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    base_url: String,
    client: Client,
}

impl HttpCatalogSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn resource_url(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource.trim_start_matches('/'))
    }
}

impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self, resource: &str) -> Result<Vec<u8>> {
        let url = self.resource_url(resource);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("Catalog response status: {}", status);

        if !status.is_success() {
            return Err(EstimatorError::CatalogStatusError {
                resource: resource.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    fn describe(&self, resource: &str) -> String {
        self.resource_url(resource)
    }
}
