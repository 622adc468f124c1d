//! Data-provider seam: where a view gets its catalog from.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    error::ApiError,
    protocol::{CatalogPayload, CATALOG_ROUTE},
};
use tracing::debug;
use url::Url;

use crate::error::CatalogError;

#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_catalog(&self) -> Result<CatalogPayload, CatalogError>;
}

pub struct HttpCatalogSource {
    client: Client,
    base_url: Url,
    endpoint: Url,
}

impl HttpCatalogSource {
    pub fn new(base_url: &str) -> Result<Self, CatalogError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, CatalogError> {
        let base_url = parse_base_url(base_url)?;
        let endpoint = base_url
            .join(CATALOG_ROUTE.trim_start_matches('/'))
            .map_err(|source| CatalogError::InvalidUrl {
                url: base_url.to_string(),
                source,
            })?;
        Ok(Self {
            client,
            base_url,
            endpoint,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_catalog(&self) -> Result<CatalogPayload, CatalogError> {
        debug!(endpoint = %self.endpoint, "fetching catalog");
        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(CatalogError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|err| err.message)
                .unwrap_or(body);
            return Err(CatalogError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await.map_err(CatalogError::Transport)?;
        let payload: CatalogPayload =
            serde_json::from_slice(&body).map_err(CatalogError::Decode)?;
        payload.validate()?;
        Ok(payload)
    }
}

/// Fixed in-memory catalog, or a fixed failure.
pub struct StaticCatalogSource {
    outcome: Result<CatalogPayload, String>,
    fetches: AtomicUsize,
}

impl StaticCatalogSource {
    pub fn new(payload: CatalogPayload) -> Self {
        Self {
            outcome: Ok(payload),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: Err(reason.into()),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn fetch_catalog(&self) -> Result<CatalogPayload, CatalogError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.outcome
            .clone()
            .map_err(CatalogError::Unavailable)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, CatalogError> {
    let trimmed = raw.trim();
    // Without a trailing slash `join` would drop the last path segment.
    let normalized = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    Url::parse(&normalized).map_err(|source| CatalogError::InvalidUrl {
        url: raw.to_string(),
        source,
    })
}

/// Resolves an item's image reference against the server it came from.
/// Absolute references are returned unchanged.
pub fn resolve_image_url(base_url: &Url, reference: &str) -> Result<Url, url::ParseError> {
    match Url::parse(reference) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            base_url.join(reference.trim_start_matches('/'))
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
#[path = "tests/source_tests.rs"]
mod tests;
