//! PokeAPI Client
//!
//! Cache-first HTTP access to the catalog. Successful response bodies are
//! cached under their full request URL for the cache interval.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::TtlCache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationAreaDetail, LocationAreaPage, Pokemon};

/// Where a response body came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Served by the TTL cache
    Cache,
    /// Fetched over HTTP and then cached
    Network,
}

/// A response value tagged with its origin
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    pub data: T,
    pub source: Source,
}

impl<T> Fetched<T> {
    fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetched<U> {
        Fetched {
            data: f(self.data),
            source: self.source,
        }
    }
}

/// Client for the PokeAPI catalog with a response cache.
#[derive(Debug)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
    cache: TtlCache,
}

impl PokeApiClient {
    /// Creates a client from configuration and starts its cache.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    /// Fails if the cache interval is zero or the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout())
            .build()?;
        let cache = TtlCache::new(config.cache_interval())?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            cache,
        })
    }

    /// URL of the first location-area page.
    pub fn first_page_url(&self) -> String {
        format!("{}/location-area/", self.base_url)
    }

    /// Fetches the raw body at `url`, consulting the cache first.
    ///
    /// Only 2xx bodies are cached. The cache lock is never held while the
    /// request is in flight.
    pub async fn fetch(&self, url: &str) -> Result<Fetched<Vec<u8>>> {
        if let Some(body) = self.cache.get(url).await {
            debug!("Cache hit: {}", url);
            return Ok(Fetched {
                data: body,
                source: Source::Cache,
            });
        }

        debug!("Cache miss, requesting {}", url);
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await?.to_vec();
        self.cache.add(url, body.clone()).await;

        Ok(Fetched {
            data: body,
            source: Source::Network,
        })
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<Fetched<T>> {
        let fetched = self.fetch(url).await?;
        let data = serde_json::from_slice(&fetched.data)?;
        Ok(fetched.map(|_| data))
    }

    /// Fetches a page of location areas; `None` means the first page.
    pub async fn location_areas(&self, page_url: Option<&str>) -> Result<Fetched<LocationAreaPage>> {
        let url = match page_url {
            Some(url) => url.to_string(),
            None => self.first_page_url(),
        };
        self.fetch_json(&url).await
    }

    /// Fetches one location area by name.
    pub async fn location_area(&self, name: &str) -> Result<Fetched<LocationAreaDetail>> {
        let url = format!("{}/location-area/{}/", self.base_url, name);
        self.fetch_json(&url).await
    }

    /// Fetches one Pokemon by name.
    pub async fn pokemon(&self, name: &str) -> Result<Fetched<Pokemon>> {
        let url = format!("{}/pokemon/{}/", self.base_url, name);
        self.fetch_json(&url).await
    }

    /// The response cache.
    pub fn cache(&self) -> &TtlCache {
        &self.cache
    }

    /// Stops the cache reaper.
    pub async fn shutdown(self) {
        self.cache.shutdown().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(base_url: &str) -> Config {
        Config {
            api_base_url: base_url.to_string(),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_zero_interval_rejected() {
        let config = Config {
            cache_interval_ms: 0,
            ..Config::default()
        };

        let result = PokeApiClient::new(&config);
        assert!(matches!(result, Err(PokedexError::InvalidInterval(_))));
    }

    #[tokio::test]
    async fn test_urls_built_from_base() {
        let client = PokeApiClient::new(&test_config("http://localhost:1/api/v2/")).unwrap();

        assert_eq!(
            client.first_page_url(),
            "http://localhost:1/api/v2/location-area/"
        );
        client.shutdown().await;
    }

    #[tokio::test]
    async fn test_cached_body_served_without_network() {
        // Nothing listens on port 1; a network request would fail
        let client = PokeApiClient::new(&test_config("http://127.0.0.1:1")).unwrap();
        let url = client.first_page_url();
        client
            .cache()
            .add(url.clone(), br#"{"next":null,"previous":null,"results":[]}"#.to_vec())
            .await;

        let fetched = client.location_areas(None).await.unwrap();

        assert_eq!(fetched.source, Source::Cache);
        assert!(fetched.data.results.is_empty());
        client.shutdown().await;
    }

    #[tokio::test]
    async fn test_cached_garbage_is_decode_error() {
        let client = PokeApiClient::new(&test_config("http://127.0.0.1:1")).unwrap();
        client
            .cache()
            .add("http://127.0.0.1:1/pokemon/pidgey/", b"<html>".to_vec())
            .await;

        let result = client.pokemon("pidgey").await;

        assert!(matches!(result, Err(PokedexError::Decode(_))));
        client.shutdown().await;
    }

    #[tokio::test]
    async fn test_unreachable_host_is_http_error() {
        let client = PokeApiClient::new(&test_config("http://127.0.0.1:1")).unwrap();

        let result = client.location_area("nowhere").await;

        assert!(matches!(result, Err(PokedexError::Http(_))));
        assert!(client.cache().is_empty().await);
        client.shutdown().await;
    }
}
