//! Provider abstraction for the dataset endpoints.
//!
//! Two implementations: `HttpProvider` talks to the data service over
//! JSON, `MemoryProvider` serves the embedded tables (offline runs and
//! tests). New providers implement the `DataProvider` trait.

use std::future::Future;
use std::pin::Pin;

use datasets::static_data;
use datasets::wire::{CitiesResponse, CityFilter, FeatureCollection, PopulationResponse, StatsResponse};

/// Error type for provider operations.
#[derive(Debug)]
pub struct FetchError {
    pub message: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as _)
    }
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Type alias for a boxed future that can be sent between threads.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Trait for dataset providers.
///
/// Implementations must be `Send + Sync` for use across async tasks.
/// Methods return boxed futures for dyn-compatibility.
pub trait DataProvider: Send + Sync {
    fn earthquakes(&self) -> BoxFuture<'_, Result<FeatureCollection, FetchError>>;

    /// Cities matching `filter`; an empty filter returns all of them.
    fn cities(&self, filter: CityFilter) -> BoxFuture<'_, Result<CitiesResponse, FetchError>>;

    fn population(&self) -> BoxFuture<'_, Result<PopulationResponse, FetchError>>;

    fn stats(&self) -> BoxFuture<'_, Result<StatsResponse, FetchError>>;
}

/// HTTP provider against the data service.
pub struct HttpProvider {
    base_url: String,
    client: reqwest::Client,
}

impl HttpProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}{path}", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::with_source(format!("request to {url} failed"), e))?;

        if !resp.status().is_success() {
            return Err(FetchError::new(format!("HTTP error from {url}: {}", resp.status())));
        }

        resp.json::<T>()
            .await
            .map_err(|e| FetchError::with_source(format!("bad payload from {url}"), e))
    }
}

impl DataProvider for HttpProvider {
    fn earthquakes(&self) -> BoxFuture<'_, Result<FeatureCollection, FetchError>> {
        Box::pin(self.get_json("/api/data/earthquakes"))
    }

    fn cities(&self, filter: CityFilter) -> BoxFuture<'_, Result<CitiesResponse, FetchError>> {
        let mut path = "/api/data/cities".to_string();
        let mut sep = '?';
        if let Some(continent) = &filter.continent {
            path.push(sep);
            path.push_str("continent=");
            path.push_str(continent);
            sep = '&';
        }
        if let Some(min) = filter.min_population {
            path.push(sep);
            path.push_str("minPopulation=");
            path.push_str(&min.to_string());
        }
        Box::pin(async move { self.get_json(&path).await })
    }

    fn population(&self) -> BoxFuture<'_, Result<PopulationResponse, FetchError>> {
        Box::pin(self.get_json("/api/data/population"))
    }

    fn stats(&self) -> BoxFuture<'_, Result<StatsResponse, FetchError>> {
        Box::pin(self.get_json("/api/data/stats"))
    }
}

/// In-memory provider backed by the embedded tables. Never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct MemoryProvider;

impl MemoryProvider {
    pub fn new() -> Self {
        Self
    }
}

impl DataProvider for MemoryProvider {
    fn earthquakes(&self) -> BoxFuture<'_, Result<FeatureCollection, FetchError>> {
        Box::pin(async { Ok(static_data::earthquakes()) })
    }

    fn cities(&self, filter: CityFilter) -> BoxFuture<'_, Result<CitiesResponse, FetchError>> {
        Box::pin(async move {
            let cities = datasets::wire::filter_cities(&static_data::cities(), &filter);
            Ok(CitiesResponse {
                count: cities.len(),
                cities,
            })
        })
    }

    fn population(&self) -> BoxFuture<'_, Result<PopulationResponse, FetchError>> {
        Box::pin(async { Ok(static_data::population()) })
    }

    fn stats(&self) -> BoxFuture<'_, Result<StatsResponse, FetchError>> {
        Box::pin(async {
            let events = static_data::earthquakes();
            let cities = static_data::cities();
            let population = static_data::population();
            Ok(datasets::stats::compute_stats(&events, &cities, &population.data))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{DataProvider, MemoryProvider};
    use datasets::wire::CityFilter;

    #[tokio::test]
    async fn memory_provider_serves_the_embedded_tables() {
        let provider = MemoryProvider::new();
        assert_eq!(provider.earthquakes().await.unwrap().features.len(), 25);
        assert_eq!(
            provider.cities(CityFilter::default()).await.unwrap().count,
            35
        );
        assert_eq!(provider.population().await.unwrap().data.len(), 56);
    }

    #[tokio::test]
    async fn memory_provider_applies_the_city_filter() {
        let provider = MemoryProvider::new();
        let resp = provider
            .cities(CityFilter {
                continent: Some("europe".to_string()),
                min_population: None,
            })
            .await
            .unwrap();
        assert!(resp.count > 0);
        assert!(resp.cities.iter().all(|c| c.continent == "Europe"));
    }

    #[tokio::test]
    async fn memory_stats_match_the_dataset() {
        let provider = MemoryProvider::new();
        let stats = provider.stats().await.unwrap();
        assert_eq!(stats.earthquakes.total, 25);
        assert_eq!(stats.cities.total, 35);
        assert_eq!(stats.countries.total, 56);
    }
}
