//! View data loading and stale-completion gating.
//!
//! Fetches are async and the active view can change while one is in
//! flight. The gate stamps each load with a generation; a completion
//! whose generation is no longer current is dropped instead of applied.

use std::sync::atomic::{AtomicU64, Ordering};

use datasets::wire::{CityFilter, PopulationResponse, StatsResponse};
use model::record::GeoRecord;
use model::regions::RegionResolver;
use tracing::{debug, info};

use crate::provider::{DataProvider, FetchError};

/// Where an async load currently stands, as the host UI sees it.
#[derive(Debug)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Failed(FetchError),
}

impl<T> LoadState<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// Generation stamp handed out when a load starts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Generation(u64);

/// Monotonic generation gate for in-flight loads.
///
/// `begin` stamps a new load and makes it current; `invalidate` retires
/// whatever is in flight without starting anything. A completion is applied
/// only if its stamp is still current, so a slow response for a view the
/// user already left can never overwrite newer data.
#[derive(Debug, Default)]
pub struct FetchGate {
    current: AtomicU64,
}

impl FetchGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new load; any earlier in-flight load becomes stale.
    pub fn begin(&self) -> Generation {
        Generation(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Retires the in-flight load, if any.
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.current.load(Ordering::SeqCst) == generation.0
    }

    /// Passes `value` through only when `generation` is still current.
    pub fn accept<T>(&self, generation: Generation, value: T) -> Option<T> {
        if self.is_current(generation) {
            Some(value)
        } else {
            debug!("dropping stale load result");
            None
        }
    }
}

/// Everything one full load produces: normalized records for both point
/// views, plus the region statistics and the header aggregates.
#[derive(Debug)]
pub struct ViewData {
    pub events: Vec<GeoRecord>,
    pub cities: Vec<GeoRecord>,
    pub regions: RegionResolver,
    pub population: PopulationResponse,
    pub stats: StatsResponse,
}

/// Fetches all datasets from `provider` and normalizes them.
///
/// Any single endpoint failure fails the load as a whole; partial view
/// data is worse than a visible retry.
pub async fn load_view_data(provider: &dyn DataProvider) -> Result<ViewData, FetchError> {
    let events = provider.earthquakes().await?;
    let cities = provider.cities(CityFilter::default()).await?;
    let population = provider.population().await?;
    let stats = provider.stats().await?;

    let events = model::ingest::ingest_events(&events);
    let cities = model::ingest::ingest_cities(&cities.cities);
    let regions = RegionResolver::new(&population);

    info!(
        events = events.len(),
        cities = cities.len(),
        countries = population.data.len(),
        "view data loaded"
    );

    Ok(ViewData {
        events,
        cities,
        regions,
        population,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::{FetchGate, LoadState, load_view_data};
    use crate::provider::MemoryProvider;

    #[test]
    fn only_the_latest_generation_is_accepted() {
        let gate = FetchGate::new();
        let first = gate.begin();
        let second = gate.begin();

        assert_eq!(gate.accept(first, "stale"), None);
        assert_eq!(gate.accept(second, "fresh"), Some("fresh"));
    }

    #[test]
    fn invalidate_retires_the_in_flight_load() {
        let gate = FetchGate::new();
        let generation = gate.begin();
        gate.invalidate();
        assert!(!gate.is_current(generation));
        assert_eq!(gate.accept(generation, 42), None);
    }

    #[test]
    fn a_generation_stays_current_until_superseded() {
        let gate = FetchGate::new();
        let generation = gate.begin();
        assert!(gate.is_current(generation));
        assert_eq!(gate.accept(generation, 1), Some(1));
        // Accepting is not consuming; the same stamp still passes.
        assert_eq!(gate.accept(generation, 2), Some(2));
    }

    #[tokio::test]
    async fn full_load_normalizes_every_dataset() {
        let data = load_view_data(&MemoryProvider::new()).await.unwrap();
        assert_eq!(data.events.len(), 25);
        assert_eq!(data.cities.len(), 35);
        assert_eq!(data.population.data.len(), 56);
        assert_eq!(data.stats.earthquakes.total, 25);

        let state = LoadState::Ready(data);
        assert!(state.is_ready());
        assert!(!LoadState::<()>::Loading.is_ready());
    }
}
