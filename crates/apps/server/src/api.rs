//! The dataset API surface.
//!
//! Everything is served from the embedded tables; the payloads are built
//! once at startup and cloned per response. Stats are computed from the
//! same tables, so the header aggregates can never drift from the data.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::Method;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use datasets::static_data;
use datasets::stats::compute_stats;
use datasets::wire::{
    filter_cities, CitiesResponse, City, CityFilter, FeatureCollection, PopulationResponse,
    StatsResponse,
};

#[derive(Clone)]
pub struct AppState {
    earthquakes: Arc<FeatureCollection>,
    cities: Arc<Vec<City>>,
    population: Arc<PopulationResponse>,
    stats: Arc<StatsResponse>,
}

impl AppState {
    pub fn new() -> Self {
        let earthquakes = static_data::earthquakes();
        let cities = static_data::cities();
        let population = static_data::population();
        let stats = compute_stats(&earthquakes, &cities, &population.data);
        Self {
            earthquakes: Arc::new(earthquakes),
            cities: Arc::new(cities),
            population: Arc::new(population),
            stats: Arc::new(stats),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods([Method::GET, Method::OPTIONS]);

    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/data", get(get_index))
        .route("/api/data/earthquakes", get(get_earthquakes))
        .route("/api/data/cities", get(get_cities))
        .route("/api/data/population", get(get_population))
        .route("/api/data/stats", get(get_stats))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new())
}

async fn healthz() -> Json<Value> {
    Json(json!({ "status": "OK" }))
}

async fn get_index() -> Json<Value> {
    Json(json!({
        "message": "Geospatial Data API",
        "endpoints": {
            "earthquakes": "/api/data/earthquakes",
            "cities": "/api/data/cities",
            "population": "/api/data/population",
            "stats": "/api/data/stats",
        }
    }))
}

async fn get_earthquakes(State(state): State<AppState>) -> Json<FeatureCollection> {
    Json(state.earthquakes.as_ref().clone())
}

async fn get_cities(
    State(state): State<AppState>,
    Query(filter): Query<CityFilter>,
) -> Json<CitiesResponse> {
    let cities = filter_cities(&state.cities, &filter);
    Json(CitiesResponse {
        count: cities.len(),
        cities,
    })
}

async fn get_population(State(state): State<AppState>) -> Json<PopulationResponse> {
    Json(state.population.as_ref().clone())
}

async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.stats.as_ref().clone())
}

#[cfg(test)]
mod tests {
    use super::{get_cities, get_earthquakes, get_stats, AppState};
    use axum::extract::{Query, State};
    use datasets::wire::CityFilter;

    #[tokio::test]
    async fn earthquakes_payload_is_the_full_collection() {
        let state = AppState::new();
        let resp = get_earthquakes(State(state)).await;
        assert_eq!(resp.0.features.len(), 25);
        assert_eq!(resp.0.kind, "FeatureCollection");
    }

    #[tokio::test]
    async fn city_query_filters_compose() {
        let state = AppState::new();
        let resp = get_cities(
            State(state),
            Query(CityFilter {
                continent: Some("Asia".to_string()),
                min_population: Some(20_000_000),
            }),
        )
        .await;
        let names: Vec<&str> = resp.0.cities.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Tokyo", "Delhi", "Shanghai", "Dhaka", "Mumbai", "Beijing"]
        );
        assert_eq!(resp.0.count, 6);
    }

    #[tokio::test]
    async fn stats_are_precomputed_from_the_tables() {
        let resp = get_stats(State(AppState::new())).await;
        assert_eq!(resp.0.earthquakes.total, 25);
        assert_eq!(resp.0.countries.total, 56);
        assert!(resp.0.earthquakes.max_magnitude >= 6.0);
    }
}
