//! Wire types for the data API.
//!
//! Field names follow the JSON the endpoints serve; the serde shapes are
//! shared between the server handlers and the fetch client so the two sides
//! cannot drift.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// GeoJSON-like collection of point events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            kind: "FeatureCollection".to_string(),
            features,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
    pub geometry: PointGeometry,
    pub properties: EventProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub kind: String,
    /// Longitude, latitude (GeoJSON order).
    pub coordinates: [f64; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventProperties {
    /// Absent or non-numeric magnitudes are tolerated; they classify as
    /// no-data downstream.
    #[serde(default)]
    pub mag: Option<f64>,
    pub place: String,
    pub time: i64,
    pub depth: f64,
}

/// One point-of-interest marker row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub id: u32,
    pub name: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    pub population: u64,
    pub continent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitiesResponse {
    pub count: usize,
    pub cities: Vec<City>,
}

/// Query filters for the cities resource.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CityFilter {
    /// Case-insensitive exact match.
    pub continent: Option<String>,
    /// Inclusive lower bound.
    #[serde(rename = "minPopulation")]
    pub min_population: Option<u64>,
}

impl CityFilter {
    pub fn matches(&self, city: &City) -> bool {
        if let Some(continent) = &self.continent {
            if !city.continent.eq_ignore_ascii_case(continent) {
                return false;
            }
        }
        if let Some(min) = self.min_population {
            if city.population < min {
                return false;
            }
        }
        true
    }
}

pub fn filter_cities(cities: &[City], filter: &CityFilter) -> Vec<City> {
    cities
        .iter()
        .filter(|c| filter.matches(c))
        .cloned()
        .collect()
}

/// Region-aggregated statistics keyed by ISO alpha-3 code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationResponse {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: BTreeMap<String, CountryEntry>,
}

impl PopulationResponse {
    pub fn new(data: BTreeMap<String, CountryEntry>) -> Self {
        Self {
            kind: "countries".to_string(),
            data,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryEntry {
    pub name: String,
    /// Inhabitants per square kilometer.
    pub density: f64,
    pub population: u64,
}

/// Aggregates for the header display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub earthquakes: EarthquakeStats,
    pub cities: CityAggregate,
    pub countries: CountryAggregate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarthquakeStats {
    pub total: usize,
    pub avg_magnitude: f64,
    pub max_magnitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityAggregate {
    pub total: usize,
    pub total_population: u64,
    pub continents: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryAggregate {
    pub total: usize,
    pub avg_density: f64,
}
