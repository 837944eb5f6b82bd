//! Aggregates for the header display.

use std::collections::BTreeMap;

use crate::wire::{
    City, CityAggregate, CountryAggregate, CountryEntry, EarthquakeStats, FeatureCollection,
    StatsResponse,
};

/// Computes the aggregate stats from the three datasets.
///
/// Continents are listed in first-appearance order, matching the order the
/// rows carry them.
pub fn compute_stats(
    earthquakes: &FeatureCollection,
    cities: &[City],
    countries: &BTreeMap<String, CountryEntry>,
) -> StatsResponse {
    let mags: Vec<f64> = earthquakes
        .features
        .iter()
        .filter_map(|f| f.properties.mag)
        .collect();
    let avg_magnitude = if mags.is_empty() {
        0.0
    } else {
        round2(mags.iter().sum::<f64>() / mags.len() as f64)
    };
    let max_magnitude = mags.iter().copied().fold(0.0, f64::max);

    let mut continents: Vec<String> = Vec::new();
    for city in cities {
        if !continents.iter().any(|c| c == &city.continent) {
            continents.push(city.continent.clone());
        }
    }

    let avg_density = if countries.is_empty() {
        0.0
    } else {
        (countries.values().map(|c| c.density).sum::<f64>() / countries.len() as f64).round()
    };

    StatsResponse {
        earthquakes: EarthquakeStats {
            total: earthquakes.features.len(),
            avg_magnitude,
            max_magnitude,
        },
        cities: CityAggregate {
            total: cities.len(),
            total_population: cities.iter().map(|c| c.population).sum(),
            continents,
        },
        countries: CountryAggregate {
            total: countries.len(),
            avg_density,
        },
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
