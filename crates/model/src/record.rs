use std::collections::BTreeMap;

use datasets::wire::{City, CountryEntry, Feature};
use foundation::ids::RecordId;
use foundation::math::LonLat;
use serde_json::Value;

use crate::error::MalformedRecordError;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RecordKind {
    Point,
    Region,
}

/// One plottable entity, normalized from a raw dataset item.
///
/// Invariants, enforced at construction:
/// - `Point` records carry a present, finite `position` and no rings.
/// - `Region` records carry a non-empty ring set and no position.
///
/// Records are created once per incoming dataset item and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoRecord {
    pub id: RecordId,
    pub kind: RecordKind,
    pub position: Option<LonLat>,
    /// Outer ring first, holes after, matching the geometry source.
    pub rings: Vec<Vec<LonLat>>,
    /// Classification metric (magnitude, population, density). NaN means
    /// no data; the classifier maps it to the no-data class.
    pub metric: f64,
    pub label: String,
    pub attributes: BTreeMap<String, Value>,
}

impl GeoRecord {
    pub fn point(
        id: RecordId,
        position: LonLat,
        metric: f64,
        label: impl Into<String>,
        attributes: BTreeMap<String, Value>,
    ) -> Result<Self, MalformedRecordError> {
        let label = label.into();
        if !position.is_finite() {
            return Err(MalformedRecordError::BadPosition(label));
        }
        Ok(Self {
            id,
            kind: RecordKind::Point,
            position: Some(position),
            rings: Vec::new(),
            metric,
            label,
            attributes,
        })
    }

    pub fn region(
        id: RecordId,
        rings: Vec<Vec<LonLat>>,
        metric: f64,
        label: impl Into<String>,
        attributes: BTreeMap<String, Value>,
    ) -> Result<Self, MalformedRecordError> {
        let label = label.into();
        if rings.is_empty() || rings.iter().all(|r| r.is_empty()) {
            return Err(MalformedRecordError::EmptyGeometry(label));
        }
        Ok(Self {
            id,
            kind: RecordKind::Region,
            position: None,
            rings,
            metric,
            label,
            attributes,
        })
    }

    pub fn has_metric(&self) -> bool {
        self.metric.is_finite()
    }
}

/// Normalizes one GeoJSON point feature (an event record).
pub fn normalize_event(id: RecordId, feature: &Feature) -> Result<GeoRecord, MalformedRecordError> {
    let [lon, lat] = feature.geometry.coordinates;
    let metric = feature.properties.mag.unwrap_or(f64::NAN);

    let mut attributes = BTreeMap::new();
    attributes.insert("depth".to_string(), Value::from(feature.properties.depth));
    attributes.insert("time".to_string(), Value::from(feature.properties.time));

    GeoRecord::point(
        id,
        LonLat::new(lon, lat),
        metric,
        feature.properties.place.clone(),
        attributes,
    )
}

/// Normalizes one city row (a point-of-interest marker).
pub fn normalize_city(id: RecordId, city: &City) -> Result<GeoRecord, MalformedRecordError> {
    let mut attributes = BTreeMap::new();
    attributes.insert("country".to_string(), Value::from(city.country.clone()));
    attributes.insert("continent".to_string(), Value::from(city.continent.clone()));

    GeoRecord::point(
        id,
        LonLat::new(city.lon, city.lat),
        city.population as f64,
        city.name.clone(),
        attributes,
    )
}

/// Normalizes one country statistics entry joined with its outline.
pub fn normalize_country(
    id: RecordId,
    alpha3: &str,
    entry: &CountryEntry,
    rings: Vec<Vec<LonLat>>,
) -> Result<GeoRecord, MalformedRecordError> {
    let mut attributes = BTreeMap::new();
    attributes.insert("alpha3".to_string(), Value::from(alpha3));
    attributes.insert("population".to_string(), Value::from(entry.population));

    GeoRecord::region(id, rings, entry.density, entry.name.clone(), attributes)
}

#[cfg(test)]
mod tests {
    use super::{normalize_city, normalize_country, normalize_event, GeoRecord, RecordKind};
    use crate::error::MalformedRecordError;
    use datasets::static_data;
    use foundation::ids::RecordId;
    use foundation::math::LonLat;
    use std::collections::BTreeMap;

    #[test]
    fn event_normalizes_to_a_point_record() {
        let fc = static_data::earthquakes();
        let rec = normalize_event(RecordId::new(0), &fc.features[2]).unwrap();
        assert_eq!(rec.kind, RecordKind::Point);
        assert_eq!(rec.label, "Japan");
        assert_eq!(rec.metric, 6.2);
        let pos = rec.position.unwrap();
        assert!((pos.lon_deg - 141.7589).abs() < 1e-9);
        assert_eq!(rec.attributes["depth"], serde_json::json!(50.5));
    }

    #[test]
    fn city_normalizes_population_as_metric() {
        let cities = static_data::cities();
        let rec = normalize_city(RecordId::new(0), &cities[0]).unwrap();
        assert_eq!(rec.label, "Tokyo");
        assert_eq!(rec.metric, 37_400_000.0);
        assert_eq!(rec.attributes["continent"], serde_json::json!("Asia"));
    }

    #[test]
    fn non_finite_position_is_rejected() {
        let err = GeoRecord::point(
            RecordId::new(0),
            LonLat::new(f64::NAN, 10.0),
            1.0,
            "bad",
            BTreeMap::new(),
        )
        .unwrap_err();
        assert_eq!(err, MalformedRecordError::BadPosition("bad".to_string()));
    }

    #[test]
    fn missing_metric_becomes_nan_not_an_error() {
        let fc = static_data::earthquakes();
        let mut feature = fc.features[0].clone();
        feature.properties.mag = None;
        let rec = normalize_event(RecordId::new(0), &feature).unwrap();
        assert!(rec.metric.is_nan());
        assert!(!rec.has_metric());
    }

    #[test]
    fn country_entry_joins_with_its_outline() {
        let population = static_data::population();
        let entry = &population.data["JPN"];
        let rings = vec![vec![
            LonLat::new(130.0, 30.0),
            LonLat::new(146.0, 30.0),
            LonLat::new(146.0, 45.0),
            LonLat::new(130.0, 45.0),
        ]];
        let rec = normalize_country(RecordId::new(0), "JPN", entry, rings).unwrap();
        assert_eq!(rec.kind, RecordKind::Region);
        assert_eq!(rec.label, "Japan");
        assert_eq!(rec.metric, entry.density);
        assert_eq!(rec.attributes["alpha3"], serde_json::json!("JPN"));
    }

    #[test]
    fn region_requires_rings() {
        let err = GeoRecord::region(RecordId::new(0), Vec::new(), 1.0, "empty", BTreeMap::new())
            .unwrap_err();
        assert_eq!(err, MalformedRecordError::EmptyGeometry("empty".to_string()));
    }
}
