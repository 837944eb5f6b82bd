//! Region identifier resolution.
//!
//! The region geometry source keys countries by ISO numeric code; the
//! statistics dataset keys them by ISO alpha-3. The mapping between the two
//! is a fixed, finite table, and a miss is not an error: it resolves to the
//! "Unknown" sentinel so the region still renders in the neutral fill.

use std::collections::BTreeMap;
use std::collections::HashMap;

use datasets::wire::{CountryEntry, PopulationResponse};
use foundation::ids::RecordId;
use foundation::math::LonLat;
use serde_json::Value;

use crate::record::{normalize_country, GeoRecord, RecordKind};

/// Label carried by the sentinel record for unmapped geometry ids.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// ISO numeric -> alpha-3, sorted by numeric code for binary search.
/// Covers exactly the countries present in the statistics dataset.
const NUMERIC_TO_ALPHA: &[(&str, &str)] = &[
    ("012", "DZA"),
    ("031", "AZE"),
    ("032", "ARG"),
    ("036", "AUS"),
    ("040", "AUT"),
    ("050", "BGD"),
    ("056", "BEL"),
    ("076", "BRA"),
    ("124", "CAN"),
    ("156", "CHN"),
    ("170", "COL"),
    ("203", "CZE"),
    ("208", "DNK"),
    ("231", "ETH"),
    ("246", "FIN"),
    ("250", "FRA"),
    ("276", "DEU"),
    ("300", "GRC"),
    ("348", "HUN"),
    ("356", "IND"),
    ("360", "IDN"),
    ("364", "IRN"),
    ("368", "IRQ"),
    ("372", "IRL"),
    ("376", "ISR"),
    ("380", "ITA"),
    ("392", "JPN"),
    ("404", "KEN"),
    ("410", "KOR"),
    ("458", "MYS"),
    ("484", "MEX"),
    ("504", "MAR"),
    ("528", "NLD"),
    ("554", "NZL"),
    ("566", "NGA"),
    ("578", "NOR"),
    ("586", "PAK"),
    ("604", "PER"),
    ("608", "PHL"),
    ("616", "POL"),
    ("620", "PRT"),
    ("643", "RUS"),
    ("682", "SAU"),
    ("702", "SGP"),
    ("704", "VNM"),
    ("710", "ZAF"),
    ("724", "ESP"),
    ("752", "SWE"),
    ("756", "CHE"),
    ("764", "THA"),
    ("792", "TUR"),
    ("804", "UKR"),
    ("818", "EGY"),
    ("826", "GBR"),
    ("834", "TZA"),
    ("840", "USA"),
];

/// Looks up the alpha-3 code for an ISO numeric geometry id.
pub fn alpha3_for_numeric(numeric_id: &str) -> Option<&'static str> {
    NUMERIC_TO_ALPHA
        .binary_search_by_key(&numeric_id, |&(numeric, _)| numeric)
        .ok()
        .map(|idx| NUMERIC_TO_ALPHA[idx].1)
}

/// One region outline from the geometry source: the numeric id plus its
/// polygon rings (outer ring first).
#[derive(Debug, Clone, PartialEq)]
pub struct RegionGeometry {
    pub numeric_id: String,
    pub rings: Vec<Vec<LonLat>>,
}

/// Resolves geometry ids to region statistics records.
///
/// Built once per dataset load; `resolve` is total and should be called once
/// per region per render pass (the geometry set is static), not per frame.
#[derive(Debug, Clone)]
pub struct RegionResolver {
    stats: HashMap<String, CountryEntry>,
}

impl RegionResolver {
    pub fn new(population: &PopulationResponse) -> Self {
        Self {
            stats: population
                .data
                .iter()
                .map(|(alpha3, entry)| (alpha3.clone(), entry.clone()))
                .collect(),
        }
    }

    /// Inner lookup: numeric geometry id -> (alpha-3, statistics entry).
    pub fn lookup(&self, numeric_id: &str) -> Option<(&'static str, &CountryEntry)> {
        let alpha3 = alpha3_for_numeric(numeric_id)?;
        self.stats.get(alpha3).map(|entry| (alpha3, entry))
    }

    /// Total resolution: every geometry id, known or not, yields a record.
    ///
    /// A known id joins the geometry with the country's statistics; a miss
    /// yields the sentinel (`label = "Unknown"`, `metric = NaN`), which the
    /// classifier maps to the no-data class.
    pub fn resolve(&self, id: RecordId, geometry: &RegionGeometry) -> GeoRecord {
        let known = self.lookup(&geometry.numeric_id).and_then(|(alpha3, entry)| {
            normalize_country(id, alpha3, entry, geometry.rings.clone()).ok()
        });

        let mut record = known.unwrap_or_else(|| GeoRecord {
            id,
            kind: RecordKind::Region,
            position: None,
            rings: geometry.rings.clone(),
            metric: f64::NAN,
            label: UNKNOWN_LABEL.to_string(),
            attributes: BTreeMap::new(),
        });
        record.attributes.insert(
            "geometry_id".to_string(),
            Value::from(geometry.numeric_id.clone()),
        );
        record
    }
}
