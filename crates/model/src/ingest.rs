//! Batch normalization with per-record error isolation.
//!
//! One malformed item never aborts the batch: the record is dropped, the
//! rest keep their dense id assignment, and the drop count is logged once
//! per batch.

use datasets::wire::{City, FeatureCollection};
use foundation::ids::RecordId;
use tracing::warn;

use crate::record::{normalize_city, normalize_event, GeoRecord};

pub fn ingest_events(collection: &FeatureCollection) -> Vec<GeoRecord> {
    let mut records = Vec::with_capacity(collection.features.len());
    let mut dropped = 0usize;

    for feature in &collection.features {
        match normalize_event(RecordId::new(records.len() as u32), feature) {
            Ok(record) => records.push(record),
            Err(_) => dropped += 1,
        }
    }

    if dropped > 0 {
        warn!("dropped {dropped} malformed event record(s) of {}", collection.features.len());
    }
    records
}

pub fn ingest_cities(cities: &[City]) -> Vec<GeoRecord> {
    let mut records = Vec::with_capacity(cities.len());
    let mut dropped = 0usize;

    for city in cities {
        match normalize_city(RecordId::new(records.len() as u32), city) {
            Ok(record) => records.push(record),
            Err(_) => dropped += 1,
        }
    }

    if dropped > 0 {
        warn!("dropped {dropped} malformed city record(s) of {}", cities.len());
    }
    records
}
