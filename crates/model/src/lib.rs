//! Normalized record model.
//!
//! Raw dataset items (GeoJSON point features, city rows, country statistics)
//! normalize into one uniform [`GeoRecord`] shape so classification,
//! projection and hit-testing are dataset-agnostic.

pub mod error;
pub mod ingest;
pub mod record;
pub mod regions;

pub use error::*;
pub use ingest::*;
pub use record::*;
pub use regions::*;
