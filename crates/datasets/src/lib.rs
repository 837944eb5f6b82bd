//! Shared dataset types and the embedded static datasets.
//!
//! These are the wire types for the four read-only data resources, used by
//! both the server side (serialization) and the fetch side
//! (deserialization), plus the in-memory datasets themselves.

pub mod static_data;
pub mod stats;
pub mod wire;

pub use stats::*;
pub use wire::*;
