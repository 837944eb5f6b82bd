//! Metric classification and visual encodings.
//!
//! A [`ThresholdScale`] partitions a metric into ordered classes; the ramps
//! module carries the concrete scales each view uses. Classification is pure:
//! same metric, same scale, same class.

pub mod classify;
pub mod ramps;
pub mod size;

pub use classify::*;
pub use ramps::*;
pub use size::*;
