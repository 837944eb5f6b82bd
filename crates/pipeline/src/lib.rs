//! Data acquisition for the views.
//!
//! A [`DataProvider`] hands out the four dataset payloads; the load module
//! turns them into normalized records and guards against stale async
//! completions when the active view changes mid-flight.

pub mod load;
pub mod provider;

pub use load::*;
pub use provider::*;
