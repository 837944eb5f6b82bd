//! Render façades for the three views.
//!
//! Each façade turns normalized records into renderer-agnostic draw
//! primitives: the flat scatter view (event markers plus arcs), the globe
//! view (city entities behind a renderer trait), and the flat choropleth
//! (region shapes plus a legend). No façade owns a GPU or a DOM; the host
//! embedding decides how primitives get to pixels.

pub mod choropleth;
pub mod globe;
pub mod primitives;
pub mod scatter;

pub use choropleth::*;
pub use globe::*;
pub use primitives::*;
pub use scatter::*;
