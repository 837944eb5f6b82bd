//! Pointer interaction state and deterministic hit-testing.
//!
//! The interaction controller is a pure state machine over pointer events;
//! the hit module maps a screen position to the record under it. Neither
//! touches a renderer, so both are testable without one.

pub mod hit;
pub mod interaction;

pub use hit::*;
pub use interaction::*;
