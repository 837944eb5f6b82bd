pub mod camera;
pub mod geodesy;
pub mod precision;
pub mod projection;
pub mod vec;

pub use camera::*;
pub use geodesy::*;
pub use precision::*;
pub use projection::*;
pub use vec::*;
