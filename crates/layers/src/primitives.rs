use foundation::ids::RecordId;
use foundation::math::Vec2;
use symbology::classify::Rgba8;

/// A filled circle in screen space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MarkerPrimitive {
    pub record: RecordId,
    pub center: Vec2,
    pub radius_px: f64,
    pub fill: Rgba8,
    pub stroke: Rgba8,
    pub stroke_width_px: f32,
}

/// A screen-space arc from a source to a target point, color-interpolated
/// between the two endpoints.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcPrimitive {
    pub record: RecordId,
    pub source: Vec2,
    pub target: Vec2,
    pub source_color: Rgba8,
    pub target_color: Rgba8,
    pub width_px: f32,
}

/// A filled region outline in screen space, outer ring first.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonPrimitive {
    pub record: RecordId,
    pub rings: Vec<Vec<Vec2>>,
    pub fill: Rgba8,
    pub stroke: Rgba8,
    pub stroke_width_px: f32,
}

/// One swatch of a legend, lowest class first.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub swatch: Rgba8,
}
