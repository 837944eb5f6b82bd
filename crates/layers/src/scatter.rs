//! Flat scatter view: event markers sized by magnitude, plus origin arcs.

use foundation::math::geodesy::WGS84_A;
use foundation::math::{FlatView, LonLat, Viewport, project_flat};
use model::record::GeoRecord;
use scene::hit::MarkerTarget;
use symbology::classify::{Rgba8, ThresholdScale};
use symbology::ramps::magnitude_scale;
use symbology::size::magnitude_radius_px;

use crate::primitives::{ArcPrimitive, MarkerPrimitive};

/// Whole-layer opacity the host should composite the markers with.
pub const LAYER_OPACITY: f32 = 0.8;

/// Marker outline: faint white, one pixel.
pub const MARKER_STROKE: Rgba8 = Rgba8::new(255, 255, 255, 100);
pub const MARKER_STROKE_WIDTH_PX: f32 = 1.0;

/// Arc endpoint colors: cyan at the event, violet at the origin.
pub const ARC_SOURCE_COLOR: Rgba8 = Rgba8::new(0, 212, 255, 150);
pub const ARC_TARGET_COLOR: Rgba8 = Rgba8::new(124, 58, 237, 150);
pub const ARC_WIDTH_PX: f32 = 2.0;

/// Only the first few events get arcs; a full set is visual noise.
pub const ARC_COUNT: usize = 10;

/// Builds scatter draw primitives for one viewport.
pub struct ScatterFacade {
    view: FlatView,
    scale: ThresholdScale,
}

impl ScatterFacade {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            view: FlatView::fit(viewport),
            scale: magnitude_scale(),
        }
    }

    pub fn view(&self) -> &FlatView {
        &self.view
    }

    /// Ground meters per screen pixel at the current view scale.
    ///
    /// One projection unit spans roughly one Earth radian at the equator,
    /// which is close enough for marker sizing; the pixel clamp absorbs
    /// the rest.
    fn meters_per_pixel(&self) -> f64 {
        WGS84_A / self.view.scale
    }

    /// One marker per point record; records without a position are skipped.
    pub fn markers(&self, events: &[GeoRecord]) -> Vec<MarkerPrimitive> {
        let meters_per_pixel = self.meters_per_pixel();
        events
            .iter()
            .filter_map(|record| {
                let position = record.position?;
                Some(MarkerPrimitive {
                    record: record.id,
                    center: project_flat(position, &self.view),
                    radius_px: magnitude_radius_px(record.metric, meters_per_pixel),
                    fill: self.scale.classify(record.metric).color,
                    stroke: MARKER_STROKE,
                    stroke_width_px: MARKER_STROKE_WIDTH_PX,
                })
            })
            .collect()
    }

    /// Arcs from the first [`ARC_COUNT`] events to the null island origin.
    pub fn arcs(&self, events: &[GeoRecord]) -> Vec<ArcPrimitive> {
        let target = project_flat(LonLat::new(0.0, 0.0), &self.view);
        events
            .iter()
            .take(ARC_COUNT)
            .filter_map(|record| {
                let position = record.position?;
                Some(ArcPrimitive {
                    record: record.id,
                    source: project_flat(position, &self.view),
                    target,
                    source_color: ARC_SOURCE_COLOR,
                    target_color: ARC_TARGET_COLOR,
                    width_px: ARC_WIDTH_PX,
                })
            })
            .collect()
    }

    /// Hit targets matching [`Self::markers`] one to one.
    pub fn hit_targets(&self, events: &[GeoRecord]) -> Vec<MarkerTarget> {
        self.markers(events)
            .into_iter()
            .map(|m| MarkerTarget {
                record: m.record,
                center: m.center,
                radius_px: m.radius_px,
            })
            .collect()
    }
}
