//! Globe view: city entities behind a renderer trait.
//!
//! The façade never talks to a 3D engine directly. It builds entity
//! descriptions and hands them to an injected [`GlobeRenderer`], so the
//! classification and sizing logic is testable against a recording stub.

use foundation::ids::RecordId;
use foundation::math::geodesy::Geodetic;
use foundation::math::{GlobeView, LonLat, Vec2, Viewport, project_globe};
use model::record::GeoRecord;
use scene::hit::MarkerTarget;
use symbology::classify::{Rgba8, ThresholdScale};
use symbology::ramps::city_population_scale;

/// Point outline: white, two pixels, matching the label outline in black.
pub const POINT_OUTLINE: Rgba8 = Rgba8::opaque(255, 255, 255);
pub const POINT_OUTLINE_WIDTH_PX: f32 = 2.0;
pub const LABEL_OUTLINE: Rgba8 = Rgba8::opaque(0, 0, 0);

/// Labels fade out beyond this camera distance.
pub const LABEL_VISIBLE_WITHIN_M: f64 = 8_000_000.0;

/// Label anchor offset above the point.
pub const LABEL_OFFSET_PX: Vec2 = Vec2 { x: 0.0, y: -20.0 };

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointGraphics {
    pub pixel_size: f32,
    pub color: Rgba8,
    pub outline_color: Rgba8,
    pub outline_width_px: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelGraphics {
    pub text: String,
    pub outline_color: Rgba8,
    pub offset_px: Vec2,
    pub visible_within_m: f64,
}

/// One globe entity: a surface point, its label, and the structured
/// description fields shown in the detail balloon.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobeEntity {
    pub record: RecordId,
    pub position: Geodetic,
    pub point: PointGraphics,
    pub label: LabelGraphics,
    pub description: Vec<(String, String)>,
}

/// A camera move request.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FlyTo {
    pub destination: Geodetic,
    pub duration_s: f64,
}

impl FlyTo {
    /// Frames a [`GlobeView`], converting its zoom to camera altitude.
    pub fn from_view(view: &GlobeView, duration_s: f64) -> Self {
        Self {
            destination: Geodetic::new(view.center, view.altitude_m()),
            duration_s,
        }
    }
}

/// What the façade needs from a 3D globe engine.
pub trait GlobeRenderer {
    fn add_entity(&mut self, entity: GlobeEntity);
    fn clear(&mut self);
    fn fly_to(&mut self, fly: FlyTo);
}

/// Builds globe entities from city records.
///
/// The façade owns its renderer handle: the engine instance is created by
/// the host, moved in here, and destroyed when the façade drops with the
/// view. No globals.
pub struct GlobeFacade<R: GlobeRenderer> {
    renderer: R,
    scale: ThresholdScale,
}

impl<R: GlobeRenderer> GlobeFacade<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            scale: city_population_scale(),
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The home framing: whole-hemisphere view over Africa, 2s flight.
    pub fn home() -> FlyTo {
        FlyTo {
            destination: Geodetic::new(LonLat::new(20.0, 20.0), 25_000_000.0),
            duration_s: 2.0,
        }
    }

    pub fn entity(&self, record: &GeoRecord) -> Option<GlobeEntity> {
        let position = record.position?;
        let class = self.scale.classify(record.metric);
        Some(GlobeEntity {
            record: record.id,
            position: Geodetic::on_surface(position),
            point: PointGraphics {
                pixel_size: class.size_px,
                color: class.color,
                outline_color: POINT_OUTLINE,
                outline_width_px: POINT_OUTLINE_WIDTH_PX,
            },
            label: LabelGraphics {
                text: record.label.clone(),
                outline_color: LABEL_OUTLINE,
                offset_px: LABEL_OFFSET_PX,
                visible_within_m: LABEL_VISIBLE_WITHIN_M,
            },
            description: description_fields(record, position),
        })
    }

    /// Clears the renderer, adds one entity per city, then flies home.
    pub fn sync(&mut self, cities: &[GeoRecord]) {
        self.renderer.clear();
        for record in cities {
            if let Some(entity) = self.entity(record) {
                self.renderer.add_entity(entity);
            }
        }
        self.renderer.fly_to(Self::home());
    }

    /// Screen hit targets for the current camera.
    ///
    /// Radii match the point graphics; the same picker serves both flat
    /// and globe views.
    pub fn hit_targets(
        &self,
        cities: &[GeoRecord],
        viewport: Viewport,
        view: &GlobeView,
    ) -> Vec<MarkerTarget> {
        cities
            .iter()
            .filter_map(|record| {
                let position = record.position?;
                let class = self.scale.classify(record.metric);
                Some(MarkerTarget {
                    record: record.id,
                    center: project_globe(Geodetic::on_surface(position), viewport, view),
                    radius_px: f64::from(class.size_px),
                })
            })
            .collect()
    }
}

/// Balloon rows in display order; string attributes pass through as-is.
fn description_fields(record: &GeoRecord, position: LonLat) -> Vec<(String, String)> {
    let mut fields = Vec::with_capacity(4);
    for key in ["country", "continent"] {
        if let Some(value) = record.attributes.get(key).and_then(|v| v.as_str()) {
            fields.push((capitalize(key), value.to_string()));
        }
    }
    if record.metric.is_finite() {
        fields.push((
            "Population".to_string(),
            format!("{:.1} Million", record.metric / 1_000_000.0),
        ));
    }
    fields.push((
        "Coordinates".to_string(),
        format!("{:.4}°, {:.4}°", position.lat_deg, position.lon_deg),
    ));
    fields
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
