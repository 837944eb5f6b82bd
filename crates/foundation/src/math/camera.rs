//! Perspective globe camera.
//!
//! Projects geodetic positions to screen space for the 3D views. The camera
//! orbits a center point on the ellipsoid: `zoom` sets the orbit distance,
//! `pitch_deg` tilts away from nadir, `bearing_deg` rotates about the local
//! vertical.

use super::geodesy::Geodetic;
use super::projection::Viewport;
use super::vec::{LonLat, Vec2, Vec3};

/// Orbit altitude at zoom 0; each zoom level halves the altitude.
pub const BASE_ALTITUDE_M: f64 = 20_000_000.0;

/// Vertical field of view in degrees.
pub const FOV_DEG: f64 = 60.0;

/// Near plane distance (meters); points at or behind it clamp to the screen
/// edge instead of dividing toward infinity.
const NEAR_M: f64 = 1.0;

/// Pitch ceiling; at 90 degrees the orbit basis degenerates.
const MAX_PITCH_DEG: f64 = 85.0;

/// View state for the perspective views. One writer: the active view's
/// gesture handler.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GlobeView {
    pub center: LonLat,
    pub zoom: f64,
    pub pitch_deg: f64,
    pub bearing_deg: f64,
}

impl GlobeView {
    pub fn new(center: LonLat, zoom: f64, pitch_deg: f64, bearing_deg: f64) -> Self {
        Self {
            center,
            zoom,
            pitch_deg,
            bearing_deg,
        }
    }

    pub fn altitude_m(&self) -> f64 {
        BASE_ALTITUDE_M / 2f64.powf(self.zoom.max(0.0))
    }
}

#[derive(Debug, Copy, Clone)]
struct CameraBasis {
    eye: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
}

fn camera_basis(view: &GlobeView) -> CameraBasis {
    let center = Geodetic::on_surface(view.center.canonical());
    let target = center.to_ecef();
    let (east, north, up) = center.enu_basis();

    let pitch = view.pitch_deg.clamp(0.0, MAX_PITCH_DEG).to_radians();
    let bearing = view.bearing_deg.to_radians();

    // Horizontal component of the orbit offset: bearing 0 places the camera
    // south of the target looking north.
    let heading = north.scale(bearing.cos()) + east.scale(bearing.sin());

    let offset = up.scale(pitch.cos()) - heading.scale(pitch.sin());
    let eye = target + offset.scale(view.altitude_m());

    let forward = (target - eye).normalized().unwrap_or(up.scale(-1.0));
    // `heading` is never parallel to `forward` with pitch clamped below 90.
    let right = forward
        .cross(heading)
        .normalized()
        .unwrap_or(east);
    let cam_up = right.cross(forward);

    CameraBasis {
        eye,
        forward,
        right,
        up: cam_up,
    }
}

/// Projects a geodetic position to screen space under `view`.
///
/// Total over finite input: positions behind the camera plane clamp to the
/// nearest screen edge rather than producing NaN. Pure; re-projection of the
/// same inputs yields the same point.
pub fn project_globe(p: Geodetic, viewport: Viewport, view: &GlobeView) -> Vec2 {
    let basis = camera_basis(view);
    let v = p.to_ecef() - basis.eye;

    let z = v.dot(basis.forward);
    let x = v.dot(basis.right);
    let y = v.dot(basis.up);

    if z < NEAR_M {
        return clamp_to_edge(x, y, viewport);
    }

    let focal = (viewport.height / 2.0) / (FOV_DEG.to_radians() / 2.0).tan();
    let center = viewport.center();
    Vec2::new(center.x + focal * x / z, center.y - focal * y / z)
}

fn clamp_to_edge(x: f64, y: f64, viewport: Viewport) -> Vec2 {
    let center = viewport.center();
    let len = (x * x + y * y).sqrt();
    if len <= 0.0 || !len.is_finite() {
        // Directly behind the eye on-axis; pick the bottom edge.
        return Vec2::new(center.x, viewport.height);
    }
    // Push along the screen-space direction until the viewport boundary.
    let dx = x / len;
    let dy = -y / len;
    let extent = viewport.width.max(viewport.height);
    let px = (center.x + dx * extent).clamp(0.0, viewport.width);
    let py = (center.y + dy * extent).clamp(0.0, viewport.height);
    Vec2::new(px, py)
}
