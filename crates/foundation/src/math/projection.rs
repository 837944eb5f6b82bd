//! Flat world projection (Natural Earth I).
//!
//! The forward transform is the Natural Earth I polynomial; the inverse
//! recovers latitude by Newton iteration on the same polynomial. Both operate
//! on canonical coordinates (longitude wrapped, latitude clamped), so the
//! date line and the poles are handled without producing NaN.

use super::vec::{LonLat, Vec2};

/// Pixel dimensions of the drawing surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// View state for the flat projection: a uniform scale plus a screen-space
/// translation. Screen y grows downward.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FlatView {
    pub scale: f64,
    pub translate: Vec2,
}

impl FlatView {
    pub fn new(scale: f64, translate: Vec2) -> Self {
        Self { scale, translate }
    }

    /// Default framing: the whole world centered in the viewport.
    ///
    /// The divisor frames the full Natural Earth outline with a small
    /// margin (`width / 5.5`).
    pub fn fit(viewport: Viewport) -> Self {
        Self {
            scale: viewport.width / 5.5,
            translate: viewport.center(),
        }
    }
}

// Natural Earth I polynomial coefficients (Savric et al.).
fn natural_earth_raw(lambda: f64, phi: f64) -> (f64, f64) {
    let phi2 = phi * phi;
    let phi4 = phi2 * phi2;
    let x = lambda
        * (0.8707 - 0.131979 * phi2
            + phi4 * (-0.013791 + phi4 * (0.003971 * phi2 - 0.001529 * phi4)));
    let y = phi
        * (1.007226 + phi2 * (0.015085 + phi4 * (-0.044475 + 0.028874 * phi2 - 0.005916 * phi4)));
    (x, y)
}

fn natural_earth_y(phi: f64) -> f64 {
    let phi2 = phi * phi;
    let phi4 = phi2 * phi2;
    phi * (1.007226 + phi2 * (0.015085 + phi4 * (-0.044475 + 0.028874 * phi2 - 0.005916 * phi4)))
}

fn natural_earth_dy(phi: f64) -> f64 {
    let phi2 = phi * phi;
    let phi4 = phi2 * phi2;
    1.007226
        + phi2
            * (0.015085 * 3.0
                + phi4 * (-0.044475 * 7.0 + 0.028874 * 9.0 * phi2 - 0.005916 * 11.0 * phi4))
}

fn natural_earth_x_factor(phi: f64) -> f64 {
    let phi2 = phi * phi;
    let phi4 = phi2 * phi2;
    0.8707 - 0.131979 * phi2 + phi4 * (-0.013791 + phi4 * (0.003971 * phi2 - 0.001529 * phi4))
}

const INVERT_EPSILON: f64 = 1e-11;
const INVERT_MAX_ITERS: u32 = 25;

/// Projects a geographic position to screen space under `view`.
///
/// Pure and total: the input is canonicalized first, so any finite longitude
/// and latitude (including the date line and poles) yields finite screen
/// coordinates. Re-projection of the same inputs always yields the same
/// point.
pub fn project_flat(p: LonLat, view: &FlatView) -> Vec2 {
    let p = p.canonical();
    let (x, y) = natural_earth_raw(p.lon_deg.to_radians(), p.lat_deg.to_radians());
    Vec2::new(
        view.translate.x + x * view.scale,
        view.translate.y - y * view.scale,
    )
}

/// Inverse of [`project_flat`] for hit-testing.
///
/// Returns `None` when the screen point lies outside the projected world
/// outline (there is no geographic position under the cursor).
pub fn unproject_flat(screen: Vec2, view: &FlatView) -> Option<LonLat> {
    if view.scale <= 0.0 {
        return None;
    }
    let x = (screen.x - view.translate.x) / view.scale;
    let y = (view.translate.y - screen.y) / view.scale;

    // Newton iteration on the y polynomial to recover phi.
    let mut phi = y;
    for _ in 0..INVERT_MAX_ITERS {
        let delta = (natural_earth_y(phi) - y) / natural_earth_dy(phi);
        phi -= delta;
        if delta.abs() <= INVERT_EPSILON {
            break;
        }
    }
    if !phi.is_finite() || phi.abs() > std::f64::consts::FRAC_PI_2 + 1e-6 {
        return None;
    }
    let phi = phi.clamp(-std::f64::consts::FRAC_PI_2, std::f64::consts::FRAC_PI_2);

    let lambda = x / natural_earth_x_factor(phi);
    if !lambda.is_finite() || lambda.abs() > std::f64::consts::PI + 1e-6 {
        return None;
    }

    Some(LonLat::new(lambda.to_degrees(), phi.to_degrees()))
}

#[cfg(test)]
mod tests {
    use super::{project_flat, unproject_flat, FlatView, Viewport};
    use crate::math::vec::{LonLat, Vec2};

    fn view() -> FlatView {
        FlatView::fit(Viewport::new(1100.0, 600.0))
    }

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn origin_projects_to_viewport_center() {
        let s = project_flat(LonLat::new(0.0, 0.0), &view());
        assert_close(s.x, 550.0, 1e-9);
        assert_close(s.y, 300.0, 1e-9);
    }

    #[test]
    fn screen_axes_point_east_and_south() {
        let v = view();
        let east = project_flat(LonLat::new(90.0, 0.0), &v);
        let north = project_flat(LonLat::new(0.0, 45.0), &v);
        assert!(east.x > 550.0);
        assert!(north.y < 300.0);
    }

    #[test]
    fn round_trips_interior_points() {
        let v = view();
        for &(lon, lat) in &[
            (0.0, 0.0),
            (139.69, 35.68),
            (-122.42, 37.77),
            (-58.38, -34.60),
            (174.76, -41.28),
            (12.0, 78.0),
        ] {
            let p = LonLat::new(lon, lat);
            let back = unproject_flat(project_flat(p, &v), &v).expect("inside outline");
            assert_close(back.lon_deg, lon, 1e-6);
            assert_close(back.lat_deg, lat, 1e-6);
        }
    }

    #[test]
    fn poles_and_date_line_stay_finite() {
        let v = view();
        for &(lon, lat) in &[(180.0, 0.0), (-180.0, 0.0), (0.0, 90.0), (0.0, -90.0), (185.0, 91.0)]
        {
            let s = project_flat(LonLat::new(lon, lat), &v);
            assert!(s.x.is_finite() && s.y.is_finite(), "({lon}, {lat}) -> {s:?}");
        }
    }

    #[test]
    fn unproject_outside_outline_is_none() {
        let v = view();
        assert!(unproject_flat(Vec2::new(-10_000.0, 300.0), &v).is_none());
        assert!(unproject_flat(Vec2::new(550.0, -10_000.0), &v).is_none());
    }

    #[test]
    fn projection_is_idempotent() {
        let v = view();
        let p = LonLat::new(77.2, 28.6);
        assert_eq!(project_flat(p, &v), project_flat(p, &v));
    }
}
