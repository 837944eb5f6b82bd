/// Pixel clamp for event markers: always visible, never screen-filling.
pub const MIN_RADIUS_PX: f64 = 5.0;
pub const MAX_RADIUS_PX: f64 = 100.0;

/// On-ground radius in meters for an event of the given magnitude.
///
/// Exponential in magnitude, so each whole step doubles the footprint.
pub fn magnitude_radius_m(magnitude: f64) -> f64 {
    2f64.powf(magnitude) * 1000.0
}

/// Screen radius for an event marker, clamped to the pixel bounds.
///
/// `meters_per_pixel` comes from the active view scale. A NaN magnitude
/// (no data) renders at the minimum radius.
pub fn magnitude_radius_px(magnitude: f64, meters_per_pixel: f64) -> f64 {
    if !magnitude.is_finite() || !(meters_per_pixel > 0.0) {
        return MIN_RADIUS_PX;
    }
    (magnitude_radius_m(magnitude) / meters_per_pixel).clamp(MIN_RADIUS_PX, MAX_RADIUS_PX)
}

#[cfg(test)]
mod tests {
    use super::{magnitude_radius_m, magnitude_radius_px, MAX_RADIUS_PX, MIN_RADIUS_PX};

    #[test]
    fn radius_doubles_per_magnitude_step() {
        assert_eq!(magnitude_radius_m(5.0), 32_000.0);
        assert_eq!(magnitude_radius_m(6.0), 64_000.0);
    }

    #[test]
    fn pixel_radius_clamps_both_ends() {
        // Tiny event at a coarse scale hits the floor.
        assert_eq!(magnitude_radius_px(1.0, 50_000.0), MIN_RADIUS_PX);
        // Huge event zoomed far in hits the ceiling.
        assert_eq!(magnitude_radius_px(8.0, 10.0), MAX_RADIUS_PX);
        // In between is the plain ratio.
        assert_eq!(magnitude_radius_px(5.0, 1000.0), 32.0);
    }

    #[test]
    fn missing_magnitude_renders_at_the_floor() {
        assert_eq!(magnitude_radius_px(f64::NAN, 1000.0), MIN_RADIUS_PX);
        assert_eq!(magnitude_radius_px(5.0, 0.0), MIN_RADIUS_PX);
    }
}
