//! The concrete scales each view renders with.
//!
//! These are fixed by the product design, not configurable: magnitude for
//! the flat event view, population for the globe markers, density for the
//! choropleth. Each builder is infallible because the tables are validated
//! by construction (and re-checked in tests).

use crate::classify::{Rgba8, ThresholdScale};

/// Neutral fill for regions with no statistics.
pub const NO_DATA_FILL: Rgba8 = Rgba8::opaque(0x2a, 0x2a, 0x4a);

/// Region outline at rest, and the highlight outline while hovered.
pub const REGION_STROKE: Rgba8 = Rgba8::opaque(0x1a, 0x1a, 0x3e);
pub const HIGHLIGHT_STROKE: Rgba8 = Rgba8::opaque(0x00, 0xd4, 0xff);

fn must(scale: Result<ThresholdScale, crate::classify::ScaleError>) -> ThresholdScale {
    match scale {
        Ok(s) => s,
        // Tables above are compile-time fixed; a failure here is a code bug.
        Err(e) => unreachable!("built-in scale is malformed: {e}"),
    }
}

/// Event magnitude: green below 4, then yellow, orange, red at 6 and above.
pub fn magnitude_scale() -> ThresholdScale {
    must(ThresholdScale::new(
        vec![4.0, 5.0, 6.0],
        vec![
            (Rgba8::new(0, 255, 0, 200), 10.0),
            (Rgba8::new(255, 255, 0, 200), 12.0),
            (Rgba8::new(255, 127, 0, 200), 14.0),
            (Rgba8::new(255, 0, 0, 200), 16.0),
        ],
        (Rgba8::new(0, 255, 0, 200), 10.0),
    ))
}

/// City population: marker size and color step up at 5M, 10M and 20M.
pub fn city_population_scale() -> ThresholdScale {
    must(ThresholdScale::new(
        vec![5_000_000.0, 10_000_000.0, 20_000_000.0],
        vec![
            (Rgba8::opaque(0x00, 0xff, 0x88), 8.0),
            (Rgba8::opaque(255, 255, 0), 11.0),
            (Rgba8::opaque(255, 165, 0), 14.0),
            (Rgba8::opaque(255, 0, 0), 18.0),
        ],
        (Rgba8::opaque(0x00, 0xff, 0x88), 8.0),
    ))
}

/// Population density (people per km^2), eight sequential blues.
pub fn density_scale() -> ThresholdScale {
    must(ThresholdScale::new(
        vec![10.0, 25.0, 50.0, 100.0, 250.0, 500.0, 1000.0],
        vec![
            (Rgba8::opaque(0xf7, 0xfb, 0xff), 0.0),
            (Rgba8::opaque(0xde, 0xeb, 0xf7), 0.0),
            (Rgba8::opaque(0xc6, 0xdb, 0xef), 0.0),
            (Rgba8::opaque(0x9e, 0xca, 0xe1), 0.0),
            (Rgba8::opaque(0x6b, 0xae, 0xd6), 0.0),
            (Rgba8::opaque(0x42, 0x92, 0xc6), 0.0),
            (Rgba8::opaque(0x21, 0x71, 0xb5), 0.0),
            (Rgba8::opaque(0x08, 0x45, 0x94), 0.0),
        ],
        (NO_DATA_FILL, 0.0),
    ))
}

#[cfg(test)]
mod tests {
    use super::{city_population_scale, density_scale, magnitude_scale, NO_DATA_FILL};
    use crate::classify::Rgba8;

    #[test]
    fn magnitude_boundaries_match_the_event_ramp() {
        let s = magnitude_scale();
        assert_eq!(s.classify(3.9).color, Rgba8::new(0, 255, 0, 200));
        assert_eq!(s.classify(4.0).color, Rgba8::new(255, 255, 0, 200));
        assert_eq!(s.classify(5.0).color, Rgba8::new(255, 127, 0, 200));
        assert_eq!(s.classify(6.0).color, Rgba8::new(255, 0, 0, 200));
        assert_eq!(s.classify(9.5).color, Rgba8::new(255, 0, 0, 200));
    }

    #[test]
    fn city_sizes_step_at_population_thresholds() {
        let s = city_population_scale();
        assert_eq!(s.classify(4_999_999.0).size_px, 8.0);
        assert_eq!(s.classify(5_000_000.0).size_px, 11.0);
        assert_eq!(s.classify(10_000_000.0).size_px, 14.0);
        assert_eq!(s.classify(20_000_000.0).size_px, 18.0);
        assert_eq!(s.classify(37_400_000.0).size_px, 18.0);
    }

    #[test]
    fn density_scale_is_eight_blues_plus_neutral() {
        let s = density_scale();
        assert_eq!(s.classes().len(), 8);
        assert_eq!(s.classify(153.0).color, Rgba8::opaque(0x6b, 0xae, 0xd6));
        assert_eq!(s.classify(f64::NAN).color, NO_DATA_FILL);
        assert_eq!(s.classify(0.0).color, Rgba8::opaque(0xf7, 0xfb, 0xff));
        assert_eq!(s.classify(8358.0).color, Rgba8::opaque(0x08, 0x45, 0x94));
    }
}
