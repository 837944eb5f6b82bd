use std::error::Error;
use std::fmt;

/// Packed 8-bit RGBA color.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// One class of the visual encoding: fill color plus marker size.
///
/// `threshold_index` is the class position within its scale; the no-data
/// class carries -1 so callers can tell it apart without a NaN check.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VisualClass {
    pub color: Rgba8,
    pub size_px: f32,
    pub threshold_index: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaleError {
    /// `classes` must hold exactly one more entry than `thresholds`.
    ClassCountMismatch { classes: usize, thresholds: usize },
    /// Thresholds must be finite and strictly ascending.
    ThresholdsNotAscending,
}

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClassCountMismatch {
                classes,
                thresholds,
            } => write!(
                f,
                "scale needs {} classes for {thresholds} thresholds, got {classes}",
                thresholds + 1
            ),
            Self::ThresholdsNotAscending => {
                write!(f, "scale thresholds must be finite and strictly ascending")
            }
        }
    }
}

impl Error for ScaleError {}

/// An ordered partition of a metric domain into visual classes.
///
/// `n` thresholds split the real line into `n + 1` classes. A metric equal
/// to a threshold lands in the class above it; NaN (no data) lands in the
/// dedicated no-data class, never in a numeric one.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdScale {
    thresholds: Vec<f64>,
    classes: Vec<VisualClass>,
    no_data: VisualClass,
}

impl ThresholdScale {
    pub fn new(
        thresholds: Vec<f64>,
        styles: Vec<(Rgba8, f32)>,
        no_data: (Rgba8, f32),
    ) -> Result<Self, ScaleError> {
        if styles.len() != thresholds.len() + 1 {
            return Err(ScaleError::ClassCountMismatch {
                classes: styles.len(),
                thresholds: thresholds.len(),
            });
        }
        let ascending = thresholds.iter().all(|t| t.is_finite())
            && thresholds.windows(2).all(|w| w[0] < w[1]);
        if !ascending {
            return Err(ScaleError::ThresholdsNotAscending);
        }

        let classes = styles
            .into_iter()
            .enumerate()
            .map(|(i, (color, size_px))| VisualClass {
                color,
                size_px,
                threshold_index: i as i32,
            })
            .collect();
        Ok(Self {
            thresholds,
            classes,
            no_data: VisualClass {
                color: no_data.0,
                size_px: no_data.1,
                threshold_index: -1,
            },
        })
    }

    /// Class index for a finite metric; `None` for NaN.
    pub fn class_index(&self, metric: f64) -> Option<usize> {
        if metric.is_nan() {
            return None;
        }
        Some(self.thresholds.partition_point(|&t| t <= metric))
    }

    /// Total classification. Pure: no interpolation, no state.
    pub fn classify(&self, metric: f64) -> &VisualClass {
        match self.class_index(metric) {
            Some(idx) => &self.classes[idx],
            None => &self.no_data,
        }
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn classes(&self) -> &[VisualClass] {
        &self.classes
    }

    pub fn no_data_class(&self) -> &VisualClass {
        &self.no_data
    }
}
