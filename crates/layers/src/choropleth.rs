//! Flat choropleth view: region shapes filled by density class.

use foundation::ids::RecordId;
use foundation::math::{FlatView, Viewport, project_flat};
use model::record::GeoRecord;
use model::regions::{RegionGeometry, RegionResolver};
use symbology::classify::ThresholdScale;
use symbology::ramps::{HIGHLIGHT_STROKE, REGION_STROKE, density_scale};

use crate::primitives::{LegendEntry, PolygonPrimitive};

pub const STROKE_WIDTH_PX: f32 = 0.5;
pub const HIGHLIGHT_STROKE_WIDTH_PX: f32 = 2.0;

/// Builds choropleth draw primitives for one viewport.
///
/// The resolver and the scale are built once per dataset load; a render
/// pass walks the static geometry set a single time.
pub struct ChoroplethFacade {
    view: FlatView,
    scale: ThresholdScale,
    resolver: RegionResolver,
}

impl ChoroplethFacade {
    pub fn new(viewport: Viewport, resolver: RegionResolver) -> Self {
        Self {
            view: FlatView::fit(viewport),
            scale: density_scale(),
            resolver,
        }
    }

    pub fn view(&self) -> &FlatView {
        &self.view
    }

    /// Resolves the geometry set to records, ids assigned by position.
    ///
    /// The same ids key the shapes, the hit targets and the tooltip, so
    /// resolve once and share the result.
    pub fn records(&self, geometries: &[RegionGeometry]) -> Vec<GeoRecord> {
        geometries
            .iter()
            .enumerate()
            .map(|(i, g)| self.resolver.resolve(RecordId::new(i as u32), g))
            .collect()
    }

    /// One filled shape per resolved region; `hovered` gets the highlight
    /// outline.
    pub fn shapes(&self, records: &[GeoRecord], hovered: Option<RecordId>) -> Vec<PolygonPrimitive> {
        records
            .iter()
            .map(|record| {
                let highlight = hovered == Some(record.id);
                PolygonPrimitive {
                    record: record.id,
                    rings: record
                        .rings
                        .iter()
                        .map(|ring| ring.iter().map(|&p| project_flat(p, &self.view)).collect())
                        .collect(),
                    fill: self.scale.classify(record.metric).color,
                    stroke: if highlight { HIGHLIGHT_STROKE } else { REGION_STROKE },
                    stroke_width_px: if highlight {
                        HIGHLIGHT_STROKE_WIDTH_PX
                    } else {
                        STROKE_WIDTH_PX
                    },
                }
            })
            .collect()
    }

    /// Legend swatches, lowest density class first, no-data last.
    pub fn legend(&self) -> Vec<LegendEntry> {
        let thresholds = self.scale.thresholds();
        let mut entries = Vec::with_capacity(self.scale.classes().len() + 1);

        for (i, class) in self.scale.classes().iter().enumerate() {
            let label = if i == 0 {
                format!("< {}", thresholds[0])
            } else if i == thresholds.len() {
                format!("{}+", thresholds[i - 1])
            } else {
                format!("{} - {}", thresholds[i - 1], thresholds[i])
            };
            entries.push(LegendEntry {
                label,
                swatch: class.color,
            });
        }
        entries.push(LegendEntry {
            label: "No data".to_string(),
            swatch: self.scale.no_data_class().color,
        });
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::ChoroplethFacade;
    use foundation::math::{LonLat, Viewport};
    use model::regions::{RegionGeometry, RegionResolver};
    use symbology::classify::Rgba8;
    use symbology::ramps::{HIGHLIGHT_STROKE, NO_DATA_FILL, REGION_STROKE};

    fn geometry(numeric_id: &str) -> RegionGeometry {
        RegionGeometry {
            numeric_id: numeric_id.to_string(),
            rings: vec![vec![
                LonLat::new(0.0, 0.0),
                LonLat::new(10.0, 0.0),
                LonLat::new(10.0, 10.0),
                LonLat::new(0.0, 10.0),
            ]],
        }
    }

    fn facade() -> ChoroplethFacade {
        let resolver = RegionResolver::new(&datasets::static_data::population());
        ChoroplethFacade::new(Viewport::new(960.0, 500.0), resolver)
    }

    #[test]
    fn known_region_fills_by_density_class() {
        let f = facade();
        let records = f.records(&[geometry("156")]);
        let shapes = f.shapes(&records, None);
        assert_eq!(shapes.len(), 1);
        // China sits in the 100-250 band.
        assert_eq!(shapes[0].fill, Rgba8::opaque(0x6b, 0xae, 0xd6));
        assert_eq!(shapes[0].stroke, REGION_STROKE);
    }

    #[test]
    fn unknown_region_gets_the_neutral_fill() {
        let f = facade();
        let records = f.records(&[geometry("999")]);
        let shapes = f.shapes(&records, None);
        assert_eq!(shapes[0].fill, NO_DATA_FILL);
        assert_eq!(records[0].label, "Unknown");
    }

    #[test]
    fn hover_swaps_the_outline_only() {
        let f = facade();
        let records = f.records(&[geometry("156"), geometry("392")]);
        let shapes = f.shapes(&records, Some(records[1].id));
        assert_eq!(shapes[0].stroke, REGION_STROKE);
        assert_eq!(shapes[0].stroke_width_px, 0.5);
        assert_eq!(shapes[1].stroke, HIGHLIGHT_STROKE);
        assert_eq!(shapes[1].stroke_width_px, 2.0);
        assert_eq!(
            f.shapes(&records, None)[1].fill,
            shapes[1].fill,
            "hover must not change the fill"
        );
    }

    #[test]
    fn legend_spans_every_class_plus_no_data() {
        let legend = facade().legend();
        assert_eq!(legend.len(), 9);
        assert_eq!(legend[0].label, "< 10");
        assert_eq!(legend[7].label, "1000+");
        assert_eq!(legend[8].label, "No data");
        assert_eq!(legend[8].swatch, NO_DATA_FILL);
    }
}
