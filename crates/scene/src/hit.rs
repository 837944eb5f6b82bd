use foundation::ids::RecordId;
use foundation::math::precision::stable_total_cmp_f64;
use foundation::math::{FlatView, LonLat, Vec2, unproject_flat};

/// A circular screen-space hit target, one per rendered marker.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MarkerTarget {
    pub record: RecordId,
    pub center: Vec2,
    pub radius_px: f64,
}

/// A region hit target: the record plus its outline rings in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionTarget<'a> {
    pub record: RecordId,
    pub rings: &'a [Vec<LonLat>],
}

/// Picks the marker under the pointer.
///
/// Ordering contract:
/// - Only markers whose circle contains the pointer are candidates.
/// - The candidate with the smallest center distance wins.
/// - Equal distances break toward the lower `RecordId::index()`.
pub fn pick_marker(pointer: Vec2, targets: &[MarkerTarget]) -> Option<RecordId> {
    let mut best: Option<(f64, RecordId)> = None;

    for target in targets {
        let distance = pointer.distance(target.center);
        if distance > target.radius_px {
            continue;
        }
        best = match best {
            None => Some((distance, target.record)),
            Some((bd, br)) => {
                let ord = stable_total_cmp_f64(distance, bd)
                    .then_with(|| target.record.index().cmp(&br.index()));
                if ord.is_lt() {
                    Some((distance, target.record))
                } else {
                    Some((bd, br))
                }
            }
        };
    }

    best.map(|(_, record)| record)
}

/// Picks the region under the pointer on the flat view.
///
/// The pointer is unprojected back to degrees first; a pointer outside the
/// projection outline hits nothing. Containment is even-odd over all rings,
/// so holes punch through. Overlapping regions break toward the lower
/// `RecordId::index()`.
pub fn pick_region(pointer: Vec2, view: &FlatView, targets: &[RegionTarget<'_>]) -> Option<RecordId> {
    let position = unproject_flat(pointer, view)?;

    let mut best: Option<RecordId> = None;
    for target in targets {
        if !contains_even_odd(target.rings, position) {
            continue;
        }
        best = match best {
            None => Some(target.record),
            Some(b) if target.record.index() < b.index() => Some(target.record),
            Some(b) => Some(b),
        };
    }
    best
}

/// Even-odd containment over a ring set: a point inside an odd number of
/// rings is inside the region.
fn contains_even_odd(rings: &[Vec<LonLat>], position: LonLat) -> bool {
    let mut inside = false;
    for ring in rings {
        if ring_contains(ring, position) {
            inside = !inside;
        }
    }
    inside
}

fn ring_contains(ring: &[LonLat], position: LonLat) -> bool {
    if ring.len() < 3 {
        return false;
    }
    let (px, py) = (position.lon_deg, position.lat_deg);
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (xi, yi) = (ring[i].lon_deg, ring[i].lat_deg);
        let (xj, yj) = (ring[j].lon_deg, ring[j].lat_deg);
        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::{MarkerTarget, RegionTarget, pick_marker, pick_region};
    use foundation::ids::RecordId;
    use foundation::math::{FlatView, LonLat, Vec2, Viewport, project_flat};

    fn id(n: u32) -> RecordId {
        RecordId::new(n)
    }

    fn marker(n: u32, x: f64, y: f64, r: f64) -> MarkerTarget {
        MarkerTarget {
            record: id(n),
            center: Vec2::new(x, y),
            radius_px: r,
        }
    }

    #[test]
    fn nearest_containing_marker_wins() {
        let targets = vec![
            marker(0, 100.0, 100.0, 20.0),
            marker(1, 110.0, 100.0, 20.0),
            marker(2, 400.0, 400.0, 20.0),
        ];
        // 4px from marker 0, 6px from marker 1; both contain the pointer.
        assert_eq!(pick_marker(Vec2::new(104.0, 100.0), &targets), Some(id(0)));
        assert_eq!(pick_marker(Vec2::new(108.0, 100.0), &targets), Some(id(1)));
    }

    #[test]
    fn pointer_outside_every_radius_hits_nothing() {
        let targets = vec![marker(0, 100.0, 100.0, 5.0)];
        assert_eq!(pick_marker(Vec2::new(110.0, 100.0), &targets), None);
        assert_eq!(pick_marker(Vec2::new(110.0, 100.0), &[]), None);
    }

    #[test]
    fn coincident_markers_break_toward_the_lower_id() {
        let targets = vec![marker(7, 50.0, 50.0, 10.0), marker(3, 50.0, 50.0, 10.0)];
        assert_eq!(pick_marker(Vec2::new(50.0, 50.0), &targets), Some(id(3)));
    }

    fn square(cx: f64, cy: f64, half: f64) -> Vec<Vec<LonLat>> {
        vec![vec![
            LonLat::new(cx - half, cy - half),
            LonLat::new(cx + half, cy - half),
            LonLat::new(cx + half, cy + half),
            LonLat::new(cx - half, cy + half),
        ]]
    }

    #[test]
    fn region_pick_round_trips_through_the_projection() {
        let viewport = Viewport::new(960.0, 500.0);
        let view = FlatView::fit(viewport);
        let rings = square(10.0, 20.0, 5.0);
        let targets = vec![RegionTarget {
            record: id(4),
            rings: &rings,
        }];

        let inside = project_flat(LonLat::new(10.0, 20.0), &view);
        assert_eq!(pick_region(inside, &view, &targets), Some(id(4)));

        let outside = project_flat(LonLat::new(40.0, 20.0), &view);
        assert_eq!(pick_region(outside, &view, &targets), None);
    }

    #[test]
    fn hole_rings_punch_through() {
        let viewport = Viewport::new(960.0, 500.0);
        let view = FlatView::fit(viewport);
        let mut rings = square(0.0, 0.0, 10.0);
        rings.extend(square(0.0, 0.0, 2.0));
        let targets = vec![RegionTarget {
            record: id(0),
            rings: &rings,
        }];

        let in_hole = project_flat(LonLat::new(0.0, 0.0), &view);
        assert_eq!(pick_region(in_hole, &view, &targets), None);

        let in_band = project_flat(LonLat::new(5.0, 5.0), &view);
        assert_eq!(pick_region(in_band, &view, &targets), Some(id(0)));
    }

    #[test]
    fn overlapping_regions_break_toward_the_lower_id() {
        let viewport = Viewport::new(960.0, 500.0);
        let view = FlatView::fit(viewport);
        let a = square(0.0, 0.0, 10.0);
        let b = square(0.0, 0.0, 10.0);
        let targets = vec![
            RegionTarget {
                record: id(6),
                rings: &a,
            },
            RegionTarget {
                record: id(1),
                rings: &b,
            },
        ];
        let p = project_flat(LonLat::new(1.0, 1.0), &view);
        assert_eq!(pick_region(p, &view, &targets), Some(id(1)));
    }
}
