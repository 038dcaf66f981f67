//! Plot-space geometry for the two charts.
//!
//! Bars sit at integer x positions (one per university). Doughnut angles are
//! in degrees, counter-clockwise from the positive x axis, matching the plot's
//! y-up coordinate system.

/// Angular extent of one doughnut slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceArc {
    pub start_deg: f64,
    pub end_deg: f64,
}

impl SliceArc {
    pub fn sweep_deg(&self) -> f64 {
        self.end_deg - self.start_deg
    }

    pub fn mid_deg(&self) -> f64 {
        (self.start_deg + self.end_deg) / 2.0
    }

    pub fn contains_deg(&self, angle_deg: f64) -> bool {
        angle_deg >= self.start_deg && angle_deg <= self.end_deg
    }
}

/// Index of the bar whose column contains `x`.
pub fn bar_index_at(x: f64, bar_count: usize, bar_width: f64) -> Option<usize> {
    let nearest = x.round();
    if nearest < 0.0 || nearest >= bar_count as f64 {
        return None;
    }
    if (x - nearest).abs() > bar_width / 2.0 {
        return None;
    }
    Some(nearest as usize)
}

/// Corners of bar `index`, counter-clockwise from bottom-left.
pub fn bar_corners(index: usize, value: f64, bar_width: f64) -> Vec<[f64; 2]> {
    let center = index as f64;
    let half = bar_width / 2.0;
    vec![
        [center - half, 0.0],
        [center + half, 0.0],
        [center + half, value],
        [center - half, value],
    ]
}

/// A 1/2/5 x 10^n tick step giving roughly `divisions` steps up to `max_value`.
pub fn nice_step(max_value: f64, divisions: u32) -> f64 {
    if max_value <= 0.0 || divisions == 0 {
        return 1.0;
    }
    let raw = max_value / divisions as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;

    let factor = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };

    factor * magnitude
}

/// Lays slices around the ring in order, starting at 0°.
///
/// Each slice gets its share of the circle left over after `padding_deg` is
/// reserved after every slice. A single slice is a full ring with no gap.
pub fn slice_arcs(fractions: &[f64], padding_deg: f64) -> Vec<SliceArc> {
    let padding = if fractions.len() > 1 { padding_deg } else { 0.0 };
    let available = (360.0 - padding * fractions.len() as f64).max(0.0);

    let mut arcs = Vec::with_capacity(fractions.len());
    let mut cursor = 0.0;
    for fraction in fractions {
        let sweep = available * fraction;
        arcs.push(SliceArc {
            start_deg: cursor,
            end_deg: cursor + sweep,
        });
        cursor += sweep + padding;
    }
    arcs
}

pub fn polar_point(angle_deg: f64, radius: f64) -> [f64; 2] {
    let rad = angle_deg.to_radians();
    [radius * rad.cos(), radius * rad.sin()]
}

/// Splits a ring segment into convex quads (egui only fills convex polygons).
pub fn wedge_quads(
    arc: &SliceArc,
    inner_radius: f64,
    outer_radius: f64,
    segments_per_turn: usize,
) -> Vec<Vec<[f64; 2]>> {
    let sweep = arc.sweep_deg();
    if sweep <= 0.0 {
        return Vec::new();
    }
    let segments = ((sweep / 360.0) * segments_per_turn as f64).ceil().max(1.0) as usize;
    let step = sweep / segments as f64;

    (0..segments)
        .map(|i| {
            let a0 = arc.start_deg + step * i as f64;
            let a1 = a0 + step;
            vec![
                polar_point(a0, inner_radius),
                polar_point(a0, outer_radius),
                polar_point(a1, outer_radius),
                polar_point(a1, inner_radius),
            ]
        })
        .collect()
}

/// Where a slice's percentage label goes: mid-angle, halfway through the ring.
pub fn label_anchor(arc: &SliceArc, inner_radius: f64, outer_radius: f64) -> [f64; 2] {
    polar_point(arc.mid_deg(), inner_radius + (outer_radius - inner_radius) * 0.5)
}

/// Index of the slice under a plot-space point, if the point is on the ring.
pub fn slice_at(
    point: [f64; 2],
    arcs: &[SliceArc],
    inner_radius: f64,
    outer_radius: f64,
) -> Option<usize> {
    let [x, y] = point;
    let radius = x.hypot(y);
    if radius < inner_radius || radius > outer_radius {
        return None;
    }
    let angle = y.atan2(x).to_degrees().rem_euclid(360.0);
    arcs.iter().position(|arc| arc.contains_deg(angle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn bar_hit_test_respects_width() {
        assert_eq!(bar_index_at(2.1, 4, 0.6), Some(2));
        assert_eq!(bar_index_at(2.45, 4, 0.6), None);
        assert_eq!(bar_index_at(-0.2, 4, 0.6), Some(0));
        assert_eq!(bar_index_at(3.9, 4, 0.6), None);
        assert_eq!(bar_index_at(-0.7, 4, 0.6), None);
    }

    #[test]
    fn nice_step_picks_round_numbers() {
        assert!(approx_eq(nice_step(19600.0, 4), 5000.0));
        assert!(approx_eq(nice_step(1500.0, 4), 500.0));
        assert!(approx_eq(nice_step(80.0, 4), 20.0));
        assert!(approx_eq(nice_step(0.0, 4), 1.0));
    }

    #[test]
    fn arcs_cover_circle_minus_padding() {
        let arcs = slice_arcs(&[0.5, 0.25, 0.25], 5.0);
        assert_eq!(arcs.len(), 3);
        assert!(approx_eq(arcs[0].start_deg, 0.0));
        assert!(approx_eq(arcs[0].sweep_deg(), 172.5));
        assert!(approx_eq(arcs[1].start_deg, 177.5));
        let covered: f64 = arcs.iter().map(SliceArc::sweep_deg).sum();
        assert!(approx_eq(covered, 345.0));
    }

    #[test]
    fn single_slice_is_a_full_ring() {
        let arcs = slice_arcs(&[1.0], 5.0);
        assert!(approx_eq(arcs[0].sweep_deg(), 360.0));
    }

    #[test]
    fn wedge_quads_stay_on_the_ring() {
        let arc = SliceArc { start_deg: 0.0, end_deg: 90.0 };
        let quads = wedge_quads(&arc, 60.0, 110.0, 180);
        assert_eq!(quads.len(), 45);
        for quad in &quads {
            let inner = quad[0][0].hypot(quad[0][1]);
            let outer = quad[1][0].hypot(quad[1][1]);
            assert!(approx_eq(inner, 60.0));
            assert!(approx_eq(outer, 110.0));
        }
    }

    #[test]
    fn slice_hit_test_uses_angle_and_radius() {
        let arcs = slice_arcs(&[0.5, 0.5], 0.0);
        assert_eq!(slice_at([80.0, 10.0], &arcs, 60.0, 110.0), Some(0));
        assert_eq!(slice_at([-80.0, -10.0], &arcs, 60.0, 110.0), Some(1));
        assert_eq!(slice_at([10.0, 10.0], &arcs, 60.0, 110.0), None);
        assert_eq!(slice_at([200.0, 0.0], &arcs, 60.0, 110.0), None);
    }

    #[test]
    fn label_sits_mid_ring() {
        let arc = SliceArc { start_deg: 0.0, end_deg: 180.0 };
        let [x, y] = label_anchor(&arc, 60.0, 110.0);
        assert!(x.abs() < 1e-9);
        assert!(approx_eq(y, 85.0));
    }
}
