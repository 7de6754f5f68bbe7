use crate::domains::workspace::{Point2, Waypoint};

/// Densify `p1 -> p2` into points roughly `step` apart, each carrying `pen`.
///
/// `p1` itself is not emitted; the last point is exactly `p2`. A zero-length
/// segment (or a non-positive step) yields a single point.
pub fn interpolate(p1: Point2, p2: Point2, pen: bool, step: f64) -> Vec<Waypoint> {
    let dist = p1.distance_to(p2);
    if dist == 0.0 || step.is_nan() || step <= 0.0 {
        return vec![Waypoint::new(p2.x, p2.y, pen)];
    }

    let steps = ((dist / step) as usize).max(1);
    let (dx, dy) = (p2.x - p1.x, p2.y - p1.y);
    let mut points: Vec<Waypoint> = (1..steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            Waypoint::new(p1.x + dx * t, p1.y + dy * t, pen)
        })
        .collect();
    points.push(Waypoint::new(p2.x, p2.y, pen));
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_follows_step() {
        let pts = interpolate(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0), true, 2.0);
        assert_eq!(pts.len(), 5);
        assert!((pts[0].x - 2.0).abs() < 1e-9);
    }

    #[test]
    fn short_segment_still_yields_endpoint() {
        let pts = interpolate(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0), false, 5.0);
        assert_eq!(pts, vec![Waypoint::new(1.0, 1.0, false)]);
    }
}
