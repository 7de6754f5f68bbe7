use robo_scribe::domains::strokes::*;
use robo_scribe::domains::workspace::{Point2, Waypoint};

#[test]
fn test_interpolation_ends_exactly_on_target() {
    let p1 = Point2::new(3.0, 4.0);
    let p2 = Point2::new(17.3, -8.1);
    let points = interpolate(p1, p2, true, 2.0);

    assert_eq!(*points.last().unwrap(), Waypoint::new(17.3, -8.1, true));
    assert!(points.iter().all(|wp| wp.pen));
    assert_ne!(points[0].point(), p1);
}

#[test]
fn test_interpolation_step_bound() {
    let p1 = Point2::new(0.0, 0.0);
    let p2 = Point2::new(37.0, 21.0);
    let step = 2.0;
    let points = interpolate(p1, p2, false, step);

    let mut prev = p1;
    for wp in &points {
        let gap = prev.distance_to(wp.point());
        assert!(gap > 0.0);
        assert!(gap <= 2.0 * step, "gap {} too large", gap);
        prev = wp.point();
    }
}

#[test]
fn test_interpolation_zero_length_segment() {
    let p = Point2::new(5.0, 5.0);
    assert_eq!(interpolate(p, p, true, 2.0), vec![Waypoint::new(5.0, 5.0, true)]);
}

#[test]
fn test_interpolation_with_non_positive_step() {
    let points = interpolate(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0), true, 0.0);
    assert_eq!(points, vec![Waypoint::new(10.0, 0.0, true)]);
}

#[test]
fn test_font_covers_letters_and_digits() {
    for ch in ('A'..='Z').chain('0'..='9') {
        let glyph = glyph(ch).unwrap_or_else(|| panic!("missing glyph for {}", ch));
        assert!(!glyph.points.is_empty());
        assert!(!glyph.points[0].pen, "{} must start with the pen up", ch);
    }
    assert!(glyph('a').is_none());
    assert!(glyph(' ').is_none());
}

#[test]
fn test_letter_a_strokes() {
    let a = glyph('A').unwrap();
    let pens: Vec<bool> = a.points.iter().map(|p| p.pen).collect();
    assert_eq!(pens, vec![false, true, true, false, true]);
    assert_eq!(a.width(), 40.0);
}
