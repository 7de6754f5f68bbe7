use super::engine::suppress_ink;
use crate::domains::strokes::interpolate;
use crate::domains::workspace::{FieldView, Path, Point2, Waypoint};

/// Turn free-form polylines (world coordinates) into a path: a pen-up move to the
/// start of every stroke, then densified pen-down segments.
pub fn build_stroke_path(strokes: &[Vec<Point2>], step: f64, obstacles: Option<FieldView<'_>>) -> Path {
    let mut out = Vec::new();
    for stroke in strokes {
        let Some((head, rest)) = stroke.split_first() else {
            continue;
        };
        out.push(Waypoint::new(head.x, head.y, false));
        let mut prev = *head;
        for &next in rest {
            out.extend(
                interpolate(prev, next, true, step)
                    .into_iter()
                    .map(|wp| suppress_ink(obstacles, wp)),
            );
            prev = next;
        }
    }
    Path::new(out)
}
