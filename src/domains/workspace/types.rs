use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point2) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Point moved `step` units toward `target`, never overshooting it.
    pub fn step_toward(&self, target: Point2, step: f64) -> Point2 {
        let dist = self.distance_to(target);
        if dist <= step || dist == 0.0 {
            return target;
        }
        let ratio = step / dist;
        Point2 {
            x: self.x + (target.x - self.x) * ratio,
            y: self.y + (target.y - self.y) * ratio,
        }
    }
}

/// A single target in a path. `pen` means "draw from the previous waypoint to here".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub x: f64,
    pub y: f64,
    pub pen: bool,
}

impl Waypoint {
    pub const fn new(x: f64, y: f64, pen: bool) -> Self {
        Self { x, y, pen }
    }

    pub fn point(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub waypoints: Vec<Waypoint>,
}

impl Path {
    pub fn new(waypoints: Vec<Waypoint>) -> Self {
        Self { waypoints }
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    pub fn first(&self) -> Option<&Waypoint> {
        self.waypoints.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Waypoint> {
        self.waypoints.iter()
    }

    /// Pen-down segments as (from, to) pairs, in traversal order.
    pub fn ink_segments(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        self.waypoints
            .windows(2)
            .filter(|pair| pair[1].pen)
            .map(|pair| (pair[0].point(), pair[1].point()))
    }
}

/// Axis-aligned rectangle in world coordinates (the paper, or a writing column on it).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WritingArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl WritingArea {
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    pub fn width(&self) -> f64 {
        (self.right - self.left).max(0.0)
    }

    pub fn height(&self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }

    pub fn origin(&self) -> Point2 {
        Point2::new(self.left, self.top)
    }

    pub fn contains(&self, p: Point2) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    /// Left and right halves, split at the horizontal midpoint.
    pub fn split_columns(&self) -> (WritingArea, WritingArea) {
        let mid = self.left + self.width() / 2.0;
        (
            WritingArea::new(self.left, self.top, mid, self.bottom),
            WritingArea::new(mid, self.top, self.right, self.bottom),
        )
    }
}
