use serde::{Deserialize, Serialize};

/// Static shape in the obstacle field's local coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Obstacle {
    Rectangle { x: f64, y: f64, w: f64, h: f64 },
    Circle { cx: f64, cy: f64, r: f64 },
}

impl Obstacle {
    pub fn rectangle(x: f64, y: f64, w: f64, h: f64) -> Self {
        Obstacle::Rectangle { x, y, w, h }
    }

    pub fn circle(cx: f64, cy: f64, r: f64) -> Self {
        Obstacle::Circle { cx, cy, r }
    }

    pub fn contains_point(&self, px: f64, py: f64) -> bool {
        match *self {
            Obstacle::Rectangle { x, y, w, h } => px >= x && px <= x + w && py >= y && py <= y + h,
            Obstacle::Circle { cx, cy, r } => {
                let (dx, dy) = (px - cx, py - cy);
                dx * dx + dy * dy <= r * r
            }
        }
    }

    pub fn intersects_circle(&self, px: f64, py: f64, radius: f64) -> bool {
        if radius <= 0.0 {
            return self.contains_point(px, py);
        }
        match *self {
            Obstacle::Rectangle { x, y, w, h } => {
                let closest_x = x.max(px.min(x + w));
                let closest_y = y.max(py.min(y + h));
                let (dx, dy) = (px - closest_x, py - closest_y);
                dx * dx + dy * dy <= radius * radius
            }
            Obstacle::Circle { cx, cy, r } => {
                let (dx, dy) = (px - cx, py - cy);
                let reach = r + radius;
                dx * dx + dy * dy <= reach * reach
            }
        }
    }

    /// Whether the shape lies entirely inside `[0, width] x [0, height]`.
    pub fn fits_within(&self, width: f64, height: f64) -> bool {
        match *self {
            Obstacle::Rectangle { x, y, w, h } => x >= 0.0 && y >= 0.0 && x + w <= width && y + h <= height,
            Obstacle::Circle { cx, cy, r } => {
                cx - r >= 0.0 && cy - r >= 0.0 && cx + r <= width && cy + r <= height
            }
        }
    }
}
