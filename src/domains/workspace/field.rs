use super::obstacle::Obstacle;
use super::types::Point2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Size ranges used by [`ObstacleField::generate_static`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnRanges {
    pub rect_min: f64,
    pub rect_max: f64,
    pub radius_min: f64,
    pub radius_max: f64,
}

impl Default for SpawnRanges {
    fn default() -> Self {
        Self {
            rect_min: 40.0,
            rect_max: 120.0,
            radius_min: 20.0,
            radius_max: 60.0,
        }
    }
}

/// Static obstacles on a `width x height` sheet, in sheet-local coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObstacleField {
    pub width: f64,
    pub height: f64,
    obstacles: Vec<Obstacle>,
}

impl ObstacleField {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            obstacles: Vec::new(),
        }
    }

    pub fn with_obstacles(width: f64, height: f64, obstacles: Vec<Obstacle>) -> Self {
        let mut field = Self::new(width, height);
        field.obstacles = obstacles;
        field
    }

    /// Random field: shapes alternate rectangle/circle and always stay inside the sheet.
    pub fn generate_static<R: Rng + ?Sized>(
        width: f64,
        height: f64,
        count: usize,
        ranges: SpawnRanges,
        rng: &mut R,
    ) -> Self {
        let mut field = Self::new(width, height);
        for i in 0..count {
            let obstacle = if i % 2 == 0 {
                random_rectangle(field.width, field.height, &ranges, rng)
            } else {
                random_circle(field.width, field.height, &ranges, rng)
            };
            field.add(obstacle);
        }
        field
    }

    pub fn add(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn collides_point(&self, x: f64, y: f64) -> bool {
        self.obstacles.iter().any(|o| o.contains_point(x, y))
    }

    pub fn collides_circle(&self, cx: f64, cy: f64, r: f64) -> bool {
        self.obstacles.iter().any(|o| o.intersects_circle(cx, cy, r))
    }

    /// Circle test, or the point test when `r <= 0`.
    pub fn collides(&self, x: f64, y: f64, r: f64) -> bool {
        if r <= 0.0 {
            self.collides_point(x, y)
        } else {
            self.collides_circle(x, y, r)
        }
    }

    /// View of this field placed at `origin` in world space.
    pub fn at(&self, origin: Point2) -> FieldView<'_> {
        FieldView { field: self, origin }
    }
}

/// An obstacle field anchored in world coordinates. All queries take world
/// coordinates and translate them into the field's local space.
#[derive(Debug, Clone, Copy)]
pub struct FieldView<'a> {
    pub field: &'a ObstacleField,
    pub origin: Point2,
}

impl<'a> FieldView<'a> {
    pub fn to_local(&self, x: f64, y: f64) -> Point2 {
        Point2::new(x - self.origin.x, y - self.origin.y)
    }

    pub fn collides(&self, x: f64, y: f64, r: f64) -> bool {
        let local = self.to_local(x, y);
        self.field.collides(local.x, local.y, r)
    }

    pub fn collides_point(&self, x: f64, y: f64) -> bool {
        let local = self.to_local(x, y);
        self.field.collides_point(local.x, local.y)
    }

    pub fn width(&self) -> f64 {
        self.field.width
    }

    pub fn height(&self) -> f64 {
        self.field.height
    }
}

fn random_rectangle<R: Rng + ?Sized>(width: f64, height: f64, ranges: &SpawnRanges, rng: &mut R) -> Obstacle {
    let w = sample(rng, ranges.rect_min.min(width), ranges.rect_max.min(width));
    let h = sample(rng, ranges.rect_min.min(height), ranges.rect_max.min(height));
    let x = sample(rng, 0.0, width - w);
    let y = sample(rng, 0.0, height - h);
    Obstacle::rectangle(x, y, w, h)
}

fn random_circle<R: Rng + ?Sized>(width: f64, height: f64, ranges: &SpawnRanges, rng: &mut R) -> Obstacle {
    let max_r = ranges.radius_max.min(width / 2.0).min(height / 2.0);
    let r = sample(rng, ranges.radius_min.min(max_r), max_r);
    let cx = sample(rng, r, width - r);
    let cy = sample(rng, r, height - r);
    Obstacle::circle(cx, cy, r)
}

// Inclusive range sample that tolerates collapsed (or inverted) ranges.
fn sample<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    if high <= low {
        low.max(0.0)
    } else {
        rng.gen_range(low..=high)
    }
}
