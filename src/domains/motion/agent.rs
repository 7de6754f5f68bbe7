use super::pathfinder::GridPathfinder;
use super::settings::MotionSettings;
use crate::domains::workspace::{FieldView, Point2};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, trace};

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    Arrived,
    /// Stuck for too long; placed on the target regardless of obstacles.
    ForcedSnap,
    Direct,
    FollowingSubPath,
    Replanned,
    Slid,
    Ghost,
}

impl MoveOutcome {
    pub fn reached(&self) -> bool {
        matches!(self, MoveOutcome::Arrived | MoveOutcome::ForcedSnap)
    }
}

/// The drawing robot: a point with a fixed per-tick speed that steers toward one
/// target at a time.
#[derive(Debug, Clone)]
pub struct Agent {
    position: Point2,
    home: Point2,
    settings: MotionSettings,
    planner: GridPathfinder,
    sub_path: VecDeque<Point2>,
    stuck_ticks: u32,
    ghosting: bool,
    previous_position: Option<Point2>,
    last_target: Option<Point2>,
}

impl Agent {
    pub fn new(start: Point2, settings: MotionSettings) -> Self {
        let planner = GridPathfinder::new(settings.cell_size, settings.size * settings.cell_radius_factor);
        Self {
            position: start,
            home: start,
            settings,
            planner,
            sub_path: VecDeque::new(),
            stuck_ticks: 0,
            ghosting: false,
            previous_position: None,
            last_target: None,
        }
    }

    pub fn position(&self) -> Point2 {
        self.position
    }

    pub fn settings(&self) -> &MotionSettings {
        &self.settings
    }

    pub fn stuck_ticks(&self) -> u32 {
        self.stuck_ticks
    }

    pub fn is_ghosting(&self) -> bool {
        self.ghosting
    }

    pub fn sub_path(&self) -> impl Iterator<Item = &Point2> {
        self.sub_path.iter()
    }

    /// Back to the start position with all transient state cleared.
    pub fn reset(&mut self) {
        let home = self.home;
        self.place_at(home);
    }

    /// Teleport, clearing plans and counters.
    pub fn place_at(&mut self, point: Point2) {
        self.position = point;
        self.clear_transient();
        self.previous_position = None;
        self.last_target = None;
    }

    /// One tick toward `(tx, ty)`. Returns true exactly when the agent lands on the target.
    pub fn move_to(&mut self, tx: f64, ty: f64, obstacles: Option<FieldView<'_>>) -> bool {
        self.step(Point2::new(tx, ty), obstacles).reached()
    }

    pub fn step(&mut self, target: Point2, obstacles: Option<FieldView<'_>>) -> MoveOutcome {
        let s = &self.settings;
        let speed = s.speed;
        if self.position.distance_to(target) <= speed * s.arrive_factor {
            self.snap_to(target);
            return MoveOutcome::Arrived;
        }

        self.track_progress();

        if self.is_new_target(target) {
            self.sub_path.clear();
            self.ghosting = false;
        }
        self.last_target = Some(target);

        if self.ghosting || self.stuck_ticks > self.settings.ghost_after {
            return self.ghost_toward(target);
        }

        let Some(view) = obstacles else {
            self.position = self.position.step_toward(target, speed);
            return MoveOutcome::Direct;
        };

        if self.follow_sub_path() {
            return MoveOutcome::FollowingSubPath;
        }

        if self.line_of_sight_clear(target, view) {
            self.position = self.position.step_toward(target, speed);
            return MoveOutcome::Direct;
        }

        let route = self.planner.find_path(self.position, target, view);
        if !route.is_empty() {
            trace!(nodes = route.len(), "replanned around obstacles");
            self.sub_path = route.into();
            if self.follow_sub_path() {
                return MoveOutcome::Replanned;
            }
        }

        self.slide_toward(target, view);
        MoveOutcome::Slid
    }

    fn snap_to(&mut self, target: Point2) {
        self.position = target;
        self.clear_transient();
    }

    fn clear_transient(&mut self) {
        self.sub_path.clear();
        self.stuck_ticks = 0;
        self.ghosting = false;
    }

    fn track_progress(&mut self) {
        let moved = self
            .previous_position
            .map_or(0.0, |prev| prev.distance_to(self.position));
        if self.ghosting || moved < self.settings.stuck_epsilon {
            self.stuck_ticks += 1;
        } else {
            self.stuck_ticks = self.stuck_ticks.saturating_sub(1);
        }
        self.previous_position = Some(self.position);
    }

    fn is_new_target(&self, target: Point2) -> bool {
        let tolerance = self.settings.retarget_tolerance;
        self.last_target.map_or(true, |last| {
            (last.x - target.x).abs() > tolerance || (last.y - target.y).abs() > tolerance
        })
    }

    fn ghost_toward(&mut self, target: Point2) -> MoveOutcome {
        if !self.ghosting {
            debug!(stuck = self.stuck_ticks, "agent stuck, ignoring obstacles");
            self.ghosting = true;
        }
        if self.stuck_ticks >= self.settings.forced_snap_at {
            debug!(x = target.x, y = target.y, "forcing agent onto target");
            self.snap_to(target);
            return MoveOutcome::ForcedSnap;
        }
        let step = self.settings.speed * self.settings.ghost_speed_factor;
        self.position = self.position.step_toward(target, step);
        MoveOutcome::Ghost
    }

    /// Steer toward the first cached node, dropping nodes already within reach.
    /// False when there is nothing left to follow.
    fn follow_sub_path(&mut self) -> bool {
        let speed = self.settings.speed;
        let reach = speed * self.settings.subpath_pop_factor;
        while let Some(&node) = self.sub_path.front() {
            if self.position.distance_to(node) <= reach {
                self.sub_path.pop_front();
                continue;
            }
            self.position = self.position.step_toward(node, speed);
            return true;
        }
        false
    }

    fn line_of_sight_clear(&self, target: Point2, view: FieldView<'_>) -> bool {
        let s = &self.settings;
        let radius = s.size * s.sight_radius_factor;
        let dist = self.position.distance_to(target);
        let samples = ((dist / s.sight_sample_spacing.max(1.0)).ceil() as usize).max(1);
        (0..=samples).all(|i| {
            let t = i as f64 / samples as f64;
            let x = self.position.x + (target.x - self.position.x) * t;
            let y = self.position.y + (target.y - self.position.y) * t;
            !view.collides(x, y, radius)
        })
    }

    /// Axis-separated move: take the X step, then the Y step, undoing either one
    /// that would end inside an obstacle.
    fn slide_toward(&mut self, target: Point2, view: FieldView<'_>) {
        let radius = self.settings.size * self.settings.body_radius_factor;
        let next = self.position.step_toward(target, self.settings.speed);
        let (dx, dy) = (next.x - self.position.x, next.y - self.position.y);

        let mut p = self.position;
        if !view.collides(p.x + dx, p.y, radius) {
            p.x += dx;
        }
        if !view.collides(p.x, p.y + dy, radius) {
            p.y += dy;
        }
        trace!(from_x = self.position.x, from_y = self.position.y, to_x = p.x, to_y = p.y, "slide fallback");
        self.position = p;
    }
}
