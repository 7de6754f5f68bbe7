use super::events::SessionEvent;
use crate::common::{AggregateRoot, DomainResult};
use crate::domains::layout::{build_stroke_path, LayoutSettings, TextLayout};
use crate::domains::logger::DynLogger;
use crate::domains::motion::{Agent, MotionSettings, MoveOutcome};
use crate::domains::workspace::{FieldView, ObstacleField, Path, Point2, WritingArea};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Everything a run needs that does not change while it runs.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    /// Where text is laid out.
    pub writing_area: WritingArea,
    /// World position of the obstacle field's local origin (the paper's top-left).
    pub field_origin: Point2,
    pub line_spacing: f64,
    pub layout: LayoutSettings,
    pub motion: MotionSettings,
    pub start: Point2,
    /// Put the agent on the first waypoint when a path is committed.
    pub snap_to_first_waypoint: bool,
}

impl SessionSettings {
    pub fn new(writing_area: WritingArea, line_spacing: f64) -> Self {
        Self {
            writing_area,
            field_origin: writing_area.origin(),
            line_spacing,
            layout: LayoutSettings::default(),
            motion: MotionSettings::default(),
            start: writing_area.origin(),
            snap_to_first_waypoint: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    pub position: Point2,
    /// Pen state of the waypoint being approached.
    pub pen: bool,
    pub reached: bool,
    pub complete: bool,
    pub outcome: Option<MoveOutcome>,
}

/// One run of a drawing mode: the obstacle field, the committed path, the agent
/// working through it, and what has been inked so far.
pub struct DrawingSession {
    id: String,
    settings: SessionSettings,
    field: Option<Arc<ObstacleField>>,
    path: Path,
    index: usize,
    agent: Agent,
    inked: Vec<(Point2, Point2)>,
    ticks: u64,
    completed: bool,
    version: u64,
    logger: DynLogger,
    uncommitted_events: Vec<SessionEvent>,
}

impl DrawingSession {
    pub fn new(
        id: String,
        settings: SessionSettings,
        field: Option<Arc<ObstacleField>>,
        logger: DynLogger,
    ) -> Self {
        let agent = Agent::new(settings.start, settings.motion.clone());
        let mut session = Self {
            id: id.clone(),
            settings,
            field,
            path: Path::default(),
            index: 0,
            agent,
            inked: Vec::new(),
            ticks: 0,
            completed: true,
            version: 0,
            logger,
            uncommitted_events: Vec::new(),
        };

        let event = SessionEvent::SessionStarted {
            session_id: id,
            has_obstacles: session.field.is_some(),
            timestamp: Utc::now(),
        };
        session.emit(event);
        session
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn field(&self) -> Option<&Arc<ObstacleField>> {
        self.field.as_ref()
    }

    pub fn field_view(&self) -> Option<FieldView<'_>> {
        self.field.as_deref().map(|f| f.at(self.settings.field_origin))
    }

    /// Segments drawn so far, in drawing order.
    pub fn inked_segments(&self) -> &[(Point2, Point2)] {
        &self.inked
    }

    /// Pen state of the waypoint currently being approached.
    pub fn current_pen(&self) -> bool {
        self.path.get(self.index).is_some_and(|wp| wp.pen)
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// (reached waypoints, total waypoints)
    pub fn progress(&self) -> (usize, usize) {
        (self.index, self.path.len())
    }

    pub fn completion_percent(&self) -> f64 {
        match self.path.len() {
            0 => 100.0,
            total => self.index as f64 / total as f64 * 100.0,
        }
    }

    /// Swap in a fresh obstacle field and start over. The committed path is dropped.
    pub fn reset(&mut self, field: Option<Arc<ObstacleField>>) {
        self.field = field;
        self.agent.reset();
        self.path = Path::default();
        self.inked.clear();
        self.ticks = 0;

        let obstacle_count = self.field.as_ref().map_or(0, |f| f.len());
        self.logger
            .info(&format!("session {} reset with {} obstacles", self.id, obstacle_count));
        let event = SessionEvent::ObstaclesRegenerated {
            session_id: self.id.clone(),
            obstacle_count,
            timestamp: Utc::now(),
        };
        self.emit(event);
    }

    /// Lay `text` out in the writing area and make it the path to follow.
    pub fn commit_text(&mut self, text: &str) -> usize {
        let layout = TextLayout::new(self.settings.layout.clone());
        let path = layout.build_path(
            text,
            self.settings.writing_area,
            self.settings.line_spacing,
            self.field_view(),
        );
        self.commit_path(path)
    }

    /// Free-form mode: follow the given world-space polylines.
    pub fn commit_strokes(&mut self, strokes: &[Vec<Point2>]) -> usize {
        let path = build_stroke_path(strokes, self.settings.layout.interpolation_step, self.field_view());
        self.commit_path(path)
    }

    pub fn commit_path(&mut self, path: Path) -> usize {
        let waypoint_count = path.len();
        if self.settings.snap_to_first_waypoint {
            if let Some(first) = path.first() {
                self.agent.place_at(first.point());
            }
        }
        self.path = path;
        self.inked.clear();
        self.ticks = 0;

        self.logger
            .info(&format!("session {} committed {} waypoints", self.id, waypoint_count));
        let event = SessionEvent::PathCommitted {
            session_id: self.id.clone(),
            waypoint_count,
            timestamp: Utc::now(),
        };
        self.emit(event);
        waypoint_count
    }

    /// Advance the agent one tick toward the current waypoint.
    pub fn tick(&mut self) -> TickReport {
        let Some(target) = self.path.get(self.index).copied() else {
            return TickReport {
                position: self.agent.position(),
                pen: false,
                reached: false,
                complete: self.completed,
                outcome: None,
            };
        };

        self.ticks += 1;
        let was_ghosting = self.agent.is_ghosting();
        let view = self.field.as_deref().map(|f| f.at(self.settings.field_origin));
        let outcome = self.agent.step(target.point(), view);

        if !was_ghosting && self.agent.is_ghosting() {
            self.logger.warn(&format!(
                "session {} stuck on waypoint {}, escaping through obstacles",
                self.id, self.index
            ));
            let event = SessionEvent::GhostEscapeEngaged {
                session_id: self.id.clone(),
                index: self.index,
                stuck_ticks: self.agent.stuck_ticks(),
                timestamp: Utc::now(),
            };
            self.emit(event);
        }
        if outcome == MoveOutcome::ForcedSnap {
            self.logger
                .warn(&format!("session {} forced onto waypoint {}", self.id, self.index));
            let event = SessionEvent::ForcedSnap {
                session_id: self.id.clone(),
                index: self.index,
                timestamp: Utc::now(),
            };
            self.emit(event);
        }

        let reached = outcome.reached();
        if reached {
            self.arrive(target.pen);
        }

        TickReport {
            position: self.agent.position(),
            pen: target.pen,
            reached,
            complete: self.completed,
            outcome: Some(outcome),
        }
    }

    fn arrive(&mut self, pen: bool) {
        let index = self.index;
        if pen && index > 0 {
            if let (Some(from), Some(to)) = (self.path.get(index - 1), self.path.get(index)) {
                self.inked.push((from.point(), to.point()));
            }
        }
        let event = SessionEvent::WaypointReached {
            session_id: self.id.clone(),
            index,
            pen,
            timestamp: Utc::now(),
        };
        self.emit(event);

        if self.index >= self.path.len() {
            self.logger.info(&format!(
                "session {} finished {} waypoints in {} ticks",
                self.id,
                self.path.len(),
                self.ticks
            ));
            let event = SessionEvent::RunCompleted {
                session_id: self.id.clone(),
                ticks: self.ticks,
                timestamp: Utc::now(),
            };
            self.emit(event);
        }
    }

    fn emit(&mut self, event: SessionEvent) {
        if let Err(e) = self.record(event) {
            self.logger
                .error(&format!("session {} dropped event: {}", self.id, e));
        }
    }

    fn fold(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::ObstaclesRegenerated { .. } => {
                self.index = 0;
                self.completed = true;
            }
            SessionEvent::PathCommitted { waypoint_count, .. } => {
                self.index = 0;
                self.completed = *waypoint_count == 0;
            }
            SessionEvent::WaypointReached { index, .. } => {
                self.index = index + 1;
            }
            SessionEvent::RunCompleted { .. } => {
                self.completed = true;
            }
            SessionEvent::SessionStarted { .. }
            | SessionEvent::GhostEscapeEngaged { .. }
            | SessionEvent::ForcedSnap { .. } => {}
        }
        self.version += 1;
    }

    /// Hand the recorded events to the caller and clear them.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.uncommitted_events)
    }
}

impl AggregateRoot for DrawingSession {
    type Event = SessionEvent;

    fn aggregate_id(&self) -> &str {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) -> DomainResult<()> {
        self.fold(event);
        Ok(())
    }

    fn uncommitted_events(&self) -> &[Self::Event] {
        &self.uncommitted_events
    }

    fn mark_events_as_committed(&mut self) {
        self.uncommitted_events.clear();
    }

    fn add_event(&mut self, event: Self::Event) {
        self.uncommitted_events.push(event);
    }
}
