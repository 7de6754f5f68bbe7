use super::drawing_session::{DrawingSession, SessionSettings, TickReport};
use crate::domains::logger::DynLogger;
use crate::domains::workspace::ObstacleField;
use std::sync::Arc;

/// Split at the character midpoint; the left half gets the shorter share of an
/// odd-length text.
pub fn split_text(text: &str) -> (String, String) {
    let mid = text.chars().count() / 2;
    let first: String = text.chars().take(mid).collect();
    let second: String = text.chars().skip(mid).collect();
    (first, second)
}

/// Two independent sessions writing one text side by side: the first half in the
/// left column, the second half in the right. They share the obstacle field and
/// nothing else.
pub struct CooperativeRun {
    id: String,
    first: DrawingSession,
    second: DrawingSession,
}

impl CooperativeRun {
    pub fn new(
        id: &str,
        settings: SessionSettings,
        field: Option<Arc<ObstacleField>>,
        logger: DynLogger,
    ) -> Self {
        let (left, right) = settings.writing_area.split_columns();

        let mut first_settings = settings.clone();
        first_settings.writing_area = left;
        first_settings.start = left.origin();
        first_settings.snap_to_first_waypoint = true;

        let mut second_settings = settings;
        second_settings.writing_area = right;
        second_settings.start = right.origin();
        second_settings.snap_to_first_waypoint = true;

        Self {
            id: id.to_string(),
            first: DrawingSession::new(format!("{}-1", id), first_settings, field.clone(), logger.clone()),
            second: DrawingSession::new(format!("{}-2", id), second_settings, field, logger),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn first(&self) -> &DrawingSession {
        &self.first
    }

    pub fn second(&self) -> &DrawingSession {
        &self.second
    }

    pub fn sessions_mut(&mut self) -> (&mut DrawingSession, &mut DrawingSession) {
        (&mut self.first, &mut self.second)
    }

    /// Returns the waypoint counts committed to each robot.
    pub fn commit_text(&mut self, text: &str) -> (usize, usize) {
        let (left, right) = split_text(text);
        (self.first.commit_text(&left), self.second.commit_text(&right))
    }

    pub fn tick(&mut self) -> (TickReport, TickReport) {
        (self.first.tick(), self.second.tick())
    }

    pub fn progress(&self) -> (usize, usize) {
        let (a_done, a_total) = self.first.progress();
        let (b_done, b_total) = self.second.progress();
        (a_done + b_done, a_total + b_total)
    }

    pub fn completion_percent(&self) -> f64 {
        match self.progress() {
            (_, 0) => 100.0,
            (done, total) => done as f64 / total as f64 * 100.0,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.first.is_complete() && self.second.is_complete()
    }

    pub fn ticks(&self) -> u64 {
        self.first.ticks().max(self.second.ticks())
    }

    pub fn reset(&mut self, field: Option<Arc<ObstacleField>>) {
        self.first.reset(field.clone());
        self.second.reset(field);
    }
}
