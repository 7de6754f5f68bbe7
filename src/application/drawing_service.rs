use crate::common::{ApplicationResult, DomainError, DomainResult, EventEnvelope};
use crate::config::{Config, DrawingMode};
use crate::domains::logger::DynLogger;
use crate::domains::session::{CooperativeRun, DrawingSession, SessionEvent, SessionSettings};
use crate::domains::workspace::ObstacleField;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

const YIELD_EVERY: u64 = 1_000;

/// What a headless run produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub run_id: String,
    pub mode: DrawingMode,
    pub text: String,
    pub obstacle_count: usize,
    pub waypoints: usize,
    pub reached: usize,
    pub ticks: u64,
    pub completed: bool,
    pub completion_percent: f64,
    pub inked_segments: usize,
    pub ghost_escapes: usize,
    pub forced_snaps: usize,
}

/// Builds obstacle fields and sessions from a [`Config`] and drives them.
pub struct DrawingService {
    config: Config,
    logger: DynLogger,
}

impl DrawingService {
    pub fn new(config: Config, logger: DynLogger) -> Self {
        Self { config, logger }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session_settings(&self) -> SessionSettings {
        let area = self.config.paper.writing_area();
        let mut settings = SessionSettings::new(area, self.config.paper.line_spacing);
        settings.layout = self.config.layout.clone();
        settings.motion = self.config.robot.motion_settings();
        settings.start = self.config.robot.start();
        settings
    }

    /// Random shapes from the configured seed (entropy when unset) plus the fixed
    /// ones. `None` when obstacles are disabled.
    pub fn build_field(&self) -> Option<Arc<ObstacleField>> {
        let cfg = &self.config.obstacles;
        if !cfg.enabled {
            return None;
        }
        let area = self.config.paper.writing_area();
        let mut rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut field =
            ObstacleField::generate_static(area.width(), area.height(), cfg.count, cfg.spawn_ranges(), &mut rng);
        for obstacle in &cfg.fixed {
            if obstacle.fits_within(field.width, field.height) {
                field.add(*obstacle);
            } else {
                warn!("fixed obstacle {:?} lies outside the paper, ignored", obstacle);
            }
        }
        debug!("built obstacle field with {} shapes", field.len());
        Some(Arc::new(field))
    }

    pub fn start_single(&self, text: &str) -> DrawingSession {
        let id = Uuid::new_v4().to_string();
        let mut session = DrawingSession::new(id, self.session_settings(), self.build_field(), self.logger.clone());
        session.commit_text(text);
        session
    }

    pub fn start_cooperative(&self, text: &str) -> CooperativeRun {
        let id = Uuid::new_v4().to_string();
        let mut run = CooperativeRun::new(&id, self.session_settings(), self.build_field(), self.logger.clone());
        run.commit_text(text);
        run
    }

    /// Run the configured mode on the configured text.
    pub async fn run(&self) -> ApplicationResult<RunSummary> {
        let text = self.config.simulation.text.clone();
        match self.config.simulation.mode {
            DrawingMode::Single => {
                let mut session = self.start_single(&text);
                self.run_single(&mut session).await
            }
            DrawingMode::Cooperative => {
                let mut run = self.start_cooperative(&text);
                self.run_cooperative(&mut run).await
            }
        }
    }

    /// Tick until the path is finished or `max_ticks` runs out.
    pub async fn run_single(&self, session: &mut DrawingSession) -> ApplicationResult<RunSummary> {
        let max_ticks = self.config.simulation.max_ticks;
        let mut ticks = 0;
        while !session.is_complete() && ticks < max_ticks {
            session.tick();
            ticks += 1;
            if ticks % YIELD_EVERY == 0 {
                tokio::task::yield_now().await;
            }
        }
        if !session.is_complete() {
            self.logger
                .warn(&format!("session {} stopped after {} ticks", session.id(), ticks));
        }

        let events = session.drain_events();
        let (reached, waypoints) = session.progress();
        let summary = RunSummary {
            run_id: session.id().to_string(),
            mode: DrawingMode::Single,
            text: self.config.simulation.text.clone(),
            obstacle_count: session.field().map_or(0, |f| f.len()),
            waypoints,
            reached,
            ticks: session.ticks(),
            completed: session.is_complete(),
            completion_percent: session.completion_percent(),
            inked_segments: session.inked_segments().len(),
            ghost_escapes: count_ghost_escapes(&events),
            forced_snaps: count_forced_snaps(&events),
        };
        info!(run = %summary.run_id, ticks = summary.ticks, "single run finished");
        Ok(summary)
    }

    pub async fn run_cooperative(&self, run: &mut CooperativeRun) -> ApplicationResult<RunSummary> {
        let max_ticks = self.config.simulation.max_ticks;
        let mut ticks = 0;
        while !run.is_complete() && ticks < max_ticks {
            run.tick();
            ticks += 1;
            if ticks % YIELD_EVERY == 0 {
                tokio::task::yield_now().await;
            }
        }
        if !run.is_complete() {
            self.logger
                .warn(&format!("cooperative run stopped after {} ticks", ticks));
        }

        let (first, second) = run.sessions_mut();
        let mut events = first.drain_events();
        events.extend(second.drain_events());
        let (reached, waypoints) = run.progress();
        let summary = RunSummary {
            run_id: run.id().to_string(),
            mode: DrawingMode::Cooperative,
            text: self.config.simulation.text.clone(),
            obstacle_count: run.first().field().map_or(0, |f| f.len()),
            waypoints,
            reached,
            ticks: run.ticks(),
            completed: run.is_complete(),
            completion_percent: run.completion_percent(),
            inked_segments: run.first().inked_segments().len() + run.second().inked_segments().len(),
            ghost_escapes: count_ghost_escapes(&events),
            forced_snaps: count_forced_snaps(&events),
        };
        info!(run = %summary.run_id, ticks = summary.ticks, "cooperative run finished");
        Ok(summary)
    }
}

/// Wrap session events for an outside consumer, numbered in order.
pub fn to_envelopes(events: &[SessionEvent]) -> DomainResult<Vec<EventEnvelope>> {
    events
        .iter()
        .enumerate()
        .map(|(i, event)| EventEnvelope::new(event, "DrawingSession", i as u64 + 1).map_err(DomainError::from))
        .collect()
}

fn count_ghost_escapes(events: &[SessionEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, SessionEvent::GhostEscapeEngaged { .. }))
        .count()
}

fn count_forced_snaps(events: &[SessionEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, SessionEvent::ForcedSnap { .. }))
        .count()
}
