use crate::common::DomainEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SessionEvent {
    SessionStarted {
        session_id: String,
        has_obstacles: bool,
        timestamp: DateTime<Utc>,
    },
    ObstaclesRegenerated {
        session_id: String,
        obstacle_count: usize,
        timestamp: DateTime<Utc>,
    },
    PathCommitted {
        session_id: String,
        waypoint_count: usize,
        timestamp: DateTime<Utc>,
    },
    WaypointReached {
        session_id: String,
        index: usize,
        pen: bool,
        timestamp: DateTime<Utc>,
    },
    GhostEscapeEngaged {
        session_id: String,
        index: usize,
        stuck_ticks: u32,
        timestamp: DateTime<Utc>,
    },
    ForcedSnap {
        session_id: String,
        index: usize,
        timestamp: DateTime<Utc>,
    },
    RunCompleted {
        session_id: String,
        ticks: u64,
        timestamp: DateTime<Utc>,
    },
}

impl DomainEvent for SessionEvent {
    fn event_type(&self) -> &'static str {
        match self {
            SessionEvent::SessionStarted { .. } => "SessionStarted",
            SessionEvent::ObstaclesRegenerated { .. } => "ObstaclesRegenerated",
            SessionEvent::PathCommitted { .. } => "PathCommitted",
            SessionEvent::WaypointReached { .. } => "WaypointReached",
            SessionEvent::GhostEscapeEngaged { .. } => "GhostEscapeEngaged",
            SessionEvent::ForcedSnap { .. } => "ForcedSnap",
            SessionEvent::RunCompleted { .. } => "RunCompleted",
        }
    }

    fn aggregate_id(&self) -> &str {
        match self {
            SessionEvent::SessionStarted { session_id, .. }
            | SessionEvent::ObstaclesRegenerated { session_id, .. }
            | SessionEvent::PathCommitted { session_id, .. }
            | SessionEvent::WaypointReached { session_id, .. }
            | SessionEvent::GhostEscapeEngaged { session_id, .. }
            | SessionEvent::ForcedSnap { session_id, .. }
            | SessionEvent::RunCompleted { session_id, .. } => session_id,
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            SessionEvent::SessionStarted { timestamp, .. }
            | SessionEvent::ObstaclesRegenerated { timestamp, .. }
            | SessionEvent::PathCommitted { timestamp, .. }
            | SessionEvent::WaypointReached { timestamp, .. }
            | SessionEvent::GhostEscapeEngaged { timestamp, .. }
            | SessionEvent::ForcedSnap { timestamp, .. }
            | SessionEvent::RunCompleted { timestamp, .. } => *timestamp,
        }
    }
}
