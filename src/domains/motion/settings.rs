use serde::{Deserialize, Serialize};

/// Motion tuning. Factors are multiples of `speed` or `size`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionSettings {
    /// Distance covered per tick.
    pub speed: f64,
    /// Agent footprint (diameter-like extent).
    pub size: f64,
    pub arrive_factor: f64,
    /// Movement below this per tick counts as a stuck tick.
    pub stuck_epsilon: f64,
    /// Ghost escape engages once the stuck counter exceeds this.
    pub ghost_after: u32,
    /// Stuck counter value at which the agent is snapped onto its target.
    pub forced_snap_at: u32,
    pub ghost_speed_factor: f64,
    /// Per-axis distance after which a target counts as new.
    pub retarget_tolerance: f64,
    pub subpath_pop_factor: f64,
    pub sight_sample_spacing: f64,
    pub sight_radius_factor: f64,
    /// Radius used for the per-axis slide collision test.
    pub body_radius_factor: f64,
    pub cell_size: f64,
    pub cell_radius_factor: f64,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            speed: 6.0,
            size: 25.0,
            arrive_factor: 1.5,
            stuck_epsilon: 0.5,
            ghost_after: 30,
            forced_snap_at: 90,
            ghost_speed_factor: 0.8,
            retarget_tolerance: 1.0,
            subpath_pop_factor: 2.0,
            sight_sample_spacing: 15.0,
            sight_radius_factor: 0.7,
            body_radius_factor: 0.5,
            cell_size: 20.0,
            cell_radius_factor: 0.6,
        }
    }
}

impl MotionSettings {
    pub fn with_speed_and_size(speed: f64, size: f64) -> Self {
        Self {
            speed,
            size,
            ..Self::default()
        }
    }
}
