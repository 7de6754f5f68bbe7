use crate::common::{DomainError, DomainResult};
use crate::domains::layout::LayoutSettings;
use crate::domains::motion::MotionSettings;
use crate::domains::workspace::{Obstacle, Point2, SpawnRanges, WritingArea};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Smallest accepted `layout.interpolation_step`.
pub const MIN_INTERPOLATION_STEP: f64 = 0.5;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paper: PaperConfig,
    pub robot: RobotConfig,
    pub layout: LayoutSettings,
    pub obstacles: ObstacleConfig,
    pub simulation: SimulationConfig,
    pub logging: LoggingConfig,
}

/// Window size and the margin that insets the paper from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaperConfig {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub line_spacing: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotConfig {
    pub size: f64,
    pub speed: f64,
    pub start_x: f64,
    pub start_y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleConfig {
    pub enabled: bool,
    /// Randomly generated shapes, on top of `fixed`.
    pub count: usize,
    pub rect_min: f64,
    pub rect_max: f64,
    pub radius_min: f64,
    pub radius_max: f64,
    pub seed: Option<u64>,
    /// Shapes in paper-local coordinates.
    pub fixed: Vec<Obstacle>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawingMode {
    Single,
    Cooperative,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub mode: DrawingMode,
    pub text: String,
    pub max_ticks: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub file: Option<String>,
    pub level: String,
    pub buffer_capacity: usize,
}

impl Config {
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DomainResult<()> {
        let invalid = |reason: &str| {
            Err(DomainError::InvalidConfiguration {
                reason: reason.to_string(),
            })
        };
        if !positive(self.robot.speed) {
            return invalid("robot.speed must be positive");
        }
        if !positive(self.robot.size) {
            return invalid("robot.size must be positive");
        }
        if !positive(self.layout.scale) {
            return invalid("layout.scale must be positive");
        }
        if !positive(self.layout.interpolation_step)
            || self.layout.interpolation_step < MIN_INTERPOLATION_STEP
        {
            return invalid("layout.interpolation_step is below 0.5");
        }
        if !positive(self.paper.line_spacing) {
            return invalid("paper.line_spacing must be positive");
        }
        if self.paper.margin * 2.0 > self.paper.width.min(self.paper.height) {
            return invalid("paper.margin leaves no room for the paper");
        }
        if self.obstacles.rect_min > self.obstacles.rect_max
            || self.obstacles.radius_min > self.obstacles.radius_max
        {
            return invalid("obstacle size ranges are inverted");
        }
        Ok(())
    }
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl PaperConfig {
    /// The paper rectangle in world coordinates.
    pub fn writing_area(&self) -> WritingArea {
        WritingArea::from_origin_size(
            self.margin,
            self.margin,
            self.width - self.margin * 2.0,
            self.height - self.margin * 2.0,
        )
    }
}

impl RobotConfig {
    pub fn start(&self) -> Point2 {
        Point2::new(self.start_x, self.start_y)
    }

    pub fn motion_settings(&self) -> MotionSettings {
        MotionSettings::with_speed_and_size(self.speed, self.size)
    }
}

impl ObstacleConfig {
    pub fn spawn_ranges(&self) -> SpawnRanges {
        SpawnRanges {
            rect_min: self.rect_min,
            rect_max: self.rect_max,
            radius_min: self.radius_min,
            radius_max: self.radius_max,
        }
    }
}

impl Default for PaperConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 650.0,
            margin: 50.0,
            line_spacing: 90.0,
        }
    }
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            size: 25.0,
            speed: 6.0,
            start_x: 50.0,
            start_y: 50.0,
        }
    }
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        let ranges = SpawnRanges::default();
        Self {
            enabled: true,
            count: 4,
            rect_min: ranges.rect_min,
            rect_max: ranges.rect_max,
            radius_min: ranges.radius_min,
            radius_max: ranges.radius_max,
            seed: None,
            fixed: Vec::new(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            mode: DrawingMode::Single,
            text: "HELLO WORLD".to_string(),
            max_ticks: 50_000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
            buffer_capacity: 256,
        }
    }
}
