use robo_scribe::config::DrawingMode;
use robo_scribe::domains::workspace::{Obstacle, WritingArea};
use robo_scribe::Config;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_default_config_is_valid() {
    let config = Config::default();

    assert!(config.validate().is_ok());
    assert_eq!(config.paper.writing_area(), WritingArea::new(50.0, 50.0, 950.0, 600.0));
    assert_eq!(config.robot.motion_settings().speed, 6.0);
    assert_eq!(config.robot.motion_settings().size, 25.0);
    assert_eq!(config.simulation.mode, DrawingMode::Single);
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = Config::from_toml_str(
        r#"
        [simulation]
        mode = "cooperative"
        text = "ABC"

        [robot]
        speed = 4.0
        "#,
    )
    .unwrap();

    assert_eq!(config.simulation.mode, DrawingMode::Cooperative);
    assert_eq!(config.simulation.text, "ABC");
    assert_eq!(config.simulation.max_ticks, 50_000);
    assert_eq!(config.robot.speed, 4.0);
    assert_eq!(config.robot.size, 25.0);
    assert_eq!(config.layout.letter_spacing, 20.0);
}

#[test]
fn test_fixed_obstacles_parse() {
    let config = Config::from_toml_str(
        r#"
        [obstacles]
        enabled = true
        count = 0
        seed = 3

        [[obstacles.fixed]]
        shape = "rectangle"
        x = 10.0
        y = 20.0
        w = 30.0
        h = 40.0

        [[obstacles.fixed]]
        shape = "circle"
        cx = 100.0
        cy = 100.0
        r = 15.0
        "#,
    )
    .unwrap();

    assert_eq!(config.obstacles.seed, Some(3));
    assert_eq!(
        config.obstacles.fixed,
        vec![Obstacle::rectangle(10.0, 20.0, 30.0, 40.0), Obstacle::circle(100.0, 100.0, 15.0)]
    );
}

#[test]
fn test_invalid_values_are_rejected() {
    assert!(Config::from_toml_str("[robot]\nspeed = 0.0\n").is_err());
    assert!(Config::from_toml_str("[robot]\nsize = -1.0\n").is_err());
    assert!(Config::from_toml_str("[layout]\ninterpolation_step = 0.0\n").is_err());
    assert!(Config::from_toml_str("[paper]\nwidth = 80.0\nmargin = 50.0\n").is_err());
    assert!(Config::from_toml_str("[obstacles]\nrect_min = 90.0\nrect_max = 10.0\n").is_err());
    assert!(Config::from_toml_str("[simulation]\nmode = \"sideways\"\n").is_err());
}

#[test]
fn test_line_spacing_and_step_bounds() {
    assert!(Config::from_toml_str("[paper]\nline_spacing = -10.0\n").is_err());
    assert!(Config::from_toml_str("[paper]\nline_spacing = 0.0\n").is_err());
    assert!(Config::from_toml_str("[layout]\ninterpolation_step = 0.001\n").is_err());

    let config = Config::from_toml_str("[layout]\ninterpolation_step = 0.5\n").unwrap();
    assert_eq!(config.layout.interpolation_step, 0.5);
}

#[tokio::test]
async fn test_config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[paper]\nline_spacing = 70.0\n\n[logging]\nlevel = \"debug\"").unwrap();

    let config = Config::from_file(file.path()).await.unwrap();

    assert_eq!(config.paper.line_spacing, 70.0);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file, None);
}

#[tokio::test]
async fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Config::from_file(dir.path().join("absent.toml")).await.is_err());
}
