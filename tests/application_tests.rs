use robo_scribe::adapters::outbound::init_noop_logger;
use robo_scribe::application::DrawingService;
use robo_scribe::config::DrawingMode;
use robo_scribe::domains::workspace::Obstacle;
use robo_scribe::Config;

fn config(text: &str) -> Config {
    let mut config = Config::default();
    config.simulation.text = text.to_string();
    config.obstacles.seed = Some(11);
    config
}

#[test]
fn test_seeded_fields_repeat() {
    let service = DrawingService::new(config("HI"), init_noop_logger());

    let a = service.build_field().unwrap();
    let b = service.build_field().unwrap();
    assert_eq!(*a, *b);
    assert_eq!(a.len(), 4);
    assert_eq!(a.width, 900.0);
    assert_eq!(a.height, 550.0);
}

#[test]
fn test_disabled_obstacles_build_no_field() {
    let mut config = config("HI");
    config.obstacles.enabled = false;
    let service = DrawingService::new(config, init_noop_logger());

    assert!(service.build_field().is_none());
    assert!(service.start_single("HI").field().is_none());
}

#[test]
fn test_fixed_obstacles_outside_paper_are_dropped() {
    let mut config = config("HI");
    config.obstacles.count = 0;
    config.obstacles.fixed = vec![
        Obstacle::circle(100.0, 100.0, 20.0),
        Obstacle::rectangle(880.0, 10.0, 50.0, 50.0),
    ];
    let service = DrawingService::new(config, init_noop_logger());

    let field = service.build_field().unwrap();
    assert_eq!(field.obstacles(), &[Obstacle::circle(100.0, 100.0, 20.0)]);
}

#[tokio::test]
async fn test_single_run_completes() {
    let service = DrawingService::new(config("HELLO WORLD"), init_noop_logger());

    let summary = service.run().await.unwrap();

    assert_eq!(summary.mode, DrawingMode::Single);
    assert!(summary.completed);
    assert!(summary.waypoints > 0);
    assert_eq!(summary.reached, summary.waypoints);
    assert_eq!(summary.completion_percent, 100.0);
    assert_eq!(summary.obstacle_count, 4);
    assert!(summary.inked_segments > 0);
    assert!(summary.ticks >= summary.waypoints as u64);
}

#[tokio::test]
async fn test_cooperative_run_completes() {
    let mut config = config("ABCDEF");
    config.simulation.mode = DrawingMode::Cooperative;
    let service = DrawingService::new(config, init_noop_logger());

    let summary = service.run().await.unwrap();

    assert_eq!(summary.mode, DrawingMode::Cooperative);
    assert!(summary.completed);
    assert_eq!(summary.reached, summary.waypoints);
}

#[tokio::test]
async fn test_tick_budget_stops_run() {
    let mut config = config("A LONGER SENTENCE THAT NEEDS MANY TICKS");
    config.simulation.max_ticks = 25;
    let service = DrawingService::new(config, init_noop_logger());

    let summary = service.run().await.unwrap();

    assert!(!summary.completed);
    assert_eq!(summary.ticks, 25);
    assert!(summary.reached < summary.waypoints);
}

#[tokio::test]
async fn test_summary_serializes() {
    let mut config = config("OK");
    config.obstacles.enabled = false;
    let service = DrawingService::new(config, init_noop_logger());

    let summary = service.run().await.unwrap();
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["mode"], "single");
    assert_eq!(json["text"], "OK");
    assert_eq!(json["obstacle_count"], 0);
}
