use robo_scribe::adapters::outbound::init_noop_logger;
use robo_scribe::application::to_envelopes;
use robo_scribe::common::AggregateRoot;
use robo_scribe::domains::session::*;
use robo_scribe::domains::workspace::*;
use std::sync::Arc;

fn settings() -> SessionSettings {
    SessionSettings::new(WritingArea::new(0.0, 0.0, 600.0, 300.0), 90.0)
}

fn session(field: Option<Arc<ObstacleField>>) -> DrawingSession {
    DrawingSession::new("session-1".to_string(), settings(), field, init_noop_logger())
}

fn run(session: &mut DrawingSession) -> u64 {
    let mut ticks = 0;
    while !session.tick().complete {
        ticks += 1;
        assert!(ticks < 50_000, "session never finished");
    }
    ticks
}

#[test]
fn test_new_session_records_start() {
    let session = session(None);

    assert_eq!(session.id(), "session-1");
    assert_eq!(session.version(), 1);
    assert!(session.is_complete());
    assert_eq!(session.progress(), (0, 0));
    assert!(matches!(
        session.uncommitted_events()[0],
        SessionEvent::SessionStarted { has_obstacles: false, .. }
    ));
}

#[test]
fn test_session_draws_whole_path() {
    let mut session = session(None);
    let total = session.commit_text("HI");
    assert!(total > 0);
    assert!(!session.is_complete());
    assert_eq!(session.completion_percent(), 0.0);

    run(&mut session);

    assert!(session.is_complete());
    assert_eq!(session.progress(), (total, total));
    assert_eq!(session.completion_percent(), 100.0);
    assert_eq!(session.inked_segments().len(), session.path().ink_segments().count());
    assert_eq!(session.agent().position(), session.path().get(total - 1).unwrap().point());

    let events = session.uncommitted_events();
    let reached = events
        .iter()
        .filter(|e| matches!(e, SessionEvent::WaypointReached { .. }))
        .count();
    let finished = events
        .iter()
        .filter(|e| matches!(e, SessionEvent::RunCompleted { .. }))
        .count();
    assert_eq!(reached, total);
    assert_eq!(finished, 1);
}

#[test]
fn test_tick_after_completion_is_idle() {
    let mut session = session(None);
    session.commit_text("I");
    run(&mut session);

    let position = session.agent().position();
    let report = session.tick();
    assert!(report.complete);
    assert!(!report.reached);
    assert_eq!(report.outcome, None);
    assert_eq!(report.position, position);
}

#[test]
fn test_empty_text_completes_immediately() {
    let mut session = session(None);
    assert_eq!(session.commit_text(""), 0);
    assert!(session.is_complete());
    assert_eq!(session.completion_percent(), 100.0);
    assert!(session.tick().complete);
}

#[test]
fn test_pen_follows_current_waypoint() {
    let mut session = session(None);
    session.commit_text("L");

    // first waypoint of a glyph is always a move
    assert!(!session.current_pen());
    let mut saw_ink = false;
    while !session.is_complete() {
        let report = session.tick();
        saw_ink |= report.pen;
    }
    assert!(saw_ink);
}

#[test]
fn test_snap_to_first_waypoint() {
    let mut settings = settings();
    settings.snap_to_first_waypoint = true;
    let mut session = DrawingSession::new("snap".to_string(), settings, None, init_noop_logger());

    session.commit_text("A");
    assert_eq!(session.agent().position(), session.path().first().unwrap().point());
    assert!(session.tick().reached);
}

#[test]
fn test_reset_swaps_field_and_clears_progress() {
    let mut session = session(None);
    session.commit_text("HI");
    for _ in 0..10 {
        session.tick();
    }
    assert!(session.current_index() > 0);

    let field = Arc::new(ObstacleField::with_obstacles(600.0, 300.0, vec![Obstacle::circle(300.0, 150.0, 20.0)]));
    session.reset(Some(field));

    assert_eq!(session.current_index(), 0);
    assert!(session.path().is_empty());
    assert!(session.inked_segments().is_empty());
    assert_eq!(session.agent().position(), Point2::new(0.0, 0.0));
    assert_eq!(session.field().map(|f| f.len()), Some(1));
    assert!(matches!(
        session.uncommitted_events().last().unwrap(),
        SessionEvent::ObstaclesRegenerated { obstacle_count: 1, .. }
    ));
}

#[test]
fn test_session_with_obstacles_finishes_without_inking_them() {
    let field = Arc::new(ObstacleField::with_obstacles(
        600.0,
        300.0,
        vec![Obstacle::rectangle(120.0, 0.0, 40.0, 200.0), Obstacle::circle(400.0, 60.0, 30.0)],
    ));
    let mut session = session(Some(field));
    session.commit_text("HELLO WORLD");
    run(&mut session);

    let view = session.field_view().unwrap();
    for (_, to) in session.inked_segments() {
        assert!(!view.collides_point(to.x, to.y));
    }
}

#[test]
fn test_events_drain_and_wrap() {
    let mut session = session(None);
    session.commit_text("I");
    run(&mut session);

    let events = session.drain_events();
    assert!(session.uncommitted_events().is_empty());

    let envelopes = to_envelopes(&events).unwrap();
    assert_eq!(envelopes.len(), events.len());
    assert_eq!(envelopes[0].event_type, "SessionStarted");
    assert_eq!(envelopes[0].sequence, 1);
    assert_eq!(envelopes.last().unwrap().event_type, "RunCompleted");
    assert!(envelopes.iter().all(|e| e.aggregate_id == "session-1"));
}

#[test]
fn test_every_recorded_event_bumps_version() {
    let mut session = session(None);
    session.commit_text("HI");
    run(&mut session);

    assert_eq!(session.version(), session.uncommitted_events().len() as u64);
}

#[test]
fn test_mark_events_as_committed() {
    let mut session = session(None);
    session.commit_text("I");
    let version = session.version();
    session.mark_events_as_committed();

    assert!(session.uncommitted_events().is_empty());
    assert_eq!(session.version(), version);
}

#[test]
fn test_split_text_at_midpoint() {
    assert_eq!(split_text("HELLO WORLD"), ("HELLO".to_string(), " WORLD".to_string()));
    assert_eq!(split_text("ABCD"), ("AB".to_string(), "CD".to_string()));
    assert_eq!(split_text("A"), (String::new(), "A".to_string()));
    assert_eq!(split_text(""), (String::new(), String::new()));
    assert_eq!(split_text("ÄÖÜX"), ("ÄÖ".to_string(), "ÜX".to_string()));
}

#[test]
fn test_cooperative_run_writes_each_half_in_its_column() {
    let area = WritingArea::new(0.0, 0.0, 800.0, 300.0);
    let mut run = CooperativeRun::new(
        "coop",
        SessionSettings::new(area, 90.0),
        None,
        init_noop_logger(),
    );
    let (left, right) = run.commit_text("ABCD");
    assert!(left > 0 && right > 0);
    assert_eq!(run.progress(), (0, left + right));

    assert!(run.first().path().iter().all(|wp| wp.x <= 400.0));
    assert!(run.second().path().iter().all(|wp| wp.x >= 400.0));
    assert_eq!(run.first().agent().position(), run.first().path().first().unwrap().point());
    assert_eq!(run.second().agent().position(), run.second().path().first().unwrap().point());

    let mut ticks = 0;
    while !run.is_complete() {
        run.tick();
        ticks += 1;
        assert!(ticks < 50_000);
    }
    assert_eq!(run.progress(), (left + right, left + right));
    assert_eq!(run.completion_percent(), 100.0);
    assert_eq!(run.first().id(), "coop-1");
    assert_eq!(run.second().id(), "coop-2");
}

#[test]
fn test_cooperative_sessions_share_field() {
    let field = Arc::new(ObstacleField::with_obstacles(800.0, 300.0, vec![Obstacle::circle(100.0, 100.0, 10.0)]));
    let run = CooperativeRun::new(
        "coop",
        SessionSettings::new(WritingArea::new(0.0, 0.0, 800.0, 300.0), 90.0),
        Some(field),
        init_noop_logger(),
    );
    assert!(Arc::ptr_eq(run.first().field().unwrap(), run.second().field().unwrap()));
}
