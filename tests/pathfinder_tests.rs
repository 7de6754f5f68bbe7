use robo_scribe::domains::motion::*;
use robo_scribe::domains::workspace::*;

fn planner() -> GridPathfinder {
    GridPathfinder::new(20.0, 15.0)
}

#[test]
fn test_open_grid_route_matches_chebyshev_distance() {
    let field = ObstacleField::new(400.0, 400.0);
    let view = field.at(Point2::new(0.0, 0.0));
    let goal = Point2::new(110.0, 110.0);

    let route = planner().find_path(Point2::new(0.0, 0.0), Point2::new(100.0, 100.0), view);

    // cells (0,0) -> (5,5)
    assert_eq!(route.len(), 5);
    assert_eq!(*route.last().unwrap(), goal);
    let mut remaining = Point2::new(10.0, 10.0).distance_to(goal);
    for center in &route {
        let d = center.distance_to(goal);
        assert!(d < remaining, "route moved away from the goal at {:?}", center);
        remaining = d;
    }
}

#[test]
fn test_same_cell_returns_empty_route() {
    let field = ObstacleField::new(400.0, 400.0);
    let view = field.at(Point2::new(0.0, 0.0));
    assert!(planner().find_path(Point2::new(3.0, 3.0), Point2::new(17.0, 12.0), view).is_empty());
}

#[test]
fn test_route_detours_around_wall() {
    let field = ObstacleField::with_obstacles(400.0, 400.0, vec![Obstacle::rectangle(190.0, 0.0, 20.0, 300.0)]);
    let view = field.at(Point2::new(0.0, 0.0));
    let goal = Point2::new(350.0, 100.0);

    let route = planner().find_path(Point2::new(50.0, 100.0), goal, view);

    assert!(!route.is_empty());
    assert!(route.iter().any(|c| c.y > 300.0), "route must pass below the wall");
    for center in &route[..route.len() - 1] {
        assert!(!view.collides(center.x, center.y, 15.0), "{:?} is blocked", center);
    }
    assert_eq!(*route.last().unwrap(), Point2::new(350.0, 110.0));
}

#[test]
fn test_unreachable_goal_returns_empty_route() {
    let field = ObstacleField::with_obstacles(400.0, 400.0, vec![Obstacle::rectangle(190.0, 0.0, 20.0, 400.0)]);
    let view = field.at(Point2::new(0.0, 0.0));
    assert!(planner()
        .find_path(Point2::new(50.0, 200.0), Point2::new(350.0, 200.0), view)
        .is_empty());
}

#[test]
fn test_goal_inside_obstacle_is_still_reachable() {
    let field = ObstacleField::with_obstacles(400.0, 400.0, vec![Obstacle::circle(300.0, 300.0, 12.0)]);
    let view = field.at(Point2::new(0.0, 0.0));
    let route = planner().find_path(Point2::new(50.0, 50.0), Point2::new(300.0, 300.0), view);
    assert_eq!(*route.last().unwrap(), Point2::new(310.0, 310.0));
}

#[test]
fn test_search_is_deterministic() {
    let field = ObstacleField::with_obstacles(
        600.0,
        400.0,
        vec![Obstacle::rectangle(200.0, 100.0, 40.0, 200.0), Obstacle::circle(400.0, 200.0, 50.0)],
    );
    let view = field.at(Point2::new(50.0, 50.0));
    let (start, goal) = (Point2::new(60.0, 250.0), Point2::new(620.0, 250.0));

    let first = planner().find_path(start, goal, view);
    assert!(!first.is_empty());
    for _ in 0..5 {
        assert_eq!(planner().find_path(start, goal, view), first);
    }
}

#[test]
fn test_routes_follow_view_origin() {
    let field = ObstacleField::new(300.0, 300.0);
    let view = field.at(Point2::new(50.0, 50.0));

    let route = planner().find_path(Point2::new(50.0, 50.0), Point2::new(150.0, 50.0), view);

    assert_eq!(route.len(), 5);
    assert!(route.iter().all(|c| c.y == 60.0));
    assert_eq!(*route.last().unwrap(), Point2::new(160.0, 60.0));
}

#[test]
fn test_free_function_uses_agent_size() {
    let field = ObstacleField::with_obstacles(400.0, 400.0, vec![Obstacle::rectangle(190.0, 0.0, 20.0, 300.0)]);
    let view = field.at(Point2::new(0.0, 0.0));
    let (start, goal) = (Point2::new(50.0, 100.0), Point2::new(350.0, 100.0));

    assert_eq!(find_path(start, goal, view, 25.0), planner().find_path(start, goal, view));
}
