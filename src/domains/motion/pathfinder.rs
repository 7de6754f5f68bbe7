use crate::domains::workspace::{FieldView, Point2};
use std::collections::VecDeque;
use tracing::trace;

/// Neighbor enumeration order. Fixed so equal-length routes resolve the same way every run.
const NEIGHBORS: [(isize, isize); 8] = [
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (1, 1),
    (-1, 1),
    (-1, -1),
    (1, -1),
];

/// Breadth-first search over a coarse occupancy grid laid over the obstacle field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPathfinder {
    pub cell_size: f64,
    /// Clearance radius tested at every cell center.
    pub probe_radius: f64,
}

impl GridPathfinder {
    pub fn new(cell_size: f64, probe_radius: f64) -> Self {
        Self {
            cell_size: if cell_size > 0.0 { cell_size } else { 20.0 },
            probe_radius,
        }
    }

    /// Cell centers (world space) from the cell after `start` up to the goal cell.
    /// Empty when start and goal share a cell or when the goal is unreachable.
    pub fn find_path(&self, start: Point2, goal: Point2, view: FieldView<'_>) -> Vec<Point2> {
        let grid = Grid::over(view, self.cell_size);
        let from = grid.index_of(start);
        let to = grid.index_of(goal);
        if from == to {
            return Vec::new();
        }

        let mut seen = vec![false; grid.len()];
        let mut parent: Vec<Option<usize>> = vec![None; grid.len()];
        let mut queue = VecDeque::from([from]);
        seen[from] = true;

        while let Some(current) = queue.pop_front() {
            if current == to {
                let route = grid.trace_back(&parent, from, to);
                trace!(cells = route.len(), "grid route found");
                return route;
            }
            for next in grid.neighbors(current) {
                if seen[next] {
                    continue;
                }
                seen[next] = true;
                let center = grid.center(next);
                // the destination is always enterable
                if next != to && view.collides(center.x, center.y, self.probe_radius) {
                    continue;
                }
                parent[next] = Some(current);
                queue.push_back(next);
            }
        }

        trace!("goal cell unreachable");
        Vec::new()
    }
}

/// Convenience wrapper using the default cell size and a probe of 0.6 x agent size.
pub fn find_path(start: Point2, goal: Point2, view: FieldView<'_>, agent_size: f64) -> Vec<Point2> {
    GridPathfinder::new(20.0, agent_size * 0.6).find_path(start, goal, view)
}

struct Grid {
    origin: Point2,
    cell: f64,
    cols: usize,
    rows: usize,
}

impl Grid {
    fn over(view: FieldView<'_>, cell: f64) -> Self {
        let cols = ((view.width() / cell).ceil() as usize).max(1);
        let rows = ((view.height() / cell).ceil() as usize).max(1);
        Self {
            origin: view.origin,
            cell,
            cols,
            rows,
        }
    }

    fn len(&self) -> usize {
        self.cols * self.rows
    }

    fn axis_index(value: f64, cell: f64, count: usize) -> usize {
        let raw = (value / cell).floor().max(0.0) as usize;
        raw.min(count - 1)
    }

    /// Points outside the grid are clamped onto its border cells.
    fn index_of(&self, p: Point2) -> usize {
        let col = Self::axis_index(p.x - self.origin.x, self.cell, self.cols);
        let row = Self::axis_index(p.y - self.origin.y, self.cell, self.rows);
        row * self.cols + col
    }

    fn center(&self, index: usize) -> Point2 {
        let (col, row) = (index % self.cols, index / self.cols);
        Point2::new(
            self.origin.x + (col as f64 + 0.5) * self.cell,
            self.origin.y + (row as f64 + 0.5) * self.cell,
        )
    }

    fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let (col, row) = ((index % self.cols) as isize, (index / self.cols) as isize);
        NEIGHBORS.iter().filter_map(move |&(dc, dr)| {
            let (c, r) = (col + dc, row + dr);
            let inside = c >= 0 && r >= 0 && (c as usize) < self.cols && (r as usize) < self.rows;
            inside.then(|| r as usize * self.cols + c as usize)
        })
    }

    fn trace_back(&self, parent: &[Option<usize>], from: usize, to: usize) -> Vec<Point2> {
        let mut route = Vec::new();
        let mut cursor = to;
        while cursor != from {
            route.push(self.center(cursor));
            match parent[cursor] {
                Some(prev) => cursor = prev,
                None => break,
            }
        }
        route.reverse();
        route
    }
}
