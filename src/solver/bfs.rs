use grid_util::point::Point;

use crate::{maze_grid::MazeGrid, search::bfs, solver::GridSolver};

/// Breadth-first search over open cells. Returns a path with the fewest steps.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn find_path(&self, grid: &MazeGrid, start: Point, goal: Point) -> Option<Vec<Point>> {
        if grid.value_at(start).is_none() || grid.value_at(goal).is_none() {
            return None;
        }
        bfs(&start, |node| grid.passable_neighbors(node), |node| *node == goal)
    }
}
