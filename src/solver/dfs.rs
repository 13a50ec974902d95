use grid_util::point::Point;

use crate::{maze_grid::MazeGrid, search::dfs, solver::GridSolver};

/// Depth-first search over open cells. Finds a path whenever one exists but makes no attempt at
/// a short one. Neighbours are pushed left, right, up, down, so downward moves are explored
/// first.
#[derive(Clone, Copy, Debug, Default)]
pub struct DfsSolver;

impl GridSolver for DfsSolver {
    fn find_path(&self, grid: &MazeGrid, start: Point, goal: Point) -> Option<Vec<Point>> {
        if grid.value_at(start).is_none() || grid.value_at(goal).is_none() {
            return None;
        }
        dfs(&start, |node| grid.passable_neighbors(node), |node| *node == goal)
    }
}
