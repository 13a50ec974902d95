use grid_util::point::Point;

use crate::{maze_grid::MazeGrid, search::dijkstra, solver::GridSolver};

/// Dijkstra's algorithm over every in-bounds cell. Walls are not filtered out; instead each step
/// costs the absolute difference between the values of the two cells, so on a binary maze
/// entering or leaving a wall costs 1 and every other step is free.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl DijkstraSolver {
    /// Like [find_path](GridSolver::find_path) but also returns the total weight of the path.
    pub fn find_path_and_cost(
        &self,
        grid: &MazeGrid,
        start: Point,
        goal: Point,
    ) -> Option<(Vec<Point>, u32)> {
        if grid.value_at(start).is_none() || grid.value_at(goal).is_none() {
            return None;
        }
        dijkstra(&start, |node| grid.weighted_neighbors(node), |node| *node == goal)
    }
}

impl GridSolver for DijkstraSolver {
    fn find_path(&self, grid: &MazeGrid, start: Point, goal: Point) -> Option<Vec<Point>> {
        self.find_path_and_cost(grid, start, goal).map(|(path, _)| path)
    }
    fn edge_cost(&self, grid: &MazeGrid, p1: &Point, p2: &Point) -> Option<u32> {
        grid.edge_weight(p1, p2)
    }
}
