use crate::error::UnknownAlgorithm;
use crate::maze_grid::MazeGrid;
use core::fmt;
use grid_util::point::Point;
use itertools::Itertools;
use std::str::FromStr;

pub mod bfs;
pub mod dfs;
pub mod dijkstra;

use bfs::BfsSolver;
use dfs::DfsSolver;
use dijkstra::DijkstraSolver;

pub trait GridSolver {
    /// Computes a path from `start` to `goal`, both included. Returns [None] if either endpoint
    /// lies outside the grid or the search exhausts its frontier without reaching `goal`.
    fn find_path(&self, grid: &MazeGrid, start: Point, goal: Point) -> Option<Vec<Point>>;

    /// Cost of stepping between two cells as seen by this solver, or [None] if the step is not
    /// between orthogonally adjacent cells of the grid.
    fn edge_cost(&self, grid: &MazeGrid, p1: &Point, p2: &Point) -> Option<u32> {
        grid.edge_weight(p1, p2).map(|_| 1)
    }

    /// Total cost of `path`, or [None] if any step of it is not a valid move.
    fn path_cost(&self, grid: &MazeGrid, path: &[Point]) -> Option<u32> {
        path.iter()
            .tuple_windows()
            .map(|(p1, p2)| self.edge_cost(grid, p1, p2))
            .sum()
    }
}

/// The search algorithms a caller can choose from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dfs,
    /// Dijkstra over all in-bounds cells, see [DijkstraSolver].
    Weighted,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dfs, Algorithm::Weighted];
}

impl GridSolver for Algorithm {
    fn find_path(&self, grid: &MazeGrid, start: Point, goal: Point) -> Option<Vec<Point>> {
        match self {
            Algorithm::Bfs => BfsSolver.find_path(grid, start, goal),
            Algorithm::Dfs => DfsSolver.find_path(grid, start, goal),
            Algorithm::Weighted => DijkstraSolver.find_path(grid, start, goal),
        }
    }
    fn edge_cost(&self, grid: &MazeGrid, p1: &Point, p2: &Point) -> Option<u32> {
        match self {
            Algorithm::Bfs => BfsSolver.edge_cost(grid, p1, p2),
            Algorithm::Dfs => DfsSolver.edge_cost(grid, p1, p2),
            Algorithm::Weighted => DijkstraSolver.edge_cost(grid, p1, p2),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Weighted => "dijkstra",
        };
        f.write_str(name)
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Algorithm, UnknownAlgorithm> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dijkstra" | "weighted" => Ok(Algorithm::Weighted),
            _ => Err(UnknownAlgorithm(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_algorithm_names() {
        assert_eq!("bfs".parse(), Ok(Algorithm::Bfs));
        assert_eq!(" DFS ".parse(), Ok(Algorithm::Dfs));
        assert_eq!("dijkstra".parse(), Ok(Algorithm::Weighted));
        assert_eq!("weighted".parse(), Ok(Algorithm::Weighted));
        assert_eq!(
            "astar".parse::<Algorithm>(),
            Err(UnknownAlgorithm("astar".to_owned()))
        );
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse(), Ok(algorithm));
        }
    }

    #[test]
    fn path_cost_per_algorithm() {
        let grid: MazeGrid = ".#.\n...".parse().unwrap();
        let path = [Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)];
        assert_eq!(Algorithm::Bfs.path_cost(&grid, &path), Some(2));
        assert_eq!(Algorithm::Weighted.path_cost(&grid, &path), Some(2));
        assert_eq!(Algorithm::Weighted.path_cost(&grid, &path[..1]), Some(0));
    }

    /// Skipping a cell or leaving the grid is not a move any solver can make.
    #[test]
    fn path_cost_rejects_broken_paths() {
        let grid: MazeGrid = ".#.\n...".parse().unwrap();
        let jump = [Point::new(0, 0), Point::new(2, 0)];
        let outside = [Point::new(0, 0), Point::new(-1, 0)];
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.path_cost(&grid, &jump), None);
            assert_eq!(algorithm.path_cost(&grid, &outside), None);
        }
    }

    #[test]
    fn endpoints_outside_grid() {
        let grid: MazeGrid = "...\n...\n...".parse().unwrap();
        let inside = Point::new(2, 2);
        for outside in [Point::new(-1, 0), Point::new(0, 3)] {
            for algorithm in Algorithm::ALL {
                assert_eq!(algorithm.find_path(&grid, outside, inside), None);
                assert_eq!(algorithm.find_path(&grid, inside, outside), None);
                assert_eq!(algorithm.find_path(&grid, outside, outside), None);
            }
        }
    }
}
