//! # maze_pathfinding
//!
//! Shortest-path search on a 4-connected maze grid. Three algorithms are provided:
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search), which returns a
//! path with the fewest steps through open cells,
//! [depth-first search](https://en.wikipedia.org/wiki/Depth-first_search), which returns some
//! path through open cells, and a
//! [Dijkstra](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) search that may cross walls
//! but pays the difference in cell value for every step.
//!
//! The grid is read-only during a search and every call builds its own frontier and parent map,
//! so searches never share state. Invalid input and unreachable goals are reported through the
//! [log] facade and yield an empty path.
pub mod error;
pub mod maze_grid;
pub mod priority_queue;
pub mod search;
pub mod session;
pub mod solver;

use grid_util::point::Point;
use itertools::Itertools;
use log::{debug, info, warn};

pub use error::SearchError;
pub use maze_grid::{MazeGrid, Neighborhood};
pub use session::SearchSession;
pub use solver::{Algorithm, GridSolver};

/// Cell value of a passable cell.
pub const OPEN: u8 = 0;
/// Cell value used for walls by the ASCII parser and the demos.
pub const WALL: u8 = 1;

/// Runs `algorithm` from `start` to `end`. Missing or out-of-bounds endpoints and unreachable
/// goals are reported as a [SearchError].
pub fn try_search(
    algorithm: Algorithm,
    grid: &MazeGrid,
    start: Option<Point>,
    end: Option<Point>,
) -> Result<Vec<Point>, SearchError> {
    let (Some(start), Some(end)) = (start, end) else {
        return Err(SearchError::InvalidEndpoints);
    };
    for p in [start, end] {
        if grid.value_at(p).is_none() {
            return Err(SearchError::OutOfBounds(p));
        }
    }
    debug!("Running {} from {} to {}", algorithm, start, end);
    let path = algorithm
        .find_path(grid, start, end)
        .ok_or(SearchError::NoPathFound { start, end })?;
    debug!("{} found a path of {} cells", algorithm, path.len());
    Ok(path)
}

/// Like [try_search] but reports failures as a diagnostic and returns an empty path instead.
pub fn search(
    algorithm: Algorithm,
    grid: &MazeGrid,
    start: Option<Point>,
    end: Option<Point>,
) -> Vec<Point> {
    match try_search(algorithm, grid, start, end) {
        Ok(path) => path,
        Err(err @ SearchError::NoPathFound { .. }) => {
            info!("{}", err);
            Vec::new()
        }
        Err(err) => {
            warn!("{}", err);
            Vec::new()
        }
    }
}

/// Checks that every step of `path` moves to an orthogonally adjacent cell.
pub fn is_contiguous(path: &[Point]) -> bool {
    path.iter()
        .tuple_windows()
        .all(|(a, b)| a.manhattan_distance(b) == 1)
}
