//! Error types for the search engine and grid construction.

use grid_util::point::Point;
use thiserror::Error;

/// Soft failures of a search. [search](fn@crate::search) turns these into an empty path plus a
/// diagnostic; [try_search](crate::try_search) hands them to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Please select a start and end point")]
    InvalidEndpoints,

    #[error("Endpoint {0} lies outside the grid")]
    OutOfBounds(Point),

    #[error("No path found from {start} to {end}")]
    NoPathFound { start: Point, end: Point },
}

/// Raised when dequeuing from an empty [PriorityQueue](crate::priority_queue::PriorityQueue).
/// The search loops guard against it, so seeing it means the caller skipped `is_empty`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("dequeue called on an empty priority queue")]
pub struct EmptyQueueError;

/// Errors from building a [MazeGrid](crate::maze_grid::MazeGrid) out of rows or ASCII text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no cells")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unexpected character {found:?} at row {row}, column {column}")]
    InvalidCell {
        row: usize,
        column: usize,
        found: char,
    },
}

/// Returned by `Algorithm::from_str` for names outside `bfs`, `dfs` and `dijkstra`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown algorithm `{0}`, expected one of bfs, dfs, dijkstra")]
pub struct UnknownAlgorithm(pub String);
