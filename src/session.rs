//! Caller-owned search state: a grid plus the endpoints picked on it.

use grid_util::point::Point;
use log::debug;

use crate::maze_grid::MazeGrid;
use crate::solver::Algorithm;

/// What a call to [SearchSession::select] did with the point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Start,
    End,
    /// Both endpoints were already set or the point lies outside the grid.
    Ignored,
}

#[derive(Clone, Debug, Default)]
pub struct SearchSession {
    pub grid: MazeGrid,
    start: Option<Point>,
    end: Option<Point>,
}

impl SearchSession {
    pub fn new(grid: MazeGrid) -> SearchSession {
        SearchSession {
            grid,
            start: None,
            end: None,
        }
    }
    pub fn start(&self) -> Option<Point> {
        self.start
    }
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// The first selected cell becomes the start, the second the end. Further selections are
    /// ignored until [reset](Self::reset).
    pub fn select(&mut self, point: Point) -> Selection {
        if self.grid.value_at(point).is_none() {
            return Selection::Ignored;
        }
        if self.start.is_none() {
            debug!("Selected start {}", point);
            self.start = Some(point);
            Selection::Start
        } else if self.end.is_none() {
            debug!("Selected end {}", point);
            self.end = Some(point);
            Selection::End
        } else {
            Selection::Ignored
        }
    }

    /// Replaces the grid and clears both endpoints.
    pub fn reset(&mut self, grid: MazeGrid) {
        self.grid = grid;
        self.start = None;
        self.end = None;
    }

    /// Runs `algorithm` between the selected endpoints. Empty if either is missing or no path
    /// exists.
    pub fn run(&self, algorithm: Algorithm) -> Vec<Point> {
        crate::search(algorithm, &self.grid, self.start, self.end)
    }
}
