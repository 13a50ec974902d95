use crate::error::GridError;
use crate::{OPEN, WALL};
use core::fmt;
use grid_util::grid::{SimpleValueGrid, ValueGrid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;
use std::str::FromStr;

/// Which edges [MazeGrid::neighbors_of] reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Neighborhood {
    /// Orthogonal neighbours holding [OPEN], each at unit cost.
    Passable,
    /// Every in-bounds orthogonal neighbour, walls included, costing the absolute difference
    /// between the two cell values.
    Weighted,
}

/// [MazeGrid] holds the raw [u8] cell values of a maze, where [OPEN] cells are passable and
/// anything else blocks the unweighted searches. Like a [SimpleValueGrid] it is addressed by
/// [Point]s and implements [ValueGrid]. It also tracks the connected components of open cells
/// using a [UnionFind] structure, which gives a cheap reachability test.
#[derive(Clone, Debug)]
pub struct MazeGrid {
    pub grid: SimpleValueGrid<u8>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for MazeGrid {
    fn default() -> MazeGrid {
        MazeGrid::new(0, 0, OPEN)
    }
}

impl MazeGrid {
    /// Builds a grid from row-major values, `rows[y][x]`.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<MazeGrid, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        if width == 0 {
            return Err(GridError::Empty);
        }
        let mut maze = MazeGrid::new(width, height, OPEN);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, value) in row.into_iter().enumerate() {
                maze.grid.set(x as i32, y as i32, value);
            }
        }
        maze.generate_components();
        Ok(maze)
    }

    /// Value at `p`, or [None] when `p` lies outside the grid.
    pub fn value_at(&self, p: Point) -> Option<u8> {
        if self.point_in_bounds(p) {
            Some(self.grid.get_point(p))
        } else {
            None
        }
    }
    pub fn is_open(&self, p: Point) -> bool {
        self.value_at(p) == Some(OPEN)
    }

    /// Open orthogonal neighbours in the order left, right, up, down. Empty for a point outside
    /// the grid.
    pub fn passable_neighbors(&self, p: &Point) -> SmallVec<[Point; 4]> {
        if !self.point_in_bounds(*p) {
            return SmallVec::new();
        }
        [
            Point::new(p.x - 1, p.y),
            Point::new(p.x + 1, p.y),
            Point::new(p.x, p.y - 1),
            Point::new(p.x, p.y + 1),
        ]
        .into_iter()
        .filter(|n| self.is_open(*n))
        .collect()
    }

    /// All in-bounds orthogonal neighbours with their edge weight, in the order left, up, down,
    /// right.
    pub fn weighted_neighbors(&self, p: &Point) -> SmallVec<[(Point, u32); 4]> {
        let Some(value) = self.value_at(*p) else {
            return SmallVec::new();
        };
        [
            Point::new(p.x - 1, p.y),
            Point::new(p.x, p.y - 1),
            Point::new(p.x, p.y + 1),
            Point::new(p.x + 1, p.y),
        ]
        .into_iter()
        .filter_map(|n| self.value_at(n).map(|v| (n, value.abs_diff(v) as u32)))
        .collect()
    }

    pub fn neighbors_of(
        &self,
        p: &Point,
        neighborhood: Neighborhood,
    ) -> SmallVec<[(Point, u32); 4]> {
        match neighborhood {
            Neighborhood::Passable => self
                .passable_neighbors(p)
                .into_iter()
                .map(|n| (n, 1))
                .collect(),
            Neighborhood::Weighted => self.weighted_neighbors(p),
        }
    }

    /// Weight of the edge between two orthogonally adjacent in-bounds cells.
    pub fn edge_weight(&self, a: &Point, b: &Point) -> Option<u32> {
        if a.manhattan_distance(b) != 1 {
            return None;
        }
        let (va, vb) = (self.value_at(*a)?, self.value_at(*b)?);
        Some(va.abs_diff(vb) as u32)
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.get_ix_point(point))
    }
    /// Checks if start and goal are open cells on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }
    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.is_open(*start) && self.is_open(*goal) {
            let start_ix = self.get_ix_point(start);
            let goal_ix = self.get_ix_point(goal);
            !self.components.equiv(start_ix, goal_ix)
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up open 4-neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        let w = self.width();
        let h = self.height();
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for x in 0..w as i32 {
            for y in 0..h as i32 {
                let point = Point::new(x, y);
                if !self.is_open(point) {
                    continue;
                }
                let parent_ix = self.get_ix_point(&point);
                // Left and upper neighbours were already linked from their own side.
                for n in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                    if self.is_open(n) {
                        let ix = self.get_ix_point(&n);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for y in 0..self.height() as i32 {
            let values = (0..self.width() as i32)
                .map(|x| self.get(x, y))
                .collect::<Vec<u8>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}

/// Parses one row per line: `.` is [OPEN], `#` is [WALL] and a digit is taken as the raw value.
/// Surrounding whitespace and blank lines are ignored.
impl FromStr for MazeGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<MazeGrid, GridError> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(column, c)| match c {
                        '.' => Ok(OPEN),
                        '#' => Ok(WALL),
                        '0'..='9' => Ok(c as u8 - b'0'),
                        found => Err(GridError::InvalidCell { row, column, found }),
                    })
                    .collect::<Result<Vec<u8>, GridError>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        MazeGrid::from_rows(rows)
    }
}

impl ValueGrid<u8> for MazeGrid {
    fn new(width: usize, height: usize, default_value: u8) -> Self {
        let mut maze = MazeGrid {
            grid: SimpleValueGrid::new(width, height, default_value),
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        if default_value == OPEN {
            maze.generate_components();
        }
        maze
    }
    fn get(&self, x: i32, y: i32) -> u8 {
        self.grid.get(x, y)
    }
    /// Updates a position on the grid. Joins newly connected components and flags the components
    /// as dirty if components are (potentially) broken apart into multiple.
    fn set(&mut self, x: i32, y: i32, value: u8) {
        let p = Point::new(x, y);
        let was_open = self.is_open(p);
        self.grid.set(x, y, value);
        if value == OPEN {
            let p_ix = self.get_ix_point(&p);
            for n in self.passable_neighbors(&p) {
                let n_ix = self.get_ix_point(&n);
                self.components.union(p_ix, n_ix);
            }
        } else if was_open {
            self.components_dirty = true;
        }
    }
    fn width(&self) -> usize {
        self.grid.width()
    }
    fn height(&self) -> usize {
        self.grid.height()
    }
}
