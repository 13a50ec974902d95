use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use maze_pathfinding::{Algorithm, MazeGrid, SearchSession, OPEN, WALL};

// In this example paths are found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks a wall
// - S marks the start
// - E marks the end
//
// BFS and DFS stay on open cells, the weighted search may cross the wall at a cost.

fn main() {
    let mut grid = MazeGrid::new(3, 3, OPEN);
    grid.set(1, 1, WALL);
    println!("{}", grid);
    let mut session = SearchSession::new(grid);
    session.select(Point::new(0, 0));
    session.select(Point::new(2, 2));
    for algorithm in Algorithm::ALL {
        println!("Path ({algorithm}):");
        for p in session.run(algorithm) {
            println!("{:?}", p);
        }
    }
}
