mod bfs;

pub use bfs::reachable_cells;

use bfs::shortest_path_bfs;

use crate::error::{Error, Result};
use crate::maze::Maze;

/// Shortest path between two cells over the maze's open passages, as an
/// ordered list of coordinates from `start` to `goal` inclusive.
///
/// Both endpoints must lie inside the grid. On a generated maze the
/// path always exists and is unique; on an arbitrary decoded grid the
/// result is empty when no path connects the endpoints.
pub fn solve_maze(maze: &Maze, start: (u16, u16), goal: (u16, u16)) -> Result<Vec<(u16, u16)>> {
    for coord in [start, goal] {
        if !maze.is_in_bounds(coord) {
            return Err(Error::OutOfBounds {
                coord,
                width: maze.width(),
                height: maze.height(),
            });
        }
    }

    let path = shortest_path_bfs(maze, start, goal);
    tracing::debug!(?start, ?goal, steps = path.len(), "solve finished");
    Ok(path)
}
