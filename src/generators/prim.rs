use rand::Rng;

use crate::generators::get_rng;
use crate::maze::{Direction, Maze};

/// A frontier entry: a wall between a cell already in the maze and one
/// that was outside it when the entry was queued.
type FrontierEdge = ((u16, u16), (u16, u16));

/// Randomized Prim's: grow the maze outward from one cell by carving a
/// uniformly random wall on its boundary. Growth is breadth-driven from
/// the whole boundary at once, so dead-ends stay short compared to
/// backtracking.
pub fn randomized_prim(maze: &mut Maze, seed: Option<u64>) {
    let mut rng = get_rng(seed);

    let start = (0, 0);
    maze[start].visited = true;

    // Walls between the maze grown so far and the rest of the grid
    let mut frontier: Vec<FrontierEdge> = Vec::new();
    push_boundary_edges(maze, start, &mut frontier);

    while !frontier.is_empty() {
        // Uniform draw from the frontier; swap_remove keeps it O(1)
        let idx = rng.random_range(0..frontier.len());
        let (inside, outside) = frontier.swap_remove(idx);

        // Both ends may have joined the maze since this wall was queued
        if maze[outside].visited {
            continue;
        }

        maze.open_passage(inside, outside)
            .expect("frontier edges connect adjacent cells");
        maze[outside].visited = true;
        push_boundary_edges(maze, outside, &mut frontier);
    }
}

/// Queues the walls between `cell` and each of its not-yet-in-maze
/// neighbors.
fn push_boundary_edges(maze: &Maze, cell: (u16, u16), frontier: &mut Vec<FrontierEdge>) {
    for direction in Direction::CARDINALS {
        if let Some(neighbor) = maze.neighbor(cell, direction) {
            if !maze[neighbor].visited {
                frontier.push((cell, neighbor));
            }
        }
    }
}
