use rand::Rng;

use crate::generators::get_rng;
use crate::maze::{Direction, Maze};

/// Randomized depth-first backtracking: a single walk carves forward
/// into unvisited cells and retreats along its own trail when stuck,
/// which yields long winding corridors.
pub fn randomized_backtrack(maze: &mut Maze, seed: Option<u64>) {
    let mut rng = get_rng(seed);

    let start = (0, 0);
    maze[start].visited = true;
    let mut visited_count: usize = 1;

    // The stack keeps the walk's trail of visited cells
    let mut stack = vec![start];

    while let Some(cell) = stack.pop() {
        let neighbors = Direction::CARDINALS
            .into_iter()
            .filter_map(|direction| maze.neighbor(cell, direction))
            .filter(|&coord| !maze[coord].visited)
            .collect::<Vec<_>>();

        if !neighbors.is_empty() {
            let neighbor = neighbors[rng.random_range(0..neighbors.len())];
            maze.open_passage(cell, neighbor)
                .expect("cells returned by neighbor() are adjacent");
            maze[neighbor].visited = true;
            visited_count += 1;
            // Put the cell back first so we can look at another neighbor of this cell later
            stack.push(cell);
            // Put the neighbor on top to carve the maze in that neighbor's direction
            stack.push(neighbor);
        }
    }

    // The walk can only drain its stack once every cell has been
    // reached; anything less is a defect in the traversal itself.
    assert_eq!(
        visited_count,
        maze.cell_count(),
        "backtracking walk left unvisited cells"
    );
}
