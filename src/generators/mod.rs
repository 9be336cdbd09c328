use rand::{SeedableRng, rngs::StdRng};

mod backtrack;
mod kruskal;
mod prim;

use backtrack::randomized_backtrack;
use kruskal::randomized_kruskal;
use prim::randomized_prim;

use crate::error::{Error, Result};
use crate::maze::Maze;

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// The selectable maze generation algorithms. All three carve a
/// spanning tree over the grid; they differ in the texture of the
/// result, not the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    Backtrack,
    Kruskal,
    Prim,
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::Backtrack => write!(f, "Randomized Depth-First Backtracking"),
            Generator::Kruskal => write!(f, "Kruskal's Algorithm"),
            Generator::Prim => write!(f, "Prim's Algorithm"),
        }
    }
}

impl std::str::FromStr for Generator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "backtrack" | "backtracking" => Ok(Generator::Backtrack),
            "kruskal" => Ok(Generator::Kruskal),
            "prim" => Ok(Generator::Prim),
            other => Err(Error::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Carves passages into `maze` with the chosen algorithm. The maze must
/// be freshly constructed (all walls closed); afterwards its passage
/// graph is a spanning tree over the grid.
pub fn generate_maze(maze: &mut Maze, generator: Generator, seed: Option<u64>) {
    tracing::info!(
        %generator,
        seed,
        width = maze.width(),
        height = maze.height(),
        "generating maze"
    );
    match generator {
        Generator::Backtrack => randomized_backtrack(maze, seed),
        Generator::Kruskal => randomized_kruskal(maze, seed),
        Generator::Prim => randomized_prim(maze, seed),
    }
    tracing::debug!(passages = maze.passage_count(), "generation finished");
}

/// Builds a maze of the given dimensions and generates it in one step.
/// Dimension validation happens before any grid state exists.
pub fn generate(
    width: u16,
    height: u16,
    generator: Generator,
    seed: Option<u64>,
) -> Result<Maze> {
    let mut maze = Maze::new(width, height)?;
    generate_maze(&mut maze, generator, seed);
    Ok(maze)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;
    use crate::maze::Direction;
    use crate::solvers::reachable_cells;

    const ALGORITHMS: [Generator; 3] =
        [Generator::Backtrack, Generator::Kruskal, Generator::Prim];

    #[test]
    fn test_selector_parsing() {
        assert_eq!("backtrack".parse::<Generator>().unwrap(), Generator::Backtrack);
        assert_eq!("kruskal".parse::<Generator>().unwrap(), Generator::Kruskal);
        assert_eq!("prim".parse::<Generator>().unwrap(), Generator::Prim);
        assert!(matches!(
            "dijkstra".parse::<Generator>(),
            Err(Error::UnknownAlgorithm(name)) if name == "dijkstra"
        ));
    }

    #[test]
    fn test_every_algorithm_connects_the_grid() {
        for generator in ALGORITHMS {
            for (width, height) in [(2, 2), (5, 3), (9, 17)] {
                let maze = generate(width, height, generator, Some(42)).unwrap();
                assert_eq!(
                    reachable_cells(&maze, (0, 0)),
                    maze.cell_count(),
                    "{generator} left unreachable cells in a {width}x{height} maze"
                );
            }
        }
    }

    #[test]
    fn test_every_algorithm_carves_a_spanning_tree() {
        for generator in ALGORITHMS {
            let maze = generate(8, 6, generator, Some(7)).unwrap();
            // Connected with exactly cells - 1 passages means no cycles
            assert_eq!(maze.passage_count(), maze.cell_count() - 1);
        }
    }

    #[test]
    fn test_same_seed_is_bit_identical() {
        for generator in ALGORITHMS {
            let first = generate(12, 9, generator, Some(1234)).unwrap();
            let second = generate(12, 9, generator, Some(1234)).unwrap();
            assert_eq!(codec::encode(&first), codec::encode(&second));
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        for generator in ALGORITHMS {
            // A single pair of seeds could collide by chance; across a
            // handful of seeds at this size, at least one must differ.
            let reference = codec::encode(&generate(10, 10, generator, Some(0)).unwrap());
            let any_differs = (1..5u64).any(|seed| {
                codec::encode(&generate(10, 10, generator, Some(seed)).unwrap()) != reference
            });
            assert!(any_differs, "{generator} ignored its seed");
        }
    }

    #[test]
    fn test_smallest_maze_fully_connects() {
        let maze = generate(2, 2, Generator::Backtrack, Some(1)).unwrap();
        assert_eq!(reachable_cells(&maze, (0, 0)), 4);
        assert_eq!(maze.passage_count(), 3);
        assert_eq!(codec::encode(&maze).len(), 4);
    }

    #[test]
    fn test_generation_does_not_breach_the_boundary() {
        for generator in ALGORITHMS {
            let maze = generate(6, 4, generator, Some(99)).unwrap();
            for x in 0..6 {
                assert!(!maze.is_open((x, 0), Direction::North));
                assert!(!maze.is_open((x, 3), Direction::South));
            }
            for y in 0..4 {
                assert!(!maze.is_open((0, y), Direction::West));
                assert!(!maze.is_open((5, y), Direction::East));
            }
        }
    }
}
