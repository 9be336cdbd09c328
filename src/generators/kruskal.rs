use rand::seq::SliceRandom;

use crate::generators::get_rng;
use crate::maze::Maze;

struct UnionFind {
    parent: Vec<u32>,
    rank: Vec<u32>,
}

impl UnionFind {
    fn new(size: u32) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size as usize],
        }
    }

    fn find(&mut self, x: u32) -> u32 {
        if self.parent[x as usize] != x {
            self.parent[x as usize] = self.find(self.parent[x as usize]);
        }
        self.parent[x as usize]
    }

    fn unite(&mut self, x: u32, y: u32) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false; // Already in same set
        }

        match self.rank[root_x as usize].cmp(&self.rank[root_y as usize]) {
            std::cmp::Ordering::Greater => {
                self.parent[root_y as usize] = root_x;
            }
            std::cmp::Ordering::Less => {
                self.parent[root_x as usize] = root_y;
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_y as usize] = root_x;
                self.rank[root_x as usize] += 1;
            }
        }
        true
    }
}

/// Candidate passage between two adjacent cells
#[derive(Clone, Copy)]
struct Edge {
    cell1: (u16, u16),
    cell2: (u16, u16),
}

/// Randomized Kruskal's: shuffle every candidate wall once, then accept
/// each edge whose endpoints are still in different components. Edge
/// order rather than walk order drives the layout, so passages spread
/// more evenly than backtracking's corridors.
pub fn randomized_kruskal(maze: &mut Maze, seed: Option<u64>) {
    let width = maze.width();
    let height = maze.height();

    // One singleton component per cell
    let total_cells = width as u32 * height as u32;
    let mut uf = UnionFind::new(total_cells);

    // Collect all candidate edges (walls between adjacent cells)
    let mut edges: Vec<Edge> = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .flat_map(|(x, y)| {
            [
                (x + 1 < width).then(|| Edge {
                    cell1: (x, y),
                    cell2: (x + 1, y),
                }),
                (y + 1 < height).then(|| Edge {
                    cell1: (x, y),
                    cell2: (x, y + 1),
                }),
            ]
        })
        .flatten()
        .collect();

    // Shuffle edges randomly
    let mut rng = get_rng(seed);
    edges.shuffle(&mut rng);

    let mut accepted: u32 = 0;
    for edge in edges {
        let (x1, y1) = edge.cell1;
        let (x2, y2) = edge.cell2;

        // Convert cell coordinates to UnionFind indices
        let idx1 = y1 as u32 * width as u32 + x1 as u32;
        let idx2 = y2 as u32 * width as u32 + x2 as u32;

        // If the cells are not yet connected, carve the wall between them
        if uf.find(idx1) != uf.find(idx2) {
            uf.unite(idx1, idx2);
            maze.open_passage(edge.cell1, edge.cell2)
                .expect("edge endpoints are adjacent by construction");
            accepted += 1;
            // The spanning tree is complete; every remaining edge
            // would only close a cycle and be rejected anyway
            if accepted == total_cells - 1 {
                break;
            }
        }
    }
}
