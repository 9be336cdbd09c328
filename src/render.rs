//! ASCII rendering of a maze, with an optional solved-path overlay.
//!
//! Each cell interior is two characters wide; walls take one row or
//! two columns of frame characters, giving a (2W+1) x (2H+1) character
//! grid overall.

use std::collections::HashMap;

use crossterm::style::{Color, Stylize};

use crate::maze::{Direction, Maze};

/// What a cell interior shows on top of the carved maze.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Overlay {
    Start,
    Goal,
    Route,
}

impl Overlay {
    fn symbol(self, styled: bool) -> String {
        let symbol = match self {
            Overlay::Start => "S ",
            Overlay::Goal => "G ",
            Overlay::Route => "* ",
        };
        if !styled {
            return symbol.to_string();
        }
        let color = match self {
            Overlay::Start => Color::Green,
            Overlay::Goal => Color::Red,
            Overlay::Route => Color::Yellow,
        };
        symbol.with(color).to_string()
    }
}

/// Renders the maze as ASCII art. `path` cells are overlaid as route
/// markers, with its endpoints shown as start and goal. `styled` adds
/// terminal colors to the overlay; leave it off for piping and tests.
pub fn render(maze: &Maze, path: &[(u16, u16)], styled: bool) -> String {
    let mut overlays: HashMap<(u16, u16), Overlay> = HashMap::new();
    for &coord in path {
        overlays.insert(coord, Overlay::Route);
    }
    if let (Some(&start), Some(&goal)) = (path.first(), path.last()) {
        overlays.insert(start, Overlay::Start);
        overlays.insert(goal, Overlay::Goal);
    }

    let mut out = String::new();
    for y in 0..maze.height() {
        // Wall row above this cell row
        for x in 0..maze.width() {
            out.push('+');
            out.push_str(if maze.is_open((x, y), Direction::North) {
                "  "
            } else {
                "--"
            });
        }
        out.push_str("+\n");

        // Cell row: west wall then interior, for each cell
        for x in 0..maze.width() {
            out.push(if maze.is_open((x, y), Direction::West) {
                ' '
            } else {
                '|'
            });
            match overlays.get(&(x, y)) {
                Some(overlay) => out.push_str(&overlay.symbol(styled)),
                None => out.push_str("  "),
            }
        }
        out.push_str("|\n");
    }

    // Bottom frame
    for _ in 0..maze.width() {
        out.push_str("+--");
    }
    out.push_str("+\n");

    out
}
