//! Canonical hexadecimal wire format: one nibble per cell, row-major,
//! no separators. The nibble records *open* passages (bit0 north, bit1
//! east, bit2 south, bit3 west), the inverse sense of the in-memory
//! wall-present flags. The inversion is part of the format; consumers
//! of existing encodings depend on it byte for byte.

use crate::error::{Error, Result};
use crate::maze::{Direction, Maze};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Bit marking the passage in `direction` as open within a nibble.
fn direction_bit(direction: Direction) -> u8 {
    match direction {
        Direction::North => 0b0001,
        Direction::East => 0b0010,
        Direction::South => 0b0100,
        Direction::West => 0b1000,
    }
}

/// Encodes the maze as a single line of `width * height` hex digits.
pub fn encode(maze: &Maze) -> String {
    let mut encoded = String::with_capacity(maze.cell_count());
    for y in 0..maze.height() {
        for x in 0..maze.width() {
            let mut nibble = 0u8;
            for direction in Direction::CARDINALS {
                if maze.is_open((x, y), direction) {
                    nibble |= direction_bit(direction);
                }
            }
            encoded.push(HEX_DIGITS[nibble as usize] as char);
        }
    }
    encoded
}

/// Decodes a hex string back into a maze of the given dimensions.
///
/// The string must be exactly `width * height` hex digits (either
/// case), and the passages it describes must be consistent: whenever a
/// cell claims an open passage, its neighbor on the other side must
/// claim it too, and no passage may lead through the outer boundary.
pub fn decode(encoded: &str, width: u16, height: u16) -> Result<Maze> {
    let mut maze = Maze::new(width, height)?;

    let expected_len = maze.cell_count();
    if encoded.len() != expected_len {
        return Err(Error::MalformedEncoding(format!(
            "expected {expected_len} hex digits for a {width}x{height} maze, got {}",
            encoded.len()
        )));
    }

    let nibbles = encoded
        .chars()
        .map(|c| {
            c.to_digit(16)
                .map(|digit| digit as u8)
                .ok_or_else(|| Error::MalformedEncoding(format!("invalid hex digit `{c}`")))
        })
        .collect::<Result<Vec<u8>>>()?;

    let nibble_at =
        |x: u16, y: u16| nibbles[y as usize * width as usize + x as usize];

    for y in 0..height {
        for x in 0..width {
            let nibble = nibble_at(x, y);
            for direction in Direction::CARDINALS {
                if nibble & direction_bit(direction) == 0 {
                    continue;
                }
                let Some(neighbor) = maze.neighbor((x, y), direction) else {
                    return Err(Error::MalformedEncoding(format!(
                        "cell ({x}, {y}) opens a passage through the outer boundary"
                    )));
                };
                // The cell on the other side must agree about the shared edge
                let facing_bit = direction_bit(direction.opposite());
                if nibble_at(neighbor.0, neighbor.1) & facing_bit == 0 {
                    return Err(Error::MalformedEncoding(format!(
                        "cells ({x}, {y}) and ({}, {}) disagree about their shared wall",
                        neighbor.0, neighbor.1
                    )));
                }
                // Carve each passage once, from its north/west end
                if matches!(direction, Direction::East | Direction::South) {
                    maze.open_passage((x, y), neighbor)?;
                }
            }
        }
    }

    Ok(maze)
}
