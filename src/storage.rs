//! Reading and writing the persisted maze format: the hex encoding on
//! a single line, newline terminated.

use std::fs;
use std::path::Path;

use crate::codec;
use crate::error::Result;
use crate::maze::Maze;

/// Writes the maze's hex encoding to `path`, replacing any existing
/// file.
pub fn save(path: &Path, maze: &Maze) -> Result<()> {
    let mut encoded = codec::encode(maze);
    encoded.push('\n');
    fs::write(path, &encoded)?;
    tracing::info!(path = %path.display(), digits = encoded.len() - 1, "saved maze");
    Ok(())
}

/// Loads a maze of the given dimensions from a hex encoding written by
/// [`save`] (a missing trailing newline is tolerated).
pub fn load(path: &Path, width: u16, height: u16) -> Result<Maze> {
    let contents = fs::read_to_string(path)?;
    let encoded = contents.trim_end_matches(['\r', '\n']);
    let maze = codec::decode(encoded, width, height)?;
    tracing::info!(path = %path.display(), width, height, "loaded maze");
    Ok(maze)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::generators::{Generator, generate};

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("maze.hex");

        let maze = generate(6, 5, Generator::Kruskal, Some(17)).unwrap();
        save(&file, &maze).unwrap();

        let loaded = load(&file, 6, 5).unwrap();
        assert_eq!(codec::encode(&loaded), codec::encode(&maze));

        // The file itself is the hex line plus a trailing newline
        let contents = fs::read_to_string(&file).unwrap();
        assert_eq!(contents, format!("{}\n", codec::encode(&maze)));
    }

    #[test]
    fn test_load_without_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("maze.hex");

        let maze = generate(3, 3, Generator::Backtrack, Some(4)).unwrap();
        fs::write(&file, codec::encode(&maze)).unwrap();
        assert!(load(&file, 3, 3).is_ok());
    }

    #[test]
    fn test_load_reports_truncated_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("maze.hex");
        fs::write(&file, "68\n").unwrap();
        assert!(matches!(
            load(&file, 2, 2),
            Err(Error::MalformedEncoding(_))
        ));
    }

    #[test]
    fn test_load_propagates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("nowhere.hex");
        assert!(matches!(load(&file, 2, 2), Err(Error::Io(_))));
    }
}
