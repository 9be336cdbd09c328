use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by maze construction, generation, solving, and the
/// hex codec. All of them surface synchronously at the offending call;
/// nothing here is transient or retryable.
#[derive(Debug, Error)]
pub enum Error {
    #[error("maze dimensions must be at least 2x2, got {width}x{height}")]
    InvalidDimension { width: u16, height: u16 },

    #[error("unknown generation algorithm `{0}`")]
    UnknownAlgorithm(String),

    /// Misuse of the wall-opening API between non-adjacent cells.
    /// This is a programmer error, not a user-facing condition.
    #[error("cells {a:?} and {b:?} are not orthogonally adjacent")]
    NotAdjacent { a: (u16, u16), b: (u16, u16) },

    #[error("coordinate {coord:?} is outside the {width}x{height} grid")]
    OutOfBounds {
        coord: (u16, u16),
        width: u16,
        height: u16,
    },

    #[error("malformed maze encoding: {0}")]
    MalformedEncoding(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
