use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// An index handed to the disjoint set or the grid falls outside `[0, len)`.
    #[error("index {index} out of range for {len} cells")]
    OutOfRange { index: usize, len: usize },

    #[error("invalid wall direction: {0}")]
    InvalidDirection(u8),

    #[error("invalid size {cells}, must be between {min} and {max}")]
    InvalidSize { cells: usize, min: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, MazeError>;
