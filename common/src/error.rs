use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze of {rows}x{cols} cells is too small for this layout")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("start cell ({row}, {col}) must lie inside the border")]
    InvalidStart { row: usize, col: usize },
    #[error("placed only {placed} of {requested} memory notes")]
    NotePlacementExhausted { placed: usize, requested: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
    #[error(transparent)]
    Maze(#[from] MazeError),
}
