use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimension { width: usize, height: usize },
    #[error("pattern with edge {edge} does not fit into {width}x{height} grid")]
    PatternTooLarge {
        edge: usize,
        width: usize,
        height: usize,
    },
    #[error("pattern of {len} cells is not a square with edge {edge}")]
    PatternShape { len: usize, edge: usize },
    #[error("expected {expected} cells, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },
}
