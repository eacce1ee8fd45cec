//! Engine errors

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Catalog lookup by name found no definition
    #[error("piece with name '{name}' not found")]
    PieceNotFound { name: String },

    /// Grid dimensions cannot hold a 4x4 piece box
    #[error("grid {rows}x{columns} is smaller than 4x4")]
    GridTooSmall { rows: usize, columns: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
