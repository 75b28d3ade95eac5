//! Error types for key parsing, layout configuration and stream handling

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VigenereError {
    #[error("Key contains no usable shift values")]
    EmptyKey,

    #[error("Integer out of range: {0}")]
    IntegerOutOfRange(String),

    #[error("Block size {block_size} leaves no room for a block in {cols} columns")]
    ZeroBlocksPerRow { block_size: i64, cols: i64 },

    #[error("A block size of -1 requires a positive number of columns (got {0})")]
    ColumnsRequired(i64),

    #[error("Invalid {option}: {value}")]
    InvalidArgument { option: &'static str, value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl VigenereError {
    /// True for errors caused by an unusable key or layout setting.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            VigenereError::EmptyKey
                | VigenereError::IntegerOutOfRange(_)
                | VigenereError::ZeroBlocksPerRow { .. }
                | VigenereError::ColumnsRequired(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, VigenereError>;
