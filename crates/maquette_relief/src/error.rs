//! Error types for relaxed JSON reading and writing.

/// Result alias used throughout this crate.
pub type Json5Result<T> = Result<T, Json5Error>;

/// Error type for relaxed JSON.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Json5Error {
    #[error("Unexpected end of input at line {line}, column {column}")]
    UnexpectedEnd { line: u32, column: u32 },

    #[error("Unexpected character '{found}' at line {line}, column {column}")]
    UnexpectedChar { found: char, line: u32, column: u32 },

    #[error("Invalid escape sequence at line {line}, column {column}")]
    InvalidEscape { line: u32, column: u32 },

    #[error("Invalid number '{literal}' at line {line}, column {column}")]
    InvalidNumber {
        literal: String,
        line: u32,
        column: u32,
    },

    #[error("Number '{literal}' cannot be represented (line {line}, column {column})")]
    UnrepresentableNumber {
        literal: String,
        line: u32,
        column: u32,
    },

    #[error("Nesting deeper than 128 levels at line {line}, column {column}")]
    RecursionLimit { line: u32, column: u32 },

    #[error("Unterminated comment starting at line {line}, column {column}")]
    UnterminatedComment { line: u32, column: u32 },

    #[error("Failed to deserialize value: {0}")]
    Deserialize(String),

    #[error("Failed to serialize value: {0}")]
    Serialize(String),
}
