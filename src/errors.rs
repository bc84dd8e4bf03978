use thiserror::Error;

/// The invalid-format condition of the tree text. Every variant describes
/// input that does not follow the format, so callers can treat any
/// `CodecError` as a permanent rejection of that input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("invalid format: token {position} ({token:?}) is neither an integer nor `#`")]
    InvalidToken { position: usize, token: String },

    #[error("invalid format: token {position} ({token:?}) does not fit in an i32")]
    OutOfRange { position: usize, token: String },

    #[error("invalid format: the root token is `#` but the text is not empty")]
    AbsentRoot,

    #[error("invalid format: input ended at token {position} while a node still needed a child")]
    UnexpectedEnd { position: usize },

    #[error("invalid format: {count} token(s) left over starting at token {position}")]
    TrailingTokens { position: usize, count: usize },
}

impl CodecError {
    /// Zero-based index of the offending token.
    pub fn position(&self) -> usize {
        match self {
            CodecError::InvalidToken { position, .. }
            | CodecError::OutOfRange { position, .. }
            | CodecError::UnexpectedEnd { position }
            | CodecError::TrailingTokens { position, .. } => *position,
            CodecError::AbsentRoot => 0,
        }
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
