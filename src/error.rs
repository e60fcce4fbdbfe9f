use core::fmt;

/// Errors surfaced by the bend detection pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BendError {
    /// Input geometry or stage configuration that cannot be processed
    /// (negative or out-of-frame coordinates, empty images, even kernels).
    InvalidInput(String),
}

impl BendError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl fmt::Display for BendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for BendError {}

pub type Result<T> = std::result::Result<T, BendError>;
