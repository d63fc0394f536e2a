use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RingError {
    #[error("Invalid backing storage of {len} bytes: at least 2 bytes are required")]
    NullStorage { len: usize },

    #[error("Not enough space in ring buffer: required {required} bytes, available {available} bytes")]
    Insufficient { required: usize, available: usize },

    #[error("Read size mismatch: requested {requested} bytes, available {available} bytes")]
    Mismatch { requested: usize, available: usize },
}

impl RingError {
    /// Numeric status used by status-code based callers.
    pub fn code(&self) -> i32 {
        match self {
            Self::NullStorage { .. } => -301,
            Self::Insufficient { .. } => -302,
            Self::Mismatch { .. } => -303,
        }
    }
}

/// Result of the wrap check. Not an error: a wrapped buffer is still valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contiguity {
    Contiguous,
    Wrapped,
}

impl Contiguity {
    pub fn code(&self) -> i32 {
        match self {
            Self::Contiguous => 0,
            Self::Wrapped => 1,
        }
    }
}
