//! Error types for ctlpaint-border

use crate::edge::Side;
use thiserror::Error;

/// Error type for border geometry and rendering
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BorderError {
    /// An edge was given a negative width
    #[error("{side:?} border width must be non-negative, got {width}")]
    NegativeWidth { side: Side, width: i32 },

    /// An error from the core library
    #[error("core error: {0}")]
    Core(#[from] ctlpaint_core::Error),
}

/// Result type for border operations
pub type BorderResult<T> = Result<T, BorderError>;
