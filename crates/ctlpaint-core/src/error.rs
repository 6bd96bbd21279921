//! Error types for ctlpaint-core
//!
//! Provides a unified error type for the geometry, color and raster
//! operations in the core crate. Each variant captures enough context for
//! diagnostics without exposing internal implementation details.

use thiserror::Error;

/// ctlpaint core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid surface or rectangle dimensions
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimension { width: i64, height: i64 },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Coordinate outside a surface
    #[error("coordinate ({x}, {y}) outside {width}x{height} surface")]
    IndexOutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
