//! ctlpaint Core - basic types for owner-draw painting
//!
//! This crate provides the fundamental types shared by the ctlpaint
//! crates:
//!
//! - [`Rect`] - Pixel rectangles (bounds, client and interior areas)
//! - [`Color`] / [`Hls`] - RGBA colors with 3D shading (dark / light)
//! - [`Canvas`] - In-memory RGBA raster surface
//! - [`Stroke`] / [`line_points`] - 1px line rasterization

pub mod canvas;
pub mod color;
pub mod error;
pub mod line;
pub mod rect;

pub use canvas::Canvas;
pub use color::{Color, Hls};
pub use error::{Error, Result};
pub use line::{Stroke, line_points};
pub use rect::Rect;
