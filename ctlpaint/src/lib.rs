//! ctlpaint - Owner-draw painting helpers for Rust
//!
//! Pixel-exact border painting for custom-drawn controls: four edges with
//! independent color, width and style, mitered at the corners, shaded for
//! 3D inset/outset looks, and rendered through any line-drawing backend.
//!
//! # Example
//!
//! ```
//! use ctlpaint::{Canvas, Color, EdgeSpec, PenCache, Rect, compute, render};
//!
//! let edge = EdgeSpec::solid(Color::BLACK, 2);
//! let plan = compute(Rect::new(0, 0, 16, 16).unwrap(), edge, edge, edge, edge).unwrap();
//!
//! let mut canvas = Canvas::new(16, 16).unwrap();
//! render(&plan, &mut canvas, &mut PenCache::new());
//! assert_eq!(canvas.get_pixel(0, 0), Some(Color::BLACK));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use ctlpaint_core::*;

// Border geometry is the main entry point; re-export it flat as well
pub use ctlpaint_border::{
    BorderError, BorderOptions, BorderResult, BorderStyle, BorderWidths, CornerJoin, EdgeSpec,
    LineSurface, Pen, PenCache, ResourceCache, Segment, SegmentPlan, Side, compute,
    compute_uniform, compute_with, render,
};

// Re-export domain crates as modules
pub use ctlpaint_border as border;
pub use ctlpaint_io as io;
