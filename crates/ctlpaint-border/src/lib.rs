//! ctlpaint-border - Mitered multi-width borders
//!
//! Owner-draw border painting split into pure geometry and rendering:
//!
//! - [`compute`] / [`compute_with`] - segments for four independent edges
//! - [`compute_uniform`] - one color and style on every side
//! - [`render`] - draw a [`SegmentPlan`] through a [`LineSurface`]
//!
//! # Example
//!
//! ```
//! use ctlpaint_border::{EdgeSpec, compute};
//! use ctlpaint_core::{Color, Rect};
//!
//! let edge = EdgeSpec::solid(Color::BLACK, 1);
//! let plan = compute(Rect::new(0, 0, 10, 10).unwrap(), edge, edge, edge, edge).unwrap();
//! assert_eq!(plan.len(), 4);
//! ```

pub mod edge;
pub mod error;
pub mod geometry;
pub mod options;
pub mod plan;
pub mod ramp;
pub mod render;

pub use edge::{BorderStyle, BorderWidths, EdgeSpec, Side};
pub use error::{BorderError, BorderResult};
pub use geometry::{compute, compute_uniform, compute_with, proportional_offset};
pub use options::{BorderOptions, CornerJoin};
pub use plan::{Segment, SegmentPlan};
pub use render::{LineSurface, Pen, PenCache, ResourceCache, render};
