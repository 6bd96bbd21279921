//! Segment plans
//!
//! The output of border geometry: per side, one 1px segment per scanline,
//! already colored and tagged with the pen pattern to draw it with.

use crate::edge::{BorderStyle, Side};
use ctlpaint_core::{Color, Stroke};

/// A single 1px line of a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Side the segment belongs to
    pub side: Side,
    /// Scanline index, 0 = outermost
    pub index: i32,
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
    /// Resolved color (after any inset/outset shading)
    pub color: Color,
    /// Pen pattern
    pub stroke: Stroke,
}

impl Segment {
    /// Distance between the endpoints along the segment's axis.
    pub fn length(&self) -> i32 {
        (self.x2 - self.x1).abs().max((self.y2 - self.y1).abs())
    }

    /// Number of pixels covered (endpoints inclusive).
    pub fn pixel_count(&self) -> i32 {
        self.length() + 1
    }
}

/// Pen pattern for an edge style and resolved color.
///
/// At 1px thickness a dash pattern is only kept on the vector path used for
/// non-opaque colors; opaque edges are plain pixel runs.
pub fn stroke_for(style: BorderStyle, color: Color) -> Stroke {
    if color.is_opaque() {
        return Stroke::Solid;
    }
    match style {
        BorderStyle::Dashed => Stroke::Dash,
        BorderStyle::Dotted => Stroke::Dot,
        _ => Stroke::Solid,
    }
}

/// Computed segments for all four sides of a border.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentPlan {
    pub top: Vec<Segment>,
    pub left: Vec<Segment>,
    pub bottom: Vec<Segment>,
    pub right: Vec<Segment>,
}

impl SegmentPlan {
    /// Create an empty plan
    pub fn new() -> Self {
        Self::default()
    }

    /// Segments of one side
    pub fn side(&self, side: Side) -> &[Segment] {
        match side {
            Side::Top => &self.top,
            Side::Left => &self.left,
            Side::Bottom => &self.bottom,
            Side::Right => &self.right,
        }
    }

    /// All segments in drawing order (top, left, bottom, right)
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.top
            .iter()
            .chain(self.left.iter())
            .chain(self.bottom.iter())
            .chain(self.right.iter())
    }

    /// Total number of segments
    pub fn len(&self) -> usize {
        self.top.len() + self.left.len() + self.bottom.len() + self.right.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
