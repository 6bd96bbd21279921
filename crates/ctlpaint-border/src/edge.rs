//! Edge specifications
//!
//! One [`EdgeSpec`] describes one side of a border: its color, its
//! thickness in pixels and how it is stroked.

use ctlpaint_core::{Color, Rect};

/// Border style of a single edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderStyle {
    /// Edge is not drawn
    None,
    /// Constant color
    #[default]
    Solid,
    /// Dashed (only visible for non-opaque colors, see [`Stroke`](ctlpaint_core::Stroke))
    Dashed,
    /// Dotted (only visible for non-opaque colors)
    Dotted,
    /// Sunken 3D edge, shaded darker towards the outside
    Inset,
    /// Raised 3D edge, shaded lighter towards the outside
    Outset,
}

impl BorderStyle {
    /// True for the two 3D styles that shade their scanlines
    pub fn is_3d(&self) -> bool {
        matches!(self, BorderStyle::Inset | BorderStyle::Outset)
    }
}

/// Side of a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Left,
    Bottom,
    Right,
}

impl Side {
    /// All sides in drawing order
    pub const ALL: [Side; 4] = [Side::Top, Side::Left, Side::Bottom, Side::Right];
}

/// Color, width and style of one border edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeSpec {
    /// Base color
    pub color: Color,
    /// Thickness in pixels; must be non-negative, 0 means not drawn
    pub width: i32,
    /// Stroke style
    pub style: BorderStyle,
}

impl EdgeSpec {
    /// Create an edge specification
    pub const fn new(color: Color, width: i32, style: BorderStyle) -> Self {
        Self {
            color,
            width,
            style,
        }
    }

    /// A solid edge
    pub const fn solid(color: Color, width: i32) -> Self {
        Self::new(color, width, BorderStyle::Solid)
    }

    /// An edge that is not drawn
    pub const fn none() -> Self {
        Self::new(Color::BLACK, 0, BorderStyle::None)
    }

    /// True when the edge produces at least one scanline
    pub fn is_visible(&self) -> bool {
        self.width > 0 && self.style != BorderStyle::None
    }
}

impl Default for EdgeSpec {
    fn default() -> Self {
        Self::none()
    }
}

/// Per-side widths of a border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BorderWidths {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

impl BorderWidths {
    /// Same width on every side
    pub const fn uniform(width: i32) -> Self {
        Self {
            top: width,
            left: width,
            bottom: width,
            right: width,
        }
    }

    /// Widths of four edge specifications.
    ///
    /// An edge styled [`BorderStyle::None`] is not painted but still
    /// reserves its width, as it does for the corner miters.
    pub fn of(top: &EdgeSpec, left: &EdgeSpec, bottom: &EdgeSpec, right: &EdgeSpec) -> Self {
        let w = |e: &EdgeSpec| e.width.max(0);
        Self {
            top: w(top),
            left: w(left),
            bottom: w(bottom),
            right: w(right),
        }
    }

    /// Content rectangle left inside `bounds` once the border is painted.
    pub fn interior(&self, bounds: &Rect) -> Rect {
        bounds.deflate(
            self.left.max(0),
            self.top.max(0),
            self.right.max(0),
            self.bottom.max(0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility() {
        assert!(EdgeSpec::solid(Color::BLACK, 1).is_visible());
        assert!(!EdgeSpec::solid(Color::BLACK, 0).is_visible());
        assert!(!EdgeSpec::new(Color::BLACK, 3, BorderStyle::None).is_visible());
        assert!(!EdgeSpec::default().is_visible());
    }

    #[test]
    fn test_widths_of_keep_none_style() {
        let w = BorderWidths::of(
            &EdgeSpec::solid(Color::BLACK, 2),
            &EdgeSpec::new(Color::BLACK, 5, BorderStyle::None),
            &EdgeSpec::new(Color::BLACK, 3, BorderStyle::Inset),
            &EdgeSpec::none(),
        );
        assert_eq!(
            w,
            BorderWidths {
                top: 2,
                left: 5,
                bottom: 3,
                right: 0
            }
        );
    }

    #[test]
    fn test_interior() {
        let bounds = Rect::new(10, 10, 40, 30).unwrap();
        let inner = BorderWidths {
            top: 1,
            left: 2,
            bottom: 3,
            right: 4,
        }
        .interior(&bounds);
        assert_eq!(inner, Rect::new_unchecked(12, 11, 34, 26));
        assert_eq!(BorderWidths::uniform(0).interior(&bounds), bounds);
    }
}
