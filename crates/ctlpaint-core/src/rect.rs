//! Rect - pixel rectangles
//!
//! The outer extent of a border, a control's client area, or the interior
//! left over once a border has been painted.

use crate::error::{Error, Result};

/// A rectangle in pixel coordinates.
///
/// `x`/`y` are the top-left corner; `w`/`h` are never negative when the
/// rectangle was built through [`Rect::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Rect {
    /// Create a new rectangle
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is negative, or if the right
    /// or bottom edge does not fit in an `i32`.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Result<Self> {
        if w < 0 || h < 0 {
            return Err(Error::InvalidDimension {
                width: w as i64,
                height: h as i64,
            });
        }
        if x.checked_add(w).is_none() || y.checked_add(h).is_none() {
            return Err(Error::InvalidParameter(format!(
                "rectangle ({x}, {y}) {w}x{h} extends past the coordinate range"
            )));
        }
        Ok(Self { x, y, w, h })
    }

    /// Create a rectangle without validation
    pub const fn new_unchecked(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Create a rectangle from two corner points (either order)
    pub fn from_corners(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let (x, w) = if x1 <= x2 {
            (x1, x2.saturating_sub(x1))
        } else {
            (x2, x1.saturating_sub(x2))
        };
        let (y, h) = if y1 <= y2 {
            (y1, y2.saturating_sub(y1))
        } else {
            (y2, y1.saturating_sub(y2))
        };
        Self { x, y, w, h }
    }

    /// Right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Area in pixels
    #[inline]
    pub fn area(&self) -> i64 {
        self.w as i64 * self.h as i64
    }

    /// Check if the rectangle covers no pixels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Check if a pixel lies inside the rectangle
    #[inline]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check if this rectangle contains another one
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Shrink the rectangle by a per-side amount.
    ///
    /// Dimensions clamp at zero; the origin never moves past the
    /// opposite edge.
    pub fn deflate(&self, left: i32, top: i32, right: i32, bottom: i32) -> Rect {
        let w = self.w.saturating_sub(left).saturating_sub(right).max(0);
        let h = self.h.saturating_sub(top).saturating_sub(bottom).max(0);
        let x = self.x.saturating_add(left).min(self.right());
        let y = self.y.saturating_add(top).min(self.bottom());
        Rect { x, y, w, h }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_negative() {
        assert!(Rect::new(0, 0, -1, 5).is_err());
        assert!(Rect::new(0, 0, 5, -1).is_err());
        assert!(Rect::new(-3, -3, 0, 0).is_ok());
    }

    #[test]
    fn test_new_rejects_overflow() {
        assert!(Rect::new(i32::MAX - 5, 0, 10, 10).is_err());
        assert!(Rect::new(0, i32::MAX - 5, 10, 10).is_err());
        let r = Rect::new(i32::MAX - 10, i32::MAX - 10, 10, 10).unwrap();
        assert_eq!(r.right(), i32::MAX);
        assert_eq!(r.bottom(), i32::MAX);
        assert!(Rect::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX).is_ok());
    }

    #[test]
    fn test_edges() {
        let r = Rect::new(2, 3, 10, 20).unwrap();
        assert_eq!(r.right(), 12);
        assert_eq!(r.bottom(), 23);
        assert_eq!(r.area(), 200);
        assert!(r.contains_point(2, 3));
        assert!(!r.contains_point(12, 3));
    }

    #[test]
    fn test_from_corners() {
        let r = Rect::from_corners(10, 10, 0, 4);
        assert_eq!(r, Rect::new_unchecked(0, 4, 10, 6));
    }

    #[test]
    fn test_deflate() {
        let r = Rect::new(0, 0, 20, 10).unwrap();
        assert_eq!(r.deflate(1, 2, 3, 4), Rect::new_unchecked(1, 2, 16, 4));
        let gone = r.deflate(15, 0, 15, 0);
        assert_eq!(gone.w, 0);
        assert!(gone.is_empty());
        assert!(r.contains_rect(&gone));
    }
}
