//! Line rasterization helpers
//!
//! Point generation for 1px lines and the on/off patterns used by dashed
//! and dotted pens.

/// Pen pattern used when a line is stroked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stroke {
    /// Every pixel drawn
    #[default]
    Solid,
    /// 3 pixels on, 1 off
    Dash,
    /// 1 pixel on, 1 off
    Dot,
}

impl Stroke {
    /// Whether the `step`-th pixel along a line is inked.
    #[inline]
    pub fn is_on(&self, step: usize) -> bool {
        match self {
            Stroke::Solid => true,
            Stroke::Dash => step % 4 != 3,
            Stroke::Dot => step % 2 == 0,
        }
    }
}

/// Generate the pixels of a line using Bresenham's integer algorithm.
///
/// Both endpoints are included. The line connects `(x1, y1)` to `(x2, y2)`
/// with 8-connectivity.
pub fn line_points(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<(i32, i32)> {
    // Degenerate case: single point
    if x1 == x2 && y1 == y2 {
        return vec![(x1, y1)];
    }

    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let sx = if x2 > x1 { 1i32 } else { -1 };
    let sy = if y2 > y1 { 1i32 } else { -1 };

    let npts = dx.max(dy) + 1;
    let mut pts = Vec::with_capacity(npts as usize);

    let mut x = x1;
    let mut y = y1;

    if dx >= dy {
        // Step along x (more horizontal)
        let mut err = dx / 2;
        for _ in 0..npts {
            pts.push((x, y));
            err -= dy;
            if err < 0 {
                y += sy;
                err += dx;
            }
            x += sx;
        }
    } else {
        // Step along y (more vertical)
        let mut err = dy / 2;
        for _ in 0..npts {
            pts.push((x, y));
            err -= dx;
            if err < 0 {
                x += sx;
                err += dy;
            }
            y += sy;
        }
    }

    pts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_point() {
        assert_eq!(line_points(3, 4, 3, 4), vec![(3, 4)]);
    }

    #[test]
    fn test_horizontal_includes_endpoints() {
        let pts = line_points(0, 2, 4, 2);
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[0], (0, 2));
        assert_eq!(pts[4], (4, 2));
    }

    #[test]
    fn test_reversed_vertical() {
        let pts = line_points(1, 5, 1, 2);
        assert_eq!(pts, vec![(1, 5), (1, 4), (1, 3), (1, 2)]);
    }

    #[test]
    fn test_diagonal() {
        let pts = line_points(0, 0, 3, 3);
        assert_eq!(pts, vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_stroke_patterns() {
        let dash: Vec<bool> = (0..8).map(|i| Stroke::Dash.is_on(i)).collect();
        assert_eq!(dash, [true, true, true, false, true, true, true, false]);
        assert!(Stroke::Dot.is_on(0));
        assert!(!Stroke::Dot.is_on(1));
        assert!((0..10).all(|i| Stroke::Solid.is_on(i)));
    }
}
