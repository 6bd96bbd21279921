//! Rendering a segment plan
//!
//! Geometry never touches a graphics backend. A caller hands the plan to
//! [`render`] together with a [`LineSurface`] (the line-drawing
//! capability) and a [`ResourceCache`] that memoizes pens by color and
//! stroke. The cache is an explicit value owned by the caller, so tests
//! can swap in a fake and observe hits and misses.

use crate::plan::SegmentPlan;
use ctlpaint_core::{Canvas, Color, Stroke};
use std::collections::HashMap;

/// A drawing pen handed out by a [`ResourceCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pen {
    /// Cache-assigned handle
    pub id: u32,
    pub color: Color,
    pub stroke: Stroke,
}

/// Line-drawing capability of a graphics backend.
pub trait LineSurface {
    /// Draw a 1px line from `from` to `to`, both endpoints inclusive.
    fn draw_line(&mut self, from: (i32, i32), to: (i32, i32), pen: &Pen);
}

/// Source of drawing resources keyed by color and stroke.
pub trait ResourceCache {
    /// Get (or create) the pen for `color` and `stroke`.
    fn pen(&mut self, color: Color, stroke: Stroke) -> Pen;
}

/// Default [`ResourceCache`]: creates each distinct pen once.
#[derive(Debug, Default)]
pub struct PenCache {
    pens: HashMap<(Color, Stroke), Pen>,
    next_id: u32,
    hits: usize,
    misses: usize,
}

impl PenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pens created so far
    pub fn len(&self) -> usize {
        self.pens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pens.is_empty()
    }

    /// Lookups served from the cache
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Lookups that created a pen
    pub fn misses(&self) -> usize {
        self.misses
    }

    /// Drop every pen and reset the counters.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl ResourceCache for PenCache {
    fn pen(&mut self, color: Color, stroke: Stroke) -> Pen {
        if let Some(pen) = self.pens.get(&(color, stroke)) {
            self.hits += 1;
            return *pen;
        }
        let pen = Pen {
            id: self.next_id,
            color,
            stroke,
        };
        log::trace!("pen cache miss: {color:?} {stroke:?} -> pen {}", pen.id);
        self.next_id += 1;
        self.misses += 1;
        self.pens.insert((color, stroke), pen);
        pen
    }
}

impl LineSurface for Canvas {
    fn draw_line(&mut self, from: (i32, i32), to: (i32, i32), pen: &Pen) {
        Canvas::draw_line(self, from.0, from.1, to.0, to.1, pen.color, pen.stroke);
    }
}

/// Draw every segment of `plan` in side order (top, left, bottom, right).
///
/// Returns the number of segments drawn.
pub fn render<S, C>(plan: &SegmentPlan, surface: &mut S, cache: &mut C) -> usize
where
    S: LineSurface + ?Sized,
    C: ResourceCache + ?Sized,
{
    let mut drawn = 0;
    for seg in plan.iter() {
        let pen = cache.pen(seg.color, seg.stroke);
        surface.draw_line((seg.x1, seg.y1), (seg.x2, seg.y2), &pen);
        drawn += 1;
    }
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pen_cache_memoizes() {
        let mut cache = PenCache::new();
        let a = cache.pen(Color::RED, Stroke::Solid);
        let b = cache.pen(Color::RED, Stroke::Solid);
        let c = cache.pen(Color::RED, Stroke::Dash);
        assert_eq!(a, b);
        assert_ne!(a.id, c.id);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 2);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.hits(), 0);
    }

    #[test]
    fn test_canvas_surface() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        let pen = Pen {
            id: 0,
            color: Color::BLUE,
            stroke: Stroke::Solid,
        };
        LineSurface::draw_line(&mut canvas, (0, 3), (3, 3), &pen);
        assert_eq!(canvas.count_color(Color::BLUE), 4);
    }
}
