//! Inset / outset shading ramp
//!
//! A 3D edge of width `w` is shaded scanline by scanline: the outermost
//! scanline gets the full dark/light adjustment, the innermost none, with
//! a linear ramp in between.

use crate::edge::{BorderStyle, Side};
use ctlpaint_core::Color;

/// Coerce an infinite step to 1.0.
///
/// A one-pixel edge divides by zero when computing its step; it is shaded
/// as a single fully adjusted scanline.
#[inline]
pub fn infinity_to_one(value: f32) -> f32 {
    if value.is_infinite() { 1.0 } else { value }
}

/// Per-scanline decrement of the adjustment amount for an edge of `width`.
pub fn ramp_step(width: i32) -> f32 {
    infinity_to_one(1.0 / (width - 1) as f32)
}

/// Adjustment amount for scanline `index` of an edge of `width`.
///
/// 1.0 on the outermost scanline, 0.0 on the innermost, never negative.
pub fn ramp_amount(index: i32, width: i32) -> f32 {
    (1.0 - index as f32 * ramp_step(width)).clamp(0.0, 1.0)
}

/// Whether a 3D edge on `side` is darkened (otherwise lightened).
///
/// Top, left and right darken an inset edge; the bottom edge darkens an
/// outset one.
pub fn darkens(style: BorderStyle, side: Side) -> bool {
    match side {
        Side::Bottom => style != BorderStyle::Inset,
        _ => style == BorderStyle::Inset,
    }
}

/// Shade `base` for a 3D edge on `side` with the given ramp amount.
pub fn shade(base: Color, style: BorderStyle, side: Side, amount: f32) -> Color {
    if darkens(style, side) {
        base.dark(amount)
    } else {
        base.light(amount)
    }
}
