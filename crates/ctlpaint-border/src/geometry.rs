//! Multi-width border geometry
//!
//! Computes the 1px segments of a border whose four sides may have
//! different widths. Each horizontal scanline recedes from the corners in
//! proportion to the neighbouring vertical edge's width, and the vertical
//! edges pick up their start and end rows from the horizontal passes, so
//! the corners are mitered instead of square-cut.
//!
//! The computation is pure: all offset tables are local to one call.

use crate::edge::{BorderStyle, BorderWidths, EdgeSpec, Side};
use crate::error::{BorderError, BorderResult};
use crate::options::BorderOptions;
use crate::plan::{Segment, SegmentPlan, stroke_for};
use crate::ramp;
use ctlpaint_core::{Color, Rect};

/// Inward shift of scanline `index` of an edge of `width` next to an edge
/// of `neighbour` pixels.
///
/// Equals `index / (width / neighbour)` rounded down; 0 when the neighbour
/// is not drawn. Always in `0..neighbour` for `index < width`.
pub fn proportional_offset(index: i32, width: i32, neighbour: i32) -> i32 {
    if neighbour <= 0 || width <= 0 {
        return 0;
    }
    (index as i64 * neighbour as i64 / width as i64) as i32
}

/// Resolve a partially written join table.
///
/// Entries the horizontal pass never wrote continue the last computed
/// row; a table with no writes at all uses `start`.
fn settle(table: Vec<Option<i32>>, start: i32) -> Vec<i32> {
    let mut carry = start;
    table
        .into_iter()
        .map(|row| {
            if let Some(row) = row {
                carry = row;
            }
            carry
        })
        .collect()
}

/// Horizontal extents of one horizontal edge plus the rows at which the
/// two vertical edges join it.
struct HorizontalPass {
    /// `(x1, x2)` per scanline
    spans: Vec<(i32, i32)>,
    left_joins: Vec<i32>,
    right_joins: Vec<i32>,
}

/// Run one horizontal pass.
///
/// `row_of(i)` is the y coordinate of scanline `i`; `left_bias` is added
/// to the row recorded for the left edge; `fallback` is the join row used
/// when the edge has no width.
///
/// Only scanlines inside the bounds are produced, and the join tables only
/// cover vertical scanlines inside the bounds. Join entries reached by
/// scanlines past the bounds get the first outside row, so the vertical
/// lines they start or end are inverted and dropped.
fn horizontal_pass(
    bounds: &Rect,
    widths: (i32, i32, i32),
    row_of: impl Fn(i32) -> i32,
    left_bias: i32,
    fallback: i32,
) -> HorizontalPass {
    let (width, left_w, right_w) = widths;
    let drawn = width.min(bounds.h);
    let left_cap = left_w.min(bounds.w);
    let right_cap = right_w.min(bounds.w);
    let mut spans = Vec::with_capacity(drawn as usize);
    let mut left_joins = vec![None; left_cap as usize];
    let mut right_joins = vec![None; right_cap as usize];

    for i in 0..drawn {
        let left_offset = proportional_offset(i, width, left_w);
        let right_offset = proportional_offset(i, width, right_w);
        spans.push((
            bounds.x.saturating_add(left_offset),
            bounds.right().saturating_sub(right_offset).saturating_sub(1),
        ));

        let row = row_of(i);
        if left_offset < left_cap {
            left_joins[left_offset as usize] = Some(row.saturating_add(left_bias));
        }
        if right_offset < right_cap {
            right_joins[right_offset as usize] = Some(row);
        }
    }

    if drawn < width {
        let row = row_of(drawn);
        mark_from(
            &mut left_joins,
            proportional_offset(drawn, width, left_w),
            row.saturating_add(left_bias),
        );
        mark_from(
            &mut right_joins,
            proportional_offset(drawn, width, right_w),
            row,
        );
    }

    HorizontalPass {
        spans,
        left_joins: settle(left_joins, fallback),
        right_joins: settle(right_joins, fallback),
    }
}

/// Set every join entry from `start` onwards to `row`.
fn mark_from(table: &mut [Option<i32>], start: i32, row: i32) {
    let start = (start as usize).min(table.len());
    for entry in &mut table[start..] {
        *entry = Some(row);
    }
}

/// Turn raw line coordinates into colored segments for one side.
///
/// Inverted lines (bounds narrower than the miters) and lines leaving
/// `bounds` are dropped; an invisible edge yields nothing.
fn edge_segments(
    side: Side,
    edge: &EdgeSpec,
    bounds: &Rect,
    lines: impl Iterator<Item = (i32, i32, i32, i32, i32)>,
) -> Vec<Segment> {
    if !edge.is_visible() {
        return Vec::new();
    }
    lines
        .filter(|&(_, x1, y1, x2, y2)| {
            x2 >= x1 && y2 >= y1 && bounds.contains_point(x1, y1) && bounds.contains_point(x2, y2)
        })
        .map(|(index, x1, y1, x2, y2)| {
            let color = if edge.style.is_3d() {
                let amount = ramp::ramp_amount(index, edge.width);
                ramp::shade(edge.color, edge.style, side, amount)
            } else {
                edge.color
            };
            Segment {
                side,
                index,
                x1,
                y1,
                x2,
                y2,
                color,
                stroke: stroke_for(edge.style, color),
            }
        })
        .collect()
}

fn check_width(side: Side, edge: &EdgeSpec) -> BorderResult<()> {
    if edge.width < 0 {
        log::debug!("rejecting {side:?} border width {}", edge.width);
        return Err(BorderError::NegativeWidth {
            side,
            width: edge.width,
        });
    }
    Ok(())
}

/// Compute the segments of a border with default options.
///
/// See [`compute_with`].
pub fn compute(
    bounds: Rect,
    top: EdgeSpec,
    left: EdgeSpec,
    bottom: EdgeSpec,
    right: EdgeSpec,
) -> BorderResult<SegmentPlan> {
    compute_with(bounds, top, left, bottom, right, &BorderOptions::default())
}

/// Compute the segments of a border whose sides have independent color,
/// width and style.
///
/// Each side yields one 1px segment per unit of its width, ordered from
/// the outermost scanline inwards. Scanlines that would leave `bounds` are
/// dropped, so every endpoint lies inside it. Sides of width 0 or style
/// [`BorderStyle::None`] yield nothing, but their width still shapes the
/// neighbouring miters.
///
/// # Errors
///
/// Returns [`BorderError::NegativeWidth`] if any edge width is negative,
/// and a core error if `bounds` has negative dimensions. No partial plan
/// is returned.
pub fn compute_with(
    bounds: Rect,
    top: EdgeSpec,
    left: EdgeSpec,
    bottom: EdgeSpec,
    right: EdgeSpec,
    options: &BorderOptions,
) -> BorderResult<SegmentPlan> {
    check_width(Side::Top, &top)?;
    check_width(Side::Left, &left)?;
    check_width(Side::Bottom, &bottom)?;
    check_width(Side::Right, &right)?;
    let bounds = Rect::new(bounds.x, bounds.y, bounds.w, bounds.h)?;

    if bounds.is_empty() {
        log::trace!("border on empty bounds {bounds:?}: nothing to draw");
        return Ok(SegmentPlan::new());
    }

    let widths = BorderWidths::of(&top, &left, &bottom, &right);

    let top_pass = horizontal_pass(
        &bounds,
        (widths.top, widths.left, widths.right),
        |i| bounds.y + i,
        options.left_top_bias(),
        bounds.y,
    );
    let bottom_pass = horizontal_pass(
        &bounds,
        (widths.bottom, widths.left, widths.right),
        |i| bounds.bottom().saturating_sub(i).saturating_sub(1),
        0,
        bounds.bottom() - 1,
    );

    let plan = SegmentPlan {
        top: edge_segments(
            Side::Top,
            &top,
            &bounds,
            top_pass
                .spans
                .iter()
                .zip(0..)
                .map(|(&(x1, x2), i)| (i, x1, bounds.y + i, x2, bounds.y + i)),
        ),
        left: edge_segments(
            Side::Left,
            &left,
            &bounds,
            (0..widths.left.min(bounds.w)).map(|i| {
                let x = bounds.x + i;
                let (y1, y2) = (
                    top_pass.left_joins[i as usize],
                    bottom_pass.left_joins[i as usize],
                );
                (i, x, y1, x, y2)
            }),
        ),
        bottom: edge_segments(
            Side::Bottom,
            &bottom,
            &bounds,
            bottom_pass.spans.iter().zip(0..).map(|(&(x1, x2), i)| {
                let y = bounds.bottom() - i - 1;
                (i, x1, y, x2, y)
            }),
        ),
        right: edge_segments(
            Side::Right,
            &right,
            &bounds,
            (0..widths.right.min(bounds.w)).map(|i| {
                let x = bounds.right() - i - 1;
                let (y1, y2) = (
                    top_pass.right_joins[i as usize],
                    bottom_pass.right_joins[i as usize],
                );
                (i, x, y1, x, y2)
            }),
        ),
    };

    log::trace!(
        "border {bounds:?} widths {widths:?}: {} top, {} left, {} bottom, {} right segments",
        plan.top.len(),
        plan.left.len(),
        plan.bottom.len(),
        plan.right.len()
    );
    Ok(plan)
}

/// Compute a border drawn with one color and style on every side.
///
/// Flat styles are 1px wide; [`BorderStyle::Inset`] and
/// [`BorderStyle::Outset`] are 2px two-tone 3D edges.
pub fn compute_uniform(bounds: Rect, color: Color, style: BorderStyle) -> BorderResult<SegmentPlan> {
    let width = match style {
        BorderStyle::None => return Ok(SegmentPlan::new()),
        BorderStyle::Inset | BorderStyle::Outset => 2,
        BorderStyle::Solid | BorderStyle::Dashed | BorderStyle::Dotted => 1,
    };
    let edge = EdgeSpec::new(color, width, style);
    compute(bounds, edge, edge, edge, edge)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proportional_offset() {
        assert_eq!(proportional_offset(3, 4, 2), 1);
        assert_eq!(proportional_offset(0, 4, 2), 0);
        assert_eq!(proportional_offset(2, 3, 0), 0);
        assert_eq!(proportional_offset(1, 2, 4), 2);
        for w in 1..12 {
            for n in 0..12 {
                for i in 0..w {
                    let off = proportional_offset(i, w, n);
                    assert!(off >= 0);
                    assert!(n == 0 || off < n, "i={i} w={w} n={n} off={off}");
                }
            }
        }
    }

    #[test]
    fn test_settle_continues_last_row() {
        assert_eq!(settle(vec![Some(3), None, Some(5), None], 0), vec![3, 3, 5, 5]);
        assert_eq!(settle(vec![None, None], 7), vec![7, 7]);
        assert!(settle(Vec::new(), 1).is_empty());
    }

    #[test]
    fn test_wider_left_fills_gaps() {
        // top 2, left 4: top rows recede by 0 and 2 columns
        let bounds = Rect::new(0, 0, 20, 20).unwrap();
        let plan = compute(
            bounds,
            EdgeSpec::solid(Color::BLACK, 2),
            EdgeSpec::solid(Color::BLACK, 4),
            EdgeSpec::none(),
            EdgeSpec::none(),
        )
        .unwrap();
        let tops: Vec<i32> = plan.left.iter().map(|s| s.y1).collect();
        assert_eq!(tops, vec![1, 1, 2, 2]);
        assert_eq!(plan.top[1].x1, 2);
    }

    #[test]
    fn test_negative_bounds_rejected() {
        let err = compute(
            Rect::new_unchecked(0, 0, -5, 5),
            EdgeSpec::solid(Color::BLACK, 1),
            EdgeSpec::solid(Color::BLACK, 1),
            EdgeSpec::solid(Color::BLACK, 1),
            EdgeSpec::solid(Color::BLACK, 1),
        );
        assert!(matches!(err, Err(BorderError::Core(_))));
    }
}
