//! Border computation options

/// How the top edge and the left edge share their corner.
///
/// The top-right, bottom-left and bottom-right corners always let the
/// vertical edge start (or end) on the last row of the horizontal edge's
/// miter, so the diagonal pixel is painted by both edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CornerJoin {
    /// The top edge owns the top-left diagonal: left line `i` starts one
    /// row below top line `i`, so that corner is painted exactly once.
    #[default]
    Mitered,
    /// Every corner shares its diagonal pixel: with equal widths, left line
    /// `i` starts on the same row as top line `i`.
    Shared,
}

/// Options for border geometry
#[derive(Debug, Clone, Default)]
pub struct BorderOptions {
    /// Top-left corner join
    pub corner_join: CornerJoin,
}

impl BorderOptions {
    /// Create options with a specific corner join
    pub fn with_corner_join(corner_join: CornerJoin) -> Self {
        Self { corner_join }
    }

    /// Row bias recorded for the left edge during the top pass
    pub(crate) fn left_top_bias(&self) -> i32 {
        match self.corner_join {
            CornerJoin::Mitered => 1,
            CornerJoin::Shared => 0,
        }
    }
}
