//! Canvas - an in-memory RGBA raster surface
//!
//! A minimal stand-in for a device context: owner-draw code paints onto it
//! with 1px lines, and tests or the PNG writer read the pixels back.
//! Drawing outside the surface is clipped silently; only the explicit
//! pixel accessors report out-of-range coordinates.

use crate::color::Color;
use crate::error::{Error, Result};
use crate::line::{Stroke, line_points};
use crate::rect::Rect;

/// RGBA raster, one packed `0xRRGGBBAA` word per pixel, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl Canvas {
    /// Create a canvas cleared to transparent black.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, Color::TRANSPARENT)
    }

    /// Create a canvas filled with `color`.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn filled(width: u32, height: u32, color: Color) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension {
                width: width as i64,
                height: height as i64,
            });
        }
        Ok(Self {
            width,
            height,
            data: vec![color.to_pixel32(); width as usize * height as usize],
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The whole surface as a rectangle at the origin
    pub fn bounds(&self) -> Rect {
        Rect::new_unchecked(0, 0, self.width as i32, self.height as i32)
    }

    /// Raw packed pixels, row-major
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Get the color at `(x, y)`, or `None` outside the surface.
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| Color::from_pixel32(self.data[i]))
    }

    /// Set the color at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinate is outside the surface.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<()> {
        let i = self.index(x, y).ok_or(Error::IndexOutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;
        self.data[i] = color.to_pixel32();
        Ok(())
    }

    /// Fill the whole surface with `color`.
    pub fn clear(&mut self, color: Color) {
        self.data.fill(color.to_pixel32());
    }

    /// Draw a 1px line, endpoints inclusive, clipped to the surface.
    ///
    /// Returns the number of pixels written.
    pub fn draw_line(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
        stroke: Stroke,
    ) -> usize {
        let val = color.to_pixel32();
        let mut written = 0;
        for (step, (x, y)) in line_points(x1, y1, x2, y2).into_iter().enumerate() {
            if !stroke.is_on(step) {
                continue;
            }
            if let Some(i) = self.index(x, y) {
                self.data[i] = val;
                written += 1;
            }
        }
        written
    }

    /// Number of pixels exactly equal to `color`.
    pub fn count_color(&self, color: Color) -> usize {
        let val = color.to_pixel32();
        self.data.iter().filter(|&&p| p == val).count()
    }

    /// Number of pixels that differ from `background`.
    pub fn count_painted(&self, background: Color) -> usize {
        let val = background.to_pixel32();
        self.data.iter().filter(|&&p| p != val).count()
    }
}
