//! ctlpaint-io - Canvas input and output
//!
//! Writes rendered canvases to disk so painted borders can be inspected,
//! and reads them back so they can be compared against golden files.

mod error;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};

use ctlpaint_core::Canvas;
use std::path::Path;

/// Write a canvas to `path` as PNG.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] when built without the
/// `png-format` feature, or an I/O / encoder error.
pub fn write_canvas<P: AsRef<Path>>(canvas: &Canvas, path: P) -> IoResult<()> {
    #[cfg(feature = "png-format")]
    {
        let file = std::fs::File::create(path.as_ref())?;
        crate::png::write_png(canvas, std::io::BufWriter::new(file))
    }
    #[cfg(not(feature = "png-format"))]
    {
        let _ = (canvas, path);
        Err(IoError::UnsupportedFormat("png".to_string()))
    }
}

/// Encode a canvas as PNG into memory.
pub fn encode_canvas(canvas: &Canvas) -> IoResult<Vec<u8>> {
    #[cfg(feature = "png-format")]
    {
        let mut buf = Vec::new();
        crate::png::write_png(canvas, &mut buf)?;
        Ok(buf)
    }
    #[cfg(not(feature = "png-format"))]
    {
        let _ = canvas;
        Err(IoError::UnsupportedFormat("png".to_string()))
    }
}

/// Read a PNG file into a canvas.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] when built without the
/// `png-format` feature or for PNG layouts other than 8-bit RGB/RGBA.
pub fn read_canvas<P: AsRef<Path>>(path: P) -> IoResult<Canvas> {
    #[cfg(feature = "png-format")]
    {
        let file = std::fs::File::open(path.as_ref())?;
        crate::png::read_png(std::io::BufReader::new(file))
    }
    #[cfg(not(feature = "png-format"))]
    {
        let _ = path;
        Err(IoError::UnsupportedFormat("png".to_string()))
    }
}
