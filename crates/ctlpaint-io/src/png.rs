//! PNG input and output

use crate::{IoError, IoResult};
use ctlpaint_core::{Canvas, Color};
use png::{BitDepth, ColorType, Decoder, Encoder};
use std::io::{BufRead, Seek, Write};

/// Read an 8-bit RGB or RGBA PNG into a canvas
///
/// RGB images are read as fully opaque.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Canvas> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let (width, height) = (info.width, info.height);
    let spp = match (info.color_type, info.bit_depth) {
        (ColorType::Rgb, BitDepth::Eight) => 3,
        (ColorType::Rgba, BitDepth::Eight) => 4,
        (color_type, bit_depth) => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG format: {:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let mut canvas = Canvas::new(width, height)?;
    let row_bytes = output_info.line_size;
    for (y, row) in buf.chunks(row_bytes).take(height as usize).enumerate() {
        for (x, px) in row.chunks_exact(spp).take(width as usize).enumerate() {
            let a = if spp == 4 { px[3] } else { 255 };
            canvas.set_pixel(x as i32, y as i32, Color::rgba(px[0], px[1], px[2], a))?;
        }
    }

    Ok(canvas)
}

/// Interleaved 8-bit RGBA bytes of a canvas, row-major.
pub fn rgba_bytes(canvas: &Canvas) -> Vec<u8> {
    let mut data = Vec::with_capacity(canvas.data().len() * 4);
    for &pixel in canvas.data() {
        let c = Color::from_pixel32(pixel);
        data.extend_from_slice(&[c.r, c.g, c.b, c.a]);
    }
    data
}

/// Write a canvas as an 8-bit RGBA PNG
pub fn write_png<W: Write>(canvas: &Canvas, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, canvas.width(), canvas.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    writer
        .write_image_data(&rgba_bytes(canvas))
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
