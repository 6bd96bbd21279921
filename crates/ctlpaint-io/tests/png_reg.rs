//! PNG output regression test
//!
//! Run with:
//! ```
//! cargo test -p ctlpaint-io --test png_reg
//! ```

use ctlpaint_core::{Canvas, Color, Stroke};
use ctlpaint_io::{encode_canvas, read_canvas, write_canvas};
use ctlpaint_test::{RegParams, regout_dir};

#[test]
fn png_reg() {
    let mut rp = RegParams::new("png");

    let mut canvas = Canvas::filled(16, 8, Color::WHITE).unwrap();
    canvas.draw_line(0, 0, 15, 0, Color::BLACK, Stroke::Solid);
    canvas.draw_line(0, 7, 15, 7, Color::RED, Stroke::Dash);

    // Encoding is deterministic
    let first = encode_canvas(&canvas).unwrap();
    let second = encode_canvas(&canvas).unwrap();
    rp.compare_strings(&first, &second);

    // The file on disk holds the same bytes
    let path = format!("{}/png_direct.png", regout_dir());
    write_canvas(&canvas, &path).unwrap();
    let on_disk = std::fs::read(&path).unwrap();
    rp.compare_strings(&first, &on_disk);

    rp.write_canvas_and_check(&canvas).unwrap();

    // Reading the file back gives the same pixels
    let back = read_canvas(&path).unwrap();
    rp.compare_canvas(&canvas, &back);

    assert!(rp.cleanup());
}
