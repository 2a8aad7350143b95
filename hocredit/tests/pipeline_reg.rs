//! End-to-end regression test
//!
//! Encodes a synthetic page as PNG, decodes it back through the io
//! adapter, segments it and checks the recovered layout.
//!
//! Run with:
//! ```
//! cargo test -p hocredit --test pipeline_reg
//! ```

use hocredit::io::decode_raster;
use hocredit::region::{SegmentationOptions, segment_page};
use hocredit::{PixelGrid, WordBox};
use hocredit_test::{RegParams, page_with_rects};
use image::{GrayImage, ImageFormat};
use std::io::Cursor;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn pipeline_png_reg() {
    init_logging();
    let mut rp = RegParams::new("pipeline_png");

    let words = [
        WordBox::new(30, 40, 60, 18),
        WordBox::new(120, 42, 45, 16),
        WordBox::new(30, 100, 80, 18),
    ];
    let page = page_with_rects(400, 200, &words);

    let gray = GrayImage::from_fn(page.width(), page.height(), |x, y| {
        let v = (page.at(x, y).intensity() >> 8) as u8;
        image::Luma([v])
    });
    let mut png = Vec::new();
    gray.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .expect("encode png");

    let decoded = decode_raster(&png).expect("decode png");
    rp.compare_values(400.0, decoded.width() as f64, 0.0);
    rp.compare_values(200.0, decoded.height() as f64, 0.0);

    let layout = segment_page(&decoded, &SegmentationOptions::default()).expect("segment");
    rp.compare_values(2.0, layout.line_count() as f64, 0.0);
    rp.compare_values(3.0, layout.word_count() as f64, 0.0);

    let found: Vec<WordBox> = layout.words().copied().collect();
    for (expected, actual) in words.iter().zip(&found) {
        rp.compare_values(expected.x as f64, actual.x as f64, 0.0);
        rp.compare_values(expected.y as f64, actual.y as f64, 0.0);
        rp.compare_values(expected.width as f64, actual.width as f64, 0.0);
        rp.compare_values(expected.height as f64, actual.height as f64, 0.0);
    }

    assert!(rp.cleanup(), "pipeline_png regression test failed");
}
