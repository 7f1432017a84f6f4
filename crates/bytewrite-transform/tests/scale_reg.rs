//! Scaling regression test
//!
//! Nearest-neighbour scaling of binarized glyphs must never create grey
//! pixels, and an integer upscale followed by the matching downscale must
//! give the original glyph back.

use bytewrite_transform::{downsample, scale_by_sampling, scale_to_size};
use bytewrite_test::{RegParams, synth};

#[test]
fn scale_reg() {
    let mut rp = RegParams::new("scale");
    let glyph = synth::letter_glyph('g').unwrap();

    eprintln!("=== Integer upscale and back ===");
    let big = scale_to_size(&glyph, 21, 24).unwrap();
    rp.compare_values(27.0 * 9.0, big.count_ink() as f64, 0.0);
    let back = scale_to_size(&big, 7, 8).unwrap();
    rp.compare_pix(&glyph, &back);
    let back = downsample(&big, 3).unwrap();
    rp.compare_pix(&glyph, &back);

    eprintln!("=== Odd sizes stay binary ===");
    for (w, h) in [(3, 3), (5, 11), (13, 4), (1, 1), (40, 2)] {
        let scaled = scale_to_size(&glyph, w, h).unwrap();
        rp.compare_values(1.0, scaled.is_binarized() as u8 as f64, 0.0);
    }

    eprintln!("=== Factor scaling ===");
    let half = scale_by_sampling(&big, 0.5, 0.5).unwrap();
    rp.compare_values(11.0, half.width() as f64, 0.0);
    rp.compare_values(12.0, half.height() as f64, 0.0);

    assert!(rp.cleanup());
}
