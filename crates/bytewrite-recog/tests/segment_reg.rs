//! Segmentation regression test
//!
//! Separated blocks, single-column strokes, blank input, and a rendered
//! word whose glyphs must come back unchanged and in order.

use bytewrite_core::{Pixa, color};
use bytewrite_recog::{find_column_spans, segment, segment_word};
use bytewrite_test::{RegParams, synth};

#[test]
fn segment_reg() {
    let mut rp = RegParams::new("segment");

    eprintln!("=== Three blocks ===");
    let pix = synth::column_blocks(30, 10, &[(2, 6), (10, 10), (15, 27)]).unwrap();
    let spans = find_column_spans(&pix);
    rp.compare_values(3.0, spans.len() as f64, 0.0);
    rp.compare_values(1.0, (spans == vec![(2, 6), (10, 10), (15, 27)]) as u8 as f64, 0.0);
    let parts = segment(&pix).unwrap();
    rp.compare_values(3.0, parts.len() as f64, 0.0);
    for (i, b) in parts.boxa().iter().enumerate() {
        eprintln!("  segment {}: x={} w={} h={}", i, b.x, b.w, b.h);
        rp.compare_values(10.0, b.h as f64, 0.0);
    }
    // start columns strictly increase
    let starts: Vec<i32> = parts.boxa().iter().map(|b| b.x).collect();
    rp.compare_values(1.0, starts.windows(2).all(|w| w[0] < w[1]) as u8 as f64, 0.0);
    rp.compare_values(1.0, parts.get(1).unwrap().width() as f64, 0.0);
    rp.compare_values(0.0, overlapping_pairs(&parts) as f64, 0.0);

    eprintln!("=== One blank column between blocks ===");
    let tight = synth::column_blocks(12, 4, &[(0, 3), (5, 5), (7, 11)]).unwrap();
    let parts = segment(&tight).unwrap();
    rp.compare_values(3.0, parts.len() as f64, 0.0);
    rp.compare_values(0.0, overlapping_pairs(&parts) as f64, 0.0);
    let covered: i32 = parts.boxa().iter().map(|b| b.w).sum();
    rp.compare_values(10.0, covered as f64, 0.0);

    eprintln!("=== Blank image ===");
    let blank = bytewrite_core::Pix::new_filled(25, 5, color::PAPER).unwrap();
    rp.compare_values(0.0, segment(&blank).unwrap().len() as f64, 0.0);

    eprintln!("=== Rendered word ===");
    let word_pix = synth::render_word("jumpy", 2, 0).unwrap();
    rp.write_pix(&word_pix).unwrap();
    let word = segment_word(&word_pix, None).unwrap();
    rp.compare_values(5.0, word.len() as f64, 0.0);
    rp.compare_strings("?????", &word.text());
    for (glyph, letter) in word.iter().zip("jumpy".chars()) {
        let expected = synth::letter_glyph(letter).unwrap();
        rp.compare_pix(&expected, glyph.bitmap());
    }

    assert!(rp.cleanup());
}

fn overlapping_pairs(parts: &Pixa) -> usize {
    let boxes: Vec<_> = parts.boxa().iter().collect();
    let mut count = 0;
    for (i, a) in boxes.iter().enumerate() {
        count += boxes[i + 1..].iter().filter(|b| a.overlaps(b)).count();
    }
    count
}
