//! End-to-end pipeline regression test
//!
//! Renders words from the synthetic alphabet, dresses them up as photos,
//! and checks the full greyscale -> binarize -> crop -> segment ->
//! identify chain, both in memory and through files on disk.

use bytewrite_core::color;
use bytewrite_io::write_image;
use bytewrite_recog::{
    CharacterBase, Pipeline, PipelineOptions, RecogError, SampleSource,
};
use bytewrite_test::{RegParams, synth};
use std::sync::Arc;

fn alphabet_base() -> CharacterBase {
    let mut base = CharacterBase::new();
    for (letter, pix) in synth::alphabet().unwrap() {
        base.insert(letter, pix).unwrap();
    }
    base
}

#[test]
fn pipeline_reg() {
    let mut rp = RegParams::new("pipeline");
    let base = alphabet_base();
    let pipeline = Pipeline::default();

    eprintln!("=== Binarized word \"cat\" ===");
    let cat = synth::render_word("cat", 3, 5).unwrap();
    let rec = pipeline.run(&cat, &base).unwrap();
    rp.compare_strings("cat", &rec.text());
    rp.compare_values(5.0, rec.crop_box.x as f64, 0.0);
    rp.compare_values(5.0, rec.crop_box.y as f64, 0.0);
    rp.compare_values(27.0, rec.crop_box.w as f64, 0.0);
    rp.compare_values(8.0, rec.crop_box.h as f64, 0.0);
    for (name, d) in rec.timings.stages() {
        eprintln!("  {:<22} {:.6}s", name, d.as_secs_f64());
    }

    eprintln!("=== Photo of \"quiz\" ===");
    let photo = synth::to_photo(&synth::render_word("quiz", 2, 6).unwrap());
    rp.write_pix(&photo).unwrap();
    let rec = pipeline.run(&photo, &base).unwrap();
    rp.compare_strings("quiz", &rec.text());
    let identities: Vec<u32> = rec
        .word
        .iter()
        .filter_map(|g| g.identity())
        .map(|id| id.code)
        .collect();
    rp.compare_values(1.0, (identities == vec![113, 117, 105, 122]) as u8 as f64, 0.0);

    eprintln!("=== Without greyscale ===");
    let colour_only = Pipeline::new(PipelineOptions {
        greyscale: false,
        ..Default::default()
    });
    rp.compare_strings("quiz", &colour_only.run(&photo, &base).unwrap().text());

    eprintln!("=== Blank photo ===");
    let blank = bytewrite_core::Pix::new_filled(40, 20, color::compose_rgb(235, 230, 220)).unwrap();
    let err = pipeline.run(&blank, &base).unwrap_err();
    rp.compare_values(1.0, matches!(err, RecogError::NoInkDetected) as u8 as f64, 0.0);

    eprintln!("=== Background run ===");
    let shared: Arc<dyn SampleSource> = Arc::new(base);
    let task = pipeline.spawn(cat.clone(), Arc::clone(&shared)).unwrap();
    let rec = task.wait().unwrap().unwrap();
    rp.compare_strings("cat", &rec.text());

    assert!(rp.cleanup());
}

#[test]
fn pipeline_files_reg() {
    let mut rp = RegParams::new("pipeline_files");
    let dir = tempfile::tempdir().unwrap();
    let options = PipelineOptions::default();

    eprintln!("=== Sample directory ===");
    let samples_dir = dir.path().join("samples");
    for (letter, pix) in synth::alphabet().unwrap() {
        let class_dir = samples_dir.join(letter.to_string());
        std::fs::create_dir_all(&class_dir).unwrap();
        // padded photo, so loading must binarize and crop
        let padded = synth::render_word(&letter.to_string(), 0, 4).unwrap();
        write_image(&synth::to_photo(&padded), class_dir.join("1.png")).unwrap();
        if letter == 'e' {
            write_image(&pix, class_dir.join("2.png")).unwrap();
        }
    }
    // a blank sample is skipped, not an error
    let blank = bytewrite_core::Pix::new_filled(6, 6, color::PAPER).unwrap();
    write_image(&blank, samples_dir.join("x").join("blank.png")).unwrap();
    std::fs::write(samples_dir.join("x").join(".hidden"), b"ignored").unwrap();

    let base = CharacterBase::load_dir(&samples_dir, &options).unwrap();
    rp.compare_values(27.0, base.count() as f64, 0.0);
    rp.compare_values(2.0, base.samples_for('e').len() as f64, 0.0);
    rp.compare_pix(
        &synth::letter_glyph('m').unwrap(),
        base.samples_for('m')[0].bitmap(),
    );

    eprintln!("=== Background sample load ===");
    let task = CharacterBase::load_dir_in_background(samples_dir.clone(), options.clone()).unwrap();
    let loaded = task.wait().unwrap().unwrap();
    rp.compare_values(27.0, loaded.count() as f64, 0.0);

    eprintln!("=== Word from disk ===");
    let photo_path = dir.path().join("word.png");
    let photo = synth::to_photo(&synth::render_word("bytes", 3, 8).unwrap());
    write_image(&photo, &photo_path).unwrap();
    let rec = Pipeline::new(options.clone())
        .run_path(&photo_path, &base)
        .unwrap();
    rp.compare_strings("bytes", &rec.text());

    eprintln!("=== Missing inputs ===");
    let err = Pipeline::new(options.clone())
        .run_path(dir.path().join("missing.png"), &base)
        .unwrap_err();
    rp.compare_values(
        1.0,
        matches!(
            err,
            RecogError::Io(bytewrite_io::IoError::ImageLoadFailed { .. })
        ) as u8 as f64,
        0.0,
    );
    let err = CharacterBase::load_dir(dir.path().join("nope"), &options).unwrap_err();
    rp.compare_values(1.0, matches!(err, RecogError::SampleDir(_)) as u8 as f64, 0.0);

    eprintln!("=== Undecodable sample ===");
    let bad_dir = dir.path().join("bad");
    std::fs::create_dir_all(bad_dir.join("a")).unwrap();
    std::fs::write(bad_dir.join("a").join("broken.png"), b"not an image").unwrap();
    let err = CharacterBase::load_dir(&bad_dir, &options).unwrap_err();
    rp.compare_values(
        1.0,
        matches!(
            err,
            RecogError::Io(bytewrite_io::IoError::ImageLoadFailed { .. })
        ) as u8 as f64,
        0.0,
    );

    assert!(rp.cleanup());
}
