//! Reference sample sets
//!
//! The classifier compares each unknown glyph against pre-labelled
//! samples of every letter. [`SampleSource`] is the read-only view it
//! needs; [`CharacterBase`] is the in-memory implementation, filled by
//! hand or loaded from a directory tree:
//!
//! ```text
//! samples/
//!   a/  a1.png a2.png ...
//!   b/  ...
//!   ...
//!   z/
//! ```
//!
//! Loaded samples go through the same greyscale, binarize and crop steps
//! as the photo being recognised, so both sides of a comparison are tight
//! ink-on-paper bitmaps.

use crate::glyph::Glyph;
use crate::pipeline::PipelineOptions;
use crate::task::BackgroundTask;
use crate::{RecogError, RecogResult};
use bytewrite_core::Pix;
use log::{debug, info, warn};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The letter classes, in classification order
pub fn letters() -> impl Iterator<Item = char> {
    'a'..='z'
}

/// Read-only access to labelled reference samples
pub trait SampleSource: Send + Sync {
    /// Samples for one letter; empty if there are none
    fn samples_for(&self, label: char) -> &[Glyph];

    /// Every sample, grouped by letter in `a..z` order
    fn all_samples(&self) -> Vec<&Glyph> {
        letters().flat_map(|c| self.samples_for(c)).collect()
    }

    /// Total number of samples
    fn count(&self) -> usize {
        letters().map(|c| self.samples_for(c).len()).sum()
    }
}

impl<S: SampleSource + ?Sized> SampleSource for Arc<S> {
    fn samples_for(&self, label: char) -> &[Glyph] {
        (**self).samples_for(label)
    }
}

/// In-memory sample set keyed by letter
#[derive(Debug, Clone, Default)]
pub struct CharacterBase {
    samples: BTreeMap<char, Vec<Glyph>>,
}

impl CharacterBase {
    /// Create an empty sample set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sample bitmap for a letter.
    ///
    /// The bitmap is stored as given; callers loading raw photos should
    /// binarize and crop first, as [`CharacterBase::load_dir`] does.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::InvalidLabel`] unless `label` is in `'a'..='z'`.
    pub fn insert(&mut self, label: char, bitmap: Pix) -> RecogResult<()> {
        if !label.is_ascii_lowercase() {
            return Err(RecogError::InvalidLabel(label));
        }
        self.samples
            .entry(label)
            .or_default()
            .push(Glyph::labeled(bitmap, label));
        Ok(())
    }

    /// Load samples from `<dir>/<letter>/*`.
    ///
    /// Letters without a subdirectory get no samples. Files within a
    /// letter directory are read in name order; dotfiles are ignored.
    /// A sample with no ink after binarization is skipped with a warning.
    ///
    /// # Errors
    ///
    /// Fails if `dir` cannot be listed, or with
    /// [`bytewrite_io::IoError::ImageLoadFailed`] if any sample file cannot
    /// be decoded.
    pub fn load_dir<P: AsRef<Path>>(dir: P, options: &PipelineOptions) -> RecogResult<Self> {
        let dir = dir.as_ref();
        // surface a missing root directly instead of loading nothing
        fs::metadata(dir)?;

        let mut base = Self::new();
        for letter in letters() {
            let class_dir = dir.join(letter.to_string());
            if !class_dir.is_dir() {
                debug!("no samples for '{}' in {}", letter, dir.display());
                continue;
            }
            for path in sample_files(&class_dir)? {
                let pix = bytewrite_io::read_image(&path)?;
                match prepare_sample(&pix, options)? {
                    Some(bitmap) => base.insert(letter, bitmap)?,
                    None => warn!("skipping blank sample {}", path.display()),
                }
            }
        }

        info!(
            "loaded {} samples for {} letters from {}",
            base.count(),
            base.samples.values().filter(|v| !v.is_empty()).count(),
            dir.display()
        );
        Ok(base)
    }

    /// Load samples on a worker thread.
    ///
    /// The returned task is already started.
    pub fn load_dir_in_background(
        dir: PathBuf,
        options: PipelineOptions,
    ) -> RecogResult<BackgroundTask<RecogResult<Self>>> {
        BackgroundTask::spawn("sample-loader", move || Self::load_dir(&dir, &options))
    }
}

impl SampleSource for CharacterBase {
    fn samples_for(&self, label: char) -> &[Glyph] {
        self.samples.get(&label).map_or(&[], Vec::as_slice)
    }
}

fn sample_files(class_dir: &Path) -> RecogResult<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(class_dir)? {
        let path = entry?.path();
        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with('.'));
        if path.is_file() && !hidden {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Greyscale, binarize and crop a raw sample image.
///
/// Returns `None` if no ink survives binarization.
fn prepare_sample(pix: &Pix, options: &PipelineOptions) -> RecogResult<Option<Pix>> {
    let gray = if options.greyscale {
        bytewrite_color::convert_to_gray(pix)?
    } else {
        pix.clone()
    };
    let binary = bytewrite_color::binarize_with_threshold(&gray, options.ink_ratio)?;
    Ok(binary.crop_to_ink()?.map(|(cropped, _)| cropped))
}
