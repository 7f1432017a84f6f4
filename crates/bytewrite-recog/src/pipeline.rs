//! The recognition pipeline
//!
//! ```text
//! photo -> greyscale -> binarize -> crop -> segment -> identify -> word
//! ```
//!
//! Each stage consumes the full output of the one before and is timed
//! separately, so callers can report where the time went.

use crate::charbase::SampleSource;
use crate::ident::identify_word;
use crate::segment::segment_word;
use crate::task::BackgroundTask;
use crate::word::Word;
use crate::{RecogError, RecogResult};
use bytewrite_color::DEFAULT_INK_RATIO;
use bytewrite_core::{Box, Pix};
use log::{debug, info};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Options for [`Pipeline`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    /// Desaturate before binarizing
    pub greyscale: bool,
    /// Ink ratio threshold for binarization, within `[0, 1]`
    pub ink_ratio: f64,
    /// Integer factor to shrink photos by when reading them from disk
    pub downsample: u32,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            greyscale: true,
            ink_ratio: DEFAULT_INK_RATIO,
            downsample: 1,
        }
    }
}

impl PipelineOptions {
    /// Check the options are usable.
    pub fn validate(&self) -> RecogResult<()> {
        if !(0.0..=1.0).contains(&self.ink_ratio) {
            return Err(RecogError::InvalidParameter(format!(
                "ink_ratio must be within [0, 1], got {}",
                self.ink_ratio
            )));
        }
        Ok(())
    }
}

/// Wall-clock time spent in each stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageTimings {
    pub greyscale: Duration,
    pub binarize: Duration,
    pub crop: Duration,
    pub segment: Duration,
    pub identify: Duration,
}

impl StageTimings {
    /// Sum of all stages
    pub fn total(&self) -> Duration {
        self.greyscale + self.binarize + self.crop + self.segment + self.identify
    }

    /// Stage names paired with their durations, in pipeline order
    pub fn stages(&self) -> [(&'static str, Duration); 5] {
        [
            ("greyscale conversion", self.greyscale),
            ("binarization", self.binarize),
            ("cropping", self.crop),
            ("segmentation", self.segment),
            ("identification", self.identify),
        ]
    }
}

/// Output of a pipeline run
#[derive(Debug, Clone)]
pub struct Recognition {
    /// The identified glyphs, left to right
    pub word: Word,
    /// Per-stage timings
    pub timings: StageTimings,
    /// Where the ink was found in the input image
    pub crop_box: Box,
}

impl Recognition {
    /// The recognised text
    pub fn text(&self) -> String {
        self.word.text()
    }
}

fn timed<T>(slot: &mut Duration, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let out = f();
    *slot = start.elapsed();
    out
}

/// Greyscale, binarize, crop, segment and identify a photo of a word
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    options: PipelineOptions,
}

impl Pipeline {
    pub fn new(options: PipelineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Run every stage on an in-memory image.
    ///
    /// # Errors
    ///
    /// - [`RecogError::NoInkDetected`] if nothing survives binarization
    /// - [`RecogError::NoReferenceData`] if the sample set is empty
    pub fn run(&self, pix: &Pix, samples: &dyn SampleSource) -> RecogResult<Recognition> {
        self.options.validate()?;
        let mut timings = StageTimings::default();

        let gray = timed(&mut timings.greyscale, || {
            if self.options.greyscale {
                bytewrite_color::convert_to_gray(pix)
            } else {
                Ok(pix.clone())
            }
        })?;

        let binary = timed(&mut timings.binarize, || {
            bytewrite_color::binarize_with_threshold(&gray, self.options.ink_ratio)
        })?;

        let (cropped, crop_box) = timed(&mut timings.crop, || binary.crop_to_ink())?
            .ok_or(RecogError::NoInkDetected)?;
        debug!(
            "cropped to {}x{} at ({}, {})",
            crop_box.w, crop_box.h, crop_box.x, crop_box.y
        );

        let word = timed(&mut timings.segment, || segment_word(&cropped, None))?;
        let word = timed(&mut timings.identify, || identify_word(word, samples))?;

        info!(
            "recognised \"{}\" in {:.3}s",
            word.text(),
            timings.total().as_secs_f64()
        );
        Ok(Recognition {
            word,
            timings,
            crop_box,
        })
    }

    /// Read a photo from disk, shrinking it by the configured factor, and
    /// run every stage on it.
    ///
    /// # Errors
    ///
    /// Returns [`bytewrite_io::IoError::ImageLoadFailed`] (wrapped in
    /// [`RecogError::Io`]) if the file is missing or undecodable, plus the
    /// errors of [`Pipeline::run`].
    pub fn run_path<P: AsRef<Path>>(
        &self,
        path: P,
        samples: &dyn SampleSource,
    ) -> RecogResult<Recognition> {
        let pix = bytewrite_io::read_image_downsampled(path, self.options.downsample)?;
        self.run(&pix, samples)
    }

    /// Run the pipeline on a worker thread.
    ///
    /// The returned task is already started.
    pub fn spawn(
        &self,
        pix: Pix,
        samples: Arc<dyn SampleSource>,
    ) -> RecogResult<BackgroundTask<RecogResult<Recognition>>> {
        let pipeline = self.clone();
        BackgroundTask::spawn("pipeline", move || pipeline.run(&pix, samples.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charbase::CharacterBase;
    use bytewrite_core::color;

    fn single_sample_base() -> CharacterBase {
        let mut base = CharacterBase::new();
        base.insert('i', Pix::new_filled(1, 3, color::INK).unwrap())
            .unwrap();
        base
    }

    #[test]
    fn test_default_options() {
        let opts = PipelineOptions::default();
        assert!(opts.greyscale);
        assert_eq!(opts.ink_ratio, 0.575);
        assert_eq!(opts.downsample, 1);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_blank_photo_has_no_ink() {
        let pix = Pix::new_filled(10, 10, color::compose_rgb(240, 240, 235)).unwrap();
        let err = Pipeline::default()
            .run(&pix, &single_sample_base())
            .unwrap_err();
        assert!(matches!(err, RecogError::NoInkDetected));
    }

    #[test]
    fn test_empty_sample_set() {
        let pix = Pix::new_filled(4, 4, color::INK).unwrap();
        let err = Pipeline::default()
            .run(&pix, &CharacterBase::new())
            .unwrap_err();
        assert!(matches!(err, RecogError::NoReferenceData));
    }

    #[test]
    fn test_invalid_ratio_rejected() {
        let pipeline = Pipeline::new(PipelineOptions {
            ink_ratio: -0.1,
            ..Default::default()
        });
        let pix = Pix::new_filled(4, 4, color::INK).unwrap();
        assert!(matches!(
            pipeline.run(&pix, &single_sample_base()),
            Err(RecogError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_crop_box_and_timings() {
        let mut pm = Pix::new_filled(12, 9, color::PAPER).unwrap().to_mut();
        for y in 2..7 {
            pm.set_pixel(4, y, color::INK).unwrap();
        }
        let rec = Pipeline::default()
            .run(&pm.into(), &single_sample_base())
            .unwrap();
        assert_eq!(rec.text(), "i");
        assert_eq!(rec.crop_box, Box::new_unchecked(4, 2, 1, 5));
        let t = rec.timings;
        assert_eq!(
            t.total(),
            t.greyscale + t.binarize + t.crop + t.segment + t.identify
        );
        assert_eq!(t.stages()[4].0, "identification");
    }

    #[test]
    fn test_missing_file() {
        let err = Pipeline::default()
            .run_path("/nonexistent/photo.jpg", &single_sample_base())
            .unwrap_err();
        assert!(matches!(
            err,
            RecogError::Io(bytewrite_io::IoError::ImageLoadFailed { .. })
        ));
    }
}
