//! Glyph identification
//!
//! Nearest-neighbour matching against reference samples. For every letter
//! with samples, the unknown glyph is rescaled to each sample's size and
//! scored by the share of the sample's ink it covers:
//!
//! ```text
//! similarity = matching ink / sample ink * 100
//! total      = (mean similarity + greatest similarity) / 2
//! ```
//!
//! The letter with the strictly greatest total wins, so on a tie the
//! earlier letter in `a..z` is kept. Scaling uses nearest-neighbour
//! sampling to keep edges hard black and white.

use crate::charbase::{SampleSource, letters};
use crate::glyph::{Glyph, Identity};
use crate::word::Word;
use crate::{RecogError, RecogResult};
use bytewrite_core::{Pix, color};
use bytewrite_transform::scale_to_size;
use log::{debug, info};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Scores of one letter class against an unknown glyph
#[derive(Debug, Clone, PartialEq)]
pub struct ClassScore {
    /// The letter
    pub label: char,
    /// Best similarity over the class's samples
    pub greatest: f32,
    /// Mean similarity over the class's samples
    pub average: f32,
    /// `(average + greatest) / 2`, the ranking score
    pub total: f32,
    /// Number of samples compared
    pub samples: usize,
}

/// Result of classifying one glyph
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// The winning letter
    pub label: char,
    /// Character code of the winning letter
    pub code: u32,
    /// Total similarity of the winner
    pub score: f32,
    /// Greatest single-sample similarity of the winner
    pub greatest: f32,
    /// Mean similarity of the winner
    pub average: f32,
    /// Scores of every non-empty class, in `a..z` order
    pub class_scores: Vec<ClassScore>,
}

impl Classification {
    pub fn identity(&self) -> Identity {
        Identity {
            label: self.label,
            code: self.code,
        }
    }
}

/// Percentage of `sample`'s ink that is also ink in `candidate`.
///
/// Both images must have the same size; otherwise the similarity is 0.
/// A sample without ink also scores 0.
pub fn similarity(sample: &Pix, candidate: &Pix) -> f32 {
    if !sample.sizes_equal(candidate) {
        return 0.0;
    }
    let mut black = 0u32;
    let mut matching = 0u32;
    for (&s, &c) in sample.data().iter().zip(candidate.data()) {
        if color::is_ink(s) {
            black += 1;
            if color::is_ink(c) {
                matching += 1;
            }
        }
    }
    if black == 0 {
        return 0.0;
    }
    matching as f32 / black as f32 * 100.0
}

/// Scales of the unknown glyph, one per sample size seen so far
struct ScaledCache<'a> {
    source: &'a Pix,
    scaled: HashMap<(u32, u32), Pix>,
}

impl<'a> ScaledCache<'a> {
    fn new(source: &'a Pix) -> Self {
        Self {
            source,
            scaled: HashMap::new(),
        }
    }

    fn at_size(&mut self, w: u32, h: u32) -> RecogResult<&Pix> {
        match self.scaled.entry((w, h)) {
            Entry::Occupied(e) => Ok(&*e.into_mut()),
            Entry::Vacant(e) => Ok(&*e.insert(scale_to_size(self.source, w, h)?)),
        }
    }
}

fn score_class(
    cache: &mut ScaledCache<'_>,
    label: char,
    samples: &[Glyph],
) -> RecogResult<ClassScore> {
    let mut greatest = 0.0f32;
    let mut sum = 0.0f32;
    for sample in samples {
        let bitmap = sample.bitmap();
        let scaled = cache.at_size(bitmap.width(), bitmap.height())?;
        let s = similarity(bitmap, scaled);
        greatest = greatest.max(s);
        sum += s;
    }
    let average = sum / samples.len() as f32;
    Ok(ClassScore {
        label,
        greatest,
        average,
        total: (average + greatest) / 2.0,
        samples: samples.len(),
    })
}

/// Classify a glyph against a sample set without modifying it.
///
/// Letters with no samples are never chosen.
///
/// # Errors
///
/// Returns [`RecogError::NoReferenceData`] if every letter has an empty
/// sample list.
pub fn classify(glyph: &Glyph, source: &dyn SampleSource) -> RecogResult<Classification> {
    let mut cache = ScaledCache::new(glyph.bitmap());
    let mut class_scores: Vec<ClassScore> = Vec::new();
    let mut best: Option<usize> = None;

    for label in letters() {
        let samples = source.samples_for(label);
        if samples.is_empty() {
            continue;
        }
        let score = score_class(&mut cache, label, samples)?;
        debug!(
            "'{}': greatest {:.2} average {:.2} total {:.2}",
            label, score.greatest, score.average, score.total
        );
        if best.is_none_or(|i| score.total > class_scores[i].total) {
            best = Some(class_scores.len());
        }
        class_scores.push(score);
    }

    let best = best.ok_or(RecogError::NoReferenceData)?;
    let winner = &class_scores[best];
    info!(
        "greatest total similarity: '{}' with {:.2}%",
        winner.label, winner.total
    );
    Ok(Classification {
        label: winner.label,
        code: winner.label as u32,
        score: winner.total,
        greatest: winner.greatest,
        average: winner.average,
        class_scores,
    })
}

/// Classify a glyph and record the winning letter on it.
pub fn identify(glyph: &mut Glyph, source: &dyn SampleSource) -> RecogResult<Classification> {
    let classification = classify(glyph, source)?;
    glyph.set_identity(classification.identity());
    Ok(classification)
}

/// Identify every glyph of a word independently, keeping their order.
///
/// The first error aborts the whole word. Every glyph is scored against the
/// same `source`, so a `NoReferenceData` failure for one glyph would repeat
/// for all of them.
pub fn identify_word(word: Word, source: &dyn SampleSource) -> RecogResult<Word> {
    word.into_iter()
        .map(|mut glyph| {
            identify(&mut glyph, source)?;
            Ok(glyph)
        })
        .collect()
}
