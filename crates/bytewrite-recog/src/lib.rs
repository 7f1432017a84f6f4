//! bytewrite-recog - Handwritten word recognition
//!
//! This crate turns a photo of a single handwritten lowercase word into
//! text:
//!
//! - **Data model** ([`glyph`], [`word`]): segmented characters and the
//!   word they form
//! - **Reference samples** ([`charbase`]): labelled bitmaps per letter
//! - **Segmentation** ([`segment`]): splitting a word at blank columns
//! - **Identification** ([`ident`]): nearest-neighbour matching against
//!   the samples
//! - **Pipeline** ([`pipeline`]): every stage end to end, with timings
//! - **Background work** ([`task`]): running loads and recognitions off
//!   the calling thread
//!
//! # Quick Start
//!
//! ```no_run
//! use bytewrite_recog::{CharacterBase, Pipeline, PipelineOptions};
//!
//! let options = PipelineOptions::default();
//! let samples = CharacterBase::load_dir("samples", &options).unwrap();
//! let result = Pipeline::new(options).run_path("word.jpg", &samples).unwrap();
//! println!("{}", result.word);
//! ```

pub mod charbase;
mod error;
pub mod glyph;
pub mod ident;
pub mod pipeline;
pub mod segment;
pub mod task;
pub mod word;

pub use error::{RecogError, RecogResult};

pub use charbase::{CharacterBase, SampleSource, letters};
pub use glyph::{Glyph, GlyphTagger, Identity, UNKNOWN_LABEL};
pub use ident::{ClassScore, Classification, classify, identify, identify_word, similarity};
pub use pipeline::{Pipeline, PipelineOptions, Recognition, StageTimings};
pub use segment::{find_column_spans, segment, segment_word};
pub use task::BackgroundTask;
pub use word::Word;

// Re-export core for convenience
pub use bytewrite_core;
