//! bytewrite - Handwritten word recognition
//!
//! Turns a photo of one handwritten lowercase word into text by running a
//! fixed pipeline: greyscale, binarize, crop to the ink, split at blank
//! columns, and match each piece against labelled reference samples.
//!
//! # Overview
//!
//! - Image I/O through the `image` crate ([`io`])
//! - Greyscale conversion and binarization ([`preprocess`])
//! - Nearest-neighbour scaling ([`transform`])
//! - Segmentation, identification and the pipeline itself ([`recog`])
//! - TOML configuration ([`config`])
//!
//! # Example
//!
//! ```
//! use bytewrite::{Pix, color};
//! use bytewrite::recog::{CharacterBase, Pipeline};
//!
//! let mut samples = CharacterBase::new();
//! samples.insert('l', Pix::new_filled(1, 4, color::INK).unwrap()).unwrap();
//!
//! let mut photo = Pix::new_filled(9, 9, color::PAPER).unwrap().to_mut();
//! for y in 1..8 {
//!     photo.set_pixel(4, y, color::compose_rgb(30, 30, 60)).unwrap();
//! }
//! let result = Pipeline::default().run(&photo.into(), &samples).unwrap();
//! assert_eq!(result.word.text(), "l");
//! ```

pub mod config;

// Re-export core types (primary data structures used everywhere)
pub use bytewrite_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use bytewrite_color as preprocess;
pub use bytewrite_io as io;
pub use bytewrite_recog as recog;
pub use bytewrite_transform as transform;
