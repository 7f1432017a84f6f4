//! Box, Boxa - Source regions
//!
//! A crop records the box it kept, and segmentation records one box per
//! glyph it cut. Coordinates are in the pixel space of the image the
//! region was taken from.

use crate::error::{Error, Result};

/// Region of a source image
///
/// `x`/`y` is the top-left pixel. `right()` and `bottom()` are one past
/// the last covered column and row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Box {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Box {
    /// Create a region, rejecting negative extents.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Result<Self> {
        if w < 0 || h < 0 {
            return Err(Error::InvalidParameter(format!(
                "region extent must be non-negative, got {}x{}",
                w, h
            )));
        }
        Ok(Self { x, y, w, h })
    }

    /// Create a region from trusted coordinates.
    pub const fn new_unchecked(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Check whether two regions share at least one pixel.
    ///
    /// Regions that only touch along an edge, such as two neighbouring
    /// glyph segments, do not overlap.
    pub fn overlaps(&self, other: &Box) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Ordered list of regions, one per image of a [`crate::Pixa`]
#[derive(Debug, Clone, Default)]
pub struct Boxa {
    boxes: Vec<Box>,
}

impl Boxa {
    pub fn new() -> Self {
        Self { boxes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            boxes: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Region recorded at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Box> {
        self.boxes.get(index)
    }

    pub fn push(&mut self, region: Box) {
        self.boxes.push(region);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Box> {
        self.boxes.iter()
    }
}

impl<'a> IntoIterator for &'a Boxa {
    type Item = &'a Box;
    type IntoIter = std::slice::Iter<'a, Box>;

    fn into_iter(self) -> Self::IntoIter {
        self.boxes.iter()
    }
}
