//! Words: glyphs in reading order

use crate::glyph::Glyph;
use std::fmt;

/// An ordered sequence of glyphs, left to right
#[derive(Debug, Clone, Default)]
pub struct Word {
    glyphs: Vec<Glyph>,
}

impl Word {
    /// Create an empty word
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a glyph at the right end
    pub fn push(&mut self, glyph: Glyph) {
        self.glyphs.push(glyph);
    }

    /// Number of glyphs
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Check if the word has no glyphs
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn glyphs_mut(&mut self) -> &mut [Glyph] {
        &mut self.glyphs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Glyph> {
        self.glyphs.iter()
    }

    /// The recognised text, with `?` for unidentified glyphs
    pub fn text(&self) -> String {
        self.glyphs.iter().map(Glyph::label).collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

impl FromIterator<Glyph> for Word {
    fn from_iter<I: IntoIterator<Item = Glyph>>(iter: I) -> Self {
        Self {
            glyphs: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Word {
    type Item = Glyph;
    type IntoIter = std::vec::IntoIter<Glyph>;

    fn into_iter(self) -> Self::IntoIter {
        self.glyphs.into_iter()
    }
}

impl<'a> IntoIterator for &'a Word {
    type Item = &'a Glyph;
    type IntoIter = std::slice::Iter<'a, Glyph>;

    fn into_iter(self) -> Self::IntoIter {
        self.glyphs.iter()
    }
}
