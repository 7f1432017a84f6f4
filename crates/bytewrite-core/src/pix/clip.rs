//! Rectangle clipping and ink bounding boxes
//!
//! Functions for extracting rectangular sub-regions from images and for
//! locating the ink (foreground) within a binarized image.

use super::Pix;
use crate::Box;
use crate::color;
use crate::error::{Error, Result};

impl Pix {
    /// Extract a rectangular sub-region from the image.
    ///
    /// If the rectangle extends beyond the image bounds, it is clipped to
    /// the valid region.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The requested width or height is 0
    /// - The rectangle origin is outside the image bounds
    ///
    /// # Examples
    ///
    /// ```
    /// use bytewrite_core::Pix;
    ///
    /// let pix = Pix::new(100, 80).unwrap();
    /// let clipped = pix.clip_rectangle(80, 60, 50, 50).unwrap();
    /// assert_eq!(clipped.width(), 20);   // clipped: 100 - 80
    /// assert_eq!(clipped.height(), 20);  // clipped: 80 - 60
    /// ```
    pub fn clip_rectangle(&self, x: u32, y: u32, w: u32, h: u32) -> Result<Pix> {
        if w == 0 || h == 0 {
            return Err(Error::InvalidParameter(format!(
                "clip rectangle has zero dimension: {}x{}",
                w, h
            )));
        }

        let src_w = self.width();
        let src_h = self.height();

        if x >= src_w || y >= src_h {
            return Err(Error::InvalidParameter(format!(
                "clip rectangle origin ({}, {}) is outside image bounds ({}x{})",
                x, y, src_w, src_h
            )));
        }

        let clip_w = w.min(src_w - x);
        let clip_h = h.min(src_h - y);

        let mut data = Vec::with_capacity((clip_w as usize) * (clip_h as usize));
        for row in y..y + clip_h {
            let line = self.row_data(row);
            data.extend_from_slice(&line[x as usize..(x + clip_w) as usize]);
        }

        Pix::from_raw(clip_w, clip_h, data)
    }

    /// Compute the ink/blank state of every column, left to right.
    pub fn ink_columns(&self) -> Vec<bool> {
        let mut columns = vec![false; self.width() as usize];
        for y in 0..self.height() {
            for (x, &p) in self.row_data(y).iter().enumerate() {
                if color::is_ink(p) {
                    columns[x] = true;
                }
            }
        }
        columns
    }

    /// Crop the image to the tight bounding box of its ink.
    ///
    /// The search runs in two passes. The first scans every column to find
    /// the first and last ink columns. The second scans rows, restricted to
    /// that column range (both ends included), to find the first and last
    /// ink rows. The returned box includes the last ink row and column, so
    /// a lone ink pixel crops to a 1x1 image at its own position.
    ///
    /// Returns `None` if the image holds no ink.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytewrite_core::{Pix, color};
    ///
    /// let mut pm = Pix::new_filled(20, 20, color::PAPER).unwrap().to_mut();
    /// pm.set_pixel(5, 5, color::INK).unwrap();
    /// let pix: Pix = pm.into();
    ///
    /// let (cropped, bbox) = pix.crop_to_ink().unwrap().unwrap();
    /// assert_eq!((bbox.x, bbox.y, bbox.w, bbox.h), (5, 5, 1, 1));
    /// assert_eq!(cropped.count_ink(), 1);
    /// ```
    pub fn crop_to_ink(&self) -> Result<Option<(Pix, Box)>> {
        let columns = self.ink_columns();
        let Some(x_first) = columns.iter().position(|&ink| ink) else {
            return Ok(None);
        };
        let x_last = columns.iter().rposition(|&ink| ink).unwrap_or(x_first);
        let (x_first, x_last) = (x_first as u32, x_last as u32);

        let row_has_ink = |y: u32| {
            self.row_data(y)[x_first as usize..=x_last as usize]
                .iter()
                .any(|&p| color::is_ink(p))
        };
        let mut rows = (0..self.height()).filter(|&y| row_has_ink(y));
        let y_first = match rows.next() {
            Some(y) => y,
            None => return Ok(None),
        };
        let y_last = rows.last().unwrap_or(y_first);

        let w = x_last - x_first + 1;
        let h = y_last - y_first + 1;
        let bbox = Box::new(x_first as i32, y_first as i32, w as i32, h as i32)?;
        let cropped = self.clip_rectangle(x_first, y_first, w, h)?;

        Ok(Some((cropped, bbox)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper_with_ink(w: u32, h: u32, ink: &[(u32, u32)]) -> Pix {
        let mut pm = Pix::new_filled(w, h, color::PAPER).unwrap().to_mut();
        for &(x, y) in ink {
            pm.set_pixel(x, y, color::INK).unwrap();
        }
        pm.into()
    }

    #[test]
    fn test_clip_rectangle_basic() {
        let pix = Pix::new(100, 80).unwrap();
        let clipped = pix.clip_rectangle(10, 20, 50, 40).unwrap();
        assert_eq!(clipped.dimensions(), (50, 40));
    }

    #[test]
    fn test_clip_rectangle_errors() {
        let pix = Pix::new(10, 10).unwrap();
        assert!(pix.clip_rectangle(0, 0, 0, 5).is_err());
        assert!(pix.clip_rectangle(10, 0, 5, 5).is_err());
    }

    #[test]
    fn test_clip_rectangle_pixel_values() {
        let mut pm = Pix::new(20, 20).unwrap().try_into_mut().unwrap();
        for y in 0..20u32 {
            for x in 0..20u32 {
                pm.set_pixel_unchecked(x, y, x + y * 20);
            }
        }
        let pix: Pix = pm.into();

        let clipped = pix.clip_rectangle(5, 5, 10, 10).unwrap();
        for y in 0..10u32 {
            for x in 0..10u32 {
                assert_eq!(clipped.get_pixel(x, y), Some((x + 5) + (y + 5) * 20));
            }
        }
    }

    #[test]
    fn test_ink_columns() {
        let pix = paper_with_ink(6, 4, &[(1, 0), (1, 3), (4, 2)]);
        assert_eq!(
            pix.ink_columns(),
            vec![false, true, false, false, true, false]
        );
    }

    #[test]
    fn test_crop_to_ink_no_ink() {
        let pix = Pix::new_filled(20, 20, color::PAPER).unwrap();
        assert!(pix.crop_to_ink().unwrap().is_none());
    }

    #[test]
    fn test_crop_to_ink_includes_last_column() {
        // Ink in the last ink column sits below everything else; an
        // exclusive column bound in the row pass would lose it.
        let pix = paper_with_ink(20, 20, &[(3, 4), (9, 15)]);
        let (cropped, bbox) = pix.crop_to_ink().unwrap().unwrap();
        assert_eq!((bbox.x, bbox.y, bbox.w, bbox.h), (3, 4, 7, 12));
        assert_eq!(cropped.dimensions(), (7, 12));
        assert!(cropped.is_ink_at(0, 0));
        assert!(cropped.is_ink_at(6, 11));
    }

    #[test]
    fn test_crop_to_ink_first_column() {
        let pix = paper_with_ink(10, 10, &[(0, 2), (4, 6)]);
        let (_, bbox) = pix.crop_to_ink().unwrap().unwrap();
        assert_eq!((bbox.x, bbox.y, bbox.w, bbox.h), (0, 2, 5, 5));
    }
}
