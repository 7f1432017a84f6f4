//! Image scaling by sampling
//!
//! Every destination pixel copies the source pixel under its centre:
//! `src = floor((dst + 0.5) * src_len / dst_len)`. Scaling to the
//! source size is an exact copy.

use crate::{TransformError, TransformResult};
use bytewrite_core::Pix;

/// Map destination index `d` onto the source axis.
#[inline]
fn sample_index(d: u32, src_len: u32, dst_len: u32) -> u32 {
    let s = ((2 * d as u64 + 1) * src_len as u64) / (2 * dst_len as u64);
    (s as u32).min(src_len - 1)
}

/// Scale an image to an exact size using nearest-neighbour sampling
///
/// # Arguments
/// * `pix` - Input image
/// * `width` - Target width (> 0)
/// * `height` - Target height (> 0)
///
/// # Errors
///
/// Returns [`TransformError::InvalidTargetSize`] if either target
/// dimension is 0.
///
/// # Examples
///
/// ```
/// use bytewrite_core::Pix;
/// use bytewrite_transform::scale_to_size;
///
/// let pix = Pix::new(10, 20).unwrap();
/// let scaled = scale_to_size(&pix, 5, 7).unwrap();
/// assert_eq!(scaled.dimensions(), (5, 7));
/// ```
pub fn scale_to_size(pix: &Pix, width: u32, height: u32) -> TransformResult<Pix> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidTargetSize { width, height });
    }
    let (ws, hs) = pix.dimensions();
    if (ws, hs) == (width, height) {
        return Ok(pix.clone());
    }

    let xmap: Vec<usize> = (0..width)
        .map(|x| sample_index(x, ws, width) as usize)
        .collect();
    let mut data = Vec::with_capacity((width as usize) * (height as usize));
    for y in 0..height {
        let line = pix.row_data(sample_index(y, hs, height));
        data.extend(xmap.iter().map(|&sx| line[sx]));
    }

    Ok(Pix::from_raw(width, height, data)?)
}

/// Scale an image by factors using nearest-neighbour sampling
///
/// The output size is `round(w * scale_x)` by `round(h * scale_y)`,
/// never smaller than 1x1.
///
/// # Errors
///
/// Returns [`TransformError::InvalidScaleFactor`] for non-positive or
/// non-finite factors.
pub fn scale_by_sampling(pix: &Pix, scale_x: f32, scale_y: f32) -> TransformResult<Pix> {
    for s in [scale_x, scale_y] {
        if !s.is_finite() || s <= 0.0 {
            return Err(TransformError::InvalidScaleFactor(format!(
                "scale factors must be positive: {} x {}",
                scale_x, scale_y
            )));
        }
    }
    let w = ((pix.width() as f32 * scale_x).round() as u32).max(1);
    let h = ((pix.height() as f32 * scale_y).round() as u32).max(1);
    scale_to_size(pix, w, h)
}

/// Reduce an image by an integer factor, as a camera decoder does when
/// asked for a subsampled image.
///
/// A factor of 0 or 1 returns the input unchanged. The output keeps at
/// least one pixel in each dimension.
pub fn downsample(pix: &Pix, factor: u32) -> TransformResult<Pix> {
    if factor <= 1 {
        return Ok(pix.clone());
    }
    let w = (pix.width() / factor).max(1);
    let h = (pix.height() / factor).max(1);
    scale_to_size(pix, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytewrite_core::color;

    fn gradient(w: u32, h: u32) -> Pix {
        let data = (0..w * h).collect();
        Pix::from_raw(w, h, data).unwrap()
    }

    #[test]
    fn test_identity_scale_is_exact() {
        let pix = gradient(7, 5);
        let scaled = scale_to_size(&pix, 7, 5).unwrap();
        assert!(scaled.pixels_equal(&pix));
    }

    #[test]
    fn test_upscale_by_two_replicates() {
        let pix = gradient(2, 2);
        let scaled = scale_to_size(&pix, 4, 4).unwrap();
        assert_eq!(scaled.row_data(0), &[0, 0, 1, 1]);
        assert_eq!(scaled.row_data(1), &[0, 0, 1, 1]);
        assert_eq!(scaled.row_data(3), &[2, 2, 3, 3]);
    }

    #[test]
    fn test_downscale_by_two_samples_centres() {
        let pix = gradient(4, 1);
        let scaled = scale_to_size(&pix, 2, 1).unwrap();
        // centres at 1.0 and 3.0
        assert_eq!(scaled.row_data(0), &[1, 3]);
    }

    #[test]
    fn test_sampling_keeps_only_source_values() {
        let mut pm = Pix::new_filled(9, 9, color::PAPER).unwrap().to_mut();
        for i in 0..9 {
            pm.set_pixel(i, i, color::INK).unwrap();
        }
        let pix: Pix = pm.into();
        let scaled = scale_to_size(&pix, 13, 4).unwrap();
        assert!(scaled.is_binarized());
    }

    #[test]
    fn test_invalid_arguments() {
        let pix = gradient(4, 4);
        assert!(matches!(
            scale_to_size(&pix, 0, 3),
            Err(TransformError::InvalidTargetSize { .. })
        ));
        assert!(scale_by_sampling(&pix, 0.0, 1.0).is_err());
        assert!(scale_by_sampling(&pix, 1.0, f32::NAN).is_err());
    }

    #[test]
    fn test_scale_by_sampling_size() {
        let pix = gradient(10, 10);
        let scaled = scale_by_sampling(&pix, 0.25, 2.0).unwrap();
        assert_eq!(scaled.dimensions(), (3, 20));
        let tiny = scale_by_sampling(&pix, 0.01, 0.01).unwrap();
        assert_eq!(tiny.dimensions(), (1, 1));
    }

    #[test]
    fn test_downsample() {
        let pix = gradient(16, 9);
        assert_eq!(downsample(&pix, 4).unwrap().dimensions(), (4, 2));
        assert_eq!(downsample(&pix, 1).unwrap().dimensions(), (16, 9));
        assert_eq!(downsample(&pix, 32).unwrap().dimensions(), (1, 1));
    }
}
