use crate::buffer::PixelBuffer;
use crate::error::CoreError;

/// Write a segmentation mask into the alpha channel of a copy of `buffer`.
///
/// `mask` holds one value in `[0, 1]` per pixel, in the same row-major order
/// as the buffer. Per pixel the new alpha is
/// `round(clamp01(invert ? 1 - m : m) * 255)`; R/G/B bytes are copied
/// unchanged. Out-of-range (and non-finite) mask values are clamped.
///
/// Polarity is deliberately the caller's problem: segmentation models disagree
/// on whether the mask means "foreground" or "background", so `invert` must be
/// passed explicitly. To keep the subject, pass `invert = true` when the mask
/// marks the background class and `false` when it marks the foreground; check
/// the convention of whatever model produced the mask.
pub fn apply_mask(
    buffer: &PixelBuffer,
    mask: &[f32],
    invert: bool,
) -> Result<PixelBuffer, CoreError> {
    let expected = buffer.pixel_count();
    if mask.len() != expected {
        return Err(CoreError::MaskSizeMismatch {
            expected,
            got: mask.len(),
        });
    }

    let mut out = buffer.data().to_vec();
    for (i, &m) in mask.iter().enumerate() {
        let v = if invert { 1.0 - m } else { m };
        let v = v.clamp(0.0, 1.0);
        // NaN falls through clamp; the cast then saturates it to 0.
        out[i * 4 + 3] = (v * 255.0).round() as u8;
    }

    PixelBuffer::new(buffer.width(), buffer.height(), out)
}
