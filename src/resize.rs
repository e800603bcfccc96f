use image::imageops::{self, FilterType};

use crate::buffer::PixelBuffer;
use crate::error::CoreError;

/// Longest-side bound applied before handing an image to a segmentation model.
pub const SEGMENTATION_MAX_DIMENSION: u32 = 1024;

/// Much tighter longest-side bound applied before palette extraction, purely
/// to keep the sampling cost down.
pub const PALETTE_MAX_DIMENSION: u32 = 100;

/// Downscale `buffer` so its longest side is at most `max_dimension`,
/// preserving aspect ratio. Returns the (possibly new) buffer and whether a
/// resize actually happened.
///
/// An image whose longest side already fits — including exactly equal to
/// `max_dimension` — is returned unchanged. Resampling is bilinear.
pub fn resize_if_needed(
    buffer: &PixelBuffer,
    max_dimension: u32,
) -> Result<(PixelBuffer, bool), CoreError> {
    if max_dimension == 0 {
        return Err(CoreError::InvalidConfiguration(
            "max_dimension must be positive",
        ));
    }

    let (w, h) = (buffer.width(), buffer.height());
    let longest = w.max(h);
    if longest <= max_dimension {
        return Ok((buffer.clone(), false));
    }

    let scale = max_dimension as f32 / longest as f32;
    let new_w = ((w as f32) * scale).round().max(1.0) as u32;
    let new_h = ((h as f32) * scale).round().max(1.0) as u32;

    let src = buffer.clone().into_rgba_image();
    let resized = imageops::resize(&src, new_w, new_h, FilterType::Triangle);
    Ok((PixelBuffer::from_rgba_image(resized)?, true))
}
