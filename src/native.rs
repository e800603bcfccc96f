//! Byte-level pipelines for the native CLI: decode with the `image` crate,
//! run the core, encode back. The wasm path never touches this module — the
//! browser decodes via canvas.

use anyhow::{Context, Result};
use image::ImageFormat;

use crate::buffer::PixelBuffer;
use crate::palette;
use crate::resize;

/// Decode an image and extract its dominant colors.
///
/// `downscale` bounds the longest side before sampling (pass
/// [`resize::PALETTE_MAX_DIMENSION`] for the interactive default, or `None`
/// to sample at full resolution).
pub fn extract_palette_bytes(
    input: &[u8],
    downscale: Option<u32>,
    sample_stride: usize,
    alpha_threshold: u8,
    top_k: usize,
) -> Result<Vec<String>> {
    let img = image::load_from_memory(input).context("unable to decode image")?;
    let buffer = PixelBuffer::from_rgba_image(img.to_rgba8())?;

    let working = match downscale {
        Some(max_dimension) => resize::resize_if_needed(&buffer, max_dimension)?.0,
        None => buffer,
    };

    Ok(palette::extract_palette(
        &working,
        sample_stride,
        alpha_threshold,
        top_k,
    )?)
}

/// Decode an image, apply a segmentation mask to its alpha channel, and
/// encode the result as RGBA PNG (lossless, so the new transparency
/// survives).
///
/// The mask must match the image's pixel count, so when the image was
/// downscaled before inference the mask applies to that downscaled copy, not
/// the original.
pub fn remove_background_bytes(input: &[u8], mask: &[f32], invert: bool) -> Result<Vec<u8>> {
    let img = image::load_from_memory(input).context("unable to decode image")?;
    let buffer = PixelBuffer::from_rgba_image(img.to_rgba8())?;

    let out = crate::mask::apply_mask(&buffer, mask, invert)?;

    let mut buf = Vec::new();
    {
        let mut cursor = std::io::Cursor::new(&mut buf);
        out.into_rgba_image()
            .write_to(&mut cursor, ImageFormat::Png)
            .context("PNG encode error")?;
    }
    Ok(buf)
}

/// Decode a grayscale mask image (as produced by a segmentation service) into
/// per-pixel floats in `[0, 1]`.
pub fn decode_mask_bytes(input: &[u8]) -> Result<Vec<f32>> {
    let img = image::load_from_memory(input).context("unable to decode mask image")?;
    let luma = img.to_luma8();
    Ok(luma.into_raw().iter().map(|&v| v as f32 / 255.0).collect())
}
