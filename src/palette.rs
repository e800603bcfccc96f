use std::collections::HashMap;

use crate::buffer::PixelBuffer;
use crate::error::CoreError;

/// Byte step over the flat RGBA array for dedicated palette extraction
/// (every 4th pixel).
pub const DEFAULT_SAMPLE_STRIDE: usize = 16;

/// Coarser byte step used by the background-removal preview, which only needs
/// a rough palette.
pub const PREVIEW_SAMPLE_STRIDE: usize = 40;

/// Sampled pixels with alpha at or below this are skipped.
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 128;

pub const DEFAULT_TOP_K: usize = 8;

/// Extract the `top_k` most frequent opaque colors, most frequent first,
/// as lowercase `#rrggbb` strings.
///
/// `sample_stride` is a byte step over the flat RGBA array, so it must be a
/// multiple of 4 (one pixel). Because the walk is linear over the array rather
/// than per row/column, sampling is not spatially uniform when the row length
/// is not a multiple of the stride; this matches the behavior of the canvas
/// version and is kept for output parity with it.
///
/// Ties in frequency keep first-encountered order. An image with no qualifying
/// pixels (e.g. fully transparent) yields an empty vec.
pub fn extract_palette(
    buffer: &PixelBuffer,
    sample_stride: usize,
    alpha_threshold: u8,
    top_k: usize,
) -> Result<Vec<String>, CoreError> {
    if sample_stride < 4 || sample_stride % 4 != 0 {
        return Err(CoreError::InvalidConfiguration(
            "sample_stride must be a positive multiple of 4",
        ));
    }
    if top_k == 0 {
        return Err(CoreError::InvalidConfiguration("top_k must be positive"));
    }

    let data = buffer.data();
    let mut counts: HashMap<u32, u32> = HashMap::new();
    // First-seen order, so the sort below stays stable across equal counts.
    let mut order: Vec<u32> = Vec::new();

    let mut i = 0;
    while i + 4 <= data.len() {
        let alpha = data[i + 3];
        if alpha > alpha_threshold {
            let key =
                ((data[i] as u32) << 16) | ((data[i + 1] as u32) << 8) | (data[i + 2] as u32);
            let count = counts.entry(key).or_insert(0);
            if *count == 0 {
                order.push(key);
            }
            *count += 1;
        }
        i += sample_stride;
    }

    order.sort_by(|a, b| counts[b].cmp(&counts[a]));

    Ok(order
        .iter()
        .take(top_k)
        .map(|key| format!("#{key:06x}"))
        .collect())
}
