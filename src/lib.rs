use js_sys::{Array, Float32Array, Object, Reflect, Uint8Array};
use wasm_bindgen::prelude::*;

pub mod buffer;
pub mod error;
pub mod mask;
pub mod palette;
pub mod resize;

#[cfg(all(not(target_arch = "wasm32"), feature = "native-bin"))]
pub mod native;

pub use buffer::PixelBuffer;
pub use error::CoreError;
pub use mask::apply_mask;
pub use palette::extract_palette;
pub use resize::resize_if_needed;

fn js_err(e: CoreError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

// ------------------------------------------------------------
// wasm bindings
// ------------------------------------------------------------
// The JS side hands over raw canvas `ImageData` bytes plus dimensions; the
// core never decodes or encodes anything on this path.

/// Downscale RGBA bytes so the longest side is at most `max_dimension`.
///
/// Returns `{ data: Uint8Array, width, height, resized: bool }`.
#[wasm_bindgen(js_name = resizeIfNeeded)]
pub fn resize_if_needed_js(
    data: Vec<u8>,
    width: u32,
    height: u32,
    max_dimension: u32,
) -> Result<Object, JsValue> {
    let buffer = PixelBuffer::new(width, height, data).map_err(js_err)?;
    let (out, resized) = resize::resize_if_needed(&buffer, max_dimension).map_err(js_err)?;

    let result = Object::new();
    Reflect::set(
        &result,
        &JsValue::from_str("width"),
        &JsValue::from(out.width()),
    )?;
    Reflect::set(
        &result,
        &JsValue::from_str("height"),
        &JsValue::from(out.height()),
    )?;
    Reflect::set(
        &result,
        &JsValue::from_str("data"),
        &Uint8Array::from(out.data()),
    )?;
    Reflect::set(
        &result,
        &JsValue::from_str("resized"),
        &JsValue::from_bool(resized),
    )?;
    Ok(result)
}

/// Extract the dominant colors of an RGBA buffer as lowercase `#rrggbb`
/// strings, most frequent first.
#[wasm_bindgen(js_name = extractPalette)]
pub fn extract_palette_js(
    data: Vec<u8>,
    width: u32,
    height: u32,
    sample_stride: usize,
    alpha_threshold: u8,
    top_k: usize,
) -> Result<Array, JsValue> {
    let buffer = PixelBuffer::new(width, height, data).map_err(js_err)?;
    let colors =
        palette::extract_palette(&buffer, sample_stride, alpha_threshold, top_k).map_err(js_err)?;

    let out = Array::new();
    for color in colors {
        out.push(&JsValue::from_str(&color));
    }
    Ok(out)
}

/// Apply a per-pixel segmentation mask to the alpha channel.
///
/// `mask` is one float in `[0, 1]` per pixel. Returns
/// `{ data: Uint8Array, width, height }`; put the bytes back into an
/// `ImageData` of the same dimensions.
#[wasm_bindgen(js_name = applyMask)]
pub fn apply_mask_js(
    data: Vec<u8>,
    width: u32,
    height: u32,
    mask: Float32Array,
    invert: bool,
) -> Result<Object, JsValue> {
    let buffer = PixelBuffer::new(width, height, data).map_err(js_err)?;
    let mask = mask.to_vec();
    let out = mask::apply_mask(&buffer, &mask, invert).map_err(js_err)?;

    let result = Object::new();
    Reflect::set(
        &result,
        &JsValue::from_str("width"),
        &JsValue::from(out.width()),
    )?;
    Reflect::set(
        &result,
        &JsValue::from_str("height"),
        &JsValue::from(out.height()),
    )?;
    Reflect::set(
        &result,
        &JsValue::from_str("data"),
        &Uint8Array::from(out.data()),
    )?;
    Ok(result)
}
