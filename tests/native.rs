#![cfg(all(not(target_arch = "wasm32"), feature = "native-bin"))]

use image::{GrayImage, ImageFormat, Luma, Rgba, RgbaImage};
use spek_tools_wasm::native::{decode_mask_bytes, extract_palette_bytes, remove_background_bytes};

fn png_bytes(img: RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buf);
    img.write_to(&mut cursor, ImageFormat::Png).unwrap();
    buf
}

fn gray_png_bytes(img: GrayImage) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buf);
    img.write_to(&mut cursor, ImageFormat::Png).unwrap();
    buf
}

#[test]
fn palette_from_encoded_png() {
    let img = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255]));
    let colors = extract_palette_bytes(&png_bytes(img), None, 4, 128, 8).unwrap();
    assert_eq!(colors, vec!["#ff0000"]);
}

#[test]
fn palette_downscale_bound_is_applied() {
    // 300px wide solid image; the downscale bound keeps the result identical
    // but exercises the resize path end to end.
    let img = RgbaImage::from_pixel(300, 10, Rgba([0, 128, 255, 255]));
    let colors = extract_palette_bytes(&png_bytes(img), Some(100), 4, 128, 8).unwrap();
    assert_eq!(colors, vec!["#0080ff"]);
}

#[test]
fn remove_background_writes_mask_into_alpha() {
    let img = RgbaImage::from_pixel(1, 2, Rgba([50, 60, 70, 255]));
    let png = remove_background_bytes(&png_bytes(img), &[0.2, 0.9], true).unwrap();

    let out = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(out.dimensions(), (1, 2));
    assert_eq!(out.get_pixel(0, 0).0, [50, 60, 70, 204]);
    assert_eq!(out.get_pixel(0, 1).0, [50, 60, 70, 26]);
}

#[test]
fn remove_background_rejects_mismatched_mask() {
    let img = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
    assert!(remove_background_bytes(&png_bytes(img), &[0.5; 3], true).is_err());
}

#[test]
fn mask_decodes_to_unit_floats() {
    let mut img = GrayImage::new(2, 1);
    img.put_pixel(0, 0, Luma([0]));
    img.put_pixel(1, 0, Luma([255]));

    let mask = decode_mask_bytes(&gray_png_bytes(img)).unwrap();
    assert_eq!(mask.len(), 2);
    assert_eq!(mask[0], 0.0);
    assert_eq!(mask[1], 1.0);
}
