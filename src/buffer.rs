use image::RgbaImage;

use crate::error::CoreError;

/// In-memory RGBA raster: row-major, top-left origin, 8 bits per channel.
///
/// The invariant `data.len() == width * height * 4` is established at
/// construction and held for the lifetime of the buffer. Every operation in
/// this crate produces a fresh `PixelBuffer`; none of them mutate their input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, CoreError> {
        let expected = width as usize * height as usize * 4;
        if width == 0 || height == 0 || data.len() != expected {
            return Err(CoreError::InvalidImage {
                width,
                height,
                data_len: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raw RGBA bytes, length `width * height * 4`.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn from_rgba_image(img: RgbaImage) -> Result<Self, CoreError> {
        let (width, height) = img.dimensions();
        Self::new(width, height, img.into_raw())
    }

    pub fn into_rgba_image(self) -> RgbaImage {
        RgbaImage::from_raw(self.width, self.height, self.data)
            .expect("PixelBuffer invariant: data length matches dimensions")
    }
}
