//! Planar channel buffers and the explicit byte layouts used to re-encode
//! them into interleaved pixels.
//!
//! The split/merge pair is parameterized by [`ChannelOrder`] so the transform
//! engine never hardcodes which interleaved byte a plane came from.

use crate::{TemperatureError, TemperatureResult};
use image::RgbaImage;

/// Plane orders the buffer can be split into or merged from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelOrder {
    /// Plane 0 = blue, 1 = green, 2 = red.
    Bgr,
    /// Plane 0 = red, 1 = green, 2 = blue.
    Rgb,
}

impl ChannelOrder {
    /// RGBA byte index each plane reads from, and writes back to on merge.
    fn rgba_indices(&self) -> [usize; 3] {
        match self {
            ChannelOrder::Bgr => [2, 1, 0],
            ChannelOrder::Rgb => [0, 1, 2],
        }
    }
}

/// How the synthesized alpha byte is meant to be treated by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphaMode {
    /// Alpha byte is present and written fully opaque, but the renderer
    /// ignores it rather than compositing with it.
    SkipLast,
}

/// Explicit packing parameters for an interleaved output buffer. No format
/// auto-detection happens downstream; whatever is stated here is what gets
/// written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteLayout {
    pub bytes_per_pixel: usize,
    pub bits_per_component: usize,
    pub bits_per_pixel: usize,
    pub bytes_per_row: usize,
    pub alpha: AlphaMode,
}

impl ByteLayout {
    /// 8-bit RGBA, the layout display surfaces consume.
    pub fn rgba8(width: u32) -> Self {
        let bytes_per_pixel = 4;
        let bits_per_component = 8;

        Self {
            bytes_per_pixel,
            bits_per_component,
            bits_per_pixel: bytes_per_pixel * bits_per_component,
            bytes_per_row: width as usize * bytes_per_pixel,
            alpha: AlphaMode::SkipLast,
        }
    }
}

/// Row-major sample planes, one `f32` plane per color channel. Every plane is
/// `rows * cols` long and matches the source bitmap's pixel dimensions.
#[derive(Debug, Clone)]
pub struct ChannelBuffer {
    rows: usize,
    cols: usize,
    planes: [Vec<f32>; 3],
}

impl ChannelBuffer {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn plane(&self, index: usize) -> &[f32] {
        &self.planes[index]
    }

    /// Multiply every sample of one plane by `factor`. Values are left
    /// unclamped here; saturation to [0, 255] happens at merge time.
    pub fn scale_plane(&mut self, index: usize, factor: f32) {
        for sample in &mut self.planes[index] {
            *sample *= factor;
        }
    }
}

/// Decode interleaved RGBA pixels into three planes in the requested order.
pub fn split_channels(image: &RgbaImage, order: ChannelOrder) -> ChannelBuffer {
    let cols = image.width() as usize;
    let rows = image.height() as usize;
    let indices = order.rgba_indices();

    let mut planes = [
        Vec::with_capacity(rows * cols),
        Vec::with_capacity(rows * cols),
        Vec::with_capacity(rows * cols),
    ];

    for pixel in image.pixels() {
        for (plane, &byte_index) in planes.iter_mut().zip(indices.iter()) {
            plane.push(pixel[byte_index] as f32);
        }
    }

    ChannelBuffer { rows, cols, planes }
}

/// Re-encode the planes into interleaved bytes per the given layout. Samples
/// saturate to [0, 255]; the alpha byte is synthesized fully opaque.
pub fn merge_channels(
    buffer: &ChannelBuffer,
    order: ChannelOrder,
    layout: &ByteLayout,
) -> TemperatureResult<Vec<u8>> {
    let width = buffer.cols as u32;
    let height = buffer.rows as u32;

    if buffer.is_empty() {
        return Err(TemperatureError::EmptyImage { width, height });
    }

    let pixel_count = buffer.rows * buffer.cols;
    if buffer.planes.iter().any(|plane| plane.len() != pixel_count)
        || layout.bytes_per_row != buffer.cols * layout.bytes_per_pixel
    {
        return Err(TemperatureError::LayoutMismatch { width, height });
    }

    let indices = order.rgba_indices();
    let mut bytes = vec![0u8; buffer.rows * layout.bytes_per_row];

    for (i, pixel) in bytes.chunks_exact_mut(layout.bytes_per_pixel).enumerate() {
        for (plane, &byte_index) in buffer.planes.iter().zip(indices.iter()) {
            pixel[byte_index] = plane[i].clamp(0.0, 255.0) as u8;
        }

        match layout.alpha {
            AlphaMode::SkipLast => pixel[layout.bytes_per_pixel - 1] = u8::MAX,
        }
    }

    Ok(bytes)
}
