//! Temperature transform engine.
//!
//! Splits a bitmap into BGR planes, scales the blue and red planes by a
//! temperature-dependent factor, and re-encodes the result as RGBA8 with an
//! opaque synthesized alpha. Green never changes.

use crate::bitmap::Bitmap;
use crate::channel::{self, ByteLayout, ChannelOrder};
use crate::{TemperatureError, TemperatureResult};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbaImage;

// Plane indices fixed by the BGR split.
const BLUE: usize = 0;
const RED: usize = 2;

/// Per-plane multipliers `(blue, red)` for a temperature value.
///
/// Zero routes through the cooling branch, where both factors collapse to
/// 1.0, so it stays an exact identity.
fn scale_factors(temperature: f32) -> (f32, f32) {
    if temperature > 0.0 {
        // Warmer: suppress blue, boost red
        (1.0 - temperature, 1.0 + temperature)
    } else {
        // Cooler: boost blue, suppress red
        (1.0 + temperature.abs(), 1.0 - temperature.abs())
    }
}

/// Adjust the bitmap's apparent color temperature.
///
/// `temperature` is expected in [-1, 1]: 0 leaves the image unchanged,
/// positive warms it, negative cools it. Out-of-range values are passed
/// through unclamped; the re-encode step saturates every sample to [0, 255]
/// either way. The bitmap should already be orientation-normalized.
pub fn try_adjust(bitmap: &Bitmap, temperature: f32) -> TemperatureResult<Bitmap> {
    let (width, height) = (bitmap.width(), bitmap.height());
    if bitmap.is_empty() {
        return Err(TemperatureError::EmptyImage { width, height });
    }

    let mut buffer = channel::split_channels(bitmap.pixels(), ChannelOrder::Bgr);

    let (blue_factor, red_factor) = scale_factors(temperature);
    buffer.scale_plane(BLUE, blue_factor);
    buffer.scale_plane(RED, red_factor);

    let layout = ByteLayout::rgba8(width);
    let bytes = channel::merge_channels(&buffer, ChannelOrder::Bgr, &layout)?;
    let pixels = RgbaImage::from_raw(width, height, bytes)
        .ok_or(TemperatureError::LayoutMismatch { width, height })?;

    Ok(Bitmap::new(pixels).with_scale(bitmap.scale()))
}

/// [`try_adjust`] for callers that only care about presence. `None` means
/// "no adjustment available for this input"; keep the previous image.
pub fn adjust(bitmap: &Bitmap, temperature: f32) -> Option<Bitmap> {
    match try_adjust(bitmap, temperature) {
        Ok(adjusted) => Some(adjusted),
        Err(err) => {
            log::warn!("temperature adjustment skipped: {err}");
            None
        }
    }
}

/// Temperature adjustment configuration, the form slider-driven callers hold.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct TemperatureConfig {
    /// [-1, 1]; 0 leaves the image untouched
    #[derivative(Default(value = "0.0"))]
    amount: f32,
}

impl TemperatureConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(&self) -> f32 {
        self.amount
    }

    pub fn apply(&self, bitmap: &Bitmap) -> Option<Bitmap> {
        adjust(bitmap, self.amount)
    }
}
