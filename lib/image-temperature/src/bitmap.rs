//! Bitmap container: pixel data plus the display metadata the pipeline cares
//! about (EXIF orientation tag and pixel scale).

use crate::TemperatureResult;
use image::{DynamicImage, ImageDecoder, ImageReader, RgbaImage, metadata};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::path::Path;

/// EXIF orientation codes (tag 0x0112). Discriminants match the standard
/// values 1-8, so the enum converts directly to and from the raw tag.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Hash, TryFromPrimitive, IntoPrimitive,
)]
#[repr(u16)]
pub enum Orientation {
    #[default]
    Up = 1,
    UpMirrored = 2,
    Down = 3,
    DownMirrored = 4,
    LeftMirrored = 5,
    Right = 6,
    RightMirrored = 7,
    Left = 8,
}

impl Orientation {
    /// Top-left-origin storage, safe for direct channel indexing.
    pub fn is_upright(&self) -> bool {
        *self == Orientation::Up
    }

    /// Whether correcting this orientation swaps width and height.
    pub fn swaps_dimensions(&self) -> bool {
        matches!(
            self,
            Orientation::LeftMirrored
                | Orientation::Right
                | Orientation::RightMirrored
                | Orientation::Left
        )
    }
}

impl From<metadata::Orientation> for Orientation {
    fn from(orientation: metadata::Orientation) -> Self {
        match orientation {
            metadata::Orientation::NoTransforms => Orientation::Up,
            metadata::Orientation::FlipHorizontal => Orientation::UpMirrored,
            metadata::Orientation::Rotate180 => Orientation::Down,
            metadata::Orientation::FlipVertical => Orientation::DownMirrored,
            metadata::Orientation::Rotate90FlipH => Orientation::LeftMirrored,
            metadata::Orientation::Rotate90 => Orientation::Right,
            metadata::Orientation::Rotate270FlipH => Orientation::RightMirrored,
            metadata::Orientation::Rotate270 => Orientation::Left,
        }
    }
}

/// An in-memory RGBA bitmap. The pixel data is stored exactly as decoded; the
/// orientation tag records how a renderer is expected to turn it upright.
///
/// Value semantics throughout: the pipeline never mutates a `Bitmap` it was
/// handed, it only produces new ones.
#[derive(Debug, Clone)]
pub struct Bitmap {
    pixels: RgbaImage,
    orientation: Orientation,
    scale: f32,
}

impl Bitmap {
    /// Wrap already-upright pixels (orientation `Up`, scale 1.0).
    pub fn new(pixels: RgbaImage) -> Self {
        Self {
            pixels,
            orientation: Orientation::Up,
            scale: 1.0,
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Decode an image file, carrying over the orientation tag embedded in its
    /// metadata. The pixels are left as stored; run them through
    /// [`crate::orientation::normalize`] before channel-level work.
    pub fn open(path: impl AsRef<Path>) -> TemperatureResult<Self> {
        let mut decoder = ImageReader::open(path)?.with_guessed_format()?.into_decoder()?;
        let orientation = decoder
            .orientation()
            .map(Orientation::from)
            .unwrap_or_default();
        let pixels = DynamicImage::from_decoder(decoder)?.to_rgba8();

        Ok(Self {
            pixels,
            orientation,
            scale: 1.0,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn into_pixels(self) -> RgbaImage {
        self.pixels
    }
}
