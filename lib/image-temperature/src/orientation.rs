//! Orientation normalization: re-render a bitmap so its stored pixel order is
//! top-left-origin, eliminating orientation-aware indexing downstream.

use crate::bitmap::{Bitmap, Orientation};
use image::RgbaImage;
use image::imageops;

/// Rewrite `bitmap` so its pixels are stored upright and the orientation tag
/// can be dropped.
///
/// Already-upright bitmaps are returned unchanged without copying. If the
/// upright copy cannot be produced, the original bitmap is returned as-is and
/// a warning is logged; a mis-oriented but usable image beats blocking the
/// pipeline.
pub fn normalize(bitmap: Bitmap) -> Bitmap {
    if bitmap.orientation().is_upright() {
        return bitmap;
    }

    match render_upright(bitmap.pixels(), bitmap.orientation()) {
        Some(pixels) => Bitmap::new(pixels).with_scale(bitmap.scale()),
        None => {
            log::warn!(
                "could not re-render {}x{} bitmap upright, keeping original pixel order",
                bitmap.width(),
                bitmap.height()
            );
            bitmap
        }
    }
}

fn render_upright(pixels: &RgbaImage, orientation: Orientation) -> Option<RgbaImage> {
    // The upright copy allocates width * height * 4 bytes in one go; refuse
    // sizes whose byte count does not fit in usize.
    let (width, height) = pixels.dimensions();
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(4)?;

    let upright = match orientation {
        Orientation::Up => pixels.clone(),
        Orientation::UpMirrored => imageops::flip_horizontal(pixels),
        Orientation::Down => imageops::rotate180(pixels),
        Orientation::DownMirrored => imageops::flip_vertical(pixels),
        Orientation::LeftMirrored => imageops::flip_horizontal(&imageops::rotate90(pixels)),
        Orientation::Right => imageops::rotate90(pixels),
        Orientation::RightMirrored => imageops::flip_vertical(&imageops::rotate90(pixels)),
        Orientation::Left => imageops::rotate270(pixels),
    };

    Some(upright)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    /// 2x2 with distinct corners:
    /// red   green
    /// blue  white
    fn corner_image() -> RgbaImage {
        let mut image = RgbaImage::new(2, 2);
        image.put_pixel(0, 0, RED);
        image.put_pixel(1, 0, GREEN);
        image.put_pixel(0, 1, BLUE);
        image.put_pixel(1, 1, WHITE);
        image
    }

    #[test]
    fn test_upright_bitmap_passes_through() {
        let bitmap = Bitmap::new(corner_image());
        let normalized = normalize(bitmap.clone());

        assert_eq!(normalized.orientation(), Orientation::Up);
        assert_eq!(normalized.pixels(), bitmap.pixels());
    }

    #[test]
    fn test_rotated_capture_comes_back_upright() {
        // A camera held on its side stores the frame rotated 90 CCW and tags
        // it Right (EXIF 6); normalization rotates it 90 CW.
        let bitmap = Bitmap::new(corner_image()).with_orientation(Orientation::Right);
        let normalized = normalize(bitmap);

        assert_eq!(normalized.orientation(), Orientation::Up);
        assert_eq!(normalized.pixels().get_pixel(0, 0), &BLUE);
        assert_eq!(normalized.pixels().get_pixel(1, 0), &RED);
        assert_eq!(normalized.pixels().get_pixel(0, 1), &WHITE);
        assert_eq!(normalized.pixels().get_pixel(1, 1), &GREEN);
    }

    #[test]
    fn test_upside_down_capture() {
        let bitmap = Bitmap::new(corner_image()).with_orientation(Orientation::Down);
        let normalized = normalize(bitmap);

        assert_eq!(normalized.pixels().get_pixel(0, 0), &WHITE);
        assert_eq!(normalized.pixels().get_pixel(1, 1), &RED);
    }

    #[test]
    fn test_mirrored_capture() {
        let bitmap = Bitmap::new(corner_image()).with_orientation(Orientation::UpMirrored);
        let normalized = normalize(bitmap);

        assert_eq!(normalized.pixels().get_pixel(0, 0), &GREEN);
        assert_eq!(normalized.pixels().get_pixel(1, 0), &RED);
        assert_eq!(normalized.pixels().get_pixel(0, 1), &WHITE);
        assert_eq!(normalized.pixels().get_pixel(1, 1), &BLUE);
    }

    #[test]
    fn test_dimension_swap() {
        let mut image = RgbaImage::new(3, 1);
        image.put_pixel(0, 0, RED);
        image.put_pixel(1, 0, GREEN);
        image.put_pixel(2, 0, BLUE);

        let bitmap = Bitmap::new(image).with_orientation(Orientation::Left);
        let normalized = normalize(bitmap);

        assert_eq!(normalized.width(), 1);
        assert_eq!(normalized.height(), 3);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for code in 1u16..=8 {
            let orientation = Orientation::try_from(code).unwrap();
            let bitmap = Bitmap::new(corner_image()).with_orientation(orientation);

            let once = normalize(bitmap);
            let twice = normalize(once.clone());

            assert_eq!(once.pixels(), twice.pixels());
            assert_eq!(twice.orientation(), Orientation::Up);
        }
    }

    #[test]
    fn test_scale_survives_normalization() {
        let bitmap = Bitmap::new(corner_image())
            .with_orientation(Orientation::Down)
            .with_scale(3.0);

        assert_eq!(normalize(bitmap).scale(), 3.0);
    }
}
