pub mod bitmap;
pub mod channel;
pub mod orientation;
pub mod temperature;

pub use bitmap::{Bitmap, Orientation};
pub use channel::{AlphaMode, ByteLayout, ChannelBuffer, ChannelOrder};
pub use orientation::normalize;
pub use temperature::{TemperatureConfig, adjust, try_adjust};

pub type TemperatureResult<T> = Result<T, TemperatureError>;

#[derive(thiserror::Error, Debug)]
pub enum TemperatureError {
    #[error("Empty image: {width}x{height} has no pixels to adjust")]
    EmptyImage { width: u32, height: u32 },
    #[error("Byte layout mismatch: channel planes do not fit a {width}x{height} output")]
    LayoutMismatch { width: u32, height: u32 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}
