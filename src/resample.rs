//! Square resizing for icon-family output.

use log::warn;

use crate::pixel::{self, ImgRef, ImgVec, Rgba};

/// Interpolation kernels accepted as the `interpolationFunction` option.
///
/// Pixel interpolation itself is delegated to the sampling kernels of the
/// `image` crate; this enum is the capability value carried through an
/// option bag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    /// Bicubic-class kernel, the default for icon output.
    #[default]
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl ResizeFilter {
    pub(crate) fn as_filter_type(self) -> image::imageops::FilterType {
        match self {
            ResizeFilter::Nearest => image::imageops::FilterType::Nearest,
            ResizeFilter::Triangle => image::imageops::FilterType::Triangle,
            ResizeFilter::CatmullRom => image::imageops::FilterType::CatmullRom,
            ResizeFilter::Gaussian => image::imageops::FilterType::Gaussian,
            ResizeFilter::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Icon sizes the downstream icon encoder is known to accept.
pub const VALID_ICON_SIZES: [u32; 7] = [16, 24, 32, 48, 64, 128, 256];

/// Icon size used when the `dimension` option is absent.
pub const DEFAULT_ICON_SIZE: u32 = 256;

/// Resize to exactly `size`×`size`, stretching each axis independently.
///
/// Out-of-set sizes are not rejected here; the downstream icon encoder
/// may reject them, so they only produce a warning.
pub fn resize_square(
    img: ImgRef<'_, Rgba<u8>>,
    size: u32,
    filter: ResizeFilter,
) -> ImgVec<Rgba<u8>> {
    if !VALID_ICON_SIZES.contains(&size) {
        warn!("{size}x{size} is not a standard icon size; the icon encoder may reject it");
    }

    let src = pixel::to_rgba_image(img);
    let resized = image::imageops::resize(&src, size, size, filter.as_filter_type());
    pixel::from_rgba_image(resized)
}
