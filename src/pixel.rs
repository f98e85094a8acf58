//! Typed pixel buffer definitions and delegated-library boundary casts.
//!
//! Uses `imgref::ImgVec` for 2D pixel data with typed pixels from the `rgb`
//! crate. Every decoded image is normalized to RGBA8 at this boundary, so
//! the rest of the pipeline deals with exactly one pixel layout.

pub use imgref::{Img, ImgRef, ImgVec};
pub use rgb::{Rgb, Rgba};

/// Convert a decoded buffer from the delegated library into a typed grid.
pub(crate) fn from_rgba_image(img: image::RgbaImage) -> ImgVec<Rgba<u8>> {
    let (width, height) = img.dimensions();
    let pixels: &[Rgba<u8>] = bytemuck::cast_slice(img.as_raw());
    ImgVec::new(pixels.to_vec(), width as usize, height as usize)
}

/// Convert a typed grid into the delegated library's RGBA buffer.
pub(crate) fn to_rgba_image(img: ImgRef<'_, Rgba<u8>>) -> image::RgbaImage {
    let (buf, width, height) = img.to_contiguous_buf();
    let bytes: &[u8] = bytemuck::cast_slice(buf.as_ref());
    image::RgbaImage::from_raw(width as u32, height as u32, bytes.to_vec())
        .expect("contiguous buffer matches its own dimensions")
}
