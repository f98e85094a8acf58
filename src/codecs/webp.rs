//! WebP codec adapter.

use image::ImageEncoder;
use log::debug;

use crate::codec::ImageCodec;
use crate::error::CodecError;
use crate::format::SupportedFormat;
use crate::options::{keys, OptionBag};
use crate::pixel::{ImgRef, Rgba};

/// Options declared by the WebP codec.
struct WebpOptions {
    use_extended_format: bool,
}

impl WebpOptions {
    fn from_bag(bag: &OptionBag) -> Result<Self, CodecError> {
        Ok(Self {
            use_extended_format: bag.get_bool(keys::USE_EXTENDED_FORMAT)?.unwrap_or(false),
        })
    }
}

/// Encodes RGBA8 via the delegated lossless WebP encoder.
pub struct WebpCodec;

impl ImageCodec for WebpCodec {
    fn format(&self) -> SupportedFormat {
        SupportedFormat::Webp
    }

    fn encode(
        &self,
        img: ImgRef<'_, Rgba<u8>>,
        options: &OptionBag,
    ) -> Result<Vec<u8>, CodecError> {
        let opts = WebpOptions::from_bag(options)?;
        if opts.use_extended_format {
            // The delegated encoder always writes the simple lossless
            // container; VP8X-only features are unavailable through it.
            debug!("extended WebP container requested; emitting simple lossless container");
        }

        let (buf, width, height) = img.to_contiguous_buf();
        let bytes: &[u8] = bytemuck::cast_slice(buf.as_ref());

        let mut out = Vec::new();
        image::codecs::webp::WebPEncoder::new_lossless(&mut out)
            .write_image(
                bytes,
                width as u32,
                height as u32,
                image::ExtendedColorType::Rgba8,
            )
            .map_err(|e| CodecError::encode_failure(SupportedFormat::Webp, e))?;

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::ImgVec;

    fn checkerboard(width: usize, height: usize) -> ImgVec<Rgba<u8>> {
        let pixels = (0..width * height)
            .map(|i| {
                if (i / width + i % width) % 2 == 0 {
                    Rgba { r: 255, g: 255, b: 255, a: 255 }
                } else {
                    Rgba { r: 0, g: 0, b: 0, a: 255 }
                }
            })
            .collect();
        ImgVec::new(pixels, width, height)
    }

    #[test]
    fn encodes_riff_container() {
        let img = checkerboard(8, 8);
        let data = WebpCodec.encode(img.as_ref(), &OptionBag::new()).unwrap();
        assert_eq!(&data[..4], b"RIFF");
        assert_eq!(&data[8..12], b"WEBP");
    }

    #[test]
    fn extended_format_flag_is_accepted() {
        let img = checkerboard(4, 4);
        let bag = OptionBag::new().with(keys::USE_EXTENDED_FORMAT, true);
        assert!(WebpCodec.encode(img.as_ref(), &bag).is_ok());
    }

    #[test]
    fn extended_format_type_mismatch_is_rejected() {
        let img = checkerboard(4, 4);
        let bag = OptionBag::new().with(keys::USE_EXTENDED_FORMAT, 1);
        let err = WebpCodec.encode(img.as_ref(), &bag).unwrap_err();
        assert_eq!(err.code(), "InvalidArgument");
    }
}
