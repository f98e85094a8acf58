//! PNG codec adapter.

use image::codecs::png;
use image::ImageEncoder;

use crate::codec::ImageCodec;
use crate::color::parse_hex_color;
use crate::composite::apply_background;
use crate::error::CodecError;
use crate::format::SupportedFormat;
use crate::options::{keys, OptionBag};
use crate::pixel::{ImgRef, Rgba};

/// Options declared by the PNG codec.
///
/// `compressionLevel` takes the original API's constants: 0 default,
/// -1 no-compression, -2 best-speed, -3 best-compression. The delegated
/// encoder has no uncompressed mode, so -1 maps to its fastest setting.
struct PngOptions {
    compression: png::CompressionType,
    background: Option<Rgba<u8>>,
}

impl PngOptions {
    fn from_bag(bag: &OptionBag) -> Result<Self, CodecError> {
        let compression = match bag.get_int(keys::COMPRESSION_LEVEL)? {
            None | Some(0) => png::CompressionType::Default,
            Some(-1) | Some(-2) => png::CompressionType::Fast,
            Some(-3) => png::CompressionType::Best,
            Some(level) => {
                return Err(CodecError::InvalidArgument {
                    key: keys::COMPRESSION_LEVEL,
                    detail: format!("{level} is not a recognized compression level"),
                });
            }
        };

        let background = bag
            .get_str(keys::BACKGROUND_COLOR)?
            .map(parse_hex_color)
            .transpose()?;

        Ok(Self {
            compression,
            background,
        })
    }
}

/// Encodes RGBA8 losslessly. A background fill is applied only when the
/// caller asks for one.
pub struct PngCodec;

impl ImageCodec for PngCodec {
    fn format(&self) -> SupportedFormat {
        SupportedFormat::Png
    }

    fn encode(
        &self,
        img: ImgRef<'_, Rgba<u8>>,
        options: &OptionBag,
    ) -> Result<Vec<u8>, CodecError> {
        let opts = PngOptions::from_bag(options)?;

        let flattened = opts
            .background
            .and_then(|bg| apply_background(img, bg));
        let img = flattened.as_ref().map(|f| f.as_ref()).unwrap_or(img);

        let (buf, width, height) = img.to_contiguous_buf();
        let bytes: &[u8] = bytemuck::cast_slice(buf.as_ref());

        let mut out = Vec::new();
        png::PngEncoder::new_with_quality(&mut out, opts.compression, png::FilterType::Adaptive)
            .write_image(
                bytes,
                width as u32,
                height as u32,
                image::ExtendedColorType::Rgba8,
            )
            .map_err(|e| CodecError::encode_failure(SupportedFormat::Png, e))?;

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode_bytes;
    use crate::pixel::ImgVec;

    const PNG_MAGIC: [u8; 4] = [0x89, b'P', b'N', b'G'];

    #[test]
    fn encodes_rgba() {
        let img = ImgVec::new(
            vec![Rgba { r: 0, g: 128, b: 255, a: 200 }; 12],
            4,
            3,
        );
        let data = PngCodec.encode(img.as_ref(), &OptionBag::new()).unwrap();
        assert_eq!(&data[..4], &PNG_MAGIC);
    }

    #[test]
    fn background_option_flattens_transparency() {
        let img = ImgVec::new(vec![Rgba { r: 0, g: 0, b: 0, a: 0 }; 4], 2, 2);
        let bag = OptionBag::new().with(keys::BACKGROUND_COLOR, "FF0000");

        let data = PngCodec.encode(img.as_ref(), &bag).unwrap();
        let decoded = decode_bytes(&data).unwrap();
        for px in decoded.pixels.pixels() {
            assert_eq!(px, Rgba { r: 255, g: 0, b: 0, a: 255 });
        }
    }

    #[test]
    fn compression_levels_accept_the_original_constants() {
        let img = ImgVec::new(vec![Rgba { r: 1, g: 2, b: 3, a: 255 }; 4], 2, 2);
        for level in [0, -1, -2, -3] {
            let bag = OptionBag::new().with(keys::COMPRESSION_LEVEL, level);
            assert!(PngCodec.encode(img.as_ref(), &bag).is_ok());
        }
    }

    #[test]
    fn unknown_compression_level_is_rejected() {
        let img = ImgVec::new(vec![Rgba { r: 1, g: 2, b: 3, a: 255 }; 4], 2, 2);
        let bag = OptionBag::new().with(keys::COMPRESSION_LEVEL, 9);
        let err = PngCodec.encode(img.as_ref(), &bag).unwrap_err();
        assert_eq!(err.code(), "InvalidArgument");
    }

    #[test]
    fn compression_level_type_mismatch_is_rejected() {
        let img = ImgVec::new(vec![Rgba { r: 1, g: 2, b: 3, a: 255 }; 4], 2, 2);
        let bag = OptionBag::new().with(keys::COMPRESSION_LEVEL, "best");
        assert!(PngCodec.encode(img.as_ref(), &bag).is_err());
    }
}
