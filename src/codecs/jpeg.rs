//! JPEG codec adapter.

use image::ImageEncoder;

use crate::codec::ImageCodec;
use crate::color::{self, parse_hex_color};
use crate::composite::apply_background;
use crate::error::CodecError;
use crate::format::SupportedFormat;
use crate::options::{keys, OptionBag};
use crate::pixel::{ImgRef, Rgb, Rgba};

const DEFAULT_QUALITY: i64 = 80;

/// Options declared by the JPEG codec.
struct JpegOptions {
    quality: u8,
    background: Rgba<u8>,
}

impl JpegOptions {
    fn from_bag(bag: &OptionBag) -> Result<Self, CodecError> {
        let quality = match bag.get_int(keys::QUALITY)?.unwrap_or(DEFAULT_QUALITY) {
            q @ 1..=100 => q as u8,
            q => {
                return Err(CodecError::InvalidArgument {
                    key: keys::QUALITY,
                    detail: format!("{q} is outside 1..=100"),
                });
            }
        };

        let background = match bag.get_str(keys::BACKGROUND_COLOR)? {
            None => color::WHITE,
            Some(spec) => parse_hex_color(spec)?,
        };

        Ok(Self {
            quality,
            background,
        })
    }
}

/// Encodes RGB8 with configurable quality. JPEG has no alpha channel, so
/// transparency is flattened onto the background color first.
pub struct JpegCodec;

impl ImageCodec for JpegCodec {
    fn format(&self) -> SupportedFormat {
        SupportedFormat::Jpeg
    }

    fn encode(
        &self,
        img: ImgRef<'_, Rgba<u8>>,
        options: &OptionBag,
    ) -> Result<Vec<u8>, CodecError> {
        let opts = JpegOptions::from_bag(options)?;

        let flattened = apply_background(img, opts.background);
        let img = flattened.as_ref().map(|f| f.as_ref()).unwrap_or(img);

        let (buf, width, height) = img.to_contiguous_buf();
        let rgb: Vec<Rgb<u8>> = buf.iter().map(|px| px.rgb()).collect();
        let bytes: &[u8] = bytemuck::cast_slice(&rgb);

        let mut out = Vec::new();
        image::codecs::jpeg::JpegEncoder::new_with_quality(&mut out, opts.quality)
            .write_image(
                bytes,
                width as u32,
                height as u32,
                image::ExtendedColorType::Rgb8,
            )
            .map_err(|e| CodecError::encode_failure(SupportedFormat::Jpeg, e))?;

        Ok(out)
    }
}
