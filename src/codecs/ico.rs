//! ICO codec adapter.

use image::ImageEncoder;

use crate::codec::ImageCodec;
use crate::error::CodecError;
use crate::format::SupportedFormat;
use crate::options::{keys, OptionBag};
use crate::pixel::{ImgRef, Rgba};
use crate::resample::{resize_square, ResizeFilter, DEFAULT_ICON_SIZE};

/// Options declared by the ICO codec.
struct IcoOptions {
    dimension: u32,
    filter: ResizeFilter,
}

impl IcoOptions {
    fn from_bag(bag: &OptionBag) -> Result<Self, CodecError> {
        let dimension = match bag.get_int(keys::DIMENSION)? {
            None => DEFAULT_ICON_SIZE,
            Some(value) => u32::try_from(value).ok().filter(|&d| d > 0).ok_or_else(|| {
                CodecError::InvalidArgument {
                    key: keys::DIMENSION,
                    detail: format!("{value} is not a positive dimension"),
                }
            })?,
        };

        let filter = bag
            .get_filter(keys::INTERPOLATION_FUNCTION)?
            .unwrap_or_default();

        Ok(Self { dimension, filter })
    }
}

/// Resizes square and encodes a single icon entry. Non-standard dimensions
/// are passed through to the delegated encoder, which rejects anything it
/// cannot represent (icons cap at 256).
pub struct IcoCodec;

impl ImageCodec for IcoCodec {
    fn format(&self) -> SupportedFormat {
        SupportedFormat::Ico
    }

    fn encode(
        &self,
        img: ImgRef<'_, Rgba<u8>>,
        options: &OptionBag,
    ) -> Result<Vec<u8>, CodecError> {
        let opts = IcoOptions::from_bag(options)?;

        let resized = resize_square(img, opts.dimension, opts.filter);
        let (buf, width, height) = resized.as_ref().to_contiguous_buf();
        let bytes: &[u8] = bytemuck::cast_slice(buf.as_ref());

        let mut out = Vec::new();
        image::codecs::ico::IcoEncoder::new(&mut out)
            .write_image(
                bytes,
                width as u32,
                height as u32,
                image::ExtendedColorType::Rgba8,
            )
            .map_err(|e| CodecError::encode_failure(SupportedFormat::Ico, e))?;

        Ok(out)
    }
}
