//! BMP codec adapter.

use image::ImageEncoder;

use crate::codec::ImageCodec;
use crate::error::CodecError;
use crate::format::SupportedFormat;
use crate::options::OptionBag;
use crate::pixel::{ImgRef, Rgba};

/// Encodes RGBA8 as a 32-bit bitmap. Declares no options.
pub struct BmpCodec;

impl ImageCodec for BmpCodec {
    fn format(&self) -> SupportedFormat {
        SupportedFormat::Bmp
    }

    fn encode(
        &self,
        img: ImgRef<'_, Rgba<u8>>,
        _options: &OptionBag,
    ) -> Result<Vec<u8>, CodecError> {
        let (buf, width, height) = img.to_contiguous_buf();
        let bytes: &[u8] = bytemuck::cast_slice(buf.as_ref());

        let mut out = std::io::Cursor::new(Vec::new());
        image::codecs::bmp::BmpEncoder::new(&mut out)
            .write_image(
                bytes,
                width as u32,
                height as u32,
                image::ExtendedColorType::Rgba8,
            )
            .map_err(|e| CodecError::encode_failure(SupportedFormat::Bmp, e))?;

        Ok(out.into_inner())
    }
}
