//! The polymorphic encode/decode contract each format satisfies.

use crate::error::CodecError;
use crate::format::SupportedFormat;
use crate::options::OptionBag;
use crate::pixel::{self, ImgRef, ImgVec, Rgba};

/// A decoded image plus the format the decoder detected.
#[derive(Clone, Debug)]
pub struct Decoded {
    /// Pixel grid, normalized to RGBA8.
    pub pixels: ImgVec<Rgba<u8>>,
    /// Format detected from the input bytes.
    pub format: SupportedFormat,
}

/// Strategy interface implemented by one codec per format family.
///
/// Implementations are stateless: every call is a pure function of its
/// inputs, so a single `&'static` instance serves concurrent callers
/// without synchronization.
pub trait ImageCodec: Send + Sync {
    /// Canonical format family this codec encodes.
    fn format(&self) -> SupportedFormat;

    /// Encode the image, reading only this codec's declared option keys.
    ///
    /// Option validation happens before any delegated encoding work; a
    /// mismatched option aborts with no partial output.
    fn encode(&self, img: ImgRef<'_, Rgba<u8>>, options: &OptionBag)
        -> Result<Vec<u8>, CodecError>;

    /// Decode encoded bytes, detecting the actual format.
    ///
    /// The default implementation is the shared detection decoder; codecs
    /// only override it when their format needs special handling.
    fn decode(&self, data: &[u8], _options: &OptionBag) -> Result<Decoded, CodecError> {
        decode_bytes(data)
    }
}

impl std::fmt::Debug for dyn ImageCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCodec")
            .field("format", &self.format())
            .finish()
    }
}

/// Shared detection decoder: sniff the format from magic bytes, decode via
/// the delegated library, and normalize the pixels to RGBA8.
pub fn decode_bytes(data: &[u8]) -> Result<Decoded, CodecError> {
    let guessed = image::guess_format(data).map_err(CodecError::decode_failure)?;
    let decoded = image::load_from_memory_with_format(data, guessed)
        .map_err(CodecError::decode_failure)?;

    Ok(Decoded {
        pixels: pixel::from_rgba_image(decoded.to_rgba8()),
        format: detected_format(guessed)?,
    })
}

fn detected_format(format: image::ImageFormat) -> Result<SupportedFormat, CodecError> {
    match format {
        image::ImageFormat::Png => Ok(SupportedFormat::Png),
        image::ImageFormat::Jpeg => Ok(SupportedFormat::Jpeg),
        image::ImageFormat::Gif => Ok(SupportedFormat::Gif),
        image::ImageFormat::WebP => Ok(SupportedFormat::Webp),
        image::ImageFormat::Tiff => Ok(SupportedFormat::Tiff),
        image::ImageFormat::Bmp => Ok(SupportedFormat::Bmp),
        image::ImageFormat::Ico => Ok(SupportedFormat::Ico),
        image::ImageFormat::Avif => Ok(SupportedFormat::Avif),
        other => Err(CodecError::decode_failure(format!(
            "decoded format {other:?} has no recognized token"
        ))),
    }
}
