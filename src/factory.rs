//! Format-to-codec resolution.

use log::debug;

use crate::codec::ImageCodec;
use crate::codecs::{
    AvifCodec, BmpCodec, GifCodec, IcoCodec, JpegCodec, PngCodec, TiffCodec, WebpCodec,
};
use crate::error::CodecError;
use crate::format::SupportedFormat;

// The registry: one static, zero-sized instance per registered family.
// Built at compile time and never mutated, so unsynchronized concurrent
// reads are safe.
static PNG: PngCodec = PngCodec;
static JPEG: JpegCodec = JpegCodec;
static WEBP: WebpCodec = WebpCodec;
static AVIF: AvifCodec = AvifCodec;
static TIFF: TiffCodec = TiffCodec;
static BMP: BmpCodec = BmpCodec;
static GIF: GifCodec = GifCodec;
static ICO: IcoCodec = IcoCodec;

/// Resolve a format token to its registered codec.
///
/// The token is parsed exactly (case-sensitive), normalized to its family's
/// canonical representative, and looked up in the static registry. An
/// unknown or unregistered token is always a hard
/// [`CodecError::UnsupportedFormat`] naming the original input; there is
/// no fallback codec.
pub fn resolve(format: &str) -> Result<&'static dyn ImageCodec, CodecError> {
    let codec = SupportedFormat::from_token(format)
        .and_then(|parsed| registered(parsed.normalize()))
        .ok_or_else(|| CodecError::UnsupportedFormat(format.to_owned()))?;

    debug!("resolved {:?} to the {} codec", format, codec.format());
    Ok(codec)
}

/// Canonical format → codec instance.
fn registered(format: SupportedFormat) -> Option<&'static dyn ImageCodec> {
    match format {
        SupportedFormat::Png => Some(&PNG),
        SupportedFormat::Jpeg => Some(&JPEG),
        SupportedFormat::Webp => Some(&WEBP),
        SupportedFormat::Avif => Some(&AVIF),
        SupportedFormat::Tiff => Some(&TIFF),
        SupportedFormat::Bmp => Some(&BMP),
        SupportedFormat::Gif => Some(&GIF),
        SupportedFormat::Ico => Some(&ICO),
        _ => None,
    }
}
