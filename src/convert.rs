//! One-shot byte-to-byte conversion.

use log::debug;

use crate::codec::ImageCodec;
use crate::error::CodecError;
use crate::factory;
use crate::options::OptionBag;

/// Decode `data`, then re-encode it as `target` using `options`.
///
/// The target codec is resolved before anything is decoded, so an unknown
/// target fails fast with no decoding work done.
pub fn convert(data: &[u8], target: &str, options: &OptionBag) -> Result<Vec<u8>, CodecError> {
    let codec = factory::resolve(target)?;
    let decoded = codec.decode(data, options)?;

    debug!(
        "converting {}x{} {} image to {}",
        decoded.pixels.width(),
        decoded.pixels.height(),
        decoded.format,
        codec.format()
    );

    codec.encode(decoded.pixels.as_ref(), options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode_bytes;
    use crate::format::SupportedFormat;
    use crate::options::keys;
    use crate::pixel::{ImgVec, Rgba};

    fn png_fixture() -> Vec<u8> {
        let img = ImgVec::new(
            vec![Rgba { r: 12, g: 200, b: 90, a: 255 }; 24],
            6,
            4,
        );
        crate::codecs::PngCodec
            .encode(img.as_ref(), &OptionBag::new())
            .unwrap()
    }

    #[test]
    fn png_to_jpeg() {
        let jpeg = convert(&png_fixture(), "jpeg", &OptionBag::new()).unwrap();
        let decoded = decode_bytes(&jpeg).unwrap();
        assert_eq!(decoded.format, SupportedFormat::Jpeg);
        assert_eq!(decoded.pixels.width(), 6);
        assert_eq!(decoded.pixels.height(), 4);
    }

    #[test]
    fn unknown_target_fails_before_decoding() {
        // The data is garbage; resolution fails first, so the error is
        // about the format, not the bytes.
        let err = convert(b"garbage", "wat", &OptionBag::new()).unwrap_err();
        assert_eq!(err.code(), "UnsupportedFormat");
    }

    #[test]
    fn option_mismatch_aborts_without_output() {
        let bag = OptionBag::new().with(keys::QUALITY, "high");
        let err = convert(&png_fixture(), "jpg", &bag).unwrap_err();
        assert_eq!(err.code(), "InvalidArgument");
    }
}
