//! AVIF codec adapter.
//!
//! Encoding is not wired to a delegated AVIF encoder. The codec still
//! registers so that resolution succeeds and the failure is a typed
//! operation error rather than an unknown format.

use crate::codec::ImageCodec;
use crate::error::CodecError;
use crate::format::SupportedFormat;
use crate::options::OptionBag;
use crate::pixel::{ImgRef, Rgba};

pub struct AvifCodec;

impl ImageCodec for AvifCodec {
    fn format(&self) -> SupportedFormat {
        SupportedFormat::Avif
    }

    fn encode(
        &self,
        _img: ImgRef<'_, Rgba<u8>>,
        _options: &OptionBag,
    ) -> Result<Vec<u8>, CodecError> {
        Err(CodecError::UnsupportedOperation {
            format: SupportedFormat::Avif,
            detail: "encoding",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::ImgVec;

    #[test]
    fn encode_is_a_typed_unsupported_operation() {
        let img = ImgVec::new(vec![Rgba { r: 0, g: 0, b: 0, a: 255 }; 4], 2, 2);
        let err = AvifCodec.encode(img.as_ref(), &OptionBag::new()).unwrap_err();

        assert_eq!(err.code(), "UnsupportedOperation");
        assert!(err.to_string().contains("avif"));
    }
}
