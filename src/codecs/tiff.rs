//! TIFF codec adapter.

use std::io::Cursor;

use tiff::encoder::{colortype, compression, TiffEncoder};

use crate::codec::ImageCodec;
use crate::error::CodecError;
use crate::format::SupportedFormat;
use crate::options::{keys, OptionBag};
use crate::pixel::{ImgRef, Rgba};

/// Compression schemes accepted as the `compressionType` option.
///
/// 0 and 1 are the original API's constants (uncompressed, deflate); 2 and
/// 3 expose the delegated encoder's remaining schemes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TiffCompression {
    Uncompressed,
    Deflate,
    Lzw,
    Packbits,
}

impl TiffCompression {
    fn from_option(value: i64) -> Option<Self> {
        match value {
            0 => Some(TiffCompression::Uncompressed),
            1 => Some(TiffCompression::Deflate),
            2 => Some(TiffCompression::Lzw),
            3 => Some(TiffCompression::Packbits),
            _ => None,
        }
    }
}

/// Options declared by the TIFF codec.
struct TiffOptions {
    compression: TiffCompression,
}

impl TiffOptions {
    fn from_bag(bag: &OptionBag) -> Result<Self, CodecError> {
        let compression = match bag.get_int(keys::COMPRESSION_TYPE)? {
            None => TiffCompression::Uncompressed,
            Some(value) => TiffCompression::from_option(value).ok_or_else(|| {
                CodecError::InvalidArgument {
                    key: keys::COMPRESSION_TYPE,
                    detail: format!("{value} is not a recognized compression type"),
                }
            })?,
        };

        Ok(Self { compression })
    }
}

/// Encodes RGBA8 with a selectable compression scheme.
pub struct TiffCodec;

impl ImageCodec for TiffCodec {
    fn format(&self) -> SupportedFormat {
        SupportedFormat::Tiff
    }

    fn encode(
        &self,
        img: ImgRef<'_, Rgba<u8>>,
        options: &OptionBag,
    ) -> Result<Vec<u8>, CodecError> {
        let opts = TiffOptions::from_bag(options)?;

        let (buf, width, height) = img.to_contiguous_buf();
        let bytes: &[u8] = bytemuck::cast_slice(buf.as_ref());
        let width = width as u32;
        let height = height as u32;

        let mut out = Cursor::new(Vec::new());
        let mut encoder = TiffEncoder::new(&mut out)
            .map_err(|e| CodecError::encode_failure(SupportedFormat::Tiff, e))?;

        let write_result = match opts.compression {
            TiffCompression::Uncompressed => encoder
                .write_image_with_compression::<colortype::RGBA8, _>(
                    width,
                    height,
                    compression::Uncompressed,
                    bytes,
                ),
            TiffCompression::Deflate => encoder
                .write_image_with_compression::<colortype::RGBA8, _>(
                    width,
                    height,
                    compression::Deflate::default(),
                    bytes,
                ),
            TiffCompression::Lzw => encoder.write_image_with_compression::<colortype::RGBA8, _>(
                width,
                height,
                compression::Lzw,
                bytes,
            ),
            TiffCompression::Packbits => encoder
                .write_image_with_compression::<colortype::RGBA8, _>(
                    width,
                    height,
                    compression::Packbits,
                    bytes,
                ),
        };
        write_result.map_err(|e| CodecError::encode_failure(SupportedFormat::Tiff, e))?;

        Ok(out.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode_bytes;
    use crate::pixel::ImgVec;

    fn stripes(width: usize, height: usize) -> ImgVec<Rgba<u8>> {
        let pixels = (0..width * height)
            .map(|i| Rgba {
                r: ((i / width) * 20) as u8,
                g: 100,
                b: 50,
                a: 255,
            })
            .collect();
        ImgVec::new(pixels, width, height)
    }

    #[test]
    fn encodes_little_endian_tiff() {
        let img = stripes(6, 4);
        let data = TiffCodec.encode(img.as_ref(), &OptionBag::new()).unwrap();
        assert_eq!(&data[..2], b"II");
    }

    #[test]
    fn every_compression_scheme_round_trips() {
        let img = stripes(6, 4);
        for scheme in [0, 1, 2, 3] {
            let bag = OptionBag::new().with(keys::COMPRESSION_TYPE, scheme);
            let data = TiffCodec.encode(img.as_ref(), &bag).unwrap();

            let decoded = decode_bytes(&data).unwrap();
            assert_eq!(decoded.format, SupportedFormat::Tiff);
            assert_eq!(decoded.pixels.width(), 6);
            assert_eq!(decoded.pixels.height(), 4);
        }
    }

    #[test]
    fn unknown_compression_type_is_rejected() {
        let img = stripes(2, 2);
        let bag = OptionBag::new().with(keys::COMPRESSION_TYPE, 42);
        let err = TiffCodec.encode(img.as_ref(), &bag).unwrap_err();
        assert_eq!(err.code(), "InvalidArgument");
    }

    #[test]
    fn compression_type_mismatch_is_rejected() {
        let img = stripes(2, 2);
        let bag = OptionBag::new().with(keys::COMPRESSION_TYPE, "lzw");
        assert!(TiffCodec.encode(img.as_ref(), &bag).is_err());
    }
}
