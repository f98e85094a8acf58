//! GIF codec adapter.
//!
//! GIF frames are palette-indexed, so encoding quantizes the RGBA input
//! down to at most 256 colors before handing the frame to the delegated
//! `gif` encoder. Quantization is delegated to `color_quant`'s NeuQuant
//! kernel; the drawer option picks how pixels are mapped onto the palette.

use std::borrow::Cow;

use color_quant::NeuQuant;

use crate::codec::ImageCodec;
use crate::error::CodecError;
use crate::format::SupportedFormat;
use crate::options::{keys, OptionBag};
use crate::pixel::{self, ImgRef, Rgba};

const DEFAULT_NUM_COLORS: i64 = 256;

// NeuQuant sampling factor: 1 is exhaustive, 30 is fastest. 10 is the
// kernel's documented quality/speed sweet spot.
const NEUQUANT_SAMPLE_FACTOR: i32 = 10;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Quantizer {
    NeuQuant,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Drawer {
    FloydSteinberg,
    Nearest,
}

/// Options declared by the GIF codec.
struct GifOptions {
    num_colors: usize,
    quantizer: Quantizer,
    drawer: Drawer,
}

impl GifOptions {
    fn from_bag(bag: &OptionBag) -> Result<Self, CodecError> {
        let num_colors = match bag.get_int(keys::NUM_COLORS)?.unwrap_or(DEFAULT_NUM_COLORS) {
            n @ 1..=256 => n as usize,
            n => {
                return Err(CodecError::InvalidArgument {
                    key: keys::NUM_COLORS,
                    detail: format!("{n} is outside 1..=256"),
                });
            }
        };

        let quantizer = match bag.get_str(keys::QUANTIZER)? {
            None | Some("neuquant") => Quantizer::NeuQuant,
            Some(other) => {
                return Err(CodecError::InvalidArgument {
                    key: keys::QUANTIZER,
                    detail: format!("{other:?} is not a recognized quantizer"),
                });
            }
        };

        let drawer = match bag.get_str(keys::DRAWER)? {
            None | Some("floyd-steinberg") => Drawer::FloydSteinberg,
            Some("nearest") => Drawer::Nearest,
            Some(other) => {
                return Err(CodecError::InvalidArgument {
                    key: keys::DRAWER,
                    detail: format!("{other:?} is not a recognized drawer"),
                });
            }
        };

        Ok(Self {
            num_colors,
            quantizer,
            drawer,
        })
    }
}

/// Encodes a single palette-quantized frame.
pub struct GifCodec;

impl ImageCodec for GifCodec {
    fn format(&self) -> SupportedFormat {
        SupportedFormat::Gif
    }

    fn encode(
        &self,
        img: ImgRef<'_, Rgba<u8>>,
        options: &OptionBag,
    ) -> Result<Vec<u8>, CodecError> {
        let opts = GifOptions::from_bag(options)?;

        if img.width() == 0 || img.height() == 0 {
            return Err(CodecError::encode_failure(
                SupportedFormat::Gif,
                "image has no pixels",
            ));
        }
        let width = dimension_u16(img.width())?;
        let height = dimension_u16(img.height())?;

        let mut frame_pixels = pixel::to_rgba_image(img);
        let quantized = match opts.quantizer {
            Quantizer::NeuQuant => NeuQuant::new(
                NEUQUANT_SAMPLE_FACTOR,
                opts.num_colors,
                frame_pixels.as_raw(),
            ),
        };

        if opts.drawer == Drawer::FloydSteinberg {
            image::imageops::dither(&mut frame_pixels, &quantized);
        }
        let indices = image::imageops::index_colors(&frame_pixels, &quantized);

        let palette: Vec<u8> = quantized
            .color_map_rgba()
            .chunks_exact(4)
            .flat_map(|entry| [entry[0], entry[1], entry[2]])
            .collect();

        let mut out = Vec::new();
        {
            let mut encoder = gif::Encoder::new(&mut out, width, height, &[])
                .map_err(|e| CodecError::encode_failure(SupportedFormat::Gif, e))?;

            let mut frame = gif::Frame::default();
            frame.width = width;
            frame.height = height;
            frame.buffer = Cow::Owned(indices.into_raw());
            frame.palette = Some(palette);

            encoder
                .write_frame(&frame)
                .map_err(|e| CodecError::encode_failure(SupportedFormat::Gif, e))?;
        }

        Ok(out)
    }
}

fn dimension_u16(value: usize) -> Result<u16, CodecError> {
    u16::try_from(value).map_err(|_| {
        CodecError::encode_failure(
            SupportedFormat::Gif,
            format!("dimension {value} exceeds the GIF limit of 65535"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode_bytes;
    use crate::pixel::ImgVec;

    fn two_tone(width: usize, height: usize) -> ImgVec<Rgba<u8>> {
        let pixels = (0..width * height)
            .map(|i| {
                if i % 2 == 0 {
                    Rgba { r: 200, g: 40, b: 40, a: 255 }
                } else {
                    Rgba { r: 40, g: 40, b: 200, a: 255 }
                }
            })
            .collect();
        ImgVec::new(pixels, width, height)
    }

    #[test]
    fn encodes_gif89a() {
        let img = two_tone(8, 8);
        let data = GifCodec.encode(img.as_ref(), &OptionBag::new()).unwrap();
        assert_eq!(&data[..6], b"GIF89a");
    }

    #[test]
    fn round_trips_through_the_shared_decoder() {
        let img = two_tone(10, 6);
        let data = GifCodec.encode(img.as_ref(), &OptionBag::new()).unwrap();

        let decoded = decode_bytes(&data).unwrap();
        assert_eq!(decoded.format, SupportedFormat::Gif);
        assert_eq!(decoded.pixels.width(), 10);
        assert_eq!(decoded.pixels.height(), 6);
    }

    #[test]
    fn num_colors_out_of_range_is_rejected() {
        let img = two_tone(4, 4);
        let bag = OptionBag::new().with(keys::NUM_COLORS, 512);
        let err = GifCodec.encode(img.as_ref(), &bag).unwrap_err();
        assert_eq!(err.code(), "InvalidArgument");
    }

    #[test]
    fn nearest_drawer_is_accepted() {
        let img = two_tone(4, 4);
        let bag = OptionBag::new()
            .with(keys::NUM_COLORS, 16)
            .with(keys::DRAWER, "nearest");
        assert!(GifCodec.encode(img.as_ref(), &bag).is_ok());
    }

    #[test]
    fn unknown_quantizer_is_rejected() {
        let img = two_tone(4, 4);
        let bag = OptionBag::new().with(keys::QUANTIZER, "median-cut");
        let err = GifCodec.encode(img.as_ref(), &bag).unwrap_err();
        assert_eq!(err.code(), "InvalidArgument");
    }

    #[test]
    fn drawer_type_mismatch_is_rejected() {
        let img = two_tone(4, 4);
        let bag = OptionBag::new().with(keys::DRAWER, true);
        assert!(GifCodec.encode(img.as_ref(), &bag).is_err());
    }
}
