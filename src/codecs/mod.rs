//! Codec adapters for format-specific implementations.
//!
//! Each module provides a thin strategy between the unified [`ImageCodec`]
//! contract and the delegated codec library for one format family.
//!
//! [`ImageCodec`]: crate::codec::ImageCodec

pub(crate) mod avif;
pub(crate) mod bmp;
pub(crate) mod gif;
pub(crate) mod ico;
pub(crate) mod jpeg;
pub(crate) mod png;
pub(crate) mod tiff;
pub(crate) mod webp;

pub use avif::AvifCodec;
pub use bmp::BmpCodec;
pub use gif::GifCodec;
pub use ico::IcoCodec;
pub use jpeg::JpegCodec;
pub use png::PngCodec;
pub use tiff::TiffCodec;
pub use webp::WebpCodec;
