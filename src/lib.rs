//! # imagecast
//!
//! Unified image codec abstraction for converting raster images between
//! encoded byte formats: PNG, JPEG (and its aliases), WebP, GIF, TIFF, BMP,
//! and ICO. Bit-level encoding and decoding is delegated to external codec
//! libraries; this crate owns format dispatch, option validation, alpha
//! compositing, and icon resizing.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use imagecast::{keys, resolve, ImageCodec, OptionBag};
//!
//! let data: &[u8] = &[]; // your encoded image bytes
//!
//! let codec = resolve("jpeg")?;
//! let decoded = codec.decode(data, &OptionBag::new())?;
//!
//! let options = OptionBag::new()
//!     .with(keys::QUALITY, 90)
//!     .with(keys::BACKGROUND_COLOR, "#FFFFFF");
//! let jpeg = codec.encode(decoded.pixels.as_ref(), &options)?;
//! # let _ = jpeg;
//! # Ok::<(), imagecast::CodecError>(())
//! ```
//!
//! ## Concurrency
//!
//! Every operation runs synchronously on the caller's thread. The codec
//! registry is a set of immutable `&'static` instances, option bags and
//! images are call-local, and no state survives a call, so concurrent
//! callers need no synchronization.

#![forbid(unsafe_code)]

pub mod codec;
pub mod codecs;
pub mod color;
pub mod composite;
pub mod convert;
pub mod error;
pub mod factory;
pub mod format;
pub mod options;
pub mod pixel;
pub mod resample;

pub use codec::{decode_bytes, Decoded, ImageCodec};
pub use color::parse_hex_color;
pub use composite::{apply_background, has_transparency};
pub use convert::convert;
pub use error::CodecError;
pub use factory::resolve;
pub use format::{SupportedFormat, ALL_FORMATS};
pub use options::{keys, OptionBag, OptionValue};
pub use resample::{resize_square, ResizeFilter, DEFAULT_ICON_SIZE, VALID_ICON_SIZES};
