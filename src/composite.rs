//! Alpha compositing onto an opaque background.
//!
//! Formats without an alpha channel (and callers that explicitly request a
//! background fill) need transparency flattened before encoding. The blend
//! here is per-pixel independent and purely integer arithmetic, so the
//! output is bit-exact for fixed inputs on every platform.

use crate::pixel::{ImgRef, ImgVec, Rgba};

/// Whether any pixel is less than fully opaque.
pub fn has_transparency(img: ImgRef<'_, Rgba<u8>>) -> bool {
    img.pixels().any(|px| px.a < 255)
}

/// Flatten transparency onto `background`.
///
/// Returns `None` when every pixel is already fully opaque; the caller
/// keeps the source image and nothing is allocated. A zero-size image has
/// no transparent pixels, so it takes the same fast path.
///
/// Otherwise a brand-new image of identical bounds is produced: fully
/// opaque pixels are copied verbatim, fully transparent pixels become the
/// background, and partially transparent pixels are blended per channel as
/// `(src * a + bg * (255 - a) + 127) / 255`, the normalized-space linear
/// blend rounded to nearest. Ties cannot occur with the odd 255
/// denominator, so the effective rule is round-half-up. Output alpha is
/// forced to 255.
pub fn apply_background(
    img: ImgRef<'_, Rgba<u8>>,
    background: Rgba<u8>,
) -> Option<ImgVec<Rgba<u8>>> {
    if !has_transparency(img) {
        return None;
    }

    let opaque_background = Rgba {
        a: 255,
        ..background
    };

    let mut out = Vec::with_capacity(img.width() * img.height());
    for px in img.pixels() {
        out.push(match px.a {
            255 => px,
            0 => opaque_background,
            alpha => blend(px, opaque_background, alpha),
        });
    }

    Some(ImgVec::new(out, img.width(), img.height()))
}

fn blend(src: Rgba<u8>, bg: Rgba<u8>, alpha: u8) -> Rgba<u8> {
    let a = u32::from(alpha);
    let inv = 255 - a;
    let channel = |s: u8, b: u8| (((u32::from(s) * a + u32::from(b) * inv) + 127) / 255) as u8;

    Rgba {
        r: channel(src.r, bg.r),
        g: channel(src.g, bg.g),
        b: channel(src.b, bg.b),
        a: 255,
    }
}
