//! Background color parsing.

use crate::error::CodecError;
use crate::pixel::Rgba;

/// Opaque white, the documented default background.
pub const WHITE: Rgba<u8> = Rgba {
    r: 255,
    g: 255,
    b: 255,
    a: 255,
};

/// Parse an `RRGGBB` hex color with an optional leading `#`.
///
/// An empty string is not an error: it yields the default, opaque white.
/// Anything other than exactly six hex digits fails with
/// [`CodecError::InvalidColorSpec`]. The parsed color is always fully
/// opaque.
pub fn parse_hex_color(spec: &str) -> Result<Rgba<u8>, CodecError> {
    if spec.is_empty() {
        return Ok(WHITE);
    }

    let hex = spec.strip_prefix('#').unwrap_or(spec);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CodecError::InvalidColorSpec {
            spec: spec.to_owned(),
            detail: "expected exactly 6 hex digits",
        });
    }

    let channel = |at: usize| {
        u8::from_str_radix(&hex[at..at + 2], 16)
            .expect("validated hex digits parse as u8")
    };

    Ok(Rgba {
        r: channel(0),
        g: channel(2),
        b: channel(4),
        a: 255,
    })
}
