//! Cross-format conversion round trips through the public surface.

use imagecast::{
    convert, decode_bytes, keys, resolve, CodecError, ImageCodec, OptionBag, SupportedFormat,
};
use imgref::ImgVec;
use rgb::Rgba;

/// An opaque test card with enough color variety to survive quantization.
fn test_card(width: usize, height: usize) -> ImgVec<Rgba<u8>> {
    let pixels = (0..width * height)
        .map(|i| {
            let x = i % width;
            let y = i / width;
            Rgba {
                r: ((x * 255) / width.max(1)) as u8,
                g: ((y * 255) / height.max(1)) as u8,
                b: if (x + y) % 2 == 0 { 255 } else { 0 },
                a: 255,
            }
        })
        .collect();
    ImgVec::new(pixels, width, height)
}

#[test]
fn encode_decode_preserves_bounds_for_every_symmetric_format() {
    let img = test_card(17, 9);

    for token in ["png", "jpeg", "webp", "bmp", "tiff", "gif"] {
        let codec = resolve(token).unwrap();
        let data = codec.encode(img.as_ref(), &OptionBag::new()).unwrap();

        let decoded = codec.decode(&data, &OptionBag::new()).unwrap();
        assert_eq!(
            (decoded.pixels.width(), decoded.pixels.height()),
            (17, 9),
            "bounds changed for {token}"
        );
        assert_eq!(decoded.format, codec.format());
    }
}

#[test]
fn ico_round_trip_yields_the_requested_square() {
    let img = test_card(40, 10);
    let codec = resolve("ico").unwrap();

    let bag = OptionBag::new().with(keys::DIMENSION, 64);
    let data = codec.encode(img.as_ref(), &bag).unwrap();

    let decoded = decode_bytes(&data).unwrap();
    assert_eq!(decoded.format, SupportedFormat::Ico);
    assert_eq!((decoded.pixels.width(), decoded.pixels.height()), (64, 64));
}

#[test]
fn lossless_formats_preserve_pixels_exactly() {
    let img = test_card(8, 8);

    for token in ["png", "bmp", "tiff", "webp"] {
        let codec = resolve(token).unwrap();
        let data = codec.encode(img.as_ref(), &OptionBag::new()).unwrap();
        let decoded = codec.decode(&data, &OptionBag::new()).unwrap();
        assert_eq!(decoded.pixels.buf(), img.buf(), "pixels changed for {token}");
    }
}

#[test]
fn convert_between_formats_via_the_one_shot_surface() {
    let png = {
        let codec = resolve("png").unwrap();
        codec.encode(test_card(12, 5).as_ref(), &OptionBag::new()).unwrap()
    };

    let webp = convert(&png, "webp", &OptionBag::new()).unwrap();
    let decoded = decode_bytes(&webp).unwrap();
    assert_eq!(decoded.format, SupportedFormat::Webp);
    assert_eq!((decoded.pixels.width(), decoded.pixels.height()), (12, 5));
}

#[test]
fn avif_encoding_is_a_typed_failure() {
    let codec = resolve("avif").unwrap();
    let err = codec
        .encode(test_card(4, 4).as_ref(), &OptionBag::new())
        .unwrap_err();
    assert!(matches!(err, CodecError::UnsupportedOperation { .. }));
}

#[test]
fn option_type_mismatch_aborts_every_affected_codec() {
    let img = test_card(4, 4);
    let cases = [
        ("jpeg", keys::QUALITY),
        ("png", keys::COMPRESSION_LEVEL),
        ("tiff", keys::COMPRESSION_TYPE),
        ("gif", keys::NUM_COLORS),
    ];

    for (token, key) in cases {
        let codec = resolve(token).unwrap();
        let bag = OptionBag::new().with(key, "wrong-type");
        let err = codec.encode(img.as_ref(), &bag).unwrap_err();
        assert_eq!(err.code(), "InvalidArgument", "codec {token}");
    }
}
