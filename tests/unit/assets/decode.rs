use super::*;

fn png_bytes(pixels: &[[u8; 4]], width: u32, height: u32) -> Vec<u8> {
    let raw: Vec<u8> = pixels.iter().flatten().copied().collect();
    let img = image::RgbaImage::from_raw(width, height, raw).unwrap();
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}

#[test]
fn decode_produces_premultiplied_pixels() {
    let bytes = png_bytes(&[[200, 100, 50, 128], [255, 255, 255, 255]], 2, 1);
    let prepared = decode_image(&bytes).unwrap();
    assert_eq!((prepared.width, prepared.height), (2, 1));

    let px = &prepared.rgba8_premul;
    // (c * a + 127) / 255 for a = 128.
    assert_eq!(&px[0..4], &[100, 50, 25, 128]);
    // Opaque pixels pass through unchanged.
    assert_eq!(&px[4..8], &[255, 255, 255, 255]);
}

#[test]
fn fully_transparent_pixels_zero_their_color() {
    let bytes = png_bytes(&[[200, 100, 50, 0]], 1, 1);
    let prepared = decode_image(&bytes).unwrap();
    assert_eq!(prepared.rgba8_premul.as_slice(), &[0, 0, 0, 0]);
}

#[test]
fn garbage_bytes_fail_to_decode() {
    assert!(decode_image(b"definitely not an image").is_err());
}
