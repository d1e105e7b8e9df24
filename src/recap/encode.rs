use std::io::Cursor;

use anyhow::Context;

use crate::foundation::core::FrameRgba;
use crate::foundation::error::PawtrailResult;

/// Encode a rendered frame as PNG bytes.
///
/// This is the single step of the recap pipeline whose failure fails the
/// whole render: slot degradation happens upstream, but an unencodable frame
/// has nothing left to degrade to.
pub fn encode_png(frame: &FrameRgba) -> PawtrailResult<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    image::write_buffer_with_format(
        &mut out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .context("encode recap png")?;
    Ok(out.into_inner())
}

#[cfg(test)]
#[path = "../../tests/unit/recap/encode.rs"]
mod tests;
