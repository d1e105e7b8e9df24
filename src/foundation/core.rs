use crate::foundation::error::{PawtrailError, PawtrailResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas; the CPU raster path addresses pixels with
    /// `u16` coordinates, so both dimensions must fit.
    pub fn new(width: u32, height: u32) -> PawtrailResult<Self> {
        if width == 0 || height == 0 {
            return Err(PawtrailError::validation("canvas width/height must be > 0"));
        }
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(PawtrailError::validation("canvas dimensions exceed u16"));
        }
        Ok(Self { width, height })
    }

    /// Full canvas rectangle with origin at (0, 0).
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque color from RGB components.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// A rendered frame as RGBA8 pixels.
///
/// Frames produced by the compositor are **premultiplied alpha**; the flag is
/// included to make this explicit at API boundaries. Recap canvases are fully
/// opaque, so their premultiplied bytes equal straight-alpha bytes.
#[derive(Clone, Debug)]
pub struct FrameRgba {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
