use crate::foundation::error::{PawtrailError, PawtrailResult};

/// RGBA8 brush color used by Parley text layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

/// Stateful helper for building Parley text layouts from raw font bytes.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Construct a new layout engine with fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Shape and lay out plain text using provided font bytes and styling.
    pub fn layout_plain(
        &mut self,
        text: &str,
        font_bytes: &[u8],
        size_px: f32,
        brush: TextBrushRgba8,
        max_width_px: Option<f32>,
    ) -> PawtrailResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(PawtrailError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            PawtrailError::validation("no font families registered from font bytes")
        })?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| PawtrailError::validation("registered font family has no name"))?
            .to_string();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        if let Some(w) = max_width_px {
            layout.break_all_lines(Some(w));
            layout.align(
                Some(w),
                parley::Alignment::Start,
                parley::AlignmentOptions::default(),
            );
        } else {
            layout.break_all_lines(None);
        }

        Ok(layout)
    }

    /// Lay out `text` wrapped to `max_width_px`, truncating at a word boundary
    /// with a trailing ellipsis so the result fits within `max_lines`.
    pub fn layout_clamped(
        &mut self,
        text: &str,
        font_bytes: &[u8],
        size_px: f32,
        brush: TextBrushRgba8,
        max_width_px: f32,
        max_lines: usize,
    ) -> PawtrailResult<parley::Layout<TextBrushRgba8>> {
        let full = self.layout_plain(text, font_bytes, size_px, brush, Some(max_width_px))?;
        if max_lines == 0 || line_count(&full) <= max_lines {
            return Ok(full);
        }

        // Retry from progressively earlier word boundaries until the capped
        // text plus an ellipsis fits.
        for cut in word_boundaries_desc(text) {
            let candidate = format!("{}…", text[..cut].trim_end());
            let layout =
                self.layout_plain(&candidate, font_bytes, size_px, brush, Some(max_width_px))?;
            if line_count(&layout) <= max_lines {
                return Ok(layout);
            }
        }

        // No word boundary fits (single long token): binary-search a char cut.
        let chars: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        let mut lo = 0usize;
        let mut hi = chars.len();
        let mut best = self.layout_plain("…", font_bytes, size_px, brush, Some(max_width_px))?;
        while lo < hi {
            let mid = (lo + hi).div_ceil(2);
            let cut = chars.get(mid).copied().unwrap_or(text.len());
            let candidate = format!("{}…", &text[..cut]);
            let layout =
                self.layout_plain(&candidate, font_bytes, size_px, brush, Some(max_width_px))?;
            if line_count(&layout) <= max_lines {
                best = layout;
                lo = mid;
            } else {
                hi = mid - 1;
            }
        }
        Ok(best)
    }
}

/// Number of broken lines in a layout.
pub fn line_count(layout: &parley::Layout<TextBrushRgba8>) -> usize {
    layout.lines().count()
}

/// Measured width/height of a broken layout, from per-line metrics.
pub fn measure(layout: &parley::Layout<TextBrushRgba8>) -> (f64, f64) {
    let mut w = 0.0f64;
    let mut h = 0.0f64;
    for line in layout.lines() {
        let m = line.metrics();
        w = w.max(f64::from(m.advance));
        h += f64::from(m.ascent + m.descent + m.leading);
    }
    (w, h)
}

/// Byte offsets of word boundaries in `text`, longest prefix first.
fn word_boundaries_desc(text: &str) -> Vec<usize> {
    let mut cuts: Vec<usize> = text
        .char_indices()
        .filter(|(i, c)| *i > 0 && c.is_whitespace())
        .map(|(i, _)| i)
        .collect();
    cuts.dedup();
    cuts.reverse();
    cuts
}

#[cfg(test)]
#[path = "../../tests/unit/recap/text.rs"]
mod tests;
