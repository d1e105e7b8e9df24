use kurbo::Rect;

use crate::foundation::core::Canvas;
use crate::recap::model::{MAX_RECAP_PHOTOS, RecapVariant};

/// Resolved slot rectangles for one recap render.
///
/// All rectangles are in canvas pixel coordinates. Optional slots are absent
/// for variants that do not include them.
#[derive(Clone, Debug, PartialEq)]
pub struct RecapLayout {
    /// Outer margin used by all slots.
    pub margin: f64,
    /// Header block (title, subtitle, stamp).
    pub header: Rect,
    /// Route-map slot.
    pub map: Rect,
    /// Stats panel.
    pub stats: Rect,
    /// Notes panel, when the variant shows one.
    pub notes: Option<Rect>,
    /// Photo-grid slot, when the variant shows one.
    pub photos: Option<Rect>,
    /// Type scale for this canvas.
    pub type_scale: TypeScale,
}

/// Font sizes derived from the canvas width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TypeScale {
    /// Header title size in pixels.
    pub title: f32,
    /// Header subtitle and stamp size.
    pub subtitle: f32,
    /// Stats label size.
    pub label: f32,
    /// Stats value size.
    pub value: f32,
    /// Notes body size.
    pub body: f32,
}

impl TypeScale {
    fn for_width(w: f64) -> Self {
        Self {
            title: (w * 0.048) as f32,
            subtitle: (w * 0.026) as f32,
            label: (w * 0.020) as f32,
            value: (w * 0.034) as f32,
            body: (w * 0.026) as f32,
        }
    }
}

impl RecapLayout {
    /// Solve slot rectangles for `canvas` under `variant`.
    pub fn solve(canvas: Canvas, variant: RecapVariant) -> Self {
        let w = f64::from(canvas.width);
        let h = f64::from(canvas.height);
        let margin = (w * 0.055).round();
        let gap = (margin * 0.5).round();
        let inner_w = w - margin * 2.0;
        // Landscape canvases scale type to height so the card text column fits.
        let type_scale = TypeScale::for_width(w.min(h * 1.2));

        match variant {
            RecapVariant::Story => {
                let header_h = (h * 0.105).round();
                let map_h = (h * 0.30).round();
                let stats_h = (h * 0.095).round();
                let notes_h = (h * 0.105).round();

                let header = Rect::new(margin, margin, w - margin, margin + header_h);
                let map = Rect::new(margin, header.y1 + gap, w - margin, header.y1 + gap + map_h);
                let stats = Rect::new(margin, map.y1 + gap, w - margin, map.y1 + gap + stats_h);
                let notes = Rect::new(margin, stats.y1 + gap, w - margin, stats.y1 + gap + notes_h);
                let photos = Rect::new(margin, notes.y1 + gap, w - margin, h - margin);

                Self {
                    margin,
                    header,
                    map,
                    stats,
                    notes: Some(notes),
                    photos: Some(photos),
                    type_scale,
                }
            }
            RecapVariant::Card => {
                // Landscape card: text column on the left, map filling the right.
                let col_w = (inner_w * 0.48).round();
                let header_h = (h * 0.38).round();

                let header = Rect::new(margin, margin, margin + col_w, margin + header_h);
                let stats = Rect::new(margin, header.y1 + gap, margin + col_w, h - margin);
                let map = Rect::new(header.x1 + gap, margin, w - margin, h - margin);

                Self {
                    margin,
                    header,
                    map,
                    stats,
                    notes: None,
                    photos: None,
                    type_scale,
                }
            }
        }
    }
}

/// Column/row shape of the photo grid for a given photo count.
///
/// Counts above [`MAX_RECAP_PHOTOS`] are capped; the grid never exceeds 3x2.
pub fn grid_dims(photo_count: usize) -> (usize, usize) {
    match photo_count.min(MAX_RECAP_PHOTOS) {
        0 => (0, 0),
        1 => (1, 1),
        2 => (2, 1),
        3 => (3, 1),
        4 => (2, 2),
        _ => (3, 2),
    }
}

/// Compute the cell rectangles of the photo grid inside `slot`.
///
/// Returns `cols * rows` cells in row-major order; callers pair them with
/// available photos and render the remainder as placeholders.
pub fn photo_cells(slot: Rect, photo_count: usize, gap: f64) -> Vec<Rect> {
    let (cols, rows) = grid_dims(photo_count);
    if cols == 0 {
        return Vec::new();
    }

    let cell_w = (slot.width() - gap * (cols as f64 - 1.0)) / cols as f64;
    let cell_h = (slot.height() - gap * (rows as f64 - 1.0)) / rows as f64;

    let mut cells = Vec::with_capacity(cols * rows);
    for row in 0..rows {
        for col in 0..cols {
            let x0 = slot.x0 + col as f64 * (cell_w + gap);
            let y0 = slot.y0 + row as f64 * (cell_h + gap);
            cells.push(Rect::new(x0, y0, x0 + cell_w, y0 + cell_h));
        }
    }
    cells
}

/// Source crop rectangle for cover-fit cropping: scale the source to fill
/// `dst_w x dst_h` preserving aspect ratio, cropping the overflow centered.
///
/// The returned rectangle always lies within the source bounds.
pub fn cover_crop(src_w: u32, src_h: u32, dst_w: f64, dst_h: f64) -> Rect {
    let sw = f64::from(src_w.max(1));
    let sh = f64::from(src_h.max(1));
    let dw = dst_w.max(1.0);
    let dh = dst_h.max(1.0);

    let scale = (dw / sw).max(dh / sh);
    let crop_w = (dw / scale).min(sw);
    let crop_h = (dh / scale).min(sh);
    let x0 = ((sw - crop_w) * 0.5).max(0.0);
    let y0 = ((sh - crop_h) * 0.5).max(0.0);

    Rect::new(x0, y0, x0 + crop_w, y0 + crop_h)
}

#[cfg(test)]
#[path = "../../tests/unit/recap/layout.rs"]
mod tests;
