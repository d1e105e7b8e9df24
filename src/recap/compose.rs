use kurbo::Rect;

use crate::assets::decode::PreparedImage;
use crate::foundation::core::{FrameRgba, Rgba8};
use crate::foundation::error::{PawtrailError, PawtrailResult};
use crate::recap::assets::RecapAssets;
use crate::recap::layout::{RecapLayout, cover_crop, photo_cells};
use crate::recap::model::{RecapInput, RecapTheme, RecapVariant};
use crate::recap::text::{TextBrushRgba8, TextLayoutEngine, measure};

/// Maximum wrapped lines in the notes panel before ellipsis truncation.
pub const NOTES_MAX_LINES: usize = 4;

// Extra stat entries beyond this are dropped from the panel.
const MAX_STAT_COLUMNS: usize = 4;

/// Render one recap frame.
///
/// All remote resources must already be resolved into `assets`; this function
/// performs no IO. A missing map tile or photo renders as a neutral
/// placeholder in its slot. The only fatal failures are invalid theme input
/// and raster-surface construction.
pub fn render_recap(
    input: &RecapInput,
    assets: &RecapAssets,
    theme: &RecapTheme,
    variant: RecapVariant,
) -> PawtrailResult<FrameRgba> {
    let canvas = theme.canvas;
    let width: u16 = canvas
        .width
        .try_into()
        .map_err(|_| PawtrailError::render("canvas width exceeds u16"))?;
    let height: u16 = canvas
        .height
        .try_into()
        .map_err(|_| PawtrailError::render("canvas height exceeds u16"))?;

    let layout = RecapLayout::solve(canvas, variant);
    let mut engine = TextLayoutEngine::new();
    let font = vello_cpu::peniko::FontData::new(
        vello_cpu::peniko::Blob::from(theme.font.as_ref().clone()),
        0,
    );

    let mut ctx = vello_cpu::RenderContext::new(width, height);

    // Background.
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(color(theme.background));
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(canvas.width),
        f64::from(canvas.height),
    ));

    draw_header(&mut ctx, &mut engine, &font, input, theme, &layout)?;
    draw_map(&mut ctx, assets.map.as_ref(), layout.map, theme)?;
    draw_stats(&mut ctx, &mut engine, &font, input, theme, &layout)?;

    if let Some(notes_rect) = layout.notes
        && !input.notes.trim().is_empty()
    {
        draw_notes(&mut ctx, &mut engine, &font, input, theme, &layout, notes_rect)?;
    }

    if let Some(photos_rect) = layout.photos {
        draw_photo_grid(&mut ctx, assets, theme, &layout, photos_rect)?;
    }

    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(width, height);
    ctx.render_to_pixmap(&mut pixmap);

    Ok(FrameRgba {
        width: canvas.width,
        height: canvas.height,
        data: pixmap.data_as_u8_slice().to_vec(),
        premultiplied: true,
    })
}

fn draw_header(
    ctx: &mut vello_cpu::RenderContext,
    engine: &mut TextLayoutEngine,
    font: &vello_cpu::peniko::FontData,
    input: &RecapInput,
    theme: &RecapTheme,
    layout: &RecapLayout,
) -> PawtrailResult<()> {
    let scale = layout.type_scale;
    let slot = layout.header;
    let max_w = slot.width() as f32;

    let title = engine.layout_clamped(
        &input.title,
        &theme.font,
        scale.title,
        brush(theme.text_primary),
        max_w,
        1,
    )?;
    let (_, title_h) = measure(&title);
    draw_layout(ctx, font, &title, slot.x0, slot.y0);

    let sub_y = slot.y0 + title_h + slot.height() * 0.08;
    let subtitle = engine.layout_plain(
        &input.subtitle,
        &theme.font,
        scale.subtitle,
        brush(theme.text_muted),
        Some(max_w),
    )?;
    draw_layout(ctx, font, &subtitle, slot.x0, sub_y);

    // Stamp sits top-right of the header, right-aligned by measurement.
    let stamp = engine.layout_plain(
        &input.stamp,
        &theme.font,
        scale.subtitle,
        brush(theme.text_muted),
        None,
    )?;
    let (stamp_w, _) = measure(&stamp);
    draw_layout(ctx, font, &stamp, slot.x1 - stamp_w, slot.y0);

    Ok(())
}

fn draw_map(
    ctx: &mut vello_cpu::RenderContext,
    map: Option<&PreparedImage>,
    slot: Rect,
    theme: &RecapTheme,
) -> PawtrailResult<()> {
    match map {
        Some(img) => draw_image_cover(ctx, img, slot, theme.corner_radius),
        None => {
            fill_rounded(ctx, slot, theme.corner_radius, theme.placeholder);
            Ok(())
        }
    }
}

fn draw_stats(
    ctx: &mut vello_cpu::RenderContext,
    engine: &mut TextLayoutEngine,
    font: &vello_cpu::peniko::FontData,
    input: &RecapInput,
    theme: &RecapTheme,
    layout: &RecapLayout,
) -> PawtrailResult<()> {
    let slot = layout.stats;
    fill_rounded(ctx, slot, theme.corner_radius, theme.card);

    let stats: Vec<_> = input.stats.iter().take(MAX_STAT_COLUMNS).collect();
    if stats.is_empty() {
        return Ok(());
    }

    let pad = layout.margin * 0.4;
    let scale = layout.type_scale;

    // Wide panels read as columns; tall panels (the card variant) as rows.
    let columns = slot.width() >= slot.height() * 3.0;
    for (i, stat) in stats.iter().enumerate() {
        let (x, y, cell_w) = if columns {
            let col_w = (slot.width() - pad * 2.0) / stats.len() as f64;
            (slot.x0 + pad + col_w * i as f64, slot.y0 + pad, col_w)
        } else {
            let row_h = (slot.height() - pad * 2.0) / stats.len() as f64;
            (
                slot.x0 + pad,
                slot.y0 + pad + row_h * i as f64,
                slot.width() - pad * 2.0,
            )
        };

        let label = engine.layout_plain(
            &stat.label,
            &theme.font,
            scale.label,
            brush(theme.text_muted),
            Some(cell_w as f32),
        )?;
        let (_, label_h) = measure(&label);
        draw_layout(ctx, font, &label, x, y);

        let value = engine.layout_clamped(
            &stat.value,
            &theme.font,
            scale.value,
            brush(theme.text_primary),
            cell_w as f32,
            2,
        )?;
        draw_layout(ctx, font, &value, x, y + label_h * 1.3);
    }

    Ok(())
}

fn draw_notes(
    ctx: &mut vello_cpu::RenderContext,
    engine: &mut TextLayoutEngine,
    font: &vello_cpu::peniko::FontData,
    input: &RecapInput,
    theme: &RecapTheme,
    layout: &RecapLayout,
    slot: Rect,
) -> PawtrailResult<()> {
    fill_rounded(ctx, slot, theme.corner_radius, theme.card);

    let pad = layout.margin * 0.4;
    let notes = engine.layout_clamped(
        input.notes.trim(),
        &theme.font,
        layout.type_scale.body,
        brush(theme.text_primary),
        (slot.width() - pad * 2.0) as f32,
        NOTES_MAX_LINES,
    )?;
    draw_layout(ctx, font, &notes, slot.x0 + pad, slot.y0 + pad);
    Ok(())
}

fn draw_photo_grid(
    ctx: &mut vello_cpu::RenderContext,
    assets: &RecapAssets,
    theme: &RecapTheme,
    layout: &RecapLayout,
    slot: Rect,
) -> PawtrailResult<()> {
    let gap = layout.margin * 0.3;
    let cells = photo_cells(slot, assets.photos.len(), gap);
    let radius = theme.corner_radius * 0.75;

    for (i, cell) in cells.iter().enumerate() {
        match assets.photos.get(i).and_then(|p| p.as_ref()) {
            Some(img) => draw_image_cover(ctx, img, *cell, radius)?,
            None => fill_rounded(ctx, *cell, radius, theme.placeholder),
        }
    }
    Ok(())
}

/// Cover-crop `img` to fill `rect` and paint it clipped to a rounded rect.
fn draw_image_cover(
    ctx: &mut vello_cpu::RenderContext,
    img: &PreparedImage,
    rect: Rect,
    radius: f64,
) -> PawtrailResult<()> {
    let dst_w = rect.width().round().max(1.0) as u32;
    let dst_h = rect.height().round().max(1.0) as u32;

    let src = image::RgbaImage::from_raw(img.width, img.height, img.rgba8_premul.as_ref().clone())
        .ok_or_else(|| PawtrailError::render("prepared image buffer size mismatch"))?;

    let crop = cover_crop(img.width, img.height, rect.width(), rect.height());
    let cropped = image::imageops::crop_imm(
        &src,
        crop.x0 as u32,
        crop.y0 as u32,
        (crop.width().round() as u32).max(1),
        (crop.height().round() as u32).max(1),
    )
    .to_image();
    // Bytes stay premultiplied through crop and resize.
    let resized =
        image::imageops::resize(&cropped, dst_w, dst_h, image::imageops::FilterType::Triangle);

    let paint = image_paint_from_premul(resized.as_raw(), dst_w, dst_h)?;
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((rect.x0, rect.y0)));
    ctx.set_paint(paint);
    ctx.fill_path(&rounded_rect_path(rect.width(), rect.height(), radius));
    Ok(())
}

fn fill_rounded(ctx: &mut vello_cpu::RenderContext, rect: Rect, radius: f64, fill: Rgba8) {
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((rect.x0, rect.y0)));
    ctx.set_paint(color(fill));
    ctx.fill_path(&rounded_rect_path(rect.width(), rect.height(), radius));
}

fn draw_layout(
    ctx: &mut vello_cpu::RenderContext,
    font: &vello_cpu::peniko::FontData,
    layout: &parley::Layout<TextBrushRgba8>,
    x: f64,
    y: f64,
) {
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((x, y)));
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let b = run.style().brush;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(b.r, b.g, b.b, b.a));
            let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
}

fn rounded_rect_path(w: f64, h: f64, radius: f64) -> vello_cpu::kurbo::BezPath {
    use kurbo::Shape;

    let max_radius = (w.min(h) * 0.5).max(0.0);
    let rr = kurbo::RoundedRect::new(0.0, 0.0, w, h, radius.clamp(0.0, max_radius));
    let mut path = vello_cpu::kurbo::BezPath::new();
    for el in rr.path_elements(0.1) {
        push_element(&mut path, el);
    }
    path
}

fn push_element(out: &mut vello_cpu::kurbo::BezPath, el: kurbo::PathEl) {
    use kurbo::PathEl;

    match el {
        PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
        PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
        PathEl::QuadTo(p1, p2) => out.quad_to(
            vello_cpu::kurbo::Point::new(p1.x, p1.y),
            vello_cpu::kurbo::Point::new(p2.x, p2.y),
        ),
        PathEl::CurveTo(p1, p2, p3) => out.curve_to(
            vello_cpu::kurbo::Point::new(p1.x, p1.y),
            vello_cpu::kurbo::Point::new(p2.x, p2.y),
            vello_cpu::kurbo::Point::new(p3.x, p3.y),
        ),
        PathEl::ClosePath => out.close_path(),
    }
}

fn image_paint_from_premul(bytes: &[u8], width: u32, height: u32) -> PawtrailResult<vello_cpu::Image> {
    let w: u16 = width
        .try_into()
        .map_err(|_| PawtrailError::render("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| PawtrailError::render("pixmap height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(PawtrailError::render("pixmap byte len mismatch"));
    }

    // Pixmap stores PremulRgba8; our bytes are already premultiplied.
    let mut pixels = Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(
        (width as usize) * (height as usize),
    );
    for px in bytes.chunks_exact(4) {
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], px[3],
        ]));
    }
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(std::sync::Arc::new(
            vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true),
        )),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

fn color(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn brush(c: Rgba8) -> TextBrushRgba8 {
    TextBrushRgba8 {
        r: c.r,
        g: c.g,
        b: c.b,
        a: c.a,
    }
}
