use super::*;

fn test_font() -> Option<Vec<u8>> {
    let path = crate::assets::font::find_font_in_dir(std::path::Path::new("/usr/share/fonts"))
        .or_else(|| {
            crate::assets::font::find_font_in_dir(std::path::Path::new(
                "/usr/local/share/fonts",
            ))
        })
        .or_else(|| {
            crate::assets::font::find_font_in_dir(std::path::Path::new("/System/Library/Fonts"))
        })?;
    std::fs::read(path).ok()
}

const BRUSH: TextBrushRgba8 = TextBrushRgba8 {
    r: 0,
    g: 0,
    b: 0,
    a: 255,
};

#[test]
fn layout_rejects_bad_sizes() {
    let mut engine = TextLayoutEngine::new();
    assert!(engine.layout_plain("hi", &[0u8; 4], 0.0, BRUSH, None).is_err());
    assert!(engine
        .layout_plain("hi", &[0u8; 4], f32::NAN, BRUSH, None)
        .is_err());
}

#[test]
fn narrow_width_wraps_into_multiple_lines() {
    let Some(font) = test_font() else {
        eprintln!("skipping: no system font available");
        return;
    };
    let mut engine = TextLayoutEngine::new();
    let text = "a quick brown dog trots over the mossy bridge";
    let wide = engine
        .layout_plain(text, &font, 16.0, BRUSH, Some(10_000.0))
        .unwrap();
    let narrow = engine
        .layout_plain(text, &font, 16.0, BRUSH, Some(80.0))
        .unwrap();
    assert_eq!(line_count(&wide), 1);
    assert!(line_count(&narrow) > line_count(&wide));
}

#[test]
fn clamped_layout_respects_line_cap() {
    let Some(font) = test_font() else {
        eprintln!("skipping: no system font available");
        return;
    };
    let mut engine = TextLayoutEngine::new();
    let text = "words ".repeat(120);
    for cap in [1usize, 2, 4] {
        let layout = engine
            .layout_clamped(&text, &font, 16.0, BRUSH, 120.0, cap)
            .unwrap();
        assert!(line_count(&layout) <= cap, "cap {cap} exceeded");
    }
}

#[test]
fn short_text_is_not_truncated() {
    let Some(font) = test_font() else {
        eprintln!("skipping: no system font available");
        return;
    };
    let mut engine = TextLayoutEngine::new();
    let layout = engine
        .layout_clamped("short note", &font, 16.0, BRUSH, 10_000.0, 4)
        .unwrap();
    assert_eq!(line_count(&layout), 1);
}

#[test]
fn measure_grows_with_line_count() {
    let Some(font) = test_font() else {
        eprintln!("skipping: no system font available");
        return;
    };
    let mut engine = TextLayoutEngine::new();
    let text = "a quick brown dog trots over the mossy bridge";
    let one = engine
        .layout_plain(text, &font, 16.0, BRUSH, Some(10_000.0))
        .unwrap();
    let many = engine
        .layout_plain(text, &font, 16.0, BRUSH, Some(80.0))
        .unwrap();
    let (_, h_one) = measure(&one);
    let (_, h_many) = measure(&many);
    assert!(h_many > h_one);
}
