use super::*;
use crate::recap::model::RecapVariant;

fn story() -> RecapLayout {
    RecapLayout::solve(Canvas::new(1080, 1350).unwrap(), RecapVariant::Story)
}

#[test]
fn story_slots_stack_without_overlap() {
    let l = story();
    assert!(l.header.y1 <= l.map.y0);
    assert!(l.map.y1 <= l.stats.y0);
    let notes = l.notes.expect("story layout has notes");
    let photos = l.photos.expect("story layout has photos");
    assert!(l.stats.y1 <= notes.y0);
    assert!(notes.y1 <= photos.y0);
}

#[test]
fn story_slots_respect_margins() {
    let l = story();
    for rect in [l.header, l.map, l.stats, l.notes.unwrap(), l.photos.unwrap()] {
        assert!(rect.x0 >= l.margin - 0.5);
        assert!(rect.x1 <= 1080.0 - l.margin + 0.5);
        assert!(rect.y0 >= l.margin - 0.5);
        assert!(rect.y1 <= 1350.0 - l.margin + 0.5);
        assert!(rect.width() > 0.0 && rect.height() > 0.0);
    }
}

#[test]
fn card_variant_drops_notes_and_photos() {
    let l = RecapLayout::solve(Canvas::new(1200, 630).unwrap(), RecapVariant::Card);
    assert!(l.notes.is_none());
    assert!(l.photos.is_none());
    // Map fills the right side, beside the text column.
    assert!(l.map.x0 >= l.header.x1);
    assert!(l.map.height() > l.map.width() * 0.3);
}

#[test]
fn grid_dims_follow_count_policy() {
    assert_eq!(grid_dims(0), (0, 0));
    assert_eq!(grid_dims(1), (1, 1));
    assert_eq!(grid_dims(2), (2, 1));
    assert_eq!(grid_dims(3), (3, 1));
    assert_eq!(grid_dims(4), (2, 2));
    assert_eq!(grid_dims(5), (3, 2));
    assert_eq!(grid_dims(6), (3, 2));
    assert_eq!(grid_dims(40), (3, 2));
}

#[test]
fn photo_cells_tile_the_slot() {
    let slot = kurbo::Rect::new(0.0, 0.0, 330.0, 210.0);
    let cells = photo_cells(slot, 5, 15.0);
    assert_eq!(cells.len(), 6);

    for cell in &cells {
        assert!(cell.x0 >= slot.x0 - 0.5 && cell.x1 <= slot.x1 + 0.5);
        assert!(cell.y0 >= slot.y0 - 0.5 && cell.y1 <= slot.y1 + 0.5);
    }

    // 3 columns of 100 px with 15 px gaps.
    assert!((cells[0].width() - 100.0).abs() < 1e-9);
    assert!((cells[1].x0 - 115.0).abs() < 1e-9);
    // Row-major ordering: the fourth cell starts the second row.
    assert!(cells[3].y0 > cells[2].y0);
}

#[test]
fn photo_cells_empty_for_no_photos() {
    let slot = kurbo::Rect::new(0.0, 0.0, 100.0, 100.0);
    assert!(photo_cells(slot, 0, 10.0).is_empty());
}

#[test]
fn cover_crop_matches_destination_aspect() {
    // Wide source into a square slot crops the sides.
    let crop = cover_crop(200, 100, 100.0, 100.0);
    assert_eq!((crop.width(), crop.height()), (100.0, 100.0));
    assert_eq!(crop.x0, 50.0);
    assert_eq!(crop.y0, 0.0);

    // Tall source into a wide slot crops top and bottom.
    let crop = cover_crop(100, 400, 200.0, 100.0);
    assert!((crop.width() - 100.0).abs() < 1e-9);
    assert!((crop.height() - 50.0).abs() < 1e-9);
    assert!((crop.y0 - 175.0).abs() < 1e-9);
}

#[test]
fn cover_crop_stays_within_source_bounds() {
    for (sw, sh, dw, dh) in [
        (1u32, 1u32, 500.0, 300.0),
        (3000, 20, 100.0, 100.0),
        (20, 3000, 100.0, 100.0),
        (640, 480, 640.0, 480.0),
    ] {
        let crop = cover_crop(sw, sh, dw, dh);
        assert!(crop.x0 >= 0.0 && crop.y0 >= 0.0);
        assert!(crop.x1 <= f64::from(sw) + 1e-9);
        assert!(crop.y1 <= f64::from(sh) + 1e-9);
        assert!(crop.width() > 0.0 && crop.height() > 0.0);
    }
}
