#[allow(dead_code)]
mod common;

use heicview_core::error::ViewerError;
use heicview_core::layout::{ChromeInsets, ScrollOffset};
use heicview_core::session::ViewerSession;
use heicview_core::zoom::{ZoomDirection, ZoomModifiers};

const NO_CHROME: ChromeInsets = ChromeInsets {
    horizontal: 0,
    vertical: 0,
    menu_bar: 0,
    status_bar: 0,
};

const SHIFT: ZoomModifiers = ZoomModifiers {
    control: false,
    shift: true,
};

#[test]
fn test_empty_session() {
    let mut session = ViewerSession::new(NO_CHROME);

    assert!(session.document().is_none());
    assert!(session.displayed().is_none());
    assert!(session.relayout([800, 600]).is_none());
    assert_eq!(session.adjust_zoom(ZoomDirection::In, ZoomModifiers::NONE), None);

    let aff = session.affordances();
    assert_eq!(aff.title, "HEIC Image View");
    assert!(!aff.zoom_controls_visible);
    assert!(!aff.save_visible);
    assert!(aff.zoom_label.is_none());
}

#[test]
fn test_open_sets_title_and_affordances() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_png(dir.path(), "IMG_1234.png", 20, 10);
    let mut session = ViewerSession::new(NO_CHROME);

    session.open(&path).unwrap();

    let aff = session.affordances();
    assert_eq!(aff.title, "HEIC Image View: IMG_1234");
    assert!(aff.zoom_controls_visible);
    assert!(aff.save_visible);
    assert!(aff.print_visible);
    assert_eq!(aff.zoom_label.as_deref(), Some("100%"));
    assert_eq!(session.suggested_file_name(), Some("IMG_1234"));
}

#[test]
fn test_displayed_dimensions_follow_zoom() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_png(dir.path(), "a.png", 333, 101);
    let mut session = ViewerSession::new(NO_CHROME);
    session.open(&path).unwrap();

    let steps = [
        (ZoomDirection::Out, ZoomModifiers::NONE),
        (ZoomDirection::Out, SHIFT),
        (ZoomDirection::In, ZoomModifiers { control: true, shift: false }),
        (ZoomDirection::In, SHIFT),
        (ZoomDirection::In, SHIFT),
        (ZoomDirection::In, SHIFT),
    ];
    for (direction, modifiers) in steps {
        let level = session.adjust_zoom(direction, modifiers).unwrap();
        let displayed = session.displayed().unwrap();
        assert_eq!(displayed.width(), 333 * level / 100);
        assert_eq!(displayed.height(), 101 * level / 100);
    }
    assert_eq!(session.zoom_level(), 131);
}

#[test]
fn test_zoom_does_not_touch_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_png(dir.path(), "a.png", 50, 40);
    let mut session = ViewerSession::new(NO_CHROME);
    session.open(&path).unwrap();

    session.adjust_zoom(ZoomDirection::In, SHIFT);

    assert_eq!(session.document().unwrap().base_size(), [50, 40]);
    assert_eq!(session.displayed().unwrap().dimensions(), (60, 48));
}

#[test]
fn test_failed_open_keeps_previous_document() {
    let dir = tempfile::tempdir().unwrap();
    let good = common::write_png(dir.path(), "good.png", 30, 20);
    let bad = common::write_garbage(dir.path(), "bad.heic");
    let mut session = ViewerSession::new(NO_CHROME);
    session.open(&good).unwrap();
    session.adjust_zoom(ZoomDirection::In, SHIFT);

    let err = session.open(&bad).unwrap_err();

    assert!(matches!(err, ViewerError::Decode { .. }));
    assert_eq!(session.document().unwrap().name, "good");
    assert_eq!(session.zoom_level(), 120);
    assert_eq!(session.displayed().unwrap().dimensions(), (36, 24));
}

#[test]
fn test_open_resets_zoom() {
    let dir = tempfile::tempdir().unwrap();
    let first = common::write_png(dir.path(), "first.png", 30, 20);
    let second = common::write_png(dir.path(), "second.png", 10, 10);
    let mut session = ViewerSession::new(NO_CHROME);
    session.open(&first).unwrap();
    session.adjust_zoom(ZoomDirection::In, SHIFT);

    session.open(&second).unwrap();

    assert_eq!(session.zoom_level(), 100);
    assert_eq!(session.displayed().unwrap().dimensions(), (10, 10));
}

#[test]
fn test_relayout_centers_image() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_png(dir.path(), "a.png", 400, 300);
    let mut session = ViewerSession::new(ChromeInsets::default().with_menu_bar(24));
    session.open(&path).unwrap();

    let placement = session.relayout([816, 666]).unwrap();

    assert_eq!(placement.layout.panel_size, [800, 600]);
    assert_eq!(placement.layout.image_position, [200, 150]);
    assert_eq!(placement.scroll, ScrollOffset::ZERO);
}

#[test]
fn test_relayout_preserves_scroll_offset() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_png(dir.path(), "a.png", 1000, 900);
    let mut session = ViewerSession::new(NO_CHROME);
    session.open(&path).unwrap();
    session.relayout([800, 600]);
    session.set_scroll_offset(ScrollOffset::new(120.0, 250.0));

    let placement = session.relayout([700, 500]).unwrap();

    assert_eq!(placement.scroll, ScrollOffset::new(120.0, 250.0));
}

#[test]
fn test_relayout_clamps_scroll_after_zoom_out() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_png(dir.path(), "a.png", 1000, 900);
    let mut session = ViewerSession::new(NO_CHROME);
    session.open(&path).unwrap();
    session.relayout([800, 600]);
    session.set_scroll_offset(ScrollOffset::new(200.0, 300.0));

    // 1000x900 -> 800x720: only 120px of vertical scroll remain.
    session.adjust_zoom(ZoomDirection::Out, SHIFT);

    assert_eq!(session.view().scroll, ScrollOffset::new(0.0, 120.0));
}

#[test]
fn test_drag_pans_within_bounds() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_png(dir.path(), "a.png", 1000, 900);
    let mut session = ViewerSession::new(NO_CHROME);
    session.open(&path).unwrap();
    session.relayout([800, 600]);

    session.drag([-50.0, -1000.0]);

    assert_eq!(session.view().scroll, ScrollOffset::new(50.0, 300.0));
}

#[test]
fn test_drag_reaches_scrollbar_range() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_png(dir.path(), "a.png", 1000, 900);
    let mut session = ViewerSession::new(NO_CHROME);
    session.open(&path).unwrap();
    session.relayout([800, 600]);
    // Scrollbars take 10px/15px of the 800x600 panel.
    session.set_scroll_client([790, 585]);

    let scroll = session.drag([-5000.0, -5000.0]);

    assert_eq!(scroll, ScrollOffset::new(210.0, 315.0));
    let placement = session.relayout([800, 600]).unwrap();
    assert_eq!(placement.scroll, ScrollOffset::new(210.0, 315.0));
}

#[test]
fn test_drag_before_layout_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_png(dir.path(), "a.png", 1000, 900);
    let mut session = ViewerSession::new(NO_CHROME);
    session.open(&path).unwrap();

    assert_eq!(session.drag([-50.0, -50.0]), ScrollOffset::ZERO);
}

#[test]
fn test_status_bar_shrinks_panel() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_png(dir.path(), "a.png", 100, 100);
    let mut session = ViewerSession::new(NO_CHROME.with_menu_bar(24).with_status_bar(20));
    session.open(&path).unwrap();

    let placement = session.relayout([800, 644]).unwrap();

    assert_eq!(placement.layout.panel_size, [800, 600]);
    assert_eq!(placement.layout.image_position, [350, 250]);
}

#[test]
fn test_raster_is_capped_but_layout_keeps_logical_size() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_png(dir.path(), "a.png", 40, 30);
    let mut session = ViewerSession::new(NO_CHROME);
    session.set_max_raster_side(64);
    session.open(&path).unwrap();
    session.relayout([100, 100]);

    for _ in 0..10 {
        session.adjust_zoom(ZoomDirection::In, SHIFT);
    }

    // 300%: the layout uses 120x90, the raster is shrunk to fit 64.
    assert_eq!(session.zoom_level(), 300);
    assert_eq!(session.displayed_size(), Some([120, 90]));
    assert_eq!(session.displayed().unwrap().dimensions(), (64, 48));
    let placement = session.relayout([100, 100]).unwrap();
    assert_eq!(placement.image_size, [120, 90]);
    assert_eq!(placement.content_size, [120, 100]);
}

#[test]
fn test_lowering_raster_cap_rerenders() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_png(dir.path(), "a.png", 200, 100);
    let mut session = ViewerSession::new(NO_CHROME);
    session.open(&path).unwrap();
    assert_eq!(session.displayed().unwrap().dimensions(), (200, 100));

    session.set_max_raster_side(50);

    assert_eq!(session.displayed().unwrap().dimensions(), (50, 25));
    assert_eq!(session.displayed_size(), Some([200, 100]));
}

#[test]
fn test_zoom_steps_match_single_steps() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_png(dir.path(), "a.png", 333, 101);
    let mut batched = ViewerSession::new(NO_CHROME);
    let mut single = ViewerSession::new(NO_CHROME);
    batched.open(&path).unwrap();
    single.open(&path).unwrap();

    batched.adjust_zoom_steps(ZoomDirection::Out, SHIFT, 6);
    for _ in 0..6 {
        single.adjust_zoom(ZoomDirection::Out, SHIFT);
    }

    assert_eq!(batched.zoom_level(), 10);
    assert_eq!(batched.zoom_level(), single.zoom_level());
    assert_eq!(batched.displayed_size(), single.displayed_size());
    assert_eq!(batched.displayed_size(), Some([33, 10]));
    assert_eq!(batched.adjust_zoom_steps(ZoomDirection::In, SHIFT, 0), Some(10));
}

#[test]
fn test_save_uses_full_resolution() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_png(dir.path(), "a.png", 64, 48);
    let out = dir.path().join("out.png");
    let mut session = ViewerSession::new(NO_CHROME);
    session.open(&path).unwrap();
    session.adjust_zoom(ZoomDirection::Out, SHIFT);

    session.save_as(&out).unwrap();

    let saved = image::open(&out).unwrap();
    assert_eq!((saved.width(), saved.height()), (64, 48));
}

#[test]
fn test_open_save_reopen_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_png(dir.path(), "orig.png", 77, 33);
    let out = dir.path().join("copy.png");
    let mut session = ViewerSession::new(NO_CHROME);
    session.open(&path).unwrap();
    session.save_as(&out).unwrap();

    let mut reopened = ViewerSession::new(NO_CHROME);
    reopened.open(&out).unwrap();

    assert_eq!(
        reopened.document().unwrap().base_size(),
        session.document().unwrap().base_size()
    );
    assert_eq!(
        reopened.document().unwrap().bitmap,
        session.document().unwrap().bitmap
    );
}

#[test]
fn test_save_without_document() {
    let dir = tempfile::tempdir().unwrap();
    let session = ViewerSession::new(NO_CHROME);

    let err = session.save_as(&dir.path().join("x.png")).unwrap_err();

    assert!(matches!(err, ViewerError::NoDocument));
}
