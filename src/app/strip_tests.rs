//! Tests for the recommended strip scroll surface

use super::*;

fn strip() -> CardStrip {
    let mut strip = CardStrip::new();
    strip.set_metrics(300.0, 1000.0);
    strip
}

#[test]
fn test_scroll_by_moves_target_not_offset() {
    let mut strip = strip();
    strip.scroll_by(300.0);

    // The offset catches up over ticks, not synchronously
    assert_eq!(strip.offset(), 0.0);
    assert!(strip.step_animation());
    assert!(strip.offset() > 0.0);
    assert!(strip.offset() < 300.0);
}

#[test]
fn test_animation_converges_and_settles() {
    let mut strip = strip();
    strip.scroll_by(300.0);

    let mut steps = 0;
    while strip.step_animation() {
        steps += 1;
        assert!(steps < 100, "animation should converge");
    }
    assert_eq!(strip.offset(), 300.0);

    // Settled animation reports no further movement
    assert!(!strip.step_animation());
}

#[test]
fn test_scroll_by_clamps_to_scrollable_range() {
    let mut strip = strip();
    strip.scroll_by(10_000.0);
    while strip.step_animation() {}
    assert_eq!(strip.offset(), 700.0);

    strip.scroll_by(-10_000.0);
    while strip.step_animation() {}
    assert_eq!(strip.offset(), 0.0);
}

#[test]
fn test_set_metrics_clamps_current_position() {
    let mut strip = strip();
    strip.scroll_by(700.0);
    while strip.step_animation() {}
    assert_eq!(strip.offset(), 700.0);

    // Content shrank; position clamps into the new range
    strip.set_metrics(300.0, 500.0);
    assert_eq!(strip.offset(), 200.0);
}

#[test]
fn test_narrow_content_never_scrolls() {
    let mut strip = CardStrip::new();
    strip.set_metrics(300.0, 200.0);
    strip.scroll_by(300.0);
    assert!(!strip.step_animation());
    assert_eq!(strip.offset(), 0.0);
}
