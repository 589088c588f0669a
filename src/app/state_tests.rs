//! Tests for application state

use super::*;
use crate::config::{RecommendedEntry, SearchConfig};
use crate::overlay::worker::{SearchRequest, SearchResponse};
use std::sync::mpsc::{Receiver, Sender, channel};

/// App over a zero-debounce config with two recommended searches and live
/// worker channel handles.
fn test_app() -> (App, Receiver<SearchRequest>, Sender<SearchResponse>) {
    let config = Config {
        search: SearchConfig {
            debounce_ms: 0,
            recommended: vec![
                RecommendedEntry {
                    title: "Photography".to_string(),
                    url: None,
                },
                RecommendedEntry {
                    title: "Travel".to_string(),
                    url: Some("/topics/travel/".to_string()),
                },
            ],
        },
        ..Config::default()
    };

    let mut app = App::new(&config);
    let (request_tx, request_rx) = channel();
    let (response_tx, response_rx) = channel();
    app.session.set_channels(request_tx, response_rx);

    (app, request_rx, response_tx)
}

fn type_query(app: &mut App, text: &str) {
    app.input.textarea.insert_str(text);
    app.query_edited();
}

#[test]
fn test_new_app_starts_dirty_and_closed() {
    let (app, _request_rx, _response_tx) = test_app();
    assert!(app.should_render());
    assert!(!app.should_quit());
    assert!(!app.session.is_open());
    assert!(app.navigation().is_none());
}

#[test]
fn test_rows_with_empty_query_are_recommended_then_quick_actions() {
    let (mut app, _request_rx, _response_tx) = test_app();
    app.open_overlay();

    let rows = app.rows();
    // 2 recommended + 4 quick actions
    assert_eq!(rows.len(), 6);
}

#[test]
fn test_selection_clamps_to_row_count() {
    let (mut app, _request_rx, _response_tx) = test_app();
    app.open_overlay();

    for _ in 0..20 {
        app.select_next();
    }
    assert_eq!(app.selected, app.rows().len() - 1);

    for _ in 0..20 {
        app.select_prev();
    }
    assert_eq!(app.selected, 0);
}

#[test]
fn test_activate_recommended_navigates_and_quits() {
    let (mut app, _request_rx, _response_tx) = test_app();
    app.open_overlay();

    // First row is the first recommended search
    app.activate_selection();

    assert_eq!(app.navigation(), Some("/search/posts/Photography"));
    assert!(app.should_quit());
    assert!(!app.session.is_open());
}

#[test]
fn test_activate_quick_action_carries_live_query() {
    let (mut app, request_rx, response_tx) = test_app();
    app.open_overlay();
    type_query(&mut app, "rust");
    app.session.tick();
    let request = request_rx.try_recv().expect("dispatch expected");
    response_tx
        .send(SearchResponse::Success {
            posts: Vec::new(),
            term: "rust".to_string(),
            request_id: request.request_id,
        })
        .unwrap();
    app.session.poll_response();

    // Rows: empty state, then the 4 quick actions
    app.select_next();
    app.activate_selection();

    assert_eq!(app.navigation(), Some("/search/posts/rust"));
    assert!(app.should_quit());
}

#[test]
fn test_activate_indicator_row_is_a_no_op() {
    let (mut app, request_rx, _response_tx) = test_app();
    app.open_overlay();
    type_query(&mut app, "rust");
    app.session.tick();
    let _request = request_rx.try_recv().expect("dispatch expected");
    assert!(app.session.is_loading());

    // Selected row 0 is the loading indicator
    app.activate_selection();

    assert!(app.navigation().is_none());
    assert!(!app.should_quit());
    assert!(app.session.is_open());
}

#[test]
fn test_query_edit_resets_selection() {
    let (mut app, _request_rx, _response_tx) = test_app();
    app.open_overlay();
    app.select_next();
    app.select_next();

    type_query(&mut app, "rust");
    assert_eq!(app.selected, 0);
}

#[test]
fn test_strip_animation_drives_boundary_flags() {
    let (mut app, _request_rx, _response_tx) = test_app();

    let strip = app.slider.container_mut().expect("strip attached");
    strip.set_metrics(300.0, 1000.0);
    app.slider.on_scroll();
    assert!(app.slider.is_at_start());

    app.slider.scroll_to_next_slide();
    assert!(app.step_strip_animation());
    while app.step_strip_animation() {}

    assert!(!app.slider.is_at_start());
    assert_eq!(app.slider.container().unwrap().offset(), 300.0);
}

#[test]
fn test_config_warning_is_surfaced() {
    let (mut app, _request_rx, _response_tx) = test_app();
    assert!(app.config_warning().is_none());

    app.show_config_warning("Invalid config: bad toml".to_string());
    assert_eq!(app.config_warning(), Some("Invalid config: bad toml"));
}
