//! Tests for call_log widget module

use super::player::played_bars;
use super::*;
use crate::test_utils::{create_signed_in_state, TestTerminal};
use crate::theme::palette::LIGHT;
use callpilot_app::{AppState, PlaybackSpeed, PlaybackStatus};

fn render_section(state: &AppState, width: u16, height: u16) -> TestTerminal {
    let mut term = TestTerminal::with_size(width, height);
    term.render_widget(
        CallLogView::new(&state.seed.calls, &state.call_log, &LIGHT),
        term.area(),
    );
    term
}

fn select(state: &mut AppState, id: u32) {
    let calls = state.seed.calls.clone();
    state.call_log.select(&calls, id);
}

#[test]
fn test_list_shows_every_call() {
    let state = create_signed_in_state();
    let term = render_section(&state, 100, 30);

    assert!(term.buffer_contains("Qo'ng'iroqlar jurnali"));
    assert!(term.buffer_contains("+998 90 123 45 67"));
    assert!(term.buffer_contains("+998 91 234 56 78"));
    assert!(term.buffer_contains("+998 93 345 67 89"));
    assert!(term.buffer_contains("Mahsulot haqida so'rov"));
    assert!(term.buffer_contains("2024-12-18 14:32 • 08:45"));
}

#[test]
fn test_list_shows_sentiment_badges() {
    let state = create_signed_in_state();
    let term = render_section(&state, 100, 30);

    assert!(term.buffer_contains("Ijobiy"));
    assert!(term.buffer_contains("Salbiy"));
    assert!(term.buffer_contains("Neytral"));
}

#[test]
fn test_no_details_without_selection() {
    let state = create_signed_in_state();
    let term = render_section(&state, 100, 30);
    assert!(!term.buffer_contains("Audio Player"));
}

#[test]
fn test_cursor_row_highlighted() {
    let mut state = create_signed_in_state();
    state.call_log.cursor_down();
    let term = render_section(&state, 100, 30);

    // Search bar takes rows 0..3, the list border row 3; entries start at 4
    let row = 4 + ITEM_HEIGHT;
    assert!(term.line_contains(row, "+998 91 234 56 78"));
    assert_eq!(term.buffer()[(5, row)].bg, LIGHT.accent);
}

#[test]
fn test_empty_filter_result_message() {
    let mut state = create_signed_in_state();
    let calls = state.seed.calls.clone();
    state.call_log.set_filter(&calls, "zzz".into());
    let term = render_section(&state, 100, 30);

    assert!(term.buffer_contains(EMPTY_RESULT));
    assert!(term.buffer_contains("[0/3]"));
    assert!(!term.buffer_contains("+998 90"));
}

#[test]
fn test_filter_narrows_list() {
    let mut state = create_signed_in_state();
    let calls = state.seed.calls.clone();
    state.call_log.set_filter(&calls, "SHIKOYAT".into());
    let term = render_section(&state, 100, 30);

    assert!(term.buffer_contains("+998 91 234 56 78"));
    assert!(!term.buffer_contains("+998 90 123 45 67"));
    assert!(term.buffer_contains("[1/3]"));
}

#[test]
fn test_selected_call_opens_details() {
    let mut state = create_signed_in_state();
    select(&mut state, 1);
    let term = render_section(&state, 140, 60);

    assert!(term.buffer_contains("Audio Player"));
    assert!(term.buffer_contains("AI Xulosa"));
    assert!(term.buffer_contains("Asosiy fikrlar:"));
    assert!(term.buffer_contains("[Tarif rejalar]"));
    assert!(term.buffer_contains("Keyingi qadamlar:"));
    assert!(term.buffer_contains("Ertaga soat 10:00"));
    assert!(term.buffer_contains("Hissiyot tahlili"));
    assert!(term.buffer_contains("Boshlang'ich: 40%"));
    assert!(term.buffer_contains("Yakuniy: 85%"));
    assert!(term.buffer_contains("0.8s"));
    assert!(term.buffer_contains("$0.15"));
    assert!(term.buffer_contains("To'liq transkripsiya"));
    assert!(term.buffer_contains("AI Agent"));
}

#[test]
fn test_call_without_action_items_omits_section() {
    let mut state = create_signed_in_state();
    select(&mut state, 3);
    let term = render_section(&state, 140, 60);

    assert!(term.buffer_contains("AI Xulosa"));
    assert!(!term.buffer_contains("Keyingi qadamlar:"));
}

#[test]
fn test_player_stopped_clock() {
    let mut state = create_signed_in_state();
    select(&mut state, 1);
    let term = render_section(&state, 140, 60);

    assert!(term.buffer_contains("■ 00:00 / 08:45"));
    assert!(term.buffer_contains("[s] 1x"));
}

#[test]
fn test_player_playing_clock_and_speed() {
    let mut state = create_signed_in_state();
    select(&mut state, 1);
    state.call_log.playback.status = PlaybackStatus::Playing;
    state.call_log.playback.elapsed = 75.5;
    state.call_log.playback.speed = PlaybackSpeed::OneAndHalf;
    let term = render_section(&state, 140, 60);

    assert!(term.buffer_contains("▶ 01:15 / 08:45"));
    assert!(term.buffer_contains("1.5x"));
}

#[test]
fn test_player_paused_glyph() {
    let mut state = create_signed_in_state();
    select(&mut state, 2);
    state.call_log.playback.status = PlaybackStatus::Paused;
    state.call_log.playback.elapsed = 12.0;
    let term = render_section(&state, 140, 60);

    assert!(term.buffer_contains("00:12 / 05:23"));
    assert!(term.buffer_contains("⏸"));
}

#[test]
fn test_played_bars_follow_progress() {
    assert_eq!(played_bars(0.0), 0);
    assert_eq!(played_bars(0.5), 10);
    assert_eq!(played_bars(0.99), 19);
    assert_eq!(played_bars(1.0), 20);
}

#[test]
fn test_list_scrolls_to_cursor() {
    let mut state = create_signed_in_state();
    state.call_log.cursor_down();
    state.call_log.cursor_down();
    // Room for a single entry: search (3) + borders (2) + one item
    let term = render_section(&state, 80, 3 + 2 + ITEM_HEIGHT);

    assert!(term.buffer_contains("+998 93 345 67 89"));
    assert!(!term.buffer_contains("+998 90 123 45 67"));
}
