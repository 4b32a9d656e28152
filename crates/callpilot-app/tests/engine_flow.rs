//! End-to-end flows through the Engine with a paused tokio clock

use std::time::Duration;

use callpilot_app::config::Settings;
use callpilot_app::{AuthStatus, Engine, InputKey, Message, PlaybackStatus, Section};
use callpilot_core::SeedData;
use tokio_test::assert_ok;

fn engine() -> Engine {
    Engine::headless(SeedData::builtin().unwrap(), Settings::default())
}

fn signed_in_engine() -> Engine {
    let mut settings = Settings::default();
    settings.behavior.skip_login = true;
    Engine::headless(SeedData::builtin().unwrap(), settings)
}

async fn advance(engine: &mut Engine, ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    engine.drain_pending_messages();
}

#[tokio::test(start_paused = true)]
async fn login_completes_after_delay() {
    let mut engine = engine();
    engine.process_message(Message::Key(InputKey::Enter));
    assert_eq!(engine.state.gate.status, AuthStatus::Authenticating);

    advance(&mut engine, 1_000).await;
    assert_eq!(engine.state.gate.status, AuthStatus::Authenticating);

    advance(&mut engine, 600).await;
    assert_eq!(engine.state.gate.status, AuthStatus::Authenticated);
    assert_eq!(engine.state.shell.active, Section::Dashboard);
}

#[tokio::test(start_paused = true)]
async fn shutdown_abandons_pending_login() {
    let mut engine = engine();
    engine.process_message(Message::SubmitLogin);
    tokio::task::yield_now().await;
    engine.shutdown();

    advance(&mut engine, 2_000).await;
    assert_eq!(engine.state.gate.status, AuthStatus::Authenticating);
}

#[tokio::test(start_paused = true)]
async fn playback_advances_once_per_second() {
    let mut engine = signed_in_engine();
    engine.process_message(Message::SelectSection(Section::CallLogs));
    engine.process_message(Message::SelectCall(3));
    engine.process_message(Message::TogglePlayback);
    assert!(engine.is_ticking());

    advance(&mut engine, 3_500).await;
    assert_eq!(engine.state.call_log.playback.elapsed, 3.0);
    assert_eq!(engine.state.call_log.playback.clock(), "00:03");
}

#[tokio::test(start_paused = true)]
async fn double_speed_advances_two_seconds_per_tick() {
    let mut engine = signed_in_engine();
    engine.process_message(Message::SelectSection(Section::CallLogs));
    engine.process_message(Message::SelectCall(1));
    engine.process_message(Message::ChangeSpeed);
    engine.process_message(Message::ChangeSpeed);
    engine.process_message(Message::TogglePlayback);

    advance(&mut engine, 2_500).await;
    assert_eq!(engine.state.call_log.playback.elapsed, 4.0);
}

#[tokio::test(start_paused = true)]
async fn pause_freezes_elapsed() {
    let mut engine = signed_in_engine();
    engine.process_message(Message::SelectSection(Section::CallLogs));
    engine.process_message(Message::SelectCall(2));
    engine.process_message(Message::TogglePlayback);
    advance(&mut engine, 2_500).await;

    engine.process_message(Message::TogglePlayback);
    assert!(!engine.is_ticking());

    advance(&mut engine, 5_000).await;
    assert_eq!(engine.state.call_log.playback.status, PlaybackStatus::Paused);
    assert_eq!(engine.state.call_log.playback.elapsed, 2.0);
}

#[tokio::test(start_paused = true)]
async fn rapid_reselection_leaves_single_ticker() {
    let mut engine = signed_in_engine();
    engine.process_message(Message::SelectSection(Section::CallLogs));
    for id in [1, 2, 3] {
        engine.process_message(Message::SelectCall(id));
        engine.process_message(Message::TogglePlayback);
    }

    advance(&mut engine, 2_500).await;
    assert_eq!(engine.state.call_log.selected, Some(3));
    assert_eq!(engine.state.call_log.playback.elapsed, 2.0);
}

#[tokio::test(start_paused = true)]
async fn leaving_call_logs_stops_ticker() {
    let mut engine = signed_in_engine();
    engine.process_message(Message::SelectSection(Section::CallLogs));
    engine.process_message(Message::SelectCall(1));
    engine.process_message(Message::TogglePlayback);
    advance(&mut engine, 1_500).await;

    engine.process_message(Message::SelectSection(Section::Numbers));
    assert!(!engine.is_ticking());
    assert_eq!(engine.state.call_log.selected, None);

    advance(&mut engine, 3_000).await;
    assert_eq!(engine.state.call_log.playback.elapsed, 0.0);
}

#[tokio::test(start_paused = true)]
async fn playback_stops_at_end_of_recording() {
    let mut engine = signed_in_engine();
    engine.process_message(Message::SelectSection(Section::CallLogs));
    // 03:12 at 2x
    engine.process_message(Message::SelectCall(3));
    engine.process_message(Message::ChangeSpeed);
    engine.process_message(Message::ChangeSpeed);
    engine.process_message(Message::TogglePlayback);

    advance(&mut engine, 96_500).await;
    assert_eq!(engine.state.call_log.playback.status, PlaybackStatus::Stopped);
    assert_eq!(engine.state.call_log.playback.elapsed, 0.0);
    assert!(!engine.is_ticking());
}

#[tokio::test(start_paused = true)]
async fn sign_out_stops_ticker_and_locks_shell() {
    let mut engine = signed_in_engine();
    engine.process_message(Message::SelectSection(Section::CallLogs));
    engine.process_message(Message::SelectCall(1));
    engine.process_message(Message::TogglePlayback);

    engine.process_message(Message::SignOut);
    assert!(!engine.is_ticking());
    assert_eq!(engine.state.gate.status, AuthStatus::LoggedOut);
}

#[tokio::test(start_paused = true)]
async fn quit_from_channel() {
    let mut engine = signed_in_engine();
    assert_ok!(engine.msg_tx.clone().try_send(Message::Quit));
    assert_eq!(engine.drain_pending_messages(), 1);
    assert!(engine.should_quit());
}
