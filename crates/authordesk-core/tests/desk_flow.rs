mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::{Duration, Instant};

use authordesk_core::{
    AssetLoadError, Desk, DeskConfig, DeskContent, FeedEntry, FeedSource, FeedbackState,
    FetchError, MemoryAssets, PanelKind, Transition,
};
use pretty_assertions::assert_eq;

use common::{loop_wav_bytes, CountingOutput};

const WAIT: Duration = Duration::from_secs(5);

struct StaticSource(Vec<FeedEntry>);

impl FeedSource for StaticSource {
    fn fetch(&self, _url: &str) -> Result<Vec<FeedEntry>, FetchError> {
        Ok(self.0.clone())
    }
}

fn assets(config: &DeskConfig) -> MemoryAssets {
    MemoryAssets::new().with(config.feedback_audio.clone(), loop_wav_bytes())
}

fn desk(output: CountingOutput) -> Desk {
    let config = DeskConfig::default();
    let source = Arc::new(StaticSource(vec![
        FeedEntry::new("a", "", "https://example.com/a"),
        FeedEntry::new("b", "", ""),
    ]));
    let mut desk = Desk::new(
        &config,
        DeskContent::default(),
        source,
        &assets(&config),
        Box::new(output),
    )
    .expect("desk");
    assert!(desk.feed.wait(WAIT, &mut desk.notices));
    desk
}

#[test]
fn tabs_are_composed_in_order() {
    let desk = desk(CountingOutput::default());
    let labels: Vec<_> = desk.tabs.labels().collect();
    assert_eq!(labels, ["About Me", "My Books", "Blog Feed", "DONT PRESS"]);
    assert_eq!(desk.tabs.selected(), Some(PanelKind::About));
}

#[test]
fn switching_tabs_preserves_panel_state() {
    let output = CountingOutput::default();
    let mut desk = desk(output.clone());
    let t0 = Instant::now();

    desk.tabs.select_key(PanelKind::DontPress);
    assert_eq!(desk.feedback.trigger(t0), Transition::Activated);
    desk.update(t0 + Duration::from_millis(300));

    desk.tabs.select_key(PanelKind::Feed);
    desk.tabs.select_key(PanelKind::About);
    desk.tabs.select_key(PanelKind::DontPress);

    assert_eq!(desk.feed.entries().len(), 2);
    assert_eq!(
        desk.feedback.state(),
        FeedbackState::Active { color_index: 3 }
    );
    assert_eq!(output.starts.load(Ordering::SeqCst), 1);
}

#[test]
fn feedback_keeps_ticking_while_another_tab_is_shown() {
    let output = CountingOutput::default();
    let mut desk = desk(output.clone());
    let t0 = Instant::now();
    desk.feedback.trigger(t0);
    desk.tabs.select_key(PanelKind::Books);

    desk.update(t0 + Duration::from_millis(700));
    assert_eq!(desk.feedback.color_index(), 0);
    desk.update(t0 + Duration::from_millis(900));
    assert_eq!(desk.feedback.color_index(), 2);
    assert!(output.playing.load(Ordering::SeqCst));
}

#[test]
fn repeated_triggers_start_audio_once() {
    let output = CountingOutput::default();
    let mut desk = desk(output.clone());
    let t0 = Instant::now();
    for offset in [0, 50, 120, 500] {
        desk.feedback.trigger(t0 + Duration::from_millis(offset));
    }
    assert_eq!(output.starts.load(Ordering::SeqCst), 1);
    assert!(desk.feedback.audio_playing());
}

#[test]
fn missing_feedback_audio_fails_construction() {
    let config = DeskConfig::default();
    let result = Desk::new(
        &config,
        DeskContent::default(),
        Arc::new(StaticSource(Vec::new())),
        &MemoryAssets::new(),
        Box::new(CountingOutput::default()),
    );
    assert!(matches!(result, Err(AssetLoadError::Resolve(_))));
}

#[test]
fn update_requests_repaint_while_active() {
    let mut desk = desk(CountingOutput::default());
    let t0 = Instant::now();
    desk.notices.clear_finished(t0 + Duration::from_secs(60));
    assert_eq!(desk.update(t0), None);
    desk.feedback.trigger(t0);
    let wait = desk.update(t0 + Duration::from_millis(30)).unwrap();
    assert_eq!(wait, Duration::from_millis(70));
}
