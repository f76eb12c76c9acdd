//! The "don't press" panel: a dormant trigger that, once pressed, cycles a
//! colour palette and loops an audio clip for the lifetime of the panel.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::assets::AssetResolver;
use crate::audio::{AssetLoadError, AudioOutput, LoopClip};
use crate::ticker::Ticker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const PALETTE: [Rgb; 7] = [
    Rgb(255, 0, 0),
    Rgb(255, 127, 0),
    Rgb(255, 255, 0),
    Rgb(0, 255, 0),
    Rgb(0, 0, 255),
    Rgb(75, 0, 130),
    Rgb(148, 0, 211),
];

pub const CAPTION_COLOR: Rgb = Rgb(255, 255, 255);
pub const CAPTION_POINT_SIZE: f32 = 20.0;
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackState {
    Dormant,
    Active { color_index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Activated,
    AlreadyActive,
}

/// What the panel surface should show this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackFrame<'a> {
    Trigger,
    Fill {
        color: Rgb,
        caption: &'a str,
        text_color: Rgb,
    },
}

#[derive(Debug, Clone)]
pub struct FeedbackSettings {
    pub audio_asset: String,
    pub caption: String,
    pub tick_period: Duration,
}

pub struct FeedbackPanel {
    state: FeedbackState,
    ticker: Option<Ticker>,
    caption: String,
    tick_period: Duration,
    clip: Arc<LoopClip>,
    output: Box<dyn AudioOutput>,
}

impl FeedbackPanel {
    /// Loads the audio asset once. A missing or unreadable asset is fatal.
    pub fn load(
        resolver: &dyn AssetResolver,
        settings: &FeedbackSettings,
        output: Box<dyn AudioOutput>,
    ) -> Result<Self, AssetLoadError> {
        let bytes = resolver.resolve(&settings.audio_asset)?;
        let clip = LoopClip::from_wav_bytes(&settings.audio_asset, &bytes)?;
        info!(
            asset = %settings.audio_asset,
            frames = clip.frames(),
            sample_rate = clip.sample_rate,
            "feedback audio loaded"
        );
        Ok(Self {
            state: FeedbackState::Dormant,
            ticker: None,
            caption: settings.caption.clone(),
            tick_period: settings.tick_period,
            clip: Arc::new(clip),
            output,
        })
    }

    pub fn state(&self) -> FeedbackState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, FeedbackState::Active { .. })
    }

    pub fn trigger_visible(&self) -> bool {
        !self.is_active()
    }

    pub fn color_index(&self) -> usize {
        match self.state {
            FeedbackState::Dormant => 0,
            FeedbackState::Active { color_index } => color_index,
        }
    }

    pub fn audio_playing(&self) -> bool {
        self.output.is_playing()
    }

    /// Why audio is not playing while the panel is active, if known.
    pub fn audio_problem(&self) -> Option<String> {
        if !self.is_active() || self.output.is_playing() {
            return None;
        }
        Some(
            self.output
                .last_error()
                .unwrap_or_else(|| "audio output unavailable".to_string()),
        )
    }

    /// Dormant → Active. Further calls are ignored.
    pub fn trigger(&mut self, now: Instant) -> Transition {
        if self.is_active() {
            return Transition::AlreadyActive;
        }
        if let Err(err) = self.output.play_looped(Arc::clone(&self.clip)) {
            warn!(%err, "feedback audio could not start");
        }
        self.ticker = Some(Ticker::start(now, self.tick_period));
        self.state = FeedbackState::Active { color_index: 0 };
        info!("feedback panel activated");
        Transition::Activated
    }

    /// Applies every tick due at `now`. Returns the number applied.
    pub fn advance(&mut self, now: Instant) -> u64 {
        let (FeedbackState::Active { color_index }, Some(ticker)) =
            (&mut self.state, self.ticker.as_mut())
        else {
            return 0;
        };
        let due = ticker.due(now);
        let steps = (due % PALETTE.len() as u64) as usize;
        *color_index = (*color_index + steps) % PALETTE.len();
        due
    }

    /// Time until the next repaint is needed, if the panel is animating.
    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        self.ticker.as_ref().map(|ticker| ticker.until_next(now))
    }

    pub fn frame(&self) -> FeedbackFrame<'_> {
        match self.state {
            FeedbackState::Dormant => FeedbackFrame::Trigger,
            FeedbackState::Active { color_index } => FeedbackFrame::Fill {
                color: PALETTE[color_index],
                caption: &self.caption,
                text_color: CAPTION_COLOR,
            },
        }
    }
}

impl Drop for FeedbackPanel {
    fn drop(&mut self) {
        if self.output.is_playing() {
            self.output.stop();
        }
    }
}


#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use tempfile::tempdir;

    use super::testing::{OutputProbe, ProbeOutput};
    use super::*;
    use crate::assets::MemoryAssets;
    use crate::audio::{render_default_loop, write_wav};

    fn settings() -> FeedbackSettings {
        FeedbackSettings {
            audio_asset: "loop.wav".into(),
            caption: "YOU PRESSED IT".into(),
            tick_period: DEFAULT_TICK_PERIOD,
        }
    }

    fn wav_bytes() -> Vec<u8> {
        let dir = tempdir().unwrap();
        let path = dir.path().join("loop.wav");
        write_wav(&path, &render_default_loop()).unwrap();
        std::fs::read(path).unwrap()
    }

    fn panel(fail_audio: bool) -> (FeedbackPanel, Rc<OutputProbe>) {
        let probe = Rc::new(OutputProbe::default());
        let assets = MemoryAssets::new().with("loop.wav", wav_bytes());
        let output = ProbeOutput {
            probe: Rc::clone(&probe),
            fail: fail_audio,
        };
        let panel = FeedbackPanel::load(&assets, &settings(), Box::new(output)).unwrap();
        (panel, probe)
    }

    #[test]
    fn starts_dormant_with_trigger_only() {
        let (mut panel, probe) = panel(false);
        assert_eq!(panel.state(), FeedbackState::Dormant);
        assert_eq!(panel.frame(), FeedbackFrame::Trigger);
        assert!(panel.trigger_visible());
        assert_eq!(panel.advance(Instant::now() + Duration::from_secs(3)), 0);
        assert_eq!(panel.color_index(), 0);
        assert_eq!(probe.starts.get(), 0);
    }

    #[test]
    fn color_index_cycles_modulo_palette() {
        let (mut panel, _probe) = panel(false);
        let t0 = Instant::now();
        panel.trigger(t0);
        for k in 1..=20u32 {
            panel.advance(t0 + DEFAULT_TICK_PERIOD * k);
            assert_eq!(panel.color_index(), k as usize % PALETTE.len());
        }
    }

    #[test]
    fn seven_hundred_ms_advance_seven_times() {
        let (mut panel, probe) = panel(false);
        let t0 = Instant::now();
        panel.trigger(t0);
        assert_eq!(panel.advance(t0 + Duration::from_millis(700)), 7);
        assert_eq!(panel.color_index(), 0);
        assert!(panel.audio_playing());
        assert_eq!(probe.starts.get(), 1);
    }

    #[test]
    fn second_trigger_changes_nothing() {
        let (mut panel, probe) = panel(false);
        let t0 = Instant::now();
        assert_eq!(panel.trigger(t0), Transition::Activated);
        panel.advance(t0 + Duration::from_millis(300));
        assert_eq!(
            panel.trigger(t0 + Duration::from_millis(300)),
            Transition::AlreadyActive
        );
        assert_eq!(panel.color_index(), 3);
        assert_eq!(probe.starts.get(), 1);
        // The first ticker keeps its phase.
        panel.advance(t0 + Duration::from_millis(400));
        assert_eq!(panel.color_index(), 4);
        assert!(!panel.trigger_visible());
    }

    #[test]
    fn active_frame_fills_with_palette_color_and_caption() {
        let (mut panel, _probe) = panel(false);
        let t0 = Instant::now();
        panel.trigger(t0);
        panel.advance(t0 + Duration::from_millis(200));
        assert_eq!(
            panel.frame(),
            FeedbackFrame::Fill {
                color: PALETTE[2],
                caption: "YOU PRESSED IT",
                text_color: CAPTION_COLOR,
            }
        );
    }

    #[test]
    fn audio_device_failure_does_not_block_activation() {
        let (mut panel, probe) = panel(true);
        assert_eq!(panel.trigger(Instant::now()), Transition::Activated);
        assert!(panel.is_active());
        assert!(!panel.audio_playing());
        assert!(panel.audio_problem().is_some());
        assert_eq!(probe.starts.get(), 1);
    }

    #[test]
    fn missing_audio_asset_is_fatal() {
        let probe = Rc::new(OutputProbe::default());
        let output = ProbeOutput { probe, fail: false };
        let result = FeedbackPanel::load(&MemoryAssets::new(), &settings(), Box::new(output));
        assert!(matches!(result, Err(AssetLoadError::Resolve(_))));
    }

    #[test]
    fn dropping_the_panel_stops_playback() {
        let (mut panel, probe) = panel(false);
        panel.trigger(Instant::now());
        drop(panel);
        assert_eq!(probe.stops.get(), 1);
        assert!(!probe.playing.get());
    }
}
