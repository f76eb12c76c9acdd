//! Decoded audio clips and the playback seam used by the feedback panel.

use std::f32::consts::TAU;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use thiserror::Error;

use crate::assets::AssetError;

#[derive(Debug, Error)]
pub enum AssetLoadError {
    #[error(transparent)]
    Resolve(#[from] AssetError),
    #[error("failed to decode audio asset `{name}`: {source}")]
    Decode {
        name: String,
        #[source]
        source: hound::Error,
    },
    #[error("audio asset `{0}` contains no samples")]
    Empty(String),
}

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio output device available")]
    NoDevice,
    #[error("audio output failed: {0}")]
    Backend(String),
}

/// Interleaved PCM held in memory for looped playback.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopClip {
    pub sample_rate: u32,
    pub channels: u16,
    samples: Vec<f32>,
}

impl LoopClip {
    pub fn new(sample_rate: u32, channels: u16, samples: Vec<f32>) -> Self {
        Self {
            sample_rate,
            channels: channels.max(1),
            samples,
        }
    }

    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Sample at `frame` for `channel`, wrapping around the clip end.
    /// Channels beyond the clip's own count reuse its last channel.
    pub fn sample_wrapped(&self, frame: usize, channel: usize) -> f32 {
        let frames = self.frames();
        if frames == 0 {
            return 0.0;
        }
        let channels = self.channels as usize;
        let channel = channel.min(channels - 1);
        self.samples[(frame % frames) * channels + channel]
    }

    /// Decodes a WAV document.
    pub fn from_wav_bytes(name: &str, bytes: &[u8]) -> Result<Self, AssetLoadError> {
        let decode_err = |source| AssetLoadError::Decode {
            name: name.to_string(),
            source,
        };
        let reader = WavReader::new(Cursor::new(bytes)).map_err(decode_err)?;
        let spec = reader.spec();
        let samples: Vec<f32> = match spec.sample_format {
            SampleFormat::Float => reader
                .into_samples::<f32>()
                .collect::<Result<_, _>>()
                .map_err(decode_err)?,
            SampleFormat::Int => {
                let scale = (1_i64 << (spec.bits_per_sample.max(1) - 1)) as f32;
                reader
                    .into_samples::<i32>()
                    .map(|sample| sample.map(|value| value as f32 / scale))
                    .collect::<Result<_, _>>()
                    .map_err(decode_err)?
            }
        };
        if samples.is_empty() {
            return Err(AssetLoadError::Empty(name.to_string()));
        }
        Ok(Self::new(spec.sample_rate, spec.channels, samples))
    }
}

/// Output able to loop a clip until stopped.
pub trait AudioOutput {
    fn play_looped(&mut self, clip: Arc<LoopClip>) -> Result<(), AudioError>;
    fn is_playing(&self) -> bool;
    fn stop(&mut self);

    /// Most recent playback failure, if the output keeps one.
    fn last_error(&self) -> Option<String> {
        None
    }
}

/// Output that discards audio. Used when playback is disabled.
#[derive(Debug, Default)]
pub struct SilentOutput {
    playing: bool,
}

impl AudioOutput for SilentOutput {
    fn play_looped(&mut self, _clip: Arc<LoopClip>) -> Result<(), AudioError> {
        self.playing = true;
        Ok(())
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn stop(&mut self) {
        self.playing = false;
    }
}

const DEFAULT_LOOP_RATE: u32 = 44_100;
const DEFAULT_LOOP_NOTES: [f32; 8] = [
    523.25, 659.25, 783.99, 1046.5, 783.99, 659.25, 587.33, 698.46,
];

/// Renders the stock feedback loop: a short arpeggio of enveloped sines.
pub fn render_default_loop() -> LoopClip {
    let note_frames = (DEFAULT_LOOP_RATE / 8) as usize;
    let mut samples = Vec::with_capacity(note_frames * DEFAULT_LOOP_NOTES.len());
    for frequency in DEFAULT_LOOP_NOTES {
        for frame in 0..note_frames {
            let t = frame as f32 / DEFAULT_LOOP_RATE as f32;
            let progress = frame as f32 / note_frames as f32;
            let envelope = (1.0 - progress).powi(2) * (progress * 40.0).min(1.0);
            samples.push((TAU * frequency * t).sin() * envelope * 0.4);
        }
    }
    LoopClip::new(DEFAULT_LOOP_RATE, 1, samples)
}

/// Writes a clip as 16-bit PCM WAV.
pub fn write_wav(path: &Path, clip: &LoopClip) -> Result<(), hound::Error> {
    let spec = WavSpec {
        channels: clip.channels,
        sample_rate: clip.sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec)?;
    for sample in clip.samples() {
        let value = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
        writer.write_sample(value)?;
    }
    writer.finalize()
}
