use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use authordesk_core::{AudioError, AudioOutput, LoopClip};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, SampleFormat, SizedSample, StreamConfig};
use parking_lot::Mutex;
use tracing::{error, info};

/// Loops a clip on the default output device until stopped or dropped.
pub struct CpalLoopOutput {
    stream: Option<cpal::Stream>,
    playing: Arc<AtomicBool>,
    last_error: Arc<Mutex<Option<String>>>,
}

impl CpalLoopOutput {
    pub fn new() -> Self {
        Self {
            stream: None,
            playing: Arc::new(AtomicBool::new(false)),
            last_error: Arc::new(Mutex::new(None)),
        }
    }

    fn open_stream(&self, clip: Arc<LoopClip>) -> Result<cpal::Stream, AudioError> {
        let host = cpal::default_host();
        let device = host.default_output_device().ok_or(AudioError::NoDevice)?;
        let device_name = device.name().unwrap_or_else(|_| "unknown device".into());
        let supported = device
            .default_output_config()
            .map_err(|err| AudioError::Backend(err.to_string()))?;
        let stream_config: StreamConfig = supported.config();
        info!(
            device = %device_name,
            sample_rate = stream_config.sample_rate.0,
            channels = stream_config.channels,
            "opening feedback audio stream"
        );

        let last_error = Arc::clone(&self.last_error);
        let playing = Arc::clone(&self.playing);
        let err_fn = move |err: cpal::StreamError| {
            error!(?err, "audio stream error");
            playing.store(false, Ordering::Release);
            *last_error.lock() = Some(err.to_string());
        };

        match supported.sample_format() {
            SampleFormat::F32 => build_stream::<f32>(&device, &stream_config, clip, err_fn),
            SampleFormat::I16 => build_stream::<i16>(&device, &stream_config, clip, err_fn),
            SampleFormat::U16 => build_stream::<u16>(&device, &stream_config, clip, err_fn),
            SampleFormat::U8 => build_stream::<u8>(&device, &stream_config, clip, err_fn),
            other => Err(AudioError::Backend(format!(
                "unsupported output sample format: {other:?}"
            ))),
        }
    }
}

impl Default for CpalLoopOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioOutput for CpalLoopOutput {
    fn play_looped(&mut self, clip: Arc<LoopClip>) -> Result<(), AudioError> {
        if self.stream.is_some() {
            return Ok(());
        }
        let started = self.open_stream(clip).and_then(|stream| {
            stream
                .play()
                .map_err(|err| AudioError::Backend(err.to_string()))?;
            Ok(stream)
        });
        let stream = match started {
            Ok(stream) => stream,
            Err(err) => {
                *self.last_error.lock() = Some(err.to_string());
                return Err(err);
            }
        };
        self.playing.store(true, Ordering::Release);
        self.stream = Some(stream);
        Ok(())
    }

    fn is_playing(&self) -> bool {
        self.stream.is_some() && self.playing.load(Ordering::Acquire)
    }

    fn stop(&mut self) {
        if let Some(stream) = self.stream.take() {
            if let Err(err) = stream.pause() {
                error!(?err, "failed to pause audio stream");
            }
        }
        self.playing.store(false, Ordering::Release);
    }

    fn last_error(&self) -> Option<String> {
        self.last_error.lock().clone()
    }
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &StreamConfig,
    clip: Arc<LoopClip>,
    err_fn: impl FnMut(cpal::StreamError) + Send + 'static,
) -> Result<cpal::Stream, AudioError>
where
    T: SizedSample + FromSample<f32>,
{
    let channels = config.channels as usize;
    let step = clip.sample_rate as f64 / config.sample_rate.0.max(1) as f64;
    let mut cursor = 0.0_f64;
    device
        .build_output_stream(
            config,
            move |output: &mut [T], _| {
                render_looped(&clip, &mut cursor, step, channels, output);
            },
            err_fn,
            None,
        )
        .map_err(|err| AudioError::Backend(err.to_string()))
}

/// Fills `output` from `clip`, wrapping at the clip end. `step` is the number
/// of clip frames consumed per device frame.
fn render_looped<T>(clip: &LoopClip, cursor: &mut f64, step: f64, channels: usize, output: &mut [T])
where
    T: SizedSample + FromSample<f32>,
{
    let frames = clip.frames();
    if channels == 0 || frames == 0 {
        for sample in output.iter_mut() {
            *sample = T::from_sample(0.0);
        }
        return;
    }
    for frame in output.chunks_mut(channels) {
        let source = *cursor as usize;
        for (channel, sample) in frame.iter_mut().enumerate() {
            *sample = T::from_sample(clip.sample_wrapped(source, channel));
        }
        *cursor += step;
        if *cursor >= frames as f64 {
            *cursor -= frames as f64;
        }
    }
}
