//! Audio playback seam and the cosmetic wave visualizer
//!
//! Decoding and output are delegated to whatever implements [`AudioPlayer`];
//! the page only needs to know whether something is playing.

use std::f64::consts::TAU;
use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing,
    Paused,
    Ended,
}

impl PlaybackState {
    pub fn is_playing(self) -> bool {
        self == Self::Playing
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Playing => "playing",
            Self::Paused => "paused",
            Self::Ended => "ended",
        };
        f.write_str(s)
    }
}

/// Listener invoked on every play / pause / end transition.
pub type StateListener = Box<dyn FnMut(PlaybackState) + Send>;

/// Playback of a single audio source.
pub trait AudioPlayer {
    /// Start or resume playback.
    fn play(&mut self) -> CoreResult<()>;

    /// Pause playback; no-op unless playing.
    fn pause(&mut self) -> CoreResult<()>;

    /// Poll the underlying player without blocking, firing listeners on change.
    fn tick(&mut self);

    fn state(&self) -> PlaybackState;

    /// Playback position.
    fn elapsed(&self) -> Duration;

    fn on_state_change(&mut self, listener: StateListener);

    /// Play when not playing, pause otherwise.
    fn toggle(&mut self) -> CoreResult<()> {
        if self.state().is_playing() {
            self.pause()
        } else {
            self.play()
        }
    }
}

/// Tracks the playback position across pause/resume.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaybackClock {
    offset: Duration,
    resumed_at: Option<Instant>,
}

impl PlaybackClock {
    pub fn start(&mut self, now: Instant) {
        if self.resumed_at.is_none() {
            self.resumed_at = Some(now);
        }
    }

    pub fn pause(&mut self, now: Instant) {
        if let Some(at) = self.resumed_at.take() {
            self.offset += now.saturating_duration_since(at);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        self.offset
            + self
                .resumed_at
                .map_or(Duration::ZERO, |at| now.saturating_duration_since(at))
    }

    pub fn is_running(&self) -> bool {
        self.resumed_at.is_some()
    }
}

/// Number of bars in the wave.
pub const WAVE_BARS: usize = 20;
/// One full shrink-and-grow cycle.
const WAVE_PERIOD: f64 = 1.0;
/// Phase offset between neighbouring bars, in seconds.
const WAVE_STAGGER: f64 = 0.05;

/// Vertical scale of each bar at `elapsed` since playback started.
///
/// Each bar eases from 1.0 down to 0.5 and back once per second, starting
/// `index * 50ms` after the previous one. Bars that have not started yet stay
/// at full height.
pub fn wave_scales(elapsed: Duration) -> [f64; WAVE_BARS] {
    let t = elapsed.as_secs_f64();
    let mut scales = [1.0; WAVE_BARS];
    for (i, scale) in scales.iter_mut().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let local = t - i as f64 * WAVE_STAGGER;
        if local > 0.0 {
            let phase = (local / WAVE_PERIOD).fract();
            *scale = 0.75 + 0.25 * (TAU * phase).cos();
        }
    }
    scales
}

/// `mm:ss` rendering of a playback position.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn clock_accumulates_across_pause() {
        let t0 = Instant::now();
        let mut clock = PlaybackClock::default();
        clock.start(t0);
        clock.pause(t0 + Duration::from_secs(3));
        assert_eq!(clock.elapsed(t0 + Duration::from_secs(10)), Duration::from_secs(3));
        clock.start(t0 + Duration::from_secs(10));
        assert_eq!(clock.elapsed(t0 + Duration::from_secs(12)), Duration::from_secs(5));
        clock.reset();
        assert!(!clock.is_running());
        assert_eq!(clock.elapsed(t0), Duration::ZERO);
    }

    #[test]
    fn wave_starts_full_and_dips_to_half() {
        let start = wave_scales(Duration::ZERO);
        assert!(start.iter().all(|s| (*s - 1.0).abs() < f64::EPSILON));

        let half = wave_scales(Duration::from_millis(500));
        assert!((half[0] - 0.5).abs() < 1e-9);
        for scale in half {
            assert!((0.5..=1.0).contains(&scale));
        }
    }

    #[test]
    fn bars_are_staggered() {
        let scales = wave_scales(Duration::from_millis(300));
        assert!(scales[0] < scales[5]);
        // bar 19 starts at 950ms
        assert!((scales[19] - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_elapsed(Duration::from_secs(0)), "00:00");
        assert_eq!(format_elapsed(Duration::from_secs(754)), "12:34");
    }
}
