//! 测试辅助：不启动真实进程的播放器和预置 App

use std::path::PathBuf;
use std::time::Duration;

use mlops_guide_core::audio::{AudioPlayer, PlaybackState, StateListener};
use mlops_guide_core::{CatalogError, ContentLibrary, CoreResult};

use crate::model::App;

/// 只记录状态的播放器，`failing` 为真时 play 返回错误
#[derive(Default)]
pub struct FakePlayer {
    state: PlaybackState,
    failing: bool,
    listeners: Vec<StateListener>,
}

impl FakePlayer {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    fn transition(&mut self, state: PlaybackState) {
        self.state = state;
        for listener in &mut self.listeners {
            listener(state);
        }
    }
}

impl AudioPlayer for FakePlayer {
    fn play(&mut self) -> CoreResult<()> {
        if self.failing {
            return Err(CatalogError::Playback("no such file".into()));
        }
        self.transition(PlaybackState::Playing);
        Ok(())
    }

    fn pause(&mut self) -> CoreResult<()> {
        if self.state.is_playing() {
            self.transition(PlaybackState::Paused);
        }
        Ok(())
    }

    fn tick(&mut self) {}

    fn state(&self) -> PlaybackState {
        self.state
    }

    fn elapsed(&self) -> Duration {
        Duration::from_secs(75)
    }

    fn on_state_change(&mut self, listener: StateListener) {
        self.listeners.push(listener);
    }
}

#[allow(clippy::unwrap_used)]
pub fn app_with(player: FakePlayer) -> App {
    App::new(
        ContentLibrary::builtin().unwrap(),
        PathBuf::from("public"),
        Box::new(player),
    )
}

pub fn app() -> App {
    app_with(FakePlayer::default())
}
