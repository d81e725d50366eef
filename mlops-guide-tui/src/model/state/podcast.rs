//! 播客页面状态
//!
//! 播放器通过 `on_state_change` 把状态变化发进通道，
//! 主循环每个 Tick 调用 [`PodcastState::tick`] 取出。

use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use mlops_guide_core::audio::{AudioPlayer, PlaybackState};
use mlops_guide_core::CoreResult;

pub struct PodcastState {
    player: Box<dyn AudioPlayer>,
    events: Receiver<PlaybackState>,
    state: PlaybackState,
}

impl PodcastState {
    pub fn new(mut player: Box<dyn AudioPlayer>) -> Self {
        let (tx, events) = mpsc::channel();
        player.on_state_change(Box::new(move |state| {
            // 接收端随 App 一起销毁，之后的通知直接丢弃
            let _ = tx.send(state);
        }));
        let state = player.state();
        Self {
            player,
            events,
            state,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn elapsed(&self) -> Duration {
        self.player.elapsed()
    }

    /// 播放 / 暂停
    pub fn toggle(&mut self) -> CoreResult<()> {
        self.player.toggle()
    }

    /// 轮询播放器，返回这段时间内发生的状态变化
    pub fn tick(&mut self) -> Vec<PlaybackState> {
        self.player.tick();
        let changes: Vec<_> = self.events.try_iter().collect();
        if let Some(last) = changes.last() {
            self.state = *last;
        }
        changes
    }
}
