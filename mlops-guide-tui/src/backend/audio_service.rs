//! 外部播放器进程
//!
//! 解码和输出交给配置的命令（默认 ffplay）。暂停会结束子进程并记下位置，
//! 继续播放时以 `-ss {offset}` 从该位置重新启动。

use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use mlops_guide_core::audio::{AudioPlayer, PlaybackClock, PlaybackState, StateListener};
use mlops_guide_core::{CatalogError, CoreResult};

/// 以命令模板驱动的播放器
pub struct CommandPlayer {
    template: String,
    path: PathBuf,
    child: Option<Child>,
    state: PlaybackState,
    clock: PlaybackClock,
    listeners: Vec<StateListener>,
}

impl CommandPlayer {
    pub fn new(template: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            template: template.into(),
            path: path.into(),
            child: None,
            state: PlaybackState::Idle,
            clock: PlaybackClock::default(),
            listeners: Vec::new(),
        }
    }

    /// 展开模板：先按 shell 规则切分，再替换占位符，所以带空格的路径仍是一个参数
    fn command_line(&self, offset: Duration) -> CoreResult<Vec<String>> {
        let words = shlex::split(&self.template).ok_or_else(|| {
            CatalogError::Playback(format!("unbalanced quotes in player command: {}", self.template))
        })?;
        if words.is_empty() {
            return Err(CatalogError::Playback("player command is empty".to_string()));
        }

        let offset = format!("{:.3}", offset.as_secs_f64());
        let path = self.path.display().to_string();
        Ok(words
            .into_iter()
            .map(|word| word.replace("{offset}", &offset).replace("{path}", &path))
            .collect())
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state == state {
            return;
        }
        log::info!("Playback {} -> {}", self.state, state);
        self.state = state;
        for listener in &mut self.listeners {
            listener(state);
        }
    }

    fn stop_child(&mut self) {
        if let Some(mut child) = self.child.take() {
            // 子进程可能已经自行退出
            if let Err(e) = child.kill() {
                log::debug!("Player already exited: {e}");
            }
            let _ = child.wait();
        }
    }
}

impl AudioPlayer for CommandPlayer {
    fn play(&mut self) -> CoreResult<()> {
        if self.state.is_playing() {
            return Ok(());
        }
        if self.state == PlaybackState::Ended {
            self.clock.reset();
        }

        let now = Instant::now();
        let args = self.command_line(self.clock.elapsed(now))?;
        log::debug!("Spawning player: {args:?}");

        let child = Command::new(&args[0])
            .args(&args[1..])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| CatalogError::Playback(format!("{}: {e}", args[0])))?;

        self.child = Some(child);
        self.clock.start(now);
        self.set_state(PlaybackState::Playing);
        Ok(())
    }

    fn pause(&mut self) -> CoreResult<()> {
        if !self.state.is_playing() {
            return Ok(());
        }
        self.stop_child();
        self.clock.pause(Instant::now());
        self.set_state(PlaybackState::Paused);
        Ok(())
    }

    fn tick(&mut self) {
        let Some(child) = self.child.as_mut() else {
            return;
        };

        match child.try_wait() {
            Ok(Some(status)) => {
                if !status.success() {
                    log::warn!("Player exited with {status}");
                }
                self.child = None;
                self.clock.reset();
                self.set_state(PlaybackState::Ended);
            }
            Ok(None) => {}
            Err(e) => log::warn!("Failed to poll player: {e}"),
        }
    }

    fn state(&self) -> PlaybackState {
        self.state
    }

    fn elapsed(&self) -> Duration {
        self.clock.elapsed(Instant::now())
    }

    fn on_state_change(&mut self, listener: StateListener) {
        self.listeners.push(listener);
    }
}

impl Drop for CommandPlayer {
    fn drop(&mut self) {
        self.stop_child();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::mpsc;

    use super::*;

    #[test]
    fn expands_placeholders_inside_words() {
        let player = CommandPlayer::new(
            "ffplay -nodisp -ss {offset} {path}",
            "/srv/my assets/podcast.wav",
        );
        let args = player.command_line(Duration::from_millis(1500)).unwrap();
        assert_eq!(
            args,
            vec!["ffplay", "-nodisp", "-ss", "1.500", "/srv/my assets/podcast.wav"]
        );
    }

    #[test]
    fn rejects_unbalanced_template() {
        let player = CommandPlayer::new("ffplay \"{path}", "a.wav");
        assert!(matches!(
            player.command_line(Duration::ZERO),
            Err(CatalogError::Playback(_))
        ));
    }

    #[test]
    fn missing_binary_is_a_playback_error() {
        let mut player = CommandPlayer::new("mlops-guide-no-such-player {path}", "a.wav");
        assert!(matches!(player.play(), Err(CatalogError::Playback(_))));
        assert_eq!(player.state(), PlaybackState::Idle);
    }

    #[test]
    fn pause_when_idle_is_noop() {
        let mut player = CommandPlayer::new("true", "a.wav");
        player.pause().unwrap();
        assert_eq!(player.state(), PlaybackState::Idle);
    }

    #[cfg(unix)]
    #[test]
    fn short_lived_player_ends() {
        let (tx, rx) = mpsc::channel();
        let mut player = CommandPlayer::new("true {path}", "a.wav");
        player.on_state_change(Box::new(move |state| {
            let _ = tx.send(state);
        }));

        player.play().unwrap();
        for _ in 0..200 {
            player.tick();
            if player.state() == PlaybackState::Ended {
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }

        assert_eq!(player.state(), PlaybackState::Ended);
        let seen: Vec<_> = rx.try_iter().collect();
        assert_eq!(seen, vec![PlaybackState::Playing, PlaybackState::Ended]);
    }

    #[cfg(unix)]
    #[test]
    fn pause_kills_and_resume_respawns() {
        let mut player = CommandPlayer::new("sleep 30", "a.wav");
        player.play().unwrap();
        player.pause().unwrap();
        assert_eq!(player.state(), PlaybackState::Paused);
        assert!(player.child.is_none());

        player.toggle().unwrap();
        assert_eq!(player.state(), PlaybackState::Playing);
    }
}
