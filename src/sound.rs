use std::process::{Command, Stdio};

use crate::game::GameEvent;
use crate::platform::Platform;

const FOOD_SOUND: &str = "assets/food.wav";
const POISON_SOUND: &str = "assets/poison.wav";
const BONUS_SOUND: &str = "assets/bonus.wav";
const GAME_OVER_SOUND: &str = "assets/gameover.wav";

/// Fire-and-forget sound effects driven by game events.
///
/// Playback goes through whatever system player is available; every failure
/// (missing player, missing asset, dead audio stack) is ignored. The game
/// state never learns whether a sound actually played.
#[derive(Debug, Clone, Copy)]
pub struct SoundPlayer {
    enabled: bool,
    platform: Platform,
}

impl SoundPlayer {
    #[must_use]
    pub fn new(enabled: bool, platform: Platform) -> Self {
        Self { enabled, platform }
    }

    /// Reacts to one tick's event, if any.
    pub fn on_event(&self, event: GameEvent) {
        if !self.enabled {
            return;
        }

        let asset = match event {
            GameEvent::FoodEaten => FOOD_SOUND,
            GameEvent::PoisonEaten => POISON_SOUND,
            GameEvent::BonusEaten => BONUS_SOUND,
            GameEvent::GameOver => GAME_OVER_SOUND,
        };

        self.spawn_player(asset);
    }

    fn spawn_player(&self, asset: &str) {
        let mut command = if cfg!(target_os = "windows") || self.platform.is_wsl() {
            let mut c = Command::new("powershell.exe");
            c.arg("-c").arg(format!(
                "(New-Object Media.SoundPlayer '{asset}').PlaySync();"
            ));
            c
        } else if cfg!(target_os = "macos") {
            let mut c = Command::new("afplay");
            c.arg(asset);
            c
        } else {
            let mut c = Command::new("aplay");
            c.arg(asset);
            c
        };

        // Detached child; we never wait on it or look at its exit status.
        let _ = command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
    }
}
