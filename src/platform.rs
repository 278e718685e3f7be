use std::fs;

/// Runtime platform capabilities relevant to this game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Platform {
    is_wsl: bool,
}

impl Platform {
    /// Detects platform details from the current runtime environment.
    #[must_use]
    pub fn detect() -> Self {
        Self {
            is_wsl: detect_wsl(),
        }
    }

    /// Returns true when running under Windows Subsystem for Linux.
    ///
    /// Under WSL, ALSA playback is usually unavailable; sound goes through
    /// the Windows host instead.
    #[must_use]
    pub fn is_wsl(self) -> bool {
        self.is_wsl
    }
}

fn detect_wsl() -> bool {
    let Ok(version) = fs::read_to_string("/proc/version") else {
        return false;
    };

    version.to_ascii_lowercase().contains("microsoft")
}
