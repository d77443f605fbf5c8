use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::kernel::assist::AssistKind;
use crate::models::DEFAULT_FILE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_file")]
    pub default_file: String,
    #[serde(default)]
    pub keybindings: Vec<KeybindingRule>,
    #[serde(default)]
    pub latency: LatencySettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeybindingRule {
    pub key: String,
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Simulated assistant response time: `base_ms` plus up to `jitter_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyProfile {
    pub base_ms: u64,
    #[serde(default)]
    pub jitter_ms: u64,
}

impl LatencyProfile {
    pub const fn new(base_ms: u64, jitter_ms: u64) -> Self {
        Self { base_ms, jitter_ms }
    }

    /// Same `seed` gives the same delay.
    pub fn delay(&self, seed: u64) -> Duration {
        let jitter = self.jitter_ms.checked_add(1).map_or(seed, |span| seed % span);
        Duration::from_millis(self.base_ms.saturating_add(jitter))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencySettings {
    #[serde(default = "default_generate_latency")]
    pub generate: LatencyProfile,
    #[serde(default = "default_fix_latency")]
    pub fix: LatencyProfile,
    #[serde(default = "default_chat_latency")]
    pub chat: LatencyProfile,
}

impl LatencySettings {
    pub fn profile(&self, kind: AssistKind) -> LatencyProfile {
        match kind {
            AssistKind::Generate => self.generate,
            AssistKind::Fix => self.fix,
            AssistKind::Chat => self.chat,
        }
    }

    pub fn instant() -> Self {
        Self {
            generate: LatencyProfile::new(0, 0),
            fix: LatencyProfile::new(0, 0),
            chat: LatencyProfile::new(0, 0),
        }
    }
}

impl Default for LatencySettings {
    fn default() -> Self {
        Self {
            generate: default_generate_latency(),
            fix: default_fix_latency(),
            chat: default_chat_latency(),
        }
    }
}

fn default_file() -> String {
    DEFAULT_FILE.to_string()
}

fn default_generate_latency() -> LatencyProfile {
    LatencyProfile::new(1200, 800)
}

fn default_fix_latency() -> LatencyProfile {
    LatencyProfile::new(800, 400)
}

fn default_chat_latency() -> LatencyProfile {
    LatencyProfile::new(1500, 0)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_file: default_file(),
            keybindings: Vec::new(),
            latency: LatencySettings::default(),
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
