//! Config service: settings in effect for the session.

use crate::core::Service;
use crate::kernel::assist::AssistKind;
use crate::kernel::services::ports::settings::{LatencyProfile, Settings};

pub struct ConfigService {
    settings: Settings,
}

impl ConfigService {
    pub fn new() -> Self {
        Self {
            settings: Settings::default(),
        }
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn default_file(&self) -> &str {
        &self.settings.default_file
    }

    pub fn latency(&self, kind: AssistKind) -> LatencyProfile {
        self.settings.latency.profile(kind)
    }

    pub fn set_latency(&mut self, kind: AssistKind, profile: LatencyProfile) {
        let latency = &mut self.settings.latency;
        match kind {
            AssistKind::Generate => latency.generate = profile,
            AssistKind::Fix => latency.fix = profile,
            AssistKind::Chat => latency.chat = profile,
        }
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service for ConfigService {
    fn name(&self) -> &'static str {
        "ConfigService"
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/config.rs"]
mod tests;
