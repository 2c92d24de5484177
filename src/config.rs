use std::time::Duration;

use serde::Deserialize;

use crate::{content::ContentError, reveal::REVEAL_THRESHOLD};

/// Timing knobs for the page, read from the `settings` object of the content
/// file. Anything left out keeps its default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub reveal_threshold: f64,
    pub send_delay_ms: u64,
    pub success_display_ms: u64,
    pub typewriter_interval_ms: u64,
    pub counter_interval_ms: u64,
    pub counter_step: u32,
    pub counter_target: u32,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            reveal_threshold: REVEAL_THRESHOLD,
            send_delay_ms: 1500,
            success_display_ms: 5000,
            typewriter_interval_ms: 100,
            counter_interval_ms: 30,
            counter_step: 2,
            counter_target: 50,
        }
    }
}

impl SiteSettings {
    pub fn send_delay(&self) -> Duration {
        Duration::from_millis(self.send_delay_ms)
    }

    pub fn success_display(&self) -> Duration {
        Duration::from_millis(self.success_display_ms)
    }

    pub fn check(&self) -> Result<(), ContentError> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ContentError::InvalidSetting(format!(
                "reveal_threshold must be within 0..=1, got {}",
                self.reveal_threshold
            )));
        }
        if self.typewriter_interval_ms == 0 || self.counter_interval_ms == 0 {
            return Err(ContentError::InvalidSetting(
                "animation intervals must be non-zero".to_string(),
            ));
        }
        if self.counter_step == 0 {
            return Err(ContentError::InvalidSetting(
                "counter_step must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}
