use crate::markers::REVEALED_CLASS;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Fraction of a reveal target that must be visible before it counts as intersecting.
pub const DEFAULT_THRESHOLD: f64 = 0.2;

/// Viewport inset: targets must clear the bottom 100px before they reveal.
pub const DEFAULT_ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Delay added per rank within an observation batch.
pub const DEFAULT_STAGGER_MS: u64 = 100;

/// Tuning for the scroll-triggered reveal effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealOptions {
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default = "default_root_margin")]
    pub root_margin: String,
    #[serde(default = "default_stagger_ms")]
    pub stagger_ms: u64,
    #[serde(default = "default_revealed_class")]
    pub revealed_class: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            root_margin: default_root_margin(),
            stagger_ms: default_stagger_ms(),
            revealed_class: default_revealed_class(),
        }
    }
}

impl RevealOptions {
    /// Delay before the entry at `rank` in a batch is marked revealed.
    pub fn delay_for(&self, rank: usize) -> Duration {
        let rank = u64::try_from(rank).unwrap_or(u64::MAX);
        Duration::from_millis(self.stagger_ms.saturating_mul(rank))
    }
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}
fn default_root_margin() -> String {
    DEFAULT_ROOT_MARGIN.to_string()
}
fn default_stagger_ms() -> u64 {
    DEFAULT_STAGGER_MS
}
fn default_revealed_class() -> String {
    REVEALED_CLASS.to_string()
}
