use models::RevealOptions;

use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Settings the browser host needs at runtime.
///
/// The renderer embeds this as JSON in the page so the wasm bundle does not
/// need its own copy of `portfolio.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub reveal: RevealOptions,
    #[serde(default = "default_confirmation")]
    pub confirmation: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            reveal: RevealOptions::default(),
            confirmation: default_confirmation(),
        }
    }
}

impl ClientConfig {
    /// Parse the embedded JSON block, falling back to defaults when it is
    /// missing or malformed.
    pub fn from_embedded(json: Option<&str>) -> Self {
        let Some(json) = json else {
            info!("No embedded client config, using defaults");
            return Self::default();
        };

        serde_json::from_str(json).unwrap_or_else(|e| {
            warn!("Failed to parse embedded client config, using defaults: {e}");
            Self::default()
        })
    }
}

fn default_confirmation() -> String {
    super::defaults::contact().confirmation
}
