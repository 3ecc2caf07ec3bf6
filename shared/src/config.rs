use crate::api::{PROCESS_ENDPOINT, RESULTS_PREFIX};
use crate::error::ConfigError;
use crate::params::{ConfidenceThreshold, DisplayMode, ModelVariant, ProcessingParameters};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

pub const DEFAULT_SAMPLES: [&str; 4] = [
    "/samples/frame_0002.jpg",
    "/samples/frame_0003.jpg",
    "/samples/frame_0241.jpg",
    "/samples/frame_0242.jpg",
];

/// Client settings. Every key is optional in the YAML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub process_endpoint: String,
    pub results_prefix: String,
    pub max_upload_bytes: u64,
    pub samples: Vec<String>,
    pub default_model: ModelVariant,
    pub default_confidence: ConfidenceThreshold,
    pub default_display_mode: DisplayMode,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            process_endpoint: PROCESS_ENDPOINT.to_string(),
            results_prefix: RESULTS_PREFIX.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            samples: DEFAULT_SAMPLES.iter().map(|s| s.to_string()).collect(),
            default_model: ModelVariant::default(),
            default_confidence: ConfidenceThreshold::default(),
            default_display_mode: DisplayMode::default(),
        }
    }
}

impl ClientConfig {
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to a mapping.
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn initial_parameters(&self) -> ProcessingParameters {
        ProcessingParameters {
            model: self.default_model,
            confidence: self.default_confidence,
            display_mode: self.default_display_mode,
        }
    }
}
