use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{EnumMessage, IntoEnumIterator};
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// Segmentation weights the service can run. The wire id selects
/// `models/{id}.pt` on the backend.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    EnumIter,
    EnumMessage,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ModelVariant {
    #[default]
    #[strum(
        message = "Daytime",
        detailed_message = "Trained on daylight dashcam frames. Best for clear, well lit roads."
    )]
    Daytime,
    #[strum(
        message = "Nighttime",
        detailed_message = "Tuned for low light and headlight glare."
    )]
    Nighttime,
}

/// How the service draws detected boundaries onto the result.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    EnumIter,
    EnumMessage,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    #[strum(message = "Draw Labels")]
    Draw,
    #[strum(message = "Highlight Boundaries")]
    Highlight,
    #[strum(message = "Outline Only")]
    Outline,
    #[serde(rename = "none")]
    #[strum(serialize = "none", message = "No Labels")]
    NoLabels,
}

macro_rules! wire_enum {
    ($ty:ty) => {
        impl $ty {
            pub fn wire_id(self) -> &'static str {
                self.into()
            }

            pub fn label(self) -> &'static str {
                self.get_message().unwrap_or_else(|| self.wire_id())
            }

            pub fn all() -> impl Iterator<Item = Self> {
                <Self as IntoEnumIterator>::iter()
            }
        }
    };
}

wire_enum!(ModelVariant);
wire_enum!(DisplayMode);

impl ModelVariant {
    pub fn description(self) -> &'static str {
        self.get_detailed_message().unwrap_or_default()
    }
}

/// Slider value in percent, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{}%", _0)]
#[serde(from = "u8", into = "u8")]
pub struct ConfidenceThreshold(u8);

impl ConfidenceThreshold {
    pub const MAX: u8 = 100;

    pub fn new(percent: u8) -> Self {
        Self(percent.min(Self::MAX))
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    pub fn normalized(self) -> f32 {
        f32::from(self.0) / 100.0
    }

    /// The value sent in the `confidence` form field: the shortest decimal
    /// for `percent / 100` (`37` -> `0.37`, `50` -> `0.5`, `100` -> `1`).
    pub fn wire_value(self) -> String {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac == 0 {
            whole.to_string()
        } else if frac % 10 == 0 {
            format!("{}.{}", whole, frac / 10)
        } else {
            format!("{}.{:02}", whole, frac)
        }
    }
}

impl Default for ConfidenceThreshold {
    fn default() -> Self {
        Self(50)
    }
}

impl From<u8> for ConfidenceThreshold {
    fn from(percent: u8) -> Self {
        Self::new(percent)
    }
}

impl From<ConfidenceThreshold> for u8 {
    fn from(threshold: ConfidenceThreshold) -> Self {
        threshold.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProcessingParameters {
    pub model: ModelVariant,
    pub confidence: ConfidenceThreshold,
    pub display_mode: DisplayMode,
}
