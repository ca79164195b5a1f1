use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Viewport presets offered by the page preview
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DevicePreset {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl DevicePreset {
    pub const ALL: [DevicePreset; 3] = [DevicePreset::Desktop, DevicePreset::Tablet, DevicePreset::Mobile];

    pub fn width_px(&self) -> u32 {
        match self {
            DevicePreset::Desktop => 1280,
            DevicePreset::Tablet => 768,
            DevicePreset::Mobile => 375,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DevicePreset::Desktop => "Desktop",
            DevicePreset::Tablet => "Tablet",
            DevicePreset::Mobile => "Mobile",
        }
    }
}
