//! Window configuration entities as collected by the configuration UI.

use serde::{Deserialize, Serialize};

/// Which outer-frame dimension supplies a mullion's cut length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Divider runs along the frame height.
    Height,
    /// Divider runs along the frame width.
    Width,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Height => write!(f, "height"),
            Orientation::Width => write!(f, "width"),
        }
    }
}

/// Outer frame of a window: the perimeter profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OuterFrame {
    pub height: f64,
    pub width: f64,
    pub code: String,
}

/// Optional perimeter trim sharing the outer frame's footprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub code: String,
}

/// One glazed sub-panel inside a window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InnerSection {
    pub height: f64,
    pub width: f64,
    pub in_frame_code: String,
    pub beading_code: String,
    /// Present only when the section opts into insect netting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_sash_code: Option<String>,
}

/// A set of identical dividers inside one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MullionConfig {
    pub count: u32,
    pub orientation: Orientation,
    #[serde(rename = "material")]
    pub material_code: String,
}

/// One physical window design, repeated `quantity` times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfiguration {
    pub company: String,
    pub window_type: String,
    pub quantity: u32,
    pub outer_frame: OuterFrame,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    pub inner_sections: Vec<InnerSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mullions: Option<Vec<MullionConfig>>,
    /// Display/deletion identity assigned by the UI at creation time.
    /// Never interpreted by the compiler.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
}

impl WindowConfiguration {
    /// Total number of mullion dividers across all mullion configs,
    /// before the per-window quantity multiplier.
    pub fn mullion_count(&self) -> u32 {
        self.mullions
            .as_deref()
            .map(|ms| ms.iter().map(|m| m.count).sum())
            .unwrap_or(0)
    }
}

impl MullionConfig {
    /// Resolve the divider cut length from the outer frame.
    pub fn divider_length(&self, frame: &OuterFrame) -> f64 {
        match self.orientation {
            Orientation::Width => frame.width,
            Orientation::Height => frame.height,
        }
    }
}
