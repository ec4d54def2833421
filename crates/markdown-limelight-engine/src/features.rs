use serde::{Deserialize, Serialize};

/// Per-category emission toggles.
///
/// Detection always runs (headings feed the active-heading chain and the
/// Setext ranges regardless); a disabled category only suppresses output.
/// Every toggle defaults to enabled, including when deserialized from a
/// config file with missing keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureToggles {
    pub fenced_code: bool,
    pub indented_code: bool,
    pub inline_code: bool,
    pub quote_text: bool,
    pub quote_markers: bool,
    pub thematic_breaks: bool,
    pub strikethrough: bool,
    pub hard_breaks: bool,
    pub active_headings: bool,
    pub setext_h1: bool,
    pub setext_h2: bool,
}

impl Default for FeatureToggles {
    fn default() -> Self {
        Self {
            fenced_code: true,
            indented_code: true,
            inline_code: true,
            quote_text: true,
            quote_markers: true,
            thematic_breaks: true,
            strikethrough: true,
            hard_breaks: true,
            active_headings: true,
            setext_h1: true,
            setext_h2: true,
        }
    }
}
