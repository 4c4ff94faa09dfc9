//! Closed enumeration of oil-painting style presets.
//!
//! The catalogue loaded by `impasto-store` is validated against this
//! enumeration at load time, so every key listed here resolves to a preset
//! on any constructed store.

use serde::{Deserialize, Serialize};

/// One of the fixed oil-painting conversion styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleKey {
    ClassicalRenaissance,
    BaroqueDrama,
    ImpressionistLight,
    PostImpressionistExpression,
    RomanticLandscape,
    PortraitMaster,
    ModernAbstract,
    PhotorealisticOil,
}

impl StyleKey {
    /// All styles in enumeration order. Listing and unrecognized-subject
    /// recommendation fallbacks use this order.
    pub const ALL: &'static [StyleKey] = &[
        StyleKey::ClassicalRenaissance,
        StyleKey::BaroqueDrama,
        StyleKey::ImpressionistLight,
        StyleKey::PostImpressionistExpression,
        StyleKey::RomanticLandscape,
        StyleKey::PortraitMaster,
        StyleKey::ModernAbstract,
        StyleKey::PhotorealisticOil,
    ];

    /// Catalogue key for this style.
    pub fn as_str(self) -> &'static str {
        match self {
            StyleKey::ClassicalRenaissance => "classical_renaissance",
            StyleKey::BaroqueDrama => "baroque_drama",
            StyleKey::ImpressionistLight => "impressionist_light",
            StyleKey::PostImpressionistExpression => "post_impressionist_expression",
            StyleKey::RomanticLandscape => "romantic_landscape",
            StyleKey::PortraitMaster => "portrait_master",
            StyleKey::ModernAbstract => "modern_abstract",
            StyleKey::PhotorealisticOil => "photorealistic_oil",
        }
    }

    /// Parse a catalogue key.
    pub fn parse(s: &str) -> Result<Self, String> {
        StyleKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Invalid style key '{s}'. Must be one of: {}",
                    StyleKey::ALL
                        .iter()
                        .map(|key| key.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
