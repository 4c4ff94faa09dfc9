//! Preset and shared-settings types decoded from the style catalogue.
//!
//! Field names follow the catalogue document: guidance settings live under
//! `controlnet_settings` with the model named by `recommended_model`.

use serde::{Deserialize, Serialize};

fn default_guidance_end() -> f64 {
    1.0
}

/// Auxiliary structural-conditioning pass attached to a preset, used to
/// preserve subject geometry (edges, pose, depth) through stylization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuidanceConfig {
    #[serde(rename = "recommended_model")]
    pub model: String,
    pub weight: f64,
    /// Fraction of the sampling schedule at which guidance engages.
    #[serde(default)]
    pub guidance_start: f64,
    /// Fraction of the sampling schedule at which guidance releases.
    #[serde(default = "default_guidance_end")]
    pub guidance_end: f64,
}

/// Complete configuration for one oil-painting style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StylePreset {
    pub name: String,
    pub description: String,
    pub positive_prompt: String,
    pub negative_prompt: String,
    pub cfg_scale: f64,
    pub denoising_strength: f64,
    pub steps: u32,
    pub sampler: String,
    #[serde(default, rename = "controlnet_settings")]
    pub guidance: Option<GuidanceConfig>,
    #[serde(default)]
    pub tips: Vec<String>,
}

/// Shared defaults applied uniformly across styles during prompt
/// composition. Read once at store construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Negative-prompt suffix appended to every style's negative prompt.
    #[serde(default)]
    pub universal_negative: String,
    /// Opaque face-preservation metadata, passed through to callers.
    #[serde(default)]
    pub face_preservation: serde_json::Value,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn guidance_config_window_defaults() {
        let cfg: GuidanceConfig = serde_json::from_value(json!({
            "recommended_model": "control_v11p_sd15_canny",
            "weight": 0.8
        }))
        .unwrap();
        assert_eq!(cfg.guidance_start, 0.0);
        assert_eq!(cfg.guidance_end, 1.0);
    }

    #[test]
    fn guidance_config_explicit_window() {
        let cfg: GuidanceConfig = serde_json::from_value(json!({
            "recommended_model": "control_v11f1p_sd15_depth",
            "weight": 0.6,
            "guidance_start": 0.1,
            "guidance_end": 0.7
        }))
        .unwrap();
        assert_eq!(cfg.guidance_start, 0.1);
        assert_eq!(cfg.guidance_end, 0.7);
    }

    #[test]
    fn preset_without_guidance_or_tips_decodes() {
        let preset: StylePreset = serde_json::from_value(json!({
            "name": "Modern Abstract",
            "description": "Abstract expressionist style in oil",
            "positive_prompt": "((abstract oil painting:1.4))",
            "negative_prompt": "photorealistic, detailed",
            "cfg_scale": 9.0,
            "denoising_strength": 0.7,
            "steps": 35,
            "sampler": "Euler a"
        }))
        .unwrap();
        assert!(preset.guidance.is_none());
        assert!(preset.tips.is_empty());
    }

    #[test]
    fn global_settings_default_is_empty() {
        let globals = GlobalSettings::default();
        assert!(globals.universal_negative.is_empty());
        assert!(globals.face_preservation.is_null());
    }
}
