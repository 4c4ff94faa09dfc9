//! Preset catalogue: loaded once, immutable thereafter.
//!
//! Load-time validation guarantees every member of [`StyleKey::ALL`]
//! resolves to a preset, closing the drift gap between the enumeration in
//! code and the keys in data. After construction all operations are pure
//! reads, safe to share across threads without locking.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use impasto_core::error::PresetError;
use impasto_core::params::{derive_generation_params, GenerationParams, PreservationLevel};
use impasto_core::preset::{GlobalSettings, StylePreset};
use impasto_core::prompt::{build_prompt, PromptPair};
use impasto_core::style::StyleKey;

/// Catalogue bundled with this crate, carrying the standard eight styles.
const BUNDLED_CATALOG: &str = include_str!("../data/presets.json");

/// Experience level whose tips are the fallback for unknown levels.
pub const DEFAULT_EXPERIENCE_LEVEL: &str = "beginner";

// ---------------------------------------------------------------------------
// Document shape
// ---------------------------------------------------------------------------

/// Top-level catalogue document as authored on disk.
#[derive(Debug, Deserialize)]
struct CatalogDoc {
    presets: HashMap<String, StylePreset>,
    #[serde(default)]
    global_settings: GlobalSettings,
    #[serde(default)]
    workflow_recommendations: HashMap<String, serde_json::Value>,
}

/// One entry in the style listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleSummary {
    pub key: StyleKey,
    pub name: String,
    pub description: String,
}

/// Everything the generation backend needs for one stylization request:
/// composed prompts, derived parameters, and the preset's workflow tips.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionPlan {
    pub style: StyleKey,
    pub prompts: PromptPair,
    pub params: GenerationParams,
    pub tips: Vec<String>,
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Immutable style catalogue plus shared settings.
#[derive(Debug)]
pub struct PresetStore {
    presets: HashMap<String, StylePreset>,
    global_settings: GlobalSettings,
    workflow_recommendations: HashMap<String, serde_json::Value>,
}

impl PresetStore {
    /// Load a catalogue from a JSON file.
    ///
    /// A missing or unreadable file surfaces as
    /// [`PresetError::SourceNotFound`]; anything that parses but does not
    /// match the expected structure surfaces as
    /// [`PresetError::MalformedSource`]. Both are fatal; the store is
    /// unusable until the source is corrected.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PresetError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|err| PresetError::SourceNotFound(format!("{}: {err}", path.display())))?;
        let store = Self::from_json(&raw)?;
        tracing::debug!(
            path = %path.display(),
            styles = store.presets.len(),
            "Loaded preset catalogue"
        );
        Ok(store)
    }

    /// Parse a catalogue from a JSON string and validate that every style
    /// in the closed enumeration resolves to a preset. Extra keys beyond
    /// the enumeration are kept and reachable via [`Self::get_raw`].
    pub fn from_json(raw: &str) -> Result<Self, PresetError> {
        let doc: CatalogDoc = serde_json::from_str(raw)
            .map_err(|err| PresetError::MalformedSource(err.to_string()))?;

        let missing: Vec<&str> = StyleKey::ALL
            .iter()
            .map(|key| key.as_str())
            .filter(|key| !doc.presets.contains_key(*key))
            .collect();
        if !missing.is_empty() {
            return Err(PresetError::MalformedSource(format!(
                "Catalogue is missing presets for: {}",
                missing.join(", ")
            )));
        }

        Ok(Self {
            presets: doc.presets,
            global_settings: doc.global_settings,
            workflow_recommendations: doc.workflow_recommendations,
        })
    }

    /// The catalogue bundled with this crate.
    pub fn bundled() -> Self {
        Self::from_json(BUNDLED_CATALOG).expect("bundled catalogue is valid")
    }

    /// Look up the preset for `key`.
    pub fn get(&self, key: StyleKey) -> Result<&StylePreset, PresetError> {
        self.get_raw(key.as_str())
    }

    /// Look up a preset by raw catalogue key, including entries outside the
    /// closed enumeration.
    pub fn get_raw(&self, key: &str) -> Result<&StylePreset, PresetError> {
        self.presets
            .get(key)
            .ok_or_else(|| PresetError::StyleNotFound(key.to_string()))
    }

    /// Shared prompt-composition defaults.
    pub fn global_settings(&self) -> &GlobalSettings {
        &self.global_settings
    }

    /// List every style in enumeration order.
    pub fn list_all(&self) -> Vec<StyleSummary> {
        StyleKey::ALL
            .iter()
            .filter_map(|&key| {
                self.presets.get(key.as_str()).map(|preset| StyleSummary {
                    key,
                    name: preset.name.clone(),
                    description: preset.description.clone(),
                })
            })
            .collect()
    }

    /// Workflow tips for an experience level, falling back to the
    /// [`DEFAULT_EXPERIENCE_LEVEL`] entry, then to an empty object.
    pub fn workflow_tips(&self, experience_level: &str) -> serde_json::Value {
        self.workflow_recommendations
            .get(experience_level)
            .or_else(|| self.workflow_recommendations.get(DEFAULT_EXPERIENCE_LEVEL))
            .cloned()
            .unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new()))
    }

    /// Compose positive/negative prompts for `key`.
    pub fn build_prompt(
        &self,
        key: StyleKey,
        base_description: &str,
        preserve_subject: bool,
    ) -> Result<PromptPair, PresetError> {
        let preset = self.get(key)?;
        Ok(build_prompt(
            preset,
            &self.global_settings,
            base_description,
            preserve_subject,
        ))
    }

    /// Derive the img2img parameter record for `key`.
    ///
    /// `width` and `height` are the actual input-image dimensions; the
    /// caller must supply them.
    pub fn generation_params(
        &self,
        key: StyleKey,
        level: Option<PreservationLevel>,
        width: u32,
        height: u32,
    ) -> Result<GenerationParams, PresetError> {
        let preset = self.get(key)?;
        Ok(derive_generation_params(preset, level, width, height))
    }

    /// Assemble the complete payload for one conversion request. Subject
    /// preservation is always requested in the composed prompt; the
    /// preservation level still controls denoising and face restoration.
    pub fn conversion_plan(
        &self,
        key: StyleKey,
        base_description: &str,
        level: Option<PreservationLevel>,
        width: u32,
        height: u32,
    ) -> Result<ConversionPlan, PresetError> {
        let preset = self.get(key)?;
        Ok(ConversionPlan {
            style: key,
            prompts: build_prompt(preset, &self.global_settings, base_description, true),
            params: derive_generation_params(preset, level, width, height),
            tips: preset.tips.clone(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
