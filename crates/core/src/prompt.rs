//! Prompt composition for a chosen style.

use serde::Serialize;

use crate::preset::{GlobalSettings, StylePreset};

/// Token appended to the positive prompt when the caller wants facial
/// features preserved through stylization.
pub const PRESERVE_SUBJECT_TOKEN: &str = "((preserve facial features:1.1))";

/// Composed positive/negative prompt pair for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptPair {
    pub positive: String,
    pub negative: String,
}

/// Join prompt fragments with ", ", dropping empty parts so the result
/// never carries leading, trailing, or doubled separators.
fn join_fragments<'a>(fragments: impl IntoIterator<Item = &'a str>) -> String {
    fragments
        .into_iter()
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Compose the full positive/negative prompts for `preset`.
///
/// Positive = base description (if any) + the preset's positive fragment +
/// the subject-preservation token (if requested). Negative = the preset's
/// negative fragment + the universal negative suffix from `globals`.
pub fn build_prompt(
    preset: &StylePreset,
    globals: &GlobalSettings,
    base_description: &str,
    preserve_subject: bool,
) -> PromptPair {
    let mut positive_fragments = vec![base_description, preset.positive_prompt.as_str()];
    if preserve_subject {
        positive_fragments.push(PRESERVE_SUBJECT_TOKEN);
    }

    PromptPair {
        positive: join_fragments(positive_fragments),
        negative: join_fragments([
            preset.negative_prompt.as_str(),
            globals.universal_negative.as_str(),
        ]),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_preset() -> StylePreset {
        StylePreset {
            name: "Impressionist Light".to_string(),
            description: "Monet and Renoir style with loose brushwork".to_string(),
            positive_prompt: "((impressionist oil painting:1.4))".to_string(),
            negative_prompt: "tight detail, photorealistic".to_string(),
            cfg_scale: 7.0,
            denoising_strength: 0.55,
            steps: 25,
            sampler: "Euler a".to_string(),
            guidance: None,
            tips: Vec::new(),
        }
    }

    fn sample_globals() -> GlobalSettings {
        GlobalSettings {
            universal_negative: "worst quality, watermark".to_string(),
            face_preservation: serde_json::Value::Null,
        }
    }

    #[test]
    fn positive_includes_base_then_preset_fragment() {
        let pair = build_prompt(&sample_preset(), &sample_globals(), "garden at dusk", false);
        assert_eq!(
            pair.positive,
            "garden at dusk, ((impressionist oil painting:1.4))"
        );
    }

    #[test]
    fn positive_appends_preservation_token_when_requested() {
        let pair = build_prompt(&sample_preset(), &sample_globals(), "garden at dusk", true);
        assert!(pair.positive.ends_with(PRESERVE_SUBJECT_TOKEN));
    }

    #[test]
    fn empty_base_description_leaves_no_leading_separator() {
        let pair = build_prompt(&sample_preset(), &sample_globals(), "", false);
        assert_eq!(pair.positive, "((impressionist oil painting:1.4))");
        assert!(!pair.positive.starts_with(','));
    }

    #[test]
    fn negative_appends_universal_suffix() {
        let pair = build_prompt(&sample_preset(), &sample_globals(), "", false);
        assert_eq!(
            pair.negative,
            "tight detail, photorealistic, worst quality, watermark"
        );
    }

    #[test]
    fn empty_universal_negative_leaves_no_trailing_separator() {
        let pair = build_prompt(&sample_preset(), &GlobalSettings::default(), "", false);
        assert_eq!(pair.negative, "tight detail, photorealistic");
        assert!(!pair.negative.ends_with(", "));
    }

    #[test]
    fn no_doubled_separators_when_all_optional_parts_empty() {
        let mut preset = sample_preset();
        preset.negative_prompt = String::new();
        let pair = build_prompt(&preset, &GlobalSettings::default(), "", false);
        assert_eq!(pair.negative, "");
        assert!(!pair.positive.contains(", ,"));
        assert!(!pair.positive.contains(",,"));
    }
}
