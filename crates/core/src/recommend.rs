//! Subject-type style recommendations.

use crate::style::StyleKey;

/// Subject types with curated recommendation lists.
pub const KNOWN_SUBJECT_TYPES: &[&str] = &["portrait", "landscape", "pet", "object", "group"];

/// Recommended styles for a subject type, best match first.
///
/// Unrecognized subject types return the full style enumeration in its
/// defined order rather than erroring.
pub fn recommend(subject_type: &str) -> Vec<StyleKey> {
    match subject_type {
        "portrait" => vec![
            StyleKey::PortraitMaster,
            StyleKey::ClassicalRenaissance,
            StyleKey::BaroqueDrama,
        ],
        "landscape" => vec![
            StyleKey::RomanticLandscape,
            StyleKey::ImpressionistLight,
            StyleKey::PostImpressionistExpression,
        ],
        "pet" => vec![
            StyleKey::PortraitMaster,
            StyleKey::ClassicalRenaissance,
            StyleKey::PhotorealisticOil,
        ],
        "object" => vec![
            StyleKey::PhotorealisticOil,
            StyleKey::ImpressionistLight,
            StyleKey::ModernAbstract,
        ],
        "group" => vec![
            StyleKey::ClassicalRenaissance,
            StyleKey::BaroqueDrama,
            StyleKey::ImpressionistLight,
        ],
        _ => StyleKey::ALL.to_vec(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portrait_returns_documented_order() {
        assert_eq!(
            recommend("portrait"),
            vec![
                StyleKey::PortraitMaster,
                StyleKey::ClassicalRenaissance,
                StyleKey::BaroqueDrama,
            ]
        );
    }

    #[test]
    fn every_known_subject_type_returns_three_styles() {
        for subject in KNOWN_SUBJECT_TYPES {
            assert_eq!(recommend(subject).len(), 3, "subject type {subject}");
        }
    }

    #[test]
    fn landscape_leads_with_romantic_landscape() {
        assert_eq!(recommend("landscape")[0], StyleKey::RomanticLandscape);
    }

    #[test]
    fn unknown_subject_type_returns_full_enumeration() {
        assert_eq!(recommend("architecture"), StyleKey::ALL.to_vec());
        assert_eq!(recommend(""), StyleKey::ALL.to_vec());
    }
}
