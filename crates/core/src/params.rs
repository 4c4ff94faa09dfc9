//! img2img parameter derivation from a preset plus runtime adjustments.
//!
//! The only branching logic in the system: a preservation level shifts the
//! preset's denoising strength within clamp bounds and decides whether face
//! restoration runs; an attached guidance config becomes one guidance unit
//! on the outgoing record.

use serde::{Deserialize, Serialize};

use crate::preset::StylePreset;

// ---------------------------------------------------------------------------
// Derivation constants
// ---------------------------------------------------------------------------

/// Lower clamp bound for derived denoising strength. Below this the output
/// barely diverges from the photo.
pub const MIN_DENOISING: f64 = 0.2;

/// Upper clamp bound for derived denoising strength. Above this subject
/// geometry is no longer reliably preserved.
pub const MAX_DENOISING: f64 = 0.8;

/// Control mode applied to every guidance unit.
pub const GUIDANCE_CONTROL_MODE: &str = "Balanced";

// ---------------------------------------------------------------------------
// Preservation level
// ---------------------------------------------------------------------------

/// User-facing knob trading subject fidelity against stylistic freedom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreservationLevel {
    Low,
    Medium,
    High,
}

impl PreservationLevel {
    /// Parse a user-facing level string. Unknown values yield `None`;
    /// callers treat that as "no adjustment" rather than an error.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Denoising-strength adjustment for this level. High preservation
    /// lowers denoising; low preservation raises it for more artistic
    /// freedom.
    pub fn denoising_delta(self) -> f64 {
        match self {
            Self::High => -0.15,
            Self::Medium => 0.0,
            Self::Low => 0.10,
        }
    }

    /// Whether face restoration is enabled at this level.
    pub fn restore_faces(self) -> bool {
        matches!(self, Self::Medium | Self::High)
    }
}

// ---------------------------------------------------------------------------
// Outgoing parameter record
// ---------------------------------------------------------------------------

/// One structural-guidance unit forwarded to the generation backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuidanceUnit {
    pub model: String,
    pub weight: f64,
    pub guidance_start: f64,
    pub guidance_end: f64,
    pub control_mode: &'static str,
    pub pixel_perfect: bool,
}

/// Complete img2img parameter record handed to the generation backend.
/// Constructed fresh per request; owned solely by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationParams {
    pub denoising_strength: f64,
    pub cfg_scale: f64,
    pub steps: u32,
    pub sampler_name: String,
    pub restore_faces: bool,
    pub width: u32,
    pub height: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub guidance_units: Vec<GuidanceUnit>,
}

/// Derive the final img2img parameters for `preset`.
///
/// `width` and `height` must be the actual input-image dimensions; there is
/// no default the record falls back to. A `level` of `None` means no
/// preservation adjustment: the preset's denoising is used as-is (still
/// clamped) and face restoration stays off.
pub fn derive_generation_params(
    preset: &StylePreset,
    level: Option<PreservationLevel>,
    width: u32,
    height: u32,
) -> GenerationParams {
    let delta = level.map_or(0.0, PreservationLevel::denoising_delta);
    let denoising_strength =
        (preset.denoising_strength + delta).clamp(MIN_DENOISING, MAX_DENOISING);

    let guidance_units = preset
        .guidance
        .iter()
        .map(|cfg| GuidanceUnit {
            model: cfg.model.clone(),
            weight: cfg.weight,
            guidance_start: cfg.guidance_start,
            guidance_end: cfg.guidance_end,
            control_mode: GUIDANCE_CONTROL_MODE,
            pixel_perfect: true,
        })
        .collect();

    GenerationParams {
        denoising_strength,
        cfg_scale: preset.cfg_scale,
        steps: preset.steps,
        sampler_name: preset.sampler.clone(),
        restore_faces: level.is_some_and(PreservationLevel::restore_faces),
        width,
        height,
        guidance_units,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
