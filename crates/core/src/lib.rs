//! Oil-painting style domain logic.
//!
//! Provides the closed style enumeration, preset and guidance types,
//! prompt composition, img2img parameter derivation, and subject-based
//! style recommendations. Everything here is a pure function over
//! immutable data; catalogue loading lives in `impasto-store`.

pub mod error;
pub mod params;
pub mod preset;
pub mod prompt;
pub mod recommend;
pub mod style;
