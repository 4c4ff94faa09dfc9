//! Style catalogue loading and lookup.
//!
//! Loads the preset catalogue from a JSON document once at construction,
//! validates it against the closed style enumeration, and exposes read-only
//! lookup plus one-call prompt/parameter derivation entry points built on
//! `impasto-core`.

pub mod catalog;
