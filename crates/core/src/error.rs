#[derive(Debug, thiserror::Error)]
pub enum PresetError {
    #[error("Preset source not found: {0}")]
    SourceNotFound(String),

    #[error("Malformed preset source: {0}")]
    MalformedSource(String),

    #[error("Style not found in catalogue: {0}")]
    StyleNotFound(String),
}
