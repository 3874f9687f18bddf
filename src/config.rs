// src/config.rs

/// Model used when the caller does not name one. Resolves to `cl100k_base`.
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Settings for a single counting run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountConfig {
    /// Model identifier used to pick the tokenizer encoding.
    pub model: String,
}

impl Default for CountConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl CountConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }
}
