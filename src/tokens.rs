// src/tokens.rs
use log::debug;
use tiktoken_rs::CoreBPE;

use crate::config::CountConfig;
use crate::error::{CountError, Result};

/// A tokenizer encoding resolved from a model identifier.
pub struct Tokenizer {
    bpe: CoreBPE,
}

impl Tokenizer {
    /// Resolves the encoding used by `model` (e.g. `gpt-4` uses `cl100k_base`).
    ///
    /// # Errors
    /// Returns [`CountError::UnknownModel`] if no encoding is known for `model`.
    pub fn for_model(model: &str) -> Result<Self> {
        let bpe = tiktoken_rs::get_bpe_from_model(model).map_err(|e| {
            CountError::UnknownModel {
                model: model.to_string(),
                reason: e.to_string(),
            }
        })?;
        debug!("resolved tokenizer for model {model}");
        Ok(Self { bpe })
    }

    /// Counts the tokens in `text`.
    ///
    /// # Errors
    /// Returns [`CountError::DisallowedSpecial`] if `text` contains the literal
    /// form of one of the encoding's special tokens (e.g. `<|endoftext|>`).
    pub fn count(&self, text: &str) -> Result<usize> {
        let tokens = self.bpe.encode_ordinary(text);
        // Special-token text only changes the encoding when specials are recognised.
        if self.bpe.encode_with_special_tokens(text) != tokens {
            return Err(CountError::DisallowedSpecial);
        }
        Ok(tokens.len())
    }
}

/// Returns the number of tokens in `text` under the model named by `config`.
///
/// # Errors
/// Returns [`CountError::NoTokens`] when the text encodes to zero tokens,
/// [`CountError::DisallowedSpecial`] when it contains special-token text, or
/// [`CountError::UnknownModel`] when the model cannot be resolved.
pub fn process_tokens(text: &str, config: &CountConfig) -> Result<usize> {
    let count = Tokenizer::for_model(&config.model)?.count(text)?;
    if count == 0 {
        return Err(CountError::NoTokens);
    }
    Ok(count)
}
