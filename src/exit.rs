// src/exit.rs
//! Process exit codes for `count-tokens`.
//!
//! Scripts can rely on 0 for a printed count, 1 for any runtime failure,
//! and 2 for a malformed invocation.

use std::process::Termination;

use crate::error::CountError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CountExit {
    /// File read and tokenized; count printed.
    Success = 0,
    /// File not found or unreadable, special-token text, or no tokens in the input.
    Error = 1,
    /// Missing or malformed command-line arguments.
    Usage = 2,
}

impl CountExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for CountExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<&CountError> for CountExit {
    fn from(err: &CountError) -> Self {
        match err {
            CountError::NotFound { .. }
            | CountError::Io { .. }
            | CountError::NoTokens
            | CountError::DisallowedSpecial
            | CountError::UnknownModel { .. } => Self::Error,
        }
    }
}
