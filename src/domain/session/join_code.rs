//! Human-shareable session join codes.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbols a join code is drawn from. Excludes characters that are easy to
/// confuse when read aloud or copied by hand (0/O, 1/I/L, 5/S, ...).
pub const JOIN_CODE_ALPHABET: &[u8; 24] = b"2346789BCDFGHJKMPQRTVWXY";

/// Number of symbols in a join code.
pub const JOIN_CODE_LENGTH: usize = 6;

/// Six-character code participants type in to find a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JoinCode(String);

impl JoinCode {
    /// Samples a fresh code uniformly from [`JOIN_CODE_ALPHABET`].
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Samples a code from the given RNG.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let code = (0..JOIN_CODE_LENGTH)
            .map(|_| JOIN_CODE_ALPHABET[rng.gen_range(0..JOIN_CODE_ALPHABET.len())] as char)
            .collect();
        Self(code)
    }

    /// Wraps a code read back from storage or a request.
    pub fn from_string(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JoinCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
