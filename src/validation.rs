//! Length checks applied to lyrics before analysis or remixing.

use crate::error::{Error, Result};

/// Inclusive bounds on lyric length, in characters of the trimmed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthLimits {
    /// Fewest characters accepted.
    pub min_chars: usize,
    /// Most characters accepted.
    pub max_chars: usize,
}

impl LengthLimits {
    /// Create limits from inclusive bounds.
    #[must_use]
    pub const fn new(min_chars: usize, max_chars: usize) -> Self {
        Self { min_chars, max_chars }
    }
}

/// Check that `text` is within `limits`.
pub fn validate_lyrics(text: &str, limits: &LengthLimits) -> Result<()> {
    let len = text.trim().chars().count();

    if len < limits.min_chars {
        return Err(Error::validation(
            format!("Lyrics must be at least {} characters (got {len})", limits.min_chars),
            "Paste a verse or two before analyzing",
        ));
    }

    if len > limits.max_chars {
        return Err(Error::validation(
            format!("Lyrics must be at most {} characters (got {len})", limits.max_chars),
            "Split the song and analyze it in parts",
        ));
    }

    Ok(())
}
