//! Line-shuffling "remix" variants of a lyric.
//!
//! A remix keeps every non-blank line and reorders them with a Fisher–Yates
//! shuffle. It shares no logic with the analyzer.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::analysis::split_lines;

/// Shuffle the non-blank, trimmed lines of `text`.
pub fn remix_lines<R: Rng + ?Sized>(text: &str, rng: &mut R) -> Vec<String> {
    let mut lines: Vec<String> = split_lines(text).into_iter().map(str::to_string).collect();
    lines.shuffle(rng);
    lines
}

/// Produce `count` independent remixes of `text`, each joined with newlines.
///
/// Text with no lines yields no variants.
pub fn remix_variants<R: Rng + ?Sized>(text: &str, count: usize, rng: &mut R) -> Vec<String> {
    if split_lines(text).is_empty() {
        return Vec::new();
    }

    (0..count).map(|_| remix_lines(text, rng).join("\n")).collect()
}

/// RNG for remixes: seeded when a seed is configured, otherwise from OS entropy.
pub fn remix_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    const SONG: &str = "Roses are red\n\nViolets are blue\n  Sugar is sweet  \nAnd so are you\n";

    fn sorted(mut lines: Vec<String>) -> Vec<String> {
        lines.sort();
        lines
    }

    #[test]
    fn test_remix_keeps_every_line() {
        let mut rng = StdRng::seed_from_u64(7);
        let remixed = remix_lines(SONG, &mut rng);
        let original: Vec<String> = split_lines(SONG).into_iter().map(str::to_string).collect();
        assert_eq!(sorted(remixed), sorted(original));
    }

    #[test]
    fn test_seeded_remix_is_reproducible() {
        let a = remix_variants(SONG, 3, &mut remix_rng(Some(42)));
        let b = remix_variants(SONG, 3, &mut remix_rng(Some(42)));
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn test_variants_have_no_blank_lines() {
        let mut rng = StdRng::seed_from_u64(1);
        for variant in remix_variants(SONG, 5, &mut rng) {
            assert_eq!(variant.lines().count(), 4);
            assert!(variant.lines().all(|l| !l.trim().is_empty()));
        }
    }

    #[test]
    fn test_empty_text_has_no_variants() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(remix_variants("  \n \n", 3, &mut rng).is_empty());
        assert!(remix_lines("", &mut rng).is_empty());
    }

    #[test]
    fn test_zero_count() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(remix_variants(SONG, 0, &mut rng).is_empty());
    }
}
