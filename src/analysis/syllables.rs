//! Heuristic syllable estimation.
//!
//! Counts vowel runs rather than consulting a pronunciation dictionary, so
//! results are approximate for irregular words.

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Lowercase a word and keep only ASCII letters.
fn clean_word(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect()
}

/// Estimate the syllables in a single word.
///
/// Words with no letters count as zero. Any other word counts as at least one.
pub fn count_word_syllables(word: &str) -> usize {
    let cleaned = clean_word(word);
    if cleaned.is_empty() {
        return 0;
    }

    let mut count = 0;
    let mut in_vowel_run = false;
    for c in cleaned.chars() {
        let is_vowel = VOWELS.contains(&c);
        if is_vowel && !in_vowel_run {
            count += 1;
        }
        in_vowel_run = is_vowel;
    }

    // Silent trailing e ("make", "stone")
    if cleaned.ends_with('e') && count > 1 {
        count -= 1;
    }

    count.max(1)
}

/// Estimate the syllables in a line by summing its whitespace-separated words.
pub fn count_line_syllables(line: &str) -> usize {
    line.split_whitespace().map(count_word_syllables).sum()
}
