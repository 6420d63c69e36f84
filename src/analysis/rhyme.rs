//! Suffix-based rhyme detection and rhyme-scheme labelling.
//!
//! Two ending words rhyme when they share their last four, three or two
//! characters. Labels are minted in first-seen order (`A`, `B`, ... `Z`, `AA`).

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::analysis::{NO_RHYME_LABEL, RHYME_SUFFIX_LENGTHS};

/// Characters removed from ending words (anything that is not a word character).
#[allow(clippy::expect_used)]
static RE_NON_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^A-Za-z0-9_]").expect("valid regex: RE_NON_WORD")
});

/// Letter code identifying a rhyme group, or `-` for lines without an ending word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RhymeLabel(String);

impl RhymeLabel {
    /// The sentinel label for lines that have no usable ending word.
    pub fn none() -> Self {
        Self(NO_RHYME_LABEL.to_string())
    }

    /// Whether this is the `-` sentinel.
    pub fn is_none(&self) -> bool {
        self.0 == NO_RHYME_LABEL
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RhymeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of fresh rhyme labels, threaded through a single analysis pass.
#[derive(Debug, Clone)]
pub struct LabelCounter {
    current: String,
}

impl Default for LabelCounter {
    fn default() -> Self {
        Self { current: "A".to_string() }
    }
}

impl LabelCounter {
    /// Create a counter starting at `A`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the current label and advance the counter.
    pub fn mint(&mut self) -> RhymeLabel {
        let label = RhymeLabel(self.current.clone());
        self.current = next_label(&self.current);
        label
    }
}

/// Compute the label following `current`.
///
/// `Z` rolls over to `AA`. A multi-letter label ending in `Z` has that `Z`
/// replaced by `A` and another `A` appended, so `AZ` is followed by `AAA`.
fn next_label(current: &str) -> String {
    let mut chars: Vec<char> = current.chars().collect();
    let Some(&last) = chars.last() else {
        return "A".to_string();
    };

    if chars.len() == 1 {
        return if last == 'Z' { "AA".to_string() } else { next_letter(last).to_string() };
    }

    let end = chars.len() - 1;
    if last == 'Z' {
        chars[end] = 'A';
        chars.push('A');
    } else {
        chars[end] = next_letter(last);
    }
    chars.into_iter().collect()
}

fn next_letter(c: char) -> char {
    char::from_u32(u32::from(c) + 1).unwrap_or('A')
}

/// Labels already assigned to exact ending words.
#[derive(Debug, Default)]
pub struct RhymeMemo {
    labels: HashMap<String, RhymeLabel>,
}

impl RhymeMemo {
    /// Look up the label last recorded for `word`.
    pub fn get(&self, word: &str) -> Option<&RhymeLabel> {
        self.labels.get(word)
    }

    /// Record `label` for `word`, replacing any earlier entry.
    pub fn record(&mut self, word: &str, label: RhymeLabel) {
        self.labels.insert(word.to_string(), label);
    }
}

/// Extract the rhyme key of a line: its last word, lowercased, without punctuation.
pub fn ending_word(line: &str) -> String {
    line.split_whitespace()
        .next_back()
        .map(|word| RE_NON_WORD.replace_all(&word.to_lowercase(), "").into_owned())
        .unwrap_or_default()
}

/// Whether two ending words rhyme by shared suffix.
///
/// Identical words never rhyme with each other here; repeats are matched
/// through [`RhymeMemo`] instead.
pub fn words_rhyme(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() || a == b {
        return false;
    }

    let (a, b) = (a.as_bytes(), b.as_bytes());
    RHYME_SUFFIX_LENGTHS.iter().any(|&len| {
        a.len() >= len && b.len() >= len && a[a.len() - len..] == b[b.len() - len..]
    })
}

/// Assign a rhyme label to every ending word, in order.
///
/// Each word takes the label of the first earlier word it rhymes with, then
/// the label of an earlier identical word, and otherwise a fresh label.
pub fn assign_labels(ending_words: &[String]) -> Vec<RhymeLabel> {
    let mut counter = LabelCounter::new();
    let mut memo = RhymeMemo::default();
    let mut labels: Vec<RhymeLabel> = Vec::with_capacity(ending_words.len());

    for (i, word) in ending_words.iter().enumerate() {
        if word.is_empty() {
            labels.push(RhymeLabel::none());
            continue;
        }

        let rhyming = ending_words[..i]
            .iter()
            .position(|earlier| words_rhyme(word, earlier));

        let label = if let Some(j) = rhyming {
            let label = labels[j].clone();
            memo.record(word, label.clone());
            label
        } else if let Some(label) = memo.get(word) {
            label.clone()
        } else {
            let label = counter.mint();
            memo.record(word, label.clone());
            label
        };

        labels.push(label);
    }

    labels
}

/// Line numbers sharing one rhyme label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RhymeGroup {
    /// The shared label.
    pub label: RhymeLabel,
    /// 1-based line numbers, ascending.
    pub lines: Vec<usize>,
}

/// Collect groups of two or more lines, largest first.
///
/// Groups of equal size keep the order in which their labels first appear.
/// Lines labelled `-` never form a group.
pub fn rhyme_groups(labels: &[RhymeLabel]) -> Vec<RhymeGroup> {
    let mut groups: Vec<RhymeGroup> = Vec::new();

    for (i, label) in labels.iter().enumerate() {
        if label.is_none() {
            continue;
        }
        match groups.iter_mut().find(|g| &g.label == label) {
            Some(group) => group.lines.push(i + 1),
            None => groups.push(RhymeGroup { label: label.clone(), lines: vec![i + 1] }),
        }
    }

    groups.retain(|g| g.lines.len() >= 2);
    // Stable sort keeps first-seen order for ties
    groups.sort_by(|a, b| b.lines.len().cmp(&a.lines.len()));
    groups
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| (*w).to_string()).collect()
    }

    fn scheme(labels: &[RhymeLabel]) -> String {
        labels.iter().map(RhymeLabel::as_str).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_ending_word_strips_punctuation() {
        assert_eq!(ending_word("No one's near!"), "near");
        assert_eq!(ending_word("Hello THERE,"), "there");
        assert_eq!(ending_word("It's don't"), "dont");
        assert_eq!(ending_word("  trailing space   "), "space");
    }

    #[test]
    fn test_ending_word_empty_when_no_word_chars() {
        assert_eq!(ending_word("la la ..."), "");
        assert_eq!(ending_word(""), "");
    }

    #[test]
    fn test_words_rhyme_suffixes() {
        assert!(words_rhyme("near", "dear"));
        assert!(words_rhyme("cat", "hat"));
        assert!(words_rhyme("nation", "station"));
        assert!(!words_rhyme("there", "near"));
        assert!(!words_rhyme("there", "dear"));
    }

    #[test]
    fn test_words_rhyme_rejects_identical_and_empty() {
        assert!(!words_rhyme("love", "love"));
        assert!(!words_rhyme("", "love"));
        assert!(!words_rhyme("a", "b"));
    }

    #[test]
    fn test_label_counter_sequence() {
        let mut counter = LabelCounter::new();
        let minted: Vec<String> = (0..28).map(|_| counter.mint().to_string()).collect();
        assert_eq!(minted[0], "A");
        assert_eq!(minted[1], "B");
        assert_eq!(minted[25], "Z");
        assert_eq!(minted[26], "AA");
        assert_eq!(minted[27], "AB");
    }

    #[test]
    fn test_next_label_multi_letter_z() {
        assert_eq!(next_label("AY"), "AZ");
        assert_eq!(next_label("AZ"), "AAA");
        assert_eq!(next_label("AAZ"), "AAAA");
        assert_eq!(next_label("BC"), "BD");
    }

    #[test]
    fn test_assign_labels_first_match_wins() {
        let labels = assign_labels(&words(&["there", "near", "dear"]));
        assert_eq!(scheme(&labels), "A B B");
    }

    #[test]
    fn test_assign_labels_all_rhyme() {
        let labels = assign_labels(&words(&["cat", "hat", "bat"]));
        assert_eq!(scheme(&labels), "A A A");
    }

    #[test]
    fn test_assign_labels_repeat_uses_memo() {
        let labels = assign_labels(&words(&["love", "sky", "love"]));
        assert_eq!(scheme(&labels), "A B A");
    }

    #[test]
    fn test_assign_labels_empty_word_is_sentinel() {
        let labels = assign_labels(&words(&["cat", "", "hat"]));
        assert_eq!(scheme(&labels), "A - A");
    }

    #[test]
    fn test_assign_labels_takes_earliest_rhyme() {
        // "station" rhymes with both; the earlier line's label is used
        let labels = assign_labels(&words(&["nation", "sky", "ration", "station"]));
        assert_eq!(scheme(&labels), "A B A A");
    }

    #[test]
    fn test_rhyme_groups_sorted_by_size() {
        let labels = assign_labels(&words(&["night", "cat", "light", "hat", "bat", "tree"]));
        assert_eq!(scheme(&labels), "A B A B B C");

        let groups = rhyme_groups(&labels);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label.as_str(), "B");
        assert_eq!(groups[0].lines, vec![2, 4, 5]);
        assert_eq!(groups[1].label.as_str(), "A");
        assert_eq!(groups[1].lines, vec![1, 3]);
    }

    #[test]
    fn test_rhyme_groups_ties_keep_first_seen_order() {
        let labels = assign_labels(&words(&["cat", "night", "hat", "light"]));
        let groups = rhyme_groups(&labels);
        let order: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(order, vec!["A", "B"]);
    }

    #[test]
    fn test_rhyme_groups_skip_sentinel_and_singletons() {
        let labels = assign_labels(&words(&["", "", "cat", "sky"]));
        assert!(rhyme_groups(&labels).is_empty());
    }
}
