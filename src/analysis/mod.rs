//! Lyric analysis: syllable counts and rhyme schemes.
//!
//! [`analyze`] turns raw lyric text into two human-readable reports. The
//! structured [`LyricAnalysis`] behind them is public so callers (the TUI)
//! can render the same data differently.

pub mod report;
pub mod rhyme;
pub mod syllables;

use serde::{Deserialize, Serialize};

use crate::constants::analysis::NO_LYRICS;
use crate::error::{Error, Result};

pub use rhyme::{RhymeGroup, RhymeLabel};

/// The pair of reports shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LyricReport {
    /// Line count, totals and per-line syllable breakdown.
    pub syllable_report: String,
    /// Rhyme scheme, patterns found and per-line rhyme details.
    pub rhyme_report: String,
}

impl LyricReport {
    /// The result for input with no lyric lines.
    pub fn empty() -> Self {
        Self {
            syllable_report: NO_LYRICS.to_string(),
            rhyme_report: NO_LYRICS.to_string(),
        }
    }

    /// Both reports as one document, separated by a blank line.
    pub fn combined(&self) -> String {
        format!("{}\n\n{}", self.syllable_report, self.rhyme_report)
    }
}

/// Everything computed for a single lyric line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineAnalysis {
    /// 1-based position among the non-blank lines.
    pub number: usize,
    /// The trimmed line text.
    pub text: String,
    /// Estimated syllables.
    pub syllables: usize,
    /// Normalized last word used for rhyme matching (may be empty).
    pub ending_word: String,
    /// Rhyme group label, `-` when `ending_word` is empty.
    pub label: RhymeLabel,
}

/// Structured analysis of a lyric text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LyricAnalysis {
    /// One entry per non-blank line, in order.
    pub lines: Vec<LineAnalysis>,
    /// Rhyme groups with two or more lines, largest first.
    pub groups: Vec<RhymeGroup>,
}

impl LyricAnalysis {
    /// Analyze `lyrics`, returning `None` when there are no non-blank lines.
    pub fn from_text(lyrics: &str) -> Option<Self> {
        let texts = split_lines(lyrics);
        if texts.is_empty() {
            return None;
        }

        let ending_words: Vec<String> = texts.iter().map(|t| rhyme::ending_word(t)).collect();
        let labels = rhyme::assign_labels(&ending_words);
        let groups = rhyme::rhyme_groups(&labels);

        let lines = texts
            .into_iter()
            .zip(ending_words)
            .zip(labels)
            .enumerate()
            .map(|(i, ((text, ending_word), label))| LineAnalysis {
                number: i + 1,
                syllables: syllables::count_line_syllables(text),
                text: text.to_string(),
                ending_word,
                label,
            })
            .collect();

        Some(Self { lines, groups })
    }

    /// Sum of syllables over all lines.
    pub fn total_syllables(&self) -> usize {
        self.lines.iter().map(|l| l.syllables).sum()
    }

    /// The rhyme scheme as space-separated labels, e.g. `A B A B`.
    pub fn scheme(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.label.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Render both reports.
    pub fn report(&self) -> LyricReport {
        LyricReport {
            syllable_report: report::syllable_report(self),
            rhyme_report: report::rhyme_report(self),
        }
    }
}

/// Split text into trimmed, non-blank lines.
pub fn split_lines(lyrics: &str) -> Vec<&str> {
    lyrics
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Analyze lyric text and render the syllable and rhyme reports.
///
/// Empty or whitespace-only input yields [`LyricReport::empty`].
pub fn analyze(lyrics: &str) -> LyricReport {
    analyze_detailed(lyrics).1
}

/// Like [`analyze`], also returning the per-line analysis the reports were
/// rendered from (`None` for empty input).
pub fn analyze_detailed(lyrics: &str) -> (Option<LyricAnalysis>, LyricReport) {
    let Some(analysis) = LyricAnalysis::from_text(lyrics) else {
        tracing::debug!("No lyric lines to analyze");
        return (None, LyricReport::empty());
    };

    tracing::debug!(
        "Analyzed {} lines ({} syllables, scheme {})",
        analysis.lines.len(),
        analysis.total_syllables(),
        analysis.scheme()
    );

    let report = analysis.report();
    (Some(analysis), report)
}

/// Analyze raw bytes, failing if they are not UTF-8 text.
pub fn analyze_bytes(bytes: &[u8]) -> Result<LyricReport> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        Error::analysis(Error::invalid_input(format!("lyrics are not valid UTF-8 text ({e})")))
    })?;
    Ok(analyze(text))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_analyze_detailed_matches_analyze() {
        let (analysis, report) = analyze_detailed("cat\nhat");
        assert_eq!(analysis.unwrap().scheme(), "A A");
        assert_eq!(report, analyze("cat\nhat"));

        let (analysis, report) = analyze_detailed("  \n");
        assert!(analysis.is_none());
        assert_eq!(report, LyricReport::empty());
    }

    #[test]
    fn test_split_lines_drops_blank_lines() {
        let lines = split_lines("  first  \n\n   \r\nsecond\r\n");
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn test_empty_input_returns_sentinel() {
        assert_eq!(analyze(""), LyricReport::empty());
        assert_eq!(analyze("   \n\t\n  "), LyricReport::empty());
        assert_eq!(analyze("").syllable_report, "No lyrics provided.");
        assert_eq!(analyze("").rhyme_report, "No lyrics provided.");
    }

    #[test]
    fn test_hello_there_scheme() {
        let analysis =
            LyricAnalysis::from_text("Hello there\nNo one's near\nGoodbye my dear").unwrap();
        assert_eq!(analysis.scheme(), "A B B");
        let endings: Vec<&str> = analysis.lines.iter().map(|l| l.ending_word.as_str()).collect();
        assert_eq!(endings, vec!["there", "near", "dear"]);
    }

    #[test]
    fn test_totals_match_lines() {
        let analysis = LyricAnalysis::from_text("Hello there\nNo one's near\nGoodbye my dear").unwrap();
        let sum: usize = analysis.lines.iter().map(|l| l.syllables).sum();
        assert_eq!(analysis.total_syllables(), sum);
        assert_eq!(analysis.lines.len(), 3);
    }

    #[test]
    fn test_line_numbers_skip_blank_lines() {
        let analysis = LyricAnalysis::from_text("one\n\n\ntwo\n  \nthree").unwrap();
        let numbers: Vec<usize> = analysis.lines.iter().map(|l| l.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(analysis.lines[1].text, "two");
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let text = "Roses are red\nViolets are blue\nSugar is sweet\nAnd so are you";
        assert_eq!(analyze(text), analyze(text));
    }

    #[test]
    fn test_analyze_bytes_rejects_invalid_utf8() {
        let err = analyze_bytes(&[0x66, 0x6f, 0xff, 0xfe]).unwrap_err();
        match &err {
            Error::Analysis { source } => {
                assert!(matches!(source.as_ref(), Error::InvalidInput { .. }));
            }
            _ => panic!("Expected Analysis error, got {err:?}"),
        }
        assert!(err.to_string().starts_with("Failed to analyze lyrics"));
    }

    #[test]
    fn test_analyze_bytes_accepts_text() {
        let report = analyze_bytes(b"cat\nhat\nbat").unwrap();
        assert!(report.rhyme_report.contains("Rhyme Scheme: A A A"));
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let json = serde_json::to_string(&LyricReport::empty()).unwrap();
        assert!(json.contains("\"syllableReport\""));
        assert!(json.contains("\"rhymeReport\""));
    }
}
