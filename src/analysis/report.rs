//! Plain-text rendering of a [`LyricAnalysis`].

use std::fmt::Write;

use super::LyricAnalysis;
use crate::constants::analysis::DISPLAY_TRUNCATE_CHARS;

/// Shorten `text` to the display width, appending `...` when cut.
pub fn truncate_for_display(text: &str) -> String {
    if text.chars().count() > DISPLAY_TRUNCATE_CHARS {
        let head: String = text.chars().take(DISPLAY_TRUNCATE_CHARS).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

const fn plural(count: usize) -> &'static str {
    if count == 1 { "syllable" } else { "syllables" }
}

/// `total / lines` to one decimal place, halves rounded up.
fn format_average(total: usize, lines: usize) -> String {
    if lines == 0 {
        return "0.0".to_string();
    }
    let tenths = (total * 20 + lines) / (lines * 2);
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// Render the syllable report: totals, average, range and per-line breakdown.
pub fn syllable_report(analysis: &LyricAnalysis) -> String {
    let min = analysis.lines.iter().map(|l| l.syllables).min().unwrap_or(0);
    let max = analysis.lines.iter().map(|l| l.syllables).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str("Syllable Analysis\n");
    out.push_str("=================\n");
    let _ = writeln!(out, "Total Lines: {}", analysis.lines.len());
    let _ = writeln!(out, "Total Syllables: {}", analysis.total_syllables());
    let _ = writeln!(
        out,
        "Average Syllables per Line: {}",
        format_average(analysis.total_syllables(), analysis.lines.len())
    );
    let _ = writeln!(out, "Shortest Line: {min} {}", plural(min));
    let _ = writeln!(out, "Longest Line: {max} {}", plural(max));
    out.push_str("\nLine Breakdown:");

    for line in &analysis.lines {
        let _ = write!(
            out,
            "\nLine {}: {} {} - \"{}\"",
            line.number,
            line.syllables,
            plural(line.syllables),
            truncate_for_display(&line.text)
        );
    }

    out
}

/// Render the rhyme report: scheme, patterns found and per-line details.
pub fn rhyme_report(analysis: &LyricAnalysis) -> String {
    let mut out = String::new();
    out.push_str("Rhyme Scheme Analysis\n");
    out.push_str("=====================\n");
    let _ = writeln!(out, "Rhyme Scheme: {}", analysis.scheme());
    out.push_str("\nRhyming Patterns Found:\n");

    if analysis.groups.is_empty() {
        out.push_str("No clear rhyming patterns found.\n");
    } else {
        for group in &analysis.groups {
            let numbers = group
                .lines
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(out, "  {}: Lines {numbers} ({} lines)", group.label, group.lines.len());
        }
    }

    out.push_str("\nLine Details:");
    for line in &analysis.lines {
        let ending = if line.ending_word.is_empty() {
            "none".to_string()
        } else {
            format!("\"{}\"", line.ending_word)
        };
        let _ = write!(
            out,
            "\nLine {} [{}]: \"{}\" (ending: {ending})",
            line.number, line.label, line.text
        );
    }

    out
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn analysis(text: &str) -> LyricAnalysis {
        LyricAnalysis::from_text(text).expect("non-empty lyrics")
    }

    #[test]
    fn test_truncate_for_display() {
        assert_eq!(truncate_for_display("short"), "short");
        let exact = "x".repeat(50);
        assert_eq!(truncate_for_display(&exact), exact);
        let long = "y".repeat(51);
        assert_eq!(truncate_for_display(&long), format!("{}...", "y".repeat(50)));
    }

    #[test]
    fn test_syllable_report_layout() {
        let report = syllable_report(&analysis("Hello there\nNo one's near\nGoodbye my dear"));
        let expected = "Syllable Analysis\n\
                        =================\n\
                        Total Lines: 3\n\
                        Total Syllables: 10\n\
                        Average Syllables per Line: 3.3\n\
                        Shortest Line: 3 syllables\n\
                        Longest Line: 4 syllables\n\
                        \n\
                        Line Breakdown:\n\
                        Line 1: 3 syllables - \"Hello there\"\n\
                        Line 2: 4 syllables - \"No one's near\"\n\
                        Line 3: 3 syllables - \"Goodbye my dear\"";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_syllable_report_singular() {
        let report = syllable_report(&analysis("cat\nhat\nbat"));
        assert!(report.contains("Line 1: 1 syllable - \"cat\""));
        assert!(report.contains("Shortest Line: 1 syllable\n"));
        assert!(report.contains("Average Syllables per Line: 1.0"));
    }

    #[test]
    fn test_format_average_rounds_halves_up() {
        assert_eq!(format_average(5, 4), "1.3");
        assert_eq!(format_average(7, 4), "1.8");
        assert_eq!(format_average(10, 3), "3.3");
        assert_eq!(format_average(14, 3), "4.7");
        assert_eq!(format_average(0, 2), "0.0");
        assert_eq!(format_average(0, 0), "0.0");
    }

    #[test]
    fn test_syllable_report_average_tie_rounds_up() {
        let report = syllable_report(&analysis("cat\nhat\nbat\nhappy"));
        assert!(report.contains("Total Syllables: 5\n"));
        assert!(report.contains("Average Syllables per Line: 1.3\n"));
    }

    #[test]
    fn test_letterless_line_counts_zero() {
        let report = syllable_report(&analysis("123 456\ncat"));
        assert!(report.contains("Line 1: 0 syllables - \"123 456\""));
        assert!(report.contains("Line 2: 1 syllable - \"cat\""));
        assert!(report.contains("Shortest Line: 0 syllables\n"));
        assert!(report.contains("Average Syllables per Line: 0.5\n"));
    }

    #[test]
    fn test_syllable_report_truncates_long_lines() {
        let long = "la ".repeat(30);
        let report = syllable_report(&analysis(&long));
        let shown = format!("{}...", &long.trim()[..50]);
        assert!(report.contains(&format!("\"{shown}\"")));
    }

    #[test]
    fn test_rhyme_report_layout() {
        let report = rhyme_report(&analysis("Hello there\nNo one's near\nGoodbye my dear"));
        let expected = "Rhyme Scheme Analysis\n\
                        =====================\n\
                        Rhyme Scheme: A B B\n\
                        \n\
                        Rhyming Patterns Found:\n  \
                        B: Lines 2, 3 (2 lines)\n\
                        \n\
                        Line Details:\n\
                        Line 1 [A]: \"Hello there\" (ending: \"there\")\n\
                        Line 2 [B]: \"No one's near\" (ending: \"near\")\n\
                        Line 3 [B]: \"Goodbye my dear\" (ending: \"dear\")";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_rhyme_report_without_patterns() {
        let report = rhyme_report(&analysis("moon\nsky\ntree"));
        assert!(report.contains("Rhyme Scheme: A B C"));
        assert!(report.contains("No clear rhyming patterns found."));
    }

    #[test]
    fn test_rhyme_report_marks_missing_ending() {
        let report = rhyme_report(&analysis("oh oh ...\ncat"));
        assert!(report.contains("Rhyme Scheme: - A"));
        assert!(report.contains("Line 1 [-]: \"oh oh ...\" (ending: none)"));
    }
}
