use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::analysis::LyricAnalysis;
use crate::app::{App, ResultsTab};
use crate::ui::{create_titled_block, label_color};

pub fn draw_results(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let titles: Vec<&str> = ResultsTab::all().iter().map(|t| t.name()).collect();
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title("Results"))
        .select(app.results_tab.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, chunks[0]);

    let (title, body) = match app.results_tab {
        ResultsTab::Syllables => (
            "Syllable Analysis".to_string(),
            app.report
                .as_ref()
                .map_or_else(|| vec![not_yet("analyze")], |r| plain_lines(&r.syllable_report)),
        ),
        ResultsTab::Rhymes => (
            match &app.analysis {
                Some(analysis) => format!("Rhyme Scheme: {}", analysis.scheme()),
                None => "Rhyme Scheme".to_string(),
            },
            match (&app.analysis, &app.report) {
                (Some(analysis), _) => rhyme_lines(analysis),
                (None, Some(report)) => plain_lines(&report.rhyme_report),
                (None, None) => vec![not_yet("analyze")],
            },
        ),
        ResultsTab::Remixes => match app.remixes.get(app.remix_idx) {
            Some(remix) => (format!("Remix {}/{}", app.remix_idx + 1, app.remixes.len()), plain_lines(remix)),
            None => ("Remixes".to_string(), vec![not_yet("remix")]),
        },
    };

    let paragraph = Paragraph::new(body)
        .block(create_titled_block(&title, true))
        .wrap(Wrap { trim: false })
        .scroll((app.results_scroll, 0));
    f.render_widget(paragraph, chunks[1]);
}

fn not_yet(command: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("Nothing here yet. Run :{command} from the editor."),
        Style::default().fg(Color::DarkGray),
    ))
}

fn plain_lines(text: &str) -> Vec<Line<'static>> {
    text.lines().map(|l| Line::from(l.to_string())).collect()
}

// One row per lyric line, coloured by rhyme label, followed by the patterns
fn rhyme_lines(analysis: &LyricAnalysis) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = analysis
        .lines
        .iter()
        .map(|line| {
            let color = label_color(line.label.as_str());
            let ending = if line.ending_word.is_empty() {
                Span::styled("  (none)", Style::default().fg(Color::DarkGray))
            } else {
                Span::styled(format!("  ({})", line.ending_word), Style::default().fg(Color::DarkGray))
            };
            Line::from(vec![
                Span::styled(format!("{:>3} ", line.number), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("[{:^3}] ", line.label.as_str()), Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::styled(line.text.clone(), Style::default().fg(color)),
                ending,
            ])
        })
        .collect();

    lines.push(Line::from(""));
    if analysis.groups.is_empty() {
        lines.push(Line::from(Span::styled(
            "No clear rhyming patterns found.",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        for group in &analysis.groups {
            let numbers: Vec<String> = group.lines.iter().map(ToString::to_string).collect();
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}: ", group.label.as_str()),
                    Style::default().fg(label_color(group.label.as_str())).add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("Lines {} ({} lines)", numbers.join(", "), group.lines.len())),
            ]));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn text_of(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_rhyme_lines_list_groups() {
        let analysis = LyricAnalysis::from_text("Hello there my friend\nNo one's near\nGoodbye my dear").unwrap();
        let lines = rhyme_lines(&analysis);
        assert_eq!(lines.len(), 5);
        assert_eq!(text_of(&lines[1]), "  2 [ B ] No one's near  (near)");
        assert_eq!(text_of(&lines[4]), "B: Lines 2, 3 (2 lines)");
    }

    #[test]
    fn test_rhyme_lines_without_groups() {
        let analysis = LyricAnalysis::from_text("one\ntwo").unwrap();
        let lines = rhyme_lines(&analysis);
        assert_eq!(text_of(lines.last().unwrap()), "No clear rhyming patterns found.");
    }
}
