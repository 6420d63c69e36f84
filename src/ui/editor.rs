use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::analysis::syllables::count_line_syllables;
use crate::app::App;
use crate::services::editor::Editor;
use crate::ui::create_titled_block;

/// Width of the syllable gutter, including its trailing separator.
const GUTTER_WIDTH: u16 = 5;

#[allow(clippy::cast_possible_truncation)]
pub fn draw_editor(f: &mut Frame, app: &mut App, area: Rect) {
    let title = format!("Lyrics ({} lines)", app.editor.line_count());
    let editor_block = create_titled_block(&title, !app.is_command_mode);

    f.render_widget(editor_block.clone(), area);

    // Get the inner area for the editor content
    let inner_area = editor_block.inner(area);

    // Update the viewport height so scrolling works correctly
    app.editor.viewport_height = inner_area.height as usize;
    app.editor.ensure_cursor_visible();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(GUTTER_WIDTH), Constraint::Min(1)])
        .split(inner_area);

    // Calculate the visible portion of the content
    let content = app.editor.content();
    let start_line = app.editor.scroll_offset.min(content.len());
    let end_line = (start_line + inner_area.height as usize).min(content.len());
    let visible = &content[start_line..end_line];

    let gutter: Vec<Line> = visible.iter().map(|line| gutter_line(line)).collect();
    let text: Vec<Line> = visible
        .iter()
        .map(|line| Line::from(Span::styled(line.clone(), Style::default().fg(Color::White))))
        .collect();

    f.render_widget(Paragraph::new(gutter), columns[0]);
    f.render_widget(Paragraph::new(text), columns[1]);

    if !app.editor.has_content() {
        draw_placeholder_hint(f, columns[1]);
    }

    // Show cursor only while typing lyrics
    if !app.is_command_mode && app.error_message.is_none() && app.status_message.is_none() && !app.show_help {
        let (line, column) = app.editor.cursor_position();
        let cursor_y = line.saturating_sub(app.editor.scroll_offset) as u16;
        if cursor_y < inner_area.height {
            let before: String = content
                .get(line)
                .map(|l| l.chars().take(column).collect())
                .unwrap_or_default();
            f.set_cursor(columns[1].left() + before.width() as u16, columns[1].top() + cursor_y);
        }
    }
}

// Syllable count for a line, blank for empty lines
fn gutter_line(line: &str) -> Line<'static> {
    if line.trim().is_empty() {
        return Line::from(Span::styled("   │", Style::default().fg(Color::DarkGray)));
    }
    let count = count_line_syllables(line);
    Line::from(vec![
        Span::styled(format!("{count:>3}"), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::styled("│", Style::default().fg(Color::DarkGray)),
    ])
}

fn draw_placeholder_hint(f: &mut Frame, area: Rect) {
    if area.height < 2 {
        return;
    }
    let hint = Paragraph::new("Type or paste lyrics, one line per line. Esc for commands, F1 for help.")
        .style(Style::default().fg(Color::DarkGray));
    let hint_area = Rect { y: area.y + 1, height: 1, ..area };
    f.render_widget(hint, hint_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gutter_shows_syllables() {
        let line = gutter_line("Hello there my friend");
        let rendered: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(rendered, "  5│");
    }

    #[test]
    fn test_gutter_blank_line() {
        let line = gutter_line("   ");
        let rendered: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(rendered, "   │");
    }
}
