use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::constants::ui::SAVED_LIST_WIDTH;
use crate::library::{SavedKind, SavedLyric};
use crate::ui::create_titled_block;

const fn kind_color(kind: SavedKind) -> Color {
    match kind {
        SavedKind::Original => Color::White,
        SavedKind::Remix => Color::Magenta,
        SavedKind::Report => Color::Cyan,
    }
}

pub fn draw_saved(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SAVED_LIST_WIDTH), Constraint::Min(1)])
        .split(area);

    let entries = app.saved.filter(&app.saved_filter);

    let title = if app.saved_filter.is_empty() {
        format!("Saved ({})", entries.len())
    } else {
        format!("Saved ({}/{}) /{}", entries.len(), app.saved.len(), app.saved_filter)
    };

    let items: Vec<ListItem> = if entries.is_empty() {
        vec![ListItem::new(Span::styled(
            if app.saved.is_empty() { "Nothing saved yet" } else { "No matches" },
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        entries.iter().copied().map(list_item).collect()
    };

    let list = List::new(items)
        .block(create_titled_block(&title, !app.saved_filter_active))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let preview = app
        .saved_list_state
        .selected()
        .and_then(|idx| entries.get(idx))
        .copied()
        .map(preview_lines);

    let preview_title = app
        .selected_saved()
        .and_then(|id| app.saved.get(id))
        .map_or_else(|| "Preview".to_string(), |e| format!("{} - {}", e.kind.name(), e.title));

    let preview_widget = Paragraph::new(preview.unwrap_or_default())
        .block(create_titled_block(&preview_title, false))
        .wrap(Wrap { trim: false });

    f.render_stateful_widget(list, chunks[0], &mut app.saved_list_state);
    f.render_widget(preview_widget, chunks[1]);
}

fn list_item(entry: &SavedLyric) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::styled(
            format!("{:<8}", entry.kind.name()),
            Style::default().fg(kind_color(entry.kind)),
        ),
        Span::raw(entry.title.clone()),
    ]))
}

fn preview_lines(entry: &SavedLyric) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("Saved {}", entry.saved_at.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];
    lines.extend(entry.body.lines().map(|l| Line::from(l.to_string())));
    lines
}
