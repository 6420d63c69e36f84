//! User interface components.
//!
//! Provides TUI widgets and drawing functions for the application's
//! terminal-based user interface using ratatui.

mod editor;
mod results;
mod saved;

pub use editor::draw_editor;
pub use results::draw_results;
pub use saved::draw_saved;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, AppMode, ResultsTab};
use crate::constants::ui::MIN_STATUS_WIDTH;

/// Colours cycled through for rhyme labels.
const LABEL_COLORS: [Color; 6] = [
    Color::Cyan,
    Color::Green,
    Color::Magenta,
    Color::Yellow,
    Color::LightBlue,
    Color::LightRed,
];

/// Pick a stable colour for a rhyme label; the `-` sentinel is grey.
pub fn label_color(label: &str) -> Color {
    if label == crate::constants::analysis::NO_RHYME_LABEL {
        return Color::DarkGray;
    }
    let hash = label.bytes().fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(usize::from(b)));
    LABEL_COLORS[hash % LABEL_COLORS.len()]
}

/// Render the full application UI to the terminal frame.
pub fn draw(f: &mut Frame, app: &mut App) {
    // Create the base layout
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(3), // Command/status bar at bottom
        ])
        .split(f.size());

    // Draw the main content based on current mode
    match app.mode {
        AppMode::Compose => draw_editor(f, app, chunks[0]),
        AppMode::Results => draw_results(f, app, chunks[0]),
        AppMode::Saved => draw_saved(f, app, chunks[0]),
    }

    draw_command_bar(f, app, chunks[1]);

    // Draw status/info modal (blocking)
    if let Some(status) = &app.status_message {
        draw_status_message(f, status);
        return;
    }
    // Draw error message if present (blocking)
    if let Some(error) = &app.error_message {
        draw_error_message(f, error);
        return;
    }

    // Draw help modal if shown
    if app.show_help {
        draw_help_modal(f, app);
    }
}

#[allow(clippy::cast_possible_truncation)]
fn draw_command_bar(f: &mut Frame, app: &App, area: Rect) {
    let title = if app.is_command_mode {
        "Command"
    } else if app.saved_filter_active {
        "Filter Saved"
    } else {
        "Commands/Status"
    };

    let border_color = if app.saved_filter_active { Color::Cyan } else { Color::Yellow };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(title, Style::default().fg(border_color)));

    f.render_widget(block, area);

    let inner_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1)])
        .margin(1) // Add a margin of 1 to account for the border
        .split(area)[0];

    if app.is_command_mode {
        let command = Paragraph::new(format!(" :{}", app.command_buffer))
            .style(Style::default().fg(Color::Yellow));
        f.render_widget(command, inner_area);
        f.set_cursor(inner_area.left() + app.command_buffer.chars().count() as u16 + 2, inner_area.top());
    } else if app.saved_filter_active {
        let search = Paragraph::new(format!(" /{}", app.saved_filter))
            .style(Style::default().fg(Color::Cyan));
        f.render_widget(search, inner_area);
    } else {
        // Show context-sensitive help/status with more left padding
        let help_text = match app.mode {
            AppMode::Compose => {
                let status = format!(
                    "Ln {}, Col {} | {} saved",
                    app.editor.cursor_y + 1,
                    app.editor.cursor_x + 1,
                    app.saved.len()
                );
                let mut text = create_help_text(&[
                    ("Esc", "Command"),
                    ("^A", "Analyze"),
                    ("^R", "Remix"),
                    ("^S", "Save"),
                    ("^Y", "Copy"),
                    ("^D", "Download"),
                ]);
                text.push(Span::styled(format!(" | {status}"), Style::default().fg(Color::Gray)));
                text
            }
            AppMode::Results => {
                let mut hints = vec![("Esc", "Edit"), ("Tab", "Next tab"), ("c", "Copy"), ("s", "Save"), ("d", "Download")];
                if app.results_tab == ResultsTab::Remixes {
                    hints.extend([("n/p", "Variant"), ("e", "Edit remix")]);
                }
                create_help_text(&hints)
            }
            AppMode::Saved => create_help_text(&[
                ("Esc", "Back"),
                ("Enter", "Load"),
                ("/", "Filter"),
                ("x", "Delete"),
                ("c", "Copy"),
                ("d", "Download"),
            ]),
        };

        let status_bar = Paragraph::new(Line::from(help_text)).style(Style::default().fg(Color::Gray));

        f.render_widget(status_bar, inner_area);
    }
}

/// Build styled help text spans from key-description pairs for the command bar.
pub fn create_help_text<'a>(commands: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut text = vec![Span::raw(" ")]; // Start with padding

    for (i, (key, description)) in commands.iter().enumerate() {
        // Add the key with bold styling
        text.push(Span::styled(*key, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)));

        // Add the description
        text.push(Span::raw(format!(": {description}")));

        // Add separator unless it's the last item
        if i < commands.len() - 1 {
            text.push(Span::raw(" | "));
        }
    }

    text
}

/// Create a bordered block with a title, highlighted when focused.
pub fn create_titled_block(title: &str, is_focused: bool) -> Block<'_> {
    let title_style = if is_focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let border_style = if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    Block::default()
        .title(Span::styled(title, title_style))
        .borders(Borders::ALL)
        .border_style(border_style)
}

// Draw an error message overlay
fn draw_error_message(f: &mut Frame, message: &str) {
    let size = f.size();

    let width = 50.min(size.width.saturating_sub(4));
    let height = 7.min(size.height);

    let area = Rect {
        x: (size.width.saturating_sub(width)) / 2,
        y: (size.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let block = Block::default()
        .title(Span::styled("Error", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    let text = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area); // Clear the area first
    f.render_widget(block, area);

    let inner_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1), // Space for a "Press Esc to dismiss" hint
        ])
        .margin(1)
        .split(area);

    f.render_widget(text, inner_area[0]);

    let hint = Paragraph::new("Press Esc to dismiss")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(hint, inner_area[1]);
}

#[allow(clippy::cast_possible_truncation)]
fn draw_status_message(f: &mut Frame, message: &str) {
    use unicode_width::UnicodeWidthStr;
    let size = f.size();

    // Calculate box width (max 80% of screen, min 50)
    let max_width = (size.width as usize * 80) / 100;
    let width = message
        .width()
        .saturating_add(6)
        .min(max_width)
        .max(MIN_STATUS_WIDTH.min(size.width as usize)) as u16;

    // Calculate how many lines the message will need when wrapped
    let inner_width = (width.saturating_sub(4) as usize).max(1);
    let msg_lines = message.width().div_ceil(inner_width);
    let height = (msg_lines as u16 + 4).min(size.height.saturating_sub(4).max(3));

    let area = Rect {
        x: (size.width.saturating_sub(width)) / 2,
        y: (size.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let block = Block::default()
        .title(Span::styled("Info", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let text = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let inner_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // message (flexible)
            Constraint::Length(1), // hint
        ])
        .margin(1)
        .split(area);

    f.render_widget(text, inner_area[0]);

    let hint = Paragraph::new("Press Esc to dismiss")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(hint, inner_area[1]);
}

// Draw the help modal with keybindings
fn draw_help_modal(f: &mut Frame, app: &App) {
    let size = f.size();

    let width = 60.min(size.width.saturating_sub(4));
    let height = 26.min(size.height.saturating_sub(4));

    let area = Rect {
        x: (size.width.saturating_sub(width)) / 2,
        y: (size.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let block = Block::default()
        .title(Span::styled(" Help - Keybindings ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let inner_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1)])
        .margin(1)
        .split(area)[0];

    let help_text: Vec<Line> = build_help_content(app.mode)
        .iter()
        .map(|(key, desc, is_header)| {
            if *is_header {
                Line::from(vec![Span::styled(*key, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))])
            } else {
                Line::from(vec![
                    Span::styled(format!("{key:>12}"), Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                    Span::raw("  "),
                    Span::styled(*desc, Style::default().fg(Color::White)),
                ])
            }
        })
        .collect();

    f.render_widget(Paragraph::new(help_text).wrap(Wrap { trim: true }), inner_area);
}

// Build help content based on current mode
fn build_help_content(mode: AppMode) -> Vec<(&'static str, &'static str, bool)> {
    let mut lines = vec![
        ("── Global ──", "", true),
        ("F1 / ?", "Show this help", false),
        (":q / :quit", "Quit application", false),
        (":analyze", "Syllable and rhyme reports", false),
        (":remix", "Shuffle lines into variants", false),
        (":save [title]", "Save current text", false),
        (":copy / :download", "Copy or write to a file", false),
        (":saved / :clear", "Saved list / start over", false),
        ("", "", false),
    ];

    match mode {
        AppMode::Compose => {
            lines.extend([
                ("── Compose ──", "", true),
                ("Esc", "Open command line", false),
                ("Arrows", "Move cursor", false),
                ("Ctrl+A / Ctrl+R", "Analyze / Remix", false),
                ("Ctrl+S / Ctrl+Y", "Save / Copy", false),
                ("Ctrl+D", "Download", false),
            ]);
        }
        AppMode::Results => {
            lines.extend([
                ("── Results ──", "", true),
                (":", "Open command line", false),
                ("Tab", "Syllables / Rhymes / Remixes", false),
                ("j/k", "Scroll", false),
                ("n/p", "Next / previous remix", false),
                ("e", "Edit shown remix", false),
                ("r", "Remix again", false),
                ("c / s / d", "Copy / Save / Download", false),
                ("v", "Saved list", false),
                ("Esc", "Back to editor", false),
            ]);
        }
        AppMode::Saved => {
            lines.extend([
                ("── Saved ──", "", true),
                (":", "Open command line", false),
                ("j/k", "Move selection", false),
                ("/", "Filter by title", false),
                ("Enter", "Load into editor", false),
                ("x", "Delete", false),
                ("c / d", "Copy / Download", false),
                ("Esc", "Back to editor", false),
            ]);
        }
    }

    // Add dismiss hint at the end
    lines.push(("", "", false));
    lines.push(("Press Esc, F1 or ? to close", "", true));

    lines
}
