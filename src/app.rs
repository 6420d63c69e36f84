//! Application state and key dispatch for the terminal UI.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::widgets::ListState;
use rand::rngs::StdRng;
use std::path::PathBuf;

use crate::analysis::{analyze_detailed, LyricAnalysis, LyricReport};
use crate::config::Config;
use crate::error::Result;
use crate::input::{
    compose_shortcut, parse_command, GlobalHandler, InputContext, InputHandler, InputResult,
    ResultsHandler, SavedHandler,
};
use crate::library::{self, SavedId, SavedKind, SavedLyrics};
use crate::remix::{remix_rng, remix_variants};
use crate::services::editor::{Editor, EditorState};
use crate::validation::validate_lyrics;

pub use crate::input::{Action, AppMode};

/// Tabs on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsTab {
    /// Syllable report.
    Syllables,
    /// Rhyme report with coloured lines.
    Rhymes,
    /// Shuffled variants.
    Remixes,
}

impl ResultsTab {
    /// Returns all tabs in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Syllables, Self::Rhymes, Self::Remixes]
    }

    /// Returns the tab title.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Syllables => "Syllables",
            Self::Rhymes => "Rhymes",
            Self::Remixes => "Remixes",
        }
    }

    /// Cycle to next tab.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Syllables => Self::Rhymes,
            Self::Rhymes => Self::Remixes,
            Self::Remixes => Self::Syllables,
        }
    }

    /// Position in [`ResultsTab::all`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Syllables => 0,
            Self::Rhymes => 1,
            Self::Remixes => 2,
        }
    }
}

/// Full terminal UI state.
pub struct App {
    /// Current screen.
    pub mode: AppMode,
    /// Lyric editor buffer.
    pub editor: EditorState,
    /// Structured result of the last analysis, if any.
    pub analysis: Option<LyricAnalysis>,
    /// Rendered reports of the last analysis.
    pub report: Option<LyricReport>,
    /// Remix variants from the last remix request.
    pub remixes: Vec<String>,
    /// Index of the remix shown.
    pub remix_idx: usize,
    /// Editor text the current report was built from.
    report_source: Option<String>,
    /// Editor text the current remixes were built from.
    remix_source: Option<String>,
    /// Active results tab.
    pub results_tab: ResultsTab,
    /// Vertical scroll of the results view.
    pub results_scroll: u16,
    /// Lyrics saved this session.
    pub saved: SavedLyrics,
    /// Selection in the saved list.
    pub saved_list_state: ListState,
    /// Current saved-list filter.
    pub saved_filter: String,
    /// Whether the filter is being typed.
    pub saved_filter_active: bool,
    /// `:` command being typed.
    pub command_buffer: String,
    /// Whether the command line is open.
    pub is_command_mode: bool,
    /// Application configuration.
    pub config: Config,
    /// Blocking error modal text.
    pub error_message: Option<String>,
    /// Blocking info modal text.
    pub status_message: Option<String>,
    /// Whether the help modal is shown.
    pub show_help: bool,
    should_quit: bool,
    rng: StdRng,
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

impl App {
    /// Create the app, loading configuration from the environment.
    pub fn new() -> Self {
        match Config::load() {
            Ok(config) => Self::with_config(config),
            Err(e) => {
                tracing::warn!("Falling back to default configuration: {e}");
                let mut app = Self::default();
                app.error_message = Some(e.to_string());
                app
            }
        }
    }

    /// Create the app with explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            mode: AppMode::Compose,
            editor: EditorState::default(),
            analysis: None,
            report: None,
            remixes: Vec::new(),
            remix_idx: 0,
            report_source: None,
            remix_source: None,
            results_tab: ResultsTab::Syllables,
            results_scroll: 0,
            saved: SavedLyrics::new(),
            saved_list_state: ListState::default(),
            saved_filter: String::new(),
            saved_filter_active: false,
            command_buffer: String::new(),
            is_command_mode: false,
            rng: remix_rng(config.remix_seed),
            config,
            error_message: None,
            status_message: None,
            show_help: false,
            should_quit: false,
        }
    }

    /// Whether the main loop should exit.
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Request exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Dispatch a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // First, check if help modal is shown
        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?')) {
                self.show_help = false;
            }
            return;
        }

        // Blocking modals wait for Esc
        if self.error_message.is_some() || self.status_message.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.error_message = None;
                self.status_message = None;
            }
            return;
        }

        if self.is_command_mode {
            self.handle_command_input(key);
            return;
        }

        if self.saved_filter_active {
            self.handle_filter_input(key);
            return;
        }

        let global = GlobalHandler.handle(key, &self.input_context());
        if global != InputResult::Ignored {
            self.apply(global);
            return;
        }

        // ':' opens the command line outside the editor; Esc does inside it
        let opens_command = match self.mode {
            AppMode::Compose => key.code == KeyCode::Esc,
            AppMode::Results | AppMode::Saved => key.code == KeyCode::Char(':'),
        };
        if opens_command {
            self.is_command_mode = true;
            self.command_buffer.clear();
            return;
        }

        let result = match self.mode {
            AppMode::Compose => self.handle_compose_input(key),
            AppMode::Results => ResultsHandler.handle(key, &self.input_context()),
            AppMode::Saved => SavedHandler.handle(key, &self.input_context()),
        };
        self.apply(result);
    }

    fn input_context(&self) -> InputContext<'_> {
        InputContext {
            mode: self.mode,
            show_help: self.show_help,
            is_command_mode: self.is_command_mode,
            command_buffer: &self.command_buffer,
        }
    }

    fn handle_compose_input(&mut self, key: KeyEvent) -> InputResult {
        if let Some(action) = compose_shortcut(key) {
            return InputResult::Action(action);
        }

        match key.code {
            KeyCode::Char(c) => self.editor.insert_char(c),
            KeyCode::Enter => self.editor.insert_newline(),
            KeyCode::Backspace => self.editor.delete_backward(),
            KeyCode::Delete => self.editor.delete_forward(),
            KeyCode::Left => self.editor.move_left(),
            KeyCode::Right => self.editor.move_right(),
            KeyCode::Up => self.editor.move_up(),
            KeyCode::Down => self.editor.move_down(),
            KeyCode::Home => self.editor.move_home(),
            KeyCode::End => self.editor.move_end(),
            KeyCode::Tab => self.editor.insert_str("  "),
            _ => return InputResult::Ignored,
        }
        InputResult::Consumed
    }

    /// Insert pasted text into the editor.
    pub fn handle_paste(&mut self, text: &str) {
        if self.mode == AppMode::Compose && !self.is_command_mode {
            self.editor.insert_str(text);
        } else if self.is_command_mode {
            self.command_buffer.push_str(text.lines().next().unwrap_or_default());
        }
    }

    fn handle_command_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.is_command_mode = false;
                self.command_buffer.clear();
            }
            KeyCode::Enter => {
                let command = std::mem::take(&mut self.command_buffer);
                self.is_command_mode = false;
                self.apply(parse_command(&command));
            }
            KeyCode::Backspace => {
                self.command_buffer.pop();
            }
            KeyCode::Char(c) => {
                self.command_buffer.push(c);
            }
            _ => {}
        }
    }

    fn handle_filter_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.saved_filter_active = false;
                self.saved_filter.clear();
            }
            KeyCode::Enter => {
                self.saved_filter_active = false;
            }
            KeyCode::Backspace => {
                self.saved_filter.pop();
            }
            KeyCode::Char(c) => {
                self.saved_filter.push(c);
            }
            _ => return,
        }
        self.reset_saved_selection();
    }

    fn apply(&mut self, result: InputResult) {
        match result {
            InputResult::Consumed | InputResult::Ignored => {}
            InputResult::Quit => self.quit(),
            InputResult::ModeChange(mode) => self.set_mode(mode),
            InputResult::Action(action) => self.run_action(action),
            InputResult::Error(message) => self.error_message = Some(message),
            InputResult::Status(message) => self.status_message = Some(message),
        }
    }

    /// Switch screens.
    pub fn set_mode(&mut self, mode: AppMode) {
        if mode == AppMode::Results && self.report.is_none() && self.remixes.is_empty() {
            self.status_message = Some("Nothing to show yet. Analyze or remix first.".to_string());
            return;
        }
        if mode == AppMode::Saved {
            self.reset_saved_selection();
        }
        self.mode = mode;
    }

    /// Run an action, reporting failures in the error modal.
    pub fn run_action(&mut self, action: Action) {
        let outcome = match action {
            Action::Analyze => self.analyze(),
            Action::Remix => self.remix(),
            Action::Save(title) => self.save_current(title.as_deref()),
            Action::Copy => self.copy_current(),
            Action::Download => self.download_current(),
            Action::Clear => {
                self.clear();
                Ok(())
            }
            Action::NextTab => {
                self.results_tab = self.results_tab.next();
                self.results_scroll = 0;
                Ok(())
            }
            Action::ScrollUp => {
                self.scroll(false);
                Ok(())
            }
            Action::ScrollDown => {
                self.scroll(true);
                Ok(())
            }
            Action::NextRemix => {
                self.step_remix(true);
                Ok(())
            }
            Action::PrevRemix => {
                self.step_remix(false);
                Ok(())
            }
            Action::EditRemix => self.edit_remix(),
            Action::LoadSaved => self.load_selected_saved(),
            Action::DeleteSaved => self.delete_selected_saved(),
            Action::StartFilter => {
                self.saved_filter_active = true;
                Ok(())
            }
            Action::Help => {
                self.show_help = true;
                Ok(())
            }
        };

        if let Err(e) = outcome {
            tracing::warn!("Action failed: {e}");
            self.error_message = Some(e.to_string());
        }
    }

    /// Validate and analyze the editor text, then show the reports.
    pub fn analyze(&mut self) -> Result<()> {
        let text = self.editor.text();
        validate_lyrics(&text, &self.config.limits)?;

        let (analysis, report) = analyze_detailed(&text);
        self.analysis = analysis;
        self.report = Some(report);
        if self.remix_source.as_deref() != Some(text.as_str()) {
            self.clear_remixes();
        }
        self.report_source = Some(text);
        self.results_tab = ResultsTab::Syllables;
        self.results_scroll = 0;
        self.mode = AppMode::Results;
        Ok(())
    }

    /// Validate the editor text and generate remix variants.
    pub fn remix(&mut self) -> Result<()> {
        let text = self.editor.text();
        validate_lyrics(&text, &self.config.limits)?;

        self.remixes = remix_variants(&text, self.config.remix_count, &mut self.rng);
        self.remix_idx = 0;
        tracing::debug!("Generated {} remixes", self.remixes.len());
        if self.report_source.as_deref() != Some(text.as_str()) {
            self.clear_report();
        }
        self.remix_source = Some(text);

        if self.remixes.is_empty() {
            self.status_message = Some("No remixes generated. Check LYRICSMITH_REMIX_COUNT.".to_string());
            return Ok(());
        }
        self.results_tab = ResultsTab::Remixes;
        self.results_scroll = 0;
        self.mode = AppMode::Results;
        Ok(())
    }

    /// The text the current screen refers to, with its kind.
    pub fn current_text(&self) -> Option<(String, SavedKind)> {
        match self.mode {
            AppMode::Compose => self
                .editor
                .has_content()
                .then(|| (self.editor.text(), SavedKind::Original)),
            AppMode::Results => match self.results_tab {
                ResultsTab::Syllables => self
                    .report
                    .as_ref()
                    .map(|r| (r.syllable_report.clone(), SavedKind::Report)),
                ResultsTab::Rhymes => self
                    .report
                    .as_ref()
                    .map(|r| (r.rhyme_report.clone(), SavedKind::Report)),
                ResultsTab::Remixes => self
                    .remixes
                    .get(self.remix_idx)
                    .map(|r| (r.clone(), SavedKind::Remix)),
            },
            AppMode::Saved => self
                .selected_saved()
                .and_then(|id| self.saved.get(id))
                .map(|e| (e.body.clone(), e.kind)),
        }
    }

    fn save_current(&mut self, title: Option<&str>) -> Result<()> {
        let (body, kind) = self.current_text().ok_or("Nothing to save")?;
        // Reports are saved whole so the pair stays together
        let body = match (kind, &self.report) {
            (SavedKind::Report, Some(report)) => report.combined(),
            _ => body,
        };
        self.saved.save(title.unwrap_or_default(), &body, kind);
        self.status_message = Some(format!("Saved {} ({} saved)", kind.name().to_lowercase(), self.saved.len()));
        Ok(())
    }

    fn copy_current(&mut self) -> Result<()> {
        let (text, kind) = self.current_text().ok_or("Nothing to copy")?;
        library::clipboard_write(&text)?;
        self.status_message = Some(format!("Copied {} to clipboard", kind.name().to_lowercase()));
        Ok(())
    }

    fn download_current(&mut self) -> Result<()> {
        let dir = self.config.output_dir.clone();
        let path = self.download_to(&dir)?;
        self.status_message = Some(format!("Downloaded to {}", path.display()));
        Ok(())
    }

    /// Write the current text into `dir`.
    pub fn download_to(&self, dir: &std::path::Path) -> Result<PathBuf> {
        if self.mode == AppMode::Saved {
            let entry = self
                .selected_saved()
                .and_then(|id| self.saved.get(id))
                .ok_or("No saved entry selected")?;
            return library::download(entry, dir);
        }

        let (body, kind) = self.current_text().ok_or("Nothing to download")?;
        let title = match kind {
            SavedKind::Remix => format!("Remix {}", self.remix_idx + 1),
            _ => self.editor_title(),
        };
        library::download_text(&title, &body, kind, dir)
    }

    fn editor_title(&self) -> String {
        self.editor
            .content()
            .iter()
            .map(|l| l.trim())
            .find(|l| !l.is_empty())
            .unwrap_or_default()
            .to_string()
    }

    fn clear(&mut self) {
        self.editor.clear();
        self.clear_report();
        self.clear_remixes();
        self.mode = AppMode::Compose;
    }

    fn clear_report(&mut self) {
        self.analysis = None;
        self.report = None;
        self.report_source = None;
    }

    fn clear_remixes(&mut self) {
        self.remixes.clear();
        self.remix_idx = 0;
        self.remix_source = None;
    }

    fn scroll(&mut self, down: bool) {
        match self.mode {
            AppMode::Results => {
                self.results_scroll = if down {
                    self.results_scroll.saturating_add(1)
                } else {
                    self.results_scroll.saturating_sub(1)
                };
            }
            AppMode::Saved => {
                let len = self.saved.filter(&self.saved_filter).len();
                if len == 0 {
                    return;
                }
                let current = self.saved_list_state.selected().unwrap_or(0);
                let next = if down { (current + 1).min(len - 1) } else { current.saturating_sub(1) };
                self.saved_list_state.select(Some(next));
            }
            AppMode::Compose => {}
        }
    }

    fn step_remix(&mut self, forward: bool) {
        if self.remixes.is_empty() {
            return;
        }
        let len = self.remixes.len();
        self.remix_idx = if forward { (self.remix_idx + 1) % len } else { (self.remix_idx + len - 1) % len };
        self.results_tab = ResultsTab::Remixes;
    }

    fn edit_remix(&mut self) -> Result<()> {
        let remix = self.remixes.get(self.remix_idx).ok_or("No remix to edit")?.clone();
        self.editor.set_text(&remix);
        self.mode = AppMode::Compose;
        Ok(())
    }

    /// Id of the highlighted saved entry under the current filter.
    pub fn selected_saved(&self) -> Option<SavedId> {
        let idx = self.saved_list_state.selected()?;
        self.saved.filter(&self.saved_filter).get(idx).map(|e| e.id)
    }

    fn reset_saved_selection(&mut self) {
        let has_entries = !self.saved.filter(&self.saved_filter).is_empty();
        self.saved_list_state.select(has_entries.then_some(0));
    }

    fn load_selected_saved(&mut self) -> Result<()> {
        let id = self.selected_saved().ok_or("No saved entry selected")?;
        let body = self.saved.get(id).map(|e| e.body.clone()).ok_or("Saved entry missing")?;
        self.editor.set_text(&body);
        self.mode = AppMode::Compose;
        Ok(())
    }

    fn delete_selected_saved(&mut self) -> Result<()> {
        let id = self.selected_saved().ok_or("No saved entry selected")?;
        let removed = self.saved.remove(id)?;
        tracing::info!("Deleted saved \"{}\"", removed.title);

        let len = self.saved.filter(&self.saved_filter).len();
        let next = self.saved_list_state.selected().map(|i| i.min(len.saturating_sub(1)));
        self.saved_list_state.select(if len == 0 { None } else { next });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crossterm::event::KeyModifiers;

    const SONG: &str = "Hello there my friend\nNo one's near\nGoodbye my dear";

    fn app() -> App {
        let mut config = Config::default();
        config.remix_seed = Some(9);
        App::with_config(config)
    }

    fn app_with(text: &str) -> App {
        let mut app = app();
        app.editor.set_text(text);
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn type_command(app: &mut App, command: &str) {
        app.handle_key(key(KeyCode::Esc));
        for c in command.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
    }

    #[test]
    fn test_typing_goes_to_editor() {
        let mut app = app();
        for c in "la la".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('?')));
        assert_eq!(app.editor.text(), "la la\n?");
        assert!(!app.show_help);
    }

    #[test]
    fn test_analyze_shows_results() {
        let mut app = app_with(SONG);
        app.analyze().unwrap();
        assert_eq!(app.mode, AppMode::Results);
        assert_eq!(app.analysis.as_ref().unwrap().scheme(), "A B B");
        assert!(app.report.as_ref().unwrap().rhyme_report.contains("Rhyme Scheme: A B B"));
    }

    #[test]
    fn test_analyze_rejects_short_lyrics() {
        let mut app = app_with("too short");
        app.run_action(Action::Analyze);
        assert_eq!(app.mode, AppMode::Compose);
        assert!(app.error_message.unwrap().contains("at least 20"));
        assert!(app.report.is_none());
    }

    #[test]
    fn test_failed_analysis_keeps_previous_results() {
        let mut app = app_with(SONG);
        app.analyze().unwrap();
        let before = app.report.clone();

        app.editor.set_text("tiny");
        app.run_action(Action::Analyze);
        assert!(app.error_message.is_some());
        assert_eq!(app.report, before);
    }

    #[test]
    fn test_command_line_runs_analyze() {
        let mut app = app_with(SONG);
        type_command(&mut app, "analyze");
        assert_eq!(app.mode, AppMode::Results);
        assert!(!app.is_command_mode);
    }

    #[test]
    fn test_remix_and_edit() {
        let mut app = app_with(SONG);
        app.remix().unwrap();
        assert_eq!(app.remixes.len(), 3);
        assert_eq!(app.results_tab, ResultsTab::Remixes);

        app.run_action(Action::NextRemix);
        assert_eq!(app.remix_idx, 1);
        let shown = app.remixes[1].clone();
        app.run_action(Action::EditRemix);
        assert_eq!(app.mode, AppMode::Compose);
        assert_eq!(app.editor.text(), shown);
    }

    #[test]
    fn test_save_from_each_screen() {
        let mut app = app_with(SONG);
        app.run_action(Action::Save(Some("Draft".to_string())));
        app.status_message = None;

        app.analyze().unwrap();
        app.run_action(Action::Save(None));
        app.status_message = None;

        app.remix().unwrap();
        app.run_action(Action::Save(None));

        let kinds: Vec<SavedKind> = app.saved.newest_first().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![SavedKind::Remix, SavedKind::Report, SavedKind::Original]);
        let report = app.saved.newest_first().nth(1).unwrap();
        assert!(report.body.contains("Syllable Analysis"));
        assert!(report.body.contains("Rhyme Scheme Analysis"));
    }

    #[test]
    fn test_saved_load_and_delete() {
        let mut app = app_with(SONG);
        app.run_action(Action::Save(Some("Keep".to_string())));
        app.status_message = None;
        app.run_action(Action::Clear);
        assert!(!app.editor.has_content());

        app.set_mode(AppMode::Saved);
        assert_eq!(app.saved_list_state.selected(), Some(0));
        app.run_action(Action::LoadSaved);
        assert_eq!(app.editor.text(), SONG);

        app.set_mode(AppMode::Saved);
        app.run_action(Action::DeleteSaved);
        assert!(app.saved.is_empty());
        assert_eq!(app.saved_list_state.selected(), None);
    }

    #[test]
    fn test_download_current_remix() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with(SONG);
        app.remix().unwrap();
        let path = app.download_to(dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "Remix 1-remix.txt");
        let written = std::fs::read_to_string(path).unwrap();
        assert_eq!(written.trim_end(), app.remixes[0]);
    }

    #[test]
    fn test_results_from_same_text_are_kept_together() {
        let mut app = app_with(SONG);
        app.analyze().unwrap();
        app.remix().unwrap();
        assert!(app.report.is_some());
        assert_eq!(app.remixes.len(), 3);

        app.analyze().unwrap();
        assert_eq!(app.remixes.len(), 3);
    }

    #[test]
    fn test_stale_results_dropped_when_text_changes() {
        let mut app = app_with(SONG);
        app.analyze().unwrap();

        app.editor.set_text("Under the moonlight\nwe dance all night");
        app.remix().unwrap();
        assert!(app.report.is_none());
        assert!(app.analysis.is_none());

        app.editor.set_text(SONG);
        app.analyze().unwrap();
        assert!(app.remixes.is_empty());
        assert_eq!(app.remix_idx, 0);
    }

    #[test]
    fn test_results_needs_content() {
        let mut app = app();
        app.set_mode(AppMode::Results);
        assert_eq!(app.mode, AppMode::Compose);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_quit_command() {
        let mut app = app();
        type_command(&mut app, "q");
        assert!(app.should_quit());
    }
}
