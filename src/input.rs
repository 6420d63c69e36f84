//! Input handling abstractions.
//!
//! This module provides traits and types for handling keyboard input
//! in a modular way, allowing mode-specific handlers to be tested independently.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Result of processing an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResult {
    /// The input was consumed and handled.
    Consumed,
    /// The input was ignored (not applicable to this handler).
    Ignored,
    /// The application should quit.
    Quit,
    /// The mode should change.
    ModeChange(AppMode),
    /// An application action should run.
    Action(Action),
    /// An error occurred (message to display).
    Error(String),
    /// A status message should be shown.
    Status(String),
}

/// Application modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Lyric editor.
    Compose,
    /// Reports and remixes for the last analysis.
    Results,
    /// Lyrics saved this session.
    Saved,
}

/// Operations triggered by keys or `:` commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Validate and analyze the editor text.
    Analyze,
    /// Validate and generate remix variants.
    Remix,
    /// Save the current text, optionally under a title.
    Save(Option<String>),
    /// Copy the current text to the clipboard.
    Copy,
    /// Write the current text to the output directory.
    Download,
    /// Empty the editor and drop results.
    Clear,
    /// Cycle the results tab.
    NextTab,
    /// Scroll the current view up.
    ScrollUp,
    /// Scroll the current view down.
    ScrollDown,
    /// Show the next remix variant.
    NextRemix,
    /// Show the previous remix variant.
    PrevRemix,
    /// Load the shown remix into the editor.
    EditRemix,
    /// Load the selected saved entry into the editor.
    LoadSaved,
    /// Delete the selected saved entry.
    DeleteSaved,
    /// Start typing a saved-list filter.
    StartFilter,
    /// Show the help modal.
    Help,
}

/// Context passed to input handlers.
///
/// This provides handlers with the information they need to process
/// input without directly accessing the full App state.
pub struct InputContext<'a> {
    /// Current application mode.
    pub mode: AppMode,
    /// Whether help is currently shown.
    pub show_help: bool,
    /// Whether in command mode.
    pub is_command_mode: bool,
    /// Current command buffer contents.
    pub command_buffer: &'a str,
}

/// Trait for handling keyboard input.
///
/// Implementations of this trait handle input for specific modes
/// or input contexts.
pub trait InputHandler {
    /// Handle a key event.
    ///
    /// # Arguments
    /// * `key` - The key event to handle
    /// * `ctx` - Context about the current application state
    ///
    /// # Returns
    /// The result of handling the input.
    fn handle(&mut self, key: KeyEvent, ctx: &InputContext<'_>) -> InputResult;

    /// Get the name of this handler (for debugging).
    fn name(&self) -> &'static str;
}

/// Handler for global shortcuts (help).
#[derive(Debug, Default)]
pub struct GlobalHandler;

impl InputHandler for GlobalHandler {
    fn handle(&mut self, key: KeyEvent, ctx: &InputContext<'_>) -> InputResult {
        // F1 or ? shows help (except while composing, where ? is text)
        if key.code == KeyCode::F(1) {
            return InputResult::Action(Action::Help);
        }

        if key.code == KeyCode::Char('?') && ctx.mode != AppMode::Compose && !ctx.is_command_mode {
            return InputResult::Action(Action::Help);
        }

        InputResult::Ignored
    }

    fn name(&self) -> &'static str {
        "GlobalHandler"
    }
}

/// Handler for the results screen.
#[derive(Debug, Default)]
pub struct ResultsHandler;

impl InputHandler for ResultsHandler {
    fn handle(&mut self, key: KeyEvent, _ctx: &InputContext<'_>) -> InputResult {
        let action = match key.code {
            KeyCode::Esc => return InputResult::ModeChange(AppMode::Compose),
            KeyCode::Tab | KeyCode::Right => Action::NextTab,
            KeyCode::Up | KeyCode::Char('k') => Action::ScrollUp,
            KeyCode::Down | KeyCode::Char('j') => Action::ScrollDown,
            KeyCode::Char('n') => Action::NextRemix,
            KeyCode::Char('p') => Action::PrevRemix,
            KeyCode::Char('e') => Action::EditRemix,
            KeyCode::Char('c') => Action::Copy,
            KeyCode::Char('s') => Action::Save(None),
            KeyCode::Char('d') => Action::Download,
            KeyCode::Char('r') => Action::Remix,
            KeyCode::Char('v') => return InputResult::ModeChange(AppMode::Saved),
            _ => return InputResult::Ignored,
        };
        InputResult::Action(action)
    }

    fn name(&self) -> &'static str {
        "ResultsHandler"
    }
}

/// Handler for the saved lyrics list.
#[derive(Debug, Default)]
pub struct SavedHandler;

impl InputHandler for SavedHandler {
    fn handle(&mut self, key: KeyEvent, _ctx: &InputContext<'_>) -> InputResult {
        let action = match key.code {
            KeyCode::Esc => return InputResult::ModeChange(AppMode::Compose),
            KeyCode::Up | KeyCode::Char('k') => Action::ScrollUp,
            KeyCode::Down | KeyCode::Char('j') => Action::ScrollDown,
            KeyCode::Enter => Action::LoadSaved,
            KeyCode::Char('x') | KeyCode::Delete => Action::DeleteSaved,
            KeyCode::Char('/') => Action::StartFilter,
            KeyCode::Char('c') => Action::Copy,
            KeyCode::Char('d') => Action::Download,
            _ => return InputResult::Ignored,
        };
        InputResult::Action(action)
    }

    fn name(&self) -> &'static str {
        "SavedHandler"
    }
}

/// Map editor shortcuts (Ctrl+key) to actions; plain typing is left to the editor.
pub fn compose_shortcut(key: KeyEvent) -> Option<Action> {
    if !key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Char('a') => Some(Action::Analyze),
        KeyCode::Char('r') => Some(Action::Remix),
        KeyCode::Char('s') => Some(Action::Save(None)),
        KeyCode::Char('y') => Some(Action::Copy),
        KeyCode::Char('d') => Some(Action::Download),
        _ => None,
    }
}

/// Parse a `:` command line.
pub fn parse_command(command: &str) -> InputResult {
    let command = command.trim();
    let (name, arg) = command
        .split_once(char::is_whitespace)
        .map_or((command, ""), |(n, a)| (n, a.trim()));

    match name {
        "q" | "quit" => InputResult::Quit,
        "a" | "analyze" => InputResult::Action(Action::Analyze),
        "r" | "remix" => InputResult::Action(Action::Remix),
        "s" | "save" => {
            let title = (!arg.is_empty()).then(|| arg.to_string());
            InputResult::Action(Action::Save(title))
        }
        "y" | "copy" => InputResult::Action(Action::Copy),
        "w" | "download" => InputResult::Action(Action::Download),
        "clear" => InputResult::Action(Action::Clear),
        "saved" => InputResult::ModeChange(AppMode::Saved),
        "results" => InputResult::ModeChange(AppMode::Results),
        "edit" => InputResult::ModeChange(AppMode::Compose),
        "h" | "help" => InputResult::Action(Action::Help),
        "" => InputResult::Consumed,
        other => InputResult::Error(format!("Unknown command: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn make_context(mode: AppMode) -> InputContext<'static> {
        InputContext {
            mode,
            show_help: false,
            is_command_mode: false,
            command_buffer: "",
        }
    }

    #[test]
    fn test_global_handler_f1() {
        let mut handler = GlobalHandler;
        let ctx = make_context(AppMode::Compose);
        let result = handler.handle(make_key(KeyCode::F(1)), &ctx);

        assert_eq!(result, InputResult::Action(Action::Help));
    }

    #[test]
    fn test_global_handler_question_mark_in_compose_ignored() {
        let mut handler = GlobalHandler;
        let ctx = make_context(AppMode::Compose);
        let result = handler.handle(make_key(KeyCode::Char('?')), &ctx);

        assert_eq!(result, InputResult::Ignored);
    }

    #[test]
    fn test_global_handler_question_mark_in_results() {
        let mut handler = GlobalHandler;
        let ctx = make_context(AppMode::Results);
        let result = handler.handle(make_key(KeyCode::Char('?')), &ctx);

        assert_eq!(result, InputResult::Action(Action::Help));
    }

    #[test]
    fn test_results_handler_keys() {
        let mut handler = ResultsHandler;
        let ctx = make_context(AppMode::Results);

        assert_eq!(handler.handle(make_key(KeyCode::Tab), &ctx), InputResult::Action(Action::NextTab));
        assert_eq!(handler.handle(make_key(KeyCode::Char('e')), &ctx), InputResult::Action(Action::EditRemix));
        assert_eq!(handler.handle(make_key(KeyCode::Esc), &ctx), InputResult::ModeChange(AppMode::Compose));
        assert_eq!(handler.handle(make_key(KeyCode::Char('z')), &ctx), InputResult::Ignored);
    }

    #[test]
    fn test_saved_handler_keys() {
        let mut handler = SavedHandler;
        let ctx = make_context(AppMode::Saved);

        assert_eq!(handler.handle(make_key(KeyCode::Enter), &ctx), InputResult::Action(Action::LoadSaved));
        assert_eq!(handler.handle(make_key(KeyCode::Char('x')), &ctx), InputResult::Action(Action::DeleteSaved));
        assert_eq!(handler.handle(make_key(KeyCode::Char('/')), &ctx), InputResult::Action(Action::StartFilter));
    }

    #[test]
    fn test_compose_shortcuts_need_control() {
        let plain = make_key(KeyCode::Char('a'));
        assert_eq!(compose_shortcut(plain), None);

        let ctrl = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(compose_shortcut(ctrl), Some(Action::Analyze));
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("q"), InputResult::Quit);
        assert_eq!(parse_command(" analyze "), InputResult::Action(Action::Analyze));
        assert_eq!(parse_command("save"), InputResult::Action(Action::Save(None)));
        assert_eq!(
            parse_command("save  Night Drive  "),
            InputResult::Action(Action::Save(Some("Night Drive".to_string())))
        );
        assert_eq!(parse_command("saved"), InputResult::ModeChange(AppMode::Saved));
        assert_eq!(parse_command(""), InputResult::Consumed);
        assert!(matches!(parse_command("bogus"), InputResult::Error(_)));
    }
}
