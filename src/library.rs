//! Saved lyrics for the current session, plus copy and download helpers.
//!
//! Nothing here is persisted between runs: the store lives in memory and is
//! dropped with the app. Downloads are plain `.txt` files the user keeps.

use std::path::{Path, PathBuf};

use arboard::Clipboard;
use chrono::{DateTime, Local};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use uuid::Uuid;

use crate::constants::library::{DOWNLOAD_EXTENSION, FALLBACK_FILE_STEM, MIN_FILTER_SCORE};
use crate::error::{Error, Result};

/// What kind of text a saved entry holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavedKind {
    /// Lyrics as written in the editor.
    Original,
    /// A shuffled remix variant.
    Remix,
    /// The syllable and rhyme reports.
    Report,
}

impl SavedKind {
    /// Returns the human-readable name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Original => "Original",
            Self::Remix => "Remix",
            Self::Report => "Report",
        }
    }

    /// Suffix used in download file names.
    const fn file_suffix(self) -> &'static str {
        match self {
            Self::Original => "lyrics",
            Self::Remix => "remix",
            Self::Report => "analysis",
        }
    }
}

/// Saved entry identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SavedId(Uuid);

impl std::fmt::Display for SavedId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A piece of text the user chose to keep during this session.
#[derive(Debug, Clone)]
pub struct SavedLyric {
    /// Unique identifier.
    pub id: SavedId,
    /// Display title.
    pub title: String,
    /// Saved text.
    pub body: String,
    /// What the text is.
    pub kind: SavedKind,
    /// When it was saved.
    pub saved_at: DateTime<Local>,
}

/// In-memory collection of saved lyrics, newest last.
#[derive(Debug, Default)]
pub struct SavedLyrics {
    entries: Vec<SavedLyric>,
}

impl SavedLyrics {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Save `body` under `title`; a blank title falls back to the first line.
    pub fn save(&mut self, title: &str, body: &str, kind: SavedKind) -> SavedId {
        let title = if title.trim().is_empty() { default_title(body) } else { title.trim().to_string() };
        let id = SavedId(Uuid::new_v4());

        tracing::info!("Saved {} \"{title}\" ({id})", kind.name());
        self.entries.push(SavedLyric {
            id,
            title,
            body: body.to_string(),
            kind,
            saved_at: Local::now(),
        });
        id
    }

    /// Get an entry by id.
    pub fn get(&self, id: SavedId) -> Option<&SavedLyric> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Remove an entry, returning it.
    pub fn remove(&mut self, id: SavedId) -> Result<SavedLyric> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| Error::Library(format!("no saved entry with id {id}")))?;
        Ok(self.entries.remove(idx))
    }

    /// Number of saved entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been saved.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries, newest first.
    pub fn newest_first(&self) -> impl Iterator<Item = &SavedLyric> {
        self.entries.iter().rev()
    }

    /// Entries whose title matches `query`, best match first.
    ///
    /// Substring hits rank above fuzzy hits; an empty query returns everything
    /// newest first.
    pub fn filter(&self, query: &str) -> Vec<&SavedLyric> {
        let query = query.trim();
        if query.is_empty() {
            return self.newest_first().collect();
        }

        let matcher = SkimMatcherV2::default();
        let query_lower = query.to_lowercase();

        let mut scored: Vec<(i64, &SavedLyric)> = self
            .newest_first()
            .filter_map(|entry| {
                if entry.title.to_lowercase().contains(&query_lower) {
                    return Some((i64::MAX, entry));
                }
                let score = matcher.fuzzy_match(&entry.title, query)?;
                (score >= MIN_FILTER_SCORE).then_some((score, entry))
            })
            .collect();

        // Stable: equal scores stay newest first
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, e)| e).collect()
    }
}

/// Title from the first non-blank line of `body`.
fn default_title(body: &str) -> String {
    body.lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map_or_else(|| "Untitled".to_string(), |l| l.chars().take(40).collect())
}

/// Reduce a title to characters safe in a file name.
pub fn sanitize_filename(name: &str) -> String {
    let cleaned = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.') {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    let cleaned = cleaned.trim_matches('.').trim().to_string();
    if cleaned.is_empty() {
        FALLBACK_FILE_STEM.to_string()
    } else {
        cleaned
    }
}

/// Write a saved entry to `dir` as a text file, returning the path written.
pub fn download(entry: &SavedLyric, dir: &Path) -> Result<PathBuf> {
    download_text(&entry.title, &entry.body, entry.kind, dir)
}

/// Write `body` to `dir` as `<title>-<kind>.txt`, returning the path written.
///
/// Existing files are never overwritten; a numeric suffix is added instead.
pub fn download_text(title: &str, body: &str, kind: SavedKind, dir: &Path) -> Result<PathBuf> {
    fs_err::create_dir_all(dir).map_err(|e| Error::io(e, dir.to_path_buf()))?;

    let stem = format!("{}-{}", sanitize_filename(title), kind.file_suffix());
    let path = unique_path(dir, &stem);

    let mut contents = body.to_string();
    if !contents.ends_with('\n') {
        contents.push('\n');
    }
    fs_err::write(&path, contents).map_err(|e| Error::io(e, path.clone()))?;

    tracing::info!("Downloaded \"{title}\" to {}", path.display());
    Ok(path)
}

fn unique_path(dir: &Path, stem: &str) -> PathBuf {
    let first = dir.join(format!("{stem}.{DOWNLOAD_EXTENSION}"));
    if !first.exists() {
        return first;
    }
    (2..)
        .map(|n| dir.join(format!("{stem}-{n}.{DOWNLOAD_EXTENSION}")))
        .find(|p| !p.exists())
        .unwrap_or(first)
}

/// Put `text` on the system clipboard.
pub fn clipboard_write(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text.to_owned())?;
    Ok(())
}
