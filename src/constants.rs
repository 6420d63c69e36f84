//! Application constants.
//!
//! Centralizes magic numbers and configuration values for better maintainability.

/// Lyric analysis constants.
pub mod analysis {
    /// Text returned for both reports when no lyric lines remain.
    pub const NO_LYRICS: &str = "No lyrics provided.";

    /// Label for lines without a usable ending word.
    pub const NO_RHYME_LABEL: &str = "-";

    /// Maximum characters of line text shown in the syllable breakdown.
    pub const DISPLAY_TRUNCATE_CHARS: usize = 50;

    /// Suffix lengths compared when checking for a rhyme, in preference order.
    pub const RHYME_SUFFIX_LENGTHS: [usize; 3] = [4, 3, 2];
}

/// Input validation constants.
pub mod input {
    /// Default minimum lyric length in characters.
    pub const DEFAULT_MIN_CHARS: usize = 20;

    /// Default maximum lyric length in characters.
    pub const DEFAULT_MAX_CHARS: usize = 4000;
}

/// Remix generation constants.
pub mod remix {
    /// Default number of remix variants generated per request.
    pub const DEFAULT_VARIANT_COUNT: usize = 3;

    /// Upper bound on variants per request.
    pub const MAX_VARIANT_COUNT: usize = 10;
}

/// Saved lyrics and export constants.
pub mod library {
    /// Minimum fuzzy score for a saved title to match a filter query.
    pub const MIN_FILTER_SCORE: i64 = 30;

    /// Fallback file stem when a title sanitizes to nothing.
    pub const FALLBACK_FILE_STEM: &str = "lyrics";

    /// Extension for downloaded files.
    pub const DOWNLOAD_EXTENSION: &str = "txt";
}

/// UI layout constants.
pub mod ui {
    /// Default viewport height in lines.
    pub const DEFAULT_VIEWPORT_HEIGHT: usize = 20;

    /// Width of the saved lyrics side list in characters.
    pub const SAVED_LIST_WIDTH: u16 = 36;

    /// Minimum width of the status modal.
    pub const MIN_STATUS_WIDTH: usize = 50;
}
