//! `Lyricsmith` - songwriting aid for syllable counts, rhyme schemes and line remixes.
//!
//! The analysis core lives in [`analysis`] and is pure and thread-safe. The
//! remaining modules make up the terminal editor around it.

// Re-export public modules for use in integration tests and as a library
pub mod analysis;
pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod library;
pub mod remix;
pub mod services;
pub mod ui;
pub mod validation;
