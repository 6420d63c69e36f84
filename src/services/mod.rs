//! Service modules for extracted functionality.
//!
//! State with behaviour that can be tested without a terminal.

pub mod editor;
