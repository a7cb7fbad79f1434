//! nestnote library
//!
//! Folder-level selection and note creation for a hierarchical vault.
//! The binary wraps this in a terminal form; everything here is usable and
//! testable without a terminal.

pub mod logic;
pub mod model;
pub mod submit;
pub mod vault;
