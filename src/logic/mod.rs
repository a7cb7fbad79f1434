//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - errors: Selector error type and failure classification
//! - folder: Folder snapshots and per-level folder listings
//! - navigation: Wrapping selection and focus indices
//! - path: Vault path segments and joining
//! - plan: Creation plan resolution
//! - ui: Toast timing and input cursor helpers

pub mod errors;
pub mod folder;
pub mod navigation;
pub mod path;
pub mod plan;
pub mod ui;
