//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule contains methods that orchestrate between:
//! - Model state (pure, in the library's `model`)
//! - The vault (host file system)
//! - Handlers (in src/handlers/)
//!
//! Methods are kept as `impl App` but organized by functional domain.

pub(crate) mod file_ops;
pub(crate) mod levels;
