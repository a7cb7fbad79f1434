//! Submission flow
//!
//! Validates the selection, ensures every folder on the way exists (one at a
//! time, parents first), creates the note and opens it. Failures are caught
//! here once and turned into a single notification.

use anyhow::{Context, Result};
use log::{debug, error, info, warn};

use crate::logic::errors::{classify_error, format_error_message, ErrorType, SelectorError};
use crate::logic::path::SEPARATOR;
use crate::logic::plan::{resolve_creation_plan, CreationPlan, DEFAULT_EXTENSION};
use crate::model::selection::{Level, Selection};
use crate::vault::Vault;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Fire-and-forget user feedback
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Notifier that keeps every notice, for headless runs and tests
#[derive(Debug, Default, Clone)]
pub struct CollectingNotifier {
    pub notices: Vec<Notice>,
}

impl CollectingNotifier {
    pub fn messages(&self) -> Vec<&str> {
        self.notices.iter().map(|n| n.message.as_str()).collect()
    }
}

impl Notifier for CollectingNotifier {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

/// Settings the flow needs from the configuration
#[derive(Debug, Clone)]
pub struct SubmitOptions {
    pub extension: String,
    pub initial_content: String,
}

impl Default for SubmitOptions {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            initial_content: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// File created and opened; the dialog is done
    Created(String),
    /// Input rejected before touching the vault; the dialog stays open
    Rejected,
    /// A vault operation failed part way; the dialog stays open
    Failed,
}

pub const MISSING_FILE_NAME: &str = "Please enter a file name";

/// Validate user input before any vault call
pub fn validate(selection: &Selection) -> Result<(), SelectorError> {
    if selection.file_name().is_empty() {
        return Err(SelectorError::Validation(MISSING_FILE_NAME.to_string()));
    }
    if selection.file_name().contains(SEPARATOR) {
        return Err(SelectorError::Validation(format!(
            "File name cannot contain '{}'",
            SEPARATOR
        )));
    }
    if is_relative_marker(selection.file_name()) {
        return Err(SelectorError::Validation(format!(
            "File name cannot be '{}'",
            selection.file_name()
        )));
    }
    for level in Level::ALL {
        let Some(value) = selection.level(level) else {
            continue;
        };
        if value.contains(SEPARATOR) {
            return Err(SelectorError::Validation(format!(
                "{} cannot contain '{}'",
                level.label(),
                SEPARATOR
            )));
        }
        if is_relative_marker(value) {
            return Err(SelectorError::Validation(format!(
                "{} cannot be '{}'",
                level.label(),
                value
            )));
        }
    }
    Ok(())
}

/// `.` and `..` name a place relative to a folder, not a folder
fn is_relative_marker(name: &str) -> bool {
    name == "." || name == ".."
}

/// Ensure folders then create and open the file
///
/// Every step is awaited before the next starts; nothing is rolled back.
pub async fn execute_plan<V: Vault + ?Sized>(
    plan: &CreationPlan,
    vault: &V,
    initial_content: &str,
) -> Result<String> {
    for folder in &plan.ensure_folders {
        let exists = vault
            .folder_exists(folder)
            .await
            .with_context(|| format!("Failed to check folder {}", folder))?;
        if exists {
            debug!("Folder already present: {}", folder);
            continue;
        }

        vault
            .create_folder(folder)
            .await
            .with_context(|| format!("Failed to create folder {}", folder))?;
        info!("Created folder {}", folder);
    }

    let handle = vault
        .create_file(&plan.file_path, initial_content)
        .await
        .with_context(|| format!("Failed to create {}", plan.file_path))?;
    info!("Created file {}", handle.path);

    vault
        .open_in_editor(&handle)
        .await
        .with_context(|| format!("Failed to open {}", handle.path))?;

    Ok(handle.path)
}

/// Run the whole submission and report the result through `notifier`
pub async fn submit<V, N>(
    selection: &Selection,
    vault: &V,
    notifier: &mut N,
    options: &SubmitOptions,
) -> SubmitOutcome
where
    V: Vault + ?Sized,
    N: Notifier + ?Sized,
{
    if let Err(e) = validate(selection) {
        debug!("Submission rejected: {}", e);
        notifier.notify(Notice::error(e.to_string()));
        return SubmitOutcome::Rejected;
    }

    if selection.has_orphaned_levels() {
        warn!("Ignoring folder levels below an unset level: {:?}", selection);
    }

    let result = match resolve_creation_plan(selection, &options.extension) {
        Ok(plan) => {
            debug!("Resolved plan: {:?}", plan);
            execute_plan(&plan, vault, &options.initial_content).await
        }
        Err(e) => Err(anyhow::Error::new(e)),
    };

    match result {
        Ok(path) => {
            notifier.notify(Notice::success(format!("File created: {}", path)));
            SubmitOutcome::Created(path)
        }
        Err(e) => {
            match classify_error(&e) {
                ErrorType::InvalidArgument => {
                    error!("Level gating let through a bad selection: {:#}", e)
                }
                kind => warn!("File creation failed ({:?}): {:#}", kind, e),
            }
            notifier.notify(Notice::error(format!(
                "Error creating file: {}",
                format_error_message(&e)
            )));
            SubmitOutcome::Failed
        }
    }
}
