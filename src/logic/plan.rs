//! Creation plan resolution
//!
//! Turns a finished `Selection` into the folders that must exist and the
//! path of the note to create.

use super::errors::SelectorError;
use super::path::{join_file_path, validate_segment, FolderPath};
use crate::model::selection::Selection;

/// Extension appended to every note name
pub const DEFAULT_EXTENSION: &str = "md";

/// Folders to ensure (shallowest first) followed by the file to create
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationPlan {
    pub ensure_folders: Vec<FolderPath>,
    pub file_path: String,
}

impl CreationPlan {
    /// Deepest folder the file lands in, `None` for the vault root
    pub fn target_folder(&self) -> Option<&FolderPath> {
        self.ensure_folders.last()
    }
}

/// Resolve the selection into a creation plan
///
/// Levels are taken from the top and stop at the first unset one, so a
/// deeper value left behind under an unset level is ignored.
///
/// # Examples
/// ```
/// use nestnote::logic::plan::resolve_creation_plan;
/// use nestnote::model::selection::{Level, Selection};
///
/// let selection = Selection::new()
///     .with_file_name("note")
///     .with_level(Level::First, Some("A".to_string()))
///     .with_level(Level::Second, Some("B".to_string()));
/// let plan = resolve_creation_plan(&selection, "md").unwrap();
/// let folders: Vec<String> = plan.ensure_folders.iter().map(|f| f.to_string()).collect();
/// assert_eq!(folders, vec!["A", "A/B"]);
/// assert_eq!(plan.file_path, "A/B/note.md");
/// ```
pub fn resolve_creation_plan(
    selection: &Selection,
    extension: &str,
) -> Result<CreationPlan, SelectorError> {
    let file_name = selection.file_name();
    validate_segment(file_name).map_err(|_| {
        SelectorError::InvalidArgument(format!(
            "file name '{}' is not a usable name",
            file_name
        ))
    })?;

    let segments = selection.folder_segments();
    let ensure_folders = if segments.is_empty() {
        Vec::new()
    } else {
        FolderPath::new(segments.iter().copied())?.ancestors_and_self()
    };

    let file_name = if extension.is_empty() {
        file_name.to_string()
    } else {
        format!("{}.{}", file_name, extension)
    };
    let file_path = join_file_path(ensure_folders.last(), &file_name);

    Ok(CreationPlan {
        ensure_folders,
        file_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::selection::Level;

    fn selection(levels: [Option<&str>; 3], file_name: &str) -> Selection {
        let mut selection = Selection::new().with_file_name(file_name);
        for level in Level::ALL {
            if let Some(value) = levels[level.index()] {
                selection = selection.with_level(level, Some(value.to_string()));
            }
        }
        selection
    }

    fn folder_strings(plan: &CreationPlan) -> Vec<String> {
        plan.ensure_folders.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_plan_two_levels() {
        let selection = selection([Some("A"), Some("B"), None], "note");
        let plan = resolve_creation_plan(&selection, "md").unwrap();
        assert_eq!(folder_strings(&plan), vec!["A", "A/B"]);
        assert_eq!(plan.file_path, "A/B/note.md");
        assert_eq!(plan.target_folder().map(ToString::to_string), Some("A/B".to_string()));
    }

    #[test]
    fn test_plan_three_levels_parents_first() {
        let selection = selection([Some("A"), Some("B"), Some("C")], "note");
        let plan = resolve_creation_plan(&selection, "md").unwrap();
        assert_eq!(folder_strings(&plan), vec!["A", "A/B", "A/B/C"]);
        assert_eq!(plan.file_path, "A/B/C/note.md");
    }

    #[test]
    fn test_plan_vault_root() {
        let selection = selection([None, None, None], "note");
        let plan = resolve_creation_plan(&selection, "md").unwrap();
        assert!(plan.ensure_folders.is_empty());
        assert!(plan.target_folder().is_none());
        assert_eq!(plan.file_path, "note.md");
    }

    #[test]
    fn test_plan_ignores_orphaned_second_level() {
        let selection = selection([None, Some("B"), None], "note");
        let plan = resolve_creation_plan(&selection, "md").unwrap();
        assert!(plan.ensure_folders.is_empty());
        assert_eq!(plan.file_path, "note.md");
    }

    #[test]
    fn test_plan_ignores_orphaned_third_level() {
        let selection = selection([Some("A"), None, Some("C")], "note");
        let plan = resolve_creation_plan(&selection, "md").unwrap();
        assert_eq!(folder_strings(&plan), vec!["A"]);
        assert_eq!(plan.file_path, "A/note.md");
    }

    #[test]
    fn test_plan_rejects_empty_file_name() {
        let result = resolve_creation_plan(&selection([Some("A"), None, None], ""), "md");
        assert!(matches!(result, Err(SelectorError::InvalidArgument(_))));
    }

    #[test]
    fn test_plan_rejects_separator_in_file_name() {
        let result = resolve_creation_plan(&selection([None, None, None], "a/b"), "md");
        assert!(matches!(result, Err(SelectorError::InvalidArgument(_))));
    }

    #[test]
    fn test_plan_rejects_separator_in_level() {
        let result = resolve_creation_plan(&selection([Some("A/B"), None, None], "note"), "md");
        assert!(matches!(result, Err(SelectorError::InvalidArgument(_))));
    }

    #[test]
    fn test_plan_rejects_relative_markers() {
        let up = selection([Some(".."), None, None], "note");
        assert!(resolve_creation_plan(&up, "md").is_err());

        // With no extension the file name alone must not point upwards
        let bare = selection([None, None, None], "..");
        assert!(resolve_creation_plan(&bare, "").is_err());
    }

    #[test]
    fn test_plan_custom_extension() {
        let nested = selection([Some("A"), None, None], "todo");
        let plan = resolve_creation_plan(&nested, "txt").unwrap();
        assert_eq!(plan.file_path, "A/todo.txt");

        let bare = resolve_creation_plan(&selection([None, None, None], "todo"), "").unwrap();
        assert_eq!(bare.file_path, "todo");
    }
}
