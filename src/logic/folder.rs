//! Folder listing logic
//!
//! Pure functions that turn a snapshot of every folder in the vault into the
//! choices offered at each level of the dialog.

use std::collections::BTreeSet;

use super::errors::SelectorError;
use super::path::FolderPath;
use crate::vault::VaultEntry;

/// Name of the host's configuration folder, never offered as a choice
pub const RESERVED_CONFIG_FOLDER: &str = ".obsidian";

/// Every folder known to the vault at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderSnapshot {
    folders: BTreeSet<FolderPath>,
}

impl FolderSnapshot {
    pub fn new<I>(folders: I) -> Self
    where
        I: IntoIterator<Item = FolderPath>,
    {
        Self {
            folders: folders.into_iter().collect(),
        }
    }

    /// Keep only the folder entries of a vault listing
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = VaultEntry>,
    {
        let folders = entries.into_iter().filter_map(|entry| match entry {
            VaultEntry::Folder(path) => Some(path),
            VaultEntry::File(_) => None,
        });
        Self::new(folders)
    }

    pub fn contains(&self, path: &FolderPath) -> bool {
        self.folders.contains(path)
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FolderPath> {
        self.folders.iter()
    }
}

/// Names of the top-level folders, sorted, without the reserved folder
///
/// # Examples
/// ```
/// use nestnote::logic::folder::{list_top_level_folders, FolderSnapshot};
/// use nestnote::logic::path::FolderPath;
///
/// let snapshot = FolderSnapshot::new(
///     ["Work", "Home", "Work/Clients", ".obsidian"]
///         .iter()
///         .map(|p| FolderPath::parse(p).unwrap()),
/// );
/// assert_eq!(list_top_level_folders(&snapshot, ".obsidian"), vec!["Home", "Work"]);
/// ```
pub fn list_top_level_folders(snapshot: &FolderSnapshot, reserved: &str) -> Vec<String> {
    let names: BTreeSet<&str> = snapshot
        .iter()
        .filter(|path| path.depth() == 1)
        .map(FolderPath::name)
        .filter(|name| *name != reserved)
        .collect();

    names.into_iter().map(String::from).collect()
}

/// Names of the direct children of `parent`, sorted
///
/// A parent that matches nothing gives an empty list. An empty parent is a
/// caller bug and is rejected rather than treated as "everything".
pub fn list_child_folders(
    snapshot: &FolderSnapshot,
    parent: &[String],
) -> Result<Vec<String>, SelectorError> {
    if parent.is_empty() {
        return Err(SelectorError::InvalidArgument(
            "child folders requested without a parent".to_string(),
        ));
    }

    let names: BTreeSet<&str> = snapshot
        .iter()
        .filter(|path| path.depth() == parent.len() + 1 && path.starts_with(parent))
        .map(FolderPath::name)
        .collect();

    Ok(names.into_iter().map(String::from).collect())
}

/// Options for the level whose leading segments are `parent`
///
/// An empty parent means the first level.
pub fn level_options(
    snapshot: &FolderSnapshot,
    parent: &[String],
    reserved: &str,
) -> Result<Vec<String>, SelectorError> {
    if parent.is_empty() {
        Ok(list_top_level_folders(snapshot, reserved))
    } else {
        list_child_folders(snapshot, parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(paths: &[&str]) -> FolderSnapshot {
        FolderSnapshot::new(paths.iter().map(|p| FolderPath::parse(p).unwrap()))
    }

    fn segs(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_top_level_empty_snapshot() {
        let empty = FolderSnapshot::default();
        assert!(list_top_level_folders(&empty, RESERVED_CONFIG_FOLDER).is_empty());
    }

    #[test]
    fn test_top_level_ignores_deeper_folders() {
        let snap = snapshot(&["A/B", "A/B/C"]);
        assert!(list_top_level_folders(&snap, RESERVED_CONFIG_FOLDER).is_empty());
    }

    #[test]
    fn test_top_level_excludes_reserved_and_sorts() {
        let snap = snapshot(&["Zeta", ".obsidian", "alpha", "Beta", ".obsidian/plugins"]);
        assert_eq!(
            list_top_level_folders(&snap, RESERVED_CONFIG_FOLDER),
            vec!["Beta", "Zeta", "alpha"]
        );
    }

    #[test]
    fn test_top_level_custom_reserved_name() {
        let snap = snapshot(&[".config", "Notes"]);
        assert_eq!(list_top_level_folders(&snap, ".config"), vec!["Notes"]);
    }

    #[test]
    fn test_child_folders_of_first_level() {
        let snap = snapshot(&["A", "A/B", "A/C", "A/B/D", "X/B"]);
        assert_eq!(list_child_folders(&snap, &segs(&["A"])).unwrap(), vec!["B", "C"]);
    }

    #[test]
    fn test_child_folders_of_second_level() {
        let snap = snapshot(&["A", "A/B", "A/B/C", "A/X/C2", "B/B/Z"]);
        assert_eq!(
            list_child_folders(&snap, &segs(&["A", "B"])).unwrap(),
            vec!["C"]
        );
    }

    #[test]
    fn test_child_folders_unknown_parent_is_empty() {
        let snap = snapshot(&["A", "A/B"]);
        assert!(list_child_folders(&snap, &segs(&["Nope"])).unwrap().is_empty());
    }

    #[test]
    fn test_child_folders_empty_parent_is_invalid() {
        let snap = snapshot(&["A", "A/B"]);
        assert!(matches!(
            list_child_folders(&snap, &[]),
            Err(SelectorError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_child_folders_deduplicated() {
        let snap = FolderSnapshot::new(vec![
            FolderPath::parse("A/B").unwrap(),
            FolderPath::parse("/A/B/").unwrap(),
        ]);
        assert_eq!(snap.len(), 1);
        assert_eq!(list_child_folders(&snap, &segs(&["A"])).unwrap(), vec!["B"]);
    }

    #[test]
    fn test_from_entries_skips_files() {
        let snap = FolderSnapshot::from_entries(vec![
            VaultEntry::Folder(FolderPath::parse("A").unwrap()),
            VaultEntry::File("A/note.md".to_string()),
            VaultEntry::File("readme.md".to_string()),
        ]);
        assert_eq!(snap.len(), 1);
        assert!(snap.contains(&FolderPath::parse("A").unwrap()));
    }

    #[test]
    fn test_level_options_dispatch() {
        let snap = snapshot(&["A", "A/B", ".obsidian"]);
        assert_eq!(level_options(&snap, &[], RESERVED_CONFIG_FOLDER).unwrap(), vec!["A"]);
        assert_eq!(
            level_options(&snap, &segs(&["A"]), RESERVED_CONFIG_FOLDER).unwrap(),
            vec!["B"]
        );
    }
}
