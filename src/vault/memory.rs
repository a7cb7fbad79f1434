//! In-memory vault. Used by the test suite and by `--dry-run`.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::sync::{Mutex, MutexGuard};

use super::{BoxFuture, FileHandle, Vault, VaultEntry};
use crate::logic::errors::SelectorError;
use crate::logic::path::FolderPath;

/// Every call made against a `MemoryVault`, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VaultCall {
    ListEntries,
    FolderExists(String),
    CreateFolder(String),
    CreateFile(String),
    OpenInEditor(String),
}

#[derive(Debug, Default)]
struct MemoryState {
    folders: BTreeSet<FolderPath>,
    files: BTreeMap<String, String>,
    calls: Vec<VaultCall>,
    opened: Vec<String>,
    failing_paths: BTreeSet<String>,
}

impl MemoryState {
    fn exists(&self, path: &str) -> bool {
        self.files.contains_key(path) || self.folders.iter().any(|f| f.to_string() == path)
    }
}

#[derive(Debug, Default)]
pub struct MemoryVault {
    state: Mutex<MemoryState>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vault pre-populated with folders given as `/`-separated strings
    pub fn with_folders<I, S>(paths: I) -> Result<Self, SelectorError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let vault = Self::new();
        for path in paths {
            vault.add_folder(FolderPath::parse(path.as_ref())?);
        }
        Ok(vault)
    }

    /// Copy every entry of another listing into this vault
    pub fn from_entries(entries: Vec<VaultEntry>) -> Self {
        let vault = Self::new();
        for entry in entries {
            match entry {
                VaultEntry::Folder(path) => vault.add_folder(path),
                VaultEntry::File(path) => vault.add_file(&path, ""),
            }
        }
        vault
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn add_folder(&self, path: FolderPath) {
        self.state().folders.insert(path);
    }

    pub fn add_file(&self, path: &str, content: &str) {
        self.state()
            .files
            .insert(path.to_string(), content.to_string());
    }

    /// Make any creation at `path` fail with a permission error
    pub fn fail_creating(&self, path: &str) {
        self.state().failing_paths.insert(path.to_string());
    }

    pub fn calls(&self) -> Vec<VaultCall> {
        self.state().calls.clone()
    }

    pub fn folders(&self) -> Vec<String> {
        self.state().folders.iter().map(ToString::to_string).collect()
    }

    pub fn file_content(&self, path: &str) -> Option<String> {
        self.state().files.get(path).cloned()
    }

    pub fn opened(&self) -> Vec<String> {
        self.state().opened.clone()
    }
}

fn check_failure(state: &MemoryState, path: &str) -> io::Result<()> {
    if state.failing_paths.contains(path) {
        return Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            format!("permission denied: {}", path),
        ));
    }
    Ok(())
}

fn parent_exists(state: &MemoryState, parent: Option<FolderPath>) -> bool {
    parent.map_or(true, |p| state.folders.contains(&p))
}

impl Vault for MemoryVault {
    fn list_entries<'a>(&'a self) -> BoxFuture<'a, io::Result<Vec<VaultEntry>>> {
        Box::pin(async move {
            let mut state = self.state();
            state.calls.push(VaultCall::ListEntries);

            let entries = state
                .folders
                .iter()
                .cloned()
                .map(VaultEntry::Folder)
                .chain(state.files.keys().cloned().map(VaultEntry::File))
                .collect();
            Ok(entries)
        })
    }

    fn folder_exists<'a>(&'a self, path: &'a FolderPath) -> BoxFuture<'a, io::Result<bool>> {
        Box::pin(async move {
            let mut state = self.state();
            let key = path.to_string();
            state.calls.push(VaultCall::FolderExists(key.clone()));
            Ok(state.exists(&key))
        })
    }

    fn create_folder<'a>(&'a self, path: &'a FolderPath) -> BoxFuture<'a, io::Result<()>> {
        Box::pin(async move {
            let mut state = self.state();
            let key = path.to_string();
            state.calls.push(VaultCall::CreateFolder(key.clone()));

            check_failure(&state, &key)?;
            if state.exists(&key) {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("folder already exists: {}", key),
                ));
            }
            if !parent_exists(&state, path.parent()) {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("parent folder missing: {}", key),
                ));
            }

            state.folders.insert(path.clone());
            Ok(())
        })
    }

    fn create_file<'a>(
        &'a self,
        path: &'a str,
        content: &'a str,
    ) -> BoxFuture<'a, io::Result<FileHandle>> {
        Box::pin(async move {
            let mut state = self.state();
            state.calls.push(VaultCall::CreateFile(path.to_string()));

            check_failure(&state, path)?;
            if state.exists(path) {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("file already exists: {}", path),
                ));
            }
            let parent = path
                .rsplit_once('/')
                .and_then(|(folder, _)| FolderPath::parse(folder).ok());
            if !parent_exists(&state, parent) {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("parent folder missing: {}", path),
                ));
            }

            state.files.insert(path.to_string(), content.to_string());
            Ok(FileHandle {
                path: path.to_string(),
            })
        })
    }

    fn open_in_editor<'a>(&'a self, file: &'a FileHandle) -> BoxFuture<'a, io::Result<()>> {
        Box::pin(async move {
            let mut state = self.state();
            state.calls.push(VaultCall::OpenInEditor(file.path.clone()));
            state.opened.push(file.path.clone());
            Ok(())
        })
    }
}
