//! Vault collaborator: the document store the dialog creates notes in.
//!
//! The dialog never reaches for a global store. Everything it needs from the
//! host goes through the `Vault` trait, which is passed in explicitly.
//!
//! # Dyn-compatibility
//!
//! Methods return `Pin<Box<dyn Future>>` instead of `impl Future` so that
//! `Box<dyn Vault>` works and the app can pick an implementation at runtime.

pub mod local;
pub mod memory;

use std::future::Future;
use std::io;
use std::pin::Pin;

use crate::logic::folder::FolderSnapshot;
use crate::logic::path::FolderPath;

pub use local::LocalVault;
pub use memory::{MemoryVault, VaultCall};

/// Boxed, Send future returned by every vault method.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// One loaded node of the vault tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VaultEntry {
    Folder(FolderPath),
    /// Vault-relative path of a file
    File(String),
}

/// A file the vault has created and can open
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    pub path: String,
}

/// Host file-system operations used by the dialog.
///
/// Paths are vault-relative and `/`-separated.
pub trait Vault: Send + Sync {
    /// Every loaded folder and file, in no particular order.
    fn list_entries<'a>(&'a self) -> BoxFuture<'a, io::Result<Vec<VaultEntry>>>;

    /// Whether anything exists at `path`.
    fn folder_exists<'a>(&'a self, path: &'a FolderPath) -> BoxFuture<'a, io::Result<bool>>;

    /// Create one folder. Fails if it exists or its parent is missing.
    fn create_folder<'a>(&'a self, path: &'a FolderPath) -> BoxFuture<'a, io::Result<()>>;

    /// Create a file with initial content. Fails if it exists.
    fn create_file<'a>(
        &'a self,
        path: &'a str,
        content: &'a str,
    ) -> BoxFuture<'a, io::Result<FileHandle>>;

    /// Show a created file to the user.
    fn open_in_editor<'a>(&'a self, file: &'a FileHandle) -> BoxFuture<'a, io::Result<()>>;
}

/// Fresh snapshot of every folder currently in the vault
pub async fn folder_snapshot<V: Vault + ?Sized>(vault: &V) -> io::Result<FolderSnapshot> {
    let entries = vault.list_entries().await?;
    Ok(FolderSnapshot::from_entries(entries))
}
