//! Vault backed by a directory on disk.

use std::io;
use std::path::{Component, Path, PathBuf};
use std::process::{Command, Stdio};

use log::{debug, warn};
use tokio::io::AsyncWriteExt;
use walkdir::WalkDir;

use super::{BoxFuture, FileHandle, Vault, VaultEntry};
use crate::logic::path::{FolderPath, SEPARATOR};

#[derive(Debug, Clone)]
pub struct LocalVault {
    root: PathBuf,
    open_command: Option<String>,
}

impl LocalVault {
    pub fn new(root: impl Into<PathBuf>, open_command: Option<String>) -> Self {
        Self {
            root: root.into(),
            open_command,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a vault-relative path onto the disk
    ///
    /// Only plain names are joined; anything that could leave the root
    /// (`..`, `.`, absolute pieces) is refused.
    pub fn host_path(&self, vault_path: &str) -> io::Result<PathBuf> {
        self.join_under_root(vault_path.split(SEPARATOR).filter(|piece| !piece.is_empty()))
    }

    fn folder_host_path(&self, path: &FolderPath) -> io::Result<PathBuf> {
        self.join_under_root(path.segments().iter().map(String::as_str))
    }

    fn join_under_root<'a>(&self, pieces: impl Iterator<Item = &'a str>) -> io::Result<PathBuf> {
        let mut host = self.root.clone();
        let mut joined = 0;
        for piece in pieces {
            let mut components = Path::new(piece).components();
            match (components.next(), components.next()) {
                (Some(Component::Normal(name)), None) => host.push(name),
                _ => {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("'{}' is not a plain name inside the vault", piece),
                    ))
                }
            }
            joined += 1;
        }
        if joined == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "empty vault path",
            ));
        }
        Ok(host)
    }
}

/// Walk the vault root and classify every entry below it
fn scan_entries(root: &Path) -> Vec<VaultEntry> {
    let mut entries = Vec::new();

    for result in WalkDir::new(root).min_depth(1).follow_links(false) {
        let dirent = match result {
            Ok(v) => v,
            Err(e) => {
                warn!("Skipping unreadable vault entry: {}", e);
                continue;
            }
        };

        let Ok(relative) = dirent.path().strip_prefix(root) else {
            continue;
        };
        let segments: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();

        // Symlinked folders are offered too; their contents are not walked
        let is_dir = dirent.file_type().is_dir()
            || (dirent.path_is_symlink() && dirent.path().is_dir());

        if is_dir {
            match FolderPath::new(segments) {
                Ok(path) => entries.push(VaultEntry::Folder(path)),
                Err(e) => warn!("Skipping folder {}: {}", relative.display(), e),
            }
        } else {
            entries.push(VaultEntry::File(segments.join("/")));
        }
    }

    entries
}

impl Vault for LocalVault {
    fn list_entries<'a>(&'a self) -> BoxFuture<'a, io::Result<Vec<VaultEntry>>> {
        Box::pin(async move {
            let root = self.root.clone();
            let entries = tokio::task::spawn_blocking(move || scan_entries(&root))
                .await
                .map_err(io::Error::other)?;
            debug!(
                "Listed {} entries under {}",
                entries.len(),
                self.root.display()
            );
            Ok(entries)
        })
    }

    fn folder_exists<'a>(&'a self, path: &'a FolderPath) -> BoxFuture<'a, io::Result<bool>> {
        Box::pin(async move { tokio::fs::try_exists(self.folder_host_path(path)?).await })
    }

    fn create_folder<'a>(&'a self, path: &'a FolderPath) -> BoxFuture<'a, io::Result<()>> {
        // create_dir (not create_dir_all): a missing parent is an error
        Box::pin(async move { tokio::fs::create_dir(self.folder_host_path(path)?).await })
    }

    fn create_file<'a>(
        &'a self,
        path: &'a str,
        content: &'a str,
    ) -> BoxFuture<'a, io::Result<FileHandle>> {
        Box::pin(async move {
            let mut file = tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(self.host_path(path)?)
                .await?;
            file.write_all(content.as_bytes()).await?;
            file.flush().await?;

            Ok(FileHandle {
                path: path.to_string(),
            })
        })
    }

    fn open_in_editor<'a>(&'a self, file: &'a FileHandle) -> BoxFuture<'a, io::Result<()>> {
        Box::pin(async move {
            let Some(open_cmd) = self.open_command.as_deref() else {
                debug!("open_command not configured, not opening {}", file.path);
                return Ok(());
            };

            // Spawn and forget so GUI editors don't block the TUI
            Command::new(open_cmd)
                .arg(self.host_path(&file.path)?)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()?;

            debug!("Opened {} with {}", file.path, open_cmd);
            Ok(())
        })
    }
}
