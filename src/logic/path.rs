//! Vault Path Utilities
//!
//! Folder paths inside a vault are `/`-separated segment lists. `FolderPath`
//! keeps them as validated segments so depth and prefix checks never have to
//! re-split strings.

use std::fmt;

use super::errors::SelectorError;

/// Separator used by the vault for every path string
pub const SEPARATOR: char = '/';

/// Check that a single segment is usable as a folder or file name
///
/// # Examples
/// ```
/// use nestnote::logic::path::validate_segment;
///
/// assert!(validate_segment("Projects").is_ok());
/// assert!(validate_segment("").is_err());
/// assert!(validate_segment("a/b").is_err());
/// assert!(validate_segment("..").is_err());
/// ```
pub fn validate_segment(segment: &str) -> Result<(), SelectorError> {
    if segment.is_empty() {
        return Err(SelectorError::InvalidArgument(
            "path segment is empty".to_string(),
        ));
    }
    if segment.contains(SEPARATOR) {
        return Err(SelectorError::InvalidArgument(format!(
            "path segment '{}' contains '{}'",
            segment, SEPARATOR
        )));
    }
    if segment == "." || segment == ".." {
        return Err(SelectorError::InvalidArgument(format!(
            "path segment '{}' is not a name",
            segment
        )));
    }
    Ok(())
}

/// A non-empty sequence of folder names, shallowest first
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FolderPath {
    segments: Vec<String>,
}

impl FolderPath {
    /// Build a path from segments, validating each one
    pub fn new<I, S>(segments: I) -> Result<Self, SelectorError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(SelectorError::InvalidArgument(
                "folder path has no segments".to_string(),
            ));
        }
        for segment in &segments {
            validate_segment(segment)?;
        }
        Ok(Self { segments })
    }

    /// Parse a vault path string
    ///
    /// Empty pieces (leading, trailing or doubled separators) are dropped the
    /// same way the vault normalises paths.
    ///
    /// # Examples
    /// ```
    /// use nestnote::logic::path::FolderPath;
    ///
    /// let path = FolderPath::parse("/Work//Clients/").unwrap();
    /// assert_eq!(path.segments(), ["Work", "Clients"]);
    /// assert_eq!(path.to_string(), "Work/Clients");
    /// assert!(FolderPath::parse("//").is_err());
    /// ```
    pub fn parse(path: &str) -> Result<Self, SelectorError> {
        Self::new(path.split(SEPARATOR).filter(|piece| !piece.is_empty()))
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Last segment (the folder's own name)
    pub fn name(&self) -> &str {
        // segments is never empty
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Containing folder, or `None` for a top-level folder
    pub fn parent(&self) -> Option<FolderPath> {
        if self.segments.len() <= 1 {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// Path of a direct child folder
    pub fn child(&self, segment: &str) -> Result<FolderPath, SelectorError> {
        validate_segment(segment)?;
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        Ok(Self { segments })
    }

    /// Whether the leading segments equal `prefix`
    pub fn starts_with(&self, prefix: &[String]) -> bool {
        self.segments.len() >= prefix.len() && self.segments[..prefix.len()] == *prefix
    }

    /// Every prefix path, from depth 1 up to and including this path
    pub fn ancestors_and_self(&self) -> Vec<FolderPath> {
        (1..=self.segments.len())
            .map(|depth| Self {
                segments: self.segments[..depth].to_vec(),
            })
            .collect()
    }
}

impl fmt::Display for FolderPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

/// Join a folder (if any) and a file name into a vault path string
pub fn join_file_path(folder: Option<&FolderPath>, file_name: &str) -> String {
    match folder {
        Some(folder) => format!("{}{}{}", folder, SEPARATOR, file_name),
        None => file_name.to_string(),
    }
}
