use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::QueryError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FileId(String);

impl FileId {
    pub fn from_path(path: &Path) -> Self {
        Self(normalized_path(path).display().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl std::fmt::Display for FileId {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn normalized_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// Unsaved editor buffers, keyed by the path the editor would save them to.
///
/// Consulted before disk so queries see buffer contents, not stale files.
#[derive(Debug, Default)]
pub struct Overlay {
    files: HashMap<FileId, String>,
}

impl Overlay {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse an archive of modified files.
    ///
    /// The format is the file name, a newline, the decimal file size, another
    /// newline, and the contents of the file, repeated for each buffer.
    pub fn from_archive(reader: &mut dyn Read) -> Result<Self, QueryError> {
        let mut data = String::new();
        reader
            .read_to_string(&mut data)
            .map_err(|err| QueryError::InvalidArchive(err.to_string()))?;

        let mut files = HashMap::new();
        let mut rest = data.as_str();
        while !rest.is_empty() {
            let (name, after_name) = split_line(rest)
                .ok_or_else(|| QueryError::InvalidArchive("missing file name".into()))?;
            let (size_text, after_size) = split_line(after_name)
                .ok_or_else(|| QueryError::InvalidArchive("missing file size".into()))?;
            let size: usize = size_text.trim().parse().map_err(|_| {
                QueryError::InvalidArchive(format!("invalid file size {size_text:?}"))
            })?;
            if after_size.len() < size {
                return Err(QueryError::InvalidArchive(format!(
                    "archive truncated: expected {size} bytes for {name}"
                )));
            }
            let (contents, remaining) = after_size.split_at(size);
            files.insert(FileId::from_path(Path::new(name)), contents.to_string());
            rest = remaining.strip_prefix('\n').unwrap_or(remaining);
        }

        Ok(Self { files })
    }

    pub fn get(&self, file: &FileId) -> Option<&str> {
        self.files.get(file).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Read a file through the overlay, falling back to disk.
pub fn read_file(overlay: &Overlay, file: &FileId) -> Result<String, QueryError> {
    if let Some(contents) = overlay.get(file) {
        return Ok(contents.to_string());
    }
    std::fs::read_to_string(file.as_path())
        .map_err(|_| QueryError::FileNotFound(file.as_str().to_string()))
}

fn split_line(text: &str) -> Option<(&str, &str)> {
    let idx = text.find('\n')?;
    Some((&text[..idx], &text[idx + 1..]))
}

#[cfg(test)]
#[path = "../../tests/src/vfs_tests.rs"]
mod tests;
