//! File entry model shared by path resolution, validation, and the file list.

use serde::{Deserialize, Serialize};

/// A user-attached file reference.
///
/// Carries no file content; only the metadata the widget needs for
/// validation and display. `file_path` is passed through to the frontend so
/// the embedder can act on the file later, but it plays no part in identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    pub file_name: String,
    pub file_path: String,
    pub file_size: u64,
}

impl FileEntry {
    /// Identity used for duplicate detection: name and size concatenated.
    ///
    /// Two distinct files with the same name and size are treated as the
    /// same attachment; content is never inspected.
    pub fn identity(&self) -> String {
        format!("{}{}", self.file_name, self.file_size)
    }
}
