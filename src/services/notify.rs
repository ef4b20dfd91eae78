//! Change notification — emits widget state to the frontend.
//!
//! Two events: `loader:files-changed` carries the bare file list every time
//! it changes (the widget's sole output contract, fired once at mount with
//! the empty list), and `loader:state` carries the full render snapshot
//! whenever files, drag flag, or error change.

use serde::Serialize;
use tauri::Emitter;

use crate::models::file::FileEntry;
use crate::services::attachments::Attachments;
use crate::services::format;

pub const FILES_CHANGED_EVENT: &str = "loader:files-changed";
pub const STATE_EVENT: &str = "loader:state";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRowPayload {
    pub file_name: String,
    /// Shortened name for rendering; the full name stays in `file_name`.
    pub display_name: String,
    pub file_path: String,
    pub file_size: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoaderStatePayload {
    pub files: Vec<FileRowPayload>,
    pub drag_active: bool,
    /// Empty string when no error is shown.
    pub error: String,
    /// Present only while the size check is enabled.
    pub size_hint: Option<String>,
}

/// Build the render snapshot for the current widget state.
pub fn render_payload(state: &Attachments) -> LoaderStatePayload {
    let files = state
        .files()
        .iter()
        .map(|f| FileRowPayload {
            file_name: f.file_name.clone(),
            display_name: format::format_file_name(&f.file_name),
            file_path: f.file_path.clone(),
            file_size: f.file_size,
        })
        .collect();

    let size_hint = if state.settings().size_limit_mb > 0 {
        Some(format::size_hint(state.settings().size_limit_mb))
    } else {
        None
    };

    LoaderStatePayload {
        files,
        drag_active: state.drag_active(),
        error: state.error_message(),
        size_hint,
    }
}

/// Emits widget events to the frontend over the app handle.
pub struct ChangeNotifier {
    app: tauri::AppHandle,
}

impl ChangeNotifier {
    pub fn new(app: tauri::AppHandle) -> Self {
        Self { app }
    }

    pub fn files_changed(&self, files: &[FileEntry]) {
        if let Err(e) = self.app.emit(FILES_CHANGED_EVENT, files) {
            log::warn!("failed to emit {}: {}", FILES_CHANGED_EVENT, e);
        }
    }

    pub fn state_changed(&self, state: &Attachments) {
        if let Err(e) = self.app.emit(STATE_EVENT, render_payload(state)) {
            log::warn!("failed to emit {}: {}", STATE_EVENT, e);
        }
    }
}
