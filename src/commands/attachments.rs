//! Tauri IPC command handlers for the widget lifecycle.

use std::sync::Mutex;

use tauri_plugin_dialog::DialogExt;

use crate::commands::files;
use crate::models::file::FileEntry;
use crate::models::settings::LoaderSettings;
use crate::services::attachments::Attachments;
use crate::services::notify::{self, ChangeNotifier, LoaderStatePayload};

/// Tauri managed state for the widget.
///
/// Wraps the attachment state machine in a mutex and pairs it with the
/// notifier. Every mutation emits the render snapshot; mutations that change
/// the file list additionally emit the files-changed event, exactly once.
pub struct LoaderState {
    attachments: Mutex<Attachments>,
    notifier: ChangeNotifier,
}

impl LoaderState {
    pub fn new(app: tauri::AppHandle, settings: LoaderSettings) -> Self {
        Self {
            attachments: Mutex::new(Attachments::new(settings)),
            notifier: ChangeNotifier::new(app),
        }
    }

    /// The lock is never held across an await point; a poisoned mutex can
    /// only mean a panic mid-operation, and the state is still consistent
    /// enough to render, so recover the guard instead of propagating.
    fn lock(&self) -> std::sync::MutexGuard<'_, Attachments> {
        self.attachments.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Announce the freshly mounted widget: the empty file list, then the
    /// initial render snapshot.
    pub fn notify_mounted(&self) {
        let state = self.lock();
        self.notifier.files_changed(state.files());
        self.notifier.state_changed(&state);
    }

    pub fn window_drop_enabled(&self) -> bool {
        self.lock().settings().window_drop
    }

    pub fn picker_opened(&self) {
        let mut state = self.lock();
        state.picker_opened();
        self.notifier.state_changed(&state);
    }

    pub fn add_files(&self, batch: Vec<FileEntry>) {
        let mut state = self.lock();
        if state.add_files(batch) {
            self.notifier.files_changed(state.files());
        }
        self.notifier.state_changed(&state);
    }

    pub fn drop_entries(&self, batch: Vec<FileEntry>) {
        let mut state = self.lock();
        if state.drop_files(batch) {
            self.notifier.files_changed(state.files());
        }
        self.notifier.state_changed(&state);
    }

    pub fn remove_file(&self, file_name: &str, file_size: u64) {
        let mut state = self.lock();
        if state.remove_file(file_name, file_size) {
            self.notifier.files_changed(state.files());
        }
        self.notifier.state_changed(&state);
    }

    pub fn drag_enter(&self) {
        let mut state = self.lock();
        state.drag_enter();
        self.notifier.state_changed(&state);
    }

    pub fn drag_leave(&self) {
        let mut state = self.lock();
        state.drag_leave();
        self.notifier.state_changed(&state);
    }

    pub fn update_settings(&self, settings: LoaderSettings) {
        let mut state = self.lock();
        state.update_settings(settings);
        self.notifier.state_changed(&state);
    }

    pub fn files(&self) -> Vec<FileEntry> {
        self.lock().files().to_vec()
    }

    pub fn render(&self) -> LoaderStatePayload {
        notify::render_payload(&self.lock())
    }
}

/// Clear any stale error and open the native multi-file picker. A cancelled
/// dialog changes nothing beyond the cleared error.
#[tauri::command]
pub async fn open_picker(
    app: tauri::AppHandle,
    state: tauri::State<'_, LoaderState>,
) -> Result<(), String> {
    state.picker_opened();

    let dialog = app.dialog().clone();
    let picked = tokio::task::spawn_blocking(move || dialog.file().blocking_pick_files())
        .await
        .map_err(|e| e.to_string())?;

    let Some(picked) = picked else {
        return Ok(());
    };

    let mut paths = Vec::with_capacity(picked.len());
    for file_path in picked {
        match file_path.into_path() {
            Ok(p) => paths.push(p.to_string_lossy().to_string()),
            Err(e) => log::warn!("skipping non-path dialog selection: {}", e),
        }
    }

    files::select_files(paths, state).await
}

/// Detach the file matching the given name and size. Unknown identities are
/// a silent no-op.
#[tauri::command]
pub fn delete_file(file_name: String, file_size: u64, state: tauri::State<'_, LoaderState>) {
    state.remove_file(&file_name, file_size);
}

/// Widget-local drag signal from the frontend.
#[tauri::command]
pub fn drag_enter(state: tauri::State<'_, LoaderState>) {
    state.drag_enter();
}

#[tauri::command]
pub fn drag_leave(state: tauri::State<'_, LoaderState>) {
    state.drag_leave();
}

/// Current file list snapshot.
#[tauri::command]
pub fn list_files(state: tauri::State<'_, LoaderState>) -> Vec<FileEntry> {
    state.files()
}

/// Current render snapshot, for the frontend's initial paint.
#[tauri::command]
pub fn loader_state(state: tauri::State<'_, LoaderState>) -> LoaderStatePayload {
    state.render()
}
