use tauri::Manager;

pub mod commands;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

use commands::attachments::LoaderState;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_log::Builder::new().build())
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_store::Builder::new().build())
        .setup(|app| {
            let settings = storage::settings::get_settings(app.handle()).unwrap_or_else(|e| {
                log::warn!("falling back to default settings: {}", e);
                Default::default()
            });
            app.manage(LoaderState::new(app.handle().clone(), settings));
            // The file list exists from here on; announce the empty list
            // before any interaction happens.
            app.state::<LoaderState>().notify_mounted();
            Ok(())
        })
        .on_window_event(handle_window_event)
        .invoke_handler(tauri::generate_handler![
            commands::attachments::open_picker,
            commands::attachments::delete_file,
            commands::attachments::drag_enter,
            commands::attachments::drag_leave,
            commands::attachments::list_files,
            commands::attachments::loader_state,
            commands::files::select_files,
            commands::files::drop_files,
            commands::settings::get_settings,
            commands::settings::save_settings,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Route native window drag-drop into the widget.
///
/// The handler lives for the whole window lifetime and is released by the
/// runtime on teardown; whether events reach the widget is decided per event
/// from the current settings, so toggling window drops needs no resubscribe.
fn handle_window_event(window: &tauri::Window, event: &tauri::WindowEvent) {
    let tauri::WindowEvent::DragDrop(drag) = event else {
        return;
    };
    let Some(state) = window.try_state::<LoaderState>() else {
        return;
    };
    if !state.window_drop_enabled() {
        return;
    }

    match drag {
        tauri::DragDropEvent::Enter { .. } | tauri::DragDropEvent::Over { .. } => {
            state.drag_enter();
        }
        tauri::DragDropEvent::Leave => state.drag_leave(),
        tauri::DragDropEvent::Drop { paths, .. } => {
            let paths: Vec<String> = paths
                .iter()
                .map(|p| p.to_string_lossy().to_string())
                .collect();
            // Resolution hits the filesystem, but a drop is a one-shot user
            // gesture on the main thread; entries are small metadata reads.
            match commands::files::resolve_paths(paths) {
                Ok(entries) => state.drop_entries(entries),
                Err(e) => {
                    log::error!("failed to resolve dropped paths: {}", e);
                    state.drag_leave();
                }
            }
        }
        _ => {}
    }
}
