use crate::commands::attachments::LoaderState;
use crate::models::settings::LoaderSettings;
use crate::storage::settings;

#[tauri::command]
pub fn get_settings(app: tauri::AppHandle) -> Result<LoaderSettings, String> {
    settings::get_settings(&app).map_err(|e| e.to_string())
}

/// Persist new settings and apply them to the live widget in one step, so
/// the next validation already uses the new limits.
#[tauri::command]
pub fn save_settings(
    settings_data: LoaderSettings,
    app: tauri::AppHandle,
    state: tauri::State<'_, LoaderState>,
) -> Result<(), String> {
    settings::save_settings(&app, settings_data.clone()).map_err(|e| e.to_string())?;
    state.update_settings(settings_data);
    Ok(())
}
