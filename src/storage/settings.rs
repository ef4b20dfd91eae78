use tauri_plugin_store::StoreExt;

use crate::error::AppError;
use crate::models::settings::LoaderSettings;

const STORE_FILE: &str = "settings.json";
const SETTINGS_KEY: &str = "settings";

/// Read widget settings. Returns defaults if nothing was saved yet or the
/// stored value no longer parses.
pub fn get_settings(app: &tauri::AppHandle) -> crate::error::Result<LoaderSettings> {
    let store = app
        .store(STORE_FILE)
        .map_err(|e| AppError::Storage(e.to_string()))?;
    let settings = store
        .get(SETTINGS_KEY)
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default();
    Ok(settings)
}

/// Save widget settings. Persists to disk immediately.
pub fn save_settings(app: &tauri::AppHandle, settings: LoaderSettings) -> crate::error::Result<()> {
    let store = app
        .store(STORE_FILE)
        .map_err(|e| AppError::Storage(e.to_string()))?;
    store.set(SETTINGS_KEY, serde_json::to_value(&settings)?);
    store
        .save()
        .map_err(|e| AppError::Storage(e.to_string()))?;
    Ok(())
}
