//! File selection commands and path resolution.
//!
//! Picked or dropped paths arrive as plain strings and are resolved into
//! `FileEntry` values before validation: plain files directly, directories
//! recursively. Hidden files and known system files are filtered out during
//! traversal. Resolution touches the filesystem, so the async commands move
//! it onto a blocking thread.

use std::path::Path;

use crate::commands::attachments::LoaderState;
use crate::error::AppError;
use crate::models::file::FileEntry;

/// System file names that are never attachable regardless of location.
const SYSTEM_FILES: &[&str] = &[".DS_Store", "Thumbs.db", "desktop.ini"];

/// Directory names skipped during recursive traversal.
const SYSTEM_DIRS: &[&str] = &["__MACOSX"];

fn is_hidden_or_system(name: &str) -> bool {
    name.starts_with('.') || SYSTEM_FILES.contains(&name) || SYSTEM_DIRS.contains(&name)
}

/// Read metadata for a single file and append its entry. Applied without
/// filtering so that an explicitly selected hidden file is still honored.
fn push_entry(path: &Path, entries: &mut Vec<FileEntry>) -> crate::error::Result<()> {
    let name = match path.file_name().and_then(|n| n.to_str()) {
        Some(n) => n,
        None => return Ok(()),
    };
    let metadata = std::fs::metadata(path)?;
    entries.push(FileEntry {
        file_name: name.to_string(),
        file_path: path.to_string_lossy().to_string(),
        file_size: metadata.len(),
    });
    Ok(())
}

/// Recursively collect attachable files from a directory, filtering hidden
/// and system children as they are discovered.
fn collect_dir(dir: &Path, entries: &mut Vec<FileEntry>) -> crate::error::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let child = entry?.path();
        let name = match child.file_name().and_then(|n| n.to_str()) {
            Some(n) => n,
            None => continue,
        };
        if is_hidden_or_system(name) {
            continue;
        }
        if child.is_file() {
            push_entry(&child, entries)?;
        } else if child.is_dir() {
            collect_dir(&child, entries)?;
        }
    }
    Ok(())
}

/// Resolve user-provided paths into a flat, ordered list of file entries.
///
/// Returns an error if any path does not exist; the whole batch is then
/// discarded, mirroring the all-or-nothing validation that follows.
pub(crate) fn resolve_paths(paths: Vec<String>) -> crate::error::Result<Vec<FileEntry>> {
    let mut entries = Vec::new();
    for path_str in &paths {
        let path = Path::new(path_str);
        if !path.exists() {
            return Err(AppError::Io(format!("Path does not exist: {}", path_str)));
        }
        if path.is_file() {
            push_entry(path, &mut entries)?;
        } else if path.is_dir() {
            collect_dir(path, &mut entries)?;
        }
    }
    Ok(entries)
}

async fn resolve_on_blocking_thread(paths: Vec<String>) -> Result<Vec<FileEntry>, String> {
    tokio::task::spawn_blocking(move || resolve_paths(paths))
        .await
        .map_err(|e| e.to_string())?
        .map_err(|e| e.to_string())
}

/// Attach files chosen through the frontend (widget click or file input).
#[tauri::command]
pub async fn select_files(
    paths: Vec<String>,
    state: tauri::State<'_, LoaderState>,
) -> Result<(), String> {
    let entries = resolve_on_blocking_thread(paths).await?;
    state.add_files(entries);
    Ok(())
}

/// Attach files dropped onto the widget surface. Ends the drag interaction
/// before validating.
#[tauri::command]
pub async fn drop_files(
    paths: Vec<String>,
    state: tauri::State<'_, LoaderState>,
) -> Result<(), String> {
    let entries = resolve_on_blocking_thread(paths).await?;
    state.drop_entries(entries);
    Ok(())
}
