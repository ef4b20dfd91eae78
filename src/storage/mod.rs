//! Local persistence layer using tauri-plugin-store.
//!
//! Only widget settings are persisted, written to disk immediately on save.
//! The attached file list is deliberately never stored; it lives and dies
//! with the window.

pub mod settings;
