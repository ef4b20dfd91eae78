//! Widget state machine: the attached file list, the drag flag, and the
//! current validation error.
//!
//! All mutation goes through the operations below; there is no other write
//! path. Every operation is synchronous and runs to completion, so state is
//! only ever observed between operations. Methods that can change the file
//! list return whether they did, so the caller knows when to notify the
//! frontend.

use crate::models::file::FileEntry;
use crate::models::settings::LoaderSettings;
use crate::services::validator::{self, ValidationError};

#[derive(Debug)]
pub struct Attachments {
    settings: LoaderSettings,
    files: Vec<FileEntry>,
    drag_active: bool,
    error: Option<ValidationError>,
}

impl Attachments {
    pub fn new(settings: LoaderSettings) -> Self {
        Self {
            settings,
            files: Vec::new(),
            drag_active: false,
            error: None,
        }
    }

    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    /// The rendered error text; empty when there is none.
    pub fn error_message(&self) -> String {
        self.error.as_ref().map(|e| e.to_string()).unwrap_or_default()
    }

    pub fn settings(&self) -> &LoaderSettings {
        &self.settings
    }

    /// The user is about to pick files; any stale error disappears.
    pub fn picker_opened(&mut self) {
        self.error = None;
    }

    /// Validate a proposed batch and append it on success.
    ///
    /// Returns true when the file list changed. On rejection the list is
    /// untouched and the error replaces whatever was shown before.
    pub fn add_files(&mut self, batch: Vec<FileEntry>) -> bool {
        self.error = None;
        match validator::validate(&self.files, &batch, &self.settings) {
            Ok(()) => {
                self.files.extend(batch);
                true
            }
            Err(err) => {
                self.error = Some(err);
                false
            }
        }
    }

    /// Remove the entry matching the given identity.
    ///
    /// Removing an identity that is not attached is a silent no-op.
    pub fn remove_file(&mut self, file_name: &str, file_size: u64) -> bool {
        let identity = format!("{}{}", file_name, file_size);
        let before = self.files.len();
        self.files.retain(|f| f.identity() != identity);
        self.files.len() != before
    }

    pub fn drag_enter(&mut self) {
        self.drag_active = true;
        self.error = None;
    }

    pub fn drag_leave(&mut self) {
        self.drag_active = false;
    }

    /// A drop ends the drag interaction and behaves like a selection.
    pub fn drop_files(&mut self, batch: Vec<FileEntry>) -> bool {
        self.drag_active = false;
        self.add_files(batch)
    }

    /// Apply new settings; subsequent validation and the size hint use them.
    pub fn update_settings(&mut self, settings: LoaderSettings) {
        self.settings = settings;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, size: u64) -> FileEntry {
        FileEntry {
            file_name: name.to_string(),
            file_path: format!("/tmp/{}", name),
            file_size: size,
        }
    }

    fn widget() -> Attachments {
        Attachments::new(LoaderSettings::default())
    }

    #[test]
    fn starts_empty_without_error_or_drag() {
        let state = widget();
        assert!(state.files().is_empty());
        assert!(!state.drag_active());
        assert_eq!(state.error_message(), "");
    }

    #[test]
    fn successful_add_appends_in_order() {
        let mut state = widget();
        assert!(state.add_files(vec![entry("a.txt", 1)]));
        assert!(state.add_files(vec![entry("b.txt", 2)]));
        let names: Vec<_> = state.files().iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn rejected_add_leaves_list_unchanged_and_sets_error() {
        let mut state = widget();
        state.add_files(vec![entry("a.txt", 1)]);
        let changed = state.add_files(vec![entry("a.txt", 1)]);
        assert!(!changed);
        assert_eq!(state.files().len(), 1);
        assert_eq!(state.error_message(), "This file is already attached");
    }

    #[test]
    fn new_attempt_clears_previous_error() {
        let mut state = widget();
        state.add_files(vec![entry("a.txt", 1)]);
        state.add_files(vec![entry("a.txt", 1)]);
        assert_ne!(state.error_message(), "");
        assert!(state.add_files(vec![entry("b.txt", 2)]));
        assert_eq!(state.error_message(), "");
    }

    #[test]
    fn picker_opened_clears_error() {
        let mut state = widget();
        state.add_files(vec![]);
        assert_eq!(state.error_message(), "Nothing loaded");
        state.picker_opened();
        assert_eq!(state.error_message(), "");
    }

    #[test]
    fn remove_file_deletes_exactly_the_matching_identity() {
        let mut state = widget();
        state.add_files(vec![entry("a.txt", 1), entry("b.txt", 2)]);
        assert!(state.remove_file("a.txt", 1));
        let names: Vec<_> = state.files().iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["b.txt"]);
    }

    #[test]
    fn remove_unknown_identity_is_a_noop() {
        let mut state = widget();
        state.add_files(vec![entry("a.txt", 1)]);
        assert!(!state.remove_file("a.txt", 999));
        assert_eq!(state.files().len(), 1);
        assert_eq!(state.error_message(), "");
    }

    #[test]
    fn drag_enter_sets_flag_and_clears_error() {
        let mut state = widget();
        state.add_files(vec![]);
        assert_ne!(state.error_message(), "");
        state.drag_enter();
        assert!(state.drag_active());
        assert_eq!(state.error_message(), "");
        state.drag_leave();
        assert!(!state.drag_active());
    }

    #[test]
    fn drop_ends_drag_and_attaches() {
        let mut state = widget();
        state.drag_enter();
        assert!(state.drop_files(vec![entry("a.txt", 1)]));
        assert!(!state.drag_active());
        assert_eq!(state.files().len(), 1);
    }

    #[test]
    fn rejected_drop_still_ends_drag() {
        let mut state = widget();
        state.add_files(vec![entry("a.txt", 1)]);
        state.drag_enter();
        assert!(!state.drop_files(vec![entry("a.txt", 1)]));
        assert!(!state.drag_active());
    }

    #[test]
    fn updated_settings_apply_to_later_validation() {
        let mut state = widget();
        state.add_files(vec![entry("a.txt", 1), entry("b.txt", 2)]);
        assert!(!state.add_files(vec![entry("c.txt", 3)]));
        state.update_settings(LoaderSettings {
            max_quantity: 3,
            ..LoaderSettings::default()
        });
        assert!(state.add_files(vec![entry("c.txt", 3)]));
    }

    /// The full walkthrough with the default limits: two files maximum,
    /// five megabytes each.
    #[test]
    fn default_limits_walkthrough() {
        let mut state = widget();

        assert!(state.add_files(vec![entry("a.txt", 1_000_000)]));
        assert_eq!(state.files().len(), 1);

        assert!(!state.add_files(vec![entry("a.txt", 1_000_000)]));
        assert_eq!(state.error_message(), "This file is already attached");
        assert_eq!(state.files().len(), 1);

        assert!(!state.add_files(vec![entry("b.pdf", 6_000_000)]));
        assert_eq!(state.error_message(), "Maximum file size: 5 MB");
        assert_eq!(state.files().len(), 1);

        assert!(state.add_files(vec![entry("b.pdf", 4_000_000)]));
        let names: Vec<_> = state.files().iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "b.pdf"]);

        assert!(!state.add_files(vec![entry("c.png", 1)]));
        assert_eq!(state.error_message(), "Maximum number of files: 2");
        assert_eq!(state.files().len(), 2);
    }
}
