use serde::{Deserialize, Serialize};

/// Widget settings persisted to settings.json.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoaderSettings {
    /// Maximum total number of attached files.
    pub max_quantity: u32,
    /// Per-file size limit in megabytes (1 MB = 1,000,000 bytes).
    /// Zero disables the size check and hides the size hint.
    pub size_limit_mb: u32,
    /// When true, drops anywhere in the window are captured, not just drops
    /// over the widget surface.
    pub window_drop: bool,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            max_quantity: 2,
            size_limit_mb: 5,
            window_drop: false,
        }
    }
}

impl LoaderSettings {
    /// Size limit in bytes, or `None` when the size check is disabled.
    pub fn size_limit_bytes(&self) -> Option<u64> {
        if self.size_limit_mb > 0 {
            Some(self.size_limit_mb as u64 * 1_000_000)
        } else {
            None
        }
    }
}
