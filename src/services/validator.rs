//! Batch validation for newly attached files.
//!
//! Pure computation over the current file list and a proposed batch — no IO
//! and no widget state. Checks run in a fixed order and the first failing
//! check wins: duplicates, then quantity, then the empty batch, then the
//! per-file size limit.

use thiserror::Error;

use crate::models::file::FileEntry;
use crate::models::settings::LoaderSettings;

/// A rejected batch. The `Display` strings are the user-facing messages
/// rendered next to the widget; they never propagate as failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This file is already attached")]
    Duplicate,

    #[error("Maximum number of files: {max}")]
    QuantityExceeded { max: u32 },

    #[error("Nothing loaded")]
    NothingLoaded,

    #[error("Maximum file size: {limit_mb} MB")]
    SizeExceeded { limit_mb: u32 },
}

/// Decide whether `proposed` may be appended to `existing`.
///
/// `Ok(())` means the whole batch is acceptable and can be concatenated as
/// is: the duplicate check already guarantees no identity collisions, either
/// against the existing list or within the batch itself.
pub fn validate(
    existing: &[FileEntry],
    proposed: &[FileEntry],
    settings: &LoaderSettings,
) -> Result<(), ValidationError> {
    let mut exists = false;
    for (i, file) in proposed.iter().enumerate() {
        if is_already_attached(existing, &proposed[..i], file) {
            exists = true;
        }
    }
    if exists {
        return Err(ValidationError::Duplicate);
    }

    let total = existing.len() + proposed.len();
    if total > settings.max_quantity as usize {
        return Err(ValidationError::QuantityExceeded {
            max: settings.max_quantity,
        });
    } else if total == 0 {
        return Err(ValidationError::NothingLoaded);
    }

    if let Some(limit) = settings.size_limit_bytes() {
        // Every file is scanned even after a failure; the surfaced error
        // reflects the last offending file.
        let mut oversize = None;
        for file in proposed {
            if file.file_size > limit {
                oversize = Some(ValidationError::SizeExceeded {
                    limit_mb: settings.size_limit_mb,
                });
            }
        }
        if let Some(err) = oversize {
            return Err(err);
        }
    }

    Ok(())
}

/// True when `file` collides with the existing list or with an earlier file
/// of the same batch.
fn is_already_attached(existing: &[FileEntry], earlier: &[FileEntry], file: &FileEntry) -> bool {
    let identity = file.identity();
    existing.iter().any(|f| f.identity() == identity)
        || earlier.iter().any(|f| f.identity() == identity)
}
