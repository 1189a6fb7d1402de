//! Error types for the record store.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in the record store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store has been closed; no operation can proceed.
    #[error("store is disconnected")]
    Disconnected,

    /// Reading or writing the snapshot file failed.
    #[error("snapshot io error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot file exists but could not be parsed.
    #[error("snapshot is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

impl StoreError {
    /// Returns true when the failure is a storage fault rather than a
    /// caller mistake (everything in this enum is; kept explicit for the
    /// router's status mapping).
    #[must_use]
    pub fn is_storage_fault(&self) -> bool {
        matches!(
            self,
            StoreError::Disconnected | StoreError::Io(_) | StoreError::Corrupt(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            StoreError::Disconnected.to_string(),
            "store is disconnected"
        );
    }

    #[test]
    fn all_variants_are_storage_faults() {
        assert!(StoreError::Disconnected.is_storage_fault());
        let io = StoreError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert!(io.is_storage_fault());
    }
}
