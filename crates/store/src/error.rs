use std::path::PathBuf;

/// Errors that can occur while saving or loading a game.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to remove {path}: {source}")]
    Remove {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid saved date: {0:?}")]
    InvalidDate(String),

    #[error("saved grid is {rows}x{cols}, expected {expected}x{expected}")]
    InvalidGrid {
        rows: usize,
        cols: usize,
        expected: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_grid_display() {
        let err = StoreError::InvalidGrid {
            rows: 3,
            cols: 4,
            expected: 4,
        };
        assert_eq!(err.to_string(), "saved grid is 3x4, expected 4x4");
    }

    #[test]
    fn test_invalid_date_display() {
        let err = StoreError::InvalidDate("yesterday".to_string());
        assert_eq!(err.to_string(), "invalid saved date: \"yesterday\"");
    }
}
