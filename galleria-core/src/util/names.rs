//! src/util/names.rs
//! ============================================================================

use crate::error::{AppError, AppResult};

/// Trim a user-supplied display name, rejecting blank input.
pub fn normalize_name(field: &str, input: &str) -> AppResult<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_input(field, "name must not be empty"));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize_name("album_name", "  Trips ").unwrap(), "Trips");
    }

    #[test]
    fn test_blank_is_rejected() {
        let err = normalize_name("file_name", " \t ").unwrap_err();
        assert!(matches!(err, AppError::InvalidInput { ref field, .. } if field == "file_name"));
    }
}
