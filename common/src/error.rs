//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate product name: {0}")]
    DuplicateProduct(String),

    #[error("Product name must not be empty")]
    EmptyProductName,
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = Error::Io(io_error);
        let display = format!("{}", error);
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_error_display_duplicate() {
        let error = Error::DuplicateProduct("Chocolate Bar".to_string());
        assert_eq!(format!("{}", error), "Duplicate product name: Chocolate Bar");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::DuplicateProduct("カタログ".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("DuplicateProduct"));
        assert!(debug.contains("カタログ"));
    }
}
