use crate::error::Result;
use bakehouse_common::Mapping;
use std::path::Path;

/// 対応表をJSONで書き出す（既存ファイルは上書き）
pub fn write_mapping(mapping: &Mapping, output: &Path) -> Result<()> {
    let json = mapping.to_json_pretty()?;
    std::fs::write(output, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatcherError;
    use tempfile::tempdir;

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("image_product_mapping.json");
        std::fs::write(&path, r#"{"Old": "old.jpg"}"#).unwrap();

        write_mapping(&Mapping::default(), &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_write_failure_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        let result = write_mapping(&Mapping::default(), &path);
        assert!(matches!(result, Err(MatcherError::Io(_))));
    }
}
