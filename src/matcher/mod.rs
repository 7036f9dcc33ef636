mod types;

pub use types::{format_assignment, MatchReport};

use crate::analyzer;
use crate::error::Result;
use crate::scanner;
use bakehouse_common::{assign, AssignPolicy, Catalog, Mapping, Strategy};
use std::path::Path;

/// 照合の実行オプション
#[derive(Debug, Clone)]
pub struct MatchOptions {
    pub strategy: Strategy,
    pub policy: AssignPolicy,
    pub dominant_colors: usize,
}

/// フォルダ内の画像をカタログの商品に割り当てる
///
/// スキャン → 特徴抽出（画像ごとに1回） → 貪欲割り当て → カタログ順の対応表
pub fn match_folder(folder: &Path, catalog: &Catalog, options: &MatchOptions) -> Result<MatchReport> {
    let images = scanner::scan_folder(folder)?;
    tracing::info!(folder = %folder.display(), images = images.len(), "画像をスキャン");

    let features = analyzer::extract_features(&images, options.strategy, options.dominant_colors);
    let assignments = assign(catalog, &features, options.policy);
    let mapping = Mapping::from_assignments(catalog, &assignments);

    Ok(MatchReport {
        images_found: images.len(),
        products_found: catalog.len(),
        assignments,
        mapping,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bakehouse_common::ProductRecord;
    use tempfile::tempdir;

    #[test]
    fn test_match_folder_keyword() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("chocolate_bar.jpg"), b"x").unwrap();
        std::fs::write(dir.path().join("vanilla.jpg"), b"x").unwrap();

        let catalog = Catalog::new(vec![ProductRecord::with_keywords("Chocolate Bar", &["chocolate", "bar"])]).unwrap();
        let options = MatchOptions {
            strategy: Strategy::Keyword,
            policy: AssignPolicy::for_strategy(Strategy::Keyword),
            dominant_colors: 5,
        };

        let report = match_folder(dir.path(), &catalog, &options).unwrap();
        assert_eq!(report.images_found, 2);
        assert_eq!(report.products_found, 1);
        assert_eq!(report.mapping.get("Chocolate Bar"), Some("chocolate_bar.jpg"));
    }
}
