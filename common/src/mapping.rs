//! 商品名→画像ファイル名の対応表
//!
//! JSONオブジェクトとして出力する。キーはカタログ定義順。

use crate::assigner::Assignment;
use crate::catalog::Catalog;
use crate::error::Result;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// 順序付きの対応表
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    entries: Vec<(String, String)>,
}

impl Mapping {
    /// 割り当て結果をカタログ定義順に並べ替えて対応表にする
    pub fn from_assignments(catalog: &Catalog, assignments: &[Assignment]) -> Self {
        let mut entries: Vec<(usize, &Assignment)> = assignments
            .iter()
            .filter_map(|a| catalog.position(&a.product).map(|pos| (pos, a)))
            .collect();
        entries.sort_by_key(|(pos, _)| *pos);

        Self {
            entries: entries
                .into_iter()
                .map(|(_, a)| (a.product.clone(), a.file_name.clone()))
                .collect(),
        }
    }

    pub fn get(&self, product: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == product)
            .map(|(_, file)| file.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 2スペースインデントのJSON文字列
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for Mapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, file) in &self.entries {
            map.serialize_entry(name, file)?;
        }
        map.end()
    }
}
