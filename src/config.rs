use crate::error::{MatcherError, Result};
use bakehouse_common::features::DOMINANT_COLOR_COUNT;
use bakehouse_common::{AssignPolicy, Strategy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_FILE: &str = "image_product_mapping.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub strategy: Strategy,
    /// 出力ファイル名（作業フォルダからの相対パス）
    pub output_file: String,
    /// 画像特徴版でこれ以下のスコアは⚠表示
    pub confidence_threshold: f64,
    pub dominant_colors: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::Visual,
            output_file: DEFAULT_OUTPUT_FILE.into(),
            confidence_threshold: AssignPolicy::DEFAULT_CONFIDENCE,
            dominant_colors: DOMINANT_COLOR_COUNT,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "設定ファイルを読み込み");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MatcherError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("bakehouse-matcher").join("config.json"))
    }

    /// 照合方式に対応する割り当てポリシー
    pub fn policy(&self, strategy: Strategy) -> AssignPolicy {
        match strategy {
            Strategy::Keyword => AssignPolicy::for_strategy(strategy),
            Strategy::Visual => AssignPolicy::for_strategy(strategy).with_confidence(self.confidence_threshold),
        }
    }
}
