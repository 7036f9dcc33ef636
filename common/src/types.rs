//! 商品・画像特徴の型定義
//!
//! CLIとテストで共有される型:
//! - ProductRecord: カタログの1商品（キーワード版/属性版のタグを持つ）
//! - ImageFeatures: 画像1枚から抽出した特徴
//! - Strategy: 照合方式（ファイル名キーワード/画像特徴）

use serde::{Deserialize, Serialize};

/// 照合方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// ファイル名に含まれるキーワードで照合
    Keyword,
    /// 縦横比・主要色・ファイルサイズで照合
    #[default]
    Visual,
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "keyword" | "keywords" | "k" => Ok(Strategy::Keyword),
            "visual" | "v" => Ok(Strategy::Visual),
            _ => Err(format!("Unknown strategy: {}. Use keyword or visual", s)),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Keyword => write!(f, "keyword"),
            Strategy::Visual => write!(f, "visual"),
        }
    }
}

/// カタログの商品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    #[serde(flatten)]
    pub tags: ProductTags,
}

/// 商品の記述タグ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductTags {
    /// キーワード版: 小文字キーワードの集合
    Keywords { keywords: Vec<String> },
    /// 属性版: 種類・フレーバー・サイズ・スタイル
    Attributes(ProductAttributes),
}

/// 属性版のタグ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductAttributes {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub has_nuts: bool,
}

impl ProductRecord {
    /// キーワード版の商品を作成
    pub fn with_keywords(name: &str, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            tags: ProductTags::Keywords {
                keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            },
        }
    }

    /// 属性版の商品を作成
    pub fn with_attributes(name: &str, attributes: ProductAttributes) -> Self {
        Self {
            name: name.to_string(),
            tags: ProductTags::Attributes(attributes),
        }
    }

    /// 特定度キー（大きいほど先に画像を選ぶ）
    ///
    /// - キーワード版: (キーワード数, 0, 0)
    /// - 属性版: (flavor文字数, size文字数, style文字数) を辞書順で比較
    pub fn specificity(&self) -> (usize, usize, usize) {
        match &self.tags {
            ProductTags::Keywords { keywords } => (keywords.len(), 0, 0),
            ProductTags::Attributes(attrs) => {
                let len = |v: &Option<String>| v.as_deref().map(str::len).unwrap_or(0);
                (len(&attrs.flavor), len(&attrs.size), len(&attrs.style))
            }
        }
    }
}

impl ProductAttributes {
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            ..Default::default()
        }
    }

    pub fn flavor(mut self, flavor: &str) -> Self {
        self.flavor = Some(flavor.to_string());
        self
    }

    pub fn size(mut self, size: &str) -> Self {
        self.size = Some(size.to_string());
        self
    }

    pub fn style(mut self, style: &str) -> Self {
        self.style = Some(style.to_string());
        self
    }

    pub fn nuts(mut self) -> Self {
        self.has_nuts = true;
        self
    }
}

/// 画像1枚の特徴
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageFeatures {
    /// ファイル名（ディレクトリ部分を含まない）
    pub file_name: String,
    /// ファイルサイズ（バイト）。デコード可否に関わらずメタデータから取得
    pub file_size: u64,
    pub kind: FeatureKind,
}

/// 特徴の種類
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FeatureKind {
    /// キーワード版: ファイル名のみ
    Filename,
    /// 画像特徴版。デコード失敗時は None（全商品に対してスコア0）
    Visual(Option<VisualFeatures>),
}

/// 画像から得た粗い視覚特徴
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualFeatures {
    pub width: u32,
    pub height: u32,
    pub aspect_ratio: f64,
    pub is_landscape: bool,
    pub is_portrait: bool,
    pub is_square: bool,
    pub has_brown: bool,
    pub has_white: bool,
    pub has_red_pink: bool,
    pub has_yellow: bool,
}

impl ImageFeatures {
    /// キーワード版の特徴
    pub fn filename(file_name: &str, file_size: u64) -> Self {
        Self {
            file_name: file_name.to_string(),
            file_size,
            kind: FeatureKind::Filename,
        }
    }

    /// 画像特徴版の特徴
    pub fn visual(file_name: &str, file_size: u64, visual: Option<VisualFeatures>) -> Self {
        Self {
            file_name: file_name.to_string(),
            file_size,
            kind: FeatureKind::Visual(visual),
        }
    }

    /// 小文字化したファイル名
    pub fn file_name_lower(&self) -> String {
        self.file_name.to_lowercase()
    }

    /// 視覚特徴（キーワード版・デコード失敗時は None）
    pub fn visual_features(&self) -> Option<&VisualFeatures> {
        match &self.kind {
            FeatureKind::Visual(visual) => visual.as_ref(),
            FeatureKind::Filename => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("keyword".parse::<Strategy>().unwrap(), Strategy::Keyword);
        assert_eq!("VISUAL".parse::<Strategy>().unwrap(), Strategy::Visual);
        assert!("clip".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_keywords_are_lowercased() {
        let product = ProductRecord::with_keywords("Chocolate Bar", &["Chocolate", "BAR"]);
        assert_eq!(
            product.tags,
            ProductTags::Keywords {
                keywords: vec!["chocolate".to_string(), "bar".to_string()]
            }
        );
    }

    #[test]
    fn test_specificity_keyword_count() {
        let product = ProductRecord::with_keywords("Chocolate Bar", &["chocolate", "bar", "rectangular"]);
        assert_eq!(product.specificity(), (3, 0, 0));
    }

    #[test]
    fn test_specificity_attribute_lengths() {
        let bento = ProductRecord::with_attributes(
            "Vanilla Cake (Bento)",
            ProductAttributes::new("cake").flavor("vanilla").size("small").style("bento"),
        );
        let brownie = ProductRecord::with_attributes(
            "Brownie (500gm)",
            ProductAttributes::new("brownie").size("large"),
        );
        assert_eq!(bento.specificity(), (7, 5, 5));
        assert_eq!(brownie.specificity(), (0, 5, 0));
        // flavor の有無が size より優先される
        assert!(bento.specificity() > brownie.specificity());
    }

    #[test]
    fn test_product_deserialize_keywords() {
        let json = r#"{"name": "Vanilla Muffin", "keywords": ["muffin", "vanilla"]}"#;
        let product: ProductRecord = serde_json::from_str(json).unwrap();
        assert_eq!(product.name, "Vanilla Muffin");
        assert!(matches!(product.tags, ProductTags::Keywords { .. }));
    }

    #[test]
    fn test_product_deserialize_attributes() {
        let json = r#"{"name": "Nut Chocolate Bar", "type": "chocolate", "size": "medium", "has_nuts": true}"#;
        let product: ProductRecord = serde_json::from_str(json).unwrap();
        match product.tags {
            ProductTags::Attributes(attrs) => {
                assert_eq!(attrs.kind, "chocolate");
                assert_eq!(attrs.size.as_deref(), Some("medium"));
                assert!(attrs.flavor.is_none());
                assert!(attrs.has_nuts);
            }
            other => panic!("属性版として読み込まれていない: {:?}", other),
        }
    }

    #[test]
    fn test_visual_features_of_filename_kind() {
        let features = ImageFeatures::filename("Truffles.JPG", 10);
        assert_eq!(features.file_name_lower(), "truffles.jpg");
        assert!(features.visual_features().is_none());
    }
}
