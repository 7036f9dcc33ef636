//! Bakehouse Matcher Common Library
//!
//! 商品カタログ・特徴分類・スコアリング・割り当てなど、I/Oを持たない共通ロジック

pub mod types;
pub mod catalog;
pub mod features;
pub mod scoring;
pub mod assigner;
pub mod mapping;
pub mod error;

pub use types::{FeatureKind, ImageFeatures, ProductAttributes, ProductRecord, ProductTags, Strategy, VisualFeatures};
pub use catalog::Catalog;
pub use assigner::{assign, AssignPolicy, Assignment, MatchStatus};
pub use mapping::Mapping;
pub use error::{Error, Result};
