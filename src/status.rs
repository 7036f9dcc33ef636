//! 対応付け状況の確認
//!
//! 商品名に沿ってリネーム済みの画像を探し、見つからない商品には
//! ファイル名の候補を提示する。

use bakehouse_common::Catalog;
use regex::Regex;
use std::collections::HashSet;

/// 一致の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitKind {
    /// 商品名の表記バリエーションとファイル名が包含関係
    Exact,
    /// 商品名の主要語（5文字以上の最初の語）を含む
    Partial,
}

impl std::fmt::Display for HitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HitKind::Exact => write!(f, "exact"),
            HitKind::Partial => write!(f, "partial"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusHit {
    pub product: String,
    pub image: String,
    pub kind: HitKind,
}

#[derive(Debug, Clone, Default)]
pub struct StatusReport {
    pub hits: Vec<StatusHit>,
    /// (商品名, 推奨ファイル名)
    pub suggestions: Vec<(String, String)>,
    /// 元の撮影名・生成名ではない画像
    pub renamed_images: Vec<String>,
}

lazy_static::lazy_static! {
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
    static ref PARENS_RE: Regex = Regex::new(r"[()]").unwrap();
    static ref IMAGE_EXT_RE: Regex = Regex::new(r"(?i)\.(jpg|jpeg|png)$").unwrap();
}

const ORIGINAL_NAME_MARKERS: &[&str] = &["whatsapp", "gemini_generated", "truffles"];

/// 商品名の比較用バリエーション
pub fn name_variations(product: &str) -> Vec<String> {
    let lower = product.to_lowercase();
    let no_parens = PARENS_RE.replace_all(&lower, "").to_string();
    vec![
        WHITESPACE_RE.replace_all(&lower, " ").to_string(),
        WHITESPACE_RE.replace_all(&lower, "").to_string(),
        no_parens.clone(),
        WHITESPACE_RE.replace_all(&no_parens, "").to_string(),
    ]
}

/// 推奨ファイル名: 括弧を除き空白を詰めて `.jpg`
pub fn suggested_file_name(product: &str) -> String {
    let no_parens = PARENS_RE.replace_all(product, "");
    format!("{}.jpg", WHITESPACE_RE.replace_all(&no_parens, " ").trim())
}

fn image_stem(image: &str) -> String {
    IMAGE_EXT_RE.replace(&image.to_lowercase(), "").to_string()
}

/// カタログと画像一覧から状況レポートを作る
pub fn check_status(catalog: &Catalog, images: &[String]) -> StatusReport {
    let mut hits: Vec<StatusHit> = Vec::new();
    let mut seen: HashSet<(String, String)> = HashSet::new();

    let mut push = |product: &str, image: &str, kind: HitKind, hits: &mut Vec<StatusHit>| {
        if seen.insert((product.to_string(), image.to_string())) {
            hits.push(StatusHit {
                product: product.to_string(),
                image: image.to_string(),
                kind,
            });
        }
    };

    for image in images {
        let stem = image_stem(image);

        for product in catalog.products() {
            let exact = name_variations(&product.name)
                .iter()
                .any(|v| stem.contains(v.as_str()) || v.contains(stem.as_str()));
            if exact {
                push(&product.name, image, HitKind::Exact, &mut hits);
            }

            let lower = product.name.to_lowercase();
            let words: Vec<&str> = lower.split_whitespace().collect();
            if words.len() > 1 {
                if let Some(main) = words.iter().find(|w| w.chars().count() > 4) {
                    if stem.contains(main) {
                        push(&product.name, image, HitKind::Partial, &mut hits);
                    }
                }
            }
        }
    }

    let matched: HashSet<&str> = hits.iter().map(|h| h.product.as_str()).collect();
    let suggestions = catalog
        .products()
        .iter()
        .filter(|p| !matched.contains(p.name.as_str()))
        .map(|p| (p.name.clone(), suggested_file_name(&p.name)))
        .collect();

    let renamed_images = images
        .iter()
        .filter(|img| {
            let lower = img.to_lowercase();
            !ORIGINAL_NAME_MARKERS.iter().any(|m| lower.contains(m))
        })
        .cloned()
        .collect();

    StatusReport {
        hits,
        suggestions,
        renamed_images,
    }
}
