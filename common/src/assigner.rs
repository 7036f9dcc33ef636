//! 貪欲法による商品↔画像の割り当て
//!
//! 特定度の高い商品から順に、未使用画像の中で最高スコアのものを取る。
//! 全体最適ではない（増加路やオークション法は使わない）。
//!
//! ## 処理フロー
//! 1. 特定度キーの降順で安定ソート
//! 2. 未使用画像を全てスコアリングし、厳密に大きいものだけで更新（同点は先勝ち）
//! 3. 選んだ画像を使用済みにする
//! 4. 未使用画像がなくなった商品は割り当てなし

use crate::catalog::Catalog;
use crate::scoring;
use crate::types::{ImageFeatures, ProductRecord, Strategy};
use serde::Serialize;

/// 割り当ての確からしさ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchStatus {
    /// スコアが閾値を超えた
    Matched,
    /// 最高スコアを採用したが閾値以下
    LowConfidence,
    /// 正のスコアがなく、先頭の未使用画像を割り当てた
    Fallback,
}

/// 割り当てポリシー
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssignPolicy {
    /// true なら最高スコアが0以下の場合にフォールバックする
    pub require_positive: bool,
    /// これ以下のスコアは LowConfidence
    pub confidence_threshold: f64,
}

impl AssignPolicy {
    pub const DEFAULT_CONFIDENCE: f64 = 0.3;

    pub fn for_strategy(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Keyword => Self {
                require_positive: true,
                confidence_threshold: 0.0,
            },
            Strategy::Visual => Self {
                require_positive: false,
                confidence_threshold: Self::DEFAULT_CONFIDENCE,
            },
        }
    }

    pub fn with_confidence(mut self, threshold: f64) -> Self {
        self.confidence_threshold = threshold;
        self
    }
}

/// 1商品の割り当て結果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub product: String,
    pub file_name: String,
    pub score: f64,
    pub status: MatchStatus,
}

/// 商品を処理順（特定度の降順、同値はカタログ順）に並べる
pub fn processing_order(products: &[ProductRecord]) -> Vec<&ProductRecord> {
    let mut sorted: Vec<&ProductRecord> = products.iter().collect();
    sorted.sort_by(|a, b| b.specificity().cmp(&a.specificity()));
    sorted
}

/// 全商品を割り当てる（結果は処理順）
pub fn assign(catalog: &Catalog, images: &[ImageFeatures], policy: AssignPolicy) -> Vec<Assignment> {
    assign_with(catalog, images, policy, scoring::score)
}

/// スコア関数を差し替えて割り当てる
pub fn assign_with<F>(
    catalog: &Catalog,
    images: &[ImageFeatures],
    policy: AssignPolicy,
    score_fn: F,
) -> Vec<Assignment>
where
    F: Fn(&ImageFeatures, &ProductRecord) -> f64,
{
    let mut used = vec![false; images.len()];
    let mut assignments = Vec::new();

    for product in processing_order(catalog.products()) {
        let mut best: Option<(usize, f64)> = None;

        for (idx, image) in images.iter().enumerate() {
            if used[idx] {
                continue;
            }
            let score = score_fn(image, product);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((idx, score));
            }
        }

        // 未使用画像なし
        let Some((best_idx, best_score)) = best else {
            continue;
        };

        let (idx, status) = if policy.require_positive && best_score <= 0.0 {
            match used.iter().position(|u| !u) {
                Some(first) => (first, MatchStatus::Fallback),
                None => continue,
            }
        } else if best_score > policy.confidence_threshold {
            (best_idx, MatchStatus::Matched)
        } else {
            (best_idx, MatchStatus::LowConfidence)
        };

        used[idx] = true;
        assignments.push(Assignment {
            product: product.name.clone(),
            file_name: images[idx].file_name.clone(),
            score: if status == MatchStatus::Fallback { 0.0 } else { best_score },
            status,
        });
    }

    assignments
}
