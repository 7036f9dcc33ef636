pub mod visual;

use crate::scanner::ImageInfo;
use bakehouse_common::{ImageFeatures, Strategy};
use indicatif::{ProgressBar, ProgressStyle};

/// 全画像の特徴を1回ずつ抽出する（結果は実行中のキャッシュとして使う）
///
/// デコードに失敗した画像は警告を出し、特徴なしとして扱う。
pub fn extract_features(images: &[ImageInfo], strategy: Strategy, dominant_count: usize) -> Vec<ImageFeatures> {
    match strategy {
        Strategy::Keyword => images
            .iter()
            .map(|img| ImageFeatures::filename(&img.file_name, img.file_size))
            .collect(),
        Strategy::Visual => extract_visual(images, dominant_count),
    }
}

fn extract_visual(images: &[ImageInfo], dominant_count: usize) -> Vec<ImageFeatures> {
    let progress = ProgressBar::new(images.len() as u64);
    if let Ok(style) = ProgressStyle::with_template("  {bar:40} {pos}/{len} {msg}") {
        progress.set_style(style);
    }

    let mut features = Vec::with_capacity(images.len());
    for img in images {
        progress.set_message(img.file_name.clone());

        let visual = match visual::analyze_image(&img.path, dominant_count) {
            Ok(visual) => {
                tracing::debug!(file = %img.file_name, ?visual, "画像特徴を抽出");
                Some(visual)
            }
            Err(e) => {
                tracing::warn!(file = %img.file_name, error = %e, "画像解析に失敗、特徴なしとして扱います");
                None
            }
        };
        features.push(ImageFeatures::visual(&img.file_name, img.file_size, visual));
        progress.inc(1);
    }

    progress.finish_and_clear();
    features
}
