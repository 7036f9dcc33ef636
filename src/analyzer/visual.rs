//! 画像デコードと視覚特徴の抽出
//!
//! 画素数とRGBAヒストグラムだけを読み、分類は bakehouse_common::features に任せる。

use crate::error::{MatcherError, Result};
use bakehouse_common::features::{self, Color};
use bakehouse_common::VisualFeatures;
use image::ImageReader;
use std::collections::HashMap;
use std::path::Path;

/// 画像を開いて視覚特徴を返す
///
/// 形式は拡張子ではなくファイル先頭のバイトから判定する。
pub fn analyze_image(path: &Path, dominant_count: usize) -> Result<VisualFeatures> {
    let img = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| MatcherError::ImageDecode(e.to_string()))?
        .decode()
        .map_err(|e| MatcherError::ImageDecode(e.to_string()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let histogram = color_histogram(rgba.pixels().map(|p| p.0));
    let dominant = features::dominant_colors(histogram, dominant_count);

    Ok(features::classify(width, height, &dominant))
}

/// 色ごとの画素数
pub fn color_histogram<I>(pixels: I) -> HashMap<Color, u64>
where
    I: IntoIterator<Item = Color>,
{
    let mut histogram = HashMap::new();
    for pixel in pixels {
        *histogram.entry(pixel).or_insert(0u64) += 1;
    }
    histogram
}
