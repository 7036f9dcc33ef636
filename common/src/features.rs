//! 視覚特徴の分類
//!
//! 画像のデコードは呼び出し側が行い、ここでは画素数とカラーヒストグラムから
//! 縦横比フラグと主要色フラグを決める。
//!
//! 縦横比の3フラグは独立した判定で、分割にはなっていない
//! （0.8〜0.9, 1.1〜1.2 はどれにも該当しない）。

use crate::types::VisualFeatures;

/// 主要色として見る上位色数
pub const DOMINANT_COLOR_COUNT: usize = 5;

const LANDSCAPE_MIN: f64 = 1.2;
const PORTRAIT_MAX: f64 = 0.8;
const SQUARE_MIN: f64 = 0.9;
const SQUARE_MAX: f64 = 1.1;

/// RGBA色
pub type Color = [u8; 4];

/// 幅/高さ。高さ0は1.0として扱う
pub fn aspect_ratio(width: u32, height: u32) -> f64 {
    if height == 0 {
        1.0
    } else {
        width as f64 / height as f64
    }
}

/// ヒストグラムから出現数上位 `count` 色を取り出す
///
/// 同数の色は色値の昇順で並べる（HashMap の走査順に依存しない）。
pub fn dominant_colors<I>(histogram: I, count: usize) -> Vec<Color>
where
    I: IntoIterator<Item = (Color, u64)>,
{
    let mut entries: Vec<(Color, u64)> = histogram.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.into_iter().take(count).map(|(color, _)| color).collect()
}

fn mean_rgb(c: &Color) -> f64 {
    (c[0] as f64 + c[1] as f64 + c[2] as f64) / 3.0
}

pub fn is_brown(c: &Color) -> bool {
    let mean = mean_rgb(c);
    mean > 100.0 && mean < 180.0
}

pub fn is_white(c: &Color) -> bool {
    mean_rgb(c) > 200.0
}

pub fn is_red_pink(c: &Color) -> bool {
    c[0] > 150 && c[1] < 150 && c[2] < 150
}

pub fn is_yellow(c: &Color) -> bool {
    c[0] > 200 && c[1] > 150 && c[2] < 100
}

/// 画素数と主要色から視覚特徴を作る
pub fn classify(width: u32, height: u32, dominant: &[Color]) -> VisualFeatures {
    let ratio = aspect_ratio(width, height);
    VisualFeatures {
        width,
        height,
        aspect_ratio: ratio,
        is_landscape: ratio > LANDSCAPE_MIN,
        is_portrait: ratio < PORTRAIT_MAX,
        is_square: SQUARE_MIN < ratio && ratio < SQUARE_MAX,
        has_brown: dominant.iter().any(is_brown),
        has_white: dominant.iter().any(is_white),
        has_red_pink: dominant.iter().any(is_red_pink),
        has_yellow: dominant.iter().any(is_yellow),
    }
}
