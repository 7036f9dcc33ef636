//! 商品と画像の適合スコア
//!
//! すべて加算式で上限はない。同じ入力には常に同じ値を返す。

use crate::types::{ImageFeatures, ProductAttributes, ProductRecord, ProductTags, VisualFeatures};

const KEYWORD_HIT: f64 = 0.3;
const TRUFFLE_BONUS: f64 = 1.0;
const TRUFFLE_FILE: &str = "truffles.jpg";
const GEMINI_NANKHATAI: f64 = 0.5;
const GEMINI_LOAF: f64 = 0.3;

const SMALL_FILE_MAX: u64 = 500_000;
const LARGE_FILE_MIN: u64 = 1_000_000;

/// 商品タグの種類に応じてスコアを計算
///
/// キーワード版はファイル名だけを見るので特徴の種類を問わない。
/// 属性版は視覚特徴がない画像（キーワード版・デコード失敗）に対して0。
pub fn score(image: &ImageFeatures, product: &ProductRecord) -> f64 {
    match &product.tags {
        ProductTags::Keywords { keywords } => keyword_score(&image.file_name, &product.name, keywords),
        ProductTags::Attributes(attrs) => match image.visual_features() {
            Some(visual) => visual_score(visual, image, &product.name, attrs),
            None => 0.0,
        },
    }
}

/// ファイル名キーワード照合
pub fn keyword_score(file_name: &str, product_name: &str, keywords: &[String]) -> f64 {
    let file_name = file_name.to_lowercase();
    let product_name = product_name.to_lowercase();
    let mut score = 0.0;

    for keyword in keywords {
        if file_name.contains(&keyword.to_lowercase()) {
            score += KEYWORD_HIT;
        }
    }

    if product_name.contains("truffle") && file_name.contains(TRUFFLE_FILE) {
        score += TRUFFLE_BONUS;
    }

    // gemini 生成画像はナンカタイとローフ用
    if file_name.contains("gemini") {
        if product_name.contains("nankhatai") {
            score += GEMINI_NANKHATAI;
        }
        if product_name.contains("loaf") {
            score += GEMINI_LOAF;
        }
    }

    score
}

/// 視覚特徴と属性タグの照合
pub fn visual_score(
    visual: &VisualFeatures,
    image: &ImageFeatures,
    product_name: &str,
    attrs: &ProductAttributes,
) -> f64 {
    let mut score = 0.0;

    // 種類
    match attrs.kind.as_str() {
        "chocolate" if visual.has_brown => score += 0.4,
        "muffin" if visual.is_square => score += 0.3,
        "cupcake" if visual.is_portrait => score += 0.3,
        "glasscake" | "jarcake" if visual.is_portrait => score += 0.4,
        "cake" if visual.is_landscape => score += 0.3,
        "loaf" if visual.is_landscape => score += 0.4,
        "brownie" if visual.has_brown && visual.is_square => score += 0.5,
        _ => {}
    }

    // フレーバー
    match attrs.flavor.as_deref() {
        Some("chocolate") if visual.has_brown => score += 0.3,
        Some("vanilla") if visual.has_white => score += 0.3,
        Some("strawberry") if visual.has_red_pink => score += 0.4,
        Some("pineapple") if visual.has_yellow => score += 0.4,
        _ => {}
    }

    // サイズ（ファイルサイズで代用）
    match attrs.size.as_deref() {
        Some("small") if image.file_size < SMALL_FILE_MAX => score += 0.1,
        Some("large") if image.file_size > LARGE_FILE_MIN => score += 0.1,
        _ => {}
    }

    if product_name.to_lowercase().contains("truffle") && image.file_name_lower() == TRUFFLE_FILE {
        score += TRUFFLE_BONUS;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::classify;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_keyword_hits_accumulate() {
        let score = keyword_score("chocolate_bar.jpg", "Chocolate Bar", &keywords(&["chocolate", "bar"]));
        assert!(approx(score, 0.6));
    }

    #[test]
    fn test_keyword_case_insensitive() {
        let score = keyword_score("CHOCOLATE.JPG", "Chocolate Bar", &keywords(&["Chocolate"]));
        assert!(approx(score, 0.3));
    }

    #[test]
    fn test_keyword_no_hit() {
        assert_eq!(keyword_score("vanilla.jpg", "Chocolate Bar", &keywords(&["chocolate", "bar"])), 0.0);
    }

    #[test]
    fn test_keyword_truffle_bonus() {
        let score = keyword_score("Truffles.jpg", "Truffle Cake (1kg)", &keywords(&["cake"]));
        // "truffle" キーワードなし、ボーナスのみ
        assert!(approx(score, 1.0));
    }

    #[test]
    fn test_keyword_gemini_bonus() {
        let name = "Gemini_Generated_Image_abc.png";
        assert!(approx(keyword_score(name, "Nankhatai (500gms)", &[]), 0.5));
        assert!(approx(keyword_score(name, "Vanilla Loaf", &[]), 0.3));
        assert_eq!(keyword_score(name, "Vanilla Muffin", &[]), 0.0);
    }

    #[test]
    fn test_adding_keyword_never_decreases_score() {
        let files = ["chocolate_bar.jpg", "vanilla.jpg", "gemini_loaf.png", "truffles.jpg"];
        let base = keywords(&["chocolate"]);
        let mut extended = base.clone();
        extended.push("loaf".to_string());

        for file in files {
            let before = keyword_score(file, "Chocolate Loaf", &base);
            let after = keyword_score(file, "Chocolate Loaf", &extended);
            assert!(after >= before, "{}: {} -> {}", file, before, after);
        }
    }

    #[test]
    fn test_visual_glasscake_chocolate() {
        let visual = classify(100, 300, &[[150, 110, 70, 255]]);
        let image = ImageFeatures::visual("glass.jpg", 800_000, Some(visual));
        let product = ProductRecord::with_attributes(
            "Chocolate Glasscake",
            ProductAttributes::new("glasscake").flavor("chocolate"),
        );
        // 縦長 0.4 + チョコ色 0.3
        assert!(approx(score(&image, &product), 0.7));
    }

    #[test]
    fn test_visual_brownie_requires_both() {
        let product = ProductRecord::with_attributes("Brownie (40gm)", ProductAttributes::new("brownie").size("small"));

        let square_brown = ImageFeatures::visual("a.jpg", 100, Some(classify(100, 100, &[[150, 110, 70, 255]])));
        let square_grey = ImageFeatures::visual("b.jpg", 100, Some(classify(100, 100, &[[20, 20, 20, 255]])));

        assert!(approx(score(&square_brown, &product), 0.6));
        assert!(approx(score(&square_grey, &product), 0.1));
    }

    #[test]
    fn test_visual_size_bonus() {
        let visual = classify(300, 100, &[]);
        let large = ProductRecord::with_attributes("Vanilla Cake (1kg)", ProductAttributes::new("cake").size("large"));
        let big_file = ImageFeatures::visual("big.jpg", 2_000_000, Some(visual.clone()));
        let mid_file = ImageFeatures::visual("mid.jpg", 700_000, Some(visual));
        assert!(approx(score(&big_file, &large), 0.4));
        assert!(approx(score(&mid_file, &large), 0.3));
    }

    #[test]
    fn test_visual_truffle_requires_exact_name() {
        let product = ProductRecord::with_attributes("Truffle Jarcake", ProductAttributes::new("jarcake").flavor("truffle"));
        let exact = ImageFeatures::visual("TRUFFLES.JPG", 1, Some(classify(300, 100, &[])));
        let prefixed = ImageFeatures::visual("my_truffles.jpg", 1, Some(classify(300, 100, &[])));
        assert!(approx(score(&exact, &product), 1.0));
        assert_eq!(score(&prefixed, &product), 0.0);
    }

    #[test]
    fn test_visual_decode_failure_scores_zero() {
        let product = ProductRecord::with_attributes("Truffle Jarcake", ProductAttributes::new("jarcake").flavor("truffle"));
        let broken = ImageFeatures::visual("truffles.jpg", 1, None);
        assert_eq!(score(&broken, &product), 0.0);
    }

    #[test]
    fn test_keyword_product_against_visual_features() {
        let product = ProductRecord::with_keywords("Chocolate Bar", &["chocolate"]);
        let image = ImageFeatures::visual("chocolate.png", 1, None);
        assert!(approx(score(&image, &product), 0.3));
    }
}
