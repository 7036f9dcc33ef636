//! 商品カタログ
//!
//! 照合関数に渡す不変のカタログ。組み込みプリセット（キーワード版/属性版）と
//! JSONファイルからの読み込みに対応する。

use crate::error::{Error, Result};
use crate::types::{ProductAttributes, ProductRecord, Strategy};
use std::collections::HashSet;

/// 商品カタログ（定義順を保持）
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<ProductRecord>,
}

impl Catalog {
    /// 商品名の重複・空文字を検査してカタログを作成
    pub fn new(products: Vec<ProductRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for product in &products {
            if product.name.trim().is_empty() {
                return Err(Error::EmptyProductName);
            }
            if !seen.insert(product.name.as_str()) {
                return Err(Error::DuplicateProduct(product.name.clone()));
            }
        }
        Ok(Self { products })
    }

    /// 照合方式に対応する組み込みカタログ
    pub fn for_strategy(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Keyword => Self::bakehouse_keywords(),
            Strategy::Visual => Self::bakehouse_attributes(),
        }
    }

    /// JSON配列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let products: Vec<ProductRecord> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// カタログ定義順のインデックス
    pub fn position(&self, name: &str) -> Option<usize> {
        self.products.iter().position(|p| p.name == name)
    }

    /// キーワード版カタログ
    pub fn bakehouse_keywords() -> Self {
        let kw = ProductRecord::with_keywords;
        Self {
            products: vec![
                // チョコレート
                kw("Small Chocolate", &["chocolate", "small", "piece", "bar"]),
                kw("Chocolate Bar", &["chocolate", "bar", "rectangular"]),
                kw("Nut Chocolate Bar", &["chocolate", "bar", "nuts", "almonds", "peanuts"]),
                // マフィン
                kw("Vanilla Muffin", &["muffin", "vanilla", "round", "baked"]),
                kw("Chocolate Muffin", &["muffin", "chocolate", "dark", "brown"]),
                // カップケーキ
                kw("Vanilla Cupcake", &["cupcake", "vanilla", "frosting", "icing", "white"]),
                kw("Chocolate Cupcake", &["cupcake", "chocolate", "frosting", "brown"]),
                // グラスケーキ
                kw("Vanilla Glasscake", &["glass", "vanilla", "layered", "dessert", "jar"]),
                kw("Strawberry Glasscake", &["glass", "strawberry", "red", "pink", "fruit"]),
                kw("Pineapple Glasscake", &["glass", "pineapple", "yellow", "tropical", "fruit"]),
                kw("Chocolate Glasscake", &["glass", "chocolate", "brown", "dark"]),
                kw("Truffle Glasscake", &["glass", "truffle", "chocolate", "premium", "dark"]),
                // ジャーケーキ
                kw("Vanilla Jarcake", &["jar", "vanilla", "layered", "white", "cream"]),
                kw("Strawberry Jarcake", &["jar", "strawberry", "red", "pink", "fruit"]),
                kw("Pineapple Jarcake", &["jar", "pineapple", "yellow", "tropical"]),
                kw("Chocolate Jarcake", &["jar", "chocolate", "brown", "dark"]),
                kw("Truffle Jarcake", &["jar", "truffle", "chocolate", "premium"]),
                // チーズケーキ
                kw("Blueberry Cheesecake", &["cheesecake", "blueberry", "blue", "purple", "berries"]),
                kw("Chocolate Cheesecake", &["cheesecake", "chocolate", "brown"]),
                // ブラウニー
                kw("Brownie (40gm)", &["brownie", "square", "chocolate", "small", "piece"]),
                kw("Brownie (500gm)", &["brownie", "large", "chocolate", "square", "tray"]),
                // ケーキ
                kw("Vanilla Cake (500gm)", &["cake", "vanilla", "white", "cream", "layered"]),
                kw("Vanilla Cake (1kg)", &["cake", "vanilla", "white", "large", "layered"]),
                kw("Vanilla Cake (Bento)", &["cake", "vanilla", "bento", "small", "decorated", "cute"]),
                kw("Strawberry Cake (500gm)", &["cake", "strawberry", "red", "pink", "fruit", "layered"]),
                kw("Strawberry Cake (1kg)", &["cake", "strawberry", "red", "large", "layered"]),
                kw("Strawberry Cake (Bento)", &["cake", "strawberry", "bento", "small", "decorated"]),
                kw("Chocolate Cake (500gm)", &["cake", "chocolate", "brown", "dark", "layered"]),
                kw("Chocolate Cake (1kg)", &["cake", "chocolate", "brown", "large", "layered"]),
                kw("Chocolate Cake (Bento)", &["cake", "chocolate", "bento", "small", "decorated"]),
                kw("Pineapple Cake (500gm)", &["cake", "pineapple", "yellow", "tropical", "layered"]),
                kw("Pineapple Cake (1kg)", &["cake", "pineapple", "yellow", "large", "layered"]),
                kw("Pineapple Cake (Bento)", &["cake", "pineapple", "bento", "small", "decorated"]),
                kw("Truffle Cake (500gm)", &["cake", "truffle", "chocolate", "premium", "dark", "layered"]),
                kw("Truffle Cake (1kg)", &["cake", "truffle", "chocolate", "premium", "large", "layered"]),
                kw("Truffle Cake (Bento)", &["cake", "truffle", "bento", "small", "premium", "decorated"]),
                // ローフ
                kw("Chocolate Loaf", &["loaf", "chocolate", "bread", "rectangular", "brown"]),
                kw("Vanilla Loaf", &["loaf", "vanilla", "bread", "rectangular", "white", "light"]),
                kw("Tooti Frooti Loaf", &["loaf", "tooti", "frooti", "colorful", "multicolor", "bread"]),
                // ナンカタイ
                kw("Nankhatai (500gms)", &["nankhatai", "cookie", "biscuit", "indian", "traditional", "round"]),
            ],
        }
    }

    /// 属性版カタログ
    pub fn bakehouse_attributes() -> Self {
        let at = ProductRecord::with_attributes;
        let p = ProductAttributes::new;
        Self {
            products: vec![
                at("Small Chocolate", p("chocolate").size("small")),
                at("Chocolate Bar", p("chocolate").size("medium")),
                at("Nut Chocolate Bar", p("chocolate").size("medium").nuts()),
                at("Vanilla Muffin", p("muffin").flavor("vanilla")),
                at("Chocolate Muffin", p("muffin").flavor("chocolate")),
                at("Vanilla Cupcake", p("cupcake").flavor("vanilla")),
                at("Chocolate Cupcake", p("cupcake").flavor("chocolate")),
                at("Vanilla Glasscake", p("glasscake").flavor("vanilla")),
                at("Strawberry Glasscake", p("glasscake").flavor("strawberry")),
                at("Pineapple Glasscake", p("glasscake").flavor("pineapple")),
                at("Chocolate Glasscake", p("glasscake").flavor("chocolate")),
                at("Truffle Glasscake", p("glasscake").flavor("truffle")),
                at("Vanilla Jarcake", p("jarcake").flavor("vanilla")),
                at("Strawberry Jarcake", p("jarcake").flavor("strawberry")),
                at("Pineapple Jarcake", p("jarcake").flavor("pineapple")),
                at("Chocolate Jarcake", p("jarcake").flavor("chocolate")),
                at("Truffle Jarcake", p("jarcake").flavor("truffle")),
                at("Blueberry Cheesecake", p("cheesecake").flavor("blueberry")),
                at("Chocolate Cheesecake", p("cheesecake").flavor("chocolate")),
                at("Brownie (40gm)", p("brownie").size("small")),
                at("Brownie (500gm)", p("brownie").size("large")),
                at("Vanilla Cake (500gm)", p("cake").flavor("vanilla").size("medium")),
                at("Vanilla Cake (1kg)", p("cake").flavor("vanilla").size("large")),
                at("Vanilla Cake (Bento)", p("cake").flavor("vanilla").size("small").style("bento")),
                at("Strawberry Cake (500gm)", p("cake").flavor("strawberry").size("medium")),
                at("Strawberry Cake (1kg)", p("cake").flavor("strawberry").size("large")),
                at("Strawberry Cake (Bento)", p("cake").flavor("strawberry").size("small").style("bento")),
                at("Chocolate Cake (500gm)", p("cake").flavor("chocolate").size("medium")),
                at("Chocolate Cake (1kg)", p("cake").flavor("chocolate").size("large")),
                at("Chocolate Cake (Bento)", p("cake").flavor("chocolate").size("small").style("bento")),
                at("Pineapple Cake (500gm)", p("cake").flavor("pineapple").size("medium")),
                at("Pineapple Cake (1kg)", p("cake").flavor("pineapple").size("large")),
                at("Pineapple Cake (Bento)", p("cake").flavor("pineapple").size("small").style("bento")),
                at("Truffle Cake (500gm)", p("cake").flavor("truffle").size("medium")),
                at("Truffle Cake (1kg)", p("cake").flavor("truffle").size("large")),
                at("Truffle Cake (Bento)", p("cake").flavor("truffle").size("small").style("bento")),
                at("Chocolate Loaf", p("loaf").flavor("chocolate")),
                at("Vanilla Loaf", p("loaf").flavor("vanilla")),
                at("Tooti Frooti Loaf", p("loaf").flavor("tooti_frooti")),
                at("Nankhatai (500gms)", p("nankhatai")),
            ],
        }
    }
}
