//! Bakehouse Matcher
//!
//! 作業フォルダ内の写真をベーカリー商品カタログに1対1で割り当て、
//! 商品名→ファイル名の対応表JSONを出力する。

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod matcher;
pub mod scanner;
pub mod status;
