use bakehouse_common::Strategy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bakehouse-matcher")]
#[command(about = "ベーカリー商品カタログと写真ファイルの自動対応付けツール", long_about = None)]
pub struct Cli {
    /// 省略時は現在のフォルダで照合を実行
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像を商品に割り当てて対応表JSONを出力
    Match {
        /// 画像フォルダ
        #[arg(default_value = ".")]
        folder: PathBuf,

        /// 照合方式 (keyword/visual)
        #[arg(short, long)]
        strategy: Option<Strategy>,

        /// 出力JSONファイル（デフォルト: 画像フォルダ/image_product_mapping.json）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// カスタムカタログ（JSON）
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// リネーム済み画像と未対応商品を一覧表示
    Status {
        /// 画像フォルダ
        #[arg(default_value = ".")]
        folder: PathBuf,

        /// カスタムカタログ（JSON）
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// 各画像の視覚特徴を表示
    Features {
        /// 画像フォルダ
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// 既定の照合方式を設定
        #[arg(long)]
        set_strategy: Option<Strategy>,

        /// 既定の出力ファイル名を設定
        #[arg(long)]
        set_output: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

impl Commands {
    /// 引数なし実行時のコマンド
    pub fn default_match() -> Self {
        Commands::Match {
            folder: PathBuf::from("."),
            strategy: None,
            output: None,
            catalog: None,
        }
    }
}
