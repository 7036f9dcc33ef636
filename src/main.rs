use bakehouse_common::{Catalog, MatchStatus, Strategy};
use bakehouse_matcher::{analyzer, cli, config, error, export, matcher, scanner, status};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;

    match cli.command.unwrap_or_else(Commands::default_match) {
        Commands::Match { folder, strategy, output, catalog } => {
            let strategy = strategy.unwrap_or(config.strategy);
            let catalog = load_catalog(catalog.as_deref(), strategy)?;
            let output = output.unwrap_or_else(|| folder.join(&config.output_file));

            println!("{}", "=".repeat(100));
            println!("🧁 bakehouse-matcher - 画像と商品の照合 ({})", strategy);
            println!("{}\n", "=".repeat(100));

            let options = matcher::MatchOptions {
                strategy,
                policy: config.policy(strategy),
                dominant_colors: config.dominant_colors,
            };
            let report = matcher::match_folder(&folder, &catalog, &options)?;

            println!("{}枚の画像を検出", report.images_found);
            println!("{}件の商品\n", report.products_found);

            for assignment in &report.assignments {
                println!("{}", matcher::format_assignment(assignment));
            }

            export::write_mapping(&report.mapping, &output)?;

            println!("\n✔ 対応表を保存: {}", output.display());
            println!(
                "画像: {} / 商品: {} / 割り当て: {}",
                report.images_found,
                report.products_found,
                report.mapping.len()
            );
            let uncertain = report.count(MatchStatus::LowConfidence) + report.count(MatchStatus::Fallback);
            if uncertain > 0 {
                println!("⚠ 要確認: {}件", uncertain);
            }
        }

        Commands::Status { folder, catalog } => {
            let catalog = load_catalog(catalog.as_deref(), Strategy::Keyword)?;
            let images: Vec<String> = scanner::scan_folder(&folder)?
                .into_iter()
                .map(|img| img.file_name)
                .collect();

            println!("商品数: {}", catalog.len());
            println!("画像数: {}\n", images.len());

            let report = status::check_status(&catalog, &images);

            println!("リネーム済み画像との一致:");
            println!("{}", "-".repeat(80));
            if report.hits.is_empty() {
                println!("商品名に一致する画像はありません");
            }
            for hit in &report.hits {
                println!("✓ {:40} → {} ({})", hit.product, hit.image, hit.kind);
            }

            println!("\n画像が必要な商品:");
            println!("{}", "-".repeat(80));
            for (product, suggested) in &report.suggestions {
                println!("  {:40} → 推奨: {}", product, suggested);
            }

            println!("\nリネーム済み画像:");
            println!("{}", "-".repeat(80));
            for image in &report.renamed_images {
                println!("  - {}", image);
            }
        }

        Commands::Features { folder } => {
            let images = scanner::scan_folder(&folder)?;
            println!("{}枚の画像を検出\n", images.len());

            let features = analyzer::extract_features(&images, Strategy::Visual, config.dominant_colors);
            for f in &features {
                match f.visual_features() {
                    Some(v) => println!(
                        "{:50} {:>5}x{:<5} ratio {:.2} {}{}{} | {}{}{}{} | {} bytes",
                        f.file_name,
                        v.width,
                        v.height,
                        v.aspect_ratio,
                        flag(v.is_landscape, "横"),
                        flag(v.is_portrait, "縦"),
                        flag(v.is_square, "正"),
                        flag(v.has_brown, "茶"),
                        flag(v.has_white, "白"),
                        flag(v.has_red_pink, "赤"),
                        flag(v.has_yellow, "黄"),
                        f.file_size,
                    ),
                    None => println!("{:50} (解析失敗) {} bytes", f.file_name, f.file_size),
                }
            }
        }

        Commands::Config { set_strategy, set_output, show } => {
            let mut config = config;

            if let Some(strategy) = set_strategy {
                config.strategy = strategy;
                config.save()?;
                println!("✔ 照合方式を設定しました: {}", strategy);
            }

            if let Some(output) = set_output {
                config.output_file = output;
                config.save()?;
                println!("✔ 出力ファイル名を設定しました: {}", config.output_file);
            }

            if show {
                println!("設定:");
                println!("  照合方式: {}", config.strategy);
                println!("  出力ファイル: {}", config.output_file);
                println!("  信頼度閾値: {}", config.confidence_threshold);
                println!("  主要色数: {}", config.dominant_colors);
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// 指定があればJSONカタログ、なければ照合方式の組み込みカタログ
fn load_catalog(path: Option<&Path>, strategy: Strategy) -> Result<Catalog> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(error::MatcherError::FileNotFound(path.display().to_string()));
            }
            let catalog = Catalog::from_file(path)?;
            tracing::info!(path = %path.display(), products = catalog.len(), "カタログを読み込み");
            Ok(catalog)
        }
        None => Ok(Catalog::for_strategy(strategy)),
    }
}

fn flag(value: bool, label: &str) -> &str {
    if value { label } else { "・" }
}
