use clap::Parser;
use powerball_checker::{batch, cli, config, draw, error, recognizer, report, scanner};

use cli::{Cli, Commands};
use config::Config;
use error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Check {
            folder,
            url,
            manual,
            output,
        } => {
            println!("🎱 powerball-checker - 当せん確認\n");

            // 1. 抽せん結果の取得（失敗したら照合の基準が無いので即中断）
            println!("[1/4] 抽せん結果を取得中...");
            let draw_result = load_draw(&config, url.as_deref(), manual).await?;
            println!("✔ {} の抽せん結果を取得\n", draw_result.date);

            // 2. レシートスキャン
            println!("[2/4] レシートをスキャン中...");
            let images = scanner::scan_folder(&folder)?;
            println!("✔ {}枚のレシートを検出\n", images.len());

            if images.is_empty() {
                return Err(error::CheckerError::NoImagesFound(
                    folder.display().to_string(),
                ));
            }

            // 3. AI認識（1枚の失敗はバッチを止めない）
            println!("[3/4] AI認識中...");
            let recognized =
                recognizer::recognize_images(&images, cli.ai_provider, cli.verbose).await;
            println!("✔ 認識完了\n");

            // 4. 照合・集計
            println!("[4/4] 照合中...\n");
            let summary = batch::aggregate(&draw_result, recognized);

            report::print_summary(&summary);

            if let Some(output) = output {
                report::save_summary_json(&summary, &output)?;
                println!("\n✔ サマリを保存: {}", output.display());
            }
        }

        Commands::Draw { url, manual } => {
            println!("🎱 powerball-checker - 抽せん結果\n");
            let draw_result = load_draw(&config, url.as_deref(), manual).await?;
            report::print_draw(&draw_result);
        }

        Commands::Config { set_draw_url, show } => {
            let mut config = config;

            if let Some(url) = set_draw_url {
                config.set_draw_url(url)?;
                println!("✔ 抽せんページURLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  抽せんページURL: {}", config.draw_url());
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

/// 抽せん結果を取得してパースする
///
/// 手入力・取得のどちらも同じ `parse_draw_block` の検証を通る。
async fn load_draw(config: &Config, url: Option<&str>, manual: bool) -> Result<draw::DrawResult> {
    if manual {
        return draw::manual::prompt_draw_result();
    }

    let url = url
        .map(str::to_string)
        .unwrap_or_else(|| config.draw_url());
    let lines = draw::fetch::fetch_draw_lines(&url, config.timeout_seconds).await?;
    draw::parse_draw_block(&lines)
}
