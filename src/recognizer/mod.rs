//! チケット認識モジュール
//!
//! レシート画像ごとにAI CLIを呼び出し、チケット候補を読み取る。
//!
//! - 呼び出しは1枚ずつ順次（外部サービスのレート制限対策）
//! - 結果は入力の画像順のまま返す（集計側は順序保持を前提にする）
//! - 1枚の失敗はその画像の `Failed` マーカーになるだけで、残りの処理は続行

pub mod parser;
pub mod prompt;
pub mod types;

pub use types::{RawTicket, Ticket};

use crate::ai_provider::AiProvider;
use crate::error::{CheckerError, Result};
use crate::scanner::ImageInfo;
use indicatif::ProgressBar;
use tokio::process::Command;

/// 1画像分の認識結果
///
/// 失敗マーカーはここで閉じ、バッチ全体へは伝播させない。
#[derive(Debug, Clone)]
pub enum RecognitionOutcome {
    /// 読み取れたチケット候補（未検証、印字順）
    Tickets(Vec<RawTicket>),
    /// 画像単位の認識失敗
    Failed(String),
}

/// 全画像を順次認識する
///
/// 戻り値は入力と同じ画像順の `(ファイル名, 認識結果)` 列。
pub async fn recognize_images(
    images: &[ImageInfo],
    provider: AiProvider,
    verbose: bool,
) -> Vec<(String, RecognitionOutcome)> {
    let progress = ProgressBar::new(images.len() as u64);
    let mut results = Vec::with_capacity(images.len());

    for image in images {
        progress.set_message(image.file_name.clone());

        let outcome = match recognize_image(image, provider, verbose).await {
            Ok(tickets) => RecognitionOutcome::Tickets(tickets),
            Err(e) => {
                if verbose {
                    progress.println(format!("  ✗ {}: {}", image.file_name, e));
                }
                RecognitionOutcome::Failed(e.to_string())
            }
        };

        results.push((image.file_name.clone(), outcome));
        progress.inc(1);
    }

    progress.finish_and_clear();
    results
}

/// 1枚の画像を認識する
pub async fn recognize_image(
    image: &ImageInfo,
    provider: AiProvider,
    verbose: bool,
) -> Result<Vec<RawTicket>> {
    // AI CLIには絶対パスで渡す
    let abs_path = std::fs::canonicalize(&image.path)?;
    let image_path = abs_path.display().to_string().replace('\\', "/");

    let raw_prompt = format!(
        "Read the following image file and analyze it: {}\n\n{}",
        image_path,
        prompt::build_ticket_prompt(&image.file_name)
    );
    let full_prompt = raw_prompt.replace('\n', " ");

    if verbose {
        println!("  [認識] {} プロンプト長: {} chars", image.file_name, full_prompt.len());
    }

    let response = run_ai_cli(provider, &full_prompt).await?;

    if verbose {
        println!("  [認識] {} レスポンス長: {} chars", image.file_name, response.len());
    }

    parser::parse_ticket_response(&response)
}

async fn run_ai_cli(provider: AiProvider, prompt: &str) -> Result<String> {
    // Windowsではcmd /c経由で呼び出す
    #[cfg(windows)]
    let output = {
        let escaped = prompt.replace('"', "\\\"");
        let mut args = vec!["/c", provider.command_name()];
        args.extend(provider.build_args(&escaped));
        Command::new("cmd")
            .args(&args)
            .output()
            .await
            .map_err(|e| CheckerError::Recognition(format!("{} CLI実行エラー: {}", provider, e)))?
    };

    #[cfg(not(windows))]
    let output = Command::new(provider.command_name())
        .args(provider.build_args(prompt))
        .output()
        .await
        .map_err(|e| CheckerError::Recognition(format!("{} CLI実行エラー: {}", provider, e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CheckerError::Recognition(format!(
            "{} CLI failed (code {:?}): {}",
            provider,
            output.status.code(),
            stderr
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
