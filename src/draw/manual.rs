//! 抽せん結果の対話式手入力
//!
//! ページ取得が使えない場合のフォールバック。入力値は取得時と同じ
//! `parse_draw_block` を通すため、検証ルールは完全に共通。

use crate::draw::{self, DrawResult};
use crate::error::{CheckerError, Result};
use dialoguer::Input;

/// 対話式で抽せん結果を入力する
pub fn prompt_draw_result() -> Result<DrawResult> {
    println!("抽せん結果を手入力します（公式サイトの最新回を転記してください）");

    let mut lines: Vec<String> = Vec::new();

    let date: String = ask("抽せん日（例: Wed, Sep 3, 2025）")?;
    lines.push(date);

    for i in 1..=5 {
        let number: String = ask(&format!(
            "本数字 {}/5（{}〜{}）",
            i,
            draw::MAIN_NUMBER_MIN,
            draw::MAIN_NUMBER_MAX
        ))?;
        lines.push(number);
    }

    let powerball: String = ask(&format!(
        "パワーボール（{}〜{}）",
        draw::POWERBALL_MIN,
        draw::POWERBALL_MAX
    ))?;
    lines.push(powerball);

    let multiplier: String = Input::new()
        .with_prompt("Power Play倍率（空欄可）")
        .allow_empty(true)
        .interact_text()
        .map_err(input_error)?;
    if !multiplier.trim().is_empty() {
        lines.push("Power Play".to_string());
        lines.push(multiplier);
    }

    draw::parse_draw_block(&lines)
}

fn ask(prompt: &str) -> Result<String> {
    Input::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(input_error)
}

fn input_error(e: dialoguer::Error) -> CheckerError {
    CheckerError::Config(format!("対話入力エラー: {}", e))
}
