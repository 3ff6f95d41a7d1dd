//! 抽せん結果モジュール
//!
//! 抽せんページから抽出したテキスト行列を検証済みの `DrawResult` に変換する。
//! 取得（HTML走査）は `fetch`、手入力フォールバックは `manual` に分離。

pub mod fetch;
pub mod manual;

use crate::error::{CheckerError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

/// 本数字の範囲
pub const MAIN_NUMBER_MIN: u8 = 1;
pub const MAIN_NUMBER_MAX: u8 = 69;

/// パワーボールの範囲
pub const POWERBALL_MIN: u8 = 1;
pub const POWERBALL_MAX: u8 = 26;

/// 1回分の抽せん結果
///
/// パース時に検証済み。構築後は不変。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawResult {
    /// 抽せん日（ページ表記をそのまま保持）
    pub date: String,
    /// 本数字5個（抽せんページの表示順）
    pub numbers: Vec<u8>,
    pub powerball: u8,
    /// Power Play倍率（例 "2X"。ページに無ければ空文字列）
    pub multiplier: String,
}

impl DrawResult {
    pub fn contains_main(&self, n: u8) -> bool {
        self.numbers.contains(&n)
    }
}

/// 抽せんブロックのテキスト行列をパースする
///
/// 行の構成（空行除去・トリム後）:
/// - 行0: 抽せん日
/// - 行1〜5: 本数字（1〜69、重複なし）
/// - 行6: パワーボール（1〜26）
/// - "power play" を含む行の次行があれば倍率（無くてもエラーにしない）
///
/// 行数不足・数値不正は `MalformedDraw`（実行全体を中断する致命的エラー）。
pub fn parse_draw_block(lines: &[String]) -> Result<DrawResult> {
    let lines: Vec<&str> = lines
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();

    if lines.len() < 7 {
        return Err(CheckerError::MalformedDraw(format!(
            "行数が不足しています（{}行、最低7行必要）",
            lines.len()
        )));
    }

    let date = lines[0].to_string();

    let mut numbers = Vec::with_capacity(5);
    for &line in &lines[1..6] {
        let n = parse_number_in_range(line, MAIN_NUMBER_MIN, MAIN_NUMBER_MAX, "本数字")?;
        if numbers.contains(&n) {
            return Err(CheckerError::MalformedDraw(format!(
                "本数字が重複しています: {}",
                n
            )));
        }
        numbers.push(n);
    }

    let powerball = parse_number_in_range(lines[6], POWERBALL_MIN, POWERBALL_MAX, "パワーボール")?;

    let multiplier = extract_multiplier(&lines);

    Ok(DrawResult {
        date,
        numbers,
        powerball,
        multiplier,
    })
}

fn parse_number_in_range(text: &str, min: u8, max: u8, label: &str) -> Result<u8> {
    let n: u8 = text.parse().map_err(|_| {
        CheckerError::MalformedDraw(format!("{}が数値ではありません: {:?}", label, text))
    })?;
    if n < min || n > max {
        return Err(CheckerError::MalformedDraw(format!(
            "{}が範囲外です: {}（{}〜{}）",
            label, n, min, max
        )));
    }
    Ok(n)
}

/// "power play" 行の次行を倍率として取り出す
///
/// 見つからない場合は空文字列（倍率なしは失敗ではない）。
fn extract_multiplier(lines: &[&str]) -> String {
    for (i, line) in lines.iter().enumerate() {
        if line.to_lowercase().contains("power play") {
            if let Some(&next) = lines.get(i + 1) {
                return normalize_multiplier(next);
            }
        }
    }
    String::new()
}

/// 倍率表記を "NX" 形式に揃える
///
/// "2x" / "2 X" / "×2" などの表記揺れを吸収。パターン外はそのまま返す。
fn normalize_multiplier(text: &str) -> String {
    lazy_static! {
        static ref MULTIPLIER_RE: Regex = Regex::new(r"(?i)^(?:[x×]\s*)?(\d{1,2})\s*[x×]?$").unwrap();
    }
    if let Some(caps) = MULTIPLIER_RE.captures(text.trim()) {
        if let Some(digits) = caps.get(1) {
            return format!("{}X", digits.as_str());
        }
    }
    text.trim().to_string()
}
