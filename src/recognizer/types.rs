//! チケット認識結果の型定義
//!
//! - RawTicket: AIレスポンスそのままの緩い型（欠損・範囲外を許容）
//! - Ticket: 検証済みの型（照合に使えることが保証される）
//!
//! 緩いJSONを信用せず、必ず `Ticket::from_raw` の検証境界を通す。

use crate::error::{CheckerError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::draw::{MAIN_NUMBER_MAX, MAIN_NUMBER_MIN, POWERBALL_MAX, POWERBALL_MIN};

/// AI認識の生出力（1口分）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawTicket {
    /// 行ラベル（"A" や "Line B" など表記揺れあり）
    pub line_id: String,
    pub main_numbers: Vec<i64>,
    pub powerball: i64,
}

/// 検証済みチケット（1口分）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub line_id: String,
    /// 本数字5個（重複なし、1〜69）
    pub main_numbers: BTreeSet<u8>,
    pub powerball: u8,
}

impl Ticket {
    /// 生データを検証してチケットを構築する
    ///
    /// 失敗は `InvalidTicket`（その口だけ除外される回復可能エラー）。
    pub fn from_raw(raw: &RawTicket) -> Result<Self> {
        if raw.main_numbers.len() != 5 {
            return Err(CheckerError::InvalidTicket(format!(
                "本数字が5個ではありません（{}個）",
                raw.main_numbers.len()
            )));
        }

        let mut main_numbers = BTreeSet::new();
        for &n in &raw.main_numbers {
            let n = in_range(n, MAIN_NUMBER_MIN, MAIN_NUMBER_MAX, "本数字")?;
            if !main_numbers.insert(n) {
                return Err(CheckerError::InvalidTicket(format!(
                    "本数字が重複しています: {}",
                    n
                )));
            }
        }

        let powerball = in_range(raw.powerball, POWERBALL_MIN, POWERBALL_MAX, "パワーボール")?;

        Ok(Ticket {
            line_id: normalize_line_id(&raw.line_id),
            main_numbers,
            powerball,
        })
    }
}

fn in_range(n: i64, min: u8, max: u8, label: &str) -> Result<u8> {
    if n < min as i64 || n > max as i64 {
        return Err(CheckerError::InvalidTicket(format!(
            "{}が範囲外です: {}（{}〜{}）",
            label, n, min, max
        )));
    }
    Ok(n as u8)
}

/// 行ラベルの表記揺れを統一する
///
/// "Line A" / "a." / " B " → "A" / "A" / "B"。パターン外はトリムのみ。
pub fn normalize_line_id(raw: &str) -> String {
    lazy_static! {
        static ref LINE_ID_RE: Regex =
            Regex::new(r"(?i)^(?:line\s*)?([A-Z0-9]{1,3})\.?$").unwrap();
    }
    let trimmed = raw.trim();
    if let Some(caps) = LINE_ID_RE.captures(trimmed) {
        caps[1].to_uppercase()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(line_id: &str, main_numbers: &[i64], powerball: i64) -> RawTicket {
        RawTicket {
            line_id: line_id.to_string(),
            main_numbers: main_numbers.to_vec(),
            powerball,
        }
    }

    #[test]
    fn test_from_raw_valid() {
        let ticket = Ticket::from_raw(&raw("A", &[9, 29, 38, 40, 52], 23)).unwrap();
        assert_eq!(ticket.line_id, "A");
        assert_eq!(ticket.main_numbers.len(), 5);
        assert!(ticket.main_numbers.contains(&29));
        assert_eq!(ticket.powerball, 23);
    }

    #[test]
    fn test_from_raw_wrong_count() {
        let result = Ticket::from_raw(&raw("A", &[1, 2, 3, 4], 5));
        assert!(matches!(result, Err(CheckerError::InvalidTicket(_))));
    }

    #[test]
    fn test_from_raw_duplicate_number() {
        let result = Ticket::from_raw(&raw("A", &[7, 7, 30, 40, 50], 5));
        assert!(matches!(result, Err(CheckerError::InvalidTicket(_))));
    }

    #[test]
    fn test_from_raw_out_of_range_main() {
        let result = Ticket::from_raw(&raw("A", &[0, 2, 3, 4, 5], 5));
        assert!(matches!(result, Err(CheckerError::InvalidTicket(_))));

        let result = Ticket::from_raw(&raw("A", &[70, 2, 3, 4, 5], 5));
        assert!(matches!(result, Err(CheckerError::InvalidTicket(_))));
    }

    #[test]
    fn test_from_raw_out_of_range_powerball() {
        let result = Ticket::from_raw(&raw("A", &[1, 2, 3, 4, 5], 27));
        assert!(matches!(result, Err(CheckerError::InvalidTicket(_))));
    }

    #[test]
    fn test_raw_ticket_lenient_deserialize() {
        // フィールド欠損はデフォルト値で受ける（検証はfrom_rawで行う）
        let raw: RawTicket = serde_json::from_str(r#"{"lineId": "A"}"#).unwrap();
        assert_eq!(raw.line_id, "A");
        assert!(raw.main_numbers.is_empty());
        assert_eq!(raw.powerball, 0);
    }

    #[test]
    fn test_normalize_line_id() {
        assert_eq!(normalize_line_id("Line A"), "A");
        assert_eq!(normalize_line_id("a."), "A");
        assert_eq!(normalize_line_id(" B "), "B");
        assert_eq!(normalize_line_id("line c"), "C");
        assert_eq!(normalize_line_id("1行目"), "1行目"); // パターン外はそのまま
    }
}
