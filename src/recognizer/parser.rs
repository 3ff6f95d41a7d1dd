//! AIレスポンスパーサー
//!
//! AI CLIのレスポンスからJSON配列を抽出し、チケット候補をパースする。
//!
//! 抽出優先順位:
//! 1. ```json ... ``` ブロック
//! 2. 生の [...] 配列
//! 3. エラー

use crate::error::{CheckerError, Result};
use crate::recognizer::types::RawTicket;

/// レスポンスからJSON部分を抽出する
pub fn extract_json(response: &str) -> Result<&str> {
    // ```json ... ``` ブロックを探す
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + 7; // "```json" の長さ
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    // 生の [...] を探す
    if let Some(start) = response.find('[') {
        if let Some(end) = response.rfind(']') {
            if end >= start {
                return Ok(&response[start..=end]);
            }
        }
    }

    Err(CheckerError::ResponseParse(
        "JSONが見つかりません".to_string(),
    ))
}

/// チケット認識レスポンスをパースする
///
/// 戻り値は未検証の `RawTicket` 列。検証（範囲・重複・個数）は
/// 集計側の `Ticket::from_raw` で行う。
pub fn parse_ticket_response(response: &str) -> Result<Vec<RawTicket>> {
    let json_str = extract_json(response)?;
    let tickets: Vec<RawTicket> = serde_json::from_str(json_str.trim())
        .map_err(|e| CheckerError::ResponseParse(format!("チケットJSONパースエラー: {}", e)))?;
    Ok(tickets)
}
