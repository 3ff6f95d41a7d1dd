//! 抽せんページの取得とHTML走査
//!
//! 公式ページから最新の抽せんブロックを探し、トリム済みの
//! 非空テキスト行列として返す。パース（検証）は `draw::parse_draw_block` が行う。
//!
//! セレクタは優先順に試し、最初に7行以上のテキストが取れたブロックを採用する。
//! ページ上に複数回分のカードが並んでいても先頭（最新）の1ブロックのみ使う。

use crate::error::{CheckerError, Result};
use scraper::{Html, Selector};
use std::time::Duration;

/// 既定の抽せんページURL
pub const DEFAULT_DRAW_URL: &str = "https://www.powerball.com/";

/// 抽せんブロック候補のセレクタ（優先順）
const DRAW_BLOCK_SELECTORS: &[&str] = &[
    "#numbers .card",
    ".winning-numbers-card",
    ".game-ball-group",
];

/// 抽せんページを取得して最新ブロックのテキスト行列を返す
pub async fn fetch_draw_lines(url: &str, timeout_seconds: u64) -> Result<Vec<String>> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(concat!("powerball-checker/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| CheckerError::DrawFetch(format!("HTTPクライアント初期化失敗: {}", e)))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| CheckerError::DrawFetch(format!("{}: {}", url, e)))?;

    if !response.status().is_success() {
        return Err(CheckerError::DrawFetch(format!(
            "{}: HTTP {}",
            url,
            response.status()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| CheckerError::DrawFetch(format!("本文の読み込み失敗: {}", e)))?;

    extract_draw_lines(&body)
}

/// HTMLから最新の抽せんブロックのテキスト行列を抽出する
pub fn extract_draw_lines(html: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);

    for selector_str in DRAW_BLOCK_SELECTORS {
        let selector = Selector::parse(selector_str)
            .map_err(|e| CheckerError::DrawFetch(format!("セレクタ不正 {:?}: {}", selector_str, e)))?;

        // 最初にマッチしたブロック＝最新の抽せん回
        if let Some(block) = document.select(&selector).next() {
            let lines = text_lines(block);
            if lines.len() >= 7 {
                return Ok(lines);
            }
        }
    }

    Err(CheckerError::DrawFetch(
        "抽せんブロックが見つかりません（ページ構成が変わった可能性）".to_string(),
    ))
}

fn text_lines(element: scraper::ElementRef<'_>) -> Vec<String> {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
