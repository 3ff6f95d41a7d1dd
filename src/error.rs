//! エラー型定義
//!
//! 致命的エラーと回復可能エラーの区別:
//! - `MalformedDraw` / `DrawFetch`: 当せん番号が確定できないため実行全体を中断
//! - `Recognition`: 画像1枚の認識失敗。サマリに記録してバッチは続行
//! - `InvalidTicket`: チケット1口の検証失敗。その口だけ除外して続行

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("抽せん結果の取得に失敗: {0}")]
    DrawFetch(String),

    #[error("抽せん結果が不正: {0}")]
    MalformedDraw(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("画像が見つかりません: {0}")]
    NoImagesFound(String),

    #[error("AI認識エラー: {0}")]
    Recognition(String),

    #[error("AIレスポンスのパースに失敗: {0}")]
    ResponseParse(String),

    #[error("チケットが不正: {0}")]
    InvalidTicket(String),

    #[error("JSON解析エラー: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CheckerError>;
