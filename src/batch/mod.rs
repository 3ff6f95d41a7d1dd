//! バッチ集計モジュール
//!
//! 画像ごとの認識結果を検証・照合し、1回の実行分のサマリにまとめる。
//!
//! 失敗の扱い:
//! - 画像単位の認識失敗 → その画像を失敗マーカーとして記録し、残りは続行
//! - チケット単位の検証失敗 → その口だけ除外（除外数は画像ごとに記録）
//! - 画像・チケットの順序は入力順のまま。等級での並べ替えはしない

use crate::draw::DrawResult;
use crate::matcher::{self, MatchOutcome};
use crate::recognizer::{RecognitionOutcome, Ticket};
use serde::Serialize;

/// 画像1枚分の集計結果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum ImageStatus {
    /// 照合済み（検証で除外した口数も保持）
    #[serde(rename_all = "camelCase")]
    Classified {
        outcomes: Vec<MatchOutcome>,
        dropped: usize,
    },
    /// チケットが1口も読み取れなかった
    NoTickets,
    /// 認識失敗
    Failed { reason: String },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageReport {
    pub image_id: String,
    #[serde(flatten)]
    pub status: ImageStatus,
}

/// バッチ全体のサマリ
///
/// `aggregate` の戻り値。構築後は変更されない。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub draw: DrawResult,
    pub images: Vec<ImageReport>,
    /// 当せん口数（全画像の合計）
    pub winner_count: usize,
}

impl BatchSummary {
    /// 照合できた口数（検証で除外した口は含まない）
    pub fn classified_count(&self) -> usize {
        self.images
            .iter()
            .map(|r| match &r.status {
                ImageStatus::Classified { outcomes, .. } => outcomes.len(),
                _ => 0,
            })
            .sum()
    }

    /// 失敗または空としてマークされた画像数
    pub fn failed_image_count(&self) -> usize {
        self.images
            .iter()
            .filter(|r| !matches!(r.status, ImageStatus::Classified { .. }))
            .count()
    }
}

/// 画像ごとの認識結果を集計する
///
/// 画像は入力順、画像内のチケットは認識順のまま処理・記録する。
pub fn aggregate(
    draw: &DrawResult,
    per_image: Vec<(String, RecognitionOutcome)>,
) -> BatchSummary {
    let mut images = Vec::with_capacity(per_image.len());
    let mut winner_count = 0;

    for (image_id, recognition) in per_image {
        let status = match recognition {
            RecognitionOutcome::Failed(reason) => ImageStatus::Failed { reason },
            RecognitionOutcome::Tickets(candidates) if candidates.is_empty() => {
                ImageStatus::NoTickets
            }
            RecognitionOutcome::Tickets(candidates) => {
                let mut outcomes = Vec::new();
                let mut dropped = 0;

                for candidate in &candidates {
                    match Ticket::from_raw(candidate) {
                        Ok(ticket) => {
                            let outcome = matcher::classify(ticket, draw);
                            if outcome.is_winner {
                                winner_count += 1;
                            }
                            outcomes.push(outcome);
                        }
                        Err(_) => dropped += 1,
                    }
                }

                ImageStatus::Classified { outcomes, dropped }
            }
        };

        images.push(ImageReport { image_id, status });
    }

    BatchSummary {
        draw: draw.clone(),
        images,
        winner_count,
    }
}
