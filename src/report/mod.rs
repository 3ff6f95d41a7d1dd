//! 結果レポートモジュール
//!
//! `BatchSummary` の表示とJSON出力。コア型は表示方法を知らず、
//! 出力形式の差し替えはこのモジュール内で閉じる。

use crate::batch::{BatchSummary, ImageStatus};
use crate::draw::DrawResult;
use crate::error::Result;
use crate::matcher::MatchOutcome;
use chrono::Local;
use std::path::Path;

/// 抽せん結果を表示する
pub fn print_draw(draw: &DrawResult) {
    println!("抽せん日: {}", draw.date);
    println!(
        "本数字: {}  パワーボール: {}",
        format_numbers(&draw.numbers),
        draw.powerball
    );
    if !draw.multiplier.is_empty() {
        println!("Power Play: {}", draw.multiplier);
    }
}

/// バッチサマリを表示する
pub fn print_summary(summary: &BatchSummary) {
    print_draw(&summary.draw);
    println!();

    for image in &summary.images {
        match &image.status {
            ImageStatus::Classified { outcomes, dropped } => {
                println!("📄 {}", image.image_id);
                for outcome in outcomes {
                    println!("{}", format_outcome(outcome));
                }
                if *dropped > 0 {
                    println!("  ⚠ {}口は読み取り不正のため除外", dropped);
                }
            }
            ImageStatus::NoTickets => {
                println!("📄 {} … チケットを読み取れませんでした", image.image_id);
            }
            ImageStatus::Failed { reason } => {
                println!("📄 {} … 認識失敗: {}", image.image_id, reason);
            }
        }
    }

    println!();
    if summary.winner_count > 0 {
        println!(
            "🎉 当せん {}口 / 照合 {}口",
            summary.winner_count,
            summary.classified_count()
        );
    } else {
        println!("当せんなし（照合 {}口）", summary.classified_count());
    }
    if summary.failed_image_count() > 0 {
        println!("⚠ {}枚の画像は認識できませんでした", summary.failed_image_count());
    }
    println!("確認日時: {}", Local::now().format("%Y-%m-%d %H:%M"));
}

/// サマリをJSONファイルに保存する
pub fn save_summary_json(summary: &BatchSummary, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// 1口分の表示行を組み立てる
fn format_outcome(outcome: &MatchOutcome) -> String {
    let numbers: Vec<u8> = outcome.ticket.main_numbers.iter().copied().collect();
    let tier_text = match &outcome.tier {
        Some(tier) => format!("等級 {}", tier),
        None => "等級なし".to_string(),
    };
    let mark = if outcome.is_winner { "🎉" } else { "  " };

    format!(
        "{} [{}] {} PB{:02} → 一致{}個{} {}",
        mark,
        outcome.ticket.line_id,
        format_numbers(&numbers),
        outcome.ticket.powerball,
        outcome.main_match_count,
        if outcome.powerball_match { "+PB" } else { "" },
        tier_text
    )
}

fn format_numbers(numbers: &[u8]) -> String {
    numbers
        .iter()
        .map(|n| format!("{:02}", n))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher;
    use crate::recognizer::types::{RawTicket, Ticket};

    fn draw() -> DrawResult {
        DrawResult {
            date: "Wed, Sep 3, 2025".to_string(),
            numbers: vec![3, 16, 29, 61, 69],
            powerball: 22,
            multiplier: "2X".to_string(),
        }
    }

    fn outcome(main_numbers: &[i64], powerball: i64) -> MatchOutcome {
        let ticket = Ticket::from_raw(&RawTicket {
            line_id: "A".to_string(),
            main_numbers: main_numbers.to_vec(),
            powerball,
        })
        .unwrap();
        matcher::classify(ticket, &draw())
    }

    #[test]
    fn test_format_numbers_zero_padded() {
        assert_eq!(format_numbers(&[3, 16, 29]), "03 16 29");
    }

    #[test]
    fn test_format_outcome_loser() {
        let text = format_outcome(&outcome(&[9, 29, 38, 40, 52], 23));
        assert!(text.contains("[A]"));
        assert!(text.contains("一致1個"));
        assert!(text.contains("等級なし"));
        assert!(!text.contains("🎉"));
    }

    #[test]
    fn test_format_outcome_winner() {
        let text = format_outcome(&outcome(&[3, 16, 29, 61, 69], 22));
        assert!(text.contains("🎉"));
        assert!(text.contains("等級 5+PB"));
        assert!(text.contains("+PB"));
    }
}
