//! 照合モジュール
//!
//! チケット1口と抽せん結果から当せい等級を判定する。
//! 純関数のみ（副作用なし・失敗パスなし。入力は検証済み前提）。

use crate::draw::DrawResult;
use crate::recognizer::Ticket;
use serde::Serialize;
use std::collections::BTreeSet;

/// 当せん等級
///
/// 本数字の一致数とパワーボール一致の組み合わせで決まる。
/// 本数字2個以下でパワーボール不一致の組み合わせは、実際の賞金表どおり
/// どの等級にも該当しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PrizeTier {
    #[serde(rename = "5+PB")]
    FiveWithPowerball,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "4+PB")]
    FourWithPowerball,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "3+PB")]
    ThreeWithPowerball,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "2+PB")]
    TwoWithPowerball,
    #[serde(rename = "1+PB")]
    OneWithPowerball,
    #[serde(rename = "PB")]
    PowerballOnly,
}

impl PrizeTier {
    pub fn label(&self) -> &'static str {
        match self {
            PrizeTier::FiveWithPowerball => "5+PB",
            PrizeTier::Five => "5",
            PrizeTier::FourWithPowerball => "4+PB",
            PrizeTier::Four => "4",
            PrizeTier::ThreeWithPowerball => "3+PB",
            PrizeTier::Three => "3",
            PrizeTier::TwoWithPowerball => "2+PB",
            PrizeTier::OneWithPowerball => "1+PB",
            PrizeTier::PowerballOnly => "PB",
        }
    }
}

impl std::fmt::Display for PrizeTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 照合結果（1口分）
///
/// すべてのフィールドは構築時に確定し、以後変更されない。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOutcome {
    pub ticket: Ticket,
    /// 本数字の一致数（0〜5）
    pub main_match_count: usize,
    pub powerball_match: bool,
    /// 一致した本数字（チケット本数字の部分集合）
    pub matching_numbers: BTreeSet<u8>,
    pub tier: Option<PrizeTier>,
    /// 等級ありなら当せん
    pub is_winner: bool,
}

/// チケット1口を抽せん結果と照合する
pub fn classify(ticket: Ticket, draw: &DrawResult) -> MatchOutcome {
    let matching_numbers: BTreeSet<u8> = ticket
        .main_numbers
        .iter()
        .copied()
        .filter(|n| draw.contains_main(*n))
        .collect();
    let main_match_count = matching_numbers.len();
    let powerball_match = ticket.powerball == draw.powerball;

    let tier = tier_for(main_match_count, powerball_match);

    MatchOutcome {
        ticket,
        main_match_count,
        powerball_match,
        matching_numbers,
        is_winner: tier.is_some(),
        tier,
    }
}

/// 等級判定表（優先順位順、最初に一致した行を採用）
fn tier_for(main_match_count: usize, powerball_match: bool) -> Option<PrizeTier> {
    match (main_match_count, powerball_match) {
        (5, true) => Some(PrizeTier::FiveWithPowerball),
        (5, false) => Some(PrizeTier::Five),
        (4, true) => Some(PrizeTier::FourWithPowerball),
        (4, false) => Some(PrizeTier::Four),
        (3, true) => Some(PrizeTier::ThreeWithPowerball),
        (3, false) => Some(PrizeTier::Three),
        (2, true) => Some(PrizeTier::TwoWithPowerball),
        (1, true) => Some(PrizeTier::OneWithPowerball),
        (0, true) => Some(PrizeTier::PowerballOnly),
        // 2個以下の一致でパワーボール不一致は等級なし
        _ => None,
    }
}
