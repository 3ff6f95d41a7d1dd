//! 照合ロジックのテスト
//!
//! 等級判定表の全組み合わせと、一致数・一致集合の性質を検証

use powerball_checker::draw::DrawResult;
use powerball_checker::matcher::{self, PrizeTier};
use powerball_checker::recognizer::types::{RawTicket, Ticket};
use std::collections::BTreeSet;

fn draw() -> DrawResult {
    DrawResult {
        date: "Wed, Sep 3, 2025".to_string(),
        numbers: vec![3, 16, 29, 61, 69],
        powerball: 22,
        multiplier: String::new(),
    }
}

fn ticket(main_numbers: &[i64], powerball: i64) -> Ticket {
    Ticket::from_raw(&RawTicket {
        line_id: "A".to_string(),
        main_numbers: main_numbers.to_vec(),
        powerball,
    })
    .expect("テスト用チケットが不正")
}

/// 一致1個・パワーボール不一致 → 等級なし
#[test]
fn test_one_match_without_powerball_is_not_a_win() {
    let outcome = matcher::classify(ticket(&[9, 29, 38, 40, 52], 23), &draw());

    assert_eq!(outcome.main_match_count, 1);
    assert!(!outcome.powerball_match);
    assert_eq!(outcome.tier, None);
    assert!(!outcome.is_winner);
}

/// 一致2個・パワーボール不一致 → 等級なし（2個以下は当せんにならない）
#[test]
fn test_two_matches_without_powerball_is_not_a_win() {
    let outcome = matcher::classify(ticket(&[10, 16, 21, 37, 61], 23), &draw());

    assert_eq!(outcome.main_match_count, 2);
    assert!(!outcome.powerball_match);
    assert_eq!(outcome.tier, None);
    assert!(!outcome.is_winner);
}

/// 全一致 → 5+PB
#[test]
fn test_full_match_is_jackpot_tier() {
    let outcome = matcher::classify(ticket(&[3, 16, 29, 61, 69], 22), &draw());

    assert_eq!(outcome.main_match_count, 5);
    assert!(outcome.powerball_match);
    assert_eq!(outcome.tier, Some(PrizeTier::FiveWithPowerball));
    assert!(outcome.is_winner);
}

/// 判定表の全到達パターン
#[test]
fn test_tier_table_all_reachable_pairs() {
    // (チケット本数字, パワーボール, 期待一致数, 期待等級)
    let cases: Vec<(&[i64], i64, usize, Option<PrizeTier>)> = vec![
        (&[3, 16, 29, 61, 69], 22, 5, Some(PrizeTier::FiveWithPowerball)),
        (&[3, 16, 29, 61, 69], 23, 5, Some(PrizeTier::Five)),
        (&[3, 16, 29, 61, 10], 22, 4, Some(PrizeTier::FourWithPowerball)),
        (&[3, 16, 29, 61, 10], 23, 4, Some(PrizeTier::Four)),
        (&[3, 16, 29, 10, 11], 22, 3, Some(PrizeTier::ThreeWithPowerball)),
        (&[3, 16, 29, 10, 11], 23, 3, Some(PrizeTier::Three)),
        (&[3, 16, 10, 11, 12], 22, 2, Some(PrizeTier::TwoWithPowerball)),
        (&[3, 16, 10, 11, 12], 23, 2, None),
        (&[3, 10, 11, 12, 13], 22, 1, Some(PrizeTier::OneWithPowerball)),
        (&[3, 10, 11, 12, 13], 23, 1, None),
        (&[10, 11, 12, 13, 14], 22, 0, Some(PrizeTier::PowerballOnly)),
        (&[10, 11, 12, 13, 14], 23, 0, None),
    ];

    for (numbers, pb, expected_count, expected_tier) in cases {
        let outcome = matcher::classify(ticket(numbers, pb), &draw());
        assert_eq!(
            outcome.main_match_count, expected_count,
            "一致数が不正: {:?} PB{}",
            numbers, pb
        );
        assert_eq!(
            outcome.tier, expected_tier,
            "等級が不正: {:?} PB{}",
            numbers, pb
        );
        assert_eq!(outcome.is_winner, expected_tier.is_some());
    }
}

/// 一致集合はチケット本数字と抽せん本数字の積集合
#[test]
fn test_matching_numbers_is_intersection() {
    let outcome = matcher::classify(ticket(&[3, 16, 29, 40, 52], 1), &draw());

    let expected: BTreeSet<u8> = [3, 16, 29].into_iter().collect();
    assert_eq!(outcome.matching_numbers, expected);
    assert_eq!(outcome.main_match_count, expected.len());

    // 一致集合はチケット本数字の部分集合
    assert!(outcome
        .matching_numbers
        .iter()
        .all(|n| outcome.ticket.main_numbers.contains(n)));
}

/// 同じ入力なら結果は常に同じ
#[test]
fn test_classify_idempotent() {
    let d = draw();
    let t = ticket(&[3, 16, 21, 37, 61], 22);

    let first = matcher::classify(t.clone(), &d);
    let second = matcher::classify(t, &d);

    assert_eq!(first.main_match_count, second.main_match_count);
    assert_eq!(first.powerball_match, second.powerball_match);
    assert_eq!(first.matching_numbers, second.matching_numbers);
    assert_eq!(first.tier, second.tier);
    assert_eq!(first.is_winner, second.is_winner);
}
