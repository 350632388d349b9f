// src/logic/rules/tests.rs
//! rules モジュール内の関数のユニットテスト。

use super::*;
use crate::components::card::{Card, Rank, Suit, ALL_RANKS};
use crate::components::pile::{Pile, PileKind};
use crate::components::piles::Piles;

// --- テスト用ヘルパー関数 ---

/// 山にカードを積むヘルパー (下から上の順で渡す)。
fn stack(piles: &mut Piles, kind: PileKind, cards: &[Card]) {
    let pile = piles.get_mut(kind).expect("pile exists");
    for card in cards {
        pile.push_front(card.clone());
    }
}

fn up(suit: Suit, rank: Rank) -> Card {
    Card::face_up(suit, rank)
}

/// どこにも合法手がない局面。
///
/// 場札の一番上は 5 と 9 だけ、山札と捨て札には 4 / 8 / A が一枚もない。
fn stuck_position() -> Piles {
    let mut piles = Piles::new();
    let tops = [
        up(Suit::Spade, Rank::Five),
        up(Suit::Club, Rank::Five),
        up(Suit::Heart, Rank::Five),
        up(Suit::Diamond, Rank::Five),
        up(Suit::Spade, Rank::Nine),
        up(Suit::Heart, Rank::Nine),
        up(Suit::Club, Rank::Nine),
    ];
    for (i, top) in tops.iter().enumerate() {
        stack(
            &mut piles,
            PileKind::Tableau(i as u8),
            &[Card::new(Suit::Diamond, ALL_RANKS[i + 5]), top.clone()],
        );
    }
    stack(
        &mut piles,
        PileKind::Stock,
        &[Card::new(Suit::Spade, Rank::Ten), Card::new(Suit::Heart, Rank::King)],
    );
    stack(&mut piles, PileKind::Waste, &[up(Suit::Diamond, Rank::Three)]);
    piles
}

// --- 各ルール関数のテスト ---

#[test]
fn test_can_move_to_tableau() {
    let king_spades = up(Suit::Spade, Rank::King);
    let queen_hearts = up(Suit::Heart, Rank::Queen);
    let jack_spades = up(Suit::Spade, Rank::Jack);
    let jack_diamonds = up(Suit::Diamond, Rank::Jack);
    let ten_spades = up(Suit::Spade, Rank::Ten);

    // シナリオ 1: 空の Tableau への移動
    assert!(can_move_to_tableau(&king_spades, None), "空の場札に K は置けるはず");
    assert!(!can_move_to_tableau(&queen_hearts, None), "空の場札に Q は置けないはず");

    // シナリオ 2: 色違い・ランク1つ下
    assert!(can_move_to_tableau(&jack_spades, Some(&queen_hearts)), "Q❤️ に J♠️ は置けるはず");

    // シナリオ 3: 同色
    assert!(!can_move_to_tableau(&jack_diamonds, Some(&queen_hearts)), "Q❤️ に J♦️ は置けないはず (同色)");

    // シナリオ 4: ランク違い
    assert!(!can_move_to_tableau(&ten_spades, Some(&queen_hearts)), "Q❤️ に 10♠️ は置けないはず (ランク違い)");

    // シナリオ 5: 逆向き (大きいほうを小さいほうへ)
    assert!(!can_move_to_tableau(&queen_hearts, Some(&jack_spades)));
}

#[test]
fn test_can_move_to_foundation() {
    let ace_hearts = up(Suit::Heart, Rank::Ace);
    let two_hearts = up(Suit::Heart, Rank::Two);
    let two_spades = up(Suit::Spade, Rank::Two);
    let three_hearts = up(Suit::Heart, Rank::Three);

    assert!(can_move_to_foundation(&ace_hearts, None), "空の組札には A");
    assert!(!can_move_to_foundation(&two_hearts, None), "空の組札に 2 はダメ");
    assert!(can_move_to_foundation(&two_hearts, Some(&ace_hearts)));
    assert!(!can_move_to_foundation(&two_spades, Some(&ace_hearts)), "スート違いはダメ");
    assert!(!can_move_to_foundation(&three_hearts, Some(&ace_hearts)), "ランク飛ばしはダメ");
    assert!(!can_move_to_foundation(&ace_hearts, Some(&two_hearts)), "下がるのはダメ");
}

#[test]
fn test_is_move_valid_dispatches_on_pile_kind() {
    let king = up(Suit::Club, Rank::King);
    let ace = up(Suit::Club, Rank::Ace);

    assert!(is_move_valid(&king, &Pile::new(PileKind::Tableau(0))));
    assert!(!is_move_valid(&king, &Pile::new(PileKind::Foundation(0))));
    assert!(is_move_valid(&ace, &Pile::new(PileKind::Foundation(2))));
    assert!(!is_move_valid(&ace, &Pile::new(PileKind::Tableau(2))));
    assert!(!is_move_valid(&king, &Pile::new(PileKind::Stock)), "山札には置けない");
    assert!(!is_move_valid(&ace, &Pile::new(PileKind::Waste)), "捨て札には置けない");
}

#[test]
fn test_stock_waste_rules() {
    assert!(can_deal_from_stock(false), "ストックがあれば配れるはず");
    assert!(!can_reset_stock_from_waste(false, false), "ストックがある場合はリセットできないはず");
    assert!(!can_reset_stock_from_waste(false, true), "ストックがある場合はリセットできないはず");

    assert!(!can_deal_from_stock(true), "ストックが空なら配れないはず");
    assert!(can_reset_stock_from_waste(true, false), "ストックが空でウェストにあればリセットできるはず");
    assert!(!can_reset_stock_from_waste(true, true), "ストックもウェストも空ならリセットできないはず");
}

#[test]
fn test_win_condition() {
    let mut piles = Piles::new();
    assert!(!check_win_condition(piles.foundations()), "空っぽは勝ちじゃない");

    for (i, suit) in [Suit::Spade, Suit::Diamond, Suit::Club, Suit::Heart].into_iter().enumerate() {
        let cards: Vec<Card> = ALL_RANKS.iter().map(|&rank| up(suit, rank)).collect();
        stack(&mut piles, PileKind::Foundation(i as u8), &cards);
    }
    assert!(check_win_condition(piles.foundations()), "全部 K なら勝ち！🏆");

    // 1つだけ Q で止まってたら勝ちじゃない
    piles
        .get_mut(PileKind::Foundation(2))
        .expect("foundation 2 exists")
        .pop_front()
        .expect("king is there");
    assert!(!check_win_condition(piles.foundations()));
}

#[test]
fn test_dead_end_when_nothing_moves() {
    let piles = stuck_position();
    assert!(is_dead_end(&piles), "どこにも手がないので行き詰まり");
}

#[test]
fn test_dead_end_cleared_by_reserve_card_fitting_tableau() {
    let mut piles = stuck_position();
    // 4❤️ は 5♠️ の上に置ける
    stack(&mut piles, PileKind::Waste, &[up(Suit::Heart, Rank::Four)]);
    assert!(!is_dead_end(&piles));
}

#[test]
fn test_dead_end_cleared_by_ace_in_stock() {
    let mut piles = stuck_position();
    // 山札の奥にある A でも、配り直せば組札に行けるので手がある扱い
    let stock = piles.get_mut(PileKind::Stock).expect("stock exists");
    let top = stock.pop_front().expect("stock has cards");
    stock.push_front(Card::new(Suit::Club, Rank::Ace));
    stock.push_front(top);
    assert!(!is_dead_end(&piles));
}

#[test]
fn test_dead_end_uses_foundation_rule_for_reserve_cards() {
    let mut piles = stuck_position();
    stack(&mut piles, PileKind::Foundation(0), &[up(Suit::Diamond, Rank::Ace), up(Suit::Diamond, Rank::Two)]);
    // 捨て札の 3♦️ は組札の 2♦️ に乗る。場札のルールでは乗らない組み合わせ。
    assert!(!is_dead_end(&piles));
}

#[test]
fn test_dead_end_cleared_by_tableau_to_foundation() {
    let mut piles = stuck_position();
    stack(&mut piles, PileKind::Foundation(1), &[up(Suit::Heart, Rank::Ace), up(Suit::Heart, Rank::Two), up(Suit::Heart, Rank::Three), up(Suit::Heart, Rank::Four)]);
    // 場札 2 の一番上は 5❤️
    assert!(!is_dead_end(&piles));
}

#[test]
fn test_dead_end_cleared_by_king_and_empty_tableau() {
    let mut piles = stuck_position();
    let t6 = piles.get_mut(PileKind::Tableau(6)).expect("tableau 6 exists");
    t6.pop_front().expect("top exists");
    t6.pop_front().expect("bottom exists");
    assert!(t6.is_empty());
    assert!(!is_dead_end(&piles), "山札の K❤️ が空き列に行ける");

    let stock = piles.get_mut(PileKind::Stock).expect("stock exists");
    stock.pop_front().expect("king of hearts on top");
    assert!(is_dead_end(&piles), "K がいなくなれば空き列があっても手なし");
}

#[test]
fn test_dead_end_considers_runs_mid_tableau() {
    let mut piles = stuck_position();
    stack(&mut piles, PileKind::Tableau(0), &[up(Suit::Heart, Rank::Eight), up(Suit::Spade, Rank::Seven)]);
    // 場札 0: 7♠️ (上), 8❤️, 5♠️ ... 8❤️ は場札 4 (9♠️) に列ごと行ける
    assert!(!is_dead_end(&piles));
}

/// 組札の 2❤️ を場札の 3 に戻す以外に手がない局面。
fn only_foundation_move(three: Card) -> Piles {
    let mut piles = Piles::new();
    stack(&mut piles, PileKind::Foundation(0), &[up(Suit::Heart, Rank::Ace), up(Suit::Heart, Rank::Two)]);
    stack(&mut piles, PileKind::Tableau(0), &[three]);
    for i in 1..7u8 {
        stack(&mut piles, PileKind::Tableau(i), &[up(Suit::Spade, ALL_RANKS[usize::from(i) + 5])]);
    }
    piles
}

#[test]
fn test_dead_end_considers_foundation_back_to_tableau() {
    // 場札: 3♣️ 7♠️ 8♠️ 9♠️ 10♠️ J♠️ Q♠️ (全部黒)、組札: 2❤️
    let piles = only_foundation_move(up(Suit::Club, Rank::Three));
    assert!(!is_dead_end(&piles), "2❤️ は 3♣️ に戻せる");

    let piles = only_foundation_move(up(Suit::Diamond, Rank::Three));
    assert!(is_dead_end(&piles), "3♦️ には 2❤️ を戻せない");
}

#[test]
fn test_dead_end_counts_bare_king_shuffle() {
    // 列の一番下の K を空き列に動かすだけの手も合法手として数える
    let mut piles = Piles::new();
    stack(&mut piles, PileKind::Tableau(0), &[up(Suit::Spade, Rank::King)]);
    assert!(!is_dead_end(&piles));
}
