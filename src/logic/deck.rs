// src/logic/deck.rs

use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::card::{Card, CardId, ALL_RANKS, ALL_SUITS};
use crate::components::pile::Pile;
use crate::config::rules::DECK_SIZE;
use crate::error::{GameError, GameResult};

/// 標準的な52枚のカード (スート × ランクの全組み合わせ) を順番通りに作る関数だよ！🃏
pub fn create_standard_deck() -> Vec<CardId> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for &suit in ALL_SUITS.iter() {
        for &rank in ALL_RANKS.iter() {
            deck.push(CardId::new(suit, rank));
        }
    }
    deck
}

/// カードの並びを一様ランダムにシャッフルする関数。
///
/// 乱数生成器は呼び出し側から渡してもらう。シードを固定すれば同じ並びになるよ。
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [CardId], rng: &mut R) {
    deck.shuffle(rng);
}

/// 配る前の52枚の束。
///
/// 一度だけシャッフルされて、フィールドの初期化で山札に全部流し込まれる。
/// そのあとは長さ 0 のまま二度と使われない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// 順番通り (シャッフルなし) のデッキ。
    pub fn standard() -> Self {
        Self::from_ids(create_standard_deck())
    }

    /// シャッフル済みのデッキ。
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut ids = create_standard_deck();
        shuffle_deck(&mut ids, rng);
        Self::from_ids(ids)
    }

    /// 並びを指定してデッキを作る (リプレイやテスト用)。
    ///
    /// 52枚ちょうど、重複なしでなければ `CardNotFound`。
    pub fn from_cards(ids: Vec<CardId>) -> GameResult<Self> {
        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        if ids.len() != DECK_SIZE || sorted.len() != DECK_SIZE {
            warn!(
                "[Deck] rejected card order: {} cards, {} distinct",
                ids.len(),
                sorted.len()
            );
            return Err(GameError::CardNotFound);
        }
        Ok(Self::from_ids(ids))
    }

    fn from_ids(ids: Vec<CardId>) -> Self {
        Self {
            cards: ids.into_iter().map(Card::from).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// シャッフル後の並び (0 番目が最初のカード)。
    pub fn order(&self) -> Vec<CardId> {
        self.cards.iter().map(Card::id).collect()
    }

    /// 全部のカードを裏向きのまま `pile` に流し込む。
    ///
    /// 並びの先頭から順に上に積むので、最後のカードが一番上になるよ。
    pub fn drain_into(&mut self, pile: &mut Pile) {
        debug!("[Deck] draining {} cards into {}", self.cards.len(), pile.kind());
        for card in self.cards.drain(..) {
            pile.push_front(card);
        }
    }
}
