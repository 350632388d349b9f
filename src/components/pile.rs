// src/components/pile.rs

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::components::card::{Card, CardId, Rank, Suit};
use crate::error::{GameError, GameResult};

/// カードの山の種類だよ。
/// これで山札なのか、捨て札なのか、場札の何列目なのか、を区別する。
/// 一度作った山の種類はずっと変わらない！
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PileKind {
    /// 山札 (Stock)。裏向きで、捨て札にめくる元。
    Stock,
    /// 捨て札 (Waste)。山札からめくったカードが表向きで積まれる。
    Waste,
    /// 場札 (Tableau)。7列あるので列番号 (0-6) を持つ。
    Tableau(u8),
    /// 組札 (Foundation)。4つあるので番号 (0-3) を持つ。
    /// どのスートがどこに行くかは決めてない。空ならどの A でも置ける。
    Foundation(u8),
}

impl PileKind {
    pub fn is_stock(self) -> bool {
        matches!(self, PileKind::Stock)
    }

    pub fn is_waste(self) -> bool {
        matches!(self, PileKind::Waste)
    }

    pub fn is_tableau(self) -> bool {
        matches!(self, PileKind::Tableau(_))
    }

    pub fn is_foundation(self) -> bool {
        matches!(self, PileKind::Foundation(_))
    }

    /// プレイヤーの移動先になれる山か (場札と組札だけ)。
    pub fn accepts_moves(self) -> bool {
        self.is_tableau() || self.is_foundation()
    }
}

impl fmt::Display for PileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PileKind::Stock => f.write_str("stock"),
            PileKind::Waste => f.write_str("waste"),
            // 表示は人間向けに 1 始まり
            PileKind::Tableau(i) => write!(f, "T{}", i + 1),
            PileKind::Foundation(i) => write!(f, "F{}", i + 1),
        }
    }
}

/// カードの山そのもの。
///
/// 並びは「上から下」: インデックス 0 が一番上 (最後に置かれた、次に動かすカード)。
/// 山の中のカードの持ち主はこの `Pile` だけで、カード側の `pile` は逆参照にすぎない。
/// どの操作も山の長さに比例する時間で、山は最大でも 24 枚くらいなので十分速い。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pile {
    kind: PileKind,
    cards: VecDeque<Card>,
}

impl Pile {
    pub fn new(kind: PileKind) -> Self {
        Self {
            kind,
            cards: VecDeque::new(),
        }
    }

    pub fn kind(&self) -> PileKind {
        self.kind
    }

    /// 一番上のカード。
    pub fn top(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// 上から n 番目のカード (0 が一番上)。
    pub fn nth(&self, n: usize) -> Option<&Card> {
        self.cards.get(n)
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn count(&self) -> usize {
        self.cards.len()
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.position(id).is_some()
    }

    pub fn search(&self, suit: Suit, rank: Rank) -> Option<&Card> {
        self.cards.iter().find(|card| card.suit == suit && card.rank == rank)
    }

    /// カードが上から何番目にあるか。
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.is(id))
    }

    pub fn is_top(&self, id: CardId) -> bool {
        self.top().map_or(false, |card| card.is(id))
    }

    /// 上から下へ順番に見ていくイテレータ。
    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    pub fn face_up_count(&self) -> usize {
        self.cards.iter().filter(|card| card.is_face_up).count()
    }

    /// 一番下にある表向きのカード (場札なら、動かせる列の根元)。
    pub fn last_face_up(&self) -> Option<&Card> {
        self.cards.iter().rev().find(|card| card.is_face_up)
    }

    /// カードを一番上に置く。逆参照もこの山に付け替えるよ。
    pub fn push_front(&mut self, mut card: Card) {
        card.pile = Some(self.kind);
        self.cards.push_front(card);
    }

    /// 一番上のカードを取り出す。
    pub fn pop_front(&mut self) -> GameResult<Card> {
        self.cards.pop_front().ok_or(GameError::EmptyPile)
    }

    /// `id` のカードと、その上に積まれた全部のカードを切り出す (場札専用)。
    ///
    /// 戻り値は上から下の順で、最後の要素が `id` のカード。
    pub fn cut_from(&mut self, id: CardId) -> GameResult<Vec<Card>> {
        if !self.kind.is_tableau() {
            return Err(GameError::InvalidSource);
        }
        self.take_through(id)
    }

    /// `cut_from` の山の種類チェックなし版。取り消し (undo) で使う。
    pub(crate) fn take_through(&mut self, id: CardId) -> GameResult<Vec<Card>> {
        let pos = self.position(id).ok_or(GameError::CardNotFound)?;
        Ok(self.cards.drain(..=pos).collect())
    }

    /// 上から下の順に並んだ列を、順番を保ったままこの山の上に載せる。
    pub fn splice_front(&mut self, run: Vec<Card>) {
        for card in run.into_iter().rev() {
            self.push_front(card);
        }
    }

    /// 全部のカードを上から下の順で取り出す。
    pub(crate) fn drain_all(&mut self) -> Vec<Card> {
        self.cards.drain(..).collect()
    }

    /// 一番上が裏向きなら表にする。めくったら `true`。
    pub fn flip_top_up(&mut self) -> bool {
        match self.cards.front_mut() {
            Some(card) if !card.is_face_up => {
                card.is_face_up = true;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn flip_top_down(&mut self) {
        if let Some(card) = self.cards.front_mut() {
            card.is_face_up = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tableau_with(cards: &[Card]) -> Pile {
        // cards は下から上の順で渡す
        let mut pile = Pile::new(PileKind::Tableau(2));
        for card in cards {
            pile.push_front(card.clone());
        }
        pile
    }

    #[test]
    fn push_and_pop_follow_stack_order() {
        let mut pile = Pile::new(PileKind::Waste);
        assert!(pile.is_empty());
        assert_eq!(pile.pop_front(), Err(GameError::EmptyPile));

        pile.push_front(Card::face_up(Suit::Heart, Rank::Two));
        pile.push_front(Card::face_up(Suit::Club, Rank::Nine));

        assert_eq!(pile.count(), 2);
        let top = pile.top().expect("top exists");
        assert_eq!(top.id(), CardId::new(Suit::Club, Rank::Nine));
        assert_eq!(top.pile(), Some(PileKind::Waste), "逆参照が付け替わってるはず");
        assert_eq!(pile.nth(1).map(Card::id), Some(CardId::new(Suit::Heart, Rank::Two)));
        assert!(pile.nth(2).is_none());

        let popped = pile.pop_front().expect("pop works");
        assert_eq!(popped.rank, Rank::Nine);
        assert_eq!(pile.count(), 1);
    }

    #[test]
    fn search_and_contains() {
        let pile = tableau_with(&[
            Card::new(Suit::Spade, Rank::Four),
            Card::face_up(Suit::Heart, Rank::Queen),
        ]);
        assert!(pile.contains(CardId::new(Suit::Spade, Rank::Four)));
        assert!(!pile.contains(CardId::new(Suit::Spade, Rank::Five)));
        assert_eq!(pile.search(Suit::Heart, Rank::Queen).map(|c| c.is_face_up), Some(true));
        assert!(pile.search(Suit::Diamond, Rank::Queen).is_none());
        assert!(pile.is_top(CardId::new(Suit::Heart, Rank::Queen)));
        assert!(!pile.is_top(CardId::new(Suit::Spade, Rank::Four)));
    }

    #[test]
    fn cut_from_takes_card_and_everything_above() {
        let mut pile = tableau_with(&[
            Card::new(Suit::Club, Rank::Two),
            Card::face_up(Suit::Spade, Rank::Nine),
            Card::face_up(Suit::Heart, Rank::Eight),
            Card::face_up(Suit::Club, Rank::Seven),
        ]);

        let run = pile.cut_from(CardId::new(Suit::Spade, Rank::Nine)).expect("cut works");
        let ranks: Vec<Rank> = run.iter().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![Rank::Seven, Rank::Eight, Rank::Nine], "上から下の順のはず");
        assert_eq!(pile.count(), 1);
        assert_eq!(pile.top().map(Card::id), Some(CardId::new(Suit::Club, Rank::Two)));

        assert_eq!(
            pile.cut_from(CardId::new(Suit::Heart, Rank::Ace)),
            Err(GameError::CardNotFound)
        );
    }

    #[test]
    fn cut_from_rejects_non_tableau() {
        let mut waste = Pile::new(PileKind::Waste);
        waste.push_front(Card::face_up(Suit::Heart, Rank::Ace));
        assert_eq!(
            waste.cut_from(CardId::new(Suit::Heart, Rank::Ace)),
            Err(GameError::InvalidSource)
        );
        assert_eq!(waste.count(), 1, "失敗したら何も変わらない");
    }

    #[test]
    fn splice_front_keeps_run_order_and_back_references() {
        let mut src = tableau_with(&[
            Card::face_up(Suit::Spade, Rank::King),
            Card::face_up(Suit::Heart, Rank::Queen),
        ]);
        let run = src.cut_from(CardId::new(Suit::Spade, Rank::King)).expect("cut works");

        let mut dst = Pile::new(PileKind::Tableau(5));
        dst.splice_front(run);

        assert!(src.is_empty());
        assert_eq!(dst.top().map(Card::id), Some(CardId::new(Suit::Heart, Rank::Queen)));
        assert_eq!(dst.nth(1).map(Card::id), Some(CardId::new(Suit::Spade, Rank::King)));
        assert!(dst.iter().all(|c| c.pile() == Some(PileKind::Tableau(5))));
    }

    #[test]
    fn flip_top_and_last_face_up() {
        let mut pile = tableau_with(&[
            Card::new(Suit::Club, Rank::Three),
            Card::new(Suit::Diamond, Rank::Jack),
        ]);
        assert!(pile.last_face_up().is_none());
        assert!(pile.flip_top_up(), "裏向きの一番上はめくれる");
        assert!(!pile.flip_top_up(), "もう表なので何もしない");
        assert_eq!(pile.face_up_count(), 1);
        assert_eq!(pile.last_face_up().map(Card::id), Some(CardId::new(Suit::Diamond, Rank::Jack)));

        pile.flip_top_down();
        assert_eq!(pile.face_up_count(), 0);
    }

    #[test]
    fn pile_kind_helpers() {
        assert!(PileKind::Tableau(0).accepts_moves());
        assert!(PileKind::Foundation(3).accepts_moves());
        assert!(!PileKind::Stock.accepts_moves());
        assert!(!PileKind::Waste.accepts_moves());
        assert_eq!(PileKind::Tableau(6).to_string(), "T7");
        assert_eq!(PileKind::Foundation(0).to_string(), "F1");
    }
}
