// src/components/piles.rs
//! 場にある 13 個の山 (山札・捨て札・場札7列・組札4つ) をまとめた表だよ。
//!
//! `PileKind` から山を引く処理はここの `match` 一か所だけ。
//! カードの「今いる山」を探すフィールド全体の検索もここでやる。

use std::array;

use crate::components::card::{Card, CardId, Rank, Suit};
use crate::components::pile::{Pile, PileKind};
use crate::config::rules::{NUM_FOUNDATION, NUM_TABLEAU};
use crate::error::{GameError, GameResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piles {
    stock: Pile,
    waste: Pile,
    tableaus: [Pile; NUM_TABLEAU],
    foundations: [Pile; NUM_FOUNDATION],
}

impl Default for Piles {
    fn default() -> Self {
        Self::new()
    }
}

impl Piles {
    /// 全部空っぽの山たちを作る。
    pub fn new() -> Self {
        Self {
            stock: Pile::new(PileKind::Stock),
            waste: Pile::new(PileKind::Waste),
            tableaus: array::from_fn(|i| Pile::new(PileKind::Tableau(i as u8))),
            foundations: array::from_fn(|i| Pile::new(PileKind::Foundation(i as u8))),
        }
    }

    pub fn get(&self, kind: PileKind) -> GameResult<&Pile> {
        match kind {
            PileKind::Stock => Ok(&self.stock),
            PileKind::Waste => Ok(&self.waste),
            PileKind::Tableau(i) => self.tableaus.get(usize::from(i)).ok_or(GameError::NoSuchPile),
            PileKind::Foundation(i) => self.foundations.get(usize::from(i)).ok_or(GameError::NoSuchPile),
        }
    }

    pub fn get_mut(&mut self, kind: PileKind) -> GameResult<&mut Pile> {
        match kind {
            PileKind::Stock => Ok(&mut self.stock),
            PileKind::Waste => Ok(&mut self.waste),
            PileKind::Tableau(i) => self.tableaus.get_mut(usize::from(i)).ok_or(GameError::NoSuchPile),
            PileKind::Foundation(i) => self
                .foundations
                .get_mut(usize::from(i))
                .ok_or(GameError::NoSuchPile),
        }
    }

    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    pub fn tableaus(&self) -> &[Pile] {
        &self.tableaus
    }

    pub fn foundations(&self) -> &[Pile] {
        &self.foundations
    }

    pub(crate) fn stock_and_waste_mut(&mut self) -> (&mut Pile, &mut Pile) {
        (&mut self.stock, &mut self.waste)
    }

    pub(crate) fn stock_and_tableaus_mut(&mut self) -> (&mut Pile, &mut [Pile]) {
        (&mut self.stock, &mut self.tableaus[..])
    }

    /// 山札, 捨て札, 組札 0..3, 場札 0..6 の順に全部の山を見ていく。
    pub fn iter(&self) -> impl Iterator<Item = &Pile> + '_ {
        std::iter::once(&self.stock)
            .chain(std::iter::once(&self.waste))
            .chain(self.foundations.iter())
            .chain(self.tableaus.iter())
    }

    /// フィールド全体からカードを探す。
    pub fn search(&self, suit: Suit, rank: Rank) -> GameResult<&Card> {
        self.iter()
            .find_map(|pile| pile.search(suit, rank))
            .ok_or(GameError::CardNotFound)
    }

    pub fn card(&self, id: CardId) -> GameResult<&Card> {
        self.search(id.suit, id.rank)
    }

    /// カードが今いる山の種類。
    pub fn locate(&self, id: CardId) -> GameResult<PileKind> {
        self.iter()
            .find(|pile| pile.contains(id))
            .map(Pile::kind)
            .ok_or(GameError::CardNotFound)
    }

    /// 場にあるカードの総数。
    pub fn card_count(&self) -> usize {
        self.iter().map(Pile::count).sum()
    }
}
