// src/snapshot.rs
//! 描画側に渡す、盤面の読み取り専用ビューだよ！🖼️
//!
//! 裏向きのカードは中身を見せない。保存用の形式じゃないので読み込みはない。

use serde::{Deserialize, Serialize};

use crate::components::card::{Card, CardId};
use crate::components::game_state::GameStatus;
use crate::components::pile::{Pile, PileKind};
use crate::field::Field;

/// カード1枚の見え方。裏向きなら `card` は `None`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub face_up: bool,
    pub card: Option<CardId>,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            face_up: card.is_face_up,
            card: card.is_face_up.then(|| card.id()),
        }
    }
}

/// 山1つ分。`cards` は上から下の順。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileSnapshot {
    pub kind: PileKind,
    pub cards: Vec<CardView>,
}

impl From<&Pile> for PileSnapshot {
    fn from(pile: &Pile) -> Self {
        Self {
            kind: pile.kind(),
            cards: pile.iter().map(CardView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSnapshot {
    pub stock: PileSnapshot,
    pub waste: PileSnapshot,
    pub tableaus: Vec<PileSnapshot>,
    pub foundations: Vec<PileSnapshot>,
    pub status: GameStatus,
    pub moves: u32,
    pub history_len: usize,
}

impl FieldSnapshot {
    pub fn capture(field: &Field) -> Self {
        Self {
            stock: field.stock().into(),
            waste: field.waste().into(),
            tableaus: field.tableaus().iter().map(PileSnapshot::from).collect(),
            foundations: field.foundations().iter().map(PileSnapshot::from).collect(),
            status: field.status(),
            moves: field.moves(),
            history_len: field.history().len(),
        }
    }

    /// JSON 文字列にする。
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
