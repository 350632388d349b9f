// src/logic/rules/move_validation.rs
//! カード移動の全体的な妥当性チェックを行う。

use log::debug;

use super::{foundation, tableau};
use crate::components::card::Card;
use crate::components::pile::{Pile, PileKind};

/// `card` を `target` の山の一番上に置けるか、山の種類に応じてルールを選んで判定する。
///
/// 山札・捨て札への移動はプレイヤーからは絶対にできない。
pub fn is_move_valid(card: &Card, target: &Pile) -> bool {
    match target.kind() {
        PileKind::Tableau(_) => tableau::can_move_to_tableau(card, target.top()),
        PileKind::Foundation(_) => foundation::can_move_to_foundation(card, target.top()),
        PileKind::Stock | PileKind::Waste => {
            debug!("[Rules Validation] Moving to {} is not allowed.", target.kind());
            false
        }
    }
}
