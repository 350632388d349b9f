//! 行き詰まり (dead end) の判定だよ。
//!
//! 1手だけ先を全部なめる局所的なチェックで、手順をまたいだ探索はしない。
//! なので、何手か組み合わせれば実は解ける局面でも「行き詰まり」と言うことがある。
//!
//! 逆に、列の一番下にいる K から空の場札への移動も「手がある」に数える。
//! 盤面は何も進まない手だけど合法は合法なので、空き列があって K が動かせる限り
//! 行き詰まりにはならない。

use itertools::iproduct;
use log::debug;

use super::foundation::can_move_to_foundation;
use super::tableau::can_move_to_tableau;
use crate::components::card::Card;
use crate::components::piles::Piles;

/// どこにも1手で打てる合法手がなければ `true`。
///
/// 調べるのは次の3つ:
/// 1. 場札の表向きのカード (列の途中からでも) → ほかの場札 (空なら K だけ)
/// 2. 場札の一番上 → 組札
/// 3. 組札の一番上 → 場札 (組札から戻す手も合法だから)
/// 4. 山札と捨て札のすべてのカード → 場札・組札 (配り直しでいずれ手に入るから)
pub fn is_dead_end(piles: &Piles) -> bool {
    let tableaus = piles.tableaus();
    let foundations = piles.foundations();

    for (src, dst) in iproduct!(tableaus, tableaus) {
        if src.kind() == dst.kind() {
            continue;
        }
        if let Some(card) = src
            .iter()
            .take_while(|card| card.is_face_up)
            .find(|card| can_move_to_tableau(card, dst.top()))
        {
            debug!("[Dead End] {} can move from {} to {}", card.id(), src.kind(), dst.kind());
            return false;
        }
    }

    for (src, dst) in iproduct!(tableaus, foundations) {
        if let Some(card) = src.top().filter(|card| card.is_face_up) {
            if can_move_to_foundation(card, dst.top()) {
                debug!("[Dead End] {} can move from {} to {}", card.id(), src.kind(), dst.kind());
                return false;
            }
        }
    }

    for (src, dst) in iproduct!(foundations, tableaus) {
        if let Some(card) = src.top() {
            if can_move_to_tableau(card, dst.top()) {
                debug!("[Dead End] {} can come back from {} to {}", card.id(), src.kind(), dst.kind());
                return false;
            }
        }
    }

    let reserve: Vec<&Card> = piles.stock().iter().chain(piles.waste().iter()).collect();
    for (card, dst) in iproduct!(reserve.iter(), tableaus) {
        if can_move_to_tableau(card, dst.top()) {
            debug!("[Dead End] reserve card {} fits on {}", card.id(), dst.kind());
            return false;
        }
    }
    for (card, dst) in iproduct!(reserve.iter(), foundations) {
        if can_move_to_foundation(card, dst.top()) {
            debug!("[Dead End] reserve card {} fits on {}", card.id(), dst.kind());
            return false;
        }
    }

    true
}
