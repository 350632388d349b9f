// src/logic/auto_move.rs
//! カードの自動移動に関するロジックだよ！🪄
//! ワンクリックで組札に送るとき、どの組札に行けるかをここで探す。

use log::debug;

use crate::components::card::CardId;
use crate::components::pile::PileKind;
use crate::components::piles::Piles;
use crate::logic::rules;

/// 指定したカードが今すぐ移動できる組札を探す関数だよ。
///
/// カードが表向きで、しかも自分の山の一番上にあるときだけ候補になる。
/// 組札は 0 から順に調べて、最初に置ける組札を返す。
pub fn find_automatic_foundation_move(piles: &Piles, id: CardId) -> Option<PileKind> {
    let source = piles.locate(id).ok()?;
    if source.is_foundation() || source.is_stock() {
        return None;
    }
    let source_pile = piles.get(source).ok()?;
    let card = source_pile.top().filter(|card| card.is(id) && card.is_face_up)?;

    let target = piles
        .foundations()
        .iter()
        .find(|foundation| rules::can_move_to_foundation(card, foundation.top()))
        .map(|foundation| foundation.kind());
    debug!("[AutoMove] {} from {} -> {:?}", id, source, target);
    target
}
