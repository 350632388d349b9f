//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::debug;

use super::common::{colors_differ, is_one_rank_below};
use crate::components::card::{Card, Rank};

/// `card` を、一番上が `dst_top` の場札に置けるかチェックする。
///
/// - 空の場札 (`dst_top` が `None`) には K だけ置ける。
/// - それ以外は、色が違って、ランクがちょうど1つ下のときだけ置ける。
pub fn can_move_to_tableau(card: &Card, dst_top: Option<&Card>) -> bool {
    match dst_top {
        Some(target) => {
            let colors_different = colors_differ(card, target);
            let rank_is_one_less = is_one_rank_below(card.rank, target.rank);
            debug!(
                "[Tableau Rule] {} onto {}: colors different = {}, rank is one less = {}",
                card.id(),
                target.id(),
                colors_different,
                rank_is_one_less
            );
            colors_different && rank_is_one_less
        }
        None => {
            let is_king = card.rank == Rank::King;
            debug!("[Tableau Rule] {} onto empty tableau: is king = {}", card.id(), is_king);
            is_king
        }
    }
}
