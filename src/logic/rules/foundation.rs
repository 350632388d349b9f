//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::debug;

use super::common::is_one_rank_below;
use crate::components::card::{Card, Rank};

/// `card` を、一番上が `dst_top` の組札に置けるかチェックする。
///
/// - 空の組札には A だけ置ける (スートは問わない)。
/// - それ以外は同じスートで、ランクがちょうど1つ上のときだけ。
pub fn can_move_to_foundation(card: &Card, dst_top: Option<&Card>) -> bool {
    let result = match dst_top {
        None => card.rank == Rank::Ace,
        Some(target) => card.suit == target.suit && is_one_rank_below(target.rank, card.rank),
    };
    debug!(
        "[Foundation Rule] {} onto {}: {}",
        card.id(),
        dst_top.map_or_else(|| "empty foundation".to_string(), |top| top.id().to_string()),
        result
    );
    result
}
