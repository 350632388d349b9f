//! ルール判定で共通して使うヘルパー関数を置くよ。

use crate::components::card::{Card, Rank};

/// `lower` が `upper` のちょうど1つ下のランクか (A の下や K の上への回り込みはなし)。
pub(crate) fn is_one_rank_below(lower: Rank, upper: Rank) -> bool {
    lower.next() == Some(upper)
}

/// 2枚のカードの色が違うか。
pub(crate) fn colors_differ(a: &Card, b: &Card) -> bool {
    a.color() != b.color()
}
