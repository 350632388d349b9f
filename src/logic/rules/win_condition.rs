//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::card::Rank;
use crate::components::pile::Pile;

/// 全部の組札の一番上が K なら勝ち。
///
/// 組札は A から1枚ずつ同じスートで積むしかないので、
/// 一番上が K ならその組札には13枚ぜんぶ揃ってる。
pub fn check_win_condition(foundations: &[Pile]) -> bool {
    !foundations.is_empty()
        && foundations
            .iter()
            .all(|pile| pile.top().map_or(false, |card| card.rank == Rank::King))
}
