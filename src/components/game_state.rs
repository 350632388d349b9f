// src/components/game_state.rs

use serde::{Deserialize, Serialize};

/// ゲーム全体の今の状態を表す列挙型だよ！🏆🏁
///
/// 毎回コマンドが成功したあとに `WinConditionSystem` が計算し直す。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// まだ動かせる手がある (少なくとも1手先には)。
    Playing,
    /// 4つの組札が全部 K まで積み上がった。勝利！🏆
    Won,
    /// 1手で打てる合法手がどこにもない。
    DeadEnd,
}

impl GameStatus {
    /// 勝ちでも行き詰まりでも「終わり」。
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        GameStatus::Playing
    }
}
