// src/systems/win_condition_system.rs

use log::info;

use crate::components::game_state::GameStatus;
use crate::components::piles::Piles;
use crate::logic::rules::{check_win_condition, is_dead_end};

/// ゲームの勝利条件と行き詰まりをチェックするシステムだよ！🏆🎉
///
/// 盤面を見て `GameStatus` を決めるだけで、何も書き換えない。
/// 勝ちと行き詰まりが両方成り立つことはないけど、念のため勝ちを先に見る。
#[derive(Default)]
pub struct WinConditionSystem;

impl WinConditionSystem {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, piles: &Piles) -> GameStatus {
        if check_win_condition(piles.foundations()) {
            info!("🎉🎉🎉 ゲームクリア！おめでとう！ 🎉🎉🎉");
            return GameStatus::Won;
        }
        if is_dead_end(piles) {
            info!("😵 もう動かせる手がないよ… (行き詰まり)");
            return GameStatus::DeadEnd;
        }
        GameStatus::Playing
    }
}
