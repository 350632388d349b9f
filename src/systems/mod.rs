// src/systems/mod.rs
//! 盤面を書き換えたり判定したりするシステムたちだよ。
//! どれも状態を持たないので、山はいつも呼び出し側から借りてくる。

pub mod deal_system;
pub mod move_engine;
pub mod win_condition_system;

pub use deal_system::DealInitialCardsSystem;
pub use move_engine::{DealOutcome, MoveEngine, MoveOutcome};
pub use win_condition_system::WinConditionSystem;
