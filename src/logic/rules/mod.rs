// src/logic/rules/mod.rs
//! ソリティアのルール判定をまとめるよ！
//!
//! ここの関数はどれも盤面を読むだけで、絶対に書き換えない。

pub mod common;
pub mod dead_end;
pub mod foundation;
pub mod move_validation;
pub mod stock_waste;
pub mod tableau;
pub mod win_condition;

#[cfg(test)]
mod tests;

// 各モジュールから公開したい関数をここで再エクスポート！
pub use dead_end::*;
pub use foundation::*;
pub use move_validation::*;
pub use stock_waste::*;
pub use tableau::*;
pub use win_condition::*;
