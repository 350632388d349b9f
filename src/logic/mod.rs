// src/logic/mod.rs
//! ゲームのロジック (デッキ、ルール判定、自動移動) をまとめるモジュールだよ！

pub mod auto_move;
pub mod deck;
pub mod rules;
