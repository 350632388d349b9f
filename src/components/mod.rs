// src/components/mod.rs

// components モジュールに属するサブモジュールたち！
pub mod card;
pub mod pile;
pub mod piles;
pub mod game_state;
