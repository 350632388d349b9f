// src/config/rules.rs
//! クロンダイクのルールで決まってる数字たちだよ！

pub const DECK_SIZE: usize = 52; // 4スート × 13ランク
pub const NUM_SUITS: usize = 4;
pub const NUM_RANKS: usize = 13;

pub const NUM_TABLEAU: usize = 7; // 場札の列数
pub const NUM_FOUNDATION: usize = 4; // 組札の数

/// 場札に配られるカードの合計 (1 + 2 + ... + 7)。
pub const TABLEAU_DEAL_TOTAL: usize = NUM_TABLEAU * (NUM_TABLEAU + 1) / 2;

/// 初期配置が終わった直後の山札の枚数 (52 - 28 - 捨て札に1枚)。
pub const INITIAL_STOCK_AFTER_DEAL: usize = DECK_SIZE - TABLEAU_DEAL_TOTAL - 1;

pub const HISTORY_INITIAL_CAPACITY: usize = 32; // 履歴バッファの最初の容量
