// src/config/mod.rs
//! ゲームの設定まわりだよ。
//!
//! 固定のルール定数は `rules`、1ゲームごとに変えられるつまみは `GameConfig` にまとめてる。

pub mod rules;

use serde::{Deserialize, Serialize};

/// 1回のゲームセッションの設定。
///
/// ホスト側で JSON などから読み込めるように `Deserialize` を付けてるよ。
/// 書いてない項目は `Default` の値になる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// 固定シードで配りたいときに指定する。`None` ならエントロピーから。
    pub seed: Option<u64>,
    /// 捨て札→山札の戻し (リサイクル) を履歴に積んで、取り消せるようにするか。
    pub undo_recycle: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            undo_recycle: true,
        }
    }
}

impl GameConfig {
    /// シード固定の設定を作るヘルパー。
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}
