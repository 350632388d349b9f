// src/history.rs
//! 成功したコマンドの履歴だよ。取り消し (undo) はここから一番新しいのを取り出す。

use serde::{Deserialize, Serialize};

use crate::components::card::CardId;
use crate::components::pile::PileKind;
use crate::config::rules::HISTORY_INITIAL_CAPACITY;
use crate::error::{GameError, GameResult};

/// 履歴1件分。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// カード (または列の根元のカード) を `source` から `destination` へ動かした。
    ///
    /// 山札→捨て札のめくりもこれで記録する。
    /// `revealed` は、この移動で `source` の新しい一番上が裏から表になったかどうか。
    SingleMove {
        card: CardId,
        source: PileKind,
        destination: PileKind,
        revealed: bool,
    },
    /// 山札が空のときに捨て札を全部 (`count` 枚) 山札に戻した。
    RecycleWasteToStock { count: usize },
}

/// 後入れ先出しの履歴。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    actions: Vec<Action>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self {
            actions: Vec::with_capacity(HISTORY_INITIAL_CAPACITY),
        }
    }

    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// 一番新しい履歴を取り出す。空なら `NoHistory`。
    pub fn pop(&mut self) -> GameResult<Action> {
        self.actions.pop().ok_or(GameError::NoHistory)
    }

    pub fn last(&self) -> Option<&Action> {
        self.actions.last()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// 古い順。
    pub fn iter(&self) -> impl Iterator<Item = &Action> + '_ {
        self.actions.iter()
    }

    /// `len` 件より後ろを捨てる。
    pub fn truncate(&mut self, len: usize) {
        self.actions.truncate(len);
    }

    pub fn clear(&mut self) {
        self.actions.clear();
    }
}
