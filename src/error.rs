// src/error.rs
//! エンジン全体で使うエラー型だよ！
//!
//! どのエラーもその場で回復できるものばかり。コマンドが失敗したときは
//! 盤面 (Field) は一切変わってないことが保証されてるよ。

use std::fmt;

/// ゲームのコマンドやクエリが失敗した理由。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameError {
    /// 裏向きのカードを動かそうとした (または裏向きのカードの上に置こうとした)。
    NotFaceUp,
    /// 移動元の山の種類がこの操作に使えない (山札から直接、捨て札の途中から、など)。
    InvalidSource,
    /// 移動先の山の種類がこの操作に使えない (山札・捨て札へ、組札へ列ごと、など)。
    InvalidDestination,
    /// 同じカードを自分自身の上に動かそうとした (組み立てた盤面に同じカードが2枚ある場合も)。
    SameCard,
    /// 色・ランク・スートのルールに合わない。
    RuleViolation,
    /// 山札も捨て札も空っぽで配れない。
    NothingToDeal,
    /// 取り消せる履歴がない。
    NoHistory,
    /// 指定されたカードが見つからない。
    CardNotFound,
    /// 空の山からカードを取り出そうとした。
    EmptyPile,
    /// 存在しない山 (Tableau(7) など) が指定された。
    NoSuchPile,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            GameError::NotFaceUp => "card is not face up",
            GameError::InvalidSource => "cards cannot be moved from that pile",
            GameError::InvalidDestination => "cards cannot be moved to that pile",
            GameError::SameCard => "source and destination are the same card",
            GameError::RuleViolation => "move breaks the solitaire rules",
            GameError::NothingToDeal => "stock and waste are both empty",
            GameError::NoHistory => "no move to undo",
            GameError::CardNotFound => "card not found",
            GameError::EmptyPile => "pile is empty",
            GameError::NoSuchPile => "no such pile",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for GameError {}

/// このクレートの `Result` 型エイリアス。
pub type GameResult<T> = Result<T, GameError>;
