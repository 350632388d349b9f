// src/lib.rs
//! クロンダイク (ソリティア) のルールエンジンだよ！🃏
//!
//! 山札・捨て札・場札7列・組札4つを持つ盤面 (`Field`) と、
//! 合法手のチェック、カードの移動、取り消し、勝ち/行き詰まりの判定をまとめてる。
//! 入力の解析や描画は外側 (CLI や画面) のお仕事で、ここでは扱わないよ。
//!
//! ```
//! use klondike_engine::{Field, GameError};
//!
//! let mut field = Field::from_seed(42);
//! field.deal_card().expect("fresh stock has cards");
//! field.undo().expect("a deal can be undone");
//! assert_eq!(field.undo(), Err(GameError::NoHistory));
//! ```

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod components;
pub mod config;
pub mod error;
pub mod field;
pub mod history;
pub mod logic;
pub mod snapshot;
pub mod systems;

// よく使う型はトップレベルからも使えるようにしておくよ
pub use components::card::{Card, CardColor, CardId, Rank, Suit};
pub use components::game_state::GameStatus;
pub use components::pile::{Pile, PileKind};
pub use components::piles::Piles;
pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use field::Field;
pub use history::{Action, History};
pub use logic::deck::Deck;
pub use snapshot::{CardView, FieldSnapshot, PileSnapshot};
pub use systems::{DealOutcome, MoveOutcome};
