// src/components/card.rs

use std::fmt;

// serde: 描画側にスナップショットを渡すときに使うよ！
use serde::{Deserialize, Serialize};

use crate::components::pile::PileKind;
use crate::config::rules::{NUM_RANKS, NUM_SUITS};

/// カードのスート（マーク）を表す列挙型だよ！♠️♦️♣️❤️
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spade,   // ♠️
    Diamond, // ♦️
    Club,    // ♣️
    Heart,   // ❤️
}

/// カードのランク（数字）。A < 2 < ... < K で、回り込みはなし！
///
/// `PartialOrd, Ord` を付けてるから `<` で大小比較できるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,  // 11
    Queen, // 12
    King,  // 13
}

/// カードの色。場札のルール (色違い) で使う！❤️🖤
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

pub const ALL_SUITS: [Suit; NUM_SUITS] = [Suit::Spade, Suit::Diamond, Suit::Club, Suit::Heart];

pub const ALL_RANKS: [Rank; NUM_RANKS] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl CardColor {
    /// スートからカードの色を取得する関数。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }
}

impl Suit {
    pub fn color(self) -> CardColor {
        CardColor::from_suit(self)
    }

    fn symbol(self) -> char {
        match self {
            Suit::Spade => 'S',
            Suit::Diamond => 'D',
            Suit::Club => 'C',
            Suit::Heart => 'H',
        }
    }
}

impl Rank {
    /// A=1 ... K=13 の数値。
    pub fn value(self) -> u8 {
        self as u8
    }

    /// 数値からランクに戻す。範囲外なら `None`。
    pub fn from_value(value: u8) -> Option<Rank> {
        ALL_RANKS.get(usize::from(value).checked_sub(1)?).copied()
    }

    /// ひとつ上のランク (K の次はない)。
    pub fn next(self) -> Option<Rank> {
        Rank::from_value(self.value() + 1)
    }

    /// ひとつ下のランク (A の前はない)。
    pub fn prev(self) -> Option<Rank> {
        Rank::from_value(self.value() - 1)
    }

    fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// カードの「正体」(スートとランクの組) だよ。
///
/// 1ゲームの中で同じ `CardId` のカードはちょうど1枚しかないから、
/// 外側 (入力パーサとか) はこれでカードを指定する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId {
    pub suit: Suit,
    pub rank: Rank,
}

impl CardId {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub fn color(self) -> CardColor {
        self.suit.color()
    }
}

impl fmt::Display for CardId {
    /// `KH` (ハートのK) や `10S` みたいな短い表記。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

/// 場にあるカード1枚。
///
/// - `suit` / `rank`: 変わらない正体
/// - `is_face_up`: 表向きかどうか
/// - `pile`: 今いる山への「弱い」逆参照。持ち主はあくまで山 (Pile) のほうで、
///   これは「このカードは山の一番上？」みたいな問い合わせ用。山に入る前は `None`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
    pub(crate) pile: Option<PileKind>,
}

impl Card {
    /// 裏向きの新しいカードを作る。まだどの山にも入ってない。
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            is_face_up: false,
            pile: None,
        }
    }

    /// 表向きで作るヘルパー (テストの盤面づくりで便利！)。
    pub fn face_up(suit: Suit, rank: Rank) -> Self {
        Self {
            is_face_up: true,
            ..Self::new(suit, rank)
        }
    }

    pub fn id(&self) -> CardId {
        CardId::new(self.suit, self.rank)
    }

    pub fn color(&self) -> CardColor {
        self.suit.color()
    }

    /// 今いる山。
    pub fn pile(&self) -> Option<PileKind> {
        self.pile
    }

    pub fn is(&self, id: CardId) -> bool {
        self.suit == id.suit && self.rank == id.rank
    }

    pub fn flip(&mut self) {
        self.is_face_up = !self.is_face_up;
    }
}

impl From<CardId> for Card {
    fn from(id: CardId) -> Self {
        Card::new(id.suit, id.rank)
    }
}
