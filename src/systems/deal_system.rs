// src/systems/deal_system.rs

use log::{debug, info};

use crate::components::card::CardId;
use crate::components::piles::Piles;
use crate::logic::deck::Deck;
use crate::systems::move_engine::{DealOutcome, MoveEngine};

// === 初期カード配置システム！ ===
// ゲーム開始時に、山札と7つの場札にカードを配る役割を担うシステムだよ。
#[derive(Default)]
pub struct DealInitialCardsSystem;

impl DealInitialCardsSystem {
    /// ゲームの初期カード配置を実行する関数だよ！ 🎉
    ///
    /// 1. デッキを全部、裏向きのまま山札に流し込む (デッキは空になる)。
    /// 2. 場札 i 列目に山札の一番上から i+1 枚ずつ配る。
    /// 3. 各場札の一番上だけ表にする。
    /// 4. 山札を1枚めくって、最初の捨て札を出す。
    ///
    /// めくった捨て札のカードを返す (山札が足りなければ `None`)。
    pub fn execute(&self, deck: &mut Deck, piles: &mut Piles) -> Option<CardId> {
        let (stock, tableaus) = piles.stock_and_tableaus_mut();
        deck.drain_into(stock);

        for (i, tableau) in tableaus.iter_mut().enumerate() {
            for _ in 0..=i {
                match stock.pop_front() {
                    Ok(card) => tableau.push_front(card),
                    Err(_) => break,
                }
            }
            tableau.flip_top_up();
            debug!("[DealSystem] {} に {} 枚配ったよ", tableau.kind(), tableau.count());
        }

        let first_waste = match MoveEngine::deal_card(piles) {
            Ok(DealOutcome::Dealt(card)) => Some(card),
            _ => None,
        };
        info!(
            "🃏 初期配置完了！ 山札 {} 枚, 捨て札 {:?}",
            piles.stock().count(),
            first_waste.map(|card| card.to_string())
        );
        first_waste
    }
}
