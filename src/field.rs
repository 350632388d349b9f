// src/field.rs
//! 1ゲーム分の盤面 (フィールド) だよ！🃏
//!
//! 13個の山と履歴と手数カウンタを持っていて、外から来るコマンドは全部ここを通る。
//! 実際のルール判定とカード移動は `MoveEngine` に任せて、
//! こっちは履歴の記録・場札の裏返し・状態の更新を担当する。

use std::collections::HashSet;

use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::components::card::{Card, CardId, Rank, Suit};
use crate::components::game_state::GameStatus;
use crate::components::pile::{Pile, PileKind};
use crate::components::piles::Piles;
use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::history::{Action, History};
use crate::logic::auto_move::find_automatic_foundation_move;
use crate::logic::deck::Deck;
use crate::snapshot::FieldSnapshot;
use crate::systems::{DealInitialCardsSystem, DealOutcome, MoveEngine, MoveOutcome, WinConditionSystem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    piles: Piles,
    history: History,
    moves: u32,
    status: GameStatus,
    /// リサイクルを履歴に積むかどうか (`GameConfig::undo_recycle`)。
    record_recycles: bool,
}

impl Field {
    /// 渡された乱数でシャッフルして配る。
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_deck(Deck::shuffled(rng))
    }

    /// シード固定で配る。同じシードなら毎回同じ配置になるよ。
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(&mut rng)
    }

    pub fn with_config(config: &GameConfig) -> Self {
        let mut field = match config.seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::new(&mut StdRng::from_entropy()),
        };
        field.record_recycles = config.undo_recycle;
        field
    }

    /// 並び済みのデッキから配る。
    pub fn from_deck(mut deck: Deck) -> Self {
        let mut piles = Piles::new();
        DealInitialCardsSystem::default().execute(&mut deck, &mut piles);
        Self::assemble(piles)
    }

    /// 組み立て済みの山からフィールドを作る (途中局面のテスト用)。
    ///
    /// 52枚そろってなくてもいいけど、同じカードが2枚あったら `SameCard`。
    pub fn from_piles(piles: Piles) -> GameResult<Self> {
        let mut seen = HashSet::new();
        for card in piles.iter().flat_map(Pile::iter) {
            if !seen.insert(card.id()) {
                warn!("[Field] duplicate card {} in the given piles", card.id());
                return Err(GameError::SameCard);
            }
        }
        Ok(Self::assemble(piles))
    }

    fn assemble(piles: Piles) -> Self {
        let status = WinConditionSystem::new().evaluate(&piles);
        Self {
            piles,
            history: History::new(),
            moves: 0,
            status,
            record_recycles: GameConfig::default().undo_recycle,
        }
    }

    // --- 問い合わせ ---

    pub fn piles(&self) -> &Piles {
        &self.piles
    }

    pub fn pile(&self, kind: PileKind) -> GameResult<&Pile> {
        self.piles.get(kind)
    }

    pub fn stock(&self) -> &Pile {
        self.piles.stock()
    }

    pub fn waste(&self) -> &Pile {
        self.piles.waste()
    }

    pub fn tableaus(&self) -> &[Pile] {
        self.piles.tableaus()
    }

    pub fn foundations(&self) -> &[Pile] {
        self.piles.foundations()
    }

    /// 山の一番上のカード。空の山や存在しない山なら `None`。
    pub fn top_card(&self, kind: PileKind) -> Option<&Card> {
        self.piles.get(kind).ok()?.top()
    }

    /// フィールド全体からカードを探す (入力の "kh" とかを解決するのに使う)。
    pub fn search(&self, suit: Suit, rank: Rank) -> GameResult<&Card> {
        self.piles.search(suit, rank)
    }

    pub fn locate(&self, card: CardId) -> GameResult<PileKind> {
        self.piles.locate(card)
    }

    /// 成功したコマンドの数 (取り消しも1手に数える)。
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    pub fn is_dead_end(&self) -> bool {
        self.status == GameStatus::DeadEnd
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot::capture(self)
    }

    // --- コマンド ---

    /// 山札を1枚めくる。山札が空なら捨て札を山札に戻す。
    pub fn deal_card(&mut self) -> GameResult<DealOutcome> {
        let outcome = MoveEngine::deal_card(&mut self.piles)?;
        match outcome {
            DealOutcome::Dealt(card) => self.history.push(Action::SingleMove {
                card,
                source: PileKind::Stock,
                destination: PileKind::Waste,
                revealed: false,
            }),
            DealOutcome::Recycled { count } if self.record_recycles => {
                self.history.push(Action::RecycleWasteToStock { count })
            }
            DealOutcome::Recycled { .. } => {
                // 戻せないリサイクルをまたいで、前のめくりは取り消せない
                info!("[Field] recycle is not undoable, history cleared");
                self.history.clear();
            }
        }
        self.finish_command();
        Ok(outcome)
    }

    /// カードを山へ動かす。移動先が空でなければ、その一番上のカードの上に置く。
    pub fn move_card_to_pile(&mut self, card: CardId, destination: PileKind) -> GameResult<MoveOutcome> {
        let outcome = MoveEngine::move_card_to_pile(&mut self.piles, card, destination)?;
        self.record_move(outcome);
        Ok(outcome)
    }

    /// カードを別のカードの上へ動かす。
    pub fn move_card_to_card(&mut self, card: CardId, target: CardId) -> GameResult<MoveOutcome> {
        let outcome = MoveEngine::move_card_to_card(&mut self.piles, card, target)?;
        self.record_move(outcome);
        Ok(outcome)
    }

    /// 一番新しいコマンドを取り消す。取り消した履歴を返すよ。
    ///
    /// ルールのチェックはしない (前に合法だった手を戻すだけだから)。
    /// 取り消しのやり直し (redo) はない。
    pub fn undo(&mut self) -> GameResult<Action> {
        let action = self.history.pop().map_err(|err| {
            warn!("[Field] undo rejected: {}", err);
            err
        })?;

        let result = match action {
            Action::SingleMove {
                card,
                source,
                destination,
                revealed,
            } => self.undo_move(card, source, destination, revealed),
            Action::RecycleWasteToStock { .. } => MoveEngine::unrecycle(&mut self.piles).map(|_| ()),
        };
        if let Err(err) = result {
            warn!("[Field] undo of {:?} failed: {}", action, err);
            self.history.push(action);
            return Err(err);
        }

        info!("[Field] undid {:?}", action);
        self.finish_command();
        Ok(action)
    }

    /// カードが今すぐ行ける組札 (あれば)。
    pub fn find_foundation_target(&self, card: CardId) -> Option<PileKind> {
        find_automatic_foundation_move(&self.piles, card)
    }

    /// 行ける組札があれば、ふつうの移動としてそこへ送る。
    pub fn auto_move_to_foundation(&mut self, card: CardId) -> GameResult<PileKind> {
        let face_up = self.piles.card(card).map(|c| c.is_face_up).map_err(|err| {
            warn!("[Field] auto move of {} rejected: {}", card, err);
            err
        })?;
        if !face_up {
            warn!("[Field] auto move of {} rejected: {}", card, GameError::NotFaceUp);
            return Err(GameError::NotFaceUp);
        }
        let target = self.find_foundation_target(card).ok_or_else(|| {
            warn!("[Field] auto move of {} rejected: no foundation takes it", card);
            GameError::RuleViolation
        })?;
        self.move_card_to_pile(card, target)?;
        Ok(target)
    }

    fn undo_move(&mut self, card: CardId, source: PileKind, destination: PileKind, revealed: bool) -> GameResult<()> {
        // 書き換える前に全部確かめる
        if !self.piles.get(destination)?.contains(card) {
            return Err(GameError::CardNotFound);
        }
        self.piles.get(source)?;

        if revealed {
            self.piles.get_mut(source)?.flip_top_down();
        }
        MoveEngine::relocate(&mut self.piles, card, destination, source)?;
        if source.is_stock() {
            // めくったカードは裏向きで山札に帰る
            self.piles.get_mut(source)?.flip_top_down();
        }
        Ok(())
    }

    fn record_move(&mut self, outcome: MoveOutcome) {
        // 動かした後に出てきた場札の一番上は表にする
        let revealed = self
            .piles
            .get_mut(outcome.source)
            .map_or(false, Pile::flip_top_up);
        self.history.push(Action::SingleMove {
            card: outcome.card,
            source: outcome.source,
            destination: outcome.destination,
            revealed,
        });
        self.finish_command();
    }

    fn finish_command(&mut self) {
        self.moves += 1;
        let status = WinConditionSystem::new().evaluate(&self.piles);
        if status != self.status {
            info!("[Field] status {:?} -> {:?}", self.status, status);
        }
        self.status = status;
    }
}
