// src/systems/move_engine.rs

use log::{debug, info, warn};

use crate::components::card::CardId;
use crate::components::pile::{Pile, PileKind};
use crate::components::piles::Piles;
use crate::error::{GameError, GameResult};
use crate::logic::rules;

/// カード移動のロジックを実行するシステムだよ！🖱️💨
///
/// 「どのカードをどこに動かすか」を受け取って、ルール上可能かチェックし、
/// 可能なら山を書き換える。自分では状態を持たず、山はいつも `Field` から借りてくる。
/// チェックは全部、書き換えの前に済ませるので、失敗したときは何も変わらない。
pub struct MoveEngine;

/// 成功した移動の結果。`moved` は一緒に動いた枚数 (列ごとなら2枚以上)。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub card: CardId,
    pub source: PileKind,
    pub destination: PileKind,
    pub moved: usize,
}

/// 山札をめくった結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealOutcome {
    /// 山札の一番上を捨て札に表向きで置いた。
    Dealt(CardId),
    /// 山札が空だったので、捨て札 `count` 枚を裏向きで山札に戻した。
    Recycled { count: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transfer {
    /// 一番上の1枚だけ。
    Single,
    /// 場札の途中のカードから上を全部。
    Stack,
}

/// チェックが通った移動の予定。
#[derive(Debug, Clone, Copy)]
struct Plan {
    card: CardId,
    source: PileKind,
    destination: PileKind,
    transfer: Transfer,
}

impl MoveEngine {
    /// カードを指定した山へ動かす。
    ///
    /// 移動先が空でなければ、その一番上のカードへの `move_card_to_card` と同じ。
    /// 空の場札には K (とその上の列) だけ、空の組札には A だけ置ける。
    pub fn move_card_to_pile(piles: &mut Piles, card: CardId, destination: PileKind) -> GameResult<MoveOutcome> {
        let plan = Self::plan_to_pile(piles, card, destination).map_err(|err| {
            warn!("[MoveEngine] {} -> {} rejected: {}", card, destination, err);
            err
        })?;
        Self::execute(piles, plan)
    }

    /// カードを別のカードの上へ動かす。
    ///
    /// `target` は場札か組札の一番上のカードでないとダメ。
    /// `card` が山の一番上じゃなければ場札同士の列の移動になる (組札へは1枚ずつ)。
    pub fn move_card_to_card(piles: &mut Piles, card: CardId, target: CardId) -> GameResult<MoveOutcome> {
        let plan = Self::plan_to_card(piles, card, target).map_err(|err| {
            warn!("[MoveEngine] {} -> {} rejected: {}", card, target, err);
            err
        })?;
        Self::execute(piles, plan)
    }

    /// 山札から捨て札へ1枚めくる。山札が空なら捨て札を全部戻す (リサイクル)。
    pub fn deal_card(piles: &mut Piles) -> GameResult<DealOutcome> {
        let (stock, waste) = piles.stock_and_waste_mut();

        if rules::can_deal_from_stock(stock.is_empty()) {
            let mut card = stock.pop_front()?;
            card.is_face_up = true;
            let id = card.id();
            waste.push_front(card);
            debug!("[MoveEngine] dealt {} ({} left in stock)", id, stock.count());
            return Ok(DealOutcome::Dealt(id));
        }

        if rules::can_reset_stock_from_waste(stock.is_empty(), waste.is_empty()) {
            let count = turn_over_all(waste, stock, false);
            info!("[MoveEngine] recycled {} waste cards back into the stock", count);
            return Ok(DealOutcome::Recycled { count });
        }

        warn!("[MoveEngine] nothing to deal: stock and waste are empty");
        Err(GameError::NothingToDeal)
    }

    /// リサイクルの逆。山札を全部、表向きで元の順番のまま捨て札に戻す。
    pub(crate) fn unrecycle(piles: &mut Piles) -> GameResult<usize> {
        let (stock, waste) = piles.stock_and_waste_mut();
        if stock.is_empty() {
            return Err(GameError::EmptyPile);
        }
        let count = turn_over_all(stock, waste, true);
        info!("[MoveEngine] un-recycled {} cards back onto the waste", count);
        Ok(count)
    }

    /// ルールを無視して `card` (とその上のカード) を `from` から `to` へ移す。取り消し専用。
    pub(crate) fn relocate(piles: &mut Piles, card: CardId, from: PileKind, to: PileKind) -> GameResult<usize> {
        piles.get(to)?;
        let run = piles.get_mut(from)?.take_through(card)?;
        let moved = run.len();
        piles.get_mut(to)?.splice_front(run);
        debug!("[MoveEngine] relocated {} ({} cards) from {} to {}", card, moved, from, to);
        Ok(moved)
    }

    fn plan_to_pile(piles: &Piles, id: CardId, destination: PileKind) -> GameResult<Plan> {
        let source = piles.locate(id)?;
        let card = piles.card(id)?;
        if !card.is_face_up {
            return Err(GameError::NotFaceUp);
        }
        if !destination.accepts_moves() {
            return Err(GameError::InvalidDestination);
        }

        let dst_pile = piles.get(destination)?;
        if let Some(top) = dst_pile.top() {
            return Self::plan_to_card(piles, id, top.id());
        }

        // ここから先は移動先が空っぽ
        if source.is_stock() {
            return Err(GameError::InvalidSource);
        }

        if piles.get(source)?.is_top(id) {
            if !rules::is_move_valid(card, dst_pile) {
                return Err(GameError::RuleViolation);
            }
            return Ok(Plan { card: id, source, destination, transfer: Transfer::Single });
        }

        // 列の途中から: 場札から場札へしか動かせない
        if !source.is_tableau() {
            return Err(GameError::InvalidSource);
        }
        if !destination.is_tableau() {
            return Err(GameError::InvalidDestination);
        }
        if !rules::can_move_to_tableau(card, None) {
            return Err(GameError::RuleViolation);
        }
        Ok(Plan { card: id, source, destination, transfer: Transfer::Stack })
    }

    fn plan_to_card(piles: &Piles, id: CardId, target_id: CardId) -> GameResult<Plan> {
        let source = piles.locate(id)?;
        let destination = piles.locate(target_id)?;
        let card = piles.card(id)?;
        let target = piles.card(target_id)?;

        if !card.is_face_up || !target.is_face_up {
            return Err(GameError::NotFaceUp);
        }
        if source.is_stock() {
            return Err(GameError::InvalidSource);
        }
        if id == target_id {
            return Err(GameError::SameCard);
        }
        if !destination.accepts_moves() || source == destination || !piles.get(destination)?.is_top(target_id) {
            return Err(GameError::InvalidDestination);
        }

        let is_top = piles.get(source)?.is_top(id);
        if !is_top && !source.is_tableau() {
            return Err(GameError::InvalidSource);
        }

        let legal = match destination {
            PileKind::Foundation(_) => {
                if !is_top {
                    // 組札へは列ごと動かせない
                    return Err(GameError::InvalidDestination);
                }
                rules::can_move_to_foundation(card, Some(target))
            }
            PileKind::Tableau(_) => rules::can_move_to_tableau(card, Some(target)),
            PileKind::Stock | PileKind::Waste => return Err(GameError::InvalidDestination),
        };
        if !legal {
            return Err(GameError::RuleViolation);
        }

        let transfer = if is_top { Transfer::Single } else { Transfer::Stack };
        Ok(Plan { card: id, source, destination, transfer })
    }

    fn execute(piles: &mut Piles, plan: Plan) -> GameResult<MoveOutcome> {
        let moved = match plan.transfer {
            Transfer::Single => {
                let card = piles.get_mut(plan.source)?.pop_front()?;
                piles.get_mut(plan.destination)?.push_front(card);
                1
            }
            Transfer::Stack => {
                let run = piles.get_mut(plan.source)?.cut_from(plan.card)?;
                let moved = run.len();
                piles.get_mut(plan.destination)?.splice_front(run);
                moved
            }
        };
        info!(
            "[MoveEngine] moved {} ({} card(s)) from {} to {}",
            plan.card, moved, plan.source, plan.destination
        );
        Ok(MoveOutcome {
            card: plan.card,
            source: plan.source,
            destination: plan.destination,
            moved,
        })
    }
}

/// `from` のカードを一番上から順に1枚ずつ `to` へ裏返しながら積む。
///
/// 1枚ずつ積むので `to` 側では並びが逆になる。捨て札→山札でやれば、
/// 次に山札をめくる順番は最初にめくった順番と同じになるよ。
fn turn_over_all(from: &mut Pile, to: &mut Pile, face_up: bool) -> usize {
    let cards = from.drain_all();
    let count = cards.len();
    for mut card in cards {
        card.is_face_up = face_up;
        to.push_front(card);
    }
    count
}
