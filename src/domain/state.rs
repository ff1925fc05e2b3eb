use serde::{Deserialize, Serialize};

use crate::domain::actions::Action;
use crate::domain::cards::Card;
use crate::domain::chips::Chips;
use crate::domain::{HandId, SeatIndex, SEAT_COUNT};

/// Снапшот раздачи, который движок отдаёт наружу.
///
/// Снапшот строится «для зрителя» (`viewer`): карманные карты чужого места
/// присутствуют только когда раздача завершена (`terminal`). Список легальных
/// действий непуст только у активного места и только пока раздача идёт.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HandState {
    pub hand_id: HandId,
    /// Чьими глазами сделан снапшот.
    pub viewer: SeatIndex,
    /// Стеки мест (без учёта уже внесённого в банк).
    pub stacks: [Chips; SEAT_COUNT],
    pub pot: Chips,
    /// Открытые общие карты (0, 3, 4 или 5).
    pub board: Vec<Card>,
    /// Карманные карты по местам; None = скрыты от зрителя.
    pub hole_cards: [Option<[Card; 2]>; SEAT_COUNT],
    /// Легальные действия активного места (пусто для чужого зрителя).
    pub legal_actions: Vec<Action>,
    pub active_seat: SeatIndex,
    pub terminal: bool,
}
