use serde::{Deserialize, Serialize};

use crate::domain::{Action, Card, Chips, HandId, HandState, SeatIndex, SEAT_COUNT};

/// Фаза сессии: раздача идёт / раздача окончена, ждём рестарт.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SessionPhase {
    InProgress,
    HandOver,
}

/// Пункт меню действий: ординал + текст, как его раскодировал движок.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LegalActionDto {
    pub ordinal: usize,
    pub label: String,
}

/// DTO для рендера: всё, что нужно презентеру, и ничего из логики ходов.
///
/// Карты оппонента присутствуют только когда раздача завершена – до этого
/// его слот в `hole_cards` равен `None`, и презентер рисует рубашки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SessionView {
    pub hand_id: HandId,
    pub phase: SessionPhase,
    pub seat_names: [String; SEAT_COUNT],
    pub stacks: [Chips; SEAT_COUNT],
    pub pot: Chips,
    pub board: Vec<Card>,
    pub hole_cards: [Option<[Card; 2]>; SEAT_COUNT],
    pub active_seat: SeatIndex,
    /// Меню действий (непусто только в ход человека).
    pub legal_actions: Vec<LegalActionDto>,
    /// Последний ход каждого места в текстовом виде.
    pub last_actions: [Option<String>; SEAT_COUNT],
    /// Итоговая строка ("You won! …"), только в фазе HandOver.
    pub result_text: Option<String>,
}

/// Собрать DTO из снапшота глазами человека.
pub fn build_session_view(
    hero: &HandState,
    phase: SessionPhase,
    seat_names: &[String; SEAT_COUNT],
    last_actions: &[Option<String>; SEAT_COUNT],
    result_text: Option<&str>,
    decode: impl Fn(&Action) -> String,
) -> SessionView {
    let legal_actions = hero
        .legal_actions
        .iter()
        .enumerate()
        .map(|(ordinal, action)| LegalActionDto {
            ordinal,
            label: decode(action),
        })
        .collect();

    SessionView {
        hand_id: hero.hand_id,
        phase,
        seat_names: seat_names.clone(),
        stacks: hero.stacks,
        pot: hero.pot,
        board: hero.board.clone(),
        hole_cards: hero.hole_cards,
        active_seat: hero.active_seat,
        legal_actions,
        last_actions: last_actions.clone(),
        result_text: result_text.map(str::to_string),
    }
}
