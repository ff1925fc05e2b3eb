//! Интерфейс внешнего игрового движка.
//!
//! Контроллер сессии не знает правил покера: подсчёт ставок, оценка рук и
//! генерация легальных действий живут за этим трейтом. Основные операции:
//!   - `reset` – начать новую раздачу, вернуть стартовый снапшот и активное место;
//!   - `step` – применить действие, вернуть следующий снапшот и следующее место;
//!   - `is_over` / `payoffs` – конец раздачи и итоги по местам;
//!   - `state_for` – снапшот раздачи глазами конкретного места.

pub mod dev;
pub mod errors;

pub use dev::{DevEngine, DevEngineConfig};
pub use errors::EngineError;

use crate::domain::{Action, HandState, Payoff, SeatIndex, SEAT_COUNT};

/// Движок одной раздачи лимитного холдема (внешний коллаборатор).
pub trait GameEngine {
    /// Начать новую раздачу. Возвращает снапшот для активного места и само место.
    fn reset(&mut self) -> Result<(HandState, SeatIndex), EngineError>;

    /// Применить нативное действие активного места.
    /// Возвращает снапшот для следующего места и само место.
    fn step(&mut self, action: Action) -> Result<(HandState, SeatIndex), EngineError>;

    /// Завершена ли текущая раздача.
    fn is_over(&self) -> bool;

    /// Легальные действия места в текущем состоянии (пусто, если ход не его).
    fn legal_actions(&self, seat: SeatIndex) -> Vec<Action>;

    /// Итоги завершённой раздачи: изменение стека каждого места.
    fn payoffs(&self) -> [Payoff; SEAT_COUNT];

    /// Снапшот раздачи глазами места. После завершения раздачи
    /// открывает все карманные карты.
    fn state_for(&self, seat: SeatIndex) -> HandState;

    /// Человекочитаемый текст действия (для журнала и интерфейса).
    fn decode_action(&self, action: &Action) -> String {
        action.to_string()
    }
}

/// RNG интерфейс для движка и агентов.
/// Реализации – в `infra` (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Равномерный индекс в диапазоне `0..len` (len > 0).
    fn index(&mut self, len: usize) -> usize;
}
