use thiserror::Error;

use crate::agents::AgentError;
use crate::domain::SeatIndex;
use crate::engine::EngineError;

/// Фатальные ошибки сессии. Контроллер не пытается их чинить –
/// они пробрасываются наружу, и внешний цикл завершает работу.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Движок вернул место вне диапазона – продолжать безопасно нельзя.
    #[error("Движок вернул некорректное место: {0}")]
    InvalidSeat(SeatIndex),

    /// В активной раздаче у активного места нет легальных действий.
    #[error("Движок не дал легальных действий активному месту {0}")]
    NoLegalActions(SeatIndex),

    /// Агент не смог выбрать действие. Разумного действия «по умолчанию»
    /// в лимитном холдеме нет – фолдить за игрока нельзя.
    #[error("Агент места {seat} не смог выбрать действие")]
    Agent {
        seat: SeatIndex,
        #[source]
        source: AgentError,
    },

    #[error("Агент места {seat} вернул ординал {ordinal}, легальных действий {available}")]
    OrdinalOutOfRange {
        seat: SeatIndex,
        ordinal: usize,
        available: usize,
    },

    #[error("Агент места {seat} вернул действие не в той кодировке, которую объявил")]
    EncodingMismatch { seat: SeatIndex },

    #[error(transparent)]
    Engine(#[from] EngineError),
}
