//! Агенты – источники решений для мест за столом.
//!
//! Человеческое место агентом не является: его решения приходят в контроллер
//! как намерения из `input`. Агент занимает место оппонента и обязан отвечать
//! быстро – `decide` вызывается синхронно внутри тика.

pub mod scripted;

pub use scripted::{CallingAgent, RandomAgent};

use thiserror::Error;

use crate::domain::{ActionEncoding, ChosenAction, HandState};

/// Ошибка агента. Для контроллера фатальна: повторов и действий
/// «за игрока» нет.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("Агент не смог выбрать действие: {0}")]
    NoDecision(String),
}

/// Источник решений одного места.
pub trait Agent {
    /// Кодировка, в которой агент отдаёт решения. Объявляется один раз;
    /// контроллер по ней решает, нужен ли перевод ординала в нативное действие.
    fn encoding(&self) -> ActionEncoding;

    /// Выбрать действие по снапшоту раздачи.
    fn decide(&mut self, state: &HandState) -> Result<ChosenAction, AgentError>;
}
