use thiserror::Error;

/// Ошибки движка раздачи.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Раздача не активна")]
    NoActiveHand,

    #[error("Раздача уже завершена")]
    HandAlreadyOver,

    #[error("Недопустимое действие в текущем состоянии раздачи")]
    IllegalAction,

    #[error("Внутренняя ошибка движка: {0}")]
    Internal(&'static str),
}
