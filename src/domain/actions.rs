use core::fmt;

use serde::{Deserialize, Serialize};

/// Действие в лимитном холдеме. Закрытый набор: размеры ставок фиксированы
/// правилами лимита, поэтому у Raise нет суммы – её знает движок.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Action {
    Fold,
    Check,
    Call,
    Raise,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Fold => "fold",
            Action::Check => "check",
            Action::Call => "call",
            Action::Raise => "raise",
        };
        write!(f, "{s}")
    }
}

/// Кодировка действий, которую объявляет источник решений для места.
///
/// Человеческий ввод всегда ординальный (клавиши 0/1/2 – индекс в списке
/// легальных действий), часть агентов отдаёт действие сразу в нативном виде.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionEncoding {
    /// Ординал в списке легальных действий; контроллер переводит его
    /// в нативное действие перед вызовом движка.
    AbstractOrdinal,
    /// Нативное действие движка, передаётся без перевода.
    Native,
}

/// Выбранное (ещё не применённое) действие – в той кодировке,
/// которую объявило место.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ChosenAction {
    Ordinal(usize),
    Native(Action),
}
