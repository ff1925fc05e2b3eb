//! Перевод сырого ввода в абстрактные намерения.
//!
//! Намерений три: выбрать действие по ординалу, подтвердить рестарт, выйти.
//! За кадр наружу уходит не больше одного намерения; проверка ординала на
//! диапазон – дело контроллера, здесь цифры отдаются как есть.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use serde::{Deserialize, Serialize};

/// Абстрактное намерение игрока на один кадр.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Intent {
    /// Выбрать действие с данным ординалом в списке легальных.
    SelectAction(usize),
    /// Подтвердить рестарт (валидно только когда раздача окончена).
    ConfirmRestart,
    /// Выйти из сессии (валидно в любом состоянии).
    Quit,
}

/// Клавиша → намерение. Цифровой ряд и цифровая клавиатура дают один и тот же
/// символ, так что отдельной ветки для keypad не нужно.
pub fn map_key(key: KeyEvent) -> Option<Intent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Esc => Some(Intent::Quit),
        KeyCode::Enter => Some(Intent::ConfirmRestart),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            Some(Intent::SelectAction(c as usize - '0' as usize))
        }
        _ => None,
    }
}

/// Источник намерений для внешнего цикла: не больше одного за вызов.
pub trait InputSource {
    /// Подождать событие не дольше `wait` и отдать намерение, если оно есть.
    fn poll_intent(&mut self, wait: Duration) -> io::Result<Option<Intent>>;
}

/// Источник намерений поверх crossterm. `poll` с таймаутом кадра заменяет
/// отдельный sleep: цикл не крутится вхолостую и не блокируется навсегда.
#[derive(Clone, Copy, Debug, Default)]
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn poll_intent(&mut self, wait: Duration) -> io::Result<Option<Intent>> {
        if event::poll(wait)? {
            if let Event::Key(key) = event::read()? {
                return Ok(map_key(key));
            }
        }
        Ok(None)
    }
}
