use serde::{Deserialize, Serialize};

use crate::domain::{Action, HandId, Payoff, SeatIndex, SEAT_COUNT};

/// Тип события в журнале раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum JournalEventKind {
    /// Новая раздача началась.
    HandStarted { hand_id: HandId },

    /// Место сделало ход.
    PlayerActed {
        seat: SeatIndex,
        action: Action,
        /// Текст действия, как его раскодировал движок.
        text: String,
    },

    /// Раздача завершена, итоги по местам.
    HandFinished { payoffs: [Payoff; SEAT_COUNT] },
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct JournalEvent {
    pub index: u32,
    pub kind: JournalEventKind,
}

/// Журнал текущей раздачи. Очищается при старте новой –
/// история матча за пределами одной раздачи не хранится.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct HandJournal {
    pub events: Vec<JournalEvent>,
}

impl HandJournal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: JournalEventKind) {
        let index = self.events.len() as u32;
        self.events.push(JournalEvent { index, kind });
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
