use serde::{Deserialize, Serialize};

use crate::domain::{Action, HandState};

/// Запись траектории: либо снапшот, либо действие.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum TrajectoryEntry {
    State(HandState),
    Action(Action),
}

/// Траектория одного места за одну раздачу: чередующиеся снапшоты и действия.
///
/// Пишет в неё только контроллер. После завершения раздачи последняя запись
/// каждой траектории – всегда снапшот (финальная дозапись), даже у места,
/// которое не ходило последним. На новой раздаче траектория создаётся заново.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Trajectory {
    pub entries: Vec<TrajectoryEntry>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push_state(&mut self, state: HandState) {
        self.entries.push(TrajectoryEntry::State(state));
    }

    pub fn push_action(&mut self, action: Action) {
        self.entries.push(TrajectoryEntry::Action(action));
    }

    pub fn ends_with_state(&self) -> bool {
        matches!(self.entries.last(), Some(TrajectoryEntry::State(_)))
    }

    /// Только действия, в порядке записи.
    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.entries.iter().filter_map(|e| match e {
            TrajectoryEntry::Action(a) => Some(a),
            TrajectoryEntry::State(_) => None,
        })
    }

    /// Только снапшоты, в порядке записи.
    pub fn states(&self) -> impl Iterator<Item = &HandState> {
        self.entries.iter().filter_map(|e| match e {
            TrajectoryEntry::State(s) => Some(s),
            TrajectoryEntry::Action(_) => None,
        })
    }
}
