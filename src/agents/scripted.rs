use crate::agents::{Agent, AgentError};
use crate::domain::{Action, ActionEncoding, ChosenAction, HandState};
use crate::engine::RandomSource;

/// Пассивный оппонент: чек, если можно, иначе колл, иначе первое легальное.
/// Отдаёт нативные действия – перевод ординалов ему не нужен.
#[derive(Clone, Copy, Debug, Default)]
pub struct CallingAgent;

impl Agent for CallingAgent {
    fn encoding(&self) -> ActionEncoding {
        ActionEncoding::Native
    }

    fn decide(&mut self, state: &HandState) -> Result<ChosenAction, AgentError> {
        let legal = &state.legal_actions;
        [Action::Check, Action::Call]
            .into_iter()
            .find(|a| legal.contains(a))
            .or_else(|| legal.first().copied())
            .map(ChosenAction::Native)
            .ok_or_else(|| AgentError::NoDecision("пустой список легальных действий".into()))
    }
}

/// Случайный оппонент: равновероятный ординал из списка легальных действий.
#[derive(Clone, Debug)]
pub struct RandomAgent<R: RandomSource> {
    rng: R,
}

impl<R: RandomSource> RandomAgent<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RandomSource> Agent for RandomAgent<R> {
    fn encoding(&self) -> ActionEncoding {
        ActionEncoding::AbstractOrdinal
    }

    fn decide(&mut self, state: &HandState) -> Result<ChosenAction, AgentError> {
        let len = state.legal_actions.len();
        if len == 0 {
            return Err(AgentError::NoDecision(
                "пустой список легальных действий".into(),
            ));
        }
        Ok(ChosenAction::Ordinal(self.rng.index(len)))
    }
}
