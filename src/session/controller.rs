use crate::agents::Agent;
use crate::domain::{
    ActionEncoding, ChosenAction, HandState, Payoff, SeatIndex, HUMAN_SEAT, SEAT_COUNT,
};
use crate::engine::GameEngine;
use crate::input::Intent;
use crate::session::errors::SessionError;
use crate::session::journal::{HandJournal, JournalEventKind};
use crate::session::trajectory::Trajectory;
use crate::session::view::{build_session_view, SessionPhase, SessionView};

/// Конфиг сессии.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Отображаемые имена мест (для DTO/презентера).
    pub seat_names: [String; SEAT_COUNT],
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seat_names: ["You".to_string(), "Opponent".to_string()],
        }
    }
}

/// Итог завершённой раздачи.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandResult {
    pub payoffs: [Payoff; SEAT_COUNT],
    /// Итоговая строка для игрока. Только текст, на переходы не влияет.
    pub text: String,
}

/// Что внешнему циклу делать после тика.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickStatus {
    Continue,
    Quit,
}

/// Состояние автомата ходов между тиками.
///
/// Разрешение выбранного действия (перевод кодировки, шаг движка, записи в
/// траектории) выполняется внутри того же тика, который действие породил,
/// поэтому отдельного хранимого состояния «resolving» нет.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TurnState {
    /// Ход человека, действие ещё не выбрано.
    AwaitingInput,
    /// Ход оппонента-агента.
    AgentTurn,
    /// Раздача окончена, принимается только рестарт.
    HandOver,
}

/// Контроллер сессии: владеет состоянием раздачи, траекториями и журналом.
///
/// Единственная точка входа – `tick`, по одному вызову на кадр. Кто сейчас
/// ходит, какие намерения легальны и когда раздача заканчивается – решает
/// только автомат состояний; ввод не фильтруется снаружи. Намерение не к
/// текущему состоянию – no-op, не ошибка.
pub struct TurnController<E: GameEngine> {
    engine: E,
    opponent: Box<dyn Agent>,
    config: SessionConfig,
    turn: TurnState,
    active_seat: SeatIndex,
    /// Снапшот активного места – по нему принимаются решения.
    active_state: HandState,
    /// Снапшот глазами человека – по нему строится view.
    /// Обновляется после каждой мутации, поэтому `current_view` чистый.
    hero_state: HandState,
    trajectories: [Trajectory; SEAT_COUNT],
    journal: HandJournal,
    last_actions: [Option<String>; SEAT_COUNT],
    result: Option<HandResult>,
}

impl<E: GameEngine> TurnController<E> {
    /// Создать сессию и сразу запустить первую раздачу.
    pub fn new(
        mut engine: E,
        opponent: Box<dyn Agent>,
        config: SessionConfig,
    ) -> Result<Self, SessionError> {
        let (state, seat) = Self::start_hand(&mut engine)?;
        let hero_state = engine.state_for(HUMAN_SEAT);

        let mut journal = HandJournal::new();
        journal.push(JournalEventKind::HandStarted {
            hand_id: state.hand_id,
        });

        Ok(Self {
            opponent,
            config,
            turn: Self::turn_for(seat),
            active_seat: seat,
            active_state: state,
            hero_state,
            trajectories: [Trajectory::new(), Trajectory::new()],
            journal,
            last_actions: [None, None],
            result: None,
            engine,
        })
    }

    /// Один кадр: принять (возможное) намерение и продвинуть автомат.
    pub fn tick(&mut self, intent: Option<Intent>) -> Result<TickStatus, SessionError> {
        // Выход валиден в любом состоянии; траектории не дозаписываются.
        if matches!(intent, Some(Intent::Quit)) {
            return Ok(TickStatus::Quit);
        }

        match self.turn {
            TurnState::HandOver => {
                if matches!(intent, Some(Intent::ConfirmRestart)) {
                    self.reset()?;
                }
                Ok(TickStatus::Continue)
            }

            TurnState::AwaitingInput => {
                match intent {
                    Some(Intent::SelectAction(ordinal))
                        if ordinal < self.active_state.legal_actions.len() =>
                    {
                        self.resolve(ChosenAction::Ordinal(ordinal))?;
                    }
                    // Нет ввода, ординал вне диапазона или намерение не к
                    // текущему состоянию – кадр проходит без эффекта.
                    _ => {}
                }
                Ok(TickStatus::Continue)
            }

            TurnState::AgentTurn => {
                // Намерения выбора в чужой ход гасятся самим состоянием автомата.
                let seat = self.active_seat;
                let chosen = self
                    .opponent
                    .decide(&self.active_state)
                    .map_err(|source| SessionError::Agent { seat, source })?;
                self.resolve(chosen)?;
                Ok(TickStatus::Continue)
            }
        }
    }

    /// Начать новую раздачу: свежие траектории, журнал и снапшоты.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        let (state, seat) = Self::start_hand(&mut self.engine)?;

        self.trajectories = [Trajectory::new(), Trajectory::new()];
        self.journal.clear();
        self.journal.push(JournalEventKind::HandStarted {
            hand_id: state.hand_id,
        });
        self.last_actions = [None, None];
        self.result = None;

        self.active_seat = seat;
        self.hero_state = self.engine.state_for(HUMAN_SEAT);
        self.active_state = state;
        self.turn = Self::turn_for(seat);
        Ok(())
    }

    /// Снапшот для рендера. Чистая проекция: можно звать сколько угодно раз,
    /// состояние контроллера не меняется.
    pub fn current_view(&self) -> SessionView {
        build_session_view(
            &self.hero_state,
            self.phase(),
            &self.config.seat_names,
            &self.last_actions,
            self.result.as_ref().map(|r| r.text.as_str()),
            |a| self.engine.decode_action(a),
        )
    }

    pub fn phase(&self) -> SessionPhase {
        match self.turn {
            TurnState::HandOver => SessionPhase::HandOver,
            _ => SessionPhase::InProgress,
        }
    }

    pub fn active_seat(&self) -> SeatIndex {
        self.active_seat
    }

    pub fn trajectory(&self, seat: SeatIndex) -> &Trajectory {
        &self.trajectories[seat as usize]
    }

    pub fn journal(&self) -> &HandJournal {
        &self.journal
    }

    pub fn result(&self) -> Option<&HandResult> {
        self.result.as_ref()
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
}

impl<E: GameEngine> TurnController<E> {
    /// Перевести выбранное действие в нативное, шагнуть движок и
    /// разнести результаты по траекториям.
    fn resolve(&mut self, chosen: ChosenAction) -> Result<(), SessionError> {
        let seat = self.active_seat;

        let action = match (self.seat_encoding(seat), chosen) {
            (ActionEncoding::AbstractOrdinal, ChosenAction::Ordinal(ordinal)) => self
                .active_state
                .legal_actions
                .get(ordinal)
                .copied()
                .ok_or(SessionError::OrdinalOutOfRange {
                    seat,
                    ordinal,
                    available: self.active_state.legal_actions.len(),
                })?,
            (ActionEncoding::Native, ChosenAction::Native(action)) => action,
            _ => return Err(SessionError::EncodingMismatch { seat }),
        };

        let (next_state, next_seat) = self.engine.step(action)?;
        Self::verify_seat(next_seat)?;
        Self::verify_seat(next_state.active_seat)?;

        let text = self.engine.decode_action(&action);
        self.journal.push(JournalEventKind::PlayerActed {
            seat,
            action,
            text: text.clone(),
        });
        self.last_actions[seat as usize] = Some(text);
        self.trajectories[seat as usize].push_action(action);

        self.active_seat = next_seat;

        if self.engine.is_over() {
            // Финальный снапшот каждому месту – и тому, кто не ходил последним.
            for s in 0..SEAT_COUNT {
                self.trajectories[s].push_state(self.engine.state_for(s as SeatIndex));
            }

            let payoffs = self.engine.payoffs();
            self.journal.push(JournalEventKind::HandFinished { payoffs });
            self.result = Some(HandResult {
                payoffs,
                text: result_text(payoffs[HUMAN_SEAT as usize]),
            });
            self.hero_state = self.engine.state_for(HUMAN_SEAT);
            self.turn = TurnState::HandOver;
        } else {
            if next_state.legal_actions.is_empty() {
                return Err(SessionError::NoLegalActions(next_seat));
            }
            self.trajectories[next_seat as usize].push_state(next_state.clone());
            self.active_state = next_state;
            self.hero_state = self.engine.state_for(HUMAN_SEAT);
            self.turn = Self::turn_for(next_seat);
        }

        Ok(())
    }

    fn start_hand(engine: &mut E) -> Result<(HandState, SeatIndex), SessionError> {
        let (state, seat) = engine.reset()?;
        Self::verify_seat(seat)?;
        Self::verify_seat(state.active_seat)?;
        if state.legal_actions.is_empty() {
            return Err(SessionError::NoLegalActions(seat));
        }
        Ok((state, seat))
    }

    fn seat_encoding(&self, seat: SeatIndex) -> ActionEncoding {
        // Человеческий ввод всегда ординальный; агент объявляет кодировку сам.
        if seat == HUMAN_SEAT {
            ActionEncoding::AbstractOrdinal
        } else {
            self.opponent.encoding()
        }
    }

    fn turn_for(seat: SeatIndex) -> TurnState {
        if seat == HUMAN_SEAT {
            TurnState::AwaitingInput
        } else {
            TurnState::AgentTurn
        }
    }

    fn verify_seat(seat: SeatIndex) -> Result<(), SessionError> {
        if (seat as usize) < SEAT_COUNT {
            Ok(())
        } else {
            Err(SessionError::InvalidSeat(seat))
        }
    }
}

/// Итоговая строка по выигрышу человека. Только текст, не логика.
fn result_text(human_payoff: Payoff) -> String {
    let outcome = match human_payoff {
        p if p < 0 => "You lost!",
        p if p > 0 => "You won!",
        _ => "Tie!",
    };
    format!("{outcome} Press Enter to play again!")
}
