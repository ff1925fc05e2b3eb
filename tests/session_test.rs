use holdem_session::agents::{Agent, AgentError};
use holdem_session::domain::{
    Action, ActionEncoding, Card, Chips, ChosenAction, HandState, Payoff, SeatIndex, HUMAN_SEAT,
    OPPONENT_SEAT, SEAT_COUNT,
};
use holdem_session::engine::{EngineError, GameEngine};
use holdem_session::input::Intent;
use holdem_session::session::{
    HandJournal, JournalEventKind, SessionConfig, SessionError, SessionPhase, TickStatus,
    Trajectory, TurnController,
};

fn card(s: &str) -> Card {
    s.parse().unwrap()
}

/// Один заранее заданный переход движка.
struct ScriptStep {
    next_seat: SeatIndex,
    /// Легальные действия следующего активного места.
    next_legal: Vec<Action>,
    over_after: bool,
    payoffs: [Payoff; SEAT_COUNT],
}

/// Скриптовый движок: каждый step отрабатывает следующий переход из списка.
/// Легальность действий не проверяет – тесты контроллера это и используют.
struct ScriptEngine {
    first_seat: SeatIndex,
    first_legal: Vec<Action>,
    steps: Vec<ScriptStep>,
    cursor: usize,
    over: bool,
    active: SeatIndex,
    legal: Vec<Action>,
    payoffs: [Payoff; SEAT_COUNT],
    /// Всё, что пришло в step, в порядке вызовов.
    applied: Vec<Action>,
    resets: usize,
}

impl ScriptEngine {
    fn new(first_seat: SeatIndex, first_legal: Vec<Action>, steps: Vec<ScriptStep>) -> Self {
        Self {
            first_seat,
            first_legal,
            steps,
            cursor: 0,
            over: false,
            active: first_seat,
            legal: Vec::new(),
            payoffs: [0; SEAT_COUNT],
            applied: Vec::new(),
            resets: 0,
        }
    }

    fn make_state(&self, viewer: SeatIndex) -> HandState {
        let mut hole_cards = [None; SEAT_COUNT];
        if (viewer as usize) < SEAT_COUNT {
            hole_cards[viewer as usize] = Some([card("As"), card("Ks")]);
        }
        if self.over {
            hole_cards = [
                Some([card("As"), card("Ks")]),
                Some([card("Qd"), card("Qh")]),
            ];
        }

        HandState {
            hand_id: self.resets as u64,
            viewer,
            stacks: [Chips::new(900); SEAT_COUNT],
            pot: Chips::new(200),
            board: vec![card("2c"), card("7d"), card("Th")],
            hole_cards,
            legal_actions: if !self.over && viewer == self.active {
                self.legal.clone()
            } else {
                Vec::new()
            },
            active_seat: self.active,
            terminal: self.over,
        }
    }
}

impl GameEngine for ScriptEngine {
    fn reset(&mut self) -> Result<(HandState, SeatIndex), EngineError> {
        self.resets += 1;
        self.cursor = 0;
        self.over = false;
        self.active = self.first_seat;
        self.legal = self.first_legal.clone();
        self.payoffs = [0; SEAT_COUNT];
        Ok((self.make_state(self.active), self.active))
    }

    fn step(&mut self, action: Action) -> Result<(HandState, SeatIndex), EngineError> {
        self.applied.push(action);
        let step = self
            .steps
            .get(self.cursor)
            .ok_or(EngineError::Internal("скрипт закончился"))?;
        self.cursor += 1;

        self.over = step.over_after;
        self.payoffs = step.payoffs;
        self.active = step.next_seat;
        self.legal = step.next_legal.clone();
        Ok((self.make_state(self.active), self.active))
    }

    fn is_over(&self) -> bool {
        self.over
    }

    fn legal_actions(&self, seat: SeatIndex) -> Vec<Action> {
        if !self.over && seat == self.active {
            self.legal.clone()
        } else {
            Vec::new()
        }
    }

    fn payoffs(&self) -> [Payoff; SEAT_COUNT] {
        self.payoffs
    }

    fn state_for(&self, seat: SeatIndex) -> HandState {
        self.make_state(seat)
    }
}

/// Агент с заранее заданным ответом.
struct FixedAgent {
    encoding: ActionEncoding,
    chosen: ChosenAction,
}

impl Agent for FixedAgent {
    fn encoding(&self) -> ActionEncoding {
        self.encoding
    }

    fn decide(&mut self, _state: &HandState) -> Result<ChosenAction, AgentError> {
        Ok(self.chosen)
    }
}

/// Агент, который никогда не может решиться.
struct FailingAgent;

impl Agent for FailingAgent {
    fn encoding(&self) -> ActionEncoding {
        ActionEncoding::Native
    }

    fn decide(&mut self, _state: &HandState) -> Result<ChosenAction, AgentError> {
        Err(AgentError::NoDecision("нет решения".into()))
    }
}

fn full_menu() -> Vec<Action> {
    vec![Action::Fold, Action::Call, Action::Raise]
}

/// Ход человека первым, одна результативная раздача в скрипте.
fn human_first_controller(steps: Vec<ScriptStep>) -> TurnController<ScriptEngine> {
    let engine = ScriptEngine::new(HUMAN_SEAT, full_menu(), steps);
    let opponent = Box::new(FixedAgent {
        encoding: ActionEncoding::Native,
        chosen: ChosenAction::Native(Action::Call),
    });
    TurnController::new(engine, opponent, SessionConfig::default()).expect("new failed")
}

fn ongoing_step(next_seat: SeatIndex) -> ScriptStep {
    ScriptStep {
        next_seat,
        next_legal: full_menu(),
        over_after: false,
        payoffs: [0; SEAT_COUNT],
    }
}

fn final_step(payoffs: [Payoff; SEAT_COUNT]) -> ScriptStep {
    ScriptStep {
        next_seat: OPPONENT_SEAT,
        next_legal: Vec::new(),
        over_after: true,
        payoffs,
    }
}

//
// trajectory.rs
//
#[test]
fn trajectory_tracks_entries_in_order() {
    let engine = ScriptEngine::new(HUMAN_SEAT, full_menu(), Vec::new());
    let state = engine.make_state(HUMAN_SEAT);

    let mut t = Trajectory::new();
    assert!(t.is_empty());
    assert!(!t.ends_with_state());

    t.push_action(Action::Call);
    assert!(!t.ends_with_state());

    t.push_state(state);
    assert!(t.ends_with_state());
    assert_eq!(t.len(), 2);
    assert_eq!(t.actions().collect::<Vec<_>>(), vec![&Action::Call]);
    assert_eq!(t.states().count(), 1);
}

//
// journal.rs
//
#[test]
fn journal_push_assigns_incremental_indices() {
    let mut j = HandJournal::new();
    assert!(j.is_empty());

    j.push(JournalEventKind::HandStarted { hand_id: 7 });
    j.push(JournalEventKind::PlayerActed {
        seat: HUMAN_SEAT,
        action: Action::Check,
        text: "check".to_string(),
    });

    assert_eq!(j.len(), 2);
    assert_eq!(j.events[0].index, 0);
    assert_eq!(j.events[1].index, 1);

    j.clear();
    assert!(j.is_empty());
}

//
// controller.rs – старт и рестарт
//
#[test]
fn fresh_session_has_empty_trajectories_and_in_progress_phase() {
    let controller = human_first_controller(vec![ongoing_step(OPPONENT_SEAT)]);

    assert_eq!(controller.phase(), SessionPhase::InProgress);
    assert_eq!(controller.active_seat(), HUMAN_SEAT);
    assert!(controller.trajectory(HUMAN_SEAT).is_empty());
    assert!(controller.trajectory(OPPONENT_SEAT).is_empty());
    assert!(controller.result().is_none());
}

#[test]
fn restart_intent_is_ignored_while_in_progress() {
    let mut controller = human_first_controller(vec![ongoing_step(OPPONENT_SEAT)]);

    let status = controller.tick(Some(Intent::ConfirmRestart)).unwrap();

    assert_eq!(status, TickStatus::Continue);
    assert_eq!(controller.phase(), SessionPhase::InProgress);
    // reset не вызывался: движок по-прежнему на первой раздаче.
    assert_eq!(controller.engine().resets, 1);
}

#[test]
fn restart_after_hand_over_starts_fresh_hand() {
    let mut controller = human_first_controller(vec![final_step([4, -4])]);
    controller.tick(Some(Intent::SelectAction(1))).unwrap();
    assert_eq!(controller.phase(), SessionPhase::HandOver);

    controller.tick(Some(Intent::ConfirmRestart)).unwrap();

    assert_eq!(controller.phase(), SessionPhase::InProgress);
    assert_eq!(controller.engine().resets, 2);
    assert!(controller.trajectory(HUMAN_SEAT).is_empty());
    assert!(controller.trajectory(OPPONENT_SEAT).is_empty());
    assert!(controller.result().is_none());
    assert_eq!(controller.active_seat(), HUMAN_SEAT);
}

//
// controller.rs – ход человека
//
#[test]
fn tick_without_intent_changes_nothing() {
    let mut controller = human_first_controller(vec![ongoing_step(OPPONENT_SEAT)]);

    let status = controller.tick(None).unwrap();

    assert_eq!(status, TickStatus::Continue);
    assert_eq!(controller.phase(), SessionPhase::InProgress);
    assert_eq!(controller.active_seat(), HUMAN_SEAT);
    assert!(controller.engine().applied.is_empty());
}

#[test]
fn out_of_range_ordinal_is_silently_dropped() {
    let mut controller = human_first_controller(vec![ongoing_step(OPPONENT_SEAT)]);

    for ordinal in [3usize, 99] {
        controller.tick(Some(Intent::SelectAction(ordinal))).unwrap();
        assert_eq!(controller.phase(), SessionPhase::InProgress);
        assert_eq!(controller.active_seat(), HUMAN_SEAT);
        assert!(controller.engine().applied.is_empty());
        assert!(controller.trajectory(HUMAN_SEAT).is_empty());
    }
}

#[test]
fn valid_selection_applies_exactly_one_action() {
    // legal = [fold, call, raise]; ординал 1 = call.
    let mut controller = human_first_controller(vec![ongoing_step(OPPONENT_SEAT)]);

    controller.tick(Some(Intent::SelectAction(1))).unwrap();

    assert_eq!(controller.engine().applied, vec![Action::Call]);
    assert_eq!(controller.phase(), SessionPhase::InProgress);
    assert_eq!(controller.active_seat(), OPPONENT_SEAT);

    // Эксклюзивность хода: действовавшее место получает действие,
    // следующее – только снапшот.
    let human = controller.trajectory(HUMAN_SEAT);
    assert_eq!(human.actions().collect::<Vec<_>>(), vec![&Action::Call]);
    assert_eq!(human.states().count(), 0);

    let opp = controller.trajectory(OPPONENT_SEAT);
    assert_eq!(opp.actions().count(), 0);
    assert_eq!(opp.states().count(), 1);
}

//
// controller.rs – ход агента
//
#[test]
fn selection_during_agent_turn_is_dropped_by_phase_gate() {
    let engine = ScriptEngine::new(OPPONENT_SEAT, full_menu(), vec![ongoing_step(HUMAN_SEAT)]);
    let opponent = Box::new(FixedAgent {
        encoding: ActionEncoding::Native,
        chosen: ChosenAction::Native(Action::Raise),
    });
    let mut controller =
        TurnController::new(engine, opponent, SessionConfig::default()).unwrap();

    // Человек жмёт клавишу в чужой ход: применяется действие агента, не его.
    controller.tick(Some(Intent::SelectAction(0))).unwrap();

    assert_eq!(controller.engine().applied, vec![Action::Raise]);
    assert!(controller.trajectory(HUMAN_SEAT).actions().count() == 0);
    assert_eq!(
        controller.trajectory(OPPONENT_SEAT).actions().collect::<Vec<_>>(),
        vec![&Action::Raise]
    );
}

#[test]
fn agent_ordinal_is_translated_through_legal_actions() {
    let engine = ScriptEngine::new(OPPONENT_SEAT, full_menu(), vec![ongoing_step(HUMAN_SEAT)]);
    let opponent = Box::new(FixedAgent {
        encoding: ActionEncoding::AbstractOrdinal,
        chosen: ChosenAction::Ordinal(1),
    });
    let mut controller =
        TurnController::new(engine, opponent, SessionConfig::default()).unwrap();

    controller.tick(None).unwrap();

    // legal = [fold, call, raise], ординал 1 – это call.
    assert_eq!(controller.engine().applied, vec![Action::Call]);
}

#[test]
fn agent_native_action_passes_through_unchanged() {
    let engine = ScriptEngine::new(OPPONENT_SEAT, full_menu(), vec![ongoing_step(HUMAN_SEAT)]);
    let opponent = Box::new(FixedAgent {
        encoding: ActionEncoding::Native,
        chosen: ChosenAction::Native(Action::Fold),
    });
    let mut controller =
        TurnController::new(engine, opponent, SessionConfig::default()).unwrap();

    controller.tick(None).unwrap();

    assert_eq!(controller.engine().applied, vec![Action::Fold]);
}

#[test]
fn agent_encoding_mismatch_is_fatal() {
    let engine = ScriptEngine::new(OPPONENT_SEAT, full_menu(), vec![ongoing_step(HUMAN_SEAT)]);
    let opponent = Box::new(FixedAgent {
        encoding: ActionEncoding::Native,
        chosen: ChosenAction::Ordinal(0),
    });
    let mut controller =
        TurnController::new(engine, opponent, SessionConfig::default()).unwrap();

    let err = controller.tick(None).unwrap_err();
    assert!(matches!(err, SessionError::EncodingMismatch { seat } if seat == OPPONENT_SEAT));
}

#[test]
fn agent_out_of_range_ordinal_is_fatal() {
    let engine = ScriptEngine::new(OPPONENT_SEAT, full_menu(), vec![ongoing_step(HUMAN_SEAT)]);
    let opponent = Box::new(FixedAgent {
        encoding: ActionEncoding::AbstractOrdinal,
        chosen: ChosenAction::Ordinal(9),
    });
    let mut controller =
        TurnController::new(engine, opponent, SessionConfig::default()).unwrap();

    let err = controller.tick(None).unwrap_err();
    assert!(matches!(
        err,
        SessionError::OrdinalOutOfRange { ordinal: 9, available: 3, .. }
    ));
}

#[test]
fn agent_failure_propagates_as_session_error() {
    let engine = ScriptEngine::new(OPPONENT_SEAT, full_menu(), vec![ongoing_step(HUMAN_SEAT)]);
    let mut controller =
        TurnController::new(engine, Box::new(FailingAgent), SessionConfig::default()).unwrap();

    let err = controller.tick(None).unwrap_err();
    assert!(matches!(err, SessionError::Agent { seat, .. } if seat == OPPONENT_SEAT));
}

#[test]
fn inconsistent_seat_from_engine_is_fatal() {
    let bad_step = ScriptStep {
        next_seat: 5,
        next_legal: full_menu(),
        over_after: false,
        payoffs: [0; SEAT_COUNT],
    };
    let mut controller = human_first_controller(vec![bad_step]);

    let err = controller.tick(Some(Intent::SelectAction(0))).unwrap_err();
    assert!(matches!(err, SessionError::InvalidSeat(5)));
}

//
// controller.rs – завершение раздачи
//
#[test]
fn hand_over_flushes_all_trajectories_with_final_states() {
    let mut controller = human_first_controller(vec![final_step([4, -4])]);

    controller.tick(Some(Intent::SelectAction(1))).unwrap();

    assert_eq!(controller.phase(), SessionPhase::HandOver);

    let result = controller.result().expect("нет итога раздачи");
    assert_eq!(result.payoffs, [4, -4]);
    assert!(result.text.starts_with("You won!"));

    // Обе траектории заканчиваются снапшотом, даже у места без последнего хода.
    for seat in 0..SEAT_COUNT as SeatIndex {
        assert!(controller.trajectory(seat).ends_with_state());
    }
    // Последний ходивший: [действие, финальный снапшот].
    assert_eq!(controller.trajectory(HUMAN_SEAT).len(), 2);
    // Второе место за этот тик действия не получало.
    assert_eq!(controller.trajectory(OPPONENT_SEAT).actions().count(), 0);
}

#[test]
fn result_text_follows_payoff_sign_for_seat_zero() {
    let cases: [([Payoff; SEAT_COUNT], &str); 3] = [
        ([4, -4], "You won!"),
        ([-4, 4], "You lost!"),
        ([0, 0], "Tie!"),
    ];

    for (payoffs, expected) in cases {
        let mut controller = human_first_controller(vec![final_step(payoffs)]);
        controller.tick(Some(Intent::SelectAction(1))).unwrap();

        let text = &controller.result().unwrap().text;
        assert!(
            text.starts_with(expected),
            "payoffs {payoffs:?}: ожидали {expected:?}, получили {text:?}"
        );
        assert!(text.ends_with("Press Enter to play again!"));
    }
}

#[test]
fn selection_intents_are_ignored_after_hand_over() {
    let mut controller = human_first_controller(vec![final_step([4, -4])]);
    controller.tick(Some(Intent::SelectAction(1))).unwrap();
    let applied_before = controller.engine().applied.len();

    controller.tick(Some(Intent::SelectAction(0))).unwrap();
    controller.tick(None).unwrap();

    assert_eq!(controller.phase(), SessionPhase::HandOver);
    assert_eq!(controller.engine().applied.len(), applied_before);
}

#[test]
fn quit_is_valid_in_any_state() {
    let mut controller = human_first_controller(vec![final_step([4, -4])]);

    assert_eq!(
        controller.tick(Some(Intent::Quit)).unwrap(),
        TickStatus::Quit
    );

    controller.tick(Some(Intent::SelectAction(1))).unwrap();
    assert_eq!(controller.phase(), SessionPhase::HandOver);
    assert_eq!(
        controller.tick(Some(Intent::Quit)).unwrap(),
        TickStatus::Quit
    );
}

//
// view.rs
//
#[test]
fn current_view_is_idempotent() {
    let controller = human_first_controller(vec![ongoing_step(OPPONENT_SEAT)]);

    let first = controller.current_view();
    let second = controller.current_view();
    assert_eq!(first, second);
}

#[test]
fn view_shows_menu_only_on_human_turn() {
    let mut controller = human_first_controller(vec![ongoing_step(OPPONENT_SEAT)]);

    let view = controller.current_view();
    assert_eq!(view.legal_actions.len(), 3);
    assert_eq!(view.legal_actions[0].ordinal, 0);
    assert_eq!(view.legal_actions[0].label, "fold");
    assert_eq!(view.legal_actions[1].label, "call");
    assert_eq!(view.legal_actions[2].label, "raise");

    controller.tick(Some(Intent::SelectAction(1))).unwrap();

    // Ход оппонента: меню пустое.
    let view = controller.current_view();
    assert!(view.legal_actions.is_empty());
}

#[test]
fn view_hides_opponent_cards_until_terminal() {
    let mut controller = human_first_controller(vec![final_step([0, 0])]);

    let view = controller.current_view();
    assert!(view.hole_cards[HUMAN_SEAT as usize].is_some());
    assert!(view.hole_cards[OPPONENT_SEAT as usize].is_none());
    assert!(view.result_text.is_none());

    controller.tick(Some(Intent::SelectAction(1))).unwrap();

    let view = controller.current_view();
    assert_eq!(view.phase, SessionPhase::HandOver);
    assert!(view.hole_cards[OPPONENT_SEAT as usize].is_some());
    assert!(view.result_text.is_some());
}

#[test]
fn view_serde_round_trip() {
    let controller = human_first_controller(vec![ongoing_step(OPPONENT_SEAT)]);

    let view = controller.current_view();
    let json = serde_json::to_string(&view).unwrap();
    let parsed: holdem_session::session::SessionView = serde_json::from_str(&json).unwrap();
    assert_eq!(view, parsed);
}
