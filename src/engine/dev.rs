use serde::{Deserialize, Serialize};

use crate::domain::{
    other_seat, Action, Card, Chips, Deck, HandId, HandState, Payoff, Rank, SeatIndex, Suit,
    SEAT_COUNT,
};
use crate::engine::errors::EngineError;
use crate::engine::{GameEngine, RandomSource};

/// Конфиг dev-движка.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DevEngineConfig {
    /// Стартовый стек каждого места.
    pub starting_stack: Chips,
    /// Анте, которое оба места вносят в начале раздачи.
    pub ante: Chips,
    /// Фиксированный размер ставки (лимитная структура).
    pub fixed_bet: Chips,
    /// Максимум рейзов на одной улице.
    pub raise_cap: u8,
}

impl Default for DevEngineConfig {
    fn default() -> Self {
        Self {
            starting_stack: Chips::new(1_000),
            ante: Chips::new(50),
            fixed_bet: Chips::new(100),
            raise_cap: 4,
        }
    }
}

/// Упрощённый движок раздачи для dev-CLI и тестов.
///
/// Это НЕ движок правил покера: оценки рук нет, победитель на шоудауне
/// выбирается генератором случайных чисел. Зато раздача внешне ведёт себя
/// как лимитный холдем: анте, четыре улицы с расписанием борда 0/3/4/5,
/// фиксированная ставка, потолок рейзов, фолд завершает раздачу.
/// Короткий стек уравнивается автоматически (упрощённый «олл-ин»).
/// Стеки переносятся между раздачами; обнулившийся стол перезакупается.
pub struct DevEngine<R: RandomSource> {
    config: DevEngineConfig,
    rng: R,
    hand_id: HandId,
    dealt: bool,
    over: bool,
    deck: Deck,
    hole: [[Card; 2]; SEAT_COUNT],
    board: Vec<Card>,
    /// 0 = префлоп, 1 = флоп, 2 = тёрн, 3 = ривер.
    street: u8,
    raises: u8,
    stacks: [Chips; SEAT_COUNT],
    /// Всего внесено в банк за раздачу, по местам.
    committed: [Chips; SEAT_COUNT],
    /// Ставки текущей улицы, по местам.
    street_bets: [Chips; SEAT_COUNT],
    acted: [bool; SEAT_COUNT],
    pot: Chips,
    active: SeatIndex,
    first_to_act: SeatIndex,
    payoffs: [Payoff; SEAT_COUNT],
}

impl<R: RandomSource> DevEngine<R> {
    pub fn new(config: DevEngineConfig, rng: R) -> Self {
        let stacks = [config.starting_stack; SEAT_COUNT];
        Self {
            config,
            rng,
            hand_id: 0,
            dealt: false,
            over: false,
            deck: Deck::standard_52(),
            hole: [[Card::new(Rank::Two, Suit::Clubs); 2]; SEAT_COUNT],
            board: Vec::new(),
            street: 0,
            raises: 0,
            stacks,
            committed: [Chips::ZERO; SEAT_COUNT],
            street_bets: [Chips::ZERO; SEAT_COUNT],
            acted: [false; SEAT_COUNT],
            pot: Chips::ZERO,
            active: 0,
            first_to_act: 0,
            payoffs: [0; SEAT_COUNT],
        }
    }

    pub fn config(&self) -> &DevEngineConfig {
        &self.config
    }

    pub fn stacks(&self) -> [Chips; SEAT_COUNT] {
        self.stacks
    }

    /// Сколько активное место должно доплатить до ставки соперника.
    fn owed(&self, seat: SeatIndex) -> Chips {
        self.street_bets[other_seat(seat) as usize] - self.street_bets[seat as usize]
    }

    fn legal_list(&self) -> Vec<Action> {
        let seat = self.active as usize;
        let owed = self.owed(self.active);

        let mut out = vec![Action::Fold];
        if owed.is_zero() {
            out.push(Action::Check);
        } else {
            out.push(Action::Call);
        }
        if self.raises < self.config.raise_cap && self.stacks[seat] >= owed + self.config.fixed_bet
        {
            out.push(Action::Raise);
        }
        out
    }

    /// Списать со стека не больше, чем там есть; короткий стек считается
    /// уравнявшим ставку соперника.
    fn pay(&mut self, seat: SeatIndex, amount: Chips) {
        let s = seat as usize;
        let real = amount.min(self.stacks[s]);
        self.stacks[s] -= real;
        self.street_bets[s] += real;
        self.committed[s] += real;
        self.pot += real;

        if self.stacks[s].is_zero() {
            let o = other_seat(seat) as usize;
            if self.street_bets[s] < self.street_bets[o] {
                self.street_bets[s] = self.street_bets[o];
            }
        }
    }

    fn advance_street(&mut self) {
        self.street += 1;
        if self.street > 3 {
            // Шоудаун. Оценки рук здесь нет – победителя выбирает RNG.
            let winner = self.rng.index(SEAT_COUNT) as SeatIndex;
            self.finish(winner);
            return;
        }

        let reveal = if self.street == 1 { 3 } else { 1 };
        let cards = self.deck.draw(reveal);
        self.board.extend(cards);

        self.street_bets = [Chips::ZERO; SEAT_COUNT];
        self.acted = [false; SEAT_COUNT];
        self.raises = 0;
        self.active = self.first_to_act;
    }

    fn finish(&mut self, winner: SeatIndex) {
        let loser = other_seat(winner);
        let swing = self.committed[loser as usize].signed();
        self.payoffs = [0; SEAT_COUNT];
        self.payoffs[winner as usize] = swing;
        self.payoffs[loser as usize] = -swing;

        self.stacks[winner as usize] += self.pot;
        self.pot = Chips::ZERO;
        self.over = true;
    }

    fn snapshot(&self, viewer: SeatIndex) -> HandState {
        let mut hole_cards = [None; SEAT_COUNT];
        for (s, slot) in hole_cards.iter_mut().enumerate() {
            if s == viewer as usize || self.over {
                *slot = Some(self.hole[s]);
            }
        }

        let legal_actions = if !self.over && self.dealt && viewer == self.active {
            self.legal_list()
        } else {
            Vec::new()
        };

        HandState {
            hand_id: self.hand_id,
            viewer,
            stacks: self.stacks,
            pot: self.pot,
            board: self.board.clone(),
            hole_cards,
            legal_actions,
            active_seat: self.active,
            terminal: self.over,
        }
    }
}

impl<R: RandomSource> GameEngine for DevEngine<R> {
    fn reset(&mut self) -> Result<(HandState, SeatIndex), EngineError> {
        self.hand_id += 1;

        // Перезакуп, если кто-то разорился в прошлой раздаче.
        if self.stacks.iter().any(|s| s.is_zero()) {
            self.stacks = [self.config.starting_stack; SEAT_COUNT];
        }

        self.deck = Deck::standard_52();
        self.rng.shuffle(&mut self.deck.cards);

        self.board.clear();
        self.street = 0;
        self.raises = 0;
        self.committed = [Chips::ZERO; SEAT_COUNT];
        self.street_bets = [Chips::ZERO; SEAT_COUNT];
        self.acted = [false; SEAT_COUNT];
        self.pot = Chips::ZERO;
        self.payoffs = [0; SEAT_COUNT];
        self.over = false;
        self.dealt = true;

        // Первый ходит по очереди: нечётные раздачи – место 0, чётные – место 1.
        self.first_to_act = ((self.hand_id - 1) % 2) as SeatIndex;
        self.active = self.first_to_act;

        // Анте с обоих мест.
        for seat in 0..SEAT_COUNT as SeatIndex {
            let ante = self.config.ante;
            let s = seat as usize;
            let real = ante.min(self.stacks[s]);
            self.stacks[s] -= real;
            self.committed[s] += real;
            self.pot += real;
        }

        // Раздача карманных карт: по кругу, начиная с первого ходящего.
        for round in 0..2 {
            for i in 0..SEAT_COUNT {
                let seat = (self.first_to_act as usize + i) % SEAT_COUNT;
                let card = self
                    .deck
                    .draw_one()
                    .ok_or(EngineError::Internal("колода закончилась при раздаче"))?;
                self.hole[seat][round] = card;
            }
        }

        Ok((self.snapshot(self.active), self.active))
    }

    fn step(&mut self, action: Action) -> Result<(HandState, SeatIndex), EngineError> {
        if !self.dealt {
            return Err(EngineError::NoActiveHand);
        }
        if self.over {
            return Err(EngineError::HandAlreadyOver);
        }
        if !self.legal_list().contains(&action) {
            return Err(EngineError::IllegalAction);
        }

        let active = self.active;
        match action {
            Action::Fold => {
                self.finish(other_seat(active));
            }
            Action::Check => {
                self.acted[active as usize] = true;
            }
            Action::Call => {
                let owed = self.owed(active);
                self.pay(active, owed);
                self.acted[active as usize] = true;
            }
            Action::Raise => {
                let owed = self.owed(active);
                self.pay(active, owed + self.config.fixed_bet);
                self.raises += 1;
                self.acted = [false; SEAT_COUNT];
                self.acted[active as usize] = true;
            }
        }

        if !self.over {
            if self.acted.iter().all(|&a| a) && self.street_bets[0] == self.street_bets[1] {
                self.advance_street();
            } else {
                self.active = other_seat(active);
            }
        }

        Ok((self.snapshot(self.active), self.active))
    }

    fn is_over(&self) -> bool {
        !self.dealt || self.over
    }

    fn legal_actions(&self, seat: SeatIndex) -> Vec<Action> {
        if self.is_over() || seat != self.active {
            return Vec::new();
        }
        self.legal_list()
    }

    fn payoffs(&self) -> [Payoff; SEAT_COUNT] {
        self.payoffs
    }

    fn state_for(&self, seat: SeatIndex) -> HandState {
        self.snapshot(seat)
    }

    fn decode_action(&self, action: &Action) -> String {
        match action {
            Action::Raise => format!("raise {}", self.config.fixed_bet),
            other => other.to_string(),
        }
    }
}
