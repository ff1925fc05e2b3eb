use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

use crate::domain::{Card, HUMAN_SEAT, OPPONENT_SEAT};
use crate::present::Presenter;
use crate::session::{SessionPhase, SessionView};

/// Текстовый презентер: очищает экран и перерисовывает стол целиком.
/// Рассчитан на raw mode, поэтому переводы строк явные (`\r\n`).
pub struct TerminalPresenter {
    out: Stdout,
}

impl TerminalPresenter {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for TerminalPresenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Карманные карты или рубашки, если они скрыты.
fn cards_text(cards: &Option<[Card; 2]>) -> String {
    match cards {
        Some([a, b]) => format!("{a} {b}"),
        None => "?? ??".to_string(),
    }
}

impl Presenter for TerminalPresenter {
    fn render(&mut self, view: &SessionView) -> io::Result<()> {
        let hero = HUMAN_SEAT as usize;
        let opp = OPPONENT_SEAT as usize;

        let board = if view.board.is_empty() {
            "-".to_string()
        } else {
            view.board
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };

        let mut lines: Vec<String> = Vec::new();
        lines.push(format!("=== Limit Hold'em, hand #{} ===", view.hand_id));
        lines.push(String::new());
        lines.push(format!(
            "  {:<10} {}   stack {:>6}   last: {}",
            view.seat_names[opp],
            cards_text(&view.hole_cards[opp]),
            view.stacks[opp],
            view.last_actions[opp].as_deref().unwrap_or("-"),
        ));
        lines.push(String::new());
        lines.push(format!("  board: {board}"));
        lines.push(format!("  pot:   {}", view.pot));
        lines.push(String::new());
        lines.push(format!(
            "  {:<10} {}   stack {:>6}   last: {}",
            view.seat_names[hero],
            cards_text(&view.hole_cards[hero]),
            view.stacks[hero],
            view.last_actions[hero].as_deref().unwrap_or("-"),
        ));
        lines.push(String::new());

        match view.phase {
            SessionPhase::HandOver => {
                if let Some(text) = &view.result_text {
                    lines.push(format!("  {text}"));
                }
            }
            SessionPhase::InProgress => {
                if view.legal_actions.is_empty() {
                    lines.push(format!("  {} is thinking...", view.seat_names[opp]));
                } else {
                    let menu = view
                        .legal_actions
                        .iter()
                        .map(|a| format!("[{}] {}", a.ordinal, a.label))
                        .collect::<Vec<_>>()
                        .join("  ");
                    lines.push(format!("  your move: {menu}"));
                }
            }
        }

        lines.push(String::new());
        lines.push("  digits: action, Enter: next hand, Esc: quit".to_string());

        queue!(self.out, MoveTo(0, 0), Clear(ClearType::All))?;
        for line in lines {
            queue!(self.out, Print(line), Print("\r\n"))?;
        }
        self.out.flush()
    }
}
