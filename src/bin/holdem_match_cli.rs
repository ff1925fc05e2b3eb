// src/bin/holdem_match_cli.rs

use std::error::Error;
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};

use holdem_session::agents::RandomAgent;
use holdem_session::engine::{DevEngine, DevEngineConfig};
use holdem_session::infra::SystemRng;
use holdem_session::input::{CrosstermInput, InputSource};
use holdem_session::present::{Presenter, TerminalPresenter};
use holdem_session::session::{SessionConfig, TickStatus, TurnController};

/// Длительность кадра: ~30 кадров в секунду.
const FRAME: Duration = Duration::from_millis(33);

fn main() {
    if let Err(e) = run() {
        eprintln!("[CLI] Ошибка сессии: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    println!("holdem_match_cli: стартуем матч против скриптового оппонента…");

    // 1. Движок раздачи и оппонент.
    let engine = DevEngine::new(DevEngineConfig::default(), SystemRng);
    let opponent = Box::new(RandomAgent::new(SystemRng));

    // 2. Контроллер сессии (первая раздача стартует сразу).
    let mut controller = TurnController::new(engine, opponent, SessionConfig::default())?;

    // 3. Терминал: raw mode + альтернативный экран, вернуть как было при выходе.
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, Hide)?;

    let loop_result = match_loop(&mut controller);

    execute!(stdout(), Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    loop_result?;

    // 4. Эпилог: журнал последней раздачи.
    println!("[CLI] Журнал последней раздачи:");
    println!("{}", serde_json::to_string_pretty(controller.journal())?);
    println!("[CLI] Завершение работы.");
    Ok(())
}

/// Кадровый цикл: намерение -> tick -> рендер.
fn match_loop(
    controller: &mut TurnController<DevEngine<SystemRng>>,
) -> Result<(), Box<dyn Error>> {
    let mut input = CrosstermInput;
    let mut presenter = TerminalPresenter::new();

    presenter.render(&controller.current_view())?;
    loop {
        let intent = input.poll_intent(FRAME)?;
        match controller.tick(intent)? {
            TickStatus::Quit => return Ok(()),
            TickStatus::Continue => {}
        }
        presenter.render(&controller.current_view())?;
    }
}
