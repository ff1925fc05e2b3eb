//! Сессия матча: автомат ходов, траектории, журнал, DTO для рендера.
//!
//! Высокоуровневый объект: `TurnController`.
//! Основные операции:
//!   - `tick` – один кадр: принять намерение, продвинуть автомат;
//!   - `reset` – начать новую раздачу;
//!   - `current_view` – снапшот для презентера (чистая проекция).

pub mod controller;
pub mod errors;
pub mod journal;
pub mod trajectory;
pub mod view;

pub use controller::{HandResult, SessionConfig, TickStatus, TurnController};
pub use errors::SessionError;
pub use journal::{HandJournal, JournalEvent, JournalEventKind};
pub use trajectory::{Trajectory, TrajectoryEntry};
pub use view::{build_session_view, LegalActionDto, SessionPhase, SessionView};
