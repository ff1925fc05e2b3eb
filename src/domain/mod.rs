//! Доменная модель сессии: карты, фишки, действия, снапшот раздачи.

pub mod actions;
pub mod cards;
pub mod chips;
pub mod state;

/// Индекс места за столом.
pub type SeatIndex = u8;
/// Порядковый номер раздачи внутри сессии.
pub type HandId = u64;

/// Мест ровно два, на всю жизнь сессии.
pub const SEAT_COUNT: usize = 2;
/// Человек всегда на месте 0.
pub const HUMAN_SEAT: SeatIndex = 0;
/// Оппонент всегда на месте 1.
pub const OPPONENT_SEAT: SeatIndex = 1;

/// Соседнее место в двухместной игре.
pub fn other_seat(seat: SeatIndex) -> SeatIndex {
    1 - seat
}

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use actions::*;
pub use cards::*;
pub use chips::*;
pub use state::*;
