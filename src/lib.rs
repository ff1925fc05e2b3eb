//! Сессия лимитного холдема: человек против скриптового оппонента.
//!
//! Ядро – `session::TurnController`: конечный автомат ходов поверх внешнего
//! движка (`engine::GameEngine`) и агентов (`agents::Agent`). Контроллер
//! вызывается раз в кадр (`tick`), рендеринг читает снапшот через
//! `current_view`, ввод приходит как абстрактные намерения из `input`.

pub mod agents;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod input;
pub mod present;
pub mod session;
