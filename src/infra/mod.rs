//! Инфраструктурный слой: RNG-реализации для движка и агентов.

pub mod rng;

pub use rng::*;
