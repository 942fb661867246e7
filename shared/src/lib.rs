pub mod confetti;
pub mod constants;
pub mod progress;
pub mod roulette_engine;
pub mod roulette_prize;
pub mod roulette_slots;
pub mod validation;
