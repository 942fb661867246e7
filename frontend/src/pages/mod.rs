pub mod admin_prizes;
pub mod roulette;
