pub mod canvas;
pub mod confetti;

pub use confetti::Confetti;
