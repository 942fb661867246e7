pub mod auth_token;
pub mod use_prize_table;
pub mod use_roulette;
pub mod use_spin_engine;
pub mod use_style_sheet;
pub mod use_upload_progress;

pub use auth_token::*;
pub use use_prize_table::*;
pub use use_roulette::*;
pub use use_spin_engine::*;
pub use use_style_sheet::*;
pub use use_upload_progress::*;
