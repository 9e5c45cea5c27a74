mod game_config_table;
mod game_score_table;
mod player_table;
mod registration_table;

pub use game_config_table::*;
pub use game_score_table::*;
pub use player_table::*;
pub use registration_table::*;
