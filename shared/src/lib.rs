pub mod constants;
pub mod sim;
pub mod tuning;
pub mod username;

pub use constants::{
    CRAB_SIZE, CRAB_START_Y, CRAB_X, FLAP_IMPULSE, GAP_TOP_MAX, GAP_TOP_MIN, GRAVITY,
    LEADERBOARD_SIZE, PIPE_GAP, PIPE_SPAWN_THRESHOLD_X, PIPE_SPEED, PIPE_WIDTH, PLAYFIELD_HEIGHT,
    PLAYFIELD_WIDTH, USERNAME_MAX_CHARS, USERNAME_MIN_CHARS,
};
pub use sim::{Aabb, Crab, GameEvent, GamePhase, GameState, Pipe, TickInput, tick};
pub use tuning::GameTuning;
pub use username::validate_username;
