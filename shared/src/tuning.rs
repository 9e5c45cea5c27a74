use crate::constants::*;

/// Physics and playfield tuning for a game session.
///
/// The defaults below are the source of truth for both sides: the server
/// seeds its public `game_config` row from them at module init, and the
/// client simulation falls back to them when no row has arrived yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameTuning {
    pub gravity: f32,
    pub flap_impulse: f32,
    pub pipe_speed: f32,
    pub pipe_gap: f32,
    pub pipe_width: f32,
    pub crab_size: f32,
    pub crab_x: f32,
    pub crab_start_y: f32,
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub pipe_spawn_threshold_x: f32,
    pub gap_top_min: f32,
    pub gap_top_max: f32,
}

impl Default for GameTuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,
            pipe_speed: PIPE_SPEED,
            pipe_gap: PIPE_GAP,
            pipe_width: PIPE_WIDTH,
            crab_size: CRAB_SIZE,
            crab_x: CRAB_X,
            crab_start_y: CRAB_START_Y,
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            pipe_spawn_threshold_x: PIPE_SPAWN_THRESHOLD_X,
            gap_top_min: GAP_TOP_MIN,
            gap_top_max: GAP_TOP_MAX,
        }
    }
}

impl GameTuning {
    /// Largest in-bounds vertical position for the avatar's top edge.
    pub fn bottom_limit(&self) -> f32 {
        self.playfield_height - self.crab_size
    }
}
