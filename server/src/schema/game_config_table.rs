use shared::GameTuning;
use spacetimedb::*;

/// Physics and playfield tuning published to clients.
///
/// Single row with id 1, seeded from the `shared` defaults by the
/// module's `init` reducer. Clients subscribe to it, so a balance change
/// rolls out without a client rebuild.
#[table(name = game_config, public)]
pub struct GameConfig {
    #[primary_key]
    pub id: u32,

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

impl GameConfig {
    pub fn from_tuning(id: u32, tuning: GameTuning) -> Self {
        Self {
            id,
            gravity: tuning.gravity,
            flap_impulse: tuning.flap_impulse,
            pipe_speed: tuning.pipe_speed,
            pipe_gap: tuning.pipe_gap,
            pipe_width: tuning.pipe_width,
            crab_size: tuning.crab_size,
            crab_x: tuning.crab_x,
            crab_start_y: tuning.crab_start_y,
            playfield_width: tuning.playfield_width,
            playfield_height: tuning.playfield_height,
            pipe_spawn_threshold_x: tuning.pipe_spawn_threshold_x,
            gap_top_min: tuning.gap_top_min,
            gap_top_max: tuning.gap_top_max,
        }
    }
}
