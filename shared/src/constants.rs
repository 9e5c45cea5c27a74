/// Downward acceleration applied to the avatar every frame (pixels/frame²).
pub const GRAVITY: f32 = 0.4;

/// Instantaneous vertical velocity set by a flap (pixels/frame, negative = up).
pub const FLAP_IMPULSE: f32 = -8.0;

/// Leftward obstacle scroll speed (pixels/frame).
pub const PIPE_SPEED: f32 = 3.0;

/// Vertical clearance between a pipe's top and bottom segments (pixels).
pub const PIPE_GAP: f32 = 150.0;

/// Horizontal extent of a pipe's solid segments (pixels).
pub const PIPE_WIDTH: f32 = 60.0;

/// Edge length of the avatar's square hitbox (pixels).
pub const CRAB_SIZE: f32 = 40.0;

/// Fixed horizontal position of the avatar's left edge (pixels).
pub const CRAB_X: f32 = 50.0;

/// Vertical position of the avatar at the start of a run (pixels).
pub const CRAB_START_Y: f32 = 250.0;

/// Playfield width (pixels). New pipes spawn with their left edge here.
pub const PLAYFIELD_WIDTH: f32 = 400.0;

/// Playfield height (pixels).
///
/// The avatar is out of bounds once its top edge passes
/// `PLAYFIELD_HEIGHT - CRAB_SIZE` (the bottom boundary) or 0 (the top).
pub const PLAYFIELD_HEIGHT: f32 = 500.0;

/// Once the newest pipe has scrolled left of this x position, the next
/// pipe spawns at the right edge of the playfield.
pub const PIPE_SPAWN_THRESHOLD_X: f32 = 200.0;

/// Lower bound of the uniform gap-top sampling range (pixels).
pub const GAP_TOP_MIN: f32 = 100.0;

/// Upper bound (exclusive) of the uniform gap-top sampling range (pixels).
pub const GAP_TOP_MAX: f32 = 300.0;

/// Number of entries a leaderboard read returns.
pub const LEADERBOARD_SIZE: usize = 10;

/// Username length bounds in characters, counted after trimming.
pub const USERNAME_MIN_CHARS: usize = 2;
pub const USERNAME_MAX_CHARS: usize = 20;
