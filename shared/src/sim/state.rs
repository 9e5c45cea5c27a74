//! Simulation state and the events it emits.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::tuning::GameTuning;

/// Current phase of gameplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Idle, no physics. Initial phase after registration, and the target
    /// of an explicit "switch player" action from any phase.
    Menu,
    /// Physics active.
    Playing,
    /// Physics frozen, score finalized.
    GameOver,
}

/// The player avatar. One instance per run, integrated every frame under
/// constant acceleration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crab {
    /// Vertical position of the hitbox's top edge (pixels).
    pub y: f32,
    /// Vertical velocity (pixels/frame, positive = down).
    pub velocity: f32,
}

/// One obstacle: a vertical pair of solid segments with a passable gap,
/// scrolling leftward at constant speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    /// Horizontal position of the left edge (pixels).
    pub x: f32,
    /// Height of the top solid segment; the gap starts here.
    pub gap_top: f32,
    /// Whether this pipe has already been credited to the score.
    pub passed: bool,
}

impl Pipe {
    pub fn new(x: f32, gap_top: f32) -> Self {
        Self {
            x,
            gap_top,
            passed: false,
        }
    }
}

/// Discrete event emitted by a frame update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// An obstacle's right edge crossed the avatar's left edge for the
    /// first time. Carries the new total score.
    ObstacleCleared { score: u32 },
    /// The run ended on a boundary exit or an obstacle collision.
    /// Carries the final score.
    GameOver { score: u32 },
}

/// Complete simulation state for one game session.
///
/// Owned by the session; a renderer reads it as a snapshot each frame and
/// never mutates across the boundary.
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub crab: Crab,
    pub pipes: Vec<Pipe>,
    pub score: u32,
    pub tuning: GameTuning,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Creates an idle session in the menu phase.
    pub fn new(seed: u64, tuning: GameTuning) -> Self {
        Self {
            phase: GamePhase::Menu,
            crab: Crab {
                y: tuning.crab_start_y,
                velocity: 0.0,
            },
            pipes: Vec::new(),
            score: 0,
            tuning,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Begins a fresh run: avatar back at its spawn point, score cleared,
    /// a single pipe seeded at the right edge of the playfield.
    pub fn start_run(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.crab = Crab {
            y: self.tuning.crab_start_y,
            velocity: 0.0,
        };
        self.pipes.clear();
        self.spawn_pipe();
    }

    /// Appends a pipe at the right edge with a uniformly drawn gap top.
    pub(crate) fn spawn_pipe(&mut self) {
        let gap_top = self
            .rng
            .random_range(self.tuning.gap_top_min..self.tuning.gap_top_max);
        let x = self.tuning.playfield_width;
        self.pipes.push(Pipe::new(x, gap_top));
    }
}
