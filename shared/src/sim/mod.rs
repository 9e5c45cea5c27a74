//! Deterministic game simulation.
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - one update per rendered frame, no internal clock
//! - seeded RNG only
//! - no rendering, networking, or platform dependencies
//!
//! The frame driver owns a [`GameState`], calls [`tick`] once per frame,
//! and dispatches the returned [`GameEvent`]s to its observers (renderer,
//! persistence trigger).

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, crab_aabb, pipe_bottom_aabb, pipe_hits_crab, pipe_top_aabb};
pub use state::{Crab, GameEvent, GamePhase, GameState, Pipe};
pub use tick::{TickInput, tick};
