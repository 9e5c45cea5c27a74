//! Client-side session core for Crabby Bird.
//!
//! This crate owns everything about a play session that is not pixels:
//! the bound player identity, the logical input routing, the per-frame
//! simulation drive, and the fire-and-forget score submission queue.
//!
//! The rendering surface and the generated SpacetimeDB SDK bindings sit
//! on top of this crate: a frame driver calls [`GameSession::advance`]
//! once per animation frame, draws from [`GameSession::state`], forwards
//! raw pointer/touch events through [`GameSession::handle_input`], and
//! drains [`GameSession::pop_submission`] into the `submit_score`
//! reducer.

pub mod input;
pub mod session;

pub use input::{InputAction, InputSource};
pub use session::{GameSession, ScoreSubmission};
