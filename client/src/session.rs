//! The active play session: identity, input routing, frame driving, and
//! the outbound score queue.

use std::collections::VecDeque;

use shared::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use shared::tuning::GameTuning;
use shared::username::validate_username;

use crate::input::{InputAction, InputSource};

/// One completed game headed for the persistence service.
///
/// Delivery is at-most-once: the transport pops a record, fires the
/// `submit_score` reducer, and never retries. A failed submission is
/// logged by the transport while the UI keeps showing the local score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreSubmission {
    pub username: String,
    pub score: u32,
    pub obstacles_passed: u32,
}

/// A single player's game session.
///
/// Owns the simulation state and mediates every interaction with it:
/// input arrives between frames via [`handle_input`], the frame driver
/// calls [`advance`] exactly once per animation frame, and a renderer
/// reads [`state`] as an immutable snapshot. Nothing here blocks on the
/// network; finished games are queued and drained by the transport.
///
/// [`handle_input`]: GameSession::handle_input
/// [`advance`]: GameSession::advance
/// [`state`]: GameSession::state
#[derive(Debug)]
pub struct GameSession {
    state: GameState,
    username: Option<String>,
    pending_flap: bool,
    outbox: VecDeque<ScoreSubmission>,
}

impl GameSession {
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, GameTuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: GameTuning) -> Self {
        Self {
            state: GameState::new(seed, tuning),
            username: None,
            pending_flap: false,
            outbox: VecDeque::new(),
        }
    }

    /// Read-only snapshot for the rendering layer.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Binds a player identity and returns to the menu.
    pub fn register(&mut self, username: &str) -> Result<(), &'static str> {
        let username = username.trim();
        validate_username(username)?;
        log::info!("Player registered: {username}");
        self.username = Some(username.to_owned());
        self.reset_to_menu();
        Ok(())
    }

    /// Unbinds the identity ("switch player"); reachable from any phase.
    pub fn switch_player(&mut self) {
        self.username = None;
        self.reset_to_menu();
    }

    /// Starts a run from the menu or after a game over.
    pub fn start(&mut self) {
        if self.state.phase == GamePhase::Playing {
            return;
        }
        self.pending_flap = false;
        self.state.start_run();
    }

    /// Routes a raw input event by the current phase: flap while playing,
    /// replay after a game over, ignored in the menu.
    pub fn handle_input(&mut self, source: InputSource) {
        match InputAction::from(source) {
            InputAction::Interact => match self.state.phase {
                GamePhase::Playing => self.pending_flap = true,
                GamePhase::GameOver => self.start(),
                GamePhase::Menu => {}
            },
        }
    }

    /// Advances the simulation by one frame and dispatches its events.
    ///
    /// On a game over with a positive score and a bound identity, exactly
    /// one submission is queued for the transport to drain.
    pub fn advance(&mut self) -> Vec<GameEvent> {
        let input = TickInput {
            flap: std::mem::take(&mut self.pending_flap),
        };
        let events = tick(&mut self.state, &input);

        for event in &events {
            if let GameEvent::GameOver { score } = *event {
                self.queue_submission(score);
            }
        }

        events
    }

    /// Next queued submission, removing it from the outbox.
    pub fn pop_submission(&mut self) -> Option<ScoreSubmission> {
        self.outbox.pop_front()
    }

    pub fn has_pending_submissions(&self) -> bool {
        !self.outbox.is_empty()
    }

    fn queue_submission(&mut self, score: u32) {
        if score == 0 {
            log::debug!("Run ended without score; nothing to submit");
            return;
        }
        let Some(username) = &self.username else {
            log::warn!("Run ended with score {score} but no player is bound; dropping");
            return;
        };
        log::info!("Queueing score {score} for {username}");
        self.outbox.push_back(ScoreSubmission {
            username: username.clone(),
            score,
            obstacles_passed: score,
        });
    }

    fn reset_to_menu(&mut self) {
        self.state.phase = GamePhase::Menu;
        self.state.score = 0;
        self.state.pipes.clear();
        self.pending_flap = false;
    }
}
