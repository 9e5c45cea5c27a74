use spacetimedb::*;

/// Append-only record of one completed game.
///
/// Rows are inserted by `submit_score` and never mutated or deleted; the
/// player row carries the derived aggregates.
#[table(name = game_score)]
pub struct GameScore {
    #[primary_key]
    #[auto_inc]
    pub id: u64,

    /// Owning `player` row.
    #[index(btree)]
    pub player_id: u64,

    #[index(btree)]
    pub score: u32,

    /// Obstacles cleared during the run (equal to `score` today; kept
    /// separate so scoring can diverge from obstacle count later).
    pub obstacles_passed: u32,

    pub played_at: Timestamp,
}
