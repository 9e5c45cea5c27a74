use spacetimedb::*;

/// Durable player record: the system of record for identity and
/// per-player aggregates.
///
/// `id` is auto-incremented, so it doubles as insertion order for
/// leaderboard tie-breaks. The unique constraint on `username` makes
/// registration atomic at the store level; two racing registrations for
/// the same name cannot both insert.
#[table(name = player, public)]
pub struct Player {
    #[primary_key]
    #[auto_inc]
    pub id: u64,

    #[unique]
    pub username: String,

    /// Highest score ever recorded for this player. Monotonically
    /// non-decreasing; only `submit_score` writes it.
    #[index(btree)]
    pub high_score: u32,

    /// Completed games, incremented once per submitted game.
    pub games_played: u32,

    pub created_at: Timestamp,
}
