use spacetimedb::SpacetimeType;

/// The caller's own player record, without server-side bookkeeping.
#[derive(SpacetimeType, Clone, Debug, PartialEq, Eq)]
pub struct PlayerSummary {
    pub username: String,
    pub high_score: u32,
    pub games_played: u32,
}
