use spacetimedb::SpacetimeType;

/// One row of the public leaderboard, best player first.
#[derive(SpacetimeType, Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// 1-based position.
    pub rank: u32,
    pub username: String,
    pub high_score: u32,
    pub games_played: u32,
}
