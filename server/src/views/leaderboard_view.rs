use crate::schema::{player__view, Player};
use crate::types::LeaderboardEntry;
use shared::LEADERBOARD_SIZE;

/// Top players by high score, best first.
///
/// Scans the `high_score` index, keeps at most [`LEADERBOARD_SIZE`]
/// entries, and breaks ties by insertion order (ascending row id).
/// Freshly registered players with a zero high score rank like anyone
/// else.
#[spacetimedb::view(name = leaderboard, public)]
fn leaderboard(ctx: &spacetimedb::ViewContext) -> Vec<LeaderboardEntry> {
    top_entries(ctx.db.player().high_score().filter(0u32..).collect())
}

fn top_entries(mut players: Vec<Player>) -> Vec<LeaderboardEntry> {
    players.sort_by(|a, b| b.high_score.cmp(&a.high_score).then(a.id.cmp(&b.id)));
    players.truncate(LEADERBOARD_SIZE);
    players
        .into_iter()
        .enumerate()
        .map(|(i, player)| LeaderboardEntry {
            rank: i as u32 + 1,
            username: player.username,
            high_score: player.high_score,
            games_played: player.games_played,
        })
        .collect()
}
