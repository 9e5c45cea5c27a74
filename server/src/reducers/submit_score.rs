use crate::schema::*;
use spacetimedb::{ReducerContext, Table};

/// Record one completed game for `username`.
///
/// Appends an immutable `game_score` row, then patches the player
/// aggregates: high score becomes the max of old and new, games played
/// increments by one. Both writes commit atomically with the reducer;
/// an unknown username aborts with no writes. Callers treat this as
/// fire-and-forget: a failure is logged client-side, never retried.
#[spacetimedb::reducer]
pub fn submit_score(
    ctx: &ReducerContext,
    username: String,
    score: u32,
    obstacles_passed: u32,
) -> Result<(), String> {
    let Some(player) = ctx.db.player().username().find(&username) else {
        return Err("Player not found".into());
    };

    ctx.db.game_score().insert(GameScore {
        id: 0,
        player_id: player.id,
        score,
        obstacles_passed,
        played_at: ctx.timestamp,
    });

    let updated = apply_score(player, score);
    log::info!(
        "{}: scored {score}, high score {}, games played {}",
        updated.username,
        updated.high_score,
        updated.games_played
    );
    ctx.db.player().id().update(updated);

    Ok(())
}

/// The aggregate patch for one completed game.
fn apply_score(player: Player, score: u32) -> Player {
    Player {
        high_score: player.high_score.max(score),
        games_played: player.games_played + 1,
        ..player
    }
}
