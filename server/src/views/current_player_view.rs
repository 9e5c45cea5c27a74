use crate::schema::{player__view, registration__view};
use crate::types::PlayerSummary;

/// The caller's registered player record, resolved through the identity
/// binding written by `create_player`.
///
/// Empty until the connection has registered a username. Clients that
/// restored a username from local storage can equally resolve the public
/// `player` table through its unique `username` index.
#[spacetimedb::view(name = current_player, public)]
fn current_player(ctx: &spacetimedb::ViewContext) -> Vec<PlayerSummary> {
    let Some(registration) = ctx.db.registration().identity().find(ctx.sender) else {
        return Vec::new();
    };
    let Some(player) = ctx.db.player().id().find(registration.player_id) else {
        // Inconsistent state; treat as unregistered.
        return Vec::new();
    };

    vec![PlayerSummary {
        username: player.username,
        high_score: player.high_score,
        games_played: player.games_played,
    }]
}
