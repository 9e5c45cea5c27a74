use crate::schema::*;
use shared::validate_username;
use spacetimedb::{ReducerContext, Table};

/// Register a username, creating the player record on first use.
///
/// Idempotent: an existing record is reused unchanged; aggregates are
/// never reset. The unique constraint on `username` makes the insert
/// atomic, so two racing registrations for the same name cannot both
/// create a row; the loser aborts instead.
#[spacetimedb::reducer]
pub fn create_player(ctx: &ReducerContext, username: String) -> Result<(), String> {
    let username = username.trim().to_owned();
    validate_username(&username)?;

    let player_id = match ctx.db.player().username().find(&username) {
        Some(existing) => existing.id,
        None => {
            let inserted = ctx
                .db
                .player()
                .try_insert(Player {
                    id: 0,
                    username,
                    high_score: 0,
                    games_played: 0,
                    created_at: ctx.timestamp,
                })
                .map_err(|_| "Username is already taken".to_string())?;
            log::info!("Created player {} (id {})", inserted.username, inserted.id);
            inserted.id
        }
    };

    bind_identity(ctx, player_id);
    Ok(())
}

/// Remember which player row this connection registered as, so the
/// `current_player` view can resolve it without a username argument.
/// The latest registration wins, matching a "switch player" action.
fn bind_identity(ctx: &ReducerContext, player_id: u64) {
    if let Some(registration) = ctx.db.registration().identity().find(ctx.sender) {
        ctx.db.registration().identity().update(Registration {
            player_id,
            ..registration
        });
    } else {
        ctx.db.registration().insert(Registration {
            identity: ctx.sender,
            player_id,
        });
    }
}
