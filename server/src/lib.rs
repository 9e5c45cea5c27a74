mod reducers {
    mod connection;
    pub mod create_player;
    pub mod submit_score;
}
pub mod schema;
pub mod types;
pub mod views;

use crate::schema::*;
use shared::GameTuning;
use spacetimedb::*;

#[reducer(init)]
pub fn init(ctx: &ReducerContext) {
    // Reset and publish the tuning row clients subscribe to.
    ctx.db.game_config().id().delete(1);
    ctx.db
        .game_config()
        .insert(GameConfig::from_tuning(1, GameTuning::default()));
}
