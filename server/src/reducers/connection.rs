//! Connection lifecycle reducers.
//!
//! Registration is explicit (`create_player`), so connect/disconnect only
//! log the identity for traceability. The identity→player binding in the
//! `registration` table survives disconnects, letting a returning client
//! resolve its record through the `current_player` view.

use spacetimedb::ReducerContext;

#[spacetimedb::reducer(client_connected)]
pub fn identity_connected(ctx: &ReducerContext) {
    log::info!("Client connected: {:?}", ctx.sender);
}

#[spacetimedb::reducer(client_disconnected)]
pub fn identity_disconnected(ctx: &ReducerContext) {
    log::info!("Client disconnected: {:?}", ctx.sender);
}
