use spacetimedb::*;

/// Maps a connection identity to the player row it registered as.
///
/// Written by `create_player` (latest registration wins, mirroring a
/// "switch player" on the client) and read by the `current_player` view.
/// Kept across disconnects so a returning client resolves its record
/// without re-registering.
#[table(name = registration)]
pub struct Registration {
    #[primary_key]
    pub identity: Identity,

    pub player_id: u64,
}
