use anchor_lang::prelude::*;

#[error_code]
pub enum MindGameError {
    #[msg("Cannot match with yourself: already waiting in the lobby.")]
    SelfMatch,
    #[msg("Player has no game session.")]
    NoActiveGame,
    #[msg("Game session is not active.")]
    SessionNotActive,
    #[msg("Username exceeds maximum length of 32 bytes.")]
    UsernameTooLong,
    #[msg("The waiting player's session must be supplied when the lobby is open.")]
    OpponentSessionMissing,
    #[msg("Supplied session does not belong to the waiting player.")]
    OpponentSessionMismatch,
    #[msg("Too many profiles supplied for one leaderboard page.")]
    LeaderboardPageTooLarge,
    #[msg("Supplied profiles do not match the registration order.")]
    LeaderboardMismatch,
    #[msg("Arithmetic overflow.")]
    MathOverflow,
}
