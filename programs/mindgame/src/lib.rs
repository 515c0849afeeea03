use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod questions;
pub mod state;

#[cfg(test)]
mod test_utils;

use instructions::*;
use state::{CurrentState, PlayerData};

declare_id!("9gN3HoX47jGgTMmYpiJ8XboZRAg1YMXmU9cee4EHC331");

#[program]
pub mod mindgame {
    use super::*;

    /// One-time creation of the shared config (draw nonce and lobby).
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Set or change the caller's display name. The first call registers them on the leaderboard.
    pub fn set_username(ctx: Context<SetUsername>, name: String) -> Result<()> {
        instructions::set_username::handler(ctx, name)
    }

    /// Start a fresh single-player session, replacing any previous one.
    pub fn start_single_player(ctx: Context<StartSinglePlayer>) -> Result<()> {
        instructions::start_single_player::handler(ctx)
    }

    /// Wait in the lobby, or pair with the player already waiting there.
    /// Pass the waiting player's session as `opponent_session` when the lobby is open.
    pub fn join_multiplayer(ctx: Context<JoinMultiplayer>) -> Result<()> {
        instructions::join_multiplayer::handler(ctx)
    }

    /// Answer the current question with a letter A-D (any case).
    pub fn submit_answer(ctx: Context<SubmitAnswer>, choice: String) -> Result<()> {
        instructions::submit_answer::handler(ctx, choice)
    }

    pub fn get_current_state(ctx: Context<GetCurrentState>, player: Pubkey) -> Result<CurrentState> {
        instructions::get_current_state::handler(ctx, player)
    }

    pub fn get_player_data(ctx: Context<GetPlayerData>, player: Pubkey) -> Result<PlayerData> {
        instructions::get_player_data::handler(ctx, player)
    }

    /// One page of the leaderboard, in registration order.
    pub fn get_leaderboard(ctx: Context<GetLeaderboard>, start: u64) -> Result<LeaderboardPage> {
        instructions::get_leaderboard::handler(ctx, start)
    }
}
