use anchor_lang::prelude::*;

use crate::constants::MAX_LEADERBOARD_PAGE;
use crate::errors::MindGameError;
use crate::state::{GameConfig, PlayerProfile};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub player: Pubkey,
    pub username: String,
    pub xp: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardPage {
    /// Registered players overall, so clients know when to stop paging.
    pub total_players: u64,
    pub entries: Vec<LeaderboardEntry>,
}

/// Registered profiles for the page are passed as remaining accounts,
/// ordered by registration index starting at `start`.
#[derive(Accounts)]
pub struct GetLeaderboard<'info> {
    #[account(
        seeds = [GameConfig::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, GameConfig>,
}

pub fn handler(ctx: Context<GetLeaderboard>, start: u64) -> Result<LeaderboardPage> {
    require!(
        ctx.remaining_accounts.len() <= MAX_LEADERBOARD_PAGE,
        MindGameError::LeaderboardPageTooLarge
    );

    let mut profiles = Vec::with_capacity(ctx.remaining_accounts.len());
    for info in ctx.remaining_accounts {
        require_keys_eq!(*info.owner, crate::ID, MindGameError::LeaderboardMismatch);
        let data = info.try_borrow_data()?;
        profiles.push(PlayerProfile::try_deserialize(&mut &data[..])?);
    }

    build_page(ctx.accounts.config.total_players, start, &profiles)
}

/// Checks that `profiles` are exactly the registered players
/// `start..start + profiles.len()`, in order.
pub fn build_page(
    total_players: u64,
    start: u64,
    profiles: &[PlayerProfile],
) -> Result<LeaderboardPage> {
    let mut entries = Vec::with_capacity(profiles.len());
    for (offset, profile) in profiles.iter().enumerate() {
        let expected = start
            .checked_add(offset as u64)
            .ok_or(MindGameError::MathOverflow)?;
        require!(
            profile.registered
                && profile.registration_index == expected
                && expected < total_players,
            MindGameError::LeaderboardMismatch
        );
        entries.push(LeaderboardEntry {
            player: profile.authority,
            username: profile.display_name().to_string(),
            xp: profile.xp,
        });
    }

    Ok(LeaderboardPage {
        total_players,
        entries,
    })
}
