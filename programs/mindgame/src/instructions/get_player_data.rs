use anchor_lang::prelude::*;

use crate::state::{PlayerData, PlayerProfile};

#[derive(Accounts)]
#[instruction(player: Pubkey)]
pub struct GetPlayerData<'info> {
    #[account(
        seeds = [PlayerProfile::SEED, player.as_ref()],
        bump = profile.bump,
    )]
    pub profile: Option<Account<'info, PlayerProfile>>,
}

pub fn handler(ctx: Context<GetPlayerData>, _player: Pubkey) -> Result<PlayerData> {
    Ok(project_player(ctx.accounts.profile.as_deref()))
}

/// Players with no profile read as zero XP and the default name.
pub fn project_player(profile: Option<&PlayerProfile>) -> PlayerData {
    profile.map(PlayerProfile::player_data).unwrap_or_default()
}
