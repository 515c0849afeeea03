use anchor_lang::prelude::*;

use crate::events::UsernameSet;
use crate::state::{GameConfig, PlayerProfile};

#[derive(Accounts)]
pub struct SetUsername<'info> {
    #[account(
        mut,
        seeds = [GameConfig::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, GameConfig>,

    #[account(
        init_if_needed,
        payer = player,
        space = 8 + PlayerProfile::INIT_SPACE,
        seeds = [PlayerProfile::SEED, player.key().as_ref()],
        bump,
    )]
    pub profile: Account<'info, PlayerProfile>,

    #[account(mut)]
    pub player: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<SetUsername>, name: String) -> Result<()> {
    let clock = Clock::get()?;
    let player = ctx.accounts.player.key();
    let profile = &mut ctx.accounts.profile;

    profile.ensure_initialized(player, ctx.bumps.profile);
    let newly_registered = register(&mut ctx.accounts.config, profile, name)?;

    emit!(UsernameSet {
        player,
        username: profile.username.clone(),
        newly_registered,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

/// Sets the name and, on first registration, appends the player to the
/// leaderboard order.
pub fn register(config: &mut GameConfig, profile: &mut PlayerProfile, name: String) -> Result<bool> {
    let newly_registered = profile.set_username(name)?;
    if newly_registered {
        profile.registration_index = config.register_player()?;
    }
    Ok(newly_registered)
}
