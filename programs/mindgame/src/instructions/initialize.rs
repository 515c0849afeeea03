use anchor_lang::prelude::*;

use crate::state::{GameConfig, Lobby};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + GameConfig::INIT_SPACE,
        seeds = [GameConfig::SEED],
        bump,
    )]
    pub config: Account<'info, GameConfig>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let config = &mut ctx.accounts.config;

    config.nonce = 0;
    config.lobby = Lobby::default();
    config.total_players = 0;
    config.bump = ctx.bumps.config;

    msg!("MindGame initialized by {}", ctx.accounts.authority.key());

    Ok(())
}
