use anchor_lang::prelude::*;

use crate::events::SessionStarted;
use crate::state::{GameConfig, GameMode, GameSession};

#[derive(Accounts)]
pub struct StartSinglePlayer<'info> {
    #[account(
        mut,
        seeds = [GameConfig::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, GameConfig>,

    #[account(
        init_if_needed,
        payer = player,
        space = 8 + GameSession::INIT_SPACE,
        seeds = [GameSession::SEED, player.key().as_ref()],
        bump,
    )]
    pub session: Account<'info, GameSession>,

    #[account(mut)]
    pub player: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<StartSinglePlayer>) -> Result<()> {
    let player = ctx.accounts.player.key();
    let first_question = ctx.accounts.config.draw_question_index(&player)?;

    let session = &mut ctx.accounts.session;
    session.start(player, GameMode::Single, None, first_question);
    session.bump = ctx.bumps.session;

    emit!(SessionStarted {
        player,
        mode: GameMode::Single,
        opponent: None,
        question_index: first_question,
    });

    Ok(())
}
