use anchor_lang::prelude::*;

use crate::errors::MindGameError;
use crate::events::{LobbyJoined, PlayersMatched, SessionStarted};
use crate::state::{GameConfig, GameMode, GameSession, LobbyOutcome};

#[derive(Accounts)]
pub struct JoinMultiplayer<'info> {
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

    /// Session of the player currently waiting in the lobby.
    /// Required only when the lobby is open.
    #[account(mut)]
    pub opponent_session: Option<Account<'info, GameSession>>,

    #[account(mut)]
    pub player: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JoinOutcome {
    Waiting,
    Matched {
        opponent: Pubkey,
        player_first: u8,
        opponent_first: u8,
    },
}

pub fn handler(ctx: Context<JoinMultiplayer>) -> Result<()> {
    let clock = Clock::get()?;
    let player = ctx.accounts.player.key();
    let accounts = &mut *ctx.accounts;
    accounts.session.bump = ctx.bumps.session;

    let outcome = join_lobby(
        &mut accounts.config,
        &mut accounts.session,
        accounts.opponent_session.as_deref_mut(),
        player,
    )?;

    let JoinOutcome::Matched {
        opponent,
        player_first,
        opponent_first,
    } = outcome
    else {
        emit!(LobbyJoined {
            player,
            timestamp: clock.unix_timestamp,
        });
        return Ok(());
    };

    emit!(PlayersMatched {
        waiting_player: opponent,
        joining_player: player,
        timestamp: clock.unix_timestamp,
    });
    emit!(SessionStarted {
        player,
        mode: GameMode::Multi,
        opponent: Some(opponent),
        question_index: player_first,
    });
    emit!(SessionStarted {
        player: opponent,
        mode: GameMode::Multi,
        opponent: Some(player),
        question_index: opponent_first,
    });

    Ok(())
}

/// Runs one lobby transition for `player`. When a match is made both
/// sessions are restarted, each naming the other as opponent.
pub fn join_lobby(
    config: &mut GameConfig,
    session: &mut GameSession,
    opponent_session: Option<&mut GameSession>,
    player: Pubkey,
) -> Result<JoinOutcome> {
    let mut lobby = config.lobby;
    let opponent = match lobby.join(player)? {
        LobbyOutcome::Waiting => {
            config.lobby = lobby;
            session.wait_for_opponent(player);
            return Ok(JoinOutcome::Waiting);
        }
        LobbyOutcome::Matched { opponent } => opponent,
    };

    // Sessions are program-owned and only ever created at the PDA of their
    // `player`, so matching that field identifies the waiting player's account.
    let opponent_session = opponent_session.ok_or(MindGameError::OpponentSessionMissing)?;
    require_keys_eq!(
        opponent_session.player,
        opponent,
        MindGameError::OpponentSessionMismatch
    );

    // Both first questions are keyed on the joining player, one nonce apart.
    let player_first = config.draw_question_index(&player)?;
    let opponent_first = config.draw_question_index(&player)?;

    config.lobby = lobby;
    session.start(player, GameMode::Multi, Some(opponent), player_first);
    opponent_session.start(opponent, GameMode::Multi, Some(player), opponent_first);

    Ok(JoinOutcome::Matched {
        opponent,
        player_first,
        opponent_first,
    })
}
