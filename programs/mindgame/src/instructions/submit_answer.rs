use anchor_lang::prelude::*;

use crate::constants::XP_PER_CORRECT_ANSWER;
use crate::errors::MindGameError;
use crate::events::{AnswerSubmitted, GameFinished};
use crate::state::{AnswerOutcome, GameConfig, GameResult, GameSession, PlayerProfile};

#[derive(Accounts)]
pub struct SubmitAnswer<'info> {
    #[account(
        mut,
        seeds = [GameConfig::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, GameConfig>,

    /// Absent when the player never started a game.
    #[account(
        mut,
        seeds = [GameSession::SEED, player.key().as_ref()],
        bump = session.bump,
    )]
    pub session: Option<Account<'info, GameSession>>,

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

pub fn handler(ctx: Context<SubmitAnswer>, choice: String) -> Result<()> {
    let player = ctx.accounts.player.key();
    let accounts = &mut *ctx.accounts;

    accounts
        .profile
        .ensure_initialized(player, ctx.bumps.profile);
    let outcome = apply_answer(
        &mut accounts.config,
        accounts.session.as_deref_mut(),
        &mut accounts.profile,
        player,
        &choice,
    )?;

    emit!(AnswerSubmitted {
        player,
        question_index: outcome.answered(),
        correct: outcome.is_correct(),
        streak: outcome.streak(),
        xp: accounts.profile.xp,
    });

    if let Some(result) = outcome.result() {
        match result {
            GameResult::Victory => msg!("{} won with a streak of {}", player, outcome.streak()),
            GameResult::GameOver => msg!("{} is out at a streak of {}", player, outcome.streak()),
        }
        emit!(GameFinished {
            player,
            result,
            streak: outcome.streak(),
        });
    }

    Ok(())
}

/// Advances `player`'s session and credits XP for a correct answer.
pub fn apply_answer(
    config: &mut GameConfig,
    session: Option<&mut GameSession>,
    profile: &mut PlayerProfile,
    player: Pubkey,
    choice: &str,
) -> Result<AnswerOutcome> {
    let session = session.ok_or(MindGameError::NoActiveGame)?;
    let outcome =
        session.submit_answer(choice, |history| config.next_unique_question(&player, history))?;
    if outcome.is_correct() {
        profile.award_xp(XP_PER_CORRECT_ANSWER)?;
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::{question, AnswerKey};
    use crate::state::{CurrentState, GameMode, SessionStatus};
    use crate::test_utils::{blank_config, blank_profile, blank_session, error_code};

    fn start_single(config: &mut GameConfig, session: &mut GameSession, player: Pubkey) {
        let first = config.draw_question_index(&player).unwrap();
        session.start(player, GameMode::Single, None, first);
    }

    fn correct_choice(session: &GameSession) -> &'static str {
        match session.status {
            SessionStatus::Active { question_index, .. } => question(question_index).answer.letter(),
            other => panic!("expected active session, got {other:?}"),
        }
    }

    fn wrong_choice(session: &GameSession) -> &'static str {
        if correct_choice(session) == AnswerKey::A.letter() {
            "B"
        } else {
            "A"
        }
    }

    #[test]
    fn five_correct_answers_win_and_earn_fifty_xp() {
        let mut config = blank_config();
        let mut session = blank_session();
        let mut profile = blank_profile();
        let player = Pubkey::new_unique();
        start_single(&mut config, &mut session, player);

        for _ in 0..5 {
            let choice = correct_choice(&session).to_lowercase();
            apply_answer(&mut config, Some(&mut session), &mut profile, player, &choice).unwrap();
        }

        assert_eq!(
            session.current_state(),
            CurrentState::Finished {
                result: GameResult::Victory,
                streak: 5
            }
        );
        assert_eq!(profile.xp, 50);

        let mut asked = session.history.clone();
        asked.sort_unstable();
        asked.dedup();
        assert_eq!(asked.len(), session.history.len());
    }

    #[test]
    fn wrong_first_answer_keeps_xp() {
        let mut config = blank_config();
        let mut session = blank_session();
        let mut profile = blank_profile();
        let player = Pubkey::new_unique();
        start_single(&mut config, &mut session, player);

        let choice = wrong_choice(&session);
        let outcome =
            apply_answer(&mut config, Some(&mut session), &mut profile, player, choice).unwrap();

        assert_eq!(outcome.result(), Some(GameResult::GameOver));
        assert_eq!(
            session.current_state(),
            CurrentState::Finished {
                result: GameResult::GameOver,
                streak: 0
            }
        );
        assert_eq!(profile.xp, 0);
    }

    #[test]
    fn missing_session_is_no_active_game() {
        let mut config = blank_config();
        let mut profile = blank_profile();
        let err = apply_answer(&mut config, None, &mut profile, Pubkey::new_unique(), "A")
            .unwrap_err();
        assert_eq!(error_code(err), u32::from(MindGameError::NoActiveGame));
        assert_eq!(config.nonce, 0);
    }

    #[test]
    fn finished_session_rejects_answers_without_touching_xp() {
        let mut config = blank_config();
        let mut session = blank_session();
        let mut profile = blank_profile();
        let player = Pubkey::new_unique();
        start_single(&mut config, &mut session, player);

        let choice = correct_choice(&session);
        apply_answer(&mut config, Some(&mut session), &mut profile, player, choice).unwrap();
        let choice = wrong_choice(&session);
        apply_answer(&mut config, Some(&mut session), &mut profile, player, choice).unwrap();
        assert_eq!(profile.xp, 10);

        let err = apply_answer(&mut config, Some(&mut session), &mut profile, player, "A")
            .unwrap_err();
        assert_eq!(error_code(err), u32::from(MindGameError::SessionNotActive));
        assert_eq!(profile.xp, 10);
    }

    #[test]
    fn correct_answer_draws_next_question_from_shared_nonce() {
        let mut config = blank_config();
        let mut session = blank_session();
        let mut profile = blank_profile();
        let player = Pubkey::new_unique();
        start_single(&mut config, &mut session, player);
        let nonce_before = config.nonce;

        let choice = correct_choice(&session);
        let outcome =
            apply_answer(&mut config, Some(&mut session), &mut profile, player, choice).unwrap();

        assert!(config.nonce > nonce_before);
        let AnswerOutcome::Correct { next_question, streak, .. } = outcome else {
            panic!("expected the game to continue, got {outcome:?}");
        };
        assert_eq!(streak, 1);
        assert_eq!(session.history.last(), Some(&next_question));
        assert_eq!(session.history.len(), 2);
    }
}
