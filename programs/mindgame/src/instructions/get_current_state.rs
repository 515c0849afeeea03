use anchor_lang::prelude::*;

use crate::state::{CurrentState, GameSession};

#[derive(Accounts)]
#[instruction(player: Pubkey)]
pub struct GetCurrentState<'info> {
    #[account(
        seeds = [GameSession::SEED, player.as_ref()],
        bump = session.bump,
    )]
    pub session: Option<Account<'info, GameSession>>,
}

pub fn handler(ctx: Context<GetCurrentState>, _player: Pubkey) -> Result<CurrentState> {
    Ok(project_state(ctx.accounts.session.as_deref()))
}

/// A player who never started a game is idle.
pub fn project_state(session: Option<&GameSession>) -> CurrentState {
    session.map_or(CurrentState::Idle, GameSession::current_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{GameMode, GameResult};
    use crate::test_utils::blank_session;

    #[test]
    fn missing_session_is_idle() {
        assert_eq!(project_state(None), CurrentState::Idle);
    }

    #[test]
    fn existing_session_is_projected() {
        let mut session = blank_session();
        session.wait_for_opponent(Pubkey::new_unique());
        assert_eq!(project_state(Some(&session)), CurrentState::Waiting);

        session.start(Pubkey::new_unique(), GameMode::Single, None, 0);
        session.submit_answer("C", |_| Ok(1)).unwrap();
        assert_eq!(
            project_state(Some(&session)),
            CurrentState::Finished {
                result: GameResult::GameOver,
                streak: 0
            }
        );
    }
}
