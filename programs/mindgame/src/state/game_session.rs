use anchor_lang::prelude::*;

use crate::constants::STREAK_TO_WIN;
use crate::errors::MindGameError;
use crate::questions::question;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum GameMode {
    Single,
    Multi,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum GameResult {
    Victory,
    GameOver,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum SessionStatus {
    /// Sitting in the lobby, no question yet.
    Waiting,
    /// Answering `question_index` with `streak` correct answers so far.
    Active { question_index: u8, streak: u8 },
    /// Terminal. Kept until the player starts another game.
    Finished { result: GameResult, streak: u8 },
}

#[account]
#[derive(InitSpace)]
pub struct GameSession {
    /// Wallet playing this session.
    pub player: Pubkey,
    pub mode: GameMode,
    pub status: SessionStatus,
    /// Question indices asked so far, in order. Bounded by the winning streak.
    #[max_len(5)]
    pub history: Vec<u8>,
    /// Matched opponent (multiplayer only).
    pub opponent: Option<Pubkey>,
    /// PDA bump seed.
    pub bump: u8,
}

/// What a submitted answer did to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct { answered: u8, streak: u8, next_question: u8 },
    Victory { answered: u8, streak: u8 },
    GameOver { answered: u8, streak: u8 },
}

impl AnswerOutcome {
    pub fn is_correct(&self) -> bool {
        !matches!(self, Self::GameOver { .. })
    }

    pub fn answered(&self) -> u8 {
        match *self {
            Self::Correct { answered, .. }
            | Self::Victory { answered, .. }
            | Self::GameOver { answered, .. } => answered,
        }
    }

    pub fn streak(&self) -> u8 {
        match *self {
            Self::Correct { streak, .. }
            | Self::Victory { streak, .. }
            | Self::GameOver { streak, .. } => streak,
        }
    }

    pub fn result(&self) -> Option<GameResult> {
        match self {
            Self::Correct { .. } => None,
            Self::Victory { .. } => Some(GameResult::Victory),
            Self::GameOver { .. } => Some(GameResult::GameOver),
        }
    }
}

/// Read-only projection of a session for clients.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub enum CurrentState {
    Idle,
    Waiting,
    Finished {
        result: GameResult,
        streak: u8,
    },
    Playing {
        question: String,
        options: Vec<String>,
        /// Streak reached if the current question is answered correctly.
        streak: u8,
    },
}

impl GameSession {
    pub const SEED: &'static [u8] = b"session";
    pub const MAX_HISTORY: usize = STREAK_TO_WIN as usize;

    /// Parks the player in the lobby with a placeholder multiplayer session.
    pub fn wait_for_opponent(&mut self, player: Pubkey) {
        self.player = player;
        self.mode = GameMode::Multi;
        self.status = SessionStatus::Waiting;
        self.history.clear();
        self.opponent = None;
    }

    /// Overwrites whatever was here with a fresh active session.
    pub fn start(
        &mut self,
        player: Pubkey,
        mode: GameMode,
        opponent: Option<Pubkey>,
        first_question: u8,
    ) {
        self.player = player;
        self.mode = mode;
        self.status = SessionStatus::Active {
            question_index: first_question,
            streak: 0,
        };
        self.history = vec![first_question];
        self.opponent = opponent;
    }

    /// Applies an answer. `next_question` is asked for a fresh index, given
    /// the history, only when the game continues. Nothing is written on error.
    pub fn submit_answer<F>(&mut self, choice: &str, mut next_question: F) -> Result<AnswerOutcome>
    where
        F: FnMut(&[u8]) -> Result<u8>,
    {
        let SessionStatus::Active {
            question_index: answered,
            streak,
        } = self.status
        else {
            return err!(MindGameError::SessionNotActive);
        };

        if !question(answered).is_correct(choice) {
            self.status = SessionStatus::Finished {
                result: GameResult::GameOver,
                streak,
            };
            return Ok(AnswerOutcome::GameOver { answered, streak });
        }

        let streak = streak.checked_add(1).ok_or(MindGameError::MathOverflow)?;
        if streak >= STREAK_TO_WIN {
            self.status = SessionStatus::Finished {
                result: GameResult::Victory,
                streak,
            };
            return Ok(AnswerOutcome::Victory { answered, streak });
        }

        let next = next_question(&self.history)?;
        self.history.push(next);
        self.status = SessionStatus::Active {
            question_index: next,
            streak,
        };
        Ok(AnswerOutcome::Correct {
            answered,
            streak,
            next_question: next,
        })
    }

    pub fn current_state(&self) -> CurrentState {
        match self.status {
            SessionStatus::Waiting => CurrentState::Waiting,
            SessionStatus::Finished { result, streak } => CurrentState::Finished { result, streak },
            SessionStatus::Active {
                question_index,
                streak,
            } => {
                let q = question(question_index);
                CurrentState::Playing {
                    question: q.prompt.to_string(),
                    options: q.options.iter().map(|o| o.to_string()).collect(),
                    streak: streak.saturating_add(1),
                }
            }
        }
    }
}
