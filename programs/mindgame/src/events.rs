use anchor_lang::prelude::*;

use crate::state::{GameMode, GameResult};

#[event]
pub struct UsernameSet {
    pub player: Pubkey,
    pub username: String,
    /// True when this call registered the player.
    pub newly_registered: bool,
    pub timestamp: i64,
}

#[event]
pub struct SessionStarted {
    pub player: Pubkey,
    pub mode: GameMode,
    pub opponent: Option<Pubkey>,
    pub question_index: u8,
}

#[event]
pub struct LobbyJoined {
    pub player: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct PlayersMatched {
    pub waiting_player: Pubkey,
    pub joining_player: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct AnswerSubmitted {
    pub player: Pubkey,
    pub question_index: u8,
    pub correct: bool,
    pub streak: u8,
    pub xp: u64,
}

#[event]
pub struct GameFinished {
    pub player: Pubkey,
    pub result: GameResult,
    pub streak: u8,
}
