use anchor_lang::error::Error;
use anchor_lang::prelude::Pubkey;

use crate::state::{GameConfig, GameMode, GameSession, Lobby, PlayerProfile, SessionStatus};

/// Numeric code of an Anchor error, for comparing against `u32::from(MindGameError::..)`.
pub fn error_code(err: Error) -> u32 {
    match err {
        Error::AnchorError(e) => e.error_code_number,
        Error::ProgramError(e) => panic!("expected an anchor error, got {e:?}"),
    }
}

/// Profile as Anchor hands it over right after `init_if_needed` creates it.
pub fn blank_profile() -> PlayerProfile {
    PlayerProfile {
        authority: Pubkey::default(),
        username: String::new(),
        xp: 0,
        registered: false,
        registration_index: 0,
        bump: 0,
    }
}

pub fn blank_session() -> GameSession {
    GameSession {
        player: Pubkey::default(),
        mode: GameMode::Single,
        status: SessionStatus::Waiting,
        history: Vec::new(),
        opponent: None,
        bump: 0,
    }
}

pub fn blank_config() -> GameConfig {
    GameConfig {
        nonce: 0,
        lobby: Lobby::default(),
        total_players: 0,
        bump: 255,
    }
}
