use anchor_lang::prelude::*;

use crate::constants::{MAX_DRAW_ATTEMPTS, QUESTION_COUNT};
use crate::errors::MindGameError;

/// Single-slot rendezvous pairing two players for a multiplayer match.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct Lobby {
    /// Player waiting for an opponent. The lobby is open while this is set.
    pub waiting_player: Option<Pubkey>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LobbyOutcome {
    /// Caller took the empty slot and now waits for an opponent.
    Waiting,
    /// Caller was paired with the player who was waiting.
    Matched { opponent: Pubkey },
}

impl Lobby {
    pub fn is_open(&self) -> bool {
        self.waiting_player.is_some()
    }

    pub fn join(&mut self, caller: Pubkey) -> Result<LobbyOutcome> {
        match self.waiting_player {
            None => {
                self.waiting_player = Some(caller);
                Ok(LobbyOutcome::Waiting)
            }
            Some(waiting) => {
                require_keys_neq!(waiting, caller, MindGameError::SelfMatch);
                self.waiting_player = None;
                Ok(LobbyOutcome::Matched { opponent: waiting })
            }
        }
    }
}

#[account]
#[derive(InitSpace)]
pub struct GameConfig {
    /// Draw counter shared by all players, bumped before every question draw.
    pub nonce: u64,
    /// Matchmaking slot.
    pub lobby: Lobby,
    /// Players registered so far; also the next registration index.
    pub total_players: u64,
    /// PDA bump seed.
    pub bump: u8,
}

impl GameConfig {
    pub const SEED: &'static [u8] = b"config";

    /// Draws a question index keyed on the caller and the next nonce.
    ///
    /// This is a deterministic hash, not a source of randomness: anyone who
    /// can read the nonce can predict the next question.
    pub fn draw_question_index(&mut self, caller: &Pubkey) -> Result<u8> {
        self.nonce = self
            .nonce
            .checked_add(1)
            .ok_or(MindGameError::MathOverflow)?;
        Ok(question_index_for(caller, self.nonce))
    }

    /// Draws a question not yet in `history`, giving up after
    /// `MAX_DRAW_ATTEMPTS` collisions and taking the question after the last one asked.
    pub fn next_unique_question(&mut self, caller: &Pubkey, history: &[u8]) -> Result<u8> {
        for _ in 0..MAX_DRAW_ATTEMPTS {
            let candidate = self.draw_question_index(caller)?;
            if !history.contains(&candidate) {
                return Ok(candidate);
            }
        }
        Ok(history.last().map_or(0, |last| (last + 1) % QUESTION_COUNT))
    }

    /// Hands out the next registration index.
    pub fn register_player(&mut self) -> Result<u64> {
        let index = self.total_players;
        self.total_players = index
            .checked_add(1)
            .ok_or(MindGameError::MathOverflow)?;
        Ok(index)
    }
}

/// `blake3(caller || nonce_le)`, first eight bytes little-endian, modulo the bank size.
pub fn question_index_for(caller: &Pubkey, nonce: u64) -> u8 {
    let mut hasher = blake3::Hasher::new();
    hasher.update(caller.as_ref());
    hasher.update(&nonce.to_le_bytes());
    let digest = hasher.finalize();

    let mut word = [0u8; 8];
    word.copy_from_slice(&digest.as_bytes()[..8]);
    (u64::from_le_bytes(word) % u64::from(QUESTION_COUNT)) as u8
}
