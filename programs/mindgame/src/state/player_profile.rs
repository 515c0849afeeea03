use anchor_lang::prelude::*;

use crate::constants::{DEFAULT_USERNAME, MAX_USERNAME_LEN};
use crate::errors::MindGameError;

#[account]
#[derive(InitSpace)]
pub struct PlayerProfile {
    /// Wallet that owns this profile.
    pub authority: Pubkey,
    /// Display name (max 32 UTF-8 bytes). Empty until the player registers.
    #[max_len(32)]
    pub username: String,
    /// Accumulated experience points. Never decreases.
    pub xp: u64,
    /// Whether the player has set a username.
    pub registered: bool,
    /// Position in the leaderboard listing (valid once registered).
    pub registration_index: u64,
    /// PDA bump seed.
    pub bump: u8,
}

/// Public view of a player's progress.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct PlayerData {
    pub xp: u64,
    pub username: String,
}

impl Default for PlayerData {
    fn default() -> Self {
        Self {
            xp: 0,
            username: DEFAULT_USERNAME.to_string(),
        }
    }
}

impl PlayerProfile {
    pub const SEED: &'static [u8] = b"player";

    /// Fills in a freshly created profile. A no-op once `authority` is set.
    pub fn ensure_initialized(&mut self, authority: Pubkey, bump: u8) {
        if self.authority == Pubkey::default() {
            self.authority = authority;
            self.bump = bump;
        }
    }

    /// Upserts the display name. Returns `true` on first registration,
    /// in which case the caller must assign `registration_index`.
    pub fn set_username(&mut self, name: String) -> Result<bool> {
        require!(name.len() <= MAX_USERNAME_LEN, MindGameError::UsernameTooLong);

        self.username = name;
        let newly_registered = !self.registered;
        self.registered = true;
        Ok(newly_registered)
    }

    pub fn award_xp(&mut self, amount: u64) -> Result<u64> {
        self.xp = self
            .xp
            .checked_add(amount)
            .ok_or(MindGameError::MathOverflow)?;
        Ok(self.xp)
    }

    pub fn display_name(&self) -> &str {
        if self.registered {
            &self.username
        } else {
            DEFAULT_USERNAME
        }
    }

    pub fn player_data(&self) -> PlayerData {
        PlayerData {
            xp: self.xp,
            username: self.display_name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{blank_profile, error_code};

    #[test]
    fn unregistered_profile_reads_as_defaults() {
        assert_eq!(PlayerData::default(), PlayerData { xp: 0, username: "Anon".into() });
        assert_eq!(blank_profile().player_data(), PlayerData::default());
    }

    #[test]
    fn last_username_wins_and_registers_once() {
        let mut profile = blank_profile();
        assert!(profile.set_username("Alice".into()).unwrap());
        assert!(!profile.set_username("Bob".into()).unwrap());
        assert_eq!(profile.player_data().username, "Bob");
        assert!(profile.registered);
    }

    #[test]
    fn empty_username_still_registers() {
        let mut profile = blank_profile();
        assert!(profile.set_username(String::new()).unwrap());
        assert!(profile.registered);
        assert_eq!(profile.player_data().username, "");
        assert!(!profile.set_username(String::new()).unwrap());
    }

    #[test]
    fn username_length_is_bounded() {
        let mut profile = blank_profile();
        let err = profile.set_username("x".repeat(MAX_USERNAME_LEN + 1)).unwrap_err();
        assert_eq!(error_code(err), u32::from(MindGameError::UsernameTooLong));
        assert!(!profile.registered);

        assert!(profile.set_username("x".repeat(MAX_USERNAME_LEN)).is_ok());
    }

    #[test]
    fn xp_accumulates_without_registration() {
        let mut profile = blank_profile();
        assert_eq!(profile.award_xp(10).unwrap(), 10);
        assert_eq!(profile.award_xp(10).unwrap(), 20);
        assert_eq!(profile.player_data(), PlayerData { xp: 20, username: "Anon".into() });
    }

    #[test]
    fn xp_overflow_is_an_error() {
        let mut profile = blank_profile();
        profile.xp = u64::MAX - 5;
        let err = profile.award_xp(10).unwrap_err();
        assert_eq!(error_code(err), u32::from(MindGameError::MathOverflow));
        assert_eq!(profile.xp, u64::MAX - 5);
    }

    #[test]
    fn initialization_only_happens_once() {
        let mut profile = blank_profile();
        let owner = Pubkey::new_unique();
        profile.ensure_initialized(owner, 254);
        profile.ensure_initialized(Pubkey::new_unique(), 1);
        assert_eq!(profile.authority, owner);
        assert_eq!(profile.bump, 254);
    }
}
