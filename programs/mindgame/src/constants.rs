/// Number of entries in the question bank.
pub const QUESTION_COUNT: u8 = 20;

/// XP awarded for every correct answer.
pub const XP_PER_CORRECT_ANSWER: u64 = 10;

/// Consecutive correct answers that end a session in victory.
pub const STREAK_TO_WIN: u8 = 5;

/// Draws attempted before falling back to the question after the last one asked.
pub const MAX_DRAW_ATTEMPTS: u8 = 10;

/// Display name reported for players who never set one.
pub const DEFAULT_USERNAME: &str = "Anon";

/// Maximum username length in UTF-8 bytes.
pub const MAX_USERNAME_LEN: usize = 32;

/// Profiles accepted per leaderboard call (return data is capped at 1024 bytes).
pub const MAX_LEADERBOARD_PAGE: usize = 8;
