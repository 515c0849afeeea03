pub mod game_config;
pub mod game_session;
pub mod player_profile;

pub use game_config::*;
pub use game_session::*;
pub use player_profile::*;
