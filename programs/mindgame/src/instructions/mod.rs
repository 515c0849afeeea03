pub mod get_current_state;
pub mod get_leaderboard;
pub mod get_player_data;
pub mod initialize;
pub mod join_multiplayer;
pub mod set_username;
pub mod start_single_player;
pub mod submit_answer;

pub use get_current_state::*;
pub use get_leaderboard::*;
pub use get_player_data::*;
pub use initialize::*;
pub use join_multiplayer::*;
pub use set_username::*;
pub use start_single_player::*;
pub use submit_answer::*;
