mod add_player;
mod delete_player;
mod list_players;
mod update_player;

pub use add_player::*;
pub use delete_player::*;
pub use list_players::*;
pub use update_player::*;
