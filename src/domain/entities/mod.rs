mod attendance;
mod player;
mod team;
mod user;

pub use attendance::*;
pub use player::*;
pub use team::*;
pub use user::*;
