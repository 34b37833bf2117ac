mod attendance_repo;
mod player_repo;
mod user_repo;

pub use attendance_repo::*;
pub use player_repo::*;
pub use user_repo::*;
