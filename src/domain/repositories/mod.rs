mod attendance_repository;
mod player_repository;
mod user_repository;

pub use attendance_repository::*;
pub use player_repository::*;
pub use user_repository::*;
