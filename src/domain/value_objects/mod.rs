mod player_profile;
mod rating;

pub use player_profile::*;
pub use rating::*;
