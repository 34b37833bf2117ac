mod generate_teams;
mod get_teams;
mod toss_coin;

pub use generate_teams::*;
pub use get_teams::*;
pub use toss_coin::*;
