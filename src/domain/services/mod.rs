pub mod coin_toss;
pub mod roster_gate;
pub mod team_balancer;

pub use coin_toss::*;
pub use roster_gate::*;
pub use team_balancer::*;
