mod get_attendance;
mod set_all_attendance;
mod set_attendance;

pub use get_attendance::*;
pub use set_all_attendance::*;
pub use set_attendance::*;
