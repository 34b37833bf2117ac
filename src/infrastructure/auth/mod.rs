mod jwt_service;
mod password;

pub use jwt_service::*;
pub use password::*;
