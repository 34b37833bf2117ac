pub mod attendance;
pub mod auth;
pub mod roster;
pub mod teams;

#[cfg(test)]
pub(crate) mod test_support;
