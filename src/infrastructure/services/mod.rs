mod team_sheet_store;

pub use team_sheet_store::*;
