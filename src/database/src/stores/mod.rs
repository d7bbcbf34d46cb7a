mod club;
mod league;

pub use club::*;
pub use league::*;
