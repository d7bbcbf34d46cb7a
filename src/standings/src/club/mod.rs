mod club;

pub use club::*;
