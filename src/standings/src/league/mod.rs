mod engine;
mod league;
mod matches;
mod score;
mod table;

pub use engine::*;
pub use league::*;
pub use matches::*;
pub use score::*;
pub use table::*;
