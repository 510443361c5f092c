pub mod row;
pub mod table;

pub use row::{PlayHand, StrategyRow};
pub use table::StrategyTable;
