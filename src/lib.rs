pub mod board;
pub mod driver;
pub mod errors;
pub mod evaluation;
pub mod ordering;
pub mod pgn;
pub mod pst;
pub mod search;
pub mod tt;
pub mod types;
