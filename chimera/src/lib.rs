pub mod cli;
pub mod ops;
pub mod utils;
