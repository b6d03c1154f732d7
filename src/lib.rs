pub mod board;
pub mod movegen;
pub mod session;
pub mod types;
