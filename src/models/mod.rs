pub mod board;
pub mod entry;

pub use board::*;
pub use entry::*;
