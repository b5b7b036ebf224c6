pub mod cli;
pub mod engine;
pub mod error;
pub mod models;
pub mod output;
pub mod store;
pub mod timestamp;
