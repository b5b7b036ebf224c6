pub mod board_file;
pub mod config;
pub mod registry;

pub use board_file::{load, save};
pub use config::{Limits, ProjectConfig};
pub use registry::ProjectContext;
