mod message;

pub mod archive;
pub mod download;
pub mod fs;
pub mod github;
pub mod system;

// used by the `message` macros
pub use colored::Colorize;
