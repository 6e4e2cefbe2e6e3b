//! CLI command implementations.

pub mod config;
pub mod extract;
pub mod init;
pub mod tangle;

pub use config::config;
pub use extract::extract;
pub use init::init;
pub use tangle::{tangle, TangleOptions};
