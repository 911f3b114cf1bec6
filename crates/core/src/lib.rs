// Relaykit Core - Shared Constants, Settings & Error Type
// NO infrastructure dependencies: the helper crates build on this alone.

pub mod constants;
pub mod error;
pub mod settings;

pub use constants::ConfigKey;
pub use error::{AppError, Result};
pub use settings::{RegistryCenterSettings, SchedulerSettings, Settings};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
