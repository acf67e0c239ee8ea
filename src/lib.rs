pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::RosterConfig;
pub use core::{app::App, console::Console};
pub use domain::{model::Student, registry::Registry};
pub use utils::error::{Result, RosterError};
