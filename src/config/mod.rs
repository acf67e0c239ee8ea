pub mod toml_config;

pub use toml_config::RosterConfig;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "student-roster")]
#[command(about = "Interactive in-memory roster of students and their marks")]
pub struct CliConfig {
    /// Optional TOML file overriding grading and session settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the settings file when one was given, otherwise the defaults.
    pub fn roster_config(&self) -> crate::Result<RosterConfig> {
        match &self.config {
            Some(path) => RosterConfig::from_file(path),
            None => Ok(RosterConfig::default()),
        }
    }
}
