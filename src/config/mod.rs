#[cfg(feature = "cli")]
pub mod cli;
pub mod defaults;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
