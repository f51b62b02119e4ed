pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{defaults::BuiltinConfig, toml_config::TomlConfig};
pub use core::calculator::UpgradeCalculator;
pub use domain::model::{CalculatorReport, TrackKind};
pub use utils::error::{CalcError, Result};
