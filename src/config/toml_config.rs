use crate::config::defaults::{default_bundles, DEFAULT_BUNDLE_INDEX, ITEM_BAG, POKEMON_STORAGE};
use crate::domain::model::{Bundle, CapacityTrackConfig};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{
    validate_index, validate_non_empty_string, validate_positive_number, validate_positive_price,
    Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub calculator: Option<CalculatorSection>,
    pub item_bag: Option<CapacityTrackConfig>,
    pub pokemon_storage: Option<CapacityTrackConfig>,
    #[serde(default = "default_bundles")]
    pub bundles: Vec<Bundle>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculatorSection {
    pub default_bundle: Option<usize>,
}

impl TomlConfig {
    /// Load the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CalcError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse the configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CalcError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` references with environment values; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CalcError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    fn validate_track(section: &str, track: &CapacityTrackConfig) -> Result<()> {
        validate_positive_number(&format!("{}.step", section), u64::from(track.step), 1)?;
        if track.default > track.max {
            return Err(CalcError::InvalidConfigValueError {
                field: format!("{}.default", section),
                value: track.default.to_string(),
                reason: format!("Default cannot exceed max ({})", track.max),
            });
        }
        Ok(())
    }

    /// Check pool constants and the bundle table.
    pub fn validate_config(&self) -> Result<()> {
        Self::validate_track("item_bag", &self.item_bag())?;
        Self::validate_track("pokemon_storage", &self.pokemon_storage())?;

        for (i, bundle) in self.bundles.iter().enumerate() {
            validate_positive_number(&format!("bundles[{}].units", i), u64::from(bundle.units), 1)?;
            validate_positive_price(&format!("bundles[{}].price", i), bundle.price)?;
            validate_non_empty_string(&format!("bundles[{}].label", i), &bundle.label)?;
        }

        validate_index("calculator.default_bundle", self.default_bundle(), self.bundles.len())
    }
}

impl ConfigProvider for TomlConfig {
    fn item_bag(&self) -> CapacityTrackConfig {
        self.item_bag.unwrap_or(ITEM_BAG)
    }

    fn pokemon_storage(&self) -> CapacityTrackConfig {
        self.pokemon_storage.unwrap_or(POKEMON_STORAGE)
    }

    fn bundles(&self) -> &[Bundle] {
        &self.bundles
    }

    fn default_bundle(&self) -> usize {
        self.calculator
            .as_ref()
            .and_then(|c| c.default_bundle)
            .unwrap_or(DEFAULT_BUNDLE_INDEX)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
