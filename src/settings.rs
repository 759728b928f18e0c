//! # Settings Module
//!
//! ## Purpose
//! Naming conventions and switches of the generator computation. The defaults reproduce the
//! symbols of the reference derivation: slow species `S` is the variable `v_S`, its formal
//! derivative placeholder is `df_S`, and the final expression is simplified.
//!
//! Settings can be kept next to a network description as a small JSON file:
//! ```json
//! { "variable_prefix": "v_", "derivative_prefix": "df_", "simplify_result": true }
//! ```
//! Missing fields take their default value.
use crate::Network::crn_model::{CrnError, validate_symbol_name};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// prefix of the symbolic variable standing for a slow species
    pub variable_prefix: String,
    /// prefix of the formal derivative placeholder of a slow species
    pub derivative_prefix: String,
    /// simplify the assembled generator before returning it
    pub simplify_result: bool,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            variable_prefix: "v_".to_string(),
            derivative_prefix: "df_".to_string(),
            simplify_result: true,
        }
    }
}

impl GeneratorSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variable_name(&self, species: &str) -> String {
        format!("{}{}", self.variable_prefix, species)
    }

    pub fn derivative_name(&self, species: &str) -> String {
        format!("{}{}", self.derivative_prefix, species)
    }

    /// both prefixes must produce valid symbol names and must differ
    pub fn validate(&self) -> Result<(), CrnError> {
        validate_symbol_name(&self.variable_name("x"))?;
        validate_symbol_name(&self.derivative_name("x"))?;
        if self.variable_prefix == self.derivative_prefix {
            return Err(CrnError::InvalidSymbol(format!(
                "variable and derivative prefix are both '{}'",
                self.variable_prefix
            )));
        }
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CrnError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let settings: GeneratorSettings = serde_json::from_str(&content)?;
        settings.validate()?;
        info!("generator settings loaded from {}", path.as_ref().display());
        Ok(settings)
    }
}
