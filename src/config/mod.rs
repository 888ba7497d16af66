//! Loading and saving dispenser configuration.
//!
//! The denomination set is runtime configuration: a new note can be added
//! by editing a config document, without recompiling. Configurations are
//! versioned and can be stored as JSON or as compact binary.

use crate::core::DenominationSet;
use crate::dispenser::Dispenser;
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::ConfigError;

/// Version identifier for the configuration format
pub const CONFIG_VERSION: u32 = 1;

/// Serializable dispenser configuration.
///
/// Denominations are kept as raw signed integers so a bad document can be
/// loaded and then reported with every violation, instead of failing on
/// the first negative number during parsing.
///
/// # Example
///
/// ```rust
/// use dispenser::config::DispenserConfig;
///
/// let config = DispenserConfig::from_json(
///     r#"{ "version": 1, "currency": "INR", "denominations": [2000, 500, 100] }"#,
/// )
/// .unwrap();
///
/// let atm = config.into_dispenser().unwrap();
/// assert!(atm.withdraw(3700).unwrap().is_satisfied());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispenserConfig {
    /// Configuration format version
    pub version: u32,

    /// Optional currency label, informational only
    #[serde(default)]
    pub currency: Option<String>,

    /// Note values, largest first
    pub denominations: Vec<i64>,
}

impl Default for DispenserConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            currency: None,
            denominations: vec![2000, 500, 100],
        }
    }
}

impl DispenserConfig {
    /// Create a current-version config for the given notes.
    pub fn new(denominations: Vec<i64>) -> Self {
        Self {
            denominations,
            ..Self::default()
        }
    }

    /// Attach a currency label.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Check the version and the denominations.
    pub fn validate(&self) -> Result<DenominationSet, ConfigError> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: self.version,
                supported: CONFIG_VERSION,
            });
        }

        Ok(DenominationSet::from_raw(&self.denominations)?)
    }

    /// Validate and build a dispenser from this configuration.
    pub fn into_dispenser(self) -> Result<Dispenser, ConfigError> {
        self.validate().map(Dispenser::new)
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))
    }

    /// Encode as compact binary.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        bincode::serialize(self).map_err(|e| ConfigError::SerializationFailed(e.to_string()))
    }

    /// Decode and validate a binary configuration.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = bincode::deserialize(bytes)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

impl From<&Dispenser> for DispenserConfig {
    fn from(dispenser: &Dispenser) -> Self {
        let denominations = dispenser
            .denominations()
            .iter()
            .filter_map(|d| i64::try_from(d.value()).ok())
            .collect();
        Self::new(denominations)
    }
}

impl TryFrom<DispenserConfig> for Dispenser {
    type Error = ConfigError;

    fn try_from(config: DispenserConfig) -> Result<Self, Self::Error> {
        config.into_dispenser()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DispenseError;

    #[test]
    fn default_config_is_standard_set() {
        let config = DispenserConfig::default();
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.validate().unwrap(), DenominationSet::standard());
    }

    #[test]
    fn json_roundtrip_preserves_config() {
        let config = DispenserConfig::new(vec![500, 200, 100, 50]).with_currency("EUR");

        let json = config.to_json().unwrap();
        let parsed = DispenserConfig::from_json(&json).unwrap();

        assert_eq!(config, parsed);
    }

    #[test]
    fn binary_roundtrip_preserves_config() {
        let config = DispenserConfig::default().with_currency("INR");

        let bytes = config.to_bytes().unwrap();
        let parsed = DispenserConfig::from_bytes(&bytes).unwrap();

        assert_eq!(config, parsed);
    }

    #[test]
    fn currency_is_optional_in_json() {
        let config =
            DispenserConfig::from_json(r#"{ "version": 1, "denominations": [100] }"#).unwrap();
        assert!(config.currency.is_none());
    }

    #[test]
    fn malformed_json_fails_to_parse() {
        let result = DispenserConfig::from_json("{ not json");
        assert!(matches!(result, Err(ConfigError::DeserializationFailed(_))));
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let result = DispenserConfig::from_json(r#"{ "version": 7, "denominations": [100] }"#);

        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedVersion {
                found: 7,
                supported: CONFIG_VERSION
            })
        ));
    }

    #[test]
    fn invalid_denominations_are_rejected() {
        let result =
            DispenserConfig::from_json(r#"{ "version": 1, "denominations": [100, -5, 500] }"#);

        match result {
            Err(ConfigError::InvalidDenominations(DispenseError::InvalidDenominations(v))) => {
                assert_eq!(v.len(), 2);
            }
            other => panic!("Expected invalid denominations, got {other:?}"),
        }
    }

    #[test]
    fn config_converts_to_dispenser() {
        let atm = Dispenser::try_from(DispenserConfig::new(vec![2000, 500, 100, 50])).unwrap();
        assert!(atm.withdraw(3750).unwrap().is_satisfied());
    }

    #[test]
    fn dispenser_converts_back_to_config() {
        let config = DispenserConfig::from(&Dispenser::standard());
        assert_eq!(config, DispenserConfig::default());
    }
}
