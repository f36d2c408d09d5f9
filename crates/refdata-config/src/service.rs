//! Service configuration types.
//!
//! A [`RefDataConfig`] holds one [`ServiceConfig`] per product service and
//! loads from TOML or JSON:
//!
//! ```toml
//! [bonds]
//! trace_queries = true
//!
//! [swaps]
//! name = "irs"
//! warn_on_inverted_schedule = true
//! ```
//!
//! Keys left out of a section keep that service's defaults; in particular
//! a section without a `name` takes the section's own name.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigResult, Validate, ValidationError};

/// Default name of the bond service.
pub const DEFAULT_BOND_SERVICE: &str = "bonds";
/// Default name of the swap service.
pub const DEFAULT_SWAP_SERVICE: &str = "swaps";
/// Default name of the future service.
pub const DEFAULT_FUTURE_SERVICE: &str = "futures";

// =============================================================================
// SERVICE CONFIGURATION
// =============================================================================

/// Settings for one product service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name, used as a span field in logs.
    #[serde(default)]
    pub name: String,

    /// Emit a trace event for every query with its hit count.
    #[serde(default)]
    pub trace_queries: bool,

    /// Warn when a swap terminates before it becomes effective.
    #[serde(default)]
    pub warn_on_inverted_schedule: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BOND_SERVICE)
    }
}

impl ServiceConfig {
    /// Creates a configuration with tracing and warnings off.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            trace_queries: false,
            warn_on_inverted_schedule: false,
        }
    }

    /// Default bond service configuration.
    pub fn bonds() -> Self {
        Self::new(DEFAULT_BOND_SERVICE)
    }

    /// Default swap service configuration. Inverted schedules are warned on.
    pub fn swaps() -> Self {
        Self::new(DEFAULT_SWAP_SERVICE).with_warn_on_inverted_schedule(true)
    }

    /// Default future service configuration.
    pub fn futures() -> Self {
        Self::new(DEFAULT_FUTURE_SERVICE)
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Enables or disables query tracing.
    pub fn with_trace_queries(mut self, enabled: bool) -> Self {
        self.trace_queries = enabled;
        self
    }

    /// Enables or disables the inverted schedule warning.
    pub fn with_warn_on_inverted_schedule(mut self, enabled: bool) -> Self {
        self.warn_on_inverted_schedule = enabled;
        self
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::new("name", "Name cannot be empty"));
        } else if self.name.chars().any(char::is_whitespace) {
            errors.push(ValidationError::with_rule(
                "name",
                format!("Name '{}' contains whitespace", self.name),
                "no_whitespace",
            ));
        }

        errors
    }
}

// =============================================================================
// REFDATA CONFIGURATION
// =============================================================================

/// Configuration for all product services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RefDataSections")]
pub struct RefDataConfig {
    /// Bond service settings.
    pub bonds: ServiceConfig,

    /// Swap service settings.
    pub swaps: ServiceConfig,

    /// Future service settings.
    pub futures: ServiceConfig,
}

/// A service section as written in a document; absent keys are `None`.
#[derive(Debug, Default, Deserialize)]
struct ServiceSection {
    name: Option<String>,
    trace_queries: Option<bool>,
    warn_on_inverted_schedule: Option<bool>,
}

impl ServiceSection {
    fn over(self, defaults: ServiceConfig) -> ServiceConfig {
        ServiceConfig {
            name: self
                .name
                .filter(|name| !name.is_empty())
                .unwrap_or(defaults.name),
            trace_queries: self.trace_queries.unwrap_or(defaults.trace_queries),
            warn_on_inverted_schedule: self
                .warn_on_inverted_schedule
                .unwrap_or(defaults.warn_on_inverted_schedule),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RefDataSections {
    #[serde(default)]
    bonds: ServiceSection,
    #[serde(default)]
    swaps: ServiceSection,
    #[serde(default)]
    futures: ServiceSection,
}

impl From<RefDataSections> for RefDataConfig {
    fn from(sections: RefDataSections) -> Self {
        Self {
            bonds: sections.bonds.over(ServiceConfig::bonds()),
            swaps: sections.swaps.over(ServiceConfig::swaps()),
            futures: sections.futures.over(ServiceConfig::futures()),
        }
    }
}

impl Default for RefDataConfig {
    fn default() -> Self {
        Self {
            bonds: ServiceConfig::bonds(),
            swaps: ServiceConfig::swaps(),
            futures: ServiceConfig::futures(),
        }
    }
}

impl RefDataConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bond service configuration.
    pub fn with_bonds(mut self, config: ServiceConfig) -> Self {
        self.bonds = config;
        self
    }

    /// Sets the swap service configuration.
    pub fn with_swaps(mut self, config: ServiceConfig) -> Self {
        self.swaps = config;
        self
    }

    /// Sets the future service configuration.
    pub fn with_futures(mut self, config: ServiceConfig) -> Self {
        self.futures = config;
        self
    }

    /// Turns query tracing on or off for every service.
    pub fn with_trace_queries(mut self, enabled: bool) -> Self {
        self.bonds.trace_queries = enabled;
        self.swaps.trace_queries = enabled;
        self.futures.trace_queries = enabled;
        self
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validated()
    }

    /// Parses and validates a JSON document.
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validated()
    }

    /// Reads a TOML file and validates it.
    pub fn from_toml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Renders the configuration as pretty JSON.
    pub fn to_json_string(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validated(self) -> ConfigResult<Self> {
        self.validate_or_error()?;
        Ok(self)
    }
}

impl Validate for RefDataConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let sections = [
            ("bonds", &self.bonds),
            ("swaps", &self.swaps),
            ("futures", &self.futures),
        ];

        let mut errors: Vec<ValidationError> = sections
            .iter()
            .flat_map(|(section, config)| {
                config.validate().into_iter().map(move |e| e.nested(section))
            })
            .collect();

        for (i, (section, config)) in sections.iter().enumerate() {
            let clash = sections[..i]
                .iter()
                .find(|(_, other)| !config.name.is_empty() && other.name == config.name);
            if let Some((other, _)) = clash {
                errors.push(ValidationError::with_rule(
                    format!("{section}.name"),
                    format!("Name '{}' is already used by {other}", config.name),
                    "unique_names",
                ));
            }
        }

        errors
    }
}
