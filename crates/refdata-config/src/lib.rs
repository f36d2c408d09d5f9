//! RefData Configuration Layer
//!
//! Settings for the product services: service names, query tracing and
//! schedule warnings. Configurations load from TOML or JSON and are
//! validated on load.
//!
//! # Example
//!
//! ```rust
//! use refdata_config::{RefDataConfig, ServiceConfig, Validate};
//!
//! let config = RefDataConfig::from_toml_str(
//!     r#"
//!     [swaps]
//!     trace_queries = true
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(config.swaps.name, "swaps");
//! assert!(config.swaps.trace_queries);
//!
//! let custom = RefDataConfig::new().with_bonds(ServiceConfig::new("govies"));
//! assert!(custom.is_valid());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]

pub mod error;
pub mod service;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use service::{
    RefDataConfig, ServiceConfig, DEFAULT_BOND_SERVICE, DEFAULT_FUTURE_SERVICE,
    DEFAULT_SWAP_SERVICE,
};
