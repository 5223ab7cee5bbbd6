//! Validation of FHIR resources against the `sinter-models` metadata
//!
//! A [`ValidatorConfig`] (preset, builder, YAML or JSON) compiles into a
//! [`ValidationPlan`]; a [`Validator`] runs the plan's steps over JSON
//! resources and reports a [`ValidationOutcome`].
//!
//! Steps, in order:
//! - **schema**: unknown elements, cardinality, choice alternatives,
//!   primitive values and modifier extensions
//! - **terminology**: codes against the value sets enumerated in the model
//! - **references**: `#id` references to contained resources and
//!   in-resource identifiers such as `goalId`
//!
//! # Example
//!
//! ```rust
//! use sinter_validator::{Preset, Validator, ValidatorConfig};
//! use serde_json::json;
//!
//! let validator = Validator::from_config(&ValidatorConfig::preset(Preset::Authoring)).unwrap();
//!
//! let outcome = validator.validate(&json!({
//!     "resourceType": "Consent",
//!     "status": "bogus",
//!     "scope": {"text": "privacy"},
//!     "category": [{"text": "privacy"}]
//! }));
//!
//! assert!(!outcome.valid);
//! assert_eq!(outcome.issues[0].location.as_deref(), Some("Consent.status"));
//! ```

mod config;
mod error;
mod plan;
pub mod steps;
mod validator;

pub use config::{
    ExecConfig, ExtensibleHandling, PreferredHandling, Preset, ReferenceMode, ReferencesConfig,
    ReportConfig, SchemaConfig, SchemaMode, TerminologyConfig, TerminologyMode, ValidatorConfig,
    ValidatorConfigBuilder,
};
pub use error::ConfigError;
pub use plan::{ReferencesPlan, ReportPlan, SchemaPlan, Step, TerminologyPlan, ValidationPlan};
pub use validator::{IssueCode, IssueSeverity, ValidationIssue, ValidationOutcome, Validator};
