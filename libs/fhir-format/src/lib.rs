//! FHIR wire formats for `sinter-models`
//!
//! - [`xml`]: JSON ↔ XML conversion following the HL7 mapping rules, using
//!   model metadata for element order, arrays and primitive types
//! - [`parse`]: typed parsing that rejects or drops unknown elements and
//!   conflicting choice alternatives
//! - [`XmlSerializable`]: `to_xml`/`from_xml` for every modeled resource
//!
//! # Example
//!
//! ```rust
//! use sinter_format::XmlSerializable;
//! use sinter_models::{Consent, Serializable};
//! use serde_json::json;
//!
//! let consent = Consent::from_value(json!({
//!     "resourceType": "Consent",
//!     "status": "active",
//!     "category": [{"text": "privacy"}]
//! }))
//! .unwrap();
//!
//! let xml = consent.to_xml().unwrap();
//! assert!(xml.contains(r#"<status value="active"/>"#));
//! assert_eq!(Consent::from_xml(&xml).unwrap(), consent);
//! ```

pub mod error;
pub mod parse;
pub mod xml;

pub use error::{FormatError, Result};
pub use parse::{parse_any, parse_json, parse_value, parse_xml, ParseMode};
pub use xml::{json_to_xml, value_to_xml, xml_to_json, xml_to_value, FHIR_NS};

use sinter_models::{AnyResource, Resource, Serializable};

/// XML capability of every modeled resource
pub trait XmlSerializable: Sized {
    fn to_xml(&self) -> Result<String>;

    /// Parse XML, ignoring content the model does not declare
    fn from_xml(xml: &str) -> Result<Self>;
}

impl<T> XmlSerializable for T
where
    T: Resource + Serializable,
{
    fn to_xml(&self) -> Result<String> {
        value_to_xml(&self.to_value()?)
    }

    fn from_xml(xml: &str) -> Result<Self> {
        parse_xml(xml, ParseMode::Lenient)
    }
}

/// Serialize a resource of any type to XML
pub fn resource_to_xml(resource: &AnyResource) -> Result<String> {
    value_to_xml(&resource.to_value()?)
}

/// Parse XML holding a resource of any type
pub fn resource_from_xml(xml: &str) -> Result<AnyResource> {
    parse_any(xml_to_value(xml)?, ParseMode::Lenient)
}
