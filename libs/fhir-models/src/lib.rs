//! FHIR R4 data models
//!
//! Strongly-typed records for the conformance resources Consent,
//! ImplementationGuide, PlanDefinition and StructureMap, together with the
//! datatypes they use and static metadata describing every field.
//!
//! # Module Organization
//!
//! - `datatypes`: Element-based datatypes (Coding, Reference, Timing, ...)
//! - `resources`: The four resources and [`AnyResource`]
//! - `descriptor`: Metadata types ([`TypeInfo`], [`FieldDescriptor`], bindings)
//! - `value_sets`: Bindings and the codes they enumerate
//! - `registry`: Metadata lookup by type name or path
//!
//! # Design Philosophy
//!
//! - **Every field is optional on the wire**: `Option<T>` or `Vec<T>`, so an
//!   incomplete instance still parses and a validator can report what is missing
//! - **Choice fields are enums**: a `name[x]` field holds one alternative and
//!   serializes under its type-suffixed key
//! - **Metadata without an instance**: `T::type_info().field("status")`
//!
//! # Example
//!
//! ```rust
//! use sinter_models::{Consent, ConsentSource, Element, Resource, Serializable};
//! use serde_json::json;
//!
//! let consent = Consent::from_value(json!({
//!     "resourceType": "Consent",
//!     "id": "consent-example",
//!     "status": "active",
//!     "scope": {"coding": [{"system": "http://terminology.hl7.org/CodeSystem/consentscope", "code": "patient-privacy"}]},
//!     "category": [{"coding": [{"system": "http://loinc.org", "code": "59284-0"}]}],
//!     "sourceReference": {"reference": "DocumentReference/example"}
//! }))
//! .unwrap();
//!
//! assert_eq!(consent.resource_type(), "Consent");
//! assert!(matches!(consent.source, Some(ConsentSource::Reference(_))));
//!
//! let status = Consent::type_info().field("status").unwrap();
//! assert!(status.cardinality.is_required());
//! ```

#[macro_use]
mod macros;

mod common;
pub mod datatypes;
pub mod descriptor;
pub mod element;
pub mod error;
pub mod registry;
pub mod resources;
pub mod value_sets;

pub use datatypes::*;
pub use descriptor::{
    BindingStrength, Cardinality, CodeSystemCodes, FieldDescriptor, KeyKind, LocalRef,
    MaxOccurs, TypeInfo, TypeKind, TypeRef, ValueSetBinding,
};
pub use element::{
    ChoiceType, Element, ModifierElement, PrimitiveElements, Resource, ResourceTypeTag,
    Serializable,
};
pub use error::{Error, Result};
pub use resources::*;
