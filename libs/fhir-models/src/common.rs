//! Descriptors and type references shared by many tables

use crate::datatypes::{
    Address, Annotation, Attachment, CodeableConcept, Coding, ContactDetail, ContactPoint,
    Contributor, DataRequirement, Dosage, Expression, Extension, HumanName, Identifier, Meta,
    Money, Narrative, ParameterDefinition, Period, Quantity, Range, Ratio, Reference,
    RelatedArtifact, SampledData, Signature, Timing, TriggerDefinition, UsageContext,
};
use crate::descriptor::{Cardinality, FieldDescriptor, TypeRef};
use crate::element::Element;
use crate::value_sets;

/// Absolute StructureDefinition URLs for core types
macro_rules! profiles {
    ($($name:literal),* $(,)?) => {
        &[$(concat!("http://hl7.org/fhir/StructureDefinition/", $name)),*]
    };
}

pub(crate) use profiles;

// Primitive types

pub(crate) const BASE64_BINARY: &[TypeRef] = &[TypeRef::primitive("base64Binary")];
pub(crate) const BOOLEAN: &[TypeRef] = &[TypeRef::primitive("boolean")];
pub(crate) const CANONICAL: &[TypeRef] = &[TypeRef::canonical(&[])];
pub(crate) const CODE: &[TypeRef] = &[TypeRef::primitive("code")];
pub(crate) const DATE: &[TypeRef] = &[TypeRef::primitive("date")];
pub(crate) const DATE_TIME: &[TypeRef] = &[TypeRef::primitive("dateTime")];
pub(crate) const DECIMAL: &[TypeRef] = &[TypeRef::primitive("decimal")];
pub(crate) const ID: &[TypeRef] = &[TypeRef::primitive("id")];
pub(crate) const INSTANT: &[TypeRef] = &[TypeRef::primitive("instant")];
pub(crate) const INTEGER: &[TypeRef] = &[TypeRef::primitive("integer")];
pub(crate) const MARKDOWN: &[TypeRef] = &[TypeRef::primitive("markdown")];
pub(crate) const POSITIVE_INT: &[TypeRef] = &[TypeRef::primitive("positiveInt")];
pub(crate) const STRING: &[TypeRef] = &[TypeRef::primitive("string")];
pub(crate) const TIME: &[TypeRef] = &[TypeRef::primitive("time")];
pub(crate) const UNSIGNED_INT: &[TypeRef] = &[TypeRef::primitive("unsignedInt")];
pub(crate) const URI: &[TypeRef] = &[TypeRef::primitive("uri")];
pub(crate) const URL: &[TypeRef] = &[TypeRef::primitive("url")];
pub(crate) const XHTML: &[TypeRef] = &[TypeRef::primitive("xhtml")];

// Complex types

pub(crate) const fn reference(targets: &'static [&'static str]) -> TypeRef {
    TypeRef::complex("Reference", Reference::type_info).with_targets(targets)
}

pub(crate) const ANNOTATION: &[TypeRef] = &[TypeRef::complex("Annotation", Annotation::type_info)];
pub(crate) const ATTACHMENT: &[TypeRef] = &[TypeRef::complex("Attachment", Attachment::type_info)];
pub(crate) const CODEABLE_CONCEPT: &[TypeRef] =
    &[TypeRef::complex("CodeableConcept", CodeableConcept::type_info)];
pub(crate) const CODING: &[TypeRef] = &[TypeRef::complex("Coding", Coding::type_info)];
pub(crate) const CONTACT_DETAIL: &[TypeRef] =
    &[TypeRef::complex("ContactDetail", ContactDetail::type_info)];
pub(crate) const CONTACT_POINT: &[TypeRef] =
    &[TypeRef::complex("ContactPoint", ContactPoint::type_info)];
pub(crate) const DATA_REQUIREMENT: &[TypeRef] =
    &[TypeRef::complex("DataRequirement", DataRequirement::type_info)];
pub(crate) const DURATION: &[TypeRef] = &[TypeRef::complex("Duration", Quantity::type_info)];
pub(crate) const EXPRESSION: &[TypeRef] = &[TypeRef::complex("Expression", Expression::type_info)];
pub(crate) const EXTENSION: &[TypeRef] = &[TypeRef::complex("Extension", Extension::type_info)];
pub(crate) const IDENTIFIER: &[TypeRef] = &[TypeRef::complex("Identifier", Identifier::type_info)];
pub(crate) const META: &[TypeRef] = &[TypeRef::complex("Meta", Meta::type_info)];
pub(crate) const NARRATIVE: &[TypeRef] = &[TypeRef::complex("Narrative", Narrative::type_info)];
pub(crate) const PERIOD: &[TypeRef] = &[TypeRef::complex("Period", Period::type_info)];
pub(crate) const QUANTITY: &[TypeRef] = &[TypeRef::complex("Quantity", Quantity::type_info)];
pub(crate) const RANGE: &[TypeRef] = &[TypeRef::complex("Range", Range::type_info)];
pub(crate) const RATIO: &[TypeRef] = &[TypeRef::complex("Ratio", Ratio::type_info)];
pub(crate) const REFERENCE: &[TypeRef] = &[reference(&[])];
pub(crate) const RELATED_ARTIFACT: &[TypeRef] =
    &[TypeRef::complex("RelatedArtifact", RelatedArtifact::type_info)];
pub(crate) const RESOURCE: &[TypeRef] = &[TypeRef::resource()];
pub(crate) const SIMPLE_QUANTITY: &[TypeRef] =
    &[TypeRef::complex("SimpleQuantity", Quantity::type_info)];
pub(crate) const TIMING: &[TypeRef] = &[TypeRef::complex("Timing", Timing::type_info)];
pub(crate) const TRIGGER_DEFINITION: &[TypeRef] =
    &[TypeRef::complex("TriggerDefinition", TriggerDefinition::type_info)];
pub(crate) const USAGE_CONTEXT: &[TypeRef] =
    &[TypeRef::complex("UsageContext", UsageContext::type_info)];

/// Types a `value[x]` of open type may take
pub(crate) const OPEN_TYPES: &[TypeRef] = &[
    TypeRef::primitive("base64Binary"),
    TypeRef::primitive("boolean"),
    TypeRef::canonical(&[]),
    TypeRef::primitive("code"),
    TypeRef::primitive("date"),
    TypeRef::primitive("dateTime"),
    TypeRef::primitive("decimal"),
    TypeRef::primitive("id"),
    TypeRef::primitive("instant"),
    TypeRef::primitive("integer"),
    TypeRef::primitive("markdown"),
    TypeRef::primitive("oid"),
    TypeRef::primitive("positiveInt"),
    TypeRef::primitive("string"),
    TypeRef::primitive("time"),
    TypeRef::primitive("unsignedInt"),
    TypeRef::primitive("uri"),
    TypeRef::primitive("url"),
    TypeRef::primitive("uuid"),
    TypeRef::complex("Address", Address::type_info),
    TypeRef::complex("Age", Quantity::type_info),
    TypeRef::complex("Annotation", Annotation::type_info),
    TypeRef::complex("Attachment", Attachment::type_info),
    TypeRef::complex("CodeableConcept", CodeableConcept::type_info),
    TypeRef::complex("Coding", Coding::type_info),
    TypeRef::complex("ContactPoint", ContactPoint::type_info),
    TypeRef::complex("Count", Quantity::type_info),
    TypeRef::complex("Distance", Quantity::type_info),
    TypeRef::complex("Duration", Quantity::type_info),
    TypeRef::complex("HumanName", HumanName::type_info),
    TypeRef::complex("Identifier", Identifier::type_info),
    TypeRef::complex("Money", Money::type_info),
    TypeRef::complex("Period", Period::type_info),
    TypeRef::complex("Quantity", Quantity::type_info),
    TypeRef::complex("Range", Range::type_info),
    TypeRef::complex("Ratio", Ratio::type_info),
    reference(&[]),
    TypeRef::complex("SampledData", SampledData::type_info),
    TypeRef::complex("Signature", Signature::type_info),
    TypeRef::complex("Timing", Timing::type_info),
    TypeRef::complex("ContactDetail", ContactDetail::type_info),
    TypeRef::complex("Contributor", Contributor::type_info),
    TypeRef::complex("DataRequirement", DataRequirement::type_info),
    TypeRef::complex("Expression", Expression::type_info),
    TypeRef::complex("ParameterDefinition", ParameterDefinition::type_info),
    TypeRef::complex("RelatedArtifact", RelatedArtifact::type_info),
    TypeRef::complex("TriggerDefinition", TriggerDefinition::type_info),
    TypeRef::complex("UsageContext", UsageContext::type_info),
    TypeRef::complex("Dosage", Dosage::type_info),
    TypeRef::complex("Meta", Meta::type_info),
];

// Element fields

pub(crate) const ELEMENT_ID: FieldDescriptor = FieldDescriptor::new(
    "id",
    STRING,
    Cardinality::OPTIONAL,
    "Unique id for inter-element referencing",
);

pub(crate) const ELEMENT_EXTENSION: FieldDescriptor = FieldDescriptor::new(
    "extension",
    EXTENSION,
    Cardinality::MANY,
    "Additional content defined by implementations",
);

pub(crate) const MODIFIER_EXTENSION: FieldDescriptor = FieldDescriptor::new(
    "modifierExtension",
    EXTENSION,
    Cardinality::MANY,
    "Extensions that cannot be ignored",
)
.modifier()
.summary();

// DomainResource fields

pub(crate) const RESOURCE_ID: FieldDescriptor = FieldDescriptor::new(
    "id",
    ID,
    Cardinality::OPTIONAL,
    "Logical id of this artifact",
)
.summary();

pub(crate) const RESOURCE_META: FieldDescriptor = FieldDescriptor::new(
    "meta",
    META,
    Cardinality::OPTIONAL,
    "Metadata about the resource",
)
.summary();

pub(crate) const IMPLICIT_RULES: FieldDescriptor = FieldDescriptor::new(
    "implicitRules",
    URI,
    Cardinality::OPTIONAL,
    "A set of rules under which this content was created",
)
.modifier()
.summary();

pub(crate) const LANGUAGE: FieldDescriptor = FieldDescriptor::new(
    "language",
    CODE,
    Cardinality::OPTIONAL,
    "Language of the resource content",
)
.binding(&value_sets::LANGUAGES);

pub(crate) const TEXT: FieldDescriptor = FieldDescriptor::new(
    "text",
    NARRATIVE,
    Cardinality::OPTIONAL,
    "Text summary of the resource, for human interpretation",
);

pub(crate) const CONTAINED: FieldDescriptor = FieldDescriptor::new(
    "contained",
    RESOURCE,
    Cardinality::MANY,
    "Contained, inline Resources",
);

pub(crate) const RESOURCE_EXTENSION: FieldDescriptor = FieldDescriptor::new(
    "extension",
    EXTENSION,
    Cardinality::MANY,
    "Additional content defined by implementations",
);

pub(crate) const RESOURCE_MODIFIER_EXTENSION: FieldDescriptor = FieldDescriptor::new(
    "modifierExtension",
    EXTENSION,
    Cardinality::MANY,
    "Extensions that cannot be ignored",
)
.modifier();

// Canonical resource metadata shared by the definitional resources

pub(crate) const CANONICAL_URL: FieldDescriptor = FieldDescriptor::new(
    "url",
    URI,
    Cardinality::OPTIONAL,
    "Canonical identifier, represented as a URI (globally unique)",
)
.summary();

pub(crate) const CANONICAL_IDENTIFIER: FieldDescriptor = FieldDescriptor::new(
    "identifier",
    IDENTIFIER,
    Cardinality::MANY,
    "Additional identifier",
)
.summary();

pub(crate) const BUSINESS_VERSION: FieldDescriptor = FieldDescriptor::new(
    "version",
    STRING,
    Cardinality::OPTIONAL,
    "Business version",
)
.summary();

pub(crate) const COMPUTABLE_NAME: FieldDescriptor = FieldDescriptor::new(
    "name",
    STRING,
    Cardinality::OPTIONAL,
    "Name for this artifact (computer friendly)",
)
.summary();

pub(crate) const TITLE: FieldDescriptor = FieldDescriptor::new(
    "title",
    STRING,
    Cardinality::OPTIONAL,
    "Name for this artifact (human friendly)",
)
.summary();

pub(crate) const PUBLICATION_STATUS: FieldDescriptor = FieldDescriptor::new(
    "status",
    CODE,
    Cardinality::REQUIRED,
    "draft | active | retired | unknown",
)
.binding(&value_sets::PUBLICATION_STATUS)
.modifier()
.summary();

pub(crate) const EXPERIMENTAL: FieldDescriptor = FieldDescriptor::new(
    "experimental",
    BOOLEAN,
    Cardinality::OPTIONAL,
    "For testing purposes, not real usage",
)
.summary();

pub(crate) const DATE_LAST_CHANGED: FieldDescriptor = FieldDescriptor::new(
    "date",
    DATE_TIME,
    Cardinality::OPTIONAL,
    "Date last changed",
)
.summary();

pub(crate) const PUBLISHER: FieldDescriptor = FieldDescriptor::new(
    "publisher",
    STRING,
    Cardinality::OPTIONAL,
    "Name of the publisher (organization or individual)",
)
.summary();

pub(crate) const CONTACT: FieldDescriptor = FieldDescriptor::new(
    "contact",
    CONTACT_DETAIL,
    Cardinality::MANY,
    "Contact details for the publisher",
)
.summary();

pub(crate) const DESCRIPTION: FieldDescriptor = FieldDescriptor::new(
    "description",
    MARKDOWN,
    Cardinality::OPTIONAL,
    "Natural language description",
);

pub(crate) const USE_CONTEXT: FieldDescriptor = FieldDescriptor::new(
    "useContext",
    USAGE_CONTEXT,
    Cardinality::MANY,
    "The context that the content is intended to support",
)
.summary();

pub(crate) const JURISDICTION: FieldDescriptor = FieldDescriptor::new(
    "jurisdiction",
    CODEABLE_CONCEPT,
    Cardinality::MANY,
    "Intended jurisdiction (if applicable)",
)
.binding(&value_sets::JURISDICTION)
.summary();

pub(crate) const PURPOSE: FieldDescriptor = FieldDescriptor::new(
    "purpose",
    MARKDOWN,
    Cardinality::OPTIONAL,
    "Why this artifact is defined",
);

pub(crate) const COPYRIGHT: FieldDescriptor = FieldDescriptor::new(
    "copyright",
    MARKDOWN,
    Cardinality::OPTIONAL,
    "Use and/or publishing restrictions",
);
