//! Metadata datatypes used by knowledge artifacts

use super::{
    Attachment, CodeableConcept, Coding, ContactPoint, Duration, Extension, Period, Quantity,
    Range, Reference, Timing,
};
use crate::common::{self, *};
use crate::descriptor::{Cardinality, FieldDescriptor, TypeInfo, TypeKind, TypeRef};
use crate::element::{Element, PrimitiveElements};
use crate::value_sets;
use serde::{Deserialize, Serialize};

/// Contact information
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// Name of an individual to contact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Contact details for individual or organization
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub telecom: Vec<ContactPoint>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static CONTACT_DETAIL_INFO: TypeInfo = TypeInfo {
    name: "ContactDetail",
    path: "ContactDetail",
    kind: TypeKind::Complex,
    base: "Element",
    url: Some("http://hl7.org/fhir/StructureDefinition/ContactDetail"),
    short: "Contact information",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        FieldDescriptor::new(
            "name",
            STRING,
            Cardinality::OPTIONAL,
            "Name of an individual to contact",
        )
        .summary(),
        FieldDescriptor::new(
            "telecom",
            CONTACT_POINT,
            Cardinality::MANY,
            "Contact details for individual or organization",
        )
        .summary(),
    ],
};

impl_element!(ContactDetail, CONTACT_DETAIL_INFO);

/// Contributor information
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contributor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// author | editor | reviewer | endorser
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    /// Who contributed the content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contact: Vec<ContactDetail>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static CONTRIBUTOR_INFO: TypeInfo = TypeInfo {
    name: "Contributor",
    path: "Contributor",
    kind: TypeKind::Complex,
    base: "Element",
    url: Some("http://hl7.org/fhir/StructureDefinition/Contributor"),
    short: "Contributor information",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        FieldDescriptor::new(
            "type",
            CODE,
            Cardinality::REQUIRED,
            "author | editor | reviewer | endorser",
        )
        .rust_name("type_")
        .binding(&value_sets::CONTRIBUTOR_TYPE)
        .summary(),
        FieldDescriptor::new(
            "name",
            STRING,
            Cardinality::REQUIRED,
            "Who contributed the content",
        )
        .summary(),
        FieldDescriptor::new(
            "contact",
            CONTACT_DETAIL,
            Cardinality::MANY,
            "Contact details of the contributor",
        )
        .summary(),
    ],
};

impl_element!(Contributor, CONTRIBUTOR_INFO);

choice_type! {
    /// `UsageContext.value[x]`
    UsageContextValue {
        CodeableConcept(CodeableConcept) => "valueCodeableConcept",
        Quantity(Quantity) => "valueQuantity",
        Range(Range) => "valueRange",
        Reference(Reference) => "valueReference",
    }
}

/// Describes the context of use for a conformance or knowledge resource
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UsageContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// Type of context being specified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<Coding>,

    #[serde(flatten, deserialize_with = "crate::element::deserialize_choice")]
    pub value: Option<UsageContextValue>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static USAGE_CONTEXT_INFO: TypeInfo = TypeInfo {
    name: "UsageContext",
    path: "UsageContext",
    kind: TypeKind::Complex,
    base: "Element",
    url: Some("http://hl7.org/fhir/StructureDefinition/UsageContext"),
    short: "Describes the context of use for a conformance or knowledge resource",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        FieldDescriptor::new(
            "code",
            CODING,
            Cardinality::REQUIRED,
            "Type of context being specified",
        )
        .binding(&value_sets::USAGE_CONTEXT_TYPE)
        .summary(),
        FieldDescriptor::new(
            "value",
            &[
                TypeRef::complex("CodeableConcept", CodeableConcept::type_info),
                TypeRef::complex("Quantity", Quantity::type_info),
                TypeRef::complex("Range", Range::type_info),
                reference(profiles![
                    "PlanDefinition",
                    "ResearchStudy",
                    "InsurancePlan",
                    "HealthcareService",
                    "Group",
                    "Location",
                    "Organization",
                ]),
            ],
            Cardinality::REQUIRED,
            "Value that defines the context",
        )
        .summary(),
    ],
};

impl_element!(UsageContext, USAGE_CONTEXT_INFO);

/// Related artifacts for a knowledge resource
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RelatedArtifact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// documentation | justification | citation | predecessor | successor |
    /// derived-from | depends-on | composed-of
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    /// Short label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Brief description of the related artifact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    /// Bibliographic citation for the artifact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,

    /// Where the artifact can be accessed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// What document is being referenced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Attachment>,

    /// What resource is being referenced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static RELATED_ARTIFACT_INFO: TypeInfo = TypeInfo {
    name: "RelatedArtifact",
    path: "RelatedArtifact",
    kind: TypeKind::Complex,
    base: "Element",
    url: Some("http://hl7.org/fhir/StructureDefinition/RelatedArtifact"),
    short: "Related artifacts for a knowledge resource",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        FieldDescriptor::new(
            "type",
            CODE,
            Cardinality::REQUIRED,
            "documentation | justification | citation | predecessor | successor | derived-from | depends-on | composed-of",
        )
        .rust_name("type_")
        .binding(&value_sets::RELATED_ARTIFACT_TYPE)
        .summary(),
        FieldDescriptor::new("label", STRING, Cardinality::OPTIONAL, "Short label").summary(),
        FieldDescriptor::new(
            "display",
            STRING,
            Cardinality::OPTIONAL,
            "Brief description of the related artifact",
        )
        .summary(),
        FieldDescriptor::new(
            "citation",
            MARKDOWN,
            Cardinality::OPTIONAL,
            "Bibliographic citation for the artifact",
        )
        .summary(),
        FieldDescriptor::new(
            "url",
            URL,
            Cardinality::OPTIONAL,
            "Where the artifact can be accessed",
        )
        .summary(),
        FieldDescriptor::new(
            "document",
            ATTACHMENT,
            Cardinality::OPTIONAL,
            "What document is being referenced",
        )
        .summary(),
        FieldDescriptor::new(
            "resource",
            &[TypeRef::canonical(profiles!["Resource"])],
            Cardinality::OPTIONAL,
            "What resource is being referenced",
        )
        .summary(),
    ],
};

impl_element!(RelatedArtifact, RELATED_ARTIFACT_INFO);

/// An expression that can be used to generate a value
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expression {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// Natural language description of the condition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Short name assigned to expression for reuse
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// text/cql | text/fhirpath | application/x-fhir-query | etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Expression in specified language
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,

    /// Where the expression is found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

impl Expression {
    pub fn fhirpath(expression: impl Into<String>) -> Self {
        Self {
            language: Some("text/fhirpath".to_string()),
            expression: Some(expression.into()),
            ..Self::default()
        }
    }
}

static EXPRESSION_INFO: TypeInfo = TypeInfo {
    name: "Expression",
    path: "Expression",
    kind: TypeKind::Complex,
    base: "Element",
    url: Some("http://hl7.org/fhir/StructureDefinition/Expression"),
    short: "An expression that can be used to generate a value",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        FieldDescriptor::new(
            "description",
            STRING,
            Cardinality::OPTIONAL,
            "Natural language description of the condition",
        )
        .summary(),
        FieldDescriptor::new(
            "name",
            ID,
            Cardinality::OPTIONAL,
            "Short name assigned to expression for reuse",
        )
        .summary(),
        FieldDescriptor::new(
            "language",
            CODE,
            Cardinality::REQUIRED,
            "text/cql | text/fhirpath | application/x-fhir-query | etc.",
        )
        .binding(&value_sets::EXPRESSION_LANGUAGE)
        .summary(),
        FieldDescriptor::new(
            "expression",
            STRING,
            Cardinality::OPTIONAL,
            "Expression in specified language",
        )
        .summary(),
        FieldDescriptor::new(
            "reference",
            URI,
            Cardinality::OPTIONAL,
            "Where the expression is found",
        )
        .summary(),
    ],
};

impl_element!(Expression, EXPRESSION_INFO);

choice_type! {
    /// `DataRequirement.subject[x]`
    DataRequirementSubject {
        CodeableConcept(CodeableConcept) => "subjectCodeableConcept",
        Reference(Reference) => "subjectReference",
    }
}

/// Describes a required data item
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataRequirement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// The type of the required data
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    /// The profile of the required data
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub profile: Vec<String>,

    #[serde(flatten, deserialize_with = "crate::element::deserialize_choice")]
    pub subject: Option<DataRequirementSubject>,

    /// Indicates specific structure elements that are referenced by the
    /// knowledge module
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub must_support: Vec<String>,

    /// What codes are expected
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub code_filter: Vec<DataRequirementCodeFilter>,

    /// What dates/date ranges are expected
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub date_filter: Vec<DataRequirementDateFilter>,

    /// Number of results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Order of the results
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<DataRequirementSort>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static DATA_REQUIREMENT_INFO: TypeInfo = TypeInfo {
    name: "DataRequirement",
    path: "DataRequirement",
    kind: TypeKind::Complex,
    base: "Element",
    url: Some("http://hl7.org/fhir/StructureDefinition/DataRequirement"),
    short: "Describes a required data item",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        FieldDescriptor::new(
            "type",
            CODE,
            Cardinality::REQUIRED,
            "The type of the required data",
        )
        .rust_name("type_")
        .binding(&value_sets::ALL_TYPES)
        .summary(),
        FieldDescriptor::new(
            "profile",
            &[TypeRef::canonical(profiles!["StructureDefinition"])],
            Cardinality::MANY,
            "The profile of the required data",
        )
        .summary(),
        FieldDescriptor::new(
            "subject",
            &[
                TypeRef::complex("CodeableConcept", CodeableConcept::type_info),
                reference(profiles!["Group"]),
            ],
            Cardinality::OPTIONAL,
            "E.g. Patient, Practitioner, RelatedPerson, Organization, Location, Device",
        )
        .binding(&value_sets::SUBJECT_TYPE),
        FieldDescriptor::new(
            "mustSupport",
            STRING,
            Cardinality::MANY,
            "Indicates specific structure elements that are referenced by the knowledge module",
        )
        .summary(),
        FieldDescriptor::new(
            "codeFilter",
            &[TypeRef::complex("Element", DataRequirementCodeFilter::type_info)],
            Cardinality::MANY,
            "What codes are expected",
        )
        .summary(),
        FieldDescriptor::new(
            "dateFilter",
            &[TypeRef::complex("Element", DataRequirementDateFilter::type_info)],
            Cardinality::MANY,
            "What dates/date ranges are expected",
        )
        .summary(),
        FieldDescriptor::new(
            "limit",
            POSITIVE_INT,
            Cardinality::OPTIONAL,
            "Number of results",
        )
        .summary(),
        FieldDescriptor::new(
            "sort",
            &[TypeRef::complex("Element", DataRequirementSort::type_info)],
            Cardinality::MANY,
            "Order of the results",
        )
        .summary(),
    ],
};

impl_element!(DataRequirement, DATA_REQUIREMENT_INFO);

/// What codes are expected
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataRequirementCodeFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// A code-valued attribute to filter on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// A coded (token) parameter to search on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_param: Option<String>,

    /// Valueset for the filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_set: Option<String>,

    /// What code is expected
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub code: Vec<Coding>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static DATA_REQUIREMENT_CODE_FILTER_INFO: TypeInfo = TypeInfo {
    name: "DataRequirementCodeFilter",
    path: "DataRequirement.codeFilter",
    kind: TypeKind::Backbone,
    base: "Element",
    url: None,
    short: "What codes are expected",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        FieldDescriptor::new(
            "path",
            STRING,
            Cardinality::OPTIONAL,
            "A code-valued attribute to filter on",
        )
        .summary(),
        FieldDescriptor::new(
            "searchParam",
            STRING,
            Cardinality::OPTIONAL,
            "A coded (token) parameter to search on",
        )
        .summary(),
        FieldDescriptor::new(
            "valueSet",
            &[TypeRef::canonical(profiles!["ValueSet"])],
            Cardinality::OPTIONAL,
            "Valueset for the filter",
        )
        .summary(),
        FieldDescriptor::new(
            "code",
            CODING,
            Cardinality::MANY,
            "What code is expected",
        )
        .summary(),
    ],
};

impl_element!(DataRequirementCodeFilter, DATA_REQUIREMENT_CODE_FILTER_INFO);

choice_type! {
    /// `DataRequirement.dateFilter.value[x]`
    DataRequirementDateFilterValue {
        DateTime(String) => "valueDateTime",
        Period(Period) => "valuePeriod",
        Duration(Duration) => "valueDuration",
    }
}

/// What dates/date ranges are expected
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataRequirementDateFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// A date-valued attribute to filter on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// A date valued parameter to search on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_param: Option<String>,

    #[serde(flatten, deserialize_with = "crate::element::deserialize_choice")]
    pub value: Option<DataRequirementDateFilterValue>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static DATA_REQUIREMENT_DATE_FILTER_INFO: TypeInfo = TypeInfo {
    name: "DataRequirementDateFilter",
    path: "DataRequirement.dateFilter",
    kind: TypeKind::Backbone,
    base: "Element",
    url: None,
    short: "What dates/date ranges are expected",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        FieldDescriptor::new(
            "path",
            STRING,
            Cardinality::OPTIONAL,
            "A date-valued attribute to filter on",
        )
        .summary(),
        FieldDescriptor::new(
            "searchParam",
            STRING,
            Cardinality::OPTIONAL,
            "A date valued parameter to search on",
        )
        .summary(),
        FieldDescriptor::new(
            "value",
            &[
                TypeRef::primitive("dateTime"),
                TypeRef::complex("Period", Period::type_info),
                TypeRef::complex("Duration", Quantity::type_info),
            ],
            Cardinality::OPTIONAL,
            "The value of the filter, as a Period, DateTime, or Duration value",
        )
        .summary(),
    ],
};

impl_element!(DataRequirementDateFilter, DATA_REQUIREMENT_DATE_FILTER_INFO);

/// Order of the results
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataRequirementSort {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// The name of the attribute to perform the sort
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// ascending | descending
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static DATA_REQUIREMENT_SORT_INFO: TypeInfo = TypeInfo {
    name: "DataRequirementSort",
    path: "DataRequirement.sort",
    kind: TypeKind::Backbone,
    base: "Element",
    url: None,
    short: "Order of the results",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        FieldDescriptor::new(
            "path",
            STRING,
            Cardinality::REQUIRED,
            "The name of the attribute to perform the sort",
        )
        .summary(),
        FieldDescriptor::new(
            "direction",
            CODE,
            Cardinality::REQUIRED,
            "ascending | descending",
        )
        .binding(&value_sets::SORT_DIRECTION)
        .summary(),
    ],
};

impl_element!(DataRequirementSort, DATA_REQUIREMENT_SORT_INFO);

/// Definition of a parameter to a module
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// Name used to access the parameter value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// in | out
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub use_: Option<String>,

    /// Minimum cardinality
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i32>,

    /// Maximum cardinality (a number of *)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,

    /// A brief description of the parameter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,

    /// What type of value
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    /// What profile the value is expected to be
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static PARAMETER_DEFINITION_INFO: TypeInfo = TypeInfo {
    name: "ParameterDefinition",
    path: "ParameterDefinition",
    kind: TypeKind::Complex,
    base: "Element",
    url: Some("http://hl7.org/fhir/StructureDefinition/ParameterDefinition"),
    short: "Definition of a parameter to a module",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        FieldDescriptor::new(
            "name",
            CODE,
            Cardinality::OPTIONAL,
            "Name used to access the parameter value",
        )
        .summary(),
        FieldDescriptor::new("use", CODE, Cardinality::REQUIRED, "in | out")
            .rust_name("use_")
            .binding(&value_sets::OPERATION_PARAMETER_USE)
            .summary(),
        FieldDescriptor::new("min", INTEGER, Cardinality::OPTIONAL, "Minimum cardinality")
            .summary(),
        FieldDescriptor::new(
            "max",
            STRING,
            Cardinality::OPTIONAL,
            "Maximum cardinality (a number of *)",
        )
        .summary(),
        FieldDescriptor::new(
            "documentation",
            STRING,
            Cardinality::OPTIONAL,
            "A brief description of the parameter",
        )
        .summary(),
        FieldDescriptor::new("type", CODE, Cardinality::REQUIRED, "What type of value")
            .rust_name("type_")
            .binding(&value_sets::ALL_TYPES)
            .summary(),
        FieldDescriptor::new(
            "profile",
            &[TypeRef::canonical(profiles!["StructureDefinition"])],
            Cardinality::OPTIONAL,
            "What profile the value is expected to be",
        )
        .summary(),
    ],
};

impl_element!(ParameterDefinition, PARAMETER_DEFINITION_INFO);

choice_type! {
    /// `TriggerDefinition.timing[x]`
    TriggerDefinitionTiming {
        Timing(Timing) => "timingTiming",
        Reference(Reference) => "timingReference",
        Date(String) => "timingDate",
        DateTime(String) => "timingDateTime",
    }
}

/// Defines an expected trigger for a module
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TriggerDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// named-event | periodic | data-changed | data-added | data-modified |
    /// data-removed | data-accessed | data-access-ended
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    /// Name or URI that identifies the event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(flatten, deserialize_with = "crate::element::deserialize_choice")]
    pub timing: Option<TriggerDefinitionTiming>,

    /// Triggering data of the event (multiple = 'and')
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<DataRequirement>,

    /// Whether the event triggers (boolean expression)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<Expression>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static TRIGGER_DEFINITION_INFO: TypeInfo = TypeInfo {
    name: "TriggerDefinition",
    path: "TriggerDefinition",
    kind: TypeKind::Complex,
    base: "Element",
    url: Some("http://hl7.org/fhir/StructureDefinition/TriggerDefinition"),
    short: "Defines an expected trigger for a module",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        FieldDescriptor::new(
            "type",
            CODE,
            Cardinality::REQUIRED,
            "named-event | periodic | data-changed | data-added | data-modified | data-removed | data-accessed | data-access-ended",
        )
        .rust_name("type_")
        .binding(&value_sets::TRIGGER_TYPE)
        .summary(),
        FieldDescriptor::new(
            "name",
            STRING,
            Cardinality::OPTIONAL,
            "Name or URI that identifies the event",
        )
        .summary(),
        FieldDescriptor::new(
            "timing",
            &[
                TypeRef::complex("Timing", Timing::type_info),
                reference(profiles!["Schedule"]),
                TypeRef::primitive("date"),
                TypeRef::primitive("dateTime"),
            ],
            Cardinality::OPTIONAL,
            "Timing of the event",
        )
        .summary(),
        FieldDescriptor::new(
            "data",
            DATA_REQUIREMENT,
            Cardinality::MANY,
            "Triggering data of the event (multiple = 'and')",
        )
        .summary(),
        FieldDescriptor::new(
            "condition",
            EXPRESSION,
            Cardinality::OPTIONAL,
            "Whether the event triggers (boolean expression)",
        )
        .summary(),
    ],
};

impl_element!(TriggerDefinition, TRIGGER_DEFINITION_INFO);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use serde_json::json;

    #[test]
    fn usage_context_value_is_flattened() {
        let input = json!({
            "code": {
                "system": "http://terminology.hl7.org/CodeSystem/usage-context-type",
                "code": "focus"
            },
            "valueCodeableConcept": {"text": "diabetes"}
        });
        let context: UsageContext = serde_json::from_value(input.clone()).unwrap();
        assert!(matches!(
            context.value,
            Some(UsageContextValue::CodeableConcept(_))
        ));
        assert_eq!(
            context.value.as_ref().map(UsageContextValue::wire_key),
            Some("valueCodeableConcept")
        );
        assert_eq!(serde_json::to_value(&context).unwrap(), input);
    }

    #[test]
    fn trigger_timing_distinguishes_date_and_date_time() {
        let trigger: TriggerDefinition = serde_json::from_value(json!({
            "type": "periodic",
            "timingDate": "2024-01-01"
        }))
        .unwrap();
        assert_eq!(
            trigger.timing,
            Some(TriggerDefinitionTiming::Date("2024-01-01".into()))
        );
        assert_eq!(
            TriggerDefinitionTiming::WIRE_KEYS,
            &["timingTiming", "timingReference", "timingDate", "timingDateTime"]
        );
    }

    #[test]
    fn data_requirement_type_binding_spans_all_types() {
        let field = DataRequirement::type_info().field("type").unwrap();
        let binding = field.binding.unwrap();
        assert!(binding.contains(None, "Observation"));
        assert!(binding.contains(None, "Quantity"));
    }
}
