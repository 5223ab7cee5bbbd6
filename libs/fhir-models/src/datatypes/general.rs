//! General purpose datatypes

use super::Extension;
use crate::common::{self, *};
use crate::descriptor::{Cardinality, FieldDescriptor, TypeInfo, TypeKind, TypeRef};
use crate::element::{Element, PrimitiveElements};
use crate::value_sets;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// An identifier intended for computation
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// usual | official | temp | secondary | old (If known)
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub use_: Option<String>,

    /// Description of identifier
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<CodeableConcept>,

    /// The namespace for the identifier value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    /// The value that is unique
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Time period when id is/was valid for use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// Organization that issued id (may be just text)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigner: Option<Box<Reference>>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static IDENTIFIER_INFO: TypeInfo = TypeInfo {
    name: "Identifier",
    path: "Identifier",
    kind: TypeKind::Complex,
    base: "Element",
    url: Some("http://hl7.org/fhir/StructureDefinition/Identifier"),
    short: "An identifier intended for computation",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        FieldDescriptor::new(
            "use",
            CODE,
            Cardinality::OPTIONAL,
            "usual | official | temp | secondary | old (If known)",
        )
        .rust_name("use_")
        .binding(&value_sets::IDENTIFIER_USE)
        .modifier()
        .summary(),
        FieldDescriptor::new(
            "type",
            CODEABLE_CONCEPT,
            Cardinality::OPTIONAL,
            "Description of identifier",
        )
        .rust_name("type_")
        .binding(&value_sets::IDENTIFIER_TYPE)
        .summary(),
        FieldDescriptor::new(
            "system",
            URI,
            Cardinality::OPTIONAL,
            "The namespace for the identifier value",
        )
        .summary(),
        FieldDescriptor::new(
            "value",
            STRING,
            Cardinality::OPTIONAL,
            "The value that is unique",
        )
        .summary(),
        FieldDescriptor::new(
            "period",
            PERIOD,
            Cardinality::OPTIONAL,
            "Time period when id is/was valid for use",
        )
        .summary(),
        FieldDescriptor::new(
            "assigner",
            &[reference(profiles!["Organization"])],
            Cardinality::OPTIONAL,
            "Organization that issued id (may be just text)",
        )
        .summary(),
    ],
};

impl_element!(Identifier, IDENTIFIER_INFO);

/// A reference to a code defined by a terminology system
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Coding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// Identity of the terminology system
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    /// Version of the system - if relevant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Symbol in syntax defined by the system
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Representation defined by the system
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    /// If this coding was chosen directly by the user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_selected: Option<bool>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

impl Coding {
    pub fn new(system: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            system: Some(system.into()),
            code: Some(code.into()),
            ..Self::default()
        }
    }
}

static CODING_INFO: TypeInfo = TypeInfo {
    name: "Coding",
    path: "Coding",
    kind: TypeKind::Complex,
    base: "Element",
    url: Some("http://hl7.org/fhir/StructureDefinition/Coding"),
    short: "A reference to a code defined by a terminology system",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        FieldDescriptor::new(
            "system",
            URI,
            Cardinality::OPTIONAL,
            "Identity of the terminology system",
        )
        .summary(),
        FieldDescriptor::new(
            "version",
            STRING,
            Cardinality::OPTIONAL,
            "Version of the system - if relevant",
        )
        .summary(),
        FieldDescriptor::new(
            "code",
            CODE,
            Cardinality::OPTIONAL,
            "Symbol in syntax defined by the system",
        )
        .summary(),
        FieldDescriptor::new(
            "display",
            STRING,
            Cardinality::OPTIONAL,
            "Representation defined by the system",
        )
        .summary(),
        FieldDescriptor::new(
            "userSelected",
            BOOLEAN,
            Cardinality::OPTIONAL,
            "If this coding was chosen directly by the user",
        )
        .summary(),
    ],
};

impl_element!(Coding, CODING_INFO);

/// Concept - reference to a terminology or just text
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CodeableConcept {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// Code defined by a terminology system
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub coding: Vec<Coding>,

    /// Plain text representation of the concept
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

impl CodeableConcept {
    pub fn from_coding(coding: Coding) -> Self {
        Self {
            coding: vec![coding],
            ..Self::default()
        }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

static CODEABLE_CONCEPT_INFO: TypeInfo = TypeInfo {
    name: "CodeableConcept",
    path: "CodeableConcept",
    kind: TypeKind::Complex,
    base: "Element",
    url: Some("http://hl7.org/fhir/StructureDefinition/CodeableConcept"),
    short: "Concept - reference to a terminology or just text",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        FieldDescriptor::new(
            "coding",
            CODING,
            Cardinality::MANY,
            "Code defined by a terminology system",
        )
        .summary(),
        FieldDescriptor::new(
            "text",
            STRING,
            Cardinality::OPTIONAL,
            "Plain text representation of the concept",
        )
        .summary(),
    ],
};

impl_element!(CodeableConcept, CODEABLE_CONCEPT_INFO);

/// A reference from one resource to another
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// Literal reference, Relative, internal or absolute URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Type the reference refers to (e.g. "Patient")
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    /// Logical reference, when literal reference is not known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,

    /// Text alternative for the resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

impl Reference {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: Some(reference.into()),
            ..Self::default()
        }
    }

    /// Id of a contained resource for `#id` references
    pub fn contained_id(&self) -> Option<&str> {
        self.reference.as_deref()?.strip_prefix('#')
    }
}

static REFERENCE_INFO: TypeInfo = TypeInfo {
    name: "Reference",
    path: "Reference",
    kind: TypeKind::Complex,
    base: "Element",
    url: Some("http://hl7.org/fhir/StructureDefinition/Reference"),
    short: "A reference from one resource to another",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        FieldDescriptor::new(
            "reference",
            STRING,
            Cardinality::OPTIONAL,
            "Literal reference, Relative, internal or absolute URL",
        )
        .summary(),
        FieldDescriptor::new(
            "type",
            URI,
            Cardinality::OPTIONAL,
            "Type the reference refers to (e.g. \"Patient\")",
        )
        .rust_name("type_")
        .binding(&value_sets::REFERENCE_TYPES)
        .summary(),
        FieldDescriptor::new(
            "identifier",
            IDENTIFIER,
            Cardinality::OPTIONAL,
            "Logical reference, when literal reference is not known",
        )
        .summary(),
        FieldDescriptor::new(
            "display",
            STRING,
            Cardinality::OPTIONAL,
            "Text alternative for the resource",
        )
        .summary(),
    ],
};

impl_element!(Reference, REFERENCE_INFO);

/// Time range defined by start and end date/time
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// Starting time with inclusive boundary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,

    /// End time with inclusive boundary, if not ongoing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static PERIOD_INFO: TypeInfo = TypeInfo {
    name: "Period",
    path: "Period",
    kind: TypeKind::Complex,
    base: "Element",
    url: Some("http://hl7.org/fhir/StructureDefinition/Period"),
    short: "Time range defined by start and end date/time",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        FieldDescriptor::new(
            "start",
            DATE_TIME,
            Cardinality::OPTIONAL,
            "Starting time with inclusive boundary",
        )
        .summary(),
        FieldDescriptor::new(
            "end",
            DATE_TIME,
            Cardinality::OPTIONAL,
            "End time with inclusive boundary, if not ongoing",
        )
        .summary(),
    ],
};

impl_element!(Period, PERIOD_INFO);

/// A measured or measurable amount
///
/// Also used for the `Age`, `Count`, `Distance`, `Duration` and
/// `SimpleQuantity` profiles, which only constrain its content.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quantity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// Numerical value (with implicit precision)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Number>,

    /// < | <= | >= | > - how to understand the value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparator: Option<String>,

    /// Unit representation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// System that defines coded unit form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    /// Coded form of the unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

pub type Age = Quantity;
pub type Count = Quantity;
pub type Distance = Quantity;
pub type Duration = Quantity;
pub type SimpleQuantity = Quantity;

impl Quantity {
    /// A UCUM quantity
    pub fn ucum(value: impl Into<Number>, code: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            value: Some(value.into()),
            unit: Some(code.clone()),
            system: Some("http://unitsofmeasure.org".to_string()),
            code: Some(code),
            ..Self::default()
        }
    }
}

static QUANTITY_INFO: TypeInfo = TypeInfo {
    name: "Quantity",
    path: "Quantity",
    kind: TypeKind::Complex,
    base: "Element",
    url: Some("http://hl7.org/fhir/StructureDefinition/Quantity"),
    short: "A measured or measurable amount",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        FieldDescriptor::new(
            "value",
            DECIMAL,
            Cardinality::OPTIONAL,
            "Numerical value (with implicit precision)",
        )
        .summary(),
        FieldDescriptor::new(
            "comparator",
            CODE,
            Cardinality::OPTIONAL,
            "< | <= | >= | > - how to understand the value",
        )
        .binding(&value_sets::QUANTITY_COMPARATOR)
        .modifier()
        .summary(),
        FieldDescriptor::new("unit", STRING, Cardinality::OPTIONAL, "Unit representation")
            .summary(),
        FieldDescriptor::new(
            "system",
            URI,
            Cardinality::OPTIONAL,
            "System that defines coded unit form",
        )
        .summary(),
        FieldDescriptor::new("code", CODE, Cardinality::OPTIONAL, "Coded form of the unit")
            .summary(),
    ],
};

impl_element!(Quantity, QUANTITY_INFO);

/// Set of values bounded by low and high
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// Low limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<SimpleQuantity>,

    /// High limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<SimpleQuantity>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static RANGE_INFO: TypeInfo = TypeInfo {
    name: "Range",
    path: "Range",
    kind: TypeKind::Complex,
    base: "Element",
    url: Some("http://hl7.org/fhir/StructureDefinition/Range"),
    short: "Set of values bounded by low and high",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        FieldDescriptor::new("low", SIMPLE_QUANTITY, Cardinality::OPTIONAL, "Low limit").summary(),
        FieldDescriptor::new("high", SIMPLE_QUANTITY, Cardinality::OPTIONAL, "High limit")
            .summary(),
    ],
};

impl_element!(Range, RANGE_INFO);

/// A ratio of two Quantity values - a numerator and a denominator
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ratio {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// Numerator value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numerator: Option<Quantity>,

    /// Denominator value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub denominator: Option<Quantity>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static RATIO_INFO: TypeInfo = TypeInfo {
    name: "Ratio",
    path: "Ratio",
    kind: TypeKind::Complex,
    base: "Element",
    url: Some("http://hl7.org/fhir/StructureDefinition/Ratio"),
    short: "A ratio of two Quantity values - a numerator and a denominator",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        FieldDescriptor::new("numerator", QUANTITY, Cardinality::OPTIONAL, "Numerator value")
            .summary(),
        FieldDescriptor::new(
            "denominator",
            QUANTITY,
            Cardinality::OPTIONAL,
            "Denominator value",
        )
        .summary(),
    ],
};

impl_element!(Ratio, RATIO_INFO);

/// An amount of economic utility in some recognized currency
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// Numerical value (with implicit precision)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Number>,

    /// ISO 4217 Currency Code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static MONEY_INFO: TypeInfo = TypeInfo {
    name: "Money",
    path: "Money",
    kind: TypeKind::Complex,
    base: "Element",
    url: Some("http://hl7.org/fhir/StructureDefinition/Money"),
    short: "An amount of economic utility in some recognized currency",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        FieldDescriptor::new(
            "value",
            DECIMAL,
            Cardinality::OPTIONAL,
            "Numerical value (with implicit precision)",
        )
        .summary(),
        FieldDescriptor::new("currency", CODE, Cardinality::OPTIONAL, "ISO 4217 Currency Code")
            .binding(&value_sets::CURRENCIES)
            .summary(),
    ],
};

impl_element!(Money, MONEY_INFO);

/// Content in a format defined elsewhere
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// Mime type of the content, with charset etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Human language of the content (BCP-47)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Data inline, base64ed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    /// Uri where the data can be found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Number of bytes of content (if url provided)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,

    /// Hash of the data (sha-1, base64ed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,

    /// Label to display in place of the data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Date attachment was first created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation: Option<String>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static ATTACHMENT_INFO: TypeInfo = TypeInfo {
    name: "Attachment",
    path: "Attachment",
    kind: TypeKind::Complex,
    base: "Element",
    url: Some("http://hl7.org/fhir/StructureDefinition/Attachment"),
    short: "Content in a format defined elsewhere",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        FieldDescriptor::new(
            "contentType",
            CODE,
            Cardinality::OPTIONAL,
            "Mime type of the content, with charset etc.",
        )
        .binding(&value_sets::MIME_TYPES)
        .summary(),
        FieldDescriptor::new(
            "language",
            CODE,
            Cardinality::OPTIONAL,
            "Human language of the content (BCP-47)",
        )
        .binding(&value_sets::LANGUAGES)
        .summary(),
        FieldDescriptor::new(
            "data",
            BASE64_BINARY,
            Cardinality::OPTIONAL,
            "Data inline, base64ed",
        ),
        FieldDescriptor::new(
            "url",
            URL,
            Cardinality::OPTIONAL,
            "Uri where the data can be found",
        )
        .summary(),
        FieldDescriptor::new(
            "size",
            UNSIGNED_INT,
            Cardinality::OPTIONAL,
            "Number of bytes of content (if url provided)",
        )
        .summary(),
        FieldDescriptor::new(
            "hash",
            BASE64_BINARY,
            Cardinality::OPTIONAL,
            "Hash of the data (sha-1, base64ed)",
        )
        .summary(),
        FieldDescriptor::new(
            "title",
            STRING,
            Cardinality::OPTIONAL,
            "Label to display in place of the data",
        )
        .summary(),
        FieldDescriptor::new(
            "creation",
            DATE_TIME,
            Cardinality::OPTIONAL,
            "Date attachment was first created",
        )
        .summary(),
    ],
};

impl_element!(Attachment, ATTACHMENT_INFO);

choice_type! {
    /// `Annotation.author[x]`
    AnnotationAuthor {
        Reference(Reference) => "authorReference",
        String(String) => "authorString",
    }
}

/// Text node with attribution
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(flatten, deserialize_with = "crate::element::deserialize_choice")]
    pub author: Option<AnnotationAuthor>,

    /// When the annotation was made
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    /// The annotation - text content (as markdown)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static ANNOTATION_INFO: TypeInfo = TypeInfo {
    name: "Annotation",
    path: "Annotation",
    kind: TypeKind::Complex,
    base: "Element",
    url: Some("http://hl7.org/fhir/StructureDefinition/Annotation"),
    short: "Text node with attribution",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        FieldDescriptor::new(
            "author",
            &[
                reference(profiles!["Practitioner", "Patient", "RelatedPerson", "Organization"]),
                TypeRef::primitive("string"),
            ],
            Cardinality::OPTIONAL,
            "Individual responsible for the annotation",
        )
        .summary(),
        FieldDescriptor::new(
            "time",
            DATE_TIME,
            Cardinality::OPTIONAL,
            "When the annotation was made",
        )
        .summary(),
        FieldDescriptor::new(
            "text",
            MARKDOWN,
            Cardinality::REQUIRED,
            "The annotation  - text content (as markdown)",
        )
        .summary(),
    ],
};

impl_element!(Annotation, ANNOTATION_INFO);

/// An address expressed using postal conventions
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// home | work | temp | old | billing - purpose of this address
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub use_: Option<String>,

    /// postal | physical | both
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    /// Text representation of the address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Street name, number, direction & P.O. Box etc.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub line: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,

    /// Sub-unit of country (abbreviations ok)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// Country (e.g. can be ISO 3166 2 or 3 letter code)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Time period when address was/is in use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static ADDRESS_INFO: TypeInfo = TypeInfo {
    name: "Address",
    path: "Address",
    kind: TypeKind::Complex,
    base: "Element",
    url: Some("http://hl7.org/fhir/StructureDefinition/Address"),
    short: "An address expressed using postal conventions (as opposed to GPS or other location definition formats)",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        FieldDescriptor::new(
            "use",
            CODE,
            Cardinality::OPTIONAL,
            "home | work | temp | old | billing - purpose of this address",
        )
        .rust_name("use_")
        .binding(&value_sets::ADDRESS_USE)
        .modifier()
        .summary(),
        FieldDescriptor::new(
            "type",
            CODE,
            Cardinality::OPTIONAL,
            "postal | physical | both",
        )
        .rust_name("type_")
        .binding(&value_sets::ADDRESS_TYPE)
        .summary(),
        FieldDescriptor::new(
            "text",
            STRING,
            Cardinality::OPTIONAL,
            "Text representation of the address",
        )
        .summary(),
        FieldDescriptor::new(
            "line",
            STRING,
            Cardinality::MANY,
            "Street name, number, direction & P.O. Box etc.",
        )
        .summary(),
        FieldDescriptor::new(
            "city",
            STRING,
            Cardinality::OPTIONAL,
            "Name of city, town etc.",
        )
        .summary(),
        FieldDescriptor::new(
            "district",
            STRING,
            Cardinality::OPTIONAL,
            "District name (aka county)",
        )
        .summary(),
        FieldDescriptor::new(
            "state",
            STRING,
            Cardinality::OPTIONAL,
            "Sub-unit of country (abbreviations ok)",
        )
        .summary(),
        FieldDescriptor::new(
            "postalCode",
            STRING,
            Cardinality::OPTIONAL,
            "Postal code for area",
        )
        .summary(),
        FieldDescriptor::new(
            "country",
            STRING,
            Cardinality::OPTIONAL,
            "Country (e.g. can be ISO 3166 2 or 3 letter code)",
        )
        .summary(),
        FieldDescriptor::new(
            "period",
            PERIOD,
            Cardinality::OPTIONAL,
            "Time period when address was/is in use",
        )
        .summary(),
    ],
};

impl_element!(Address, ADDRESS_INFO);

/// Name of a human - parts and usage
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HumanName {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// usual | official | temp | nickname | anonymous | old | maiden
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub use_: Option<String>,

    /// Text representation of the full name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Family name (often called 'Surname')
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,

    /// Given names (not always 'first'). Includes middle names
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub given: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prefix: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suffix: Vec<String>,

    /// Time period when name was/is in use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static HUMAN_NAME_INFO: TypeInfo = TypeInfo {
    name: "HumanName",
    path: "HumanName",
    kind: TypeKind::Complex,
    base: "Element",
    url: Some("http://hl7.org/fhir/StructureDefinition/HumanName"),
    short: "Name of a human - parts and usage",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        FieldDescriptor::new(
            "use",
            CODE,
            Cardinality::OPTIONAL,
            "usual | official | temp | nickname | anonymous | old | maiden",
        )
        .rust_name("use_")
        .binding(&value_sets::NAME_USE)
        .modifier()
        .summary(),
        FieldDescriptor::new(
            "text",
            STRING,
            Cardinality::OPTIONAL,
            "Text representation of the full name",
        )
        .summary(),
        FieldDescriptor::new(
            "family",
            STRING,
            Cardinality::OPTIONAL,
            "Family name (often called 'Surname')",
        )
        .summary(),
        FieldDescriptor::new(
            "given",
            STRING,
            Cardinality::MANY,
            "Given names (not always 'first'). Includes middle names",
        )
        .summary(),
        FieldDescriptor::new(
            "prefix",
            STRING,
            Cardinality::MANY,
            "Parts that come before the name",
        )
        .summary(),
        FieldDescriptor::new(
            "suffix",
            STRING,
            Cardinality::MANY,
            "Parts that come after the name",
        )
        .summary(),
        FieldDescriptor::new(
            "period",
            PERIOD,
            Cardinality::OPTIONAL,
            "Time period when name was/is in use",
        )
        .summary(),
    ],
};

impl_element!(HumanName, HUMAN_NAME_INFO);

/// Details of a Technology mediated contact point (phone, fax, email, etc.)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// phone | fax | email | pager | url | sms | other
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    /// The actual contact point details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// home | work | temp | old | mobile - purpose of this contact point
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub use_: Option<String>,

    /// Specify preferred order of use (1 = highest)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,

    /// Time period when the contact point was/is in use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static CONTACT_POINT_INFO: TypeInfo = TypeInfo {
    name: "ContactPoint",
    path: "ContactPoint",
    kind: TypeKind::Complex,
    base: "Element",
    url: Some("http://hl7.org/fhir/StructureDefinition/ContactPoint"),
    short: "Details of a Technology mediated contact point (phone, fax, email, etc.)",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        FieldDescriptor::new(
            "system",
            CODE,
            Cardinality::OPTIONAL,
            "phone | fax | email | pager | url | sms | other",
        )
        .binding(&value_sets::CONTACT_POINT_SYSTEM)
        .summary(),
        FieldDescriptor::new(
            "value",
            STRING,
            Cardinality::OPTIONAL,
            "The actual contact point details",
        )
        .summary(),
        FieldDescriptor::new(
            "use",
            CODE,
            Cardinality::OPTIONAL,
            "home | work | temp | old | mobile - purpose of this contact point",
        )
        .rust_name("use_")
        .binding(&value_sets::CONTACT_POINT_USE)
        .modifier()
        .summary(),
        FieldDescriptor::new(
            "rank",
            POSITIVE_INT,
            Cardinality::OPTIONAL,
            "Specify preferred order of use (1 = highest)",
        )
        .summary(),
        FieldDescriptor::new(
            "period",
            PERIOD,
            Cardinality::OPTIONAL,
            "Time period when the contact point was/is in use",
        )
        .summary(),
    ],
};

impl_element!(ContactPoint, CONTACT_POINT_INFO);

/// A timing schedule that specifies an event that may occur multiple times
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Timing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// When the event occurs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub event: Vec<String>,

    /// When the event is to occur
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<TimingRepeat>,

    /// BID | TID | QID | AM | PM | QD | QOD | +
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static TIMING_INFO: TypeInfo = TypeInfo {
    name: "Timing",
    path: "Timing",
    kind: TypeKind::Complex,
    base: "BackboneElement",
    url: Some("http://hl7.org/fhir/StructureDefinition/Timing"),
    short: "A timing schedule that specifies an event that may occur multiple times",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        common::MODIFIER_EXTENSION,
        FieldDescriptor::new(
            "event",
            DATE_TIME,
            Cardinality::MANY,
            "When the event occurs",
        )
        .summary(),
        FieldDescriptor::new(
            "repeat",
            &[TypeRef::complex("Element", TimingRepeat::type_info)],
            Cardinality::OPTIONAL,
            "When the event is to occur",
        )
        .summary(),
        FieldDescriptor::new(
            "code",
            CODEABLE_CONCEPT,
            Cardinality::OPTIONAL,
            "BID | TID | QID | AM | PM | QD | QOD | +",
        )
        .binding(&value_sets::TIMING_ABBREVIATION)
        .summary(),
    ],
};

impl_element!(Timing, TIMING_INFO, backbone);

choice_type! {
    /// `Timing.repeat.bounds[x]`
    TimingRepeatBounds {
        Duration(Duration) => "boundsDuration",
        Range(Range) => "boundsRange",
        Period(Period) => "boundsPeriod",
    }
}

/// When the event is to occur
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimingRepeat {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(flatten, deserialize_with = "crate::element::deserialize_choice")]
    pub bounds: Option<TimingRepeatBounds>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub count_max: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Number>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_max: Option<Number>,

    /// s | min | h | d | wk | mo | a - unit of time (UCUM)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_unit: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_max: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Number>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_max: Option<Number>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_unit: Option<String>,

    /// mon | tue | wed | thu | fri | sat | sun
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub day_of_week: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub time_of_day: Vec<String>,

    /// Code for time period of occurrence
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub when: Vec<String>,

    /// Minutes from event (before or after)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static TIMING_REPEAT_INFO: TypeInfo = TypeInfo {
    name: "TimingRepeat",
    path: "Timing.repeat",
    kind: TypeKind::Backbone,
    base: "Element",
    url: None,
    short: "When the event is to occur",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        FieldDescriptor::new(
            "bounds",
            &[
                TypeRef::complex("Duration", Quantity::type_info),
                TypeRef::complex("Range", Range::type_info),
                TypeRef::complex("Period", Period::type_info),
            ],
            Cardinality::OPTIONAL,
            "Length/Range of lengths, or (Start and/or end) limits",
        )
        .summary(),
        FieldDescriptor::new(
            "count",
            POSITIVE_INT,
            Cardinality::OPTIONAL,
            "Number of times to repeat",
        )
        .summary(),
        FieldDescriptor::new(
            "countMax",
            POSITIVE_INT,
            Cardinality::OPTIONAL,
            "Maximum number of times to repeat",
        )
        .summary(),
        FieldDescriptor::new(
            "duration",
            DECIMAL,
            Cardinality::OPTIONAL,
            "How long when it happens",
        )
        .summary(),
        FieldDescriptor::new(
            "durationMax",
            DECIMAL,
            Cardinality::OPTIONAL,
            "How long when it happens (Max)",
        )
        .summary(),
        FieldDescriptor::new(
            "durationUnit",
            CODE,
            Cardinality::OPTIONAL,
            "s | min | h | d | wk | mo | a - unit of time (UCUM)",
        )
        .binding(&value_sets::UNITS_OF_TIME)
        .summary(),
        FieldDescriptor::new(
            "frequency",
            POSITIVE_INT,
            Cardinality::OPTIONAL,
            "Event occurs frequency times per period",
        )
        .summary(),
        FieldDescriptor::new(
            "frequencyMax",
            POSITIVE_INT,
            Cardinality::OPTIONAL,
            "Event occurs up to frequencyMax times per period",
        )
        .summary(),
        FieldDescriptor::new(
            "period",
            DECIMAL,
            Cardinality::OPTIONAL,
            "Event occurs frequency times per period",
        )
        .summary(),
        FieldDescriptor::new(
            "periodMax",
            DECIMAL,
            Cardinality::OPTIONAL,
            "Upper limit of period (3-4 hours)",
        )
        .summary(),
        FieldDescriptor::new(
            "periodUnit",
            CODE,
            Cardinality::OPTIONAL,
            "s | min | h | d | wk | mo | a - unit of time (UCUM)",
        )
        .binding(&value_sets::UNITS_OF_TIME)
        .summary(),
        FieldDescriptor::new(
            "dayOfWeek",
            CODE,
            Cardinality::MANY,
            "mon | tue | wed | thu | fri | sat | sun",
        )
        .binding(&value_sets::DAYS_OF_WEEK)
        .summary(),
        FieldDescriptor::new(
            "timeOfDay",
            TIME,
            Cardinality::MANY,
            "Time of day for action",
        )
        .summary(),
        FieldDescriptor::new(
            "when",
            CODE,
            Cardinality::MANY,
            "Code for time period of occurrence",
        )
        .binding(&value_sets::EVENT_TIMING)
        .summary(),
        FieldDescriptor::new(
            "offset",
            UNSIGNED_INT,
            Cardinality::OPTIONAL,
            "Minutes from event (before or after)",
        )
        .summary(),
    ],
};

impl_element!(TimingRepeat, TIMING_REPEAT_INFO);

/// A series of measurements taken by a device
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SampledData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// Zero value and units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<SimpleQuantity>,

    /// Number of milliseconds between samples
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Number>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<Number>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_limit: Option<Number>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_limit: Option<Number>,

    /// Number of sample points at each time point
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<u32>,

    /// Decimal values with spaces, or "E" | "U" | "L"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static SAMPLED_DATA_INFO: TypeInfo = TypeInfo {
    name: "SampledData",
    path: "SampledData",
    kind: TypeKind::Complex,
    base: "Element",
    url: Some("http://hl7.org/fhir/StructureDefinition/SampledData"),
    short: "A series of measurements taken by a device",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        FieldDescriptor::new(
            "origin",
            SIMPLE_QUANTITY,
            Cardinality::REQUIRED,
            "Zero value and units",
        )
        .summary(),
        FieldDescriptor::new(
            "period",
            DECIMAL,
            Cardinality::REQUIRED,
            "Number of milliseconds between samples",
        )
        .summary(),
        FieldDescriptor::new(
            "factor",
            DECIMAL,
            Cardinality::OPTIONAL,
            "Multiply data by this before adding to origin",
        )
        .summary(),
        FieldDescriptor::new(
            "lowerLimit",
            DECIMAL,
            Cardinality::OPTIONAL,
            "Lower limit of detection",
        )
        .summary(),
        FieldDescriptor::new(
            "upperLimit",
            DECIMAL,
            Cardinality::OPTIONAL,
            "Upper limit of detection",
        )
        .summary(),
        FieldDescriptor::new(
            "dimensions",
            POSITIVE_INT,
            Cardinality::REQUIRED,
            "Number of sample points at each time point",
        )
        .summary(),
        FieldDescriptor::new(
            "data",
            STRING,
            Cardinality::OPTIONAL,
            "Decimal values with spaces, or \"E\" | \"U\" | \"L\"",
        ),
    ],
};

impl_element!(SampledData, SAMPLED_DATA_INFO);

/// A Signature - XML DigSig, JWS, Graphical image of signature, etc.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Signature {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// Indication of the reason the entity signed the object(s)
    #[serde(rename = "type", default, skip_serializing_if = "Vec::is_empty")]
    pub type_: Vec<Coding>,

    /// When the signature was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub when: Option<String>,

    /// Who signed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub who: Option<Reference>,

    /// The party represented
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<Reference>,

    /// The technical format of the signed resources
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_format: Option<String>,

    /// The technical format of the signature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sig_format: Option<String>,

    /// The actual signature content (XML DigSig. JWS, picture, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

const SIGNATORIES: &[&str] = profiles![
    "Practitioner",
    "PractitionerRole",
    "RelatedPerson",
    "Patient",
    "Device",
    "Organization",
];

static SIGNATURE_INFO: TypeInfo = TypeInfo {
    name: "Signature",
    path: "Signature",
    kind: TypeKind::Complex,
    base: "Element",
    url: Some("http://hl7.org/fhir/StructureDefinition/Signature"),
    short: "A Signature - XML DigSig, JWS, Graphical image of signature, etc.",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        FieldDescriptor::new(
            "type",
            CODING,
            Cardinality::AT_LEAST_ONE,
            "Indication of the reason the entity signed the object(s)",
        )
        .rust_name("type_")
        .binding(&value_sets::SIGNATURE_TYPE)
        .summary(),
        FieldDescriptor::new(
            "when",
            INSTANT,
            Cardinality::REQUIRED,
            "When the signature was created",
        )
        .summary(),
        FieldDescriptor::new(
            "who",
            &[reference(SIGNATORIES)],
            Cardinality::REQUIRED,
            "Who signed",
        )
        .summary(),
        FieldDescriptor::new(
            "onBehalfOf",
            &[reference(SIGNATORIES)],
            Cardinality::OPTIONAL,
            "The party represented",
        )
        .summary(),
        FieldDescriptor::new(
            "targetFormat",
            CODE,
            Cardinality::OPTIONAL,
            "The technical format of the signed resources",
        )
        .binding(&value_sets::MIME_TYPES),
        FieldDescriptor::new(
            "sigFormat",
            CODE,
            Cardinality::OPTIONAL,
            "The technical format of the signature",
        )
        .binding(&value_sets::MIME_TYPES),
        FieldDescriptor::new(
            "data",
            BASE64_BINARY,
            Cardinality::OPTIONAL,
            "The actual signature content (XML DigSig. JWS, picture, etc.)",
        ),
    ],
};

impl_element!(Signature, SIGNATURE_INFO);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use serde_json::json;

    #[test]
    fn keyword_fields_keep_wire_names() {
        let identifier = Identifier {
            use_: Some("official".into()),
            system: Some("urn:ietf:rfc:3986".into()),
            value: Some("urn:oid:1.2.3".into()),
            ..Identifier::default()
        };
        let value = serde_json::to_value(&identifier).unwrap();
        assert_eq!(
            value,
            json!({"use": "official", "system": "urn:ietf:rfc:3986", "value": "urn:oid:1.2.3"})
        );

        let field = Identifier::type_info().field("use").unwrap();
        assert_eq!(field.field_name(), "use_");
        assert!(field.is_modifier);
        assert_eq!(
            Identifier::type_info().field("use_").map(|f| f.name),
            Some("use")
        );
    }

    #[test]
    fn quantity_profiles_share_metadata() {
        let age: Age = Quantity::ucum(42, "a");
        assert_eq!(age.system.as_deref(), Some("http://unitsofmeasure.org"));
        let bounds = TimingRepeat::type_info().field("bounds").unwrap();
        assert!(bounds.is_choice());
        assert_eq!(
            bounds.wire_keys(),
            vec!["boundsDuration", "boundsRange", "boundsPeriod"]
        );
        assert_eq!(
            bounds.types[0].type_info().map(|info| info.name),
            Some("Quantity")
        );
    }

    #[test]
    fn empty_collections_are_omitted() {
        let concept = CodeableConcept::from_text("headache");
        assert_eq!(
            serde_json::to_value(&concept).unwrap(),
            json!({"text": "headache"})
        );
    }

    #[test]
    fn contained_references() {
        assert_eq!(Reference::new("#p1").contained_id(), Some("p1"));
        assert_eq!(Reference::new("Patient/p1").contained_id(), None);
    }
}
