//! Special purpose datatypes: Extension, Meta, Narrative, Dosage

use super::{
    Address, Annotation, Attachment, CodeableConcept, Coding, ContactDetail, ContactPoint,
    Contributor, DataRequirement, Expression, HumanName, Identifier, Money, ParameterDefinition,
    Period, Quantity, Range, Ratio, Reference, RelatedArtifact, SampledData, Signature, Timing,
    TriggerDefinition, UsageContext,
};
use crate::common::{self, *};
use crate::descriptor::{Cardinality, FieldDescriptor, TypeInfo, TypeKind, TypeRef};
use crate::element::{Element, PrimitiveElements};
use crate::value_sets;
use serde::{Deserialize, Serialize};
use serde_json::Number;

choice_type! {
    /// `Extension.value[x]`, one of the open types
    ExtensionValue {
        Base64Binary(String) => "valueBase64Binary",
        Boolean(bool) => "valueBoolean",
        Canonical(String) => "valueCanonical",
        Code(String) => "valueCode",
        Date(String) => "valueDate",
        DateTime(String) => "valueDateTime",
        Decimal(Number) => "valueDecimal",
        Id(String) => "valueId",
        Instant(String) => "valueInstant",
        Integer(i32) => "valueInteger",
        Markdown(String) => "valueMarkdown",
        Oid(String) => "valueOid",
        PositiveInt(u32) => "valuePositiveInt",
        String(String) => "valueString",
        Time(String) => "valueTime",
        UnsignedInt(u32) => "valueUnsignedInt",
        Uri(String) => "valueUri",
        Url(String) => "valueUrl",
        Uuid(String) => "valueUuid",
        Address(Address) => "valueAddress",
        Age(Quantity) => "valueAge",
        Annotation(Annotation) => "valueAnnotation",
        Attachment(Attachment) => "valueAttachment",
        CodeableConcept(CodeableConcept) => "valueCodeableConcept",
        Coding(Coding) => "valueCoding",
        ContactPoint(ContactPoint) => "valueContactPoint",
        Count(Quantity) => "valueCount",
        Distance(Quantity) => "valueDistance",
        Duration(Quantity) => "valueDuration",
        HumanName(HumanName) => "valueHumanName",
        Identifier(Identifier) => "valueIdentifier",
        Money(Money) => "valueMoney",
        Period(Period) => "valuePeriod",
        Quantity(Quantity) => "valueQuantity",
        Range(Range) => "valueRange",
        Ratio(Ratio) => "valueRatio",
        Reference(Reference) => "valueReference",
        SampledData(SampledData) => "valueSampledData",
        Signature(Signature) => "valueSignature",
        Timing(Timing) => "valueTiming",
        ContactDetail(ContactDetail) => "valueContactDetail",
        Contributor(Contributor) => "valueContributor",
        DataRequirement(DataRequirement) => "valueDataRequirement",
        Expression(Expression) => "valueExpression",
        ParameterDefinition(ParameterDefinition) => "valueParameterDefinition",
        RelatedArtifact(RelatedArtifact) => "valueRelatedArtifact",
        TriggerDefinition(TriggerDefinition) => "valueTriggerDefinition",
        UsageContext(UsageContext) => "valueUsageContext",
        Dosage(Dosage) => "valueDosage",
        Meta(Meta) => "valueMeta",
    }
}

/// Optional extension element
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Extension {
    /// Identifies the meaning of the extension
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Nested extensions (complex extensions)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// Value of extension
    #[serde(flatten, deserialize_with = "crate::element::deserialize_choice")]
    pub value: Option<ExtensionValue>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

impl Extension {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Set `value[x]`, replacing any previous alternative
    pub fn with_value(mut self, value: ExtensionValue) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_extension(mut self, extension: Extension) -> Self {
        self.extension.push(extension);
        self
    }

    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

static EXTENSION_INFO: TypeInfo = TypeInfo {
    name: "Extension",
    path: "Extension",
    kind: TypeKind::Complex,
    base: "Element",
    url: Some("http://hl7.org/fhir/StructureDefinition/Extension"),
    short: "Optional Extensions Element",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        FieldDescriptor::new(
            "url",
            URI,
            Cardinality::REQUIRED,
            "identifies the meaning of the extension",
        ),
        FieldDescriptor::new(
            "value",
            OPEN_TYPES,
            Cardinality::OPTIONAL,
            "Value of extension",
        ),
    ],
};

impl_element!(Extension, EXTENSION_INFO);

/// Metadata about a resource
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// Version specific identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,

    /// When the resource version last changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,

    /// Identifies where the resource comes from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Profiles this resource claims to conform to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub profile: Vec<String>,

    /// Security Labels applied to this resource
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security: Vec<Coding>,

    /// Tags applied to this resource
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag: Vec<Coding>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static META_INFO: TypeInfo = TypeInfo {
    name: "Meta",
    path: "Meta",
    kind: TypeKind::Complex,
    base: "Element",
    url: Some("http://hl7.org/fhir/StructureDefinition/Meta"),
    short: "Metadata about a resource",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        FieldDescriptor::new(
            "versionId",
            ID,
            Cardinality::OPTIONAL,
            "Version specific identifier",
        )
        .summary(),
        FieldDescriptor::new(
            "lastUpdated",
            INSTANT,
            Cardinality::OPTIONAL,
            "When the resource version last changed",
        )
        .summary(),
        FieldDescriptor::new(
            "source",
            URI,
            Cardinality::OPTIONAL,
            "Identifies where the resource comes from",
        )
        .summary(),
        FieldDescriptor::new(
            "profile",
            &[TypeRef::canonical(profiles!["StructureDefinition"])],
            Cardinality::MANY,
            "Profiles this resource claims to conform to",
        )
        .summary(),
        FieldDescriptor::new(
            "security",
            CODING,
            Cardinality::MANY,
            "Security Labels applied to this resource",
        )
        .binding(&value_sets::SECURITY_LABELS)
        .summary(),
        FieldDescriptor::new(
            "tag",
            CODING,
            Cardinality::MANY,
            "Tags applied to this resource",
        )
        .binding(&value_sets::COMMON_TAGS)
        .summary(),
    ],
};

impl_element!(Meta, META_INFO);

/// Human-readable summary of the resource
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Narrative {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// generated | extensions | additional | empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Limited xhtml content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub div: Option<String>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static NARRATIVE_INFO: TypeInfo = TypeInfo {
    name: "Narrative",
    path: "Narrative",
    kind: TypeKind::Complex,
    base: "Element",
    url: Some("http://hl7.org/fhir/StructureDefinition/Narrative"),
    short: "Human-readable summary of the resource (essential clinical and business information)",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        FieldDescriptor::new(
            "status",
            CODE,
            Cardinality::REQUIRED,
            "generated | extensions | additional | empty",
        )
        .binding(&value_sets::NARRATIVE_STATUS),
        FieldDescriptor::new(
            "div",
            XHTML,
            Cardinality::REQUIRED,
            "Limited xhtml content",
        ),
    ],
};

impl_element!(Narrative, NARRATIVE_INFO);

choice_type! {
    /// `Dosage.asNeeded[x]`
    DosageAsNeeded {
        Boolean(bool) => "asNeededBoolean",
        CodeableConcept(CodeableConcept) => "asNeededCodeableConcept",
    }
}

/// How the medication is/was taken or should be taken
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dosage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// The order of the dosage instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<i32>,

    /// Free text dosage instructions e.g. SIG
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_instruction: Vec<CodeableConcept>,

    /// Patient or consumer oriented instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_instruction: Option<String>,

    /// When medication should be administered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<Timing>,

    #[serde(flatten, deserialize_with = "crate::element::deserialize_choice")]
    pub as_needed: Option<DosageAsNeeded>,

    /// Body site to administer to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<CodeableConcept>,

    /// How drug should enter body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<CodeableConcept>,

    /// Technique for administering medication
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<CodeableConcept>,

    /// Amount of medication administered
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dose_and_rate: Vec<DosageDoseAndRate>,

    /// Upper limit on medication per unit of time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_dose_per_period: Option<Ratio>,

    /// Upper limit on medication per administration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_dose_per_administration: Option<Quantity>,

    /// Upper limit on medication per lifetime of the patient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_dose_per_lifetime: Option<Quantity>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static DOSAGE_INFO: TypeInfo = TypeInfo {
    name: "Dosage",
    path: "Dosage",
    kind: TypeKind::Complex,
    base: "BackboneElement",
    url: Some("http://hl7.org/fhir/StructureDefinition/Dosage"),
    short: "How the medication is/was taken or should be taken",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        common::MODIFIER_EXTENSION,
        FieldDescriptor::new(
            "sequence",
            INTEGER,
            Cardinality::OPTIONAL,
            "The order of the dosage instructions",
        )
        .summary(),
        FieldDescriptor::new(
            "text",
            STRING,
            Cardinality::OPTIONAL,
            "Free text dosage instructions e.g. SIG",
        )
        .summary(),
        FieldDescriptor::new(
            "additionalInstruction",
            CODEABLE_CONCEPT,
            Cardinality::MANY,
            "Supplemental instruction or warnings to the patient - e.g. \"with meals\", \"may cause drowsiness\"",
        )
        .summary(),
        FieldDescriptor::new(
            "patientInstruction",
            STRING,
            Cardinality::OPTIONAL,
            "Patient or consumer oriented instructions",
        )
        .summary(),
        FieldDescriptor::new(
            "timing",
            TIMING,
            Cardinality::OPTIONAL,
            "When medication should be administered",
        )
        .summary(),
        FieldDescriptor::new(
            "asNeeded",
            &[
                TypeRef::primitive("boolean"),
                TypeRef::complex("CodeableConcept", CodeableConcept::type_info),
            ],
            Cardinality::OPTIONAL,
            "Take \"as needed\" (for x)",
        )
        .summary(),
        FieldDescriptor::new(
            "site",
            CODEABLE_CONCEPT,
            Cardinality::OPTIONAL,
            "Body site to administer to",
        )
        .summary(),
        FieldDescriptor::new(
            "route",
            CODEABLE_CONCEPT,
            Cardinality::OPTIONAL,
            "How drug should enter body",
        )
        .summary(),
        FieldDescriptor::new(
            "method",
            CODEABLE_CONCEPT,
            Cardinality::OPTIONAL,
            "Technique for administering medication",
        )
        .summary(),
        FieldDescriptor::new(
            "doseAndRate",
            &[TypeRef::complex("Element", DosageDoseAndRate::type_info)],
            Cardinality::MANY,
            "Amount of medication administered",
        )
        .summary(),
        FieldDescriptor::new(
            "maxDosePerPeriod",
            RATIO,
            Cardinality::OPTIONAL,
            "Upper limit on medication per unit of time",
        )
        .summary(),
        FieldDescriptor::new(
            "maxDosePerAdministration",
            SIMPLE_QUANTITY,
            Cardinality::OPTIONAL,
            "Upper limit on medication per administration",
        )
        .summary(),
        FieldDescriptor::new(
            "maxDosePerLifetime",
            SIMPLE_QUANTITY,
            Cardinality::OPTIONAL,
            "Upper limit on medication per lifetime of the patient",
        )
        .summary(),
    ],
};

impl_element!(Dosage, DOSAGE_INFO, backbone);

choice_type! {
    /// `Dosage.doseAndRate.dose[x]`
    DosageDose {
        Range(Range) => "doseRange",
        Quantity(Quantity) => "doseQuantity",
    }
}

choice_type! {
    /// `Dosage.doseAndRate.rate[x]`
    DosageRate {
        Ratio(Ratio) => "rateRatio",
        Range(Range) => "rateRange",
        Quantity(Quantity) => "rateQuantity",
    }
}

/// Amount of medication administered
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DosageDoseAndRate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    /// The kind of dose or rate specified
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<CodeableConcept>,

    #[serde(flatten, deserialize_with = "crate::element::deserialize_choice")]
    pub dose: Option<DosageDose>,

    #[serde(flatten, deserialize_with = "crate::element::deserialize_choice")]
    pub rate: Option<DosageRate>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static DOSAGE_DOSE_AND_RATE_INFO: TypeInfo = TypeInfo {
    name: "DosageDoseAndRate",
    path: "Dosage.doseAndRate",
    kind: TypeKind::Backbone,
    base: "Element",
    url: None,
    short: "Amount of medication administered",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        FieldDescriptor::new(
            "type",
            CODEABLE_CONCEPT,
            Cardinality::OPTIONAL,
            "The kind of dose or rate specified",
        )
        .rust_name("type_")
        .binding(&value_sets::DOSE_RATE_TYPE)
        .summary(),
        FieldDescriptor::new(
            "dose",
            &[
                TypeRef::complex("Range", Range::type_info),
                TypeRef::complex("Quantity", Quantity::type_info),
            ],
            Cardinality::OPTIONAL,
            "Amount of medication per dose",
        )
        .summary(),
        FieldDescriptor::new(
            "rate",
            &[
                TypeRef::complex("Ratio", Ratio::type_info),
                TypeRef::complex("Range", Range::type_info),
                TypeRef::complex("Quantity", Quantity::type_info),
            ],
            Cardinality::OPTIONAL,
            "Amount of medication per unit of time",
        )
        .summary(),
    ],
};

impl_element!(DosageDoseAndRate, DOSAGE_DOSE_AND_RATE_INFO);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use serde_json::json;

    #[test]
    fn extension_value_of_any_open_type() {
        let input = json!({
            "url": "http://example.org/ext",
            "valueHumanName": {"family": "Doe"},
            "_valueHumanName": {"id": "n1"}
        });
        let ext: Extension = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(ext.value.as_ref().map(ExtensionValue::wire_key), Some("valueHumanName"));
        assert_eq!(ext.primitive_elements.get("valueHumanName"), Some(&json!({"id": "n1"})));
        assert_eq!(serde_json::to_value(&ext).unwrap(), input);
    }

    #[test]
    fn with_value_replaces_previous_value() {
        let ext = Extension::new("http://example.org/ext")
            .with_value(ExtensionValue::String("a".into()))
            .with_value(ExtensionValue::Boolean(true));
        assert_eq!(ext.value, Some(ExtensionValue::Boolean(true)));
        assert_eq!(
            serde_json::to_value(&ext).unwrap(),
            json!({"url": "http://example.org/ext", "valueBoolean": true})
        );
    }

    #[test]
    fn extension_with_two_values_is_rejected() {
        let err = serde_json::from_value::<Extension>(json!({
            "url": "http://example.org/ext",
            "valueString": "a",
            "valueBoolean": true
        }))
        .unwrap_err();
        assert!(err.to_string().contains("only one of"));
    }

    #[test]
    fn malformed_extension_value_is_an_error() {
        let err = serde_json::from_value::<Extension>(json!({
            "url": "http://example.org/ext",
            "valueCoding": "http://loinc.org|1234-5"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("valueCoding"));
    }

    #[test]
    fn dosage_choice_fields_resolve() {
        let info = Dosage::type_info();
        let (field, ty) = info.resolve_wire_key("asNeededCodeableConcept").unwrap();
        assert_eq!(field.name, "asNeeded");
        assert_eq!(ty.code, "CodeableConcept");

        let dosage: Dosage = serde_json::from_value(json!({
            "text": "as needed",
            "asNeededBoolean": true,
            "doseAndRate": [{"doseQuantity": {"value": 5, "unit": "mg"}}]
        }))
        .unwrap();
        assert_eq!(dosage.as_needed, Some(DosageAsNeeded::Boolean(true)));
        assert!(matches!(
            dosage.dose_and_rate[0].dose,
            Some(DosageDose::Quantity(_))
        ));
    }
}
