//! StructureMap resource
//!
//! A map that describes how one content structure maps to another. Groups
//! hold rules, and rules nest through `rule.rule`.

use super::AnyResource;
use crate::common::{self, *};
use crate::datatypes::{
    Address, Annotation, Attachment, CodeableConcept, Coding, ContactDetail, ContactPoint,
    Contributor, DataRequirement, Dosage, Expression, Extension, HumanName, Identifier, Meta,
    Money, Narrative, ParameterDefinition, Period, Quantity, Range, Ratio, Reference,
    RelatedArtifact, SampledData, Signature, Timing, TriggerDefinition, UsageContext,
};
use crate::descriptor::{Cardinality, FieldDescriptor, TypeInfo, TypeKind, TypeRef};
use crate::element::{Element, PrimitiveElements, ResourceTypeTag};
use crate::value_sets;
use serde::{Deserialize, Serialize};
use serde_json::Number;

choice_type! {
    /// `StructureMap.group.rule.source.defaultValue[x]`, one of the open types
    StructureMapSourceDefaultValue {
        Base64Binary(String) => "defaultValueBase64Binary",
        Boolean(bool) => "defaultValueBoolean",
        Canonical(String) => "defaultValueCanonical",
        Code(String) => "defaultValueCode",
        Date(String) => "defaultValueDate",
        DateTime(String) => "defaultValueDateTime",
        Decimal(Number) => "defaultValueDecimal",
        Id(String) => "defaultValueId",
        Instant(String) => "defaultValueInstant",
        Integer(i32) => "defaultValueInteger",
        Markdown(String) => "defaultValueMarkdown",
        Oid(String) => "defaultValueOid",
        PositiveInt(u32) => "defaultValuePositiveInt",
        String(String) => "defaultValueString",
        Time(String) => "defaultValueTime",
        UnsignedInt(u32) => "defaultValueUnsignedInt",
        Uri(String) => "defaultValueUri",
        Url(String) => "defaultValueUrl",
        Uuid(String) => "defaultValueUuid",
        Address(Address) => "defaultValueAddress",
        Age(Quantity) => "defaultValueAge",
        Annotation(Annotation) => "defaultValueAnnotation",
        Attachment(Attachment) => "defaultValueAttachment",
        CodeableConcept(CodeableConcept) => "defaultValueCodeableConcept",
        Coding(Coding) => "defaultValueCoding",
        ContactPoint(ContactPoint) => "defaultValueContactPoint",
        Count(Quantity) => "defaultValueCount",
        Distance(Quantity) => "defaultValueDistance",
        Duration(Quantity) => "defaultValueDuration",
        HumanName(HumanName) => "defaultValueHumanName",
        Identifier(Identifier) => "defaultValueIdentifier",
        Money(Money) => "defaultValueMoney",
        Period(Period) => "defaultValuePeriod",
        Quantity(Quantity) => "defaultValueQuantity",
        Range(Range) => "defaultValueRange",
        Ratio(Ratio) => "defaultValueRatio",
        Reference(Reference) => "defaultValueReference",
        SampledData(SampledData) => "defaultValueSampledData",
        Signature(Signature) => "defaultValueSignature",
        Timing(Timing) => "defaultValueTiming",
        ContactDetail(ContactDetail) => "defaultValueContactDetail",
        Contributor(Contributor) => "defaultValueContributor",
        DataRequirement(DataRequirement) => "defaultValueDataRequirement",
        Expression(Expression) => "defaultValueExpression",
        ParameterDefinition(ParameterDefinition) => "defaultValueParameterDefinition",
        RelatedArtifact(RelatedArtifact) => "defaultValueRelatedArtifact",
        TriggerDefinition(TriggerDefinition) => "defaultValueTriggerDefinition",
        UsageContext(UsageContext) => "defaultValueUsageContext",
        Dosage(Dosage) => "defaultValueDosage",
        Meta(Meta) => "defaultValueMeta",
    }
}

choice_type! {
    /// `StructureMap.group.rule.target.parameter.value[x]`
    StructureMapTargetParameterValue {
        Id(String) => "valueId",
        String(String) => "valueString",
        Boolean(bool) => "valueBoolean",
        Integer(i32) => "valueInteger",
        Decimal(Number) => "valueDecimal",
    }
}

/// A Map of relationships between 2 structures that can be used to
/// transform data
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StructureMap {
    #[serde(rename = "resourceType", default)]
    pub resource_type: ResourceTypeTag<StructureMap>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub implicit_rules: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Narrative>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contained: Vec<AnyResource>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub experimental: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contact: Vec<ContactDetail>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub use_context: Vec<UsageContext>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub jurisdiction: Vec<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,

    /// Structure Definition used by this map
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub structure: Vec<StructureMapStructure>,

    /// Other maps used by this map (canonical URLs)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub import: Vec<String>,

    /// Named sections for reader convenience
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group: Vec<StructureMapGroup>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

impl StructureMap {
    pub fn find_group(&self, name: &str) -> Option<&StructureMapGroup> {
        self.group.iter().find(|g| g.name.as_deref() == Some(name))
    }

    /// The named group followed by the groups it extends, nearest first.
    ///
    /// Stops at a missing group or at the first group seen twice.
    pub fn extends_chain(&self, name: &str) -> Vec<&StructureMapGroup> {
        let mut chain: Vec<&StructureMapGroup> = Vec::new();
        let mut next = self.find_group(name);
        while let Some(group) = next {
            if chain.iter().any(|seen| std::ptr::eq(*seen, group)) {
                break;
            }
            chain.push(group);
            next = group.extends.as_deref().and_then(|e| self.find_group(e));
        }
        chain
    }
}

static STRUCTURE_MAP_INFO: TypeInfo = TypeInfo {
    name: "StructureMap",
    path: "StructureMap",
    kind: TypeKind::Resource,
    base: "DomainResource",
    url: Some("http://hl7.org/fhir/StructureDefinition/StructureMap"),
    short: "A Map of relationships between 2 structures that can be used to transform data",
    fields: &[
        common::RESOURCE_ID,
        common::RESOURCE_META,
        common::IMPLICIT_RULES,
        common::LANGUAGE,
        common::TEXT,
        common::CONTAINED,
        common::RESOURCE_EXTENSION,
        common::RESOURCE_MODIFIER_EXTENSION,
        FieldDescriptor::new(
            "url",
            URI,
            Cardinality::REQUIRED,
            "Canonical identifier for this structure map, represented as a URI (globally unique)",
        )
        .summary(),
        common::CANONICAL_IDENTIFIER,
        common::BUSINESS_VERSION,
        FieldDescriptor::new(
            "name",
            STRING,
            Cardinality::REQUIRED,
            "Name for this structure map (computer friendly)",
        )
        .summary(),
        common::TITLE,
        common::PUBLICATION_STATUS,
        common::EXPERIMENTAL,
        common::DATE_LAST_CHANGED,
        common::PUBLISHER,
        common::CONTACT,
        common::DESCRIPTION,
        common::USE_CONTEXT,
        common::JURISDICTION,
        common::PURPOSE,
        common::COPYRIGHT,
        FieldDescriptor::new(
            "structure",
            &[TypeRef::complex("BackboneElement", StructureMapStructure::type_info)],
            Cardinality::MANY,
            "Structure Definition used by this map",
        )
        .summary(),
        FieldDescriptor::new(
            "import",
            &[TypeRef::canonical(profiles!["StructureMap"])],
            Cardinality::MANY,
            "Other maps used by this map (canonical URLs)",
        )
        .summary(),
        FieldDescriptor::new(
            "group",
            &[TypeRef::complex("BackboneElement", StructureMapGroup::type_info)],
            Cardinality::AT_LEAST_ONE,
            "Named sections for reader convenience",
        ),
    ],
};

impl_resource!(StructureMap, STRUCTURE_MAP_INFO);

/// Structure Definition used by this map
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StructureMapStructure {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// Canonical reference to structure definition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// source | queried | target | produced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// Name for type in this map
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static STRUCTURE_MAP_STRUCTURE_INFO: TypeInfo = TypeInfo {
    name: "StructureMapStructure",
    path: "StructureMap.structure",
    kind: TypeKind::Backbone,
    base: "BackboneElement",
    url: None,
    short: "Structure Definition used by this map",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        common::MODIFIER_EXTENSION,
        FieldDescriptor::new(
            "url",
            &[TypeRef::canonical(profiles!["StructureDefinition"])],
            Cardinality::REQUIRED,
            "Canonical reference to structure definition",
        )
        .summary(),
        FieldDescriptor::new(
            "mode",
            CODE,
            Cardinality::REQUIRED,
            "source | queried | target | produced",
        )
        .binding(&value_sets::MAP_MODEL_MODE)
        .summary(),
        FieldDescriptor::new(
            "alias",
            STRING,
            Cardinality::OPTIONAL,
            "Name for type in this map",
        )
        .summary(),
        FieldDescriptor::new(
            "documentation",
            STRING,
            Cardinality::OPTIONAL,
            "Documentation on use of structure",
        ),
    ],
};

impl_element!(StructureMapStructure, STRUCTURE_MAP_STRUCTURE_INFO, backbone);

/// Named sections for reader convenience
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StructureMapGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// Human-readable label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Another group that this group adds rules to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    /// none | types | type-and-types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_mode: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,

    /// Named instance provided when invoking the map
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub input: Vec<StructureMapGroupInput>,

    /// Transform Rule from source to target
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rule: Vec<StructureMapGroupRule>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

impl StructureMapGroup {
    /// Every rule of the group including nested ones, depth first
    pub fn all_rules(&self) -> Vec<&StructureMapGroupRule> {
        let mut out = Vec::new();
        for rule in &self.rule {
            rule.collect_into(&mut out);
        }
        out
    }
}

static STRUCTURE_MAP_GROUP_INFO: TypeInfo = TypeInfo {
    name: "StructureMapGroup",
    path: "StructureMap.group",
    kind: TypeKind::Backbone,
    base: "BackboneElement",
    url: None,
    short: "Named sections for reader convenience",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        common::MODIFIER_EXTENSION,
        FieldDescriptor::new("name", ID, Cardinality::REQUIRED, "Human-readable label").summary(),
        FieldDescriptor::new(
            "extends",
            ID,
            Cardinality::OPTIONAL,
            "Another group that this group adds rules to",
        )
        .summary()
        .local_ref("StructureMap.group", "name"),
        FieldDescriptor::new(
            "typeMode",
            CODE,
            Cardinality::REQUIRED,
            "none | types | type-and-types",
        )
        .binding(&value_sets::MAP_GROUP_TYPE_MODE)
        .summary(),
        FieldDescriptor::new(
            "documentation",
            STRING,
            Cardinality::OPTIONAL,
            "Additional description/explanation for group",
        )
        .summary(),
        FieldDescriptor::new(
            "input",
            &[TypeRef::complex("BackboneElement", StructureMapGroupInput::type_info)],
            Cardinality::AT_LEAST_ONE,
            "Named instance provided when invoking the map",
        )
        .summary(),
        FieldDescriptor::new(
            "rule",
            &[TypeRef::complex("BackboneElement", StructureMapGroupRule::type_info)],
            Cardinality::AT_LEAST_ONE,
            "Transform Rule from source to target",
        )
        .summary(),
    ],
};

impl_element!(StructureMapGroup, STRUCTURE_MAP_GROUP_INFO, backbone);

/// Named instance provided when invoking the map
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StructureMapGroupInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Type for this instance of data
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    /// source | target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static STRUCTURE_MAP_GROUP_INPUT_INFO: TypeInfo = TypeInfo {
    name: "StructureMapGroupInput",
    path: "StructureMap.group.input",
    kind: TypeKind::Backbone,
    base: "BackboneElement",
    url: None,
    short: "Named instance provided when invoking the map",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        common::MODIFIER_EXTENSION,
        FieldDescriptor::new("name", ID, Cardinality::REQUIRED, "Name for this instance of data")
            .summary(),
        FieldDescriptor::new("type", STRING, Cardinality::OPTIONAL, "Type for this instance of data")
            .rust_name("type_")
            .summary(),
        FieldDescriptor::new("mode", CODE, Cardinality::REQUIRED, "source | target")
            .binding(&value_sets::MAP_INPUT_MODE)
            .summary(),
        FieldDescriptor::new(
            "documentation",
            STRING,
            Cardinality::OPTIONAL,
            "Documentation for this instance of data",
        )
        .summary(),
    ],
};

impl_element!(StructureMapGroupInput, STRUCTURE_MAP_GROUP_INPUT_INFO, backbone);

/// Transform Rule from source to target
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StructureMapGroupRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// Name of the rule for internal references
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Source inputs to the mapping
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source: Vec<StructureMapGroupRuleSource>,

    /// Content to create because of this mapping rule
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub target: Vec<StructureMapGroupRuleTarget>,

    /// Rules contained in this rule
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rule: Vec<StructureMapGroupRule>,

    /// Which other rules to apply in the context of this rule
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependent: Vec<StructureMapGroupRuleDependent>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

impl StructureMapGroupRule {
    fn collect_into<'a>(&'a self, out: &mut Vec<&'a StructureMapGroupRule>) {
        out.push(self);
        for child in &self.rule {
            child.collect_into(out);
        }
    }
}

static STRUCTURE_MAP_GROUP_RULE_INFO: TypeInfo = TypeInfo {
    name: "StructureMapGroupRule",
    path: "StructureMap.group.rule",
    kind: TypeKind::Backbone,
    base: "BackboneElement",
    url: None,
    short: "Transform Rule from source to target",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        common::MODIFIER_EXTENSION,
        FieldDescriptor::new(
            "name",
            ID,
            Cardinality::REQUIRED,
            "Name of the rule for internal references",
        )
        .summary(),
        FieldDescriptor::new(
            "source",
            &[TypeRef::complex(
                "BackboneElement",
                StructureMapGroupRuleSource::type_info,
            )],
            Cardinality::AT_LEAST_ONE,
            "Source inputs to the mapping",
        )
        .summary(),
        FieldDescriptor::new(
            "target",
            &[TypeRef::complex(
                "BackboneElement",
                StructureMapGroupRuleTarget::type_info,
            )],
            Cardinality::MANY,
            "Content to create because of this mapping rule",
        )
        .summary(),
        FieldDescriptor::new(
            "rule",
            &[TypeRef::complex("BackboneElement", StructureMapGroupRule::type_info)],
            Cardinality::MANY,
            "Rules contained in this rule",
        )
        .summary(),
        FieldDescriptor::new(
            "dependent",
            &[TypeRef::complex(
                "BackboneElement",
                StructureMapGroupRuleDependent::type_info,
            )],
            Cardinality::MANY,
            "Which other rules to apply in the context of this rule",
        )
        .summary(),
        FieldDescriptor::new(
            "documentation",
            STRING,
            Cardinality::OPTIONAL,
            "Documentation for this instance of data",
        ),
    ],
};

impl_element!(StructureMapGroupRule, STRUCTURE_MAP_GROUP_RULE_INFO, backbone);

/// Source inputs to the mapping
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StructureMapGroupRuleSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// Type or variable this rule applies to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    /// Specified minimum cardinality
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i32>,

    /// Specified maximum cardinality (number or *)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,

    /// Rule only applies if source has this type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    /// Default value if no value exists
    #[serde(flatten, deserialize_with = "crate::element::deserialize_choice")]
    pub default_value: Option<StructureMapSourceDefaultValue>,

    /// Optional field for this source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,

    /// first | not_first | last | not_last | only_one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_mode: Option<String>,

    /// Named context for field, if a field is specified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,

    /// FHIRPath expression  - must be true or the rule does not apply
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,

    /// FHIRPath expression  - must be true or the mapping engine throws an error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check: Option<String>,

    /// Message to put in log if source exists (FHIRPath)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_message: Option<String>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static STRUCTURE_MAP_GROUP_RULE_SOURCE_INFO: TypeInfo = TypeInfo {
    name: "StructureMapGroupRuleSource",
    path: "StructureMap.group.rule.source",
    kind: TypeKind::Backbone,
    base: "BackboneElement",
    url: None,
    short: "Source inputs to the mapping",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        common::MODIFIER_EXTENSION,
        FieldDescriptor::new(
            "context",
            ID,
            Cardinality::REQUIRED,
            "Type or variable this rule applies to",
        )
        .summary(),
        FieldDescriptor::new(
            "min",
            INTEGER,
            Cardinality::OPTIONAL,
            "Specified minimum cardinality",
        )
        .summary(),
        FieldDescriptor::new(
            "max",
            STRING,
            Cardinality::OPTIONAL,
            "Specified maximum cardinality (number or *)",
        )
        .summary(),
        FieldDescriptor::new(
            "type",
            STRING,
            Cardinality::OPTIONAL,
            "Rule only applies if source has this type",
        )
        .rust_name("type_")
        .summary(),
        FieldDescriptor::new(
            "defaultValue",
            OPEN_TYPES,
            Cardinality::OPTIONAL,
            "Default value if no value exists",
        )
        .summary(),
        FieldDescriptor::new(
            "element",
            STRING,
            Cardinality::OPTIONAL,
            "Optional field for this source",
        )
        .summary(),
        FieldDescriptor::new(
            "listMode",
            CODE,
            Cardinality::OPTIONAL,
            "first | not_first | last | not_last | only_one",
        )
        .binding(&value_sets::MAP_SOURCE_LIST_MODE)
        .summary(),
        FieldDescriptor::new(
            "variable",
            ID,
            Cardinality::OPTIONAL,
            "Named context for field, if a field is specified",
        )
        .summary(),
        FieldDescriptor::new(
            "condition",
            STRING,
            Cardinality::OPTIONAL,
            "FHIRPath expression  - must be true or the rule does not apply",
        )
        .summary(),
        FieldDescriptor::new(
            "check",
            STRING,
            Cardinality::OPTIONAL,
            "FHIRPath expression  - must be true or the mapping engine throws an error instead of completing",
        )
        .summary(),
        FieldDescriptor::new(
            "logMessage",
            STRING,
            Cardinality::OPTIONAL,
            "Message to put in log if source exists (FHIRPath)",
        )
        .summary(),
    ],
};

impl_element!(
    StructureMapGroupRuleSource,
    STRUCTURE_MAP_GROUP_RULE_SOURCE_INFO,
    backbone
);

/// Content to create because of this mapping rule
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StructureMapGroupRuleTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// Type or variable this rule applies to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    /// type | variable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_type: Option<String>,

    /// Field to create in the context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,

    /// Named context for field, if desired, and a field is specified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,

    /// first | share | last | collate
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub list_mode: Vec<String>,

    /// Internal rule reference for shared list items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_rule_id: Option<String>,

    /// create | copy +
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,

    /// Parameters to the transform
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameter: Vec<StructureMapGroupRuleTargetParameter>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static STRUCTURE_MAP_GROUP_RULE_TARGET_INFO: TypeInfo = TypeInfo {
    name: "StructureMapGroupRuleTarget",
    path: "StructureMap.group.rule.target",
    kind: TypeKind::Backbone,
    base: "BackboneElement",
    url: None,
    short: "Content to create because of this mapping rule",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        common::MODIFIER_EXTENSION,
        FieldDescriptor::new(
            "context",
            ID,
            Cardinality::OPTIONAL,
            "Type or variable this rule applies to",
        )
        .summary(),
        FieldDescriptor::new("contextType", CODE, Cardinality::OPTIONAL, "type | variable")
            .binding(&value_sets::MAP_CONTEXT_TYPE)
            .summary(),
        FieldDescriptor::new(
            "element",
            STRING,
            Cardinality::OPTIONAL,
            "Field to create in the context",
        )
        .summary(),
        FieldDescriptor::new(
            "variable",
            ID,
            Cardinality::OPTIONAL,
            "Named context for field, if desired, and a field is specified",
        )
        .summary(),
        FieldDescriptor::new(
            "listMode",
            CODE,
            Cardinality::MANY,
            "first | share | last | collate",
        )
        .binding(&value_sets::MAP_TARGET_LIST_MODE)
        .summary(),
        FieldDescriptor::new(
            "listRuleId",
            ID,
            Cardinality::OPTIONAL,
            "Internal rule reference for shared list items",
        )
        .summary(),
        FieldDescriptor::new("transform", CODE, Cardinality::OPTIONAL, "create | copy +")
            .binding(&value_sets::MAP_TRANSFORM)
            .summary(),
        FieldDescriptor::new(
            "parameter",
            &[TypeRef::complex(
                "BackboneElement",
                StructureMapGroupRuleTargetParameter::type_info,
            )],
            Cardinality::MANY,
            "Parameters to the transform",
        )
        .summary(),
    ],
};

impl_element!(
    StructureMapGroupRuleTarget,
    STRUCTURE_MAP_GROUP_RULE_TARGET_INFO,
    backbone
);

/// Parameters to the transform
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StructureMapGroupRuleTargetParameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// Parameter value - variable or literal
    #[serde(flatten, deserialize_with = "crate::element::deserialize_choice")]
    pub value: Option<StructureMapTargetParameterValue>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static STRUCTURE_MAP_GROUP_RULE_TARGET_PARAMETER_INFO: TypeInfo = TypeInfo {
    name: "StructureMapGroupRuleTargetParameter",
    path: "StructureMap.group.rule.target.parameter",
    kind: TypeKind::Backbone,
    base: "BackboneElement",
    url: None,
    short: "Parameters to the transform",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        common::MODIFIER_EXTENSION,
        FieldDescriptor::new(
            "value",
            &[
                TypeRef::primitive("id"),
                TypeRef::primitive("string"),
                TypeRef::primitive("boolean"),
                TypeRef::primitive("integer"),
                TypeRef::primitive("decimal"),
            ],
            Cardinality::REQUIRED,
            "Parameter value - variable or literal",
        )
        .summary(),
    ],
};

impl_element!(
    StructureMapGroupRuleTargetParameter,
    STRUCTURE_MAP_GROUP_RULE_TARGET_PARAMETER_INFO,
    backbone
);

/// Which other rules to apply in the context of this rule
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StructureMapGroupRuleDependent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// Name of a rule or group to apply
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Variable to pass to the rule or group
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variable: Vec<String>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static STRUCTURE_MAP_GROUP_RULE_DEPENDENT_INFO: TypeInfo = TypeInfo {
    name: "StructureMapGroupRuleDependent",
    path: "StructureMap.group.rule.dependent",
    kind: TypeKind::Backbone,
    base: "BackboneElement",
    url: None,
    short: "Which other rules to apply in the context of this rule",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        common::MODIFIER_EXTENSION,
        FieldDescriptor::new(
            "name",
            ID,
            Cardinality::REQUIRED,
            "Name of a rule or group to apply",
        )
        .summary(),
        FieldDescriptor::new(
            "variable",
            STRING,
            Cardinality::AT_LEAST_ONE,
            "Variable to pass to the rule or group",
        )
        .summary(),
    ],
};

impl_element!(
    StructureMapGroupRuleDependent,
    STRUCTURE_MAP_GROUP_RULE_DEPENDENT_INFO,
    backbone
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use serde_json::json;

    #[test]
    fn default_value_accepts_open_types() {
        let source: StructureMapGroupRuleSource = serde_json::from_value(json!({
            "context": "src",
            "element": "status",
            "defaultValueCoding": {"system": "http://example.org", "code": "x"}
        }))
        .unwrap();
        assert!(matches!(
            source.default_value,
            Some(StructureMapSourceDefaultValue::Coding(_))
        ));

        let field = StructureMapGroupRuleSource::type_info()
            .field("defaultValue[x]")
            .unwrap();
        assert_eq!(field.types.len(), StructureMapSourceDefaultValue::WIRE_KEYS.len());
        for key in StructureMapSourceDefaultValue::WIRE_KEYS {
            assert!(field.match_key(key).is_some(), "{key} not declared");
        }
    }

    #[test]
    fn target_parameter_value_choice() {
        let target: StructureMapGroupRuleTarget = serde_json::from_value(json!({
            "context": "tgt",
            "transform": "copy",
            "listMode": ["first", "collate"],
            "parameter": [{"valueId": "v"}, {"valueString": "text"}, {"valueInteger": 3}]
        }))
        .unwrap();
        assert_eq!(
            target.parameter[2].value,
            Some(StructureMapTargetParameterValue::Integer(3))
        );
        assert_eq!(target.list_mode.len(), 2);
    }

    #[test]
    fn nested_rules_and_extends_chain() {
        let map: StructureMap = serde_json::from_value(json!({
            "resourceType": "StructureMap",
            "url": "http://example.org/StructureMap/demo",
            "name": "Demo",
            "status": "draft",
            "group": [
                {
                    "name": "base",
                    "typeMode": "none",
                    "input": [{"name": "src", "mode": "source"}],
                    "rule": [{"name": "r1", "source": [{"context": "src"}]}]
                },
                {
                    "name": "child",
                    "extends": "base",
                    "typeMode": "none",
                    "input": [{"name": "src", "mode": "source"}],
                    "rule": [{
                        "name": "outer",
                        "source": [{"context": "src"}],
                        "rule": [{
                            "name": "inner",
                            "source": [{"context": "src"}],
                            "rule": [{"name": "innermost", "source": [{"context": "src"}]}]
                        }]
                    }]
                }
            ]
        }))
        .unwrap();

        let names: Vec<_> = map
            .extends_chain("child")
            .iter()
            .filter_map(|g| g.name.as_deref())
            .collect();
        assert_eq!(names, vec!["child", "base"]);

        let child = map.find_group("child").unwrap();
        let rules: Vec<_> = child
            .all_rules()
            .iter()
            .filter_map(|r| r.name.as_deref())
            .collect();
        assert_eq!(rules, vec!["outer", "inner", "innermost"]);
    }

    #[test]
    fn extends_chain_stops_on_cycle() {
        let mut map = StructureMap::new();
        for (name, extends) in [("a", "b"), ("b", "a")] {
            map.group.push(StructureMapGroup {
                name: Some(name.to_string()),
                extends: Some(extends.to_string()),
                ..Default::default()
            });
        }
        assert_eq!(map.extends_chain("a").len(), 2);
    }

    #[test]
    fn extends_declares_local_reference() {
        let field = StructureMapGroup::type_info().field("extends").unwrap();
        let local = field.local_ref.unwrap();
        assert_eq!(local.target_path, "StructureMap.group");
        assert_eq!(local.key, "name");
    }
}
