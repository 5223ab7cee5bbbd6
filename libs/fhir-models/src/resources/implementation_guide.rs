//! ImplementationGuide resource
//!
//! A set of rules of how a particular interoperability or standards problem
//! is solved, typically through the use of FHIR resources.

use super::AnyResource;
use crate::common::{self, *};
use crate::datatypes::{
    CodeableConcept, ContactDetail, Extension, Meta, Narrative, Reference, UsageContext,
};
use crate::descriptor::{Cardinality, FieldDescriptor, TypeInfo, TypeKind, TypeRef};
use crate::element::{Element, PrimitiveElements, ResourceTypeTag};
use crate::value_sets;
use serde::{Deserialize, Serialize};

const RESOURCE_EXAMPLE_TYPES: &[TypeRef] = &[
    TypeRef::primitive("boolean"),
    TypeRef::canonical(profiles!["StructureDefinition"]),
];

choice_type! {
    /// `example[x]` of definition and manifest resources
    ImplementationGuideResourceExample {
        Boolean(bool) => "exampleBoolean",
        Canonical(String) => "exampleCanonical",
    }
}

choice_type! {
    /// `ImplementationGuide.definition.page.name[x]`
    ImplementationGuidePageName {
        Url(String) => "nameUrl",
        Reference(Reference) => "nameReference",
    }
}

/// A set of rules about how FHIR is used
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationGuide {
    #[serde(rename = "resourceType", default)]
    pub resource_type: ResourceTypeTag<ImplementationGuide>,

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

    /// Canonical identifier for this implementation guide
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// draft | active | retired | unknown
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
    pub copyright: Option<String>,

    /// NPM Package name for IG
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_id: Option<String>,

    /// SPDX license code for this IG (or not-open-source)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    /// FHIR Version(s) this Implementation Guide targets
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fhir_version: Vec<String>,

    /// Another Implementation guide this depends on
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<ImplementationGuideDependsOn>,

    /// Profiles that apply globally
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub global: Vec<ImplementationGuideGlobal>,

    /// Information needed to build the IG
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<ImplementationGuideDefinition>,

    /// Information about an assembled IG
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest: Option<ImplementationGuideManifest>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static IMPLEMENTATION_GUIDE_INFO: TypeInfo = TypeInfo {
    name: "ImplementationGuide",
    path: "ImplementationGuide",
    kind: TypeKind::Resource,
    base: "DomainResource",
    url: Some("http://hl7.org/fhir/StructureDefinition/ImplementationGuide"),
    short: "A set of rules about how FHIR is used",
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
            "Canonical identifier for this implementation guide, represented as a URI (globally unique)",
        )
        .summary(),
        common::BUSINESS_VERSION,
        FieldDescriptor::new(
            "name",
            STRING,
            Cardinality::REQUIRED,
            "Name for this implementation guide (computer friendly)",
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
        common::COPYRIGHT,
        FieldDescriptor::new(
            "packageId",
            ID,
            Cardinality::REQUIRED,
            "NPM Package name for IG",
        )
        .summary(),
        FieldDescriptor::new(
            "license",
            CODE,
            Cardinality::OPTIONAL,
            "SPDX license code for this IG (or not-open-source)",
        )
        .binding(&value_sets::SPDX_LICENSE)
        .summary(),
        FieldDescriptor::new(
            "fhirVersion",
            CODE,
            Cardinality::AT_LEAST_ONE,
            "FHIR Version(s) this Implementation Guide targets",
        )
        .binding(&value_sets::FHIR_VERSION)
        .summary(),
        FieldDescriptor::new(
            "dependsOn",
            &[TypeRef::complex("BackboneElement", ImplementationGuideDependsOn::type_info)],
            Cardinality::MANY,
            "Another Implementation guide this depends on",
        )
        .summary(),
        FieldDescriptor::new(
            "global",
            &[TypeRef::complex("BackboneElement", ImplementationGuideGlobal::type_info)],
            Cardinality::MANY,
            "Profiles that apply globally",
        )
        .summary(),
        FieldDescriptor::new(
            "definition",
            &[TypeRef::complex("BackboneElement", ImplementationGuideDefinition::type_info)],
            Cardinality::OPTIONAL,
            "Information needed to build the IG",
        ),
        FieldDescriptor::new(
            "manifest",
            &[TypeRef::complex("BackboneElement", ImplementationGuideManifest::type_info)],
            Cardinality::OPTIONAL,
            "Information about an assembled IG",
        ),
    ],
};

impl_resource!(ImplementationGuide, IMPLEMENTATION_GUIDE_INFO);

/// Another Implementation guide this depends on
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationGuideDependsOn {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// Identity of the IG that this depends on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// NPM Package name for IG this depends on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_id: Option<String>,

    /// Version of the IG
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static IMPLEMENTATION_GUIDE_DEPENDS_ON_INFO: TypeInfo = TypeInfo {
    name: "ImplementationGuideDependsOn",
    path: "ImplementationGuide.dependsOn",
    kind: TypeKind::Backbone,
    base: "BackboneElement",
    url: None,
    short: "Another Implementation guide this depends on",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        common::MODIFIER_EXTENSION,
        FieldDescriptor::new(
            "uri",
            &[TypeRef::canonical(profiles!["ImplementationGuide"])],
            Cardinality::REQUIRED,
            "Identity of the IG that this depends on",
        )
        .summary(),
        FieldDescriptor::new(
            "packageId",
            ID,
            Cardinality::OPTIONAL,
            "NPM Package name for IG this depends on",
        )
        .summary(),
        FieldDescriptor::new("version", STRING, Cardinality::OPTIONAL, "Version of the IG")
            .summary(),
    ],
};

impl_element!(
    ImplementationGuideDependsOn,
    IMPLEMENTATION_GUIDE_DEPENDS_ON_INFO,
    backbone
);

/// Profiles that apply globally
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationGuideGlobal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// Type this profile applies to
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    /// Profile that all resources must conform to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static IMPLEMENTATION_GUIDE_GLOBAL_INFO: TypeInfo = TypeInfo {
    name: "ImplementationGuideGlobal",
    path: "ImplementationGuide.global",
    kind: TypeKind::Backbone,
    base: "BackboneElement",
    url: None,
    short: "Profiles that apply globally",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        common::MODIFIER_EXTENSION,
        FieldDescriptor::new(
            "type",
            CODE,
            Cardinality::REQUIRED,
            "Type this profile applies to",
        )
        .rust_name("type_")
        .binding(&value_sets::RESOURCE_TYPES)
        .summary(),
        FieldDescriptor::new(
            "profile",
            &[TypeRef::canonical(profiles!["StructureDefinition"])],
            Cardinality::REQUIRED,
            "Profile that all resources must conform to",
        )
        .summary(),
    ],
};

impl_element!(
    ImplementationGuideGlobal,
    IMPLEMENTATION_GUIDE_GLOBAL_INFO,
    backbone
);

/// Information needed to build the IG
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationGuideDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// Grouping used to present related resources in the IG
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grouping: Vec<ImplementationGuideDefinitionGrouping>,

    /// Resource in the implementation guide
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource: Vec<ImplementationGuideDefinitionResource>,

    /// Page/Section in the Guide
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<ImplementationGuideDefinitionPage>,

    /// Defines how IG is built by tools
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameter: Vec<ImplementationGuideDefinitionParameter>,

    /// A template for building resources
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub template: Vec<ImplementationGuideDefinitionTemplate>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

impl ImplementationGuideDefinition {
    /// Resources assigned to the grouping with the given id
    pub fn resources_in_grouping<'a>(
        &'a self,
        grouping_id: &'a str,
    ) -> impl Iterator<Item = &'a ImplementationGuideDefinitionResource> + 'a {
        self.resource
            .iter()
            .filter(move |r| r.grouping_id.as_deref() == Some(grouping_id))
    }
}

static IMPLEMENTATION_GUIDE_DEFINITION_INFO: TypeInfo = TypeInfo {
    name: "ImplementationGuideDefinition",
    path: "ImplementationGuide.definition",
    kind: TypeKind::Backbone,
    base: "BackboneElement",
    url: None,
    short: "Information needed to build the IG",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        common::MODIFIER_EXTENSION,
        FieldDescriptor::new(
            "grouping",
            &[TypeRef::complex(
                "BackboneElement",
                ImplementationGuideDefinitionGrouping::type_info,
            )],
            Cardinality::MANY,
            "Grouping used to present related resources in the IG",
        ),
        FieldDescriptor::new(
            "resource",
            &[TypeRef::complex(
                "BackboneElement",
                ImplementationGuideDefinitionResource::type_info,
            )],
            Cardinality::AT_LEAST_ONE,
            "Resource in the implementation guide",
        ),
        FieldDescriptor::new(
            "page",
            &[TypeRef::complex(
                "BackboneElement",
                ImplementationGuideDefinitionPage::type_info,
            )],
            Cardinality::OPTIONAL,
            "Page/Section in the Guide",
        ),
        FieldDescriptor::new(
            "parameter",
            &[TypeRef::complex(
                "BackboneElement",
                ImplementationGuideDefinitionParameter::type_info,
            )],
            Cardinality::MANY,
            "Defines how IG is built by tools",
        ),
        FieldDescriptor::new(
            "template",
            &[TypeRef::complex(
                "BackboneElement",
                ImplementationGuideDefinitionTemplate::type_info,
            )],
            Cardinality::MANY,
            "A template for building resources",
        ),
    ],
};

impl_element!(
    ImplementationGuideDefinition,
    IMPLEMENTATION_GUIDE_DEFINITION_INFO,
    backbone
);

/// Grouping used to present related resources in the IG
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationGuideDefinitionGrouping {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// Descriptive name for the package
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Human readable text describing the package
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static IMPLEMENTATION_GUIDE_DEFINITION_GROUPING_INFO: TypeInfo = TypeInfo {
    name: "ImplementationGuideDefinitionGrouping",
    path: "ImplementationGuide.definition.grouping",
    kind: TypeKind::Backbone,
    base: "BackboneElement",
    url: None,
    short: "Grouping used to present related resources in the IG",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        common::MODIFIER_EXTENSION,
        FieldDescriptor::new(
            "name",
            STRING,
            Cardinality::REQUIRED,
            "Descriptive name for the package",
        ),
        FieldDescriptor::new(
            "description",
            STRING,
            Cardinality::OPTIONAL,
            "Human readable text describing the package",
        ),
    ],
};

impl_element!(
    ImplementationGuideDefinitionGrouping,
    IMPLEMENTATION_GUIDE_DEFINITION_GROUPING_INFO,
    backbone
);

/// Resource in the implementation guide
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationGuideDefinitionResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// Location of the resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<Reference>,

    /// Versions this applies to (if different to IG)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fhir_version: Vec<String>,

    /// Human Name for the resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Reason why included in guide
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Is an example/What is this an example of?
    #[serde(flatten, deserialize_with = "crate::element::deserialize_choice")]
    pub example: Option<ImplementationGuideResourceExample>,

    /// Grouping this is part of
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouping_id: Option<String>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static IMPLEMENTATION_GUIDE_DEFINITION_RESOURCE_INFO: TypeInfo = TypeInfo {
    name: "ImplementationGuideDefinitionResource",
    path: "ImplementationGuide.definition.resource",
    kind: TypeKind::Backbone,
    base: "BackboneElement",
    url: None,
    short: "Resource in the implementation guide",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        common::MODIFIER_EXTENSION,
        FieldDescriptor::new(
            "reference",
            &[reference(profiles!["Resource"])],
            Cardinality::REQUIRED,
            "Location of the resource",
        ),
        FieldDescriptor::new(
            "fhirVersion",
            CODE,
            Cardinality::MANY,
            "Versions this applies to (if different to IG)",
        )
        .binding(&value_sets::FHIR_VERSION),
        FieldDescriptor::new(
            "name",
            STRING,
            Cardinality::OPTIONAL,
            "Human Name for the resource",
        ),
        FieldDescriptor::new(
            "description",
            STRING,
            Cardinality::OPTIONAL,
            "Reason why included in guide",
        ),
        FieldDescriptor::new(
            "example",
            RESOURCE_EXAMPLE_TYPES,
            Cardinality::OPTIONAL,
            "Is an example/What is this an example of?",
        ),
        FieldDescriptor::new(
            "groupingId",
            ID,
            Cardinality::OPTIONAL,
            "Grouping this is part of",
        )
        .local_ref("ImplementationGuide.definition.grouping", "id"),
    ],
};

impl_element!(
    ImplementationGuideDefinitionResource,
    IMPLEMENTATION_GUIDE_DEFINITION_RESOURCE_INFO,
    backbone
);

/// Page/Section in the Guide
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationGuideDefinitionPage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// Where to find that page
    #[serde(flatten, deserialize_with = "crate::element::deserialize_choice")]
    pub name: Option<ImplementationGuidePageName>,

    /// Short title shown for navigational assistance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// html | markdown | xml | generated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation: Option<String>,

    /// Nested Pages / Sections
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub page: Vec<ImplementationGuideDefinitionPage>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static IMPLEMENTATION_GUIDE_DEFINITION_PAGE_INFO: TypeInfo = TypeInfo {
    name: "ImplementationGuideDefinitionPage",
    path: "ImplementationGuide.definition.page",
    kind: TypeKind::Backbone,
    base: "BackboneElement",
    url: None,
    short: "Page/Section in the Guide",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        common::MODIFIER_EXTENSION,
        FieldDescriptor::new(
            "name",
            &[
                TypeRef::primitive("url"),
                reference(profiles!["Binary"]),
            ],
            Cardinality::REQUIRED,
            "Where to find that page",
        ),
        FieldDescriptor::new(
            "title",
            STRING,
            Cardinality::REQUIRED,
            "Short title shown for navigational assistance",
        ),
        FieldDescriptor::new(
            "generation",
            CODE,
            Cardinality::REQUIRED,
            "html | markdown | xml | generated",
        )
        .binding(&value_sets::GUIDE_PAGE_GENERATION),
        FieldDescriptor::new(
            "page",
            &[TypeRef::complex(
                "BackboneElement",
                ImplementationGuideDefinitionPage::type_info,
            )],
            Cardinality::MANY,
            "Nested Pages / Sections",
        ),
    ],
};

impl_element!(
    ImplementationGuideDefinitionPage,
    IMPLEMENTATION_GUIDE_DEFINITION_PAGE_INFO,
    backbone
);

/// Defines how IG is built by tools
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationGuideDefinitionParameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// apply | path-resource | path-pages | path-tx-cache | expansion-parameter |
    /// rule-broken-links | generate-xml | generate-json | generate-turtle |
    /// html-template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Value for named type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static IMPLEMENTATION_GUIDE_DEFINITION_PARAMETER_INFO: TypeInfo = TypeInfo {
    name: "ImplementationGuideDefinitionParameter",
    path: "ImplementationGuide.definition.parameter",
    kind: TypeKind::Backbone,
    base: "BackboneElement",
    url: None,
    short: "Defines how IG is built by tools",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        common::MODIFIER_EXTENSION,
        FieldDescriptor::new(
            "code",
            CODE,
            Cardinality::REQUIRED,
            "apply | path-resource | path-pages | path-tx-cache | expansion-parameter | rule-broken-links | generate-xml | generate-json | generate-turtle | html-template",
        )
        .binding(&value_sets::GUIDE_PARAMETER_CODE),
        FieldDescriptor::new(
            "value",
            STRING,
            Cardinality::REQUIRED,
            "Value for named type",
        ),
    ],
};

impl_element!(
    ImplementationGuideDefinitionParameter,
    IMPLEMENTATION_GUIDE_DEFINITION_PARAMETER_INFO,
    backbone
);

/// A template for building resources
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationGuideDefinitionTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// Type of template specified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// The source location for the template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// The scope in which the template applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static IMPLEMENTATION_GUIDE_DEFINITION_TEMPLATE_INFO: TypeInfo = TypeInfo {
    name: "ImplementationGuideDefinitionTemplate",
    path: "ImplementationGuide.definition.template",
    kind: TypeKind::Backbone,
    base: "BackboneElement",
    url: None,
    short: "A template for building resources",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        common::MODIFIER_EXTENSION,
        FieldDescriptor::new("code", CODE, Cardinality::REQUIRED, "Type of template specified"),
        FieldDescriptor::new(
            "source",
            STRING,
            Cardinality::REQUIRED,
            "The source location for the template",
        ),
        FieldDescriptor::new(
            "scope",
            STRING,
            Cardinality::OPTIONAL,
            "The scope in which the template applies",
        ),
    ],
};

impl_element!(
    ImplementationGuideDefinitionTemplate,
    IMPLEMENTATION_GUIDE_DEFINITION_TEMPLATE_INFO,
    backbone
);

/// Information about an assembled IG
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationGuideManifest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// Location of rendered implementation guide
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendering: Option<String>,

    /// Resource in the implementation guide
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource: Vec<ImplementationGuideManifestResource>,

    /// HTML page within the parent IG
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub page: Vec<ImplementationGuideManifestPage>,

    /// Image within the IG
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub image: Vec<String>,

    /// Additional linkable file in IG
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub other: Vec<String>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static IMPLEMENTATION_GUIDE_MANIFEST_INFO: TypeInfo = TypeInfo {
    name: "ImplementationGuideManifest",
    path: "ImplementationGuide.manifest",
    kind: TypeKind::Backbone,
    base: "BackboneElement",
    url: None,
    short: "Information about an assembled IG",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        common::MODIFIER_EXTENSION,
        FieldDescriptor::new(
            "rendering",
            URL,
            Cardinality::OPTIONAL,
            "Location of rendered implementation guide",
        )
        .summary(),
        FieldDescriptor::new(
            "resource",
            &[TypeRef::complex(
                "BackboneElement",
                ImplementationGuideManifestResource::type_info,
            )],
            Cardinality::AT_LEAST_ONE,
            "Resource in the implementation guide",
        )
        .summary(),
        FieldDescriptor::new(
            "page",
            &[TypeRef::complex(
                "BackboneElement",
                ImplementationGuideManifestPage::type_info,
            )],
            Cardinality::MANY,
            "HTML page within the parent IG",
        ),
        FieldDescriptor::new("image", STRING, Cardinality::MANY, "Image within the IG"),
        FieldDescriptor::new(
            "other",
            STRING,
            Cardinality::MANY,
            "Additional linkable file in IG",
        ),
    ],
};

impl_element!(
    ImplementationGuideManifest,
    IMPLEMENTATION_GUIDE_MANIFEST_INFO,
    backbone
);

/// Resource in the implementation guide
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationGuideManifestResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// Location of the resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<Reference>,

    /// Is an example/What is this an example of?
    #[serde(flatten, deserialize_with = "crate::element::deserialize_choice")]
    pub example: Option<ImplementationGuideResourceExample>,

    /// Relative path for page in IG
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_path: Option<String>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static IMPLEMENTATION_GUIDE_MANIFEST_RESOURCE_INFO: TypeInfo = TypeInfo {
    name: "ImplementationGuideManifestResource",
    path: "ImplementationGuide.manifest.resource",
    kind: TypeKind::Backbone,
    base: "BackboneElement",
    url: None,
    short: "Resource in the implementation guide",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        common::MODIFIER_EXTENSION,
        FieldDescriptor::new(
            "reference",
            &[reference(profiles!["Resource"])],
            Cardinality::REQUIRED,
            "Location of the resource",
        )
        .summary(),
        FieldDescriptor::new(
            "example",
            RESOURCE_EXAMPLE_TYPES,
            Cardinality::OPTIONAL,
            "Is an example/What is this an example of?",
        ),
        FieldDescriptor::new(
            "relativePath",
            URL,
            Cardinality::OPTIONAL,
            "Relative path for page in IG",
        ),
    ],
};

impl_element!(
    ImplementationGuideManifestResource,
    IMPLEMENTATION_GUIDE_MANIFEST_RESOURCE_INFO,
    backbone
);

/// HTML page within the parent IG
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationGuideManifestPage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// HTML page name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Title of the page, for references
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Anchor available on the page
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub anchor: Vec<String>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static IMPLEMENTATION_GUIDE_MANIFEST_PAGE_INFO: TypeInfo = TypeInfo {
    name: "ImplementationGuideManifestPage",
    path: "ImplementationGuide.manifest.page",
    kind: TypeKind::Backbone,
    base: "BackboneElement",
    url: None,
    short: "HTML page within the parent IG",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        common::MODIFIER_EXTENSION,
        FieldDescriptor::new("name", STRING, Cardinality::REQUIRED, "HTML page name"),
        FieldDescriptor::new(
            "title",
            STRING,
            Cardinality::OPTIONAL,
            "Title of the page, for references",
        ),
        FieldDescriptor::new(
            "anchor",
            STRING,
            Cardinality::MANY,
            "Anchor available on the page",
        ),
    ],
};

impl_element!(
    ImplementationGuideManifestPage,
    IMPLEMENTATION_GUIDE_MANIFEST_PAGE_INFO,
    backbone
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use serde_json::json;

    #[test]
    fn example_choice_accepts_boolean_and_canonical() {
        let definition: ImplementationGuideDefinition = serde_json::from_value(json!({
            "resource": [
                {"reference": {"reference": "Patient/example"}, "exampleBoolean": true},
                {
                    "reference": {"reference": "Patient/ex2"},
                    "exampleCanonical": "http://example.org/StructureDefinition/my-patient",
                    "groupingId": "patients"
                }
            ],
            "grouping": [{"id": "patients", "name": "Patients"}]
        }))
        .unwrap();

        assert_eq!(
            definition.resource[0].example,
            Some(ImplementationGuideResourceExample::Boolean(true))
        );
        assert_eq!(definition.resources_in_grouping("patients").count(), 1);
    }

    #[test]
    fn grouping_id_declares_local_reference() {
        let field = ImplementationGuideDefinitionResource::type_info()
            .field("groupingId")
            .unwrap();
        let local = field.local_ref.unwrap();
        assert_eq!(local.target_path, "ImplementationGuide.definition.grouping");
        assert_eq!(local.key, "id");
    }

    #[test]
    fn nested_pages_round_trip() {
        let input = json!({
            "nameUrl": "index.html",
            "title": "Home",
            "generation": "html",
            "page": [{
                "nameUrl": "profiles.html",
                "title": "Profiles",
                "generation": "markdown",
                "page": [{"nameReference": {"reference": "Binary/b1"}, "title": "Deep", "generation": "generated"}]
            }]
        });
        let page: ImplementationGuideDefinitionPage =
            serde_json::from_value(input.clone()).unwrap();
        assert!(matches!(
            page.page[0].page[0].name,
            Some(ImplementationGuidePageName::Reference(_))
        ));
        assert_eq!(serde_json::to_value(&page).unwrap(), input);
    }
}
