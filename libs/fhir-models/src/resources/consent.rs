//! Consent resource
//!
//! A record of a healthcare consumer's choices, which permits or denies
//! identified recipient(s) or recipient role(s) to perform one or more actions
//! within a given policy context, for specific purposes and periods of time.

use super::AnyResource;
use crate::common::{self, *};
use crate::datatypes::{
    Attachment, CodeableConcept, Coding, Extension, Identifier, Meta, Narrative, Period, Reference,
};
use crate::descriptor::{Cardinality, FieldDescriptor, TypeInfo, TypeKind, TypeRef};
use crate::element::{Element, PrimitiveElements, ResourceTypeTag};
use crate::value_sets;
use serde::{Deserialize, Serialize};

choice_type! {
    /// `Consent.source[x]`
    ConsentSource {
        Attachment(Attachment) => "sourceAttachment",
        Reference(Reference) => "sourceReference",
    }
}

/// A healthcare consumer's choices to permit or deny recipients or roles to
/// perform actions for specific purposes and periods of time
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Consent {
    #[serde(rename = "resourceType", default)]
    pub resource_type: ResourceTypeTag<Consent>,

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

    /// Identifier for this record (external references)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,

    /// draft | proposed | active | rejected | inactive | entered-in-error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Which of the four areas this resource covers (extensible)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<CodeableConcept>,

    /// Classification of the consent statement - for indexing/retrieval
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category: Vec<CodeableConcept>,

    /// Who the consent applies to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient: Option<Reference>,

    /// When this Consent was created or indexed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,

    /// Who is agreeing to the policy and rules
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub performer: Vec<Reference>,

    /// Custodian of the consent
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub organization: Vec<Reference>,

    /// Source from which this consent is taken
    #[serde(flatten, deserialize_with = "crate::element::deserialize_choice")]
    pub source: Option<ConsentSource>,

    /// Policies covered by this consent
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub policy: Vec<ConsentPolicy>,

    /// Regulation that this consents to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_rule: Option<CodeableConcept>,

    /// Consent Verified by patient or family
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub verification: Vec<ConsentVerification>,

    /// Constraints to the base Consent.policyRule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provision: Option<ConsentProvision>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

const CONSENT_ACTORS: &[&str] = profiles![
    "Organization",
    "Patient",
    "Practitioner",
    "RelatedPerson",
    "PractitionerRole",
];

static CONSENT_INFO: TypeInfo = TypeInfo {
    name: "Consent",
    path: "Consent",
    kind: TypeKind::Resource,
    base: "DomainResource",
    url: Some("http://hl7.org/fhir/StructureDefinition/Consent"),
    short: "A healthcare consumer's choices to permit or deny recipients or roles to perform actions for specific purposes and periods of time",
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
            "identifier",
            IDENTIFIER,
            Cardinality::MANY,
            "Identifier for this record (external references)",
        )
        .summary(),
        FieldDescriptor::new(
            "status",
            CODE,
            Cardinality::REQUIRED,
            "draft | proposed | active | rejected | inactive | entered-in-error",
        )
        .binding(&value_sets::CONSENT_STATE)
        .modifier()
        .summary(),
        FieldDescriptor::new(
            "scope",
            CODEABLE_CONCEPT,
            Cardinality::REQUIRED,
            "Which of the four areas this resource covers (extensible)",
        )
        .binding(&value_sets::CONSENT_SCOPE)
        .modifier()
        .summary(),
        FieldDescriptor::new(
            "category",
            CODEABLE_CONCEPT,
            Cardinality::AT_LEAST_ONE,
            "Classification of the consent statement - for indexing/retrieval",
        )
        .binding(&value_sets::CONSENT_CATEGORY)
        .summary(),
        FieldDescriptor::new(
            "patient",
            &[reference(profiles!["Patient"])],
            Cardinality::OPTIONAL,
            "Who the consent applies to",
        )
        .summary(),
        FieldDescriptor::new(
            "dateTime",
            DATE_TIME,
            Cardinality::OPTIONAL,
            "When this Consent was created or indexed",
        )
        .summary(),
        FieldDescriptor::new(
            "performer",
            &[reference(CONSENT_ACTORS)],
            Cardinality::MANY,
            "Who is agreeing to the policy and rules",
        )
        .summary(),
        FieldDescriptor::new(
            "organization",
            &[reference(profiles!["Organization"])],
            Cardinality::MANY,
            "Custodian of the consent",
        )
        .summary(),
        FieldDescriptor::new(
            "source",
            &[
                TypeRef::complex("Attachment", Attachment::type_info),
                reference(profiles![
                    "Consent",
                    "DocumentReference",
                    "Contract",
                    "QuestionnaireResponse",
                ]),
            ],
            Cardinality::OPTIONAL,
            "Source from which this consent is taken",
        )
        .summary(),
        FieldDescriptor::new(
            "policy",
            &[TypeRef::complex("BackboneElement", ConsentPolicy::type_info)],
            Cardinality::MANY,
            "Policies covered by this consent",
        ),
        FieldDescriptor::new(
            "policyRule",
            CODEABLE_CONCEPT,
            Cardinality::OPTIONAL,
            "Regulation that this consents to",
        )
        .binding(&value_sets::CONSENT_POLICY)
        .summary(),
        FieldDescriptor::new(
            "verification",
            &[TypeRef::complex("BackboneElement", ConsentVerification::type_info)],
            Cardinality::MANY,
            "Consent Verified by patient or family",
        )
        .summary(),
        FieldDescriptor::new(
            "provision",
            &[TypeRef::complex("BackboneElement", ConsentProvision::type_info)],
            Cardinality::OPTIONAL,
            "Constraints to the base Consent.policyRule",
        )
        .summary(),
    ],
};

impl_resource!(Consent, CONSENT_INFO);

impl Consent {
    /// Depth-first walk over the provision tree
    pub fn provisions(&self) -> Vec<&ConsentProvision> {
        let mut out = Vec::new();
        if let Some(root) = &self.provision {
            root.collect_into(&mut out);
        }
        out
    }
}

/// Policies covered by this consent
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConsentPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// Enforcement source for policy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority: Option<String>,

    /// Specific policy covered by this consent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static CONSENT_POLICY_INFO: TypeInfo = TypeInfo {
    name: "ConsentPolicy",
    path: "Consent.policy",
    kind: TypeKind::Backbone,
    base: "BackboneElement",
    url: None,
    short: "Policies covered by this consent",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        common::MODIFIER_EXTENSION,
        FieldDescriptor::new(
            "authority",
            URI,
            Cardinality::OPTIONAL,
            "Enforcement source for policy",
        ),
        FieldDescriptor::new(
            "uri",
            URI,
            Cardinality::OPTIONAL,
            "Specific policy covered by this consent",
        ),
    ],
};

impl_element!(ConsentPolicy, CONSENT_POLICY_INFO, backbone);

/// Consent Verified by patient or family
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConsentVerification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// Has been verified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,

    /// Person who verified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_with: Option<Reference>,

    /// When consent verified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_date: Option<String>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static CONSENT_VERIFICATION_INFO: TypeInfo = TypeInfo {
    name: "ConsentVerification",
    path: "Consent.verification",
    kind: TypeKind::Backbone,
    base: "BackboneElement",
    url: None,
    short: "Consent Verified by patient or family",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        common::MODIFIER_EXTENSION,
        FieldDescriptor::new("verified", BOOLEAN, Cardinality::REQUIRED, "Has been verified")
            .summary(),
        FieldDescriptor::new(
            "verifiedWith",
            &[reference(profiles!["Patient", "RelatedPerson"])],
            Cardinality::OPTIONAL,
            "Person who verified",
        ),
        FieldDescriptor::new(
            "verificationDate",
            DATE_TIME,
            Cardinality::OPTIONAL,
            "When consent verified",
        ),
    ],
};

impl_element!(ConsentVerification, CONSENT_VERIFICATION_INFO, backbone);

/// Constraints to the base Consent.policyRule
///
/// Provisions nest: each may carry exceptions to its parent as child
/// provisions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConsentProvision {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// deny | permit
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    /// Timeframe for this rule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// Who|what controlled by this rule (or group, by role)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actor: Vec<ConsentProvisionActor>,

    /// Actions controlled by this rule
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub action: Vec<CodeableConcept>,

    /// Security Labels that define affected resources
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security_label: Vec<Coding>,

    /// Context of activities covered by this rule
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub purpose: Vec<Coding>,

    /// e.g. Resource Type, Profile, CDA, etc.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub class: Vec<Coding>,

    /// e.g. LOINC or SNOMED CT code, etc. in the content
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub code: Vec<CodeableConcept>,

    /// Timeframe for data controlled by this rule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_period: Option<Period>,

    /// Data controlled by this rule
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<ConsentProvisionData>,

    /// Nested Exception Rules
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub provision: Vec<ConsentProvision>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

impl ConsentProvision {
    pub fn permit() -> Self {
        Self {
            type_: Some("permit".to_string()),
            ..Self::default()
        }
    }

    pub fn deny() -> Self {
        Self {
            type_: Some("deny".to_string()),
            ..Self::default()
        }
    }

    /// Nesting depth of the deepest chain below and including this provision
    pub fn depth(&self) -> usize {
        1 + self.provision.iter().map(Self::depth).max().unwrap_or(0)
    }

    fn collect_into<'a>(&'a self, out: &mut Vec<&'a ConsentProvision>) {
        out.push(self);
        for child in &self.provision {
            child.collect_into(out);
        }
    }
}

static CONSENT_PROVISION_INFO: TypeInfo = TypeInfo {
    name: "ConsentProvision",
    path: "Consent.provision",
    kind: TypeKind::Backbone,
    base: "BackboneElement",
    url: None,
    short: "Constraints to the base Consent.policyRule",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        common::MODIFIER_EXTENSION,
        FieldDescriptor::new("type", CODE, Cardinality::OPTIONAL, "deny | permit")
            .rust_name("type_")
            .binding(&value_sets::CONSENT_PROVISION_TYPE)
            .summary(),
        FieldDescriptor::new("period", PERIOD, Cardinality::OPTIONAL, "Timeframe for this rule")
            .summary(),
        FieldDescriptor::new(
            "actor",
            &[TypeRef::complex("BackboneElement", ConsentProvisionActor::type_info)],
            Cardinality::MANY,
            "Who|what controlled by this rule (or group, by role)",
        ),
        FieldDescriptor::new(
            "action",
            CODEABLE_CONCEPT,
            Cardinality::MANY,
            "Actions controlled by this rule",
        )
        .binding(&value_sets::CONSENT_ACTION)
        .summary(),
        FieldDescriptor::new(
            "securityLabel",
            CODING,
            Cardinality::MANY,
            "Security Labels that define affected resources",
        )
        .binding(&value_sets::SECURITY_LABELS)
        .summary(),
        FieldDescriptor::new(
            "purpose",
            CODING,
            Cardinality::MANY,
            "Context of activities covered by this rule",
        )
        .binding(&value_sets::PURPOSE_OF_USE)
        .summary(),
        FieldDescriptor::new(
            "class",
            CODING,
            Cardinality::MANY,
            "e.g. Resource Type, Profile, CDA, etc.",
        )
        .binding(&value_sets::CONSENT_CONTENT_CLASS)
        .summary(),
        FieldDescriptor::new(
            "code",
            CODEABLE_CONCEPT,
            Cardinality::MANY,
            "e.g. LOINC or SNOMED CT code, etc. in the content",
        )
        .binding(&value_sets::CONSENT_CONTENT_CODE)
        .summary(),
        FieldDescriptor::new(
            "dataPeriod",
            PERIOD,
            Cardinality::OPTIONAL,
            "Timeframe for data controlled by this rule",
        )
        .summary(),
        FieldDescriptor::new(
            "data",
            &[TypeRef::complex("BackboneElement", ConsentProvisionData::type_info)],
            Cardinality::MANY,
            "Data controlled by this rule",
        )
        .summary(),
        FieldDescriptor::new(
            "provision",
            &[TypeRef::complex("BackboneElement", ConsentProvision::type_info)],
            Cardinality::MANY,
            "Nested Exception Rules",
        ),
    ],
};

impl_element!(ConsentProvision, CONSENT_PROVISION_INFO, backbone);

/// Who|what controlled by this rule (or group, by role)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConsentProvisionActor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// How the actor is involved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<CodeableConcept>,

    /// Resource for the actor (or group, by role)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<Reference>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static CONSENT_PROVISION_ACTOR_INFO: TypeInfo = TypeInfo {
    name: "ConsentProvisionActor",
    path: "Consent.provision.actor",
    kind: TypeKind::Backbone,
    base: "BackboneElement",
    url: None,
    short: "Who|what controlled by this rule (or group, by role)",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        common::MODIFIER_EXTENSION,
        FieldDescriptor::new(
            "role",
            CODEABLE_CONCEPT,
            Cardinality::REQUIRED,
            "How the actor is involved",
        )
        .binding(&value_sets::SECURITY_ROLE_TYPE),
        FieldDescriptor::new(
            "reference",
            &[reference(profiles![
                "Device",
                "Group",
                "CareTeam",
                "Organization",
                "Patient",
                "Practitioner",
                "RelatedPerson",
                "PractitionerRole",
            ])],
            Cardinality::REQUIRED,
            "Resource for the actor (or group, by role)",
        ),
    ],
};

impl_element!(ConsentProvisionActor, CONSENT_PROVISION_ACTOR_INFO, backbone);

/// Data controlled by this rule
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConsentProvisionData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// instance | related | dependents | authoredby
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,

    /// The actual data reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<Reference>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static CONSENT_PROVISION_DATA_INFO: TypeInfo = TypeInfo {
    name: "ConsentProvisionData",
    path: "Consent.provision.data",
    kind: TypeKind::Backbone,
    base: "BackboneElement",
    url: None,
    short: "Data controlled by this rule",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        common::MODIFIER_EXTENSION,
        FieldDescriptor::new(
            "meaning",
            CODE,
            Cardinality::REQUIRED,
            "instance | related | dependents | authoredby",
        )
        .binding(&value_sets::CONSENT_DATA_MEANING)
        .summary(),
        FieldDescriptor::new(
            "reference",
            &[reference(profiles!["Resource"])],
            Cardinality::REQUIRED,
            "The actual data reference",
        )
        .summary(),
    ],
};

impl_element!(ConsentProvisionData, CONSENT_PROVISION_DATA_INFO, backbone);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::ExtensionValue;
    use crate::element::{Element, Resource};
    use serde_json::json;

    #[test]
    fn source_choice_round_trips_under_suffixed_key() {
        let mut consent = Consent::new();
        consent.status = Some("active".into());
        consent.source = Some(ConsentSource::Reference(Reference::new(
            "DocumentReference/scan-1",
        )));

        let value = serde_json::to_value(&consent).unwrap();
        assert_eq!(value["resourceType"], "Consent");
        assert_eq!(value["sourceReference"]["reference"], "DocumentReference/scan-1");
        assert!(value.get("sourceAttachment").is_none());

        let back: Consent = serde_json::from_value(value).unwrap();
        assert_eq!(back, consent);
    }

    #[test]
    fn primitive_element_metadata_round_trips() {
        let input = json!({
            "resourceType": "Consent",
            "status": "active",
            "_status": {
                "id": "s1",
                "extension": [{"url": "http://example.org/ext", "valueString": "x"}]
            },
            "provision": {"type": "deny", "_type": {"id": "t1"}}
        });
        let consent: Consent = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(consent.status.as_deref(), Some("active"));
        assert_eq!(consent.primitive_elements.get("status").unwrap()["id"], "s1");

        let extensions = consent.primitive_elements.extensions("status").unwrap();
        assert_eq!(extensions[0].value, Some(ExtensionValue::String("x".into())));

        let provision = consent.provision.as_ref().unwrap();
        assert_eq!(provision.primitive_elements().get("type"), Some(&json!({"id": "t1"})));
        assert_eq!(serde_json::to_value(&consent).unwrap(), input);
    }

    #[test]
    fn malformed_choice_alternative_is_an_error() {
        let err = serde_json::from_value::<Consent>(json!({
            "resourceType": "Consent",
            "status": "active",
            "sourceReference": "DocumentReference/1"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("sourceReference"), "{}", err);

        let err = serde_json::from_value::<Consent>(json!({
            "resourceType": "Consent",
            "status": "active",
            "sourceAttachment": {"title": "scan"},
            "sourceReference": {"reference": "DocumentReference/1"}
        }))
        .unwrap_err();
        assert!(err.to_string().contains("only one of"), "{}", err);
    }

    #[test]
    fn wrong_resource_type_is_rejected() {
        let result: Result<Consent, _> =
            serde_json::from_value(json!({"resourceType": "Patient", "status": "active"}));
        assert!(result.is_err());
    }

    #[test]
    fn provision_tree_walk() {
        let mut root = ConsentProvision::deny();
        let mut middle = ConsentProvision::permit();
        middle.provision.push(ConsentProvision::deny());
        root.provision.push(middle);
        root.provision.push(ConsentProvision::permit());

        let consent = Consent {
            provision: Some(root),
            ..Consent::default()
        };
        assert_eq!(consent.provisions().len(), 4);
        assert_eq!(consent.provision.as_ref().map(|p| p.depth()), Some(3));
    }

    #[test]
    fn metadata_lookup_without_instance() {
        let info = Consent::type_info();
        assert_eq!(Consent::TYPE_NAME, "Consent");
        let status = info.field("status").unwrap();
        assert_eq!(status.cardinality, Cardinality::REQUIRED);
        assert_eq!(info.path_of(status), "Consent.status");

        let source = info.field("source[x]").unwrap();
        assert_eq!(info.path_of(source), "Consent.source[x]");
        let (field, ty) = info.resolve_wire_key("sourceAttachment").unwrap();
        assert_eq!(field.name, "source");
        assert_eq!(ty.code, "Attachment");

        let class = ConsentProvision::type_info().field("class").unwrap();
        assert_eq!(class.field_name(), "class");
    }
}
