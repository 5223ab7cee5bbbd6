//! PlanDefinition resource
//!
//! A pre-defined group of actions to be taken in particular circumstances,
//! often including conditional elements, options, and other decision points.
//! Actions nest arbitrarily deep through `action.action`.

use super::AnyResource;
use crate::common::{self, *};
use crate::datatypes::{
    CodeableConcept, ContactDetail, DataRequirement, Duration, Expression, Extension, Identifier,
    Meta, Narrative, Period, Quantity, Range, Reference, RelatedArtifact, Timing,
    TriggerDefinition, UsageContext,
};
use crate::descriptor::{Cardinality, FieldDescriptor, TypeInfo, TypeKind, TypeRef};
use crate::element::{Element, PrimitiveElements, ResourceTypeTag};
use crate::value_sets;
use serde::{Deserialize, Serialize};

const SUBJECT_TYPES: &[TypeRef] = &[
    TypeRef::complex("CodeableConcept", CodeableConcept::type_info),
    reference(profiles!["Group"]),
];

choice_type! {
    /// `PlanDefinition.subject[x]`
    PlanDefinitionSubject {
        CodeableConcept(CodeableConcept) => "subjectCodeableConcept",
        Reference(Reference) => "subjectReference",
    }
}

choice_type! {
    /// `PlanDefinition.action.subject[x]`
    PlanDefinitionActionSubject {
        CodeableConcept(CodeableConcept) => "subjectCodeableConcept",
        Reference(Reference) => "subjectReference",
    }
}

choice_type! {
    /// `PlanDefinition.goal.target.detail[x]`
    PlanDefinitionGoalTargetDetail {
        Quantity(Quantity) => "detailQuantity",
        Range(Range) => "detailRange",
        CodeableConcept(CodeableConcept) => "detailCodeableConcept",
    }
}

choice_type! {
    /// `PlanDefinition.action.relatedAction.offset[x]`
    PlanDefinitionRelatedActionOffset {
        Duration(Duration) => "offsetDuration",
        Range(Range) => "offsetRange",
    }
}

choice_type! {
    /// `PlanDefinition.action.timing[x]`
    PlanDefinitionActionTiming {
        DateTime(String) => "timingDateTime",
        Age(Quantity) => "timingAge",
        Period(Period) => "timingPeriod",
        Duration(Duration) => "timingDuration",
        Range(Range) => "timingRange",
        Timing(Timing) => "timingTiming",
    }
}

choice_type! {
    /// `PlanDefinition.action.definition[x]`
    PlanDefinitionActionDefinition {
        Canonical(String) => "definitionCanonical",
        Uri(String) => "definitionUri",
    }
}

/// The definition of a plan for a series of actions, independent of any
/// specific patient or context
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanDefinition {
    #[serde(rename = "resourceType", default)]
    pub resource_type: ResourceTypeTag<PlanDefinition>,

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

    /// Subordinate title of the plan definition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// order-set | clinical-protocol | eca-rule | workflow-definition
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<CodeableConcept>,

    /// draft | active | retired | unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub experimental: Option<bool>,

    /// Type of individual the plan definition is focused on
    #[serde(flatten, deserialize_with = "crate::element::deserialize_choice")]
    pub subject: Option<PlanDefinitionSubject>,

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

    /// Describes the clinical usage of the plan
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_review_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_period: Option<Period>,

    /// E.g. Education, Treatment, Assessment
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topic: Vec<CodeableConcept>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub author: Vec<ContactDetail>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub editor: Vec<ContactDetail>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviewer: Vec<ContactDetail>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub endorser: Vec<ContactDetail>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_artifact: Vec<RelatedArtifact>,

    /// Logic used by the plan definition
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub library: Vec<String>,

    /// What the plan is trying to accomplish
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub goal: Vec<PlanDefinitionGoal>,

    /// Action defined by the plan
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub action: Vec<PlanDefinitionAction>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

impl PlanDefinition {
    /// Every action in the plan, depth first
    pub fn actions(&self) -> Vec<&PlanDefinitionAction> {
        let mut out = Vec::new();
        for action in &self.action {
            action.collect_into(&mut out);
        }
        out
    }

    /// Look up an action anywhere in the tree by its element id
    pub fn find_action(&self, id: &str) -> Option<&PlanDefinitionAction> {
        self.actions()
            .into_iter()
            .find(|a| a.id.as_deref() == Some(id))
    }

    pub fn find_goal(&self, id: &str) -> Option<&PlanDefinitionGoal> {
        self.goal.iter().find(|g| g.id.as_deref() == Some(id))
    }
}

static PLAN_DEFINITION_INFO: TypeInfo = TypeInfo {
    name: "PlanDefinition",
    path: "PlanDefinition",
    kind: TypeKind::Resource,
    base: "DomainResource",
    url: Some("http://hl7.org/fhir/StructureDefinition/PlanDefinition"),
    short: "The definition of a plan for a series of actions, independent of any specific patient or context",
    fields: &[
        common::RESOURCE_ID,
        common::RESOURCE_META,
        common::IMPLICIT_RULES,
        common::LANGUAGE,
        common::TEXT,
        common::CONTAINED,
        common::RESOURCE_EXTENSION,
        common::RESOURCE_MODIFIER_EXTENSION,
        common::CANONICAL_URL,
        common::CANONICAL_IDENTIFIER,
        common::BUSINESS_VERSION,
        common::COMPUTABLE_NAME,
        common::TITLE,
        FieldDescriptor::new(
            "subtitle",
            STRING,
            Cardinality::OPTIONAL,
            "Subordinate title of the plan definition",
        ),
        FieldDescriptor::new(
            "type",
            CODEABLE_CONCEPT,
            Cardinality::OPTIONAL,
            "order-set | clinical-protocol | eca-rule | workflow-definition",
        )
        .rust_name("type_")
        .binding(&value_sets::PLAN_DEFINITION_TYPE)
        .summary(),
        common::PUBLICATION_STATUS,
        common::EXPERIMENTAL,
        FieldDescriptor::new(
            "subject",
            SUBJECT_TYPES,
            Cardinality::OPTIONAL,
            "Type of individual the plan definition is focused on",
        )
        .binding(&value_sets::SUBJECT_TYPE),
        common::DATE_LAST_CHANGED,
        common::PUBLISHER,
        common::CONTACT,
        common::DESCRIPTION,
        common::USE_CONTEXT,
        common::JURISDICTION,
        common::PURPOSE,
        FieldDescriptor::new(
            "usage",
            STRING,
            Cardinality::OPTIONAL,
            "Describes the clinical usage of the plan",
        ),
        common::COPYRIGHT,
        FieldDescriptor::new(
            "approvalDate",
            DATE,
            Cardinality::OPTIONAL,
            "When the plan definition was approved by publisher",
        ),
        FieldDescriptor::new(
            "lastReviewDate",
            DATE,
            Cardinality::OPTIONAL,
            "When the plan definition was last reviewed",
        ),
        FieldDescriptor::new(
            "effectivePeriod",
            PERIOD,
            Cardinality::OPTIONAL,
            "When the plan definition is expected to be used",
        )
        .summary(),
        FieldDescriptor::new(
            "topic",
            CODEABLE_CONCEPT,
            Cardinality::MANY,
            "E.g. Education, Treatment, Assessment",
        )
        .binding(&value_sets::DEFINITION_TOPIC),
        FieldDescriptor::new("author", CONTACT_DETAIL, Cardinality::MANY, "Who authored the content"),
        FieldDescriptor::new("editor", CONTACT_DETAIL, Cardinality::MANY, "Who edited the content"),
        FieldDescriptor::new(
            "reviewer",
            CONTACT_DETAIL,
            Cardinality::MANY,
            "Who reviewed the content",
        ),
        FieldDescriptor::new(
            "endorser",
            CONTACT_DETAIL,
            Cardinality::MANY,
            "Who endorsed the content",
        ),
        FieldDescriptor::new(
            "relatedArtifact",
            RELATED_ARTIFACT,
            Cardinality::MANY,
            "Additional documentation, citations",
        ),
        FieldDescriptor::new(
            "library",
            &[TypeRef::canonical(profiles!["Library"])],
            Cardinality::MANY,
            "Logic used by the plan definition",
        ),
        FieldDescriptor::new(
            "goal",
            &[TypeRef::complex("BackboneElement", PlanDefinitionGoal::type_info)],
            Cardinality::MANY,
            "What the plan is trying to accomplish",
        ),
        FieldDescriptor::new(
            "action",
            &[TypeRef::complex("BackboneElement", PlanDefinitionAction::type_info)],
            Cardinality::MANY,
            "Action defined by the plan",
        ),
    ],
};

impl_resource!(PlanDefinition, PLAN_DEFINITION_INFO);

/// What the plan is trying to accomplish
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanDefinitionGoal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// E.g. Treatment, dietary, behavioral
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CodeableConcept>,

    /// Code or text describing the goal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<CodeableConcept>,

    /// high-priority | medium-priority | low-priority
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<CodeableConcept>,

    /// When goal pursuit begins
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<CodeableConcept>,

    /// What does the goal address
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<CodeableConcept>,

    /// Supporting documentation for the goal
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documentation: Vec<RelatedArtifact>,

    /// Target outcome for the goal
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub target: Vec<PlanDefinitionGoalTarget>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static PLAN_DEFINITION_GOAL_INFO: TypeInfo = TypeInfo {
    name: "PlanDefinitionGoal",
    path: "PlanDefinition.goal",
    kind: TypeKind::Backbone,
    base: "BackboneElement",
    url: None,
    short: "What the plan is trying to accomplish",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        common::MODIFIER_EXTENSION,
        FieldDescriptor::new(
            "category",
            CODEABLE_CONCEPT,
            Cardinality::OPTIONAL,
            "E.g. Treatment, dietary, behavioral",
        )
        .binding(&value_sets::GOAL_CATEGORY),
        FieldDescriptor::new(
            "description",
            CODEABLE_CONCEPT,
            Cardinality::REQUIRED,
            "Code or text describing the goal",
        )
        .binding(&value_sets::GOAL_DESCRIPTION),
        FieldDescriptor::new(
            "priority",
            CODEABLE_CONCEPT,
            Cardinality::OPTIONAL,
            "high-priority | medium-priority | low-priority",
        )
        .binding(&value_sets::GOAL_PRIORITY),
        FieldDescriptor::new(
            "start",
            CODEABLE_CONCEPT,
            Cardinality::OPTIONAL,
            "When goal pursuit begins",
        )
        .binding(&value_sets::GOAL_START_EVENT),
        FieldDescriptor::new(
            "addresses",
            CODEABLE_CONCEPT,
            Cardinality::MANY,
            "What does the goal address",
        )
        .binding(&value_sets::CONDITION_CODE),
        FieldDescriptor::new(
            "documentation",
            RELATED_ARTIFACT,
            Cardinality::MANY,
            "Supporting documentation for the goal",
        ),
        FieldDescriptor::new(
            "target",
            &[TypeRef::complex("BackboneElement", PlanDefinitionGoalTarget::type_info)],
            Cardinality::MANY,
            "Target outcome for the goal",
        ),
    ],
};

impl_element!(PlanDefinitionGoal, PLAN_DEFINITION_GOAL_INFO, backbone);

/// Target outcome for the goal
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanDefinitionGoalTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// The parameter whose value is to be tracked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measure: Option<CodeableConcept>,

    /// The target value to be achieved
    #[serde(flatten, deserialize_with = "crate::element::deserialize_choice")]
    pub detail: Option<PlanDefinitionGoalTargetDetail>,

    /// Reach goal within
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<Duration>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static PLAN_DEFINITION_GOAL_TARGET_INFO: TypeInfo = TypeInfo {
    name: "PlanDefinitionGoalTarget",
    path: "PlanDefinition.goal.target",
    kind: TypeKind::Backbone,
    base: "BackboneElement",
    url: None,
    short: "Target outcome for the goal",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        common::MODIFIER_EXTENSION,
        FieldDescriptor::new(
            "measure",
            CODEABLE_CONCEPT,
            Cardinality::OPTIONAL,
            "The parameter whose value is to be tracked",
        )
        .binding(&value_sets::GOAL_TARGET_MEASURE),
        FieldDescriptor::new(
            "detail",
            &[
                TypeRef::complex("Quantity", Quantity::type_info),
                TypeRef::complex("Range", Range::type_info),
                TypeRef::complex("CodeableConcept", CodeableConcept::type_info),
            ],
            Cardinality::OPTIONAL,
            "The target value to be achieved",
        ),
        FieldDescriptor::new("due", DURATION, Cardinality::OPTIONAL, "Reach goal within"),
    ],
};

impl_element!(
    PlanDefinitionGoalTarget,
    PLAN_DEFINITION_GOAL_TARGET_INFO,
    backbone
);

/// Action defined by the plan
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanDefinitionAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// User-visible prefix for the action (e.g. 1. or A.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Static text equivalent of the action, used if the dynamic aspects
    /// cannot be interpreted by the receiving system
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_equivalent: Option<String>,

    /// routine | urgent | asap | stat
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub code: Vec<CodeableConcept>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reason: Vec<CodeableConcept>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documentation: Vec<RelatedArtifact>,

    /// What goals this action supports
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub goal_id: Vec<String>,

    #[serde(flatten, deserialize_with = "crate::element::deserialize_choice")]
    pub subject: Option<PlanDefinitionActionSubject>,

    /// When the action should be triggered
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trigger: Vec<TriggerDefinition>,

    /// Whether or not the action is applicable
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub condition: Vec<PlanDefinitionActionCondition>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub input: Vec<DataRequirement>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub output: Vec<DataRequirement>,

    /// Relationship to another action
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_action: Vec<PlanDefinitionActionRelatedAction>,

    /// When the action should take place
    #[serde(flatten, deserialize_with = "crate::element::deserialize_choice")]
    pub timing: Option<PlanDefinitionActionTiming>,

    /// Who should participate in the action
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub participant: Vec<PlanDefinitionActionParticipant>,

    /// create | update | remove | fire-event
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<CodeableConcept>,

    /// visual-group | logical-group | sentence-group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouping_behavior: Option<String>,

    /// any | all | all-or-none | exactly-one | at-most-one | one-or-more
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_behavior: Option<String>,

    /// must | could | must-unless-documented
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_behavior: Option<String>,

    /// yes | no
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precheck_behavior: Option<String>,

    /// single | multiple
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardinality_behavior: Option<String>,

    /// Description of the activity to be performed
    #[serde(flatten, deserialize_with = "crate::element::deserialize_choice")]
    pub definition: Option<PlanDefinitionActionDefinition>,

    /// Transform to apply the template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,

    /// Dynamic aspects of the definition
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dynamic_value: Vec<PlanDefinitionActionDynamicValue>,

    /// A sub-action
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub action: Vec<PlanDefinitionAction>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

impl PlanDefinitionAction {
    fn collect_into<'a>(&'a self, out: &mut Vec<&'a PlanDefinitionAction>) {
        out.push(self);
        for child in &self.action {
            child.collect_into(out);
        }
    }
}

static PLAN_DEFINITION_ACTION_INFO: TypeInfo = TypeInfo {
    name: "PlanDefinitionAction",
    path: "PlanDefinition.action",
    kind: TypeKind::Backbone,
    base: "BackboneElement",
    url: None,
    short: "Action defined by the plan",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        common::MODIFIER_EXTENSION,
        FieldDescriptor::new(
            "prefix",
            STRING,
            Cardinality::OPTIONAL,
            "User-visible prefix for the action (e.g. 1. or A.)",
        ),
        FieldDescriptor::new("title", STRING, Cardinality::OPTIONAL, "User-visible title"),
        FieldDescriptor::new(
            "description",
            STRING,
            Cardinality::OPTIONAL,
            "Brief description of the action",
        )
        .summary(),
        FieldDescriptor::new(
            "textEquivalent",
            STRING,
            Cardinality::OPTIONAL,
            "Static text equivalent of the action, used if the dynamic aspects cannot be interpreted by the receiving system",
        )
        .summary(),
        FieldDescriptor::new(
            "priority",
            CODE,
            Cardinality::OPTIONAL,
            "routine | urgent | asap | stat",
        )
        .binding(&value_sets::REQUEST_PRIORITY),
        FieldDescriptor::new(
            "code",
            CODEABLE_CONCEPT,
            Cardinality::MANY,
            "Code representing the meaning of the action or sub-actions",
        )
        .binding(&value_sets::ACTION_CODE),
        FieldDescriptor::new(
            "reason",
            CODEABLE_CONCEPT,
            Cardinality::MANY,
            "Why the action should be performed",
        )
        .binding(&value_sets::ACTION_REASON_CODE),
        FieldDescriptor::new(
            "documentation",
            RELATED_ARTIFACT,
            Cardinality::MANY,
            "Supporting documentation for the intended performer of the action",
        ),
        FieldDescriptor::new(
            "goalId",
            ID,
            Cardinality::MANY,
            "What goals this action supports",
        )
        .local_ref("PlanDefinition.goal", "id"),
        FieldDescriptor::new(
            "subject",
            SUBJECT_TYPES,
            Cardinality::OPTIONAL,
            "Type of individual the action is focused on",
        )
        .binding(&value_sets::SUBJECT_TYPE),
        FieldDescriptor::new(
            "trigger",
            TRIGGER_DEFINITION,
            Cardinality::MANY,
            "When the action should be triggered",
        ),
        FieldDescriptor::new(
            "condition",
            &[TypeRef::complex(
                "BackboneElement",
                PlanDefinitionActionCondition::type_info,
            )],
            Cardinality::MANY,
            "Whether or not the action is applicable",
        ),
        FieldDescriptor::new("input", DATA_REQUIREMENT, Cardinality::MANY, "Input data requirements"),
        FieldDescriptor::new(
            "output",
            DATA_REQUIREMENT,
            Cardinality::MANY,
            "Output data definition",
        ),
        FieldDescriptor::new(
            "relatedAction",
            &[TypeRef::complex(
                "BackboneElement",
                PlanDefinitionActionRelatedAction::type_info,
            )],
            Cardinality::MANY,
            "Relationship to another action",
        ),
        FieldDescriptor::new(
            "timing",
            &[
                TypeRef::primitive("dateTime"),
                TypeRef::complex("Age", Quantity::type_info),
                TypeRef::complex("Period", Period::type_info),
                TypeRef::complex("Duration", Quantity::type_info),
                TypeRef::complex("Range", Range::type_info),
                TypeRef::complex("Timing", Timing::type_info),
            ],
            Cardinality::OPTIONAL,
            "When the action should take place",
        ),
        FieldDescriptor::new(
            "participant",
            &[TypeRef::complex(
                "BackboneElement",
                PlanDefinitionActionParticipant::type_info,
            )],
            Cardinality::MANY,
            "Who should participate in the action",
        ),
        FieldDescriptor::new(
            "type",
            CODEABLE_CONCEPT,
            Cardinality::OPTIONAL,
            "create | update | remove | fire-event",
        )
        .rust_name("type_")
        .binding(&value_sets::ACTION_TYPE),
        FieldDescriptor::new(
            "groupingBehavior",
            CODE,
            Cardinality::OPTIONAL,
            "visual-group | logical-group | sentence-group",
        )
        .binding(&value_sets::ACTION_GROUPING_BEHAVIOR),
        FieldDescriptor::new(
            "selectionBehavior",
            CODE,
            Cardinality::OPTIONAL,
            "any | all | all-or-none | exactly-one | at-most-one | one-or-more",
        )
        .binding(&value_sets::ACTION_SELECTION_BEHAVIOR),
        FieldDescriptor::new(
            "requiredBehavior",
            CODE,
            Cardinality::OPTIONAL,
            "must | could | must-unless-documented",
        )
        .binding(&value_sets::ACTION_REQUIRED_BEHAVIOR),
        FieldDescriptor::new("precheckBehavior", CODE, Cardinality::OPTIONAL, "yes | no")
            .binding(&value_sets::ACTION_PRECHECK_BEHAVIOR),
        FieldDescriptor::new(
            "cardinalityBehavior",
            CODE,
            Cardinality::OPTIONAL,
            "single | multiple",
        )
        .binding(&value_sets::ACTION_CARDINALITY_BEHAVIOR),
        FieldDescriptor::new(
            "definition",
            &[
                TypeRef::canonical(profiles![
                    "ActivityDefinition",
                    "PlanDefinition",
                    "Questionnaire"
                ]),
                TypeRef::primitive("uri"),
            ],
            Cardinality::OPTIONAL,
            "Description of the activity to be performed",
        ),
        FieldDescriptor::new(
            "transform",
            &[TypeRef::canonical(profiles!["StructureMap"])],
            Cardinality::OPTIONAL,
            "Transform to apply the template",
        ),
        FieldDescriptor::new(
            "dynamicValue",
            &[TypeRef::complex(
                "BackboneElement",
                PlanDefinitionActionDynamicValue::type_info,
            )],
            Cardinality::MANY,
            "Dynamic aspects of the definition",
        ),
        FieldDescriptor::new(
            "action",
            &[TypeRef::complex("BackboneElement", PlanDefinitionAction::type_info)],
            Cardinality::MANY,
            "A sub-action",
        ),
    ],
};

impl_element!(PlanDefinitionAction, PLAN_DEFINITION_ACTION_INFO, backbone);

/// Whether or not the action is applicable
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanDefinitionActionCondition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// applicability | start | stop
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Boolean-valued expression
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<Expression>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static PLAN_DEFINITION_ACTION_CONDITION_INFO: TypeInfo = TypeInfo {
    name: "PlanDefinitionActionCondition",
    path: "PlanDefinition.action.condition",
    kind: TypeKind::Backbone,
    base: "BackboneElement",
    url: None,
    short: "Whether or not the action is applicable",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        common::MODIFIER_EXTENSION,
        FieldDescriptor::new(
            "kind",
            CODE,
            Cardinality::REQUIRED,
            "applicability | start | stop",
        )
        .binding(&value_sets::ACTION_CONDITION_KIND),
        FieldDescriptor::new(
            "expression",
            EXPRESSION,
            Cardinality::OPTIONAL,
            "Boolean-valued expression",
        ),
    ],
};

impl_element!(
    PlanDefinitionActionCondition,
    PLAN_DEFINITION_ACTION_CONDITION_INFO,
    backbone
);

/// Relationship to another action
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanDefinitionActionRelatedAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// What action is this related to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,

    /// before-start | before | before-end | concurrent-with-start |
    /// concurrent | concurrent-with-end | after-start | after | after-end
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,

    /// Time offset for the relationship
    #[serde(flatten, deserialize_with = "crate::element::deserialize_choice")]
    pub offset: Option<PlanDefinitionRelatedActionOffset>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static PLAN_DEFINITION_ACTION_RELATED_ACTION_INFO: TypeInfo = TypeInfo {
    name: "PlanDefinitionActionRelatedAction",
    path: "PlanDefinition.action.relatedAction",
    kind: TypeKind::Backbone,
    base: "BackboneElement",
    url: None,
    short: "Relationship to another action",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        common::MODIFIER_EXTENSION,
        FieldDescriptor::new(
            "actionId",
            ID,
            Cardinality::REQUIRED,
            "What action is this related to",
        )
        .local_ref("PlanDefinition.action", "id"),
        FieldDescriptor::new(
            "relationship",
            CODE,
            Cardinality::REQUIRED,
            "before-start | before | before-end | concurrent-with-start | concurrent | concurrent-with-end | after-start | after | after-end",
        )
        .binding(&value_sets::ACTION_RELATIONSHIP_TYPE),
        FieldDescriptor::new(
            "offset",
            &[
                TypeRef::complex("Duration", Quantity::type_info),
                TypeRef::complex("Range", Range::type_info),
            ],
            Cardinality::OPTIONAL,
            "Time offset for the relationship",
        ),
    ],
};

impl_element!(
    PlanDefinitionActionRelatedAction,
    PLAN_DEFINITION_ACTION_RELATED_ACTION_INFO,
    backbone
);

/// Who should participate in the action
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanDefinitionActionParticipant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// patient | practitioner | related-person | device
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    /// E.g. Nurse, Surgeon, Parent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<CodeableConcept>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static PLAN_DEFINITION_ACTION_PARTICIPANT_INFO: TypeInfo = TypeInfo {
    name: "PlanDefinitionActionParticipant",
    path: "PlanDefinition.action.participant",
    kind: TypeKind::Backbone,
    base: "BackboneElement",
    url: None,
    short: "Who should participate in the action",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        common::MODIFIER_EXTENSION,
        FieldDescriptor::new(
            "type",
            CODE,
            Cardinality::REQUIRED,
            "patient | practitioner | related-person | device",
        )
        .rust_name("type_")
        .binding(&value_sets::ACTION_PARTICIPANT_TYPE),
        FieldDescriptor::new(
            "role",
            CODEABLE_CONCEPT,
            Cardinality::OPTIONAL,
            "E.g. Nurse, Surgeon, Parent",
        )
        .binding(&value_sets::ACTION_PARTICIPANT_ROLE),
    ],
};

impl_element!(
    PlanDefinitionActionParticipant,
    PLAN_DEFINITION_ACTION_PARTICIPANT_INFO,
    backbone
);

/// Dynamic aspects of the definition
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanDefinitionActionDynamicValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    /// The path to the element to be set dynamically
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// An expression that provides the dynamic value for the customization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<Expression>,

    #[serde(flatten)]
    pub primitive_elements: PrimitiveElements,
}

static PLAN_DEFINITION_ACTION_DYNAMIC_VALUE_INFO: TypeInfo = TypeInfo {
    name: "PlanDefinitionActionDynamicValue",
    path: "PlanDefinition.action.dynamicValue",
    kind: TypeKind::Backbone,
    base: "BackboneElement",
    url: None,
    short: "Dynamic aspects of the definition",
    fields: &[
        common::ELEMENT_ID,
        common::ELEMENT_EXTENSION,
        common::MODIFIER_EXTENSION,
        FieldDescriptor::new(
            "path",
            STRING,
            Cardinality::OPTIONAL,
            "The path to the element to be set dynamically",
        ),
        FieldDescriptor::new(
            "expression",
            EXPRESSION,
            Cardinality::OPTIONAL,
            "An expression that provides the dynamic value for the customization",
        ),
    ],
};

impl_element!(
    PlanDefinitionActionDynamicValue,
    PLAN_DEFINITION_ACTION_DYNAMIC_VALUE_INFO,
    backbone
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use serde_json::json;

    fn sample() -> PlanDefinition {
        serde_json::from_value(json!({
            "resourceType": "PlanDefinition",
            "id": "low-suicide-risk",
            "status": "active",
            "goal": [{"id": "reduce-risk", "description": {"text": "Reduce risk"}}],
            "action": [{
                "id": "root",
                "goalId": ["reduce-risk"],
                "timingDuration": {"value": 2, "unit": "wk"},
                "action": [
                    {"id": "first", "definitionCanonical": "http://example.org/ActivityDefinition/a"},
                    {
                        "id": "second",
                        "relatedAction": [{
                            "actionId": "first",
                            "relationship": "after-end",
                            "offsetDuration": {"value": 1, "unit": "h"}
                        }]
                    }
                ]
            }]
        }))
        .unwrap()
    }

    #[test]
    fn walks_nested_actions_depth_first() {
        let plan = sample();
        let ids: Vec<_> = plan.actions().iter().filter_map(|a| a.id.as_deref()).collect();
        assert_eq!(ids, vec!["root", "first", "second"]);

        let second = plan.find_action("second").unwrap();
        assert_eq!(
            second.related_action[0].action_id.as_deref(),
            Some("first")
        );
        assert!(plan.find_goal("reduce-risk").is_some());
    }

    #[test]
    fn timing_choice_uses_suffixed_key() {
        let plan = sample();
        let timing = plan.action[0].timing.as_ref().unwrap();
        assert_eq!(timing.wire_key(), "timingDuration");

        let value = serde_json::to_value(&plan.action[0]).unwrap();
        assert!(value.get("timingDuration").is_some());
        assert!(value.get("timing").is_none());
    }

    #[test]
    fn subject_choice_resolves_from_wire_key() {
        let info = PlanDefinition::type_info();
        let (field, ty) = info.resolve_wire_key("subjectReference").unwrap();
        assert_eq!(field.name, "subject");
        assert_eq!(ty.code, "Reference");
        assert!(info.resolve_wire_key("subjectString").is_none());
    }

    #[test]
    fn topic_has_example_binding() {
        let topic = PlanDefinition::type_info().field("topic").unwrap();
        let binding = topic.binding.unwrap();
        assert_eq!(binding.strength, crate::descriptor::BindingStrength::Example);
    }
}
