//! Value-set bindings referenced by field descriptors
//!
//! Bindings to value sets defined outside the core specification (LOINC,
//! SNOMED CT, BCP 47, SPDX, ISO 3166, ...) carry no enumerated codes and are
//! never checked for membership.

use crate::descriptor::{BindingStrength, CodeSystemCodes, ValueSetBinding};

use BindingStrength::{Example, Extensible, Preferred, Required};

const fn cs(system: &'static str, codes: &'static [&'static str]) -> CodeSystemCodes {
    CodeSystemCodes::new(system, codes)
}

pub const RESOURCE_TYPE_CODES: &[&str] = &[
    "Account",
    "ActivityDefinition",
    "AdverseEvent",
    "AllergyIntolerance",
    "Appointment",
    "AppointmentResponse",
    "AuditEvent",
    "Basic",
    "Binary",
    "BiologicallyDerivedProduct",
    "BodyStructure",
    "Bundle",
    "CapabilityStatement",
    "CarePlan",
    "CareTeam",
    "CatalogEntry",
    "ChargeItem",
    "ChargeItemDefinition",
    "Claim",
    "ClaimResponse",
    "ClinicalImpression",
    "CodeSystem",
    "Communication",
    "CommunicationRequest",
    "CompartmentDefinition",
    "Composition",
    "ConceptMap",
    "Condition",
    "Consent",
    "Contract",
    "Coverage",
    "CoverageEligibilityRequest",
    "CoverageEligibilityResponse",
    "DetectedIssue",
    "Device",
    "DeviceDefinition",
    "DeviceMetric",
    "DeviceRequest",
    "DeviceUseStatement",
    "DiagnosticReport",
    "DocumentManifest",
    "DocumentReference",
    "DomainResource",
    "EffectEvidenceSynthesis",
    "Encounter",
    "Endpoint",
    "EnrollmentRequest",
    "EnrollmentResponse",
    "EpisodeOfCare",
    "EventDefinition",
    "Evidence",
    "EvidenceVariable",
    "ExampleScenario",
    "ExplanationOfBenefit",
    "FamilyMemberHistory",
    "Flag",
    "Goal",
    "GraphDefinition",
    "Group",
    "GuidanceResponse",
    "HealthcareService",
    "ImagingStudy",
    "Immunization",
    "ImmunizationEvaluation",
    "ImmunizationRecommendation",
    "ImplementationGuide",
    "InsurancePlan",
    "Invoice",
    "Library",
    "Linkage",
    "List",
    "Location",
    "Measure",
    "MeasureReport",
    "Media",
    "Medication",
    "MedicationAdministration",
    "MedicationDispense",
    "MedicationKnowledge",
    "MedicationRequest",
    "MedicationStatement",
    "MedicinalProduct",
    "MedicinalProductAuthorization",
    "MedicinalProductContraindication",
    "MedicinalProductIndication",
    "MedicinalProductIngredient",
    "MedicinalProductInteraction",
    "MedicinalProductManufactured",
    "MedicinalProductPackaged",
    "MedicinalProductPharmaceutical",
    "MedicinalProductUndesirableEffect",
    "MessageDefinition",
    "MessageHeader",
    "MolecularSequence",
    "NamingSystem",
    "NutritionOrder",
    "Observation",
    "ObservationDefinition",
    "OperationDefinition",
    "OperationOutcome",
    "Organization",
    "OrganizationAffiliation",
    "Parameters",
    "Patient",
    "PaymentNotice",
    "PaymentReconciliation",
    "Person",
    "PlanDefinition",
    "Practitioner",
    "PractitionerRole",
    "Procedure",
    "Provenance",
    "Questionnaire",
    "QuestionnaireResponse",
    "RelatedPerson",
    "RequestGroup",
    "ResearchDefinition",
    "ResearchElementDefinition",
    "ResearchStudy",
    "ResearchSubject",
    "Resource",
    "RiskAssessment",
    "RiskEvidenceSynthesis",
    "Schedule",
    "SearchParameter",
    "ServiceRequest",
    "Slot",
    "Specimen",
    "SpecimenDefinition",
    "StructureDefinition",
    "StructureMap",
    "Subscription",
    "Substance",
    "SubstanceNucleicAcid",
    "SubstancePolymer",
    "SubstanceProtein",
    "SubstanceReferenceInformation",
    "SubstanceSourceMaterial",
    "SubstanceSpecification",
    "SupplyDelivery",
    "SupplyRequest",
    "Task",
    "TerminologyCapabilities",
    "TestReport",
    "TestScript",
    "ValueSet",
    "VerificationResult",
    "VisionPrescription",
];

pub const DATA_TYPE_CODES: &[&str] = &[
    "Address",
    "Age",
    "Annotation",
    "Attachment",
    "BackboneElement",
    "CodeableConcept",
    "Coding",
    "ContactDetail",
    "ContactPoint",
    "Contributor",
    "Count",
    "DataRequirement",
    "Distance",
    "Dosage",
    "Duration",
    "Element",
    "ElementDefinition",
    "Expression",
    "Extension",
    "HumanName",
    "Identifier",
    "MarketingStatus",
    "Meta",
    "Money",
    "MoneyQuantity",
    "Narrative",
    "ParameterDefinition",
    "Period",
    "Population",
    "ProdCharacteristic",
    "ProductShelfLife",
    "Quantity",
    "Range",
    "Ratio",
    "Reference",
    "RelatedArtifact",
    "SampledData",
    "Signature",
    "SimpleQuantity",
    "SubstanceAmount",
    "Timing",
    "TriggerDefinition",
    "UsageContext",
    "base64Binary",
    "boolean",
    "canonical",
    "code",
    "date",
    "dateTime",
    "decimal",
    "id",
    "instant",
    "integer",
    "markdown",
    "oid",
    "positiveInt",
    "string",
    "time",
    "unsignedInt",
    "uri",
    "url",
    "uuid",
    "xhtml",
];

const RESOURCE_TYPES_SYSTEM: &str = "http://hl7.org/fhir/resource-types";

// Shared infrastructure

pub const PUBLICATION_STATUS: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/publication-status|4.0.1",
    "The lifecycle status of an artifact.",
    &[cs(
        "http://hl7.org/fhir/publication-status",
        &["draft", "active", "retired", "unknown"],
    )],
);

pub const JURISDICTION: ValueSetBinding = ValueSetBinding::external(
    Extensible,
    "http://hl7.org/fhir/ValueSet/jurisdiction",
    "Countries and regions within which this artifact is targeted for use.",
);

pub const LANGUAGES: ValueSetBinding = ValueSetBinding::external(
    Preferred,
    "http://hl7.org/fhir/ValueSet/languages",
    "A human language.",
);

pub const MIME_TYPES: ValueSetBinding = ValueSetBinding::external(
    Required,
    "http://hl7.org/fhir/ValueSet/mimetypes|4.0.1",
    "The mime type of an attachment. Any valid mime type is allowed.",
);

pub const CURRENCIES: ValueSetBinding = ValueSetBinding::external(
    Required,
    "http://hl7.org/fhir/ValueSet/currencies|4.0.1",
    "A code indicating the currency, taken from ISO 4217.",
);

pub const RESOURCE_TYPES: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/resource-types|4.0.1",
    "One of the resource types defined as part of this version of FHIR.",
    &[cs(RESOURCE_TYPES_SYSTEM, RESOURCE_TYPE_CODES)],
);

pub const REFERENCE_TYPES: ValueSetBinding = ValueSetBinding::new(
    Extensible,
    "http://hl7.org/fhir/ValueSet/resource-types",
    "A resource (or, for logical models, the URI of the logical model).",
    &[cs(RESOURCE_TYPES_SYSTEM, RESOURCE_TYPE_CODES)],
);

pub const ALL_TYPES: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/all-types|4.0.1",
    "A list of all the concrete types defined in this version of the FHIR specification.",
    &[
        cs("http://hl7.org/fhir/data-types", DATA_TYPE_CODES),
        cs(RESOURCE_TYPES_SYSTEM, RESOURCE_TYPE_CODES),
    ],
);

pub const SECURITY_LABELS: ValueSetBinding = ValueSetBinding::external(
    Extensible,
    "http://hl7.org/fhir/ValueSet/security-labels",
    "Security Labels from the Healthcare Privacy and Security Classification System.",
);

pub const COMMON_TAGS: ValueSetBinding = ValueSetBinding::external(
    Example,
    "http://hl7.org/fhir/ValueSet/common-tags",
    "Codes that represent various types of tags.",
);

pub const NARRATIVE_STATUS: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/narrative-status|4.0.1",
    "The status of a resource narrative.",
    &[cs(
        "http://hl7.org/fhir/narrative-status",
        &["generated", "extensions", "additional", "empty"],
    )],
);

// General purpose datatypes

pub const IDENTIFIER_USE: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/identifier-use|4.0.1",
    "Identifies the purpose for this identifier, if known.",
    &[cs(
        "http://hl7.org/fhir/identifier-use",
        &["usual", "official", "temp", "secondary", "old"],
    )],
);

pub const IDENTIFIER_TYPE: ValueSetBinding = ValueSetBinding::new(
    Extensible,
    "http://hl7.org/fhir/ValueSet/identifier-type",
    "A coded type for an identifier that can be used to determine which identifier to use for a specific purpose.",
    &[cs(
        "http://terminology.hl7.org/CodeSystem/v2-0203",
        &[
            "DL", "PPN", "BRN", "MR", "MCN", "EN", "TAX", "NIIP", "PRN", "MD", "DR", "ACSN",
            "UDI", "SNO", "SB", "PLAC", "FILL", "JHN",
        ],
    )],
);

pub const QUANTITY_COMPARATOR: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/quantity-comparator|4.0.1",
    "How the Quantity should be understood and represented.",
    &[cs(
        "http://hl7.org/fhir/quantity-comparator",
        &["<", "<=", ">=", ">"],
    )],
);

pub const ADDRESS_USE: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/address-use|4.0.1",
    "The use of an address.",
    &[cs(
        "http://hl7.org/fhir/address-use",
        &["home", "work", "temp", "old", "billing"],
    )],
);

pub const ADDRESS_TYPE: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/address-type|4.0.1",
    "The type of an address (physical / postal).",
    &[cs(
        "http://hl7.org/fhir/address-type",
        &["postal", "physical", "both"],
    )],
);

pub const NAME_USE: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/name-use|4.0.1",
    "The use of a human name.",
    &[cs(
        "http://hl7.org/fhir/name-use",
        &["usual", "official", "temp", "nickname", "anonymous", "old", "maiden"],
    )],
);

pub const CONTACT_POINT_SYSTEM: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/contact-point-system|4.0.1",
    "Telecommunications form for contact point.",
    &[cs(
        "http://hl7.org/fhir/contact-point-system",
        &["phone", "fax", "email", "pager", "url", "sms", "other"],
    )],
);

pub const CONTACT_POINT_USE: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/contact-point-use|4.0.1",
    "Use of contact point.",
    &[cs(
        "http://hl7.org/fhir/contact-point-use",
        &["home", "work", "temp", "old", "mobile"],
    )],
);

pub const EVENT_TIMING: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/event-timing|4.0.1",
    "Real world event relating to the schedule.",
    &[
        cs(
            "http://hl7.org/fhir/event-timing",
            &[
                "MORN", "MORN.early", "MORN.late", "NOON", "AFT", "AFT.early", "AFT.late", "EVE",
                "EVE.early", "EVE.late", "NIGHT", "PHS",
            ],
        ),
        cs(
            "http://terminology.hl7.org/CodeSystem/v3-TimingEvent",
            &[
                "HS", "WAKE", "C", "CM", "CD", "CV", "AC", "ACM", "ACD", "ACV", "PC", "PCM", "PCD",
                "PCV",
            ],
        ),
    ],
);

pub const DAYS_OF_WEEK: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/days-of-week|4.0.1",
    "The days of the week.",
    &[cs(
        "http://hl7.org/fhir/days-of-week",
        &["mon", "tue", "wed", "thu", "fri", "sat", "sun"],
    )],
);

pub const UNITS_OF_TIME: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/units-of-time|4.0.1",
    "A unit of time (units from UCUM).",
    &[cs(
        "http://unitsofmeasure.org",
        &["s", "min", "h", "d", "wk", "mo", "a"],
    )],
);

pub const TIMING_ABBREVIATION: ValueSetBinding = ValueSetBinding::new(
    Preferred,
    "http://hl7.org/fhir/ValueSet/timing-abbreviation",
    "Code for a known / defined timing pattern.",
    &[cs(
        "http://terminology.hl7.org/CodeSystem/v3-GTSAbbreviation",
        &[
            "BID", "TID", "QID", "AM", "PM", "QD", "QOD", "Q1H", "Q2H", "Q3H", "Q4H", "Q6H",
            "Q8H", "BED", "WK", "MO",
        ],
    )],
);

pub const SIGNATURE_TYPE: ValueSetBinding = ValueSetBinding::external(
    Preferred,
    "http://hl7.org/fhir/ValueSet/signature-type",
    "An indication of the reason that an entity signed the object.",
);

pub const DOSE_RATE_TYPE: ValueSetBinding = ValueSetBinding::new(
    Example,
    "http://hl7.org/fhir/ValueSet/dose-rate-type",
    "The kind of dose or rate specified.",
    &[cs(
        "http://terminology.hl7.org/CodeSystem/dose-rate-type",
        &["calculated", "ordered"],
    )],
);

// Metadata datatypes

pub const CONTRIBUTOR_TYPE: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/contributor-type|4.0.1",
    "The type of contributor.",
    &[cs(
        "http://hl7.org/fhir/contributor-type",
        &["author", "editor", "reviewer", "endorser"],
    )],
);

pub const USAGE_CONTEXT_TYPE: ValueSetBinding = ValueSetBinding::new(
    Extensible,
    "http://hl7.org/fhir/ValueSet/usage-context-type",
    "A code that specifies a type of context being specified by a usage context.",
    &[cs(
        "http://terminology.hl7.org/CodeSystem/usage-context-type",
        &[
            "gender", "age", "focus", "user", "venue", "species", "workflow", "task", "program",
        ],
    )],
);

pub const RELATED_ARTIFACT_TYPE: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/related-artifact-type|4.0.1",
    "The type of relationship to the related artifact.",
    &[cs(
        "http://hl7.org/fhir/related-artifact-type",
        &[
            "documentation",
            "justification",
            "citation",
            "predecessor",
            "successor",
            "derived-from",
            "depends-on",
            "composed-of",
        ],
    )],
);

pub const EXPRESSION_LANGUAGE: ValueSetBinding = ValueSetBinding::new(
    Extensible,
    "http://hl7.org/fhir/ValueSet/expression-language",
    "The media type of the expression language.",
    &[cs(
        "urn:ietf:bcp:13",
        &["text/cql", "text/fhirpath", "application/x-fhir-query"],
    )],
);

pub const OPERATION_PARAMETER_USE: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/operation-parameter-use|4.0.1",
    "Whether the parameter is input or output.",
    &[cs("http://hl7.org/fhir/operation-parameter-use", &["in", "out"])],
);

pub const TRIGGER_TYPE: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/trigger-type|4.0.1",
    "The type of trigger.",
    &[cs(
        "http://hl7.org/fhir/trigger-type",
        &[
            "named-event",
            "periodic",
            "data-changed",
            "data-added",
            "data-modified",
            "data-removed",
            "data-accessed",
            "data-access-ended",
        ],
    )],
);

pub const SORT_DIRECTION: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/sort-direction|4.0.1",
    "The possible sort directions, ascending or descending.",
    &[cs(
        "http://hl7.org/fhir/sort-direction",
        &["ascending", "descending"],
    )],
);

pub const SUBJECT_TYPE: ValueSetBinding = ValueSetBinding::new(
    Extensible,
    "http://hl7.org/fhir/ValueSet/subject-type",
    "The possible types of subjects for a data requirement (E.g., Patient, Practitioner, Organization, Location, etc.).",
    &[cs(RESOURCE_TYPES_SYSTEM, RESOURCE_TYPE_CODES)],
);

// Consent

pub const CONSENT_STATE: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/consent-state-codes|4.0.1",
    "Indicates the state of the consent.",
    &[cs(
        "http://hl7.org/fhir/consent-state-codes",
        &[
            "draft",
            "proposed",
            "active",
            "rejected",
            "inactive",
            "entered-in-error",
        ],
    )],
);

pub const CONSENT_SCOPE: ValueSetBinding = ValueSetBinding::new(
    Extensible,
    "http://hl7.org/fhir/ValueSet/consent-scope",
    "The four anticipated uses for the Consent Resource.",
    &[cs(
        "http://terminology.hl7.org/CodeSystem/consentscope",
        &["adr", "research", "patient-privacy", "treatment"],
    )],
);

pub const CONSENT_CATEGORY: ValueSetBinding = ValueSetBinding::new(
    Extensible,
    "http://hl7.org/fhir/ValueSet/consent-category",
    "A classification of the type of consents found in a consent statement.",
    &[
        cs(
            "http://loinc.org",
            &["59284-0", "57016-8", "57017-6", "64292-6"],
        ),
        cs(
            "http://terminology.hl7.org/CodeSystem/consentcategorycodes",
            &[
                "acd", "dnr", "emrgonly", "hcd", "npp", "polst", "research", "rsdid", "rsreid",
            ],
        ),
    ],
);

pub const CONSENT_POLICY: ValueSetBinding = ValueSetBinding::new(
    Extensible,
    "http://hl7.org/fhir/ValueSet/consent-policy",
    "Regulatory policy examples.",
    &[cs(
        "http://terminology.hl7.org/CodeSystem/consentpolicycodes",
        &[
            "cric",
            "illinois-minor-procedure",
            "hipaa-auth",
            "hipaa-npp",
            "hipaa-restrictions",
            "hipaa-research",
            "hipaa-self-pay",
            "mdhhs-5515",
            "nyssipp",
            "va-10-0484",
            "va-10-0485",
            "va-10-5345",
            "va-10-5345a",
            "va-10-5345a-mhv",
            "va-10-10116",
            "va-21-4142",
            "ssa-827",
            "dch-3927",
            "squaxin",
            "nl-lsp",
            "at-elga",
            "nih-hipaa",
            "nci",
            "nih-grdr",
            "nih-527",
            "ga4gh",
        ],
    )],
);

pub const SECURITY_ROLE_TYPE: ValueSetBinding = ValueSetBinding::external(
    Extensible,
    "http://hl7.org/fhir/ValueSet/security-role-type",
    "How an actor is involved in the consent considerations.",
);

pub const CONSENT_PROVISION_TYPE: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/consent-provision-type|4.0.1",
    "How a rule statement is applied, such as adding additional consent or removing consent.",
    &[cs(
        "http://hl7.org/fhir/consent-provision-type",
        &["deny", "permit"],
    )],
);

pub const CONSENT_ACTION: ValueSetBinding = ValueSetBinding::new(
    Example,
    "http://hl7.org/fhir/ValueSet/consent-action",
    "Detailed codes for the consent action.",
    &[cs(
        "http://terminology.hl7.org/CodeSystem/consentaction",
        &["collect", "access", "use", "disclose", "correct"],
    )],
);

pub const CONSENT_CONTENT_CLASS: ValueSetBinding = ValueSetBinding::external(
    Extensible,
    "http://hl7.org/fhir/ValueSet/consent-content-class",
    "The class (type) of information a consent rule covers.",
);

pub const CONSENT_CONTENT_CODE: ValueSetBinding = ValueSetBinding::external(
    Example,
    "http://hl7.org/fhir/ValueSet/consent-content-code",
    "If this code is found in an instance, then the exception applies.",
);

pub const PURPOSE_OF_USE: ValueSetBinding = ValueSetBinding::external(
    Extensible,
    "http://terminology.hl7.org/ValueSet/v3-PurposeOfUse",
    "What purposes of use are controlled by this exception.",
);

pub const CONSENT_DATA_MEANING: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/consent-data-meaning|4.0.1",
    "How a resource reference is interpreted when testing consent restrictions.",
    &[cs(
        "http://hl7.org/fhir/consent-data-meaning",
        &["instance", "related", "dependents", "authoredby"],
    )],
);

// ImplementationGuide

pub const SPDX_LICENSE: ValueSetBinding = ValueSetBinding::external(
    Required,
    "http://hl7.org/fhir/ValueSet/spdx-license|4.0.1",
    "The license that applies to an Implementation Guide (using an SPDX license Identifiers, or 'not-open-source').",
);

pub const FHIR_VERSION: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/FHIR-version|4.0.1",
    "All published FHIR Versions.",
    &[cs(
        "http://hl7.org/fhir/FHIR-version",
        &[
            "0.01", "0.05", "0.06", "0.11", "0.0.80", "0.0.81", "0.0.82", "0.4.0", "0.5.0",
            "1.0.0", "1.0.1", "1.0.2", "1.1.0", "1.4.0", "1.6.0", "1.8.0", "3.0.0", "3.0.1",
            "3.3.0", "3.5.0", "4.0.0", "4.0.1",
        ],
    )],
);

pub const GUIDE_PAGE_GENERATION: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/guide-page-generation|4.0.1",
    "A code that indicates how the page is generated.",
    &[cs(
        "http://hl7.org/fhir/guide-page-generation",
        &["html", "markdown", "xml", "generated"],
    )],
);

pub const GUIDE_PARAMETER_CODE: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/guide-parameter-code|4.0.1",
    "Code of parameter that is input to the guide.",
    &[cs(
        "http://hl7.org/fhir/guide-parameter-code",
        &[
            "apply",
            "path-resource",
            "path-pages",
            "path-tx-cache",
            "expansion-parameter",
            "rule-broken-links",
            "generate-xml",
            "generate-json",
            "generate-turtle",
            "html-template",
        ],
    )],
);

// PlanDefinition

pub const PLAN_DEFINITION_TYPE: ValueSetBinding = ValueSetBinding::new(
    Extensible,
    "http://hl7.org/fhir/ValueSet/plan-definition-type",
    "The type of PlanDefinition.",
    &[cs(
        "http://terminology.hl7.org/CodeSystem/plan-definition-type",
        &[
            "order-set",
            "clinical-protocol",
            "eca-rule",
            "workflow-definition",
        ],
    )],
);

pub const DEFINITION_TOPIC: ValueSetBinding = ValueSetBinding::new(
    Example,
    "http://hl7.org/fhir/ValueSet/definition-topic",
    "High-level categorization of the definition, used for searching, sorting, and filtering.",
    &[cs(
        "http://terminology.hl7.org/CodeSystem/definition-topic",
        &["treatment", "education", "assessment"],
    )],
);

pub const GOAL_CATEGORY: ValueSetBinding = ValueSetBinding::new(
    Example,
    "http://hl7.org/fhir/ValueSet/goal-category",
    "Example codes for grouping goals for filtering or presentation.",
    &[cs(
        "http://terminology.hl7.org/CodeSystem/goal-category",
        &["dietary", "safety", "behavioral", "nursing", "physiotherapy"],
    )],
);

pub const GOAL_DESCRIPTION: ValueSetBinding = ValueSetBinding::external(
    Example,
    "http://hl7.org/fhir/ValueSet/clinical-findings",
    "Describes goals that can be achieved.",
);

pub const GOAL_PRIORITY: ValueSetBinding = ValueSetBinding::new(
    Preferred,
    "http://hl7.org/fhir/ValueSet/goal-priority",
    "Indicates the level of importance associated with reaching or sustaining a goal.",
    &[cs(
        "http://terminology.hl7.org/CodeSystem/goal-priority",
        &["high-priority", "medium-priority", "low-priority"],
    )],
);

pub const GOAL_START_EVENT: ValueSetBinding = ValueSetBinding::external(
    Example,
    "http://hl7.org/fhir/ValueSet/goal-start-event",
    "Identifies the types of events that might trigger the start of a goal.",
);

pub const GOAL_TARGET_MEASURE: ValueSetBinding = ValueSetBinding::external(
    Example,
    "http://hl7.org/fhir/ValueSet/observation-codes",
    "Identifies types of parameters that can be tracked to determine goal achievement.",
);

pub const CONDITION_CODE: ValueSetBinding = ValueSetBinding::external(
    Example,
    "http://hl7.org/fhir/ValueSet/condition-code",
    "Identifies problems, conditions, issues, or concerns that goals may address.",
);

pub const REQUEST_PRIORITY: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/request-priority|4.0.1",
    "Identifies the level of importance to be assigned to actioning the request.",
    &[cs(
        "http://hl7.org/fhir/request-priority",
        &["routine", "urgent", "asap", "stat"],
    )],
);

pub const ACTION_CODE: ValueSetBinding = ValueSetBinding::external(
    Example,
    "http://hl7.org/fhir/ValueSet/action-code",
    "Provides examples of actions to be performed.",
);

pub const ACTION_REASON_CODE: ValueSetBinding = ValueSetBinding::external(
    Example,
    "http://hl7.org/fhir/ValueSet/action-reason-code",
    "Provides examples of reasons for actions to be performed.",
);

pub const ACTION_CONDITION_KIND: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/action-condition-kind|4.0.1",
    "Defines the kinds of conditions that can appear on actions.",
    &[cs(
        "http://hl7.org/fhir/action-condition-kind",
        &["applicability", "start", "stop"],
    )],
);

pub const ACTION_RELATIONSHIP_TYPE: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/action-relationship-type|4.0.1",
    "Defines the types of relationships between actions.",
    &[cs(
        "http://hl7.org/fhir/action-relationship-type",
        &[
            "before-start",
            "before",
            "before-end",
            "concurrent-with-start",
            "concurrent",
            "concurrent-with-end",
            "after-start",
            "after",
            "after-end",
        ],
    )],
);

pub const ACTION_PARTICIPANT_TYPE: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/action-participant-type|4.0.1",
    "The type of participant for the action.",
    &[cs(
        "http://hl7.org/fhir/action-participant-type",
        &["patient", "practitioner", "related-person", "device"],
    )],
);

pub const ACTION_PARTICIPANT_ROLE: ValueSetBinding = ValueSetBinding::external(
    Example,
    "http://hl7.org/fhir/ValueSet/action-participant-role",
    "Defines roles played by participants for the action.",
);

pub const ACTION_TYPE: ValueSetBinding = ValueSetBinding::new(
    Extensible,
    "http://hl7.org/fhir/ValueSet/action-type",
    "The type of action to be performed.",
    &[cs(
        "http://terminology.hl7.org/CodeSystem/action-type",
        &["create", "update", "remove", "fire-event"],
    )],
);

pub const ACTION_GROUPING_BEHAVIOR: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/action-grouping-behavior|4.0.1",
    "Defines organization behavior of a group.",
    &[cs(
        "http://hl7.org/fhir/action-grouping-behavior",
        &["visual-group", "logical-group", "sentence-group"],
    )],
);

pub const ACTION_SELECTION_BEHAVIOR: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/action-selection-behavior|4.0.1",
    "Defines selection behavior of a group.",
    &[cs(
        "http://hl7.org/fhir/action-selection-behavior",
        &[
            "any",
            "all",
            "all-or-none",
            "exactly-one",
            "at-most-one",
            "one-or-more",
        ],
    )],
);

pub const ACTION_REQUIRED_BEHAVIOR: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/action-required-behavior|4.0.1",
    "Defines expectations around whether an action or action group is required.",
    &[cs(
        "http://hl7.org/fhir/action-required-behavior",
        &["must", "could", "must-unless-documented"],
    )],
);

pub const ACTION_PRECHECK_BEHAVIOR: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/action-precheck-behavior|4.0.1",
    "Defines selection frequency behavior for an action or group.",
    &[cs(
        "http://hl7.org/fhir/action-precheck-behavior",
        &["yes", "no"],
    )],
);

pub const ACTION_CARDINALITY_BEHAVIOR: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/action-cardinality-behavior|4.0.1",
    "Defines behavior for an action or a group for how many times that item may be repeated.",
    &[cs(
        "http://hl7.org/fhir/action-cardinality-behavior",
        &["single", "multiple"],
    )],
);

// StructureMap

pub const MAP_MODEL_MODE: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/map-model-mode|4.0.1",
    "How the referenced structure is used in this mapping.",
    &[cs(
        "http://hl7.org/fhir/map-model-mode",
        &["source", "queried", "target", "produced"],
    )],
);

pub const MAP_GROUP_TYPE_MODE: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/map-group-type-mode|4.0.1",
    "If this is the default rule set to apply for the source type, or this combination of types.",
    &[cs(
        "http://hl7.org/fhir/map-group-type-mode",
        &["none", "types", "type-and-types"],
    )],
);

pub const MAP_INPUT_MODE: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/map-input-mode|4.0.1",
    "Mode for this instance of data.",
    &[cs("http://hl7.org/fhir/map-input-mode", &["source", "target"])],
);

pub const MAP_SOURCE_LIST_MODE: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/map-source-list-mode|4.0.1",
    "If field is a list, how to manage the source.",
    &[cs(
        "http://hl7.org/fhir/map-source-list-mode",
        &["first", "not_first", "last", "not_last", "only_one"],
    )],
);

pub const MAP_CONTEXT_TYPE: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/map-context-type|4.0.1",
    "How to interpret the context.",
    &[cs(
        "http://hl7.org/fhir/map-context-type",
        &["type", "variable"],
    )],
);

pub const MAP_TARGET_LIST_MODE: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/map-target-list-mode|4.0.1",
    "If field is a list, how to manage the production.",
    &[cs(
        "http://hl7.org/fhir/map-target-list-mode",
        &["first", "share", "last", "collate"],
    )],
);

pub const MAP_TRANSFORM: ValueSetBinding = ValueSetBinding::new(
    Required,
    "http://hl7.org/fhir/ValueSet/map-transform|4.0.1",
    "How data is copied/created.",
    &[cs(
        "http://hl7.org/fhir/map-transform",
        &[
            "create", "copy", "truncate", "escape", "cast", "append", "translate", "reference",
            "dateOp", "uuid", "pointer", "evaluate", "cc", "c", "qty", "id", "cp",
        ],
    )],
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consent_state_is_exactly_the_r4_set() {
        let codes: Vec<_> = CONSENT_STATE.codes().map(|(_, code)| code).collect();
        assert_eq!(
            codes,
            vec![
                "draft",
                "proposed",
                "active",
                "rejected",
                "inactive",
                "entered-in-error"
            ]
        );
        assert_eq!(CONSENT_STATE.strength, BindingStrength::Required);
    }

    #[test]
    fn all_types_spans_two_systems() {
        assert!(ALL_TYPES.contains(Some("http://hl7.org/fhir/data-types"), "Quantity"));
        assert!(ALL_TYPES.contains(None, "Patient"));
        assert!(!ALL_TYPES.contains(Some("http://hl7.org/fhir/data-types"), "Patient"));
    }

    #[test]
    fn external_bindings_are_not_enumerated() {
        assert!(!SPDX_LICENSE.is_enumerated());
        assert!(!JURISDICTION.is_enumerated());
        assert!(RESOURCE_TYPES.is_enumerated());
    }
}
