//! Lookup of static metadata by type name
//!
//! Every record type in the crate registers its [`TypeInfo`] here. Lookups
//! accept the Rust type name (`ConsentProvisionActor`), the FHIR element path
//! (`Consent.provision.actor`), or one of the Quantity profile names.

use crate::datatypes::*;
use crate::descriptor::{TypeInfo, TypeInfoFn, TypeKind};
use crate::element::Element;
use crate::resources::*;

const TYPES: &[TypeInfoFn] = &[
    // Datatypes
    Extension::type_info,
    Meta::type_info,
    Narrative::type_info,
    Identifier::type_info,
    Coding::type_info,
    CodeableConcept::type_info,
    Reference::type_info,
    Period::type_info,
    Quantity::type_info,
    Range::type_info,
    Ratio::type_info,
    Money::type_info,
    Attachment::type_info,
    Annotation::type_info,
    Address::type_info,
    HumanName::type_info,
    ContactPoint::type_info,
    Timing::type_info,
    TimingRepeat::type_info,
    SampledData::type_info,
    Signature::type_info,
    ContactDetail::type_info,
    Contributor::type_info,
    UsageContext::type_info,
    RelatedArtifact::type_info,
    Expression::type_info,
    DataRequirement::type_info,
    DataRequirementCodeFilter::type_info,
    DataRequirementDateFilter::type_info,
    DataRequirementSort::type_info,
    ParameterDefinition::type_info,
    TriggerDefinition::type_info,
    Dosage::type_info,
    DosageDoseAndRate::type_info,
    // Consent
    Consent::type_info,
    ConsentPolicy::type_info,
    ConsentVerification::type_info,
    ConsentProvision::type_info,
    ConsentProvisionActor::type_info,
    ConsentProvisionData::type_info,
    // ImplementationGuide
    ImplementationGuide::type_info,
    ImplementationGuideDependsOn::type_info,
    ImplementationGuideGlobal::type_info,
    ImplementationGuideDefinition::type_info,
    ImplementationGuideDefinitionGrouping::type_info,
    ImplementationGuideDefinitionResource::type_info,
    ImplementationGuideDefinitionPage::type_info,
    ImplementationGuideDefinitionParameter::type_info,
    ImplementationGuideDefinitionTemplate::type_info,
    ImplementationGuideManifest::type_info,
    ImplementationGuideManifestResource::type_info,
    ImplementationGuideManifestPage::type_info,
    // PlanDefinition
    PlanDefinition::type_info,
    PlanDefinitionGoal::type_info,
    PlanDefinitionGoalTarget::type_info,
    PlanDefinitionAction::type_info,
    PlanDefinitionActionCondition::type_info,
    PlanDefinitionActionRelatedAction::type_info,
    PlanDefinitionActionParticipant::type_info,
    PlanDefinitionActionDynamicValue::type_info,
    // StructureMap
    StructureMap::type_info,
    StructureMapStructure::type_info,
    StructureMapGroup::type_info,
    StructureMapGroupInput::type_info,
    StructureMapGroupRule::type_info,
    StructureMapGroupRuleSource::type_info,
    StructureMapGroupRuleTarget::type_info,
    StructureMapGroupRuleTargetParameter::type_info,
    StructureMapGroupRuleDependent::type_info,
];

/// Quantity profiles share Quantity's record
const QUANTITY_PROFILES: &[&str] = &["Age", "Count", "Distance", "Duration", "SimpleQuantity"];

/// Metadata for every registered type, in registration order
pub fn all_types() -> impl Iterator<Item = &'static TypeInfo> {
    TYPES.iter().map(|info| info())
}

/// Look up metadata by Rust type name or FHIR path
pub fn type_info(name: &str) -> Option<&'static TypeInfo> {
    if QUANTITY_PROFILES.contains(&name) {
        return Some(Quantity::type_info());
    }
    all_types()
        .find(|info| info.name == name)
        .or_else(|| all_types().find(|info| info.path == name))
}

/// Names of the modeled resource types
pub fn resource_names() -> impl Iterator<Item = &'static str> {
    all_types()
        .filter(|info| info.kind == TypeKind::Resource)
        .map(|info| info.name)
}

pub fn is_resource(name: &str) -> bool {
    type_info(name).is_some_and(TypeInfo::is_resource)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_by_name_and_path() {
        let by_name = type_info("ConsentProvisionActor").unwrap();
        let by_path = type_info("Consent.provision.actor").unwrap();
        assert!(std::ptr::eq(by_name, by_path));
        assert_eq!(type_info("Age").unwrap().name, "Quantity");
        assert!(type_info("Patient").is_none());
    }

    #[test]
    fn lists_every_modeled_resource() {
        let names: Vec<_> = resource_names().collect();
        assert_eq!(
            names,
            vec!["Consent", "ImplementationGuide", "PlanDefinition", "StructureMap"]
        );
        assert_eq!(names, MODELED_RESOURCES);
        assert!(is_resource("StructureMap"));
        assert!(!is_resource("StructureMapGroup"));
    }

    #[test]
    fn names_and_paths_are_unique() {
        let mut names: Vec<_> = all_types().map(|t| t.name).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);

        let mut paths: Vec<_> = all_types().map(|t| t.path).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), total);
    }

    #[test]
    fn nested_type_refs_point_at_registered_types() {
        for info in all_types() {
            for field in info.fields {
                for ty in field.types {
                    if let Some(target) = ty.type_info() {
                        assert!(
                            type_info(target.name).is_some(),
                            "{}.{} refers to unregistered {}",
                            info.path,
                            field.name,
                            target.name
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn local_refs_target_known_paths() {
        for info in all_types() {
            for field in info.fields {
                if let Some(local) = field.local_ref {
                    let target = type_info(local.target_path).unwrap();
                    assert!(target.field(local.key).is_some());
                }
            }
        }
    }
}
