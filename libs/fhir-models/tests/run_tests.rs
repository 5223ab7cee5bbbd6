use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use sinter_models::{
    AnyResource, Consent, ConsentSource, Element, Extension, ExtensionValue, ImplementationGuide,
    ImplementationGuidePageName, ModifierElement, PlanDefinition, PlanDefinitionActionTiming,
    Resource, Serializable, StructureMap, StructureMapSourceDefaultValue,
};
use std::{fs::File, path::PathBuf};

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data")
}

fn load_json(relative: &str) -> Value {
    let path = fixtures_root().join(relative);
    assert!(path.exists(), "fixture missing at {:?}", path);

    let file = File::open(&path).expect("failed to open fixture");
    serde_json::from_reader(file).expect("failed to parse fixture")
}

fn load_fixture<T: DeserializeOwned>(relative: &str) -> T {
    serde_json::from_value(load_json(relative)).expect("failed to deserialize fixture")
}

/// Parse, serialize and compare both the values and the key order
fn assert_round_trip<T>(relative: &str)
where
    T: Serializable + DeserializeOwned,
{
    let input = load_json(relative);
    let parsed = T::from_value(input.clone()).expect("typed parse failed");
    let output = parsed.to_value().expect("serialize failed");
    assert_eq!(output, input, "{relative} did not round-trip");

    let input_keys: Vec<_> = input.as_object().unwrap().keys().collect();
    let output_keys: Vec<_> = output.as_object().unwrap().keys().collect();
    assert_eq!(output_keys, input_keys, "{relative} changed key order");
}

#[test]
fn round_trip_every_resource_type() {
    assert_round_trip::<Consent>("consent-example.json");
    assert_round_trip::<ImplementationGuide>("implementationguide-example.json");
    assert_round_trip::<PlanDefinition>("plandefinition-example.json");
    assert_round_trip::<StructureMap>("structuremap-example.json");
}

#[test]
fn round_trip_through_json_text() {
    let consent: Consent = load_fixture("consent-example.json");
    let text = consent.to_json_pretty().unwrap();
    let reparsed = Consent::from_json(&text).unwrap();
    assert_eq!(reparsed, consent);
}

#[test]
fn parse_consent_example() {
    let consent: Consent = load_fixture("consent-example.json");

    assert_eq!(consent.resource_type(), "Consent");
    assert_eq!(consent.status.as_deref(), Some("active"));
    assert_eq!(consent.category.len(), 1);
    assert!(matches!(consent.source, Some(ConsentSource::Attachment(_))));

    let root = consent.provision.as_ref().expect("provision should be present");
    assert_eq!(root.type_.as_deref(), Some("permit"));
    assert_eq!(root.depth(), 4);

    let level3 = &root.provision[0].provision[0].provision[0];
    assert_eq!(level3.id.as_deref(), Some("level-3"));
    assert_eq!(level3.data[0].meaning.as_deref(), Some("related"));

    let ids: Vec<_> = consent
        .provisions()
        .iter()
        .filter_map(|p| p.id.as_deref())
        .collect();
    assert_eq!(ids, vec!["level-1", "level-2", "level-3"]);
}

#[test]
fn deep_provision_chain_round_trips() {
    let input = json!({
        "resourceType": "Consent",
        "status": "active",
        "provision": {
            "type": "permit",
            "provision": [{
                "type": "deny",
                "provision": [{
                    "type": "permit",
                    "provision": [{"type": "deny"}]
                }]
            }]
        }
    });
    let consent = Consent::from_value(input.clone()).unwrap();
    assert_eq!(consent.provisions().len(), 4);
    assert_eq!(consent.to_value().unwrap(), input);
}

#[test]
fn extensions_are_preserved() {
    let consent: Consent = load_fixture("consent-example.json");

    let witness: Vec<_> = consent
        .extensions_by_url("http://example.org/fhir/StructureDefinition/consent-witness")
        .collect();
    assert_eq!(witness.len(), 1);
    match &witness[0].value {
        Some(ExtensionValue::Reference(reference)) => {
            assert_eq!(reference.reference.as_deref(), Some("Practitioner/f007"));
        }
        other => panic!("expected a Reference value, got {:?}", other),
    }

    let note = &consent.extension[1];
    assert!(!note.has_value());
    match &note.extension[1].value {
        Some(ExtensionValue::Decimal(weight)) => assert_eq!(weight.to_string(), "0.75"),
        other => panic!("expected a decimal value, got {:?}", other),
    }
}

#[test]
fn unknown_extension_content_round_trips() {
    let input = json!({
        "resourceType": "StructureMap",
        "status": "draft",
        "modifierExtension": [{
            "url": "http://example.org/unknown",
            "valueCodeableConcept": {"coding": [{"code": "a"}], "text": "A"},
            "_valueCodeableConcept": {"id": "x"}
        }]
    });
    let map = StructureMap::from_value(input.clone()).unwrap();
    assert_eq!(map.modifier_extensions().len(), 1);
    assert_eq!(map.to_value().unwrap(), input);

    let built = Extension::new("http://example.org/flag").with_value(ExtensionValue::Boolean(true));
    assert_eq!(
        serde_json::to_value(&built).unwrap(),
        json!({"url": "http://example.org/flag", "valueBoolean": true})
    );
}

#[test]
fn parse_implementation_guide_example() {
    let ig: ImplementationGuide = load_fixture("implementationguide-example.json");

    assert_eq!(ig.package_id.as_deref(), Some("hl7.fhir.us.daf"));
    assert_eq!(ig.fhir_version, vec!["4.0.1"]);

    let definition = ig.definition.as_ref().unwrap();
    assert_eq!(definition.resources_in_grouping("test").count(), 1);

    let page = definition.page.as_ref().unwrap();
    assert!(matches!(page.name, Some(ImplementationGuidePageName::Url(_))));
    assert!(matches!(
        page.page[0].name,
        Some(ImplementationGuidePageName::Reference(_))
    ));
}

#[test]
fn parse_plan_definition_example() {
    let plan: PlanDefinition = load_fixture("plandefinition-example.json");

    assert_eq!(plan.actions().len(), 3);
    assert!(matches!(
        plan.action[0].timing,
        Some(PlanDefinitionActionTiming::Timing(_))
    ));

    let followup = plan.find_action("followup").unwrap();
    let target = followup.related_action[0].action_id.as_deref().unwrap();
    assert!(plan.find_action(target).is_some());
    assert!(plan.find_goal(&plan.action[0].goal_id[0]).is_some());
}

#[test]
fn parse_structure_map_example() {
    let map: StructureMap = load_fixture("structuremap-example.json");

    assert_eq!(map.extends_chain("Examples").len(), 2);

    let group = map.find_group("Examples").unwrap();
    let rules = group.all_rules();
    assert_eq!(rules.len(), 2);
    assert_eq!(
        rules[0].source[0].default_value,
        Some(StructureMapSourceDefaultValue::String("unknown".into()))
    );
    assert!(matches!(
        rules[1].source[0].default_value,
        Some(StructureMapSourceDefaultValue::Coding(_))
    ));
}

#[test]
fn decimals_keep_their_written_precision() {
    let json = r#"{"resourceType":"StructureMap","status":"draft","group":[{"name":"g","input":[{"name":"src","mode":"source"}],"rule":[{"name":"r","source":[{"context":"src","defaultValueDecimal":1.50}]}]}],"extension":[{"url":"http://example.org/weight","valueQuantity":{"value":0.10,"unit":"kg"}}]}"#;
    let map = StructureMap::from_json(json).unwrap();

    match &map.group[0].rule[0].source[0].default_value {
        Some(StructureMapSourceDefaultValue::Decimal(value)) => assert_eq!(value.to_string(), "1.50"),
        other => panic!("expected a decimal default, got {:?}", other),
    }

    let output = map.to_json().unwrap();
    assert!(output.contains(r#""defaultValueDecimal":1.50"#), "{}", output);
    assert!(output.contains(r#""value":0.10"#), "{}", output);
}

#[test]
fn contained_resources_dispatch() {
    let input = json!({
        "resourceType": "ImplementationGuide",
        "id": "with-contained",
        "contained": [
            {"resourceType": "Consent", "id": "c", "status": "draft"},
            {"resourceType": "Binary", "id": "b", "contentType": "text/plain"}
        ],
        "url": "http://example.org/ig",
        "name": "WithContained",
        "status": "draft",
        "packageId": "example.ig",
        "fhirVersion": ["4.0.1"]
    });
    let ig = ImplementationGuide::from_value(input.clone()).unwrap();
    assert!(matches!(ig.contained[0], AnyResource::Consent(_)));
    assert_eq!(ig.contained[1].resource_type(), "Binary");
    assert_eq!(ig.to_value().unwrap(), input);
}

#[test]
fn wrong_resource_type_is_rejected() {
    let err = PlanDefinition::from_value(json!({"resourceType": "Consent"})).unwrap_err();
    assert!(err.to_string().contains("expected resourceType 'PlanDefinition'"));
}

#[test]
fn metadata_is_available_without_an_instance() {
    let info = Consent::type_info();
    let status = info.field("status").unwrap();
    assert!(status.cardinality.is_required());
    assert!(status.is_modifier);
    assert_eq!(info.path_of(status), "Consent.status");

    let source = info.field("source[x]").unwrap();
    assert_eq!(info.path_of(source), "Consent.source[x]");
    assert_eq!(
        source.wire_keys(),
        vec!["sourceAttachment".to_string(), "sourceReference".to_string()]
    );
}
