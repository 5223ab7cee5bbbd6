use serde_json::Value;
use sinter_format::{
    json_to_xml, parse_json, resource_from_xml, resource_to_xml, xml_to_json, xml_to_value,
    ParseMode, XmlSerializable,
};
use sinter_models::{
    AnyResource, Consent, ImplementationGuide, PlanDefinition, Serializable, StructureMap,
};
use std::fs;
use std::path::PathBuf;

/// Helper to normalize JSON for comparison (ignoring formatting/whitespace differences)
fn normalize_json(json_str: &str) -> Value {
    serde_json::from_str(json_str).expect("Failed to parse JSON")
}

/// Helper to get test data directory
fn test_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
}

/// JSON fixtures of the model crate, one per resource type
fn model_fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../fhir-models/tests/data")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read {}", path.display()))
}

/// Discover all test file base names (without extension) in the data directory
fn discover_test_cases() -> Vec<String> {
    let data_dir = test_data_dir();
    let mut test_cases = std::collections::HashSet::new();

    if let Ok(entries) = fs::read_dir(&data_dir) {
        for entry in entries.flatten() {
            if let Some(file_name) = entry.file_name().to_str() {
                if let Some(stem) = file_name.strip_suffix(".json") {
                    // Check if corresponding XML exists
                    let xml_path = data_dir.join(format!("{}.xml", stem));
                    if xml_path.exists() {
                        test_cases.insert(stem.to_string());
                    }
                }
            }
        }
    }

    let mut cases: Vec<_> = test_cases.into_iter().collect();
    cases.sort();
    cases
}

/// Helper to load test files
fn load_test_files(base_name: &str) -> (String, String) {
    let json_path = test_data_dir().join(format!("{}.json", base_name));
    let xml_path = test_data_dir().join(format!("{}.xml", base_name));

    let json = fs::read_to_string(&json_path)
        .unwrap_or_else(|_| panic!("Failed to read {}", json_path.display()));
    let xml = fs::read_to_string(&xml_path)
        .unwrap_or_else(|_| panic!("Failed to read {}", xml_path.display()));

    (json, xml)
}

// ============================================================================
// Test Discovery
// ============================================================================

#[test]
fn test_data_files_exist() {
    let test_cases = discover_test_cases();
    assert_eq!(
        test_cases,
        vec![
            "consent-privacy",
            "implementationguide-versions",
            "plandefinition-contained",
            "structuremap-supplyrequest",
        ],
        "unexpected fixtures in {}",
        test_data_dir().display()
    );
}

// ============================================================================
// Paired fixtures
// ============================================================================

#[test]
fn test_all_xml_matches_paired_json() {
    for base_name in discover_test_cases() {
        println!("Testing XML→JSON for: {}", base_name);
        let (json, xml) = load_test_files(&base_name);

        let result_json = xml_to_json(&xml)
            .unwrap_or_else(|e| panic!("{}: XML to JSON conversion failed: {}", base_name, e));

        assert_eq!(
            normalize_json(&result_json),
            normalize_json(&json),
            "{}: XML does not convert to its paired JSON",
            base_name
        );
    }
}

#[test]
fn test_all_json_matches_paired_xml() {
    for base_name in discover_test_cases() {
        println!("Testing JSON→XML for: {}", base_name);
        let (json, xml) = load_test_files(&base_name);

        let result_xml = json_to_xml(&json)
            .unwrap_or_else(|e| panic!("{}: JSON to XML conversion failed: {}", base_name, e));

        // Generated XML must be well formed and read back like the hand-written one
        let doc = roxmltree::Document::parse(&result_xml)
            .unwrap_or_else(|e| panic!("{}: Generated XML is not valid: {}", base_name, e));
        let expected = roxmltree::Document::parse(&xml).unwrap();
        assert_eq!(
            doc.root_element().tag_name(),
            expected.root_element().tag_name(),
            "{}: root element mismatch",
            base_name
        );

        assert_eq!(
            xml_to_value(&result_xml).unwrap(),
            xml_to_value(&xml).unwrap(),
            "{}: generated XML differs from the paired XML",
            base_name
        );
    }
}

#[test]
fn test_all_round_trip_json_xml_json() {
    for base_name in discover_test_cases() {
        let (json, _xml) = load_test_files(&base_name);

        let xml = json_to_xml(&json).unwrap();
        let round_trip = normalize_json(&xml_to_json(&xml).unwrap());

        assert_eq!(round_trip, normalize_json(&json), "{}: round-trip mismatch", base_name);
    }
}

#[test]
fn test_all_round_trip_xml_json_xml() {
    for base_name in discover_test_cases() {
        let (_json, xml) = load_test_files(&base_name);

        let json = xml_to_json(&xml).unwrap();
        let result_xml = json_to_xml(&json).unwrap();
        let again = xml_to_json(&result_xml).unwrap();

        assert_eq!(
            normalize_json(&again),
            normalize_json(&json),
            "{}: XML→JSON→XML changed content",
            base_name
        );
    }
}

// ============================================================================
// Model fixtures through the typed XML capability
// ============================================================================

fn assert_xml_round_trip<T>(fixture: &str)
where
    T: XmlSerializable + Serializable + PartialEq + std::fmt::Debug,
{
    let json = model_fixture(fixture);
    let original = T::from_json(&json).unwrap();

    let xml = original
        .to_xml()
        .unwrap_or_else(|e| panic!("{}: to_xml failed: {}", fixture, e));
    let parsed = T::from_xml(&xml).unwrap_or_else(|e| panic!("{}: from_xml failed: {}", fixture, e));

    assert_eq!(parsed, original, "{}: typed XML round-trip mismatch", fixture);
    assert_eq!(
        parsed.to_value().unwrap(),
        normalize_json(&json),
        "{}: JSON after XML round-trip differs",
        fixture
    );
}

#[test]
fn test_xml_round_trip_every_resource_type() {
    assert_xml_round_trip::<Consent>("consent-example.json");
    assert_xml_round_trip::<ImplementationGuide>("implementationguide-example.json");
    assert_xml_round_trip::<PlanDefinition>("plandefinition-example.json");
    assert_xml_round_trip::<StructureMap>("structuremap-example.json");
}

#[test]
fn test_primitive_extensions_survive_typed_xml() {
    let input = serde_json::json!({
        "resourceType": "Consent",
        "status": "active",
        "_status": {
            "id": "s1",
            "extension": [{"url": "http://example.org/ext", "valueString": "x"}]
        }
    });
    let consent = Consent::from_value(input.clone()).unwrap();

    let xml = consent.to_xml().unwrap();
    let doc = roxmltree::Document::parse(&xml).unwrap();
    let status = doc.descendants().find(|n| n.has_tag_name("status")).unwrap();
    assert_eq!(status.attribute("id"), Some("s1"));
    assert_eq!(status.attribute("value"), Some("active"));

    let parsed = Consent::from_xml(&xml).unwrap();
    assert_eq!(parsed, consent);
    assert_eq!(parsed.to_value().unwrap(), input);
}

#[test]
fn test_deep_provision_nesting_in_xml() {
    let consent = Consent::from_json(&model_fixture("consent-example.json")).unwrap();
    let xml = consent.to_xml().unwrap();

    let doc = roxmltree::Document::parse(&xml).unwrap();
    let depth = doc
        .descendants()
        .filter(|n| n.has_tag_name("provision"))
        .map(|n| n.ancestors().filter(|a| a.has_tag_name("provision")).count())
        .max()
        .unwrap();
    assert_eq!(depth, 4);
}

#[test]
fn test_any_resource_xml() {
    let (json, xml) = load_test_files("plandefinition-contained");

    let any = resource_from_xml(&xml).unwrap();
    assert!(matches!(any, AnyResource::PlanDefinition(_)));
    if let AnyResource::PlanDefinition(plan) = &any {
        assert!(matches!(plan.contained[0], AnyResource::Consent(_)));
    }

    let back = resource_to_xml(&any).unwrap();
    assert_eq!(xml_to_value(&back).unwrap(), normalize_json(&json));
}

#[test]
fn test_strict_parse_of_paired_fixtures() {
    let (json, _) = load_test_files("structuremap-supplyrequest");
    let map: StructureMap = parse_json(&json, ParseMode::Strict).unwrap();
    assert_eq!(map.group[0].rule[0].target[0].parameter.len(), 2);

    let (json, _) = load_test_files("consent-privacy");
    let consent: Consent = parse_json(&json, ParseMode::Strict).unwrap();
    assert_eq!(consent.provisions().len(), 2);
}
