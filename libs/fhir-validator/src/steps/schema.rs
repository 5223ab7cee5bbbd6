//! Structural validation against the model metadata
//!
//! - `resourceType` present and modeled
//! - Unknown elements
//! - Cardinality, including array vs. single value shape
//! - At most one alternative per choice element
//! - JSON shape and lexical form of primitive values
//! - Modifier extensions the consumer does not understand

use super::{items, resource_info, walk, Node};
use crate::validator::{IssueCode, ValidationIssue};
use crate::SchemaPlan;
use regex::Regex;
use serde_json::{Map, Value};
use sinter_models::{FieldDescriptor, KeyKind, TypeRef};
use std::sync::OnceLock;

pub fn validate_schema(resource: &Value, plan: &SchemaPlan, issues: &mut Vec<ValidationIssue>) {
    let Some(object) = resource.as_object() else {
        issues.push(ValidationIssue::fatal(
            IssueCode::Structure,
            "Resource must be a JSON object".to_string(),
        ));
        return;
    };

    match object.get("resourceType") {
        None => {
            issues.push(ValidationIssue::error(
                IssueCode::Required,
                "Missing required property 'resourceType'".to_string(),
            ));
            return;
        }
        Some(Value::String(_)) if resource_info(object).is_some() => {}
        Some(Value::String(name)) => {
            issues.push(
                ValidationIssue::warning(
                    IssueCode::NotSupported,
                    format!("Resource type '{}' is not modeled; its content was not checked", name),
                )
                .at(name.clone()),
            );
            return;
        }
        Some(_) => {
            issues.push(ValidationIssue::error(
                IssueCode::Structure,
                "Property 'resourceType' must be a string".to_string(),
            ));
            return;
        }
    }

    walk(resource, &mut |node| validate_node(node, plan, issues));
}

fn validate_node(node: &Node, plan: &SchemaPlan, issues: &mut Vec<ValidationIssue>) {
    if !plan.allow_unknown_elements {
        for key in node.object.keys() {
            if node.info.classify_key(key) == KeyKind::Unknown {
                issues.push(
                    ValidationIssue::error(
                        IssueCode::Structure,
                        format!("Unrecognized element '{}'", key),
                    )
                    .at(format!("{}.{}", node.path, key)),
                );
            }
        }
    }

    for field in node.info.fields {
        validate_field(node, field, issues);
    }

    if let Some(extensions) = node.object.get("modifierExtension") {
        let path = format!("{}.modifierExtension", node.path);
        for (ext_path, ext) in items(extensions, path) {
            let url = ext.get("url").and_then(Value::as_str).unwrap_or_default();
            if plan.understands(url) {
                continue;
            }
            let message = format!("Unrecognized modifier extension '{}'", url);
            let issue = if plan.allow_modifier_extensions {
                ValidationIssue::warning(IssueCode::Extension, message)
            } else {
                ValidationIssue::error(IssueCode::Extension, message)
            };
            issues.push(issue.at(ext_path));
        }
    }
}

fn validate_field(node: &Node, field: &'static FieldDescriptor, issues: &mut Vec<ValidationIssue>) {
    let location = format!("{}.{}", node.path, field.display_name());
    let present = present_keys(node.object, field);

    if present.len() > 1 {
        let keys: Vec<&str> = present.iter().map(|(key, _)| key.as_str()).collect();
        issues.push(
            ValidationIssue::error(
                IssueCode::Structure,
                format!("Only one of [{}] may be present", keys.join(", ")),
            )
            .at(location.clone()),
        );
    }

    let repeating = field.cardinality.is_repeating();
    let mut count = 0;
    let mut shape_ok = true;

    for (key, ty) in &present {
        let value = node.object.get(key.as_str());
        let meta = node.object.get(&format!("_{}", key));
        let key_path = format!("{}.{}", node.path, key);

        match (value, repeating) {
            (Some(Value::Array(values)), true) => {
                if values.is_empty() {
                    issues.push(
                        ValidationIssue::error(
                            IssueCode::Structure,
                            "Arrays must not be empty".to_string(),
                        )
                        .at(key_path.clone()),
                    );
                }
                count += values.len().max(array_len(meta));
            }
            (Some(Value::Array(values)), false) => {
                shape_ok = false;
                count += values.len();
                issues.push(
                    ValidationIssue::error(
                        IssueCode::Structure,
                        format!("Element '{}' allows a single value, found an array", key),
                    )
                    .at(key_path.clone()),
                );
            }
            (Some(_), true) => {
                shape_ok = false;
                count += 1;
                issues.push(
                    ValidationIssue::error(
                        IssueCode::Structure,
                        format!("Element '{}' must be an array", key),
                    )
                    .at(key_path.clone()),
                );
            }
            (Some(_), false) => count += 1,
            (None, _) => count += array_len(meta).max(1),
        }

        if let Some(value) = value {
            for (item_path, item) in items(value, key_path) {
                check_value(item, ty, &item_path, issues);
            }
        }
    }

    let card = field.cardinality;
    if count < card.min as usize {
        issues.push(
            ValidationIssue::error(
                IssueCode::Required,
                format!(
                    "{}: minimum required = {}, but only found {}",
                    location, card.min, count
                ),
            )
            .at(location.clone()),
        );
    }
    if shape_ok && !card.max.allows(count) {
        issues.push(
            ValidationIssue::error(
                IssueCode::Structure,
                format!(
                    "{}: maximum allowed = {}, but found {}",
                    location, card.max, count
                ),
            )
            .at(location),
        );
    }
}

/// Wire keys of a field present on the object, by value or `_` metadata
fn present_keys(object: &Map<String, Value>, field: &FieldDescriptor) -> Vec<(String, &'static TypeRef)> {
    field
        .wire_keys()
        .into_iter()
        .filter(|key| object.contains_key(key) || object.contains_key(&format!("_{}", key)))
        .filter_map(|key| field.match_key(&key).map(|ty| (key, ty)))
        .collect()
}

fn array_len(value: Option<&Value>) -> usize {
    match value {
        Some(Value::Array(items)) => items.len(),
        _ => 0,
    }
}

fn check_value(value: &Value, ty: &TypeRef, path: &str, issues: &mut Vec<ValidationIssue>) {
    if ty.is_primitive() {
        // Nulls keep arrays aligned with their `_` metadata
        if value.is_null() {
            return;
        }
        if let Err(message) = check_primitive(ty.code, value) {
            issues.push(ValidationIssue::error(IssueCode::Value, message).at(path.to_string()));
        }
    } else if !value.is_object() {
        issues.push(
            ValidationIssue::error(
                IssueCode::Structure,
                format!("Expected a JSON object for type '{}'", ty.code),
            )
            .at(path.to_string()),
        );
    }
}

/// JSON shape and lexical checks for FHIR primitives
pub(crate) fn check_primitive(code: &str, value: &Value) -> Result<(), String> {
    let invalid = || format!("Invalid value {} for type '{}'", value, code);

    match code {
        "boolean" => value.as_bool().map(|_| ()).ok_or_else(invalid),
        "integer" | "positiveInt" | "unsignedInt" => {
            let int = value
                .as_i64()
                .filter(|int| i32::try_from(*int).is_ok())
                .ok_or_else(invalid)?;
            match code {
                "positiveInt" if int < 1 => Err(invalid()),
                "unsignedInt" if int < 0 => Err(invalid()),
                _ => Ok(()),
            }
        }
        "decimal" if value.is_number() => Ok(()),
        "decimal" => Err(invalid()),
        _ => {
            let text = value.as_str().ok_or_else(invalid)?;
            let valid = match code {
                "xhtml" => text.trim_start().starts_with("<div"),
                _ => matches_lexical_form(code, text),
            };
            if valid {
                Ok(())
            } else {
                Err(invalid())
            }
        }
    }
}

const CODE: &str = r"^[^\s]+(\s[^\s]+)*$";
const ID: &str = r"^[A-Za-z0-9\-\.]{1,64}$";
const DATE: &str = r"^([0-9]([0-9]([0-9][1-9]|[1-9]0)|[1-9]00)|[1-9]000)(-(0[1-9]|1[0-2])(-(0[1-9]|[1-2][0-9]|3[0-1]))?)?$";
const DATE_TIME: &str = r"^([0-9]([0-9]([0-9][1-9]|[1-9]0)|[1-9]00)|[1-9]000)(-(0[1-9]|1[0-2])(-(0[1-9]|[1-2][0-9]|3[0-1])(T([01][0-9]|2[0-3]):[0-5][0-9]:([0-5][0-9]|60)(\.[0-9]+)?(Z|(\+|-)((0[0-9]|1[0-3]):[0-5][0-9]|14:00)))?)?)?$";
const INSTANT: &str = r"^([0-9]([0-9]([0-9][1-9]|[1-9]0)|[1-9]00)|[1-9]000)-(0[1-9]|1[0-2])-(0[1-9]|[1-2][0-9]|3[0-1])T([01][0-9]|2[0-3]):[0-5][0-9]:([0-5][0-9]|60)(\.[0-9]+)?(Z|(\+|-)((0[0-9]|1[0-3]):[0-5][0-9]|14:00))$";
const TIME: &str = r"^([01][0-9]|2[0-3]):[0-5][0-9]:([0-5][0-9]|60)(\.[0-9]+)?$";

/// Compiled lexical patterns of the constrained string primitives
struct Patterns {
    code: Regex,
    id: Regex,
    date: Regex,
    date_time: Regex,
    instant: Regex,
    time: Regex,
}

impl Patterns {
    fn compile() -> Result<Self, regex::Error> {
        Ok(Self {
            code: Regex::new(CODE)?,
            id: Regex::new(ID)?,
            date: Regex::new(DATE)?,
            date_time: Regex::new(DATE_TIME)?,
            instant: Regex::new(INSTANT)?,
            time: Regex::new(TIME)?,
        })
    }

    fn get() -> Option<&'static Patterns> {
        static PATTERNS: OnceLock<Option<Patterns>> = OnceLock::new();
        PATTERNS
            .get_or_init(|| match Patterns::compile() {
                Ok(patterns) => Some(patterns),
                Err(e) => {
                    tracing::error!("Primitive patterns failed to compile: {}", e);
                    None
                }
            })
            .as_ref()
    }

    fn for_code(&self, code: &str) -> Option<&Regex> {
        match code {
            "code" => Some(&self.code),
            "id" => Some(&self.id),
            "date" => Some(&self.date),
            "dateTime" => Some(&self.date_time),
            "instant" => Some(&self.instant),
            "time" => Some(&self.time),
            _ => None,
        }
    }
}

fn matches_lexical_form(code: &str, text: &str) -> bool {
    match Patterns::get().and_then(|p| p.for_code(code)) {
        Some(pattern) => pattern.is_match(text),
        None => !text.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn plan() -> SchemaPlan {
        SchemaPlan {
            allow_unknown_elements: false,
            allow_modifier_extensions: false,
            understood_modifier_extensions: vec!["http://example.org/understood".into()],
        }
    }

    fn run(resource: Value) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        validate_schema(&resource, &plan(), &mut issues);
        issues
    }

    fn locations(issues: &[ValidationIssue]) -> Vec<&str> {
        issues.iter().filter_map(|i| i.location.as_deref()).collect()
    }

    fn consent(extra: Value) -> Value {
        let mut consent = json!({
            "resourceType": "Consent",
            "status": "active",
            "scope": {"text": "privacy"},
            "category": [{"text": "consent"}]
        });
        if let (Value::Object(target), Value::Object(extra)) = (&mut consent, extra) {
            target.extend(extra);
        }
        consent
    }

    #[test]
    fn minimal_consent_is_clean() {
        assert!(run(consent(json!({}))).is_empty());
    }

    #[test]
    fn missing_required_fields_are_cited_by_path() {
        let issues = run(json!({"resourceType": "Consent", "scope": {"text": "x"}}));
        assert_eq!(locations(&issues), ["Consent.status", "Consent.category"]);
        assert!(issues.iter().all(|i| i.code == IssueCode::Required));
        assert!(issues[0].diagnostics.contains("minimum required = 1, but only found 0"));
    }

    #[test]
    fn single_valued_field_rejects_arrays() {
        let issues = run(consent(json!({"patient": [{"reference": "Patient/1"}, {"reference": "Patient/2"}]})));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].location.as_deref(), Some("Consent.patient"));
        assert_eq!(issues[0].code, IssueCode::Structure);
    }

    #[test]
    fn repeating_field_requires_array() {
        let issues = run(consent(json!({"category": {"text": "consent"}})));
        assert_eq!(locations(&issues), ["Consent.category"]);
        assert!(issues[0].diagnostics.contains("must be an array"));
    }

    #[test]
    fn misshaped_required_value_is_reported_once() {
        let issues = run(consent(json!({"status": ["active"]})));
        assert_eq!(locations(&issues), ["Consent.status"]);
        assert_eq!(issues[0].code, IssueCode::Structure);
    }

    #[test]
    fn choice_conflict_is_flagged() {
        let issues = run(consent(json!({
            "sourceAttachment": {"title": "scan"},
            "sourceReference": {"reference": "DocumentReference/1"}
        })));
        assert_eq!(issues.len(), 2);
        assert!(issues[0]
            .diagnostics
            .contains("Only one of [sourceAttachment, sourceReference]"));
        assert_eq!(issues[0].location.as_deref(), Some("Consent.source[x]"));
        assert!(issues[1].diagnostics.contains("maximum allowed = 1, but found 2"));
    }

    #[test]
    fn required_choice_must_have_an_alternative() {
        let issues = run(json!({
            "resourceType": "PlanDefinition",
            "status": "draft",
            "goal": [{"description": {"text": "g"}, "target": [{"measure": {"text": "m"}}]}]
        }));
        assert!(issues.is_empty(), "{:?}", issues);

        let issues = run(json!({
            "resourceType": "StructureMap",
            "url": "http://example.org/map",
            "name": "Map",
            "status": "draft",
            "group": [{
                "name": "g",
                "typeMode": "none",
                "input": [{"name": "src", "mode": "source"}],
                "rule": [{"name": "r", "source": [{"context": "src"}], "target": [{"parameter": [{}]}]}]
            }]
        }));
        assert_eq!(
            locations(&issues),
            ["StructureMap.group[0].rule[0].target[0].parameter[0].value[x]"]
        );
    }

    #[test]
    fn unknown_elements_are_errors_unless_allowed() {
        let input = consent(json!({"colour": "blue", "provision": {"shade": 1}}));
        let issues = run(input.clone());
        assert_eq!(locations(&issues), ["Consent.colour", "Consent.provision.shade"]);

        let mut lenient = plan();
        lenient.allow_unknown_elements = true;
        let mut issues = Vec::new();
        validate_schema(&input, &lenient, &mut issues);
        assert!(issues.is_empty());
    }

    #[test]
    fn primitive_shapes_are_checked() {
        let issues = run(json!({
            "resourceType": "StructureMap",
            "url": "http://example.org/map",
            "name": "Map",
            "status": "draft",
            "experimental": "yes",
            "date": "2024-13-01",
            "group": [{
                "name": "g",
                "input": [{"name": "src", "mode": "source"}],
                "rule": [{"name": "r", "source": [{"context": "src", "min": 1.5}]}]
            }]
        }));
        assert_eq!(
            locations(&issues),
            [
                "StructureMap.experimental",
                "StructureMap.date",
                "StructureMap.group[0].typeMode",
                "StructureMap.group[0].rule[0].source[0].min",
            ]
        );
        assert_eq!(issues[0].code, IssueCode::Value);
        assert_eq!(issues[2].code, IssueCode::Required);
    }

    #[test]
    fn primitive_metadata_counts_as_presence() {
        let input = json!({
            "resourceType": "Consent",
            "_status": {"extension": [{"url": "http://example.org/absent-reason", "valueCode": "unknown"}]},
            "scope": {"text": "privacy"},
            "category": [{"text": "consent"}]
        });
        assert!(run(input).is_empty());
    }

    #[test]
    fn modifier_extensions() {
        let input = consent(json!({
            "provision": {
                "modifierExtension": [
                    {"url": "http://example.org/understood", "valueBoolean": true},
                    {"url": "http://example.org/unknown", "valueBoolean": true}
                ]
            }
        }));
        let issues = run(input.clone());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, IssueCode::Extension);
        assert_eq!(
            issues[0].location.as_deref(),
            Some("Consent.provision.modifierExtension[1]")
        );

        let mut allowing = plan();
        allowing.allow_modifier_extensions = true;
        let mut issues = Vec::new();
        validate_schema(&input, &allowing, &mut issues);
        assert_eq!(issues[0].severity, crate::IssueSeverity::Warning);
    }

    #[test]
    fn resource_type_problems() {
        assert_eq!(run(json!({"status": "active"}))[0].code, IssueCode::Required);
        assert_eq!(run(json!({"resourceType": "Patient"}))[0].code, IssueCode::NotSupported);
        assert_eq!(run(json!("Consent"))[0].severity, crate::IssueSeverity::Fatal);
    }

    #[test]
    fn lexical_forms() {
        assert!(check_primitive("dateTime", &json!("2019-11-01T09:29:23.356+11:00")).is_ok());
        assert!(check_primitive("dateTime", &json!("2016-05")).is_ok());
        assert!(check_primitive("dateTime", &json!("2016-05-11T10:00")).is_err());
        assert!(check_primitive("instant", &json!("2016-05-11")).is_err());
        assert!(check_primitive("instant", &json!("2016-05-11T10:00:00Z")).is_ok());
        assert!(check_primitive("id", &json!("level-1")).is_ok());
        assert!(check_primitive("id", &json!("has space")).is_err());
        assert!(check_primitive("code", &json!(" padded")).is_err());
        assert!(check_primitive("positiveInt", &json!(0)).is_err());
        assert!(check_primitive("unsignedInt", &json!(0)).is_ok());
        assert!(check_primitive("integer", &json!(3_000_000_000i64)).is_err());
        assert!(check_primitive("decimal", &json!("1.0")).is_err());
        assert!(check_primitive("string", &json!("")).is_err());
        assert!(check_primitive("date", &json!("2016-13-01")).is_err());
        assert!(check_primitive("time", &json!("24:00:00")).is_err());
    }

    #[test]
    fn patterns_compile() {
        assert!(Patterns::compile().is_ok());
    }
}
