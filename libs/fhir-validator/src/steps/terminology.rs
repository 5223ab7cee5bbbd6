//! Terminology validation against the value sets enumerated in the model
//!
//! Only bindings whose members ship with `sinter-models` are checked;
//! example bindings and externally defined value sets never produce issues.

use super::{items, walk, Node};
use crate::validator::{IssueCode, ValidationIssue};
use crate::{ExtensibleHandling, PreferredHandling, TerminologyPlan};
use serde_json::Value;
use sinter_models::{BindingStrength, FieldDescriptor, ValueSetBinding};

pub fn validate_terminology(
    resource: &Value,
    plan: &TerminologyPlan,
    issues: &mut Vec<ValidationIssue>,
) {
    walk(resource, &mut |node| validate_node(node, plan, issues));
}

fn validate_node(node: &Node, plan: &TerminologyPlan, issues: &mut Vec<ValidationIssue>) {
    for field in node.info.fields {
        let Some(binding) = field.binding else {
            continue;
        };
        if !binding.is_enumerated() || binding.strength == BindingStrength::Example {
            continue;
        }
        validate_field(node, field, binding, plan, issues);
    }
}

fn validate_field(
    node: &Node,
    field: &FieldDescriptor,
    binding: &ValueSetBinding,
    plan: &TerminologyPlan,
    issues: &mut Vec<ValidationIssue>,
) {
    for key in field.wire_keys() {
        let (Some(value), Some(ty)) = (node.object.get(&key), field.match_key(&key)) else {
            continue;
        };

        for (path, item) in items(value, format!("{}.{}", node.path, key)) {
            let finding = match ty.code {
                "code" | "string" | "uri" => item
                    .as_str()
                    .filter(|code| !binding.contains(None, code))
                    .map(|code| format!("'{}'", code)),
                "Coding" => check_coding(item, binding),
                "CodeableConcept" => check_concept(item, binding),
                _ => None,
            };

            if let Some(found) = finding {
                if let Some(issue) = report(&found, binding, plan) {
                    issues.push(issue.at(path));
                }
            }
        }
    }
}

/// The rendered code when it lies outside the binding
fn check_coding(coding: &Value, binding: &ValueSetBinding) -> Option<String> {
    let code = coding.get("code").and_then(Value::as_str)?;
    let system = coding.get("system").and_then(Value::as_str);
    if binding.contains(system, code) {
        return None;
    }
    Some(match system {
        Some(system) => format!("'{}#{}'", system, code),
        None => format!("'{}'", code),
    })
}

fn check_concept(concept: &Value, binding: &ValueSetBinding) -> Option<String> {
    let codings: Vec<&Value> = concept
        .get("coding")
        .and_then(Value::as_array)
        .map(|codings| codings.iter().collect())
        .unwrap_or_default();

    if codings.is_empty() {
        // Text alone satisfies anything weaker than a required binding
        return (binding.strength == BindingStrength::Required)
            .then(|| "a concept without codings".to_string());
    }

    let mut outside = Vec::new();
    for coding in codings {
        match check_coding(coding, binding) {
            Some(found) => outside.push(found),
            None if coding.get("code").is_some() => return None,
            None => {}
        }
    }
    if outside.is_empty() {
        return None;
    }
    Some(outside.join(", "))
}

fn report(
    found: &str,
    binding: &ValueSetBinding,
    plan: &TerminologyPlan,
) -> Option<ValidationIssue> {
    let message = format!(
        "{} is not in the value set '{}' ({} binding)",
        found, binding.value_set, binding.strength
    );

    match binding.strength {
        BindingStrength::Required => Some(ValidationIssue::error(IssueCode::CodeInvalid, message)),
        BindingStrength::Extensible => match plan.extensible_handling {
            ExtensibleHandling::Ignore => None,
            ExtensibleHandling::Warn => {
                Some(ValidationIssue::warning(IssueCode::CodeInvalid, message))
            }
            ExtensibleHandling::Error => {
                Some(ValidationIssue::error(IssueCode::CodeInvalid, message))
            }
        },
        BindingStrength::Preferred => match plan.preferred_handling {
            PreferredHandling::Ignore => None,
            PreferredHandling::Information => {
                Some(ValidationIssue::information(IssueCode::CodeInvalid, message))
            }
            PreferredHandling::Warn => {
                Some(ValidationIssue::warning(IssueCode::CodeInvalid, message))
            }
        },
        BindingStrength::Example => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IssueSeverity, TerminologyMode};
    use serde_json::json;

    fn plan(extensible: ExtensibleHandling, preferred: PreferredHandling) -> TerminologyPlan {
        TerminologyPlan {
            mode: TerminologyMode::Local,
            extensible_handling: extensible,
            preferred_handling: preferred,
        }
    }

    fn run(resource: Value) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        validate_terminology(
            &resource,
            &plan(ExtensibleHandling::Warn, PreferredHandling::Information),
            &mut issues,
        );
        issues
    }

    #[test]
    fn required_code_outside_value_set_is_an_error() {
        let issues = run(json!({"resourceType": "Consent", "status": "bogus"}));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, IssueSeverity::Error);
        assert_eq!(issues[0].code, IssueCode::CodeInvalid);
        assert_eq!(issues[0].location.as_deref(), Some("Consent.status"));
        assert!(issues[0].diagnostics.contains("'bogus'"));
        assert!(issues[0].diagnostics.contains("consent-state-codes"));

        assert!(run(json!({"resourceType": "Consent", "status": "active"})).is_empty());
    }

    #[test]
    fn example_bindings_are_never_checked() {
        let issues = run(json!({
            "resourceType": "PlanDefinition",
            "status": "draft",
            "topic": [{"coding": [{"system": "http://example.org/topics", "code": "nonsense"}]}]
        }));
        assert!(issues.is_empty());
    }

    #[test]
    fn extensible_handling_controls_severity() {
        let consent = json!({
            "resourceType": "Consent",
            "status": "active",
            "scope": {"coding": [{"system": "http://example.org/scopes", "code": "other"}]}
        });

        let issues = run(consent.clone());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, IssueSeverity::Warning);
        assert_eq!(issues[0].location.as_deref(), Some("Consent.scope"));

        let mut strict = Vec::new();
        validate_terminology(
            &consent,
            &plan(ExtensibleHandling::Error, PreferredHandling::Information),
            &mut strict,
        );
        assert_eq!(strict[0].severity, IssueSeverity::Error);

        let mut ignored = Vec::new();
        validate_terminology(
            &consent,
            &plan(ExtensibleHandling::Ignore, PreferredHandling::Information),
            &mut ignored,
        );
        assert!(ignored.is_empty());
    }

    #[test]
    fn concept_passes_when_any_coding_matches() {
        let issues = run(json!({
            "resourceType": "Consent",
            "status": "active",
            "scope": {"coding": [
                {"system": "http://example.org/scopes", "code": "local"},
                {"system": "http://terminology.hl7.org/CodeSystem/consentscope", "code": "patient-privacy"}
            ]}
        }));
        assert!(issues.is_empty(), "{:?}", issues);
    }

    #[test]
    fn text_only_concepts() {
        // Extensible scope with only text is acceptable
        assert!(run(json!({
            "resourceType": "Consent",
            "status": "active",
            "scope": {"text": "privacy"}
        }))
        .is_empty());
    }

    #[test]
    fn preferred_binding_reports_information() {
        let issues = run(json!({
            "resourceType": "PlanDefinition",
            "status": "draft",
            "goal": [{
                "priority": {"coding": [{"system": "http://example.org/p", "code": "urgent"}]},
                "description": {"text": "g"}
            }]
        }));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, IssueSeverity::Information);
        assert_eq!(
            issues[0].location.as_deref(),
            Some("PlanDefinition.goal[0].priority")
        );
    }

    #[test]
    fn repeated_codes_are_located_by_index() {
        let issues = run(json!({
            "resourceType": "ImplementationGuide",
            "url": "http://example.org/ig",
            "name": "IG",
            "status": "draft",
            "packageId": "example.ig",
            "fhirVersion": ["4.0.1", "4.3.0"]
        }));
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].location.as_deref(),
            Some("ImplementationGuide.fhirVersion[1]")
        );
    }
}
