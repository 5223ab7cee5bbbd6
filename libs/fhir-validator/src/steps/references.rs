//! Resolution of references that stay inside a single resource
//!
//! Two kinds are checked:
//! - elements declaring a local target (`PlanDefinition.action.goalId` must
//!   name the `id` of a `PlanDefinition.goal` of the same resource)
//! - `Reference.reference` values of the form `#id`, which must name a
//!   contained resource

use super::{items, walk};
use crate::validator::{IssueCode, ValidationIssue};
use crate::ReferencesPlan;
use serde_json::{Map, Value};
use sinter_models::TypeInfo;
use std::collections::HashSet;

struct Collected<'a> {
    info: &'static TypeInfo,
    object: &'a Map<String, Value>,
    path: String,
    resource_path: String,
}

pub fn validate_references(
    resource: &Value,
    _plan: &ReferencesPlan,
    issues: &mut Vec<ValidationIssue>,
) {
    let mut nodes = Vec::new();
    walk(resource, &mut |node| {
        nodes.push(Collected {
            info: node.info,
            object: node.object,
            path: node.path.clone(),
            resource_path: node.resource_path.clone(),
        })
    });
    if nodes.is_empty() {
        return;
    }

    let contained = contained_ids(resource);

    for node in &nodes {
        check_local_targets(node, &nodes, issues);

        if node.info.name == "Reference" {
            check_contained_reference(node, &contained, issues);
        }
    }
}

fn check_local_targets(node: &Collected, nodes: &[Collected], issues: &mut Vec<ValidationIssue>) {
    for field in node.info.fields {
        let Some(local) = field.local_ref else {
            continue;
        };
        let Some(value) = node.object.get(field.name) else {
            continue;
        };

        for (path, item) in items(value, format!("{}.{}", node.path, field.name)) {
            let Some(wanted) = item.as_str() else {
                continue;
            };
            let found = nodes.iter().any(|target| {
                target.resource_path == node.resource_path
                    && target.info.path == local.target_path
                    && target.object.get(local.key).and_then(Value::as_str) == Some(wanted)
            });
            if !found {
                issues.push(
                    ValidationIssue::error(
                        IssueCode::NotFound,
                        format!(
                            "No {} with {} '{}' exists in this resource",
                            local.target_path, local.key, wanted
                        ),
                    )
                    .at(path),
                );
            }
        }
    }
}

fn check_contained_reference(
    node: &Collected,
    contained: &HashSet<&str>,
    issues: &mut Vec<ValidationIssue>,
) {
    let Some(reference) = node.object.get("reference").and_then(Value::as_str) else {
        return;
    };
    let Some(id) = reference.strip_prefix('#') else {
        return;
    };
    // A bare `#` points at the containing resource
    if id.is_empty() || contained.contains(id) {
        return;
    }
    issues.push(
        ValidationIssue::error(
            IssueCode::NotFound,
            format!("Contained resource '{}' was not found", reference),
        )
        .at(format!("{}.reference", node.path)),
    );
}

fn contained_ids(resource: &Value) -> HashSet<&str> {
    resource
        .get("contained")
        .and_then(Value::as_array)
        .map(|contained| {
            contained
                .iter()
                .filter_map(|r| r.get("id").and_then(Value::as_str))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReferenceMode;
    use serde_json::json;

    fn run(resource: Value) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        validate_references(
            &resource,
            &ReferencesPlan {
                mode: ReferenceMode::Local,
            },
            &mut issues,
        );
        issues
    }

    fn plan_definition(goal_ids: Value) -> Value {
        json!({
            "resourceType": "PlanDefinition",
            "status": "draft",
            "goal": [
                {"id": "weight", "description": {"text": "Lose weight"}},
                {"id": "bp", "description": {"text": "Lower blood pressure"}}
            ],
            "action": [
                {"id": "screen", "goalId": goal_ids},
                {"id": "follow-up", "relatedAction": [{"actionId": "screen", "relationship": "after"}]}
            ]
        })
    }

    #[test]
    fn goal_ids_resolve() {
        assert!(run(plan_definition(json!(["weight", "bp"]))).is_empty());

        let issues = run(plan_definition(json!(["weight", "sleep"])));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, IssueCode::NotFound);
        assert_eq!(
            issues[0].location.as_deref(),
            Some("PlanDefinition.action[0].goalId[1]")
        );
        assert!(issues[0].diagnostics.contains("'sleep'"));
    }

    #[test]
    fn related_actions_resolve_at_any_depth() {
        let issues = run(json!({
            "resourceType": "PlanDefinition",
            "status": "draft",
            "action": [{
                "id": "outer",
                "action": [
                    {"id": "inner"},
                    {"relatedAction": [
                        {"actionId": "inner", "relationship": "after"},
                        {"actionId": "missing", "relationship": "before"}
                    ]}
                ]
            }]
        }));
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].location.as_deref(),
            Some("PlanDefinition.action[0].action[1].relatedAction[1].actionId")
        );
    }

    #[test]
    fn grouping_ids_resolve() {
        let issues = run(json!({
            "resourceType": "ImplementationGuide",
            "definition": {
                "grouping": [{"id": "profiles", "name": "Profiles"}],
                "resource": [
                    {"reference": {"reference": "StructureDefinition/a"}, "groupingId": "profiles"},
                    {"reference": {"reference": "StructureDefinition/b"}, "groupingId": "examples"}
                ]
            }
        }));
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].location.as_deref(),
            Some("ImplementationGuide.definition.resource[1].groupingId")
        );
    }

    #[test]
    fn contained_references() {
        let issues = run(json!({
            "resourceType": "Consent",
            "status": "active",
            "contained": [{"resourceType": "Patient", "id": "pat"}],
            "patient": {"reference": "#pat"},
            "performer": [
                {"reference": "#"},
                {"reference": "#gone"},
                {"reference": "Practitioner/1"}
            ]
        }));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].location.as_deref(), Some("Consent.performer[1].reference"));
        assert!(issues[0].diagnostics.contains("'#gone'"));
    }

    #[test]
    fn local_targets_do_not_cross_resource_boundaries() {
        let issues = run(json!({
            "resourceType": "PlanDefinition",
            "status": "draft",
            "contained": [{
                "resourceType": "PlanDefinition",
                "id": "inner",
                "status": "draft",
                "action": [{"goalId": ["outer-goal"]}]
            }],
            "goal": [{"id": "outer-goal", "description": {"text": "g"}}]
        }));
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].location.as_deref(),
            Some("PlanDefinition.contained[0].action[0].goalId[0]")
        );
    }
}
