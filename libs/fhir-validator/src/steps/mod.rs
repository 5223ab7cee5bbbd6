//! Validation steps
//!
//! Every step walks the JSON resource alongside the static metadata of
//! `sinter-models`. [`walk`] yields each object node once, paired with the
//! [`TypeInfo`] describing it and its location.

pub mod references;
pub mod schema;
pub mod terminology;

use serde_json::{Map, Value};
use sinter_models::{registry, Element, Extension, KeyKind, TypeInfo};

/// An object node of a resource tree
pub(crate) struct Node<'a> {
    pub info: &'static TypeInfo,
    pub object: &'a Map<String, Value>,
    /// Location of the node (`Consent.provision.provision[0]`)
    pub path: String,
    /// Location of the resource the node belongs to
    pub resource_path: String,
}

/// Metadata of a modeled resource object
pub(crate) fn resource_info(object: &Map<String, Value>) -> Option<&'static TypeInfo> {
    object
        .get("resourceType")
        .and_then(Value::as_str)
        .and_then(registry::type_info)
        .filter(|info| info.is_resource())
}

/// Visit every object node of a modeled resource, parents first
pub(crate) fn walk<'a>(resource: &'a Value, visit: &mut dyn FnMut(&Node<'a>)) {
    let Some(object) = resource.as_object() else {
        return;
    };
    if let Some(info) = resource_info(object) {
        let path = info.name.to_string();
        walk_object(info, object, path.clone(), path, visit);
    }
}

fn walk_object<'a>(
    info: &'static TypeInfo,
    object: &'a Map<String, Value>,
    path: String,
    resource_path: String,
    visit: &mut dyn FnMut(&Node<'a>),
) {
    visit(&Node {
        info,
        object,
        path: path.clone(),
        resource_path: resource_path.clone(),
    });

    for (key, value) in object {
        match info.classify_key(key) {
            KeyKind::Field(_, ty) if ty.is_resource() => {
                for (item_path, item) in objects(value, format!("{}.{}", path, key)) {
                    if let Some(nested) = resource_info(item) {
                        walk_object(nested, item, item_path.clone(), item_path, visit);
                    }
                }
            }
            KeyKind::Field(_, ty) => {
                if let Some(child) = ty.type_info() {
                    for (item_path, item) in objects(value, format!("{}.{}", path, key)) {
                        walk_object(child, item, item_path, resource_path.clone(), visit);
                    }
                }
            }
            KeyKind::PrimitiveMetadata(..) => {
                let base = format!("{}.{}", path, key.trim_start_matches('_'));
                for (item_path, meta) in objects(value, base) {
                    let Some(extensions) = meta.get("extension") else {
                        continue;
                    };
                    let ext_path = format!("{}.extension", item_path);
                    for (ext_path, ext) in objects(extensions, ext_path) {
                        walk_object(
                            Extension::type_info(),
                            ext,
                            ext_path,
                            resource_path.clone(),
                            visit,
                        );
                    }
                }
            }
            _ => {}
        }
    }
}

/// Object items of a value with their locations; arrays get an index suffix
pub(crate) fn objects(value: &Value, path: String) -> Vec<(String, &Map<String, Value>)> {
    match value {
        Value::Object(object) => vec![(path, object)],
        Value::Array(items) => items
            .iter()
            .enumerate()
            .filter_map(|(idx, item)| {
                item.as_object()
                    .map(|object| (format!("{}[{}]", path, idx), object))
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// All items of a value with their locations
pub(crate) fn items(value: &Value, path: String) -> Vec<(String, &Value)> {
    match value {
        Value::Array(values) => values
            .iter()
            .enumerate()
            .map(|(idx, item)| (format!("{}[{}]", path, idx), item))
            .collect(),
        other => vec![(path, other)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn walk_visits_nested_and_contained_nodes() {
        let plan = json!({
            "resourceType": "PlanDefinition",
            "contained": [{"resourceType": "Consent", "status": "draft"}],
            "status": "draft",
            "_status": {"extension": [{"url": "http://example.org/e", "valueString": "x"}]},
            "action": [{"id": "a", "action": [{"id": "b"}]}]
        });

        let mut seen = Vec::new();
        walk(&plan, &mut |node| {
            seen.push((node.path.clone(), node.info.name, node.resource_path.clone()))
        });

        let paths: Vec<&str> = seen.iter().map(|(path, _, _)| path.as_str()).collect();
        assert_eq!(
            paths,
            [
                "PlanDefinition",
                "PlanDefinition.contained[0]",
                "PlanDefinition.status.extension[0]",
                "PlanDefinition.action[0]",
                "PlanDefinition.action[0].action[0]",
            ]
        );

        let names: Vec<&str> = seen.iter().map(|(_, name, _)| *name).collect();
        assert_eq!(
            names,
            [
                "PlanDefinition",
                "Consent",
                "Extension",
                "PlanDefinitionAction",
                "PlanDefinitionAction",
            ]
        );

        let owners: Vec<&str> = seen.iter().map(|(_, _, owner)| owner.as_str()).collect();
        assert_eq!(
            owners,
            [
                "PlanDefinition",
                "PlanDefinition.contained[0]",
                "PlanDefinition",
                "PlanDefinition",
                "PlanDefinition",
            ]
        );
    }

    #[test]
    fn unmodeled_resources_are_not_walked() {
        let mut count = 0;
        walk(&json!({"resourceType": "Patient", "id": "p"}), &mut |_| count += 1);
        walk(&json!(["not", "an", "object"]), &mut |_| count += 1);
        assert_eq!(count, 0);
    }
}
