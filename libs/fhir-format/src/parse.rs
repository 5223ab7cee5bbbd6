//! Typed parsing with control over unexpected content
//!
//! `serde` alone ignores keys it does not know and cannot see a second
//! alternative of a choice element. Before handing a payload to the typed
//! records, the parser walks it against the model metadata:
//!
//! - [`ParseMode::Strict`] fails on the first unknown element or choice
//!   conflict.
//! - [`ParseMode::Lenient`] drops unknown elements and every choice
//!   alternative after the first one.

use crate::error::{FormatError, Result};
use crate::xml::xml_to_value;
use serde_json::{Map, Value};
use sinter_models::{
    registry, AnyResource, Element, Extension, KeyKind, Resource, Serializable, TypeInfo,
    TypeRef,
};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    #[default]
    Strict,
    Lenient,
}

/// Parse FHIR JSON text into a typed resource
pub fn parse_json<T>(input: &str, mode: ParseMode) -> Result<T>
where
    T: Resource + Serializable,
{
    parse_value(serde_json::from_str(input)?, mode)
}

/// Parse FHIR XML text into a typed resource
pub fn parse_xml<T>(input: &str, mode: ParseMode) -> Result<T>
where
    T: Resource + Serializable,
{
    parse_value(xml_to_value(input)?, mode)
}

/// Parse a JSON value into a typed resource
pub fn parse_value<T>(mut value: Value, mode: ParseMode) -> Result<T>
where
    T: Resource + Serializable,
{
    let found = resource_type(&value)?;
    if found != T::TYPE_NAME {
        return Err(FormatError::WrongResourceType {
            expected: T::TYPE_NAME.to_string(),
            found,
        });
    }

    check_resource(&mut value, T::type_info(), mode)?;
    Ok(T::from_value(value)?)
}

/// Parse a JSON value of any resource type
///
/// Types without a model are returned as [`AnyResource::Other`] unchecked.
pub fn parse_any(mut value: Value, mode: ParseMode) -> Result<AnyResource> {
    let found = resource_type(&value)?;
    if let Some(info) = registry::type_info(&found).filter(|info| info.is_resource()) {
        check_resource(&mut value, info, mode)?;
    }
    Ok(AnyResource::from_value(value)?)
}

fn resource_type(value: &Value) -> Result<String> {
    let obj = value.as_object().ok_or(FormatError::ExpectedObject)?;
    obj.get("resourceType")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(FormatError::MissingResourceType)
}

fn check_resource(value: &mut Value, info: &'static TypeInfo, mode: ParseMode) -> Result<()> {
    match value {
        Value::Object(obj) => check_object(obj, info, info.name, mode),
        _ => Err(FormatError::ExpectedObject),
    }
}

fn check_object(
    obj: &mut Map<String, Value>,
    info: &'static TypeInfo,
    path: &str,
    mode: ParseMode,
) -> Result<()> {
    let mut dropped: Vec<String> = Vec::new();
    // First alternative seen per choice field
    let mut chosen: Vec<(&'static str, &str)> = Vec::new();

    for key in obj.keys() {
        match info.classify_key(key) {
            KeyKind::Unknown => {
                let at = format!("{}.{}", path, key);
                if mode == ParseMode::Strict {
                    warn!(path = %at, "rejecting unknown element");
                    return Err(FormatError::UnknownElement { path: at });
                }
                debug!(path = %at, "dropping unknown element");
                dropped.push(key.clone());
            }
            KeyKind::Field(field, _) if field.is_choice() => {
                match chosen.iter().find(|(name, _)| *name == field.name) {
                    None => chosen.push((field.name, key.as_str())),
                    Some(_) if mode == ParseMode::Strict => {
                        let at = format!("{}.{}", path, field.display_name());
                        let keys: Vec<String> = obj
                            .keys()
                            .filter(|k| field.match_key(k).is_some())
                            .cloned()
                            .collect();
                        warn!(path = %at, ?keys, "rejecting choice conflict");
                        return Err(FormatError::ChoiceConflict { path: at, keys });
                    }
                    Some((_, first)) => {
                        debug!(path, kept = *first, dropped = %key, "dropping choice alternative");
                        dropped.push(key.clone());
                    }
                }
            }
            _ => {}
        }
    }

    if !dropped.is_empty() {
        obj.retain(|key, _| {
            let name = key.strip_prefix('_').unwrap_or(key);
            !dropped.iter().any(|d| d == key || d == name)
        });
    }

    for (key, value) in obj.iter_mut() {
        let child_path = format!("{}.{}", path, key);
        match info.classify_key(key) {
            KeyKind::Field(_, ty) => check_child(value, ty, &child_path, mode)?,
            KeyKind::PrimitiveMetadata(..) => check_primitive_metadata(value, &child_path, mode)?,
            _ => {}
        }
    }
    Ok(())
}

fn check_child(value: &mut Value, ty: &'static TypeRef, path: &str, mode: ParseMode) -> Result<()> {
    if ty.is_resource() {
        return for_each_object(value, path, &mut |obj, path| {
            let nested = obj
                .get("resourceType")
                .and_then(Value::as_str)
                .and_then(registry::type_info)
                .filter(|info| info.is_resource());
            match nested {
                Some(info) => check_object(obj, info, path, mode),
                None => Ok(()),
            }
        });
    }

    match ty.type_info() {
        Some(info) => for_each_object(value, path, &mut |obj, path| {
            check_object(obj, info, path, mode)
        }),
        None => Ok(()),
    }
}

/// `_field` entries carry an element id and extensions
fn check_primitive_metadata(value: &mut Value, path: &str, mode: ParseMode) -> Result<()> {
    for_each_object(value, path, &mut |obj, path| {
        match obj.get_mut("extension") {
            Some(extensions) => {
                let path = format!("{}.extension", path);
                for_each_object(extensions, &path, &mut |ext, path| {
                    check_object(ext, Extension::type_info(), path, mode)
                })
            }
            None => Ok(()),
        }
    })
}

fn for_each_object(
    value: &mut Value,
    path: &str,
    f: &mut dyn FnMut(&mut Map<String, Value>, &str) -> Result<()>,
) -> Result<()> {
    match value {
        Value::Object(obj) => f(obj, path),
        Value::Array(items) => {
            for (idx, item) in items.iter_mut().enumerate() {
                if let Value::Object(obj) = item {
                    f(obj, &format!("{}[{}]", path, idx))?;
                }
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sinter_models::{Consent, ConsentSource, PlanDefinition};

    fn consent_with(extra: Value) -> Value {
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
    fn strict_accepts_clean_payload() {
        let consent: Consent = parse_value(consent_with(json!({})), ParseMode::Strict).unwrap();
        assert_eq!(consent.status.as_deref(), Some("active"));
    }

    #[test]
    fn strict_rejects_unknown_element_with_path() {
        let input = consent_with(json!({
            "provision": {"type": "permit", "provision": [{"colour": "blue"}]}
        }));
        let err = parse_value::<Consent>(input, ParseMode::Strict).unwrap_err();
        match err {
            FormatError::UnknownElement { path } => {
                assert_eq!(path, "Consent.provision.provision[0].colour")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn lenient_drops_unknown_elements() {
        let input = consent_with(json!({"colour": "blue", "_colour": {"id": "c"}}));
        let consent: Consent = parse_value(input, ParseMode::Lenient).unwrap();
        let value = consent.to_value().unwrap();
        assert!(value.get("colour").is_none());
        assert!(value.get("_colour").is_none());
    }

    #[test]
    fn strict_rejects_choice_conflict() {
        let input = consent_with(json!({
            "sourceAttachment": {"title": "scan"},
            "sourceReference": {"reference": "DocumentReference/1"}
        }));
        let err = parse_value::<Consent>(input, ParseMode::Strict).unwrap_err();
        match err {
            FormatError::ChoiceConflict { path, keys } => {
                assert_eq!(path, "Consent.source[x]");
                assert_eq!(keys, vec!["sourceAttachment", "sourceReference"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn lenient_keeps_first_alternative() {
        let input = consent_with(json!({
            "sourceReference": {"reference": "DocumentReference/1"},
            "sourceAttachment": {"title": "scan"}
        }));
        let consent: Consent = parse_value(input, ParseMode::Lenient).unwrap();
        assert!(matches!(consent.source, Some(ConsentSource::Reference(_))));
    }

    #[test]
    fn extension_values_are_checked_too() {
        let input = consent_with(json!({
            "extension": [{
                "url": "http://example.org/ext",
                "valueString": "a",
                "valueBoolean": true
            }]
        }));
        let err = parse_value::<Consent>(input, ParseMode::Strict).unwrap_err();
        assert!(
            matches!(err, FormatError::ChoiceConflict { ref path, .. } if path == "Consent.extension[0].value[x]")
        );
    }

    #[test]
    fn contained_resources_are_checked() {
        let input = json!({
            "resourceType": "PlanDefinition",
            "contained": [{"resourceType": "Consent", "status": "draft", "bogus": 1}],
            "status": "draft"
        });
        let err = parse_value::<PlanDefinition>(input, ParseMode::Strict).unwrap_err();
        assert!(
            matches!(err, FormatError::UnknownElement { ref path } if path == "PlanDefinition.contained[0].bogus")
        );
    }

    #[test]
    fn resource_type_is_enforced() {
        let err = parse_json::<PlanDefinition>(r#"{"resourceType": "Consent"}"#, ParseMode::Lenient)
            .unwrap_err();
        assert!(matches!(err, FormatError::WrongResourceType { .. }));

        let err = parse_any(json!({"status": "draft"}), ParseMode::Strict).unwrap_err();
        assert!(matches!(err, FormatError::MissingResourceType));
    }

    #[test]
    fn unmodeled_resources_pass_through() {
        let input = json!({"resourceType": "Basic", "anything": true});
        let any = parse_any(input.clone(), ParseMode::Strict).unwrap();
        assert_eq!(any.resource_type(), "Basic");
        assert_eq!(any.to_value().unwrap(), input);
    }
}
