//! Container for a resource of any type
//!
//! Used for `contained` resources and for callers that receive a payload
//! without knowing its type up front. Types this crate does not model are
//! kept as raw JSON.

use super::{Consent, ImplementationGuide, PlanDefinition, StructureMap};
use crate::descriptor::TypeInfo;
use crate::element::{json_kind, Element, Resource, Serializable};
use crate::error::{Error, Result};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

macro_rules! any_resource {
    ($($variant:ident),+ $(,)?) => {
        /// A resource of any type, dispatched on `resourceType`
        #[derive(Debug, Clone, PartialEq)]
        pub enum AnyResource {
            $( $variant(Box<$variant>), )+
            /// A resource type without a typed model here
            Other(Value),
        }

        /// Resource types with a typed model
        pub const MODELED_RESOURCES: &[&str] = &[$(stringify!($variant)),+];

        impl AnyResource {
            pub fn resource_type(&self) -> &str {
                match self {
                    $( Self::$variant(_) => $variant::TYPE_NAME, )+
                    Self::Other(value) => value
                        .get("resourceType")
                        .and_then(Value::as_str)
                        .unwrap_or_default(),
                }
            }

            pub fn id(&self) -> Option<&str> {
                match self {
                    $( Self::$variant(r) => r.id.as_deref(), )+
                    Self::Other(value) => value.get("id").and_then(Value::as_str),
                }
            }

            /// Metadata of the typed model, `None` for [`AnyResource::Other`]
            pub fn type_info(&self) -> Option<&'static TypeInfo> {
                match self {
                    $( Self::$variant(_) => Some($variant::type_info()), )+
                    Self::Other(_) => None,
                }
            }

            pub fn is_modeled(&self) -> bool {
                !matches!(self, Self::Other(_))
            }

            /// Dispatch a JSON object on its `resourceType`
            pub fn from_value(value: Value) -> Result<Self> {
                let resource_type = match &value {
                    Value::Object(map) => match map.get("resourceType") {
                        Some(Value::String(name)) => name.clone(),
                        Some(other) => {
                            return Err(Error::InvalidFieldValue(format!(
                                "resourceType must be a string, got {}",
                                json_kind(other)
                            )))
                        }
                        None => return Err(Error::MissingField("resourceType".into())),
                    },
                    other => {
                        return Err(Error::InvalidResource(format!(
                            "expected a JSON object, got {}",
                            json_kind(other)
                        )))
                    }
                };

                match resource_type.as_str() {
                    $( stringify!($variant) => Ok(Self::$variant(Box::new(
                        serde_json::from_value(value)?,
                    ))), )+
                    _ => Ok(Self::Other(value)),
                }
            }

            pub fn to_value(&self) -> Result<Value> {
                Ok(match self {
                    $( Self::$variant(r) => serde_json::to_value(r.as_ref())?, )+
                    Self::Other(value) => value.clone(),
                })
            }
        }

        impl Serialize for AnyResource {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                match self {
                    $( Self::$variant(r) => r.serialize(serializer), )+
                    Self::Other(value) => value.serialize(serializer),
                }
            }
        }

        $(
            impl From<$variant> for AnyResource {
                fn from(resource: $variant) -> Self {
                    Self::$variant(Box::new(resource))
                }
            }
        )+
    };
}

any_resource!(Consent, ImplementationGuide, PlanDefinition, StructureMap);

impl<'de> Deserialize<'de> for AnyResource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        AnyResource::from_value(value).map_err(D::Error::custom)
    }
}

impl Serializable for AnyResource {
    fn to_value(&self) -> Result<Value> {
        AnyResource::to_value(self)
    }

    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn from_value(value: Value) -> Result<Self> {
        AnyResource::from_value(value)
    }

    fn from_json(json: &str) -> Result<Self> {
        AnyResource::from_value(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dispatches_on_resource_type() {
        let resource = AnyResource::from_value(json!({
            "resourceType": "Consent",
            "id": "c1",
            "status": "active"
        }))
        .unwrap();
        assert!(matches!(resource, AnyResource::Consent(_)));
        assert_eq!(resource.resource_type(), "Consent");
        assert_eq!(resource.id(), Some("c1"));
        assert_eq!(resource.type_info().unwrap().name, "Consent");
    }

    #[test]
    fn unmodeled_types_are_kept_verbatim() {
        let input = json!({"resourceType": "Patient", "id": "p", "active": true});
        let resource = AnyResource::from_value(input.clone()).unwrap();
        assert!(!resource.is_modeled());
        assert_eq!(resource.resource_type(), "Patient");
        assert_eq!(resource.to_value().unwrap(), input);
    }

    #[test]
    fn missing_resource_type_is_an_error() {
        let err = AnyResource::from_value(json!({"id": "x"})).unwrap_err();
        assert!(matches!(err, Error::MissingField(_)));
        assert!(AnyResource::from_value(json!([1, 2])).is_err());
    }

    #[test]
    fn contained_resources_round_trip() {
        let input = json!({
            "resourceType": "PlanDefinition",
            "id": "outer",
            "status": "draft",
            "contained": [
                {"resourceType": "StructureMap", "id": "inner", "status": "draft"},
                {"resourceType": "Library", "id": "lib", "status": "active"}
            ]
        });
        let resource = AnyResource::from_value(input.clone()).unwrap();
        let AnyResource::PlanDefinition(plan) = &resource else {
            panic!("expected a PlanDefinition");
        };
        assert_eq!(plan.contained.len(), 2);
        assert!(matches!(plan.contained[0], AnyResource::StructureMap(_)));
        assert_eq!(resource.to_value().unwrap(), input);
    }
}
