//! Capability traits shared by every record type

use crate::datatypes::{Extension, Meta};
use crate::descriptor::TypeInfo;
use crate::error::{Error, Result};
use serde::de::{DeserializeOwned, Error as _, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::marker::PhantomData;

/// Any node of a resource tree
pub trait Element {
    /// Static metadata for this type
    fn type_info() -> &'static TypeInfo
    where
        Self: Sized;

    /// Element id, unique within the containing resource
    fn id(&self) -> Option<&str>;

    fn extensions(&self) -> &[Extension];

    /// Id and extensions attached to the primitive fields of this element
    fn primitive_elements(&self) -> &PrimitiveElements;

    /// Extensions whose url matches
    fn extensions_by_url<'a>(&'a self, url: &'a str) -> Box<dyn Iterator<Item = &'a Extension> + 'a> {
        Box::new(
            self.extensions()
                .iter()
                .filter(move |ext| ext.url.as_deref() == Some(url)),
        )
    }
}

/// Elements that may carry modifier extensions
pub trait ModifierElement: Element {
    fn modifier_extensions(&self) -> &[Extension];
}

/// Top-level resource types
pub trait Resource: ModifierElement {
    /// Value of `resourceType` on the wire
    const TYPE_NAME: &'static str;

    fn resource_type(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn meta(&self) -> Option<&Meta>;
}

/// Map and JSON conversions for every record type
pub trait Serializable: Sized {
    fn to_value(&self) -> Result<Value>;

    fn to_map(&self) -> Result<Map<String, Value>> {
        match self.to_value()? {
            Value::Object(map) => Ok(map),
            other => Err(Error::InvalidResource(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    fn to_json(&self) -> Result<String>;

    fn to_json_pretty(&self) -> Result<String>;

    fn from_value(value: Value) -> Result<Self>;

    fn from_json(json: &str) -> Result<Self>;
}

impl<T> Serializable for T
where
    T: Element + Serialize + DeserializeOwned,
{
    fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Zero-sized `resourceType` discriminator
///
/// Serializes as the resource's type name and rejects any other name on
/// input. A missing `resourceType` is tolerated through `#[serde(default)]`.
pub struct ResourceTypeTag<R>(PhantomData<fn() -> R>);

impl<R> ResourceTypeTag<R> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<R> Default for ResourceTypeTag<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for ResourceTypeTag<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for ResourceTypeTag<R> {}

impl<R> PartialEq for ResourceTypeTag<R> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<R> Eq for ResourceTypeTag<R> {}

impl<R: Resource> fmt::Debug for ResourceTypeTag<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(R::TYPE_NAME)
    }
}

impl<R: Resource> Serialize for ResourceTypeTag<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(R::TYPE_NAME)
    }
}

impl<'de, R: Resource> Deserialize<'de> for ResourceTypeTag<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        if name == R::TYPE_NAME {
            Ok(Self::new())
        } else {
            Err(D::Error::custom(format!(
                "expected resourceType '{}', found '{}'",
                R::TYPE_NAME,
                name
            )))
        }
    }
}

/// Id and extensions of primitive values, keyed by `_name` as on the wire
///
/// A primitive field such as `status` holds only its value; the element part
/// (`"_status": {"id": .., "extension": [..]}`, or an array aligned with a
/// repeating field) lives here and is written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrimitiveElements(Map<String, Value>);

impl PrimitiveElements {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Element part of the field with this wire name (`status`, not `_status`)
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(&format!("_{}", name))
    }

    pub fn insert(&mut self, name: &str, element: Value) -> Option<Value> {
        self.0.insert(format!("_{}", name), element)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.remove(&format!("_{}", name))
    }

    /// Extensions on a single-valued primitive field
    pub fn extensions(&self, name: &str) -> Result<Vec<Extension>> {
        match self.get(name).and_then(|element| element.get("extension")) {
            Some(extensions) => Ok(serde_json::from_value(extensions.clone())?),
            None => Ok(Vec::new()),
        }
    }

    /// `(wire name, element)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(key, value)| (&key[1..], value))
    }
}

impl Serialize for PrimitiveElements {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter())
    }
}

impl<'de> Deserialize<'de> for PrimitiveElements {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct ElementsVisitor;

        impl<'de> Visitor<'de> for ElementsVisitor {
            type Value = PrimitiveElements;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("primitive element metadata")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Self::Value, A::Error> {
                let mut elements = Map::new();
                while let Some(key) = map.next_key::<String>()? {
                    if key.len() > 1 && key.starts_with('_') {
                        elements.insert(key, map.next_value()?);
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }
                Ok(PrimitiveElements(elements))
            }
        }

        deserializer.deserialize_map(ElementsVisitor)
    }
}

/// Enums backing `name[x]` choice fields
pub trait ChoiceType: Sized {
    /// Every key the choice can appear under
    const WIRE_KEYS: &'static [&'static str];

    /// Key of the populated alternative
    fn wire_key(&self) -> &'static str;
}

/// Deserialize a flattened `Option<choice>` field
///
/// A plain flattened `Option` turns a malformed alternative into `None`;
/// this reports it, and rejects a second alternative.
pub(crate) fn deserialize_choice<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: ChoiceType + DeserializeOwned,
{
    struct ChoiceVisitor<T>(PhantomData<fn() -> T>);

    impl<'de, T: ChoiceType + DeserializeOwned> Visitor<'de> for ChoiceVisitor<T> {
        type Value = Option<T>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "one of {}", T::WIRE_KEYS.join(", "))
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Self::Value, A::Error> {
            let mut found: Option<(String, Value)> = None;
            while let Some(key) = map.next_key::<String>()? {
                if !T::WIRE_KEYS.contains(&key.as_str()) {
                    map.next_value::<IgnoredAny>()?;
                    continue;
                }
                if let Some((first, _)) = &found {
                    return Err(A::Error::custom(format!(
                        "only one of '{}' and '{}' may be present",
                        first, key
                    )));
                }
                let value: Value = map.next_value()?;
                found = Some((key, value));
            }

            let Some((key, value)) = found else {
                return Ok(None);
            };
            let mut single = Map::new();
            single.insert(key.clone(), value);
            T::deserialize(Value::Object(single))
                .map(Some)
                .map_err(|e| A::Error::custom(format!("invalid '{}': {}", key, e)))
        }
    }

    deserializer.deserialize_map(ChoiceVisitor(PhantomData))
}
