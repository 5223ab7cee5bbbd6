//! FHIR JSON ↔ XML conversion.
//!
//! Follows the HL7 JSON/XML mapping rules:
//! - Root element uses the `resourceType` name in the FHIR namespace.
//! - Primitive values are encoded with the `value` attribute.
//! - Primitive metadata (`id`, `extension`) is carried through `_field` entries.
//! - Arrays are represented by repeated elements and aligned metadata arrays.
//! - Element `id` and extension `url` are attributes; resource `id` is an element.
//! - Nested resources are wrapped in an element named after their type.
//! - Narrative `div` is XHTML and is copied verbatim.
//!
//! Types known to `sinter-models` drive element order, array-ness and the
//! JSON type of primitives. Anything else falls back to schema-agnostic rules.

use crate::error::{FormatError, Result};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use roxmltree::{Document, Node};
use serde_json::{Map, Number, Value};
use sinter_models::{registry, Element, Extension, TypeInfo, TypeRef};
use std::io::Cursor;

pub const FHIR_NS: &str = "http://hl7.org/fhir";
const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

type XmlWriter = Writer<Cursor<Vec<u8>>>;

static NULL: Value = Value::Null;

/// Convert a FHIR JSON payload into its XML representation.
pub fn json_to_xml(input: &str) -> Result<String> {
    let value: Value = serde_json::from_str(input)?;
    value_to_xml(&value)
}

/// Convert a FHIR JSON value into its XML representation.
pub fn value_to_xml(value: &Value) -> Result<String> {
    let obj = value.as_object().ok_or(FormatError::ExpectedObject)?;
    let resource_type = resource_type_of(obj)?;

    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    write_resource(&mut writer, resource_type, obj, Some(FHIR_NS))?;

    let bytes = writer.into_inner().into_inner();
    Ok(String::from_utf8(bytes)?)
}

/// Convert a FHIR XML payload into its JSON representation.
pub fn xml_to_json(input: &str) -> Result<String> {
    let value = xml_to_value(input)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Convert a FHIR XML payload into a JSON value.
pub fn xml_to_value(input: &str) -> Result<Value> {
    let doc = Document::parse(input)?;
    let root = doc.root_element();

    match root.tag_name().namespace() {
        Some(FHIR_NS) => {}
        other => return Err(FormatError::UnexpectedNamespace(other.map(str::to_string))),
    }

    Ok(Value::Object(read_resource(input, root)?))
}

fn resource_type_of(obj: &Map<String, Value>) -> Result<&str> {
    obj.get("resourceType")
        .and_then(Value::as_str)
        .ok_or(FormatError::MissingResourceType)
}

fn modeled_resource(resource_type: &str) -> Option<&'static TypeInfo> {
    registry::type_info(resource_type).filter(|info| info.is_resource())
}

fn extension_type() -> Option<&'static TypeRef> {
    Extension::type_info()
        .field("extension")
        .and_then(|field| field.types.first())
}

// ============================================================================
// JSON → XML
// ============================================================================

fn write_resource(
    writer: &mut XmlWriter,
    resource_type: &str,
    obj: &Map<String, Value>,
    namespace: Option<&str>,
) -> Result<()> {
    let mut start = BytesStart::new(resource_type);
    if let Some(ns) = namespace {
        start.push_attribute(("xmlns", ns));
    }
    writer.write_event(Event::Start(start))?;

    write_members(writer, modeled_resource(resource_type), obj, &[])?;

    writer.write_event(Event::End(BytesEnd::new(resource_type)))?;
    Ok(())
}

/// Member names in output order: declared fields in definition order, then
/// anything undeclared in input order. `_field` entries fold into `field`.
fn member_names<'a>(info: Option<&TypeInfo>, obj: &'a Map<String, Value>) -> Vec<&'a str> {
    let mut names: Vec<&str> = Vec::new();
    for key in obj.keys() {
        let name = key.strip_prefix('_').unwrap_or(key);
        if name != "resourceType" && !names.contains(&name) {
            names.push(name);
        }
    }

    if let Some(info) = info {
        names.sort_by_key(|name| {
            info.fields
                .iter()
                .position(|field| field.match_key(name).is_some())
                .unwrap_or(usize::MAX)
        });
    }
    names
}

fn write_members(
    writer: &mut XmlWriter,
    info: Option<&TypeInfo>,
    obj: &Map<String, Value>,
    attributes: &[&str],
) -> Result<()> {
    for name in member_names(info, obj) {
        if attributes.contains(&name) {
            continue;
        }
        let value = obj.get(name).unwrap_or(&NULL);
        let meta = obj.get(&format!("_{}", name));
        let ty = info
            .and_then(|info| info.resolve_wire_key(name))
            .map(|(_, ty)| ty);
        write_json_value(writer, name, value, meta, ty)?;
    }
    Ok(())
}

fn write_json_value(
    writer: &mut XmlWriter,
    name: &str,
    value: &Value,
    meta: Option<&Value>,
    ty: Option<&'static TypeRef>,
) -> Result<()> {
    match value {
        Value::Array(items) => {
            let metas = meta.and_then(Value::as_array);
            for (idx, item) in items.iter().enumerate() {
                let item_meta = metas.and_then(|m| m.get(idx)).filter(|m| !m.is_null());
                write_json_value(writer, name, item, item_meta, ty)?;
            }
            // Metadata entries beyond the end of the value array
            if let Some(metas) = metas {
                for item_meta in metas.iter().skip(items.len()).filter(|m| !m.is_null()) {
                    write_primitive(writer, name, &Value::Null, Some(item_meta))?;
                }
            }
        }
        Value::Object(obj) => {
            let nested_type = obj.get("resourceType").and_then(Value::as_str);
            match nested_type {
                Some(resource_type) if ty.map_or(true, TypeRef::is_resource) => {
                    writer.write_event(Event::Start(BytesStart::new(name)))?;
                    write_resource(writer, resource_type, obj, None)?;
                    writer.write_event(Event::End(BytesEnd::new(name)))?;
                }
                _ => write_complex(writer, name, obj, ty.and_then(TypeRef::type_info))?,
            }
        }
        Value::Null => match meta {
            // `_given: [{..}]` with no `given`
            Some(Value::Array(metas)) => {
                for item_meta in metas.iter().filter(|m| !m.is_null()) {
                    write_primitive(writer, name, &Value::Null, Some(item_meta))?;
                }
            }
            _ => write_primitive(writer, name, value, meta)?,
        },
        Value::String(div) if is_xhtml(name, ty) => {
            writer.write_event(Event::Text(BytesText::from_escaped(div.as_str())))?;
        }
        primitive => write_primitive(writer, name, primitive, meta)?,
    }
    Ok(())
}

fn is_xhtml(name: &str, ty: Option<&TypeRef>) -> bool {
    ty.map_or(name == "div", |ty| ty.code == "xhtml")
}

fn write_complex(
    writer: &mut XmlWriter,
    name: &str,
    obj: &Map<String, Value>,
    info: Option<&'static TypeInfo>,
) -> Result<()> {
    let is_extension = info.map_or(
        matches!(name, "extension" | "modifierExtension"),
        |info| info.name == "Extension",
    );
    let attributes: &[&str] = if is_extension { &["id", "url"] } else { &["id"] };

    let mut start = BytesStart::new(name);
    for attribute in attributes {
        if let Some(Value::String(value)) = obj.get(*attribute) {
            start.push_attribute((*attribute, value.as_str()));
        }
    }

    let has_children = member_names(info, obj)
        .iter()
        .any(|member| !attributes.contains(member));
    if !has_children {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    write_members(writer, info, obj, attributes)?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn write_primitive(
    writer: &mut XmlWriter,
    name: &str,
    value: &Value,
    meta: Option<&Value>,
) -> Result<()> {
    let mut elem = BytesStart::new(name);

    let has_value = !matches!(value, Value::Null);
    if has_value {
        elem.push_attribute(("value", primitive_to_string(value).as_str()));
    }

    let meta = meta.and_then(Value::as_object);
    if let Some(Value::String(id)) = meta.and_then(|m| m.get("id")) {
        elem.push_attribute(("id", id.as_str()));
    }
    let extensions = meta.and_then(|m| m.get("extension"));

    if !has_value && meta.is_none() {
        return Ok(());
    }

    match extensions {
        Some(extensions) => {
            writer.write_event(Event::Start(elem))?;
            write_json_value(writer, "extension", extensions, None, extension_type())?;
            writer.write_event(Event::End(BytesEnd::new(name)))?;
        }
        None => {
            writer.write_event(Event::Empty(elem))?;
        }
    }
    Ok(())
}

fn primitive_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

// ============================================================================
// XML → JSON
// ============================================================================

fn read_resource(source: &str, node: Node) -> Result<Map<String, Value>> {
    let resource_type = node.tag_name().name();

    let mut map = Map::new();
    map.insert(
        "resourceType".to_string(),
        Value::String(resource_type.to_string()),
    );
    read_members(source, node, modeled_resource(resource_type), &mut map)?;
    Ok(map)
}

/// Consecutive XML elements sharing a name, destined for one JSON property
struct Property {
    name: String,
    /// Declared cardinality allows more than one, when known
    repeating: Option<bool>,
    items: Vec<(Value, Option<Value>)>,
}

impl Property {
    fn insert_into(self, target: &mut Map<String, Value>) {
        let meta_key = format!("_{}", self.name);
        let has_meta = self.items.iter().any(|(_, meta)| meta.is_some());

        if self.repeating.unwrap_or(false) || self.items.len() > 1 {
            let (values, metas): (Vec<Value>, Vec<Value>) = self
                .items
                .into_iter()
                .map(|(value, meta)| (value, meta.unwrap_or(Value::Null)))
                .unzip();
            if values.iter().any(|v| !v.is_null()) {
                target.insert(self.name, Value::Array(values));
            }
            if has_meta {
                target.insert(meta_key, Value::Array(metas));
            }
        } else if let Some((value, meta)) = self.items.into_iter().next() {
            if !value.is_null() {
                target.insert(self.name, value);
            }
            if let Some(meta) = meta {
                target.insert(meta_key, meta);
            }
        }
    }
}

fn read_members(
    source: &str,
    node: Node,
    info: Option<&'static TypeInfo>,
    target: &mut Map<String, Value>,
) -> Result<()> {
    let mut properties: Vec<Property> = Vec::new();

    for child in node.children().filter(Node::is_element) {
        let name = child.tag_name().name();
        let declared = info.and_then(|info| info.resolve_wire_key(name));
        let item = read_element(source, child, declared.map(|(_, ty)| ty))?;

        match properties.iter_mut().find(|p| p.name == name) {
            Some(property) => property.items.push(item),
            None => properties.push(Property {
                name: name.to_string(),
                repeating: declared.map(|(field, _)| field.cardinality.is_repeating()),
                items: vec![item],
            }),
        }
    }

    for property in properties {
        property.insert_into(target);
    }
    Ok(())
}

fn read_element(
    source: &str,
    node: Node,
    ty: Option<&'static TypeRef>,
) -> Result<(Value, Option<Value>)> {
    let name = node.tag_name().name();

    let in_xhtml_ns = node.tag_name().namespace() == Some(XHTML_NS);
    if in_xhtml_ns || ty.is_some_and(|ty| ty.code == "xhtml") {
        let snippet = &source[node.range()];
        return Ok((Value::String(snippet.to_string()), None));
    }

    let wraps_resource = ty.map_or(matches!(name, "contained" | "resource"), TypeRef::is_resource);
    if wraps_resource {
        if let Some(inner) = node.children().find(Node::is_element) {
            return Ok((Value::Object(read_resource(source, inner)?), None));
        }
    }

    let is_primitive = ty.map_or(node.has_attribute("value"), TypeRef::is_primitive);
    if is_primitive {
        return read_primitive(source, node, ty);
    }

    let mut obj = Map::new();
    for attribute in ["id", "url"] {
        if let Some(value) = node.attribute(attribute) {
            obj.insert(attribute.to_string(), Value::String(value.to_string()));
        }
    }
    read_members(source, node, ty.and_then(TypeRef::type_info), &mut obj)?;

    Ok((Value::Object(obj), None))
}

fn read_primitive(
    source: &str,
    node: Node,
    ty: Option<&'static TypeRef>,
) -> Result<(Value, Option<Value>)> {
    let value = node
        .attribute("value")
        .map(|text| primitive_value(text, ty))
        .unwrap_or(Value::Null);

    let mut meta = Map::new();
    if let Some(id) = node.attribute("id") {
        meta.insert("id".to_string(), Value::String(id.to_string()));
    }

    let mut extensions = Vec::new();
    for child in node
        .children()
        .filter(|c| c.is_element() && c.tag_name().name() == "extension")
    {
        let (extension, _) = read_element(source, child, extension_type())?;
        extensions.push(extension);
    }
    if !extensions.is_empty() {
        meta.insert("extension".to_string(), Value::Array(extensions));
    }

    let meta = (!meta.is_empty()).then_some(Value::Object(meta));
    Ok((value, meta))
}

/// JSON representation of a primitive's `value` attribute
fn primitive_value(text: &str, ty: Option<&TypeRef>) -> Value {
    let as_string = || Value::String(text.to_string());
    match ty.map(|ty| ty.code) {
        Some("boolean") => text.parse::<bool>().map(Value::Bool).unwrap_or_else(|_| as_string()),
        Some("integer" | "positiveInt" | "unsignedInt") => text
            .parse::<i64>()
            .map(Value::from)
            .unwrap_or_else(|_| as_string()),
        Some("decimal") => serde_json::from_str::<Number>(text)
            .map(Value::Number)
            .unwrap_or_else(|_| as_string()),
        Some(_) => as_string(),
        None => guess_primitive(text),
    }
}

fn guess_primitive(input: &str) -> Value {
    match input {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => {
            if let Ok(int) = input.parse::<i64>() {
                Value::Number(int.into())
            } else {
                Value::String(input.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_to_xml_unmodeled_patient() {
        let json = r#"
        {
            "resourceType": "Patient",
            "id": "pat-1",
            "active": true,
            "name": [
                { "family": "Everyman", "given": ["Adam"] }
            ]
        }
        "#;

        let xml = json_to_xml(json).expect("conversion failed");
        assert!(xml.contains("<Patient"));
        assert!(xml.contains(r#"<id value="pat-1"/>"#));
        assert!(xml.contains(r#"<active value="true"/>"#));
        assert!(xml.contains(r#"<family value="Everyman"/>"#));
    }

    #[test]
    fn xml_to_json_unmodeled_patient() {
        let xml = r#"
        <Patient xmlns="http://hl7.org/fhir">
            <id value="p1"/>
            <active value="true"/>
            <name>
                <family value="Everyman"/>
                <given value="Adam"/>
            </name>
        </Patient>
        "#;

        let json = xml_to_json(xml).expect("xml->json failed");
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["resourceType"], "Patient");
        assert_eq!(value["id"], "p1");
        assert_eq!(value["active"], true);
        assert_eq!(value["name"]["family"], "Everyman");
    }

    #[test]
    fn declared_cardinality_decides_arrays() {
        let xml = r#"
        <Consent xmlns="http://hl7.org/fhir">
            <status value="active"/>
            <category>
                <text value="privacy"/>
            </category>
            <provision>
                <type value="permit"/>
                <class>
                    <code value="Observation"/>
                </class>
            </provision>
        </Consent>
        "#;

        let value = xml_to_value(xml).unwrap();
        assert_eq!(value["status"], "active");
        assert_eq!(value["category"], json!([{"text": "privacy"}]));
        assert!(value["provision"].is_object());
        assert_eq!(value["provision"]["class"], json!([{"code": "Observation"}]));
    }

    #[test]
    fn primitive_types_follow_metadata() {
        let xml = r#"
        <StructureMap xmlns="http://hl7.org/fhir">
            <experimental value="false"/>
            <name value="12345"/>
            <group>
                <name value="g"/>
                <rule>
                    <name value="r"/>
                    <source>
                        <context value="src"/>
                        <min value="0"/>
                        <max value="1"/>
                    </source>
                    <target>
                        <parameter>
                            <valueDecimal value="0.25"/>
                        </parameter>
                    </target>
                </rule>
            </group>
        </StructureMap>
        "#;

        let value = xml_to_value(xml).unwrap();
        assert_eq!(value["experimental"], false);
        assert_eq!(value["name"], "12345");
        let source = &value["group"][0]["rule"][0]["source"][0];
        assert_eq!(source["min"], 0);
        assert_eq!(source["max"], "1");
        let parameter = &value["group"][0]["rule"][0]["target"][0]["parameter"][0];
        assert_eq!(parameter["valueDecimal"], json!(0.25));
    }

    #[test]
    fn elements_follow_definition_order() {
        let value = json!({
            "resourceType": "Consent",
            "status": "active",
            "id": "c1",
            "extension": [{"url": "http://example.org/ext", "valueString": "x"}]
        });
        let xml = value_to_xml(&value).unwrap();
        let id = xml.find("<id ").unwrap();
        let extension = xml.find("<extension ").unwrap();
        let status = xml.find("<status ").unwrap();
        assert!(id < extension && extension < status);
        assert!(xml.contains(r#"<extension url="http://example.org/ext">"#));
    }

    #[test]
    fn primitive_metadata_survives_roundtrip() {
        let value = json!({
            "resourceType": "Consent",
            "status": "active",
            "_status": {
                "id": "st1",
                "extension": [{"url": "http://example.org/reason", "valueCode": "audit"}]
            },
            "dateTime": "2016-05-11",
            "_dateTime": {"id": "dt1"}
        });

        let xml = value_to_xml(&value).unwrap();
        assert!(xml.contains(r#"<status value="active" id="st1">"#));
        assert!(xml.contains(r#"<dateTime value="2016-05-11" id="dt1"/>"#));

        let back = xml_to_value(&xml).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn repeated_primitive_metadata_stays_aligned() {
        let value = json!({
            "resourceType": "ImplementationGuide",
            "fhirVersion": ["4.0.1", null, "4.3.0"],
            "_fhirVersion": [null, {"id": "only-meta"}, {"id": "v3"}]
        });

        let back = xml_to_value(&value_to_xml(&value).unwrap()).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn narrative_is_copied_verbatim() {
        let div = r#"<div xmlns="http://www.w3.org/1999/xhtml"><p>Hello &amp; <b>welcome</b></p></div>"#;
        let value = json!({
            "resourceType": "PlanDefinition",
            "text": {"status": "generated", "div": div}
        });

        let xml = value_to_xml(&value).unwrap();
        assert!(xml.contains(div));
        let back = xml_to_value(&xml).unwrap();
        assert_eq!(back["text"]["div"], div);
    }

    #[test]
    fn contained_resources_are_wrapped() {
        let value = json!({
            "resourceType": "PlanDefinition",
            "id": "outer",
            "contained": [{"resourceType": "Consent", "id": "inner", "status": "draft"}],
            "status": "draft"
        });

        let xml = value_to_xml(&value).unwrap();
        assert!(xml.contains("<contained>"));
        assert!(xml.contains("<Consent>"));

        assert_eq!(xml_to_value(&xml).unwrap(), value);
    }

    #[test]
    fn rejects_foreign_namespace() {
        let err = xml_to_value(r#"<Consent xmlns="urn:other"/>"#).unwrap_err();
        assert!(matches!(err, FormatError::UnexpectedNamespace(Some(_))));
        assert!(matches!(
            value_to_xml(&json!({"id": "x"})),
            Err(FormatError::MissingResourceType)
        ));
    }
}
