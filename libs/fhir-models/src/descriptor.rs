//! Static field metadata
//!
//! Every record type in this crate owns a `static` [`TypeInfo`] describing its
//! fields in wire order. Descriptors are built with `const fn` helpers so the
//! tables live in read-only memory and can be shared freely across threads.

use heck::ToSnakeCase;
use std::borrow::Cow;
use std::fmt;

/// Accessor returning a type's static metadata
pub type TypeInfoFn = fn() -> &'static TypeInfo;

/// Structural category of a type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Primitive,
    Complex,
    Backbone,
    Resource,
}

/// Upper occurrence bound of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxOccurs {
    Bounded(u32),
    Unbounded,
}

impl MaxOccurs {
    pub fn allows(&self, count: usize) -> bool {
        match self {
            MaxOccurs::Bounded(max) => count <= *max as usize,
            MaxOccurs::Unbounded => true,
        }
    }
}

impl fmt::Display for MaxOccurs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaxOccurs::Bounded(max) => write!(f, "{}", max),
            MaxOccurs::Unbounded => write!(f, "*"),
        }
    }
}

/// Occurrence constraint of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cardinality {
    pub min: u32,
    pub max: MaxOccurs,
}

impl Cardinality {
    /// `0..1`
    pub const OPTIONAL: Cardinality = Cardinality::new(0, MaxOccurs::Bounded(1));
    /// `1..1`
    pub const REQUIRED: Cardinality = Cardinality::new(1, MaxOccurs::Bounded(1));
    /// `0..*`
    pub const MANY: Cardinality = Cardinality::new(0, MaxOccurs::Unbounded);
    /// `1..*`
    pub const AT_LEAST_ONE: Cardinality = Cardinality::new(1, MaxOccurs::Unbounded);

    pub const fn new(min: u32, max: MaxOccurs) -> Self {
        Self { min, max }
    }

    pub const fn is_required(&self) -> bool {
        self.min > 0
    }

    /// Whether the field is serialized as an array
    pub const fn is_repeating(&self) -> bool {
        match self.max {
            MaxOccurs::Bounded(max) => max > 1,
            MaxOccurs::Unbounded => true,
        }
    }

    pub fn allows(&self, count: usize) -> bool {
        count >= self.min as usize && self.max.allows(count)
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.min, self.max)
    }
}

/// Strength of a value-set binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingStrength {
    /// Value must come from the value set
    Required,
    /// Value should come from the value set unless no code fits
    Extensible,
    /// Value set is recommended
    Preferred,
    /// Value set is illustrative only
    Example,
}

impl BindingStrength {
    pub fn as_str(&self) -> &'static str {
        match self {
            BindingStrength::Required => "required",
            BindingStrength::Extensible => "extensible",
            BindingStrength::Preferred => "preferred",
            BindingStrength::Example => "example",
        }
    }
}

impl fmt::Display for BindingStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Codes a value set draws from one code system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSystemCodes {
    pub system: &'static str,
    pub codes: &'static [&'static str],
}

impl CodeSystemCodes {
    pub const fn new(system: &'static str, codes: &'static [&'static str]) -> Self {
        Self { system, codes }
    }
}

/// Binding of a coded field to a value set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueSetBinding {
    pub strength: BindingStrength,
    /// Canonical URL of the value set
    pub value_set: &'static str,
    pub description: &'static str,
    /// Enumerated members; empty when the value set is defined externally
    pub systems: &'static [CodeSystemCodes],
}

impl ValueSetBinding {
    pub const fn new(
        strength: BindingStrength,
        value_set: &'static str,
        description: &'static str,
        systems: &'static [CodeSystemCodes],
    ) -> Self {
        Self {
            strength,
            value_set,
            description,
            systems,
        }
    }

    /// A binding whose members are not carried in this crate
    pub const fn external(
        strength: BindingStrength,
        value_set: &'static str,
        description: &'static str,
    ) -> Self {
        Self::new(strength, value_set, description, &[])
    }

    pub fn is_enumerated(&self) -> bool {
        !self.systems.is_empty()
    }

    /// Membership test. Without a system the code may come from any
    /// enumerated code system.
    pub fn contains(&self, system: Option<&str>, code: &str) -> bool {
        self.systems.iter().any(|cs| {
            system.map_or(true, |s| s == cs.system) && cs.codes.iter().any(|c| *c == code)
        })
    }

    pub fn codes(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.systems
            .iter()
            .flat_map(|cs| cs.codes.iter().map(move |code| (cs.system, *code)))
    }
}

/// Declared type of a field
#[derive(Clone, Copy)]
pub struct TypeRef {
    /// FHIR type code (`string`, `Coding`, `Reference`, ...)
    pub code: &'static str,
    pub info: Option<TypeInfoFn>,
    /// Allowed target resource profiles for `Reference` and `canonical`
    pub target_profiles: &'static [&'static str],
}

impl TypeRef {
    pub const fn primitive(code: &'static str) -> Self {
        Self {
            code,
            info: None,
            target_profiles: &[],
        }
    }

    pub const fn complex(code: &'static str, info: TypeInfoFn) -> Self {
        Self {
            code,
            info: Some(info),
            target_profiles: &[],
        }
    }

    pub const fn canonical(targets: &'static [&'static str]) -> Self {
        Self {
            code: "canonical",
            info: None,
            target_profiles: targets,
        }
    }

    /// A contained or inline resource of any type
    pub const fn resource() -> Self {
        Self {
            code: "Resource",
            info: None,
            target_profiles: &[],
        }
    }

    pub const fn with_targets(mut self, targets: &'static [&'static str]) -> Self {
        self.target_profiles = targets;
        self
    }

    pub fn type_info(&self) -> Option<&'static TypeInfo> {
        self.info.map(|info| info())
    }

    pub fn is_primitive(&self) -> bool {
        self.code.starts_with(|c: char| c.is_ascii_lowercase())
    }

    pub fn is_resource(&self) -> bool {
        self.code == "Resource"
    }

    /// Suffix appended to a choice field's name (`dateTime` → `DateTime`)
    pub fn choice_suffix(&self) -> String {
        let mut chars = self.code.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("TypeRef");
        s.field("code", &self.code);
        if !self.target_profiles.is_empty() {
            s.field("target_profiles", &self.target_profiles);
        }
        s.finish()
    }
}

impl PartialEq for TypeRef {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code && self.target_profiles == other.target_profiles
    }
}

/// Cross reference from a field to a keyed element elsewhere in the same
/// resource (`PlanDefinition.action.goalId` → `PlanDefinition.goal.id`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalRef {
    pub target_path: &'static str,
    pub key: &'static str,
}

impl LocalRef {
    pub const fn new(target_path: &'static str, key: &'static str) -> Self {
        Self { target_path, key }
    }
}

/// Descriptor of a single field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDescriptor {
    /// Wire name, without the `[x]` of choice fields
    pub name: &'static str,
    /// Rust field name when it differs from the snake-cased wire name
    pub rust_name: Option<&'static str>,
    pub types: &'static [TypeRef],
    pub cardinality: Cardinality,
    pub binding: Option<&'static ValueSetBinding>,
    pub is_modifier: bool,
    pub is_summary: bool,
    pub local_ref: Option<LocalRef>,
    pub short: &'static str,
}

impl FieldDescriptor {
    pub const fn new(
        name: &'static str,
        types: &'static [TypeRef],
        cardinality: Cardinality,
        short: &'static str,
    ) -> Self {
        Self {
            name,
            rust_name: None,
            types,
            cardinality,
            binding: None,
            is_modifier: false,
            is_summary: false,
            local_ref: None,
            short,
        }
    }

    pub const fn binding(mut self, binding: &'static ValueSetBinding) -> Self {
        self.binding = Some(binding);
        self
    }

    pub const fn modifier(mut self) -> Self {
        self.is_modifier = true;
        self
    }

    pub const fn summary(mut self) -> Self {
        self.is_summary = true;
        self
    }

    pub const fn rust_name(mut self, rust_name: &'static str) -> Self {
        self.rust_name = Some(rust_name);
        self
    }

    pub const fn local_ref(mut self, target_path: &'static str, key: &'static str) -> Self {
        self.local_ref = Some(LocalRef::new(target_path, key));
        self
    }

    pub fn is_choice(&self) -> bool {
        self.types.len() > 1
    }

    /// Name of the Rust struct field holding this element
    pub fn field_name(&self) -> Cow<'static, str> {
        match self.rust_name {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(self.name.to_snake_case()),
        }
    }

    /// Logical name as written in FHIR paths (`source[x]` for choices)
    pub fn display_name(&self) -> Cow<'static, str> {
        if self.is_choice() {
            Cow::Owned(format!("{}[x]", self.name))
        } else {
            Cow::Borrowed(self.name)
        }
    }

    /// All JSON keys this field may appear under
    pub fn wire_keys(&self) -> Vec<String> {
        if self.is_choice() {
            self.types
                .iter()
                .map(|t| format!("{}{}", self.name, t.choice_suffix()))
                .collect()
        } else {
            vec![self.name.to_string()]
        }
    }

    /// The declared type matching a JSON key, if the key belongs to this field
    pub fn match_key(&self, key: &str) -> Option<&'static TypeRef> {
        if !self.is_choice() {
            return (key == self.name).then(|| self.types.first()).flatten();
        }
        let suffix = key.strip_prefix(self.name)?;
        self.types.iter().find(|t| t.choice_suffix() == suffix)
    }
}

/// Classification of a JSON object key against a type's metadata
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyKind {
    /// A declared field, with the type selected by the key
    Field(&'static FieldDescriptor, &'static TypeRef),
    /// Primitive extension sibling (`_status`)
    PrimitiveMetadata(&'static FieldDescriptor, &'static TypeRef),
    /// `resourceType` discriminator on resources
    ResourceType,
    Unknown,
}

/// Static description of a record type
#[derive(Debug)]
pub struct TypeInfo {
    /// Rust type name (`ConsentProvisionActor`)
    pub name: &'static str,
    /// FHIR element path (`Consent.provision.actor`)
    pub path: &'static str,
    pub kind: TypeKind,
    /// FHIR base type (`DomainResource`, `BackboneElement`, `Element`)
    pub base: &'static str,
    /// Canonical URL of the defining StructureDefinition
    pub url: Option<&'static str>,
    pub short: &'static str,
    /// Fields in wire order
    pub fields: &'static [FieldDescriptor],
}

impl TypeInfo {
    pub fn is_resource(&self) -> bool {
        self.kind == TypeKind::Resource
    }

    /// Look up a field by wire name (`type`) or Rust name (`type_`)
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        let name = name.strip_suffix("[x]").unwrap_or(name);
        let fields: &'static [FieldDescriptor] = self.fields;
        fields
            .iter()
            .find(|f| f.name == name)
            .or_else(|| fields.iter().find(|f| f.field_name() == name))
    }

    /// Resolve a JSON key, including suffixed choice keys
    pub fn resolve_wire_key(
        &self,
        key: &str,
    ) -> Option<(&'static FieldDescriptor, &'static TypeRef)> {
        let fields: &'static [FieldDescriptor] = self.fields;
        fields
            .iter()
            .find_map(|f| f.match_key(key).map(|t| (f, t)))
    }

    pub fn classify_key(&self, key: &str) -> KeyKind {
        if key == "resourceType" && self.is_resource() {
            return KeyKind::ResourceType;
        }
        if let Some((field, ty)) = self.resolve_wire_key(key) {
            return KeyKind::Field(field, ty);
        }
        if let Some(stripped) = key.strip_prefix('_') {
            if let Some((field, ty)) = self.resolve_wire_key(stripped) {
                if ty.is_primitive() {
                    return KeyKind::PrimitiveMetadata(field, ty);
                }
            }
        }
        KeyKind::Unknown
    }

    /// Full FHIR path of a field (`Consent.status`, `Consent.source[x]`)
    pub fn path_of(&self, field: &FieldDescriptor) -> String {
        format!("{}.{}", self.path, field.display_name())
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &'static FieldDescriptor> {
        let fields: &'static [FieldDescriptor] = self.fields;
        fields.iter().filter(|f| f.cardinality.is_required())
    }

    pub fn choice_fields(&self) -> impl Iterator<Item = &'static FieldDescriptor> {
        let fields: &'static [FieldDescriptor] = self.fields;
        fields.iter().filter(|f| f.is_choice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CODES: &[CodeSystemCodes] = &[CodeSystemCodes::new(
        "http://example.org/cs",
        &["a", "b"],
    )];
    static BINDING: ValueSetBinding = ValueSetBinding::new(
        BindingStrength::Required,
        "http://example.org/vs",
        "test",
        CODES,
    );

    #[test]
    fn cardinality_bounds() {
        assert!(Cardinality::REQUIRED.allows(1));
        assert!(!Cardinality::REQUIRED.allows(0));
        assert!(!Cardinality::OPTIONAL.allows(2));
        assert!(Cardinality::MANY.allows(1000));
        assert!(!Cardinality::AT_LEAST_ONE.allows(0));
        assert!(Cardinality::MANY.is_repeating());
        assert!(!Cardinality::OPTIONAL.is_repeating());
        assert_eq!(Cardinality::AT_LEAST_ONE.to_string(), "1..*");
        assert_eq!(Cardinality::OPTIONAL.to_string(), "0..1");
    }

    #[test]
    fn binding_membership() {
        assert!(BINDING.is_enumerated());
        assert!(BINDING.contains(None, "a"));
        assert!(BINDING.contains(Some("http://example.org/cs"), "b"));
        assert!(!BINDING.contains(Some("http://other.org"), "a"));
        assert!(!BINDING.contains(None, "c"));
        assert_eq!(BINDING.codes().count(), 2);
    }

    #[test]
    fn choice_suffixes() {
        assert_eq!(TypeRef::primitive("dateTime").choice_suffix(), "DateTime");
        assert_eq!(TypeRef::primitive("base64Binary").choice_suffix(), "Base64Binary");
        assert_eq!(TypeRef::canonical(&[]).choice_suffix(), "Canonical");
    }

    #[test]
    fn choice_key_matching() {
        const TYPES: &[TypeRef] = &[TypeRef::primitive("boolean"), TypeRef::canonical(&[])];
        let field = FieldDescriptor::new("example", TYPES, Cardinality::OPTIONAL, "");
        assert!(field.is_choice());
        assert_eq!(field.match_key("exampleBoolean").map(|t| t.code), Some("boolean"));
        assert_eq!(field.match_key("exampleCanonical").map(|t| t.code), Some("canonical"));
        assert!(field.match_key("example").is_none());
        assert!(field.match_key("exampleboolean").is_none());
        assert_eq!(field.wire_keys(), vec!["exampleBoolean", "exampleCanonical"]);
        assert_eq!(field.display_name(), "example[x]");
    }

    #[test]
    fn rust_names() {
        const TYPES: &[TypeRef] = &[TypeRef::primitive("code")];
        let plain = FieldDescriptor::new("groupingId", TYPES, Cardinality::OPTIONAL, "");
        assert_eq!(plain.field_name(), "grouping_id");
        let renamed = plain.rust_name("type_");
        assert_eq!(renamed.field_name(), "type_");
        assert_eq!(renamed.name, "groupingId");
    }
}
