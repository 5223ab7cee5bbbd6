//! Declarative validator configuration
//!
//! A [`ValidatorConfig`] is plain data: it can be built in code, loaded from
//! YAML or JSON, and exported again. [`ValidatorConfig::compile`] checks it
//! and produces the [`ValidationPlan`] a [`crate::Validator`] executes.

use crate::plan::{ReferencesPlan, ReportPlan, SchemaPlan, Step, TerminologyPlan};
use crate::{ConfigError, ValidationPlan};
use serde::{Deserialize, Serialize};
use serde_yaml::Value as YamlValue;

/// Named starting points for a configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preset {
    /// Accept anything structurally sound; errors only
    Ingestion,
    /// Full checks with warnings for authors
    Authoring,
    /// Full checks, extensible bindings as errors
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchemaMode {
    Off,
    On,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminologyMode {
    Off,
    /// Check membership against the codes enumerated in the model metadata
    Local,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceMode {
    Off,
    /// Resolve in-resource references (`#id`, `goalId`, `groupingId`, ...)
    Local,
}

/// Severity for a code outside an `extensible` binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtensibleHandling {
    Ignore,
    Warn,
    Error,
}

/// Severity for a code outside a `preferred` binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreferredHandling {
    Ignore,
    Information,
    Warn,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    pub mode: SchemaMode,
    pub allow_unknown_elements: bool,
    /// Report unrecognized modifier extensions as warnings instead of errors
    pub allow_modifier_extensions: bool,
    /// Modifier extension URLs the consumer understands
    pub understood_modifier_extensions: Vec<String>,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            mode: SchemaMode::On,
            allow_unknown_elements: false,
            allow_modifier_extensions: false,
            understood_modifier_extensions: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminologyConfig {
    pub mode: TerminologyMode,
    pub extensible_handling: ExtensibleHandling,
    pub preferred_handling: PreferredHandling,
}

impl Default for TerminologyConfig {
    fn default() -> Self {
        Self {
            mode: TerminologyMode::Local,
            extensible_handling: ExtensibleHandling::Warn,
            preferred_handling: PreferredHandling::Information,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferencesConfig {
    pub mode: ReferenceMode,
}

impl Default for ReferencesConfig {
    fn default() -> Self {
        Self {
            mode: ReferenceMode::Local,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecConfig {
    /// Skip remaining steps once a step reported an error
    pub fail_fast: bool,
    pub max_issues: usize,
}

impl Default for ExecConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            max_issues: 1000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub include_warnings: bool,
    pub include_information: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            include_warnings: true,
            include_information: true,
        }
    }
}

/// Complete validator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<Preset>,
    pub schema: SchemaConfig,
    pub terminology: TerminologyConfig,
    pub references: ReferencesConfig,
    pub exec: ExecConfig,
    pub report: ReportConfig,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self::preset(Preset::Authoring)
    }
}

impl ValidatorConfig {
    pub fn preset(preset: Preset) -> Self {
        let mut config = Self {
            preset: Some(preset),
            schema: SchemaConfig::default(),
            terminology: TerminologyConfig::default(),
            references: ReferencesConfig::default(),
            exec: ExecConfig::default(),
            report: ReportConfig::default(),
        };

        match preset {
            Preset::Ingestion => {
                config.schema.allow_unknown_elements = true;
                config.schema.allow_modifier_extensions = false;
                config.terminology.mode = TerminologyMode::Off;
                config.references.mode = ReferenceMode::Off;
                config.report.include_warnings = false;
                config.report.include_information = false;
            }
            Preset::Authoring => {}
            Preset::Strict => {
                config.terminology.extensible_handling = ExtensibleHandling::Error;
                config.terminology.preferred_handling = PreferredHandling::Warn;
            }
        }
        config
    }

    pub fn builder() -> ValidatorConfigBuilder {
        ValidatorConfigBuilder::default()
    }

    /// Parse YAML. Sections given next to `preset` override the preset.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let raw: YamlValue = serde_yaml::from_str(yaml)?;
        Self::from_overrides(raw)
    }

    /// Parse JSON, with the same preset semantics as [`Self::from_yaml`]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: serde_json::Value = serde_json::from_str(json)?;
        Self::from_overrides(json_to_yaml(raw))
    }

    fn from_overrides(raw: YamlValue) -> Result<Self, ConfigError> {
        let preset = match raw.get("preset") {
            Some(value) => serde_yaml::from_value(value.clone())?,
            None => Preset::Authoring,
        };

        let mut merged = serde_yaml::to_value(Self::preset(preset))?;
        merge(&mut merged, raw);
        let mut config: Self = serde_yaml::from_value(merged)?;
        config.preset = Some(preset);
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check the configuration and compile it into an ordered plan
    pub fn compile(&self) -> Result<ValidationPlan, ConfigError> {
        self.check()?;

        let mut steps = Vec::new();
        if self.schema.mode == SchemaMode::On {
            steps.push(Step::Schema(SchemaPlan::from(&self.schema)));
        }
        if self.terminology.mode != TerminologyMode::Off {
            steps.push(Step::Terminology(TerminologyPlan::from(&self.terminology)));
        }
        if self.references.mode != ReferenceMode::Off {
            steps.push(Step::References(ReferencesPlan::from(&self.references)));
        }

        Ok(ValidationPlan {
            steps,
            fail_fast: self.exec.fail_fast,
            max_issues: self.exec.max_issues,
            report: ReportPlan::from(&self.report),
        })
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.exec.max_issues == 0 {
            return Err(ConfigError::InvalidConfig(
                "exec.max_issues must be greater than zero".into(),
            ));
        }

        if let Some(url) = self
            .schema
            .understood_modifier_extensions
            .iter()
            .find(|url| !url.contains(':'))
        {
            return Err(ConfigError::InvalidConfig(format!(
                "schema.understood_modifier_extensions: '{}' is not an absolute URL",
                url
            )));
        }

        if self.schema.mode == SchemaMode::Off
            && !self.schema.understood_modifier_extensions.is_empty()
        {
            return Err(ConfigError::SchemaSettingsWithoutSchema);
        }

        Ok(())
    }
}

/// Walk the JSON tree so arbitrary-precision numbers stay numbers
fn json_to_yaml(value: serde_json::Value) -> YamlValue {
    use serde_json::Value as Json;
    match value {
        Json::Null => YamlValue::Null,
        Json::Bool(b) => YamlValue::Bool(b),
        Json::Number(n) => match (n.as_u64(), n.as_i64(), n.as_f64()) {
            (Some(u), _, _) => YamlValue::Number(u.into()),
            (_, Some(i), _) => YamlValue::Number(i.into()),
            (_, _, Some(f)) => YamlValue::Number(f.into()),
            _ => YamlValue::String(n.to_string()),
        },
        Json::String(s) => YamlValue::String(s),
        Json::Array(items) => YamlValue::Sequence(items.into_iter().map(json_to_yaml).collect()),
        Json::Object(map) => YamlValue::Mapping(
            map.into_iter()
                .map(|(k, v)| (YamlValue::String(k), json_to_yaml(v)))
                .collect(),
        ),
    }
}

/// Recursively overlay `overrides` onto `base`; mappings merge, anything else replaces
fn merge(base: &mut YamlValue, overrides: YamlValue) {
    match (base, overrides) {
        (YamlValue::Mapping(base), YamlValue::Mapping(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overrides) => *base = overrides,
    }
}

/// Fluent construction of a [`ValidatorConfig`]
#[derive(Debug, Clone, Default)]
pub struct ValidatorConfigBuilder {
    config: Option<ValidatorConfig>,
    edits: Vec<Edit>,
}

#[derive(Debug, Clone)]
enum Edit {
    SchemaMode(SchemaMode),
    AllowUnknownElements(bool),
    AllowModifierExtensions(bool),
    UnderstoodModifierExtension(String),
    TerminologyMode(TerminologyMode),
    ExtensibleHandling(ExtensibleHandling),
    PreferredHandling(PreferredHandling),
    ReferenceMode(ReferenceMode),
    FailFast(bool),
    MaxIssues(usize),
    IncludeWarnings(bool),
    IncludeInformation(bool),
}

impl ValidatorConfigBuilder {
    /// Start from a preset; settings given before or after still apply on top
    pub fn preset(mut self, preset: Preset) -> Self {
        self.config = Some(ValidatorConfig::preset(preset));
        self
    }

    pub fn schema_mode(self, mode: SchemaMode) -> Self {
        self.edit(Edit::SchemaMode(mode))
    }

    pub fn allow_unknown_elements(self, allow: bool) -> Self {
        self.edit(Edit::AllowUnknownElements(allow))
    }

    pub fn allow_modifier_extensions(self, allow: bool) -> Self {
        self.edit(Edit::AllowModifierExtensions(allow))
    }

    pub fn understood_modifier_extension(self, url: impl Into<String>) -> Self {
        self.edit(Edit::UnderstoodModifierExtension(url.into()))
    }

    pub fn terminology_mode(self, mode: TerminologyMode) -> Self {
        self.edit(Edit::TerminologyMode(mode))
    }

    pub fn extensible_handling(self, handling: ExtensibleHandling) -> Self {
        self.edit(Edit::ExtensibleHandling(handling))
    }

    pub fn preferred_handling(self, handling: PreferredHandling) -> Self {
        self.edit(Edit::PreferredHandling(handling))
    }

    pub fn reference_mode(self, mode: ReferenceMode) -> Self {
        self.edit(Edit::ReferenceMode(mode))
    }

    pub fn fail_fast(self, fail_fast: bool) -> Self {
        self.edit(Edit::FailFast(fail_fast))
    }

    pub fn max_issues(self, max_issues: usize) -> Self {
        self.edit(Edit::MaxIssues(max_issues))
    }

    pub fn include_warnings(self, include: bool) -> Self {
        self.edit(Edit::IncludeWarnings(include))
    }

    pub fn include_information(self, include: bool) -> Self {
        self.edit(Edit::IncludeInformation(include))
    }

    fn edit(mut self, edit: Edit) -> Self {
        self.edits.push(edit);
        self
    }

    pub fn build(self) -> ValidatorConfig {
        let mut config = self.config.unwrap_or_default();
        for edit in self.edits {
            match edit {
                Edit::SchemaMode(mode) => config.schema.mode = mode,
                Edit::AllowUnknownElements(allow) => config.schema.allow_unknown_elements = allow,
                Edit::AllowModifierExtensions(allow) => {
                    config.schema.allow_modifier_extensions = allow
                }
                Edit::UnderstoodModifierExtension(url) => {
                    config.schema.understood_modifier_extensions.push(url)
                }
                Edit::TerminologyMode(mode) => config.terminology.mode = mode,
                Edit::ExtensibleHandling(handling) => {
                    config.terminology.extensible_handling = handling
                }
                Edit::PreferredHandling(handling) => {
                    config.terminology.preferred_handling = handling
                }
                Edit::ReferenceMode(mode) => config.references.mode = mode,
                Edit::FailFast(fail_fast) => config.exec.fail_fast = fail_fast,
                Edit::MaxIssues(max_issues) => config.exec.max_issues = max_issues,
                Edit::IncludeWarnings(include) => config.report.include_warnings = include,
                Edit::IncludeInformation(include) => config.report.include_information = include,
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_compile_to_expected_steps() {
        let ingestion = ValidatorConfig::preset(Preset::Ingestion).compile().unwrap();
        assert_eq!(ingestion.steps.len(), 1);
        assert!(matches!(ingestion.steps[0], Step::Schema(_)));
        assert!(!ingestion.report.include_warnings);

        let authoring = ValidatorConfig::preset(Preset::Authoring).compile().unwrap();
        assert_eq!(authoring.steps.len(), 3);

        let strict = ValidatorConfig::preset(Preset::Strict).compile().unwrap();
        match &strict.steps[1] {
            Step::Terminology(plan) => {
                assert_eq!(plan.extensible_handling, ExtensibleHandling::Error)
            }
            other => panic!("unexpected step {:?}", other),
        }
    }

    #[test]
    fn builder_applies_settings_over_preset() {
        let config = ValidatorConfig::builder()
            .fail_fast(true)
            .preset(Preset::Ingestion)
            .terminology_mode(TerminologyMode::Local)
            .max_issues(5)
            .understood_modifier_extension("http://example.org/understood")
            .build();

        assert_eq!(config.preset, Some(Preset::Ingestion));
        assert!(config.exec.fail_fast);
        assert_eq!(config.exec.max_issues, 5);
        assert_eq!(config.terminology.mode, TerminologyMode::Local);
        assert!(config.schema.allow_unknown_elements);

        let plan = config.compile().unwrap();
        assert_eq!(plan.steps.len(), 2);
    }

    #[test]
    fn yaml_overrides_preset() {
        let yaml = r#"
preset: Strict
terminology:
  extensible_handling: Ignore
references:
  mode: Off
exec:
  max_issues: 10
"#;
        let config = ValidatorConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.preset, Some(Preset::Strict));
        assert_eq!(config.terminology.extensible_handling, ExtensibleHandling::Ignore);
        // Untouched preset values survive the merge
        assert_eq!(config.terminology.preferred_handling, PreferredHandling::Warn);
        assert_eq!(config.references.mode, ReferenceMode::Off);
        assert_eq!(config.exec.max_issues, 10);
        assert!(!config.exec.fail_fast);
    }

    #[test]
    fn yaml_round_trip() {
        let config = ValidatorConfig::builder()
            .preset(Preset::Ingestion)
            .understood_modifier_extension("http://example.org/flag")
            .build();
        let yaml = config.to_yaml().unwrap();
        assert_eq!(ValidatorConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn json_configuration() {
        let config = ValidatorConfig::from_json(
            r#"{"schema": {"allow_unknown_elements": true}, "report": {"include_information": false}}"#,
        )
        .unwrap();
        assert_eq!(config.preset, Some(Preset::Authoring));
        assert!(config.schema.allow_unknown_elements);
        assert!(!config.report.include_information);
        assert!(config.report.include_warnings);
    }

    #[test]
    fn json_configuration_with_numbers() {
        let config = ValidatorConfig::from_json(r#"{"exec": {"max_issues": 5, "fail_fast": true}}"#)
            .unwrap();
        assert_eq!(config.exec.max_issues, 5);
        assert!(config.exec.fail_fast);
    }

    #[test]
    fn invalid_configurations_are_rejected() {
        let err = ValidatorConfig::builder().max_issues(0).build().compile().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfig(_)));

        let err = ValidatorConfig::builder()
            .understood_modifier_extension("not-a-url")
            .build()
            .compile()
            .unwrap_err();
        assert!(err.to_string().contains("not-a-url"));

        let err = ValidatorConfig::builder()
            .schema_mode(SchemaMode::Off)
            .understood_modifier_extension("http://example.org/understood")
            .build()
            .compile()
            .unwrap_err();
        assert!(matches!(err, ConfigError::SchemaSettingsWithoutSchema));

        assert!(ValidatorConfig::from_yaml("preset: Lax").is_err());
    }
}
