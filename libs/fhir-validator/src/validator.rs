use crate::{ConfigError, ValidationPlan};
use serde_json::Value;
use sinter_format::FormatError;
use sinter_models::Serializable;

/// Reusable validator - owns the compiled plan and is shareable across threads
#[derive(Debug, Clone)]
pub struct Validator {
    plan: ValidationPlan,
}

impl Validator {
    pub fn new(plan: ValidationPlan) -> Self {
        Self { plan }
    }

    pub fn from_config(config: &crate::ValidatorConfig) -> Result<Self, ConfigError> {
        let plan = config.compile()?;
        Ok(Self::new(plan))
    }

    pub fn validate(&self, resource: &Value) -> ValidationOutcome {
        ValidationRun::new(&self.plan, resource).execute()
    }

    pub fn validate_batch(&self, resources: &[Value]) -> Vec<ValidationOutcome> {
        resources.iter().map(|r| self.validate(r)).collect()
    }

    /// Validate a typed resource through its JSON form
    pub fn validate_resource<T: Serializable>(
        &self,
        resource: &T,
    ) -> Result<ValidationOutcome, sinter_models::Error> {
        Ok(self.validate(&resource.to_value()?))
    }

    /// Validate a resource given in the XML format.
    ///
    /// Fails only when the document cannot be read as FHIR XML; content
    /// problems are reported as issues.
    pub fn validate_xml(&self, xml: &str) -> Result<ValidationOutcome, FormatError> {
        let value = sinter_format::xml_to_value(xml)?;
        Ok(self.validate(&value))
    }

    pub fn plan(&self) -> &ValidationPlan {
        &self.plan
    }
}

/// Short-lived validation execution
struct ValidationRun<'a> {
    plan: &'a ValidationPlan,
    resource: &'a Value,
    issues: Vec<ValidationIssue>,
}

impl<'a> ValidationRun<'a> {
    fn new(plan: &'a ValidationPlan, resource: &'a Value) -> Self {
        Self {
            plan,
            resource,
            issues: Vec::new(),
        }
    }

    fn execute(mut self) -> ValidationOutcome {
        let resource_type = self.get_resource_type();
        tracing::debug!(
            resource_type = resource_type.as_deref().unwrap_or("-"),
            steps = self.plan.steps.len(),
            "Validating resource"
        );

        for step in &self.plan.steps {
            if self.plan.fail_fast && self.has_errors() {
                tracing::debug!(step = step.name(), "Skipping step after errors (fail_fast)");
                break;
            }

            // Once the cap is hit, later steps can only change validity
            if self.issues.len() >= self.plan.max_issues && self.has_errors() {
                break;
            }

            let before = self.issues.len();
            self.execute_step(step);
            tracing::trace!(
                step = step.name(),
                issues = self.issues.len() - before,
                "Step finished"
            );
        }

        let valid = !self.has_errors();
        self.cap_issues();

        let report = &self.plan.report;
        self.issues.retain(|issue| match issue.severity {
            IssueSeverity::Warning => report.include_warnings,
            IssueSeverity::Information => report.include_information,
            IssueSeverity::Fatal | IssueSeverity::Error => true,
        });

        let outcome = ValidationOutcome {
            resource_type,
            valid,
            issues: self.issues,
        };
        tracing::debug!(
            valid = outcome.valid,
            errors = outcome.error_count(),
            warnings = outcome.warning_count(),
            "Validation finished"
        );
        outcome
    }

    fn execute_step(&mut self, step: &crate::Step) {
        use crate::Step;

        match step {
            Step::Schema(plan) => {
                crate::steps::schema::validate_schema(self.resource, plan, &mut self.issues)
            }
            Step::Terminology(plan) => crate::steps::terminology::validate_terminology(
                self.resource,
                plan,
                &mut self.issues,
            ),
            Step::References(plan) => crate::steps::references::validate_references(
                self.resource,
                plan,
                &mut self.issues,
            ),
        }
    }

    fn has_errors(&self) -> bool {
        self.issues.iter().any(ValidationIssue::is_error)
    }

    /// Keep at most `max_issues`, errors taking precedence, in report order
    fn cap_issues(&mut self) {
        let max = self.plan.max_issues;
        if self.issues.len() <= max {
            return;
        }
        let errors = self.issues.iter().filter(|i| i.is_error()).count();
        let mut error_slots = max;
        let mut other_slots = max.saturating_sub(errors);
        self.issues.retain(|issue| {
            let slots = if issue.is_error() {
                &mut error_slots
            } else {
                &mut other_slots
            };
            if *slots == 0 {
                return false;
            }
            *slots -= 1;
            true
        });
    }

    fn get_resource_type(&self) -> Option<String> {
        self.resource
            .get("resourceType")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
    }
}

/// Validation result for a single resource
#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    pub resource_type: Option<String>,
    pub valid: bool,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationOutcome {
    pub fn success(resource_type: Option<String>) -> Self {
        Self {
            resource_type,
            valid: true,
            issues: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.valid
    }

    pub fn error_count(&self) -> usize {
        self.issues.iter().filter(|i| i.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Warning)
            .count()
    }

    pub fn to_operation_outcome(&self) -> Value {
        serde_json::json!({
            "resourceType": "OperationOutcome",
            "issue": self.issues.iter().map(|i| i.to_json()).collect::<Vec<_>>()
        })
    }
}

/// Individual validation issue
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    pub code: IssueCode,
    pub diagnostics: String,
    pub location: Option<String>,
    pub expression: Option<Vec<String>>,
}

impl ValidationIssue {
    fn new(severity: IssueSeverity, code: IssueCode, diagnostics: String) -> Self {
        Self {
            severity,
            code,
            diagnostics,
            location: None,
            expression: None,
        }
    }

    pub fn fatal(code: IssueCode, diagnostics: String) -> Self {
        Self::new(IssueSeverity::Fatal, code, diagnostics)
    }

    pub fn error(code: IssueCode, diagnostics: String) -> Self {
        Self::new(IssueSeverity::Error, code, diagnostics)
    }

    pub fn warning(code: IssueCode, diagnostics: String) -> Self {
        Self::new(IssueSeverity::Warning, code, diagnostics)
    }

    pub fn information(code: IssueCode, diagnostics: String) -> Self {
        Self::new(IssueSeverity::Information, code, diagnostics)
    }

    pub fn with_location(mut self, location: String) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_expression(mut self, expression: Vec<String>) -> Self {
        self.expression = Some(expression);
        self
    }

    /// Locate the issue at an element path; location and expression coincide
    pub fn at(self, path: String) -> Self {
        self.with_expression(vec![path.clone()]).with_location(path)
    }

    pub fn is_error(&self) -> bool {
        matches!(self.severity, IssueSeverity::Error | IssueSeverity::Fatal)
    }

    fn to_json(&self) -> Value {
        let mut issue = serde_json::json!({
            "severity": self.severity.to_string().to_lowercase(),
            "code": self.code.to_string(),
            "diagnostics": self.diagnostics,
        });

        if let Some(ref loc) = self.location {
            issue["location"] = serde_json::json!([loc]);
        }

        if let Some(ref expr) = self.expression {
            issue["expression"] = serde_json::json!(expr);
        }

        issue
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Fatal,
    Error,
    Warning,
    Information,
}

impl std::fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fatal => write!(f, "Fatal"),
            Self::Error => write!(f, "Error"),
            Self::Warning => write!(f, "Warning"),
            Self::Information => write!(f, "Information"),
        }
    }
}

/// OperationOutcome issue types produced by the validation steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueCode {
    Invalid,
    Structure,
    Required,
    Value,
    NotSupported,
    NotFound,
    CodeInvalid,
    Extension,
}

impl std::fmt::Display for IssueCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Invalid => "invalid",
            Self::Structure => "structure",
            Self::Required => "required",
            Self::Value => "value",
            Self::NotSupported => "not-supported",
            Self::NotFound => "not-found",
            Self::CodeInvalid => "code-invalid",
            Self::Extension => "extension",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Preset, ValidatorConfig};
    use serde_json::json;
    use sinter_models::Consent;

    #[test]
    fn test_validation_outcome_operations() {
        let outcome = ValidationOutcome {
            resource_type: Some("Consent".to_string()),
            valid: false,
            issues: vec![
                ValidationIssue::error(IssueCode::Required, "Missing required field".to_string()),
                ValidationIssue::warning(IssueCode::Value, "Deprecated code".to_string()),
            ],
        };

        assert!(!outcome.valid);
        assert!(outcome.has_errors());
        assert_eq!(outcome.error_count(), 1);
        assert_eq!(outcome.warning_count(), 1);
    }

    #[test]
    fn test_operation_outcome_conversion() {
        let outcome = ValidationOutcome {
            resource_type: Some("Consent".to_string()),
            valid: false,
            issues: vec![ValidationIssue::error(
                IssueCode::Required,
                "status is required".to_string(),
            )
            .at("Consent.status".to_string())],
        };

        let op_outcome = outcome.to_operation_outcome();
        assert_eq!(op_outcome["resourceType"], "OperationOutcome");
        assert_eq!(op_outcome["issue"][0]["severity"], "error");
        assert_eq!(op_outcome["issue"][0]["code"], "required");
        assert_eq!(op_outcome["issue"][0]["location"][0], "Consent.status");
        assert_eq!(op_outcome["issue"][0]["expression"][0], "Consent.status");
    }

    fn validator(config: ValidatorConfig) -> Validator {
        Validator::from_config(&config).unwrap()
    }

    fn bad_consent() -> Value {
        json!({
            "resourceType": "Consent",
            "status": "bogus",
            "scope": {"coding": [{"system": "http://example.org/scope", "code": "x"}]},
            "colour": "blue"
        })
    }

    #[test]
    fn steps_run_in_order() {
        let outcome = validator(ValidatorConfig::default()).validate(&bad_consent());
        assert!(!outcome.valid);
        assert_eq!(outcome.resource_type.as_deref(), Some("Consent"));

        let codes: Vec<IssueCode> = outcome.issues.iter().map(|i| i.code).collect();
        assert_eq!(
            codes,
            [
                IssueCode::Structure,
                IssueCode::Required,
                IssueCode::CodeInvalid,
                IssueCode::CodeInvalid,
            ]
        );
    }

    #[test]
    fn fail_fast_stops_after_first_failing_step() {
        let config = ValidatorConfig::builder().fail_fast(true).build();
        let outcome = validator(config).validate(&bad_consent());
        assert!(outcome.issues.iter().all(|i| i.code != IssueCode::CodeInvalid));
    }

    #[test]
    fn max_issues_truncates() {
        let config = ValidatorConfig::builder().max_issues(1).build();
        let outcome = validator(config).validate(&bad_consent());
        assert_eq!(outcome.issues.len(), 1);
        assert!(!outcome.valid);
    }

    #[test]
    fn max_issues_keeps_errors_beyond_the_cap() {
        let config = ValidatorConfig::builder()
            .allow_modifier_extensions(true)
            .max_issues(1)
            .build();
        let consent = json!({
            "resourceType": "Consent",
            "status": "active",
            "scope": {"text": "privacy"},
            "category": [{"text": "privacy"}],
            "modifierExtension": [{"url": "http://example.org/unknown", "valueBoolean": true}],
            "verification": [{}]
        });

        let outcome = validator(config).validate(&consent);
        assert!(!outcome.valid);
        assert_eq!(outcome.issues.len(), 1);
        assert_eq!(
            outcome.issues[0].location.as_deref(),
            Some("Consent.verification[0].verified")
        );
    }

    #[test]
    fn report_filters_severities() {
        let consent = json!({
            "resourceType": "Consent",
            "status": "active",
            "scope": {"coding": [{"system": "http://example.org/scope", "code": "x"}]},
            "category": [{"text": "privacy"}]
        });

        let outcome = validator(ValidatorConfig::default()).validate(&consent);
        assert!(outcome.valid);
        assert_eq!(outcome.warning_count(), 1);

        let quiet = ValidatorConfig::builder().include_warnings(false).build();
        let outcome = validator(quiet).validate(&consent);
        assert!(outcome.valid);
        assert!(outcome.issues.is_empty());
    }

    #[test]
    fn ingestion_accepts_unknown_elements() {
        let consent = json!({
            "resourceType": "Consent",
            "status": "active",
            "scope": {"text": "privacy"},
            "category": [{"text": "privacy"}],
            "colour": "blue"
        });
        let outcome = validator(ValidatorConfig::preset(Preset::Ingestion)).validate(&consent);
        assert!(outcome.valid);
        assert!(outcome.issues.is_empty());
    }

    #[test]
    fn typed_and_xml_entry_points() {
        let validator = validator(ValidatorConfig::default());
        let consent = Consent::from_value(json!({
            "resourceType": "Consent",
            "status": "active",
            "scope": {"text": "privacy"},
            "category": [{"text": "privacy"}]
        }))
        .unwrap();
        assert!(validator.validate_resource(&consent).unwrap().valid);

        let xml = r#"<Consent xmlns="http://hl7.org/fhir"><status value="bogus"/><scope><text value="privacy"/></scope><category><text value="privacy"/></category></Consent>"#;
        let outcome = validator.validate_xml(xml).unwrap();
        assert_eq!(outcome.error_count(), 1);
        assert_eq!(outcome.issues[0].location.as_deref(), Some("Consent.status"));

        assert!(validator.validate_xml("<Patient/>").is_err());
    }

    #[test]
    fn batch_validation() {
        let validator = validator(ValidatorConfig::default());
        let outcomes = validator.validate_batch(&[bad_consent(), json!({"resourceType": "Patient"})]);
        assert_eq!(outcomes.len(), 2);
        assert!(!outcomes[0].valid);
        assert!(outcomes[1].valid);
        assert_eq!(outcomes[1].warning_count(), 1);
    }

    #[test]
    fn validator_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Validator>();
    }
}
