use crate::{
    ExtensibleHandling, PreferredHandling, ReferenceMode, ReferencesConfig, ReportConfig,
    SchemaConfig, TerminologyConfig, TerminologyMode,
};

/// Compiled validation plan - list of steps to execute
#[derive(Debug, Clone)]
pub struct ValidationPlan {
    pub steps: Vec<Step>,
    pub fail_fast: bool,
    pub max_issues: usize,
    pub report: ReportPlan,
}

#[derive(Debug, Clone)]
pub enum Step {
    Schema(SchemaPlan),
    Terminology(TerminologyPlan),
    References(ReferencesPlan),
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::Schema(_) => "schema",
            Step::Terminology(_) => "terminology",
            Step::References(_) => "references",
        }
    }
}

// ============================================================================
// Step Plans
// ============================================================================

#[derive(Debug, Clone)]
pub struct SchemaPlan {
    pub allow_unknown_elements: bool,
    pub allow_modifier_extensions: bool,
    pub understood_modifier_extensions: Vec<String>,
}

impl SchemaPlan {
    pub fn understands(&self, url: &str) -> bool {
        self.understood_modifier_extensions.iter().any(|u| u == url)
    }
}

impl From<&SchemaConfig> for SchemaPlan {
    fn from(cfg: &SchemaConfig) -> Self {
        Self {
            allow_unknown_elements: cfg.allow_unknown_elements,
            allow_modifier_extensions: cfg.allow_modifier_extensions,
            understood_modifier_extensions: cfg.understood_modifier_extensions.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TerminologyPlan {
    pub mode: TerminologyMode,
    pub extensible_handling: ExtensibleHandling,
    pub preferred_handling: PreferredHandling,
}

impl From<&TerminologyConfig> for TerminologyPlan {
    fn from(cfg: &TerminologyConfig) -> Self {
        Self {
            mode: cfg.mode,
            extensible_handling: cfg.extensible_handling,
            preferred_handling: cfg.preferred_handling,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReferencesPlan {
    pub mode: ReferenceMode,
}

impl From<&ReferencesConfig> for ReferencesPlan {
    fn from(cfg: &ReferencesConfig) -> Self {
        Self { mode: cfg.mode }
    }
}

/// Which severities reach the final outcome
#[derive(Debug, Clone)]
pub struct ReportPlan {
    pub include_warnings: bool,
    pub include_information: bool,
}

impl From<&ReportConfig> for ReportPlan {
    fn from(cfg: &ReportConfig) -> Self {
        Self {
            include_warnings: cfg.include_warnings,
            include_information: cfg.include_information,
        }
    }
}
