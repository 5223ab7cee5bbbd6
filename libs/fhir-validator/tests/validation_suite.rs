//! Validation test suite
//!
//! Uses libtest-mimic to generate one test per manifest entry. Each test
//! validates a fixture under the configured preset and compares the error
//! count (and optionally warning count and error locations) against the
//! manifest expectations.
//!
//! ```bash
//! # Run all cases
//! cargo test -p sinter-validator --test validation_suite
//!
//! # Filter by name
//! cargo test -p sinter-validator --test validation_suite -- consent
//!
//! # List tests without running
//! cargo test -p sinter-validator --test validation_suite -- --list
//! ```

use std::fs;
use std::path::PathBuf;
use std::process;

use libtest_mimic::{Arguments, Failed, Trial};
use serde::Deserialize;
use sinter_validator::{Preset, ValidationOutcome, Validator, ValidatorConfig};

#[derive(Debug, Deserialize)]
struct Manifest {
    test_cases: Vec<TestCase>,
}

#[derive(Debug, Clone, Deserialize)]
struct TestCase {
    name: String,
    file: String,
    #[serde(default)]
    preset: Option<Preset>,
    errors: usize,
    #[serde(default)]
    warnings: Option<usize>,
    /// Locations of the error issues, in report order
    #[serde(default)]
    locations: Option<Vec<String>>,
}

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
}

fn load_manifest() -> Option<Manifest> {
    let raw = fs::read_to_string(data_dir().join("manifest.json")).ok()?;
    match serde_json::from_str(&raw) {
        Ok(manifest) => Some(manifest),
        Err(e) => {
            eprintln!("manifest.json is malformed: {e}");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Test generation
// ---------------------------------------------------------------------------

fn make_trial(tc: &TestCase) -> Trial {
    let preset = tc.preset.unwrap_or(Preset::Authoring);
    let test_name = format!("{:?}::{}", preset, tc.name);
    let tc = tc.clone();

    Trial::test(test_name, move || run_single_test(&tc, preset))
}

fn validate_file(validator: &Validator, file: &str) -> Result<ValidationOutcome, Failed> {
    let path = data_dir().join(file);
    let raw = fs::read_to_string(&path)
        .map_err(|e| Failed::from(format!("could not read {}: {e}", path.display())))?;

    if file.ends_with(".xml") {
        validator
            .validate_xml(&raw)
            .map_err(|e| Failed::from(format!("could not read XML: {e}")))
    } else {
        let resource = serde_json::from_str(&raw)
            .map_err(|e| Failed::from(format!("could not parse JSON: {e}")))?;
        Ok(validator.validate(&resource))
    }
}

fn run_single_test(tc: &TestCase, preset: Preset) -> Result<(), Failed> {
    let validator = Validator::from_config(&ValidatorConfig::preset(preset))
        .map_err(|e| Failed::from(format!("invalid preset: {e}")))?;
    let outcome = validate_file(&validator, &tc.file)?;

    let mut problems = Vec::new();

    let actual = outcome.error_count();
    if actual != tc.errors {
        problems.push(format!("error count mismatch: expected {}, got {actual}", tc.errors));
    }
    if outcome.valid != (actual == 0) {
        problems.push(format!("valid flag {} disagrees with {actual} errors", outcome.valid));
    }

    if let Some(expected) = tc.warnings {
        let actual = outcome.warning_count();
        if actual != expected {
            problems.push(format!("warning count mismatch: expected {expected}, got {actual}"));
        }
    }

    if let Some(expected) = &tc.locations {
        let actual: Vec<&str> = outcome
            .issues
            .iter()
            .filter(|i| i.is_error())
            .map(|i| i.location.as_deref().unwrap_or("-"))
            .collect();
        if actual != *expected {
            problems.push(format!("error locations mismatch: expected {expected:?}, got {actual:?}"));
        }
    }

    if problems.is_empty() {
        return Ok(());
    }

    let mut msg = problems.join("\n");
    for (i, issue) in outcome.issues.iter().take(5).enumerate() {
        msg.push_str(&format!(
            "\n  [{i}] {}: {} @ {}",
            issue.severity,
            issue.diagnostics,
            issue.location.as_deref().unwrap_or("-"),
        ));
    }
    let remaining = outcome.issues.len().saturating_sub(5);
    if remaining > 0 {
        msg.push_str(&format!("\n  ... and {remaining} more issues"));
    }
    Err(msg.into())
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() {
    let args = Arguments::from_args();

    let manifest = match load_manifest() {
        Some(m) => m,
        None => {
            eprintln!("tests/data/manifest.json not found or unreadable.");
            process::exit(1);
        }
    };

    eprintln!("Validation suite: {} cases", manifest.test_cases.len());

    let trials: Vec<Trial> = manifest.test_cases.iter().map(make_trial).collect();
    libtest_mimic::run(&args, trials).exit();
}
