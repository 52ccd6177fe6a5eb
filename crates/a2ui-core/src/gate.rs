//! Dashboard gate
//!
//! Runs the tree validator and the variety analyzer over one candidate
//! dashboard (a list of sibling component trees) and merges both outcomes
//! into a single [`DashboardVerdict`] under a [`GatePolicy`].

use crate::config::GateConfig;
use crate::error::{ConfigError, GateResult};
use a2ui_protocol::report::{ReportOptions, TextReport};
use a2ui_protocol::{ComponentDescriptor, ComponentRegistry, NodePath, TypeRegistry, Value};
use a2ui_validation::{Issue, TreeValidator, ValidationOptions, ValidationResult};
use a2ui_variety::{VarietyAnalyzer, VarietyResult, VarietyRules, Violation};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// How findings turn into a verdict
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatePolicy {
    /// Reject on any validation error or variety violation
    Strict,
    /// Reject on validation errors only
    #[default]
    Advisory,
    /// Never reject
    Permissive,
}

impl GatePolicy {
    /// All policies
    pub const ALL: [GatePolicy; 3] = [Self::Strict, Self::Advisory, Self::Permissive];

    /// Lowercase name
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Advisory => "advisory",
            Self::Permissive => "permissive",
        }
    }

    /// Whether a finding from `source` with `severity` blocks acceptance
    #[must_use]
    pub fn blocks(self, source: FindingSource, severity: Severity) -> bool {
        match (self, source, severity) {
            (Self::Permissive, _, _) | (_, _, Severity::Warning) => false,
            (Self::Strict, _, Severity::Error) => true,
            (Self::Advisory, FindingSource::Validation, Severity::Error) => true,
            (Self::Advisory, FindingSource::Variety, Severity::Error) => false,
        }
    }
}

impl Display for GatePolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GatePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownPolicy(s.to_string()))
    }
}

/// Analysis a finding came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingSource {
    /// Tree validator
    Validation,
    /// Variety analyzer
    Variety,
}

impl Display for FindingSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Validation => "validation",
            Self::Variety => "variety",
        })
    }
}

/// Severity as reported by the analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Validation error or variety violation
    Error,
    /// Validation warning
    Warning,
}

/// One merged finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Originating analysis
    pub source: FindingSource,
    /// Analysis severity
    pub severity: Severity,
    /// Issue kind or violation code
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Location, for validation findings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<NodePath>,
    /// Whether the finding rejects the dashboard under the active policy
    pub blocking: bool,
}

impl Finding {
    pub(crate) fn from_issue(issue: &Issue, severity: Severity, policy: GatePolicy) -> Self {
        let source = FindingSource::Validation;
        Self {
            source,
            severity,
            code: issue.kind.code().to_string(),
            message: issue.message.clone(),
            path: Some(issue.path.clone()),
            blocking: policy.blocks(source, severity),
        }
    }

    pub(crate) fn from_violation(violation: &Violation, policy: GatePolicy) -> Self {
        let source = FindingSource::Variety;
        Self {
            source,
            severity: Severity::Error,
            code: violation.code().to_string(),
            message: violation.message(),
            path: None,
            blocking: policy.blocks(source, Severity::Error),
        }
    }
}

impl Display for Finding {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{} [{}] {path}: {}", self.source, self.code, self.message),
            None => write!(f, "{} [{}] {}", self.source, self.code, self.message),
        }
    }
}

/// Merged outcome for one candidate dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardVerdict {
    /// No blocking findings
    pub accepted: bool,
    /// Policy the findings were judged under
    pub policy: GatePolicy,
    /// Every finding, validation first
    pub findings: Vec<Finding>,
    /// Full validator result
    pub validation: ValidationResult,
    /// Full variety result
    pub variety: VarietyResult,
}

impl DashboardVerdict {
    pub(crate) fn merge(
        validation: ValidationResult,
        variety: VarietyResult,
        policy: GatePolicy,
    ) -> Self {
        let mut findings: Vec<Finding> = validation
            .errors
            .iter()
            .map(|issue| Finding::from_issue(issue, Severity::Error, policy))
            .chain(
                validation
                    .warnings
                    .iter()
                    .map(|issue| Finding::from_issue(issue, Severity::Warning, policy)),
            )
            .collect();
        findings.extend(
            variety
                .violations
                .iter()
                .map(|violation| Finding::from_violation(violation, policy)),
        );

        let accepted = !findings.iter().any(|finding| finding.blocking);
        Self {
            accepted,
            policy,
            findings,
            validation,
            variety,
        }
    }

    /// Findings that reject the dashboard
    pub fn blocking(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|finding| finding.blocking)
    }

    /// Findings reported for information only
    pub fn advisories(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|finding| !finding.blocking)
    }

    /// Render as a human-readable report
    #[must_use]
    pub fn render(&self, options: &ReportOptions) -> String {
        let blocking: Vec<&Finding> = self.blocking().collect();
        let advisories: Vec<&Finding> = self.advisories().collect();
        let advisory_label = if advisories.len() == 1 { "advisory" } else { "advisories" };
        let detail = format!(
            "{} policy, {} blocking, {} {advisory_label}",
            self.policy,
            blocking.len(),
            advisories.len()
        );
        let mut report = TextReport::new("Dashboard check", self.accepted, &detail);

        report.section("Statistics");
        report.field("Components", self.validation.stats.total_components);
        report.field("Top-level sections", self.variety.total_components);
        report.field("Unique section types", self.variety.unique_type_count);
        report.field("Longest run", self.variety.max_run);
        report.field("Max depth", self.validation.stats.max_depth_observed);

        if options.show_distribution && !self.variety.distribution.is_empty() {
            report.section("Section types");
            for (name, count) in self.variety.ranked_distribution() {
                report.field(if name.is_empty() { "(untyped)" } else { name }, count);
            }
        }

        if options.show_violations {
            if !blocking.is_empty() {
                report.section("Blocking");
                for (i, finding) in blocking.iter().enumerate() {
                    report.numbered(i, finding);
                }
            }
            if !advisories.is_empty() {
                report.section("Advisory");
                for (i, finding) in advisories.iter().enumerate() {
                    report.numbered(i, finding);
                }
            }
        }

        report.finish()
    }
}

impl Display for DashboardVerdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&ReportOptions::default()))
    }
}

/// Validator and analyzer bundled under one policy
///
/// # Example
///
/// ```rust
/// use a2ui_core::{DashboardGate, GatePolicy};
/// use a2ui_protocol::{ComponentDescriptor, ComponentRegistry};
///
/// let gate = DashboardGate::new(ComponentRegistry::with_defaults()).with_policy(GatePolicy::Strict);
/// let dashboard = vec![
///     ComponentDescriptor::new("tldr", "a2ui.TLDR"),
///     ComponentDescriptor::new("stats", "a2ui.StatCard"),
///     ComponentDescriptor::new("news", "a2ui.HeadlineCard"),
///     ComponentDescriptor::new("video", "a2ui.VideoCard"),
/// ];
///
/// let verdict = gate.check_descriptors(&dashboard);
/// assert!(verdict.accepted);
/// ```
#[derive(Debug, Clone)]
pub struct DashboardGate<R: TypeRegistry = ComponentRegistry> {
    registry: R,
    options: ValidationOptions,
    rules: VarietyRules,
    policy: GatePolicy,
}

impl Default for DashboardGate {
    fn default() -> Self {
        Self::new(ComponentRegistry::with_defaults())
    }
}

impl<R: TypeRegistry> DashboardGate<R> {
    /// Create gate with default settings
    #[inline]
    #[must_use]
    pub fn new(registry: R) -> Self {
        Self::from_config(registry, &GateConfig::default())
    }

    /// Create gate from configuration
    #[must_use]
    pub fn from_config(registry: R, config: &GateConfig) -> Self {
        Self {
            registry,
            options: config.validation.clone(),
            rules: config.variety,
            policy: config.gate.policy,
        }
    }

    /// Create gate from a TOML config file
    ///
    /// # Errors
    /// Returns [`GateError::Config`](crate::GateError::Config) when the file
    /// cannot be loaded.
    pub fn from_config_file(registry: R, path: impl AsRef<std::path::Path>) -> GateResult<Self> {
        let config = GateConfig::load(path)?;
        Ok(Self::from_config(registry, &config))
    }

    /// With merge policy
    #[inline]
    #[must_use]
    pub fn with_policy(mut self, policy: GatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// With validation options
    #[inline]
    #[must_use]
    pub fn with_validation_options(mut self, options: ValidationOptions) -> Self {
        self.options = options;
        self
    }

    /// With variety rules
    #[inline]
    #[must_use]
    pub fn with_rules(mut self, rules: VarietyRules) -> Self {
        self.rules = rules;
        self
    }

    /// Active policy
    #[inline]
    #[must_use]
    pub fn policy(&self) -> GatePolicy {
        self.policy
    }

    /// Active variety rules
    #[inline]
    #[must_use]
    pub fn rules(&self) -> &VarietyRules {
        &self.rules
    }

    /// Type registry
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Tree validator borrowing this gate's registry and options
    #[must_use]
    pub fn validator(&self) -> TreeValidator<'_, R> {
        TreeValidator::with_options(&self.registry, self.options.clone())
    }

    /// Variety analyzer with this gate's rules
    #[inline]
    #[must_use]
    pub fn analyzer(&self) -> VarietyAnalyzer {
        VarietyAnalyzer::new(self.rules)
    }

    /// Judge one dashboard
    ///
    /// `dashboard` holds the top-level sections; the validator walks each
    /// tree in one shared identity namespace and the analyzer judges the
    /// order of their types.
    #[must_use]
    pub fn check(&self, dashboard: &[Value]) -> DashboardVerdict {
        let validation = self.validator().validate_all(dashboard);
        let variety = self.analyzer().analyze(dashboard);
        let verdict = DashboardVerdict::merge(validation, variety, self.policy);
        tracing::debug!(
            sections = dashboard.len(),
            policy = %self.policy,
            accepted = verdict.accepted,
            findings = verdict.findings.len(),
            "dashboard checked"
        );
        verdict
    }

    /// Judge typed descriptors
    #[must_use]
    pub fn check_descriptors(&self, dashboard: &[ComponentDescriptor]) -> DashboardVerdict {
        let nodes: Vec<Value> = dashboard.iter().map(ComponentDescriptor::to_value).collect();
        self.check(&nodes)
    }

    /// Judge a dashboard decoded from JSON
    ///
    /// # Errors
    /// Returns [`GateError::Contract`](crate::GateError::Contract) when
    /// `dashboard` is not a JSON array.
    pub fn check_json(&self, dashboard: &serde_json::Value) -> GateResult<DashboardVerdict> {
        match Value::from(dashboard.clone()) {
            Value::Array(sections) => Ok(self.check(&sections)),
            other => Err(a2ui_validation::ContractError::ExpectedArray {
                found: other.kind_name(),
            }
            .into()),
        }
    }
}

impl<R: TypeRegistry + Sync> DashboardGate<R> {
    /// Judge independent candidate dashboards in parallel
    ///
    /// Verdicts come back in input order.
    #[must_use]
    pub fn check_many(&self, candidates: &[Vec<Value>]) -> Vec<DashboardVerdict> {
        let verdicts: Vec<DashboardVerdict> = candidates
            .par_iter()
            .map(|dashboard| self.check(dashboard))
            .collect();
        tracing::debug!(
            candidates = candidates.len(),
            accepted = verdicts.iter().filter(|v| v.accepted).count(),
            "candidate batch checked"
        );
        verdicts
    }
}
