//! Incremental admission for streaming producers
//!
//! A producer that emits one top-level section at a time opens a
//! [`StreamSession`] on a gate and offers each section as it arrives. The
//! session keeps the identity namespace and the accepted type sequence, so
//! a section is judged against everything admitted before it.

use crate::gate::{DashboardGate, DashboardVerdict, Finding, FindingSource, GatePolicy, Severity};
use a2ui_protocol::{ComponentDescriptor, NodePath, TypeRegistry, Typed, Value};
use a2ui_validation::ROOT_NAME;
use std::collections::HashSet;

/// Outcome of offering one section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    /// Section appended to the stream
    Accepted,
    /// Section refused; the blocking findings say why
    Rejected(Vec<Finding>),
}

impl Admission {
    /// Check acceptance
    #[inline]
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Rejection reasons, empty when accepted
    #[must_use]
    pub fn reasons(&self) -> &[Finding] {
        match self {
            Self::Accepted => &[],
            Self::Rejected(reasons) => reasons,
        }
    }
}

/// Open stream of sections judged one by one
#[derive(Debug)]
pub struct StreamSession<'g, R: TypeRegistry> {
    gate: &'g DashboardGate<R>,
    accepted: Vec<Value>,
    ids: HashSet<String>,
    advisories: Vec<Finding>,
    rejected: usize,
}

impl<R: TypeRegistry> DashboardGate<R> {
    /// Open a streaming session on this gate
    #[must_use]
    pub fn session(&self) -> StreamSession<'_, R> {
        StreamSession::new(self)
    }
}

impl<'g, R: TypeRegistry> StreamSession<'g, R> {
    /// Create empty session
    #[must_use]
    pub fn new(gate: &'g DashboardGate<R>) -> Self {
        Self {
            gate,
            accepted: Vec::new(),
            ids: HashSet::new(),
            advisories: Vec::new(),
            rejected: 0,
        }
    }

    /// Offer the next section
    ///
    /// The section is validated against the identities already admitted,
    /// and its type against the trailing run of the accepted sequence. The
    /// minimum-types rule only applies to the whole stream, in
    /// [`finish`](Self::finish).
    pub fn offer(&mut self, section: Value) -> Admission {
        let policy = self.gate.policy();
        let path = NodePath::root(ROOT_NAME).index(self.accepted.len());
        let validation = self.gate.validator().validate_next(&section, &path, &self.ids);

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

        let candidate = section.type_name();
        let analyzer = self.gate.analyzer();
        if analyzer.would_violate(&self.accepted, candidate) {
            findings.push(repetition_finding(
                candidate,
                analyzer.rules().max_consecutive_same_type,
                policy,
            ));
        }

        let (blocking, advisory): (Vec<Finding>, Vec<Finding>) =
            findings.into_iter().partition(|finding| finding.blocking);

        if !blocking.is_empty() {
            self.rejected += 1;
            tracing::debug!(
                position = self.accepted.len(),
                section_type = candidate,
                reasons = blocking.len(),
                "section rejected"
            );
            return Admission::Rejected(blocking);
        }

        let claimed = self.gate.validator().component_ids(&section);
        self.ids.extend(claimed.into_iter().map(str::to_string));
        self.advisories.extend(advisory);
        tracing::trace!(position = self.accepted.len(), section_type = candidate, "section accepted");
        self.accepted.push(section);
        Admission::Accepted
    }

    /// Offer a typed descriptor
    pub fn offer_descriptor(&mut self, section: &ComponentDescriptor) -> Admission {
        self.offer(section.to_value())
    }

    /// Type the producer should emit next, if any
    #[must_use]
    pub fn suggest_next<'a, A: Typed>(&self, available: &'a [A]) -> Option<&'a str> {
        self.gate.analyzer().suggest_next(&self.accepted, available)
    }

    /// Accepted sections, in order
    #[inline]
    #[must_use]
    pub fn accepted(&self) -> &[Value] {
        &self.accepted
    }

    /// Number of accepted sections
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    /// Check if nothing was accepted yet
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }

    /// Number of refused offers
    #[inline]
    #[must_use]
    pub fn rejected_count(&self) -> usize {
        self.rejected
    }

    /// Non-blocking findings gathered on accepted sections
    #[inline]
    #[must_use]
    pub fn advisories(&self) -> &[Finding] {
        &self.advisories
    }

    /// Close the stream and judge everything accepted as one dashboard
    #[must_use]
    pub fn finish(self) -> DashboardVerdict {
        tracing::debug!(
            accepted = self.accepted.len(),
            rejected = self.rejected,
            "stream finished"
        );
        self.gate.check(&self.accepted)
    }
}

fn repetition_finding(component_type: &str, limit: usize, policy: GatePolicy) -> Finding {
    let source = FindingSource::Variety;
    Finding {
        source,
        severity: Severity::Error,
        code: "EXCESSIVE_REPETITION".to_string(),
        message: format!(
            "{component_type} would repeat {} times in a row, maximum allowed is {limit}",
            limit + 1
        ),
        path: None,
        blocking: policy.blocks(source, Severity::Error),
    }
}
