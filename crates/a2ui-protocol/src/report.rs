//! Plain-text report building blocks
//!
//! Both analyses render their results with the same layout: a status line,
//! a statistics block and optional titled sections.

use serde::{Deserialize, Serialize};

/// Which optional sections a text report includes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    /// Type distribution table
    pub show_distribution: bool,
    /// Run list (variety reports only)
    pub show_runs: bool,
    /// Errors, warnings and violations
    pub show_violations: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            show_distribution: true,
            show_runs: true,
            show_violations: true,
        }
    }
}

impl ReportOptions {
    /// Status line and statistics only
    #[must_use]
    pub fn summary_only() -> Self {
        Self {
            show_distribution: false,
            show_runs: false,
            show_violations: false,
        }
    }
}

/// Incremental builder for a text report
#[derive(Debug, Default)]
pub struct TextReport {
    out: String,
}

impl TextReport {
    /// Start a report with its status line
    #[must_use]
    pub fn new(title: &str, valid: bool, detail: &str) -> Self {
        let mut report = Self::default();
        let status = if valid { "VALID" } else { "INVALID" };
        if detail.is_empty() {
            report.out.push_str(&format!("{title}: {status}\n"));
        } else {
            report.out.push_str(&format!("{title}: {status} ({detail})\n"));
        }
        report
    }

    /// Open a titled section
    pub fn section(&mut self, title: &str) {
        self.out.push_str(&format!("\n{title}:\n"));
    }

    /// `label: value` line inside a section
    pub fn field(&mut self, label: &str, value: impl std::fmt::Display) {
        self.out.push_str(&format!("  {label}: {value}\n"));
    }

    /// Numbered entry inside a section, counting from 1
    pub fn numbered(&mut self, position: usize, text: impl std::fmt::Display) {
        self.out.push_str(&format!("  {}. {text}\n", position + 1));
    }

    /// Plain indented line inside a section
    pub fn line(&mut self, text: impl std::fmt::Display) {
        self.out.push_str(&format!("  {text}\n"));
    }

    /// Finished report text
    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }
}

/// `1 error`, `3 errors`
#[must_use]
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_sections() {
        let mut report = TextReport::new("Validation", false, "1 error");
        report.section("Statistics");
        report.field("Total components", 3);
        report.section("Errors");
        report.numbered(0, "broken");
        assert_eq!(
            report.finish(),
            "Validation: INVALID (1 error)\n\nStatistics:\n  Total components: 3\n\nErrors:\n  1. broken\n"
        );
    }

    #[test]
    fn pluralizes() {
        assert_eq!(plural(1, "warning"), "1 warning");
        assert_eq!(plural(0, "warning"), "0 warnings");
    }
}
