//! Text rendering of variety results

use crate::result::VarietyResult;
use a2ui_protocol::report::{plural, ReportOptions, TextReport};
use std::fmt::{self, Display, Formatter};

/// Distribution label for items without a type
const UNTYPED: &str = "(untyped)";

impl VarietyResult {
    /// Render as a human-readable report
    #[must_use]
    pub fn render(&self, options: &ReportOptions) -> String {
        let detail = plural(self.violations.len(), "violation");
        let mut report = TextReport::new("Variety analysis", self.valid, &detail);

        report.section("Statistics");
        report.field("Total components", self.total_components);
        report.field(
            "Unique types",
            format!("{} ({})", self.unique_type_count, pass_fail(self.meets_min_types)),
        );
        report.field(
            "Longest run",
            format!("{} ({})", self.max_run, pass_fail(self.meets_no_consecutive)),
        );

        if options.show_distribution && !self.distribution.is_empty() {
            report.section("Type distribution");
            for (name, count) in self.ranked_distribution() {
                report.field(if name.is_empty() { UNTYPED } else { name }, count);
            }
        }

        if options.show_runs && !self.runs.is_empty() {
            report.section("Runs");
            for run in &self.runs {
                report.line(format!(
                    "{} x{} at {}-{}",
                    run.component_type, run.count, run.start_index, run.end_index
                ));
            }
        }

        if options.show_violations && !self.violations.is_empty() {
            report.section("Violations");
            for (i, violation) in self.violations.iter().enumerate() {
                report.numbered(i, violation);
            }
        }

        report.finish()
    }
}

fn pass_fail(ok: bool) -> &'static str {
    if ok {
        "ok"
    } else {
        "fail"
    }
}

impl Display for VarietyResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&ReportOptions::default()))
    }
}
