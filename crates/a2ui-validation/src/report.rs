//! Text rendering of validation results

use crate::result::ValidationResult;
use a2ui_protocol::report::{plural, ReportOptions, TextReport};
use std::fmt::{self, Display, Formatter};

impl ValidationResult {
    /// Render as a human-readable report
    ///
    /// Layout: status line, statistics block, then (per `options`) the type
    /// distribution and the error and warning lists.
    #[must_use]
    pub fn render(&self, options: &ReportOptions) -> String {
        let detail = format!(
            "{}, {}",
            plural(self.errors.len(), "error"),
            plural(self.warnings.len(), "warning")
        );
        let mut report = TextReport::new("Tree validation", self.valid, &detail);

        report.section("Statistics");
        report.field("Total components", self.stats.total_components);
        report.field("Unique types", self.stats.unique_type_count);
        report.field("Max depth", self.stats.max_depth_observed);
        report.field("Payload keys", self.stats.total_payload_keys);

        if options.show_distribution && !self.stats.type_counts.is_empty() {
            let mut rows: Vec<(&String, &usize)> = self.stats.type_counts.iter().collect();
            rows.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
            report.section("Type distribution");
            for (name, count) in rows {
                report.field(name, count);
            }
        }

        if options.show_violations {
            if !self.errors.is_empty() {
                report.section("Errors");
                for (i, issue) in self.errors.iter().enumerate() {
                    report.numbered(i, issue);
                }
            }
            if !self.warnings.is_empty() {
                report.section("Warnings");
                for (i, issue) in self.warnings.iter().enumerate() {
                    report.numbered(i, issue);
                }
            }
        }

        report.finish()
    }
}

impl Display for ValidationResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&ReportOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use crate::TreeValidator;
    use a2ui_protocol::ReportOptions;
    use a2ui_test_utils::{leaf, registry};

    #[test]
    fn renders_errors_with_paths() {
        let registry = registry();
        let roots = vec![leaf("x", "a2ui.TLDR"), leaf("x", "a2ui.StatCard")];
        let result = TreeValidator::new(&registry).validate_descriptors(&roots);

        let text = result.render(&ReportOptions::default());
        assert!(text.starts_with("Tree validation: INVALID (1 error, 0 warnings)\n"));
        assert!(text.contains("  Total components: 2\n"));
        assert!(text.contains("\nType distribution:\n  a2ui.StatCard: 1\n  a2ui.TLDR: 1\n"));
        assert!(text.contains("  1. [DUPLICATE_KEY] root[1].id: duplicate component id 'x'\n"));
    }

    #[test]
    fn summary_only_hides_sections() {
        let registry = registry();
        let result = TreeValidator::new(&registry).validate_descriptor(&leaf("a", "bad"));
        let text = result.render(&ReportOptions::summary_only());
        assert!(text.starts_with("Tree validation: INVALID"));
        assert!(!text.contains("Errors:"));
        assert!(!text.contains("Type distribution:"));
        assert_eq!(text, result.render(&ReportOptions::summary_only()));
    }
}
