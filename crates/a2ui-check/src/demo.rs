//! Built-in variety scenarios

use a2ui_protocol::ComponentDescriptor;

/// One named dashboard with its expected outcome
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    /// Heading
    pub title: &'static str,
    /// Expected variety outcome under default rules
    pub expect_valid: bool,
    /// `(type, id)` pairs in order
    pub sections: &'static [(&'static str, &'static str)],
}

impl Scenario {
    /// Sections as descriptors with empty payloads
    #[must_use]
    pub fn descriptors(&self) -> Vec<ComponentDescriptor> {
        self.sections
            .iter()
            .map(|(component_type, id)| ComponentDescriptor::new(*id, *component_type))
            .collect()
    }
}

/// Scenarios in presentation order
pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        title: "Good variety (4+ types, no 3+ run)",
        expect_valid: true,
        sections: &[
            ("a2ui.TLDR", "tldr-1"),
            ("a2ui.StatCard", "stat-1"),
            ("a2ui.HeadlineCard", "headline-1"),
            ("a2ui.VideoCard", "video-1"),
            ("a2ui.StatCard", "stat-2"),
        ],
    },
    Scenario {
        title: "Two in a row allowed",
        expect_valid: true,
        sections: &[
            ("a2ui.TLDR", "tldr-1"),
            ("a2ui.StatCard", "stat-1"),
            ("a2ui.StatCard", "stat-2"),
            ("a2ui.HeadlineCard", "headline-1"),
            ("a2ui.VideoCard", "video-1"),
        ],
    },
    Scenario {
        title: "High variety (10 types)",
        expect_valid: true,
        sections: &[
            ("a2ui.TLDR", "tldr-1"),
            ("a2ui.StatCard", "stat-1"),
            ("a2ui.HeadlineCard", "headline-1"),
            ("a2ui.VideoCard", "video-1"),
            ("a2ui.ProfileCard", "profile-1"),
            ("a2ui.CompanyCard", "company-1"),
            ("a2ui.QuoteCard", "quote-1"),
            ("a2ui.LinkCard", "link-1"),
            ("a2ui.CodeBlock", "code-1"),
            ("a2ui.TableOfContents", "toc-1"),
        ],
    },
    Scenario {
        title: "Exactly four types",
        expect_valid: true,
        sections: &[
            ("a2ui.TLDR", "tldr-1"),
            ("a2ui.StatCard", "stat-1"),
            ("a2ui.HeadlineCard", "headline-1"),
            ("a2ui.VideoCard", "video-1"),
        ],
    },
    Scenario {
        title: "Only two types",
        expect_valid: false,
        sections: &[
            ("a2ui.StatCard", "s1"),
            ("a2ui.StatCard", "s2"),
            ("a2ui.HeadlineCard", "h1"),
            ("a2ui.StatCard", "s3"),
        ],
    },
    Scenario {
        title: "Three in a row",
        expect_valid: false,
        sections: &[
            ("a2ui.TLDR", "tldr-1"),
            ("a2ui.StatCard", "s1"),
            ("a2ui.StatCard", "s2"),
            ("a2ui.StatCard", "s3"),
            ("a2ui.HeadlineCard", "h1"),
            ("a2ui.VideoCard", "v1"),
        ],
    },
    Scenario {
        title: "Both rules broken",
        expect_valid: false,
        sections: &[
            ("a2ui.StatCard", "s1"),
            ("a2ui.StatCard", "s2"),
            ("a2ui.StatCard", "s3"),
            ("a2ui.HeadlineCard", "h1"),
            ("a2ui.StatCard", "s4"),
        ],
    },
    Scenario {
        title: "Research paper dashboard",
        expect_valid: true,
        sections: &[
            ("a2ui.TLDR", "tldr-ai-research"),
            ("a2ui.TableOfContents", "toc-sections"),
            ("a2ui.StatCard", "stat-accuracy"),
            ("a2ui.StatCard", "stat-training-time"),
            ("a2ui.MiniChart", "chart-convergence"),
            ("a2ui.KeyTakeaways", "takeaways-findings"),
            ("a2ui.CodeBlock", "code-optimizer"),
            ("a2ui.ComparisonTable", "compare-algorithms"),
            ("a2ui.LinkCard", "link-arxiv"),
        ],
    },
    Scenario {
        title: "Product launch dashboard",
        expect_valid: true,
        sections: &[
            ("a2ui.ExecutiveSummary", "exec-summary"),
            ("a2ui.StatCard", "stat-revenue-goal"),
            ("a2ui.StatCard", "stat-launch-budget"),
            ("a2ui.TimelineEvent", "timeline-beta"),
            ("a2ui.TimelineEvent", "timeline-launch"),
            ("a2ui.ProfileCard", "profile-persona-it-director"),
            ("a2ui.ComparisonTable", "pricing-tiers"),
            ("a2ui.DataTable", "metrics-kpis"),
            ("a2ui.CalloutCard", "callout-risks"),
        ],
    },
];
