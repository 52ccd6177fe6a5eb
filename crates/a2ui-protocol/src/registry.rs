//! Component type registry
//!
//! The validators never own the set of known types; they consult a
//! [`TypeRegistry`] supplied by the surrounding application.
//! [`ComponentRegistry`] is the stock implementation, preloaded by
//! [`ComponentRegistry::with_defaults`] with the built-in `a2ui.*` catalogue.

use std::collections::{HashMap, HashSet};

/// Lookup capability answering "is this type name known?"
pub trait TypeRegistry {
    /// Check whether `type_name` maps to a renderable component
    fn is_registered(&self, type_name: &str) -> bool;

    /// Payload keys every instance of `type_name` must carry
    fn required_props(&self, _type_name: &str) -> &[String] {
        &[]
    }
}

impl TypeRegistry for HashSet<String> {
    fn is_registered(&self, type_name: &str) -> bool {
        self.contains(type_name)
    }
}

/// Adapter turning a predicate into a [`TypeRegistry`]
#[derive(Debug, Clone, Copy)]
pub struct FnRegistry<F>(pub F);

impl<F> TypeRegistry for FnRegistry<F>
where
    F: Fn(&str) -> bool,
{
    fn is_registered(&self, type_name: &str) -> bool {
        (self.0)(type_name)
    }
}

/// Built-in component catalogue, grouped by purpose
pub const DEFAULT_COMPONENT_TYPES: &[&str] = &[
    // News & trends
    "a2ui.HeadlineCard",
    "a2ui.TrendIndicator",
    "a2ui.TimelineEvent",
    "a2ui.NewsTicker",
    // Media
    "a2ui.VideoCard",
    "a2ui.ImageCard",
    "a2ui.PlaylistCard",
    "a2ui.PodcastCard",
    // Data & statistics
    "a2ui.StatCard",
    "a2ui.MetricRow",
    "a2ui.ProgressRing",
    "a2ui.ComparisonBar",
    "a2ui.DataTable",
    "a2ui.MiniChart",
    // Lists & rankings
    "a2ui.RankedItem",
    "a2ui.ChecklistItem",
    "a2ui.ProConItem",
    "a2ui.BulletPoint",
    // Resources & links
    "a2ui.LinkCard",
    "a2ui.ToolCard",
    "a2ui.BookCard",
    "a2ui.RepoCard",
    // People & entities
    "a2ui.ProfileCard",
    "a2ui.CompanyCard",
    "a2ui.QuoteCard",
    "a2ui.ExpertTip",
    // Summary & overview
    "a2ui.TLDR",
    "a2ui.KeyTakeaways",
    "a2ui.ExecutiveSummary",
    "a2ui.TableOfContents",
    // Comparison
    "a2ui.ComparisonTable",
    "a2ui.VsCard",
    "a2ui.FeatureMatrix",
    "a2ui.PricingTable",
    // Instructional
    "a2ui.StepCard",
    "a2ui.CodeBlock",
    "a2ui.CalloutCard",
    "a2ui.CommandCard",
    // Layout
    "a2ui.Section",
    "a2ui.Grid",
    "a2ui.Columns",
    "a2ui.Tabs",
    "a2ui.Accordion",
    "a2ui.Carousel",
    "a2ui.Sidebar",
    // Tags & categories
    "a2ui.TagCloud",
    "a2ui.CategoryBadge",
    "a2ui.DifficultyBadge",
];

/// Required payload keys for the built-in types that have any
const DEFAULT_REQUIRED_PROPS: &[(&str, &[&str])] = &[
    ("a2ui.StatCard", &["value", "label"]),
    ("a2ui.VideoCard", &["videoId", "platform"]),
    ("a2ui.HeadlineCard", &["title"]),
    ("a2ui.RankedItem", &["rank", "title"]),
    ("a2ui.CodeBlock", &["code", "language"]),
    ("a2ui.Section", &["title"]),
    ("a2ui.Grid", &["columns"]),
    ("a2ui.TLDR", &["summary"]),
];

/// Registry of component type names and their required props
#[derive(Debug, Default, Clone)]
pub struct ComponentRegistry {
    types: HashMap<String, Vec<String>>,
}

impl ComponentRegistry {
    /// Create new empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Create registry with the built-in catalogue
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for name in DEFAULT_COMPONENT_TYPES {
            registry.register(name);
        }
        for (name, props) in DEFAULT_REQUIRED_PROPS {
            registry.register_with_props(name, props);
        }
        registry
    }

    /// Register a type name with no required props
    ///
    /// Re-registering keeps previously declared props.
    pub fn register(&mut self, name: &str) {
        self.types.entry(name.to_string()).or_default();
    }

    /// Register a type name together with its required props
    pub fn register_with_props(&mut self, name: &str, props: &[&str]) {
        self.types.insert(
            name.to_string(),
            props.iter().map(ToString::to_string).collect(),
        );
    }

    /// Check if type exists
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Remove type
    #[inline]
    pub fn remove(&mut self, name: &str) -> bool {
        self.types.remove(name).is_some()
    }

    /// List all registered type names, sorted
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Get number of registered types
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeRegistry for ComponentRegistry {
    fn is_registered(&self, type_name: &str) -> bool {
        self.contains(type_name)
    }

    fn required_props(&self, type_name: &str) -> &[String] {
        match self.types.get(type_name) {
            Some(props) => props,
            None => &[],
        }
    }
}

impl<'a> FromIterator<&'a str> for ComponentRegistry {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut registry = Self::new();
        for name in iter {
            registry.register(name);
        }
        registry
    }
}
