//! Testing utilities for the A2UI guard workspace
//!
//! Shared fixtures: descriptor builders, typed sequences and the stock
//! dashboards used across validator, analyzer and gate tests.

#![allow(missing_docs)]

use a2ui_protocol::{ComponentDescriptor, ComponentRegistry, IdGenerator, Value};

pub fn registry() -> ComponentRegistry {
    ComponentRegistry::with_defaults()
}

pub fn leaf(id: &str, component_type: &str) -> ComponentDescriptor {
    ComponentDescriptor::new(id, component_type)
}

pub fn node(json: serde_json::Value) -> Value {
    Value::from(json)
}

/// Stat card carrying its required props
pub fn stat_card(id: &str, value: &str, label: &str) -> ComponentDescriptor {
    ComponentDescriptor::new(id, "a2ui.StatCard")
        .with_prop("value", value)
        .with_prop("label", label)
}

/// One descriptor per type name, with generated unique IDs
pub fn sequence(types: &[&str]) -> Vec<ComponentDescriptor> {
    let mut ids = IdGenerator::new();
    types
        .iter()
        .map(|t| ComponentDescriptor::new(ids.next_id(t, None), *t))
        .collect()
}

/// Section chain whose deepest node sits at `depth`
pub fn nested_chain(depth: usize) -> ComponentDescriptor {
    let mut current = ComponentDescriptor::new(format!("level-{depth}"), "a2ui.Section");
    for level in (0..depth).rev() {
        current = ComponentDescriptor::new(format!("level-{level}"), "a2ui.Section")
            .with_child(current);
    }
    current
}

/// Four distinct types, one repeated pair
pub fn diverse_dashboard() -> Vec<ComponentDescriptor> {
    sequence(&[
        "a2ui.TLDR",
        "a2ui.StatCard",
        "a2ui.StatCard",
        "a2ui.HeadlineCard",
        "a2ui.VideoCard",
    ])
}

/// Research-paper style dashboard, nine components
pub fn research_dashboard() -> Vec<ComponentDescriptor> {
    sequence(&[
        "a2ui.TLDR",
        "a2ui.TableOfContents",
        "a2ui.StatCard",
        "a2ui.StatCard",
        "a2ui.MiniChart",
        "a2ui.KeyTakeaways",
        "a2ui.CodeBlock",
        "a2ui.ComparisonTable",
        "a2ui.LinkCard",
    ])
}

/// Three stat cards in a row amid too few types
pub fn monotonous_dashboard() -> Vec<ComponentDescriptor> {
    sequence(&[
        "a2ui.StatCard",
        "a2ui.StatCard",
        "a2ui.StatCard",
        "a2ui.HeadlineCard",
        "a2ui.StatCard",
    ])
}
