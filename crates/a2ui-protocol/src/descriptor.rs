//! Component descriptors
//!
//! Provides the typed [`ComponentDescriptor`] producers build, and the
//! [`Typed`] accessor both analyses use to read a component kind from
//! descriptors, untyped nodes or bare type names.

use crate::value::{Map, Value};
use serde::{Deserialize, Serialize};

/// Wire name of the identity field
pub const FIELD_ID: &str = "id";
/// Wire name of the component kind field
pub const FIELD_TYPE: &str = "type";
/// Wire name of the payload field
pub const FIELD_PAYLOAD: &str = "payload";
/// Legacy wire name of the payload field
pub const FIELD_PROPS: &str = "props";
/// Wire name of the nested components field
pub const FIELD_CHILDREN: &str = "children";
/// Wire name of the layout hints field
pub const FIELD_LAYOUT: &str = "layout";
/// Wire name of the styling hints field
pub const FIELD_STYLING: &str = "styling";

/// One UI component instance
///
/// # Example
///
/// ```rust
/// use a2ui_protocol::{ComponentDescriptor, Value};
///
/// let card = ComponentDescriptor::new("stat-1", "a2ui.StatCard")
///     .with_prop("value", "$196B")
///     .with_prop("label", "AI Market Size");
/// assert_eq!(card.payload.len(), 2);
/// assert!(matches!(card.to_value().get("type"), Some(Value::String(_))));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    /// Identity, unique within one validation pass
    pub id: String,

    /// Component kind, e.g. `a2ui.StatCard`
    #[serde(rename = "type")]
    pub component_type: String,

    /// Component-specific data
    #[serde(alias = "props", default)]
    pub payload: Map,

    /// Nested components; `None` for leaves
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ComponentDescriptor>>,

    /// Layout hints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Map>,

    /// Styling hints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styling: Option<Map>,
}

impl ComponentDescriptor {
    /// Create a leaf descriptor with an empty payload
    #[must_use]
    pub fn new(id: impl Into<String>, component_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            component_type: component_type.into(),
            payload: Map::new(),
            children: None,
            layout: None,
            styling: None,
        }
    }

    /// With one payload entry
    #[must_use]
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }

    /// With a nested child, turning this descriptor into a container
    #[must_use]
    pub fn with_child(mut self, child: ComponentDescriptor) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    /// With layout hints
    #[must_use]
    pub fn with_layout(mut self, layout: Map) -> Self {
        self.layout = Some(layout);
        self
    }

    /// With styling hints
    #[must_use]
    pub fn with_styling(mut self, styling: Map) -> Self {
        self.styling = Some(styling);
        self
    }

    /// Check if this descriptor has no children
    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.as_ref().map_or(true, Vec::is_empty)
    }

    /// Untyped node form, the shape the tree validator checks
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut node = Map::new();
        node.insert(FIELD_ID.into(), Value::String(self.id.clone()));
        node.insert(
            FIELD_TYPE.into(),
            Value::String(self.component_type.clone()),
        );
        node.insert(FIELD_PAYLOAD.into(), Value::Object(self.payload.clone()));
        if let Some(children) = &self.children {
            node.insert(
                FIELD_CHILDREN.into(),
                Value::Array(children.iter().map(Self::to_value).collect()),
            );
        }
        if let Some(layout) = &self.layout {
            node.insert(FIELD_LAYOUT.into(), Value::Object(layout.clone()));
        }
        if let Some(styling) = &self.styling {
            node.insert(FIELD_STYLING.into(), Value::Object(styling.clone()));
        }
        Value::Object(node)
    }
}

impl From<&ComponentDescriptor> for Value {
    fn from(descriptor: &ComponentDescriptor) -> Self {
        descriptor.to_value()
    }
}

impl From<ComponentDescriptor> for Value {
    fn from(descriptor: ComponentDescriptor) -> Self {
        descriptor.to_value()
    }
}

/// Anything that names a component kind
///
/// Sequences for variety analysis are slices of any `Typed` item.
pub trait Typed {
    /// The component kind; empty when the item carries none
    fn type_name(&self) -> &str;
}

impl Typed for str {
    fn type_name(&self) -> &str {
        self
    }
}

impl Typed for String {
    fn type_name(&self) -> &str {
        self
    }
}

impl<T: Typed + ?Sized> Typed for &T {
    fn type_name(&self) -> &str {
        (**self).type_name()
    }
}

impl Typed for ComponentDescriptor {
    fn type_name(&self) -> &str {
        &self.component_type
    }
}

impl Typed for Value {
    fn type_name(&self) -> &str {
        self.get(FIELD_TYPE).and_then(Value::as_str).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_and_leaf() {
        let section = ComponentDescriptor::new("intro", "a2ui.Section")
            .with_prop("title", "Intro")
            .with_child(ComponentDescriptor::new("tldr-1", "a2ui.TLDR"));
        assert!(!section.is_leaf());
        assert!(section.children.as_ref().unwrap()[0].is_leaf());
    }

    #[test]
    fn to_value_shape() {
        let node = ComponentDescriptor::new("s", "a2ui.StatCard")
            .with_prop("value", 3_i64)
            .to_value();
        assert_eq!(node.get("id").and_then(Value::as_str), Some("s"));
        assert_eq!(node.type_name(), "a2ui.StatCard");
        assert!(node.get("payload").and_then(Value::as_object).is_some());
        assert!(node.get("children").is_none());
    }

    #[test]
    fn deserializes_props_alias() {
        let descriptor: ComponentDescriptor = serde_json::from_value(json!({
            "id": "stat-1",
            "type": "a2ui.StatCard",
            "props": { "value": "100", "label": "Users" }
        }))
        .unwrap();
        assert_eq!(descriptor.payload.len(), 2);
        assert_eq!(descriptor.component_type, "a2ui.StatCard");
    }

    #[test]
    fn serializes_without_absent_fields() {
        let descriptor = ComponentDescriptor::new("t", "a2ui.TLDR");
        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json, json!({"id": "t", "type": "a2ui.TLDR", "payload": {}}));
    }

    #[test]
    fn typed_accessors() {
        let names = ["a2ui.TLDR".to_string()];
        assert_eq!(names[0].type_name(), "a2ui.TLDR");
        assert_eq!("x".type_name(), "x");
        assert_eq!(Value::Null.type_name(), "");
    }
}
