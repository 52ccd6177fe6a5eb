//! Recursive tree validation
//!
//! [`TreeValidator`] walks a component tree depth first and files every
//! protocol violation it meets into a [`ValidationResult`]. Two separate
//! tracking structures run alongside the walk:
//!
//! - the ancestor stack (pushed on descent, popped on return) catches a
//!   descriptor nested inside itself and stops that branch;
//! - the identity set (never reset during a pass) catches the same `id`
//!   used twice anywhere in the tree or batch.

use crate::error::{ContractError, ContractResult};
use crate::issue::{Issue, IssueKind};
use crate::options::ValidationOptions;
use crate::result::{ValidationResult, ValidationStats};
use a2ui_protocol::descriptor::{
    FIELD_CHILDREN, FIELD_ID, FIELD_LAYOUT, FIELD_PAYLOAD, FIELD_PROPS, FIELD_STYLING, FIELD_TYPE,
};
use a2ui_protocol::{ComponentDescriptor, Map, NodePath, TypeRegistry, Value};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, HashSet};

/// Name of the root segment in reported paths
pub const ROOT_NAME: &str = "root";

/// Accepted values of `layout.position`
pub const LAYOUT_POSITIONS: [&str; 4] = ["relative", "absolute", "fixed", "sticky"];

/// `<lowercase-namespace>.<PascalName>`
static TYPE_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z][a-z0-9_-]*\.[A-Z][A-Za-z0-9]*$").expect("type name pattern compiles")
});

/// Validator for component trees against the protocol contract
///
/// Stateless between calls; one instance can validate any number of trees,
/// from any number of threads when `R: Sync`.
///
/// # Example
///
/// ```rust
/// use a2ui_protocol::{ComponentDescriptor, ComponentRegistry};
/// use a2ui_validation::TreeValidator;
///
/// let registry = ComponentRegistry::with_defaults();
/// let validator = TreeValidator::new(&registry);
///
/// let tree = ComponentDescriptor::new("intro", "a2ui.Section")
///     .with_prop("title", "Intro")
///     .with_child(ComponentDescriptor::new("tldr-1", "a2ui.TLDR"));
///
/// let result = validator.validate_descriptor(&tree);
/// assert!(result.valid);
/// assert_eq!(result.stats.total_components, 2);
/// ```
#[derive(Debug, Clone)]
pub struct TreeValidator<'r, R: TypeRegistry + ?Sized> {
    registry: &'r R,
    options: ValidationOptions,
}

impl<'r, R: TypeRegistry + ?Sized> TreeValidator<'r, R> {
    /// Create validator with default options
    #[inline]
    #[must_use]
    pub fn new(registry: &'r R) -> Self {
        Self::with_options(registry, ValidationOptions::default())
    }

    /// Create validator with custom options
    #[inline]
    #[must_use]
    pub fn with_options(registry: &'r R, options: ValidationOptions) -> Self {
        Self { registry, options }
    }

    /// Active options
    #[inline]
    #[must_use]
    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Validate one tree
    ///
    /// Total over any input: a `null` or non-mapping root yields
    /// missing-required-field errors rather than a failure.
    #[must_use]
    pub fn validate(&self, root: &Value) -> ValidationResult {
        let mut pass = Pass::new(self.registry, &self.options);
        pass.visit(root, &NodePath::root(ROOT_NAME), 0, &mut Vec::new());
        pass.finish()
    }

    /// Validate sibling trees sharing one identity namespace
    ///
    /// Each root is reported as `root[i]`.
    #[must_use]
    pub fn validate_all(&self, roots: &[Value]) -> ValidationResult {
        let mut pass = Pass::new(self.registry, &self.options);
        let base = NodePath::root(ROOT_NAME);
        for (i, root) in roots.iter().enumerate() {
            pass.visit(root, &base.index(i), 0, &mut Vec::new());
        }
        pass.finish()
    }

    /// Validate one more sibling tree against identities already claimed
    ///
    /// `known_ids` seeds the identity set, so reusing any of them raises a
    /// duplicate-key error. The root is reported at `path`.
    #[must_use]
    pub fn validate_next(
        &self,
        root: &Value,
        path: &NodePath,
        known_ids: &HashSet<String>,
    ) -> ValidationResult {
        let mut pass = Pass::new(self.registry, &self.options);
        pass.seen_ids.extend(known_ids.iter().map(String::as_str));
        pass.visit(root, path, 0, &mut Vec::new());
        pass.finish()
    }

    /// Identities a validation pass over `root` would claim, depth first
    ///
    /// Nodes past the depth bound and nodes closing a cycle are never
    /// inspected by a pass, so their subtrees contribute nothing.
    #[must_use]
    pub fn component_ids<'v>(&self, root: &'v Value) -> Vec<&'v str> {
        let mut ids = Vec::new();
        self.collect_ids(root, 0, &mut Vec::new(), &mut ids);
        ids
    }

    fn collect_ids<'v>(
        &self,
        node: &'v Value,
        depth: usize,
        ancestors: &mut Vec<&'v str>,
        ids: &mut Vec<&'v str>,
    ) {
        let fields = node.as_object();
        let identity = field(fields, FIELD_ID)
            .and_then(Value::as_str)
            .filter(|id| !id.trim().is_empty());

        if self.options.check_circular && identity.is_some_and(|id| ancestors.contains(&id)) {
            return;
        }
        if depth > self.options.max_depth {
            return;
        }
        if let Some(id) = identity {
            ids.push(id);
        }
        if let Some(Value::Array(children)) = field(fields, FIELD_CHILDREN) {
            if let Some(id) = identity {
                ancestors.push(id);
            }
            for child in children {
                self.collect_ids(child, depth + 1, ancestors, ids);
            }
            if identity.is_some() {
                ancestors.pop();
            }
        }
    }

    /// Validate an untyped list of sibling trees
    ///
    /// # Errors
    /// Returns [`ContractError::ExpectedArray`] when `list` is not an array.
    pub fn validate_list(&self, list: &Value) -> ContractResult<ValidationResult> {
        match list {
            Value::Array(roots) => Ok(self.validate_all(roots)),
            other => Err(ContractError::ExpectedArray {
                found: other.kind_name(),
            }),
        }
    }

    /// Validate a typed descriptor tree
    #[must_use]
    pub fn validate_descriptor(&self, root: &ComponentDescriptor) -> ValidationResult {
        self.validate(&root.to_value())
    }

    /// Validate typed sibling descriptors sharing one identity namespace
    #[must_use]
    pub fn validate_descriptors(&self, roots: &[ComponentDescriptor]) -> ValidationResult {
        let nodes: Vec<Value> = roots.iter().map(ComponentDescriptor::to_value).collect();
        self.validate_all(&nodes)
    }

    /// Validate a tree decoded from JSON
    #[must_use]
    pub fn validate_json(&self, root: &serde_json::Value) -> ValidationResult {
        self.validate(&Value::from(root.clone()))
    }

    /// Validate a JSON array of sibling trees
    ///
    /// # Errors
    /// Returns [`ContractError::ExpectedArray`] when `list` is not an array.
    pub fn validate_all_json(&self, list: &serde_json::Value) -> ContractResult<ValidationResult> {
        self.validate_list(&Value::from(list.clone()))
    }
}

/// State of one validation call
struct Pass<'a, R: TypeRegistry + ?Sized> {
    registry: &'a R,
    options: &'a ValidationOptions,
    errors: Vec<Issue>,
    warnings: Vec<Issue>,
    seen_ids: HashSet<&'a str>,
    type_counts: BTreeMap<String, usize>,
    total_components: usize,
    max_depth_observed: usize,
    total_payload_keys: usize,
}

impl<'a, R: TypeRegistry + ?Sized> Pass<'a, R> {
    fn new(registry: &'a R, options: &'a ValidationOptions) -> Self {
        Self {
            registry,
            options,
            errors: Vec::new(),
            warnings: Vec::new(),
            seen_ids: HashSet::new(),
            type_counts: BTreeMap::new(),
            total_components: 0,
            max_depth_observed: 0,
            total_payload_keys: 0,
        }
    }

    fn error(&mut self, kind: IssueKind, message: impl Into<String>, path: NodePath) {
        self.errors.push(Issue::new(kind, message, path));
    }

    fn warning(&mut self, kind: IssueKind, message: impl Into<String>, path: NodePath) {
        self.warnings.push(Issue::new(kind, message, path));
    }

    fn visit(
        &mut self,
        node: &'a Value,
        path: &NodePath,
        depth: usize,
        ancestors: &mut Vec<&'a str>,
    ) {
        let fields = node.as_object();
        let identity = field(fields, FIELD_ID)
            .and_then(Value::as_str)
            .filter(|id| !id.trim().is_empty());

        if self.options.check_circular {
            if let Some(id) = identity {
                if ancestors.contains(&id) {
                    self.error(
                        IssueKind::CircularReference,
                        format!("component '{id}' appears among its own ancestors"),
                        path.clone(),
                    );
                    return;
                }
            }
        }

        if depth > self.options.max_depth {
            self.error(
                IssueKind::InvalidChildren,
                format!(
                    "component exceeds maximum depth of {} (depth {depth})",
                    self.options.max_depth
                ),
                path.clone(),
            );
            return;
        }

        tracing::trace!(path = %path, depth, "validating component");
        self.total_components += 1;
        self.max_depth_observed = self.max_depth_observed.max(depth);

        let shape = if fields.is_some() {
            String::new()
        } else {
            format!(" (component is {})", node.kind_name())
        };

        self.check_id(fields, path, &shape);
        let component_type = self.check_type(fields, path, &shape);
        self.check_payload(fields, path, &shape, component_type);

        match field(fields, FIELD_CHILDREN) {
            None => {}
            Some(Value::Array(children)) => {
                if let Some(id) = identity {
                    ancestors.push(id);
                }
                let children_path = path.key(FIELD_CHILDREN);
                for (i, child) in children.iter().enumerate() {
                    self.visit(child, &children_path.index(i), depth + 1, ancestors);
                }
                if identity.is_some() {
                    ancestors.pop();
                }
            }
            Some(other) => self.error(
                IssueKind::InvalidChildren,
                format!("children must be an array, got {}", other.kind_name()),
                path.key(FIELD_CHILDREN),
            ),
        }

        self.check_layout(fields, path);

        if let Some(styling) = field(fields, FIELD_STYLING) {
            if styling.as_object().is_none() {
                self.error(
                    IssueKind::InvalidStyling,
                    format!("styling must be a mapping, got {}", styling.kind_name()),
                    path.key(FIELD_STYLING),
                );
            }
        }
    }

    fn check_id(&mut self, fields: Option<&'a Map>, path: &NodePath, shape: &str) {
        let at = path.key(FIELD_ID);
        match field(fields, FIELD_ID) {
            Some(Value::String(id)) if !id.trim().is_empty() => {
                // Inserted even when already present so each repeat is reported.
                if !self.seen_ids.insert(id.as_str()) {
                    self.error(
                        IssueKind::DuplicateKey,
                        format!("duplicate component id '{id}'"),
                        at,
                    );
                }
            }
            Some(Value::String(_)) => self.error(
                IssueKind::MissingRequiredField,
                "component id must not be empty",
                at,
            ),
            Some(other) => self.error(
                IssueKind::MissingRequiredField,
                format!("component id must be a string, got {}", other.kind_name()),
                at,
            ),
            None => self.error(
                IssueKind::MissingRequiredField,
                format!("missing required field 'id'{shape}"),
                at,
            ),
        }
    }

    fn check_type(
        &mut self,
        fields: Option<&'a Map>,
        path: &NodePath,
        shape: &str,
    ) -> Option<&'a str> {
        let at = path.key(FIELD_TYPE);
        match field(fields, FIELD_TYPE) {
            Some(Value::String(name)) if !name.trim().is_empty() => {
                *self.type_counts.entry(name.clone()).or_insert(0) += 1;

                if !self.follows_naming_convention(name) {
                    self.warning(
                        IssueKind::InvalidType,
                        format!("type '{name}' does not follow the <namespace>.<Name> convention"),
                        at.clone(),
                    );
                }

                if self.options.check_registration && !self.registry.is_registered(name) {
                    let issue = Issue::new(
                        IssueKind::UnregisteredType,
                        format!("type '{name}' is not registered"),
                        at,
                    );
                    if self.options.allow_unregistered {
                        self.warnings.push(issue);
                    } else {
                        self.errors.push(issue);
                    }
                }
                Some(name.as_str())
            }
            Some(Value::String(_)) => {
                self.error(
                    IssueKind::MissingRequiredField,
                    "component type must not be empty",
                    at,
                );
                None
            }
            Some(other) => {
                self.error(
                    IssueKind::MissingRequiredField,
                    format!("component type must be a string, got {}", other.kind_name()),
                    at,
                );
                None
            }
            None => {
                self.error(
                    IssueKind::MissingRequiredField,
                    format!("missing required field 'type'{shape}"),
                    at,
                );
                None
            }
        }
    }

    fn follows_naming_convention(&self, name: &str) -> bool {
        if !TYPE_NAME_PATTERN.is_match(name) {
            return false;
        }
        match &self.options.type_namespace {
            Some(namespace) => name
                .strip_prefix(namespace.as_str())
                .is_some_and(|rest| rest.starts_with('.')),
            None => true,
        }
    }

    fn check_payload(
        &mut self,
        fields: Option<&'a Map>,
        path: &NodePath,
        shape: &str,
        component_type: Option<&str>,
    ) {
        let (key, payload) = match field(fields, FIELD_PAYLOAD) {
            Some(payload) => (FIELD_PAYLOAD, Some(payload)),
            None => match field(fields, FIELD_PROPS) {
                Some(props) => (FIELD_PROPS, Some(props)),
                None => (FIELD_PAYLOAD, None),
            },
        };
        let at = path.key(key);

        let map = match payload {
            Some(Value::Object(map)) => map,
            Some(other) => {
                self.error(
                    IssueKind::InvalidProps,
                    format!("payload must be a mapping, got {}", other.kind_name()),
                    at,
                );
                return;
            }
            None => {
                self.error(
                    IssueKind::MissingRequiredField,
                    format!("missing required field 'payload'{shape}"),
                    at,
                );
                return;
            }
        };

        self.total_payload_keys += map.len();
        for (prop, value) in map {
            if let Some(bad) = value.find_non_serializable() {
                let prop_path = at.key(prop.as_str());
                let location = prop_path.join(&bad.path);
                self.error(
                    IssueKind::NonSerializableProp,
                    format!("prop '{prop}' is not serializable: {} at {location}", bad.reason),
                    prop_path,
                );
            }
        }

        if !self.options.check_required_props {
            return;
        }
        let Some(name) = component_type else {
            return;
        };
        let registry = self.registry;
        if !registry.is_registered(name) {
            return;
        }
        let missing = registry
            .required_props(name)
            .iter()
            .filter(|prop| !map.contains_key(prop.as_str()));
        for prop in missing {
            self.error(
                IssueKind::InvalidProps,
                format!("{name} missing required prop '{prop}'"),
                at.key(prop.as_str()),
            );
        }
    }

    fn check_layout(&mut self, fields: Option<&'a Map>, path: &NodePath) {
        let Some(layout) = field(fields, FIELD_LAYOUT) else {
            return;
        };
        let at = path.key(FIELD_LAYOUT);
        let Some(map) = layout.as_object() else {
            self.error(
                IssueKind::InvalidLayout,
                format!("layout must be a mapping, got {}", layout.kind_name()),
                at,
            );
            return;
        };
        if let Some(position) = map.get("position") {
            let accepted = position
                .as_str()
                .is_some_and(|p| LAYOUT_POSITIONS.contains(&p));
            if !accepted {
                let found = match position.as_str() {
                    Some(p) => format!("'{p}'"),
                    None => position.kind_name().to_string(),
                };
                self.error(
                    IssueKind::InvalidLayout,
                    format!(
                        "layout position must be one of {}, got {found}",
                        LAYOUT_POSITIONS.join(", ")
                    ),
                    at.key("position"),
                );
            }
        }
    }

    fn finish(self) -> ValidationResult {
        let stats = ValidationStats {
            total_components: self.total_components,
            unique_type_count: self.type_counts.len(),
            max_depth_observed: self.max_depth_observed,
            total_payload_keys: self.total_payload_keys,
            type_counts: self.type_counts,
        };
        tracing::debug!(
            components = stats.total_components,
            errors = self.errors.len(),
            warnings = self.warnings.len(),
            "tree validation finished"
        );
        ValidationResult {
            valid: self.errors.is_empty(),
            errors: self.errors,
            warnings: self.warnings,
            stats,
        }
    }
}

/// Field lookup treating `null` as absent
fn field<'a>(fields: Option<&'a Map>, name: &str) -> Option<&'a Value> {
    fields
        .and_then(|map| map.get(name))
        .filter(|value| !value.is_null())
}

#[cfg(test)]
mod tests {
    use super::*;
    use a2ui_protocol::ComponentRegistry;
    use a2ui_test_utils::{leaf, node, registry};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn kinds(issues: &[Issue]) -> Vec<IssueKind> {
        issues.iter().map(|issue| issue.kind).collect()
    }

    #[test]
    fn accepts_minimal_leaf() {
        let registry = registry();
        let result = TreeValidator::new(&registry).validate_descriptor(&leaf("a", "a2ui.TLDR"));
        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
        assert_eq!(result.stats.total_components, 1);
        assert_eq!(result.stats.unique_type_count, 1);
    }

    #[test]
    fn null_root_reports_every_required_field() {
        let registry = registry();
        let result = TreeValidator::new(&registry).validate(&Value::Null);
        assert!(!result.valid);
        assert_eq!(
            kinds(&result.errors),
            vec![IssueKind::MissingRequiredField; 3]
        );
        let paths: Vec<String> = result.errors.iter().map(|e| e.path.to_string()).collect();
        assert_eq!(paths, vec!["root.id", "root.type", "root.payload"]);
        assert!(result.errors[0].message.contains("component is null"));
    }

    #[test]
    fn non_mapping_root_is_total() {
        let registry = registry();
        let validator = TreeValidator::new(&registry);
        for root in [Value::from(3_i64), Value::from("x"), Value::Array(vec![])] {
            let result = validator.validate(&root);
            assert_eq!(result.errors.len(), 3);
        }
    }

    #[test]
    fn wrong_field_types() {
        let registry = registry();
        let result = TreeValidator::new(&registry).validate(&node(json!({
            "id": 7,
            "type": "",
            "payload": [1, 2]
        })));
        assert_eq!(
            kinds(&result.errors),
            vec![
                IssueKind::MissingRequiredField,
                IssueKind::MissingRequiredField,
                IssueKind::InvalidProps,
            ]
        );
        assert_eq!(result.errors[2].path.to_string(), "root.payload");
    }

    #[test]
    fn props_alias_is_accepted() {
        let registry = registry();
        let result = TreeValidator::new(&registry).validate(&node(json!({
            "id": "a", "type": "a2ui.TLDR", "props": {"summary": "s"}
        })));
        assert!(result.valid);
        assert_eq!(result.stats.total_payload_keys, 1);
    }

    #[test]
    fn unregistered_type_is_error_or_warning() {
        let registry = registry();
        let tree = leaf("a", "a2ui.Hologram");

        let strict = TreeValidator::new(&registry).validate_descriptor(&tree);
        assert!(strict.has_error(IssueKind::UnregisteredType));

        let lenient = TreeValidator::with_options(
            &registry,
            ValidationOptions::new().allowing_unregistered(),
        )
        .validate_descriptor(&tree);
        assert!(lenient.valid);
        assert!(lenient.has_warning(IssueKind::UnregisteredType));

        let unchecked = TreeValidator::with_options(
            &registry,
            ValidationOptions::new().with_registration_check(false),
        )
        .validate_descriptor(&tree);
        assert!(unchecked.valid);
        assert!(unchecked.warnings.is_empty());
    }

    #[test]
    fn naming_convention_is_a_warning() {
        let registry: ComponentRegistry = ["StatCard", "custom.widget"].into_iter().collect();
        let validator = TreeValidator::new(&registry);

        for bad in ["StatCard", "custom.widget"] {
            let result = validator.validate_descriptor(&leaf("a", bad));
            assert!(result.valid, "{bad} should only warn");
            assert_eq!(kinds(&result.warnings), vec![IssueKind::InvalidType]);
        }
    }

    #[test]
    fn namespace_option_narrows_convention() {
        let registry: ComponentRegistry = ["a2ui.Card", "acme.Card"].into_iter().collect();
        let validator = TreeValidator::with_options(
            &registry,
            ValidationOptions::new().with_type_namespace("a2ui"),
        );
        assert!(validator
            .validate_descriptor(&leaf("a", "a2ui.Card"))
            .warnings
            .is_empty());
        assert!(validator
            .validate_descriptor(&leaf("a", "acme.Card"))
            .has_warning(IssueKind::InvalidType));
    }

    #[test]
    fn non_serializable_prop_is_scoped_to_key() {
        let registry = registry();
        let tree = leaf("a", "a2ui.LinkCard")
            .with_prop("url", "https://example.com")
            .with_prop("k", Value::Function("onClick".into()));

        let result = TreeValidator::new(&registry).validate_descriptor(&tree);
        let hits: Vec<&Issue> = result.errors_of(IssueKind::NonSerializableProp).collect();
        assert_eq!(hits.len(), 1);
        assert!(hits[0].path.to_string().ends_with(".payload.k"));
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn nested_non_serializable_reports_inner_location() {
        let registry = registry();
        let mut inner = Map::new();
        inner.insert("handler".into(), Value::Undefined);
        let tree = leaf("a", "a2ui.LinkCard")
            .with_prop("data", Value::Array(vec![Value::Null, Value::Object(inner)]));

        let result = TreeValidator::new(&registry).validate_descriptor(&tree);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].path.to_string(), "root.payload.data");
        assert!(result.errors[0]
            .message
            .contains("root.payload.data[1].handler"));
    }

    #[test]
    fn required_props_when_enabled() {
        let registry = registry();
        let card = leaf("s", "a2ui.StatCard").with_prop("value", "100");

        let relaxed = TreeValidator::new(&registry).validate_descriptor(&card);
        assert!(relaxed.valid);

        let strict = TreeValidator::with_options(
            &registry,
            ValidationOptions::new().with_required_props(true),
        )
        .validate_descriptor(&card);
        assert_eq!(kinds(&strict.errors), vec![IssueKind::InvalidProps]);
        assert_eq!(strict.errors[0].path.to_string(), "root.payload.label");
    }

    #[test]
    fn duplicate_ids_across_branches() {
        let registry = registry();
        let tree = leaf("grid", "a2ui.Grid")
            .with_child(leaf("left", "a2ui.Section").with_child(leaf("same", "a2ui.TLDR")))
            .with_child(leaf("right", "a2ui.Section").with_child(leaf("same", "a2ui.TLDR")));

        let result = TreeValidator::new(&registry).validate_descriptor(&tree);
        assert_eq!(kinds(&result.errors), vec![IssueKind::DuplicateKey]);
        assert_eq!(
            result.errors[0].path.to_string(),
            "root.children[1].children[0].id"
        );
    }

    #[test]
    fn every_repeat_is_reported() {
        let registry = registry();
        let roots = vec![leaf("x", "a2ui.TLDR"), leaf("x", "a2ui.TLDR"), leaf("x", "a2ui.TLDR")];
        let result = TreeValidator::new(&registry).validate_descriptors(&roots);
        assert_eq!(result.errors_of(IssueKind::DuplicateKey).count(), 2);
        assert_eq!(result.errors[0].path.to_string(), "root[1].id");
    }

    #[test]
    fn distinct_ids_with_identical_content_are_fine() {
        let registry = registry();
        let roots = vec![
            leaf("a", "a2ui.TLDR").with_prop("summary", "same"),
            leaf("b", "a2ui.TLDR").with_prop("summary", "same"),
        ];
        let result = TreeValidator::new(&registry).validate_descriptors(&roots);
        assert!(result.valid);
        assert_eq!(result.stats.type_counts.get("a2ui.TLDR"), Some(&2));
    }

    #[test]
    fn circular_reference_stops_branch() {
        let registry = registry();
        let tree = leaf("loop", "a2ui.Section").with_child(
            leaf("mid", "a2ui.Section")
                .with_child(leaf("loop", "a2ui.Section").with_child(leaf("deep", "a2ui.TLDR"))),
        );

        let result = TreeValidator::new(&registry).validate_descriptor(&tree);
        assert_eq!(kinds(&result.errors), vec![IssueKind::CircularReference]);
        assert_eq!(
            result.errors[0].path.to_string(),
            "root.children[0].children[0]"
        );
        // The repeated node and its subtree are not inspected.
        assert_eq!(result.stats.total_components, 2);
    }

    #[test]
    fn without_cycle_check_repeat_is_duplicate() {
        let registry = registry();
        let tree = leaf("loop", "a2ui.Section").with_child(leaf("loop", "a2ui.Section"));
        let result = TreeValidator::with_options(
            &registry,
            ValidationOptions::new().with_circular_check(false),
        )
        .validate_descriptor(&tree);
        assert_eq!(kinds(&result.errors), vec![IssueKind::DuplicateKey]);
    }

    #[test]
    fn depth_bound() {
        let registry = registry();
        let tree = a2ui_test_utils::nested_chain(4);
        let validator =
            TreeValidator::with_options(&registry, ValidationOptions::new().with_max_depth(2));

        let result = validator.validate_descriptor(&tree);
        assert_eq!(kinds(&result.errors), vec![IssueKind::InvalidChildren]);
        assert!(result.errors[0].message.contains("maximum depth of 2"));
        assert_eq!(result.stats.max_depth_observed, 2);
        assert_eq!(result.stats.total_components, 3);
    }

    #[test]
    fn children_must_be_array() {
        let registry = registry();
        let result = TreeValidator::new(&registry).validate(&node(json!({
            "id": "a", "type": "a2ui.Grid", "payload": {}, "children": {"0": {}}
        })));
        assert_eq!(kinds(&result.errors), vec![IssueKind::InvalidChildren]);
        assert_eq!(result.errors[0].path.to_string(), "root.children");
    }

    #[test]
    fn layout_and_styling_shapes() {
        let registry = registry();
        let validator = TreeValidator::new(&registry);

        let ok = validator.validate(&node(json!({
            "id": "a", "type": "a2ui.TLDR", "payload": {},
            "layout": {"position": "sticky", "span": 2},
            "styling": {"color": "red"}
        })));
        assert!(ok.valid);

        let bad = validator.validate(&node(json!({
            "id": "a", "type": "a2ui.TLDR", "payload": {},
            "layout": {"position": "floating"},
            "styling": "red"
        })));
        assert_eq!(
            kinds(&bad.errors),
            vec![IssueKind::InvalidLayout, IssueKind::InvalidStyling]
        );
        assert_eq!(bad.errors[0].path.to_string(), "root.layout.position");
        assert!(bad.errors[0].message.contains("'floating'"));

        let not_map = validator.validate(&node(json!({
            "id": "a", "type": "a2ui.TLDR", "payload": {}, "layout": [1]
        })));
        assert_eq!(kinds(&not_map.errors), vec![IssueKind::InvalidLayout]);
        assert_eq!(not_map.errors[0].path.to_string(), "root.layout");
    }

    #[test]
    fn validate_list_requires_array() {
        let registry = registry();
        let validator = TreeValidator::new(&registry);
        assert_eq!(
            validator.validate_list(&Value::Null),
            Err(ContractError::ExpectedArray { found: "null" })
        );
        assert!(validator.validate_all_json(&json!({"id": "a"})).is_err());
        assert!(validator.validate_all_json(&json!([])).unwrap().valid);
    }

    #[test]
    fn stats_cover_whole_tree() {
        let registry = registry();
        let tree = leaf("grid", "a2ui.Grid")
            .with_prop("columns", 2_i64)
            .with_child(leaf("s1", "a2ui.StatCard").with_prop("value", "1").with_prop("label", "a"))
            .with_child(leaf("s2", "a2ui.StatCard"));

        let stats = TreeValidator::new(&registry).validate_descriptor(&tree).stats;
        assert_eq!(stats.total_components, 3);
        assert_eq!(stats.unique_type_count, 2);
        assert_eq!(stats.max_depth_observed, 1);
        assert_eq!(stats.total_payload_keys, 3);
    }

    #[test]
    fn validate_next_respects_known_ids() {
        let registry = registry();
        let validator = TreeValidator::new(&registry);
        let known: HashSet<String> = ["intro".to_string()].into_iter().collect();
        let path = NodePath::root(ROOT_NAME).index(3);

        let fresh = leaf("stats", "a2ui.StatCard").to_value();
        assert!(validator.validate_next(&fresh, &path, &known).valid);

        let reused = leaf("intro", "a2ui.TLDR").to_value();
        let result = validator.validate_next(&reused, &path, &known);
        assert_eq!(kinds(&result.errors), vec![IssueKind::DuplicateKey]);
        assert_eq!(result.errors[0].path.to_string(), "root[3].id");
    }

    #[test]
    fn collects_ids_depth_first() {
        let registry = registry();
        let validator = TreeValidator::new(&registry);
        let tree = node(json!({
            "id": "a",
            "type": "a2ui.Section",
            "payload": {},
            "children": [
                { "id": "b", "type": "a2ui.TLDR", "payload": {},
                  "children": [{ "id": "c", "type": "a2ui.TLDR", "payload": {} }] },
                { "id": "  ", "type": "a2ui.TLDR", "payload": {} },
                { "id": "d", "type": "a2ui.TLDR", "payload": {} }
            ]
        }));
        assert_eq!(validator.component_ids(&tree), vec!["a", "b", "c", "d"]);
        assert!(validator.component_ids(&Value::Null).is_empty());
    }

    #[test]
    fn collected_ids_stop_where_the_pass_stops() {
        let registry = registry();
        let shallow =
            TreeValidator::with_options(&registry, ValidationOptions::new().with_max_depth(1));
        let deep = node(json!({
            "id": "a", "type": "a2ui.Section", "payload": {},
            "children": [{ "id": "b", "type": "a2ui.Section", "payload": {},
                "children": [{ "id": "c", "type": "a2ui.TLDR", "payload": {} }] }]
        }));
        assert_eq!(shallow.component_ids(&deep), vec!["a", "b"]);

        let validator = TreeValidator::new(&registry);
        let looped = node(json!({
            "id": "a", "type": "a2ui.Section", "payload": {},
            "children": [{ "id": "a", "type": "a2ui.Section", "payload": {},
                "children": [{ "id": "hidden", "type": "a2ui.TLDR", "payload": {} }] }]
        }));
        assert_eq!(validator.component_ids(&looped), vec!["a"]);
    }
}
