use a2ui_protocol::{ComponentDescriptor, Value};
use a2ui_test_utils::registry;
use a2ui_validation::{IssueKind, TreeValidator, ValidationOptions};
use proptest::prelude::*;

const TYPES: [&str; 5] = [
    "a2ui.Section",
    "a2ui.StatCard",
    "a2ui.TLDR",
    "a2ui.Mystery",
    "badname",
];

/// Tree shape with type choices; ids are assigned afterwards
#[derive(Debug, Clone)]
struct Shape {
    type_index: usize,
    poisoned: bool,
    children: Vec<Shape>,
}

fn shape() -> impl Strategy<Value = Shape> {
    let leaf = (0..TYPES.len(), any::<bool>()).prop_map(|(type_index, poisoned)| Shape {
        type_index,
        poisoned,
        children: Vec::new(),
    });
    leaf.prop_recursive(5, 40, 4, |inner| {
        (0..TYPES.len(), any::<bool>(), prop::collection::vec(inner, 0..4)).prop_map(
            |(type_index, poisoned, children)| Shape {
                type_index,
                poisoned,
                children,
            },
        )
    })
}

fn build(shape: &Shape, next_id: &mut usize, id_pool: Option<usize>) -> ComponentDescriptor {
    *next_id += 1;
    let id = match id_pool {
        Some(pool) => format!("n{}", *next_id % pool),
        None => format!("n{next_id}"),
    };
    let mut descriptor = ComponentDescriptor::new(id, TYPES[shape.type_index]);
    if shape.poisoned {
        descriptor = descriptor.with_prop("cb", Value::Function("cb".into()));
    }
    for child in &shape.children {
        descriptor = descriptor.with_child(build(child, next_id, id_pool));
    }
    descriptor
}

fn count(shape: &Shape) -> usize {
    1 + shape.children.iter().map(count).sum::<usize>()
}

fn depth(shape: &Shape) -> usize {
    shape.children.iter().map(|c| 1 + depth(c)).max().unwrap_or(0)
}

fn poisoned(shape: &Shape) -> usize {
    usize::from(shape.poisoned) + shape.children.iter().map(poisoned).sum::<usize>()
}

proptest! {
    #[test]
    fn prop_valid_iff_no_errors(shape in shape(), pool in prop::option::of(1..6usize)) {
        let registry = registry();
        let tree = build(&shape, &mut 0, pool);
        let result = TreeValidator::new(&registry).validate_descriptor(&tree);
        prop_assert_eq!(result.valid, result.errors.is_empty());
    }

    #[test]
    fn prop_validation_is_idempotent(shape in shape(), pool in prop::option::of(1..6usize)) {
        let registry = registry();
        let validator = TreeValidator::new(&registry);
        let tree = build(&shape, &mut 0, pool).to_value();
        prop_assert_eq!(validator.validate(&tree), validator.validate(&tree));
    }

    #[test]
    fn prop_unique_ids_never_collide(shape in shape()) {
        let registry = registry();
        let tree = build(&shape, &mut 0, None);
        let result = TreeValidator::new(&registry).validate_descriptor(&tree);

        prop_assert!(!result.has_error(IssueKind::DuplicateKey));
        prop_assert!(!result.has_error(IssueKind::CircularReference));
        prop_assert_eq!(result.stats.total_components, count(&shape));
        prop_assert_eq!(result.stats.max_depth_observed, depth(&shape));
        prop_assert_eq!(
            result.errors_of(IssueKind::NonSerializableProp).count(),
            poisoned(&shape)
        );
    }

    #[test]
    fn prop_depth_bound_respected(shape in shape(), max_depth in 0..4usize) {
        let registry = registry();
        let tree = build(&shape, &mut 0, None);
        let validator = TreeValidator::with_options(
            &registry,
            ValidationOptions::new().with_max_depth(max_depth),
        );
        let result = validator.validate_descriptor(&tree);

        prop_assert!(result.stats.max_depth_observed <= max_depth);
        prop_assert_eq!(
            result.has_error(IssueKind::InvalidChildren),
            depth(&shape) > max_depth
        );
    }
}
