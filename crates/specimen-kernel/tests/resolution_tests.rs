use pretty_assertions::assert_eq;
use specimen_kernel::{
    shared, BuilderNode, FilteringBuilder, FnBuilder, GraphConfig, GraphLayout, MarkerRole,
    Outcome, Request, ResolutionContext, SharedBuilder, SpecimenContext, SpecimenError,
    TypeSpecification,
};
use specimen_test_utils::{answering, declining, fixed, RecordingBuilder};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, PartialEq)]
struct Person {
    name: String,
    age: u32,
}

/// Builds a `Person` from nested `String` and `u32` requests
fn person_builder() -> SharedBuilder {
    BuilderNode::from(FilteringBuilder::new(
        Arc::new(TypeSpecification::of::<Person>()),
        shared(FnBuilder::new("person", |_: &Request, context: &dyn SpecimenContext| {
            let name = context.resolve(&Request::parameter::<String>("name"));
            let age = context.resolve(&Request::parameter::<u32>("age"));
            match (name.value::<String>(), age.value::<u32>()) {
                (Some(name), Some(age)) => Outcome::created(Person {
                    name: name.clone(),
                    age: *age,
                }),
                _ => Outcome::NoSpecimen,
            }
        })),
    ))
    .into_shared()
}

#[test]
fn layout_sections_resolve_in_order() {
    let root = GraphLayout::new()
        .with_customization(answering(Request::of::<u32>(), 1_u32))
        .with_predefined(fixed(2_u32))
        .with_engine(fixed(3_u32))
        .build();
    let context = ResolutionContext::new(root.into_shared());

    let value = context.resolve_required(&Request::of::<u32>()).unwrap();
    assert_eq!(value.downcast_ref::<u32>(), Some(&1));

    // Customizations decline non-u32 requests, predefined answers everything
    let other = context.resolve_required(&Request::named("other")).unwrap();
    assert_eq!(other.downcast_ref::<u32>(), Some(&2));
}

#[test]
fn nested_resolution_builds_composite_values() {
    let root = GraphLayout::new()
        .with_engine(person_builder())
        .with_engine(answering(Request::parameter::<String>("name"), "Ada".to_string()))
        .with_engine(answering(Request::parameter::<u32>("age"), 36_u32))
        .build();
    let context = ResolutionContext::new(root.into_shared());

    let person = context.resolve_required(&Request::of::<Person>()).unwrap();
    assert_eq!(
        person.downcast_ref::<Person>(),
        Some(&Person {
            name: "Ada".to_string(),
            age: 36
        })
    );
}

#[test]
fn swapping_predefined_builders_changes_resolution_only_there() {
    let engine = Arc::new(RecordingBuilder::new(fixed(100_u32)));
    let root = GraphLayout::new()
        .with_predefined(declining())
        .with_engine(engine.clone())
        .build();

    let before = ResolutionContext::new(root.clone().into_shared());
    assert_eq!(
        before.resolve(&Request::of::<u32>()).value::<u32>(),
        Some(&100)
    );
    assert_eq!(engine.call_count(), 1);

    let edited = root
        .replace_marker_contents(MarkerRole::PredefinedBuilders, vec![fixed(5_u32)])
        .unwrap();
    let after = ResolutionContext::new(edited.into_shared());
    assert_eq!(after.resolve(&Request::of::<u32>()).value::<u32>(), Some(&5));

    // Engine not consulted once predefined builders answer
    assert_eq!(engine.call_count(), 1);
}

#[test]
fn unresolved_request_surfaces_as_error() {
    let context = ResolutionContext::new(GraphLayout::new().build().into_shared());
    let err = context.resolve_required(&Request::of::<Person>()).unwrap_err();
    assert!(matches!(err, SpecimenError::NoSpecimen { .. }));
}

#[test]
fn configured_depth_limits_recursion() {
    let config = GraphConfig::from_toml_str("max_resolution_depth = 2").unwrap();
    let root = GraphLayout::new()
        .with_engine(person_builder())
        .with_engine(answering(Request::parameter::<String>("name"), "Ada".to_string()))
        .with_engine(answering(Request::parameter::<u32>("age"), 36_u32))
        .build();

    // Person needs depth 2, so a limit of 1 declines the nested requests
    let enough = ResolutionContext::with_config(root.clone().into_shared(), config);
    assert!(enough.resolve(&Request::of::<Person>()).is_created());

    let shallow =
        ResolutionContext::with_config(root.into_shared(), GraphConfig::new().with_max_depth(1));
    assert!(shallow.resolve(&Request::of::<Person>()).is_no_specimen());
}

#[test]
fn graph_is_shared_across_threads() {
    let root = GraphLayout::new()
        .with_predefined(fixed(42_u64))
        .build()
        .into_shared();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let root = Arc::clone(&root);
            thread::spawn(move || {
                let context = ResolutionContext::new(root);
                context
                    .resolve(&Request::of::<u64>())
                    .value::<u64>()
                    .copied()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some(42));
    }
}
