use pretty_assertions::assert_eq;
use proptest::prelude::*;
use specimen_kernel::{
    BuilderNode, MarkerNode, MarkerRole, NodeKind, Outcome, Request, SharedBuilder,
    SpecimenBuilder, SpecimenError,
};
use specimen_test_utils::{
    answering, composite, declining, fixed, predefined, same_builder, NullContext,
    RecordingBuilder,
};
use std::sync::Arc;

fn request_strategy() -> impl Strategy<Value = Request> {
    prop_oneof![
        Just(Request::of::<u32>()),
        Just(Request::of::<String>()),
        "[a-z]{1,8}".prop_map(|name| Request::named(name)),
        "[a-z]{1,8}".prop_map(|name| Request::parameter::<u64>(name)),
        "[a-z]{1,8}".prop_map(|seed| Request::seeded::<String>(seed)),
    ]
}

proptest! {
    #[test]
    fn prop_marker_create_is_transparent(request in request_strategy(), answer in any::<bool>()) {
        let child: SharedBuilder = if answer {
            answering(request.clone(), 99_u32)
        } else {
            declining()
        };
        let marker = predefined(Arc::clone(&child));

        let direct = child.create(&request, &NullContext);
        let through = marker.create(&request, &NullContext);

        prop_assert_eq!(direct.is_created(), through.is_created());
        prop_assert_eq!(direct.value::<u32>(), through.value::<u32>());
    }

    #[test]
    fn prop_compose_preserves_order(count in 2..8usize) {
        let builders: Vec<SharedBuilder> = (0..count).map(|i| fixed(i)).collect();
        let composed = predefined(declining()).compose(builders.clone());

        let inner = composed
            .builder()
            .as_node()
            .and_then(BuilderNode::as_composite)
            .expect("several builders are wrapped in a composite");

        prop_assert_eq!(inner.len(), count);
        for (installed, given) in inner.builders().iter().zip(&builders) {
            prop_assert!(same_builder(installed, given));
        }
    }
}

#[test]
fn children_yield_exactly_the_constructor_argument() {
    let b1 = fixed("b1");
    let marker = predefined(Arc::clone(&b1));

    let children: Vec<&SharedBuilder> = marker.children().collect();
    assert_eq!(children.len(), 1);
    assert!(same_builder(children[0], &b1));
}

#[test]
fn absent_builder_is_rejected_for_every_role() {
    for role in [
        MarkerRole::PredefinedBuilders,
        MarkerRole::Customizations,
        MarkerRole::Engine,
        MarkerRole::ResidueCollectors,
        MarkerRole::BehaviorRoot,
    ] {
        let err = MarkerNode::try_new(role, None).unwrap_err();
        assert!(
            matches!(err, SpecimenError::InvalidArgument { parameter: "builder", .. }),
            "role {role} accepted an absent builder"
        );
    }
}

#[test]
fn compose_empty_installs_the_empty_composite() {
    let composed = predefined(fixed(1_u8)).compose(Vec::new());

    assert_eq!(composed.children().count(), 1);
    let inner = composed
        .builder()
        .as_node()
        .and_then(BuilderNode::as_composite)
        .expect("empty composite");
    assert!(inner.is_empty());
    assert!(composed
        .create(&Request::of::<u8>(), &NullContext)
        .is_no_specimen());
}

#[test]
fn compose_single_installs_it_unwrapped() {
    let b2 = fixed(2_u8);
    let composed = predefined(fixed(1_u8)).compose(vec![Arc::clone(&b2)]);
    assert!(same_builder(composed.builder(), &b2));
}

#[test]
fn enumeration_does_not_recurse_into_grandchildren() {
    let inner = composite(vec![fixed(1_u8), fixed(2_u8), fixed(3_u8)]);
    let marker = predefined(Arc::clone(&inner));

    let children: Vec<&SharedBuilder> = marker.children().collect();
    assert_eq!(children.len(), 1);
    assert!(same_builder(children[0], &inner));
}

#[test]
fn compose_returns_new_node_and_leaves_original() {
    let b1 = fixed("b1");
    let b2 = fixed("b2");
    let b3 = fixed("b3");

    let n1 = predefined(Arc::clone(&b1));
    let n2 = n1.compose(vec![Arc::clone(&b2), Arc::clone(&b3)]);

    assert!(same_builder(n1.builder(), &b1));
    assert_eq!(n2.role(), MarkerRole::PredefinedBuilders);

    let wrapped = n2
        .builder()
        .as_node()
        .and_then(BuilderNode::as_composite)
        .expect("composite of b2, b3");
    assert_eq!(wrapped.len(), 2);
    assert!(same_builder(&wrapped.builders()[0], &b2));
    assert!(same_builder(&wrapped.builders()[1], &b3));
}

#[test]
fn compose_through_node_enum_keeps_role() {
    let node = BuilderNode::from(MarkerNode::new(MarkerRole::ResidueCollectors, fixed(0_i8)));
    let composed = node.compose(vec![fixed(1_i8), fixed(2_i8)]);
    assert_eq!(composed.kind(), NodeKind::Marker(MarkerRole::ResidueCollectors));
}

#[test]
fn marker_forwards_requests_verbatim() {
    let recorder = Arc::new(RecordingBuilder::declining());
    let as_builder: SharedBuilder = recorder.clone();
    let marker = predefined(as_builder);

    let request = Request::parameter::<String>("name");
    assert!(matches!(
        marker.create(&request, &NullContext),
        Outcome::NoSpecimen
    ));
    assert_eq!(recorder.requests(), vec![request]);
}
