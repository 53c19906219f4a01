//! Filtering node: a single child guarded by a request specification

use super::{Children, CompositeBuilder};
use crate::builder::{SharedBuilder, SpecimenContext};
use crate::request::Request;
use crate::specification::SharedSpecification;
use crate::specimen::Outcome;

/// Forwards only requests that satisfy its specification
#[derive(Debug, Clone)]
pub struct FilteringBuilder {
    specification: SharedSpecification,
    builder: [SharedBuilder; 1],
}

impl FilteringBuilder {
    /// Guard `builder` with `specification`
    #[inline]
    #[must_use]
    pub fn new(specification: SharedSpecification, builder: SharedBuilder) -> Self {
        Self {
            specification,
            builder: [builder],
        }
    }

    /// The guarding specification
    #[inline]
    #[must_use]
    pub fn specification(&self) -> &SharedSpecification {
        &self.specification
    }

    /// The guarded builder
    #[inline]
    #[must_use]
    pub fn builder(&self) -> &SharedBuilder {
        &self.builder[0]
    }

    /// Single-element sequence holding the guarded builder
    #[inline]
    #[must_use]
    pub fn children(&self) -> Children<'_> {
        Children::new(&self.builder)
    }

    /// Same specification around `builders`, collapsed to one
    #[must_use]
    pub fn compose<I>(&self, builders: I) -> Self
    where
        I: IntoIterator<Item = SharedBuilder>,
    {
        Self::new(
            self.specification.clone(),
            CompositeBuilder::compose_if_multiple(builders),
        )
    }

    /// Decline unless the specification is satisfied
    pub fn create(&self, request: &Request, context: &dyn SpecimenContext) -> Outcome {
        if !self.specification.is_satisfied_by(request) {
            return Outcome::NoSpecimen;
        }
        self.builder().create(request, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{shared, FixedBuilder};
    use crate::specification::TypeSpecification;
    use std::sync::Arc;

    struct NullContext;

    impl SpecimenContext for NullContext {
        fn resolve(&self, _request: &Request) -> Outcome {
            Outcome::NoSpecimen
        }
    }

    #[test]
    fn forwards_satisfying_requests_only() {
        let node = FilteringBuilder::new(
            Arc::new(TypeSpecification::of::<u32>()),
            shared(FixedBuilder::new(3_u32)),
        );

        assert_eq!(
            node.create(&Request::of::<u32>(), &NullContext).value::<u32>(),
            Some(&3)
        );
        assert!(node.create(&Request::of::<i32>(), &NullContext).is_no_specimen());
    }

    #[test]
    fn compose_keeps_specification_handle() {
        let node = FilteringBuilder::new(
            Arc::new(TypeSpecification::of::<u32>()),
            shared(FixedBuilder::new(3_u32)),
        );
        let composed = node.compose(vec![
            shared(FixedBuilder::new(4_u32)),
            shared(FixedBuilder::new(5_u32)),
        ]);

        assert!(Arc::ptr_eq(node.specification(), composed.specification()));
        assert_eq!(composed.children().count(), 1);
        assert_eq!(
            composed.create(&Request::of::<u32>(), &NullContext).value::<u32>(),
            Some(&4)
        );
    }
}
