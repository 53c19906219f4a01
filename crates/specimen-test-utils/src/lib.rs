//! Testing utilities for specimen workspace
//!
//! Shared test builders, contexts, and graph fixtures.

#![allow(missing_docs)]

use parking_lot::Mutex;
use specimen_kernel::{
    shared, BuilderNode, CompositeBuilder, FixedBuilder, FnBuilder, MarkerNode, MarkerRole,
    Outcome, Request, SharedBuilder, SpecimenBuilder, SpecimenContext,
};
use std::sync::Arc;

/// Context that declines every nested request
#[derive(Debug, Default, Clone, Copy)]
pub struct NullContext;

impl SpecimenContext for NullContext {
    fn resolve(&self, _request: &Request) -> Outcome {
        Outcome::NoSpecimen
    }
}

/// Builder that records every request it sees, then answers from `inner`
#[derive(Debug)]
pub struct RecordingBuilder {
    inner: SharedBuilder,
    seen: Mutex<Vec<Request>>,
}

impl RecordingBuilder {
    pub fn new(inner: SharedBuilder) -> Self {
        Self {
            inner,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn declining() -> Self {
        Self::new(declining())
    }

    pub fn requests(&self) -> Vec<Request> {
        self.seen.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.seen.lock().len()
    }
}

impl SpecimenBuilder for RecordingBuilder {
    fn create(&self, request: &Request, context: &dyn SpecimenContext) -> Outcome {
        self.seen.lock().push(request.clone());
        self.inner.create(request, context)
    }
}

pub fn fixed<T: std::any::Any + Send + Sync>(value: T) -> SharedBuilder {
    shared(FixedBuilder::new(value))
}

pub fn declining() -> SharedBuilder {
    shared(FnBuilder::new("declining", |_: &Request, _: &dyn SpecimenContext| {
        Outcome::NoSpecimen
    }))
}

/// Answers `request` with `value`, declines everything else
pub fn answering<T>(request: Request, value: T) -> SharedBuilder
where
    T: std::any::Any + Send + Sync + Clone,
{
    shared(FnBuilder::new("answering", move |r: &Request, _: &dyn SpecimenContext| {
        if *r == request {
            Outcome::created(value.clone())
        } else {
            Outcome::NoSpecimen
        }
    }))
}

pub fn composite(builders: Vec<SharedBuilder>) -> SharedBuilder {
    BuilderNode::from(CompositeBuilder::new(builders)).into_shared()
}

pub fn marker(role: MarkerRole, builder: SharedBuilder) -> SharedBuilder {
    BuilderNode::from(MarkerNode::new(role, builder)).into_shared()
}

pub fn predefined(builder: SharedBuilder) -> MarkerNode {
    MarkerNode::predefined_builders(builder)
}

pub fn same_builder(a: &SharedBuilder, b: &SharedBuilder) -> bool {
    Arc::ptr_eq(a, b)
}
