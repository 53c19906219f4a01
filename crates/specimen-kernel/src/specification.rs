//! Request specifications
//!
//! Predicates over [`Request`]s, used by
//! [`FilteringBuilder`](crate::FilteringBuilder) to decide which requests its
//! child may see.

use crate::request::{Request, TypeToken};
use std::fmt;
use std::sync::Arc;

/// Predicate over requests
pub trait RequestSpecification: Send + Sync + fmt::Debug {
    /// Check whether `request` satisfies this specification
    fn is_satisfied_by(&self, request: &Request) -> bool;
}

/// Shared handle to a specification
pub type SharedSpecification = Arc<dyn RequestSpecification>;

/// Satisfied by one exact request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactRequestSpecification {
    target: Request,
}

impl ExactRequestSpecification {
    /// Match `target` only
    #[inline]
    #[must_use]
    pub fn new(target: Request) -> Self {
        Self { target }
    }
}

impl RequestSpecification for ExactRequestSpecification {
    fn is_satisfied_by(&self, request: &Request) -> bool {
        *request == self.target
    }
}

/// Satisfied by any request for a given type
///
/// Covers plain type requests, parameters and seeded requests of that type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSpecification {
    ty: TypeToken,
}

impl TypeSpecification {
    /// Match requests for `T`
    #[inline]
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            ty: TypeToken::of::<T>(),
        }
    }
}

impl RequestSpecification for TypeSpecification {
    fn is_satisfied_by(&self, request: &Request) -> bool {
        request.type_token() == Some(self.ty)
    }
}

/// Specification backed by a closure
pub struct FnSpecification<F> {
    label: &'static str,
    predicate: F,
}

impl<F> FnSpecification<F>
where
    F: Fn(&Request) -> bool + Send + Sync,
{
    /// Create with a label used in debug output
    #[inline]
    #[must_use]
    pub fn new(label: &'static str, predicate: F) -> Self {
        Self { label, predicate }
    }
}

impl<F> fmt::Debug for FnSpecification<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSpecification")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl<F> RequestSpecification for FnSpecification<F>
where
    F: Fn(&Request) -> bool + Send + Sync,
{
    fn is_satisfied_by(&self, request: &Request) -> bool {
        (self.predicate)(request)
    }
}

/// Negates another specification
#[derive(Debug, Clone)]
pub struct InverseSpecification {
    inner: SharedSpecification,
}

impl InverseSpecification {
    /// Satisfied when `inner` is not
    #[inline]
    #[must_use]
    pub fn new(inner: SharedSpecification) -> Self {
        Self { inner }
    }
}

impl RequestSpecification for InverseSpecification {
    fn is_satisfied_by(&self, request: &Request) -> bool {
        !self.inner.is_satisfied_by(request)
    }
}

/// Satisfied when every inner specification is
///
/// An empty list is satisfied by everything.
#[derive(Debug, Clone)]
pub struct AndSpecification {
    specifications: Vec<SharedSpecification>,
}

impl AndSpecification {
    /// Conjunction of `specifications`
    #[must_use]
    pub fn new(specifications: impl IntoIterator<Item = SharedSpecification>) -> Self {
        Self {
            specifications: specifications.into_iter().collect(),
        }
    }
}

impl RequestSpecification for AndSpecification {
    fn is_satisfied_by(&self, request: &Request) -> bool {
        self.specifications.iter().all(|s| s.is_satisfied_by(request))
    }
}

/// Satisfied when any inner specification is
///
/// An empty list is satisfied by nothing.
#[derive(Debug, Clone)]
pub struct OrSpecification {
    specifications: Vec<SharedSpecification>,
}

impl OrSpecification {
    /// Disjunction of `specifications`
    #[must_use]
    pub fn new(specifications: impl IntoIterator<Item = SharedSpecification>) -> Self {
        Self {
            specifications: specifications.into_iter().collect(),
        }
    }
}

impl RequestSpecification for OrSpecification {
    fn is_satisfied_by(&self, request: &Request) -> bool {
        self.specifications.iter().any(|s| s.is_satisfied_by(request))
    }
}
