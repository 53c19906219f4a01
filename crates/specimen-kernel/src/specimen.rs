//! Specimens and creation outcomes

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A synthesized value
///
/// Type-erased and reference counted, so cloning a specimen never clones the
/// value it carries.
#[derive(Clone)]
pub struct Specimen {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Specimen {
    /// Wrap a value
    #[inline]
    #[must_use]
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Borrow the value as `T`
    #[inline]
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Check whether the value is a `T`
    #[inline]
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Name of the wrapped type
    #[inline]
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Check whether both specimens share the same allocation
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

impl fmt::Debug for Specimen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Specimen")
            .field("type", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Result of asking a builder for a specimen
///
/// `NoSpecimen` is the decline sentinel. Any produced value, including
/// `Option::<T>::None` or `()`, is `Created`.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// A specimen was produced
    Created(Specimen),

    /// The builder declined the request
    NoSpecimen,
}

impl Outcome {
    /// Wrap a value as a created outcome
    #[inline]
    #[must_use]
    pub fn created<T: Any + Send + Sync>(value: T) -> Self {
        Self::Created(Specimen::new(value))
    }

    /// Check if a specimen was produced
    #[inline]
    #[must_use]
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    /// Check if the request was declined
    #[inline]
    #[must_use]
    pub fn is_no_specimen(&self) -> bool {
        matches!(self, Self::NoSpecimen)
    }

    /// Borrow the specimen, if any
    #[inline]
    #[must_use]
    pub fn specimen(&self) -> Option<&Specimen> {
        match self {
            Self::Created(specimen) => Some(specimen),
            Self::NoSpecimen => None,
        }
    }

    /// Take the specimen, if any
    #[inline]
    #[must_use]
    pub fn into_specimen(self) -> Option<Specimen> {
        match self {
            Self::Created(specimen) => Some(specimen),
            Self::NoSpecimen => None,
        }
    }

    /// Borrow the produced value as `T`
    #[inline]
    #[must_use]
    pub fn value<T: Any>(&self) -> Option<&T> {
        self.specimen().and_then(Specimen::downcast_ref)
    }

    /// Identity comparison: both declined, or both carry the same allocation
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::NoSpecimen, Self::NoSpecimen) => true,
            (Self::Created(a), Self::Created(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<Specimen> for Outcome {
    fn from(specimen: Specimen) -> Self {
        Self::Created(specimen)
    }
}

impl From<Option<Specimen>> for Outcome {
    fn from(specimen: Option<Specimen>) -> Self {
        specimen.map_or(Self::NoSpecimen, Self::Created)
    }
}
