//! Request descriptors
//!
//! A [`Request`] describes what value is wanted. Builders decide applicability
//! by comparing requests, so the only contract is `Eq + Hash`.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Runtime token for a Rust type
///
/// Equality and hashing use the [`TypeId`] only; the name is kept for
/// diagnostics.
#[derive(Clone, Copy)]
pub struct TypeToken {
    id: TypeId,
    name: &'static str,
}

impl TypeToken {
    /// Token for `T`
    #[inline]
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Underlying type id
    #[inline]
    #[must_use]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Check whether this token stands for `T`
    #[inline]
    #[must_use]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeToken {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeToken {}

impl Hash for TypeToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeToken({})", self.name)
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Descriptor of a wanted specimen
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Request {
    /// A value of the given type
    Type(TypeToken),

    /// A value for a named parameter of the given type
    Parameter {
        /// Parameter name
        name: String,
        /// Parameter type
        ty: TypeToken,
    },

    /// A value of the given type derived from a seed
    Seeded {
        /// Requested type
        ty: TypeToken,
        /// Seed text
        seed: String,
    },

    /// Free-form named request
    Named(String),
}

impl Request {
    /// Request a value of type `T`
    #[inline]
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::Type(TypeToken::of::<T>())
    }

    /// Request a value for parameter `name` of type `T`
    #[inline]
    #[must_use]
    pub fn parameter<T: ?Sized + 'static>(name: impl Into<String>) -> Self {
        Self::Parameter {
            name: name.into(),
            ty: TypeToken::of::<T>(),
        }
    }

    /// Request a seeded value of type `T`
    #[inline]
    #[must_use]
    pub fn seeded<T: ?Sized + 'static>(seed: impl Into<String>) -> Self {
        Self::Seeded {
            ty: TypeToken::of::<T>(),
            seed: seed.into(),
        }
    }

    /// Free-form named request
    #[inline]
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// The type this request asks for, if any
    #[must_use]
    pub fn type_token(&self) -> Option<TypeToken> {
        match self {
            Self::Type(ty) | Self::Parameter { ty, .. } | Self::Seeded { ty, .. } => Some(*ty),
            Self::Named(_) => None,
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(ty) => write!(f, "type {ty}"),
            Self::Parameter { name, ty } => write!(f, "parameter {name}: {ty}"),
            Self::Seeded { ty, seed } => write!(f, "seeded {ty} ({seed:?})"),
            Self::Named(name) => write!(f, "named {name:?}"),
        }
    }
}
