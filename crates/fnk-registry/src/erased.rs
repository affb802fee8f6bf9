use std::any::{self, Any};
use std::fmt;

#[cfg(not(feature = "sync"))]
type AnyBox = Box<dyn Any>;

#[cfg(feature = "sync")]
type AnyBox = Box<dyn Any + Send + Sync>;

/// A single value of any concrete type behind a uniform representation.
///
/// The box owns its contents for its whole lifetime and records enough
/// runtime type information to hand the value back as `T` when the caller
/// asks for the type actually stored. Asking for any other type yields
/// absence, never a reinterpreted value. The recorded type name is for
/// diagnostics only; the match decision is `TypeId`-based.
pub struct Erased {
    value: AnyBox,
    type_name: &'static str,
}

impl Erased {
    #[cfg(not(feature = "sync"))]
    pub fn new<T: Any>(value: T) -> Self {
        Self {
            value: Box::new(value),
            type_name: any::type_name::<T>(),
        }
    }

    #[cfg(feature = "sync")]
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Box::new(value),
            type_name: any::type_name::<T>(),
        }
    }

    /// Returns `true` if the stored value is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Borrows the stored value as `T`, or `None` on a type mismatch.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref()
    }

    /// Recovers the stored value as `T`, returning the box unchanged on a
    /// type mismatch.
    pub fn into_inner<T: Any>(self) -> Result<T, Self> {
        let type_name = self.type_name;
        match self.value.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(value) => Err(Self { value, type_name }),
        }
    }

    /// Recovers the stored value as `T`, applies `f`, and re-boxes the
    /// result. On a type mismatch the box comes back unchanged.
    #[cfg(not(feature = "sync"))]
    pub fn map<T: Any, U: Any>(self, f: impl FnOnce(T) -> U) -> Result<Self, Self> {
        self.into_inner::<T>().map(|value| Self::new(f(value)))
    }

    /// Recovers the stored value as `T`, applies `f`, and re-boxes the
    /// result. On a type mismatch the box comes back unchanged.
    #[cfg(feature = "sync")]
    pub fn map<T: Any, U: Any + Send + Sync>(self, f: impl FnOnce(T) -> U) -> Result<Self, Self> {
        self.into_inner::<T>().map(|value| Self::new(f(value)))
    }

    /// Name of the stored type, as reported at construction time.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for Erased {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Erased")
            .field("type", &self.type_name)
            .finish()
    }
}
