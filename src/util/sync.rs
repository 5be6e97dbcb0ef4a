use std::{fmt, ops};

pub use inner::Shared;

#[cfg(not(feature = "sync"))]
mod inner {
    use std::rc::Rc;

    /// Reference-counted handle that copies its content on first mutation
    /// while shared.
    #[repr(transparent)]
    pub struct Shared<T>(pub(super) Rc<T>);

    impl<T> Shared<T> {
        pub fn new(inner: T) -> Self {
            Self(Rc::new(inner))
        }

        pub fn clone(this: &Self) -> Self {
            Self(Rc::clone(&this.0))
        }

        pub fn ptr_eq(this: &Self, other: &Self) -> bool {
            Rc::ptr_eq(&this.0, &other.0)
        }
    }

    impl<T: Clone> Shared<T> {
        pub fn make_mut(this: &mut Self) -> &mut T {
            Rc::make_mut(&mut this.0)
        }
    }
}

#[cfg(feature = "sync")]
mod inner {
    use std::sync::Arc;

    /// Reference-counted handle that copies its content on first mutation
    /// while shared.
    #[repr(transparent)]
    pub struct Shared<T>(pub(super) Arc<T>);

    impl<T> Shared<T> {
        pub fn new(inner: T) -> Self {
            Self(Arc::new(inner))
        }

        pub fn clone(this: &Self) -> Self {
            Self(Arc::clone(&this.0))
        }

        pub fn ptr_eq(this: &Self, other: &Self) -> bool {
            Arc::ptr_eq(&this.0, &other.0)
        }
    }

    impl<T: Clone> Shared<T> {
        pub fn make_mut(this: &mut Self) -> &mut T {
            Arc::make_mut(&mut this.0)
        }
    }
}

impl<T: Clone> Shared<T> {
    /// Allocate a fresh handle with a copy of the content.
    pub fn detached(this: &Self) -> Self {
        Self::new(T::clone(this))
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Shared::clone(self)
    }
}

impl<T> ops::Deref for Shared<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Default> Default for Shared<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: PartialEq> PartialEq for Shared<T> {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other) || **self == **other
    }
}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Shared<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        T::serialize(self, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Shared<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::new)
    }
}
