use core::{
    fmt,
    hash::{Hash, Hasher},
};

use crate::{BadOptionalAccess, WiseEnum};

/// An optional enumerator that takes no more space than the enum's
/// underlying integer.
///
/// The empty state is stored as [`WiseEnum::INVALID`], which the generated
/// impls check at compile time is not the value of any enumerator.
pub struct CompactOptional<T: WiseEnum> {
    storage: T::Repr,
}

impl<T: WiseEnum> CompactOptional<T> {
    pub const fn none() -> Self {
        Self {
            storage: T::INVALID,
        }
    }

    pub fn some(value: T) -> Self {
        Self {
            storage: value.to_repr(),
        }
    }

    pub fn has_value(&self) -> bool {
        self.storage != T::INVALID
    }

    pub fn get(&self) -> Option<T> {
        if self.has_value() {
            T::from_repr(self.storage)
        } else {
            None
        }
    }

    pub fn value(&self) -> Result<T, BadOptionalAccess> {
        self.get().ok_or(BadOptionalAccess)
    }

    pub fn value_or(&self, default: T) -> T {
        self.get().unwrap_or(default)
    }

    pub fn reset(&mut self) {
        self.storage = T::INVALID;
    }

    pub fn take(&mut self) -> Option<T> {
        let value = self.get();
        self.reset();
        value
    }

    /// Stores `value`, returning what was there before.
    pub fn replace(&mut self, value: T) -> Option<T> {
        let old = self.get();
        self.storage = value.to_repr();
        old
    }

    /// The raw underlying integer, `T::INVALID` when empty.
    pub fn to_repr(&self) -> T::Repr {
        self.storage
    }
}

impl<T: WiseEnum> Default for CompactOptional<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T: WiseEnum> Clone for CompactOptional<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: WiseEnum> Copy for CompactOptional<T> {}

impl<T: WiseEnum> PartialEq for CompactOptional<T> {
    fn eq(&self, other: &Self) -> bool {
        self.storage == other.storage
    }
}

impl<T: WiseEnum> Eq for CompactOptional<T> {}

impl<T: WiseEnum> Hash for CompactOptional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.storage.hash(state)
    }
}

impl<T: WiseEnum> fmt::Debug for CompactOptional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => f
                .debug_tuple("Some")
                .field(&format_args!("{}", value.name()))
                .finish(),
            None => f.write_str("None"),
        }
    }
}

impl<T: WiseEnum> From<T> for CompactOptional<T> {
    fn from(value: T) -> Self {
        Self::some(value)
    }
}

impl<T: WiseEnum> From<Option<T>> for CompactOptional<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Self::none, Self::some)
    }
}

impl<T: WiseEnum> From<CompactOptional<T>> for Option<T> {
    fn from(value: CompactOptional<T>) -> Self {
        value.get()
    }
}
