use hashbrown::HashMap;

use crate::WiseEnum;

/// Hashed reverse lookup for enums with many enumerators.
///
/// `from_string` scans the reflection table; build one of these once when the
/// same enum is parsed in a hot loop.
#[derive(Debug, Clone)]
pub struct NameIndex<T> {
    by_name: HashMap<&'static str, T>,
}

impl<T: WiseEnum> NameIndex<T> {
    pub fn new() -> Self {
        let mut by_name = HashMap::with_capacity(T::SIZE);
        for row in T::ENUMERATORS {
            if by_name.contains_key(row.name) {
                log::warn!(
                    "{}: duplicate enumerator name {:?}, keeping the first",
                    core::any::type_name::<T>(),
                    row.name
                );
                continue;
            }
            by_name.insert(row.name, row.value);
        }
        log::debug!(
            "{}: indexed {} enumerator names",
            core::any::type_name::<T>(),
            by_name.len()
        );
        Self { by_name }
    }

    pub fn get(&self, name: &str) -> Option<T> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl<T: WiseEnum> Default for NameIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}
