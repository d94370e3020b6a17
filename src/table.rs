use core::{iter::FusedIterator, slice};

/// One row of a reflection table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueAndName<T> {
    pub value: T,
    pub name: &'static str,
}

impl<T> ValueAndName<T> {
    pub const fn new(value: T, name: &'static str) -> Self {
        Self { value, name }
    }
}

/// Iterator over the enumerators of a reflection table.
#[derive(Debug, Clone)]
pub struct Values<T: 'static> {
    rows: slice::Iter<'static, ValueAndName<T>>,
}

impl<T: 'static> Values<T> {
    pub(crate) fn new(table: &'static [ValueAndName<T>]) -> Self {
        Self { rows: table.iter() }
    }
}

impl<T: Copy + 'static> Iterator for Values<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.rows.next().map(|row| row.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<T> {
        self.rows.nth(n).map(|row| row.value)
    }
}

impl<T: Copy + 'static> DoubleEndedIterator for Values<T> {
    fn next_back(&mut self) -> Option<T> {
        self.rows.next_back().map(|row| row.value)
    }
}

impl<T: Copy + 'static> ExactSizeIterator for Values<T> {}

impl<T: Copy + 'static> FusedIterator for Values<T> {}

#[cfg(test)]
mod test {
    use super::{ValueAndName, Values};

    static TABLE: [ValueAndName<u8>; 3] = [
        ValueAndName::new(1, "one"),
        ValueAndName::new(2, "two"),
        ValueAndName::new(3, "three"),
    ];

    #[test]
    fn values_walk_both_ends() {
        let mut values = Values::new(&TABLE);
        assert_eq!(values.len(), 3);
        assert_eq!(values.next(), Some(1));
        assert_eq!(values.next_back(), Some(3));
        assert_eq!(values.len(), 1);
        assert_eq!(values.next(), Some(2));
        assert_eq!(values.next(), None);
        assert_eq!(values.next_back(), None);
    }

    #[test]
    fn values_nth() {
        assert_eq!(Values::new(&TABLE).nth(2), Some(3));
        assert_eq!(Values::new(&TABLE).nth(3), None);
    }
}
