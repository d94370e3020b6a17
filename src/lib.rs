//! Compile-time reflection for fieldless enums.
//!
//! An enum opts in either by deriving [`WiseEnum`](derive@WiseEnum), by being
//! declared through [`wise_enum!`], or by being adapted after the fact with
//! [`wise_enum_adapt!`]. Every route produces the same reflection table: the
//! enumerators paired with their names, in declaration order.
//!
//! ```
//! use wise_enum::{wise_enum, CompactOptional};
//!
//! wise_enum! {
//!     pub enum Color: u8 {
//!         Red,
//!         Green = 5,
//!         Blue,
//!     }
//! }
//!
//! assert_eq!(wise_enum::to_string(Color::Green), "Green");
//! assert_eq!(wise_enum::from_string::<Color>("Blue"), Some(Color::Blue));
//! assert_eq!(wise_enum::size::<Color>(), 3);
//!
//! let names: Vec<_> = wise_enum::range::<Color>().iter().map(|e| e.name).collect();
//! assert_eq!(names, ["Red", "Green", "Blue"]);
//!
//! let mut slot = CompactOptional::<Color>::none();
//! assert_eq!(core::mem::size_of_val(&slot), 1);
//! slot.replace(Color::Red);
//! assert_eq!(slot.get(), Some(Color::Red));
//! ```
#![no_std]

#[allow(unused_imports)]
#[macro_use]
extern crate alloc;

// Lets the derive output name `::wise_enum` from inside this crate too.
extern crate self as wise_enum;

mod compact;
mod discriminant;
mod error;
mod index;
mod macros;
mod table;

pub use compact::CompactOptional;
pub use discriminant::Discriminant;
pub use error::{BadOptionalAccess, ParseEnumError};
pub use index::NameIndex;
pub use table::{ValueAndName, Values};

#[cfg(feature = "derive")]
pub use wise_enum_derive::WiseEnum;

/// Reflection over a fieldless enum.
///
/// Implementations are generated; writing one by hand is possible but the
/// generated `name` match is what guarantees the table is complete.
///
/// The derive rejects an empty marker that an enumerator already uses:
///
/// ```compile_fail
/// #[derive(wise_enum::WiseEnum, Clone, Copy, PartialEq, Eq, Debug)]
/// #[repr(u8)]
/// #[wise_enum(invalid = 1)]
/// enum Pair {
///     A = 0,
///     B = 1,
/// }
/// ```
pub trait WiseEnum: Copy + Eq + 'static {
    /// Underlying storage type of the enum.
    type Repr: Discriminant;

    /// Every enumerator with its name, in declaration order.
    const ENUMERATORS: &'static [ValueAndName<Self>];

    /// Number of enumerators.
    const SIZE: usize = Self::ENUMERATORS.len();

    /// Underlying value reserved for the empty [`CompactOptional`].
    const INVALID: Self::Repr = <Self::Repr as Discriminant>::MAX;

    fn name(self) -> &'static str;

    fn to_repr(self) -> Self::Repr;

    fn from_repr(repr: Self::Repr) -> Option<Self>;

    /// Position of `self` in declaration order.
    fn index(self) -> usize;

    fn from_index(index: usize) -> Option<Self> {
        Self::ENUMERATORS.get(index).map(|e| e.value)
    }

    /// Exact, case-sensitive reverse lookup.
    fn from_name(name: &str) -> Option<Self> {
        Self::ENUMERATORS
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.value)
    }
}

/// Returns the name of an enumerator.
pub fn to_string<T: WiseEnum>(value: T) -> &'static str {
    value.name()
}

/// Converts a name into an enumerator. Returns `None` if no enumerator of
/// `T` is called `name`.
pub fn from_string<T: WiseEnum>(name: &str) -> Option<T> {
    let found = T::from_name(name);
    if found.is_none() {
        log_miss::<T>(name);
    }
    found
}

/// Like [`from_string`], but ignores ASCII case.
pub fn from_string_ignore_ascii_case<T: WiseEnum>(name: &str) -> Option<T> {
    let found = T::ENUMERATORS
        .iter()
        .find(|e| e.name.eq_ignore_ascii_case(name))
        .map(|e| e.value);
    if found.is_none() {
        log_miss::<T>(name);
    }
    found
}

fn log_miss<T>(name: &str) {
    log::trace!(
        "{}: no enumerator named {:?}",
        core::any::type_name::<T>(),
        name
    );
}

/// The reflection table of `T`.
pub const fn range<T: WiseEnum>() -> &'static [ValueAndName<T>] {
    T::ENUMERATORS
}

pub const fn size<T: WiseEnum>() -> usize {
    T::SIZE
}

/// Iterates over the enumerators of `T` in declaration order.
pub fn values<T: WiseEnum>() -> Values<T> {
    Values::new(T::ENUMERATORS)
}

/// Whether some enumerator of `T` has the underlying value `repr`.
pub fn is_enum_value<T: WiseEnum>(repr: T::Repr) -> bool {
    T::ENUMERATORS.iter().any(|e| e.value.to_repr() == repr)
}

#[cfg(test)]
mod test {
    use core::sync::atomic::{AtomicBool, Ordering};

    use super::*;

    static SAW_IGNORE_CASE_MISS: AtomicBool = AtomicBool::new(false);

    struct MissLogger;

    impl log::Log for MissLogger {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            let msg = format!("{}", record.args());
            if record.level() == log::Level::Trace && msg.ends_with("no enumerator named \"Trumps\"") {
                SAW_IGNORE_CASE_MISS.store(true, Ordering::SeqCst);
            }
        }

        fn flush(&self) {}
    }

    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    enum Suit {
        Clubs,
        Diamonds = 4,
        Hearts,
    }

    // Written out the way the macros expand, to keep these tests independent
    // of them.
    impl WiseEnum for Suit {
        type Repr = isize;

        const ENUMERATORS: &'static [ValueAndName<Self>] = &[
            ValueAndName::new(Suit::Clubs, "Clubs"),
            ValueAndName::new(Suit::Diamonds, "Diamonds"),
            ValueAndName::new(Suit::Hearts, "Hearts"),
        ];

        fn name(self) -> &'static str {
            match self {
                Suit::Clubs => "Clubs",
                Suit::Diamonds => "Diamonds",
                Suit::Hearts => "Hearts",
            }
        }

        fn to_repr(self) -> isize {
            self as isize
        }

        fn from_repr(repr: isize) -> Option<Self> {
            Self::ENUMERATORS
                .iter()
                .find(|e| e.value as isize == repr)
                .map(|e| e.value)
        }

        fn index(self) -> usize {
            match self {
                Suit::Clubs => 0,
                Suit::Diamonds => 1,
                Suit::Hearts => 2,
            }
        }
    }

    #[test]
    fn names_round_trip() {
        for e in range::<Suit>() {
            assert_eq!(to_string(e.value), e.name);
            assert_eq!(from_string::<Suit>(e.name), Some(e.value));
        }
    }

    #[test]
    fn unknown_names() {
        assert_eq!(from_string::<Suit>("Spades"), None);
        assert_eq!(from_string::<Suit>(""), None);
        assert_eq!(from_string::<Suit>("clubs"), None);
        assert_eq!(from_string_ignore_ascii_case::<Suit>("clubs"), Some(Suit::Clubs));
        assert_eq!(from_string_ignore_ascii_case::<Suit>("HEARTS"), Some(Suit::Hearts));
    }

    #[test]
    fn ignore_case_miss_is_logged() {
        // Only this test installs a logger.
        let _ = log::set_logger(&MissLogger);
        log::set_max_level(log::LevelFilter::Trace);
        assert_eq!(from_string_ignore_ascii_case::<Suit>("Trumps"), None);
        assert!(SAW_IGNORE_CASE_MISS.load(Ordering::SeqCst));
    }

    #[test]
    fn size_and_order() {
        assert_eq!(size::<Suit>(), 3);
        assert_eq!(Suit::SIZE, range::<Suit>().len());
        let all: alloc::vec::Vec<Suit> = values::<Suit>().collect();
        assert_eq!(all, [Suit::Clubs, Suit::Diamonds, Suit::Hearts]);
        assert_eq!(values::<Suit>().rev().next(), Some(Suit::Hearts));
        assert_eq!(values::<Suit>().len(), 3);
    }

    #[test]
    fn enum_values() {
        assert!(is_enum_value::<Suit>(0));
        assert!(is_enum_value::<Suit>(4));
        assert!(is_enum_value::<Suit>(5));
        assert!(!is_enum_value::<Suit>(1));
        assert!(!is_enum_value::<Suit>(Suit::INVALID));
        assert_eq!(Suit::from_repr(5), Some(Suit::Hearts));
        assert_eq!(Suit::from_repr(3), None);
    }

    #[test]
    fn indices() {
        for (i, value) in values::<Suit>().enumerate() {
            assert_eq!(value.index(), i);
            assert_eq!(Suit::from_index(i), Some(value));
        }
        assert_eq!(Suit::from_index(3), None);
    }
}
