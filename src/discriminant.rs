use core::{fmt::Debug, hash::Hash};

/// Primitive integer usable as the underlying type of an enum.
pub trait Discriminant: Copy + Eq + Ord + Hash + Debug + 'static {
    const MAX: Self;
}

macro_rules! discriminant {
    ($($ty:ty),+) => {
        $(
            impl Discriminant for $ty {
                const MAX: Self = <$ty>::MAX;
            }
        )+
    };
}

discriminant!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
