/// Declares a fieldless enum together with its reflection.
///
/// ```
/// wise_enum::wise_enum! {
///     /// Paper sizes.
///     pub enum Paper: u16 [invalid = 0] {
///         A3 = 3,
///         A4,
///         Letter = 100,
///     }
/// }
///
/// assert_eq!(Paper::A4 as u16, 4);
/// assert_eq!(Paper::Letter.to_string(), "Letter");
/// assert_eq!("A3".parse::<Paper>(), Ok(Paper::A3));
/// assert!("B5".parse::<Paper>().is_err());
/// ```
///
/// The storage type (`: u16`) and the compact optional's empty marker
/// (`[invalid = 0]`) are both optional. Without a storage type the enum gets
/// Rust's default `isize` discriminants. `Clone, Copy, PartialEq, Eq,
/// PartialOrd, Ord, Hash, Debug` are derived, and `Display`/`FromStr` go
/// through the enumerator names.
#[macro_export]
macro_rules! wise_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident $(: $repr:ident)? $([invalid = $invalid:expr])? {
            $( $(#[$vmeta:meta])* $variant:ident $(= $value:expr)? ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $(#[repr($repr)])?
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant $(= $value)? ),*
        }

        $crate::wise_enum_adapt!($name $(: $repr)? $([invalid = $invalid])? { $($variant),* });

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($crate::WiseEnum::name(*self))
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::ParseEnumError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                $crate::from_string::<Self>(s).ok_or_else(|| $crate::ParseEnumError::new::<Self>(s))
            }
        }
    };
}

/// Attaches reflection to an enum declared elsewhere, leaving its
/// declaration untouched.
///
/// ```
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// #[repr(i8)]
/// pub enum Sign {
///     Minus = -1,
///     Zero = 0,
///     Plus = 1,
/// }
///
/// wise_enum::wise_enum_adapt!(Sign: i8 { Minus, Zero, Plus });
///
/// assert_eq!(wise_enum::to_string(Sign::Minus), "Minus");
/// assert_eq!(wise_enum::from_string::<Sign>("Plus"), Some(Sign::Plus));
/// assert!(wise_enum::is_enum_value::<Sign>(-1));
/// ```
///
/// Every enumerator must be listed: the generated name lookup is an
/// exhaustive `match`, so a missing one fails to compile. So does a storage
/// type that cannot hold every discriminant, or an `invalid` marker that
/// collides with an enumerator. The type must be local to the invoking
/// crate.
///
/// A discriminant wider than the storage type:
///
/// ```compile_fail
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// #[repr(u32)]
/// enum Wide {
///     Small = 1,
///     Big = 70_000,
/// }
///
/// wise_enum::wise_enum_adapt!(Wide: u8 { Small, Big });
/// ```
///
/// An empty marker taken by an enumerator:
///
/// ```compile_fail
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// #[repr(u8)]
/// enum Pair {
///     A = 0,
///     B = 1,
/// }
///
/// wise_enum::wise_enum_adapt!(Pair: u8 [invalid = 1] { A, B });
/// ```
///
/// A missing enumerator:
///
/// ```compile_fail,E0004
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// enum Door {
///     Open,
///     Shut,
/// }
///
/// wise_enum::wise_enum_adapt!(Door { Open });
/// ```
#[macro_export]
macro_rules! wise_enum_adapt {
    ($ty:ty $(: $repr:ty)? $([invalid = $invalid:expr])? { $($variant:ident),* $(,)? }) => {
        const _: () = {
            type __WiseEnumTarget = $ty;
            type __WiseEnumRepr = $crate::__wise_enum_repr!($($repr)?);
            const __WISE_ENUM_INVALID: __WiseEnumRepr = $crate::__wise_enum_invalid!(__WiseEnumRepr $(, $invalid)?);

            $(
                ::core::assert!(
                    __WiseEnumTarget::$variant as __WiseEnumRepr as ::core::primitive::i128
                        == __WiseEnumTarget::$variant as ::core::primitive::i128,
                    ::core::concat!(
                        "discriminant of `",
                        ::core::stringify!($variant),
                        "` does not fit the storage type"
                    )
                );
                ::core::assert!(
                    __WiseEnumTarget::$variant as __WiseEnumRepr != __WISE_ENUM_INVALID,
                    ::core::concat!(
                        "`",
                        ::core::stringify!($variant),
                        "` takes the value reserved for empty compact optionals"
                    )
                );
            )*

            impl $crate::WiseEnum for __WiseEnumTarget {
                type Repr = __WiseEnumRepr;

                const ENUMERATORS: &'static [$crate::ValueAndName<Self>] = &[
                    $( $crate::ValueAndName::new(__WiseEnumTarget::$variant, ::core::stringify!($variant)) ),*
                ];

                const INVALID: __WiseEnumRepr = __WISE_ENUM_INVALID;

                fn name(self) -> &'static str {
                    match self {
                        $( __WiseEnumTarget::$variant => ::core::stringify!($variant), )*
                    }
                }

                fn to_repr(self) -> __WiseEnumRepr {
                    self as __WiseEnumRepr
                }

                fn from_repr(repr: __WiseEnumRepr) -> ::core::option::Option<Self> {
                    $(
                        if repr == __WiseEnumTarget::$variant as __WiseEnumRepr {
                            return ::core::option::Option::Some(__WiseEnumTarget::$variant);
                        }
                    )*
                    ::core::option::Option::None
                }

                #[allow(unused_mut, unused_assignments)]
                fn index(self) -> usize {
                    let mut index = 0;
                    $(
                        if let __WiseEnumTarget::$variant = self {
                            return index;
                        }
                        index += 1;
                    )*
                    index
                }
            }
        };
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __wise_enum_repr {
    () => {
        ::core::primitive::isize
    };
    ($repr:ty) => {
        $repr
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __wise_enum_invalid {
    ($repr:ty) => {
        <$repr as $crate::Discriminant>::MAX
    };
    ($repr:ty, $invalid:expr) => {
        $invalid
    };
}
