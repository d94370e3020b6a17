//! `#[derive(WiseEnum)]`, re-exported by the `wise_enum` crate.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

mod attr;

/// Implements `wise_enum::WiseEnum` for a fieldless enum.
///
/// The storage type comes from `#[repr(..)]` and defaults to `isize`.
///
/// Container attributes, `#[wise_enum(...)]` on the enum:
/// - `invalid = <expr>`: underlying value marking an empty compact optional,
///   `Repr::MAX` when omitted. Must not be any enumerator's value.
/// - `display`: implement `Display` with the enumerator name.
/// - `from_str`: implement `FromStr` through the reverse lookup.
///
/// Variant attribute: `#[wise_enum(rename = "...")]` replaces the name.
#[proc_macro_derive(WiseEnum, attributes(wise_enum))]
pub fn derive_wise_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let data = match &input.data {
        Data::Enum(data) => data,
        Data::Struct(data) => {
            return Err(syn::Error::new(
                data.struct_token.span,
                "WiseEnum can only be derived for enums",
            ))
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span,
                "WiseEnum can only be derived for enums",
            ))
        }
    };
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "WiseEnum cannot be derived for generic enums",
        ));
    }

    let container = attr::Container::from_attrs(&input.attrs)?;
    let repr = match attr::repr(&input.attrs)? {
        Some(repr) => quote!(#repr),
        None => quote!(::core::primitive::isize),
    };

    let mut variants = Vec::with_capacity(data.variants.len());
    let mut names: Vec<String> = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                &variant.fields,
                "WiseEnum only supports fieldless variants",
            ));
        }
        let name = match attr::Variant::from_attrs(&variant.attrs)?.rename {
            Some(rename) => rename.value(),
            None => variant.ident.to_string(),
        };
        if names.contains(&name) {
            return Err(syn::Error::new_spanned(
                variant,
                format!("duplicate enumerator name `{}`", name),
            ));
        }
        variants.push(&variant.ident);
        names.push(name);
    }
    let indices = 0..variants.len();

    let invalid = match &container.invalid {
        Some(invalid) => quote!(#invalid),
        None => quote!(<#repr as ::wise_enum::Discriminant>::MAX),
    };

    let display = container.display.then(|| {
        quote! {
            impl ::core::fmt::Display for #ident {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    f.write_str(::wise_enum::WiseEnum::name(*self))
                }
            }
        }
    });
    let from_str = container.from_str.then(|| {
        quote! {
            impl ::core::str::FromStr for #ident {
                type Err = ::wise_enum::ParseEnumError;

                fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                    ::wise_enum::from_string::<Self>(s)
                        .ok_or_else(|| ::wise_enum::ParseEnumError::new::<Self>(s))
                }
            }
        }
    });

    Ok(quote! {
        const _: () = {
            const __WISE_ENUM_INVALID: #repr = #invalid;

            #(
                ::core::assert!(
                    #ident::#variants as #repr != __WISE_ENUM_INVALID,
                    ::core::concat!(
                        "`",
                        ::core::stringify!(#variants),
                        "` takes the value reserved for empty compact optionals"
                    )
                );
            )*

            impl ::wise_enum::WiseEnum for #ident {
                type Repr = #repr;

                const ENUMERATORS: &'static [::wise_enum::ValueAndName<Self>] = &[
                    #( ::wise_enum::ValueAndName::new(#ident::#variants, #names) ),*
                ];

                const INVALID: #repr = __WISE_ENUM_INVALID;

                fn name(self) -> &'static str {
                    match self {
                        #( #ident::#variants => #names, )*
                    }
                }

                fn to_repr(self) -> #repr {
                    self as #repr
                }

                fn from_repr(repr: #repr) -> ::core::option::Option<Self> {
                    match repr {
                        #( r if r == #ident::#variants as #repr => ::core::option::Option::Some(#ident::#variants), )*
                        _ => ::core::option::Option::None,
                    }
                }

                fn index(self) -> usize {
                    match self {
                        #( #ident::#variants => #indices, )*
                    }
                }
            }
        };

        #display
        #from_str
    })
}

#[cfg(test)]
mod test {
    use syn::{parse_quote, DeriveInput};

    use super::expand;

    fn error(input: DeriveInput) -> String {
        expand(input).err().unwrap().to_string()
    }

    #[test]
    fn rejects_structs() {
        let input = parse_quote!(
            struct S;
        );
        assert_eq!(error(input), "WiseEnum can only be derived for enums");
    }

    #[test]
    fn rejects_fields() {
        let input = parse_quote!(
            enum E {
                A,
                B(u8),
            }
        );
        assert_eq!(error(input), "WiseEnum only supports fieldless variants");
    }

    #[test]
    fn rejects_generics() {
        let input = parse_quote!(
            enum E<T> {
                A,
            }
        );
        assert_eq!(error(input), "WiseEnum cannot be derived for generic enums");
    }

    #[test]
    fn rejects_duplicate_names() {
        let input = parse_quote!(
            enum E {
                #[wise_enum(rename = "B")]
                A,
                B,
            }
        );
        assert_eq!(error(input), "duplicate enumerator name `B`");
    }

    #[test]
    fn optional_impls() {
        let plain = expand(parse_quote!(
            enum E {
                A,
            }
        ))
        .unwrap()
        .to_string();
        assert!(!plain.contains("Display"));
        assert!(!plain.contains("FromStr"));

        let both = expand(parse_quote!(
            #[wise_enum(display, from_str)]
            enum E {
                A,
            }
        ))
        .unwrap()
        .to_string();
        assert!(both.contains("Display"));
        assert!(both.contains("FromStr"));
    }
}
