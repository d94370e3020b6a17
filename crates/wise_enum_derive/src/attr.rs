use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Attribute, Expr, Ident, Lit, LitStr, Meta, Token,
};

const INTEGERS: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
];

/// `key` or `key = value` inside `#[wise_enum(...)]`.
struct Arg {
    key: Ident,
    value: Option<Expr>,
}

impl Parse for Arg {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key = input.parse()?;
        let value = if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            Some(input.parse()?)
        } else {
            None
        };
        Ok(Self { key, value })
    }
}

impl Arg {
    fn value(self) -> syn::Result<Expr> {
        let key = self.key;
        self.value.ok_or_else(|| {
            syn::Error::new(key.span(), format!("`{}` expects a value", key))
        })
    }

    fn flag(self) -> syn::Result<()> {
        match self.value {
            None => Ok(()),
            Some(value) => Err(syn::Error::new_spanned(
                value,
                format!("`{}` does not take a value", self.key),
            )),
        }
    }

    fn unknown(self) -> syn::Error {
        syn::Error::new(
            self.key.span(),
            format!("unknown wise_enum attribute `{}`", self.key),
        )
    }
}

fn args(attrs: &[Attribute]) -> syn::Result<Vec<Arg>> {
    let mut out = Vec::new();
    for attr in attrs.iter().filter(|a| a.path.is_ident("wise_enum")) {
        out.extend(attr.parse_args_with(Punctuated::<Arg, Token![,]>::parse_terminated)?);
    }
    Ok(out)
}

/// Attributes on the enum itself.
#[derive(Default)]
pub struct Container {
    pub invalid: Option<Expr>,
    pub display: bool,
    pub from_str: bool,
}

impl Container {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for arg in args(attrs)? {
            if arg.key == "invalid" {
                this.invalid = Some(arg.value()?);
            } else if arg.key == "display" {
                arg.flag()?;
                this.display = true;
            } else if arg.key == "from_str" {
                arg.flag()?;
                this.from_str = true;
            } else {
                return Err(arg.unknown());
            }
        }
        Ok(this)
    }
}

/// Attributes on a variant.
#[derive(Default)]
pub struct Variant {
    pub rename: Option<LitStr>,
}

impl Variant {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for arg in args(attrs)? {
            if arg.key == "rename" {
                match arg.value()? {
                    Expr::Lit(syn::ExprLit {
                        lit: Lit::Str(name),
                        ..
                    }) => this.rename = Some(name),
                    other => {
                        return Err(syn::Error::new_spanned(
                            other,
                            "`rename` expects a string literal",
                        ))
                    }
                }
            } else {
                return Err(arg.unknown());
            }
        }
        Ok(this)
    }
}

/// The integer named in `#[repr(...)]`, if any.
pub fn repr(attrs: &[Attribute]) -> syn::Result<Option<Ident>> {
    for attr in attrs.iter().filter(|a| a.path.is_ident("repr")) {
        let metas = attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)?;
        for meta in metas {
            if let Meta::Path(path) = meta {
                if let Some(ident) = path.get_ident() {
                    if INTEGERS.contains(&ident.to_string().as_str()) {
                        return Ok(Some(ident.clone()));
                    }
                }
            }
        }
    }
    Ok(None)
}
