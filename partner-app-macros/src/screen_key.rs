use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use std::collections::HashSet;
use syn::{parse_macro_input, Data, DeriveInput, Fields, LitStr};

use crate::utils::{parse_screen_attr, to_kebab_case, to_title_words};

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return Err(syn::Error::new_spanned(name, "ScreenKey can only be derived for enums"));
    };

    let mut idents = Vec::new();
    let mut keys = Vec::new();
    let mut titles = Vec::new();
    let mut seen = HashSet::new();

    for variant in data_enum.variants.iter() {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "ScreenKey variants must not carry fields",
            ));
        }

        let ident = &variant.ident;
        let mut key = None;
        let mut title = None;

        for attr in variant.attrs.iter() {
            if !attr.path().is_ident("screen") {
                continue;
            }
            let parsed = parse_screen_attr(attr)?;
            key = parsed.key.or(key);
            title = parsed.title.or(title);
        }

        let key = key.unwrap_or_else(|| LitStr::new(&to_kebab_case(&ident.to_string()), Span::call_site()));
        let title = title.unwrap_or_else(|| LitStr::new(&to_title_words(&ident.to_string()), Span::call_site()));

        if key.value().is_empty() {
            return Err(syn::Error::new_spanned(&key, "screen key must not be empty"));
        }
        if !seen.insert(key.value()) {
            return Err(syn::Error::new_spanned(&key, format!("duplicate screen key `{}`", key.value())));
        }

        idents.push(ident.clone());
        keys.push(key);
        titles.push(title);
    }

    Ok(quote! {
        impl #name {
            /// Every registered screen, in declaration order
            pub const ALL: &'static [#name] = &[#(#name::#idents),*];

            /// Stable string key of this screen
            pub fn key(&self) -> &'static str {
                match self {
                    #(#name::#idents => #keys,)*
                }
            }

            /// Human readable title of this screen
            pub fn title(&self) -> &'static str {
                match self {
                    #(#name::#idents => #titles,)*
                }
            }

            /// Look up a screen by its key
            pub fn from_key(key: &str) -> ::std::option::Option<Self> {
                match key {
                    #(#keys => ::std::option::Option::Some(#name::#idents),)*
                    _ => ::std::option::Option::None,
                }
            }
        }

        impl ::std::fmt::Display for #name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.key())
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use crate::utils::{to_kebab_case, to_title_words};

    #[test]
    fn test_kebab_case() {
        assert_eq!(to_kebab_case("ShopProfile"), "shop-profile");
        assert_eq!(to_kebab_case("Settings"), "settings");
    }

    #[test]
    fn test_title_words() {
        assert_eq!(to_title_words("OperatingHours"), "Operating Hours");
        assert_eq!(to_title_words("Settings"), "Settings");
    }
}
