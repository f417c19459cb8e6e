use syn::{Attribute, LitStr};

/// Values found in a `#[screen(key = "...", title = "...")]` attribute
#[derive(Default)]
pub struct ScreenAttr {
    pub key: Option<LitStr>,
    pub title: Option<LitStr>,
}

/// Parse every `name = "value"` pair of a `screen` attribute.
///
/// Unknown names are reported as errors instead of being skipped, so a typo
/// like `tilte` does not silently fall back to the derived default.
pub fn parse_screen_attr(attr: &Attribute) -> syn::Result<ScreenAttr> {
    let mut parsed = ScreenAttr::default();
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("key") {
            parsed.key = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("title") {
            parsed.title = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error("expected `key` or `title`"))
        }
    })?;
    Ok(parsed)
}

/// `ShopProfile` -> `shop-profile`
pub fn to_kebab_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    for (i, ch) in ident.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// `ShopProfile` -> `Shop Profile`
pub fn to_title_words(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    for (i, ch) in ident.chars().enumerate() {
        if ch.is_uppercase() && i > 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}
