use proc_macro::TokenStream;

mod screen_key;
mod utils;

/// Derive the closed screen registry for a fieldless enum.
///
/// Each variant may carry `#[screen(key = "...", title = "...")]`. Without
/// an explicit key the variant name is converted to kebab-case, and without
/// an explicit title the variant name is split into words.
///
/// Generates `ALL`, `key()`, `title()`, `from_key()` and a `Display` impl
/// that prints the key.
#[proc_macro_derive(ScreenKey, attributes(screen))]
pub fn screen_key_derive(input: TokenStream) -> TokenStream {
    screen_key::derive(input)
}
