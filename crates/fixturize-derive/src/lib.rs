//! `#[derive(Fixture)]`: sample constructors for structs and enums.
//!
//! # Example
//!
//! ```ignore
//! use fixturize::Fixture;
//!
//! #[derive(Fixture)]
//! pub struct User {
//!     pub id: String,
//!     pub age: u32,
//!     #[fixture(default)]
//!     pub retries: u8,
//! }
//!
//! let user = User::fixture();
//! let admin = User::fixture_with(|u| u.id = "admin".into());
//! ```
//!
//! # Container attributes
//!
//! - `#[fixture(crate = path)]` - Optional. Path of the runtime crate, `::fixturize` by default.
//! - `#[fixture(builder = "Name")]` - Optional. Name of the generated builder type.
//! - `#[fixture(debug_only)]` - Optional. Compile the generated items only with `debug_assertions`.
//! - `#[fixture(enclosing_vis = "pub(crate)")]` - Optional. Visibility assumed for a type without a modifier.
//!
//! # Field attributes
//!
//! - `#[fixture(default)]` - The constructor takes `Option<T>` and falls back to the sample.
//! - `#[fixture(lazy)]`, `#[fixture(computed)]`, `#[fixture(observed)]` - Leave the field out
//!   of construction; it is initialized with `Default::default()`.

extern crate proc_macro;

use fixturize_derive_core::synth::DeriveFixture;
use proc_macro::TokenStream;
use syn::parse_macro_input;

#[proc_macro_derive(Fixture, attributes(fixture))]
pub fn derive_fixture(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as syn::DeriveInput);
    match DeriveFixture::default().emit(&ast) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.write_errors().into(),
    }
}
