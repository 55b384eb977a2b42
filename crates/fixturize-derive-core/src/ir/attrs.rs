//! Parsed `#[fixture(...)]` attributes.
//!
//! The same helper attribute is read at two levels: on the type (options for
//! the whole expansion) and on individual fields (how a field takes part in
//! construction). Unknown keys are rejected by darling with a spelling
//! suggestion.

use darling::{FromDeriveInput, FromField, FromMeta};

/// Parsed `#[fixture(...)]` attributes on the deriving type.
///
/// # Attributes
///
/// - `crate = <Path>`: path of the runtime crate providing `Sampleable`
///   (default `::fixturize`).
/// - `builder = "<Ident>"`: name of the generated builder type
///   (default `<Type>FixtureBuilder`).
/// - `debug_only`: put every generated item behind `#[cfg(debug_assertions)]`.
/// - `enclosing_vis = "<visibility>"`: visibility to assume for a type written
///   without a modifier, e.g. `"pub(crate)"`.
#[derive(Debug, Clone, Default, FromDeriveInput)]
#[darling(attributes(fixture))]
pub struct FixtureOptions {
    #[darling(rename = "crate")]
    pub crate_path: Option<syn::Path>,
    pub builder: Option<syn::Ident>,
    #[darling(default)]
    pub debug_only: bool,
    pub enclosing_vis: Option<VisibilityOption>,
}

/// Parsed `#[fixture(...)]` attributes on a record field.
///
/// # Attributes
///
/// - `default`: the field has its own default; the sample accessor leaves it
///   to the constructor instead of passing a sample explicitly.
/// - `lazy`: filled on first use; left out of construction.
/// - `computed`: holds no data of its own; left out of construction.
/// - `observed`: writes go through change hooks; left out of construction.
///
/// Fields left out of construction are initialized with `Default::default()`.
#[derive(Debug, Clone, Default, FromField)]
#[darling(attributes(fixture))]
pub struct FieldOptions {
    #[darling(default)]
    pub default: bool,
    #[darling(default)]
    pub lazy: bool,
    #[darling(default)]
    pub computed: bool,
    #[darling(default)]
    pub observed: bool,
}

/// A visibility modifier written as a string, e.g. `enclosing_vis = "pub(crate)"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityOption(pub syn::Visibility);

impl FromMeta for VisibilityOption {
    fn from_string(value: &str) -> darling::Result<Self> {
        syn::parse_str(value)
            .map(Self)
            .map_err(|_| darling::Error::unknown_value(value))
    }
}
