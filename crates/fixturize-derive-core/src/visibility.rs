//! Visibility levels and the effective-visibility rule for generated members.
//!
//! Generated members whose signatures mention field types must never be more
//! visible than the least visible of the type and its fields, otherwise they
//! would leak a restricted type through a wider API. The levels are ranked
//! most-restrictive first:
//!
//! | level | rank | Rust spelling |
//! |---|---|---|
//! | private | 0 | inherited, `pub(self)` |
//! | file-scoped | 1 | `pub(super)`, `pub(in path)` |
//! | internal | 2 | `pub(crate)` |
//! | package | 3 | no Rust spelling, rendered as `pub` |
//! | public | 4 | `pub` |
//!
//! A visibility that was never written down ("unspecified", `None` in the
//! model) ranks as internal.

use proc_macro2::TokenStream;
use quote::ToTokens;

use crate::field::FieldModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VisibilityLevel {
    Private,
    FileScoped,
    Internal,
    Package,
    Public,
}

impl VisibilityLevel {
    pub const ALL: [Self; 5] = [
        Self::Private,
        Self::FileScoped,
        Self::Internal,
        Self::Package,
        Self::Public,
    ];

    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Canonical modifier for a level that has no source spelling to reuse.
    pub fn canonical_tokens(self) -> syn::Visibility {
        match self {
            Self::Private => syn::Visibility::Inherited,
            Self::FileScoped => syn::parse_quote!(pub(super)),
            Self::Internal => syn::parse_quote!(pub(crate)),
            // Rust has no workspace-wide visibility; `pub` is the closest spelling.
            Self::Package | Self::Public => syn::parse_quote!(pub),
        }
    }
}

/// A ranked visibility together with the modifier tokens it was written with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visibility {
    level: VisibilityLevel,
    tokens: syn::Visibility,
}

impl Visibility {
    pub fn new(level: VisibilityLevel, tokens: syn::Visibility) -> Self {
        Self { level, tokens }
    }

    pub fn from_level(level: VisibilityLevel) -> Self {
        Self::new(level, level.canonical_tokens())
    }

    pub fn private() -> Self {
        Self::from_level(VisibilityLevel::Private)
    }

    pub fn internal() -> Self {
        Self::from_level(VisibilityLevel::Internal)
    }

    pub fn public() -> Self {
        Self::from_level(VisibilityLevel::Public)
    }

    pub fn level(&self) -> VisibilityLevel {
        self.level
    }

    pub fn tokens(&self) -> &syn::Visibility {
        &self.tokens
    }

    /// True when the modifier was omitted in source (Rust's implicit private).
    pub fn is_inherited(&self) -> bool {
        matches!(self.tokens, syn::Visibility::Inherited)
    }
}

impl From<&syn::Visibility> for Visibility {
    fn from(vis: &syn::Visibility) -> Self {
        let level = match vis {
            syn::Visibility::Public(_) => VisibilityLevel::Public,
            syn::Visibility::Inherited => VisibilityLevel::Private,
            syn::Visibility::Restricted(restricted) => {
                let path = &restricted.path;
                if path.is_ident("crate") {
                    VisibilityLevel::Internal
                } else if path.is_ident("self") {
                    VisibilityLevel::Private
                } else {
                    // `pub(super)` and `pub(in some::ancestor)` sit between the
                    // defining module and the whole crate.
                    VisibilityLevel::FileScoped
                }
            }
        };
        Self::new(level, vis.clone())
    }
}

impl ToTokens for Visibility {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.tokens.to_tokens(tokens);
    }
}

/// Rank used for a possibly-unspecified visibility.
pub fn level_of(vis: Option<&Visibility>) -> VisibilityLevel {
    vis.map_or(VisibilityLevel::Internal, Visibility::level)
}

/// The narrowest visibility among the type and its fields.
///
/// Ties keep the earlier candidate: the type's own modifier wins over a
/// field's, and an earlier field wins over a later one. An unspecified winner
/// is rendered with the canonical internal modifier.
pub fn compute_effective_visibility(
    type_visibility: Option<&Visibility>,
    fields: &[FieldModel],
) -> Visibility {
    let mut narrowest = type_visibility;
    for field in fields {
        let candidate = field.visibility.as_ref();
        if level_of(candidate) < level_of(narrowest) {
            narrowest = candidate;
        }
    }

    match narrowest {
        Some(vis) => vis.clone(),
        None => Visibility::internal(),
    }
}
