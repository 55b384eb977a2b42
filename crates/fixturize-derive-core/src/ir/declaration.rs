use std::fmt;

use darling::FromDeriveInput;

use super::attrs::FixtureOptions;
use super::case::CaseModel;
use super::member::MemberDecl;
use crate::visibility::Visibility;

/// A type declaration handed to the synthesizer.
#[derive(Debug, Clone)]
pub struct Declaration {
    pub name: syn::Ident,
    pub generics: syn::Generics,
    pub visibility: Option<Visibility>,
    /// Visibility of the surrounding scope, used when the type itself has no
    /// modifier.
    pub enclosing_visibility: Option<Visibility>,
    pub options: FixtureOptions,
    pub kind: DeclarationKind,
}

#[derive(Debug, Clone)]
pub enum DeclarationKind {
    Record(Vec<MemberDecl>),
    TaggedUnion(Vec<CaseModel>),
    Unsupported(UnsupportedKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedKind {
    TupleStruct,
    UntaggedUnion,
}

impl fmt::Display for UnsupportedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TupleStruct => f.write_str("tuple struct"),
            Self::UntaggedUnion => f.write_str("union"),
        }
    }
}

impl Declaration {
    pub fn new(name: syn::Ident, visibility: Option<Visibility>, kind: DeclarationKind) -> Self {
        Self {
            name,
            generics: syn::Generics::default(),
            visibility,
            enclosing_visibility: None,
            options: FixtureOptions::default(),
            kind,
        }
    }

    pub fn from_derive_input(input: &syn::DeriveInput) -> darling::Result<Self> {
        let options = FixtureOptions::from_derive_input(input)?;
        let kind = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(fields) => {
                    let mut errors = darling::Error::accumulator();
                    let members = fields
                        .named
                        .iter()
                        .filter_map(|field| errors.handle(MemberDecl::from_field(field)))
                        .collect();
                    errors.finish()?;
                    DeclarationKind::Record(members)
                }
                syn::Fields::Unit => DeclarationKind::Record(Vec::new()),
                syn::Fields::Unnamed(_) => {
                    DeclarationKind::Unsupported(UnsupportedKind::TupleStruct)
                }
            },
            syn::Data::Enum(data) => {
                let mut errors = darling::Error::accumulator();
                if let Some(builder) = &options.builder {
                    errors.push(
                        darling::Error::custom("`builder` only applies to structs").with_span(builder),
                    );
                }
                let cases = data
                    .variants
                    .iter()
                    .filter_map(|variant| errors.handle(CaseModel::from_variant(variant)))
                    .collect();
                errors.finish()?;
                DeclarationKind::TaggedUnion(cases)
            }
            syn::Data::Union(_) => DeclarationKind::Unsupported(UnsupportedKind::UntaggedUnion),
        };

        let enclosing_visibility = options
            .enclosing_vis
            .as_ref()
            .map(|vis| Visibility::from(&vis.0));

        Ok(Self {
            name: input.ident.clone(),
            generics: input.generics.clone(),
            visibility: Some(Visibility::from(&input.vis)),
            enclosing_visibility,
            options,
            kind,
        })
    }

    pub fn with_enclosing_visibility(mut self, visibility: Visibility) -> Self {
        self.enclosing_visibility = Some(visibility);
        self
    }

    /// The visibility generated members inherit from the type, falling back
    /// to the enclosing scope when the type carries no modifier of its own.
    pub fn type_visibility(&self) -> Option<Visibility> {
        match (&self.visibility, &self.enclosing_visibility) {
            (Some(own), Some(enclosing)) if own.is_inherited() => Some(enclosing.clone()),
            (None, Some(enclosing)) => Some(enclosing.clone()),
            (own, _) => own.clone(),
        }
    }

    pub fn crate_path(&self, default_crate_path: &syn::Path) -> syn::Path {
        self.options
            .crate_path
            .clone()
            .unwrap_or_else(|| default_crate_path.clone())
    }

    /// The declared type spelled out, `Name<..>`, for places where `Self`
    /// would refer to something else.
    pub fn self_ty(&self) -> syn::Type {
        let name = &self.name;
        let (_, ty_generics, _) = self.generics.split_for_impl();
        syn::parse_quote!(#name #ty_generics)
    }

    pub fn builder_name(&self) -> syn::Ident {
        self.options
            .builder
            .clone()
            .unwrap_or_else(|| crate::misc::builder_name(&self.name))
    }
}
