//! Declaration synthesizer: turns a [`Declaration`] into the generated
//! sample constructor, sample accessor, builder and factory.

mod expansion;
mod record;
mod tagged_union;

pub use expansion::{Expansion, Fragment, FragmentKind};
pub use record::RecordScan;

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use crate::error::SynthesisError;
use crate::field::ExtractOptions;
use crate::ir::{Declaration, DeclarationKind};


#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SynthesisOptions {
    /// Put every generated item behind `#[cfg(debug_assertions)]`, on top of
    /// types that ask for it with `#[fixture(debug_only)]`.
    pub wrap_in_debug_only_guard: bool,
    pub extract: ExtractOptions,
}

#[derive(Debug, Clone)]
pub struct DeriveFixture {
    pub default_crate_path: syn::Path,
    pub options: SynthesisOptions,
}

impl Default for DeriveFixture {
    fn default() -> Self {
        Self {
            default_crate_path: syn::parse_quote!(::fixturize),
            options: SynthesisOptions::default(),
        }
    }
}

impl DeriveFixture {
    pub fn new(default_crate_path: syn::Path) -> Self {
        Self {
            default_crate_path,
            ..Self::default()
        }
    }

    pub fn with_options(mut self, options: SynthesisOptions) -> Self {
        self.options = options;
        self
    }

    pub fn emit(&self, input: &syn::DeriveInput) -> darling::Result<TokenStream> {
        let declaration = Declaration::from_derive_input(input)?;
        let expansion = self.emit_declaration(&declaration)?;
        Ok(expansion.into_token_stream())
    }

    pub fn emit_declaration(&self, declaration: &Declaration) -> Result<Expansion, SynthesisError> {
        let cx = EmitContext::new(self, declaration);
        match &declaration.kind {
            DeclarationKind::Record(members) => {
                let scan = self.scan_record(declaration, members);
                Ok(cx.emit_record(&scan))
            }
            DeclarationKind::TaggedUnion(cases) => cx.emit_tagged_union(cases),
            DeclarationKind::Unsupported(kind) => {
                Err(SynthesisError::UnsupportedDeclarationKind {
                    kind: *kind,
                    span: declaration.name.span(),
                })
            }
        }
    }
}

/// Per-declaration emission state.
pub(crate) struct EmitContext<'a> {
    declaration: &'a Declaration,
    crate_path: syn::Path,
    debug_only: bool,
}

impl<'a> EmitContext<'a> {
    fn new(derive: &DeriveFixture, declaration: &'a Declaration) -> Self {
        Self {
            declaration,
            crate_path: declaration.crate_path(&derive.default_crate_path),
            debug_only: derive.options.wrap_in_debug_only_guard || declaration.options.debug_only,
        }
    }

    fn guard(&self) -> TokenStream {
        if self.debug_only {
            quote! { #[cfg(debug_assertions)] }
        } else {
            TokenStream::new()
        }
    }

    /// `<T as Sampleable>::sample()`
    fn sample_of(&self, ty: &syn::Type) -> TokenStream {
        let krate = &self.crate_path;
        quote! { <#ty as #krate::Sampleable>::sample() }
    }

    /// `Sampleable::sample()`, leaving the type to inference.
    fn inferred_sample(&self) -> TokenStream {
        let krate = &self.crate_path;
        quote! { #krate::Sampleable::sample() }
    }

    /// The declaration's generics, with a `Sampleable` bound on every sampled
    /// type when the declaration is generic.
    fn sampling_generics<'t>(
        &self,
        sampled: impl IntoIterator<Item = &'t syn::Type>,
    ) -> syn::Generics {
        let mut generics = self.declaration.generics.clone();
        if generics.params.is_empty() {
            return generics;
        }
        let krate = &self.crate_path;
        let where_clause = generics.make_where_clause();
        for ty in sampled {
            where_clause
                .predicates
                .push(syn::parse_quote!(#ty: #krate::Sampleable));
        }
        generics
    }

    fn conformance(&self, generics: &syn::Generics) -> TokenStream {
        let guard = self.guard();
        let krate = &self.crate_path;
        let name = &self.declaration.name;
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
        quote! {
            #guard
            #[automatically_derived]
            impl #impl_generics #krate::Sampleable for #name #ty_generics #where_clause {
                fn sample() -> Self {
                    Self::fixture()
                }
            }
        }
    }
}
