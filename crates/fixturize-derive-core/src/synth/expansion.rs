use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    /// `fixture_new(...)`, one parameter per constructible field.
    Constructor,
    /// `fixture()`, the default sample.
    SampleAccessor,
    /// The mutable builder type and its seeding impls.
    Builder,
    /// `fixture_with(configure)`.
    Factory,
}

impl FragmentKind {
    /// Whether the fragment lives in the type's inherent impl rather than
    /// next to the type.
    pub const fn is_member(self) -> bool {
        !matches!(self, Self::Builder)
    }
}

#[derive(Debug, Clone)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub tokens: TokenStream,
}

impl Fragment {
    pub fn new(kind: FragmentKind, tokens: TokenStream) -> Self {
        Self { kind, tokens }
    }
}

/// Everything generated for one declaration, in emission order.
#[derive(Debug, Clone)]
pub struct Expansion {
    pub name: syn::Ident,
    /// Generics of the inherent impl, including `Sampleable` bounds.
    pub generics: syn::Generics,
    pub fragments: Vec<Fragment>,
    /// The `Sampleable` impl for the type.
    pub conformance: TokenStream,
}

impl Expansion {
    pub fn kinds(&self) -> Vec<FragmentKind> {
        self.fragments.iter().map(|f| f.kind).collect()
    }

    pub fn fragment(&self, kind: FragmentKind) -> Option<&Fragment> {
        self.fragments.iter().find(|f| f.kind == kind)
    }
}

impl ToTokens for Expansion {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let name = &self.name;
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();
        let members = self
            .fragments
            .iter()
            .filter(|f| f.kind.is_member())
            .map(|f| &f.tokens);
        let items = self
            .fragments
            .iter()
            .filter(|f| !f.kind.is_member())
            .map(|f| &f.tokens);
        let conformance = &self.conformance;

        tokens.extend(quote! {
            #[automatically_derived]
            impl #impl_generics #name #ty_generics #where_clause {
                #(#members)*
            }
            #(#items)*
            #conformance
        });
    }
}
