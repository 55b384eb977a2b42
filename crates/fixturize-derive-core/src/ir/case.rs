/// Payload carried by one case of a tagged union.
///
/// Rust variants label all of their fields or none of them, so the label
/// choice is made per case rather than per parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Unit,
    Unlabeled(Vec<syn::Type>),
    Labeled(Vec<(syn::Ident, syn::Type)>),
}

impl Payload {
    pub fn types(&self) -> Vec<&syn::Type> {
        match self {
            Self::Unit => Vec::new(),
            Self::Unlabeled(types) => types.iter().collect(),
            Self::Labeled(params) => params.iter().map(|(_, ty)| ty).collect(),
        }
    }
}

/// One alternative of a tagged union, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseModel {
    pub name: syn::Ident,
    pub payload: Payload,
}

impl CaseModel {
    pub fn unit(name: syn::Ident) -> Self {
        Self {
            name,
            payload: Payload::Unit,
        }
    }

    /// Lower an enum variant. Variants take no `#[fixture(...)]` options,
    /// neither on themselves nor on their fields.
    pub fn from_variant(variant: &syn::Variant) -> darling::Result<Self> {
        let mut errors = darling::Error::accumulator();
        let attrs = variant
            .attrs
            .iter()
            .chain(variant.fields.iter().flat_map(|f| &f.attrs));
        for attr in attrs.filter(|attr| attr.path().is_ident("fixture")) {
            errors.push(
                darling::Error::custom("`#[fixture(...)]` has no effect on enum variants or their fields")
                    .with_span(attr),
            );
        }

        let payload = match &variant.fields {
            syn::Fields::Unit => Payload::Unit,
            syn::Fields::Unnamed(fields) => {
                Payload::Unlabeled(fields.unnamed.iter().map(|f| f.ty.clone()).collect())
            }
            syn::Fields::Named(fields) => Payload::Labeled(
                fields
                    .named
                    .iter()
                    .filter_map(|f| f.ident.clone().map(|ident| (ident, f.ty.clone())))
                    .collect(),
            ),
        };
        errors.finish_with(Self {
            name: variant.ident.clone(),
            payload,
        })
    }
}
