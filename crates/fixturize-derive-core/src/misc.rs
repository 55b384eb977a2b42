use syn::visit_mut::{self, VisitMut};

/// Whether the last path segment of `ty` is `name`, ignoring generic arguments.
///
/// # Example
///
/// ```
/// use fixturize_derive_core::misc::is_type;
/// let ty = syn::parse_str::<syn::Type>("std::sync::OnceLock<u32>").unwrap();
/// assert!(is_type(&ty, "OnceLock"));
/// ```
pub fn is_type<I>(ty: &syn::Type, name: &I) -> bool
where
    I: ?Sized,
    syn::Ident: PartialEq<I>,
{
    if let syn::Type::Path(syn::TypePath { path, .. }) = ty {
        if let Some(seg) = path.segments.last() {
            return seg.ident == *name;
        }
    }
    false
}

/// Rewrite every `Self` in `ty` to `replacement`.
///
/// Types copied out of a declaration into sibling items (the builder) would
/// otherwise name the sibling instead of the declaration.
pub fn replace_self(ty: &mut syn::Type, replacement: &syn::Type) {
    SelfReplacer { replacement }.visit_type_mut(ty);
}

struct SelfReplacer<'a> {
    replacement: &'a syn::Type,
}

impl VisitMut for SelfReplacer<'_> {
    fn visit_type_mut(&mut self, ty: &mut syn::Type) {
        if let syn::Type::Path(syn::TypePath { qself: None, path }) = ty {
            let starts_with_self = path
                .segments
                .first()
                .is_some_and(|seg| seg.ident == "Self" && seg.arguments.is_none());
            if path.leading_colon.is_none() && starts_with_self {
                let replacement = self.replacement;
                if path.segments.len() == 1 {
                    *ty = replacement.clone();
                    return;
                }
                // `Self::Assoc` becomes `<Name<..>>::Assoc`.
                let rest = path.segments.iter().skip(1);
                *ty = syn::parse_quote!(<#replacement>::#(#rest)::*);
            }
        }
        visit_mut::visit_type_mut(self, ty);
    }
}

/// Name of the generated builder type for `name`.
pub fn builder_name(name: &syn::Ident) -> syn::Ident {
    quote::format_ident!("{}FixtureBuilder", name, span = name.span())
}
