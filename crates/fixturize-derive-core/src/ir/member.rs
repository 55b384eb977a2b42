use darling::FromField;

use super::attrs::FieldOptions;
use crate::misc::is_type;
use crate::visibility::Visibility;

/// How a member holds its value, which decides whether it takes part in
/// generated construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage {
    /// Plain per-instance storage; the only kind that is constructed.
    Stored,
    /// Belongs to the type rather than the instance.
    Static,
    /// Filled on first use (`OnceCell` and friends).
    Lazy,
    /// Derived on access, no data of its own (`PhantomData`).
    Computed,
    /// Writes go through change hooks.
    Observed,
}

impl Storage {
    /// Whether the member is still a field of the instance that a struct
    /// literal has to name.
    pub const fn is_instance_field(self) -> bool {
        !matches!(self, Self::Static)
    }
}

/// One name introduced by a member declaration.
///
/// Several bindings may share one declaration (`a, b: String`), in which case
/// only some of them carry the type annotation or initializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub name: syn::Ident,
    pub ty: Option<syn::Type>,
    pub has_initializer: bool,
}

impl Binding {
    pub fn new(name: syn::Ident, ty: syn::Type) -> Self {
        Self {
            name,
            ty: Some(ty),
            has_initializer: false,
        }
    }

    pub fn with_initializer(mut self) -> Self {
        self.has_initializer = true;
        self
    }
}

/// A member declaration of a record, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDecl {
    pub bindings: Vec<Binding>,
    pub storage: Storage,
    pub visibility: Option<Visibility>,
}

impl MemberDecl {
    pub fn stored(binding: Binding, visibility: Option<Visibility>) -> Self {
        Self {
            bindings: vec![binding],
            storage: Storage::Stored,
            visibility,
        }
    }

    /// Lower a named struct field.
    pub fn from_field(field: &syn::Field) -> darling::Result<Self> {
        let options = FieldOptions::from_field(field)?;
        let Some(name) = field.ident.clone() else {
            return Err(darling::Error::custom("expected a named field").with_span(field));
        };

        let storage = storage_of(&options, &field.ty).map_err(|err| err.with_span(field))?;
        if options.default && storage != Storage::Stored {
            return Err(darling::Error::custom(
                "`default` has no effect on a field that is left out of construction",
            )
            .with_span(field));
        }

        Ok(Self {
            bindings: vec![Binding {
                name,
                ty: Some(field.ty.clone()),
                has_initializer: options.default,
            }],
            storage,
            visibility: Some(Visibility::from(&field.vis)),
        })
    }
}

const LAZY_TYPES: [&str; 4] = ["OnceCell", "OnceLock", "LazyCell", "LazyLock"];

fn storage_of(options: &FieldOptions, ty: &syn::Type) -> darling::Result<Storage> {
    let explicit: Vec<Storage> = [
        (options.lazy, Storage::Lazy),
        (options.computed, Storage::Computed),
        (options.observed, Storage::Observed),
    ]
    .into_iter()
    .filter_map(|(set, storage)| set.then_some(storage))
    .collect();

    match explicit.as_slice() {
        [] if LAZY_TYPES.iter().any(|name| is_type(ty, *name)) => Ok(Storage::Lazy),
        [] if is_type(ty, "PhantomData") => Ok(Storage::Computed),
        [] => Ok(Storage::Stored),
        [storage] => Ok(*storage),
        _ => Err(darling::Error::custom(
            "at most one of `lazy`, `computed` and `observed` may be set",
        )),
    }
}
