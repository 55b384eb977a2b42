use proc_macro2::Span;

use crate::ir::UnsupportedKind;

/// Reasons a declaration produces no generated code.
///
/// Either error is fatal for the declaration it was raised on and leaves
/// every other declaration in the crate untouched.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SynthesisError {
    #[error("`Fixture` needs at least one enum variant to build a sample from")]
    NoCases { span: Span },
    #[error("`Fixture` can only be derived for structs with named fields, unit structs and enums")]
    UnsupportedDeclarationKind { kind: UnsupportedKind, span: Span },
}

impl SynthesisError {
    /// Stable identifier of the error kind.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NoCases { .. } => "fixture::no_cases",
            Self::UnsupportedDeclarationKind { .. } => "fixture::unsupported_declaration",
        }
    }

    /// Where the diagnostic is reported.
    pub const fn span(&self) -> Span {
        match self {
            Self::NoCases { span } | Self::UnsupportedDeclarationKind { span, .. } => *span,
        }
    }
}

impl From<SynthesisError> for darling::Error {
    fn from(err: SynthesisError) -> Self {
        syn::Error::new(err.span(), err.to_string()).into()
    }
}
