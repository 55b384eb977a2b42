//! The declaration model the synthesizer consumes, and its lowering from
//! `syn::DeriveInput`.

mod attrs;
mod case;
mod declaration;
mod member;

pub use attrs::{FieldOptions, FixtureOptions, VisibilityOption};
pub use case::{CaseModel, Payload};
pub use declaration::{Declaration, DeclarationKind, UnsupportedKind};
pub use member::{Binding, MemberDecl, Storage};
