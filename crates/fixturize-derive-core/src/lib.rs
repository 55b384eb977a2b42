//! Code generation behind `#[derive(Fixture)]`.
//!
//! Lowering ([`ir`]) turns a `syn::DeriveInput` into a [`ir::Declaration`];
//! field extraction ([`field`]) and the visibility rule ([`visibility`]) feed
//! the synthesizer ([`synth`]), which produces the generated items.

pub mod error;
pub mod field;
pub mod ir;
pub mod misc;
pub mod synth;
pub mod visibility;

pub mod prelude {
    pub use crate::error::SynthesisError;
    pub use crate::field::{ExtractOptions, Extraction, FieldModel, extract_fields};
    pub use crate::ir::*;
    pub use crate::synth::{DeriveFixture, Expansion, Fragment, FragmentKind, SynthesisOptions};
    pub use crate::visibility::{Visibility, VisibilityLevel, compute_effective_visibility};
}
