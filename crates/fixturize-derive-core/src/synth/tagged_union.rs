use proc_macro2::TokenStream;
use quote::quote;

use super::{EmitContext, Expansion, Fragment, FragmentKind};
use crate::error::SynthesisError;
use crate::ir::{CaseModel, Payload};
use crate::visibility::Visibility;

impl EmitContext<'_> {
    /// The sample of a tagged union is its first case, with every payload
    /// value sampled.
    pub(crate) fn emit_tagged_union(
        &self,
        cases: &[CaseModel],
    ) -> Result<Expansion, SynthesisError> {
        let Some(first) = cases.first() else {
            return Err(SynthesisError::NoCases {
                span: self.declaration.name.span(),
            });
        };

        let guard = self.guard();
        let vis = self
            .declaration
            .type_visibility()
            .unwrap_or_else(Visibility::internal);
        let value = self.case_sample(first);
        let doc = format!(
            "A sample `{}`: the `{}` variant with sample values.",
            self.declaration.name, first.name
        );
        let accessor = Fragment::new(
            FragmentKind::SampleAccessor,
            quote! {
                #guard
                #[doc = #doc]
                #vis fn fixture() -> Self {
                    #value
                }
            },
        );

        let generics = self.sampling_generics(first.payload.types());
        Ok(Expansion {
            name: self.declaration.name.clone(),
            conformance: self.conformance(&generics),
            generics,
            fragments: vec![accessor],
        })
    }

    fn case_sample(&self, case: &CaseModel) -> TokenStream {
        let variant = &case.name;
        match &case.payload {
            Payload::Unit => quote! { Self::#variant },
            Payload::Unlabeled(types) => {
                let values = types.iter().map(|_| self.inferred_sample());
                quote! { Self::#variant(#(#values),*) }
            }
            Payload::Labeled(params) => {
                let values = params.iter().map(|(label, _)| {
                    let sample = self.inferred_sample();
                    quote! { #label: #sample }
                });
                quote! { Self::#variant { #(#values),* } }
            }
        }
    }
}
