use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::{DeriveFixture, EmitContext, Expansion, Fragment, FragmentKind};
use crate::field::{FieldModel, extract_fields};
use crate::ir::{Declaration, MemberDecl};
use crate::misc::replace_self;
use crate::visibility::{Visibility, VisibilityLevel, compute_effective_visibility};

/// What the record path learns about a declaration before emitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordScan {
    /// Constructible fields, with `Self` in their types spelled out.
    pub fields: Vec<FieldModel>,
    /// Instance fields left out of construction.
    pub fillers: Vec<syn::Ident>,
    /// Visibility of the sample accessor.
    pub type_visibility: Visibility,
    /// Visibility of every generated member that mentions field types.
    pub effective_visibility: Visibility,
}

impl RecordScan {
    /// A record without constructible fields gets no constructor; its
    /// instances are built with a struct literal instead.
    pub fn has_constructor(&self) -> bool {
        !self.fields.is_empty()
    }
}

impl DeriveFixture {
    pub fn scan_record(&self, declaration: &Declaration, members: &[MemberDecl]) -> RecordScan {
        let mut extraction = extract_fields(members, self.options.extract);
        let self_ty = declaration.self_ty();
        for field in &mut extraction.fields {
            replace_self(&mut field.declared_type, &self_ty);
        }
        let type_visibility = declaration.type_visibility();
        let effective_visibility =
            compute_effective_visibility(type_visibility.as_ref(), &extraction.fields);
        RecordScan {
            fields: extraction.fields,
            fillers: extraction.fillers,
            type_visibility: type_visibility.unwrap_or_else(Visibility::internal),
            effective_visibility,
        }
    }
}

impl EmitContext<'_> {
    pub(crate) fn emit_record(&self, scan: &RecordScan) -> Expansion {
        let generics = self.sampling_generics(scan.fields.iter().map(|f| &f.declared_type));

        let mut fragments = Vec::with_capacity(4);
        if scan.has_constructor() {
            fragments.push(self.constructor(scan));
        }
        fragments.push(self.record_sample_accessor(scan));
        fragments.push(self.builder(scan, &generics));
        fragments.push(self.factory(scan));

        Expansion {
            name: self.declaration.name.clone(),
            conformance: self.conformance(&generics),
            generics,
            fragments,
        }
    }

    fn constructor(&self, scan: &RecordScan) -> Fragment {
        let guard = self.guard();
        let vis = &scan.effective_visibility;
        let krate = &self.crate_path;

        let params = scan.fields.iter().map(|field| {
            let param = field.parameter_name();
            let ty = &field.declared_type;
            if field.has_default_value {
                quote! { #param: ::core::option::Option<#ty> }
            } else {
                quote! { #param: #ty }
            }
        });
        let inits = scan.fields.iter().map(|field| {
            let name = &field.name;
            let param = field.parameter_name();
            let ty = &field.declared_type;
            if field.has_default_value {
                quote! { #name: #param.unwrap_or_else(<#ty as #krate::Sampleable>::sample) }
            } else {
                quote! { #name: #param }
            }
        });
        let fillers = filler_inits(scan);
        let mut doc = format!("Builds a `{}` from one argument per field.", self.declaration.name);
        if scan.fields.iter().any(|f| f.has_default_value) {
            doc.push_str(" `None` picks the sample for fields with a default.");
        }

        Fragment::new(
            FragmentKind::Constructor,
            quote! {
                #guard
                #[doc = #doc]
                #[allow(clippy::too_many_arguments, non_snake_case)]
                #vis fn fixture_new(#(#params),*) -> Self {
                    Self {
                        #(#inits,)*
                        #(#fillers,)*
                    }
                }
            },
        )
    }

    fn record_sample_accessor(&self, scan: &RecordScan) -> Fragment {
        let guard = self.guard();
        let vis = &scan.type_visibility;
        let args = scan.fields.iter().map(|field| {
            if field.has_default_value {
                quote! { ::core::option::Option::None }
            } else {
                self.sample_of(&field.declared_type)
            }
        });
        let body = construct(scan, args);
        let doc = format!("A sample `{}` built from sample field values.", self.declaration.name);

        Fragment::new(
            FragmentKind::SampleAccessor,
            quote! {
                #guard
                #[doc = #doc]
                #vis fn fixture() -> Self {
                    #body
                }
            },
        )
    }

    fn builder(&self, scan: &RecordScan, sampling: &syn::Generics) -> Fragment {
        let guard = self.guard();
        let vis = &scan.effective_visibility;
        let name = &self.declaration.name;
        let builder = self.declaration.builder_name();
        let generics = &self.declaration.generics;
        let struct_where = &generics.where_clause;
        let (_, self_ty_generics, _) = generics.split_for_impl();
        let (impl_generics, ty_generics, where_clause) = sampling.split_for_impl();

        let fields = scan.fields.iter().map(|field| {
            let name = &field.name;
            let ty = &field.declared_type;
            quote! { #vis #name: #ty }
        });
        let seeds = scan.fields.iter().map(|field| {
            let name = &field.name;
            let sample = self.sample_of(&field.declared_type);
            quote! { #name: #sample }
        });
        let (marker_field, marker_seed) = if generics.params.is_empty() {
            (TokenStream::new(), TokenStream::new())
        } else {
            let marker = marker_name(scan);
            (
                quote! { #marker: ::core::marker::PhantomData<fn() -> #name #self_ty_generics> },
                quote! { #marker: ::core::marker::PhantomData },
            )
        };

        // Package-wide builders also get a named constructor.
        let new_fn = if vis.level() >= VisibilityLevel::Package {
            quote! {
                #guard
                #[automatically_derived]
                impl #impl_generics #builder #ty_generics #where_clause {
                    #vis fn new() -> Self {
                        <Self as ::core::default::Default>::default()
                    }
                }
            }
        } else {
            TokenStream::new()
        };
        let doc = format!(
            "Sample-seeded fields of `{name}`, handed to the `{name}::fixture_with` callback."
        );

        Fragment::new(
            FragmentKind::Builder,
            quote! {
                #guard
                #[doc = #doc]
                #[allow(non_snake_case)]
                #vis struct #builder #generics #struct_where {
                    #(#fields,)*
                    #marker_field
                }

                #guard
                #[automatically_derived]
                impl #impl_generics ::core::default::Default for #builder #ty_generics #where_clause {
                    fn default() -> Self {
                        Self {
                            #(#seeds,)*
                            #marker_seed
                        }
                    }
                }

                #new_fn
            },
        )
    }

    fn factory(&self, scan: &RecordScan) -> Fragment {
        let guard = self.guard();
        let vis = &scan.effective_visibility;
        let builder = self.declaration.builder_name();
        let (_, ty_generics, _) = self.declaration.generics.split_for_impl();

        let args = scan.fields.iter().map(|field| {
            let name = &field.name;
            if field.has_default_value {
                quote! { ::core::option::Option::Some(builder.#name) }
            } else {
                quote! { builder.#name }
            }
        });
        let body = construct(scan, args);
        let doc = format!(
            "A sample `{}` whose fields are first adjusted by `configure`.",
            self.declaration.name
        );

        Fragment::new(
            FragmentKind::Factory,
            quote! {
                #guard
                #[doc = #doc]
                #vis fn fixture_with(
                    configure: impl ::core::ops::FnOnce(&mut #builder #ty_generics),
                ) -> Self {
                    let mut builder = <#builder #ty_generics as ::core::default::Default>::default();
                    configure(&mut builder);
                    #body
                }
            },
        )
    }
}

/// Name of the builder's type marker, kept clear of every field name.
fn marker_name(scan: &RecordScan) -> syn::Ident {
    let mut marker = format_ident!("__fixture_marker");
    while scan.fields.iter().any(|f| f.name == marker) {
        marker = format_ident!("_{}", marker);
    }
    marker
}

fn filler_inits(scan: &RecordScan) -> Vec<TokenStream> {
    scan.fillers
        .iter()
        .map(|name| quote! { #name: ::core::default::Default::default() })
        .collect()
}

/// An instance built from `args`, one per constructible field.
fn construct(scan: &RecordScan, args: impl Iterator<Item = TokenStream>) -> TokenStream {
    if scan.has_constructor() {
        quote! { Self::fixture_new(#(#args),*) }
    } else {
        let fillers = filler_inits(scan);
        quote! { Self { #(#fillers),* } }
    }
}
