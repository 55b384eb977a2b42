//! Normalized fields eligible for generated construction.

use quote::format_ident;

use crate::ir::{MemberDecl, Storage};
use crate::visibility::Visibility;

/// One constructible instance field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldModel {
    pub name: syn::Ident,
    pub declared_type: syn::Type,
    pub has_default_value: bool,
    pub visibility: Option<Visibility>,
}

impl FieldModel {
    /// Constructor parameter for this field: `fixture` directly followed by
    /// the field name (`id` becomes `fixtureid`).
    pub fn parameter_name(&self) -> syn::Ident {
        format_ident!("fixture{}", self.name, span = self.name.span())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Let a binding in a multi-name group without its own type annotation
    /// take the type and initializer of the group's last binding. When off,
    /// such bindings are dropped since their type cannot be spelled.
    pub inherit_group_annotations: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            inherit_group_annotations: true,
        }
    }
}

/// Result of field extraction for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Constructible fields, in source order.
    pub fields: Vec<FieldModel>,
    /// Instance fields left out of construction; generated code initializes
    /// them with `Default::default()`.
    pub fillers: Vec<syn::Ident>,
}

pub fn extract_fields(members: &[MemberDecl], options: ExtractOptions) -> Extraction {
    let mut extraction = Extraction::default();
    for member in members {
        match member.storage {
            Storage::Stored => expand_bindings(member, options, &mut extraction.fields),
            storage if storage.is_instance_field() => extraction
                .fillers
                .extend(member.bindings.iter().map(|b| b.name.clone())),
            _ => {}
        }
    }
    extraction
}

fn expand_bindings(member: &MemberDecl, options: ExtractOptions, out: &mut Vec<FieldModel>) {
    let Some(last) = member.bindings.last() else {
        return;
    };

    for binding in &member.bindings {
        let (declared_type, has_default_value) = match &binding.ty {
            Some(ty) => (ty.clone(), binding.has_initializer),
            None if options.inherit_group_annotations => match &last.ty {
                Some(ty) => (ty.clone(), binding.has_initializer || last.has_initializer),
                None => continue,
            },
            None => continue,
        };

        out.push(FieldModel {
            name: binding.name.clone(),
            declared_type,
            has_default_value,
            visibility: member.visibility.clone(),
        });
    }
}
