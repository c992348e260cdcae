//! Procedural macros for valida
//!
//! This crate provides the derive used in valida:
//!
//! - `#[derive(Entity)]` - lists the wrapper fields of a struct so the
//!   entity can validate all of them at once

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse_macro_input, Attribute, Data, DeriveInput, Fields, GenericArgument, LitStr,
    PathArguments, Type,
};

/// Type names recognised as wrapper fields without an explicit attribute.
const WRAPPER_TYPES: &[&str] = &[
    "Required",
    "NonRequired",
    "RequiredBase",
    "NonRequiredBase",
    "Wrapper",
];

/// Derive macro for entities
///
/// Implements `valida::Entity` for a struct with named fields. Every field
/// whose type is one of the wrapper aliases (`Required<..>`,
/// `NonRequired<..>`, `RequiredBase<..>`, `NonRequiredBase<..>`,
/// `Wrapper<..>`, or any of them inside `Option<..>`) becomes a member, in
/// declaration order.
///
/// # Attributes
///
/// Struct level:
///
/// - `#[entity(display_name = "...")]` - name used in the entity report
/// - `#[entity(review = path::to::fn)]` - report hook with the signature
///   `fn(&[ValidationError], &mut Report)`
///
/// Field level:
///
/// - `#[entity(member)]` - include a field of any type implementing
///   `ValueWrapper`
/// - `#[entity(skip)]` - leave a wrapper field out of validation
///
/// # Example
///
/// ```rust,ignore
/// use valida::prelude::*;
///
/// #[derive(Entity)]
/// #[entity(display_name = "User")]
/// struct User {
///     first_name: Required<FirstName>,
///     experience: NonRequired<Experience>,
///     #[entity(skip)]
///     draft_note: NonRequiredBase<String>,
/// }
///
/// let user = User { /* .. */ };
/// user.validate()?;
/// ```
#[proc_macro_derive(Entity, attributes(entity))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand_entity(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

#[derive(Default)]
struct EntityOptions {
    display_name: Option<LitStr>,
    review: Option<syn::Path>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldMode {
    Auto,
    Member,
    Skip,
}

fn expand_entity(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Entity can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "Entity can only be derived for structs",
            ))
        }
    };

    let options = parse_entity_options(&input.attrs)?;

    let mut members = Vec::new();
    for field in fields {
        let include = match parse_field_mode(&field.attrs)? {
            FieldMode::Skip => false,
            FieldMode::Member => true,
            FieldMode::Auto => is_wrapper_type(&field.ty),
        };
        if !include {
            continue;
        }

        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let field_name = ident.to_string();
        members.push(quote! {
            ::valida::Member::new(#field_name, &self.#ident)
        });
    }

    let display_name = options.display_name.map(|display_name| {
        quote! {
            fn display_name() -> ::std::string::String {
                ::std::string::String::from(#display_name)
            }
        }
    });

    let review = options.review.map(|review| {
        quote! {
            fn review_report(
                issues: &[::valida::ValidationError],
                report: &mut ::valida::Report,
            ) {
                #review(issues, report)
            }
        }
    });

    Ok(quote! {
        impl #impl_generics ::valida::Entity for #name #ty_generics #where_clause {
            #display_name

            fn members(&self) -> ::std::vec::Vec<::valida::Member<'_>> {
                ::std::vec![#(#members),*]
            }

            #review
        }
    })
}

fn parse_entity_options(attrs: &[Attribute]) -> syn::Result<EntityOptions> {
    let mut options = EntityOptions::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("entity")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("display_name") {
                options.display_name = Some(meta.value()?.parse()?);
                Ok(())
            } else if meta.path.is_ident("review") {
                let value = meta.value()?;
                // Accept both `review = path` and `review = "path"`
                let path = if value.peek(LitStr) {
                    value.parse::<LitStr>()?.parse()?
                } else {
                    value.parse()?
                };
                options.review = Some(path);
                Ok(())
            } else {
                Err(meta.error("expected `display_name` or `review`"))
            }
        })?;
    }

    Ok(options)
}

fn parse_field_mode(attrs: &[Attribute]) -> syn::Result<FieldMode> {
    let mut mode = FieldMode::Auto;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("entity")) {
        attr.parse_nested_meta(|meta| {
            let requested = if meta.path.is_ident("skip") {
                FieldMode::Skip
            } else if meta.path.is_ident("member") {
                FieldMode::Member
            } else {
                return Err(meta.error("expected `skip` or `member`"));
            };

            if mode != FieldMode::Auto && mode != requested {
                return Err(meta.error("`skip` and `member` are mutually exclusive"));
            }
            mode = requested;
            Ok(())
        })?;
    }

    Ok(mode)
}

/// Whether the last path segment names a wrapper, looking through one
/// `Option<..>`.
fn is_wrapper_type(ty: &Type) -> bool {
    let Some(segment) = last_segment(ty) else {
        return false;
    };
    let ident = segment.ident.to_string();

    if WRAPPER_TYPES.contains(&ident.as_str()) {
        return true;
    }

    if ident == "Option" {
        if let PathArguments::AngleBracketed(args) = &segment.arguments {
            if let Some(GenericArgument::Type(inner)) = args.args.first() {
                return last_segment(inner)
                    .map(|inner| WRAPPER_TYPES.contains(&inner.ident.to_string().as_str()))
                    .unwrap_or(false);
            }
        }
    }

    false
}

fn last_segment(ty: &Type) -> Option<&syn::PathSegment> {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => type_path.path.segments.last(),
        Type::Group(group) => last_segment(&group.elem),
        Type::Paren(paren) => last_segment(&paren.elem),
        _ => None,
    }
}
