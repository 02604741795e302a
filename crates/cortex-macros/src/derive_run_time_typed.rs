//! Implementation of the `#[derive(RunTimeTyped)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{ToTokens, quote};
use syn::{Data, DeriveInput, Expr, ExprLit, Field, Lit, Member, parse_macro_input};

use crate::attrs::{FieldRole, RoleField, TypeAttrs, field_role};

pub fn derive_run_time_typed_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_run_time_typed_inner(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_run_time_typed_inner(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "RunTimeTyped cannot be derived for generic types; each type needs its own id",
        ));
    }

    let attrs = TypeAttrs::from_attrs(&input.attrs)?;
    let fields = find_role_fields(input)?;
    let id = attrs.id.as_ref().ok_or_else(|| {
        syn::Error::new_spanned(name, "missing type id: add #[cortex(id = ...)]")
    })?;
    let type_name = attrs.name.clone().unwrap_or_else(|| name.to_string());

    match (&attrs.base, &fields.base) {
        (Some(declared), None) => {
            return Err(syn::Error::new_spanned(
                declared,
                "a base type needs a field marked #[cortex(base)] holding the base part",
            ));
        }
        (Some(declared), Some(field)) if !same_tokens(declared, &field.ty) => {
            return Err(syn::Error::new_spanned(
                declared,
                "declared base does not match the type of the #[cortex(base)] field",
            ));
        }
        _ => {}
    }

    let identity = match (&fields.base, &fields.identity) {
        (Some(base), None) => IdentitySource::Base(&base.member),
        (None, Some((_, field))) => IdentitySource::Own(&field.member),
        (Some(_), Some((field, _))) => {
            return Err(syn::Error::new_spanned(
                role_span(field),
                "a derived type shares the identity of its base part; remove #[cortex(identity)]",
            ));
        }
        (None, None) => {
            return Err(syn::Error::new_spanned(
                name,
                "a root type needs a field marked #[cortex(identity)] holding a cortex_core::Identity",
            ));
        }
    };

    let id_tokens = type_id_tokens(id);
    let run_time_typed = generate_run_time_typed(name, fields.base.as_ref(), identity);
    let description = generate_type_description(name, &type_name, &id_tokens, fields.base.as_ref());

    Ok(quote! {
        #run_time_typed
        #description
    })
}

/// Where the generated `identity()` finds the root part's `Identity`.
#[derive(Clone, Copy)]
enum IdentitySource<'a> {
    Own(&'a Member),
    Base(&'a Member),
}

/// The fields marked `#[cortex(base)]` and `#[cortex(identity)]`.
struct RoleFields<'a> {
    base: Option<RoleField>,
    identity: Option<(&'a Field, RoleField)>,
}

/// Find the single base field and the single identity field.
fn find_role_fields(input: &DeriveInput) -> syn::Result<RoleFields<'_>> {
    let data = match &input.data {
        Data::Struct(data) => data,
        Data::Enum(data) => {
            return Err(syn::Error::new_spanned(
                data.enum_token,
                "RunTimeTyped can only be derived for structs",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new_spanned(
                data.union_token,
                "RunTimeTyped can only be derived for structs",
            ));
        }
    };

    let mut found = RoleFields {
        base: None,
        identity: None,
    };
    for (index, field) in data.fields.iter().enumerate() {
        let role = field_role(field)?;
        if role == FieldRole::Data {
            continue;
        }

        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(index.into()),
        };
        let role_field = RoleField {
            member,
            ty: field.ty.clone(),
        };

        match role {
            FieldRole::Base if found.base.is_some() => {
                return Err(syn::Error::new_spanned(
                    role_span(field),
                    "only one field can be marked #[cortex(base)]; the hierarchy is single inheritance",
                ));
            }
            FieldRole::Base => found.base = Some(role_field),
            FieldRole::Identity if found.identity.is_some() => {
                return Err(syn::Error::new_spanned(
                    role_span(field),
                    "only one field can be marked #[cortex(identity)]",
                ));
            }
            FieldRole::Identity => found.identity = Some((field, role_field)),
            FieldRole::Data => {}
        }
    }

    Ok(found)
}

/// Named fields are reported at their name, tuple fields at their type.
fn role_span(field: &Field) -> TokenStream2 {
    match &field.ident {
        Some(ident) => ident.to_token_stream(),
        None => field.ty.to_token_stream(),
    }
}

fn same_tokens(a: &syn::Type, b: &syn::Type) -> bool {
    a.to_token_stream().to_string() == b.to_token_stream().to_string()
}

/// Integer literals are wrapped in `TypeId`; anything else must already be one.
fn type_id_tokens(id: &Expr) -> TokenStream2 {
    match id {
        Expr::Lit(ExprLit {
            lit: Lit::Int(lit), ..
        }) => quote! { ::cortex_core::TypeId(#lit) },
        other => quote! { #other },
    }
}

/// Generate the `RunTimeTyped` implementation.
fn generate_run_time_typed(
    name: &syn::Ident,
    base_field: Option<&RoleField>,
    identity: IdentitySource<'_>,
) -> TokenStream2 {
    let forward = match base_field {
        Some(RoleField { member, .. }) => quote! {
            ::cortex_core::RunTimeTyped::view(&self.#member, target)
        },
        None => quote! { ::core::option::Option::None },
    };

    let identity = match identity {
        IdentitySource::Own(member) => quote! {
            ::core::option::Option::Some(&self.#member)
        },
        IdentitySource::Base(member) => quote! {
            ::cortex_core::RunTimeTyped::identity(&self.#member)
        },
    };

    quote! {
        impl ::cortex_core::RunTimeTyped for #name {
            fn type_id(&self) -> ::cortex_core::TypeId {
                ::cortex_core::RunTimeTyped::identity(self)
                    .and_then(::cortex_core::Identity::type_id)
                    .unwrap_or(<Self as ::cortex_core::TypeDescription>::TYPE_ID)
            }

            fn type_name(&self) -> &'static str {
                ::cortex_core::RunTimeTyped::identity(self)
                    .and_then(::cortex_core::Identity::type_name)
                    .unwrap_or(<Self as ::cortex_core::TypeDescription>::TYPE_NAME)
            }

            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            fn view(&self, target: ::cortex_core::TypeId) -> ::core::option::Option<&dyn ::core::any::Any> {
                if target == <Self as ::cortex_core::TypeDescription>::TYPE_ID {
                    ::core::option::Option::Some(self)
                } else {
                    #forward
                }
            }

            fn identity(&self) -> ::core::option::Option<&::cortex_core::Identity> {
                #identity
            }
        }
    }
}

/// Generate the `TypeDescription` implementation.
fn generate_type_description(
    name: &syn::Ident,
    type_name: &str,
    id_tokens: &TokenStream2,
    base_field: Option<&RoleField>,
) -> TokenStream2 {
    let Some(RoleField { ty: base, .. }) = base_field else {
        return quote! {
            impl ::cortex_core::TypeDescription for #name {
                type BaseClass = dyn ::cortex_core::RunTimeTyped;

                const TYPE_ID: ::cortex_core::TypeId = #id_tokens;
                const TYPE_NAME: &'static str = #type_name;
                const BASE_TYPE_ID: ::cortex_core::TypeId = ::cortex_core::type_ids::RUN_TIME_TYPED;
                const BASE_TYPE_NAME: &'static str = ::cortex_core::type_ids::RUN_TIME_TYPED_NAME;

                fn register(
                    registry: &::cortex_core::TypeRegistry,
                ) -> ::core::result::Result<(), ::cortex_core::RegistrationError> {
                    registry.register_type(Self::TYPE_ID, Self::BASE_TYPE_ID, Self::TYPE_NAME)
                }
            }
        };
    };

    quote! {
        impl ::cortex_core::TypeDescription for #name {
            type BaseClass = #base;

            const TYPE_ID: ::cortex_core::TypeId = #id_tokens;
            const TYPE_NAME: &'static str = #type_name;
            const BASE_TYPE_ID: ::cortex_core::TypeId = <#base as ::cortex_core::TypeDescription>::TYPE_ID;
            const BASE_TYPE_NAME: &'static str = <#base as ::cortex_core::TypeDescription>::TYPE_NAME;

            fn register(
                registry: &::cortex_core::TypeRegistry,
            ) -> ::core::result::Result<(), ::cortex_core::RegistrationError> {
                <#base as ::cortex_core::TypeDescription>::register(registry)?;
                registry.register_type(Self::TYPE_ID, Self::BASE_TYPE_ID, Self::TYPE_NAME)
            }
        }
    }
}
