//! Attribute parsing for the Cortex derive.

use syn::{Attribute, Expr, Field, LitStr, Member, Type};

/// Parsed `#[cortex(...)]` attributes on a type.
#[derive(Default)]
pub struct TypeAttrs {
    /// Type id expression (required).
    pub id: Option<Expr>,
    /// Declared base type. Inferred from the `#[cortex(base)]` field when absent.
    pub base: Option<Type>,
    /// Override type name (default: Rust struct name)
    pub name: Option<String>,
}

impl TypeAttrs {
    /// Parse attributes from a list of `#[cortex(...)]` attributes.
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("cortex") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("id") {
                    result.id = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("base") {
                    result.base = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("name") {
                    let value: LitStr = meta.value()?.parse()?;
                    result.name = Some(value.value());
                } else {
                    return Err(meta.error(format!(
                        "unknown cortex attribute: {}",
                        meta.path.get_ident().map(|i| i.to_string()).unwrap_or_default()
                    )));
                }
                Ok(())
            })?;
        }

        Ok(result)
    }
}

/// Role a field plays in the hierarchy.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    /// Plain data.
    Data,
    /// `#[cortex(base)]`: holds the base part.
    Base,
    /// `#[cortex(identity)]`: holds the root part's `Identity`.
    Identity,
}

/// Parse the `#[cortex(...)]` attributes on a field.
pub fn field_role(field: &Field) -> syn::Result<FieldRole> {
    let mut role = FieldRole::Data;

    for attr in &field.attrs {
        if !attr.path().is_ident("cortex") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            let next = if meta.path.is_ident("base") {
                FieldRole::Base
            } else if meta.path.is_ident("identity") {
                FieldRole::Identity
            } else {
                return Err(meta.error(format!(
                    "unknown cortex field attribute: {}",
                    meta.path.get_ident().map(|i| i.to_string()).unwrap_or_default()
                )));
            };
            if role != FieldRole::Data && role != next {
                return Err(meta.error("a field cannot be both #[cortex(base)] and #[cortex(identity)]"));
            }
            role = next;
            Ok(())
        })?;
    }

    Ok(role)
}

/// A field with a role, and how to reach it.
pub struct RoleField {
    pub member: Member,
    pub ty: Type,
}
