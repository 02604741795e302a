//! Value-carrying objects.
//!
//! [`Data`] is the base of everything that holds a value rather than
//! describing a scene. The typed leaves wrap a single value each.

use cortex_macros::RunTimeTyped;

use crate::{Object, type_ids};

/// Base of value-carrying objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, RunTimeTyped)]
#[cortex(id = type_ids::DATA)]
pub struct Data {
    #[cortex(base)]
    pub object: Object,
}

/// Boolean value.
#[derive(Debug, Clone, Default, PartialEq, RunTimeTyped)]
#[cortex(id = type_ids::BOOL_DATA)]
pub struct BoolData {
    #[cortex(base)]
    data: Data,
    value: bool,
}

/// 32-bit integer value.
#[derive(Debug, Clone, Default, PartialEq, RunTimeTyped)]
#[cortex(id = type_ids::INT_DATA)]
pub struct IntData {
    #[cortex(base)]
    data: Data,
    value: i32,
}

/// 32-bit float value.
#[derive(Debug, Clone, Default, PartialEq, RunTimeTyped)]
#[cortex(id = type_ids::FLOAT_DATA)]
pub struct FloatData {
    #[cortex(base)]
    data: Data,
    value: f32,
}

/// String value.
#[derive(Debug, Clone, Default, PartialEq, RunTimeTyped)]
#[cortex(id = type_ids::STRING_DATA)]
pub struct StringData {
    #[cortex(base)]
    data: Data,
    value: String,
}

/// Constructors and accessors shared by the single-value types.
macro_rules! typed_data {
    ($($ty:ident => $value:ty),* $(,)?) => {
        $(
            impl $ty {
                pub fn new(value: $value) -> Self {
                    Self {
                        data: Data::default(),
                        value,
                    }
                }

                pub fn readable(&self) -> &$value {
                    &self.value
                }

                pub fn writable(&mut self) -> &mut $value {
                    &mut self.value
                }

                pub fn into_inner(self) -> $value {
                    self.value
                }
            }

            impl From<$value> for $ty {
                fn from(value: $value) -> Self {
                    Self::new(value)
                }
            }
        )*
    };
}

typed_data! {
    BoolData => bool,
    IntData => i32,
    FloatData => f32,
    StringData => String,
}

impl From<&str> for StringData {
    fn from(value: &str) -> Self {
        Self::new(value.to_owned())
    }
}
