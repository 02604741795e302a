//! Integer type identity and the partitioning of the id space.
//!
//! This module provides [`TypeId`], a 32-bit identifier that names exactly one
//! registered type, and [`TypeIdRange`], which carves the id space into a core
//! range and per-extension ranges so that independently compiled components
//! never hand out the same id.
//!
//! # Layout
//!
//! ```text
//! 0                 INVALID
//! 1 ..= 99_999      core library
//! 100_000 ..        extensions (GL, RI, Nuke, Maya, Houdini, Scene, ...)
//! 400_000 ..        third-party user extensions
//! ```
//!
//! # Examples
//!
//! ```
//! use cortex_core::{TypeId, ranges};
//!
//! let id = TypeId(111_001);
//! assert!(ranges::HOUDINI.contains(id));
//! assert!(!ranges::CORE.contains(id));
//! assert!(TypeId::INVALID.is_invalid());
//! ```

use std::fmt;

/// Identifier of a registered type.
///
/// Ids are only meaningful inside one running process. Persisted formats
/// should key off the type name instead.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct TypeId(pub u32);

impl TypeId {
    /// The "no type" sentinel. The root type's base is `INVALID`.
    pub const INVALID: TypeId = TypeId(0);

    /// Check if this is the invalid sentinel.
    #[inline]
    pub const fn is_invalid(self) -> bool {
        self.0 == 0
    }

    /// Check if this is a usable id.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }

    /// Get the underlying value.
    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_invalid() {
            write!(f, "TypeId(INVALID)")
        } else {
            write!(f, "TypeId({})", self.0)
        }
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TypeId {
    fn from(value: u32) -> Self {
        TypeId(value)
    }
}

/// An inclusive, named block of type ids reserved for one component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypeIdRange {
    /// Owner of the range, used in diagnostics.
    pub name: &'static str,
    /// First id in the range.
    pub first: TypeId,
    /// Last id in the range (inclusive).
    pub last: TypeId,
}

impl TypeIdRange {
    /// Create a range covering `first..=last`.
    pub const fn new(name: &'static str, first: u32, last: u32) -> Self {
        Self {
            name,
            first: TypeId(first),
            last: TypeId(last),
        }
    }

    /// Check if `id` falls inside this range.
    #[inline]
    pub const fn contains(&self, id: TypeId) -> bool {
        id.0 >= self.first.0 && id.0 <= self.last.0
    }

    /// Check if the two ranges share at least one id.
    pub const fn overlaps(&self, other: &TypeIdRange) -> bool {
        self.first.0 <= other.last.0 && other.first.0 <= self.last.0
    }

    /// Number of ids in the range. Empty ranges (`first > last`) have length 0.
    pub const fn len(&self) -> u32 {
        if self.last.0 < self.first.0 {
            0
        } else {
            self.last.0 - self.first.0 + 1
        }
    }

    /// Check if the range holds no ids.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The id at `offset` from the start of the range, if it is inside.
    pub const fn nth(&self, offset: u32) -> Option<TypeId> {
        if offset < self.len() {
            Some(TypeId(self.first.0 + offset))
        } else {
            None
        }
    }
}

impl fmt::Display for TypeIdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}..={}]", self.name, self.first, self.last)
    }
}

/// Reserved id ranges.
pub mod ranges {
    use super::TypeIdRange;

    /// Types defined by the core library.
    pub const CORE: TypeIdRange = TypeIdRange::new("core", 1, 99_999);

    /// First id available to extension modules.
    pub const FIRST_EXTENSION_ID: u32 = 100_000;

    pub const GL: TypeIdRange = TypeIdRange::new("gl", 105_000, 105_999);
    pub const RI: TypeIdRange = TypeIdRange::new("ri", 106_000, 106_999);
    pub const NUKE: TypeIdRange = TypeIdRange::new("nuke", 107_000, 107_999);
    pub const MAYA: TypeIdRange = TypeIdRange::new("maya", 109_000, 109_999);
    pub const HOUDINI: TypeIdRange = TypeIdRange::new("houdini", 111_000, 111_999);
    pub const SCENE: TypeIdRange = TypeIdRange::new("scene", 112_000, 112_999);

    /// Ids from here upward are left to third-party extensions.
    pub const FIRST_USER_ID: u32 = 400_000;

    /// All ranges reserved by this library, core first.
    pub const RESERVED: [TypeIdRange; 7] = [CORE, GL, RI, NUKE, MAYA, HOUDINI, SCENE];

    /// A range of `len` ids starting `offset` ids into the user space.
    pub const fn user(name: &'static str, offset: u32, len: u32) -> TypeIdRange {
        let first = FIRST_USER_ID + offset;
        TypeIdRange::new(name, first, first + len - 1)
    }
}

/// Well-known ids of the core library.
///
/// The object model crate assigns its own ids from [`ranges::CORE`]; only the
/// root of the hierarchy lives here because the registry seeds it.
pub mod type_ids {
    use super::TypeId;

    /// The root capability type. Its base is [`TypeId::INVALID`].
    pub const RUN_TIME_TYPED: TypeId = TypeId(1);

    /// Name of the root capability type.
    pub const RUN_TIME_TYPED_NAME: &str = "RunTimeTyped";

    /// Name reported for [`TypeId::INVALID`].
    pub const INVALID_TYPE_NAME: &str = "InvalidType";
}
