//! Scalar type kinds
//!
//! A [`TypeKind`] is the comparable identity of a concrete scalar element
//! type. The structural type system that builds composite types lives
//! elsewhere; this crate only needs the leaf kinds, their byte layout and
//! the Rust type that stores each of them.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Concrete scalar element kind
///
/// `Float16` and `Complex32` are declared so promotion entries can name
/// them, but no kernel ever executes on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Int8,
    Int16,
    Int32,
    Int64,
    Float16,
    Float32,
    Float64,
    Complex32,
    Complex64,
    Complex128,
    Bool,
}

impl TypeKind {
    /// Every kind, in declaration order
    pub const ALL: [TypeKind; 15] = [
        TypeKind::Uint8,
        TypeKind::Uint16,
        TypeKind::Uint32,
        TypeKind::Uint64,
        TypeKind::Int8,
        TypeKind::Int16,
        TypeKind::Int32,
        TypeKind::Int64,
        TypeKind::Float16,
        TypeKind::Float32,
        TypeKind::Float64,
        TypeKind::Complex32,
        TypeKind::Complex64,
        TypeKind::Complex128,
        TypeKind::Bool,
    ];

    /// Number of kinds
    pub const COUNT: usize = Self::ALL.len();

    /// Canonical lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            TypeKind::Uint8 => "uint8",
            TypeKind::Uint16 => "uint16",
            TypeKind::Uint32 => "uint32",
            TypeKind::Uint64 => "uint64",
            TypeKind::Int8 => "int8",
            TypeKind::Int16 => "int16",
            TypeKind::Int32 => "int32",
            TypeKind::Int64 => "int64",
            TypeKind::Float16 => "float16",
            TypeKind::Float32 => "float32",
            TypeKind::Float64 => "float64",
            TypeKind::Complex32 => "complex32",
            TypeKind::Complex64 => "complex64",
            TypeKind::Complex128 => "complex128",
            TypeKind::Bool => "bool",
        }
    }

    /// Position in [`TypeKind::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Byte width of one element
    pub const fn size(self) -> usize {
        match self {
            TypeKind::Uint8 | TypeKind::Int8 | TypeKind::Bool => 1,
            TypeKind::Uint16 | TypeKind::Int16 | TypeKind::Float16 => 2,
            TypeKind::Uint32 | TypeKind::Int32 | TypeKind::Float32 | TypeKind::Complex32 => 4,
            TypeKind::Uint64 | TypeKind::Int64 | TypeKind::Float64 | TypeKind::Complex64 => 8,
            TypeKind::Complex128 => 16,
        }
    }

    /// Alignment of one element; complex kinds align like one component
    pub const fn align(self) -> usize {
        match self {
            TypeKind::Complex32 => 2,
            TypeKind::Complex64 => 4,
            TypeKind::Complex128 => 8,
            other => other.size(),
        }
    }

    pub const fn is_unsigned(self) -> bool {
        matches!(
            self,
            TypeKind::Uint8 | TypeKind::Uint16 | TypeKind::Uint32 | TypeKind::Uint64
        )
    }

    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            TypeKind::Int8 | TypeKind::Int16 | TypeKind::Int32 | TypeKind::Int64
        )
    }

    pub const fn is_integer(self) -> bool {
        self.is_unsigned() || self.is_signed()
    }

    /// Real floating-point kinds
    pub const fn is_real(self) -> bool {
        matches!(
            self,
            TypeKind::Float16 | TypeKind::Float32 | TypeKind::Float64
        )
    }

    pub const fn is_complex(self) -> bool {
        matches!(
            self,
            TypeKind::Complex32 | TypeKind::Complex64 | TypeKind::Complex128
        )
    }

    pub const fn is_bool(self) -> bool {
        matches!(self, TypeKind::Bool)
    }

    /// Declared but never executed
    pub const fn is_inert(self) -> bool {
        matches!(self, TypeKind::Float16 | TypeKind::Complex32)
    }

    /// Identity comparison usable in `const` contexts
    pub const fn same(self, other: TypeKind) -> bool {
        self as u8 == other as u8
    }

    /// Path of the Rust type that stores elements of this kind
    ///
    /// Returns `None` for the inert kinds, which have no storage type.
    pub const fn rust_type(self) -> Option<&'static str> {
        match self {
            TypeKind::Uint8 => Some("u8"),
            TypeKind::Uint16 => Some("u16"),
            TypeKind::Uint32 => Some("u32"),
            TypeKind::Uint64 => Some("u64"),
            TypeKind::Int8 => Some("i8"),
            TypeKind::Int16 => Some("i16"),
            TypeKind::Int32 => Some("i32"),
            TypeKind::Int64 => Some("i64"),
            TypeKind::Float16 | TypeKind::Complex32 => None,
            TypeKind::Float32 => Some("f32"),
            TypeKind::Float64 => Some("f64"),
            TypeKind::Complex64 => Some("::num_complex::Complex<f32>"),
            TypeKind::Complex128 => Some("::num_complex::Complex<f64>"),
            TypeKind::Bool => Some("bool"),
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TypeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TypeKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::UnknownKind(s.to_string()))
    }
}
