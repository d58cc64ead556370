//! Static type-promotion table
//!
//! For every operation family and ordered pair of operand kinds the table
//! records the common (computation) kind, the result kind and whether a
//! kernel exists. The whole table is evaluated at compile time from the kind
//! lattice below and never changes at runtime.
//!
//! # Lattice
//!
//! - unsigned with unsigned, signed with signed, real with real and complex
//!   with complex widen to the larger kind
//! - unsigned `u` with signed `s` gives the signed kind of width
//!   `max(2 * width(u), width(s))`; there is none for 64-bit `u`
//! - an integer meets floats through `float16`/`float32`/`float64` for 8-,
//!   16- and 32-bit integers; 64-bit integers have no safe float
//! - a real meets a complex through `complex32`/`complex64`/`complex128`
//! - `bool` only takes part in divmod, and only as not implemented

use crate::error::{Error, Result};
use crate::kind::TypeKind;
use crate::ops::{OpFamily, Operation};
use serde::{Deserialize, Serialize};

/// Whether an entry can be executed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    /// A kernel exists
    Available,
    /// The pairing is meaningful but has no kernel in this build
    NotImplemented,
    /// No common kind holds every value of both operands
    NoSafeCommonType,
}

/// One cell of the promotion table
///
/// Entries that are not available still carry a nominal `common` and
/// `result` kind. They are never executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PromotionEntry {
    pub family: OpFamily,
    pub left: TypeKind,
    pub right: TypeKind,
    pub common: TypeKind,
    pub result: TypeKind,
    pub availability: Availability,
}

impl PromotionEntry {
    pub const fn is_available(&self) -> bool {
        matches!(self.availability, Availability::Available)
    }
}

const N: usize = TypeKind::COUNT;

/// Exhaustive (family, left, right) table
#[derive(Debug)]
pub struct PromotionTable {
    entries: [[[Option<PromotionEntry>; N]; N]; OpFamily::COUNT],
}

/// The table every lookup reads from
pub static PROMOTION_TABLE: PromotionTable = PromotionTable::build();

impl PromotionTable {
    const fn build() -> Self {
        let mut entries = [[[None; N]; N]; OpFamily::COUNT];
        let mut f = 0;
        while f < OpFamily::COUNT {
            let family = OpFamily::ALL[f];
            let mut i = 0;
            while i < N {
                let mut j = 0;
                while j < N {
                    entries[f][i][j] = entry_for(family, TypeKind::ALL[i], TypeKind::ALL[j]);
                    j += 1;
                }
                i += 1;
            }
            f += 1;
        }
        Self { entries }
    }

    /// Raw entry for the pair, whatever its availability
    ///
    /// `None` means the family does not mention the pair at all.
    #[inline]
    pub fn get(&self, family: OpFamily, left: TypeKind, right: TypeKind) -> Option<PromotionEntry> {
        self.entries[family.index()][left.index()][right.index()]
    }

    /// Every entry of a family, left kind major, in kind declaration order
    pub fn iter(&self, family: OpFamily) -> impl Iterator<Item = PromotionEntry> + '_ {
        self.entries[family.index()]
            .iter()
            .flat_map(|row| row.iter().filter_map(|entry| *entry))
    }
}

/// Raw entry for the pair in the static table
pub fn lookup(family: OpFamily, left: TypeKind, right: TypeKind) -> Option<PromotionEntry> {
    PROMOTION_TABLE.get(family, left, right)
}

/// Executable entry for an operation on the pair
///
/// Missing, not implemented and unsafe pairings are all reported as
/// [`Error::UnsupportedOperand`].
pub fn resolve(op: Operation, left: TypeKind, right: TypeKind) -> Result<PromotionEntry> {
    match lookup(op.family(), left, right) {
        Some(entry) if entry.is_available() => Ok(entry),
        _ => Err(Error::unsupported(op.name(), left, right)),
    }
}

/// Every entry of a family
pub fn entries(family: OpFamily) -> impl Iterator<Item = PromotionEntry> {
    PROMOTION_TABLE.iter(family)
}

/// Every executable entry of a family
pub fn available(family: OpFamily) -> impl Iterator<Item = PromotionEntry> {
    entries(family).filter(PromotionEntry::is_available)
}

const fn entry_for(family: OpFamily, left: TypeKind, right: TypeKind) -> Option<PromotionEntry> {
    match family {
        OpFamily::Arithmetic => arithmetic(left, right),
        OpFamily::FloorRemainder => floor_remainder(left, right),
        OpFamily::TrueDivide => true_divide(left, right),
        OpFamily::Comparison => comparison(left, right),
        OpFamily::Divmod => Some(divmod(left, right)),
    }
}

const fn make(
    family: OpFamily,
    left: TypeKind,
    right: TypeKind,
    common: TypeKind,
    result: TypeKind,
    availability: Availability,
) -> PromotionEntry {
    PromotionEntry {
        family,
        left,
        right,
        common,
        result,
        availability,
    }
}

const fn arithmetic(left: TypeKind, right: TypeKind) -> Option<PromotionEntry> {
    if left.is_bool() || right.is_bool() {
        return None;
    }
    let (common, availability) = promote_checked(left, right);
    Some(make(OpFamily::Arithmetic, left, right, common, common, availability))
}

const fn floor_remainder(left: TypeKind, right: TypeKind) -> Option<PromotionEntry> {
    if left.is_bool() || right.is_bool() {
        return None;
    }
    let (common, availability) = promote_checked(left, right);
    let availability = if left.is_complex() || right.is_complex() || common.is_complex() {
        Availability::NotImplemented
    } else {
        availability
    };
    Some(make(OpFamily::FloorRemainder, left, right, common, common, availability))
}

const fn true_divide(left: TypeKind, right: TypeKind) -> Option<PromotionEntry> {
    if left.is_bool() || right.is_bool() {
        return None;
    }
    let family = OpFamily::TrueDivide;
    let wide_integer =
        (left.is_integer() && left.size() == 8) || (right.is_integer() && right.size() == 8);
    if wide_integer {
        let common = match lattice(left, right) {
            Some(common) => common,
            None => nominal(left, right),
        };
        return Some(make(family, left, right, common, common, Availability::NoSafeCommonType));
    }

    if left.is_integer() && right.is_integer() {
        let common = match float_for_integer(nominal(left, right)) {
            Some(float) => float,
            None => nominal(left, right),
        };
        let availability = if common.is_inert() {
            Availability::NotImplemented
        } else {
            Availability::Available
        };
        return Some(make(family, left, right, common, common, availability));
    }

    let (common, availability) = promote_checked(left, right);
    Some(make(family, left, right, common, common, availability))
}

const fn comparison(left: TypeKind, right: TypeKind) -> Option<PromotionEntry> {
    if left.is_bool() || right.is_bool() {
        return None;
    }
    let (common, availability) = promote_checked(left, right);
    Some(make(OpFamily::Comparison, left, right, common, TypeKind::Bool, availability))
}

const fn divmod(left: TypeKind, right: TypeKind) -> PromotionEntry {
    let supported = left.is_integer()
        || matches!(left, TypeKind::Float32 | TypeKind::Float64);
    if left.same(right) && supported {
        return make(OpFamily::Divmod, left, right, left, left, Availability::Available);
    }
    let common = match lattice(left, right) {
        Some(common) => common,
        None => nominal(left, right),
    };
    make(OpFamily::Divmod, left, right, common, common, Availability::NotImplemented)
}

/// Lattice common kind with the shared availability rules applied
const fn promote_checked(left: TypeKind, right: TypeKind) -> (TypeKind, Availability) {
    match lattice(left, right) {
        None => (nominal(left, right), Availability::NoSafeCommonType),
        Some(common) => {
            let availability = if left.is_inert() || right.is_inert() || common.is_inert() {
                Availability::NotImplemented
            } else {
                Availability::Available
            };
            (common, availability)
        }
    }
}

/// Larger of two kinds, `a` on a tie
const fn nominal(a: TypeKind, b: TypeKind) -> TypeKind {
    if b.size() > a.size() {
        b
    } else {
        a
    }
}

const fn lattice(a: TypeKind, b: TypeKind) -> Option<TypeKind> {
    if a.is_bool() || b.is_bool() {
        return None;
    }
    if (a.is_unsigned() && b.is_unsigned())
        || (a.is_signed() && b.is_signed())
        || (a.is_real() && b.is_real())
        || (a.is_complex() && b.is_complex())
    {
        return Some(nominal(a, b));
    }
    if a.is_unsigned() && b.is_signed() {
        return mixed_integer(a, b);
    }
    if a.is_signed() && b.is_unsigned() {
        return mixed_integer(b, a);
    }
    if a.is_integer() {
        return integer_with_float(a, b);
    }
    if b.is_integer() {
        return integer_with_float(b, a);
    }
    // one real, one complex
    if a.is_real() {
        Some(nominal(complex_of_real(a), b))
    } else {
        Some(nominal(a, complex_of_real(b)))
    }
}

const fn mixed_integer(unsigned: TypeKind, signed: TypeKind) -> Option<TypeKind> {
    if unsigned.size() == 8 {
        return None;
    }
    let doubled = 2 * unsigned.size();
    let size = if doubled > signed.size() {
        doubled
    } else {
        signed.size()
    };
    signed_of_size(size)
}

const fn integer_with_float(integer: TypeKind, float: TypeKind) -> Option<TypeKind> {
    match float_for_integer(integer) {
        None => None,
        Some(real) if float.is_real() => Some(nominal(real, float)),
        Some(real) => Some(nominal(complex_of_real(real), float)),
    }
}

const fn signed_of_size(size: usize) -> Option<TypeKind> {
    match size {
        1 => Some(TypeKind::Int8),
        2 => Some(TypeKind::Int16),
        4 => Some(TypeKind::Int32),
        8 => Some(TypeKind::Int64),
        _ => None,
    }
}

const fn float_for_integer(integer: TypeKind) -> Option<TypeKind> {
    match integer.size() {
        1 => Some(TypeKind::Float16),
        2 => Some(TypeKind::Float32),
        4 => Some(TypeKind::Float64),
        _ => None,
    }
}

const fn complex_of_real(real: TypeKind) -> TypeKind {
    match real {
        TypeKind::Float16 => TypeKind::Complex32,
        TypeKind::Float32 => TypeKind::Complex64,
        _ => TypeKind::Complex128,
    }
}
