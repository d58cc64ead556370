//! Operations, operation families and the zero-sized markers kernels are
//! instantiated with

use crate::error::{Error, Result};
use crate::numeric::Scalar;
use crate::primitives::{Arithmetic, FloorDivMod, Ordered, TrueDivide};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Group of operations sharing one promotion rule set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpFamily {
    Arithmetic,
    FloorRemainder,
    TrueDivide,
    Comparison,
    Divmod,
}

impl OpFamily {
    pub const ALL: [OpFamily; 5] = [
        OpFamily::Arithmetic,
        OpFamily::FloorRemainder,
        OpFamily::TrueDivide,
        OpFamily::Comparison,
        OpFamily::Divmod,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            OpFamily::Arithmetic => "arithmetic",
            OpFamily::FloorRemainder => "floor_remainder",
            OpFamily::TrueDivide => "true_divide",
            OpFamily::Comparison => "comparison",
            OpFamily::Divmod => "divmod",
        }
    }
}

impl fmt::Display for OpFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named elementwise binary operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    FloorDivide,
    Remainder,
    Divide,
    Less,
    LessEqual,
    GreaterEqual,
    Greater,
    Divmod,
}

impl Operation {
    pub const ALL: [Operation; 11] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::FloorDivide,
        Operation::Remainder,
        Operation::Divide,
        Operation::Less,
        Operation::LessEqual,
        Operation::GreaterEqual,
        Operation::Greater,
        Operation::Divmod,
    ];

    /// Registry name of the operation
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::FloorDivide => "floor_divide",
            Operation::Remainder => "remainder",
            Operation::Divide => "divide",
            Operation::Less => "less",
            Operation::LessEqual => "less_equal",
            Operation::GreaterEqual => "greater_equal",
            Operation::Greater => "greater",
            Operation::Divmod => "divmod",
        }
    }

    /// Name of the marker type in [`crate::ops`] implementing this operation
    pub const fn marker(self) -> &'static str {
        match self {
            Operation::Add => "Add",
            Operation::Subtract => "Subtract",
            Operation::Multiply => "Multiply",
            Operation::FloorDivide => "FloorDivide",
            Operation::Remainder => "Remainder",
            Operation::Divide => "Divide",
            Operation::Less => "Less",
            Operation::LessEqual => "LessEqual",
            Operation::GreaterEqual => "GreaterEqual",
            Operation::Greater => "Greater",
            Operation::Divmod => "Divmod",
        }
    }

    pub const fn family(self) -> OpFamily {
        match self {
            Operation::Add | Operation::Subtract | Operation::Multiply => OpFamily::Arithmetic,
            Operation::FloorDivide | Operation::Remainder => OpFamily::FloorRemainder,
            Operation::Divide => OpFamily::TrueDivide,
            Operation::Less
            | Operation::LessEqual
            | Operation::GreaterEqual
            | Operation::Greater => OpFamily::Comparison,
            Operation::Divmod => OpFamily::Divmod,
        }
    }

    /// Number of outputs per element
    pub const fn nout(self) -> usize {
        match self {
            Operation::Divmod => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Operation::ALL
            .iter()
            .copied()
            .find(|op| op.name() == s)
            .ok_or_else(|| Error::UnknownOperation(s.to_string()))
    }
}

/// Single-output operation on the common type `C`
pub trait BinaryOp<C>: 'static {
    type Output: Scalar;

    fn apply(a: C, b: C) -> Self::Output;
}

/// Two-output operation on the common type `C`
pub trait DualOp<C>: 'static {
    fn apply(a: C, b: C) -> (C, C);
}

macro_rules! markers {
    ($($name:ident),* $(,)?) => {
        $(
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $name;
        )*
    };
}

markers!(
    Add,
    Subtract,
    Multiply,
    FloorDivide,
    Remainder,
    Divide,
    Less,
    LessEqual,
    GreaterEqual,
    Greater,
    Divmod,
);

macro_rules! same_type_op {
    ($marker:ident, $bound:ident, $method:path) => {
        impl<C: $bound + Scalar> BinaryOp<C> for $marker {
            type Output = C;

            #[inline(always)]
            fn apply(a: C, b: C) -> C {
                $method(a, b)
            }
        }
    };
}

same_type_op!(Add, Arithmetic, Arithmetic::add);
same_type_op!(Subtract, Arithmetic, Arithmetic::subtract);
same_type_op!(Multiply, Arithmetic, Arithmetic::multiply);
same_type_op!(Divide, TrueDivide, TrueDivide::divide);

impl<C: FloorDivMod + Scalar> BinaryOp<C> for FloorDivide {
    type Output = C;

    #[inline(always)]
    fn apply(a: C, b: C) -> C {
        FloorDivMod::divmod(a, b).0
    }
}

impl<C: FloorDivMod + Scalar> BinaryOp<C> for Remainder {
    type Output = C;

    #[inline(always)]
    fn apply(a: C, b: C) -> C {
        FloorDivMod::divmod(a, b).1
    }
}

macro_rules! comparison_op {
    ($marker:ident, $method:path) => {
        impl<C: Ordered + Scalar> BinaryOp<C> for $marker {
            type Output = bool;

            #[inline(always)]
            fn apply(a: C, b: C) -> bool {
                $method(a, b)
            }
        }
    };
}

comparison_op!(Less, Ordered::less);
comparison_op!(LessEqual, Ordered::less_equal);
comparison_op!(GreaterEqual, Ordered::greater_equal);
comparison_op!(Greater, Ordered::greater);

impl<C: FloorDivMod + Scalar> DualOp<C> for Divmod {
    #[inline(always)]
    fn apply(a: C, b: C) -> (C, C) {
        FloorDivMod::divmod(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    #[test]
    fn test_operation_names_round_trip() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>().unwrap(), op);
            assert_eq!(op.to_string(), op.name());
        }
        assert!(matches!(
            "power".parse::<Operation>(),
            Err(Error::UnknownOperation(_))
        ));
    }

    #[test]
    fn test_families_and_arity() {
        assert_eq!(Operation::Multiply.family(), OpFamily::Arithmetic);
        assert_eq!(Operation::Remainder.family(), OpFamily::FloorRemainder);
        assert_eq!(Operation::Divide.family(), OpFamily::TrueDivide);
        assert_eq!(Operation::GreaterEqual.family(), OpFamily::Comparison);
        assert_eq!(Operation::Divmod.family(), OpFamily::Divmod);

        assert_eq!(Operation::Divmod.nout(), 2);
        for op in Operation::ALL.iter().filter(|op| **op != Operation::Divmod) {
            assert_eq!(op.nout(), 1, "{op}");
        }
    }

    #[test]
    fn test_family_index_matches_order() {
        for (i, family) in OpFamily::ALL.iter().enumerate() {
            assert_eq!(family.index(), i);
        }
    }

    #[test]
    fn test_markers_apply_primitives() {
        assert_eq!(<Add as BinaryOp<u8>>::apply(250, 10), 4);
        assert_eq!(<Subtract as BinaryOp<i16>>::apply(i16::MIN, 1), i16::MAX);
        assert_eq!(<FloorDivide as BinaryOp<i32>>::apply(-7, 2), -4);
        assert_eq!(<Remainder as BinaryOp<i32>>::apply(-7, 2), 1);
        assert_eq!(<Divide as BinaryOp<f64>>::apply(1.0, 4.0), 0.25);
        assert_eq!(<Divmod as DualOp<u16>>::apply(17, 5), (3, 2));
    }

    #[test]
    fn test_comparison_markers_yield_bool() {
        let a = Complex::new(1.0f64, 2.0);
        let b = Complex::new(1.0f64, 3.0);
        assert!(<Less as BinaryOp<_>>::apply(a, b));
        assert!(<LessEqual as BinaryOp<_>>::apply(a, a));
        assert!(!<Greater as BinaryOp<_>>::apply(a, b));
        assert!(<GreaterEqual as BinaryOp<f32>>::apply(2.0, 2.0));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Operation::FloorDivide).unwrap();
        assert_eq!(json, "\"floor_divide\"");
        let family: OpFamily = serde_json::from_str("\"true_divide\"").unwrap();
        assert_eq!(family, OpFamily::TrueDivide);
    }
}
