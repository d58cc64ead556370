//! Shared utilities for integration tests

#![allow(dead_code)]

use elemwise_core::TypeKind;

/// Every kind that has a storage type and can be executed
pub fn executable_kinds() -> Vec<TypeKind> {
    TypeKind::ALL
        .into_iter()
        .filter(|kind| !kind.is_inert() && !kind.is_bool())
        .collect()
}

/// Pairs of every kind with every kind, left major
pub fn all_pairs() -> Vec<(TypeKind, TypeKind)> {
    TypeKind::ALL
        .into_iter()
        .flat_map(|l| TypeKind::ALL.into_iter().map(move |r| (l, r)))
        .collect()
}

/// Divisors exercising sign combinations and the overflow case
pub fn signed_divisors() -> Vec<i64> {
    vec![-7, -3, -2, -1, 1, 2, 3, 7, i64::MAX, i64::MIN]
}
