//! Shared utilities for integration tests

#![allow(dead_code)]

use elemwise_core::ops::Add;
use elemwise_core::TypeKind;
use elemwise_kernels::loops::{contiguous, rank0};
use elemwise_kernels::{Kernel, KernelFn, TypeSignature};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Signature handle that counts how often it is released
#[derive(Debug)]
pub struct CountingSignature {
    id: usize,
    drops: Arc<AtomicUsize>,
}

impl CountingSignature {
    pub fn new(id: usize, drops: Arc<AtomicUsize>) -> Self {
        Self { id, drops }
    }
}

impl fmt::Display for CountingSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "counted#{}", self.id)
    }
}

impl Drop for CountingSignature {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}

impl TypeSignature for CountingSignature {}

/// `int32 + int32 -> int32` kernel owning a counted signature
pub fn counted_add_i32(id: usize, drops: &Arc<AtomicUsize>) -> Kernel {
    // SAFETY: entry points instantiated for int32, int32 -> int32
    unsafe {
        Kernel::new(
            TypeKind::Int32,
            TypeKind::Int32,
            TypeKind::Int32,
            KernelFn::Binary {
                contiguous: contiguous::<i32, i32, i32, Add>,
                rank0: rank0::<i32, i32, i32, Add>,
            },
            Box::new(CountingSignature::new(id, Arc::clone(drops))),
        )
    }
}

/// Lengths covering empty, single and odd-sized runs
pub fn edge_case_lengths() -> Vec<usize> {
    vec![0, 1, 2, 3, 7, 8, 15, 16, 17, 64, 127]
}
