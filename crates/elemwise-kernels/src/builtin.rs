//! Builtin kernels generated from the promotion table
//!
//! `build.rs` walks every available promotion entry for each operation and
//! emits one [`BuiltinLoop`] row naming the loop templates instantiated for
//! that (left, right, common) triple.

use crate::kernel::{Kernel, KernelFn, KindSignature};
use crate::loops::{contiguous, contiguous_dual, rank0, rank0_dual};
use elemwise_core::{Operation, TypeKind};

/// A generated kernel specialisation, before it is registered
#[derive(Debug, Clone, Copy)]
pub struct BuiltinLoop {
    pub op: Operation,
    pub left: TypeKind,
    pub right: TypeKind,
    pub common: TypeKind,
    pub result: TypeKind,
    pub function: KernelFn,
}

include!(concat!(env!("OUT_DIR"), "/builtin_kernels.rs"));

impl BuiltinLoop {
    /// Signature handle describing the specialisation
    pub fn signature(&self) -> KindSignature {
        let outputs = vec![self.result; self.op.nout()];
        KindSignature::new(vec![self.left, self.right], outputs)
    }

    /// Owned kernel ready for registration
    pub fn kernel(&self) -> Kernel {
        // SAFETY: rows are generated from the promotion table, so `function` is the
        // instantiation for exactly these kinds
        unsafe {
            Kernel::new(
                self.left,
                self.right,
                self.result,
                self.function,
                Box::new(self.signature()),
            )
        }
    }
}

/// Every builtin row, grouped by operation in [`Operation::ALL`] order
pub fn builtin_loops() -> &'static [BuiltinLoop] {
    &BUILTIN_LOOPS
}

/// Builtin rows of one operation, in promotion table order
pub fn builtin_loops_for(op: Operation) -> impl Iterator<Item = &'static BuiltinLoop> {
    BUILTIN_LOOPS.iter().filter(move |row| row.op == op)
}
