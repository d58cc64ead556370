//! Type-specialised kernels
//!
//! A [`Kernel`] pairs the raw entry points of one (left, right, result)
//! specialisation with the signature handle the type system registered it
//! under. The raw entry points do no checking; the `apply_*` methods check
//! kinds, arity and lengths before anything is written.

use elemwise_core::{Element, Error, Result, Scalar, TypeKind};
use std::fmt;
use std::mem::MaybeUninit;

/// Contiguous single-output entry point: `(in0, in1, out, n)`
pub type BinaryContiguousFn = unsafe fn(*const u8, *const u8, *mut u8, usize);

/// Rank-0 single-output entry point: `(in0, in1, out)`
pub type BinaryRank0Fn = unsafe fn(*const u8, *const u8, *mut u8);

/// Contiguous two-output entry point: `(in0, in1, out0, out1, n)`
pub type DualContiguousFn = unsafe fn(*const u8, *const u8, *mut u8, *mut u8, usize);

/// Rank-0 two-output entry point: `(in0, in1, out0, out1)`
pub type DualRank0Fn = unsafe fn(*const u8, *const u8, *mut u8, *mut u8);

/// Raw entry points of a kernel, tagged by output count
#[derive(Debug, Clone, Copy)]
pub enum KernelFn {
    Binary {
        contiguous: BinaryContiguousFn,
        rank0: BinaryRank0Fn,
    },
    Dual {
        contiguous: DualContiguousFn,
        rank0: DualRank0Fn,
    },
}

impl KernelFn {
    /// Number of outputs per element
    pub fn nout(&self) -> usize {
        match self {
            KernelFn::Binary { .. } => 1,
            KernelFn::Dual { .. } => 2,
        }
    }
}

/// Opaque signature handle owned by a kernel
///
/// Stands in for the structural type of the kernel as the type system sees
/// it. The kernel owns the handle exclusively and drops it exactly once.
pub trait TypeSignature: fmt::Debug + fmt::Display + Send + Sync {}

/// Signature made of plain kind lists, e.g. `uint8, int8 -> int16`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindSignature {
    inputs: Vec<TypeKind>,
    outputs: Vec<TypeKind>,
}

impl KindSignature {
    pub fn new(inputs: Vec<TypeKind>, outputs: Vec<TypeKind>) -> Self {
        Self { inputs, outputs }
    }

    pub fn inputs(&self) -> &[TypeKind] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[TypeKind] {
        &self.outputs
    }
}

impl fmt::Display for KindSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_kinds(f, &self.inputs)?;
        f.write_str(" -> ")?;
        write_kinds(f, &self.outputs)
    }
}

fn write_kinds(f: &mut fmt::Formatter<'_>, kinds: &[TypeKind]) -> fmt::Result {
    for (i, kind) in kinds.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{kind}")?;
    }
    Ok(())
}

impl TypeSignature for KindSignature {}

/// One type-specialised implementation of a function
#[derive(Debug)]
pub struct Kernel {
    left: TypeKind,
    right: TypeKind,
    result: TypeKind,
    function: KernelFn,
    signature: Box<dyn TypeSignature>,
}

impl Kernel {
    /// Kernel from raw entry points and the kinds they were built for
    ///
    /// Builtin kernels come from [`crate::BuiltinLoop::kernel`], which needs
    /// no `unsafe`.
    ///
    /// # Safety
    ///
    /// `function` must be the loop instantiation for exactly `left`, `right`
    /// and `result`: its entry points read elements of the storage types of
    /// `left` and `right` and write elements of the storage type of
    /// `result`. The checked `apply_*` wrappers size every buffer from these
    /// declared kinds.
    ///
    /// A mismatched pair cannot be built from safe code:
    ///
    /// ```compile_fail
    /// use elemwise_core::{ops::Add, TypeKind};
    /// use elemwise_kernels::loops::{contiguous, rank0};
    /// use elemwise_kernels::{Kernel, KernelFn, KindSignature};
    ///
    /// let kernel = Kernel::new(
    ///     TypeKind::Uint8,
    ///     TypeKind::Uint8,
    ///     TypeKind::Uint8,
    ///     KernelFn::Binary {
    ///         contiguous: contiguous::<u64, u64, u64, Add>,
    ///         rank0: rank0::<u64, u64, u64, Add>,
    ///     },
    ///     Box::new(KindSignature::new(vec![], vec![])),
    /// );
    /// ```
    pub unsafe fn new(
        left: TypeKind,
        right: TypeKind,
        result: TypeKind,
        function: KernelFn,
        signature: Box<dyn TypeSignature>,
    ) -> Self {
        Self {
            left,
            right,
            result,
            function,
            signature,
        }
    }

    pub fn left(&self) -> TypeKind {
        self.left
    }

    pub fn right(&self) -> TypeKind {
        self.right
    }

    /// Kind of every output
    pub fn result(&self) -> TypeKind {
        self.result
    }

    pub fn function(&self) -> KernelFn {
        self.function
    }

    pub fn signature(&self) -> &dyn TypeSignature {
        self.signature.as_ref()
    }

    pub fn nout(&self) -> usize {
        self.function.nout()
    }

    /// Whether the kernel was declared for exactly this operand pair
    pub fn matches(&self, left: TypeKind, right: TypeKind) -> bool {
        self.left == left && self.right == right
    }

    /// Elementwise over equal-length slices
    pub fn apply_slices<L: Element, R: Element, O: Scalar>(
        &self,
        a: &[L],
        b: &[R],
        out: &mut [O],
    ) -> Result<()> {
        self.check_kinds(L::KIND, R::KIND, O::KIND)?;
        check_lengths(a.len(), b.len(), &[out.len()])?;
        let KernelFn::Binary { contiguous, .. } = self.function else {
            return Err(self.arity_mismatch(1));
        };
        // SAFETY: kinds match the instantiation and every slice holds a.len() elements
        unsafe {
            contiguous(
                a.as_ptr().cast(),
                b.as_ptr().cast(),
                out.as_mut_ptr().cast(),
                a.len(),
            );
        }
        Ok(())
    }

    /// Single pair of scalars
    pub fn apply_scalar<L: Element, R: Element, O: Scalar>(&self, a: L, b: R) -> Result<O> {
        self.check_kinds(L::KIND, R::KIND, O::KIND)?;
        let KernelFn::Binary { rank0, .. } = self.function else {
            return Err(self.arity_mismatch(1));
        };
        let mut out = MaybeUninit::<O>::uninit();
        // SAFETY: kinds match the instantiation; rank0 writes exactly one O
        unsafe {
            rank0(
                (&a as *const L).cast(),
                (&b as *const R).cast(),
                out.as_mut_ptr().cast(),
            );
            Ok(out.assume_init())
        }
    }

    /// Two-output elementwise over equal-length slices
    pub fn apply_slices_dual<L: Element, R: Element, O: Scalar>(
        &self,
        a: &[L],
        b: &[R],
        out0: &mut [O],
        out1: &mut [O],
    ) -> Result<()> {
        self.check_kinds(L::KIND, R::KIND, O::KIND)?;
        check_lengths(a.len(), b.len(), &[out0.len(), out1.len()])?;
        let KernelFn::Dual { contiguous, .. } = self.function else {
            return Err(self.arity_mismatch(2));
        };
        // SAFETY: kinds match the instantiation and every slice holds a.len() elements
        unsafe {
            contiguous(
                a.as_ptr().cast(),
                b.as_ptr().cast(),
                out0.as_mut_ptr().cast(),
                out1.as_mut_ptr().cast(),
                a.len(),
            );
        }
        Ok(())
    }

    /// Two-output operation on a single pair of scalars
    pub fn apply_scalar_dual<L: Element, R: Element, O: Scalar>(
        &self,
        a: L,
        b: R,
    ) -> Result<(O, O)> {
        self.check_kinds(L::KIND, R::KIND, O::KIND)?;
        let KernelFn::Dual { rank0, .. } = self.function else {
            return Err(self.arity_mismatch(2));
        };
        let mut first = MaybeUninit::<O>::uninit();
        let mut second = MaybeUninit::<O>::uninit();
        // SAFETY: kinds match the instantiation; rank0 writes one O to each output
        unsafe {
            rank0(
                (&a as *const L).cast(),
                (&b as *const R).cast(),
                first.as_mut_ptr().cast(),
                second.as_mut_ptr().cast(),
            );
            Ok((first.assume_init(), second.assume_init()))
        }
    }

    fn check_kinds(&self, left: TypeKind, right: TypeKind, result: TypeKind) -> Result<()> {
        for (expected, actual) in [(self.left, left), (self.right, right), (self.result, result)] {
            if expected != actual {
                return Err(Error::KindMismatch { expected, actual });
            }
        }
        Ok(())
    }

    fn arity_mismatch(&self, provided: usize) -> Error {
        Error::ArityMismatch {
            expected: self.nout(),
            actual: provided,
        }
    }
}

fn check_lengths(expected: usize, right: usize, outputs: &[usize]) -> Result<()> {
    if right != expected {
        return Err(Error::size_mismatch(expected, right, "right operand"));
    }
    for &len in outputs {
        if len != expected {
            return Err(Error::size_mismatch(expected, len, "output"));
        }
    }
    Ok(())
}
