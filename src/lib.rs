//! Elementwise binary operation engine
//!
//! Re-exports the workspace crates:
//!
//! - [`elemwise_core`]: type kinds, numeric primitives and the promotion table
//! - [`elemwise_kernels`]: typed kernels and the kernel registry
//!
//! # Example
//!
//! ```rust
//! use elemwise::prelude::*;
//!
//! let entry = resolve(Operation::Divide, TypeKind::Int16, TypeKind::Uint8).unwrap();
//! assert_eq!(entry.result, TypeKind::Float32);
//!
//! let registry = Registry::with_builtins().unwrap();
//! let divmod = registry.resolve("divmod", TypeKind::Int32, TypeKind::Int32).unwrap();
//! assert_eq!(divmod.apply_scalar_dual::<i32, i32, i32>(-7, 2).unwrap(), (-4, 1));
//! ```

pub use elemwise_core;
pub use elemwise_kernels;

pub use elemwise_core::{promotion, Error, Operation, OpFamily, Result, TypeKind};
pub use elemwise_kernels::{Kernel, Registry, RegistryConfig, MAX_KERNELS};

pub mod prelude {
    pub use elemwise_core::prelude::*;
    pub use elemwise_core::promotion::{lookup, resolve};
    pub use elemwise_kernels::{
        FunctionEntry, Kernel, KernelFn, KindSignature, Registry, RegistryConfig, TypeSignature,
        MAX_KERNELS,
    };
}
