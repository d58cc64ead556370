//! Typed elementwise kernels and the kernel registry
//!
//! # Architecture
//!
//! - [`loops`]: generic contiguous and rank-0 templates over raw pointers
//! - [`builtin`]: one instantiation per available promotion entry, listed
//!   at build time
//! - [`kernel`]: a specialisation's entry points plus its signature handle,
//!   with checked slice and scalar wrappers
//! - [`registry`]: name to function to kernels, capacity bounded
//!
//! # Example
//!
//! ```rust
//! use elemwise_kernels::Registry;
//! use elemwise_core::TypeKind;
//!
//! let registry = Registry::with_builtins().unwrap();
//! let kernel = registry.resolve("add", TypeKind::Uint8, TypeKind::Uint8).unwrap();
//!
//! let mut out = [0u8; 3];
//! kernel.apply_slices(&[250u8, 1, 2], &[10u8, 1, 2], &mut out).unwrap();
//! assert_eq!(out, [4, 2, 4]);
//! ```

pub mod builtin;
pub mod config;
pub mod kernel;
pub mod loops;
pub mod registry;

pub use builtin::{builtin_loops, builtin_loops_for, BuiltinLoop};
pub use config::{RegistryConfig, MAX_KERNELS};
pub use kernel::{Kernel, KernelFn, KindSignature, TypeSignature};
pub use registry::{FunctionEntry, Registry};
