//! Registry configuration

/// Maximum number of kernels a single function may hold
pub const MAX_KERNELS: usize = 512;

/// Settings applied to every function a [`crate::Registry`] creates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Kernel capacity of each function entry
    pub max_kernels: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_kernels: MAX_KERNELS,
        }
    }
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-function kernel capacity
    pub fn with_max_kernels(mut self, max_kernels: usize) -> Self {
        self.max_kernels = max_kernels;
        self
    }
}
