//! Kernel registry
//!
//! Maps function names to [`FunctionEntry`] values, each holding the type
//! specialised kernels of one function in registration order under a fixed
//! capacity. Entries own their kernels and, through them, every signature
//! handle; dropping or destroying an entry releases all of them exactly once.
//!
//! The registry is filled during a single-threaded initialisation phase and
//! read concurrently afterwards. Mutation needs `&mut`, so shared readers are
//! never raced.

use crate::builtin::builtin_loops_for;
use crate::config::{RegistryConfig, MAX_KERNELS};
use crate::kernel::Kernel;
use elemwise_core::{Error, Operation, Result, TypeKind};
use std::collections::btree_map::{BTreeMap, Entry};
use tracing::{debug, instrument, warn};

/// One named function and its kernels
#[derive(Debug)]
pub struct FunctionEntry {
    name: String,
    kernels: Vec<Kernel>,
    capacity: usize,
}

impl FunctionEntry {
    /// Empty entry with room for [`MAX_KERNELS`] kernels
    pub fn new(name: &str) -> Result<Self> {
        Self::with_capacity(name, MAX_KERNELS)
    }

    /// Empty entry holding at most `capacity` kernels
    pub fn with_capacity(name: &str, capacity: usize) -> Result<Self> {
        Ok(Self {
            name: owned_name(name)?,
            kernels: Vec::new(),
            capacity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Kernels in registration order
    pub fn kernels(&self) -> &[Kernel] {
        &self.kernels
    }

    pub fn len(&self) -> usize {
        self.kernels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kernels.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.kernels.len() >= self.capacity
    }

    /// Append a kernel
    ///
    /// When the entry is full the kernel is dropped, releasing its
    /// signature, and the existing kernels are left untouched.
    pub fn push(&mut self, kernel: Kernel) -> Result<()> {
        if self.is_full() {
            return Err(Error::CapacityExceeded {
                function: self.name.clone(),
                capacity: self.capacity,
            });
        }
        self.kernels
            .try_reserve(1)
            .map_err(|e| Error::allocation("kernel list", e))?;
        self.kernels.push(kernel);
        Ok(())
    }

    /// First kernel declared for exactly this operand pair
    pub fn find(&self, left: TypeKind, right: TypeKind) -> Option<&Kernel> {
        self.kernels.iter().find(|k| k.matches(left, right))
    }

    /// First kernel declared for this operand pair and result kind
    pub fn find_exact(&self, left: TypeKind, right: TypeKind, result: TypeKind) -> Option<&Kernel> {
        self.kernels
            .iter()
            .find(|k| k.matches(left, right) && k.result() == result)
    }
}

fn owned_name(name: &str) -> Result<String> {
    let mut owned = String::new();
    owned
        .try_reserve_exact(name.len())
        .map_err(|e| Error::allocation("function name", e))?;
    owned.push_str(name);
    Ok(owned)
}

/// Name to function map
#[derive(Debug, Default)]
pub struct Registry {
    functions: BTreeMap<String, FunctionEntry>,
    config: RegistryConfig,
}

impl Registry {
    /// Empty registry with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            functions: BTreeMap::new(),
            config,
        }
    }

    /// Registry holding one function per [`Operation`] with every builtin kernel
    pub fn with_builtins() -> Result<Self> {
        Self::with_builtins_config(RegistryConfig::default())
    }

    /// [`Registry::with_builtins`] under a custom configuration
    ///
    /// Fails with the first error any registration reports.
    #[instrument(skip(config), fields(max_kernels = config.max_kernels))]
    pub fn with_builtins_config(config: RegistryConfig) -> Result<Self> {
        let mut registry = Self::with_config(config);
        let mut total = 0;
        for op in Operation::ALL {
            registry.create(op.name())?;
            for row in builtin_loops_for(op) {
                registry.register(op.name(), row.kernel())?;
                total += 1;
            }
        }
        debug!(
            "Registered {} builtin kernels across {} functions",
            total,
            registry.len()
        );
        Ok(registry)
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Create an empty function
    ///
    /// The name is copied with fallible reservations; only the map node
    /// itself is allocated infallibly, as `BTreeMap` has no `try_insert`.
    pub fn create(&mut self, name: &str) -> Result<&mut FunctionEntry> {
        if self.functions.contains_key(name) {
            return Err(Error::DuplicateFunction(name.to_string()));
        }
        let key = owned_name(name)?;
        let entry = FunctionEntry::with_capacity(name, self.config.max_kernels)?;
        match self.functions.entry(key) {
            Entry::Occupied(_) => Err(Error::DuplicateFunction(name.to_string())),
            Entry::Vacant(slot) => {
                debug!(
                    "Created function {} with capacity {}",
                    name, self.config.max_kernels
                );
                Ok(slot.insert(entry))
            }
        }
    }

    /// Append a kernel to an existing function
    ///
    /// On any error the kernel is dropped together with its signature.
    pub fn register(&mut self, name: &str, kernel: Kernel) -> Result<()> {
        let entry = self
            .functions
            .get_mut(name)
            .ok_or_else(|| Error::FunctionNotFound(name.to_string()))?;
        entry.push(kernel).inspect_err(|e| {
            if matches!(e, Error::CapacityExceeded { .. }) {
                warn!("Rejected kernel for {}: {}", name, e);
            }
        })
    }

    /// Remove a function, releasing its name and every kernel it holds
    pub fn destroy(&mut self, name: &str) -> Result<()> {
        let entry = self
            .functions
            .remove(name)
            .ok_or_else(|| Error::FunctionNotFound(name.to_string()))?;
        debug!("Destroyed function {} ({} kernels)", name, entry.len());
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&FunctionEntry> {
        self.functions.get(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Function names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    /// Kernel of `name` declared for exactly the operand pair
    pub fn resolve(&self, name: &str, left: TypeKind, right: TypeKind) -> Result<&Kernel> {
        let entry = self
            .get(name)
            .ok_or_else(|| Error::FunctionNotFound(name.to_string()))?;
        entry
            .find(left, right)
            .ok_or_else(|| Error::unsupported(name, left, right))
    }
}
