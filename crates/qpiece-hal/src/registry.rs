//! Backend registry for resolving backends by name.
//!
//! The configured `MACHINE_NAME` is looked up here, so the set of accepted
//! names is whatever has been registered.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::backend::{Backend, BackendConfig, BackendFactory};
use crate::error::{HalError, HalResult};

/// Factory function type for built-in backends.
type BuiltinFactory = Box<dyn Fn(BackendConfig) -> HalResult<Arc<dyn Backend>> + Send + Sync>;

/// Central registry for backends.
pub struct BackendRegistry {
    /// Backend factories keyed by name.
    builtins: FxHashMap<String, BuiltinFactory>,
}

impl BackendRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            builtins: FxHashMap::default(),
        }
    }

    /// Register a backend type under `name`.
    pub fn register<B>(&mut self, name: impl Into<String>)
    where
        B: BackendFactory + 'static,
    {
        let name = name.into();
        debug!("Registering backend: {}", name);
        self.builtins.insert(
            name,
            Box::new(|config| {
                let backend = B::from_config(config)?;
                Ok(Arc::new(backend))
            }),
        );
    }

    /// Register a backend factory with a custom constructor.
    pub fn register_factory(
        &mut self,
        name: impl Into<String>,
        factory: impl Fn(BackendConfig) -> HalResult<Arc<dyn Backend>> + Send + Sync + 'static,
    ) {
        let name = name.into();
        debug!("Registering factory backend: {}", name);
        self.builtins.insert(name, Box::new(factory));
    }

    /// Whether a backend is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.builtins.contains_key(name)
    }

    /// Registered backend names, sorted.
    pub fn available(&self) -> Vec<String> {
        let mut names: Vec<_> = self.builtins.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create the backend registered under `config.name`.
    pub fn create(&self, config: BackendConfig) -> HalResult<Arc<dyn Backend>> {
        let factory = self.builtins.get(&config.name).ok_or_else(|| {
            HalError::UnknownBackend(format!(
                "'{}' (available: {})",
                config.name,
                self.available().join(", ")
            ))
        })?;
        factory(config)
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::ValidationResult;
    use crate::capability::Capabilities;
    use crate::result::{Counts, ExecutionResult};
    use qpiece_ir::Circuit;

    struct ZeroBackend {
        caps: Capabilities,
    }

    impl Backend for ZeroBackend {
        fn name(&self) -> &str {
            &self.caps.name
        }

        fn capabilities(&self) -> &Capabilities {
            &self.caps
        }

        fn validate(&self, _circuit: &Circuit) -> ValidationResult {
            ValidationResult::Valid
        }

        fn run(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
            let mut counts = Counts::new();
            counts.insert("0".repeat(circuit.num_clbits()), u64::from(shots));
            Ok(ExecutionResult::new(counts, shots))
        }
    }

    impl BackendFactory for ZeroBackend {
        fn from_config(config: BackendConfig) -> HalResult<Self> {
            let width = config.extra_u64("max_qubits").unwrap_or(4) as u32;
            Ok(Self {
                caps: Capabilities::simulator(config.name, width),
            })
        }
    }

    #[test]
    fn test_register_and_create() {
        let mut registry = BackendRegistry::new();
        registry.register::<ZeroBackend>("zero");

        assert!(registry.contains("zero"));
        let backend = registry
            .create(BackendConfig::new("zero").with_extra("max_qubits", serde_json::json!(2)))
            .unwrap();
        assert_eq!(backend.name(), "zero");
        assert_eq!(backend.capabilities().num_qubits, 2);
        assert!(backend.statevector(&Circuit::new("c")).is_err());
    }

    #[test]
    fn test_unknown_backend() {
        let mut registry = BackendRegistry::new();
        registry.register::<ZeroBackend>("zero");
        registry.register_factory("other", |config| {
            Ok(Arc::new(ZeroBackend::from_config(config)?) as Arc<dyn Backend>)
        });

        assert_eq!(registry.available(), vec!["other", "zero"]);
        let err = registry.create(BackendConfig::new("ibmq")).err().unwrap();
        assert!(matches!(err, HalError::UnknownBackend(msg) if msg.contains("other, zero")));
    }
}
