//! Addon registration.
//!
//! An addon is a factory the host holds on to: it produces extension
//! instances on demand. Addons are registered explicitly with an
//! [`AddonRegistry`] rather than discovered at runtime.

use std::collections::HashMap;

use tracing::debug;

use super::api::Extension;
use super::error::{ExtensionError, ExtensionResult};

/// Factory object that produces extension instances on demand.
pub trait Addon {
    /// Called once when the addon is registered.
    fn on_init(&mut self) {}

    /// Called once when the addon is unregistered.
    fn on_deinit(&mut self) {}

    /// Create a new extension instance with the given instance name.
    fn create_instance(&self, instance_name: &str) -> Box<dyn Extension>;
}

/// Registry of addons keyed by name.
#[derive(Default)]
pub struct AddonRegistry {
    addons: HashMap<String, Box<dyn Addon>>,
}

impl AddonRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an addon under `name`. Initializes the addon.
    pub fn register(&mut self, name: impl Into<String>, mut addon: Box<dyn Addon>) -> ExtensionResult<()> {
        let name = name.into();
        if self.addons.contains_key(&name) {
            return Err(ExtensionError::AlreadyRegistered(name));
        }

        debug!(addon = %name, "registering addon");
        addon.on_init();
        self.addons.insert(name, addon);
        Ok(())
    }

    /// Remove an addon, deinitializing it.
    pub fn unregister(&mut self, name: &str) -> ExtensionResult<()> {
        let mut addon =
            self.addons.remove(name).ok_or_else(|| ExtensionError::UnknownAddon(name.to_string()))?;

        debug!(addon = %name, "unregistering addon");
        addon.on_deinit();
        Ok(())
    }

    /// Create an extension instance from the addon registered under
    /// `addon_name`.
    pub fn create_instance(
        &self,
        addon_name: &str,
        instance_name: &str,
    ) -> ExtensionResult<Box<dyn Extension>> {
        let addon = self
            .addons
            .get(addon_name)
            .ok_or_else(|| ExtensionError::UnknownAddon(addon_name.to_string()))?;

        debug!(addon = %addon_name, instance = %instance_name, "creating extension instance");
        Ok(addon.create_instance(instance_name))
    }

    /// Names of all registered addons.
    pub fn names(&self) -> Vec<&str> {
        self.addons.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension::ExtensionError;

    struct CountingAddon {
        inits: std::rc::Rc<std::cell::Cell<usize>>,
    }

    struct Inert;
    impl Extension for Inert {}

    impl Addon for CountingAddon {
        fn on_init(&mut self) {
            self.inits.set(self.inits.get() + 1);
        }

        fn create_instance(&self, _instance_name: &str) -> Box<dyn Extension> {
            Box::new(Inert)
        }
    }

    #[test]
    fn test_register_initializes_addon_once() {
        let inits = std::rc::Rc::new(std::cell::Cell::new(0));
        let mut registry = AddonRegistry::new();

        registry.register("counter", Box::new(CountingAddon { inits: inits.clone() })).unwrap();

        assert_eq!(inits.get(), 1);
        assert_eq!(registry.names(), vec!["counter"]);
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let inits = std::rc::Rc::new(std::cell::Cell::new(0));
        let mut registry = AddonRegistry::new();

        registry.register("counter", Box::new(CountingAddon { inits: inits.clone() })).unwrap();
        let err =
            registry.register("counter", Box::new(CountingAddon { inits })).unwrap_err();

        assert!(matches!(err, ExtensionError::AlreadyRegistered(name) if name == "counter"));
    }

    #[test]
    fn test_create_instance_unknown_addon() {
        let registry = AddonRegistry::new();
        assert!(matches!(
            registry.create_instance("missing", "x"),
            Err(ExtensionError::UnknownAddon(name)) if name == "missing"
        ));
    }

    #[test]
    fn test_unregister_removes_addon() {
        let inits = std::rc::Rc::new(std::cell::Cell::new(0));
        let mut registry = AddonRegistry::new();

        registry.register("counter", Box::new(CountingAddon { inits })).unwrap();
        registry.unregister("counter").unwrap();

        assert!(registry.names().is_empty());
        assert!(registry.create_instance("counter", "x").is_err());
    }
}
