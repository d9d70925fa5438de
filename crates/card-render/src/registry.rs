//! Named container registry

use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

/// The container the dashboard page renders alerts into
pub const ALERTS_CONTAINER: &str = "alerts-container";

/// Named HTML containers shared between the render path and the page
/// server.
///
/// Rendering replaces a container's fragment wholesale. Writing to a name
/// that was never registered is a silent no-op: the poller may run while
/// no page exposes the container, and that is not an error.
#[derive(Debug, Default)]
pub struct ContainerRegistry {
    containers: Mutex<HashMap<String, String>>,
}

impl ContainerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a container under `name`, starting empty.
    ///
    /// Re-registering clears the current fragment.
    pub fn register(&self, name: &str) {
        if let Ok(mut containers) = self.containers.lock() {
            containers.insert(name.to_string(), String::new());
        }
    }

    /// Replace the fragment held by `name`.
    ///
    /// Returns `false` when the container is not registered; the fragment
    /// is dropped and nothing else changes.
    pub fn replace(&self, name: &str, html: String) -> bool {
        let Ok(mut containers) = self.containers.lock() else {
            return false;
        };
        match containers.get_mut(name) {
            Some(fragment) => {
                *fragment = html;
                true
            }
            None => {
                debug!(container = name, "container not registered, skipping render");
                false
            }
        }
    }

    /// Current fragment held by `name`, if registered.
    pub fn fragment(&self, name: &str) -> Option<String> {
        self.containers
            .lock()
            .ok()
            .and_then(|containers| containers.get(name).cloned())
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.containers
            .lock()
            .map(|containers| containers.contains_key(name))
            .unwrap_or(false)
    }
}
