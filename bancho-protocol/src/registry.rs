//! Build-to-codec registry.
//!
//! Builds are sparse: a client reporting an unknown build number is served
//! by the nearest registered build at or below it, clamped to the oldest
//! registered build. Registration happens during startup; afterwards the
//! registry is effectively frozen and reads are cheap.

use crate::clients;
use crate::codec::BanchoCodec;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Maps client build numbers to codecs, selecting by nearest lower bound.
pub struct ClientRegistry {
    clients: RwLock<BTreeMap<u32, Arc<BanchoCodec>>>,
}

impl ClientRegistry {
    pub const fn new() -> Self {
        Self {
            clients: RwLock::new(BTreeMap::new()),
        }
    }

    /// Registers a codec for a build. Registering the same build twice keeps
    /// the later registration.
    pub fn register(&self, build: u32, codec: Arc<BanchoCodec>) {
        debug!(build, "registering client codec");
        self.clients.write().insert(build, codec);
    }

    /// Selects the codec for a build: an exact match, otherwise the highest
    /// registered build below it, otherwise the oldest registered build.
    /// `None` only when nothing is registered.
    pub fn select(&self, build: u32) -> Option<Arc<BanchoCodec>> {
        let clients = self.clients.read();
        clients
            .range(..=build)
            .next_back()
            .or_else(|| clients.iter().next())
            .map(|(_, codec)| Arc::clone(codec))
    }

    /// Registered build numbers, ascending.
    pub fn builds(&self) -> Vec<u32> {
        self.clients.read().keys().copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.read().is_empty()
    }

    /// Installs every built-in build chain codec.
    pub fn install_builtin(&self) {
        let b282 = Arc::new(clients::b282::codec());
        self.register(282, Arc::clone(&b282));
        self.register(290, b282);
        self.register(291, Arc::new(clients::b291::codec()));
        self.register(294, Arc::new(clients::b294::codec()));
        self.register(296, Arc::new(clients::b296::codec()));
        self.register(298, Arc::new(clients::b298::codec()));
        self.register(312, Arc::new(clients::b312::codec()));
        self.register(320, Arc::new(clients::b320::codec()));
        self.register(323, Arc::new(clients::b323::codec()));
    }
}

impl Default for ClientRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static REGISTRY: ClientRegistry = ClientRegistry::new();
static BUILTIN_INSTALLED: AtomicBool = AtomicBool::new(false);

/// Registers a codec in the process-wide registry.
pub fn register_client(build: u32, codec: Arc<BanchoCodec>) {
    REGISTRY.register(build, codec);
}

/// Selects a codec from the process-wide registry.
pub fn select_codec(build: u32) -> Option<Arc<BanchoCodec>> {
    REGISTRY.select(build)
}

/// Installs the built-in build chain into the process-wide registry, once.
/// Call during startup, before serving clients.
pub fn register_builtin() {
    if !BUILTIN_INSTALLED.swap(true, Ordering::SeqCst) {
        REGISTRY.install_builtin();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry_selects_nothing() {
        let registry = ClientRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.select(282).is_none());
    }

    #[test]
    fn test_selection_clamps_and_rounds_down() {
        let registry = ClientRegistry::new();
        registry.install_builtin();

        let selected = registry.select(300).unwrap();
        let expected = registry.select(298).unwrap();
        assert!(Arc::ptr_eq(&selected, &expected));

        let selected = registry.select(1).unwrap();
        let expected = registry.select(282).unwrap();
        assert!(Arc::ptr_eq(&selected, &expected));

        let selected = registry.select(99_999).unwrap();
        let expected = registry.select(323).unwrap();
        assert!(Arc::ptr_eq(&selected, &expected));
    }

    #[test]
    fn test_exact_match_wins() {
        let registry = ClientRegistry::new();
        let older = Arc::new(clients::b282::codec());
        let newer = Arc::new(clients::b291::codec());
        registry.register(100, Arc::clone(&older));
        registry.register(200, Arc::clone(&newer));

        assert!(Arc::ptr_eq(&registry.select(200).unwrap(), &newer));
        assert!(Arc::ptr_eq(&registry.select(199).unwrap(), &older));
        assert!(Arc::ptr_eq(&registry.select(201).unwrap(), &newer));
        assert_eq!(registry.builds(), vec![100, 200]);
    }

    #[test]
    fn test_last_registration_wins() {
        let registry = ClientRegistry::new();
        let first = Arc::new(clients::b282::codec());
        let second = Arc::new(clients::b291::codec());

        registry.register(282, Arc::clone(&first));
        registry.register(282, Arc::clone(&second));

        let selected = registry.select(282).unwrap();
        assert!(Arc::ptr_eq(&selected, &second));
        assert_eq!(registry.builds().len(), 1);
    }

    #[test]
    fn test_builds_282_and_290_share_a_codec() {
        let registry = ClientRegistry::new();
        registry.install_builtin();

        let a = registry.select(282).unwrap();
        let b = registry.select(290).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_global_registry_round_trip() {
        register_builtin();
        // A second call must not reinstall (or deadlock).
        register_builtin();

        let selected = select_codec(300).unwrap();
        let expected = select_codec(298).unwrap();
        assert!(Arc::ptr_eq(&selected, &expected));
    }
}
