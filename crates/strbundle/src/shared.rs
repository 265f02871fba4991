//! Thread-safe registry handle with arc-swap for lock-free reads.

use crate::error::L10nResult;
use crate::registry::Registry;
use arc_swap::ArcSwap;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// A [`Registry`] shared between threads
///
/// Readers load the current registry without locking. Writers are serialized
/// and publish a new registry value; snapshots taken earlier keep seeing the
/// registry they loaded.
pub struct SharedRegistry<T> {
    current: ArcSwap<Registry<T>>,
    write_lock: Mutex<()>,
}

impl<T> SharedRegistry<T> {
    /// Wrap an existing registry
    pub fn new(registry: Registry<T>) -> Self {
        Self {
            current: ArcSwap::from_pointee(registry),
            write_lock: Mutex::new(()),
        }
    }

    /// The registry as of now
    pub fn snapshot(&self) -> Arc<Registry<T>> {
        self.current.load_full()
    }

    /// Replace the registry with the result of `f` applied to the current one
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&Registry<T>) -> Registry<T>,
    {
        let _guard = self.write_lock.lock();
        let current = self.current.load();
        let next = f(&current);
        self.current.store(Arc::new(next));
    }

    /// Merge bundles into the shared registry
    pub fn add_locales<I, K>(&self, entries: I)
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
    {
        self.update(|registry| registry.add_locales(entries));
    }

    /// Change the current locale for every reader
    pub fn set_locale<L: Into<String>>(&self, locale: L) {
        let locale = locale.into();
        debug!("Switching shared registry locale to: {}", locale);
        self.update(|registry| registry.clone().set_locale(locale));
    }

    /// The current locale
    pub fn get_locale(&self) -> String {
        self.current.load().get_locale().to_string()
    }

    /// Bundle for the current locale
    pub fn strings(&self) -> L10nResult<Arc<T>> {
        self.current.load().bundle_for(None)
    }

    /// Bundle for `locale`, or the fallback bundle if it is not registered
    pub fn strings_for(&self, locale: &str) -> L10nResult<Arc<T>> {
        self.current.load().bundle_for(Some(locale))
    }
}

impl<T> Default for SharedRegistry<T> {
    fn default() -> Self {
        Self::new(Registry::new())
    }
}

impl<T> From<Registry<T>> for SharedRegistry<T> {
    fn from(registry: Registry<T>) -> Self {
        Self::new(registry)
    }
}

impl<T> fmt::Debug for SharedRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedRegistry")
            .field("current", &**self.current.load())
            .finish()
    }
}
