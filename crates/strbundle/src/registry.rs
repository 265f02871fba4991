//! Locale registry
//!
//! A [`Registry`] maps locale identifiers to bundles of one caller-defined
//! type `T` and remembers a current locale. Builder calls return new
//! registries: `add_locales` copies the receiver's map before merging, so a
//! registry that was already handed out keeps exactly the bundles it had.
//!
//! Lookups that miss the requested locale fall back to the fallback locale
//! (`"en"` unless configured otherwise). If that is missing too the lookup
//! fails with [`L10nError::NoDefaultLocale`].

use crate::config::RegistryConfig;
use crate::error::{L10nError, L10nResult};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Locale-keyed bundles plus the current locale
pub struct Registry<T> {
    /// Bundles by locale identifier
    locales: HashMap<String, Arc<T>>,
    /// Locale used when none is given to a lookup
    locale: String,
    /// Locale used when the requested one is not registered
    fallback: String,
}

impl<T> Registry<T> {
    /// Create an empty registry with current and fallback locale `"en"`
    pub fn new() -> Self {
        Self::with_config(&RegistryConfig::default())
    }

    /// Create an empty registry from configuration
    pub fn with_config(config: &RegistryConfig) -> Self {
        Self {
            locales: HashMap::new(),
            locale: config.initial_locale.clone(),
            fallback: config.fallback_locale.clone(),
        }
    }

    /// Return a registry holding this registry's bundles merged with `entries`
    ///
    /// Entries win on key collisions. `self` is left untouched.
    #[must_use]
    pub fn add_locales<I, K>(&self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
    {
        let mut locales = self.locales.clone();
        let before = locales.len();
        let mut added = 0usize;

        for (locale, bundle) in entries {
            let locale = locale.into();
            if locales.insert(locale.clone(), Arc::new(bundle)).is_some() {
                debug!("Replaced bundle for locale: {}", locale);
            }
            added += 1;
        }

        debug!(
            "Merged {} bundles into registry ({} -> {} locales)",
            added,
            before,
            locales.len()
        );

        Self {
            locales,
            locale: self.locale.clone(),
            fallback: self.fallback.clone(),
        }
    }

    /// Return a registry with a single bundle added
    #[must_use]
    pub fn add_locale<K: Into<String>>(&self, locale: K, bundle: T) -> Self {
        self.add_locales(std::iter::once((locale, bundle)))
    }

    /// Change the current locale
    ///
    /// The locale does not need to be registered; lookups for an unknown
    /// locale use the fallback bundle.
    #[must_use]
    pub fn set_locale<L: Into<String>>(mut self, locale: L) -> Self {
        self.locale = locale.into();
        if !self.locales.contains_key(&self.locale) {
            debug!("Current locale set to unregistered locale: {}", self.locale);
        }
        self
    }

    /// The current locale, exactly as last set
    pub fn get_locale(&self) -> &str {
        &self.locale
    }

    /// The locale consulted when a lookup misses
    pub fn fallback_locale(&self) -> &str {
        &self.fallback
    }

    /// Bundle for the current locale
    pub fn strings(&self) -> L10nResult<&T> {
        self.resolve(None).map(Arc::as_ref)
    }

    /// Bundle for `locale`, or the fallback bundle if it is not registered
    pub fn strings_for(&self, locale: &str) -> L10nResult<&T> {
        self.resolve(Some(locale)).map(Arc::as_ref)
    }

    /// Shared handle to the bundle for `locale`, or the current locale if `None`
    pub fn bundle_for(&self, locale: Option<&str>) -> L10nResult<Arc<T>> {
        self.resolve(locale).map(Arc::clone)
    }

    fn resolve(&self, locale: Option<&str>) -> L10nResult<&Arc<T>> {
        let key = locale.unwrap_or(self.locale.as_str());

        if let Some(bundle) = self.locales.get(key) {
            return Ok(bundle);
        }

        if let Some(bundle) = self.locales.get(&self.fallback) {
            debug!(
                "Locale '{}' not registered, falling back to '{}'",
                key, self.fallback
            );
            return Ok(bundle);
        }

        warn!(
            "Locale '{}' not registered and fallback locale '{}' is missing",
            key, self.fallback
        );
        Err(L10nError::NoDefaultLocale {
            requested: key.to_string(),
            fallback: self.fallback.clone(),
        })
    }

    /// Whether a bundle is registered under `locale` (fallback not applied)
    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Registered locale identifiers, sorted
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    /// Number of registered locales
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    /// Whether no locales are registered
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

impl<T> Clone for Registry<T> {
    fn clone(&self) -> Self {
        Self {
            locales: self.locales.clone(),
            locale: self.locale.clone(),
            fallback: self.fallback.clone(),
        }
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("locales", &self.locales())
            .field("locale", &self.locale)
            .field("fallback", &self.fallback)
            .finish()
    }
}
