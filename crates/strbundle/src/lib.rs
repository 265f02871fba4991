//! # strbundle
//!
//! Lightweight localized string bundles without a framework.
//!
//! This crate provides two independent pieces:
//!
//! - [`Registry`]: locale-keyed bundles of one caller-defined type, a current
//!   locale, and lookup with fallback to `"en"`
//! - [`Template`] / [`interpolated`]: named-placeholder templates rendered
//!   from an [`Args`] map
//!
//! # Example
//!
//! ```rust
//! use strbundle::{args, interpolated};
//!
//! struct Strings {
//!     greeting: &'static str,
//! }
//!
//! # fn example() -> Result<(), strbundle::L10nError> {
//! let registry = strbundle::init::<Strings>()
//!     .add_locales([
//!         ("en", Strings { greeting: "Hello, {name}!" }),
//!         ("de", Strings { greeting: "Hallo, {name}!" }),
//!     ])
//!     .set_locale("de");
//!
//! let template = strbundle::Template::parse(registry.strings()?.greeting)?;
//! assert_eq!(template.render(&args! { "name" => "Ada" })?, "Hallo, Ada!");
//!
//! let age = interpolated!("age ", "age", "");
//! assert_eq!(age.render(&args! { "age" => 42 })?, "age 42");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod args;
pub mod config;
pub mod error;
pub mod interpolate;
pub mod loader;
pub mod registry;
pub mod shared;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use args::{Args, Value};
pub use config::{RegistryConfig, DEFAULT_LOCALE};
pub use error::{L10nError, L10nResult};
pub use interpolate::{interpolated, Template, MISSING_VALUE_TEXT};
pub use loader::{parse_bundle, BundleFormat, BundleLoader};
pub use registry::Registry;
pub use shared::SharedRegistry;

/// Create an empty [`Registry`] with current and fallback locale `"en"`
pub fn init<T>() -> Registry<T> {
    Registry::new()
}
