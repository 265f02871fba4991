//! Loading bundles from JSON and TOML files

use crate::error::{L10nError, L10nResult};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

/// On-disk bundle encodings, in lookup priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BundleFormat {
    /// `*.json`
    Json,
    /// `*.toml`
    Toml,
}

impl BundleFormat {
    /// Formats tried by [`BundleLoader::load`], in order
    pub const ALL: [Self; 2] = [Self::Json, Self::Toml];

    /// File extension without the dot
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }

    /// Detect the format from a path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Deserialize a bundle from text
pub fn parse_bundle<T: DeserializeOwned>(format: BundleFormat, source: &str) -> L10nResult<T> {
    parse_bundle_at(format, source, "<inline>")
}

fn parse_bundle_at<T: DeserializeOwned>(
    format: BundleFormat,
    source: &str,
    origin: &str,
) -> L10nResult<T> {
    let parsed: Result<T, String> = match format {
        BundleFormat::Json => serde_json::from_str(source).map_err(|e| e.to_string()),
        BundleFormat::Toml => toml::from_str(source).map_err(|e| e.to_string()),
    };

    parsed.map_err(|reason| L10nError::BundleParse {
        path: origin.to_string(),
        reason,
    })
}

/// Reads `<locale>.json` / `<locale>.toml` bundle files from a directory
#[derive(Debug, Clone)]
pub struct BundleLoader {
    /// Directory holding one file per locale
    dir: PathBuf,
}

impl BundleLoader {
    /// Create a loader for the given directory
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// The directory bundles are read from
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load the bundle for one locale
    ///
    /// The locale must name a file directly inside the loader's directory;
    /// identifiers with path separators or `.`/`..` are reported as not found.
    pub fn load<T: DeserializeOwned>(&self, locale: &str) -> L10nResult<T> {
        if !is_plain_file_name(locale) {
            warn!("Rejecting locale that is not a plain file name: {:?}", locale);
            return Err(self.not_found(locale));
        }

        for format in BundleFormat::ALL {
            let path = self.dir.join(format!("{locale}.{}", format.extension()));
            if path.is_file() {
                return Self::load_file(&path, format);
            }
        }

        Err(self.not_found(locale))
    }

    /// Load every bundle file in the directory, keyed by file stem
    ///
    /// Files with other extensions are skipped. When one locale has several
    /// files, the same one [`load`](Self::load) would pick is used and the
    /// others are not read.
    pub fn load_all<T: DeserializeOwned>(&self) -> L10nResult<HashMap<String, T>> {
        let mut chosen: HashMap<String, (BundleFormat, PathBuf)> = HashMap::new();

        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }

            let Some(format) = BundleFormat::from_path(&path) else {
                debug!("Skipping non-bundle file: {:?}", path);
                continue;
            };
            let Some(locale) = path.file_stem().and_then(|s| s.to_str()) else {
                debug!("Skipping file with non UTF-8 name: {:?}", path);
                continue;
            };

            let shadowed = chosen
                .get(locale)
                .is_some_and(|(existing, _)| *existing <= format);
            if shadowed {
                debug!("Ignoring {:?}, a higher priority bundle exists", path);
            } else {
                chosen.insert(locale.to_string(), (format, path.clone()));
            }
        }

        let mut bundles = HashMap::with_capacity(chosen.len());
        for (locale, (format, path)) in chosen {
            let bundle = Self::load_file(&path, format)?;
            bundles.insert(locale, bundle);
        }

        info!("Loaded {} bundles from {:?}", bundles.len(), self.dir);
        Ok(bundles)
    }

    fn not_found(&self, locale: &str) -> L10nError {
        L10nError::BundleNotFound {
            locale: locale.to_string(),
            dir: self.dir.to_string_lossy().to_string(),
        }
    }

    fn load_file<T: DeserializeOwned>(path: &Path, format: BundleFormat) -> L10nResult<T> {
        debug!("Loading bundle file: {:?}", path);
        let content = fs::read_to_string(path)?;
        parse_bundle_at(format, &content, &path.to_string_lossy())
    }
}

/// A single normal path component, so joining it stays inside the directory
fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains(['/', '\\'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct General {
        foo: String,
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            BundleFormat::from_path(Path::new("de.json")),
            Some(BundleFormat::Json)
        );
        assert_eq!(
            BundleFormat::from_path(Path::new("en-US.toml")),
            Some(BundleFormat::Toml)
        );
        assert_eq!(BundleFormat::from_path(Path::new("README.md")), None);
        assert_eq!(BundleFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_format_priority_follows_lookup_order() {
        assert!(BundleFormat::Json < BundleFormat::Toml);
        assert_eq!(BundleFormat::ALL, [BundleFormat::Json, BundleFormat::Toml]);
    }

    #[test]
    fn test_plain_file_name() {
        assert!(is_plain_file_name("en"));
        assert!(is_plain_file_name("en-US"));
        assert!(is_plain_file_name("x..y"));
        assert!(!is_plain_file_name(""));
        assert!(!is_plain_file_name("."));
        assert!(!is_plain_file_name(".."));
        assert!(!is_plain_file_name("../secret"));
        assert!(!is_plain_file_name("nested/en"));
        assert!(!is_plain_file_name("nested\\en"));
        assert!(!is_plain_file_name("/etc/passwd"));
    }

    #[test]
    fn test_parse_json_and_toml() {
        let json: General = parse_bundle(BundleFormat::Json, r#"{"foo": "the foo"}"#).unwrap();
        let from_toml: General = parse_bundle(BundleFormat::Toml, r#"foo = "the foo""#).unwrap();
        assert_eq!(json, from_toml);
    }

    #[test]
    fn test_parse_error_names_origin() {
        let err = parse_bundle::<General>(BundleFormat::Json, "{").unwrap_err();
        assert!(matches!(err, L10nError::BundleParse { ref path, .. } if path == "<inline>"));
    }
}
