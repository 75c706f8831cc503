//! File format parsers and the extension registry that selects them.
//!
//! The file extension is the only format signal; content is never sniffed.

use crate::error::{ConfigError, ConfigResult};
use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;
use tracing::warn;

use super::Node;

/// Supported file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Decode raw file contents into an untyped tree.
    ///
    /// `path` is only used for error reporting.
    pub fn parse(self, contents: &[u8], path: &Path) -> ConfigResult<Node> {
        match self {
            Format::Json => serde_json::from_slice::<Value>(contents)
                .map_err(|e| ConfigError::invalid_file(path, self, e)),
            // Single document only; serde_yaml rejects multi-document streams.
            Format::Yaml => serde_yaml::from_slice::<Value>(contents)
                .map_err(|e| ConfigError::invalid_file(path, self, e)),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => write!(f, "JSON"),
            Format::Yaml => write!(f, "YAML"),
        }
    }
}

/// Parse a file and require a mapping at its root.
///
/// A whitespace-only YAML file counts as an empty mapping. Any other
/// non-mapping root, including a decoded null, is rejected.
pub fn parse_document(format: Format, contents: &[u8], path: &Path) -> ConfigResult<Node> {
    if format == Format::Yaml && contents.iter().all(u8::is_ascii_whitespace) {
        warn!(path = %path.display(), "Empty configuration document, treating as empty mapping");
        return Ok(Value::Object(Map::new()));
    }

    match format.parse(contents, path)? {
        root @ Value::Object(_) => Ok(root),
        _ => Err(ConfigError::invalid_file(path, format, "root must be a mapping")),
    }
}

/// Maps file extensions to the format that decodes them.
///
/// Lookup is case-sensitive. Registration order is kept so diagnostics list
/// extensions the same way every time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserRegistry {
    entries: Vec<(String, Format)>,
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self {
            entries: vec![
                ("json".to_string(), Format::Json),
                ("yml".to_string(), Format::Yaml),
                ("yaml".to_string(), Format::Yaml),
            ],
        }
    }
}

impl ParserRegistry {
    /// Create a registry with no extensions registered.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Map `extension` to `format`, replacing any existing mapping in place.
    pub fn register(&mut self, extension: impl Into<String>, format: Format) {
        let extension = extension.into();
        match self.entries.iter_mut().find(|(ext, _)| *ext == extension) {
            Some(entry) => entry.1 = format,
            None => self.entries.push((extension, format)),
        }
    }

    /// Builder form of [`ParserRegistry::register`].
    pub fn with_extension(mut self, extension: impl Into<String>, format: Format) -> Self {
        self.register(extension, format);
        self
    }

    /// Registered extensions, in registration order.
    pub fn extensions(&self) -> Vec<String> {
        self.entries.iter().map(|(ext, _)| ext.clone()).collect()
    }

    /// Look up the format for a file extension (without the dot).
    pub fn resolve(&self, extension: &str) -> Option<Format> {
        self.entries
            .iter()
            .find(|(ext, _)| ext == extension)
            .map(|(_, format)| *format)
    }

    /// Determine the format of `path` from its extension.
    ///
    /// A dotfile such as `.json` takes everything after the leading dot as
    /// its extension.
    pub fn format_for(&self, path: &Path) -> ConfigResult<Format> {
        let extension = match path.extension() {
            Some(ext) => ext.to_string_lossy().into_owned(),
            None => path
                .file_name()
                .map(|name| name.to_string_lossy())
                .and_then(|name| name.strip_prefix('.').map(str::to_owned))
                .unwrap_or_default(),
        };

        self.resolve(&extension)
            .ok_or_else(|| ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
                supported: self.extensions(),
            })
    }
}
