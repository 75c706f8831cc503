//! Configuration facade: loads files in order and merges them into one tree.

use super::merge::deep_merge;
use super::parser::{ParserRegistry, parse_document};
use super::{Node, path};
use crate::error::{ConfigError, ConfigResult};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Accumulated configuration built from successive [`Config::load`] calls.
///
/// Each loaded file is deep-merged on top of what was loaded before it, so
/// later files override earlier ones. Loading stops at the first failure;
/// files merged before that point stay merged.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory relative paths are resolved against
    base_dir: PathBuf,
    /// Extension to format table
    registry: ParserRegistry,
    /// Merged tree, always a mapping
    config: Node,
    /// Files merged so far, in merge order
    sources: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Config {
    /// Create an empty configuration rooted at `base_dir`.
    ///
    /// The directory is not checked until the first load.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self::with_registry(base_dir, ParserRegistry::default())
    }

    /// Create an empty configuration with a custom parser registry.
    pub fn with_registry(base_dir: impl Into<PathBuf>, registry: ParserRegistry) -> Self {
        Self {
            base_dir: base_dir.into(),
            registry,
            config: Value::Object(Map::new()),
            sources: Vec::new(),
        }
    }

    /// Load and merge each file in order.
    ///
    /// Relative paths are joined onto the base directory. The first missing,
    /// unsupported, or malformed file aborts the call.
    pub fn load<I, P>(&mut self, paths: I) -> ConfigResult<()>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        debug!(base_dir = %self.base_dir.display(), "Configuration load started");
        let before = self.sources.len();
        for relative_path in paths {
            self.load_file(relative_path)?;
        }
        debug!(
            base_dir = %self.base_dir.display(),
            loaded = self.sources.len() - before,
            "Configuration load finished"
        );
        Ok(())
    }

    /// Load and merge a single file.
    pub fn load_file(&mut self, relative_path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = self.base_dir.join(relative_path.as_ref());
        if !path.exists() {
            return Err(ConfigError::missing_file(path));
        }

        let format = self.registry.format_for(&path)?;
        let contents = std::fs::read(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let incoming = parse_document(format, &contents, &path)?;

        debug!(
            path = %path.display(),
            %format,
            keys = incoming.as_object().map_or(0, Map::len),
            "Merging configuration file"
        );

        let current = std::mem::take(&mut self.config);
        self.config = deep_merge(current, incoming);
        self.sources.push(path);
        Ok(())
    }

    /// The full merged tree.
    pub fn get_all(&self) -> &Node {
        &self.config
    }

    /// Look up a dotted key such as `database.host`.
    pub fn get(&self, key: &str) -> ConfigResult<&Node> {
        path::resolve(&self.config, key)
    }

    /// Whether a dotted key resolves.
    pub fn has(&self, key: &str) -> bool {
        path::contains(&self.config, key)
    }

    /// Files merged so far, as resolved paths in merge order.
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn registry(&self) -> &ParserRegistry {
        &self.registry
    }

    /// Consume the configuration and return the merged tree.
    pub fn into_inner(self) -> Node {
        self.config
    }
}
