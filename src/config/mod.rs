//! Layered configuration.
//!
//! Files are loaded in order and folded into a single tree:
//! 1. **Parser registry** - file extension selects the format (`json`, `yml`, `yaml`)
//! 2. **Parsers** - JSON and YAML decode into the same untyped tree
//! 3. **Merge** - each file is deep-merged over the tree so far, later files win
//! 4. **Lookup** - dotted keys such as `database.host` walk the merged tree
//!
//! ## Merge Strategy
//! - Mappings: merged key by key, recursively
//! - Sequences and scalars: replaced by the later value

mod loader;
mod merge;
mod parser;
pub mod path;

pub use loader::Config;
pub use merge::{deep_merge, deep_merge_all};
pub use parser::{Format, ParserRegistry, parse_document};

/// Untyped configuration tree.
///
/// Mappings are `Value::Object`, sequences are `Value::Array`, and every other
/// variant is a scalar.
pub type Node = serde_json::Value;
