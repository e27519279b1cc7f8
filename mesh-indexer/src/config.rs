//! Indexer configuration (TOML)
//!
//! ```toml
//! [source]
//! flip_z = true
//!
//! [build]
//! parallel = false
//!
//! [export]
//! flip_winding = false
//! ```

use serde::Deserialize;

use crate::error::MeshError;

/// Top-level configuration; every section and field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IndexerConfig {
    #[serde(default)]
    pub source: SourceSection,
    #[serde(default)]
    pub build: BuildSection,
    #[serde(default)]
    pub export: ExportSection,
}

/// How source geometry is read
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceSection {
    /// Negate position.z and normal.z (right-handed source, left-handed target).
    /// Default: true
    #[serde(default = "default_flip_z")]
    pub flip_z: bool,
}

impl Default for SourceSection {
    fn default() -> Self {
        Self {
            flip_z: default_flip_z(),
        }
    }
}

fn default_flip_z() -> bool {
    true
}

/// Build configuration section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BuildSection {
    /// Weld submeshes on rayon workers. Needs the `parallel` feature.
    /// Default: false
    #[serde(default)]
    pub parallel: bool,
}

/// Export configuration section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExportSection {
    /// Swap the 2nd and 3rd index of every triangle on export.
    /// Default: false
    #[serde(default)]
    pub flip_winding: bool,
}

impl IndexerConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, MeshError> {
        Ok(toml::from_str(s)?)
    }
}
