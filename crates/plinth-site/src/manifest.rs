//! Page manifest loaded from `config.json`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::builder::BuildError;

/// One page to generate: which template to render, where to publish it,
/// and the variables available to the template body.
#[derive(Debug, Clone, Deserialize)]
pub struct PageDescriptor {
    /// Template path, relative to the templates directory.
    pub template: String,

    /// Site-relative URL the page is published at. A leading `/` is
    /// stripped before the output path is computed.
    pub url: String,

    /// Top-level variable bindings passed verbatim to the template.
    pub context: serde_json::Map<String, serde_json::Value>,
}

/// The ordered list of pages to generate. Order only determines render
/// sequence; pages sharing a `url` overwrite each other, last one wins.
pub type Manifest = Vec<PageDescriptor>;

/// Load and parse `config.json` from the input directory.
///
/// Missing file and malformed JSON (including missing `url`/`context`
/// fields) are both fatal; there is no defaulting.
pub fn load(input_dir: &Path) -> Result<Manifest, BuildError> {
    let path = input_dir.join("config.json");

    if !path.is_file() {
        return Err(BuildError::ConfigMissing { path });
    }

    let raw = fs::read_to_string(&path).map_err(|source| BuildError::Io {
        path: path.clone(),
        source,
    })?;

    let manifest: Manifest =
        serde_json::from_str(&raw).map_err(|source| BuildError::ConfigInvalid { path, source })?;

    tracing::debug!("Loaded manifest with {} page(s)", manifest.len());

    Ok(manifest)
}
