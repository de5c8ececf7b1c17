//! Site builder: orchestrates manifest load, output preparation, and the
//! sequential render-and-write loop.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::assets;
use crate::manifest;
use crate::templates::TemplateEngine;

/// Configuration for one build invocation.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Input directory holding `config.json`, `templates/` and an
    /// optional `static/` subtree.
    pub input_dir: PathBuf,

    /// Explicit output directory. When `None`, defaults to
    /// `<input_dir>/html`.
    pub output: Option<PathBuf>,
}

/// Result of a successful build.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages rendered
    pub pages: usize,

    /// Number of static asset files copied
    pub assets: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that abort a build. Every variant is fatal; the first one
/// encountered terminates the run with no rollback of files already
/// written.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("config file not found: {path}")]
    ConfigMissing { path: PathBuf },

    #[error("failed to parse {path}: {source}")]
    ConfigInvalid {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("default output directory already exists: {path}")]
    DefaultOutputExists { path: PathBuf },

    #[error("output directory already exists: {path}")]
    OutputExists { path: PathBuf },

    #[error("template '{name}': {source}")]
    Template {
        name: String,
        source: minijinja::Error,
    },

    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Manifest-driven static site builder.
pub struct SiteBuilder {
    config: BuildConfig,
}

impl SiteBuilder {
    /// Create a new site builder.
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Build the site: load the manifest, prepare the output root (seeding
    /// it from `static/` when present), then render and write each page in
    /// manifest order.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let pages = manifest::load(&self.config.input_dir)?;

        let output_dir = self.prepare_output()?;
        let assets = self.copy_static(&output_dir)?;

        let engine = TemplateEngine::new(&self.config.input_dir);

        for page in &pages {
            let html = engine.render(page)?;
            let dst = write_page(&output_dir, &page.url, &html)?;
            tracing::info!("Rendered {} -> {}", page.template, dst.display());
        }

        Ok(BuildResult {
            pages: pages.len(),
            assets,
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir,
        })
    }

    /// Resolve the output root and enforce the no-overwrite rule: a
    /// pre-existing output path is a conflict, reported differently for
    /// the defaulted and the explicitly given case.
    fn prepare_output(&self) -> Result<PathBuf, BuildError> {
        let (output_dir, explicit) = match &self.config.output {
            Some(path) => (path.clone(), true),
            None => (self.config.input_dir.join("html"), false),
        };

        if output_dir.exists() {
            return Err(if explicit {
                BuildError::OutputExists { path: output_dir }
            } else {
                BuildError::DefaultOutputExists { path: output_dir }
            });
        }

        Ok(output_dir)
    }

    /// Seed the output root. If `<input_dir>/static/` is a directory its
    /// contents are copied verbatim, creating the root as a side effect;
    /// otherwise the root is created empty.
    fn copy_static(&self, output_dir: &Path) -> Result<usize, BuildError> {
        let static_dir = self.config.input_dir.join("static");

        if static_dir.is_dir() {
            assets::copy_tree(&static_dir, output_dir)
        } else {
            fs::create_dir_all(output_dir).map_err(|source| BuildError::Io {
                path: output_dir.to_path_buf(),
                source,
            })?;
            Ok(0)
        }
    }
}

/// Write a rendered page body to `<output_root>/<url>/index.html`,
/// stripping any leading slashes from the url first. An existing
/// `index.html` at that path is silently overwritten.
fn write_page(output_dir: &Path, url: &str, html: &str) -> Result<PathBuf, BuildError> {
    // trim all leading slashes so the join stays under the output root
    let page_dir = output_dir.join(url.trim_start_matches('/'));

    fs::create_dir_all(&page_dir).map_err(|source| BuildError::Io {
        path: page_dir.clone(),
        source,
    })?;

    let path = page_dir.join("index.html");
    fs::write(&path, html).map_err(|source| BuildError::Io {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}
