//! Static site generator driven by a JSON page manifest.
//!
//! Renders one HTML page per manifest entry from a directory of minijinja
//! templates and copies a static asset subtree verbatim into the output.

pub mod assets;
pub mod builder;
pub mod manifest;
pub mod templates;

pub use builder::{BuildConfig, BuildError, BuildResult, SiteBuilder};
pub use manifest::{Manifest, PageDescriptor};
